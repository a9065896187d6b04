//! Test server over the in-memory store

use axum_test::TestServer;
use blog_platform::backend::auth::TokenService;
use blog_platform::backend::routes::create_router;
use blog_platform::backend::server::AppState;
use blog_platform::backend::store::MemoryStore;

pub const TEST_SECRET: &str = "integration-test-secret";
pub const TEST_FRONTEND: &str = "http://localhost:3000";

/// Lowest bcrypt cost, keeps registration fast
pub const TEST_BCRYPT_COST: u32 = 4;

pub fn test_tokens() -> TokenService {
    TokenService::new(TEST_SECRET)
}

/// Full router over a fresh store, plus a handle on that store
pub fn create_test_server_with_store() -> (TestServer, MemoryStore) {
    let store = MemoryStore::new();
    let state = AppState::new(store.clone(), test_tokens(), TEST_BCRYPT_COST);
    let server = TestServer::new(create_router(state, TEST_FRONTEND))
        .expect("Failed to create test server");
    (server, store)
}

pub fn create_test_server() -> TestServer {
    create_test_server_with_store().0
}
