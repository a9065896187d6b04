//! Property-based tests for page/limit parsing

use blog_platform::backend::posts::pagination::{PageQuery, PageRequest, MAX_LIMIT};
use proptest::prelude::*;

fn request(page: Option<String>, limit: Option<String>) -> PageRequest {
    PageRequest::from_query(&PageQuery { page, limit })
}

proptest! {
    #[test]
    fn test_parsed_values_are_always_usable(
        page in proptest::option::of(".{0,12}"),
        limit in proptest::option::of(".{0,12}"),
    ) {
        let req = request(page, limit);
        prop_assert!(req.page >= 1);
        prop_assert!((1..=MAX_LIMIT).contains(&req.limit));
    }

    #[test]
    fn test_numeric_values_round_trip(page in 1u64..10_000, limit in 1u64..=MAX_LIMIT) {
        let req = request(Some(page.to_string()), Some(limit.to_string()));
        prop_assert_eq!(req.page, page);
        prop_assert_eq!(req.limit, limit);
        prop_assert_eq!(req.offset(), (page - 1) * limit);
    }

    #[test]
    fn test_pages_cover_total(total in 0u64..100_000, limit in 1u64..=MAX_LIMIT) {
        let req = request(None, Some(limit.to_string()));
        let pages = req.pages(total);
        prop_assert!(pages * limit >= total);
        prop_assert!(pages == 0 || (pages - 1) * limit < total);
    }
}
