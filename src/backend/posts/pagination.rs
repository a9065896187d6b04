//! Page/limit parsing for the post listing.
//!
//! Query values arrive as free text. They are read the way browsers'
//! `parseInt` reads them (leading digits, trailing junk ignored) and fall back
//! to the defaults when absent, non-numeric, zero or negative.

use serde::Deserialize;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;
/// Largest page size served
pub const MAX_LIMIT: u64 = 100;

/// Raw `?page=&limit=` values
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// Resolved pagination window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

impl PageRequest {
    pub fn from_query(query: &PageQuery) -> Self {
        let page = parse_leading_int(query.page.as_deref()).unwrap_or(DEFAULT_PAGE);
        let limit = parse_leading_int(query.limit.as_deref())
            .unwrap_or(DEFAULT_LIMIT)
            .min(MAX_LIMIT);
        Self { page, limit }
    }

    /// Number of posts to skip
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// `ceil(total / limit)`
    pub fn pages(&self, total: u64) -> u64 {
        total.div_ceil(self.limit)
    }
}

/// Leading positive integer, or `None`
///
/// Digits past `u64::MAX` saturate; they are still a number.
fn parse_leading_int(raw: Option<&str>) -> Option<u64> {
    let raw = raw?.trim_start();
    let raw = raw.strip_prefix('+').unwrap_or(raw);
    let end = raw
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(raw.len());
    let digits = &raw[..end];
    if digits.is_empty() {
        return None;
    }
    match digits.parse::<u64>() {
        Ok(0) => None,
        Ok(n) => Some(n),
        Err(_) => Some(u64::MAX),
    }
}
