//
//  gh-rest
//  api/common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Pagination options for GitHub list endpoints.
//!
//! GitHub pages list results with two query parameters that every list
//! endpoint understands:
//!
//! | Parameter | Meaning | Default | Maximum |
//! |-----------|---------|---------|---------|
//! | `page` | 1-based page number | 1 | - |
//! | `per_page` | Items per page | 30 | 100 |
//!
//! The client fetches exactly one page per call; walking the pages is left to
//! the caller.
//!
//! # Example
//!
//! ```rust
//! use gh_rest::api::common::ListOptions;
//! use gh_rest::api::Params;
//!
//! let mut params = Params::new();
//! ListOptions::new().page(2).per_page(50).apply(&mut params);
//! assert_eq!(params.to_query_string(), "?page=2&per_page=50");
//! ```

use crate::api::params::Params;

/// Server default for `per_page`.
pub const DEFAULT_PER_PAGE: u32 = 30;

/// Server maximum for `per_page`.
pub const MAX_PER_PAGE: u32 = 100;

/// The `page` / `per_page` pair accepted by every list endpoint.
///
/// Unset fields are not sent, leaving the server defaults in effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects a 1-based page. `0` is treated as `1`.
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page.max(1));
        self
    }

    /// Sets the page size, clamped to `1..=MAX_PER_PAGE`.
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page.clamp(1, MAX_PER_PAGE));
        self
    }

    /// Writes the set fields into `params`.
    pub fn apply(&self, params: &mut Params) {
        if let Some(page) = self.page {
            params.add("page", page);
        }
        if let Some(per_page) = self.per_page {
            params.add("per_page", per_page);
        }
    }

    pub fn to_params(&self) -> Params {
        let mut params = Params::new();
        self.apply(&mut params);
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_options_add_nothing() {
        assert!(ListOptions::new().to_params().is_empty());
    }

    #[test]
    fn test_bounds_are_enforced() {
        let opts = ListOptions::new().page(0).per_page(500);
        assert_eq!(opts.page, Some(1));
        assert_eq!(opts.per_page, Some(MAX_PER_PAGE));
        assert_eq!(ListOptions::new().per_page(0).per_page, Some(1));
    }

    #[test]
    fn test_apply_overwrites_existing_values() {
        let mut params = Params::new().with("page", 9).with("state", "open");
        ListOptions::new().page(2).apply(&mut params);
        assert_eq!(params.to_query_string(), "?page=2&state=open");
    }
}
