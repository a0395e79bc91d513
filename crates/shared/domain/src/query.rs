//! Query and result types for list/search operations.

use serde::{Deserialize, Serialize};

/// Parameters for listing users.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ListUsersQuery {
    pub page: i32,
    pub page_size: i32,
    /// `username`, `email`, `full_name` or `created_at`; anything else sorts by id
    pub sort_by: Option<String>,
    /// Case-insensitive substring matched against username, email and full name
    pub filter: Option<String>,
}

/// Parameters for searching products. Every predicate is optional and all
/// supplied predicates must hold.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SearchProductsQuery {
    /// Case-insensitive substring matched against name or description
    pub query: Option<String>,
    /// Case-insensitive exact category
    pub category: Option<String>,
    /// Inclusive lower price bound
    pub min_price: Option<f64>,
    /// Inclusive upper price bound
    pub max_price: Option<f64>,
    pub page: i32,
    pub page_size: i32,
}

/// One page of results together with the resolved paging parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Number of matching items across all pages
    pub total: i32,
    pub page: i32,
    pub page_size: i32,
}

impl<T> Page<T> {
    /// Convert the items while keeping the paging metadata
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            page_size: self.page_size,
        }
    }
}
