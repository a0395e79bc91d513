//! Predicates for user listing and product search.

use domain::{Product, SearchProductsQuery, User};

/// Case-insensitive substring filter over username, email and full name.
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    token: String,
}

impl UserFilter {
    /// An absent or empty token matches every user.
    pub fn new(token: Option<&str>) -> Self {
        Self {
            token: token.unwrap_or_default().to_lowercase(),
        }
    }

    pub fn matches(&self, user: &User) -> bool {
        self.token.is_empty()
            || contains(&user.username, &self.token)
            || contains(&user.email, &self.token)
            || contains(&user.full_name, &self.token)
    }
}

/// Conjunction of the optional product search predicates. Absent predicates
/// always hold.
#[derive(Debug, Clone, Default)]
pub struct ProductSearch {
    query: Option<String>,
    category: Option<String>,
    min_price: Option<f64>,
    max_price: Option<f64>,
}

impl ProductSearch {
    pub fn new(query: &SearchProductsQuery) -> Self {
        Self {
            query: query
                .query
                .as_deref()
                .filter(|q| !q.is_empty())
                .map(str::to_lowercase),
            category: query.category.as_deref().map(str::to_lowercase),
            min_price: query.min_price,
            max_price: query.max_price,
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        if let Some(query) = &self.query {
            if !contains(&product.name, query) && !contains(&product.description, query) {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if product.category.to_lowercase() != *category {
                return false;
            }
        }
        if let Some(min) = self.min_price {
            if product.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if product.price > max {
                return false;
            }
        }
        true
    }
}

/// `needle` must already be lowercase.
fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
