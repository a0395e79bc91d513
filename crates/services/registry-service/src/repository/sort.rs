//! Result ordering.

use std::cmp::Ordering;

use domain::{
    Product, User, SORT_BY_CREATED_AT, SORT_BY_EMAIL, SORT_BY_FULL_NAME, SORT_BY_USERNAME,
};

/// Field users are ordered by, ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserSortKey {
    Username,
    Email,
    FullName,
    CreatedAt,
    /// Identifier compared as a plain string, so "10" sorts before "2"
    #[default]
    Id,
}

impl UserSortKey {
    /// Unknown or absent names fall back to [`UserSortKey::Id`].
    pub fn parse(name: Option<&str>) -> Self {
        match name {
            Some(SORT_BY_USERNAME) => UserSortKey::Username,
            Some(SORT_BY_EMAIL) => UserSortKey::Email,
            Some(SORT_BY_FULL_NAME) => UserSortKey::FullName,
            Some(SORT_BY_CREATED_AT) => UserSortKey::CreatedAt,
            _ => UserSortKey::Id,
        }
    }

    fn compare(self, a: &User, b: &User) -> Ordering {
        match self {
            UserSortKey::Username => a.username.cmp(&b.username),
            UserSortKey::Email => a.email.cmp(&b.email),
            UserSortKey::FullName => a.full_name.cmp(&b.full_name),
            UserSortKey::CreatedAt => a.created_at.cmp(&b.created_at),
            UserSortKey::Id => a.id.cmp(&b.id),
        }
    }
}

/// Stable sort, so ties keep the snapshot's identifier order.
pub fn sort_users(users: &mut [User], key: UserSortKey) {
    users.sort_by(|a, b| key.compare(a, b));
}

/// Products are always listed by name.
pub fn sort_products(products: &mut [Product]) {
    products.sort_by(|a, b| a.name.cmp(&b.name));
}
