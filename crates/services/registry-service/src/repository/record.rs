//! Entities that can be kept in a [`MemoryStore`](super::MemoryStore).

use domain::{Product, User, RESOURCE_PRODUCT, RESOURCE_USER};

/// A field whose value must not repeat across live records of one kind.
pub struct UniqueField<V> {
    /// Field name reported in `AlreadyExists` errors
    pub name: &'static str,
    /// Reads the field from a record
    pub get: fn(&V) -> &str,
}

/// A storable entity: it has a store-assigned id and may declare
/// uniqueness constraints.
pub trait Record: Clone + Send + Sync + 'static {
    /// Resource name used in error messages and logs
    const RESOURCE: &'static str;

    fn id(&self) -> &str;

    fn set_id(&mut self, id: String);

    /// Fields checked by the store on every insert and update
    fn unique_fields() -> &'static [UniqueField<Self>] {
        &[]
    }
}

fn username(user: &User) -> &str {
    &user.username
}

fn email(user: &User) -> &str {
    &user.email
}

const USER_UNIQUE_FIELDS: &[UniqueField<User>] = &[
    UniqueField {
        name: "username",
        get: username,
    },
    UniqueField {
        name: "email",
        get: email,
    },
];

impl Record for User {
    const RESOURCE: &'static str = RESOURCE_USER;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn unique_fields() -> &'static [UniqueField<Self>] {
        USER_UNIQUE_FIELDS
    }
}

impl Record for Product {
    const RESOURCE: &'static str = RESOURCE_PRODUCT;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
