//! Repository layer: the in-memory store and the helpers that query it.

mod filter;
mod id;
mod pagination;
mod record;
mod sort;
mod store;

pub use filter::{ProductSearch, UserFilter};
pub use id::IdGenerator;
pub use pagination::paginate;
pub use record::{Record, UniqueField};
pub use sort::{sort_products, sort_users, UserSortKey};
pub use store::MemoryStore;
