//! Domain-level constants.
//!
//! These constants define business rules and query defaults.

// =============================================================================
// Resources
// =============================================================================

/// Resource name reported in errors about users
pub const RESOURCE_USER: &str = "user";

/// Resource name reported in errors about products
pub const RESOURCE_PRODUCT: &str = "product";

// =============================================================================
// Pagination
// =============================================================================

/// Page used when the requested page is below 1
pub const DEFAULT_PAGE_NUMBER: i32 = 1;

/// Page size used when the requested page size is below 1
pub const DEFAULT_PAGE_SIZE: i32 = 10;

// =============================================================================
// User sorting
// =============================================================================

/// Sort users by username
pub const SORT_BY_USERNAME: &str = "username";

/// Sort users by email
pub const SORT_BY_EMAIL: &str = "email";

/// Sort users by full name
pub const SORT_BY_FULL_NAME: &str = "full_name";

/// Sort users by creation time
pub const SORT_BY_CREATED_AT: &str = "created_at";
