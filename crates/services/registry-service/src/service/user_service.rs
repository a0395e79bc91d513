//! User service - validation, uniqueness and listing for users.

use tracing::{debug, info};

use domain::{CreateUser, DomainError, DomainResult, ListUsersQuery, Page, UpdateUser, User};

use crate::repository::{paginate, sort_users, MemoryStore, UserFilter, UserSortKey};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User operations shared by the gRPC and REST adapters.
///
/// Every call completes without blocking on I/O, so adapters may invoke it
/// directly from async handlers.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait UserService: Send + Sync {
    /// Create an active user with a fresh id
    fn create_user(&self, input: CreateUser) -> DomainResult<User>;

    /// Get a live user by id
    fn get_user(&self, id: &str) -> DomainResult<User>;

    /// Patch a user; absent fields keep their values
    fn update_user(&self, id: &str, patch: UpdateUser) -> DomainResult<User>;

    /// Delete a user, retiring its id
    fn delete_user(&self, id: &str) -> DomainResult<()>;

    /// Filter, sort and paginate users
    fn list_users(&self, query: ListUsersQuery) -> DomainResult<Page<User>>;
}

/// In-memory implementation of [`UserService`].
#[derive(Debug, Default)]
pub struct UserManager {
    store: MemoryStore<User>,
}

impl UserManager {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserService for UserManager {
    fn create_user(&self, input: CreateUser) -> DomainResult<User> {
        if input.username.is_empty() || input.email.is_empty() || input.full_name.is_empty() {
            return Err(DomainError::validation(
                "fields",
                "username, email, and full_name are required",
            ));
        }

        let user = self.store.insert(User::new(input))?;
        info!(user_id = %user.id, username = %user.username, "User created");
        Ok(user)
    }

    fn get_user(&self, id: &str) -> DomainResult<User> {
        self.store.get(id)
    }

    fn update_user(&self, id: &str, patch: UpdateUser) -> DomainResult<User> {
        if patch.is_empty() {
            debug!(user_id = %id, "Empty patch, refreshing updated_at only");
        }

        let user = self.store.update(id, |user| user.apply(patch))?;
        info!(user_id = %user.id, "User updated");
        Ok(user)
    }

    fn delete_user(&self, id: &str) -> DomainResult<()> {
        self.store.remove(id)?;
        info!(user_id = %id, "User deleted");
        Ok(())
    }

    fn list_users(&self, query: ListUsersQuery) -> DomainResult<Page<User>> {
        let filter = UserFilter::new(query.filter.as_deref());
        let mut users = self.store.select(|user| filter.matches(user))?;

        sort_users(&mut users, UserSortKey::parse(query.sort_by.as_deref()));
        Ok(paginate(users, query.page, query.page_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> UserManager {
        let manager = UserManager::new();
        let seeds = [
            ("charlie", "Charlie Brown"),
            ("alice", "Alice Smith"),
            ("bob", "Bob Jones"),
        ];
        for (username, full_name) in seeds {
            manager
                .create_user(CreateUser::new(
                    username,
                    format!("{}@example.com", username),
                    full_name,
                ))
                .unwrap();
        }
        manager
    }

    #[test]
    fn test_create_user_requires_all_fields() {
        let manager = UserManager::new();
        let result = manager.create_user(CreateUser::new("alice", "", "Alice"));

        match result {
            Err(DomainError::ValidationFailed { field, .. }) => assert_eq!(field, "fields"),
            other => panic!("expected validation failure, got {:?}", other),
        }
    }

    #[test]
    fn test_list_users_sorted_by_username() {
        let page = seeded()
            .list_users(ListUsersQuery {
                sort_by: Some("username".to_string()),
                ..Default::default()
            })
            .unwrap();

        let names: Vec<&str> = page.items.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(names, vec!["alice", "bob", "charlie"]);
        assert_eq!(page.total, 3);
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, 10);
    }

    #[test]
    fn test_list_users_filter_ignores_case() {
        let manager = seeded();
        for token in ["alice", "ALICE", "aLiCe"] {
            let page = manager
                .list_users(ListUsersQuery {
                    filter: Some(token.to_string()),
                    ..Default::default()
                })
                .unwrap();
            assert_eq!(page.total, 1);
            assert_eq!(page.items[0].username, "alice");
        }
    }
}
