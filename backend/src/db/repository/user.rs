//! User account repository trait.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::models::{NewUser, User, UserId};

/// Repository trait for user accounts.
///
/// Each method is a single standalone statement against the store; there are
/// no transactions or retries. Soft-deleted accounts are invisible to the
/// read methods.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new account and return it with its generated id and
    /// timestamps.
    async fn create_user(&self, user: NewUser) -> RepositoryResult<User>;

    /// Fetch one account.
    ///
    /// # Returns
    /// * `Ok(Some(User))` - The account exists and is not soft-deleted
    /// * `Ok(None)` - No such account
    /// * `Err(RepositoryError)` - If the lookup fails
    async fn get_user_by_id(&self, id: UserId) -> RepositoryResult<Option<User>>;

    /// Replace the name of an account and bump `updated_at`.
    ///
    /// Returns the number of rows touched (0 when the account is missing).
    async fn update_user_name_by_id(&self, id: UserId, new_name: &str) -> RepositoryResult<usize>;

    /// Soft-delete an account by setting `deleted_at`.
    ///
    /// Returns the number of rows touched (0 when the account is missing).
    async fn delete_user_by_id(&self, id: UserId) -> RepositoryResult<usize>;

    /// List all live accounts ordered by id.
    async fn get_all_users(&self) -> RepositoryResult<Vec<User>>;
}
