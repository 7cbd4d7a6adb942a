use async_trait::async_trait;

use crate::error::UserResult;
use crate::models::{NewUser, Role, User, UserStatus};

/// Persistence contract for users.
///
/// Lookups that can miss return `Option`; only store failures are errors.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_all(&self) -> UserResult<Vec<User>>;

    async fn find_by_id(&self, id: &str) -> UserResult<Option<User>>;

    async fn find_by_status(&self, status: UserStatus) -> UserResult<Vec<User>>;

    async fn find_by_document_number(&self, document_number: &str) -> UserResult<Option<User>>;

    async fn find_by_user_name(&self, user_name: &str) -> UserResult<Option<User>>;

    async fn find_by_institution_id(&self, institution_id: &str) -> UserResult<Vec<User>>;

    async fn find_by_role(&self, role: &Role) -> UserResult<Vec<User>>;

    /// Persist a new user; the store assigns the id.
    async fn insert(&self, user: NewUser) -> UserResult<User>;

    /// Insert or replace by `user_id`.
    async fn save(&self, user: User) -> UserResult<User>;
}
