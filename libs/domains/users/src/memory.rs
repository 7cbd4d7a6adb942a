//! In-process implementation of UserRepository.
//!
//! Backs the test suites and the `memory` storage mode. Ids are UUIDv7, so
//! iteration order follows insertion order.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::instrument;
use uuid::Uuid;

use crate::error::UserResult;
use crate::models::{NewUser, Role, User, UserStatus};
use crate::repository::UserRepository;

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<BTreeMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    async fn filter<F>(&self, predicate: F) -> Vec<User>
    where
        F: Fn(&User) -> bool,
    {
        self.users
            .read()
            .await
            .values()
            .filter(|u| predicate(u))
            .cloned()
            .collect()
    }

    async fn first<F>(&self, predicate: F) -> Option<User>
    where
        F: Fn(&User) -> bool,
    {
        self.users
            .read()
            .await
            .values()
            .find(|u| predicate(u))
            .cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> UserResult<Vec<User>> {
        Ok(self.filter(|_| true).await)
    }

    async fn find_by_id(&self, id: &str) -> UserResult<Option<User>> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn find_by_status(&self, status: UserStatus) -> UserResult<Vec<User>> {
        Ok(self.filter(|u| u.status == status).await)
    }

    async fn find_by_document_number(&self, document_number: &str) -> UserResult<Option<User>> {
        Ok(self
            .first(|u| u.document_number.as_deref() == Some(document_number))
            .await)
    }

    async fn find_by_user_name(&self, user_name: &str) -> UserResult<Option<User>> {
        Ok(self
            .first(|u| u.user_name.as_deref() == Some(user_name))
            .await)
    }

    async fn find_by_institution_id(&self, institution_id: &str) -> UserResult<Vec<User>> {
        Ok(self
            .filter(|u| u.institution_id.as_deref() == Some(institution_id))
            .await)
    }

    async fn find_by_role(&self, role: &Role) -> UserResult<Vec<User>> {
        Ok(self.filter(|u| &u.role == role).await)
    }

    #[instrument(skip(self, user))]
    async fn insert(&self, user: NewUser) -> UserResult<User> {
        let user = user.into_user(Uuid::now_v7().to_string());
        self.users
            .write()
            .await
            .insert(user.user_id.clone(), user.clone());

        tracing::debug!(user_id = %user.user_id, "User inserted");
        Ok(user)
    }

    #[instrument(skip(self, user), fields(user_id = %user.user_id))]
    async fn save(&self, user: User) -> UserResult<User> {
        self.users
            .write()
            .await
            .insert(user.user_id.clone(), user.clone());
        Ok(user)
    }
}
