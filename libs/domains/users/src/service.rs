//! User Service - lifecycle rules
//!
//! All field-merge and status-transition rules live here. Lookups that miss
//! come back as `Ok(None)` so callers can tell "absent" from "failed".

use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use crate::error::UserResult;
use crate::models::{CreateUser, NewUser, RoleCatalog, UpdateUser, User, UserStatus};
use crate::repository::UserRepository;

pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
    roles: RoleCatalog,
}

impl<R: UserRepository> UserService<R> {
    /// Service accepting any non-blank role.
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
            roles: RoleCatalog::default(),
        }
    }

    pub fn with_roles(mut self, roles: RoleCatalog) -> Self {
        self.roles = roles;
        self
    }

    #[instrument(skip(self))]
    pub async fn list_users(&self) -> UserResult<Vec<User>> {
        let users = self
            .repository
            .find_all()
            .await
            .inspect_err(|e| error!(error = %e, "Failed to list users"))?;

        info!(count = users.len(), "Users listed");
        Ok(users)
    }

    #[instrument(skip(self))]
    pub async fn list_users_by_status(&self, status: UserStatus) -> UserResult<Vec<User>> {
        let users = self
            .repository
            .find_by_status(status)
            .await
            .inspect_err(|e| error!(error = %e, "Failed to list users by status"))?;

        info!(count = users.len(), "Users listed by status");
        Ok(users)
    }

    #[instrument(skip(self))]
    pub async fn get_user(&self, id: &str) -> UserResult<Option<User>> {
        let user = self
            .repository
            .find_by_id(id)
            .await
            .inspect_err(|e| error!(error = %e, "Failed to fetch user"))?;

        if user.is_none() {
            warn!("User not found");
        }
        Ok(user)
    }

    /// Stamps timestamps, defaults the status to `ACTIVE` and persists.
    #[instrument(skip(self, input), fields(role = %input.role))]
    pub async fn create_user(&self, input: CreateUser) -> UserResult<User> {
        self.roles.check(&input.role)?;

        let now = Utc::now();
        let new_user = NewUser {
            institution_id: input.institution_id,
            first_name: input.first_name,
            last_name: input.last_name,
            document_type: input.document_type,
            document_number: input.document_number,
            phone: input.phone,
            address: input.address,
            email: input.email,
            user_name: input.user_name,
            role: input.role,
            status: input.status.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };

        let user = self
            .repository
            .insert(new_user)
            .await
            .inspect_err(|e| error!(error = %e, "Failed to create user"))?;

        info!(user_id = %user.user_id, "User created");
        Ok(user)
    }

    /// Overwrites the contact fields, applies `status` when given and keeps
    /// `role` and `created_at` as stored.
    #[instrument(skip(self, input))]
    pub async fn update_user(&self, id: &str, input: UpdateUser) -> UserResult<Option<User>> {
        self.modify(id, "update", move |user| {
            user.institution_id = input.institution_id;
            user.first_name = input.first_name;
            user.last_name = input.last_name;
            user.document_type = input.document_type;
            user.document_number = input.document_number;
            user.phone = input.phone;
            user.address = input.address;
            user.email = input.email;
            user.user_name = input.user_name;
            if let Some(status) = input.status {
                user.status = status;
            }
        })
        .await
    }

    /// Soft delete: marks the user `INACTIVE`. Repeating it is harmless.
    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: &str) -> UserResult<Option<User>> {
        self.modify(id, "delete", |user| user.status = UserStatus::Inactive)
            .await
    }

    /// Reverses a soft delete by marking the user `ACTIVE`.
    #[instrument(skip(self))]
    pub async fn restore_user(&self, id: &str) -> UserResult<Option<User>> {
        self.modify(id, "restore", |user| user.status = UserStatus::Active)
            .await
    }

    /// One fetch, then at most one save. Nothing is written for a missing id.
    async fn modify<F>(&self, id: &str, action: &str, apply: F) -> UserResult<Option<User>>
    where
        F: FnOnce(&mut User),
    {
        let Some(mut user) = self
            .repository
            .find_by_id(id)
            .await
            .inspect_err(|e| error!(error = %e, action, "Failed to fetch user"))?
        else {
            warn!(action, "User not found");
            return Ok(None);
        };

        apply(&mut user);
        user.updated_at = next_timestamp(user.updated_at, Utc::now());

        let saved = self
            .repository
            .save(user)
            .await
            .inspect_err(|e| error!(error = %e, action, "Failed to save user"))?;

        info!(user_id = %saved.user_id, status = %saved.status, action, "User modified");
        Ok(Some(saved))
    }
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            roles: self.roles.clone(),
        }
    }
}

/// `updated_at` must strictly increase even if the clock has not moved.
fn next_timestamp(previous: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UserError;
    use crate::models::Role;
    use crate::repository::MockUserRepository;

    fn stored_user(id: &str, status: UserStatus) -> User {
        let created = Utc::now() - Duration::hours(1);
        User {
            user_id: id.to_string(),
            institution_id: Some("inst-1".into()),
            first_name: Some("Ana".into()),
            last_name: Some("Lopez".into()),
            document_type: Some("DNI".into()),
            document_number: Some("12345678".into()),
            phone: Some("999".into()),
            address: None,
            email: Some("ana@example.com".into()),
            user_name: Some("ana".into()),
            role: Role::from("ADMIN"),
            status,
            created_at: created,
            updated_at: created,
        }
    }

    fn create_input(role: &str, status: Option<UserStatus>) -> CreateUser {
        CreateUser {
            institution_id: None,
            first_name: Some("Ana".into()),
            last_name: None,
            document_type: None,
            document_number: None,
            phone: None,
            address: None,
            email: None,
            user_name: None,
            role: Role::from(role),
            status,
        }
    }

    fn expect_find(mock: &mut MockUserRepository, id: &'static str, found: Option<User>) {
        mock.expect_find_by_id()
            .withf(move |requested| requested == id)
            .times(1)
            .returning(move |_| Ok(found.clone()));
    }

    #[tokio::test]
    async fn test_create_user_defaults_status_and_stamps_timestamps() {
        let mut mock = MockUserRepository::new();
        mock.expect_insert()
            .times(1)
            .returning(|new_user| Ok(new_user.into_user("generated".into())));

        let service = UserService::new(mock);
        let user = service.create_user(create_input("ADMIN", None)).await.unwrap();

        assert_eq!(user.user_id, "generated");
        assert_eq!(user.status, UserStatus::Active);
        assert_eq!(user.role, Role::from("ADMIN"));
        assert_eq!(user.created_at, user.updated_at);
    }

    #[tokio::test]
    async fn test_create_user_keeps_explicit_status() {
        let mut mock = MockUserRepository::new();
        mock.expect_insert()
            .times(1)
            .returning(|new_user| Ok(new_user.into_user("generated".into())));

        let service = UserService::new(mock);
        let user = service
            .create_user(create_input("USER", Some(UserStatus::Inactive)))
            .await
            .unwrap();

        assert_eq!(user.status, UserStatus::Inactive);
    }

    #[tokio::test]
    async fn test_create_user_rejects_role_outside_catalog() {
        let mut mock = MockUserRepository::new();
        mock.expect_insert().never();

        let service = UserService::new(mock).with_roles(RoleCatalog::new(["ADMIN", "USER"]));
        let result = service.create_user(create_input("ROOT", None)).await;

        assert!(matches!(result, Err(UserError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_create_user_propagates_store_failure() {
        let mut mock = MockUserRepository::new();
        mock.expect_insert()
            .times(1)
            .returning(|_| Err(UserError::Database("connection refused".into())));

        let service = UserService::new(mock);
        let result = service.create_user(create_input("ADMIN", None)).await;

        assert!(matches!(result, Err(UserError::Database(_))));
    }

    #[tokio::test]
    async fn test_get_user_missing_is_none() {
        let mut mock = MockUserRepository::new();
        expect_find(&mut mock, "missing", None);

        let service = UserService::new(mock);
        assert!(service.get_user("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_user_never_changes_role_or_created_at() {
        let existing = stored_user("u1", UserStatus::Active);
        let created_at = existing.created_at;

        let mut mock = MockUserRepository::new();
        expect_find(&mut mock, "u1", Some(existing));
        mock.expect_save().times(1).returning(Ok);

        let service = UserService::new(mock);
        let input = UpdateUser {
            first_name: Some("Ana Maria".into()),
            ..Default::default()
        };
        let user = service.update_user("u1", input).await.unwrap().unwrap();

        assert_eq!(user.first_name.as_deref(), Some("Ana Maria"));
        assert_eq!(user.role, Role::from("ADMIN"));
        assert_eq!(user.created_at, created_at);
        assert!(user.updated_at > created_at);
    }

    #[tokio::test]
    async fn test_update_user_clears_absent_fields_and_keeps_status() {
        let mut mock = MockUserRepository::new();
        expect_find(&mut mock, "u1", Some(stored_user("u1", UserStatus::Inactive)));
        mock.expect_save().times(1).returning(Ok);

        let service = UserService::new(mock);
        let user = service
            .update_user("u1", UpdateUser::default())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(user.status, UserStatus::Inactive);
        assert!(user.first_name.is_none());
        assert!(user.email.is_none());
        assert!(user.document_number.is_none());
    }

    #[tokio::test]
    async fn test_update_user_applies_explicit_status() {
        let mut mock = MockUserRepository::new();
        expect_find(&mut mock, "u1", Some(stored_user("u1", UserStatus::Active)));
        mock.expect_save().times(1).returning(Ok);

        let service = UserService::new(mock);
        let input = UpdateUser {
            status: Some(UserStatus::Inactive),
            ..Default::default()
        };
        let user = service.update_user("u1", input).await.unwrap().unwrap();

        assert_eq!(user.status, UserStatus::Inactive);
    }

    #[tokio::test]
    async fn test_missing_user_is_never_written() {
        let mut mock = MockUserRepository::new();
        mock.expect_find_by_id().times(3).returning(|_| Ok(None));
        mock.expect_save().never();

        let service = UserService::new(mock);
        assert!(service.update_user("x", UpdateUser::default()).await.unwrap().is_none());
        assert!(service.delete_user("x").await.unwrap().is_none());
        assert!(service.restore_user("x").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_then_restore_advances_updated_at() {
        let existing = stored_user("u1", UserStatus::Active);
        let before = existing.updated_at;

        let mut mock = MockUserRepository::new();
        expect_find(&mut mock, "u1", Some(existing));
        mock.expect_save().times(1).returning(Ok);

        let service = UserService::new(mock);
        let deleted = service.delete_user("u1").await.unwrap().unwrap();
        assert_eq!(deleted.status, UserStatus::Inactive);
        assert!(deleted.updated_at > before);

        let mut mock = MockUserRepository::new();
        let stored = deleted.clone();
        mock.expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(stored.clone())));
        mock.expect_save().times(1).returning(Ok);

        let service = UserService::new(mock);
        let restored = service.restore_user("u1").await.unwrap().unwrap();
        assert_eq!(restored.status, UserStatus::Active);
        assert!(restored.updated_at > deleted.updated_at);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let mut mock = MockUserRepository::new();
        expect_find(&mut mock, "u1", Some(stored_user("u1", UserStatus::Inactive)));
        mock.expect_save().times(1).returning(Ok);

        let service = UserService::new(mock);
        let user = service.delete_user("u1").await.unwrap().unwrap();
        assert_eq!(user.status, UserStatus::Inactive);
    }

    #[tokio::test]
    async fn test_save_failure_propagates() {
        let mut mock = MockUserRepository::new();
        expect_find(&mut mock, "u1", Some(stored_user("u1", UserStatus::Active)));
        mock.expect_save()
            .times(1)
            .returning(|_| Err(UserError::Database("write conflict".into())));

        let service = UserService::new(mock);
        assert!(matches!(
            service.restore_user("u1").await,
            Err(UserError::Database(_))
        ));
    }

    #[test]
    fn test_next_timestamp_is_strictly_increasing() {
        let previous = Utc::now();
        assert_eq!(
            next_timestamp(previous, previous),
            previous + Duration::microseconds(1)
        );

        let earlier = previous - Duration::seconds(5);
        assert!(next_timestamp(previous, earlier) > previous);

        let later = previous + Duration::seconds(5);
        assert_eq!(next_timestamp(previous, later), later);
    }
}
