use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{Display, EnumString};
use utoipa::ToSchema;

use crate::error::{UserError, UserResult};

/// User status. `Inactive` is the soft-delete tombstone.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    ToSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
}

/// Role label assigned at creation. Open set; see [`RoleCatalog`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = String, example = "ADMIN")]
pub struct Role(String);

impl Role {
    pub fn new(role: impl Into<String>) -> Self {
        Self(role.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Role {
    fn from(role: &str) -> Self {
        Self::new(role)
    }
}

/// Roles accepted on creation. An empty catalog accepts any non-blank role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleCatalog {
    allowed: Vec<Role>,
}

impl RoleCatalog {
    pub fn new<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: roles.into_iter().map(Role::new).collect(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.allowed.is_empty()
    }

    pub fn check(&self, role: &Role) -> UserResult<()> {
        if role.as_str().trim().is_empty() {
            return Err(UserError::InvalidInput("Role must not be blank".to_string()));
        }

        if self.is_open() || self.allowed.contains(role) {
            Ok(())
        } else {
            let allowed: Vec<&str> = self.allowed.iter().map(Role::as_str).collect();
            Err(UserError::InvalidInput(format!(
                "Unknown role '{}'. Allowed roles: {}",
                role,
                allowed.join(", ")
            )))
        }
    }
}

/// User entity as exposed by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Store-assigned identifier
    #[schema(example = "665f1c2e9b1d4a0012345678")]
    pub user_id: String,
    pub institution_id: Option<String>,
    #[schema(example = "Ana")]
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[schema(example = "DNI")]
    pub document_type: Option<String>,
    pub document_number: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub email: Option<String>,
    pub user_name: Option<String>,
    /// Fixed at creation
    pub role: Role,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A fully stamped user that the store has not yet assigned an id to.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub institution_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub document_type: Option<String>,
    pub document_number: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub email: Option<String>,
    pub user_name: Option<String>,
    pub role: Role,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewUser {
    pub fn into_user(self, user_id: String) -> User {
        User {
            user_id,
            institution_id: self.institution_id,
            first_name: self.first_name,
            last_name: self.last_name,
            document_type: self.document_type,
            document_number: self.document_number,
            phone: self.phone,
            address: self.address,
            email: self.email,
            user_name: self.user_name,
            role: self.role,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// DTO for creating a user.
///
/// Client-supplied `userId`, `createdAt` and `updatedAt` are not part of the
/// payload and are dropped during deserialization.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    pub institution_id: Option<String>,
    #[schema(example = "Ana")]
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub document_type: Option<String>,
    pub document_number: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub email: Option<String>,
    pub user_name: Option<String>,
    pub role: Role,
    /// Defaults to `ACTIVE`
    pub status: Option<UserStatus>,
}

/// DTO for updating a user.
///
/// Contact fields replace the stored values, so an absent field clears it.
/// `status` is applied only when present. A `role` in the payload is ignored.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    pub institution_id: Option<String>,
    #[schema(example = "Ana Maria")]
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub document_type: Option<String>,
    pub document_number: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub email: Option<String>,
    pub user_name: Option<String>,
    pub status: Option<UserStatus>,
}
