//! Role-based registration.
//!
//! One strategy per role, all sharing the same short-circuiting algorithm:
//! field presence, role-specific payload rules, uniqueness probes, then a
//! single persistence step. Nothing is written to the store until every
//! check has passed.

use std::fmt;
use std::str::FromStr;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::users::model::User;
use crate::modules::users::store::UserStore;
use crate::utils::errors::AppError;
use crate::utils::password::PasswordHasher;

use super::model::RegisterRequest;

/// The closed set of account roles.
///
/// Administrators and lecturers are privileged accounts identified by a
/// NIP; students are identified by a NIM. The two identifier namespaces
/// are independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "user_role", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Student,
    Lecturer,
}

impl Role {
    pub fn is_privileged(self) -> bool {
        !matches!(self, Role::Student)
    }

    pub fn identifier_label(self) -> &'static str {
        if self.is_privileged() { "NIP" } else { "NIM" }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Student => "STUDENT",
            Role::Lecturer => "LECTURER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AppError;

    /// Role tags arriving from outside the typed boundary (token claims)
    /// must resolve into the closed set.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Role::Admin),
            "STUDENT" => Ok(Role::Student),
            "LECTURER" => Ok(Role::Lecturer),
            other => Err(AppError::UnsupportedRole(other.to_string())),
        }
    }
}

/// Successful registration outcome: the username as stored and the role
/// the strategy is fixed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationReceipt {
    pub username: String,
    pub role: Role,
}

/// Registration strategy for one role.
///
/// The role is picked by the calling boundary, never by the candidate
/// payload.
#[derive(Debug, Clone, Copy)]
pub struct RegistrationStrategy {
    role: Role,
}

impl RegistrationStrategy {
    pub fn for_role(role: Role) -> Self {
        Self { role }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub async fn register(
        &self,
        users: &UserStore,
        hasher: &PasswordHasher,
        candidate: &RegisterRequest,
    ) -> Result<RegistrationReceipt, AppError> {
        let fields = require_fields(candidate)?;

        if self.role == Role::Student {
            validate_student(&fields)?;
        }

        if users.exists_by_username(fields.username).await? {
            return Err(AppError::DuplicateUsername);
        }

        if self.role == Role::Student
            && users.exists_by_identifier(fields.identifier, false).await?
        {
            return Err(AppError::DuplicateIdentifier);
        }

        // From here on any failure is reported as a persistence failure
        // carrying the underlying message, and is never retried.
        let hashed = hasher.hash(fields.password).map_err(AppError::persistence)?;

        let user = User {
            id: Uuid::new_v4(),
            username: fields.username.to_string(),
            password: hashed,
            full_name: fields.full_name.to_string(),
            is_privileged: self.role.is_privileged(),
            identifier: fields.identifier.to_string(),
            role: self.role,
            created_at: Utc::now(),
        };

        users.insert(&user).await.map_err(AppError::persistence)?;

        Ok(RegistrationReceipt {
            username: user.username,
            role: self.role,
        })
    }
}

#[derive(Debug)]
struct CandidateFields<'a> {
    username: &'a str,
    password: &'a str,
    full_name: &'a str,
    identifier: &'a str,
}

/// Every variant requires the same four fields, present and non-empty.
fn require_fields(candidate: &RegisterRequest) -> Result<CandidateFields<'_>, AppError> {
    let username = candidate.username.as_deref().unwrap_or("");
    let password = candidate.password.as_deref().unwrap_or("");
    let full_name = candidate.full_name.as_deref().unwrap_or("");
    let identifier = candidate.identifier.as_deref().unwrap_or("");

    if username.is_empty() || password.is_empty() || full_name.is_empty() || identifier.is_empty()
    {
        return Err(AppError::InvalidPayload);
    }

    Ok(CandidateFields {
        username,
        password,
        full_name,
        identifier,
    })
}

/// Student-only payload rule, checked before any uniqueness probe.
fn validate_student(fields: &CandidateFields<'_>) -> Result<(), AppError> {
    if !fields.identifier.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::StudentValidation(
            "NIM must be a numeric string".to_string(),
        ));
    }

    Ok(())
}
