//! User entity for the identity store.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::modules::auth::registration::Role;

/// A registered account.
///
/// Immutable after creation. `identifier` is the NIP for privileged
/// accounts (administrators and lecturers) and the NIM for students;
/// `is_privileged` keys which uniqueness scope the identifier lives in.
/// `password` holds the bcrypt hash, never a plaintext, and `id` is
/// generated by the system exactly once, at creation.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub password: String,
    pub full_name: String,
    pub is_privileged: bool,
    pub identifier: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}
