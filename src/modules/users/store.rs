use sqlx::PgPool;

use super::model::User;

/// Postgres-backed user store, shared by all requests.
///
/// Username is globally unique and identifiers are unique within their
/// privilege scope; both are enforced by unique indexes, so a concurrent
/// duplicate that slips past the pre-checks still fails at
/// [`UserStore::insert`] instead of producing a second row.
#[derive(Clone, Debug)]
pub struct UserStore {
    pool: PgPool,
}

impl UserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn exists_by_username(&self, username: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)")
            .bind(username)
            .fetch_one(&self.pool)
            .await
    }

    /// Existence check scoped to one identifier namespace: NIM
    /// (`privileged = false`) or NIP (`privileged = true`).
    pub async fn exists_by_identifier(
        &self,
        identifier: &str,
        privileged: bool,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE identifier = $1 AND is_privileged = $2)",
        )
        .bind(identifier)
        .bind(privileged)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            "SELECT id, username, password, full_name, is_privileged, identifier, role, created_at
             FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn insert(&self, user: &User) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO users (id, username, password, full_name, is_privileged, identifier, role, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(user.id)
        .bind(&user.username)
        .bind(&user.password)
        .bind(&user.full_name)
        .bind(user.is_privileged)
        .bind(&user.identifier)
        .bind(user.role)
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map(|_| ())
    }
}
