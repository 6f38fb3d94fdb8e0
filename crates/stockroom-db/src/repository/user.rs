//! # User Repository
//!
//! Account lookup for the login endpoint. Emails are matched exactly as
//! stored; no case folding or trimming happens here.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use stockroom_core::UserRecord;

#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    password_hash: String,
}

impl From<UserRow> for UserRecord {
    fn from(row: UserRow) -> Self {
        UserRecord {
            id: row.id,
            name: row.name,
            email: row.email,
            password_hash: row.password_hash,
        }
    }
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        UserRepository { pool }
    }

    /// ## Returns
    /// * `Ok(Some(UserRecord))` - An account with exactly this email
    /// * `Ok(None)` - No such account
    pub async fn find_by_email(&self, email: &str) -> DbResult<Option<UserRecord>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email, password_hash
            FROM users
            WHERE email = ?1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        debug!(found = row.is_some(), "User lookup by email");
        Ok(row.map(UserRecord::from))
    }

    /// Creates an account. `password_hash` must already be a PHC string.
    pub async fn insert(&self, name: &str, email: &str, password_hash: &str) -> DbResult<UserRecord> {
        let id = sqlx::query(
            r#"
            INSERT INTO users (name, email, password_hash)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .execute(&self.pool)
        .await
        .map_err(|e| DbError::from(e).with_value(email))?
        .last_insert_rowid();

        Ok(UserRecord {
            id,
            name: name.to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Database, DbConfig};

    async fn repo() -> UserRepository {
        Database::new(DbConfig::in_memory()).await.unwrap().users()
    }

    #[tokio::test]
    async fn test_insert_then_find() {
        let repo = repo().await;
        let created = repo
            .insert("Ada", "ada@example.com", "$argon2id$v=19$stub")
            .await
            .unwrap();

        let found = repo.find_by_email("ada@example.com").await.unwrap();
        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn test_lookup_is_exact() {
        let repo = repo().await;
        repo.insert("Ada", "ada@example.com", "hash").await.unwrap();

        assert!(repo.find_by_email("ADA@example.com").await.unwrap().is_none());
        assert!(repo.find_by_email("nobody@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected() {
        let repo = repo().await;
        repo.insert("Ada", "ada@example.com", "hash").await.unwrap();

        let err = repo
            .insert("Imposter", "ada@example.com", "hash")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DbError::UniqueViolation { ref field, .. } if field == "users.email"
        ));
    }
}
