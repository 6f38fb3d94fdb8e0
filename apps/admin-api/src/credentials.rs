//! Credential check behind the login endpoint.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  (email, password)                                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  UserDirectory::find_user_by_email(email)   exact match                │
//! │       │                                                                 │
//! │       ├── None ───────────────────────────► AuthOutcome::NotFound      │
//! │       ▼                                                                 │
//! │  verify_password(password, stored hash)                                │
//! │       │                                                                 │
//! │       ├── false ──────────────────────────► AuthOutcome::PasswordMismatch
//! │       ▼                                                                 │
//! │  AuthOutcome::Authenticated { id, name, email }                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The two failure outcomes exist for logging only. The route collapses
//! them into the same 401 body so callers cannot probe which emails exist.
//! An unknown email still pays for one argon2 verification against a
//! placeholder hash, so both failures also take about the same time.

use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use stockroom_core::{AuthenticatedUser, UserRecord};
use stockroom_db::{Database, DbError};

use crate::auth::{hash_password, verify_password};

/// Where accounts are looked up.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRecord>, DbError>;
}

#[async_trait]
impl UserDirectory for Database {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRecord>, DbError> {
        self.users().find_by_email(email).await
    }
}

/// Result of a credential check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Authenticated(AuthenticatedUser),
    NotFound,
    PasswordMismatch,
}

/// Hash checked on the unknown-email path. Built once, on first use.
fn placeholder_hash() -> Option<&'static str> {
    static PLACEHOLDER: OnceLock<Option<String>> = OnceLock::new();
    PLACEHOLDER
        .get_or_init(|| hash_password("stockroom-placeholder-credential").ok())
        .as_deref()
}

/// Checks an email/password pair against a [`UserDirectory`].
#[derive(Clone)]
pub struct CredentialVerifier {
    directory: Arc<dyn UserDirectory>,
}

impl CredentialVerifier {
    pub fn new(directory: Arc<dyn UserDirectory>) -> Self {
        // Keep the one-off hashing cost out of the first failed login
        placeholder_hash();
        CredentialVerifier { directory }
    }

    /// Only a directory failure is an error; bad credentials are an outcome.
    pub async fn verify(&self, email: &str, password: &str) -> Result<AuthOutcome, DbError> {
        let Some(user) = self.directory.find_user_by_email(email).await? else {
            if let Some(hash) = placeholder_hash() {
                verify_password(password, hash);
            }
            return Ok(AuthOutcome::NotFound);
        };

        if !verify_password(password, &user.password_hash) {
            return Ok(AuthOutcome::PasswordMismatch);
        }

        Ok(AuthOutcome::Authenticated(AuthenticatedUser::from(&user)))
    }
}

#[cfg(test)]
pub(crate) mod fakes {
    use super::*;

    /// In-memory directory keyed by exact email.
    pub struct FakeDirectory {
        pub users: Vec<UserRecord>,
        pub fail_with: Option<String>,
    }

    impl FakeDirectory {
        /// One account: id 1, "Ada", ada@example.com / "hunter22".
        pub fn with_ada() -> Self {
            FakeDirectory {
                users: vec![UserRecord {
                    id: 1,
                    name: "Ada".to_string(),
                    email: "ada@example.com".to_string(),
                    password_hash: hash_password("hunter22").unwrap(),
                }],
                fail_with: None,
            }
        }

        pub fn failing(message: &str) -> Self {
            FakeDirectory {
                users: Vec::new(),
                fail_with: Some(message.to_string()),
            }
        }
    }

    #[async_trait]
    impl UserDirectory for FakeDirectory {
        async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRecord>, DbError> {
            if let Some(message) = &self.fail_with {
                return Err(DbError::QueryFailed(message.clone()));
            }
            Ok(self.users.iter().find(|u| u.email == email).cloned())
        }
    }
}
