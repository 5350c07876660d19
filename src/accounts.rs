//! Local account book: registration and credential checks against the
//! persisted user list.
//!
//! Passwords are stored and compared as plaintext and emails are matched
//! exactly (case-sensitive, untrimmed). Uniqueness of emails is only
//! enforced here, at registration time.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::Mutex;

use crate::storage::{keys, Persistence, StorageError};
use crate::store::auth::Session;

pub const MIN_PASSWORD_LEN: usize = 4;

/// A registered user as stored under the users key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl User {
    pub fn session(&self) -> Session {
        Session {
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("{field}: {message}")]
    Validation {
        field: &'static str,
        message: &'static str,
    },

    #[error("User not found or wrong password.")]
    InvalidCredentials,

    #[error("Email already registered.")]
    EmailTaken,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl AuthError {
    /// Short alert title for the failure.
    pub fn title(&self) -> &'static str {
        match self {
            AuthError::Validation { .. } => "Invalid input",
            AuthError::InvalidCredentials => "Login failed",
            AuthError::EmailTaken => "Error",
            AuthError::Storage(_) => "Storage error",
        }
    }
}

/// Registered users, read fresh from storage on every call.
pub struct AccountBook {
    persistence: Persistence,
    write_lock: Mutex<()>,
}

impl AccountBook {
    pub fn new(persistence: Persistence) -> Self {
        Self {
            persistence,
            write_lock: Mutex::new(()),
        }
    }

    /// All registered users (empty if none were ever stored).
    pub async fn users(&self) -> Result<Vec<User>, StorageError> {
        Ok(self
            .persistence
            .load::<Vec<User>>(keys::USERS)
            .await?
            .unwrap_or_default())
    }

    /// Register a new user.
    ///
    /// Rejects an email that is already registered and leaves the list as
    /// it was. A failed read aborts before anything is written, so an
    /// unreadable list is never overwritten.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<User, AuthError> {
        validate_name(name)?;
        validate_email(email)?;
        validate_password(password)?;

        let _guard = self.write_lock.lock().await;
        let mut users = self.users().await?;
        if users.iter().any(|u| u.email == email) {
            tracing::info!(email, "Registration rejected: email taken");
            return Err(AuthError::EmailTaken);
        }

        let user = User {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        users.push(user.clone());
        self.persistence.save(keys::USERS, &users).await?;
        tracing::info!(email, total = users.len(), "User registered");
        Ok(user)
    }

    /// Check credentials. The first user whose email and password both
    /// match exactly wins.
    pub async fn verify(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        validate_email(email)?;
        validate_password(password)?;

        let users = self.users().await?;
        users
            .iter()
            .find(|u| u.email == email && u.password == password)
            .map(User::session)
            .ok_or_else(|| {
                tracing::info!(email, "Login rejected");
                AuthError::InvalidCredentials
            })
    }
}

fn validate_name(name: &str) -> Result<(), AuthError> {
    if name.trim().is_empty() {
        return Err(AuthError::Validation {
            field: "name",
            message: "Name required",
        });
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), AuthError> {
    if email.is_empty() {
        return Err(AuthError::Validation {
            field: "email",
            message: "Email required",
        });
    }
    if !looks_like_email(email) {
        return Err(AuthError::Validation {
            field: "email",
            message: "Invalid email",
        });
    }
    Ok(())
}

fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.is_empty() {
        return Err(AuthError::Validation {
            field: "password",
            message: "Password required",
        });
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AuthError::Validation {
            field: "password",
            message: "Min 4 characters",
        });
    }
    Ok(())
}

/// `local@domain.tld` with no whitespace and a single `@`.
fn looks_like_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::sync::Arc;

    fn book() -> (Arc<MemoryStore>, AccountBook) {
        let store = Arc::new(MemoryStore::new());
        let book = AccountBook::new(Persistence::new(store.clone()));
        (store, book)
    }

    #[test]
    fn email_shapes() {
        assert!(looks_like_email("alice@x.com"));
        assert!(looks_like_email("a.b+c@mail.example.org"));
        assert!(!looks_like_email("alice"));
        assert!(!looks_like_email("@x.com"));
        assert!(!looks_like_email("alice@x"));
        assert!(!looks_like_email("alice@x..com"));
        assert!(!looks_like_email("al ice@x.com"));
        assert!(!looks_like_email("a@b@x.com"));
    }

    #[tokio::test]
    async fn short_password_is_rejected_before_storage() {
        let (store, book) = book();
        let err = book.register("Alice", "alice@x.com", "abc").await.unwrap_err();
        assert!(matches!(err, AuthError::Validation { field: "password", .. }));
        assert!(!store.contains(keys::USERS));
    }

    #[tokio::test]
    async fn blank_name_is_rejected() {
        let (_, book) = book();
        let err = book.register("  ", "alice@x.com", "pw123").await.unwrap_err();
        assert!(matches!(err, AuthError::Validation { field: "name", .. }));
    }

    #[tokio::test]
    async fn email_match_is_case_sensitive() {
        let (_, book) = book();
        book.register("Alice", "alice@x.com", "pw123").await.unwrap();

        book.register("Alice 2", "Alice@x.com", "pw123").await.unwrap();
        assert_eq!(book.users().await.unwrap().len(), 2);

        let err = book.verify("ALICE@x.com", "pw123").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn first_matching_user_wins() {
        let (store, book) = book();
        let users = vec![
            User {
                name: "First".to_string(),
                email: "dup@x.com".to_string(),
                password: "pw123".to_string(),
            },
            User {
                name: "Second".to_string(),
                email: "dup@x.com".to_string(),
                password: "pw123".to_string(),
            },
        ];
        store.insert_raw(keys::USERS, &serde_json::to_string(&users).unwrap());

        let session = book.verify("dup@x.com", "pw123").await.unwrap();
        assert_eq!(session.name, "First");
    }

    #[tokio::test]
    async fn unreadable_user_list_is_not_overwritten() {
        let (store, book) = book();
        store.insert_raw(keys::USERS, "not json");

        let err = book.register("Alice", "alice@x.com", "pw123").await.unwrap_err();
        assert!(matches!(err, AuthError::Storage(StorageError::Decode { .. })));
        assert_eq!(store.raw(keys::USERS).as_deref(), Some("not json"));
    }
}
