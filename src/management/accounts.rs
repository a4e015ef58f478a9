use std::path::PathBuf;

use chrono::Utc;

use crate::{
    errors::AccountError,
    types::{Account, User},
    utils,
};

/// Registered user accounts, optionally persisted as a JSON file.
pub struct AccountManager {
    accounts: Vec<Account>,
    path: Option<PathBuf>,
}

impl AccountManager {
    /// An account store that lives only as long as the process.
    pub fn in_memory() -> Self {
        Self {
            accounts: Vec::new(),
            path: None,
        }
    }

    /// Loads accounts from `path`; a missing file is an empty store.
    pub async fn load(path: PathBuf) -> Result<Self, String> {
        let accounts = if path.is_file() {
            let content = async_fs::read_to_string(&path)
                .await
                .map_err(|e| e.to_string())?;
            serde_json::from_str(&content).map_err(|e| e.to_string())?
        } else {
            Vec::new()
        };

        Ok(Self {
            accounts,
            path: Some(path),
        })
    }

    pub async fn persist(&self) -> Result<(), String> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(&self.accounts).map_err(|e| e.to_string())?;
        async_fs::write(path, json).await.map_err(|e| e.to_string())
    }

    /// Returns the user if `password` matches the stored Argon2 hash.
    pub fn authenticate(&self, username: &str, password: &str) -> Option<User> {
        self.accounts
            .iter()
            .find(|a| a.user.username == username)
            .filter(|a| utils::verify_password(password, &a.password_hash))
            .map(|a| a.user.clone())
    }

    /// Creates an account after the signup checks and persists the store.
    ///
    /// # Errors
    ///
    /// Checked in this order: required fields, matching passwords, unused
    /// email, unused username, hashing, then storage.
    pub async fn register(
        &mut self,
        username: &str,
        email: &str,
        password: &str,
        password_confirmation: &str,
    ) -> Result<User, AccountError> {
        let username = username.trim();
        let email = email.trim();
        if username.is_empty() || email.is_empty() || password.is_empty() {
            return Err(AccountError::MissingField);
        }
        if password != password_confirmation {
            return Err(AccountError::PasswordMismatch);
        }
        if self.accounts.iter().any(|a| a.user.email == email) {
            return Err(AccountError::EmailTaken);
        }
        if self.accounts.iter().any(|a| a.user.username == username) {
            return Err(AccountError::UsernameTaken);
        }

        let password_hash =
            utils::hash_password(password).map_err(|e| AccountError::Hashing(e.to_string()))?;
        let user = User {
            username: username.to_string(),
            email: email.to_string(),
            created_at: Utc::now(),
        };
        self.accounts.push(Account {
            user: user.clone(),
            password_hash,
        });

        if let Err(e) = self.persist().await {
            self.accounts.pop();
            return Err(AccountError::Storage(e));
        }

        Ok(user)
    }

    pub fn find(&self, username: &str) -> Option<User> {
        self.accounts
            .iter()
            .find(|a| a.user.username == username)
            .map(|a| a.user.clone())
    }

    pub fn count(&self) -> usize {
        self.accounts.len()
    }
}
