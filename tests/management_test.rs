use chrono::{Duration, Utc};
use tunechart::{
    errors::AccountError,
    management::{AccountManager, SessionManager},
    utils::generate_session_token,
};

// Helper function to create an account store with one registered user
async fn store_with_alice() -> AccountManager {
    let mut accounts = AccountManager::in_memory();
    accounts
        .register("alice", "alice@example.com", "s3cret", "s3cret")
        .await
        .expect("register alice");
    accounts
}

#[tokio::test]
async fn test_register_and_authenticate() {
    let accounts = store_with_alice().await;

    let user = accounts.authenticate("alice", "s3cret").expect("valid login");
    assert_eq!(user.username, "alice");
    assert_eq!(user.email, "alice@example.com");

    assert!(accounts.authenticate("alice", "wrong").is_none());
    assert!(accounts.authenticate("bob", "s3cret").is_none());
    assert_eq!(accounts.count(), 1);
}

#[tokio::test]
async fn test_register_rejections() {
    let mut accounts = store_with_alice().await;

    assert_eq!(
        accounts.register("bob", "bob@example.com", "a", "b").await,
        Err(AccountError::PasswordMismatch)
    );
    assert_eq!(
        accounts.register("bob", "alice@example.com", "pw", "pw").await,
        Err(AccountError::EmailTaken)
    );
    assert_eq!(
        accounts.register("alice", "other@example.com", "pw", "pw").await,
        Err(AccountError::UsernameTaken)
    );
    assert_eq!(
        accounts.register("  ", "x@example.com", "pw", "pw").await,
        Err(AccountError::MissingField)
    );
    assert_eq!(accounts.count(), 1);
}

#[tokio::test]
async fn test_accounts_survive_reload() {
    let path = std::env::temp_dir()
        .join(format!("tunechart-test-{}", generate_session_token()))
        .join("accounts.json");

    let mut accounts = AccountManager::load(path.clone()).await.expect("empty store");
    assert_eq!(accounts.count(), 0);
    accounts
        .register("carol", "carol@example.com", "pw123", "pw123")
        .await
        .expect("register carol");

    let reloaded = AccountManager::load(path.clone()).await.expect("reload");
    assert_eq!(reloaded.count(), 1);
    assert!(reloaded.authenticate("carol", "pw123").is_some());
    assert!(reloaded.authenticate("carol", "pw124").is_none());

    // only the Argon2 PHC string is stored, never the password or a bare salt
    let stored: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).expect("accounts file"))
            .expect("accounts json");
    let account = &stored[0];
    assert!(
        account["password_hash"]
            .as_str()
            .expect("password hash")
            .starts_with("$argon2id$")
    );
    assert!(account.get("salt").is_none());
    assert!(!stored.to_string().contains("pw123"));

    if let Some(dir) = path.parent() {
        let _ = std::fs::remove_dir_all(dir);
    }
}

#[tokio::test]
async fn test_session_login_and_logout() {
    let accounts = store_with_alice().await;
    let user = accounts.find("alice").expect("alice");
    let mut sessions = SessionManager::new(Duration::hours(1));

    let session = sessions.login(&user);
    assert_eq!(session.username, "alice");
    assert!(session.expires_at > Utc::now());
    assert_eq!(sessions.username_for(&session.token), Some("alice".to_string()));

    assert!(sessions.logout(&session.token));
    assert_eq!(sessions.username_for(&session.token), None);
    assert!(!sessions.logout(&session.token));
}

#[tokio::test]
async fn test_expired_sessions_are_dropped() {
    let accounts = store_with_alice().await;
    let user = accounts.find("alice").expect("alice");
    let mut sessions = SessionManager::new(Duration::seconds(-1));

    let session = sessions.login(&user);
    assert_eq!(sessions.username_for(&session.token), None);
    assert_eq!(sessions.count(), 0);
}
