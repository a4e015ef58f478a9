use argon2::{
    Argon2,
    password_hash::{
        self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use rand::{Rng, distr::Alphanumeric};

use crate::warning;

fn non_negative(total_seconds: i64) -> u64 {
    if total_seconds < 0 {
        warning!("Negative duration {}s, using 0", total_seconds);
        return 0;
    }
    total_seconds as u64
}

/// Formats a duration as zero-padded `HH:MM:SS`.
///
/// Negative input is treated as malformed and clamped to zero.
///
/// ```
/// assert_eq!(format_long(3661), "01:01:01");
/// ```
pub fn format_long(total_seconds: i64) -> String {
    let secs = non_negative(total_seconds);
    let (minutes, seconds) = (secs / 60, secs % 60);
    let (hours, minutes) = (minutes / 60, minutes % 60);
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Formats a duration as `M:SS`, minutes unpadded and carrying any hours.
///
/// ```
/// assert_eq!(format_short(65), "1:05");
/// ```
pub fn format_short(total_seconds: i64) -> String {
    let secs = non_negative(total_seconds);
    format!("{}:{:02}", secs / 60, secs % 60)
}

fn random_alphanumeric(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Generates an opaque session token for the login cookie.
pub fn generate_session_token() -> String {
    random_alphanumeric(64)
}

/// Hashes a password with Argon2 and a fresh random salt.
///
/// # Returns
///
/// The PHC string (`$argon2id$v=19$...`), which carries the salt and the
/// parameters needed to verify it later.
///
/// # Errors
///
/// Returns the `password_hash` error if Argon2 rejects the input.
pub fn hash_password(password: &str) -> Result<String, password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Checks a password against a stored PHC string.
///
/// A stored value that is not a valid PHC string never verifies.
pub fn verify_password(password: &str, phc: &str) -> bool {
    match PasswordHash::new(phc) {
        Ok(hash) => Argon2::default()
            .verify_password(password.as_bytes(), &hash)
            .is_ok(),
        Err(_) => false,
    }
}
