use tunechart::utils::*;

fn is_long_form(text: &str) -> bool {
    let parts: Vec<&str> = text.split(':').collect();
    parts.len() == 3
        && parts[0].len() >= 2
        && parts[1].len() == 2
        && parts[2].len() == 2
        && parts.iter().all(|p| p.chars().all(|c| c.is_ascii_digit()))
}

fn is_short_form(text: &str) -> bool {
    match text.split_once(':') {
        Some((minutes, seconds)) => {
            !minutes.is_empty()
                && minutes.chars().all(|c| c.is_ascii_digit())
                && seconds.len() == 2
                && seconds.chars().all(|c| c.is_ascii_digit())
        }
        None => false,
    }
}

#[test]
fn test_format_long() {
    assert_eq!(format_long(0), "00:00:00");
    assert_eq!(format_long(59), "00:00:59");
    assert_eq!(format_long(60), "00:01:00");
    assert_eq!(format_long(3599), "00:59:59");
    assert_eq!(format_long(3600), "01:00:00");
    assert_eq!(format_long(3661), "01:01:01");
    assert_eq!(format_long(86399), "23:59:59");
}

#[test]
fn test_format_short() {
    assert_eq!(format_short(0), "0:00");
    assert_eq!(format_short(5), "0:05");
    assert_eq!(format_short(65), "1:05");
    assert_eq!(format_short(600), "10:00");
    // hours stay in the minutes
    assert_eq!(format_short(3661), "61:01");
}

#[test]
fn test_negative_durations_clamp_to_zero() {
    assert_eq!(format_long(-1), "00:00:00");
    assert_eq!(format_short(-300), "0:00");
}

#[test]
fn test_formats_hold_for_many_values() {
    let samples = (0..5000).chain([86_400, 359_999, 360_000, 1_000_000]);
    for s in samples {
        let long = format_long(s);
        let short = format_short(s);
        assert!(is_long_form(&long), "{} -> {}", s, long);
        assert!(is_short_form(&short), "{} -> {}", s, short);
    }
}

#[test]
fn test_generate_session_token() {
    let token = generate_session_token();

    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_ne!(token, generate_session_token());
}

#[test]
fn test_hash_password() {
    let hash = hash_password("hunter2").expect("hash");

    // PHC string with the salt embedded
    assert!(hash.starts_with("$argon2id$"));
    assert!(!hash.contains("hunter2"));

    // a fresh salt every time
    assert_ne!(hash, hash_password("hunter2").expect("hash"));
}

#[test]
fn test_verify_password() {
    let hash = hash_password("hunter2").expect("hash");

    assert!(verify_password("hunter2", &hash));
    assert!(!verify_password("hunter3", &hash));
    assert!(!verify_password("", &hash));
    assert!(!verify_password("hunter2", "not a phc string"));
}
