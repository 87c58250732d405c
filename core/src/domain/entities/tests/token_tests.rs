//! Unit tests for token entities

use chrono::{TimeZone, Utc};
use crate::domain::entities::token::{IssuedToken, SignedToken, FIELD_SEPARATOR};

#[test]
fn test_signing_input() {
    assert_eq!(SignedToken::signing_input("testUser123", 1_801_000), "testUser123:1801000");
    assert_eq!(SignedToken::signing_input(" padded ", 5), " padded :5");
}

#[test]
fn test_payload_layout() {
    let token = SignedToken::new("alice", 42, "ab".repeat(32));
    let payload = token.payload();

    let parts: Vec<&str> = payload.split(FIELD_SEPARATOR).collect();
    assert_eq!(parts, vec!["alice", "42", token.signature.as_str()]);
}

#[test]
fn test_expiry_boundary() {
    let token = SignedToken::new("alice", 1_000, "00");

    assert!(!token.is_expired_at(999));
    assert!(!token.is_expired_at(1_000));
    assert!(token.is_expired_at(1_001));
}

#[test]
fn test_expires_at_conversion() {
    let token = SignedToken::new("alice", 1_801_000, "00");
    let expected = Utc.timestamp_millis_opt(1_801_000).single().unwrap();
    assert_eq!(token.expires_at(), Some(expected));
}

#[test]
fn test_issued_token_expires_in() {
    let issued = IssuedToken {
        token: "dG9rZW4=".to_string(),
        user_id: "alice".to_string(),
        issued_at: 1_000,
        expires_at: 1_801_000,
    };

    assert_eq!(issued.lifetime_seconds(), 1_800);

    assert_eq!(issued.expires_in_seconds(1_000), 1_800);
    assert_eq!(issued.expires_in_seconds(1_800_500), 0);
    assert_eq!(issued.expires_in_seconds(2_000_000), 0);
}
