//! Unit tests for domain error types

use crate::domain::entities::TOKEN_FIELD_COUNT;
use crate::errors::{DomainError, TokenError, TokenErrorKind};

#[test]
fn test_token_error_messages() {
    assert_eq!(TokenError::EmptyToken.to_string(), "Token cannot be null or empty.");
    assert_eq!(TokenError::BadEncoding.to_string(), "Token is not valid Base64.");
    assert_eq!(TokenError::BadSignature.to_string(), "Token signature is invalid.");
    assert_eq!(
        TokenError::MalformedExpiry.to_string(),
        "Token expiry time is not a valid number."
    );

    let message = TokenError::MalformedFormat { fields: 2 }.to_string();
    assert!(message.starts_with("Token format is invalid"));
    assert!(message.contains("found 2"));
    assert!(message.contains(&format!("expected {} fields", TOKEN_FIELD_COUNT)));
}

#[test]
fn test_expired_error_carries_timestamps() {
    let error = TokenError::Expired { expired_at: 1_000, now: 1_001 };
    let message = error.to_string();
    assert!(message.contains("1000"));
    assert!(message.contains("1001"));
}

#[test]
fn test_error_kinds() {
    let cases = [
        (TokenError::InvalidInput { reason: "blank" }, TokenErrorKind::InvalidInput),
        (TokenError::EmptyToken, TokenErrorKind::EmptyToken),
        (TokenError::BadEncoding, TokenErrorKind::BadEncoding),
        (TokenError::MalformedFormat { fields: 4 }, TokenErrorKind::MalformedFormat),
        (TokenError::MalformedExpiry, TokenErrorKind::MalformedExpiry),
        (TokenError::Expired { expired_at: 0, now: 1 }, TokenErrorKind::Expired),
        (TokenError::BadSignature, TokenErrorKind::BadSignature),
    ];

    for (error, kind) in cases {
        assert_eq!(error.kind(), kind);
    }
}

#[test]
fn test_kind_codes_are_distinct() {
    let kinds = [
        TokenErrorKind::InvalidInput,
        TokenErrorKind::EmptyToken,
        TokenErrorKind::BadEncoding,
        TokenErrorKind::MalformedFormat,
        TokenErrorKind::MalformedExpiry,
        TokenErrorKind::Expired,
        TokenErrorKind::BadSignature,
    ];
    let codes: std::collections::HashSet<_> = kinds.iter().map(|k| k.as_str()).collect();
    assert_eq!(codes.len(), kinds.len());
    assert_eq!(TokenErrorKind::Expired.to_string(), "expired");
}

#[test]
fn test_input_error_classification() {
    assert!(TokenErrorKind::InvalidInput.is_input_error());
    assert!(TokenErrorKind::EmptyToken.is_input_error());
    assert!(!TokenErrorKind::BadSignature.is_input_error());
    assert!(!TokenErrorKind::Expired.is_input_error());
}

#[test]
fn test_domain_error_from_token_error() {
    let error: DomainError = TokenError::BadSignature.into();
    assert_eq!(error.token_kind(), Some(TokenErrorKind::BadSignature));
    assert_eq!(error.to_string(), "Token signature is invalid.");

    let error = DomainError::Validation { message: "ttl".to_string() };
    assert_eq!(error.token_kind(), None);
}
