//! Unit tests for token service

use std::sync::Arc;
use std::thread;

use chrono::Duration;

use crate::errors::{DomainError, TokenError};
use crate::services::token::{Clock, FixedClock, TokenService, TokenServiceConfig};

const START: i64 = 1_700_000_000_000;

fn create_test_service() -> TokenService<FixedClock> {
    let config = TokenServiceConfig::with_ttl_minutes("test_secret", 30)
        .expect("Failed to create token config");
    TokenService::with_clock(config, FixedClock::new(START))
}

#[test]
fn test_issue_token() {
    let service = create_test_service();

    let issued = service.issue_token("alice").unwrap();

    assert!(!issued.token.is_empty());
    assert_eq!(issued.user_id, "alice");
    assert_eq!(issued.expires_at, START + 30 * 60 * 1000);
    assert_eq!(issued.issued_at, START);
    assert_eq!(issued.expires_in_seconds(START), 30 * 60);
}

#[test]
fn test_issued_lifetime_ignores_later_clock_reads() {
    let service = create_test_service();

    let issued = service.issue_token("alice").unwrap();
    service.clock().advance(1_500);

    assert_eq!(issued.lifetime_seconds(), 30 * 60);
    assert_eq!(issued.expires_in_seconds(service.clock().now_millis()), 30 * 60 - 2);
}

#[test]
fn test_generate_and_validate() {
    let service = create_test_service();

    let token = service.generate_token("testUser123").unwrap();
    let user_id = service.validate_token(&token).unwrap();

    assert_eq!(user_id, "testUser123");
}

#[test]
fn test_issue_with_custom_ttl() {
    let service = create_test_service();

    let issued = service
        .issue_token_with_ttl("alice", Duration::seconds(10))
        .unwrap();
    assert_eq!(issued.expires_at, START + 10_000);

    service.clock().advance(10_000);
    assert_eq!(service.validate_token(&issued.token).unwrap(), "alice");

    service.clock().advance(1);
    assert!(matches!(
        service.validate_token(&issued.token),
        Err(DomainError::Token(TokenError::Expired { .. }))
    ));
}

#[test]
fn test_token_expires_after_default_ttl() {
    let service = create_test_service();
    let token = service.generate_token("alice").unwrap();

    service.clock().advance(service.default_ttl().num_milliseconds());
    assert!(service.validate_token(&token).is_ok());

    service.clock().advance(1);
    let result = service.validate_token(&token);
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::Expired { expired_at, now }))
            if expired_at == START + 1_800_000 && now == START + 1_800_001
    ));
}

#[test]
fn test_issue_blank_user_id() {
    let service = create_test_service();

    let result = service.issue_token("  ");
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::InvalidInput { .. }))
    ));
}

#[test]
fn test_validate_invalid_token() {
    let service = create_test_service();

    assert!(matches!(
        service.validate_token(""),
        Err(DomainError::Token(TokenError::EmptyToken))
    ));
    assert!(matches!(
        service.validate_token("thisIsNotBase64!"),
        Err(DomainError::Token(TokenError::BadEncoding))
    ));
}

#[test]
fn test_tokens_from_other_secret_rejected() {
    let service = create_test_service();
    let other = TokenService::with_clock(
        TokenServiceConfig::with_ttl_minutes("other_secret", 30).unwrap(),
        FixedClock::new(START),
    );

    let token = other.generate_token("alice").unwrap();
    assert!(matches!(
        service.validate_token(&token),
        Err(DomainError::Token(TokenError::BadSignature))
    ));
}

#[test]
fn test_inspect_token() {
    let service = create_test_service();
    let token = service.generate_token("alice").unwrap();

    let parsed = service.inspect_token(&token).unwrap();
    assert_eq!(parsed.user_id, "alice");
    assert_eq!(parsed.expiry, START + 1_800_000);
    assert_eq!(parsed.signature.len(), 64);

    service.clock().advance(2 * 1_800_000);
    assert!(service.inspect_token(&token).is_ok());
}

#[test]
fn test_closure_clock_service() {
    let config = TokenServiceConfig::with_ttl_minutes("test_secret", 30).unwrap();
    let service = TokenService::with_clock(config, || 1_000_i64);

    let issued = service.issue_token("alice").unwrap();
    assert_eq!(issued.expires_at, 1_801_000);
    assert_eq!(service.validate_token(&issued.token).unwrap(), "alice");
}

#[test]
fn test_system_clock_service() {
    let service = TokenService::new(TokenServiceConfig::default());
    let token = service.generate_token("alice").unwrap();
    assert_eq!(service.validate_token(&token).unwrap(), "alice");
}

#[test]
fn test_concurrent_validation() {
    let service = Arc::new(create_test_service());
    let token = service.generate_token("shared-user").unwrap();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let service = Arc::clone(&service);
            let token = token.clone();
            thread::spawn(move || {
                let own = service.generate_token(&format!("user-{}", i)).unwrap();
                assert_eq!(service.validate_token(&own).unwrap(), format!("user-{}", i));
                service.validate_token(&token).unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "shared-user");
    }
}
