use std::time::Duration;

use roster_backend::db::models::auth::AuthUser;
use roster_backend::middleware::auth::{AuthConfig, AuthService};
use roster_backend::validation::rules::{validate_password_strength, validate_username_format};

fn test_service() -> AuthService {
    AuthService::new(AuthConfig {
        jwt_secret: "unit-test-secret".to_string(),
        jwt_expiration: Duration::from_secs(3600),
        refresh_expiration: Duration::from_secs(7200),
    })
}

fn test_user() -> AuthUser {
    AuthUser {
        id: 42,
        email: "nurse@example.com".to_string(),
        username: "nurse42".to_string(),
        name: "Test Nurse".to_string(),
    }
}

#[test]
fn access_token_round_trips() {
    let service = test_service();
    let token = service.generate_access_token(&test_user()).unwrap();

    let claims = service.verify_token(&token).unwrap();
    assert_eq!(claims.sub, 42);
    assert_eq!(claims.email, "nurse@example.com");
    assert_eq!(claims.username, "nurse42");
}

#[test]
fn refresh_token_round_trips() {
    let service = test_service();
    let token = service.generate_refresh_token(42).unwrap();

    let claims = service.verify_refresh_token(&token).unwrap();
    assert_eq!(claims.sub, 42);
}

#[test]
fn tampered_token_is_rejected() {
    let service = test_service();
    let other = AuthService::new(AuthConfig {
        jwt_secret: "different-secret".to_string(),
        jwt_expiration: Duration::from_secs(3600),
        refresh_expiration: Duration::from_secs(7200),
    });

    let token = other.generate_access_token(&test_user()).unwrap();
    assert!(service.verify_token(&token).is_err());
}

#[test]
fn password_strength_rules() {
    assert!(validate_password_strength("Str0ngPass!").is_ok());
    assert!(validate_password_strength("weak").is_err());
    assert!(validate_password_strength("alllowercase").is_err());
}

#[test]
fn username_format_rules() {
    assert!(validate_username_format("head_nurse-1").is_ok());
    assert!(validate_username_format("1nurse").is_err());
    assert!(validate_username_format("bad name").is_err());
    assert!(validate_username_format("").is_err());
}
