use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use lectio::config::jwt::JwtConfig;
use lectio::modules::accounts::model::{Account, Role};
use lectio::utils::jwt::{Claims, create_access_token, read_claim, verify_token};

fn get_test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        access_token_expiry: 3600,
    }
}

fn test_account(role: Role) -> Account {
    Account {
        id: 42,
        login: "logan@x.com".to_string(),
        password: "hashed".to_string(),
        role,
    }
}

#[test]
fn create_and_verify_round_trip() {
    let config = get_test_jwt_config();
    let token = create_access_token(&test_account(Role::Pedagogical), &config).unwrap();

    let claims = verify_token(&token, &config).unwrap();
    assert_eq!(claims.sub, "42");
    assert_eq!(claims.scope, "pedagogico");
}

#[test]
fn scope_carries_the_wire_role_name() {
    let config = get_test_jwt_config();

    for (role, expected) in [
        (Role::Admin, "admin"),
        (Role::Pedagogical, "pedagogico"),
        (Role::Recruiter, "recruiter"),
        (Role::Teacher, "professor"),
        (Role::Student, "aluno"),
    ] {
        let token = create_access_token(&test_account(role), &config).unwrap();
        assert_eq!(read_claim(&token, "scope", &config).unwrap(), expected);
    }
}

#[test]
fn read_claim_returns_subject() {
    let config = get_test_jwt_config();
    let token = create_access_token(&test_account(Role::Admin), &config).unwrap();

    assert_eq!(read_claim(&token, "sub", &config).unwrap(), "42");
}

#[test]
fn verify_rejects_garbage() {
    let config = get_test_jwt_config();
    let err = verify_token("invalid.token.here", &config).unwrap_err();
    assert!(err.is_unauthorized());
}

#[test]
fn verify_rejects_wrong_secret() {
    let config = get_test_jwt_config();
    let token = create_access_token(&test_account(Role::Admin), &config).unwrap();

    let other = JwtConfig {
        secret: "a-completely-different-secret".to_string(),
        access_token_expiry: 3600,
    };

    assert!(verify_token(&token, &other).unwrap_err().is_unauthorized());
}

#[test]
fn verify_rejects_expired_token() {
    let config = get_test_jwt_config();
    let now = Utc::now().timestamp() as usize;

    let claims = Claims {
        sub: "42".to_string(),
        scope: "admin".to_string(),
        iat: now - 7200,
        exp: now - 3600,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .unwrap();

    assert!(verify_token(&token, &config).unwrap_err().is_unauthorized());
}
