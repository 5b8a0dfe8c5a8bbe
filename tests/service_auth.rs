mod common;

use common::{SEED_PASSWORD, jwt_config, seed_account};
use lectio::modules::accounts::model::Role;
use lectio::modules::auth::model::LoginRequest;
use lectio::modules::auth::service::AuthService;
use lectio::store::memory::MemStore;
use lectio::utils::jwt::verify_token;

fn request(login: &str, password: &str) -> LoginRequest {
    LoginRequest {
        login: login.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn login_issues_token_with_role_scope() {
    let store = MemStore::new();
    let jwt = jwt_config();
    let account = seed_account(&store, "ped@example.com", Role::Pedagogical).await;

    let response = AuthService::login(&store, &jwt, request("ped@example.com", SEED_PASSWORD))
        .await
        .unwrap();

    assert_eq!(response.expires_in, 3600);

    let claims = verify_token(&response.access_token, &jwt).unwrap();
    assert_eq!(claims.scope, "pedagogico");
    assert_eq!(claims.sub, account.id.to_string());
}

#[tokio::test]
async fn login_rejects_unknown_user() {
    let store = MemStore::new();
    let jwt = jwt_config();

    let err = AuthService::login(&store, &jwt, request("ghost", SEED_PASSWORD))
        .await
        .unwrap_err();

    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn login_rejects_wrong_password() {
    let store = MemStore::new();
    let jwt = jwt_config();
    seed_account(&store, "ped@example.com", Role::Pedagogical).await;

    let err = AuthService::login(&store, &jwt, request("ped@example.com", "wrong"))
        .await
        .unwrap_err();

    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn login_rejects_blank_credentials() {
    let store = MemStore::new();
    let jwt = jwt_config();

    let err = AuthService::login(&store, &jwt, request("", "whatever"))
        .await
        .unwrap_err();
    assert!(err.is_bad_request());

    let err = AuthService::login(&store, &jwt, request("someone", "  "))
        .await
        .unwrap_err();
    assert!(err.is_bad_request());
}
