//! JSON API integration tests
//!
//! The `/api` routes against a real database: a browser-style session from
//! registration to the token-protected profile, plus the contact forms.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use pretty_assertions::assert_eq;
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use domunity::backend::routes::create_router;
use domunity::backend::server::AppState;
use domunity::shared::proto::{LoginResponse, OfferResponse, RegisterResponse, UserProfile};

use crate::common::{test_config, unique_email, TestDatabase};

fn router(db: &TestDatabase) -> Router {
    create_router(AppState::new(db.pool().clone(), test_config()))
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json<T: DeserializeOwned>(response: Response) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_register_login_and_fetch_profile() {
    let Some(db) = TestDatabase::connect().await else { return };
    let email = unique_email();

    let response = router(&db)
        .oneshot(post_json(
            "/api/auth/register",
            serde_json::json!({
                "email": email,
                "password": "Passw0rd!",
                "full_name": "Rest User",
                "phone": "+359888111222",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let registered: RegisterResponse = json(response).await;
    assert!(registered.success);

    let response = router(&db)
        .oneshot(post_json(
            "/api/auth/login",
            serde_json::json!({ "email": email, "password": "Passw0rd!" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let login: LoginResponse = json(response).await;
    assert!(login.success);

    let response = router(&db)
        .oneshot(
            Request::builder()
                .uri("/api/user/profile")
                .header(header::AUTHORIZATION, format!("Bearer {}", login.access_token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let profile: UserProfile = json(response).await;
    let user = profile.user.unwrap();
    assert_eq!(user.id, registered.user_id);
    assert_eq!(user.email, email);
    assert_eq!(user.full_name, "Rest User");
}

#[tokio::test]
async fn test_duplicate_registration_is_bad_request() {
    let Some(db) = TestDatabase::connect().await else { return };
    let body = serde_json::json!({
        "email": unique_email(),
        "password": "Passw0rd!",
        "full_name": "Twice",
        "phone": "1",
    });

    let first = router(&db).oneshot(post_json("/api/auth/register", body.clone())).await.unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = router(&db).oneshot(post_json("/api/auth/register", body)).await.unwrap();
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    let response: RegisterResponse = json(second).await;
    assert_eq!(response.message, "Registration failed");
}

#[tokio::test]
async fn test_unknown_email_is_unauthorized() {
    let Some(db) = TestDatabase::connect().await else { return };

    let response = router(&db)
        .oneshot(post_json(
            "/api/auth/login",
            serde_json::json!({ "email": unique_email(), "password": "whatever" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let login: LoginResponse = json(response).await;
    assert_eq!(login.message, "Invalid email or password");
}

#[tokio::test]
async fn test_offer_is_stored() {
    let Some(db) = TestDatabase::connect().await else { return };
    let email = unique_email();

    // Unknown fields from the browser form are ignored.
    let response = router(&db)
        .oneshot(post_json(
            "/api/contact/offer",
            serde_json::json!({
                "city": "Sofia",
                "num_properties": 2,
                "address": "Main St 1",
                "phone": "123",
                "email": email,
                "additional_info": "ignored",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let offer: OfferResponse = json(response).await;
    assert!(offer.success, "{}", offer.message);
    assert_eq!(db.count_contact_requests(&email, "offer").await, 1);
}
