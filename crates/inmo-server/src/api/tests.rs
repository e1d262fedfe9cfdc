//! Router-level tests over the local backend: session enforcement on
//! write routes and the empty-patch short-circuit.

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use inmo_auth::verifier::{DEMO_EMAIL, DEMO_PASSWORD, DemoVerifier};
use inmo_store::LocalPropertyRepository;
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

use crate::api;
use crate::api::context::{AppState, SessionStore};
use crate::backend::{PropertyBackend, VerifierBackend};

fn make_app() -> Router {
    let state = AppState {
        repo: PropertyBackend::Local(LocalPropertyRepository::with_seed()),
        verifier: VerifierBackend::Demo(DemoVerifier),
        sessions: SessionStore::default(),
    };
    api::router(state)
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(res: axum::response::Response) -> Value {
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn first_listing(app: &Router) -> Value {
    let res = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/properties")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    body_json(res).await[0].clone()
}

async fn login(app: &Router) -> String {
    let res = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/auth/login",
            json!({ "email": DEMO_EMAIL, "password": DEMO_PASSWORD }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    body_json(res).await["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn writes_without_a_session_are_rejected() {
    let app = make_app();
    let id = first_listing(&app).await["id"].as_str().unwrap().to_string();

    let requests = [
        json_request(Method::POST, "/properties", json!({})),
        json_request(Method::PATCH, &format!("/properties/{id}"), json!({})),
        Request::builder()
            .method(Method::DELETE)
            .uri(format!("/properties/{id}"))
            .body(Body::empty())
            .unwrap(),
    ];
    for request in requests {
        let res = app.clone().oneshot(request).await.unwrap();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(res).await, json!({ "error": "Unauthorized" }));
    }
}

#[tokio::test]
async fn an_unknown_bearer_token_is_rejected() {
    let app = make_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/properties")
        .header(header::AUTHORIZATION, "Bearer not-a-real-token")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{}"))
        .unwrap();

    let res = app.oneshot(request).await.unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(res).await, json!({ "error": "Unauthorized" }));
}

#[tokio::test]
async fn rejection_does_not_reveal_whether_the_listing_exists() {
    let app = make_app();
    let existing = first_listing(&app).await["id"].as_str().unwrap().to_string();
    let missing = Uuid::new_v4().to_string();

    let mut responses = Vec::new();
    for id in [existing, missing] {
        let request = Request::builder()
            .method(Method::DELETE)
            .uri(format!("/properties/{id}"))
            .body(Body::empty())
            .unwrap();
        let res = app.clone().oneshot(request).await.unwrap();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        responses.push(body_json(res).await);
    }
    assert_eq!(responses[0], responses[1]);
}

#[tokio::test]
async fn an_empty_patch_returns_the_record_unchanged() {
    let app = make_app();
    let token = login(&app).await;
    let before = first_listing(&app).await;
    let id = before["id"].as_str().unwrap();

    let request = Request::builder()
        .method(Method::PATCH)
        .uri(format!("/properties/{id}"))
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{}"))
        .unwrap();

    let res = app.oneshot(request).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    // `updated_at` included: a no-op patch must not bump it.
    assert_eq!(body_json(res).await, before);
}
