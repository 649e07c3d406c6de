// coffee-server/tests/common/mod.rs
// Shared harness: in-memory database, fixture signing keys, token minting

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use coffee_server::auth::{KeySource, StaticKeySet, TokenValidator};
use coffee_server::db::DbService;
use coffee_server::{AppState, api};
use http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use jsonwebtoken::jwk::JwkSet;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde_json::{Value, json};
use tower::ServiceExt;

pub const AUDIENCE: &str = "coffee";
pub const ISSUER: &str = "https://coffee-test.auth0.com/";
pub const KID: &str = "test-key";

pub const ISSUER_KEY_PEM: &str = include_str!("../fixtures/issuer_key.pem");
pub const FOREIGN_KEY_PEM: &str = include_str!("../fixtures/foreign_key.pem");

/// Public half of `issuer_key.pem`
const ISSUER_KEY_N: &str = "vo4FnyFSnJJfRirTGGcpi9NXP83MGBSpPwGbCybCDt4gnKLo0abstZ-KT44-O5jGY5sl-EJ2yMRDY65O7Y_2aF2RHfZ8o5qKPXR1dIL2P_FUqaWfMZuoD4BKu-Ykb3n4u_lrSNCN7e7TU1jZYW4M_6uHrG-zjRovLeOvG5Bas-nWpiBydwJFI9fbn4vEe2CT7-vUZB9fvfa3Ej68XSnOpEkWtdvv4updMxq3gPrspQu4N5ywZIoevBO3M0CZ1U-xMfG3qd2aOAwATqeiEEVkxxW9gnZYbwiojVW2sYscuTPCRQNl_5yLaap5ebyCzEWwVnRAEa5mns-sYggzZM99gw";

pub fn issuer_key_set() -> JwkSet {
    serde_json::from_value(json!({
        "keys": [{
            "kty": "RSA",
            "kid": KID,
            "alg": "RS256",
            "use": "sig",
            "n": ISSUER_KEY_N,
            "e": "AQAB",
        }]
    }))
    .unwrap()
}

pub fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Claims of a valid token granting `permissions`
pub fn claims(permissions: &[&str]) -> Value {
    json!({
        "iss": ISSUER,
        "sub": "auth0|barista",
        "aud": AUDIENCE,
        "iat": now(),
        "exp": now() + 3600,
        "permissions": permissions,
    })
}

/// Sign arbitrary claims with the given key; `kid` is omitted when `None`
pub fn sign(claims: &Value, kid: Option<&str>, pem: &str) -> String {
    let mut header = Header::new(Algorithm::RS256);
    header.kid = kid.map(str::to_string);
    let key = EncodingKey::from_rsa_pem(pem.as_bytes()).unwrap();
    jsonwebtoken::encode(&header, claims, &key).unwrap()
}

/// Valid token signed by the issuer key
pub fn token(permissions: &[&str]) -> String {
    sign(&claims(permissions), Some(KID), ISSUER_KEY_PEM)
}

/// Token granting every drink permission
pub fn barista_token() -> String {
    token(coffee_server::auth::permissions::ALL_PERMISSIONS)
}

pub struct TestApp {
    pub state: AppState,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_keys(Arc::new(StaticKeySet::new(issuer_key_set()))).await
    }

    pub async fn with_keys(keys: Arc<dyn KeySource>) -> Self {
        let db = DbService::in_memory().await.unwrap();
        db.migrate().await.unwrap();
        let validator = TokenValidator::new(keys, AUDIENCE.to_string(), ISSUER.to_string());
        Self {
            state: AppState::with_parts(db.pool, validator),
        }
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = api::build_app(self.state.clone())
            .oneshot(request)
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    /// Send with an optional bearer token and optional JSON body
    pub async fn call(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let body = match body {
            Some(v) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(v.to_string())
            }
            None => Body::empty(),
        };
        self.send(builder.body(body).unwrap()).await
    }

    /// Send with a raw `Authorization` header value
    pub async fn call_with_header(&self, method: Method, uri: &str, auth: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::AUTHORIZATION, auth)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    /// Create a drink through the API and return its long form
    pub async fn create_drink(&self, title: &str, recipe: Value) -> Value {
        let (status, body) = self
            .call(
                Method::POST,
                "/drinks",
                Some(&barista_token()),
                Some(json!({ "title": title, "recipe": recipe })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "create failed: {body}");
        body["drinks"][0].clone()
    }

    pub async fn public_menu(&self) -> Vec<Value> {
        let (status, body) = self.call(Method::GET, "/drinks", None, None).await;
        assert_eq!(status, StatusCode::OK);
        body["drinks"].as_array().cloned().unwrap_or_default()
    }
}

/// Assert the error envelope
pub fn assert_error(status: StatusCode, body: &Value, expected: StatusCode, message: &str) {
    assert_eq!(status, expected, "unexpected status, body: {body}");
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], json!(expected.as_u16()));
    assert_eq!(body["message"], json!(message));
}
