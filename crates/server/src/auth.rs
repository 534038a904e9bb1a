//! Bearer/cookie token verification for protected routes.
//!
//! The token travels either in the `token` cookie or in an
//! `Authorization: Bearer` header. Verification failures answer with the
//! bare `{"error": ...}` body this endpoint family has always used, not the
//! standard envelope.

use axum::extract::{Request, State};
use axum::http::{header, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use uuid::Uuid;

use crate::state::AppState;

/// Verified account identity, injected into request extensions.
#[derive(Clone, Copy, Debug)]
pub struct AuthAccount(pub Uuid);

#[derive(Debug, Deserialize)]
struct Claims {
    #[serde(rename = "accountId")]
    account_id: Uuid,
    #[allow(dead_code)]
    exp: usize,
}

fn unauthorized(message: &str) -> Response {
    (StatusCode::UNAUTHORIZED, Json(serde_json::json!({ "error": message }))).into_response()
}

pub(crate) fn token_from_request(req: &Request) -> Option<String> {
    if let Some(cookies) = req.headers().get(header::COOKIE).and_then(|v| v.to_str().ok()) {
        for part in cookies.split(';') {
            if let Some(value) = part.trim().strip_prefix("token=") {
                if !value.is_empty() {
                    return Some(value.to_string());
                }
            }
        }
    }
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::to_string)
}

pub async fn require_account(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let Some(token) = token_from_request(&req) else {
        return unauthorized("Authentication required");
    };

    let key = DecodingKey::from_secret(state.jwt_secret.as_bytes());
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    match decode::<Claims>(&token, &key, &validation) {
        Ok(data) => {
            req.extensions_mut().insert(AuthAccount(data.claims.account_id));
            next.run(req).await
        }
        Err(err) => {
            tracing::warn!(error = %err, "token verification failed");
            unauthorized("Invalid token")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn request_with(header_name: header::HeaderName, value: &str) -> Request {
        axum::http::Request::builder()
            .header(header_name, value)
            .body(Body::empty())
            .unwrap()
    }

    #[test]
    fn cookie_token_wins_over_header() {
        let req = axum::http::Request::builder()
            .header(header::COOKIE, "session=x; token=cookie-token")
            .header(header::AUTHORIZATION, "Bearer header-token")
            .body(Body::empty())
            .unwrap();
        assert_eq!(token_from_request(&req).as_deref(), Some("cookie-token"));
    }

    #[test]
    fn bearer_header_is_a_fallback() {
        let req = request_with(header::AUTHORIZATION, "Bearer abc.def.ghi");
        assert_eq!(token_from_request(&req).as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn malformed_authorization_yields_none() {
        let req = request_with(header::AUTHORIZATION, "Token abc");
        assert!(token_from_request(&req).is_none());
    }
}
