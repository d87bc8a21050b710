use crate::core::config::AuthConfig;
use crate::core::error::AppError;
use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, Method},
    middleware::Next,
    response::Response,
};
use base64::prelude::*;
use std::sync::Arc;
use subtle::ConstantTimeEq;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestId, RequestId};
use tracing::Span;
use uuid::Uuid;

/// Request ID generator using UUID v7 (time-ordered)
#[derive(Clone, Copy)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Custom MakeSpan that includes request_id in the tracing span
#[derive(Clone, Debug)]
pub struct MakeSpanWithRequestId;

impl<B> tower_http::trace::MakeSpan<B> for MakeSpanWithRequestId {
    fn make_span(&mut self, request: &axum::http::Request<B>) -> Span {
        let request_id = request
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-");

        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %request_id,
        )
    }
}

pub fn cors_layer(allowed_origins: Vec<String>) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    // If origins list contains "*", allow any origin
    if allowed_origins.iter().any(|o| o == "*") {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors.allow_origin(AllowOrigin::list(origins))
    }
}

/// First stage of the station chain: record method and target, then continue.
pub async fn log_request(req: Request, next: Next) -> Response {
    tracing::info!(
        method = %req.method(),
        uri = %req.uri(),
        "Method: {}, URI: {}",
        req.method(),
        req.uri()
    );
    next.run(req).await
}

/// Second stage of the station chain.
///
/// GET requests pass through untouched. Every other method must present
/// Basic credentials equal to the configured pair, otherwise the request is
/// answered with 401 and the inner handler never runs.
pub async fn basic_auth(
    State(credentials): State<Arc<AuthConfig>>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if req.method() == Method::GET {
        return Ok(next.run(req).await);
    }

    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    if !credentials_match(auth_header, &credentials) {
        tracing::warn!(method = %req.method(), uri = %req.uri(), "Rejected unauthenticated request");
        return Err(AppError::Unauthorized("Unauthorized".to_string()));
    }

    Ok(next.run(req).await)
}

/// Decode an `Authorization: Basic ...` value and compare it with the expected pair
pub fn credentials_match(auth_header: Option<&str>, expected: &AuthConfig) -> bool {
    let Some((username, password)) = auth_header.and_then(decode_basic) else {
        return false;
    };

    let user_ok = username.as_bytes().ct_eq(expected.username.as_bytes());
    let pass_ok = password.as_bytes().ct_eq(expected.password.as_bytes());
    (user_ok & pass_ok).into()
}

fn decode_basic(value: &str) -> Option<(String, String)> {
    let (scheme, encoded) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("Basic") {
        return None;
    }

    let decoded = BASE64_STANDARD.decode(encoded.trim()).ok()?;
    let creds = String::from_utf8(decoded).ok()?;
    let (username, password) = creds.split_once(':')?;
    Some((username.to_string(), password.to_string()))
}
