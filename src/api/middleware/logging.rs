//! Request/response logging middleware

use std::time::Instant;

use axum::{
    body::Body,
    extract::MatchedPath,
    http::Request,
    middleware::Next,
    response::Response,
};
use tracing::info;

use crate::api::types::TRANSACTION_ID_HEADER;

/// Logs every request and its outcome.
/// `TraceLayer` owns the span; this only emits events.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = extract_path(&request);
    let transaction_id = extract_transaction_id(&request);

    info!(
        method = %method,
        path = %path,
        transaction_id = %transaction_id,
        "Incoming request"
    );

    let response = next.run(request).await;
    let status = response.status();

    info!(
        method = %method,
        path = %path,
        status = %status.as_u16(),
        duration_ms = %start.elapsed().as_millis(),
        transaction_id = %transaction_id,
        "Request completed"
    );

    response
}

/// Route template, so document numbers stay out of the logs
fn extract_path(request: &Request<Body>) -> String {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|mp| mp.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string())
}

fn extract_transaction_id(request: &Request<Body>) -> String {
    request
        .headers()
        .get(TRANSACTION_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string()
}
