//! Compatibility gate middleware.
//! Intercepts requests from unsupported clients before any handler runs.

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::gate::{CompatibilityGate, GateDecision};
use crate::observability::metrics;

pub async fn compatibility_gate(
    State(gate): State<Arc<CompatibilityGate>>,
    req: Request<Body>,
    next: Next,
) -> Response {
    // uri().path() excludes the query string, which synthetic template
    // lookup must never see.
    let decision = gate.evaluate(req.headers(), req.uri().path());

    match decision {
        GateDecision::Forward(classification) => {
            tracing::debug!(
                classification = classification.as_str(),
                path = %req.uri().path(),
                "Request passed compatibility gate"
            );
            metrics::record_decision(classification.as_str());
            next.run(req).await
        }
        GateDecision::Intercept {
            classification,
            template,
            body,
        } => {
            tracing::info!(
                classification = classification.as_str(),
                template,
                path = %req.uri().path(),
                method = %req.method(),
                "Intercepted unsupported client"
            );
            metrics::record_decision(classification.as_str());
            metrics::record_intercept(template);
            // Always 200: legacy clients crash on unexpected error shapes,
            // so rejection travels in the body, not the status line.
            (StatusCode::OK, Json(body)).into_response()
        }
    }
}
