//! Upstream forwarding.
//!
//! # Responsibilities
//! - Rewrite scheme/authority to the configured upstream
//! - Stream the upstream response back to the client
//! - Map transport failures to 502 Bad Gateway
//!
//! # Design Decisions
//! - Single upstream, no load balancing or retries; everything behind the
//!   gate is one API server from the gateway's point of view
//! - Upstream failures occur strictly downstream of the gate and never
//!   affect intercepted requests

use std::str::FromStr;

use axum::{
    body::Body,
    http::{
        uri::{Authority, InvalidUri, Scheme},
        Request, StatusCode, Uri,
    },
    response::{IntoResponse, Response},
};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};

/// HTTP client bound to a single upstream authority.
#[derive(Clone)]
pub struct UpstreamClient {
    client: Client<HttpConnector, Body>,
    authority: Authority,
}

impl UpstreamClient {
    /// Create a client for the given upstream address (host:port).
    pub fn new(address: &str) -> Result<Self, InvalidUri> {
        let authority = Authority::from_str(address)?;
        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());
        Ok(Self { client, authority })
    }

    /// Forward a request to the upstream, rewriting scheme and authority.
    pub async fn forward(&self, mut req: Request<Body>) -> Response {
        let request_id = req
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("unknown")
            .to_string();

        let mut uri_parts = req.uri().clone().into_parts();
        uri_parts.scheme = Some(Scheme::HTTP);
        uri_parts.authority = Some(self.authority.clone());
        match Uri::from_parts(uri_parts) {
            Ok(uri) => *req.uri_mut() = uri,
            Err(e) => {
                tracing::error!(request_id = %request_id, error = %e, "Failed to build upstream URI");
                return (StatusCode::BAD_GATEWAY, "Upstream request failed").into_response();
            }
        }

        match self.client.request(req).await {
            Ok(response) => {
                let (parts, body) = response.into_parts();
                Response::from_parts(parts, Body::new(body))
            }
            Err(e) => {
                tracing::error!(request_id = %request_id, error = %e, "Upstream error");
                (StatusCode::BAD_GATEWAY, "Upstream request failed").into_response()
            }
        }
    }
}
