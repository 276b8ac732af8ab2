//! Compatibility gate subsystem.
//!
//! # Data Flow
//! ```text
//! incoming request headers + path
//!     → extract.rs (version headers, client-identifier patterns)
//!     → classify.rs (bypassed | current | missing-version | outdated)
//!     → templates.rs (synthetic endpoint-shaped body, intercepted only)
//!     → middleware.rs (forward, or write HTTP 200 with the body)
//! ```
//!
//! # Design Decisions
//! - Extractor, classifier, and synthesizer are pure over plain data; the
//!   axum coupling lives in middleware.rs only
//! - Gate state is immutable after construction and shared via Arc
//! - Intercepted requests always receive HTTP 200; legacy clients that
//!   mishandle error statuses keep functioning with an upgrade prompt

pub mod classify;
pub mod extract;
pub mod middleware;
pub mod templates;
pub mod version;

use axum::http::HeaderMap;
use serde_json::Value;

use crate::config::schema::GateConfig;
use classify::{Classification, Classifier, RequestMeta};
use extract::VersionExtractor;
use templates::TemplateTable;

pub use middleware::compatibility_gate;

/// Per-request outcome of the gate.
#[derive(Debug)]
pub enum GateDecision {
    /// Continue the pipeline; the gate has no observable effect.
    Forward(Classification),
    /// Short-circuit with a synthetic HTTP 200 JSON body.
    Intercept {
        classification: Classification,
        template: &'static str,
        body: Value,
    },
}

/// The compatibility gate: extracts a client version signal, classifies the
/// request, and fabricates endpoint-shaped responses for unsupported
/// clients.
#[derive(Debug)]
pub struct CompatibilityGate {
    extractor: VersionExtractor,
    classifier: Classifier,
    templates: TemplateTable,
}

impl CompatibilityGate {
    /// Build a gate from configuration. All options are plain named fields;
    /// nothing is read from globals or the environment.
    pub fn new(config: GateConfig) -> Self {
        let extractor = VersionExtractor::new(
            config.version_header,
            config.version_header_alias,
            config.client_id_header,
            &config.client_product,
        );
        let classifier = Classifier::new(
            &config.minimum_version,
            config.bypass_paths,
            config.admin_path_prefix,
            &config.admin_origin_marker,
        );
        let templates = TemplateTable::new(config.notice);
        Self {
            extractor,
            classifier,
            templates,
        }
    }

    /// Evaluate one request. `path` must already exclude the query string.
    pub fn evaluate(&self, headers: &HeaderMap, path: &str) -> GateDecision {
        let version = self.extractor.extract(headers);
        let meta = RequestMeta {
            path,
            origin: header_str(headers, "origin"),
            referer: header_str(headers, "referer"),
            requested_with: header_str(headers, "x-requested-with"),
        };
        let classification = self.classifier.classify(version.as_deref(), &meta);
        if classification.is_intercepted() {
            GateDecision::Intercept {
                classification,
                template: self.templates.template_label(path),
                body: self.templates.synthesize(path, classification),
            }
        } else {
            GateDecision::Forward(classification)
        }
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}
