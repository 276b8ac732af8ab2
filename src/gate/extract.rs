//! Client version extraction from request headers.
//!
//! # Responsibilities
//! - Read the explicit version header, falling back to its alias
//! - Parse the free-form client-identifier header as a last resort
//!
//! # Design Decisions
//! - Precedence is fixed: primary header, alias header, client identifier
//! - Matching is case-insensitive throughout (per HTTP header semantics)
//! - Patterns are compiled once at construction, never per request
//! - Extraction never fails; an unrecognized header set yields `None`

use axum::http::HeaderMap;
use regex::{Regex, RegexBuilder};

/// Extracts the client version signal from a request's headers.
#[derive(Debug)]
pub struct VersionExtractor {
    primary_header: String,
    alias_header: String,
    client_id_header: String,
    /// Anchored "Product/x.y.z" token at the start of the client identifier.
    product_pattern: Regex,
    /// Fallback "Version/x.y.z" token anywhere in the client identifier.
    version_pattern: Regex,
}

impl VersionExtractor {
    /// Create an extractor for the given header names and product token.
    pub fn new(
        primary_header: impl Into<String>,
        alias_header: impl Into<String>,
        client_id_header: impl Into<String>,
        product_name: &str,
    ) -> Self {
        // regex::escape makes the product token a literal, so the pattern
        // is valid for any configured product name.
        let product_pattern =
            RegexBuilder::new(&format!(r"^{}/(\d+(?:\.\d+)*)", regex::escape(product_name)))
                .case_insensitive(true)
                .build()
                .expect("escaped literal is a valid pattern");
        let version_pattern = RegexBuilder::new(r"Version/(\d+(?:\.\d+)*)")
            .case_insensitive(true)
            .build()
            .expect("static pattern is valid");

        Self {
            primary_header: primary_header.into(),
            alias_header: alias_header.into(),
            client_id_header: client_id_header.into(),
            product_pattern,
            version_pattern,
        }
    }

    /// Extract the client version, or `None` when no signal is present.
    pub fn extract(&self, headers: &HeaderMap) -> Option<String> {
        if let Some(version) = header_str(headers, &self.primary_header) {
            return Some(version.trim().to_string());
        }
        if let Some(version) = header_str(headers, &self.alias_header) {
            return Some(version.trim().to_string());
        }

        let client_id = header_str(headers, &self.client_id_header)?;
        self.product_pattern
            .captures(client_id)
            .or_else(|| self.version_pattern.captures(client_id))
            .map(|caps| caps[1].to_string())
    }
}

/// Read a header as a non-empty string slice.
fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.trim().is_empty())
}
