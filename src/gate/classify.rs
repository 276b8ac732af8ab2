//! Request classification.
//!
//! # Responsibilities
//! - Decide, per request, whether the gate bypasses, forwards, or intercepts
//! - Keep bootstrap and admin traffic reachable regardless of version
//!
//! # Design Decisions
//! - Evaluation order is load-bearing: bypass checks run before any version
//!   check, so a client that cannot upgrade in-app can always reach the
//!   auth-bootstrap routes
//! - Pure function over plain data; no framework types, no captured state
//! - Exactly one classification per request, by construction

use crate::gate::version::Version;

/// The outcome of classifying a single request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Allow-listed traffic; the gate never inspects its version.
    Bypassed,
    /// Versioned client at or above the minimum; forwarded untouched.
    Current,
    /// No version signal present; intercepted with a synthetic response.
    MissingVersion,
    /// Version strictly below the minimum; intercepted with a synthetic
    /// response.
    Outdated,
}

impl Classification {
    /// True when the gate substitutes a synthetic response.
    pub fn is_intercepted(self) -> bool {
        matches!(self, Self::MissingVersion | Self::Outdated)
    }

    /// Stable label for logs and metrics.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bypassed => "bypassed",
            Self::Current => "current",
            Self::MissingVersion => "missing_version",
            Self::Outdated => "outdated",
        }
    }
}

/// Routing-relevant request metadata, independent of the host framework.
#[derive(Debug, Default, Clone, Copy)]
pub struct RequestMeta<'a> {
    /// Request path with the query string already stripped.
    pub path: &'a str,
    /// `Origin` header, when present.
    pub origin: Option<&'a str>,
    /// `Referer` header, when present. Browsers omit `Origin` on
    /// same-origin GET navigations, so admin traffic may only carry this.
    pub referer: Option<&'a str>,
    /// `X-Requested-With` header, when present.
    pub requested_with: Option<&'a str>,
}

/// Classifies requests against the minimum supported version and the
/// bypass rules.
#[derive(Debug)]
pub struct Classifier {
    minimum_version: Version,
    bypass_paths: Vec<String>,
    admin_path_prefix: String,
    admin_origin_marker: String,
}

impl Classifier {
    pub fn new(
        minimum_version: &str,
        bypass_paths: Vec<String>,
        admin_path_prefix: impl Into<String>,
        admin_origin_marker: &str,
    ) -> Self {
        Self {
            minimum_version: Version::parse(minimum_version),
            bypass_paths,
            admin_path_prefix: admin_path_prefix.into(),
            admin_origin_marker: admin_origin_marker.to_lowercase(),
        }
    }

    /// Produce exactly one classification for the request.
    pub fn classify(&self, version: Option<&str>, meta: &RequestMeta<'_>) -> Classification {
        if self.is_bypassed(meta) {
            return Classification::Bypassed;
        }
        let Some(raw) = version else {
            return Classification::MissingVersion;
        };
        // Malformed versions coerce to 0.0.0 and classify as outdated.
        if Version::parse(raw) < self.minimum_version {
            Classification::Outdated
        } else {
            Classification::Current
        }
    }

    fn is_bypassed(&self, meta: &RequestMeta<'_>) -> bool {
        // Same-origin browser XHR.
        if meta
            .requested_with
            .is_some_and(|v| v.eq_ignore_ascii_case("xmlhttprequest"))
        {
            return true;
        }
        // Admin panel traffic, identified by origin/referer or by path
        // prefix.
        if [meta.origin, meta.referer]
            .into_iter()
            .flatten()
            .any(|o| o.to_lowercase().contains(&self.admin_origin_marker))
        {
            return true;
        }
        if meta.path.starts_with(&self.admin_path_prefix) {
            return true;
        }
        // Auth-bootstrap routes stay reachable for every client.
        self.bypass_paths.iter().any(|p| meta.path.starts_with(p.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> Classifier {
        Classifier::new(
            "2.0.0",
            vec![
                "/api/auth/login".into(),
                "/api/auth/signup".into(),
                "/api/auth/refresh-token".into(),
                "/api/auth/forgot-password".into(),
            ],
            "/admin",
            "admin",
        )
    }

    fn meta(path: &str) -> RequestMeta<'_> {
        RequestMeta {
            path,
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_version() {
        assert_eq!(
            classifier().classify(None, &meta("/api/orders")),
            Classification::MissingVersion
        );
    }

    #[test]
    fn test_outdated_version() {
        assert_eq!(
            classifier().classify(Some("1.0.0"), &meta("/api/orders")),
            Classification::Outdated
        );
    }

    #[test]
    fn test_current_version() {
        assert_eq!(
            classifier().classify(Some("2.0.0"), &meta("/api/orders")),
            Classification::Current
        );
        assert_eq!(
            classifier().classify(Some("3.1.0"), &meta("/api/orders")),
            Classification::Current
        );
    }

    #[test]
    fn test_bootstrap_routes_bypass_regardless_of_version() {
        let c = classifier();
        assert_eq!(
            c.classify(None, &meta("/api/auth/login")),
            Classification::Bypassed
        );
        assert_eq!(
            c.classify(Some("0.0.1"), &meta("/api/auth/refresh-token")),
            Classification::Bypassed
        );
    }

    #[test]
    fn test_admin_path_prefix_bypasses() {
        assert_eq!(
            classifier().classify(None, &meta("/admin/dashboard")),
            Classification::Bypassed
        );
    }

    #[test]
    fn test_admin_origin_bypasses() {
        let m = RequestMeta {
            path: "/api/orders",
            origin: Some("https://Admin.example.com"),
            ..Default::default()
        };
        assert_eq!(classifier().classify(None, &m), Classification::Bypassed);
    }

    #[test]
    fn test_admin_referer_bypasses_without_origin() {
        // Same-origin GET navigations carry Referer but no Origin.
        let m = RequestMeta {
            path: "/api/orders",
            referer: Some("https://admin.example.com/panel"),
            ..Default::default()
        };
        assert_eq!(classifier().classify(None, &m), Classification::Bypassed);
    }

    #[test]
    fn test_admin_referer_checked_alongside_clean_origin() {
        let m = RequestMeta {
            path: "/api/orders",
            origin: Some("https://app.example.com"),
            referer: Some("https://admin.example.com/panel"),
            ..Default::default()
        };
        assert_eq!(classifier().classify(None, &m), Classification::Bypassed);
    }

    #[test]
    fn test_xhr_bypasses() {
        let m = RequestMeta {
            path: "/api/orders",
            requested_with: Some("XMLHttpRequest"),
            ..Default::default()
        };
        assert_eq!(classifier().classify(None, &m), Classification::Bypassed);
    }

    #[test]
    fn test_malformed_version_classifies_as_outdated() {
        assert_eq!(
            classifier().classify(Some("not-a-version"), &meta("/api/orders")),
            Classification::Outdated
        );
    }
}
