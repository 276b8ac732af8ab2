//! Synthetic response templates.
//!
//! # Responsibilities
//! - Map a normalized request path to an endpoint-shaped JSON body
//! - Embed the shared "update required" notice under a fixed key
//!
//! # Design Decisions
//! - Bodies mirror the real endpoint shapes so legacy client parsers never
//!   throw; the payloads themselves are inert (empty orders, a zero-price
//!   placeholder product, a maintenance settings payload whose order window
//!   can never be satisfied)
//! - Lookup is exact match, then longest-prefix-first (prefixes sorted by
//!   descending length at construction), then a generic default — coverage
//!   is total by construction
//! - Intercepted requests always get HTTP 200; rejection is visible only in
//!   the body shape and the embedded notice

use serde_json::{json, Value};

use crate::config::schema::NoticeConfig;
use crate::gate::classify::Classification;

/// Fixed key carrying the update notice in every synthetic body.
pub const UPDATE_NOTICE_KEY: &str = "_updateRequired";

/// Minimum order amount no cart can reach; keeps legacy clients from
/// submitting orders while the settings screen still renders.
const UNREACHABLE_MIN_ORDER_AMOUNT: u64 = 999_999;

/// Endpoint shapes the synthesizer knows how to fabricate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TemplateShape {
    Products,
    Orders,
    Settings,
    Generic,
}

#[derive(Debug)]
struct RouteTemplate {
    prefix: String,
    shape: TemplateShape,
}

/// Static table mapping path prefixes to synthetic response shapes.
#[derive(Debug)]
pub struct TemplateTable {
    routes: Vec<RouteTemplate>,
    notice: NoticeConfig,
}

impl TemplateTable {
    pub fn new(notice: NoticeConfig) -> Self {
        let mut routes = vec![
            RouteTemplate {
                prefix: "/api/products".to_string(),
                shape: TemplateShape::Products,
            },
            RouteTemplate {
                prefix: "/api/orders".to_string(),
                shape: TemplateShape::Orders,
            },
            RouteTemplate {
                prefix: "/api/settings".to_string(),
                shape: TemplateShape::Settings,
            },
        ];
        // Longest prefix first, so `/api/orders/cancel`-style overlaps
        // resolve deterministically rather than by insertion order.
        routes.sort_by(|a, b| b.prefix.len().cmp(&a.prefix.len()));
        Self { routes, notice }
    }

    /// Fabricate the synthetic body for an intercepted request.
    ///
    /// `path` must already have its query string stripped.
    pub fn synthesize(&self, path: &str, classification: Classification) -> Value {
        let shape = self.lookup(path);
        let notice = self.notice_value(classification);
        match shape {
            TemplateShape::Products => json!({
                "success": true,
                "products": [self.placeholder_product()],
                UPDATE_NOTICE_KEY: notice,
            }),
            TemplateShape::Orders => json!({
                "success": true,
                "orders": [],
                UPDATE_NOTICE_KEY: notice,
            }),
            TemplateShape::Settings => json!({
                "success": true,
                "maintenanceMode": true,
                "minimumOrderAmount": UNREACHABLE_MIN_ORDER_AMOUNT,
                // Zero-length order window: ordering is never open.
                "orderStartHour": 0,
                "orderEndHour": 0,
                "deliveryFee": 0,
                UPDATE_NOTICE_KEY: notice,
            }),
            TemplateShape::Generic => json!({
                "success": true,
                "data": null,
                "message": self.notice.message,
                UPDATE_NOTICE_KEY: notice,
            }),
        }
    }

    /// Stable label of the matched template, for logs and metrics.
    pub fn template_label(&self, path: &str) -> &'static str {
        match self.lookup(path) {
            TemplateShape::Products => "products",
            TemplateShape::Orders => "orders",
            TemplateShape::Settings => "settings",
            TemplateShape::Generic => "generic",
        }
    }

    fn lookup(&self, path: &str) -> TemplateShape {
        if let Some(t) = self.routes.iter().find(|t| t.prefix == path) {
            return t.shape;
        }
        // Routes are pre-sorted by descending prefix length.
        self.routes
            .iter()
            .find(|t| path.starts_with(t.prefix.as_str()))
            .map(|t| t.shape)
            .unwrap_or(TemplateShape::Generic)
    }

    fn notice_value(&self, classification: Classification) -> Value {
        json!({
            "title": self.notice.title,
            "message": self.notice.message,
            "iosStoreUrl": self.notice.ios_store_url,
            "androidStoreUrl": self.notice.android_store_url,
            "isForceUpdate": true,
            "reason": classification.as_str(),
        })
    }

    /// Single zero-price placeholder rendered by clients as an upgrade
    /// banner in the product list.
    fn placeholder_product(&self) -> Value {
        json!({
            "_id": "app-update-required",
            "name": self.notice.title,
            "description": self.notice.message,
            "price": 0,
            "category": "update",
            "imageUrl": "",
            "inStock": false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> TemplateTable {
        TemplateTable::new(NoticeConfig::default())
    }

    #[test]
    fn test_products_template() {
        let body = table().synthesize("/api/products", Classification::MissingVersion);
        assert_eq!(body["success"], json!(true));
        let products = body["products"].as_array().unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0]["category"], json!("update"));
        assert_eq!(products[0]["price"], json!(0));
        assert_eq!(body[UPDATE_NOTICE_KEY]["isForceUpdate"], json!(true));
    }

    #[test]
    fn test_orders_template_is_empty_list() {
        let body = table().synthesize("/api/orders", Classification::Outdated);
        assert_eq!(body["orders"], json!([]));
        assert!(body[UPDATE_NOTICE_KEY].is_object());
    }

    #[test]
    fn test_settings_template_is_unsatisfiable() {
        let body = table().synthesize("/api/settings", Classification::Outdated);
        assert_eq!(body["maintenanceMode"], json!(true));
        assert_eq!(body["minimumOrderAmount"], json!(UNREACHABLE_MIN_ORDER_AMOUNT));
        assert_eq!(body["orderStartHour"], body["orderEndHour"]);
    }

    #[test]
    fn test_default_template_always_matches() {
        let body = table().synthesize("/api/unknown-endpoint-xyz", Classification::MissingVersion);
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["data"], json!(null));
        assert!(body["message"].is_string());
        assert!(body[UPDATE_NOTICE_KEY].is_object());
    }

    #[test]
    fn test_prefix_match_covers_subroutes() {
        let t = table();
        assert_eq!(t.template_label("/api/orders/42/cancel"), "orders");
        assert_eq!(t.template_label("/api/products/featured"), "products");
    }

    #[test]
    fn test_synthesis_is_idempotent() {
        let t = table();
        let a = t.synthesize("/api/products", Classification::Outdated);
        let b = t.synthesize("/api/products", Classification::Outdated);
        assert_eq!(a, b);
    }
}
