//! Per-product statistics derived from badges.

use serde::Serialize;
use zinsight_client::Product;

use crate::badge::BadgeMetric;

/// Monthly activity figures for one product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub sales: u64,
    pub views: u64,
    pub carts: u64,
    /// Sales per hundred views; `0.0` when there are no views.
    pub conversion_rate: f64,
}

impl Stats {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(sales: u64, views: u64, carts: u64) -> Self {
        let conversion_rate = if views > 0 {
            (sales as f64 / views as f64) * 100.0
        } else {
            0.0
        };
        Self {
            sales,
            views,
            carts,
            conversion_rate,
        }
    }
}

/// An upstream product with its [`Stats`] attached.
///
/// Serializes as the original product object plus a `stats` key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedProduct {
    #[serde(flatten)]
    product: Product,
    stats: Stats,
}

impl EnrichedProduct {
    #[must_use]
    pub fn product(&self) -> &Product {
        &self.product
    }

    #[must_use]
    pub fn stats(&self) -> &Stats {
        &self.stats
    }
}

/// Attaches badge-derived stats to `product`.
///
/// Missing badges count as zero. An upstream `stats` key, if any, is
/// replaced by the computed one.
#[must_use]
pub fn enrich_product(mut product: Product) -> EnrichedProduct {
    let sales = BadgeMetric::Sales.read(&product).unwrap_or(0);
    let views = BadgeMetric::Views.read(&product).unwrap_or(0);
    let carts = BadgeMetric::Carts.read(&product).unwrap_or(0);
    product.extra.remove("stats");

    EnrichedProduct {
        product,
        stats: Stats::new(sales, views, carts),
    }
}

/// Enriches every product, preserving order.
#[must_use]
pub fn enrich_products(products: Vec<Product>) -> Vec<EnrichedProduct> {
    products.into_iter().map(enrich_product).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn product(value: serde_json::Value) -> Product {
        serde_json::from_value(value).expect("product fixture")
    }

    #[test]
    fn product_without_badges_has_zero_stats() {
        let enriched = enrich_product(product(json!({"storeName": "A"})));
        let stats = enriched.stats();
        assert_eq!(stats.sales, 0);
        assert_eq!(stats.views, 0);
        assert_eq!(stats.carts, 0);
        assert!(stats.conversion_rate.abs() < f64::EPSILON);
        assert!(stats.conversion_rate.is_finite());
    }

    #[test]
    fn conversion_rate_is_zero_without_views() {
        let enriched = enrich_product(product(json!({"badges": [
            {"type": "BoughtXTimesInMonth", "orderItemCount": 12}
        ]})));
        assert_eq!(enriched.stats().sales, 12);
        assert!(enriched.stats().conversion_rate.abs() < f64::EPSILON);
    }

    #[test]
    fn reads_all_three_metrics() {
        let enriched = enrich_product(product(json!({"badges": [
            {"type": "BoughtXTimesInMonth", "orderItemCount": 5},
            {"type": "XViewsInMonth", "viewCount": 200},
            {"type": "InXCarts", "cartCount": 7}
        ]})));
        let stats = enriched.stats();
        assert_eq!((stats.sales, stats.views, stats.carts), (5, 200, 7));
        assert!((stats.conversion_rate - 2.5).abs() < 1e-9);
    }

    #[test]
    fn serializes_original_fields_plus_stats() {
        let raw = json!({
            "productId": "p-1",
            "storeName": "A",
            "price": 10.0,
            "badges": [{"type": "XViewsInMonth", "viewCount": 4}]
        });
        let enriched = enrich_product(product(raw));
        let value = serde_json::to_value(&enriched).unwrap();
        assert_eq!(value["productId"], "p-1");
        assert_eq!(value["storeName"], "A");
        assert_eq!(value["badges"][0]["viewCount"], 4);
        assert_eq!(
            value["stats"],
            json!({"sales": 0, "views": 4, "carts": 0, "conversionRate": 0.0})
        );
    }

    #[test]
    fn replaces_upstream_stats_key() {
        let enriched = enrich_product(product(json!({"stats": "stale"})));
        let value = serde_json::to_value(&enriched).unwrap();
        assert_eq!(value["stats"]["sales"], 0);
    }

    #[test]
    fn enrich_products_preserves_order() {
        let products = vec![
            product(json!({"productId": "a"})),
            product(json!({"productId": "b"})),
            product(json!({"productId": "c"})),
        ];
        let ids: Vec<_> = enrich_products(products)
            .iter()
            .filter_map(|p| p.product().identifier())
            .collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }
}
