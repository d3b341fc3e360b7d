//! Metric lookup over a product's badge list.

use zinsight_client::Product;

/// Badge-backed metrics read during enrichment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeMetric {
    /// Orders in the last month.
    Sales,
    /// Product page views in the last month.
    Views,
    /// Carts currently holding the product.
    Carts,
}

impl BadgeMetric {
    /// Badge `type` tag carrying this metric.
    #[must_use]
    pub fn badge_type(self) -> &'static str {
        match self {
            BadgeMetric::Sales => "BoughtXTimesInMonth",
            BadgeMetric::Views => "XViewsInMonth",
            BadgeMetric::Carts => "InXCarts",
        }
    }

    /// Key holding the count inside the badge body.
    #[must_use]
    pub fn value_key(self) -> &'static str {
        match self {
            BadgeMetric::Sales => "orderItemCount",
            BadgeMetric::Views => "viewCount",
            BadgeMetric::Carts => "cartCount",
        }
    }

    /// Reads this metric from `product`, `None` when no badge carries it.
    #[must_use]
    pub fn read(self, product: &Product) -> Option<u64> {
        badge_value(product, self.badge_type(), self.value_key())
    }
}

/// Returns the count under `value_key` of the first badge tagged `badge_type`.
///
/// Only the first matching badge is consulted; a later badge of the same type
/// is ignored even when the first one lacks the key. Missing or empty badge
/// lists yield `None`.
#[must_use]
pub fn badge_value(product: &Product, badge_type: &str, value_key: &str) -> Option<u64> {
    product
        .badges()
        .iter()
        .find(|badge| badge.is_kind(badge_type))
        .and_then(|badge| badge.count(value_key))
}
