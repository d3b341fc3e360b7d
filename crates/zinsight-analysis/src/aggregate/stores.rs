use std::collections::HashMap;

use serde::Serialize;

use crate::enrich::EnrichedProduct;

/// Bucket for products with a missing or empty `storeName`.
pub const UNKNOWN_STORE: &str = "Unknown Store";

/// Totals for one store on the result page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSummary {
    pub name: String,
    pub product_count: u64,
    pub total_sales: u64,
    pub total_price: f64,
    pub average_price: f64,
}

/// Groups products by store and totals their sales and prices.
///
/// Missing prices count as `0`. Output is ordered by `total_sales`
/// descending; stores with equal sales keep first-seen order.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn store_summaries(products: &[EnrichedProduct]) -> Vec<StoreSummary> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut stores: Vec<StoreSummary> = Vec::new();

    for enriched in products {
        let product = enriched.product();
        let name = product
            .store_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(UNKNOWN_STORE);

        let slot = *index.entry(name).or_insert_with(|| {
            stores.push(StoreSummary {
                name: name.to_owned(),
                product_count: 0,
                total_sales: 0,
                total_price: 0.0,
                average_price: 0.0,
            });
            stores.len() - 1
        });

        let store = &mut stores[slot];
        store.product_count = store.product_count.saturating_add(1);
        store.total_price += product.price().unwrap_or(0.0);
        store.total_sales = store.total_sales.saturating_add(enriched.stats().sales);
    }

    for store in &mut stores {
        store.average_price = if store.product_count > 0 {
            store.total_price / store.product_count as f64
        } else {
            0.0
        };
    }

    stores.sort_by(|a, b| b.total_sales.cmp(&a.total_sales));
    stores
}
