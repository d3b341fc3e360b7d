use serde::Serialize;

use crate::enrich::EnrichedProduct;

use super::ranked_counts;

/// Number of products of one type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductTypeCount {
    #[serde(rename = "type")]
    pub product_type: String,
    pub count: u64,
}

/// Counts products per `productType`. Products without a type are skipped.
#[must_use]
pub fn product_type_counts(products: &[EnrichedProduct]) -> Vec<ProductTypeCount> {
    let types = products
        .iter()
        .filter_map(|p| p.product().product_type.as_deref())
        .filter(|t| !t.is_empty());

    ranked_counts(types)
        .into_iter()
        .map(|(product_type, count)| ProductTypeCount {
            product_type,
            count,
        })
        .collect()
}
