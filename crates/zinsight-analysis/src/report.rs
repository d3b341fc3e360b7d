//! Assembly of the final search payload.

use serde::Serialize;
use zinsight_client::SearchResults;

use crate::aggregate::{
    keyword_counts, product_type_counts, store_summaries, top_product, KeywordCount,
    ProductTypeCount, StoreSummary,
};
use crate::enrich::{enrich_products, EnrichedProduct};

/// Enriched result page with its rollups.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchReport {
    pub products: Vec<EnrichedProduct>,
    /// Serialized as `null` when the page is empty.
    pub top_product: Option<EnrichedProduct>,
    pub analysis: Analysis,
    pub market: Market,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub keywords: Vec<KeywordCount>,
    pub stores: Vec<StoreSummary>,
    pub product_types: Vec<ProductTypeCount>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Market {
    /// Total matches for the term reported upstream.
    pub saturation: u64,
}

impl SearchReport {
    /// Enriches a validated result page and builds every rollup.
    #[must_use]
    pub fn from_results(results: SearchResults) -> Self {
        Self::assemble(enrich_products(results.products), results.num_recs)
    }

    /// Builds the rollups over already-enriched products.
    #[must_use]
    pub fn assemble(products: Vec<EnrichedProduct>, saturation: u64) -> Self {
        let top_product = top_product(&products).cloned();
        let analysis = Analysis {
            keywords: keyword_counts(&products),
            stores: store_summaries(&products),
            product_types: product_type_counts(&products),
        };

        tracing::debug!(
            products = products.len(),
            keywords = analysis.keywords.len(),
            stores = analysis.stores.len(),
            product_types = analysis.product_types.len(),
            "assembled search report"
        );

        Self {
            products,
            top_product,
            analysis,
            market: Market { saturation },
        }
    }
}
