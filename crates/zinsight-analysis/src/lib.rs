//! Enrichment and aggregation over one page of search results.
//!
//! Each product gets per-product stats read from its badges; the enriched
//! page is then rolled up by keyword, store, and product type, and the best
//! seller is picked. [`SearchReport`] is the assembled result.

pub mod aggregate;
pub mod badge;
pub mod enrich;
pub mod report;

pub use aggregate::{
    keyword_counts, product_type_counts, store_summaries, top_product, KeywordCount,
    ProductTypeCount, StoreSummary, UNKNOWN_STORE,
};
pub use badge::{badge_value, BadgeMetric};
pub use enrich::{enrich_product, enrich_products, EnrichedProduct, Stats};
pub use report::{Analysis, Market, SearchReport};
