use serde::Serialize;

use crate::enrich::EnrichedProduct;

use super::ranked_counts;

/// How many products carry a keyword token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordCount {
    pub term: String,
    pub count: u64,
}

/// Tallies `+`-delimited keyword tokens across all products.
///
/// Tokens are trimmed and empty tokens dropped. A token repeated within one
/// product counts once per occurrence.
#[must_use]
pub fn keyword_counts(products: &[EnrichedProduct]) -> Vec<KeywordCount> {
    let tokens = products
        .iter()
        .filter_map(|p| p.product().keywords.as_deref())
        .flat_map(|keywords| keywords.split('+'))
        .map(str::trim)
        .filter(|token| !token.is_empty());

    ranked_counts(tokens)
        .into_iter()
        .map(|(term, count)| KeywordCount { term, count })
        .collect()
}
