//! Rollups over an enriched result page.
//!
//! Every rollup owns its accumulator for the duration of one call and returns
//! a plain sorted `Vec`. Sorts are stable, so equal counts keep the order in
//! which their key was first seen.

mod keywords;
mod product_types;
mod stores;
mod top_product;

use std::collections::HashMap;

pub use keywords::{keyword_counts, KeywordCount};
pub use product_types::{product_type_counts, ProductTypeCount};
pub use stores::{store_summaries, StoreSummary, UNKNOWN_STORE};
pub use top_product::top_product;

/// Counts occurrences of each key, keeping first-seen order, then sorts by
/// count descending.
fn ranked_counts<'a, I>(keys: I) -> Vec<(String, u64)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut counts: Vec<(String, u64)> = Vec::new();

    for key in keys {
        match index.get(key) {
            Some(&slot) => counts[slot].1 = counts[slot].1.saturating_add(1),
            None => {
                index.insert(key, counts.len());
                counts.push((key.to_owned(), 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranked_counts_sorts_descending() {
        let ranked = ranked_counts(["b", "a", "a", "c", "a", "b"]);
        assert_eq!(
            ranked,
            vec![
                ("a".to_owned(), 3),
                ("b".to_owned(), 2),
                ("c".to_owned(), 1)
            ]
        );
    }

    #[test]
    fn ranked_counts_keeps_first_seen_order_for_ties() {
        let ranked = ranked_counts(["z", "y", "x", "y", "z"]);
        let keys: Vec<&str> = ranked.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["z", "y", "x"]);
    }

    #[test]
    fn ranked_counts_of_nothing_is_empty() {
        assert!(ranked_counts(std::iter::empty()).is_empty());
    }
}
