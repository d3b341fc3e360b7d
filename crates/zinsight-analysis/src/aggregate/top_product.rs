use crate::enrich::EnrichedProduct;

/// The best-selling product, or `None` for an empty page.
///
/// Ties resolve to the product that appears first.
#[must_use]
pub fn top_product(products: &[EnrichedProduct]) -> Option<&EnrichedProduct> {
    products.iter().fold(None, |best, candidate| match best {
        Some(current) if current.stats().sales >= candidate.stats().sales => Some(current),
        _ => Some(candidate),
    })
}
