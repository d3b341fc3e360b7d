//! Response types for the marketplace search endpoint.
//!
//! ## Envelope
//! The endpoint wraps results as
//! `{ success, data: { search: { searchResultsData: { products, numRecs } } } }`.
//! Every level is modelled as optional so that a missing branch surfaces as
//! [`ClientError::InvalidShape`] from [`SearchEnvelope::into_results`] instead
//! of an opaque serde message. The envelope carries many sibling keys
//! (aggregations, guided search) that are ignored.
//!
//! ### `numRecs`
//! Total matches for the term across all pages. Observed as an integer but
//! accepted as a float or numeric string. Absent means `0`.
//!
//! ## Products
//! Products are passed through to callers, so [`Product`] keeps every key it
//! does not model in [`Product::extra`]. Optional modelled fields that are
//! absent upstream stay absent when re-serialized.
//!
//! ### `price`
//! A number in observed responses, occasionally a numeric string. It is left
//! in [`Product::extra`] so it re-serializes exactly as received, and read
//! through [`Product::price`].
//!
//! ### `keywords`
//! A single string of `+`-delimited tokens, e.g. `"cat+funny cat+mug"`.
//!
//! ### `badges`
//! A sparse list of tagged records: `{"type": "XViewsInMonth", "viewCount": 340}`.
//! The value key differs per badge type, so the record body is kept as a map
//! and read through [`Badge::count`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ClientError;
use crate::parse_helpers::{count_from_value, lenient_u64, number_from_value};

/// Top-level search response.
#[derive(Debug, Deserialize)]
pub struct SearchEnvelope {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub data: Option<SearchData>,
}

#[derive(Debug, Deserialize)]
pub struct SearchData {
    #[serde(default)]
    pub search: Option<SearchSection>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchSection {
    #[serde(default)]
    pub search_results_data: Option<RawSearchResults>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSearchResults {
    #[serde(default)]
    pub products: Option<Vec<Product>>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub num_recs: Option<u64>,
}

/// One validated page of search results.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResults {
    pub products: Vec<Product>,
    /// Total match count reported upstream (`numRecs`), `0` when absent.
    pub num_recs: u64,
}

impl SearchEnvelope {
    /// Validates the envelope and unwraps the product page.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidShape`] when `success` is not `true` or
    /// the `products` array is missing at any level.
    pub fn into_results(self) -> Result<SearchResults, ClientError> {
        if self.success != Some(true) {
            return Err(ClientError::InvalidShape {
                reason: "success flag is not true".to_owned(),
            });
        }

        let raw = self
            .data
            .and_then(|d| d.search)
            .and_then(|s| s.search_results_data)
            .ok_or_else(|| ClientError::InvalidShape {
                reason: "missing searchResultsData".to_owned(),
            })?;

        let products = raw.products.ok_or_else(|| ClientError::InvalidShape {
            reason: "missing products array".to_owned(),
        })?;

        Ok(SearchResults {
            products,
            num_recs: raw.num_recs.unwrap_or(0),
        })
    }
}

/// A product record as returned upstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_name: Option<String>,

    /// `+`-delimited keyword tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badges: Option<Vec<Badge>>,

    /// Every other upstream key, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    /// Badges in upstream order; empty when the list is absent.
    #[must_use]
    pub fn badges(&self) -> &[Badge] {
        self.badges.as_deref().unwrap_or_default()
    }

    /// Unit price, when `price` is a number or numeric string.
    #[must_use]
    pub fn price(&self) -> Option<f64> {
        self.extra.get("price").and_then(number_from_value)
    }

    /// Upstream identifier, whichever of `productId` / `id` is present.
    #[must_use]
    pub fn identifier(&self) -> Option<String> {
        ["productId", "id"]
            .iter()
            .find_map(|key| self.extra.get(*key))
            .and_then(|value| match value {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
    }
}

/// A tagged metric attached to a product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Badge {
    /// Reads a non-negative count from the badge body.
    ///
    /// Returns `None` when the key is missing or its value is not a
    /// non-negative number (or numeric string).
    #[must_use]
    pub fn count(&self, key: &str) -> Option<u64> {
        self.fields.get(key).and_then(count_from_value)
    }

    #[must_use]
    pub fn is_kind(&self, kind: &str) -> bool {
        self.kind.as_deref() == Some(kind)
    }
}
