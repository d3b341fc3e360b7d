//! Query-string construction for the search endpoint.
//!
//! The endpoint takes two nested queries: `parameters` (sort, page, term)
//! and `properties` (search flags). Each is an `a=b&c=d` string that is
//! itself form-encoded as the value of the outer parameter.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::ClientError;

/// Characters left unescaped by JavaScript's `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Search flags sent with every request. `UserDefaultPageSize` is appended
/// separately from config.
const SEARCH_PROPERTIES: &[(&str, &str)] = &[
    ("LightProductObjects", "false"),
    ("Maturity", "R"),
    ("IsPublic", "true"),
    ("ShowFullSearchPages", "false"),
    ("LookAheadPages", "16"),
    ("LimitTypesInSearch", "true"),
    ("MaxStoresPerPage", "6"),
    ("IsHumanSearch", "false"),
    ("GetAggregations", "true"),
    ("LegoStoreAggregation", "false"),
    ("LegoStoreCategoryAggregation", "false"),
    ("UseCYOSearch", "false"),
    ("IgnoreCYOManual", "false"),
    ("GetGuidedSearch", "true"),
    ("IsBestSellerSearch", "true"),
    ("EnablePriceFilter", "false"),
    ("MinPrice", "0"),
    ("MaxPrice", "0"),
    ("ProductLimit", "1"),
    ("DiversityMinScoreFactor", "-1"),
    ("DiversityLimitWindowSize", "16"),
    ("ProductDepartmentUrl", "0"),
    ("IsBestGuessSearch", "false"),
    ("EnableNLS", "false"),
];

/// Percent-encodes `raw` the way `encodeURIComponent` does.
#[must_use]
pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, COMPONENT).to_string()
}

/// Inner `parameters` query: best sellers first, page 1.
pub(super) fn search_parameters(term: &str) -> String {
    format!(
        "st=orderitemcount_all&pg=1&sd=desc&qs={}",
        encode_component(term)
    )
}

/// Inner `properties` query.
pub(super) fn search_properties(page_size: u32) -> String {
    let mut pairs: Vec<String> = SEARCH_PROPERTIES
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect();
    pairs.insert(8, format!("UserDefaultPageSize={page_size}"));
    pairs.join("&")
}

/// Builds the full search URL for `term` against `endpoint`.
///
/// # Errors
///
/// Returns [`ClientError::InvalidEndpoint`] if `endpoint` is not a valid URL.
pub(super) fn search_url(
    endpoint: &str,
    term: &str,
    page_size: u32,
) -> Result<String, ClientError> {
    let mut url = reqwest::Url::parse(endpoint).map_err(|e| ClientError::InvalidEndpoint {
        endpoint: endpoint.to_owned(),
        reason: e.to_string(),
    })?;

    url.query_pairs_mut()
        .append_pair("cv", "1")
        .append_pair("diffParameters", "st,pg,sd,qs")
        .append_pair("diffProperties", "ProductSearchTopIds")
        .append_pair("parameters", &search_parameters(term))
        .append_pair("properties", &search_properties(page_size))
        .append_pair("type", "SearchResultsData")
        .append_pair("client", "js");

    Ok(url.to_string())
}
