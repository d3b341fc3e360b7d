use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Extension, Json,
};
use serde::Deserialize;
use zinsight_analysis::SearchReport;
use zinsight_client::ClientError;

use crate::middleware::RequestId;

use super::{ApiError, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct SearchQuery {
    pub term: Option<String>,
}

pub(super) async fn search(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<SearchReport>, ApiError> {
    let Query(query) = query.map_err(|rejection| {
        tracing::warn!(request_id = %req_id.0, error = %rejection, "rejected search query");
        ApiError::new("bad_request", rejection.body_text())
    })?;

    let term = query
        .term
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::new("bad_request", "Search term is missing"))?;

    let results = state
        .client
        .search(term)
        .await
        .map_err(|e| map_client_error(&req_id.0, &e))?;

    let report = SearchReport::from_results(results);
    tracing::info!(
        request_id = %req_id.0,
        term,
        products = report.products.len(),
        saturation = report.market.saturation,
        "search completed"
    );

    Ok(Json(report))
}

fn map_client_error(request_id: &str, error: &ClientError) -> ApiError {
    tracing::error!(request_id, error = %error, "upstream search failed");
    match error {
        ClientError::Http(_) => {
            ApiError::new("upstream_unavailable", "search provider is unreachable")
        }
        e if e.is_shape_error() => ApiError::new("upstream_shape", e.to_string()),
        e => ApiError::new("upstream_unavailable", e.to_string()),
    }
}
