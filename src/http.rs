//! HTTP boundary for the lost-and-found locator
//!
//! Thin transport layer: validates the two query parameters, runs the
//! extract/match pipeline, and serializes the result list. Everything the
//! core returns is already a valid response body.

use crate::extractor::ItemExtractor;
use crate::matcher::SpotMatcher;
use crate::types::MatchResult;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Shared request state: the catalog-backed matcher and the extractor,
/// built once at startup and read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    extractor: Arc<ItemExtractor>,
    matcher: Arc<SpotMatcher>,
}

impl AppState {
    pub fn new(extractor: ItemExtractor, matcher: SpotMatcher) -> Self {
        Self {
            extractor: Arc::new(extractor),
            matcher: Arc::new(matcher),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LostFoundParams {
    item: Option<String>,
    area: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing \"item\" or \"area\".")]
    MissingParameters,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::MissingParameters => StatusCode::BAD_REQUEST,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// `GET /lost-found?item=<text>&area=<label>`
pub async fn lost_found(
    State(state): State<AppState>,
    Query(params): Query<LostFoundParams>,
) -> Result<Json<Vec<MatchResult>>, ApiError> {
    let (item_text, user_area) = match (params.item, params.area) {
        (Some(item), Some(area)) if !item.is_empty() && !area.is_empty() => (item, area),
        _ => {
            warn!("missing required parameters");
            return Err(ApiError::MissingParameters);
        }
    };
    info!(item = %item_text, area = %user_area, "received lost-found request");

    let keyword = state.extractor.extract(&item_text);
    Ok(Json(state.matcher.match_spots(&keyword, &user_area)))
}

/// Build the router: the API route, the static frontend as fallback, and
/// permissive CORS so the frontend can be served from anywhere.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/lost-found", get(lost_found))
        .with_state(state)
        .fallback_service(ServeDir::new("static"))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
