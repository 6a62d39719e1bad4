//! JSON API over the same view models as the pages
//!
//! - `GET /briefings` listing entries, total and loader diagnostics
//! - `GET /briefings/:slug` one normalized record

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::briefing::{BriefingRecord, Diagnostic};
use crate::observability::log_report;
use crate::site::Site;
use crate::view::ListingEntry;

use super::errors::HttpError;

#[derive(Debug, Serialize)]
pub struct ListingResponse {
    pub briefings: Vec<ListingEntry>,
    pub total: usize,
    pub diagnostics: Vec<Diagnostic>,
}

pub fn api_routes(site: Arc<Site>) -> Router {
    Router::new()
        .route("/briefings", get(list_handler))
        .route("/briefings/:slug", get(get_handler))
        .with_state(site)
}

async fn list_handler(State(site): State<Arc<Site>>) -> Result<Json<ListingResponse>, HttpError> {
    let response = tokio::task::spawn_blocking(move || {
        let (briefings, report) = site.listing();
        log_report(&report);
        ListingResponse {
            total: briefings.len(),
            briefings,
            diagnostics: report.diagnostics,
        }
    })
    .await?;

    Ok(Json(response))
}

async fn get_handler(
    State(site): State<Arc<Site>>,
    Path(slug): Path<String>,
) -> Result<Json<BriefingRecord>, HttpError> {
    let record = tokio::task::spawn_blocking(move || site.detail(&slug)).await??;
    Ok(Json(record))
}
