//! HTML page routes
//!
//! - `GET /` listing page
//! - `GET /:slug` detail page
//! - anything else, or an unknown slug: the 404 page
//!
//! The loader is synchronous, so every handler runs it on the blocking pool.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};

use crate::observability::log_report;
use crate::site::Site;

use super::errors::HttpError;

pub fn page_routes(site: Arc<Site>) -> Router {
    Router::new()
        .route("/", get(listing_handler))
        .route("/:slug", get(detail_handler))
        .fallback(not_found_handler)
        .with_state(site)
}

async fn listing_handler(State(site): State<Arc<Site>>) -> Response {
    let page = tokio::task::spawn_blocking(move || {
        let (html, report) = site.listing_page();
        log_report(&report);
        html
    })
    .await;

    match page {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "listing page failed");
            HttpError::from(e).into_response()
        }
    }
}

async fn detail_handler(State(site): State<Arc<Site>>, Path(slug): Path<String>) -> Response {
    let lookup = site.clone();
    let page = tokio::task::spawn_blocking(move || lookup.detail_page(&slug)).await;

    match page {
        Ok(Ok(html)) => Html(html).into_response(),
        Ok(Err(e)) if e.status_code() == 404 => not_found(&site),
        Ok(Err(e)) => HttpError::from(e).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "detail page failed");
            HttpError::from(e).into_response()
        }
    }
}

async fn not_found_handler(State(site): State<Arc<Site>>) -> Response {
    not_found(&site)
}

fn not_found(site: &Site) -> Response {
    (StatusCode::NOT_FOUND, Html(site.not_found_page())).into_response()
}
