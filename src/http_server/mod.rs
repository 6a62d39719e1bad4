//! # HTTP Server Module
//!
//! Serves the briefing site. The loader runs once per request; nothing is
//! cached.
//!
//! # Endpoints
//!
//! - `/` - Listing page
//! - `/:slug` - Detail page, 404 page for unknown slugs
//! - `/api/briefings` - Listing entries and diagnostics as JSON
//! - `/api/briefings/:slug` - One record as JSON
//! - `/api/health` - Health check

pub mod api_routes;
pub mod config;
pub mod errors;
pub mod health_routes;
pub mod page_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ErrorResponse, HttpError};
pub use server::HttpServer;
