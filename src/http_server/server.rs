//! # HTTP Server
//!
//! Combines the page, API and health routers into one axum app.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::observability::{log_event_with_fields, Event, Logger};
use crate::site::Site;

use super::api_routes::api_routes;
use super::config::HttpServerConfig;
use super::health_routes::health_routes;
use super::page_routes::page_routes;

/// HTTP server for the briefing site
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new(site: Site) -> Self {
        Self::with_config(site, HttpServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(site: Site, config: HttpServerConfig) -> Self {
        let router = Self::build_router(Arc::new(site), &config);
        Self { config, router }
    }

    fn build_router(site: Arc<Site>, config: &HttpServerConfig) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        // `/:slug` owns every single-segment path; JSON endpoints stay under `/api`
        Router::new()
            .nest("/api", api_routes(site.clone()).merge(health_routes()))
            .merge(page_routes(site))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Serve until Ctrl-C
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, format!("{}", e)))?;

        let listener = TcpListener::bind(addr).await?;
        let addr_display = addr.to_string();
        log_event_with_fields(Event::ServerListening, &[("addr", addr_display.as_str())]);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        log_event_with_fields(Event::ServerStopped, &[("addr", addr_display.as_str())]);
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        let message = e.to_string();
        Logger::error("SHUTDOWN_SIGNAL_FAILED", &[("message", message.as_str())]);
    }
}
