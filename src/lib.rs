//! briefings - validate and publish a directory of creative briefings
//!
//! - `briefing`: scan, validate and normalize the JSON documents
//! - `view`: project records onto listing and detail views, render HTML
//! - `site`: static build and page lookups shared by the CLI and server
//! - `report`: the human-readable validation report
//! - `http_server`: axum server for pages, JSON API and health check

pub mod briefing;
pub mod cli;
pub mod http_server;
pub mod observability;
pub mod report;
pub mod site;
pub mod view;
