//! Listing projection
//!
//! The index page only ever shows project name, client and slug.

use serde::Serialize;

use crate::briefing::{BriefingRecord, IndexEntry, LoadReport, FALLBACK_CLIENT};

/// One card on the listing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingEntry {
    pub nome_projeto: String,
    pub cliente: String,
    pub slug: String,
}

impl ListingEntry {
    /// Projects a precomputed `index.json` entry. The index carries no client.
    pub fn from_index(entry: &IndexEntry) -> Self {
        Self {
            nome_projeto: entry.title.clone(),
            cliente: FALLBACK_CLIENT.to_string(),
            slug: entry.slug.clone(),
        }
    }

    /// Link target of the card
    pub fn href(&self) -> String {
        format!("/{}", self.slug)
    }
}

impl From<&BriefingRecord> for ListingEntry {
    fn from(record: &BriefingRecord) -> Self {
        Self {
            nome_projeto: record.nome_projeto.clone(),
            cliente: record.cliente.clone(),
            slug: record.slug.clone(),
        }
    }
}

/// Listing entries for every valid record of a report, in result order.
pub fn project_listing(report: &LoadReport) -> Vec<ListingEntry> {
    report.records().map(ListingEntry::from).collect()
}
