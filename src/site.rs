//! The briefing site: loader + projector + renderer
//!
//! Shared by the static build and the HTTP server. Every call re-runs the
//! loader; nothing is cached between calls.

use std::fs;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::briefing::{
    BriefingError, BriefingLoader, BriefingRecord, BriefingResult, Diagnostic, LoadReport,
    ValidationResult, INDEX_FILE,
};
use crate::observability::{log_event_with_fields, Event};
use crate::view::{project_detail, project_listing, ListingEntry, Renderer};

/// Files the build writes at the top of the output directory
const RESERVED_PAGES: [&str; 2] = ["index.html", "404.html"];

/// Where the listing page gets its entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingSource {
    /// Scan the directory and list every valid briefing
    #[default]
    Scan,
    /// Read the precomputed `index.json`, falling back to a scan
    Index,
}

/// Result of a static build
#[derive(Debug, Clone)]
pub struct BuildSummary {
    pub out_dir: PathBuf,
    /// HTML files written, including the listing and 404 pages
    pub pages: usize,
    pub report: LoadReport,
}

pub struct Site {
    loader: BriefingLoader,
    renderer: Renderer,
    listing_source: ListingSource,
}

impl Site {
    pub fn new(loader: BriefingLoader, renderer: Renderer) -> Self {
        Self {
            loader,
            renderer,
            listing_source: ListingSource::Scan,
        }
    }

    pub fn with_listing_source(mut self, listing_source: ListingSource) -> Self {
        self.listing_source = listing_source;
        self
    }

    pub fn loader(&self) -> &BriefingLoader {
        &self.loader
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Listing entries and the report they came from.
    ///
    /// With `ListingSource::Index` the directory is only scanned when
    /// `index.json` cannot be used.
    pub fn listing(&self) -> (Vec<ListingEntry>, LoadReport) {
        if self.listing_source == ListingSource::Index {
            if let Ok(index) = self.loader.load_index() {
                let entries = index.iter().map(ListingEntry::from_index).collect();
                return (entries, LoadReport::default());
            }
        }

        let mut report = self.loader.load_all();
        let entries = self.listing_for(&mut report);
        (entries, report)
    }

    pub fn listing_page(&self) -> (String, LoadReport) {
        let (entries, report) = self.listing();
        (self.renderer.listing_page(&entries), report)
    }

    /// Looks one briefing up by slug
    pub fn detail(&self, slug: &str) -> BriefingResult<BriefingRecord> {
        self.loader.find(slug)
    }

    pub fn detail_page(&self, slug: &str) -> BriefingResult<String> {
        let record = self.detail(slug)?;
        Ok(self.renderer.detail_page(&project_detail(&record)))
    }

    pub fn not_found_page(&self) -> String {
        self.renderer.not_found_page()
    }

    /// Writes `index.html`, `<slug>/index.html` per valid briefing and
    /// `404.html` into `out_dir`.
    ///
    /// A slug that is not a single plain path segment, or that names one of
    /// the fixed pages, gets no page and a warning. A detail page that fails
    /// to write is reported against its file; the build carries on.
    pub fn build(&self, out_dir: &Path) -> BriefingResult<BuildSummary> {
        let out_display = out_dir.display().to_string();
        log_event_with_fields(Event::BuildBegin, &[("out_dir", out_display.as_str())]);

        let mut report = self.loader.load_all();
        fs::create_dir_all(out_dir)?;

        let entries = self.listing_for(&mut report);
        write_page(&out_dir.join("index.html"), &self.renderer.listing_page(&entries))?;
        write_page(&out_dir.join("404.html"), &self.renderer.not_found_page())?;
        let mut pages = 2;

        let mut diagnostics = Vec::new();
        for result in &report.results {
            let ValidationResult::Valid { file, record } = result else {
                continue;
            };
            if !is_page_slug(&record.slug) {
                diagnostics.push(Diagnostic::warn(
                    file,
                    format!("slug '{}' cannot be used as a page path, page not written", record.slug),
                ));
                continue;
            }

            let page_dir = out_dir.join(&record.slug);
            let written = fs::create_dir_all(&page_dir)
                .map_err(BriefingError::from)
                .and_then(|()| {
                    write_page(
                        &page_dir.join("index.html"),
                        &self.renderer.detail_page(&project_detail(record)),
                    )
                });
            match written {
                Ok(()) => pages += 1,
                Err(e) => diagnostics.push(Diagnostic::error(
                    file,
                    format!("page for slug '{}' not written: {}", record.slug, e),
                )),
            }
        }
        report.diagnostics.extend(diagnostics);

        Ok(BuildSummary {
            out_dir: out_dir.to_path_buf(),
            pages,
            report,
        })
    }

    fn listing_for(&self, report: &mut LoadReport) -> Vec<ListingEntry> {
        if self.listing_source == ListingSource::Index {
            match self.loader.load_index() {
                Ok(index) => return index.iter().map(ListingEntry::from_index).collect(),
                Err(e) => report.diagnostics.push(Diagnostic::warn(
                    INDEX_FILE,
                    format!("{}; listing from directory scan", e),
                )),
            }
        }
        project_listing(report)
    }
}

fn write_page(path: &Path, html: &str) -> BriefingResult<()> {
    fs::write(path, html)?;
    let path_display = path.display().to_string();
    log_event_with_fields(Event::PageWritten, &[("path", path_display.as_str())]);
    Ok(())
}

/// Whether a slug can name its own directory in the build output
fn is_page_slug(slug: &str) -> bool {
    is_plain_segment(slug) && !RESERVED_PAGES.contains(&slug)
}

fn is_plain_segment(slug: &str) -> bool {
    let mut components = Path::new(slug).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
