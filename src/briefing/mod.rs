//! Briefing loading and validation
//!
//! Reads a directory of JSON briefings once per build or request and turns
//! each file into either a normalized `BriefingRecord` or a diagnostic.
//!
//! # Design Principles
//!
//! - One linear pass, no retries, no caching
//! - Per-file failures never abort the batch
//! - Diagnostics are returned, never printed
//! - Optional fields are decoded once, at the boundary

mod diagnostics;
mod errors;
mod loader;
mod types;
mod validator;

pub use diagnostics::{Diagnostic, Level};
pub use errors::{BriefingError, BriefingResult};
pub use loader::{BriefingLoader, FileOutcome, LoadReport, SkippedFile, INDEX_FILE};
pub use types::{
    ArtDirectionStage, BriefingRecord, IndexEntry, RecommendedStructure, ScriptBeat,
    VisualReference,
};
pub use validator::{
    file_stem, missing_fields, validate_document, DocumentCheck, Policy, ValidationResult,
    FALLBACK_CLIENT, FALLBACK_PROJECT_NAME, REQUIRED_FIELDS,
};
