//! Briefing loader for scanning a directory of JSON documents
//!
//! - One `ValidationResult` per `*.json` file, in directory enumeration order
//! - Per-file failures become diagnostics; the batch always continues
//! - A missing or unlistable directory is the only batch-level failure
//! - `index.json` is the precomputed listing, not a briefing

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use super::diagnostics::Diagnostic;
use super::errors::{BriefingError, BriefingResult};
use super::types::{BriefingRecord, IndexEntry};
use super::validator::{validate_document, Policy, ValidationResult};

/// File name of the precomputed listing
pub const INDEX_FILE: &str = "index.json";

/// A file the scan passed over because it was empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub file: String,
    /// Number of results recorded before this file was reached
    pub position: usize,
}

/// One scanned file, checked or skipped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome<'a> {
    Checked(&'a ValidationResult),
    Skipped(&'a str),
}

/// Output of one scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Per-file results, in directory enumeration order
    pub results: Vec<ValidationResult>,
    /// Files skipped because they were empty
    pub skipped: Vec<SkippedFile>,
    /// Everything worth reporting, in the order it was found
    pub diagnostics: Vec<Diagnostic>,
}

impl LoadReport {
    /// Empty report carrying one batch-level diagnostic
    pub fn batch_failure(err: &BriefingError) -> Self {
        Self {
            diagnostics: vec![Diagnostic::batch_error(err.to_string())],
            ..Self::default()
        }
    }

    /// Every scanned file, checked and skipped, in directory enumeration order
    pub fn outcomes(&self) -> Vec<FileOutcome<'_>> {
        let mut outcomes = Vec::with_capacity(self.results.len() + self.skipped.len());
        let mut skipped = self.skipped.iter().peekable();

        for (index, result) in self.results.iter().enumerate() {
            while let Some(skip) = skipped.next_if(|s| s.position <= index) {
                outcomes.push(FileOutcome::Skipped(&skip.file));
            }
            outcomes.push(FileOutcome::Checked(result));
        }
        outcomes.extend(skipped.map(|skip| FileOutcome::Skipped(&skip.file)));

        outcomes
    }

    /// Valid records, in result order
    pub fn records(&self) -> impl Iterator<Item = &BriefingRecord> {
        self.results.iter().filter_map(ValidationResult::record)
    }

    pub fn into_records(self) -> Vec<BriefingRecord> {
        self.results
            .into_iter()
            .filter_map(|result| match result {
                ValidationResult::Valid { record, .. } => Some(record),
                ValidationResult::Invalid(_) => None,
            })
            .collect()
    }

    /// Looks a valid record up by slug
    pub fn find(&self, slug: &str) -> Option<&BriefingRecord> {
        self.records().find(|record| record.slug == slug)
    }

    pub fn valid_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_valid()).count()
    }

    pub fn invalid_count(&self) -> usize {
        self.results.len() - self.valid_count()
    }

    /// Whether any file failed validation
    pub fn has_failures(&self) -> bool {
        self.invalid_count() > 0
    }
}

/// Loader bound to one briefing directory.
pub struct BriefingLoader {
    dir: PathBuf,
    policy: Policy,
}

impl BriefingLoader {
    /// Creates a strict loader for the given directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            policy: Policy::Strict,
        }
    }

    /// Sets how missing identity fields are handled.
    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the briefing directory path.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Path of the precomputed listing.
    pub fn index_path(&self) -> PathBuf {
        self.dir.join(INDEX_FILE)
    }

    /// Scans the directory once.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryUnavailable` when the directory cannot be listed.
    /// Everything else is reported inside the `LoadReport`.
    pub fn scan(&self) -> BriefingResult<LoadReport> {
        let entries = fs::read_dir(&self.dir).map_err(|e| BriefingError::DirectoryUnavailable {
            path: self.dir.display().to_string(),
            message: e.to_string(),
        })?;

        let mut report = LoadReport::default();
        let mut seen_slugs = HashSet::new();

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    report.diagnostics.push(Diagnostic::batch_error(format!(
                        "Failed to read directory entry: {}",
                        e
                    )));
                    continue;
                }
            };

            let file = entry.file_name().to_string_lossy().into_owned();
            if !file.ends_with(".json") || file == INDEX_FILE {
                continue;
            }

            let (result, diagnostics) = self.load_file(&file, &entry.path());
            report.diagnostics.extend(diagnostics);

            let Some(result) = result else {
                report.skipped.push(SkippedFile {
                    file,
                    position: report.results.len(),
                });
                continue;
            };

            let result = match result {
                ValidationResult::Valid { file, record } if !seen_slugs.insert(record.slug.clone()) => {
                    let err = BriefingError::DuplicateSlug {
                        file: file.clone(),
                        slug: record.slug,
                    };
                    report.diagnostics.push(Diagnostic::error(&file, err.to_string()));
                    ValidationResult::Invalid(err)
                }
                other => other,
            };

            report.results.push(result);
        }

        Ok(report)
    }

    /// Scans the directory, degrading a missing directory to an empty report
    /// with a single batch diagnostic.
    pub fn load_all(&self) -> LoadReport {
        match self.scan() {
            Ok(report) => report,
            Err(e) => LoadReport::batch_failure(&e),
        }
    }

    /// Looks one briefing up by slug.
    pub fn find(&self, slug: &str) -> BriefingResult<BriefingRecord> {
        self.load_all()
            .into_records()
            .into_iter()
            .find(|record| record.slug == slug)
            .ok_or_else(|| BriefingError::RecordNotFound(slug.to_string()))
    }

    /// Reads `index.json`.
    pub fn load_index(&self) -> BriefingResult<Vec<IndexEntry>> {
        let path = self.index_path();
        let content = fs::read_to_string(&path).map_err(|e| BriefingError::Index {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| BriefingError::Index {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Writes `index.json` from the valid records of a report.
    pub fn write_index(&self, report: &LoadReport) -> BriefingResult<PathBuf> {
        let entries: Vec<IndexEntry> = report.records().map(IndexEntry::from).collect();
        let path = self.index_path();

        let content = serde_json::to_string_pretty(&entries).map_err(|e| BriefingError::Index {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        fs::write(&path, content)?;
        Ok(path)
    }

    /// Reads and validates a single file. Read failures are per-file.
    fn load_file(
        &self,
        file: &str,
        path: &Path,
    ) -> (Option<ValidationResult>, Vec<Diagnostic>) {
        let text = fs::read(path)
            .map_err(|e| e.to_string())
            .and_then(|bytes| String::from_utf8(bytes).map_err(|e| e.to_string()));

        match text {
            Ok(text) => {
                let check = validate_document(file, &text, self.policy);
                (check.result, check.diagnostics)
            }
            Err(message) => {
                let err = BriefingError::Unreadable {
                    file: file.to_string(),
                    message,
                };
                let diagnostic = Diagnostic::error(file, err.to_string());
                (Some(ValidationResult::Invalid(err)), vec![diagnostic])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::briefing::diagnostics::Level;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) {
        fs::write(dir.path().join(name), content).unwrap();
    }

    #[test]
    fn test_load_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let loader = BriefingLoader::new(temp_dir.path());

        let report = loader.scan().unwrap();
        assert!(report.results.is_empty());
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    fn test_non_json_files_and_index_are_ignored() {
        let temp_dir = TempDir::new().unwrap();
        write(&temp_dir, "notes.txt", "hello");
        write(&temp_dir, INDEX_FILE, r#"[{"slug":"a","title":"A"}]"#);
        write(&temp_dir, "a.json", r#"{"nome_projeto":"A","cliente":"C","slug":"a"}"#);

        let report = BriefingLoader::new(temp_dir.path()).scan().unwrap();
        assert_eq!(report.results.len(), 1);
        assert_eq!(report.results[0].file(), "a.json");
    }

    #[test]
    fn test_empty_file_is_skipped_not_failed() {
        let temp_dir = TempDir::new().unwrap();
        write(&temp_dir, "vazio.json", "");

        let report = BriefingLoader::new(temp_dir.path()).scan().unwrap();
        assert!(report.results.is_empty());
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].file, "vazio.json");
        assert_eq!(report.diagnostics[0].level, Level::Warn);
        assert!(!report.has_failures());
    }

    #[test]
    fn test_outcomes_interleave_skipped_files() {
        let report = LoadReport {
            results: vec![ValidationResult::Valid {
                file: "b.json".to_string(),
                record: BriefingRecord::new("B", "C", "b"),
            }],
            skipped: vec![
                SkippedFile {
                    file: "a.json".to_string(),
                    position: 0,
                },
                SkippedFile {
                    file: "c.json".to_string(),
                    position: 1,
                },
            ],
            ..LoadReport::default()
        };

        let files: Vec<&str> = report
            .outcomes()
            .into_iter()
            .map(|outcome| match outcome {
                FileOutcome::Checked(result) => result.file(),
                FileOutcome::Skipped(file) => file,
            })
            .collect();
        assert_eq!(files, vec!["a.json", "b.json", "c.json"]);
    }

    #[test]
    fn test_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let loader = BriefingLoader::new(temp_dir.path().join("missing"));

        let err = loader.scan().unwrap_err();
        assert!(err.is_batch_fatal());

        let report = loader.load_all();
        assert!(report.results.is_empty());
        assert_eq!(report.diagnostics.len(), 1);
        assert_eq!(report.diagnostics[0].level, Level::Error);
        assert!(report.diagnostics[0].file.is_none());
    }

    #[test]
    fn test_duplicate_slug_rejects_later_file() {
        let temp_dir = TempDir::new().unwrap();
        write(&temp_dir, "one.json", r#"{"nome_projeto":"A","cliente":"C","slug":"same"}"#);
        write(&temp_dir, "two.json", r#"{"nome_projeto":"B","cliente":"C","slug":"same"}"#);

        let report = BriefingLoader::new(temp_dir.path()).scan().unwrap();
        assert_eq!(report.valid_count(), 1);
        assert_eq!(report.invalid_count(), 1);

        let rejected = report.results.iter().find(|r| !r.is_valid()).unwrap();
        assert!(matches!(
            rejected.error(),
            Some(BriefingError::DuplicateSlug { slug, .. }) if slug == "same"
        ));
    }

    #[test]
    fn test_invalid_utf8_is_unreadable() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("bin.json"), [0xffu8, 0xfe, 0x00]).unwrap();

        let report = BriefingLoader::new(temp_dir.path()).scan().unwrap();
        assert!(matches!(
            report.results[0].error(),
            Some(BriefingError::Unreadable { .. })
        ));
    }

    #[test]
    fn test_find_by_slug() {
        let temp_dir = TempDir::new().unwrap();
        write(&temp_dir, "x.json", r#"{"nome_projeto":"X","cliente":"C","slug":"outro"}"#);
        let loader = BriefingLoader::new(temp_dir.path());

        assert_eq!(loader.find("outro").unwrap().nome_projeto, "X");
        assert_eq!(
            loader.find("x").unwrap_err(),
            BriefingError::RecordNotFound("x".into())
        );
    }

    #[test]
    fn test_write_and_load_index() {
        let temp_dir = TempDir::new().unwrap();
        write(&temp_dir, "a.json", r#"{"nome_projeto":"A","cliente":"C","slug":"a"}"#);
        write(&temp_dir, "b.json", r#"{"cliente":"C"}"#);
        let loader = BriefingLoader::new(temp_dir.path());

        let report = loader.scan().unwrap();
        loader.write_index(&report).unwrap();

        let index = loader.load_index().unwrap();
        assert_eq!(
            index,
            vec![IndexEntry {
                slug: "a".into(),
                title: "A".into()
            }]
        );
    }

    #[test]
    fn test_malformed_index() {
        let temp_dir = TempDir::new().unwrap();
        write(&temp_dir, INDEX_FILE, r#"{"slug":"a"}"#);

        let err = BriefingLoader::new(temp_dir.path()).load_index().unwrap_err();
        assert_eq!(err.code(), "BRIEFING_INDEX_ERROR");
    }
}
