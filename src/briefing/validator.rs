//! Per-document validation
//!
//! Checks one file's text: empty → skipped, unparsable → invalid, missing
//! identity keys → invalid (strict) or filled with fallbacks (lenient).
//! Pure: no I/O, diagnostics are returned alongside the result.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::diagnostics::Diagnostic;
use super::errors::BriefingError;
use super::types::BriefingRecord;

/// Identity fields every briefing must carry, in reporting order
pub const REQUIRED_FIELDS: [&str; 3] = ["nome_projeto", "cliente", "slug"];

/// Lenient fallback for a missing `nome_projeto`
pub const FALLBACK_PROJECT_NAME: &str = "Sem nome";

/// Lenient fallback for a missing `cliente`
pub const FALLBACK_CLIENT: &str = "Sem cliente";

/// How missing identity fields are treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// Missing identity fields reject the document
    #[default]
    Strict,
    /// Missing identity fields are replaced by fallbacks
    Lenient,
}

impl Policy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Policy::Strict => "strict",
            Policy::Lenient => "lenient",
        }
    }
}

/// Outcome for one checked file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid { file: String, record: BriefingRecord },
    Invalid(BriefingError),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid { .. })
    }

    /// Source file name
    pub fn file(&self) -> &str {
        match self {
            ValidationResult::Valid { file, .. } => file,
            ValidationResult::Invalid(err) => err.file().unwrap_or_default(),
        }
    }

    pub fn record(&self) -> Option<&BriefingRecord> {
        match self {
            ValidationResult::Valid { record, .. } => Some(record),
            ValidationResult::Invalid(_) => None,
        }
    }

    pub fn error(&self) -> Option<&BriefingError> {
        match self {
            ValidationResult::Valid { .. } => None,
            ValidationResult::Invalid(err) => Some(err),
        }
    }
}

/// Result of checking one document's text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentCheck {
    /// `None` when the file was skipped
    pub result: Option<ValidationResult>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Returns the required fields absent from `doc`, in `REQUIRED_FIELDS` order.
///
/// Presence is key presence: a `null` value counts as present. A document
/// that is not a JSON object is missing all of them.
pub fn missing_fields(doc: &Value) -> Vec<&'static str> {
    match doc.as_object() {
        Some(obj) => REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|field| !obj.contains_key(*field))
            .collect(),
        None => REQUIRED_FIELDS.to_vec(),
    }
}

/// File name without its extension (`projeto-x.json` → `projeto-x`)
pub fn file_stem(file: &str) -> &str {
    Path::new(file)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file)
}

/// Validates the text of one file.
pub fn validate_document(file: &str, text: &str, policy: Policy) -> DocumentCheck {
    if text.is_empty() {
        return DocumentCheck {
            result: None,
            diagnostics: vec![Diagnostic::warn(
                file,
                format!("{}, skipped", BriefingError::EmptyFile(file.to_string())),
            )],
        };
    }

    let doc: Value = match serde_json::from_str(text) {
        Ok(doc) => doc,
        Err(e) => {
            let err = BriefingError::Parse {
                file: file.to_string(),
                message: e.to_string(),
            };
            return invalid(err);
        }
    };

    let missing = missing_fields(&doc);
    let obj = match doc.as_object() {
        Some(obj) if policy == Policy::Lenient || missing.is_empty() => obj,
        _ => {
            return invalid(BriefingError::MissingRequiredField {
                file: file.to_string(),
                fields: missing.iter().map(|f| f.to_string()).collect(),
            });
        }
    };

    let mut diagnostics = Vec::new();
    let [nome_projeto, cliente, slug] =
        REQUIRED_FIELDS.map(|field| resolve_identity(file, obj, field, policy, &mut diagnostics));

    let (record, dropped) = BriefingRecord::from_document(nome_projeto, cliente, slug, obj);
    for field in dropped {
        diagnostics.push(Diagnostic::warn(
            file,
            format!("ignored field '{}': unexpected shape", field),
        ));
    }

    DocumentCheck {
        result: Some(ValidationResult::Valid {
            file: file.to_string(),
            record,
        }),
        diagnostics,
    }
}

/// Reads one identity field as text.
///
/// Key presence is what makes a document valid; the value's type is not
/// checked. `null` becomes an empty string (or the fallback when lenient)
/// and any other non-string value its JSON text, each with a warning.
fn resolve_identity(
    file: &str,
    obj: &Map<String, Value>,
    field: &str,
    policy: Policy,
    diagnostics: &mut Vec<Diagnostic>,
) -> String {
    match obj.get(field) {
        Some(Value::String(value)) => value.clone(),
        None | Some(Value::Null) if policy == Policy::Lenient => {
            let fallback = lenient_fallback(field, file);
            diagnostics.push(Diagnostic::warn(
                file,
                format!("missing '{}', using '{}'", field, fallback),
            ));
            fallback
        }
        None | Some(Value::Null) => {
            diagnostics.push(Diagnostic::warn(
                file,
                format!("'{}' is null, using an empty string", field),
            ));
            String::new()
        }
        Some(other) => {
            let text = other.to_string();
            diagnostics.push(Diagnostic::warn(
                file,
                format!("'{}' is not a string, using {}", field, text),
            ));
            text
        }
    }
}

fn lenient_fallback(field: &str, file: &str) -> String {
    match field {
        "nome_projeto" => FALLBACK_PROJECT_NAME.to_string(),
        "cliente" => FALLBACK_CLIENT.to_string(),
        _ => file_stem(file).to_string(),
    }
}

fn invalid(err: BriefingError) -> DocumentCheck {
    let file = err.file().unwrap_or_default().to_string();
    let diagnostic = Diagnostic::error(&file, err.to_string());
    DocumentCheck {
        result: Some(ValidationResult::Invalid(err)),
        diagnostics: vec![diagnostic],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::briefing::diagnostics::Level;
    use serde_json::json;

    #[test]
    fn test_complete_document_is_valid() {
        let check = validate_document(
            "a.json",
            r#"{"nome_projeto":"A","cliente":"C","slug":"a"}"#,
            Policy::Strict,
        );
        let result = check.result.unwrap();
        assert!(result.is_valid());
        assert_eq!(result.record().unwrap(), &BriefingRecord::new("A", "C", "a"));
        assert!(check.diagnostics.is_empty());
    }

    #[test]
    fn test_missing_fields_in_required_order() {
        assert_eq!(
            missing_fields(&json!({ "slug": "x" })),
            vec!["nome_projeto", "cliente"]
        );
        assert_eq!(missing_fields(&json!([1, 2])), REQUIRED_FIELDS.to_vec());
        assert!(missing_fields(&json!({ "nome_projeto": null, "cliente": 1, "slug": "" })).is_empty());
    }

    #[test]
    fn test_strict_rejects_missing_fields() {
        let check = validate_document("b.json", r#"{"cliente":"C"}"#, Policy::Strict);
        match check.result {
            Some(ValidationResult::Invalid(BriefingError::MissingRequiredField { file, fields })) => {
                assert_eq!(file, "b.json");
                assert_eq!(fields, vec!["nome_projeto", "slug"]);
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(check.diagnostics.len(), 1);
        assert_eq!(check.diagnostics[0].level, Level::Error);
    }

    #[test]
    fn test_lenient_fills_fallbacks() {
        let check = validate_document("projeto-x.json", r#"{"cliente":"C"}"#, Policy::Lenient);
        let record = check.result.unwrap().record().cloned().unwrap();
        assert_eq!(record.nome_projeto, FALLBACK_PROJECT_NAME);
        assert_eq!(record.cliente, "C");
        assert_eq!(record.slug, "projeto-x");
        assert_eq!(check.diagnostics.len(), 2);
        assert!(check.diagnostics.iter().all(|d| d.level == Level::Warn));
    }

    #[test]
    fn test_empty_file_is_skipped() {
        let check = validate_document("vazio.json", "", Policy::Strict);
        assert!(check.result.is_none());
        assert_eq!(check.diagnostics.len(), 1);
        assert_eq!(check.diagnostics[0].level, Level::Warn);
    }

    #[test]
    fn test_parse_error_is_invalid() {
        let check = validate_document("bad.json", "{ nope", Policy::Strict);
        match check.result {
            Some(ValidationResult::Invalid(BriefingError::Parse { file, message })) => {
                assert_eq!(file, "bad.json");
                assert!(!message.is_empty());
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_whitespace_only_is_a_parse_error() {
        let check = validate_document("blank.json", "  \n", Policy::Strict);
        assert!(matches!(
            check.result,
            Some(ValidationResult::Invalid(BriefingError::Parse { .. }))
        ));
    }

    #[test]
    fn test_null_slug_is_valid_when_key_present() {
        let check = validate_document(
            "a.json",
            r#"{"nome_projeto":"A","cliente":"C","slug":null}"#,
            Policy::Strict,
        );
        let record = check.result.unwrap().record().cloned().unwrap();
        assert_eq!(record.slug, "");
        assert_eq!(check.diagnostics.len(), 1);
        assert_eq!(check.diagnostics[0].level, Level::Warn);
        assert!(check.diagnostics[0].message.contains("slug"));
    }

    #[test]
    fn test_non_string_identity_uses_json_text() {
        for policy in [Policy::Strict, Policy::Lenient] {
            let check = validate_document(
                "n.json",
                r#"{"nome_projeto":42,"cliente":["C"],"slug":"n"}"#,
                policy,
            );
            let record = check.result.unwrap().record().cloned().unwrap();
            assert_eq!(record.nome_projeto, "42");
            assert_eq!(record.cliente, r#"["C"]"#);
            assert_eq!(check.diagnostics.len(), 2);
            assert!(check.diagnostics.iter().all(|d| d.level == Level::Warn));
        }
    }

    #[test]
    fn test_lenient_treats_null_as_missing() {
        let check = validate_document(
            "p.json",
            r#"{"nome_projeto":null,"cliente":"C","slug":"p"}"#,
            Policy::Lenient,
        );
        let record = check.result.unwrap().record().cloned().unwrap();
        assert_eq!(record.nome_projeto, FALLBACK_PROJECT_NAME);
    }

    #[test]
    fn test_non_object_is_invalid_in_both_policies() {
        for policy in [Policy::Strict, Policy::Lenient] {
            let check = validate_document("arr.json", "[]", policy);
            assert!(matches!(
                check.result,
                Some(ValidationResult::Invalid(BriefingError::MissingRequiredField { .. }))
            ));
        }
    }

    #[test]
    fn test_dropped_optional_field_warns() {
        let check = validate_document(
            "a.json",
            r#"{"nome_projeto":"A","cliente":"C","slug":"a","roteiro":"x"}"#,
            Policy::Strict,
        );
        assert!(check.result.unwrap().is_valid());
        assert_eq!(check.diagnostics.len(), 1);
        assert!(check.diagnostics[0].message.contains("roteiro"));
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem("projeto-x.json"), "projeto-x");
        assert_eq!(file_stem("semext"), "semext");
    }
}
