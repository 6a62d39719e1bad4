//! Human-readable validation report
//!
//! One line per briefing file, then a single summary line. This is the
//! output of `briefings validate`, used as a gate before a build.

use std::io::{self, Write};

use crate::briefing::{BriefingError, FileOutcome, Level, LoadReport, ValidationResult};

/// Counts behind the summary line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationSummary {
    pub ok: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl ValidationSummary {
    /// Whether the build may proceed
    pub fn passed(&self) -> bool {
        self.failed == 0
    }
}

/// Writes the per-file lines and the summary line for a report.
pub fn write_report<W: Write>(report: &LoadReport, out: &mut W) -> io::Result<ValidationSummary> {
    let mut summary = ValidationSummary::default();

    // Batch-level failures have no file and no result
    for diagnostic in &report.diagnostics {
        if diagnostic.level == Level::Error && diagnostic.file.is_none() {
            writeln!(out, "❌ [ERRO] {}", diagnostic.message)?;
            summary.failed += 1;
        }
    }

    for outcome in report.outcomes() {
        match outcome {
            FileOutcome::Checked(ValidationResult::Valid { file, .. }) => {
                writeln!(out, "✅ [OK] {} validado com sucesso.", file)?;
                summary.ok += 1;
            }
            FileOutcome::Checked(ValidationResult::Invalid(err)) => {
                write_failure(err, out)?;
                summary.failed += 1;
            }
            FileOutcome::Skipped(file) => {
                writeln!(out, "⚠️ [AVISO] {} está vazio e foi ignorado.", file)?;
                summary.skipped += 1;
            }
        }
    }

    if summary.passed() {
        writeln!(out, "\n🎉 Todos os arquivos JSON estão válidos.\n")?;
    } else {
        writeln!(
            out,
            "\n⚠️ Existem erros nos arquivos JSON. Corrija antes de prosseguir.\n"
        )?;
    }

    Ok(summary)
}

fn write_failure<W: Write>(err: &BriefingError, out: &mut W) -> io::Result<()> {
    match err {
        BriefingError::Parse { file, message } => {
            writeln!(
                out,
                "❌ [ERRO] Arquivo {} inválido. Verifique a sintaxe JSON.",
                file
            )?;
            writeln!(out, "{}", message)
        }
        BriefingError::MissingRequiredField { file, fields } => writeln!(
            out,
            "❌ [ERRO] O arquivo {} está faltando os campos: {}",
            file,
            fields.join(", ")
        ),
        BriefingError::Unreadable { file, message } => writeln!(
            out,
            "❌ [ERRO] Não foi possível ler o arquivo {}: {}",
            file, message
        ),
        BriefingError::DuplicateSlug { file, slug } => writeln!(
            out,
            "❌ [ERRO] O arquivo {} repete o slug '{}'.",
            file, slug
        ),
        other => writeln!(out, "❌ [ERRO] {}", other),
    }
}
