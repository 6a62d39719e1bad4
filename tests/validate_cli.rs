//! CLI contract tests for `briefings validate` and `briefings build`

use std::fs;

use assert_cmd::Command;
use tempfile::TempDir;

fn briefings() -> Command {
    Command::new(env!("CARGO_BIN_EXE_briefings"))
}

#[test]
fn validate_reports_each_file_and_fails() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("a.json"),
        r#"{"nome_projeto":"A","cliente":"C","slug":"a"}"#,
    )
    .unwrap();
    fs::write(tmp.path().join("b.json"), r#"{"cliente":"C"}"#).unwrap();

    let output = briefings()
        .current_dir(tmp.path())
        .args(["validate", "--dir"])
        .arg(tmp.path())
        .output()
        .expect("run validate");

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
    assert_eq!(stdout.matches("✅ [OK]").count(), 1);
    assert_eq!(stdout.matches("❌ [ERRO]").count(), 1);
    assert!(stdout.contains("✅ [OK] a.json validado com sucesso."));
    assert!(stdout.contains("❌ [ERRO] O arquivo b.json está faltando os campos: nome_projeto, slug"));
    assert!(stdout.contains("⚠️ Existem erros nos arquivos JSON. Corrija antes de prosseguir."));
}

#[test]
fn validate_passes_on_clean_directory() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("a.json"),
        r#"{"nome_projeto":"A","cliente":"C","slug":"a"}"#,
    )
    .unwrap();

    let output = briefings()
        .current_dir(tmp.path())
        .args(["validate", "--dir"])
        .arg(tmp.path())
        .output()
        .expect("run validate");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
    assert!(stdout.contains("🎉 Todos os arquivos JSON estão válidos."));
}

#[test]
fn validate_missing_directory_fails() {
    let tmp = TempDir::new().unwrap();

    let output = briefings()
        .current_dir(tmp.path())
        .args(["validate", "--dir"])
        .arg(tmp.path().join("nao-existe"))
        .output()
        .expect("run validate");

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
    assert!(stdout.contains("❌ [ERRO]"));
}

#[test]
fn build_writes_pages_and_prints_summary() {
    let data = TempDir::new().unwrap();
    fs::write(
        data.path().join("a.json"),
        r#"{"nome_projeto":"A","cliente":"C","slug":"a"}"#,
    )
    .unwrap();
    let out = data.path().join("dist");

    let output = briefings()
        .current_dir(data.path())
        .args(["build", "--theme", "dark", "--dir"])
        .arg(data.path())
        .arg("--out")
        .arg(&out)
        .output()
        .expect("run build");

    assert!(output.status.success());
    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json summary");
    assert_eq!(summary["status"], "ok");
    assert_eq!(summary["data"]["pages"], 3);

    let page = fs::read_to_string(out.join("a").join("index.html")).unwrap();
    assert!(page.contains("data-theme=\"dark\""));
}

#[test]
fn bad_config_file_fails() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("briefings.json");
    fs::write(&config, "{").unwrap();

    let output = briefings()
        .current_dir(tmp.path())
        .args(["validate", "--config"])
        .arg(&config)
        .output()
        .expect("run validate");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).expect("utf8 stderr");
    assert!(stderr.contains("BRIEFINGS_CLI_CONFIG_ERROR"));
}
