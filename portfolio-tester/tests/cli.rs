use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "portfolio-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

#[test]
fn cli_list_scenarios_writes_output() {
    let exe = env!("CARGO_BIN_EXE_portfolio-tester");
    let output_path = temp_path("list");
    let status = Command::new(exe)
        .args(["--list-scenarios", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("Available scenarios"));
    for key in ["smoke", "projects", "case-study", "contact"] {
        assert!(content.contains(key), "{key} not listed");
    }
}

#[test]
fn cli_unknown_browser_writes_empty_json_report() {
    let exe = env!("CARGO_BIN_EXE_portfolio-tester");
    let output_path = temp_path("run");
    let output = Command::new(exe)
        .args([
            "--browsers",
            "unknown",
            "--report",
            "json",
            "--scenarios",
            "all",
            "--output",
        ])
        .arg(&output_path)
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown browser"));
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.trim_start().starts_with("[]"));
}

#[test]
fn cli_rejects_unknown_report_format() {
    let exe = env!("CARGO_BIN_EXE_portfolio-tester");
    let output = Command::new(exe)
        .args(["--report", "csv"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
}
