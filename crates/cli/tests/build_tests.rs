// Integration tests for `occwalk build`, `occwalk lookup` and `occwalk rules validate`.
// Run with: cargo test -p occwalk-cli --test build_tests -- --nocapture

use std::path::{Path, PathBuf};
use std::process::Command;

fn occwalk() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_occwalk"));
    cmd.current_dir(env!("CARGO_MANIFEST_DIR"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

fn path_str(p: &Path) -> &str {
    p.to_str().unwrap()
}

// ---------------------------------------------------------------------------
// build
// ---------------------------------------------------------------------------

#[test]
fn build_writes_crosswalk_csv() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("crosswalk.csv");

    let output = occwalk()
        .args([
            "build",
            "--source", path_str(&fixture("nco.txt")),
            "--target", path_str(&fixture("onet.txt")),
            "--output", path_str(&out),
        ])
        .output()
        .expect("occwalk build");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "exit {:?}: {stderr}", output.status);
    assert!(stderr.contains("VALIDATION REPORT"), "{stderr}");
    assert!(stderr.contains("Total records: 12"), "{stderr}");

    let csv = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 13);
    assert_eq!(
        lines[0],
        "NCO_2015_Code,NCO_2004_Code,NCO_Job_Title,ONET_Code,ONET_Job_Title,Match_Score"
    );
    assert_eq!(lines[6], "2131.0300,2211.30,Mycologist,19-1029.04,Biologists,95");
    assert!(lines[11].starts_with("0110.0100,,Commissioned Armed Forces Officer,,,0"));
}

#[test]
fn build_writes_json_result() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("crosswalk.csv");
    let json_path = dir.path().join("result.json");

    let output = occwalk()
        .args([
            "build",
            "-n", path_str(&fixture("nco.txt")),
            "-o", path_str(&fixture("onet.txt")),
            "--output", path_str(&out),
            "--json", path_str(&json_path),
            "--shards", "3",
            "--quiet",
        ])
        .output()
        .expect("occwalk build --json");

    assert!(output.status.success(), "exit {:?}", output.status);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("VALIDATION REPORT"), "{stderr}");

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(json["stats"]["total_records"], 12);
    assert_eq!(json["stats"]["semantic_matches"], 4);
    assert_eq!(json["meta"]["target_records"], 8);
    assert_eq!(json["meta"]["unknown_target_codes"][0], "17-3029.00");
}

#[test]
fn build_missing_source_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("crosswalk.csv");

    let output = occwalk()
        .args([
            "build",
            "--source", "does-not-exist.pdf",
            "--target", path_str(&fixture("onet.txt")),
            "--output", path_str(&out),
        ])
        .output()
        .expect("occwalk build");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("NCO file not found"), "{stderr}");
    assert!(!out.exists());
}

#[test]
fn build_empty_source_still_writes_header() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("scanned.txt");
    std::fs::write(&source, "Division 1 Managers\nNCO 2015 Title NCO 2004\n").unwrap();
    let out = dir.path().join("crosswalk.csv");

    let output = occwalk()
        .args([
            "build",
            "--source", path_str(&source),
            "--target", path_str(&fixture("onet.txt")),
            "--output", path_str(&out),
        ])
        .output()
        .expect("occwalk build");

    assert_eq!(output.status.code(), Some(10));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Total records: 0"), "{stderr}");
    assert!(stderr.contains("(0.0%)"), "{stderr}");

    let csv = std::fs::read_to_string(&out).unwrap();
    assert_eq!(csv.lines().count(), 1);
}

#[test]
fn build_with_replaced_rules() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("crosswalk.csv");

    let output = occwalk()
        .args([
            "build",
            "--source", path_str(&fixture("nco.txt")),
            "--target", path_str(&fixture("onet.txt")),
            "--output", path_str(&out),
            "--config", path_str(&fixture("custom.rules.toml")),
        ])
        .output()
        .expect("occwalk build --config");

    assert!(output.status.success(), "exit {:?}", output.status);
    let csv = std::fs::read_to_string(&out).unwrap();
    let scores: Vec<&str> = csv
        .lines()
        .skip(1)
        .map(|l| l.rsplit(',').next().unwrap())
        .collect();
    assert_eq!(scores, vec!["80", "80", "80", "60", "60", "0", "0", "0", "0", "0", "0", "0"]);
}

#[test]
fn build_invalid_rules_exit_code() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("bad.toml");
    std::fs::write(
        &config,
        "[[rules.keyword]]\nkeyword = \"Advocate\"\ncode = \"23-1011.00\"\ntitle = \"Lawyers\"\n",
    )
    .unwrap();

    let output = occwalk()
        .args([
            "build",
            "--source", path_str(&fixture("nco.txt")),
            "--target", path_str(&fixture("onet.txt")),
            "--output", path_str(&dir.path().join("out.csv")),
            "--config", path_str(&config),
        ])
        .output()
        .expect("occwalk build --config");

    assert_eq!(output.status.code(), Some(11));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("lower-case"), "{stderr}");
}

// ---------------------------------------------------------------------------
// lookup + rules
// ---------------------------------------------------------------------------

#[test]
fn lookup_prints_keyword_match() {
    let output = occwalk()
        .args(["lookup", "Principal, College of Arts", "--code", "2319.0100"])
        .output()
        .expect("occwalk lookup");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("11-9033.00\t"), "{stdout}");
    assert!(stdout.contains("\t95\tkeyword"), "{stdout}");
}

#[test]
fn lookup_json_unresolved() {
    let output = occwalk()
        .args(["lookup", "Commissioned Armed Forces Officer", "--code", "0110.0100", "--json"])
        .output()
        .expect("occwalk lookup --json");

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(value["score"], 0);
    assert_eq!(value["tier"], "unresolved");
    assert_eq!(value["target_code"], "");
}

#[test]
fn rules_validate_reports_sizes() {
    let output = occwalk()
        .args(["rules", "validate", path_str(&fixture("custom.rules.toml"))])
        .output()
        .expect("occwalk rules validate");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "valid: 1 keywords, 1 prefixes, 1 divisions");
}
