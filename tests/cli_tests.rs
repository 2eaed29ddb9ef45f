//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A `cgpa` command isolated in its own planner directory
struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    fn data_file(&self) -> PathBuf {
        self.dir.path().join("records.csv")
    }

    fn reports_dir(&self) -> PathBuf {
        self.dir.path().join("reports")
    }

    fn cgpa(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("cgpa").unwrap();
        cmd.env("CGPA_PLANNER_HOME", self.dir.path().join("home"))
            .arg("--data-file")
            .arg(self.data_file())
            .arg("--reports-dir")
            .arg(self.reports_dir());
        cmd
    }

    fn add(&self, code: &str, units: &str, score: &str) {
        self.cgpa()
            .args(["add", code, units, score])
            .assert()
            .success();
    }
}

#[test]
fn add_then_list() {
    let sandbox = Sandbox::new();

    sandbox
        .cgpa()
        .args(["add", "cve311", "3", "75"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added CVE311"))
        .stdout(predicate::str::contains("grade A"));

    sandbox.add("CVE313", "4", "55");

    sandbox
        .cgpa()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("CVE311"))
        .stdout(predicate::str::contains("CVE313"))
        .stdout(predicate::str::contains("CGPA: 3.86 over 7 units"));

    let content = fs::read_to_string(sandbox.data_file()).unwrap();
    assert_eq!(
        content,
        "Course_Code,Units,Score,Grade,GP,WP\nCVE311,3,75,A,5,15\nCVE313,4,55,C,3,12\n"
    );
}

#[test]
fn add_rejects_out_of_range_units() {
    let sandbox = Sandbox::new();

    sandbox
        .cgpa()
        .args(["add", "CVE311", "7", "75"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "credit units must be between 1 and 6",
        ));

    assert!(!sandbox.data_file().exists());
}

#[test]
fn add_rejects_negative_score() {
    let sandbox = Sandbox::new();

    sandbox
        .cgpa()
        .args(["add", "CVE311", "3", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("score must be between 0 and 100"));
}

#[test]
fn add_rejects_non_numeric_units() {
    let sandbox = Sandbox::new();

    sandbox
        .cgpa()
        .args(["add", "CVE311", "three", "75"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'three' is not a valid credit unit count",
        ));
}

#[test]
fn list_empty() {
    let sandbox = Sandbox::new();

    sandbox
        .cgpa()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No courses recorded yet."));
}

#[test]
fn stats_show_distribution() {
    let sandbox = Sandbox::new();
    sandbox.add("CVE311", "3", "75");
    sandbox.add("CVE313", "4", "55");

    sandbox
        .cgpa()
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total weighted points: 27"))
        .stdout(predicate::str::contains("3.86"))
        .stdout(predicate::str::contains("Grade Frequency Distribution"))
        .stdout(predicate::str::contains("  F | "));
}

#[test]
fn predict_achievable_and_impossible() {
    let sandbox = Sandbox::new();
    sandbox.add("CVE311", "3", "75");
    sandbox.add("CVE313", "4", "55");

    sandbox
        .cgpa()
        .args(["predict", "4.5", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "To achieve 4.50 CGPA, you must maintain an average GPA of 4.95 in your remaining units.",
        ));

    sandbox
        .cgpa()
        .args(["predict", "5.0", "2"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Warning: You need a GPA of 9.00. This is impossible on a 5.0 scale.",
        ));
}

#[test]
fn predict_rejects_text_target() {
    let sandbox = Sandbox::new();

    sandbox
        .cgpa()
        .args(["predict", "high", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("target CGPA"));
}

#[test]
fn clear_requires_confirmation() {
    let sandbox = Sandbox::new();
    sandbox.add("CVE311", "3", "75");

    sandbox
        .cgpa()
        .arg("clear")
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Clear cancelled"));
    assert!(sandbox.data_file().exists());

    sandbox
        .cgpa()
        .args(["clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All records cleared"));
    assert!(!sandbox.data_file().exists());
}

#[test]
fn report_markdown_with_student_name() {
    let sandbox = Sandbox::new();
    sandbox.add("CVE311", "3", "75");

    sandbox
        .cgpa()
        .args(["report", "--format", "md", "--student", "Ada Obi"])
        .assert()
        .success()
        .stdout(predicate::str::contains("result_slip.md"));

    let content = fs::read_to_string(sandbox.reports_dir().join("result_slip.md")).unwrap();
    assert!(content.contains("**Student:** Ada Obi"));
    assert!(content.contains("| CVE311 | 3 | 75 | A | 5 | 15 |"));
}

#[test]
fn report_to_explicit_output() {
    let sandbox = Sandbox::new();
    sandbox.add("CVE311", "3", "75");
    let output = sandbox.dir.path().join("out").join("slip.html");

    sandbox
        .cgpa()
        .args(["report", "--format", "html", "-o"])
        .arg(&output)
        .assert()
        .success();

    assert!(output.exists());
    assert!(!sandbox.reports_dir().join("result_slip.html").exists());
}

#[test]
fn report_rejects_unknown_format() {
    let sandbox = Sandbox::new();

    sandbox
        .cgpa()
        .args(["report", "--format", "docx"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown report format: docx"));
}

#[test]
fn report_pdf_with_missing_converter_fails() {
    let sandbox = Sandbox::new();
    sandbox.add("CVE311", "3", "75");

    sandbox
        .cgpa()
        .args([
            "report",
            "--format",
            "pdf",
            "--pdf-converter",
            "/nonexistent/cgpa-test-browser",
        ])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn malformed_record_file_is_reported() {
    let sandbox = Sandbox::new();
    fs::write(sandbox.data_file(), "Name,Units\nCVE311,3\n").unwrap();

    sandbox
        .cgpa()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("records.csv:1"));
}

#[test]
fn config_set_then_get() {
    let sandbox = Sandbox::new();

    sandbox
        .cgpa()
        .args(["config", "set", "student_name", "Ada Obi"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set student_name = Ada Obi"));

    sandbox
        .cgpa()
        .args(["config", "get", "student_name"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada Obi"));

    sandbox
        .cgpa()
        .args(["config", "get", "bogus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key: 'bogus'"));
}

#[test]
fn config_set_does_not_persist_cli_overrides() {
    let sandbox = Sandbox::new();

    sandbox
        .cgpa()
        .args(["config", "set", "institution", "Example Polytechnic"])
        .assert()
        .success();

    // --data-file was passed above but must not end up in the file
    sandbox
        .cgpa()
        .args(["config", "get", "data_file"])
        .assert()
        .success()
        .stdout(predicate::str::contains("student_records.csv"));
}
