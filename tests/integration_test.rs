//! Integration tests for the teller CLI.
//!
//! These tests run the actual binary and verify output against expected CSV files.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::Write;

/// Get path to test data file
fn test_data_path(filename: &str) -> String {
    format!("tests/data/{}", filename)
}

/// Run the binary with the given session script and return stdout
fn run_teller(input_file: &str) -> String {
    let mut cmd = Command::cargo_bin("teller").unwrap();
    let assert = cmd.arg(input_file).assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

/// Normalize CSV for comparison (trim whitespace, drop blank lines)
fn normalize_csv(csv: &str) -> Vec<String> {
    csv.lines()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect()
}

/// Run a sample script and compare the statements against a golden file
fn assert_matches_golden(sample: &str, expected: &str) {
    let output = run_teller(&test_data_path(sample));
    let golden = fs::read_to_string(test_data_path(expected)).unwrap();

    assert_eq!(normalize_csv(&output), normalize_csv(&golden));
}

#[test]
fn test_sample_a_transfer_and_loan() {
    assert_matches_golden("sample_a.csv", "expected_a.csv");
}

#[test]
fn test_sample_b_account_closure() {
    assert_matches_golden("sample_b_close.csv", "expected_b.csv");
}

#[test]
fn test_sample_c_whitespace_handling() {
    assert_matches_golden("sample_c_whitespace.csv", "expected_c.csv");
}

#[test]
fn test_sample_d_rejected_events() {
    assert_matches_golden("sample_d_rejections.csv", "expected_d.csv");
}

#[test]
fn test_generated_script_from_temp_file() {
    let mut script = tempfile::NamedTempFile::new().unwrap();
    writeln!(script, "event,user,pin,to,amount").unwrap();
    writeln!(script, "login,jd,2222,,").unwrap();
    writeln!(script, "transfer,,,ss,1000").unwrap();
    script.flush().unwrap();

    let output = run_teller(script.path().to_str().unwrap());

    assert!(output.contains("jd,Jessica Davis,10720.00,16900.00,6180.00,253.50"));
    assert!(output.contains("ss,Sarah Smith,3270.00,3270.00,0.00,31.30"));
}

#[test]
fn test_missing_file_error() {
    let mut cmd = Command::cargo_bin("teller").unwrap();
    cmd.arg("nonexistent.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error").or(predicate::str::contains("Error")));
}

#[test]
fn test_missing_argument_error() {
    let mut cmd = Command::cargo_bin("teller").unwrap();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Missing session script"));
}

#[test]
fn test_output_has_correct_header() {
    let output = run_teller(&test_data_path("sample_a.csv"));
    assert!(output.starts_with("username,owner,balance,total_in,total_out,interest"));
}

#[test]
fn test_statement_amounts_have_two_places() {
    let output = run_teller(&test_data_path("sample_a.csv"));

    // Check that values have 2 decimal places
    for line in output.lines().skip(1) {
        // Skip header
        let parts: Vec<&str> = line.split(',').collect();
        if parts.len() >= 6 {
            // balance, total_in, total_out, interest should have exactly 2 decimal places
            for part in &parts[2..6] {
                if let Some(dot_pos) = part.find('.') {
                    let decimal_places = part.len() - dot_pos - 1;
                    assert_eq!(decimal_places, 2, "Expected 2 decimal places in: {}", part);
                }
            }
        }
    }
}
