//! End-to-end tests driving the binary with scripted stdin.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn grade_generator() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("grade-generator").unwrap()
}

#[test]
fn single_formative_assignment_passes() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("grades.csv");

    grade_generator()
        .arg("--out")
        .arg(&out)
        .write_stdin("HW1\nFA\n80\n20\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Grade Generator Calculator ==="))
        .stdout(predicate::str::contains("Formative (FA): 16.00 / 20.00"))
        .stdout(predicate::str::contains("Summative (SA): 0.00 / 0.00"))
        .stdout(predicate::str::contains("Total Grade: 16.00%"))
        .stdout(predicate::str::contains("GPA: 0.80"))
        .stdout(predicate::str::contains("Status: PASS"))
        .stdout(predicate::str::contains("Data saved to"));

    let content = std::fs::read_to_string(&out).unwrap();
    assert_eq!(
        content,
        "Assignment,Category,Grade,Weight\nHW1,FA,80.0,20.0\n"
    );
}

#[test]
fn failing_formative_reports_fail_with_remediation() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("grades.csv");

    grade_generator()
        .arg("--out")
        .arg(&out)
        .write_stdin("HW1\nFA\n40\n50\ny\nExam\nSA\n90\n50\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Formative (FA): 20.00 / 50.00"))
        .stdout(predicate::str::contains("Summative (SA): 45.00 / 50.00"))
        .stdout(predicate::str::contains("Total Grade: 65.00%"))
        .stdout(predicate::str::contains("GPA: 3.25"))
        .stdout(predicate::str::contains("Status: FAIL"))
        .stdout(predicate::str::contains(
            "  - Need to improve Formative assignments",
        ))
        .stdout(predicate::str::contains("Need to improve Summative assignments").not());
}

#[test]
fn invalid_input_is_reprompted_not_fatal() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("grades.csv");

    grade_generator()
        .arg("--out")
        .arg(&out)
        .write_stdin("HW1\nxx\nfa\nabc\n80\n20\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Category must be 'FA' or 'SA'"))
        .stdout(predicate::str::contains("Error: Please enter a valid input"))
        .stdout(predicate::str::contains("Status: PASS"));

    let content = std::fs::read_to_string(&out).unwrap();
    assert!(content.contains("HW1,FA,80.0,20.0"));
}

#[test]
fn identical_runs_produce_identical_files() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("grades.csv");
    let stdin = "HW1\nFA\n80\n20\nn\n";

    grade_generator()
        .arg("--out")
        .arg(&out)
        .write_stdin(stdin)
        .assert()
        .success();
    let first = std::fs::read_to_string(&out).unwrap();

    grade_generator()
        .arg("--out")
        .arg(&out)
        .write_stdin(stdin)
        .assert()
        .success();
    let second = std::fs::read_to_string(&out).unwrap();

    assert_eq!(first, second);
    assert_eq!(second.matches("Assignment,Category").count(), 1);
}

#[test]
fn defaults_to_grades_csv_in_the_working_directory() {
    let dir = TempDir::new().unwrap();

    grade_generator()
        .current_dir(dir.path())
        .write_stdin("HW1\nFA\n80\n20\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Data saved to grades.csv"));

    assert!(dir.path().join("grades.csv").exists());
}

#[test]
fn closed_stdin_fails_instead_of_spinning() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("grades.csv");

    grade_generator()
        .arg("--out")
        .arg(&out)
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input ended unexpectedly"));

    assert!(!out.exists());
}
