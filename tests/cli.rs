use std::fs;
use std::path::Path;

use assert_cmd::Command;
use chrono::{Datelike, Local, Month};
use predicates::prelude::*;
use tempfile::TempDir;

fn expense(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("expense").unwrap();
    cmd.current_dir(dir)
        .env("EXPENSE_TRACKER_DATA_DIR", dir)
        .env_remove("RUST_LOG");
    cmd
}

fn add(dir: &Path, description: &str, amount: &str, category: Option<&str>) {
    let mut cmd = expense(dir);
    cmd.args(["add", "--description", description, "--amount", amount]);
    if let Some(category) = category {
        cmd.args(["--category", category]);
    }
    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("Expense added successfully (ID: "));
}

fn stored(dir: &Path) -> serde_json::Value {
    let contents = fs::read_to_string(dir.join("expenses.json")).unwrap();
    serde_json::from_str(&contents).unwrap()
}

#[test]
fn add_to_empty_store() {
    let dir = TempDir::new().unwrap();

    expense(dir.path())
        .args(["add", "--description", "Coffee", "--amount", "3.50", "--category", "Food"])
        .assert()
        .success()
        .stdout("Expense added successfully (ID: 1)\n");

    let json = stored(dir.path());
    let records = json.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["id"], 1);
    assert_eq!(records[0]["description"], "Coffee");
    assert_eq!(records[0]["amount"], 3.5);
    assert_eq!(records[0]["category"], "Food");
    assert_eq!(
        records[0]["date"],
        Local::now().date_naive().format("%Y-%m-%d").to_string()
    );
}

#[test]
fn add_rejects_non_positive_amount() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "Coffee", "3.50", None);
    let before = fs::read(dir.path().join("expenses.json")).unwrap();

    for amount in ["0", "-4.25"] {
        expense(dir.path())
            .args(["add", "--description", "Refund", "--amount", amount])
            .assert()
            .success()
            .stdout("Error: Amount must be greater than zero.\n");
    }

    assert_eq!(fs::read(dir.path().join("expenses.json")).unwrap(), before);
}

#[test]
fn add_requires_description_and_amount() {
    let dir = TempDir::new().unwrap();

    expense(dir.path())
        .args(["add", "--amount", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--description"));

    assert!(!dir.path().join("expenses.json").exists());
}

#[test]
fn add_rejects_amount_below_one_cent() {
    let dir = TempDir::new().unwrap();

    expense(dir.path())
        .args(["add", "--description", "Gum", "--amount", "0.004"])
        .assert()
        .success()
        .stdout("Error: Amount '0.004' is less than one cent.\n");

    assert!(!dir.path().join("expenses.json").exists());
}

#[test]
fn add_accepts_leading_dot_and_rounds() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "Gum", ".5", None);
    add(dir.path(), "Tea", "3.999", None);

    let json = stored(dir.path());
    let records = json.as_array().unwrap();
    assert_eq!(records[0]["amount"], 0.5);
    assert_eq!(records[1]["amount"], 4.0);
}

#[test]
fn add_keeps_records_with_large_ids() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("expenses.json"),
        r#"[
    {"id": 1, "date": "2025-01-02", "description": "Rent", "amount": 1200.0, "category": "Housing"},
    {"id": 5000000000, "date": "2025-01-03", "description": "Gas", "amount": 40.0, "category": "Car"}
]"#,
    )
    .unwrap();

    expense(dir.path())
        .args(["add", "--description", "Coffee", "--amount", "3.50"])
        .assert()
        .success()
        .stdout("Expense added successfully (ID: 5000000001)\n");

    let ids: Vec<u64> = stored(dir.path())
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 5_000_000_000, 5_000_000_001]);
}

#[test]
fn add_reports_exhausted_ids() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("expenses.json"),
        r#"[{"id": 18446744073709551615, "date": "2025-01-02", "description": "Last", "amount": 1.0, "category": "General"}]"#,
    )
    .unwrap();
    let before = fs::read(dir.path().join("expenses.json")).unwrap();

    expense(dir.path())
        .args(["add", "--description", "Coffee", "--amount", "3.50"])
        .assert()
        .success()
        .stdout("Error: No expense IDs left to assign.\n");

    assert_eq!(fs::read(dir.path().join("expenses.json")).unwrap(), before);
}

#[test]
fn list_filters_by_category() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "Coffee", "3.50", Some("Food"));
    add(dir.path(), "Bus", "2.75", None);
    add(dir.path(), "Bagel", "2", Some("Food"));

    expense(dir.path())
        .args(["list", "--category", "Food"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Coffee"))
        .stdout(predicate::str::contains("Bagel"))
        .stdout(predicate::str::contains("Bus").not());

    let output = expense(dir.path()).arg("list").assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("ID   Date"));
    assert!(lines[2].starts_with("1 "));
    assert!(lines[3].contains("General"));
    assert!(lines[4].starts_with("3 "));
}

#[test]
fn list_empty_store_prints_header_only() {
    let dir = TempDir::new().unwrap();

    let output = expense(dir.path()).arg("list").assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout.lines().count(), 2);
    assert!(!dir.path().join("expenses.json").exists());
}

#[test]
fn list_with_empty_category_shows_everything() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "Coffee", "3.50", Some("Food"));
    add(dir.path(), "Bus", "2.75", None);

    expense(dir.path())
        .args(["list", "--category", ""])
        .assert()
        .success()
        .stdout(predicate::str::contains("Coffee"))
        .stdout(predicate::str::contains("Bus"));
}

#[test]
fn delete_present_and_absent_ids() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "A", "1", None);
    add(dir.path(), "B", "2", None);
    add(dir.path(), "C", "3", None);

    expense(dir.path())
        .args(["delete", "--id", "2"])
        .assert()
        .success()
        .stdout("Expense deleted successfully\n");

    let ids: Vec<u64> = stored(dir.path())
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 3]);

    let before = fs::read(dir.path().join("expenses.json")).unwrap();
    expense(dir.path())
        .args(["delete", "--id", "2"])
        .assert()
        .success()
        .stdout("Error: Expense with ID 2 not found.\n");
    assert_eq!(fs::read(dir.path().join("expenses.json")).unwrap(), before);
}

#[test]
fn summary_totals() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "A", "10", None);
    add(dir.path(), "B", "20", None);
    add(dir.path(), "C", "30", None);

    expense(dir.path())
        .arg("summary")
        .assert()
        .success()
        .stdout("Total expenses: $60.00\n");

    let today = Local::now().date_naive();
    let month_name = Month::try_from(today.month() as u8).unwrap().name();
    expense(dir.path())
        .args(["summary", "--month", &today.month().to_string()])
        .assert()
        .success()
        .stdout(format!("Total expenses for {}: $60.00\n", month_name));
}

#[test]
fn summary_rejects_out_of_range_month() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "A", "10", None);

    for month in ["0", "13", "-2"] {
        expense(dir.path())
            .args(["summary", "--month", month])
            .assert()
            .success()
            .stdout("Error: Month must be between 1 and 12.\n");
    }
}

#[test]
fn summary_reports_total_too_large() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("expenses.json"),
        r#"[
    {"id": 1, "date": "2025-01-02", "description": "Huge", "amount": 50000000000000000.0, "category": "General"},
    {"id": 2, "date": "2025-01-03", "description": "Huge", "amount": 50000000000000000.0, "category": "General"}
]"#,
    )
    .unwrap();

    expense(dir.path())
        .arg("summary")
        .assert()
        .success()
        .stdout("Error: Total is too large to compute.\n");
}

#[test]
fn export_writes_csv() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "Coffee", "3.50", Some("Food"));
    add(dir.path(), "Pens, blue", "4", Some("Office"));

    expense(dir.path())
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("expenses_export.csv"));

    let csv = fs::read_to_string(dir.path().join("expenses_export.csv")).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "id,date,description,amount,category");
    assert!(lines[1].ends_with(",Coffee,3.50,Food"));
    assert!(lines[2].ends_with(",\"Pens, blue\",4.00,Office"));
}

#[test]
fn corrupt_store_is_treated_as_empty() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("expenses.json"), "this is not json").unwrap();

    expense(dir.path())
        .arg("summary")
        .assert()
        .success()
        .stdout("Total expenses: $0.00\n");

    add(dir.path(), "Fresh start", "1", None);
    assert_eq!(stored(dir.path())[0]["id"], 1);
}

#[test]
fn no_command_prints_help() {
    let dir = TempDir::new().unwrap();

    expense(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}
