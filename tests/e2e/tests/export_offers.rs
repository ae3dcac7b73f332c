//! E2E тесты для CLI инструмента `export_offers`.

use std::fs;

use assert_cmd::Command;
use e2e_tests::{account_created, offer, offer_created, offer_removed, write_changes};
use predicates::prelude::*;
use tempfile::tempdir;

/// Создать команду для запуска export_offers.
///
/// `cargo_bin` deprecated из-за edge case с custom build directories,
/// но это единственный способ для кросс-крейтовых бинарников.
#[expect(deprecated)]
fn export_offers() -> Command {
    Command::cargo_bin("export_offers").unwrap()
}

fn json_lines(text: &str) -> Vec<serde_json::Value> {
    text.lines().map(|line| serde_json::from_str(line).unwrap()).collect()
}

// ============================================================================
// Успешная выгрузка
// ============================================================================

#[test]
fn test_export_json_to_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("changes.txt");
    let output = dir.path().join("offers.txt");
    write_changes(&input, &[offer_created(offer(1), 100), offer_created(offer(2), 101)]).unwrap();

    export_offers()
        .args(["--input", input.to_str().unwrap(), "--end-ledger", "200"])
        .args(["--output", output.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("Exported 2 offer(s), skipped 0, filtered 0"));

    let records = json_lines(&fs::read_to_string(&output).unwrap());
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["offerid"], 1);
    assert_eq!(records[0]["sellingasset"], "AAAAAA==");
    assert_eq!(records[0]["pricen"], 3);
    assert_eq!(records[0]["priced"], 2);
    assert_eq!(records[0]["price"], 1.5);
    assert_eq!(records[0]["last_modified_ledger"], 100);
    assert!(records[0]["sellerid"].as_str().unwrap().starts_with('G'));
}

#[test]
fn test_export_csv_to_stdout() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("changes.txt");
    write_changes(&input, &[offer_created(offer(7), 5)]).unwrap();

    export_offers()
        .args(["-i", input.to_str().unwrap(), "-e", "10", "--stdout", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("sellerid,offerid,sellingasset,buyingasset,"))
        .stdout(predicate::str::contains(",7,AAAAAA==,"));
}

#[test]
fn test_export_from_stdin() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("changes.txt");
    write_changes(&input, &[offer_created(offer(3), 1)]).unwrap();

    export_offers()
        .args(["-e", "1", "--stdout"])
        .write_stdin(fs::read(&input).unwrap())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"offerid\":3"));
}

#[test]
fn test_removed_offer_uses_previous_snapshot() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("changes.txt");
    write_changes(&input, &[offer_removed(offer(9), 50)]).unwrap();

    let assert = export_offers()
        .args(["-i", input.to_str().unwrap(), "-s", "50", "-e", "50", "--stdout"])
        .assert()
        .success();

    let records = json_lines(&String::from_utf8(assert.get_output().stdout.clone()).unwrap());
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["offerid"], 9);
    assert_eq!(records[0]["last_modified_ledger"], 50);
}

// ============================================================================
// Фильтрация и лимит
// ============================================================================

#[test]
fn test_ledger_range_and_entry_type_filter() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("changes.txt");
    write_changes(&input, &[
        offer_created(offer(1), 9),
        offer_created(offer(2), 10),
        account_created(15),
        offer_created(offer(3), 20),
        offer_created(offer(4), 21),
    ])
    .unwrap();

    export_offers()
        .args(["-i", input.to_str().unwrap(), "-s", "10", "-e", "20", "--stdout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"offerid\":2"))
        .stdout(predicate::str::contains("\"offerid\":3"))
        .stdout(predicate::str::contains("\"offerid\":1,").not())
        .stderr(predicate::str::contains("Exported 2 offer(s), skipped 0, filtered 3"));
}

#[test]
fn test_limit() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("changes.txt");
    let changes: Vec<_> = (1..=5).map(|id| offer_created(offer(id), 1)).collect();
    write_changes(&input, &changes).unwrap();

    let assert = export_offers()
        .args(["-i", input.to_str().unwrap(), "-e", "1", "-l", "2", "--stdout"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout.lines().count(), 2);
}

// ============================================================================
// Некорректные предложения
// ============================================================================

#[test]
fn test_invalid_offer_is_skipped() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("changes.txt");
    let mut broken = offer(2);
    broken.price.d = 0;
    write_changes(&input, &[offer_created(offer(1), 1), offer_created(broken, 1)]).unwrap();

    export_offers()
        .args(["-i", input.to_str().unwrap(), "-e", "1", "--stdout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"offerid\":1"))
        .stdout(predicate::str::contains("\"offerid\":2").not())
        .stderr(predicate::str::contains("skipped 1"));
}

#[test]
fn test_strict_mode_fails_on_invalid_offer() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("changes.txt");
    let mut broken = offer(2);
    broken.price.d = 0;
    write_changes(&input, &[broken].map(|o| offer_created(o, 1))).unwrap();

    export_offers()
        .args(["-i", input.to_str().unwrap(), "-e", "1", "--stdout", "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("price denominator is 0 for offer 2"));
}

// ============================================================================
// Ошибки аргументов и входа
// ============================================================================

#[test]
fn test_end_ledger_is_required() {
    export_offers().args(["--stdout"]).assert().failure();
}

#[test]
fn test_inverted_range_fails() {
    export_offers()
        .args(["-s", "20", "-e", "10", "--stdout"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not be less than start ledger"));
}

#[test]
fn test_missing_input_file() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.txt");

    export_offers()
        .args(["-i", missing.to_str().unwrap(), "-e", "1", "--stdout"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open input file"));
}

#[test]
fn test_undecodable_input_fails() {
    export_offers()
        .args(["-e", "1", "--stdout"])
        .write_stdin("definitely not xdr\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read change #1"));
}
