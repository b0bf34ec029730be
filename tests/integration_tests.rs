use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{add_obs, init_data_with_rows, ptk, setup_test_data, temp_dir_named};

#[test]
fn test_init_creates_header_only_file() {
    let data = setup_test_data("init_header");

    ptk()
        .args(["--data", &data, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Data file initialized"));

    let content = fs::read_to_string(&data).expect("read data file");
    assert_eq!(
        content.trim_end(),
        "Date,Moment,Fatigue,Douleurs,Nausees,Maux_de_tete,RGO,Sommeil,Humeur,Contractions,Remarques"
    );

    // second init leaves the file alone
    ptk()
        .args(["--data", &data, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("already present"));
}

#[test]
fn test_add_uses_form_defaults() {
    let data = setup_test_data("add_defaults");

    ptk()
        .args(["--data", &data, "add", "--date", "2025-10-05"])
        .assert()
        .success()
        .stdout(contains("Observation saved for 2025-10-05"))
        .stdout(contains("Wellness index: 7.2/10"));

    let content = fs::read_to_string(&data).expect("read data file");
    assert!(content.contains("2025-10-05,Matin,5,3,2,2,2,6,7,Non,"));
}

#[test]
fn test_add_evening_with_notes() {
    let data = setup_test_data("add_notes");

    ptk()
        .args([
            "--data",
            &data,
            "add",
            "--date",
            "2025-10-06",
            "--moment",
            "evening",
            "--contractions",
            "mild",
            "--notes",
            "baby kicked a lot, after dinner",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&data).expect("read data file");
    assert!(content.contains("2025-10-06,Soir,"));
    assert!(content.contains("Légères,\"baby kicked a lot, after dinner\""));
}

#[test]
fn test_add_rejects_out_of_range_score() {
    let data = setup_test_data("add_range");

    ptk()
        .args(["--data", &data, "add", "--fatigue", "11"])
        .assert()
        .failure();

    assert!(!std::path::Path::new(&data).exists());
}

#[test]
fn test_add_rejects_bad_date() {
    let data = setup_test_data("add_bad_date");

    ptk()
        .args(["--data", &data, "add", "--date", "05/10/2025"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_add_rejects_unknown_contractions() {
    let data = setup_test_data("add_bad_contractions");

    ptk()
        .args(["--data", &data, "add", "--contractions", "sometimes"])
        .assert()
        .failure()
        .stderr(contains("invalid value 'sometimes'"));

    assert!(!std::path::Path::new(&data).exists());
}

#[test]
fn test_summary_without_data() {
    let data = setup_test_data("summary_empty");

    ptk()
        .args(["--data", &data, "summary"])
        .assert()
        .success()
        .stdout(contains("No observations recorded yet"));
}

#[test]
fn test_summary_uses_last_row() {
    let data = setup_test_data("summary_last");
    add_obs(&data, "2025-10-05", [9, 9, 9, 0, 0], "none");
    add_obs(&data, "2025-10-06", [5, 3, 2, 2, 2], "none");

    ptk()
        .args(["--data", &data, "summary"])
        .assert()
        .success()
        .stdout(contains("Summary for 2025-10-06"))
        .stdout(contains("7.2/10"))
        .stdout(contains("Everything looks normal"));
}

#[test]
fn test_summary_urgent_advice() {
    let data = setup_test_data("summary_urgent");
    add_obs(&data, "2025-10-05", [9, 9, 9, 0, 0], "none");

    ptk()
        .args(["--data", &data, "summary"])
        .assert()
        .success()
        .stdout(contains("contact a health professional promptly"))
        .stdout(contains("significant fatigue").not());
}

#[test]
fn test_summary_fatigue_nausea_warning() {
    let data = setup_test_data("summary_warning");
    add_obs(&data, "2025-10-05", [8, 0, 8, 0, 0], "none");

    ptk()
        .args(["--data", &data, "summary"])
        .assert()
        .success()
        .stdout(contains("Significant fatigue and nausea"));
}

#[test]
fn test_list_defaults_to_latest_month() {
    let data = setup_test_data("list_default");
    init_data_with_rows(&data);

    ptk()
        .args(["--data", &data, "list"])
        .assert()
        .success()
        .stdout(contains("Observations for 2025-11"))
        .stdout(contains("2025-11-02"))
        .stdout(contains("2025-10-05").not());
}

#[test]
fn test_list_filter_month() {
    let data = setup_test_data("list_month");
    init_data_with_rows(&data);

    ptk()
        .args(["--data", &data, "list", "--month", "2025-10"])
        .assert()
        .success()
        .stdout(contains("2025-10-05"))
        .stdout(contains("2025-10-18"))
        .stdout(contains("2 observation(s)"))
        .stdout(contains("2025-11-02").not());
}

#[test]
fn test_list_invalid_month() {
    let data = setup_test_data("list_bad_month");
    init_data_with_rows(&data);

    ptk()
        .args(["--data", &data, "list", "--month", "2025-13"])
        .assert()
        .failure()
        .stderr(contains("Invalid month"));
}

#[test]
fn test_months_marks_default() {
    let data = setup_test_data("months");
    init_data_with_rows(&data);

    ptk()
        .args(["--data", &data, "months"])
        .assert()
        .success()
        .stdout(contains("2025-10"))
        .stdout(contains("2025-11    1 observation(s) (default)"));
}

#[test]
fn test_chart_for_month() {
    let data = setup_test_data("chart");
    init_data_with_rows(&data);

    ptk()
        .args(["--data", &data, "chart", "--month", "2025-10"])
        .assert()
        .success()
        .stdout(contains("Symptom trend - 2025-10"))
        .stdout(contains("2025-10-18"))
        .stdout(contains("Headache"));
}

#[test]
fn test_tips() {
    ptk()
        .args(["tips"])
        .assert()
        .success()
        .stdout(contains("Stay hydrated"))
        .stdout(contains("do not replace medical advice"));
}

#[test]
fn test_log_records_operations() {
    let data = setup_test_data("audit_log");
    init_data_with_rows(&data);

    ptk()
        .args(["--data", &data, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("add"))
        .stdout(contains("2025-11-02"));
}

#[test]
fn test_relative_data_path_is_one_table() {
    let home = temp_dir_named("pregtrack_rel_home");
    let work = temp_dir_named("pregtrack_rel_work");

    ptk()
        .current_dir(&work)
        .env("HOME", &home)
        .args(["--data", "rel.csv", "--test", "init"])
        .assert()
        .success();

    ptk()
        .current_dir(&work)
        .env("HOME", &home)
        .args(["--data", "rel.csv", "add", "--date", "2025-10-05"])
        .assert()
        .success();

    let content = fs::read_to_string(work.join("rel.csv")).expect("read data file");
    let mut lines = content.lines();
    assert!(lines.next().unwrap().starts_with("Date,Moment"));
    assert!(lines.next().unwrap().starts_with("2025-10-05,"));
    assert!(lines.next().is_none());

    assert!(!home.join(".pregtrack").join("rel.csv").exists());
}
