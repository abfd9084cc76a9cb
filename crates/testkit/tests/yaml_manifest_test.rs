use std::path::PathBuf;

use dotname_testkit::{load_test_cases_from_path, run_all};

fn manifest_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata/qualified_names.yml")
}

#[test]
fn every_manifest_case_passes() {
    let cases = load_test_cases_from_path(manifest_path()).expect("manifest must load");
    assert!(!cases.is_empty(), "manifest must contain cases");

    let failures = run_all(&cases);
    assert!(failures.is_empty(), "failing cases: {failures:#?}");
}

#[test]
fn manifest_covers_malformed_inputs() {
    let cases = load_test_cases_from_path(manifest_path()).expect("manifest must load");

    let malformed = cases.values().filter(|case| case.error.is_some()).count();
    assert!(malformed >= 4, "expected every split error shape, got {malformed}");
}

#[test]
fn missing_manifest_reports_path() {
    let error = load_test_cases_from_path("does/not/exist.yml").expect_err("missing file must fail");

    assert!(error.to_string().contains("does/not/exist.yml"));
}
