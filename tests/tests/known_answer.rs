//! Known-answer vectors for ECDH-B163

use gfecdh_tests::suites::vectors::loader::parse_suite;
use gfecdh_tests::suites::vectors::ExpectedResult;
use gfecdh_tests::{load_suite, run_suite};

#[test]
fn ecdh_b163_vectors_pass() {
    let suite = load_suite("ecdh_b163").expect("vector file loads");
    assert_eq!(suite.curve, "B-163");
    assert!(suite.case_count() >= 20);

    let report = run_suite(&suite).expect("suite runs");
    for failure in &report.failures {
        eprintln!("{}", failure);
    }
    assert!(report.is_success(), "{} failing cases", report.failures.len());
    assert_eq!(report.passed, suite.case_count());
}

#[test]
fn ecdh_b163_vectors_cover_rejections() {
    let suite = load_suite("ecdh_b163").unwrap();
    let invalid = suite
        .groups
        .iter()
        .flat_map(|g| g.cases.iter())
        .filter(|c| c.result == ExpectedResult::Invalid)
        .count();
    assert!(invalid >= 8);
}

#[test]
fn runner_reports_wrong_expectations() {
    let suite = parse_suite(
        r#"
algorithm = "ECDH-B163"
curve = "B-163"

[[groups]]
name = "broken"
test_type = "KAT"

[[groups.cases]]
id = 1
secret = "000000000000000000000000000000000000000001"
public = "0201aeb33fed9c49e0200a0c561ea66d5ab85bd4c2d4"

[[groups.cases]]
id = 2
secret = "05c4be5ddbc5e3ea34e4acea5163fba6cd40c01e26"
peer = "030099d7fc542070b261a1b3257277d2fcf62781a6e1"
result = "invalid"
error_contains = "invalid point"
"#,
    )
    .unwrap();

    let report = run_suite(&suite).unwrap();
    assert_eq!(report.passed, 0);
    assert_eq!(report.failures.len(), 2);
}

#[test]
fn runner_rejects_unknown_algorithm() {
    let suite = parse_suite(
        r#"
algorithm = "ECDH-B571"
curve = "B-571"
groups = []
"#,
    )
    .unwrap();
    assert!(run_suite(&suite).is_err());
}
