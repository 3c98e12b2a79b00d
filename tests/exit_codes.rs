//! Tests for exit code policies (--fail-on flag)

use sitemap_validator::{evaluate_exit_code, FailOn, ValidationReport};

fn report(total_urls: usize, failed: usize) -> ValidationReport {
    ValidationReport {
        root_sitemap: "https://example.com/sitemap.xml".to_string(),
        sitemaps_fetched: 1,
        total_urls,
        successful: total_urls - failed,
        failed,
        skipped: 0,
        failed_urls: (0..failed)
            .map(|i| format!("https://example.com/broken{i}"))
            .collect(),
        elapsed_seconds: 1.0,
    }
}

#[test]
fn test_fail_on_never_always_returns_zero() {
    assert_eq!(evaluate_exit_code(&FailOn::Never, 10, &report(10, 5)), 0);
    assert_eq!(evaluate_exit_code(&FailOn::Never, 10, &report(10, 10)), 0);
    assert_eq!(evaluate_exit_code(&FailOn::Never, 10, &report(0, 0)), 0);
}

#[test]
fn test_fail_on_any_failure() {
    assert_eq!(evaluate_exit_code(&FailOn::AnyFailure, 10, &report(10, 0)), 0);
    assert_eq!(evaluate_exit_code(&FailOn::AnyFailure, 10, &report(10, 1)), 2);
    assert_eq!(evaluate_exit_code(&FailOn::AnyFailure, 10, &report(0, 0)), 0);
}

#[test]
fn test_fail_on_pct_greater_than() {
    // 10% failed is not greater than a 10% threshold
    assert_eq!(
        evaluate_exit_code(&FailOn::PctGreaterThan, 10, &report(10, 1)),
        0
    );
    assert_eq!(
        evaluate_exit_code(&FailOn::PctGreaterThan, 10, &report(10, 2)),
        2
    );
    assert_eq!(
        evaluate_exit_code(&FailOn::PctGreaterThan, 0, &report(100, 1)),
        2
    );
    assert_eq!(
        evaluate_exit_code(&FailOn::PctGreaterThan, 100, &report(10, 10)),
        0
    );
}

#[test]
fn test_fail_on_pct_with_no_urls() {
    assert_eq!(
        evaluate_exit_code(&FailOn::PctGreaterThan, 10, &report(0, 0)),
        3
    );
}

#[test]
fn test_skipped_urls_do_not_count_as_failures() {
    let mut report = report(10, 1);
    report.successful = 0;
    report.skipped = 9;
    assert_eq!(evaluate_exit_code(&FailOn::PctGreaterThan, 10, &report), 0);
    assert_eq!(evaluate_exit_code(&FailOn::AnyFailure, 10, &report), 2);
}
