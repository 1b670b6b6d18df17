use geodist::{
    harness::{Case, Report, Suite, distance_suite},
    shared::Coordinate,
};

fn run_to_string(suite: &Suite) -> (Report, String) {
    let mut out: Vec<u8> = Vec::new();
    let report = suite.run(&mut out).unwrap();
    (report, String::from_utf8(out).unwrap())
}

#[test]
fn distance_suite_passes_test() {
    let suite = distance_suite();
    assert_eq!(suite.len(), 7);
    let (report, output) = run_to_string(&suite);
    assert_eq!(report, Report { passed: 7, total: 7 });
    assert!(report.is_success());
    assert_eq!(report.exit_code(), 0);

    let expected = "Running distance calculation tests...\n\
        Test 1: Zero distance... PASS\n\
        Test 2: Sydney to Melbourne... PASS\n\
        Test 3: Sydney to Perth... PASS\n\
        Test 4: Across dateline... PASS\n\
        Test 5: North-South distance... PASS\n\
        Test 6: East-West distance... PASS\n\
        Test 7: Edge cases... PASS\n\
        \n\
        Results: 7/7 tests passed\n\
        ✅ All distance tests passed!\n";
    assert_eq!(output, expected);
}

#[test]
fn case_order_test() {
    let suite = distance_suite();
    let names: Vec<&str> = suite.cases().iter().map(Case::name).collect();
    assert_eq!(
        names,
        [
            "Zero distance",
            "Sydney to Melbourne",
            "Sydney to Perth",
            "Across dateline",
            "North-South distance",
            "East-West distance",
            "Edge cases",
        ]
    );
}

#[test]
fn failing_case_does_not_stop_run_test() {
    let suite = Suite::new()
        .with_case(Case::new("always fails", || false))
        .with_case(Case::within(
            "wrong expectation",
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, 10.0),
            500.0,
            10.0,
        ))
        .with_case(Case::new("always passes", || true));
    let (report, output) = run_to_string(&suite);

    assert_eq!(report, Report { passed: 1, total: 3 });
    assert!(!report.is_success());
    assert_eq!(report.exit_code(), 1);
    assert!(output.contains("Test 1: always fails... FAIL\n"));
    assert!(output.contains("Test 2: wrong expectation... FAIL\n"));
    assert!(output.contains("Test 3: always passes... PASS\n"));
    assert!(output.ends_with("\nResults: 1/3 tests passed\n❌ Some distance tests failed!\n"));
}

#[test]
fn tolerance_is_strict_test() {
    let case = Case::within(
        "exact",
        Coordinate::new(0.0, 0.0),
        Coordinate::new(0.0, 0.0),
        1.0,
        1.0,
    );
    assert!(!case.run());
}

#[test]
fn empty_suite_test() {
    let suite = Suite::new();
    assert!(suite.is_empty());
    let (report, output) = run_to_string(&suite);
    assert!(report.is_success());
    assert!(output.contains("Results: 0/0 tests passed\n"));
}
