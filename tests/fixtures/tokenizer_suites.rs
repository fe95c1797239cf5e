use crate::harness::{get_test_cases, tokenize_partially};

#[test]
fn tokenizer_suites() {
    let test_cases = get_test_cases();

    assert!(!test_cases.is_empty(), "No test cases found");

    for test_case in test_cases {
        let (output, error) = tokenize_partially(&test_case.input);

        assert_eq!(
            output, test_case.output,
            "Token mismatch in {:?} for input {:?}",
            test_case.description, test_case.input
        );

        assert_eq!(
            error, test_case.error,
            "Error mismatch in {:?} for input {:?}",
            test_case.description, test_case.input
        );
    }
}
