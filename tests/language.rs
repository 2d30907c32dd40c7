use std::fs;

use elsif::{
    Error, RuntimeError, Store,
    ast::{BinaryOperator, LiteralValue, Node, UnaryOperator},
    interpret,
    interpreter::evaluator::core::evaluate,
};
use walkdir::WalkDir;

#[test]
fn script_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "elsif"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        let expectations = extract_expectations(&content);
        assert!(!expectations.is_empty(), "{path:?} has no `# expect:` lines");

        let mut store = Store::new();
        if let Err(e) = interpret(&content, &mut store) {
            panic!("Script {path:?} failed:\n{content}\nError: {e}");
        }

        for (name, expected) in expectations {
            assert_eq!(store.value_of(name),
                       Some(expected),
                       "{path:?}: variable {name}");
            count += 1;
        }
    }

    assert!(count > 0, "No script examples found in tests/scripts");
}

/// Collects `# expect: X = value` directives.
fn extract_expectations(content: &str) -> Vec<(char, f64)> {
    content.lines()
           .filter_map(|line| line.trim_start().strip_prefix("# expect:"))
           .map(|rest| {
               let (name, value) = rest.split_once('=').expect("malformed expectation");
               let name = name.trim().chars().next().expect("missing variable name");
               let value = value.trim().parse().expect("expectation is not a number");
               (name, value)
           })
           .collect()
}

fn run(src: &str) -> (Option<f64>, Store) {
    let mut store = Store::new();
    match interpret(src, &mut store) {
        Ok(result) => (result, store),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn value(src: &str) -> f64 {
    run(src).0.unwrap_or_else(|| panic!("Script {src:?} produced no value"))
}

fn var(src: &str, name: char) -> f64 {
    run(src).1.value_of(name).unwrap_or(0.0)
}

fn assert_failure(src: &str) -> Error {
    match interpret(src, &mut Store::new()) {
        Ok(result) => panic!("Script succeeded with {result:?} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn arithmetic_precedence_and_associativity() {
    assert_eq!(value("2 + 3 * 4"), 14.0);
    assert_eq!(value("(2 + 3) * 4"), 20.0);
    assert_eq!(value("10 - 4 - 3"), 3.0);
    assert_eq!(value("64 / 4 / 2"), 8.0);
    assert_eq!(value("2 * 3 + 4 * 5"), 26.0);
    assert_eq!(value("7 % 4 * 2"), 6.0);
    assert_eq!(value("1.5 + 2.25"), 3.75);
}

#[test]
fn unary_signs() {
    assert_eq!(value("-3 + 5"), 2.0);
    assert_eq!(value("--3"), 3.0);
    assert_eq!(value("+-+4"), -4.0);
    assert_eq!(value("-(2 + 3)"), -5.0);
}

#[test]
fn comparisons_yield_one_or_zero() {
    assert_eq!(value("5 > 3"), 1.0);
    assert_eq!(value("5 > 10"), 0.0);
    assert_eq!(value("3 >= 3"), 1.0);
    assert_eq!(value("2 <= 1"), 0.0);
    assert_eq!(value("4 == 4.0"), 1.0);
    assert_eq!(value("4 != 4"), 0.0);
    assert_eq!(value("1 < 2 < 3"), 1.0);
    assert_eq!(value("3 > 2 > 1"), 0.0);
}

#[test]
fn comparisons_bind_like_multiplication_inside_terms() {
    // `1 + 2 > 2` is `1 + (2 > 2)`.
    assert_eq!(value("1 + 2 > 2"), 1.0);
    assert_eq!(var("A = 1 + 2 > 2", 'A'), 1.0);
    assert_eq!(value("(1 + 2) > 2"), 1.0);
    assert_eq!(value("6 == 2 * 3"), 0.0);
}

#[test]
fn booleans_are_numeric() {
    assert_eq!(value("true + true"), 2.0);
    assert_eq!(value("false"), 0.0);
    assert_eq!(var("if true A = 1 else A = 2 end", 'A'), 1.0);
}

#[test]
fn assignment_and_lookup() {
    assert_eq!(var("A = 7 * 9", 'A'), 63.0);
    assert_eq!(var("A = 2; B = A * A; C = B - A", 'C'), 2.0);
    assert_eq!(value("A = 4; (A * 2)"), 8.0);
}

#[test]
fn uninitialized_variables_read_as_zero() {
    assert_eq!(value("(Q)"), 0.0);
    assert_eq!(var("A = Z + 1", 'A'), 1.0);
}

#[test]
fn statement_programs_have_no_value() {
    assert_eq!(run("A = 1").0, None);
    assert_eq!(run("A = 1; if A B = 2 end").0, None);
    assert_eq!(run("").0, None);
    assert_eq!(run("# only a comment\n;;").0, None);
}

#[test]
fn last_expression_is_the_result() {
    assert_eq!(value("1; 2; 3"), 3.0);
    assert_eq!(value("A = 5\n(A * 2 + 1)"), 11.0);
}

#[test]
fn if_elsif_else_runs_exactly_one_branch() {
    let src = "A = 5; if A > 10 C = 1 elsif A > 3 C = 2 else C = 3 end";
    assert_eq!(var(src, 'C'), 2.0);

    assert_eq!(var("A = 50; if A > 10 C = 1 elsif A > 3 C = 2 else C = 3 end", 'C'),
               1.0);
    assert_eq!(var("A = 1; if A > 10 C = 1 elsif A > 3 C = 2 else C = 3 end", 'C'),
               3.0);
    assert_eq!(var("A = 1; if A > 10 C = 1 elsif A > 3 C = 2 end", 'C'), 0.0);
}

#[test]
fn if_without_else_skips_body() {
    let (_, store) = run("A = 0; if A B = 1 end");
    assert_eq!(store.value_of('B'), None);
}

#[test]
fn nan_conditions_are_true() {
    assert_eq!(var("if 0 / 0 A = 1 else A = 2 end", 'A'), 1.0);
}

#[test]
fn while_terminates_when_condition_is_zero() {
    assert_eq!(var("A = 0; while A < 3 A = A + 1 end", 'A'), 3.0);
    assert_eq!(var("A = 10; while A A = A - 1 end", 'A'), 0.0);
    assert_eq!(var("A = 5; while A < 3 A = A + 1 end", 'A'), 5.0);
}

#[test]
fn division_by_zero_follows_ieee() {
    assert_eq!(value("1/0"), f64::INFINITY);
    assert_eq!(value("-1/0"), f64::NEG_INFINITY);
    assert!(value("0/0").is_nan());
    assert!(value("5 % 0").is_nan());
}

#[test]
fn modulo_keeps_sign_of_dividend() {
    assert_eq!(value("7 % 3"), 1.0);
    assert_eq!(value("-7 % 3"), -1.0);
    assert_eq!(value("7.5 % 2"), 1.5);
}

#[test]
fn upper_case_keywords_are_identifiers() {
    // `IF` is a plain identifier, so this parses as an assignment to `IF`
    // and fails at runtime because the name is not a single letter.
    assert!(matches!(assert_failure("IF = 1"),
                     Error::Runtime(RuntimeError::NameError { .. })));
    assert!(matches!(assert_failure("IF B > 0 THEN C = 1 END"), Error::Parse(_)));
}

#[test]
fn invalid_variable_names_are_name_errors() {
    assert!(matches!(assert_failure("AB = 1"),
                     Error::Runtime(RuntimeError::NameError { .. })));
    assert!(matches!(assert_failure("a = 1"),
                     Error::Runtime(RuntimeError::NameError { .. })));
    assert!(matches!(assert_failure("(foo)"),
                     Error::Runtime(RuntimeError::NameError { .. })));
}

#[test]
fn strings_are_not_numbers() {
    assert!(matches!(assert_failure("A = \"text\""),
                     Error::Runtime(RuntimeError::TypeError { .. })));
    assert!(matches!(assert_failure("\"a\" + 1"),
                     Error::Runtime(RuntimeError::TypeError { .. })));
}

#[test]
fn runtime_errors_keep_earlier_assignments() {
    let mut store = Store::new();
    assert!(interpret("A = 1; B = \"x\"; C = 3", &mut store).is_err());
    assert_eq!(store.value_of('A'), Some(1.0));
    assert_eq!(store.value_of('C'), None);
}

#[test]
fn malformed_input_is_rejected_before_evaluation() {
    let mut store = Store::new();
    assert!(matches!(interpret("A = 1; B = 2 !", &mut store), Err(Error::Lex(_))));
    assert!(store.is_empty());

    assert!(matches!(interpret("A = 1; if A > 0 B = 2", &mut store),
                     Err(Error::Parse(_))));
    assert!(store.is_empty());
}

#[test]
fn stores_are_isolated_between_runs() {
    let mut first = Store::new();
    let mut second = Store::new();
    interpret("A = 1", &mut first).unwrap();
    interpret("B = 2", &mut second).unwrap();

    assert_eq!(first.value_of('B'), None);
    assert_eq!(second.value_of('A'), None);

    interpret("A = A + 10", &mut first).unwrap();
    assert_eq!(first.value_of('A'), Some(11.0));
}

#[test]
fn error_lines_point_at_the_offending_statement() {
    let err = assert_failure("A = 1\nB = 2\nCD = 3");
    assert_eq!(err.line(), 3);
    assert_eq!(err.to_string(),
               "Error on line 3: Invalid variable name 'CD', expected a single letter A-Z.");
}

#[test]
fn string_errors_point_at_the_opening_line() {
    let err = assert_failure("A = 1\nB = \"two\nlines\"");
    assert_eq!(err.line(), 2);
}

#[test]
fn statements_in_numeric_position_do_not_run() {
    let assign = Node::Assign { name:  "A".to_string(),
                                value: Box::new(Node::Literal { value: LiteralValue::Number(1.0),
                                                                line:  1, }),
                                line:  1, };
    let sum = Node::BinaryOp { left:  Box::new(Node::Literal { value: LiteralValue::Number(1.0),
                                                               line:  1, }),
                               op:    BinaryOperator::Add,
                               right: Box::new(assign),
                               line:  1, };

    let mut store = Store::new();
    assert!(matches!(evaluate(&sum, &mut store),
                     Err(RuntimeError::TypeError { line: 1, .. })));
    assert!(store.is_empty());

    let noop = Node::UnaryOp { op:      UnaryOperator::Negate,
                               operand: Box::new(Node::NoOp),
                               line:    3, };
    assert!(matches!(evaluate(&noop, &mut store),
                     Err(RuntimeError::TypeError { line: 0, .. })));
}
