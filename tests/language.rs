use std::{
    fs::{self},
    thread,
};

use expect_test::{Expect, expect};
use stanza::{
    error::Error,
    interpreter::{
        environment::Environment,
        parser::core::{MAX_NESTING_DEPTH, MAX_TREE_DEPTH},
        value::core::Value,
    },
    run,
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_stanza_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = run_script(&code) {
                panic!("Stanza example {} in {:?} failed:\n{}\nError:\n{}",
                       i + 1,
                       path,
                       code,
                       e.render());
            }
        }
    }

    assert!(count > 0, "No stanza examples found in book/src");
}

fn extract_stanza_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```stanza") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

/// Runs every non-blank line in one session, stopping at the first error.
/// Returns the outcome of the last line.
fn run_script(src: &str) -> Result<Option<Value>, Error> {
    let mut env = Environment::with_builtins();
    let mut last = None;
    for line in src.lines().filter(|line| !line.trim().is_empty()) {
        last = run("<stdin>", line, &mut env)?;
    }
    Ok(last)
}

fn assert_success(src: &str, expected: &str) {
    match run_script(src) {
        Ok(Some(value)) => assert_eq!(value.to_string(), expected, "script: {src}"),
        Ok(None) => panic!("Script produced no value, expected {expected}"),
        Err(e) => panic!("Script failed:\n{}", e.render()),
    }
}

fn assert_silent(src: &str) {
    match run_script(src) {
        Ok(None) => {},
        Ok(Some(value)) => panic!("Script produced {value} but was expected to produce nothing"),
        Err(e) => panic!("Script failed:\n{}", e.render()),
    }
}

fn assert_failure(src: &str, message: &str) {
    match run_script(src) {
        Ok(_) => panic!("Script succeeded but was expected to fail"),
        Err(e) => assert!(e.to_string().contains(message),
                          "expected an error containing {message:?}, got {e}"),
    }
}

fn check_render(src: &str, expect: &Expect) {
    match run_script(src) {
        Ok(_) => panic!("Script succeeded but was expected to fail"),
        Err(e) => expect.assert_eq(&e.render()),
    }
}

#[test]
fn basic_arithmetic() {
    assert_success("10 + 2", "12");
    assert_success("10 + 2 * 3", "16");
    assert_success("(10 + 2) * 3", "36");
    assert_success("8 - 5 - 1", "2");
    assert_success("10 / 2", "5.0");
    assert_success("7 / 2", "3.5");
    assert_success("5.5 + 0.5", "6.0");
    assert_success(".5 * 4", "2.0");
    assert_success("10\t+\t10", "20");
}

#[test]
fn division_of_large_integers_rounds_like_floats() {
    assert_success("9007199254740993 / 1", "9007199254740992.0");
    assert_success("10000000000000000 / 4", "2500000000000000.0");
    assert_success("9007199254740993 * 0.5", "4503599627370496.0");
    assert_success("9007199254740993 > 1.5", "fact");
}

#[test]
fn powers() {
    assert_success("2^3", "8");
    assert_success("2 ^ 3 ^ 2", "512");
    assert_success("-2 ^ 2", "4");
    assert_success("2 ^ -1", "0.5");
    assert_success("(10 * 2)^3", "8000");
    assert_failure("0 ^ -1", "divide by zero");
    assert_failure("(-8) ^ 0.5", "not a real number");
    assert_success("1 ^ 4294967296", "1");
    assert_success("(-1) ^ 4294967297", "-1");
    assert_failure("2 ^ 4294967296", "Integer overflow");
}

#[test]
fn negative_numbers() {
    assert_success("-5 + 10", "5");
    assert_success("5 - -5", "10");
    assert_success("--3", "3");
    assert_success("+-+4", "-4");
}

#[test]
fn modulo() {
    assert_success("10 % 3", "1");
    assert_success("-7 % 3", "2");
    assert_success("7 % -3", "-2");
    assert_success("5.5 % 2", "1.5");
    assert_failure("10 % 0", "zero");
}

#[test]
fn division_by_zero() {
    assert_failure("10 / 0", "Attempt to divide by zero");
    assert_failure("10 / 0.0", "Attempt to divide by zero");
    assert_failure("let z = 0\n1 / z", "Attempt to divide by zero");
}

#[test]
fn integer_overflow_is_reported() {
    assert_failure("9223372036854775807 + 1", "Integer overflow");
    assert_failure("3037000500 * 3037000500", "Integer overflow");
    assert_failure("2 ^ 63", "Integer overflow");
    assert_failure("99999999999999999999", "is too large");
}

#[test]
fn comparisons() {
    assert_success("10 > 5", "fact");
    assert_success("10 == 11", "cap");
    assert_success("10 >= 10", "fact");
    assert_success("5 <= 2", "cap");
    assert_success("1 != 2", "fact");
    assert_success("1 == 1.0", "fact");
    assert_success("1 + 1 == 2", "fact");
}

#[test]
fn logical_not() {
    assert_success("NOT (10 == 11)", "fact");
    assert_success("NOT (5 == 5)", "cap");
    assert_success("NOT NOT fact", "fact");
    assert_success("NOT 3", "3");
}

#[test]
fn type_mismatches() {
    assert_success("10 == (5 == 5)", "cap");
    assert_success("10 != (5 == 5)", "fact");
    assert_failure("10 > (5 == 5)", "Expected a number");
    assert_failure("fact + 1", "Expected a number");
    assert_failure("-cap", "Expected a number");
}

#[test]
fn variables() {
    assert_success("let a = 50\na", "50");
    assert_success("let a = 50\na + 10", "60");
    assert_success("let b = 10\nb = 20\nb", "20");
    assert_success("let z = 0\nz", "0");
    assert_success("let big_value = 3\nbig_value * big_value", "9");
    assert_silent("let a = 1");
    assert_silent("let a = 1\na = 2");
}

#[test]
fn declarations_do_not_chain() {
    assert_failure("let a = let b = 2", "Expression does not produce a value");
}

#[test]
fn variable_errors() {
    assert_failure("z = 100", "Variable z not defined");
    assert_failure("let a = 10\nlet a = 20", "Variable a already assigned");
    assert_failure("undefined_name", "undefined_name not defined");
    assert_failure("let null = 1", "Variable null already assigned");
    assert_failure("1 + (let q = 2)", "Expression does not produce a value");
}

#[test]
fn builtins() {
    assert_success("null", "0");
    assert_success("fact", "fact");
    assert_success("cap", "cap");
    assert_success("fact == (1 < 2)", "fact");
}

#[test]
fn conditionals() {
    assert_success("IF 1 > 2 THEN 10 ELSE 20", "20");
    assert_success("IF 1 < 2 THEN 10 ELSE 20", "10");
    assert_success("let x = 5\nIF x == 1 THEN 1 ELIF x == 5 THEN 5 ELSE 0", "5");
    assert_success("IF cap THEN 1 ELIF null THEN 2 ELSE 3", "3");
    assert_silent("IF 0 THEN 1");
    assert_failure("IF 1 THEN", "Expected 'let'");
    assert_failure("IF 1 2", "Expected 'THEN'");
}

#[test]
fn for_loops() {
    assert_success("FOR i IN 0 TO 5 DO i", "4");
    assert_success("FOR i IN 0 TO 10 STEP 3 DO i", "9");
    assert_success("FOR i IN 3 TO 0 STEP -1 DO i * 2", "2");
    assert_success("let sum = 0\nFOR i IN 1 TO 11 DO sum = sum + i\nsum", "55");
    assert_success("let p = 1\nFOR i IN 1 TO 6 DO p = p * i\np", "120");
    assert_silent("FOR i IN 0 TO 0 DO i");
    assert_failure("FOR i IN 0 TO 3 STEP 0 DO i", "Loop step must not be zero");
    assert_failure("let i = 0\nFOR i IN 0 TO 3 DO i", "Variable i already assigned");
    assert_failure("FOR 1 IN 0 TO 3 DO 1", "Expected identifier");
    assert_failure("FOR i 0 TO 3 DO i", "Expected 'IN'");
}

#[test]
fn while_loops() {
    assert_success("let n = 0\nWHILE n < 10 DO n = n + 1\nn", "10");
    assert_success("let n = 1\nWHILE n < 100 DO n = n * 2\nn", "128");
    assert_silent("WHILE cap DO 1");
    assert_failure("WHILE 1 < 2 1", "Expected 'DO'");
}

#[test]
fn lexer_errors() {
    assert_failure("10 $ 5", "Illegal character '$'");
    assert_failure("10 ! 5", "Expected '='");
    assert_failure("a # b", "Illegal character '#'");
}

#[test]
fn parser_errors() {
    assert_failure("let = 5", "Expected identifier");
    assert_failure("let a 5", "Expected '='");
    assert_failure("1 + 1 5", "Expected operator or end of input");
    assert_failure("10 + *", "Expected int or float");
    assert_failure("(10 + 2", "Expected ')'");
    assert_failure("*", "Expected 'let', int, float, identifier, '+', '-', '(' or 'NOT'");
}

#[test]
fn deep_nesting_is_a_syntax_error() {
    let deep = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
    assert_failure(&deep, "nested too deeply");

    let ifs = format!("{}1{}", "(IF 1 THEN ".repeat(60), ")".repeat(60));
    assert_failure(&ifs, "nested too deeply");
}

#[test]
fn long_chains_exceed_the_tree_height() {
    let sum = vec!["1"; MAX_TREE_DEPTH + 1].join(" + ");
    assert_failure(&sum, "Expression too complex (syntax tree deeper than 256 levels)");

    let chain = format!("{}1", "-".repeat(100_000));
    assert_failure(&chain, "too complex");

    let powers = vec!["2"; 10_000].join(" ^ ");
    assert_failure(&powers, "too complex");
}

#[test]
fn moderate_nesting_is_fine() {
    let nested = format!("{}1{}", "(".repeat(50), ")".repeat(50));
    assert_success(&nested, "1");
}

/// Runs `src` on a thread with the default 2 MiB stack and returns the
/// displayed value or the error message.
fn run_on_small_stack(src: String) -> Result<Option<String>, String> {
    thread::Builder::new().stack_size(2 << 20)
                          .spawn(move || {
                              run_script(&src).map(|value| value.map(|v| v.to_string()))
                                              .map_err(|e| e.to_string())
                          })
                          .unwrap()
                          .join()
                          .unwrap()
}

#[test]
fn deepest_accepted_nesting_runs_on_a_small_stack() {
    // The whole line is one level, so each construct gets one less.
    let levels = MAX_NESTING_DEPTH - 1;

    let parens = format!("{}1{}", "(".repeat(levels), ")".repeat(levels));
    assert_eq!(run_on_small_stack(parens), Ok(Some("1".to_string())));

    let ifs = format!("{}1{}", "(IF 1 THEN ".repeat(levels / 2), ")".repeat(levels / 2));
    assert_eq!(run_on_small_stack(ifs), Ok(Some("1".to_string())));

    let fors: String = (1..=levels).map(|i| format!("FOR {} IN 0 TO 1 DO ", "i".repeat(i)))
                                   .collect();
    assert_eq!(run_on_small_stack(format!("{fors}1")), Ok(Some("1".to_string())));

    let whiles = "WHILE n < 1 DO ".repeat(levels - 1);
    assert_eq!(run_on_small_stack(format!("let n = 0\n{whiles}n = n + 1\nn")),
               Ok(Some("1".to_string())));

    let lets: String = (1..=levels).map(|i| format!("let {} = ", "a".repeat(i))).collect();
    assert_eq!(run_on_small_stack(format!("{lets}1")),
               Err("Expression does not produce a value".to_string()));

    let sum = vec!["1"; MAX_TREE_DEPTH].join(" + ");
    assert_eq!(run_on_small_stack(sum), Ok(Some(MAX_TREE_DEPTH.to_string())));
}

#[test]
fn same_text_gives_the_same_result_in_fresh_environments() {
    for src in ["let a = 5\na ^ 2 / 3",
                "let b = 1\nFOR i IN 0 TO 3 DO b = b * 2",
                "let c = 1\nc + (5 == 5)",
                "1 +",
                "IF 1 > 2 THEN 10"]
    {
        let (first, second) = (run_script(src), run_script(src));
        assert_eq!(first, second, "script: {src}");

        let span = |result: &Result<Option<Value>, Error>| {
            result.as_ref().ok().and_then(Option::as_ref).and_then(Value::span).cloned()
        };
        assert_eq!(span(&first), span(&second), "script: {src}");
    }
}

#[test]
fn renders_illegal_character() {
    check_render("10 $ 5",
                 &expect![[r#"
                     LexError: Illegal character '$'
                     File <stdin>, line 1

                     10 $ 5
                        ^"#]]);
}

#[test]
fn renders_unclosed_paren_at_end_of_input() {
    check_render("(10 + 2",
                 &expect![[r#"
                     SyntaxError: Expected ')'
                     File <stdin>, line 1

                     (10 + 2
                            ^"#]]);
}

#[test]
fn renders_missing_identifier() {
    check_render("let = 5",
                 &expect![[r#"
                     SyntaxError: Expected identifier
                     File <stdin>, line 1

                     let = 5
                         ^"#]]);
}

#[test]
fn renders_division_by_zero_under_the_divisor() {
    check_render("let a = 10 / 0",
                 &expect![[r#"
                     RuntimeError: Attempt to divide by zero
                     File <stdin>, line 1

                     let a = 10 / 0
                                  ^"#]]);
}

#[test]
fn renders_type_error_under_the_operand() {
    check_render("10 > (5 == 5)",
                 &expect![[r#"
                     RuntimeError: Expected a number
                     File <stdin>, line 1

                     10 > (5 == 5)
                           ^^^^^^"#]]);
}

#[test]
fn renders_unknown_variable() {
    check_render("1 + missing",
                 &expect![[r#"
                     RuntimeError: missing not defined
                     File <stdin>, line 1

                     1 + missing
                         ^^^^^^^"#]]);
}
