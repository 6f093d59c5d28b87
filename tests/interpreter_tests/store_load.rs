use super::*;

#[test]
fn store_reports_name() {
  assert_eq!(
    interpret("STORE f(x) = 3x^2 + 4").unwrap(),
    "Stored function f(x)"
  );
}

#[test]
fn load_formats_highest_exponent_first() {
  assert_eq!(
    session(&["f(x) = 4 + 3x^2 - x", "load f(x)"]).unwrap(),
    "f(x) = 3x^2 - x + 4"
  );
}

#[test]
fn implicit_load() {
  assert_eq!(session(&["p(x) = x^3", "p(x)"]).unwrap(), "p(x) = x^3");
}

#[test]
fn store_overwrites() {
  assert_eq!(
    session(&["f(x) = x", "f(x) = 2x", "f(x)"]).unwrap(),
    "f(x) = 2x"
  );
}

#[test]
fn accumulated_terms_load_as_one() {
  assert_eq!(session(&["f(x) = 2x + 3x", "f(x)"]).unwrap(), "f(x) = 5x");
}

#[test]
fn cancelled_terms_load_as_zero() {
  assert_eq!(session(&["f(x) = x - x", "f(x)"]).unwrap(), "f(x) = 0");
}

#[test]
fn names_are_case_sensitive() {
  assert_eq!(
    session(&["f(x) = 1", "F(x)"]),
    Err(InterpreterError::UnknownFunction("F".into()))
  );
}

#[test]
fn unknown_function() {
  assert_eq!(
    interpret("load g(x)").unwrap_err().to_string(),
    "g(x) does not exist"
  );
}

#[test]
fn syntax_error_is_reported() {
  assert_eq!(
    interpret("store f(x)").unwrap_err().to_string(),
    "found end of input, expected ="
  );
}

#[test]
fn session_survives_errors() {
  let mut interpreter = Interpreter::default();
  interpreter.evaluate("f(x) = x^2").unwrap();
  assert!(interpreter.evaluate("f(x) = x^").is_err());
  assert_eq!(interpreter.evaluate("f(x)").unwrap(), "f(x) = x^2");
}
