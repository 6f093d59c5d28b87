use super::*;

#[test]
fn derive_polynomial() {
  assert_eq!(
    session(&["f(x) = 3x^2 + 4", "derive f(x)"]).unwrap(),
    "f'(x) = 6x"
  );
}

#[test]
fn derive_drops_constant() {
  assert_eq!(
    session(&["f(x) = x^3 - 2x + 7", "DERIVE f(x)"]).unwrap(),
    "f'(x) = 3x^2 - 2"
  );
}

#[test]
fn derive_constant() {
  assert_eq!(session(&["c(x) = 5", "derive c(x)"]).unwrap(), "c'(x) = 0");
}

#[test]
fn derive_does_not_modify_stored_function() {
  assert_eq!(
    session(&["f(x) = x^2", "derive f(x)", "f(x)"]).unwrap(),
    "f(x) = x^2"
  );
}

#[test]
fn derive_unknown_function() {
  assert_eq!(
    interpret("derive h(x)"),
    Err(InterpreterError::UnknownFunction("h".into()))
  );
}
