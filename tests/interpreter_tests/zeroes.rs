use super::*;

#[test]
fn linear() {
  assert_eq!(session(&["f(x) = 2x - 3", "zeroes f(x)"]).unwrap(), "1.500");
}

#[test]
fn quadratic_two_roots() {
  assert_eq!(
    session(&["f(x) = x^2 - 1", "zeroes f(x)"]).unwrap(),
    "-1.000\t1.000"
  );
}

#[test]
fn quadratic_repeated_root() {
  assert_eq!(session(&["f(x) = x^2", "zeroes f(x)"]).unwrap(), "0.000");
}

#[test]
fn quadratic_no_real_roots() {
  assert_eq!(
    session(&["f(x) = x^2 + 1", "zeroes f(x)"]).unwrap(),
    "f(x) has no real zeroes"
  );
}

#[test]
fn quartic_real_roots_only() {
  assert_eq!(
    session(&["f(x) = x^4 - 1", "zeroes f(x)"]).unwrap(),
    "-1.000\t1.000"
  );
}

#[test]
fn cubic_three_roots() {
  assert_eq!(
    session(&["f(x) = x^3 - x", "zeroes f(x)"]).unwrap(),
    "-1.000\t0.000\t1.000"
  );
}

#[test]
fn roots_of_a_small_scale_cubic() {
  let config = Config {
    precision: 2,
    ..Config::default()
  };
  assert_eq!(
    session_with(config, &["f(x) = x^3 - 0.0001x", "zeroes f(x)"]).unwrap(),
    "-0.01\t0.00\t0.01"
  );
}

#[test]
fn roots_with_small_coefficients() {
  assert_eq!(
    session(&["f(x) = 0.0001x^3 - 0.0001x", "zeroes f(x)"]).unwrap(),
    "-1.000\t0.000\t1.000"
  );
}

#[test]
fn minimum_just_above_zero() {
  assert_eq!(
    session(&["f(x) = x^4 - 2x^2 + 1.00005", "zeroes f(x)"]).unwrap(),
    "f(x) has no real zeroes"
  );
}

#[test]
fn double_roots_at_minima() {
  assert_eq!(
    session(&["f(x) = x^4 - 2x^2 + 1", "zeroes f(x)"]).unwrap(),
    "-1.000\t1.000"
  );
}

#[test]
fn very_high_degree_is_reported() {
  let mut interpreter = Interpreter::default();
  interpreter.evaluate("f(x) = x^50000 - 1").unwrap();
  let err = interpreter.evaluate("zeroes f(x)").unwrap_err();
  assert_eq!(
    err,
    InterpreterError::Root(RootError::DegreeTooHigh {
      degree: 50000,
      max: 128,
    })
  );
  // the session keeps going
  assert_eq!(
    interpreter.evaluate("derive f(x)").unwrap(),
    "f'(x) = 50000x^49999"
  );
}

#[test]
fn constant_has_no_zeroes() {
  assert_eq!(
    session(&["f(x) = 7", "zeroes f(x)"]).unwrap(),
    "f(x) has no real zeroes"
  );
}

#[test]
fn zero_polynomial() {
  assert_eq!(
    session(&["f(x) = 0", "zeroes f(x)"]).unwrap(),
    "f(x) is zero everywhere"
  );
}

#[test]
fn precision_is_configurable() {
  let config = Config {
    precision: 1,
    ..Config::default()
  };
  assert_eq!(
    session_with(config, &["f(x) = 5x - 1", "zeroes f(x)"]).unwrap(),
    "0.2"
  );
}

#[test]
fn exhausted_budget_is_an_error_not_an_empty_set() {
  let config = Config {
    tolerance: 1e-12,
    max_iterations: 1,
    ..Config::default()
  };
  let err = session_with(config, &["f(x) = x^3 - 2x - 5", "zeroes f(x)"])
    .unwrap_err();
  assert!(matches!(
    err,
    InterpreterError::Root(RootError::Convergence(_))
  ));
  assert!(err.to_string().starts_with("could not determine zero near"));
}

#[test]
fn invalid_config_is_rejected() {
  let config = Config {
    tolerance: 0.0,
    ..Config::default()
  };
  assert!(matches!(
    Interpreter::new(config),
    Err(InterpreterError::InvalidConfig(_))
  ));
}
