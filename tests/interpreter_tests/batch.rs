use polycalc::interpret_all;

use super::*;

#[test]
fn batch_shares_one_session() {
  let results = interpret_all(
    Config::default(),
    ["f(x) = x^2 - 4", "", "# comment", "zeroes f(x)"],
  )
  .unwrap();
  assert_eq!(results.len(), 2);
  assert_eq!(results[1].input, "zeroes f(x)");
  assert_eq!(results[1].output, Ok("-2.000\t2.000".to_string()));
}

#[test]
fn batch_keeps_going_after_errors() {
  let results =
    interpret_all(Config::default(), ["g(x)", "g(x) = x", "g(x)"]).unwrap();
  assert!(results[0].output.is_err());
  assert_eq!(results[2].output, Ok("g(x) = x".to_string()));
}
