use polycalc::{interpret, Config, Interpreter, InterpreterError, RootError};

/// Runs statements in one session and returns the last result.
fn session(statements: &[&str]) -> Result<String, InterpreterError> {
  session_with(Config::default(), statements)
}

fn session_with(
  config: Config,
  statements: &[&str],
) -> Result<String, InterpreterError> {
  let mut interpreter = Interpreter::new(config).unwrap();
  let (last, setup) = statements.split_last().unwrap();
  for statement in setup {
    interpreter.evaluate(statement).unwrap();
  }
  interpreter.evaluate(last)
}

mod interpreter_tests {
  use super::*;

  mod batch;
  mod derive;
  mod store_load;
  mod zeroes;
}
