pub mod config;
pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod parser;
pub mod polynomial;
pub mod syntax;

pub use config::Config;
pub use error::{ConvergenceError, InterpreterError, RootError, SyntaxError};
pub use evaluator::{Functions, Interpreter};
pub use parser::parse;
pub use polynomial::{Polynomial, RootFinder};
pub use syntax::{Action, Command};

/// Outcome of one statement in a batch run.
#[derive(Debug, Clone, PartialEq)]
pub struct StatementResult {
  pub input: String,
  pub output: Result<String, InterpreterError>,
}

/// Evaluates statements in order against a fresh session. Blank lines and
/// lines starting with `#` are skipped.
pub fn interpret_all<'a, I>(
  config: Config,
  statements: I,
) -> Result<Vec<StatementResult>, InterpreterError>
where
  I: IntoIterator<Item = &'a str>,
{
  let mut interpreter = Interpreter::new(config)?;
  Ok(
    statements
      .into_iter()
      .map(str::trim)
      .filter(|line| !line.is_empty() && !line.starts_with('#'))
      .map(|line| StatementResult {
        input: line.to_string(),
        output: interpreter.evaluate(line),
      })
      .collect(),
  )
}

/// Evaluates a single statement in a fresh session.
pub fn interpret(input: &str) -> Result<String, InterpreterError> {
  Interpreter::default().evaluate(input)
}
