use thiserror::Error;

/// Raised by the parser when a required token is missing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("found {}, expected {}", describe_literal(.found), .expected)]
pub struct SyntaxError {
  /// Literal text of the token actually found (empty at end of input)
  pub found: String,
  /// The construct the parser was looking for
  pub expected: String,
}

impl SyntaxError {
  pub fn new(found: impl Into<String>, expected: impl Into<String>) -> Self {
    SyntaxError {
      found: found.into(),
      expected: expected.into(),
    }
  }
}

fn describe_literal(literal: &str) -> String {
  if literal.is_empty() {
    "end of input".to_string()
  } else {
    format!("{literal:?}")
  }
}

/// Raised when refinement cannot pin down the root seeded at `seed`.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("could not determine zero near {seed}")]
pub struct ConvergenceError {
  pub seed: f64,
}

/// Why a root search gave up.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum RootError {
  #[error(transparent)]
  Convergence(#[from] ConvergenceError),
  #[error("degree {degree} is above the supported maximum of {max}")]
  DegreeTooHigh { degree: u32, max: u32 },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InterpreterError {
  #[error(transparent)]
  Syntax(#[from] SyntaxError),
  #[error(transparent)]
  Root(#[from] RootError),
  #[error("{0}(x) does not exist")]
  UnknownFunction(String),
  #[error("Invalid configuration: {0}")]
  InvalidConfig(String),
}
