use crate::error::InterpreterError;
use crate::polynomial::roots::{
  RootFinder, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE,
};

pub const DEFAULT_PRECISION: usize = 3;

/// Numeric settings shared by every command of a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
  /// Convergence threshold for root refinement
  pub tolerance: f64,
  /// Newton iteration cap per root
  pub max_iterations: usize,
  /// Decimal places used when printing zeroes
  pub precision: usize,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      tolerance: DEFAULT_TOLERANCE,
      max_iterations: DEFAULT_MAX_ITERATIONS,
      precision: DEFAULT_PRECISION,
    }
  }
}

impl Config {
  pub fn validate(&self) -> Result<(), InterpreterError> {
    if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
      return Err(InterpreterError::InvalidConfig(format!(
        "tolerance must be a positive number, got {}",
        self.tolerance
      )));
    }
    if self.max_iterations == 0 {
      return Err(InterpreterError::InvalidConfig(
        "max iterations must be at least 1".into(),
      ));
    }
    Ok(())
  }

  pub fn root_finder(&self) -> RootFinder {
    RootFinder::new(self.tolerance).with_max_iterations(self.max_iterations)
  }
}
