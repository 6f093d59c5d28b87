use std::collections::BTreeMap;
use std::fmt;

use crate::error::RootError;

pub mod roots;

pub use roots::RootFinder;

/// A single-variable real polynomial stored as exponent → coefficient.
///
/// Entries with a zero coefficient may be present but are treated exactly
/// like absent ones by every operation, including equality.
#[derive(Debug, Clone, Default)]
pub struct Polynomial {
  coefficients: BTreeMap<u32, f64>,
}

/// `x^exp`, with `x^0 == 1` for every x (including 0).
fn power(x: f64, exp: u32) -> f64 {
  match i32::try_from(exp) {
    Ok(e) => x.powi(e),
    Err(_) => x.powf(exp as f64),
  }
}

impl Polynomial {
  pub fn new() -> Self {
    Self::default()
  }

  /// Builds a polynomial from `(exponent, coefficient)` pairs. Repeated
  /// exponents accumulate.
  pub fn from_terms<I>(terms: I) -> Self
  where
    I: IntoIterator<Item = (u32, f64)>,
  {
    let mut p = Polynomial::new();
    for (exp, coeff) in terms {
      p.add_term(exp, coeff);
    }
    p
  }

  /// Adds `coeff` to the coefficient at `exp`.
  pub(crate) fn add_term(&mut self, exp: u32, coeff: f64) {
    *self.coefficients.entry(exp).or_insert(0.0) += coeff;
  }

  pub fn coefficient(&self, exp: u32) -> f64 {
    self.coefficients.get(&exp).copied().unwrap_or(0.0)
  }

  /// Non-zero terms in ascending exponent order.
  pub fn terms(&self) -> impl DoubleEndedIterator<Item = (u32, f64)> + '_ {
    self
      .coefficients
      .iter()
      .filter(|(_, c)| **c != 0.0)
      .map(|(e, c)| (*e, *c))
  }

  pub fn is_zero(&self) -> bool {
    self.terms().next().is_none()
  }

  /// Highest exponent with a non-zero coefficient, 0 for the zero polynomial.
  pub fn degree(&self) -> u32 {
    self.terms().next_back().map_or(0, |(e, _)| e)
  }

  pub fn leading_coefficient(&self) -> f64 {
    self.terms().next_back().map_or(0.0, |(_, c)| c)
  }

  pub fn evaluate(&self, x: f64) -> f64 {
    self.terms().map(|(e, c)| c * power(x, e)).sum()
  }

  /// Sum of the absolute values of the terms at `x`. Rounding error in
  /// `evaluate(x)` is proportional to it.
  pub(crate) fn magnitude_at(&self, x: f64) -> f64 {
    self.terms().map(|(e, c)| (c * power(x, e)).abs()).sum()
  }

  /// Returns the derivative. The constant term is dropped.
  pub fn derive(&self) -> Polynomial {
    Polynomial {
      coefficients: self
        .terms()
        .filter(|(e, _)| *e > 0)
        .map(|(e, c)| (e - 1, c * e as f64))
        .collect(),
    }
  }

  /// Sorted real roots of the derivative.
  pub fn extrema(&self, tolerance: f64) -> Result<Vec<f64>, RootError> {
    RootFinder::new(tolerance).zeroes(&self.derive())
  }

  /// Real roots using the default iteration budget.
  pub fn zeroes(&self, tolerance: f64) -> Result<Vec<f64>, RootError> {
    RootFinder::new(tolerance).zeroes(self)
  }
}

impl PartialEq for Polynomial {
  fn eq(&self, other: &Self) -> bool {
    self.terms().eq(other.terms())
  }
}

impl std::ops::Add for &Polynomial {
  type Output = Polynomial;

  fn add(self, rhs: Self) -> Polynomial {
    let mut sum = self.clone();
    for (exp, coeff) in rhs.terms() {
      sum.add_term(exp, coeff);
    }
    sum
  }
}

impl std::ops::Add for Polynomial {
  type Output = Polynomial;

  fn add(self, rhs: Self) -> Polynomial {
    &self + &rhs
  }
}

/// Writes `x`, `x^n` or nothing for the constant term.
fn write_power(f: &mut fmt::Formatter<'_>, exp: u32) -> fmt::Result {
  match exp {
    0 => Ok(()),
    1 => write!(f, "x"),
    _ => write!(f, "x^{exp}"),
  }
}

/// Renders highest exponent first, e.g. `5x^5 + 18x^3 - x^2 + 2x - 1`.
impl fmt::Display for Polynomial {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.is_zero() {
      return write!(f, "0");
    }

    for (i, (exp, coeff)) in self.terms().rev().enumerate() {
      let magnitude = coeff.abs();
      match (i, coeff < 0.0) {
        (0, true) => write!(f, "-")?,
        (0, false) => {}
        (_, true) => write!(f, " - ")?,
        (_, false) => write!(f, " + ")?,
      }
      if magnitude != 1.0 || exp == 0 {
        write!(f, "{magnitude}")?;
      }
      write_power(f, exp)?;
    }
    Ok(())
  }
}
