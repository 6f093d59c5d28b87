use tracing::{debug, trace, warn};

use super::Polynomial;
use crate::error::{ConvergenceError, RootError};

pub const DEFAULT_TOLERANCE: f64 = 0.0001;
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// Highest degree `zeroes` accepts. Past this the derivative chain
/// multiplies coefficients by up to `degree!`, which leaves f64 range.
pub const MAX_DEGREE: u32 = 128;

/// Newton steps spent sharpening an extremum before its sign is read.
const POLISH_STEPS: usize = 64;

/// Finds the real roots of a polynomial.
///
/// Degrees 1 and 2 are solved in closed form. Higher degrees are split into
/// monotonic intervals at the extrema (the roots of the derivative, found
/// recursively), and every interval whose ends differ in sign is refined
/// with Newton's method, falling back to bisection whenever a step would
/// leave the interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootFinder {
  pub tolerance: f64,
  pub max_iterations: usize,
}

impl Default for RootFinder {
  fn default() -> Self {
    RootFinder::new(DEFAULT_TOLERANCE)
  }
}

/// One end of a monotonic interval: its x-coordinate (`None` for ±∞) and
/// the sign of the polynomial there.
#[derive(Debug, Clone, Copy)]
struct Endpoint {
  x: Option<f64>,
  sign: i8,
}

fn sign_of(value: f64) -> i8 {
  if value > 0.0 {
    1
  } else if value < 0.0 {
    -1
  } else {
    0
  }
}

/// Whether `p(x)` is indistinguishable from zero given the rounding error of
/// evaluating it.
fn vanishes(p: &Polynomial, x: f64) -> bool {
  let bound =
    32.0 * f64::EPSILON * f64::from(p.degree().max(1)) * p.magnitude_at(x);
  p.evaluate(x).abs() <= bound
}

/// A widened Cauchy bound. For `|x| >= r` the leading term is more than
/// twice the sum of the others, so the sign there is that of the leading
/// term and every real root lies strictly inside `(-r, r)`.
fn root_bound(p: &Polynomial) -> f64 {
  let degree = p.degree();
  let lead = p.leading_coefficient().abs();
  let ratio = p
    .terms()
    .filter(|(e, _)| *e < degree)
    .map(|(_, c)| c.abs() / lead)
    .fold(0.0, f64::max);
  1.0 + 2.0 * ratio
}

impl RootFinder {
  pub fn new(tolerance: f64) -> Self {
    RootFinder {
      tolerance,
      max_iterations: DEFAULT_MAX_ITERATIONS,
    }
  }

  pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
    self.max_iterations = max_iterations;
    self
  }

  /// Returns the real roots of `p` in ascending order without duplicates.
  /// The zero polynomial and non-zero constants have no roots.
  pub fn zeroes(&self, p: &Polynomial) -> Result<Vec<f64>, RootError> {
    let degree = p.degree();
    if degree > MAX_DEGREE {
      return Err(RootError::DegreeTooHigh {
        degree,
        max: MAX_DEGREE,
      });
    }
    Ok(self.solve(p)?)
  }

  fn solve(&self, p: &Polynomial) -> Result<Vec<f64>, ConvergenceError> {
    let mut roots = match p.degree() {
      0 => Vec::new(),
      1 => vec![linear_root(p)],
      2 => quadratic_roots(p),
      _ => self.isolate(p)?,
    };
    roots.sort_by(f64::total_cmp);
    roots.dedup();
    Ok(roots.into_iter().map(without_negative_zero).collect())
  }

  fn isolate(&self, p: &Polynomial) -> Result<Vec<f64>, ConvergenceError> {
    let derivative = p.derive();
    let curvature = derivative.derive();
    let extrema = self.solve(&derivative)?;

    let degree = p.degree();
    // Limits at -∞ and +∞
    let postsign = if p.leading_coefficient() > 0.0 { 1 } else { -1 };
    let presign = if degree % 2 == 0 { postsign } else { -postsign };
    debug!(degree, ?extrema, presign, postsign, "isolating zeroes");

    let mut roots = Vec::new();
    let mut endpoints = Vec::with_capacity(extrema.len() + 2);
    endpoints.push(Endpoint {
      x: None,
      sign: presign,
    });
    for &extremum in &extrema {
      let x = self.polish(&derivative, &curvature, extremum);
      let sign = if vanishes(p, x) {
        // the polynomial touches zero at a critical point
        roots.push(x);
        0
      } else {
        sign_of(p.evaluate(x))
      };
      endpoints.push(Endpoint { x: Some(x), sign });
    }
    endpoints.push(Endpoint {
      x: None,
      sign: postsign,
    });

    for pair in endpoints.windows(2) {
      let (left, right) = (pair[0], pair[1]);
      if left.sign == 0 || right.sign == 0 || left.sign == right.sign {
        continue;
      }
      debug!(left = ?left.x, right = ?right.x, "sign change");
      roots.push(self.refine(p, &derivative, left, right)?);
    }

    Ok(roots)
  }

  /// Sharpens a root of `derivative` with Newton steps until they stop
  /// shrinking. Moves of a tolerance or more are discarded.
  fn polish(
    &self,
    derivative: &Polynomial,
    curvature: &Polynomial,
    extremum: f64,
  ) -> f64 {
    let mut x = extremum;
    let mut last_step = f64::INFINITY;
    for _ in 0..POLISH_STEPS {
      let step = derivative.evaluate(x) / curvature.evaluate(x);
      if !step.is_finite() || step.abs() >= last_step {
        break;
      }
      x -= step;
      last_step = step.abs();
    }
    if (x - extremum).abs() < self.tolerance {
      x
    } else {
      extremum
    }
  }

  /// Finds the single root inside an interval whose endpoint signs differ.
  fn refine(
    &self,
    p: &Polynomial,
    derivative: &Polynomial,
    left: Endpoint,
    right: Endpoint,
  ) -> Result<f64, ConvergenceError> {
    let bound = root_bound(p);
    let (seed, lo, hi) = match (left.x, right.x) {
      (Some(a), Some(b)) => ((a + b) / 2.0, a, b),
      (None, Some(b)) => {
        let seed = b - 1.0;
        (seed, self.outer(p, seed.min(-bound), left.sign, seed)?, b)
      }
      (Some(a), None) => {
        let seed = a + 1.0;
        (seed, a, self.outer(p, seed.max(bound), right.sign, seed)?)
      }
      (None, None) => (
        0.0,
        self.outer(p, -bound, left.sign, 0.0)?,
        self.outer(p, bound, right.sign, 0.0)?,
      ),
    };
    self.newton(p, derivative, seed, lo, hi)
  }

  /// Checks that `x`, which lies past every root, carries the sign of the
  /// infinite end it stands in for.
  fn outer(
    &self,
    p: &Polynomial,
    x: f64,
    expected: i8,
    seed: f64,
  ) -> Result<f64, ConvergenceError> {
    if sign_of(p.evaluate(x)) == expected {
      Ok(x)
    } else {
      warn!(seed, x, "could not bracket zero");
      Err(ConvergenceError { seed })
    }
  }

  /// Newton's method on the bracket `[lo, hi]`, starting at `seed`.
  ///
  /// Stops once the value at the current point is lost in rounding error or
  /// successive points are closer than the tolerance.
  fn newton(
    &self,
    p: &Polynomial,
    derivative: &Polynomial,
    seed: f64,
    mut lo: f64,
    mut hi: f64,
  ) -> Result<f64, ConvergenceError> {
    let lo_negative = p.evaluate(lo) < 0.0;

    let mut x = seed;
    for iteration in 0..self.max_iterations {
      let fx = p.evaluate(x);
      trace!(iteration, x, fx, "newton step");
      if vanishes(p, x) {
        return Ok(x);
      }

      if (fx < 0.0) == lo_negative {
        lo = x;
      } else {
        hi = x;
      }

      let mut next = x - fx / derivative.evaluate(x);
      if !next.is_finite() || next <= lo || next >= hi {
        next = (lo + hi) / 2.0;
      }
      if (next - x).abs() < self.tolerance {
        return Ok(next);
      }
      x = next;
    }

    warn!(
      seed,
      max_iterations = self.max_iterations,
      "newton did not converge"
    );
    Err(ConvergenceError { seed })
  }
}

/// `a·x + b = 0` ⇒ `x = -b/a`
fn linear_root(p: &Polynomial) -> f64 {
  -p.coefficient(0) / p.coefficient(1)
}

/// Quadratic formula. A repeated root is reported once.
fn quadratic_roots(p: &Polynomial) -> Vec<f64> {
  let (a, b, c) = (p.coefficient(2), p.coefficient(1), p.coefficient(0));
  let discriminant = b * b - 4.0 * a * c;
  if discriminant == 0.0 {
    vec![-b / (2.0 * a)]
  } else if discriminant > 0.0 {
    let root = discriminant.sqrt();
    vec![(-b - root) / (2.0 * a), (-b + root) / (2.0 * a)]
  } else {
    Vec::new()
  }
}

fn without_negative_zero(x: f64) -> f64 {
  if x == 0.0 {
    0.0
  } else {
    x
  }
}
