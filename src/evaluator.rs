use std::collections::HashMap;

use tracing::info;

use crate::config::Config;
use crate::error::{InterpreterError, SyntaxError};
use crate::parser;
use crate::polynomial::Polynomial;
use crate::syntax::{Action, Command};

/// Named polynomials defined during a session.
#[derive(Debug, Clone, Default)]
pub struct Functions {
  table: HashMap<String, Polynomial>,
}

impl Functions {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn get(&self, name: &str) -> Option<&Polynomial> {
    self.table.get(name)
  }

  /// Binds `name`, replacing any previous definition.
  pub fn set(&mut self, name: impl Into<String>, function: Polynomial) {
    self.table.insert(name.into(), function);
  }

  pub fn len(&self) -> usize {
    self.table.len()
  }

  pub fn is_empty(&self) -> bool {
    self.table.is_empty()
  }

  /// Defined names in sorted order.
  pub fn names(&self) -> Vec<&str> {
    let mut names: Vec<&str> = self.table.keys().map(String::as_str).collect();
    names.sort_unstable();
    names
  }

  pub fn clear(&mut self) {
    self.table.clear();
  }
}

/// Parses statements and runs them against a `Functions` table.
#[derive(Debug, Clone, Default)]
pub struct Interpreter {
  pub functions: Functions,
  pub config: Config,
}

impl Interpreter {
  pub fn new(config: Config) -> Result<Self, InterpreterError> {
    config.validate()?;
    Ok(Interpreter {
      functions: Functions::new(),
      config,
    })
  }

  /// Evaluates one statement and returns the text to show the user.
  pub fn evaluate(&mut self, input: &str) -> Result<String, InterpreterError> {
    let command = parser::parse(input)?;
    self.execute(command)
  }

  pub fn execute(
    &mut self,
    command: Command,
  ) -> Result<String, InterpreterError> {
    let Command {
      action,
      name,
      function,
    } = command;

    match (action, function) {
      (Action::Store, Some(function)) => {
        info!(%name, %function, "storing function");
        self.functions.set(name.clone(), function);
        Ok(format!("Stored function {name}(x)"))
      }
      (Action::Store, None) => Err(SyntaxError::new("", "=").into()),
      (Action::Derive, _) => {
        let derivative = self.lookup(&name)?.derive();
        Ok(format!("{name}'(x) = {derivative}"))
      }
      (Action::Zeroes, _) => self.zeroes(&name),
      (Action::Load, _) => {
        let function = self.lookup(&name)?;
        Ok(format!("{name}(x) = {function}"))
      }
    }
  }

  fn lookup(&self, name: &str) -> Result<&Polynomial, InterpreterError> {
    self
      .functions
      .get(name)
      .ok_or_else(|| InterpreterError::UnknownFunction(name.to_string()))
  }

  fn zeroes(&self, name: &str) -> Result<String, InterpreterError> {
    let function = self.lookup(name)?;
    if function.is_zero() {
      return Ok(format!("{name}(x) is zero everywhere"));
    }

    let zeroes = self.config.root_finder().zeroes(function)?;
    if zeroes.is_empty() {
      return Ok(format!("{name}(x) has no real zeroes"));
    }

    let precision = self.config.precision;
    Ok(
      zeroes
        .iter()
        .map(|zero| format!("{zero:.precision$}"))
        .collect::<Vec<_>>()
        .join("\t"),
    )
  }
}
