use tracing::debug;

use crate::error::SyntaxError;
use crate::lexer::Scanner;
use crate::polynomial::Polynomial;
use crate::syntax::{Action, Command, Token, TokenKind};

/// Recursive-descent parser for statements of the form
/// `[KEYWORD] name(x) [= polynomial]`.
pub struct Parser<'a> {
  scanner: Scanner<'a>,
  /// Last token read, kept so it can be pushed back once.
  last: Token<'a>,
  pushed_back: Option<Token<'a>>,
}

impl<'a> Parser<'a> {
  pub fn new(input: &'a str) -> Self {
    Parser {
      scanner: Scanner::new(input),
      last: Token::eof(),
      pushed_back: None,
    }
  }

  /// Returns the next token, or the pushed back one if there is one.
  fn scan(&mut self) -> Token<'a> {
    if let Some(token) = self.pushed_back.take() {
      return token;
    }
    self.last = self.scanner.scan();
    self.last
  }

  /// Pushes the previously read token back.
  fn unscan(&mut self) {
    self.pushed_back = Some(self.last);
  }

  /// Scans the next token that is not whitespace.
  fn scan_ignore_whitespace(&mut self) -> Token<'a> {
    let token = self.scan();
    if token.kind == TokenKind::Whitespace {
      self.scan()
    } else {
      token
    }
  }

  fn expect(
    &mut self,
    kind: TokenKind,
    expected: &str,
  ) -> Result<Token<'a>, SyntaxError> {
    let token = self.scan_ignore_whitespace();
    if token.kind == kind {
      Ok(token)
    } else {
      Err(SyntaxError::new(token.literal, expected))
    }
  }

  pub fn parse(&mut self) -> Result<Command, SyntaxError> {
    let keyword = match self.scan_ignore_whitespace().kind {
      TokenKind::Store => Some(Action::Store),
      TokenKind::Load => Some(Action::Load),
      TokenKind::Derive => Some(Action::Derive),
      TokenKind::Zeroes => Some(Action::Zeroes),
      _ => {
        self.unscan();
        None
      }
    };

    let name = self.expect(TokenKind::Name, "function name")?.literal;
    self.expect(TokenKind::OpenParen, "(")?;
    self.expect(TokenKind::Var, "x")?;
    self.expect(TokenKind::CloseParen, ")")?;

    let token = self.scan_ignore_whitespace();
    let command = match (token.kind, keyword) {
      (TokenKind::Equals, None | Some(Action::Store)) => Command {
        action: Action::Store,
        name: name.to_string(),
        function: Some(self.parse_polynomial()?),
      },
      (TokenKind::Equals, Some(_)) => {
        return Err(SyntaxError::new(token.literal, "end of input"));
      }
      (TokenKind::Eof, Some(Action::Store)) => {
        return Err(SyntaxError::new(token.literal, "="));
      }
      (TokenKind::Eof, action) => Command {
        action: action.unwrap_or(Action::Load),
        name: name.to_string(),
        function: None,
      },
      _ => return Err(SyntaxError::new(token.literal, "= or end of input")),
    };

    debug!(action = ?command.action, name = %command.name, "parsed command");
    Ok(command)
  }

  fn parse_polynomial(&mut self) -> Result<Polynomial, SyntaxError> {
    let mut polynomial = Polynomial::new();

    let mut negative = false;
    let token = self.scan_ignore_whitespace();
    match token.kind {
      TokenKind::Minus => negative = true,
      TokenKind::Plus => {}
      TokenKind::Integer | TokenKind::Float | TokenKind::Var => self.unscan(),
      _ => return Err(SyntaxError::new(token.literal, "polynomial")),
    }

    loop {
      let (exp, coeff, literal) = self.parse_term()?;
      polynomial.add_term(exp, if negative { -coeff } else { coeff });
      if !polynomial.coefficient(exp).is_finite() {
        return Err(SyntaxError::new(literal, "number"));
      }

      let token = self.scan_ignore_whitespace();
      match token.kind {
        TokenKind::Plus => negative = false,
        TokenKind::Minus => negative = true,
        TokenKind::Eof => break,
        _ => {
          return Err(SyntaxError::new(token.literal, "+, - or end of input"));
        }
      }
    }

    Ok(polynomial)
  }

  /// Parses `(number | x) [x [^ integer]]` into its exponent, coefficient
  /// and the literal the coefficient came from.
  fn parse_term(&mut self) -> Result<(u32, f64, &'a str), SyntaxError> {
    let token = self.scan_ignore_whitespace();
    let coeff = match token.kind {
      TokenKind::Integer | TokenKind::Float => token
        .literal
        .parse::<f64>()
        .ok()
        .filter(|c| c.is_finite())
        .ok_or_else(|| SyntaxError::new(token.literal, "number"))?,
      TokenKind::Var => {
        self.unscan();
        1.0
      }
      _ => return Err(SyntaxError::new(token.literal, "polynomial term")),
    };

    if self.scan_ignore_whitespace().kind != TokenKind::Var {
      self.unscan();
      return Ok((0, coeff, token.literal));
    }

    if self.scan_ignore_whitespace().kind != TokenKind::Caret {
      self.unscan();
      return Ok((1, coeff, token.literal));
    }

    let exponent = self.expect(TokenKind::Integer, "integer")?;
    let exp = exponent
      .literal
      .parse::<u32>()
      .map_err(|_| SyntaxError::new(exponent.literal, "integer exponent"))?;
    Ok((exp, coeff, token.literal))
  }
}

/// Parses a single statement.
pub fn parse(input: &str) -> Result<Command, SyntaxError> {
  Parser::new(input).parse()
}
