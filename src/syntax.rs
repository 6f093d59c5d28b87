use crate::polynomial::Polynomial;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
  Illegal,
  Eof,
  Whitespace,

  Plus,       // +
  Minus,      // -
  Caret,      // ^
  Equals,     // =
  Var,        // x
  OpenParen,  // (
  CloseParen, // )

  Name, // function name, like 'f'

  Integer,
  Float,

  // Keywords
  Store,
  Load,
  Derive,
  Zeroes,
}

impl TokenKind {
  /// Keyword lookup for a run of letters, ignoring case.
  pub fn from_word(word: &str) -> TokenKind {
    const WORDS: [(&str, TokenKind); 5] = [
      ("x", TokenKind::Var),
      ("STORE", TokenKind::Store),
      ("LOAD", TokenKind::Load),
      ("DERIVE", TokenKind::Derive),
      ("ZEROES", TokenKind::Zeroes),
    ];
    WORDS
      .iter()
      .find(|(w, _)| w.eq_ignore_ascii_case(word))
      .map(|(_, kind)| *kind)
      .unwrap_or(TokenKind::Name)
  }
}

/// A lexical token borrowing its literal text from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
  pub kind: TokenKind,
  pub literal: &'a str,
}

impl<'a> Token<'a> {
  pub fn new(kind: TokenKind, literal: &'a str) -> Self {
    Token { kind, literal }
  }

  pub fn eof() -> Self {
    Token::new(TokenKind::Eof, "")
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
  Store,
  Load,
  Derive,
  Zeroes,
}

/// A parsed statement: what to do, with which function, and for `store`
/// the polynomial to bind.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
  pub action: Action,
  pub name: String,
  pub function: Option<Polynomial>,
}
