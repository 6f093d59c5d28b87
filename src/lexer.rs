use crate::syntax::{Token, TokenKind};

fn is_whitespace(c: char) -> bool {
  c == ' ' || c == '\t' || c == '\n' || c == '\r'
}

/// Lexical scanner over a string slice.
///
/// Characters are read one at a time; the most recently read character can be
/// pushed back with `unread`. Once the input is exhausted every call to
/// `scan` yields an `Eof` token.
pub struct Scanner<'a> {
  input: &'a str,
  pos: usize,
  last_width: usize,
}

impl<'a> Scanner<'a> {
  pub fn new(input: &'a str) -> Self {
    Scanner {
      input,
      pos: 0,
      last_width: 0,
    }
  }

  /// Reads the next character, or `None` at end of input.
  fn read(&mut self) -> Option<char> {
    let c = self.input[self.pos..].chars().next();
    self.last_width = c.map_or(0, char::len_utf8);
    self.pos += self.last_width;
    c
  }

  /// Places the previously read character back on the input.
  fn unread(&mut self) {
    self.pos -= self.last_width;
    self.last_width = 0;
  }

  /// Consumes characters while `accept` holds and returns the consumed run,
  /// starting at `start`.
  fn read_while(&mut self, start: usize, accept: fn(char) -> bool) -> &'a str {
    while let Some(c) = self.read() {
      if !accept(c) {
        self.unread();
        break;
      }
    }
    &self.input[start..self.pos]
  }

  /// Returns the next token and its literal text.
  pub fn scan(&mut self) -> Token<'a> {
    let start = self.pos;
    let c = match self.read() {
      Some(c) => c,
      None => return Token::eof(),
    };

    if is_whitespace(c) {
      let literal = self.read_while(start, is_whitespace);
      return Token::new(TokenKind::Whitespace, literal);
    }
    if c.is_ascii_alphabetic() {
      let literal = self.read_while(start, |c| c.is_ascii_alphabetic());
      return Token::new(TokenKind::from_word(literal), literal);
    }
    if c.is_ascii_digit() {
      return self.scan_number(start);
    }

    let kind = match c {
      '+' => TokenKind::Plus,
      '-' => TokenKind::Minus,
      '^' => TokenKind::Caret,
      '=' => TokenKind::Equals,
      '(' => TokenKind::OpenParen,
      ')' => TokenKind::CloseParen,
      _ => TokenKind::Illegal,
    };
    Token::new(kind, &self.input[start..self.pos])
  }

  fn scan_number(&mut self, start: usize) -> Token<'a> {
    self.read_while(start, |c| c.is_ascii_digit());

    match self.read() {
      Some('.') => {
        // "3." is still a float, just with no fraction digits
        let literal = self.read_while(start, |c| c.is_ascii_digit());
        Token::new(TokenKind::Float, literal)
      }
      Some(_) => {
        self.unread();
        Token::new(TokenKind::Integer, &self.input[start..self.pos])
      }
      None => Token::new(TokenKind::Integer, &self.input[start..self.pos]),
    }
  }
}
