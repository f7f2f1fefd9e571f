use core::fmt;

use itertools::Itertools;
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{LineCol, TextRange};

/// Where an error was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub enum SyntaxErrorKind {
  /// Malformed token (unterminated string, stray character, ...).
  Lexical,
  /// Well formed tokens in an unexpected order.
  Syntax,
}

/// A recoverable error found while tokenizing or parsing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct SyntaxError {
  kind: SyntaxErrorKind,
  message: String,
  range: TextRange,
  position: LineCol,
  token: Option<String>,
}

impl SyntaxError {
  pub(crate) fn new(
    kind: SyntaxErrorKind,
    message: impl Into<String>,
    range: TextRange,
    position: LineCol,
    token: Option<String>,
  ) -> Self {
    Self {
      kind,
      message: message.into(),
      range,
      position,
      token,
    }
  }

  pub fn kind(&self) -> SyntaxErrorKind {
    self.kind
  }

  pub fn message(&self) -> &str {
    &self.message
  }

  pub fn range(&self) -> TextRange {
    self.range
  }

  /// Line (1-based) and column (0-based, in characters) of the start of
  /// [`range`](SyntaxError::range).
  pub fn position(&self) -> LineCol {
    self.position
  }

  pub fn line(&self) -> u32 {
    self.position.line
  }

  pub fn column(&self) -> u32 {
    self.position.col
  }

  /// Text of the offending token, `None` at end of input.
  pub fn token(&self) -> Option<&str> {
    self.token.as_deref()
  }
}

impl fmt::Display for SyntaxError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}:{}: {}", self.position.line, self.position.col, self.message)?;
    if let Some(token) = &self.token {
      write!(f, " (at '{}')", token)?;
    }

    Ok(())
  }
}

impl std::error::Error for SyntaxError {}

/// Every error of a failed parse, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} syntax error(s):\n{}", .0.len(), .0.iter().join("\n"))]
pub struct SyntaxErrors(pub Vec<SyntaxError>);

impl SyntaxErrors {
  pub fn iter(&self) -> impl Iterator<Item = &SyntaxError> {
    self.0.iter()
  }

  pub fn first(&self) -> Option<&SyntaxError> {
    self.0.first()
  }
}

/// Conditions under which no tree can be produced at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResourceError {
  #[error("nesting exceeds the recursion limit of {limit}")]
  RecursionLimit { limit: usize },

  #[error("input of {len} bytes is too large to parse")]
  InputTooLarge { len: usize },

  #[error("tokens cover {tokens} bytes but the text has {text}")]
  TokenMismatch { tokens: usize, text: usize },
}
