//! Callbacks notified of every error a parse found.

use crate::SyntaxError;

/// Receives the errors of each finished parse before the parse call returns:
/// lexical errors first, then syntax errors, each group in source order.
pub trait ErrorListener {
  fn lexical_error(&mut self, error: &SyntaxError);

  fn syntax_error(&mut self, error: &SyntaxError);
}

impl ErrorListener for () {
  fn lexical_error(&mut self, _error: &SyntaxError) {}

  fn syntax_error(&mut self, _error: &SyntaxError) {}
}

impl ErrorListener for Vec<SyntaxError> {
  fn lexical_error(&mut self, error: &SyntaxError) {
    self.push(error.clone());
  }

  fn syntax_error(&mut self, error: &SyntaxError) {
    self.push(error.clone());
  }
}

/// Counts and keeps every error it is notified of. Nothing is deduplicated.
#[derive(Debug, Default, Clone)]
pub struct SyntaxErrorCounter {
  errors: Vec<SyntaxError>,
}

impl SyntaxErrorCounter {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn errors(&self) -> &[SyntaxError] {
    &self.errors
  }

  pub fn error_count(&self) -> usize {
    self.errors.len()
  }

  pub fn into_errors(self) -> Vec<SyntaxError> {
    self.errors
  }
}

impl ErrorListener for SyntaxErrorCounter {
  fn lexical_error(&mut self, error: &SyntaxError) {
    self.errors.push(error.clone());
  }

  fn syntax_error(&mut self, error: &SyntaxError) {
    self.errors.push(error.clone());
  }
}
