#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

/// Settings of a single parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(default))]
pub struct ParseOptions {
  /// Maximum nesting depth of syntax nodes.
  pub recursion_limit: usize,

  /// Report input left over after a statement, expression, query or
  /// literal.
  pub require_eof: bool,
}

impl Default for ParseOptions {
  fn default() -> Self {
    ParseOptions {
      recursion_limit: 256,
      require_eof: false,
    }
  }
}

impl ParseOptions {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn recursion_limit(mut self, limit: usize) -> Self {
    self.recursion_limit = limit;
    self
  }

  pub fn require_eof(mut self, require_eof: bool) -> Self {
    self.require_eof = require_eof;
    self
  }

  pub(crate) fn to_config(&self) -> apex_parse::Config {
    apex_parse::Config {
      recursion_limit: self.recursion_limit.min(u32::MAX as usize) as u32,
      require_eof: self.require_eof,
    }
  }
}
