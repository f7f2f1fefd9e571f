//! Maps byte offsets to line and column numbers.

#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::TextSize;

/// Position of a character in the source.
///
/// `line` starts at 1, `col` starts at 0 and counts characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct LineCol {
  pub line: u32,
  pub col: u32,
}

pub(crate) struct LineIndex<'a> {
  text: &'a str,
  /// offset of the first byte of every line
  line_starts: Vec<TextSize>,
}

impl<'a> LineIndex<'a> {
  pub(crate) fn new(text: &'a str) -> Self {
    let mut line_starts = vec![TextSize::from(0)];
    for (i, b) in text.bytes().enumerate() {
      if b == b'\n' {
        line_starts.push(TextSize::from(i as u32 + 1));
      }
    }

    LineIndex { text, line_starts }
  }

  pub(crate) fn line_col(&self, offset: TextSize) -> LineCol {
    let line = match self.line_starts.binary_search(&offset) {
      Ok(line) => line,
      Err(next) => next - 1,
    };

    let start = usize::from(self.line_starts[line]);
    let end = usize::from(offset).min(self.text.len());
    let col = self.text.get(start..end).map_or(0, |it| it.chars().count());

    LineCol {
      line: line as u32 + 1,
      col: col as u32,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use test_case::test_case;

  #[test_case("abc", 0, 1, 0 ; "start")]
  #[test_case("abc", 2, 1, 2 ; "same_line")]
  #[test_case("a\nbc", 2, 2, 0 ; "after_newline")]
  #[test_case("a\r\nbc", 4, 2, 1 ; "crlf")]
  #[test_case("é\nxé y", 7, 2, 3 ; "chars_not_bytes")]
  #[test_case("ab", 2, 1, 2 ; "end_of_input")]
  fn line_col(text: &str, offset: u32, line: u32, col: u32) {
    let index = LineIndex::new(text);
    assert_eq!(index.line_col(offset.into()), LineCol { line, col });
  }
}
