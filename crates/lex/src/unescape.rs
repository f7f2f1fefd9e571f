//! Utilities for validating string literals and turning them into
//! values they represent.

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum EscapeError {
  EscapeSequenceUnterminated,
  InvalidHexEscapeSequence,
  InvalidUnicodeCodePoint,
  InvalidEscapeSequence,
}

pub trait Unescape<'a> {
  fn next_part(&mut self, s: &'a str) -> Option<(&'a str, Part<'a>)>;
}

pub enum Unescaped<'a, T: Unescape<'a>> {
  Original(&'a str),
  Parts(Parts<'a, T>),
}

pub struct Parts<'a, T: Unescape<'a>> {
  rest: &'a str,
  state: T,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Part<'a> {
  Str(&'a str),
  Chr(char),
  Err(EscapeError),
}

impl<'a, T: Unescape<'a>> Iterator for Parts<'a, T> {
  type Item = Part<'a>;

  fn next(&mut self) -> Option<Self::Item> {
    if let Some((rest, part)) = self.state.next_part(self.rest) {
      self.rest = rest;
      Some(part)
    } else {
      None
    }
  }
}

/// Takes a contents of a string literal (without quotes) and produces a
/// sequence of escaped characters or errors.
pub fn unescape_str<'a>(literal_text: &'a str) -> Unescaped<'a, Normal> {
  match State::from_str(literal_text) {
    State::End => Unescaped::Original(literal_text),
    state => Unescaped::Parts(Parts {
      rest: literal_text,
      state: Normal { state },
    }),
  }
}

pub struct Normal {
  state: State,
}

enum State {
  Text(usize),
  Escaped,
  End,
}

impl State {
  fn from_str(s: &str) -> Self {
    match s.find('\\') {
      None => State::End,
      Some(0) => State::Escaped,
      Some(i) => State::Text(i),
    }
  }
}

fn escaped_unicode_seq(s: &str) -> Part<'_> {
  // callers guarantee 4 bytes, but not that they are hex digits
  debug_assert_eq!(s.len(), 4);

  let hex_num = match u32::from_str_radix(s, 16) {
    Ok(n) => n,
    Err(_) => {
      return Part::Err(EscapeError::InvalidHexEscapeSequence);
    }
  };

  match core::char::from_u32(hex_num) {
    Some(c) => Part::Chr(c),
    None => Part::Err(EscapeError::InvalidUnicodeCodePoint),
  }
}

impl<'a> Unescape<'a> for Normal {
  fn next_part(&mut self, s: &'a str) -> Option<(&'a str, Part<'a>)> {
    if s.is_empty() {
      return None;
    }

    match self.state {
      State::End => Some(("", Part::Str(s))),

      State::Text(i) => {
        debug_assert_ne!(s.as_bytes()[0], b'\\');

        let (text, rest) = s.split_at(i);
        self.state = State::Escaped;
        Some((rest, Part::Str(text)))
      }

      State::Escaped => {
        debug_assert_eq!(s.as_bytes()[0], b'\\');

        let escaped = match s[1..].chars().next() {
          None => {
            self.state = State::End;
            return Some(("", Part::Err(EscapeError::EscapeSequenceUnterminated)));
          }
          Some(c) => c,
        };

        let mut escaped_len = escaped.len_utf8();
        let part = match escaped {
          '"' => Part::Chr('"'),
          '\'' => Part::Chr('\''),
          '\\' => Part::Chr('\\'),
          'b' => Part::Chr('\x08'),
          'f' => Part::Chr('\x0c'),
          'n' => Part::Chr('\n'),
          'r' => Part::Chr('\r'),
          't' => Part::Chr('\t'),
          'u' => {
            if s.len() < 6 || !s.is_char_boundary(6) {
              escaped_len = s.len() - 1;
              Part::Err(EscapeError::EscapeSequenceUnterminated)
            } else {
              escaped_len = 5;
              escaped_unicode_seq(&s[2..6])
            }
          }

          _ => Part::Err(EscapeError::InvalidEscapeSequence),
        };

        let rest = &s[escaped_len + 1..];
        self.state = State::from_str(rest);
        Some((rest, part))
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use alloc::{string::String, vec::Vec};
  use test_case::test_case;

  fn unescape(text: &str) -> Result<String, Vec<EscapeError>> {
    let parts = match unescape_str(text) {
      Unescaped::Original(s) => return Ok(s.into()),
      Unescaped::Parts(p) => p,
    };

    let mut buf = String::new();
    let mut errors = Vec::new();
    for part in parts {
      match part {
        Part::Str(s) => buf.push_str(s),
        Part::Chr(c) => buf.push(c),
        Part::Err(e) => errors.push(e),
      }
    }

    if errors.is_empty() {
      Ok(buf)
    } else {
      Err(errors)
    }
  }

  #[test]
  fn original_is_borrowed() {
    assert!(matches!(unescape_str("plain"), Unescaped::Original("plain")));
  }

  #[test_case("a\\nb", "a\nb" ; "newline")]
  #[test_case("\\'quoted\\'", "'quoted'" ; "quotes")]
  #[test_case("tab\\there", "tab\there" ; "tab")]
  #[test_case("\\\\", "\\" ; "backslash")]
  #[test_case("caf\\u00e9", "café" ; "unicode")]
  #[test_case("\\b\\f\\r", "\x08\x0c\r" ; "controls")]
  fn valid(text: &str, expected: &str) {
    pretty_assertions::assert_eq!(unescape(text), Ok(expected.into()));
  }

  #[test_case("\\q", EscapeError::InvalidEscapeSequence ; "unknown")]
  #[test_case("\\u12", EscapeError::EscapeSequenceUnterminated ; "short_unicode")]
  #[test_case("\\uzzzz", EscapeError::InvalidHexEscapeSequence ; "bad_hex")]
  #[test_case("\\ud800", EscapeError::InvalidUnicodeCodePoint ; "surrogate")]
  #[test_case("abc\\", EscapeError::EscapeSequenceUnterminated ; "trailing")]
  fn invalid(text: &str, expected: EscapeError) {
    pretty_assertions::assert_eq!(unescape(text), Err(vec![expected]));
  }
}
