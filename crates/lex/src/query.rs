//! Scanners for the pieces of query syntax that extend a token past what the
//! raw lexer matched (dates, currencies, search terms) and for detecting the
//! start of an embedded query after `[`.

/// Checks whether the text following a `[` opens a SOQL or SOSL query,
/// skipping whitespace and comments.
pub(crate) fn opens_query(rest: &str) -> bool {
  let rest = skip_trivia(rest);
  let word_len = rest
    .bytes()
    .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
    .count();
  let word = &rest[..word_len];

  word.eq_ignore_ascii_case("select") || word.eq_ignore_ascii_case("find")
}

fn skip_trivia(mut rest: &str) -> &str {
  loop {
    let trimmed = rest.trim_start();
    if trimmed.starts_with("//") {
      rest = match trimmed.find('\n') {
        Some(i) => &trimmed[i + 1..],
        None => "",
      };
    } else if trimmed.starts_with("/*") {
      rest = match trimmed[2..].find("*/") {
        Some(i) => &trimmed[i + 4..],
        None => "",
      };
    } else {
      return trimmed;
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DateLen {
  Date(usize),
  DateTime(usize),
}

struct Cursor<'a> {
  bytes: &'a [u8],
  pos: usize,
}

impl<'a> Cursor<'a> {
  fn new(rest: &'a str) -> Self {
    Cursor {
      bytes: rest.as_bytes(),
      pos: 0,
    }
  }

  fn eat(&mut self, b: u8) -> bool {
    if self.bytes.get(self.pos) == Some(&b) {
      self.pos += 1;
      true
    } else {
      false
    }
  }

  fn eat_one_of(&mut self, set: &[u8]) -> bool {
    match self.bytes.get(self.pos) {
      Some(b) if set.contains(b) => {
        self.pos += 1;
        true
      }
      _ => false,
    }
  }

  fn digits(&mut self, n: usize) -> bool {
    let end = self.pos + n;
    if end > self.bytes.len() || !self.bytes[self.pos..end].iter().all(u8::is_ascii_digit) {
      return false;
    }

    self.pos = end;
    true
  }

  fn digits1(&mut self) -> bool {
    let start = self.pos;
    while self.bytes.get(self.pos).map_or(false, u8::is_ascii_digit) {
      self.pos += 1;
    }

    self.pos > start
  }

  fn at_word_char(&self) -> bool {
    self
      .bytes
      .get(self.pos)
      .map_or(false, |b| b.is_ascii_alphanumeric() || *b == b'_')
  }
}

/// Given the text right after a four digit year, returns how much of it
/// belongs to a date (`-MM-DD`) or datetime (`-MM-DDThh:mm:ss(.fff)?(Z|+hh:mm)`).
pub(crate) fn date_suffix(rest: &str) -> Option<DateLen> {
  let mut c = Cursor::new(rest);
  if !(c.eat(b'-') && c.digits(2) && c.eat(b'-') && c.digits(2)) {
    return None;
  }

  let date_len = c.pos;
  if !(c.eat(b'T') || c.eat(b't')) {
    return if c.at_word_char() {
      None
    } else {
      Some(DateLen::Date(date_len))
    };
  }

  if !(c.digits(2) && c.eat(b':') && c.digits(2) && c.eat(b':') && c.digits(2)) {
    return Some(DateLen::Date(date_len));
  }

  if c.eat(b'.') && !c.digits1() {
    return Some(DateLen::Date(date_len));
  }

  if !(c.eat(b'Z') || c.eat(b'z')) {
    let before_offset = c.pos;
    if c.eat_one_of(b"+-") && !(c.digits(2) && c.eat(b':') && c.digits(2)) {
      c.pos = before_offset;
    }
  }

  Some(DateLen::DateTime(c.pos))
}

/// `USD100` style identifier: three letters followed by digits.
pub(crate) fn is_currency_ident(text: &str) -> bool {
  let bytes = text.as_bytes();
  bytes.len() > 3
    && bytes[..3].iter().all(u8::is_ascii_alphabetic)
    && bytes[3..].iter().all(u8::is_ascii_digit)
}

/// The `.01` fraction of a currency literal, if any.
pub(crate) fn currency_fraction(rest: &str) -> usize {
  let mut c = Cursor::new(rest);
  if c.eat(b'.') && c.digits1() && !c.at_word_char() {
    c.pos
  } else {
    0
  }
}

/// Length of the remainder of a SOSL search term after the opening `{`,
/// including the closing `}`. `\}` does not close the term.
pub(crate) fn search_term(rest: &str) -> Option<usize> {
  let mut escaped = false;
  for (i, b) in rest.bytes().enumerate() {
    match b {
      _ if escaped => escaped = false,
      b'\\' => escaped = true,
      b'}' => return Some(i + 1),
      _ => (),
    }
  }

  None
}

#[cfg(test)]
mod tests {
  use super::*;
  use test_case::test_case;

  #[test_case(" select Id from Account]", true ; "select")]
  #[test_case("SELECT Id", true ; "upper")]
  #[test_case("\n  /* c */ // line\n Find {x}", true ; "find_after_comments")]
  #[test_case("0]", false ; "index")]
  #[test_case("selected]", false ; "prefix")]
  fn opens(rest: &str, expected: bool) {
    assert_eq!(opens_query(rest), expected);
  }

  #[test_case("-01-01", Some(DateLen::Date(6)) ; "date")]
  #[test_case("-01-01T12:00:00Z", Some(DateLen::DateTime(16)) ; "datetime_z")]
  #[test_case("-01-01T12:00:00.123+01:00", Some(DateLen::DateTime(25)) ; "datetime_offset")]
  #[test_case("-01-01T12:00:00", Some(DateLen::DateTime(15)) ; "datetime_bare")]
  #[test_case("-01", None ; "partial")]
  #[test_case(" - 1", None ; "subtraction")]
  fn dates(rest: &str, expected: Option<DateLen>) {
    assert_eq!(date_suffix(rest), expected);
  }

  #[test_case("USD100", true)]
  #[test_case("usd2", true)]
  #[test_case("US100", false)]
  #[test_case("USD", false)]
  #[test_case("USD1a", false)]
  fn currency(text: &str, expected: bool) {
    assert_eq!(is_currency_ident(text), expected);
  }

  #[test_case(".01 ", 3)]
  #[test_case(".name", 0)]
  #[test_case(" ", 0)]
  fn fraction(rest: &str, expected: usize) {
    assert_eq!(currency_fraction(rest), expected);
  }

  #[test_case("foo}", Some(4))]
  #[test_case("a\\}b}", Some(5))]
  #[test_case("open", None)]
  fn search(rest: &str, expected: Option<usize>) {
    assert_eq!(search_term(rest), expected);
  }
}
