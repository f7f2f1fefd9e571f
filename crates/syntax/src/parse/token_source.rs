use core::ops::Range;

use apex_parse::{Token as PToken, TokenSource};

use crate::{
  parse::{is_skipped, lex::Token},
  SyntaxKind::EOF,
  TextRange, TextSize,
};

pub(crate) struct TextTokenSource<'t> {
  text: &'t str,

  /// start position of each token(expect whitespace and comment)
  /// ```non-rust
  ///  class Foo {}
  /// ^^^^^^ ^^^ ^^
  /// ```
  /// tokens: `[class, Foo, {, }]`
  start_offsets: Vec<TextSize>,

  /// tokens the grammar sees, see `is_skipped`
  tokens: Vec<Token>,

  /// Current token and position
  curr: (PToken, usize),
}

impl<'t> TokenSource for TextTokenSource<'t> {
  fn current(&self) -> PToken {
    self.curr.0
  }

  fn lookahead_nth(&self, n: usize) -> PToken {
    mk_token(self.curr.1 + n, &self.start_offsets, &self.tokens)
  }

  fn bump(&mut self) {
    if self.curr.0.kind == EOF {
      return;
    }

    let pos = self.curr.1 + 1;
    self.curr = (mk_token(pos, &self.start_offsets, &self.tokens), pos);
  }

  fn is_contextual_kw(&self, n: usize, kw: &str) -> bool {
    let pos = self.curr.1 + n;
    match (self.tokens.get(pos), self.start_offsets.get(pos)) {
      (Some(token), Some(&start)) => self
        .text
        .get(Range::<usize>::from(TextRange::at(start, token.len)))
        .map_or(false, |text| text.eq_ignore_ascii_case(kw)),
      _ => false,
    }
  }
}

fn mk_token(pos: usize, start_offsets: &[TextSize], tokens: &[Token]) -> PToken {
  let kind = tokens.get(pos).map(|t| t.kind).unwrap_or(EOF);
  let is_jointed_to_next = if pos + 1 < start_offsets.len() {
    start_offsets[pos] + tokens[pos].len == start_offsets[pos + 1]
  } else {
    false
  };

  PToken {
    kind,
    is_jointed_to_next,
  }
}

impl<'t> TextTokenSource<'t> {
  /// Generate input from tokens(expect comment and whitespace).
  pub fn new(text: &'t str, raw_tokens: &'t [Token]) -> TextTokenSource<'t> {
    let mut tokens = Vec::new();
    let mut start_offsets = Vec::new();
    let mut len = TextSize::from(0);
    for &token in raw_tokens.iter() {
      if !is_skipped(token.kind) {
        tokens.push(token);
        start_offsets.push(len);
      }
      len += token.len;
    }

    let first = mk_token(0, &start_offsets, &tokens);
    TextTokenSource {
      text,
      start_offsets,
      tokens,
      curr: (first, 0),
    }
  }
}
