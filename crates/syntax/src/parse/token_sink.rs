use core::mem;

use apex_parse::{ParseError, TreeSink};

use crate::{
  line_index::LineIndex,
  parse::{is_skipped, Token},
  syntax_node::GreenNode,
  SmolStr, SyntaxError, SyntaxErrorKind, SyntaxKind, SyntaxTreeBuilder, TextRange, TextSize,
};

/// Bridges the parser with our specific syntax tree representation.
///
/// `TextTreeSink` also handles attachment of trivia (whitespace & comments)
/// to nodes.
pub(crate) struct TextTreeSink<'a> {
  text: &'a str,
  tokens: &'a [Token],
  index: &'a LineIndex<'a>,
  text_pos: TextSize,
  token_pos: usize,
  state: State,
  inner: SyntaxTreeBuilder,
}

enum State {
  PendingStart,
  Normal,
  PendingFinish,
}

impl<'a> TreeSink for TextTreeSink<'a> {
  fn token(&mut self, kind: SyntaxKind, n_raw_tokens: u8) {
    match mem::replace(&mut self.state, State::Normal) {
      State::PendingStart => unreachable!(),
      State::PendingFinish => self.inner.finish_node(),
      State::Normal => (),
    }

    self.eat_trivias();
    let n_raw_tokens = n_raw_tokens as usize;
    let len = self.tokens[self.token_pos..self.token_pos + n_raw_tokens]
      .iter()
      .map(|it| it.len)
      .sum::<TextSize>();

    self.do_token(kind, len, n_raw_tokens);
  }

  fn start_node(&mut self, kind: SyntaxKind) {
    match mem::replace(&mut self.state, State::Normal) {
      State::PendingStart => {
        self.inner.start_node(kind);
        // No need to attach trivias to previous node: there is no
        // previous node.
        return;
      }
      State::PendingFinish => self.inner.finish_node(),
      State::Normal => (),
    }

    let n_trivias = self.tokens[self.token_pos..]
      .iter()
      .take_while(|it| is_skipped(it.kind))
      .count();
    self.eat_n_trivias(n_trivias);
    self.inner.start_node(kind);
  }

  fn finish_node(&mut self) {
    match mem::replace(&mut self.state, State::PendingFinish) {
      State::PendingStart => unreachable!(),
      State::PendingFinish => self.inner.finish_node(),
      State::Normal => (),
    }
  }

  fn error(&mut self, error: ParseError) {
    let (range, token) = self.next_significant_token();
    let error = SyntaxError::new(
      SyntaxErrorKind::Syntax,
      error.0,
      range,
      self.index.line_col(range.start()),
      token,
    );
    self.inner.error(error);
  }
}

impl<'a> TextTreeSink<'a> {
  pub(super) fn new(
    text: &'a str,
    tokens: &'a [Token],
    index: &'a LineIndex<'a>,
  ) -> Self {
    Self {
      text,
      tokens,
      index,
      text_pos: 0.into(),
      token_pos: 0,
      state: State::PendingStart,
      inner: SyntaxTreeBuilder::default(),
    }
  }

  pub(super) fn finish(mut self) -> (GreenNode, Vec<SyntaxError>) {
    match mem::replace(&mut self.state, State::Normal) {
      State::PendingFinish => {
        self.eat_trivias();
        self.inner.finish_node()
      }
      State::PendingStart | State::Normal => unreachable!(),
    }

    self.inner.finish_raw()
  }

  /// Range and text of the first token at or after the cursor that is not
  /// trivia, or an empty range at the end of the input.
  fn next_significant_token(&self) -> (TextRange, Option<String>) {
    let mut pos = self.text_pos;
    for token in &self.tokens[self.token_pos..] {
      let range = TextRange::at(pos, token.len);
      if !is_skipped(token.kind) {
        return (range, Some(self.text[range].into()));
      }
      pos = range.end();
    }

    (TextRange::empty(pos), None)
  }

  fn eat_trivias(&mut self) {
    while let Some(&token) = self.tokens.get(self.token_pos) {
      if !is_skipped(token.kind) {
        break;
      }
      self.do_token(token.kind, token.len, 1);
    }
  }

  fn eat_n_trivias(&mut self, n: usize) {
    for _ in 0..n {
      let token = self.tokens[self.token_pos];
      assert!(is_skipped(token.kind));
      self.do_token(token.kind, token.len, 1);
    }
  }

  fn do_token(&mut self, kind: SyntaxKind, len: TextSize, n_tokens: usize) {
    let range = TextRange::at(self.text_pos, len);
    let text: SmolStr = self.text[range].into();
    self.text_pos += len;
    self.token_pos += n_tokens;
    self.inner.token(kind, text);
  }
}
