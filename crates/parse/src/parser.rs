//! The low-level parser API used by the grammar.

use core::cell::Cell;

use drop_bomb::DropBomb;

use crate::{
  event::Event,
  ParseError,
  SyntaxKind::{self, EOF, IDENT, PARSE_ERR, TOMBSTONE},
  TokenSet, TokenSource,
};

/// `Parser` struct provides the low-level API for
/// navigating through the stream of tokens and
/// constructing the parse tree. The actual parsing
/// happens in the `grammar` module.
///
/// However, the result of this `Parser` is not a real
/// tree, but rather a flat stream of events of the form
/// "start expression, consume number literal,
/// finish expression". See `Event` docs for more.
///
/// Nesting is bounded: once more than `recursion_limit` nodes are open at
/// the same time, the parser behaves as if the input ended so that every
/// production unwinds, and `finish` reports the overflow.
pub(crate) struct Parser<'t, T: TokenSource> {
  token_source: &'t mut T,
  events: Vec<Event>,
  steps: Cell<u32>,
  depth: u32,
  recursion_limit: u32,
  limit_hit: Cell<bool>,
}

impl<'t, S: TokenSource> Parser<'t, S> {
  pub(super) fn new(token_source: &'t mut S, recursion_limit: u32) -> Self {
    Parser {
      token_source,
      events: Vec::new(),
      steps: Cell::new(0),
      depth: 0,
      recursion_limit,
      limit_hit: Cell::new(false),
    }
  }

  /// Returns the events and whether the recursion limit was hit.
  pub(crate) fn finish(self) -> (Vec<Event>, bool) {
    (self.events, self.limit_hit.get())
  }

  /// Returns the kind of the current token.
  /// If parser has already reached the end of input,
  /// the special `EOF` kind is returned.
  pub(crate) fn current(&self) -> SyntaxKind {
    self.nth(0)
  }

  /// Lookahead operation: returns the kind of the next nth
  /// token.
  pub(crate) fn nth(&self, n: usize) -> SyntaxKind {
    let steps = self.steps.get();
    assert!(steps <= 10_000_000, "the parser seems stuck");
    self.steps.set(steps + 1);

    if self.limit_hit.get() {
      return EOF;
    }

    self.token_source.lookahead_nth(n).kind
  }

  /// Checks if the current token is `kind`.
  /// Identical to `nth_at(0, kind)`.
  pub(crate) fn at(&self, kind: SyntaxKind) -> bool {
    self.nth_at(0, kind)
  }

  /// Checks if the nth token is `kind`.
  pub(crate) fn nth_at(&self, n: usize, kind: SyntaxKind) -> bool {
    self.nth(n) == kind
  }

  /// Checks if the current token is in `kinds`.
  pub(crate) fn at_ts(&self, kinds: TokenSet) -> bool {
    kinds.contains(self.current())
  }

  /// Checks if the nth token is in `kinds`.
  pub(crate) fn nth_at_ts(&self, n: usize, kinds: TokenSet) -> bool {
    kinds.contains(self.nth(n))
  }

  /// Checks if the nth token is an identifier spelled `kw` (ignoring case).
  pub(crate) fn nth_at_contextual_kw(&self, n: usize, kw: &str) -> bool {
    self.nth_at(n, IDENT) && self.token_source.is_contextual_kw(n, kw)
  }

  /// Identical to `nth_at_contextual_kw(0, kw)`.
  pub(crate) fn at_contextual_kw(&self, kw: &str) -> bool {
    self.nth_at_contextual_kw(0, kw)
  }

  /// Whether lookahead may descend `nesting` levels below the open nodes.
  /// Going deeper counts as hitting the recursion limit.
  pub(crate) fn lookahead_within_limit(&self, nesting: u32) -> bool {
    if self.depth.saturating_add(nesting) > self.recursion_limit {
      self.limit_hit.set(true);
    }

    !self.limit_hit.get()
  }

  /// Whether the nth token is immediately followed by the next one, without
  /// any whitespace or comment in between.
  pub(crate) fn nth_is_jointed(&self, n: usize) -> bool {
    !self.limit_hit.get() && self.token_source.lookahead_nth(n).is_jointed_to_next
  }

  /// Consume the next token if `kind` matches.
  pub(crate) fn eat(&mut self, kind: SyntaxKind) -> bool {
    if !self.at(kind) {
      return false;
    }

    self.do_bump(kind, 1);
    true
  }

  /// Starts a new node in the syntax tree. All nodes and tokens
  /// consumed between the `start` and the corresponding `Marker::complete`
  /// belong to the same node.
  pub(crate) fn start(&mut self) -> Marker {
    self.depth += 1;
    if self.depth > self.recursion_limit {
      self.limit_hit.set(true);
    }

    let pos = self.events.len() as u32;
    self.push_event(Event::tombstone());
    Marker::new(pos)
  }

  /// Consume the next token, which must be `kind`.
  pub(crate) fn bump(&mut self, kind: SyntaxKind) {
    if self.limit_hit.get() {
      return;
    }

    assert!(self.eat(kind));
  }

  /// Advances the parser by one token
  pub(crate) fn bump_any(&mut self) {
    let kind = self.nth(0);
    if kind == EOF {
      return;
    }

    self.do_bump(kind, 1)
  }

  /// Advances the parser by one token, recording it as `kind`.
  /// Used for contextual keywords and for keywords used as names.
  pub(crate) fn bump_remap(&mut self, kind: SyntaxKind) {
    if self.nth(0) == EOF {
      return;
    }

    self.do_bump(kind, 1);
  }

  /// Glues `n_raw_tokens` joint tokens into one token of `kind`
  /// (`>` `>` becomes `>>`).
  pub(crate) fn bump_compound(&mut self, kind: SyntaxKind, n_raw_tokens: u8) {
    if self.nth(0) == EOF {
      return;
    }

    for _ in 0..n_raw_tokens {
      self.token_source.bump();
    }

    self.steps.set(0);
    self.push_event(Event::Token { kind, n_raw_tokens });
  }

  /// Emit error with the `message`
  pub(crate) fn error(&mut self, message: impl Into<String>) {
    let msg = ParseError(message.into());
    self.push_event(Event::Error { msg })
  }

  /// Consume the next token if it is `kind` or emit an error
  /// otherwise.
  pub(crate) fn expect(&mut self, kind: SyntaxKind) -> bool {
    if self.eat(kind) {
      return true;
    }

    self.error(format!("expected {}", kind.describe()));
    false
  }

  /// Create an error node and consume the next token.
  pub(crate) fn err_and_bump(&mut self, message: &str) {
    self.err_recover(message, TokenSet::EMPTY);
  }

  /// Create an error node and consume the next token, unless it is a
  /// brace, the end of input or in `recovery`.
  pub(crate) fn err_recover(&mut self, message: &str, recovery: TokenSet) {
    match self.current() {
      T!['{'] | T!['}'] | EOF => {
        self.error(message);
        return;
      }
      _ => (),
    }

    if self.at_ts(recovery) {
      self.error(message);
      return;
    }

    let m = self.start();
    self.error(message);
    self.bump_any();
    m.complete(self, PARSE_ERR);
  }

  fn do_bump(&mut self, kind: SyntaxKind, n_raw_tokens: u8) {
    self.token_source.bump();
    self.steps.set(0);

    self.push_event(Event::Token { kind, n_raw_tokens });
  }

  fn push_event(&mut self, event: Event) {
    self.events.push(event)
  }
}

/// See `Parser::start`.
pub(crate) struct Marker {
  pos: u32,
  bomb: DropBomb,
}

impl Marker {
  fn new(pos: u32) -> Marker {
    Marker {
      pos,
      bomb: DropBomb::new("Marker must be either completed or abandoned"),
    }
  }

  /// Finishes the syntax tree node and assigns `kind` to it,
  /// and mark the create a `CompletedMarker` for possible future
  /// operation like `.precede()` to deal with forward_parent.
  pub(crate) fn complete<S: TokenSource>(
    mut self,
    p: &mut Parser<S>,
    kind: SyntaxKind,
  ) -> CompletedMarker {
    self.bomb.defuse();
    p.depth -= 1;
    let idx = self.pos as usize;
    match p.events[idx] {
      Event::Start {
        kind: ref mut slot, ..
      } => {
        *slot = kind;
      }
      _ => unreachable!(),
    }

    p.push_event(Event::Finish);
    CompletedMarker::new(self.pos, kind)
  }

  /// Abandons the syntax tree node. All its children
  /// are attached to its parent instead.
  pub(crate) fn abandon<S: TokenSource>(mut self, p: &mut Parser<S>) {
    self.bomb.defuse();
    p.depth -= 1;

    let idx = self.pos as usize;
    if idx == p.events.len() - 1 {
      match p.events.pop() {
        Some(Event::Start {
          kind: TOMBSTONE,
          forward_parent: None,
        }) => (),
        _ => unreachable!(),
      }
    }
  }
}

pub(crate) struct CompletedMarker {
  start_pos: u32,
  kind: SyntaxKind,
}

impl CompletedMarker {
  fn new(start_pos: u32, kind: SyntaxKind) -> Self {
    CompletedMarker { start_pos, kind }
  }

  /// This method allows to create a new node which starts
  /// *before* the current one. That is, parser could start
  /// node `A`, then complete it, and then after parsing the
  /// whole `A`, decide that it should have started some node
  /// `B` before starting `A`. `precede` allows to do exactly
  /// that. See also docs about `forward_parent` in `Event::Start`.
  ///
  /// Given completed events `[START, FINISH]` and its corresponding
  /// `CompletedMarker(pos: 0, _)`.
  /// Append a new `START` events as `[START, FINISH, NEWSTART]`,
  /// then mark `NEWSTART` as `START`'s parent with saving its relative
  /// distance to `NEWSTART` into forward_parent(=2 in this case);
  pub(crate) fn precede<S: TokenSource>(self, p: &mut Parser<S>) -> Marker {
    let new_pos = p.start();
    let idx = self.start_pos as usize;

    match p.events[idx] {
      Event::Start {
        ref mut forward_parent,
        ..
      } => {
        *forward_parent = Some(new_pos.pos - self.start_pos);
      }
      _ => unreachable!(),
    }
    new_pos
  }

  pub(crate) fn kind(&self) -> SyntaxKind {
    self.kind
  }
}
