//! A bit-set of `SyntaxKind`s.

use crate::SyntaxKind;

const WORDS: usize = 6;

/// A bit-set of `SyntaxKind`s
#[derive(Clone, Copy)]
pub(crate) struct TokenSet([u64; WORDS]);

impl TokenSet {
  pub(crate) const EMPTY: TokenSet = TokenSet([0; WORDS]);

  pub(crate) const fn singleton(kind: SyntaxKind) -> TokenSet {
    let idx = kind as usize;
    let mut words = [0; WORDS];
    words[idx / 64] = 1 << (idx % 64);
    TokenSet(words)
  }

  pub(crate) const fn union(self, other: TokenSet) -> TokenSet {
    let mut words = [0; WORDS];
    let mut i = 0;
    while i < WORDS {
      words[i] = self.0[i] | other.0[i];
      i += 1;
    }
    TokenSet(words)
  }

  pub(crate) fn contains(&self, kind: SyntaxKind) -> bool {
    let idx = kind as usize;
    self.0[idx / 64] & (1 << (idx % 64)) != 0
  }
}

macro_rules! token_set {
  ($($t:expr),*) => { TokenSet::EMPTY$(.union(TokenSet::singleton($t)))* };
  ($($t:expr),* ,) => { token_set!($($t),*) };
}

#[test]
fn token_set_works_for_tokens() {
  use crate::SyntaxKind::*;
  let ts = token_set![EOF, SEMICOLON, RETURNING_KW];
  assert!(ts.contains(EOF));
  assert!(ts.contains(SEMICOLON));
  assert!(ts.contains(RETURNING_KW));
  assert!(!ts.contains(PLUS_OP));
}

#[test]
fn every_kind_fits() {
  assert!((SyntaxKind::__LAST as usize) < WORDS * 64);
}
