use super::*;

// Account
// List<Map<Id, Account>>
// Schema.SObjectField[]
pub(super) fn type_ref<S: TokenSource>(p: &mut Parser<S>) -> CompletedMarker {
  let m = p.start();
  type_name(p);
  while p.at(T![.]) && p.nth_at(1, IDENT) {
    p.bump(T![.]);
    type_name(p);
  }

  while p.at(T!['[']) && p.nth_at(1, T![']']) {
    p.bump(T!['[']);
    p.bump(T![']']);
  }

  m.complete(p, TYPE_REF)
}

fn type_name<S: TokenSource>(p: &mut Parser<S>) {
  if !p.at(IDENT) {
    p.error("expected type");
    return;
  }

  let m = p.start();
  p.bump(IDENT);
  if p.at(T![<]) {
    type_args(p);
  }
  m.complete(p, TYPE_NAME);
}

fn type_args<S: TokenSource>(p: &mut Parser<S>) {
  assert!(p.at(T![<]));
  let m = p.start();
  p.bump(T![<]);
  loop {
    type_ref(p);
    if !p.eat(T![,]) {
      break;
    }
  }
  p.expect(T![>]);
  m.complete(p, TYPE_ARGS);
}

/// Number of tokens a type reference starting at the `n`th token would
/// span, without consuming anything.
pub(super) fn type_len<S: TokenSource>(p: &Parser<S>, n: usize) -> Option<usize> {
  let end = type_end(p, n, 0)?;
  Some(end - n)
}

fn type_end<S: TokenSource>(p: &Parser<S>, mut n: usize, nesting: u32) -> Option<usize> {
  if !p.lookahead_within_limit(nesting) {
    return None;
  }

  loop {
    if !p.nth_at(n, IDENT) {
      return None;
    }

    n += 1;
    if p.nth_at(n, T![<]) {
      n = type_args_end(p, n, nesting + 1)?;
    }

    if p.nth_at(n, T![.]) && p.nth_at(n + 1, IDENT) {
      n += 1;
    } else {
      break;
    }
  }

  while p.nth_at(n, T!['[']) && p.nth_at(n + 1, T![']']) {
    n += 2;
  }

  Some(n)
}

fn type_args_end<S: TokenSource>(p: &Parser<S>, mut n: usize, nesting: u32) -> Option<usize> {
  n += 1;
  loop {
    n = type_end(p, n, nesting)?;
    if p.nth_at(n, T![,]) {
      n += 1;
    } else {
      break;
    }
  }

  if p.nth_at(n, T![>]) {
    Some(n + 1)
  } else {
    None
  }
}

/// `Type name` followed by one of `follow`.
pub(super) fn at_typed_name<S: TokenSource>(p: &Parser<S>, follow: TokenSet) -> bool {
  match type_len(p, 0) {
    Some(len) => p.nth_at(len, IDENT) && p.nth_at_ts(len + 1, follow),
    None => false,
  }
}
