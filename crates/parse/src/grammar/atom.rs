use super::*;

pub(crate) const LITERAL_FIRST: TokenSet = token_set![
  T![true],
  T![false],
  INT_NUMBER,
  LONG_NUMBER,
  DECIMAL_NUMBER,
  STRING,
  T![null],
];

pub(super) fn opt_literal_expr<S: TokenSource>(p: &mut Parser<S>) -> Option<CompletedMarker> {
  if !p.at_ts(LITERAL_FIRST) {
    return None;
  }

  let m = p.start();
  p.bump_any();
  Some(m.complete(p, LITERAL))
}

pub(super) fn literal<S: TokenSource>(p: &mut Parser<S>) {
  if opt_literal_expr(p).is_none() {
    p.err_and_bump("expected literal");
  }
}

pub(crate) const EXPR_RECOVERY_SET: TokenSet = token_set![T![;], T![,], T![')'], T![']']];

pub(crate) const EXPR_FIRST: TokenSet = LITERAL_FIRST.union(token_set![
  IDENT,
  T!['('],
  T!['['],
  T![this],
  T![super],
  T![new],
  T![-],
  T![+],
  T![!],
  T![~],
  T![++],
  T![--],
]);

pub(super) fn atom_expr<S: TokenSource>(p: &mut Parser<S>) -> Option<CompletedMarker> {
  if let Some(m) = opt_literal_expr(p) {
    return Some(m);
  }

  match p.current() {
    IDENT => Some(ident_expr(p)),
    T![this] => Some(this_expr(p)),
    T![super] => Some(super_expr(p)),
    T!['('] => Some(paren_expr(p)),
    T![new] => Some(new_expr(p)),
    T!['['] if p.nth_at(1, T![select]) || p.nth_at(1, T![find]) => Some(query_expr(p)),
    _ => {
      p.err_recover("expected expression", EXPR_RECOVERY_SET);
      None
    }
  }
}

fn ident_expr<S: TokenSource>(p: &mut Parser<S>) -> CompletedMarker {
  assert!(p.at(IDENT));
  let m = p.start();
  p.bump(IDENT);
  m.complete(p, NAME_REF)
}

fn this_expr<S: TokenSource>(p: &mut Parser<S>) -> CompletedMarker {
  assert!(p.at(T![this]));
  let m = p.start();
  p.bump(T![this]);
  m.complete(p, THIS_EXPR)
}

fn super_expr<S: TokenSource>(p: &mut Parser<S>) -> CompletedMarker {
  assert!(p.at(T![super]));
  let m = p.start();
  p.bump(T![super]);
  m.complete(p, SUPER_EXPR)
}

pub(super) fn paren_expr<S: TokenSource>(p: &mut Parser<S>) -> CompletedMarker {
  assert!(p.at(T!['(']));
  let m = p.start();
  p.bump(T!['(']);

  expr(p);
  if !p.eat(T![')']) {
    p.err_recover("expected ')'", token_set![T![;]]);
    p.eat(T![')']);
  }
  m.complete(p, PAREN_EXPR)
}

// new Account(Name = 'x')
// new Integer[5]
// new List<String>{ 'a', 'b' }
// new Map<Id, Account>{ a.Id => a }
fn new_expr<S: TokenSource>(p: &mut Parser<S>) -> CompletedMarker {
  assert!(p.at(T![new]));
  let m = p.start();
  p.bump(T![new]);
  type_ref(p);

  match p.current() {
    T!['('] => {
      arg_list(p);
    }
    T!['['] => {
      let dim = p.start();
      p.bump(T!['[']);
      expr(p);
      p.expect(T![']']);
      dim.complete(p, ARRAY_DIM);
    }
    T!['{'] => collection_init(p),
    _ => p.error("expected '(', '[' or '{'"),
  }

  m.complete(p, NEW_EXPR)
}

fn collection_init<S: TokenSource>(p: &mut Parser<S>) {
  assert!(p.at(T!['{']));
  let m = p.start();
  p.bump(T!['{']);

  while !p.at(EOF) && !p.at(T!['}']) {
    let entry = expr_no_assign(p);
    if let Some(key) = entry {
      if p.at(T![=>]) {
        let e = key.precede(p);
        p.bump(T![=>]);
        expr(p);
        e.complete(p, MAP_ENTRY);
      }
    }

    if !p.at(T!['}']) && !p.expect(T![,]) {
      break;
    }
  }

  p.expect(T!['}']);
  m.complete(p, COLLECTION_INIT);
}

// [SELECT Id FROM Account]
// [FIND {foo} RETURNING Account]
fn query_expr<S: TokenSource>(p: &mut Parser<S>) -> CompletedMarker {
  assert!(p.at(T!['[']));
  let m = p.start();
  p.bump(T!['[']);

  let kind = if p.at(T![find]) {
    sosl_query(p);
    SOSL_EXPR
  } else {
    soql_query(p);
    SOQL_EXPR
  };

  if !p.eat(T![']']) {
    p.err_recover("expected ']'", token_set![T![;]]);
    p.eat(T![']']);
  }
  m.complete(p, kind)
}

pub(super) fn arg_list<S: TokenSource>(p: &mut Parser<S>) -> CompletedMarker {
  let m = p.start();
  p.expect(T!['(']);

  // `foo(;` is missing the `)`, not an argument
  if !p.at(EOF) && !p.at(T![')']) && !p.at_ts(EXPR_RECOVERY_SET) {
    loop {
      expr(p);
      if !p.eat(T![,]) {
        break;
      }
    }
  }

  p.expect(T![')']);
  m.complete(p, ARG_LIST)
}
