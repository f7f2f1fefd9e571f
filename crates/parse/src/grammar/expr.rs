use super::*;

#[derive(Copy, Clone, PartialEq, PartialOrd)]
enum Precedence {
  Any,
  Coalesce,
  Or,
  And,
  BitOr,
  BitXor,
  BitAnd,
  Equals,
  Compare,
  Shift,
  Arithmetic,
  Term,
}

impl Precedence {
  fn of(kind: SyntaxKind) -> Option<Self> {
    match kind {
      T![*] | T![/] | T![%] => Some(Precedence::Term),
      T![+] | T![-] => Some(Precedence::Arithmetic),
      T![<<] | T![>>] | T![>>>] => Some(Precedence::Shift),
      T![>] | T![>=] | T![<] | T![<=] | T![instanceof] => Some(Precedence::Compare),
      T![==] | T![===] | T![!=] | T![!==] | T![<>] => Some(Precedence::Equals),
      T![&] => Some(Precedence::BitAnd),
      T![^] => Some(Precedence::BitXor),
      T![|] => Some(Precedence::BitOr),
      T![&&] => Some(Precedence::And),
      T![||] => Some(Precedence::Or),
      T![??] => Some(Precedence::Coalesce),
      _ => None,
    }
  }
}

const UNARY_OP: TokenSet = token_set![T![-], T![+], T![!], T![~], T![++], T![--]];
const ASSIGN_OP: TokenSet = token_set![
  T![=],
  T![+=],
  T![-=],
  T![*=],
  T![/=],
  T![&=],
  T![|=],
  T![^=],
  T![<<=],
  T![>>=],
  T![>>>=],
];

/// Tokens that may follow `(Type)` for it to be read as a cast.
const CAST_FOLLOW: TokenSet = LITERAL_FIRST.union(token_set![
  IDENT,
  T!['('],
  T![!],
  T![~],
  T![new],
  T![this],
  T![super],
]);

/// Parses an expression, returning `false` if none could be started.
pub(super) fn expr<S: TokenSource>(p: &mut Parser<S>) -> bool {
  assign_expr(p).is_some()
}

/// An expression that stops before a top level assignment.
pub(super) fn expr_no_assign<S: TokenSource>(p: &mut Parser<S>) -> Option<CompletedMarker> {
  ternary_expr(p)
}

fn assign_expr<S: TokenSource>(p: &mut Parser<S>) -> Option<CompletedMarker> {
  let lhs = ternary_expr(p)?;
  if !p.at_ts(ASSIGN_OP) {
    return Some(lhs);
  }

  // right associative: a = b = c
  let m = lhs.precede(p);
  p.bump_any();
  assign_expr(p);
  Some(m.complete(p, ASSIGN_EXPR))
}

fn ternary_expr<S: TokenSource>(p: &mut Parser<S>) -> Option<CompletedMarker> {
  let cond = unary_expr(p).map(|lhs| expr_bp(p, lhs, Precedence::Any))?;
  if !p.at(T![?]) {
    return Some(cond);
  }

  let m = cond.precede(p);
  p.bump(T![?]);
  assign_expr(p);
  p.expect(T![:]);
  assign_expr(p);
  Some(m.complete(p, TERNARY_EXPR))
}

/// The binary operator at the cursor and how many raw tokens it spans.
/// Shift operators are lexed as separate `<` / `>` tokens so that nested
/// generics close properly; here they are glued back together.
fn current_op<S: TokenSource>(p: &Parser<S>) -> Option<(SyntaxKind, u8)> {
  let kind = p.current();
  let op = match kind {
    T![<] if p.nth_at(1, T![<]) && p.nth_is_jointed(0) => (T![<<], 2),
    T![>] if p.nth_at(1, T![>]) && p.nth_is_jointed(0) => {
      if p.nth_at(2, T![>]) && p.nth_is_jointed(1) {
        (T![>>>], 3)
      } else {
        (T![>>], 2)
      }
    }
    _ => match Precedence::of(kind) {
      Some(_) => (kind, 1),
      None => return None,
    },
  };

  Some(op)
}

fn expr_bp<S: TokenSource>(
  p: &mut Parser<S>,
  mut lhs: CompletedMarker,
  base: Precedence,
) -> CompletedMarker {
  while let Some((op, n_raw_tokens)) = current_op(p) {
    let precedence = match Precedence::of(op) {
      Some(precedence) if precedence >= base => precedence,
      _ => break,
    };

    let m = lhs.precede(p);

    // a instanceof Account
    if op == T![instanceof] {
      p.bump(T![instanceof]);
      type_ref(p);
      lhs = m.complete(p, INSTANCEOF_EXPR);
      continue;
    }

    p.bump_compound(op, n_raw_tokens);
    let mut rhs = match unary_expr(p) {
      None => {
        lhs = m.complete(p, BIN_EXPR);
        break;
      }
      Some(e) => e,
    };

    while let Some((next, _)) = current_op(p) {
      match Precedence::of(next) {
        Some(next) if next > precedence => rhs = expr_bp(p, rhs, next),
        _ => break,
      }
    }

    lhs = m.complete(p, BIN_EXPR);
  }

  lhs
}

fn unary_expr<S: TokenSource>(p: &mut Parser<S>) -> Option<CompletedMarker> {
  if p.at_ts(UNARY_OP) {
    Some(prefix_expr(p))
  } else if p.at(T!['(']) && at_cast(p) {
    Some(cast_expr(p))
  } else {
    postfix_expr(p)
  }
}

// -1
// !-+x
// ++i
fn prefix_expr<S: TokenSource>(p: &mut Parser<S>) -> CompletedMarker {
  assert!(p.at_ts(UNARY_OP));
  let m = p.start();
  p.bump_any();
  unary_expr(p);
  m.complete(p, PREFIX_EXPR)
}

fn at_cast<S: TokenSource>(p: &Parser<S>) -> bool {
  match type_len(p, 1) {
    Some(len) => p.nth_at(1 + len, T![')']) && p.nth_at_ts(2 + len, CAST_FOLLOW),
    None => false,
  }
}

// (Account) records[0]
fn cast_expr<S: TokenSource>(p: &mut Parser<S>) -> CompletedMarker {
  assert!(p.at(T!['(']));
  let m = p.start();
  p.bump(T!['(']);
  type_ref(p);
  p.expect(T![')']);
  unary_expr(p);
  m.complete(p, CAST_EXPR)
}

fn postfix_expr<S: TokenSource>(p: &mut Parser<S>) -> Option<CompletedMarker> {
  let mut e = atom_expr(p)?;
  loop {
    e = match p.current() {
      T![.] | T![?.] => field_access_expr(p, e),
      T!['('] if is_callable(e.kind()) => call_expr(p, e),
      T!['['] => index_expr(p, e),
      T![++] | T![--] => {
        let m = e.precede(p);
        p.bump_any();
        m.complete(p, POSTFIX_EXPR)
      }
      _ => break,
    };
  }

  Some(e)
}

fn is_callable(kind: SyntaxKind) -> bool {
  match kind {
    NAME_REF | FIELD_ACCESS_EXPR | THIS_EXPR | SUPER_EXPR => true,
    _ => false,
  }
}

// a.b
// a?.b
// Account.class
fn field_access_expr<S: TokenSource>(p: &mut Parser<S>, e: CompletedMarker) -> CompletedMarker {
  assert!(p.at(T![.]) || p.at(T![?.]));
  let m = e.precede(p);
  p.bump_any();

  if p.at(T![class]) {
    p.bump(T![class]);
    return m.complete(p, CLASS_REF_EXPR);
  }

  name_ref_or_kw(p);
  m.complete(p, FIELD_ACCESS_EXPR)
}

// foo(1, 2)
fn call_expr<S: TokenSource>(p: &mut Parser<S>, e: CompletedMarker) -> CompletedMarker {
  assert!(p.at(T!['(']));
  let m = e.precede(p);
  arg_list(p);
  m.complete(p, CALL_EXPR)
}

// a[0]
fn index_expr<S: TokenSource>(p: &mut Parser<S>, e: CompletedMarker) -> CompletedMarker {
  assert!(p.at(T!['[']));
  let m = e.precede(p);
  p.bump(T!['[']);
  expr(p);
  p.expect(T![']']);
  m.complete(p, INDEX_EXPR)
}
