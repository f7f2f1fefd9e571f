use super::*;

/// Where a statement appears. A lone `;` is only accepted as a statement in
/// block contents and as the body of a loop.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(super) enum StmtContext {
  Generic,
  Permissive,
}

const DML_KW: TokenSet = token_set![
  T![insert],
  T![update],
  T![delete],
  T![undelete],
  T![upsert],
  T![merge],
];

const LOCAL_VAR_FOLLOW: TokenSet = token_set![T![=], T![;], T![,], T![:]];
const FOR_EACH_FOLLOW: TokenSet = token_set![T![:]];

pub(super) fn stmt<S: TokenSource>(p: &mut Parser<S>, ctx: StmtContext) {
  match p.current() {
    T!['{'] => {
      block(p);
    }
    T![;] => empty_stmt(p, ctx),
    T![if] => if_stmt(p),
    T![while] => while_stmt(p),
    T![do] => do_while_stmt(p),
    T![for] => for_stmt(p),
    T![try] => try_stmt(p),
    T![return] => return_stmt(p),
    T![throw] => throw_stmt(p),
    T![break] => keyword_stmt(p, T![break], BREAK_STMT),
    T![continue] => keyword_stmt(p, T![continue], CONTINUE_STMT),
    T![final] => local_var_decl(p),
    kind if DML_KW.contains(kind) => dml_stmt(p),
    IDENT if p.at_contextual_kw("switch") && p.nth_at(1, T![on]) => switch_stmt(p),
    IDENT if at_run_as(p) => run_as_stmt(p),
    IDENT if at_typed_name(p, LOCAL_VAR_FOLLOW) => local_var_decl(p),
    _ => expr_stmt(p),
  }
}

pub(super) fn block<S: TokenSource>(p: &mut Parser<S>) -> CompletedMarker {
  assert!(p.at(T!['{']));
  let m = p.start();
  p.bump(T!['{']);
  while !p.at(EOF) && !p.at(T!['}']) {
    stmt(p, StmtContext::Permissive);
  }
  p.expect(T!['}']);
  m.complete(p, BLOCK)
}

pub(super) fn expect_block<S: TokenSource>(p: &mut Parser<S>) {
  if p.at(T!['{']) {
    block(p);
  } else {
    p.error("expected '{'");
  }
}

fn empty_stmt<S: TokenSource>(p: &mut Parser<S>, ctx: StmtContext) {
  assert!(p.at(T![;]));
  if ctx == StmtContext::Generic {
    p.error("empty statement is not allowed here");
  }

  let m = p.start();
  p.bump(T![;]);
  m.complete(p, EMPTY_STMT);
}

fn keyword_stmt<S: TokenSource>(p: &mut Parser<S>, kw: SyntaxKind, kind: SyntaxKind) {
  assert!(p.at(kw));
  let m = p.start();
  p.bump(kw);
  p.expect(T![;]);
  m.complete(p, kind);
}

fn condition<S: TokenSource>(p: &mut Parser<S>) {
  let m = p.start();
  p.expect(T!['(']);
  expr(p);
  p.expect(T![')']);
  m.complete(p, CONDITION);
}

// if (a) b(); else c();
fn if_stmt<S: TokenSource>(p: &mut Parser<S>) {
  assert!(p.at(T![if]));
  let m = p.start();
  p.bump(T![if]);
  condition(p);

  let branch = p.start();
  stmt(p, StmtContext::Generic);
  branch.complete(p, THEN_BRANCH);

  if p.at(T![else]) {
    let branch = p.start();
    p.bump(T![else]);
    stmt(p, StmtContext::Generic);
    branch.complete(p, ELSE_BRANCH);
  }

  m.complete(p, IF_STMT);
}

// while (x++ < 10);
fn while_stmt<S: TokenSource>(p: &mut Parser<S>) {
  assert!(p.at(T![while]));
  let m = p.start();
  p.bump(T![while]);
  condition(p);
  stmt(p, StmtContext::Permissive);
  m.complete(p, WHILE_STMT);
}

// do { x++; } while (x < 10);
fn do_while_stmt<S: TokenSource>(p: &mut Parser<S>) {
  assert!(p.at(T![do]));
  let m = p.start();
  p.bump(T![do]);
  expect_block(p);
  p.expect(T![while]);
  condition(p);
  p.expect(T![;]);
  m.complete(p, DO_WHILE_STMT);
}

// for (Integer i = 0; i < 10; i++) {}
// for (Account a : accounts) {}
fn for_stmt<S: TokenSource>(p: &mut Parser<S>) {
  assert!(p.at(T![for]));
  let m = p.start();
  p.bump(T![for]);
  p.expect(T!['(']);

  if p.at(T![final]) || at_typed_name(p, FOR_EACH_FOLLOW) {
    for_each_control(p);
  } else {
    for_control(p);
  }

  p.expect(T![')']);
  stmt(p, StmtContext::Permissive);
  m.complete(p, FOR_STMT);
}

fn for_each_control<S: TokenSource>(p: &mut Parser<S>) {
  let m = p.start();
  opt_modifiers(p);
  type_ref(p);
  name(p);
  p.expect(T![:]);
  expr(p);
  m.complete(p, FOR_EACH_CONTROL);
}

fn for_control<S: TokenSource>(p: &mut Parser<S>) {
  let m = p.start();

  if !p.at(T![;]) {
    let init = p.start();
    if at_typed_name(p, LOCAL_VAR_FOLLOW) {
      type_ref(p);
      var_declarators(p);
    } else {
      expr_list(p);
    }
    init.complete(p, FOR_INIT);
  }
  p.expect(T![;]);

  if !p.at(T![;]) {
    let cond = p.start();
    expr(p);
    cond.complete(p, CONDITION);
  }
  p.expect(T![;]);

  if !p.at(T![')']) {
    let update = p.start();
    expr_list(p);
    update.complete(p, FOR_UPDATE);
  }

  m.complete(p, FOR_CONTROL);
}

fn expr_list<S: TokenSource>(p: &mut Parser<S>) {
  loop {
    expr(p);
    if !p.eat(T![,]) {
      break;
    }
  }
}

// try { } catch (Exception e) { } finally { }
fn try_stmt<S: TokenSource>(p: &mut Parser<S>) {
  assert!(p.at(T![try]));
  let m = p.start();
  p.bump(T![try]);
  expect_block(p);

  let mut handlers = 0;
  while p.at(T![catch]) {
    let c = p.start();
    p.bump(T![catch]);
    p.expect(T!['(']);
    opt_modifiers(p);
    type_ref(p);
    name(p);
    p.expect(T![')']);
    expect_block(p);
    c.complete(p, CATCH_CLAUSE);
    handlers += 1;
  }

  if p.at(T![finally]) {
    let f = p.start();
    p.bump(T![finally]);
    expect_block(p);
    f.complete(p, FINALLY_CLAUSE);
    handlers += 1;
  }

  if handlers == 0 {
    p.error("expected 'catch' or 'finally'");
  }

  m.complete(p, TRY_STMT);
}

fn return_stmt<S: TokenSource>(p: &mut Parser<S>) {
  assert!(p.at(T![return]));
  let m = p.start();
  p.bump(T![return]);
  if !p.at(T![;]) {
    expr(p);
  }
  p.expect(T![;]);
  m.complete(p, RETURN_STMT);
}

fn throw_stmt<S: TokenSource>(p: &mut Parser<S>) {
  assert!(p.at(T![throw]));
  let m = p.start();
  p.bump(T![throw]);
  expr(p);
  p.expect(T![;]);
  m.complete(p, THROW_STMT);
}

// final List<Account> accounts = [SELECT Id FROM Account], other;
fn local_var_decl<S: TokenSource>(p: &mut Parser<S>) {
  let m = p.start();
  opt_modifiers(p);
  type_ref(p);
  var_declarators(p);
  p.expect(T![;]);
  m.complete(p, LOCAL_VAR_DECL);
}

// insert as user contact;
// upsert accounts Account.Fields.External_Id__c;
// merge master duplicate;
fn dml_stmt<S: TokenSource>(p: &mut Parser<S>) {
  assert!(p.at_ts(DML_KW));
  let m = p.start();
  let kw = p.current();
  p.bump_any();

  if p.at_contextual_kw("as")
    && (p.nth_at_contextual_kw(1, "user") || p.nth_at_contextual_kw(1, "system"))
    && !p.nth_at(2, T![;])
  {
    let level = p.start();
    p.bump_remap(T![as]);
    let mode = if p.at_contextual_kw("user") {
      T![user]
    } else {
      T![system]
    };
    p.bump_remap(mode);
    level.complete(p, ACCESS_LEVEL);
  }

  expr(p);
  match kw {
    T![upsert] if !p.at(T![;]) => {
      expr(p);
    }
    T![merge] => {
      expr(p);
    }
    _ => (),
  }

  p.expect(T![;]);
  m.complete(p, DML_STMT);
}

fn at_run_as<S: TokenSource>(p: &Parser<S>) -> bool {
  p.at_contextual_kw("system")
    && p.nth_at(1, T![.])
    && p.nth_at_contextual_kw(2, "runas")
    && p.nth_at(3, T!['('])
}

// System.runAs(u) { }
fn run_as_stmt<S: TokenSource>(p: &mut Parser<S>) {
  assert!(at_run_as(p));
  let m = p.start();
  p.bump_remap(T![system]);
  p.bump(T![.]);
  p.bump(IDENT);
  arg_list(p);
  if p.at(T!['{']) {
    block(p);
  } else {
    p.expect(T![;]);
  }
  m.complete(p, RUN_AS_STMT);
}

// switch on x { when 1, 2 { } when Account a { } when else { } }
fn switch_stmt<S: TokenSource>(p: &mut Parser<S>) {
  let m = p.start();
  p.bump_remap(T![switch]);
  p.bump(T![on]);
  expr(p);

  if !p.at(T!['{']) {
    p.error("expected '{'");
    m.complete(p, SWITCH_STMT);
    return;
  }

  p.bump(T!['{']);
  while !p.at(EOF) && !p.at(T!['}']) {
    if p.at_contextual_kw("when") {
      when_clause(p);
    } else if p.at(T!['{']) {
      p.error("expected 'when'");
      block(p);
    } else {
      p.err_and_bump("expected 'when'");
    }
  }
  p.expect(T!['}']);

  m.complete(p, SWITCH_STMT);
}

fn when_clause<S: TokenSource>(p: &mut Parser<S>) {
  let m = p.start();
  p.bump_remap(T![when]);
  when_value(p);
  expect_block(p);
  m.complete(p, WHEN_CLAUSE);
}

const WHEN_PATTERN_FOLLOW: TokenSet = token_set![T!['{']];

fn when_value<S: TokenSource>(p: &mut Parser<S>) {
  let m = p.start();
  if p.at(T![else]) {
    p.bump(T![else]);
  } else if at_typed_name(p, WHEN_PATTERN_FOLLOW) {
    let pattern = p.start();
    type_ref(p);
    name(p);
    pattern.complete(p, WHEN_TYPE_PATTERN);
  } else {
    loop {
      when_literal(p);
      if !p.eat(T![,]) {
        break;
      }
    }
  }
  m.complete(p, WHEN_VALUE);
}

// 1
// ((2))
// -+-3
// 'text'
// SOME_ENUM_VALUE
fn when_literal<S: TokenSource>(p: &mut Parser<S>) {
  let m = p.start();
  match p.current() {
    T!['('] => {
      p.bump(T!['(']);
      when_literal(p);
      p.expect(T![')']);
    }
    T![-] | T![+] => {
      while p.at(T![-]) || p.at(T![+]) {
        p.bump_any();
      }
      match p.current() {
        INT_NUMBER | LONG_NUMBER | DECIMAL_NUMBER => p.bump_any(),
        _ => p.error("expected number"),
      }
    }
    INT_NUMBER | LONG_NUMBER | DECIMAL_NUMBER | STRING | T![null] | IDENT => p.bump_any(),
    _ => p.error("expected 'else', a type pattern or a literal"),
  }
  m.complete(p, WHEN_LITERAL);
}

// foo.bar(1);
fn expr_stmt<S: TokenSource>(p: &mut Parser<S>) {
  if !p.at_ts(EXPR_FIRST) {
    p.err_and_bump("expected statement");
    return;
  }

  let m = p.start();
  expr(p);
  p.expect(T![;]);
  m.complete(p, EXPR_STMT);
}
