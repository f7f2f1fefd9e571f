use super::*;

const MODIFIER_KW: TokenSet = token_set![
  T![public],
  T![private],
  T![protected],
  T![global],
  T![static],
  T![final],
  T![abstract],
  T![virtual],
  T![override],
  T![transient],
  T![testmethod],
  T![webservice],
];

const MEMBER_FOLLOW: TokenSet = token_set![T![=], T![;], T![,], T!['('], T!['{']];
const METHOD_FOLLOW: TokenSet = token_set![T!['(']];

/// Modifiers, sharing modifiers and annotations, wrapped in a
/// `MODIFIER_LIST` when there is at least one.
pub(super) fn opt_modifiers<S: TokenSource>(p: &mut Parser<S>) {
  let m = p.start();
  let mut any = false;
  loop {
    if p.at_ts(MODIFIER_KW) {
      p.bump_any();
    } else if p.at(T![@]) {
      annotation(p);
    } else if at_sharing_modifier(p) {
      sharing_modifier(p);
    } else {
      break;
    }

    any = true;
  }

  if any {
    m.complete(p, MODIFIER_LIST);
  } else {
    m.abandon(p);
  }
}

fn at_sharing_modifier<S: TokenSource>(p: &Parser<S>) -> bool {
  (p.at_contextual_kw("with") || p.at_contextual_kw("without") || p.at_contextual_kw("inherited"))
    && p.nth_at_contextual_kw(1, "sharing")
}

// with sharing
// inherited sharing
fn sharing_modifier<S: TokenSource>(p: &mut Parser<S>) {
  let m = p.start();
  let kw = if p.at_contextual_kw("with") {
    T![with]
  } else if p.at_contextual_kw("without") {
    T![without]
  } else {
    T![inherited]
  };
  p.bump_remap(kw);
  p.bump_remap(T![sharing]);
  m.complete(p, SHARING_MODIFIER);
}

// @IsTest
// @IsTest(SeeAllData=true)
// @InvocableMethod(label='Get' description='Returns')
// @SuppressWarnings('PMD')
fn annotation<S: TokenSource>(p: &mut Parser<S>) {
  assert!(p.at(T![@]));
  let m = p.start();
  p.bump(T![@]);
  name_ref_or_kw(p);
  while p.at(T![.]) {
    p.bump(T![.]);
    name_ref_or_kw(p);
  }

  if p.at(T!['(']) {
    annotation_args(p);
  }

  m.complete(p, ANNOTATION);
}

fn annotation_args<S: TokenSource>(p: &mut Parser<S>) {
  assert!(p.at(T!['(']));
  let m = p.start();
  p.bump(T!['(']);

  if p.at(IDENT) && p.nth_at(1, T![=]) {
    while !p.at(EOF) && !p.at(T![')']) {
      if !p.at(IDENT) {
        p.error("expected identifier");
        break;
      }

      let pair = p.start();
      name_ref(p);
      p.expect(T![=]);
      expr_no_assign(p);
      pair.complete(p, ELEMENT_VALUE_PAIR);
      p.eat(T![,]);
    }
  } else if !p.at(T![')']) {
    expr(p);
  }

  p.expect(T![')']);
  m.complete(p, ANNOTATION_ARGS);
}

/// A class, interface or enum declaration.
pub(super) fn type_decl<S: TokenSource>(p: &mut Parser<S>) {
  let m = p.start();
  opt_modifiers(p);
  match p.current() {
    T![class] => class_decl(p, m),
    T![interface] => interface_decl(p, m),
    T![enum] => enum_decl(p, m),
    _ => {
      p.error("expected 'class', 'interface' or 'enum'");
      m.abandon(p);
    }
  }
}

fn class_decl<S: TokenSource>(p: &mut Parser<S>, m: Marker) {
  p.bump(T![class]);
  name(p);

  if p.at(T![extends]) {
    let c = p.start();
    p.bump(T![extends]);
    type_ref(p);
    c.complete(p, EXTENDS_CLAUSE);
  }

  if p.at(T![implements]) {
    let c = p.start();
    p.bump(T![implements]);
    loop {
      type_ref(p);
      if !p.eat(T![,]) {
        break;
      }
    }
    c.complete(p, IMPLEMENTS_CLAUSE);
  }

  if p.at(T!['{']) {
    class_body(p);
  } else {
    p.error("expected '{'");
  }

  m.complete(p, CLASS_DECL);
}

fn class_body<S: TokenSource>(p: &mut Parser<S>) {
  assert!(p.at(T!['{']));
  let m = p.start();
  p.bump(T!['{']);
  while !p.at(EOF) && !p.at(T!['}']) {
    class_member(p);
  }
  p.expect(T!['}']);
  m.complete(p, CLASS_BODY);
}

fn class_member<S: TokenSource>(p: &mut Parser<S>) {
  if p.at(T![;]) {
    p.bump(T![;]);
    return;
  }

  // static { }
  if p.at(T!['{']) || (p.at(T![static]) && p.nth_at(1, T!['{'])) {
    let m = p.start();
    p.eat(T![static]);
    block(p);
    m.complete(p, INITIALIZER);
    return;
  }

  let m = p.start();
  opt_modifiers(p);
  match p.current() {
    T![class] => class_decl(p, m),
    T![interface] => interface_decl(p, m),
    T![enum] => enum_decl(p, m),
    T![void] => {
      p.bump(T![void]);
      name(p);
      method_rest(p, m);
    }
    IDENT if p.nth_at(1, T!['(']) => {
      name(p);
      param_list(p);
      expect_block(p);
      m.complete(p, CONSTRUCTOR_DECL);
    }
    IDENT if at_typed_name(p, MEMBER_FOLLOW) => {
      type_ref(p);
      if p.nth_at(1, T!['(']) {
        name(p);
        method_rest(p, m);
      } else if p.nth_at(1, T!['{']) {
        name(p);
        property_body(p);
        m.complete(p, PROPERTY_DECL);
      } else {
        var_declarators(p);
        p.expect(T![;]);
        m.complete(p, FIELD_DECL);
      }
    }
    _ => {
      p.error("expected member declaration");
      if !p.at(EOF) && !p.at(T!['{']) && !p.at(T!['}']) {
        p.bump_any();
      }
      m.complete(p, PARSE_ERR);
    }
  }
}

fn method_rest<S: TokenSource>(p: &mut Parser<S>, m: Marker) {
  param_list(p);
  if p.at(T!['{']) {
    block(p);
  } else {
    p.expect(T![;]);
  }
  m.complete(p, METHOD_DECL);
}

// (String name, final Integer count)
fn param_list<S: TokenSource>(p: &mut Parser<S>) {
  let m = p.start();
  p.expect(T!['(']);
  while !p.at(EOF) && !p.at(T![')']) {
    let param = p.start();
    opt_modifiers(p);
    type_ref(p);
    name(p);
    param.complete(p, PARAM);

    if !p.at(T![')']) && !p.expect(T![,]) {
      break;
    }
  }
  p.expect(T![')']);
  m.complete(p, PARAM_LIST);
}

// { get; private set { value = v; } }
fn property_body<S: TokenSource>(p: &mut Parser<S>) {
  p.expect(T!['{']);
  while !p.at(EOF) && !p.at(T!['}']) {
    let m = p.start();
    opt_modifiers(p);

    let kw = if p.at_contextual_kw("get") {
      T![get]
    } else if p.at_contextual_kw("set") {
      T![set]
    } else {
      p.error("expected 'get' or 'set'");
      if p.at(T!['{']) {
        block(p);
      } else if !p.at(EOF) && !p.at(T!['}']) {
        p.bump_any();
      }
      m.complete(p, PARSE_ERR);
      continue;
    };

    p.bump_remap(kw);
    if p.at(T!['{']) {
      block(p);
    } else {
      p.expect(T![;]);
    }
    m.complete(p, PROPERTY_ACCESSOR);
  }
  p.expect(T!['}']);
}

/// `a = 1, b, c = a`
pub(super) fn var_declarators<S: TokenSource>(p: &mut Parser<S>) {
  loop {
    let m = p.start();
    name(p);
    if p.eat(T![=]) {
      expr(p);
    }
    m.complete(p, VAR_DECLARATOR);

    if !p.eat(T![,]) {
      break;
    }
  }
}

fn interface_decl<S: TokenSource>(p: &mut Parser<S>, m: Marker) {
  p.bump(T![interface]);
  name(p);

  if p.at(T![extends]) {
    let c = p.start();
    p.bump(T![extends]);
    loop {
      type_ref(p);
      if !p.eat(T![,]) {
        break;
      }
    }
    c.complete(p, EXTENDS_CLAUSE);
  }

  if p.at(T!['{']) {
    interface_body(p);
  } else {
    p.error("expected '{'");
  }

  m.complete(p, INTERFACE_DECL);
}

fn interface_body<S: TokenSource>(p: &mut Parser<S>) {
  assert!(p.at(T!['{']));
  let body = p.start();
  p.bump(T!['{']);
  while !p.at(EOF) && !p.at(T!['}']) {
    let m = p.start();
    opt_modifiers(p);
    if p.at(T![void]) {
      p.bump(T![void]);
      name(p);
      method_rest(p, m);
    } else if at_typed_name(p, METHOD_FOLLOW) {
      type_ref(p);
      name(p);
      method_rest(p, m);
    } else {
      p.error("expected method declaration");
      if !p.at(EOF) && !p.at(T!['{']) && !p.at(T!['}']) {
        p.bump_any();
      } else if p.at(T!['{']) {
        block(p);
      }
      m.complete(p, PARSE_ERR);
    }
  }
  p.expect(T!['}']);
  body.complete(p, INTERFACE_BODY);
}

fn enum_decl<S: TokenSource>(p: &mut Parser<S>, m: Marker) {
  p.bump(T![enum]);
  name(p);

  if p.at(T!['{']) {
    let body = p.start();
    p.bump(T!['{']);
    while !p.at(EOF) && !p.at(T!['}']) {
      if !name(p) {
        break;
      }
      if !p.at(T!['}']) && !p.expect(T![,]) {
        break;
      }
    }
    p.expect(T!['}']);
    body.complete(p, ENUM_BODY);
  } else {
    p.error("expected '{'");
  }

  m.complete(p, ENUM_DECL);
}

// trigger AccountTrigger on Account (before insert, after update) { }
pub(super) fn trigger_decl<S: TokenSource>(p: &mut Parser<S>) {
  if p.at_contextual_kw("trigger") {
    p.bump_remap(T![trigger]);
  } else {
    p.error("expected 'trigger'");
  }

  name(p);
  p.expect(T![on]);
  name_ref(p);

  p.expect(T!['(']);
  loop {
    trigger_case(p);
    if !p.eat(T![,]) {
      break;
    }
  }
  p.expect(T![')']);

  expect_block(p);
}

const TRIGGER_EVENT: TokenSet = token_set![T![insert], T![update], T![delete], T![undelete]];

fn trigger_case<S: TokenSource>(p: &mut Parser<S>) {
  let m = p.start();
  if p.at_contextual_kw("before") {
    p.bump_remap(T![before]);
  } else if p.at_contextual_kw("after") {
    p.bump_remap(T![after]);
  } else {
    p.error("expected 'before' or 'after'");
  }

  if p.at_ts(TRIGGER_EVENT) {
    p.bump_any();
  } else {
    p.error("expected 'insert', 'update', 'delete' or 'undelete'");
  }
  m.complete(p, TRIGGER_CASE);
}
