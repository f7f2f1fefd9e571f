use super::*;

/// Query keywords that can never be used as a field, object or alias name.
/// Every other keyword is accepted in name position.
const RESERVED: TokenSet = token_set![
  T![select],
  T![from],
  T![where],
  T![with],
  T![group],
  T![order],
  T![limit],
  T![offset],
  T![and],
  T![or],
  T![not],
  T![like],
  T![in],
  T![includes],
  T![excludes],
  T![having],
  T![using],
  T![asc],
  T![desc],
  T![nulls],
  T![when],
  T![then],
  T![else],
  T![end],
  T![for],
  T![update],
  T![null],
  T![true],
  T![false],
];

const VALUE_LITERAL: TokenSet = token_set![
  INT_NUMBER,
  LONG_NUMBER,
  DECIMAL_NUMBER,
  STRING,
  DATE,
  DATE_TIME,
  CURRENCY,
  DATE_CONSTANT,
  T![true],
  T![false],
  T![null],
];

const NUMBER: TokenSet = token_set![INT_NUMBER, LONG_NUMBER, DECIMAL_NUMBER, CURRENCY];

const COMPARISON_OP: TokenSet = token_set![
  T![=],
  T![!=],
  T![<>],
  T![<],
  T![>],
  T![<=],
  T![>=],
  T![like],
];

const SET_OP: TokenSet = token_set![T![in], T![includes], T![excludes]];

/// Whether the nth token can be read as a name. `ORDER` and `GROUP` are
/// names (both are standard objects) unless followed by `BY`.
pub(super) fn at_soql_name<S: TokenSource>(p: &Parser<S>, n: usize) -> bool {
  match p.nth(n) {
    IDENT | CURRENCY => true,
    T![order] | T![group] => !p.nth_at(n + 1, T![by]),
    kind => kind.is_kw() && !RESERVED.contains(kind),
  }
}

fn bump_name<S: TokenSource>(p: &mut Parser<S>) {
  p.bump_remap(IDENT);
}

// SELECT Id, Name FROM Account WHERE Name LIKE 'A%' ORDER BY Name LIMIT 10
pub(super) fn soql_query<S: TokenSource>(p: &mut Parser<S>) -> CompletedMarker {
  let m = p.start();
  p.expect(T![select]);
  select_list(p);
  from_clause(p);

  if p.at(T![using]) {
    let c = p.start();
    p.bump(T![using]);
    p.expect(T![scope]);
    soql_name(p);
    c.complete(p, USING_SCOPE_CLAUSE);
  }

  if p.at(T![where]) {
    where_clause(p);
  }

  if p.at(T![with]) {
    with_clause(p);
  }

  if p.at(T![group]) && p.nth_at(1, T![by]) {
    group_by_clause(p);
  }

  if p.at(T![order]) && p.nth_at(1, T![by]) {
    order_by_clause(p);
  }

  if p.at(T![limit]) {
    limit_clause(p);
  }

  if p.at(T![offset]) {
    offset_clause(p);
  }

  loop {
    if p.at(T![all]) && p.nth_at(1, T![rows]) {
      let c = p.start();
      p.bump(T![all]);
      p.bump(T![rows]);
      c.complete(p, ALL_ROWS_CLAUSE);
    } else if p.at(T![for]) {
      for_clause(p);
    } else if p.at(T![update]) {
      update_clause(p);
    } else {
      break;
    }
  }

  m.complete(p, QUERY)
}

fn soql_name<S: TokenSource>(p: &mut Parser<S>) {
  if at_soql_name(p, 0) {
    let m = p.start();
    bump_name(p);
    m.complete(p, NAME_REF);
  } else {
    p.error("expected identifier");
  }
}

fn select_list<S: TokenSource>(p: &mut Parser<S>) {
  let m = p.start();
  loop {
    select_field(p);
    if !p.eat(T![,]) {
      break;
    }
  }
  m.complete(p, SELECT_LIST);
}

// Id
// Account.Owner.Name
// COUNT(Id) total
// FIELDS(ALL)
// (SELECT Id FROM Contacts)
// TYPEOF What WHEN Account THEN Phone ELSE Name END
fn select_field<S: TokenSource>(p: &mut Parser<S>) {
  let m = p.start();
  if p.at(T![typeof]) {
    typeof_clause(p);
  } else if p.at(T!['(']) {
    subquery(p);
  } else if at_soql_name(p, 0) {
    field_or_function(p);
  } else {
    p.error("expected field");
  }

  if at_soql_name(p, 0) {
    let alias = p.start();
    bump_name(p);
    alias.complete(p, NAME);
  }

  m.complete(p, SELECT_FIELD);
}

pub(super) fn field_or_function<S: TokenSource>(p: &mut Parser<S>) {
  if !at_soql_name(p, 0) {
    p.error("expected field");
  } else if p.nth_at(1, T!['(']) {
    soql_function(p);
  } else {
    field_path(p);
  }
}

pub(super) fn field_path<S: TokenSource>(p: &mut Parser<S>) {
  let m = p.start();
  if at_soql_name(p, 0) {
    bump_name(p);
  } else {
    p.error("expected field");
  }

  while p.at(T![.]) && at_soql_name(p, 1) {
    p.bump(T![.]);
    bump_name(p);
  }
  m.complete(p, FIELD_PATH);
}

// DISTANCE(Location__c, GEOLOCATION(37.7, -122.4), 'mi')
fn soql_function<S: TokenSource>(p: &mut Parser<S>) {
  let m = p.start();
  bump_name(p);
  p.expect(T!['(']);
  while !p.at(EOF) && !p.at(T![')']) {
    if at_soql_name(p, 0) {
      field_or_function(p);
    } else if !soql_value(p) {
      break;
    }

    if !p.at(T![')']) && !p.expect(T![,]) {
      break;
    }
  }
  p.expect(T![')']);
  m.complete(p, SOQL_FUNCTION);
}

pub(super) fn subquery<S: TokenSource>(p: &mut Parser<S>) {
  let m = p.start();
  p.expect(T!['(']);
  soql_query(p);
  p.expect(T![')']);
  m.complete(p, SUBQUERY);
}

fn typeof_clause<S: TokenSource>(p: &mut Parser<S>) {
  assert!(p.at(T![typeof]));
  let m = p.start();
  p.bump(T![typeof]);
  field_path(p);

  while p.at(T![when]) {
    let arm = p.start();
    p.bump(T![when]);
    soql_name(p);
    p.expect(T![then]);
    field_list(p);
    arm.complete(p, TYPEOF_WHEN);
  }

  if p.at(T![else]) {
    let arm = p.start();
    p.bump(T![else]);
    field_list(p);
    arm.complete(p, TYPEOF_ELSE);
  }

  p.expect(T![end]);
  m.complete(p, TYPEOF_CLAUSE);
}

fn field_list<S: TokenSource>(p: &mut Parser<S>) {
  let m = p.start();
  loop {
    field_path(p);
    if !p.eat(T![,]) {
      break;
    }
  }
  m.complete(p, FIELD_LIST);
}

fn from_clause<S: TokenSource>(p: &mut Parser<S>) {
  if !p.at(T![from]) {
    p.error("expected 'from'");
    return;
  }

  let m = p.start();
  p.bump(T![from]);
  loop {
    let entry = p.start();
    field_path(p);
    if at_soql_name(p, 0) && !(p.at(T![all]) && p.nth_at(1, T![rows])) {
      let alias = p.start();
      bump_name(p);
      alias.complete(p, NAME);
    }
    entry.complete(p, FROM_ENTRY);

    if !p.eat(T![,]) {
      break;
    }
  }
  m.complete(p, FROM_CLAUSE);
}

pub(super) fn where_clause<S: TokenSource>(p: &mut Parser<S>) {
  assert!(p.at(T![where]));
  let m = p.start();
  p.bump(T![where]);
  soql_condition(p);
  m.complete(p, WHERE_CLAUSE);
}

// WITH SECURITY_ENFORCED
// WITH USER_MODE
// WITH DATA CATEGORY Geography__c AT (usa__c, uk__c) AND Product__c BELOW all__c
fn with_clause<S: TokenSource>(p: &mut Parser<S>) {
  assert!(p.at(T![with]));
  let m = p.start();
  p.bump(T![with]);
  match p.current() {
    T![security_enforced] | T![user_mode] | T![system_mode] => p.bump_any(),
    T![data] if p.nth_at(1, T![category]) => data_category(p),
    _ => {
      soql_condition(p);
    }
  }
  m.complete(p, WITH_CLAUSE);
}

pub(super) fn data_category<S: TokenSource>(p: &mut Parser<S>) {
  p.bump(T![data]);
  p.bump(T![category]);
  loop {
    let m = p.start();
    soql_name(p);
    match p.current() {
      T![at] | T![above] | T![below] | T![above_or_below] => p.bump_any(),
      _ => p.error("expected 'at', 'above', 'below' or 'above_or_below'"),
    }

    if p.eat(T!['(']) {
      loop {
        soql_name(p);
        if !p.eat(T![,]) {
          break;
        }
      }
      p.expect(T![')']);
    } else {
      soql_name(p);
    }
    m.complete(p, DATA_CATEGORY_FILTER);

    if !p.eat(T![and]) {
      break;
    }
  }
}

// GROUP BY ROLLUP(Type, Industry) HAVING COUNT(Id) > 1
fn group_by_clause<S: TokenSource>(p: &mut Parser<S>) {
  let m = p.start();
  p.bump(T![group]);
  p.bump(T![by]);

  let grouping = (p.at(T![rollup]) || p.at(T![cube])) && p.nth_at(1, T!['(']);
  if grouping {
    p.bump_any();
    p.bump(T!['(']);
  }

  loop {
    field_or_function(p);
    if !p.eat(T![,]) {
      break;
    }
  }

  if grouping {
    p.expect(T![')']);
  }

  if p.at(T![having]) {
    let c = p.start();
    p.bump(T![having]);
    soql_condition(p);
    c.complete(p, HAVING_CLAUSE);
  }

  m.complete(p, GROUP_BY_CLAUSE);
}

// ORDER BY Name DESC NULLS LAST, CreatedDate
pub(super) fn order_by_clause<S: TokenSource>(p: &mut Parser<S>) {
  let m = p.start();
  p.bump(T![order]);
  p.bump(T![by]);
  loop {
    let field = p.start();
    field_or_function(p);
    if p.at(T![asc]) || p.at(T![desc]) {
      p.bump_any();
    }
    if p.eat(T![nulls]) {
      if p.at(T![first]) || p.at(T![last]) {
        p.bump_any();
      } else {
        p.error("expected 'first' or 'last'");
      }
    }
    field.complete(p, ORDER_BY_FIELD);

    if !p.eat(T![,]) {
      break;
    }
  }
  m.complete(p, ORDER_BY_CLAUSE);
}

pub(super) fn limit_clause<S: TokenSource>(p: &mut Parser<S>) {
  assert!(p.at(T![limit]));
  let m = p.start();
  p.bump(T![limit]);
  soql_value(p);
  m.complete(p, LIMIT_CLAUSE);
}

pub(super) fn offset_clause<S: TokenSource>(p: &mut Parser<S>) {
  assert!(p.at(T![offset]));
  let m = p.start();
  p.bump(T![offset]);
  soql_value(p);
  m.complete(p, OFFSET_CLAUSE);
}

// FOR VIEW
// FOR REFERENCE, UPDATE
fn for_clause<S: TokenSource>(p: &mut Parser<S>) {
  assert!(p.at(T![for]));
  let m = p.start();
  p.bump(T![for]);
  loop {
    match p.current() {
      T![view] | T![reference] | T![update] => p.bump_any(),
      _ => {
        p.error("expected 'view', 'reference' or 'update'");
        break;
      }
    }
    if !p.eat(T![,]) {
      break;
    }
  }
  m.complete(p, FOR_CLAUSE);
}

// UPDATE TRACKING
// UPDATE VIEWSTAT
pub(super) fn update_clause<S: TokenSource>(p: &mut Parser<S>) {
  assert!(p.at(T![update]));
  let m = p.start();
  p.bump(T![update]);
  loop {
    match p.current() {
      T![tracking] | T![viewstat] => p.bump_any(),
      _ => {
        p.error("expected 'tracking' or 'viewstat'");
        break;
      }
    }
    if !p.eat(T![,]) {
      break;
    }
  }
  m.complete(p, UPDATE_CLAUSE);
}

/// `a OR b`, where each side is a conjunction.
pub(super) fn soql_condition<S: TokenSource>(p: &mut Parser<S>) -> Option<CompletedMarker> {
  let mut lhs = and_condition(p)?;
  while p.at(T![or]) {
    let m = lhs.precede(p);
    p.bump(T![or]);
    and_condition(p);
    lhs = m.complete(p, SOQL_LOGICAL_EXPR);
  }
  Some(lhs)
}

fn and_condition<S: TokenSource>(p: &mut Parser<S>) -> Option<CompletedMarker> {
  let mut lhs = not_condition(p)?;
  while p.at(T![and]) {
    let m = lhs.precede(p);
    p.bump(T![and]);
    not_condition(p);
    lhs = m.complete(p, SOQL_LOGICAL_EXPR);
  }
  Some(lhs)
}

fn not_condition<S: TokenSource>(p: &mut Parser<S>) -> Option<CompletedMarker> {
  if !p.at(T![not]) {
    return primary_condition(p);
  }

  let m = p.start();
  p.bump(T![not]);
  not_condition(p);
  Some(m.complete(p, SOQL_NOT_EXPR))
}

fn primary_condition<S: TokenSource>(p: &mut Parser<S>) -> Option<CompletedMarker> {
  if p.at(T!['(']) {
    let m = p.start();
    p.bump(T!['(']);
    soql_condition(p);
    p.expect(T![')']);
    return Some(m.complete(p, SOQL_PAREN_COND));
  }

  if !at_soql_name(p, 0) {
    p.error("expected condition");
    return None;
  }

  // Name = 'x'
  // Id IN :ids
  // Industry NOT IN ('a', 'b')
  // Interests__c INCLUDES ('golf;tennis')
  let m = p.start();
  field_or_function(p);

  if p.at_ts(COMPARISON_OP) {
    p.bump_any();
    soql_value(p);
  } else if p.at_ts(SET_OP) || p.at(T![not]) && p.nth_at(1, T![in]) {
    if p.eat(T![not]) {
      p.bump(T![in]);
    } else {
      p.bump_any();
    }
    set_value(p);
  } else {
    p.error("expected comparison operator");
  }

  Some(m.complete(p, SOQL_COMPARISON))
}

fn set_value<S: TokenSource>(p: &mut Parser<S>) {
  if p.at(T![:]) {
    soql_bind(p);
  } else if p.at(T!['(']) && p.nth_at(1, T![select]) {
    subquery(p);
  } else if p.at(T!['(']) {
    value_list(p);
  } else {
    p.error("expected '(' or bind expression");
  }
}

// ('a', 'b', :extra)
pub(super) fn value_list<S: TokenSource>(p: &mut Parser<S>) {
  let m = p.start();
  p.expect(T!['(']);
  while !p.at(EOF) && !p.at(T![')']) {
    if !soql_value(p) {
      break;
    }
    if !p.at(T![')']) && !p.expect(T![,]) {
      break;
    }
  }
  p.expect(T![')']);
  m.complete(p, SOQL_VALUE_LIST);
}

/// A value on the right hand side of a comparison, `LIMIT` or `OFFSET`.
pub(super) fn soql_value<S: TokenSource>(p: &mut Parser<S>) -> bool {
  match p.current() {
    T![:] => soql_bind(p),

    // -100.123
    T![-] | T![+] if p.nth_at_ts(1, NUMBER) => {
      let m = p.start();
      p.bump_any();
      p.bump_any();
      m.complete(p, SOQL_LITERAL);
    }

    kind if VALUE_LITERAL.contains(kind) => {
      let m = p.start();
      p.bump_any();
      m.complete(p, SOQL_LITERAL);
    }

    // LAST_N_DAYS:30
    DATE_FORMULA => {
      let m = p.start();
      p.bump(DATE_FORMULA);
      p.expect(T![:]);
      p.expect(INT_NUMBER);
      m.complete(p, SOQL_DATE_FORMULA);
    }

    T!['('] if p.nth_at(1, T![select]) => subquery(p),

    _ => {
      p.error("expected value");
      return false;
    }
  }

  true
}

/// `:expr`, an Apex expression evaluated at run time.
pub(super) fn soql_bind<S: TokenSource>(p: &mut Parser<S>) {
  assert!(p.at(T![:]));
  let m = p.start();
  p.bump(T![:]);
  expr_no_assign(p);
  m.complete(p, SOQL_BIND);
}
