use super::*;

// FIND {Acme*} IN NAME FIELDS
//   RETURNING Account(Id, Name WHERE Industry = 'Tech' ORDER BY Name LIMIT 5), Contact
//   WITH DIVISION = 'Global'
//   LIMIT 20
pub(super) fn sosl_query<S: TokenSource>(p: &mut Parser<S>) -> CompletedMarker {
  let m = p.start();
  p.expect(T![find]);

  match p.current() {
    SEARCH_TERM | STRING => p.bump_any(),
    T![:] => soql_bind(p),
    _ => p.error("expected search term"),
  }

  if p.at(T![in]) {
    let c = p.start();
    p.bump(T![in]);
    if at_soql_name(p, 0) {
      p.bump_remap(IDENT);
    } else {
      p.error("expected search group");
    }
    p.expect(T![fields]);
    c.complete(p, SEARCH_GROUP);
  }

  if p.at(T![returning]) {
    let c = p.start();
    p.bump(T![returning]);
    loop {
      returning_spec(p);
      if !p.eat(T![,]) {
        break;
      }
    }
    c.complete(p, RETURNING_CLAUSE);
  }

  while p.at(T![with]) {
    sosl_with_clause(p);
  }

  if p.at(T![limit]) {
    limit_clause(p);
  }

  if p.at(T![update]) {
    update_clause(p);
  }

  m.complete(p, SOSL_QUERY)
}

fn returning_spec<S: TokenSource>(p: &mut Parser<S>) {
  let m = p.start();
  if at_soql_name(p, 0) {
    let name = p.start();
    p.bump_remap(IDENT);
    name.complete(p, NAME_REF);
  } else {
    p.error("expected object name");
  }

  if p.at(T!['(']) {
    p.bump(T!['(']);

    let fields = p.start();
    loop {
      field_or_function(p);
      if !p.eat(T![,]) {
        break;
      }
    }
    fields.complete(p, FIELD_LIST);

    if p.at(T![where]) {
      where_clause(p);
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

    p.expect(T![')']);
  }

  m.complete(p, RETURNING_SPEC);
}

// WITH SNIPPET
// WITH SPELL_CORRECTION = false
// WITH METADATA = 'LABELS'
// WITH NETWORK IN ('a', 'b')
// WITH SNIPPET (target_length = 120)
// WITH DATA CATEGORY Location__c AT America__c
fn sosl_with_clause<S: TokenSource>(p: &mut Parser<S>) {
  assert!(p.at(T![with]));
  let m = p.start();
  p.bump(T![with]);

  if p.at(T![data]) && p.nth_at(1, T![category]) {
    data_category(p);
    m.complete(p, SOSL_WITH_CLAUSE);
    return;
  }

  if at_soql_name(p, 0) {
    p.bump_any();
  } else {
    p.error("expected option name");
  }

  if p.eat(T![=]) {
    soql_value(p);
  } else if p.at(T![in]) {
    p.bump(T![in]);
    value_list(p);
  } else if p.at(T!['(']) {
    p.bump(T!['(']);
    while !p.at(EOF) && !p.at(T![')']) {
      if !at_soql_name(p, 0) {
        p.error("expected option name");
        break;
      }
      p.bump_remap(IDENT);
      p.expect(T![=]);
      soql_value(p);
      if !p.at(T![')']) && !p.expect(T![,]) {
        break;
      }
    }
    p.expect(T![')']);
  }

  m.complete(p, SOSL_WITH_CLAUSE);
}
