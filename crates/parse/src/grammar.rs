mod atom;
mod expr;
mod items;
mod query;
mod search;
mod stmts;
mod types;

use crate::{
  parser::{CompletedMarker, Marker, Parser},
  EntryPoint,
  SyntaxKind::{self, *},
  TokenSet, TokenSource,
};

use atom::*;
use expr::*;
use items::*;
use query::*;
use search::*;
use stmts::*;
use types::*;

pub(crate) fn root<S: TokenSource>(p: &mut Parser<S>, entry: EntryPoint, require_eof: bool) {
  let m = p.start();
  let kind = match entry {
    EntryPoint::CompilationUnit => {
      type_decl(p);
      COMPILATION_UNIT
    }
    EntryPoint::TriggerUnit => {
      trigger_decl(p);
      TRIGGER_UNIT
    }
    EntryPoint::Statement => {
      stmt(p, StmtContext::Generic);
      STMT_FRAGMENT
    }
    EntryPoint::Expression => {
      expr(p);
      EXPR_FRAGMENT
    }
    EntryPoint::Query => {
      if p.at(T![find]) {
        sosl_query(p);
      } else {
        soql_query(p);
      }
      QUERY_FRAGMENT
    }
    EntryPoint::Literal => {
      literal(p);
      LITERAL_FRAGMENT
    }
  };

  let whole_file = match entry {
    EntryPoint::CompilationUnit | EntryPoint::TriggerUnit => true,
    _ => false,
  };

  if whole_file || require_eof {
    expect_eof(p);
  }

  m.complete(p, kind);
}

/// Everything left over is wrapped in a single error node.
fn expect_eof<S: TokenSource>(p: &mut Parser<S>) {
  if p.at(EOF) {
    return;
  }

  let m = p.start();
  p.error("expected end of input");
  while !p.at(EOF) {
    p.bump_any();
  }
  m.complete(p, PARSE_ERR);
}

/// `NAME` node holding a declared identifier.
fn name<S: TokenSource>(p: &mut Parser<S>) -> bool {
  if !p.at(IDENT) {
    p.error("expected identifier");
    return false;
  }

  let m = p.start();
  p.bump(IDENT);
  m.complete(p, NAME);
  true
}

/// `NAME_REF` node holding a referenced identifier.
fn name_ref<S: TokenSource>(p: &mut Parser<S>) -> bool {
  if !p.at(IDENT) {
    p.error("expected identifier");
    return false;
  }

  let m = p.start();
  p.bump(IDENT);
  m.complete(p, NAME_REF);
  true
}

/// Like `name_ref`, but keywords are accepted and recorded as identifiers
/// (`Trigger.new`, `Database.insert`).
fn name_ref_or_kw<S: TokenSource>(p: &mut Parser<S>) -> bool {
  if !p.at(IDENT) && !p.current().is_kw() {
    p.error("expected identifier");
    return false;
  }

  let m = p.start();
  p.bump_remap(IDENT);
  m.complete(p, NAME_REF);
  true
}
