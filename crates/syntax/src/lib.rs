//! Syntax tree library for the Apex language.
//!
//! Properties:
//!   - case-insensitive keywords, with SOQL and SOSL queries embedded in
//!     `[...]` brackets lexed in their own mode
//!   - graceful handling of errors: every parse yields a tree, errors are
//!     collected alongside it
//!   - full-fidelity representation (*any* text can be precisely represented as
//!     a syntax tree)
//!
//! The most interesting modules here are `syntax_node` (which defines concrete
//! syntax tree) and `ast` (which defines abstract syntax tree on top of the
//! CST). The actual parser live in a separate `apex-parse` crate, and the lexer
//! lives in the `apex-lex` crate (though some mapping of lexing types lives
//! in this crate).

mod line_index;
mod options;
mod parse;
mod parser;
mod syntax_error;
mod syntax_node;

pub mod ast;
pub mod listener;

#[cfg(test)]
mod tests;

use core::marker::PhantomData;

pub use crate::{
  ast::AstNode,
  line_index::LineCol,
  listener::{ErrorListener, SyntaxErrorCounter},
  options::ParseOptions,
  parse::{tokenize, tokenize_with_mode, LexMode, Token},
  parser::ApexParser,
  syntax_error::{ResourceError, SyntaxError, SyntaxErrorKind, SyntaxErrors},
  syntax_node::{
    ApexLanguage, GreenNode, SyntaxElement, SyntaxElementChildren, SyntaxNode,
    SyntaxNodeChildren, SyntaxToken, SyntaxTreeBuilder,
  },
};

pub use apex_parse::{EntryPoint, SyntaxKind, T};
pub use rowan::{SmolStr, SyntaxText, TextRange, TextSize, TokenAtOffset, WalkEvent};

/// The result of a parse: a syntax tree plus the errors found building it.
///
/// A tree is produced even when errors are present. `T` is the typed root
/// the entry point produces.
#[derive(Debug, PartialEq, Eq)]
pub struct ParseResult<T> {
  green: GreenNode,
  errors: Vec<SyntaxError>,
  _ty: PhantomData<fn() -> T>,
}

impl<T> Clone for ParseResult<T> {
  fn clone(&self) -> ParseResult<T> {
    ParseResult {
      green: self.green.clone(),
      errors: self.errors.clone(),
      _ty: PhantomData,
    }
  }
}

impl<T> ParseResult<T> {
  pub(crate) fn new(green: GreenNode, errors: Vec<SyntaxError>) -> ParseResult<T> {
    ParseResult {
      green,
      errors,
      _ty: PhantomData,
    }
  }

  pub fn green(&self) -> &GreenNode {
    &self.green
  }

  pub fn syntax_node(&self) -> SyntaxNode {
    SyntaxNode::new_root(self.green.clone())
  }

  /// Lexical errors first, then syntax errors, each group in source order.
  pub fn errors(&self) -> &[SyntaxError] {
    &self.errors
  }

  pub fn error_count(&self) -> usize {
    self.errors.len()
  }
}

impl<T: AstNode> ParseResult<T> {
  pub fn tree(&self) -> T {
    match T::cast(self.syntax_node()) {
      Some(tree) => tree,
      None => unreachable!("root node does not match its entry point"),
    }
  }

  /// The tree, or every error if there was at least one.
  pub fn ok(self) -> Result<T, SyntaxErrors> {
    if self.errors.is_empty() {
      Ok(self.tree())
    } else {
      Err(SyntaxErrors(self.errors))
    }
  }
}

/// Parses a class, interface or enum declaration.
pub fn parse_compilation_unit(
  text: &str,
) -> Result<ParseResult<ast::CompilationUnit>, ResourceError> {
  ApexParser::new().parse_compilation_unit(text)
}

/// Parses a trigger declaration.
pub fn parse_trigger_unit(text: &str) -> Result<ParseResult<ast::TriggerUnit>, ResourceError> {
  ApexParser::new().parse_trigger_unit(text)
}

pub fn parse_statement(text: &str) -> Result<ParseResult<ast::StmtFragment>, ResourceError> {
  ApexParser::new().parse_statement(text)
}

pub fn parse_expression(text: &str) -> Result<ParseResult<ast::ExprFragment>, ResourceError> {
  ApexParser::new().parse_expression(text)
}

/// Parses a bare SOQL or SOSL query, `SELECT Id FROM Account` or
/// `FIND 'term' RETURNING Account`.
pub fn parse_query(text: &str) -> Result<ParseResult<ast::QueryFragment>, ResourceError> {
  ApexParser::new().parse_query(text)
}

pub fn parse_literal(text: &str) -> Result<ParseResult<ast::LiteralFragment>, ResourceError> {
  ApexParser::new().parse_literal(text)
}
