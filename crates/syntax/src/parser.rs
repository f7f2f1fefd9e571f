use tracing::{debug, debug_span};

use crate::{
  ast::{self, AstNode},
  listener::ErrorListener,
  parse::{self, Token},
  EntryPoint, GreenNode, ParseOptions, ParseResult, ResourceError, SyntaxError,
};

/// Configurable entry point into the parser.
///
/// ```
/// use apex_syntax::{ApexParser, ParseOptions, SyntaxErrorCounter};
///
/// let mut counter = SyntaxErrorCounter::new();
/// let parse = ApexParser::new()
///   .options(ParseOptions::new().require_eof(true))
///   .listener(&mut counter)
///   .parse_expression("a + b")
///   .unwrap();
///
/// assert_eq!(parse.error_count(), 0);
/// assert_eq!(counter.error_count(), 0);
/// ```
#[derive(Default)]
pub struct ApexParser<'l> {
  options: ParseOptions,
  listener: Option<&'l mut dyn ErrorListener>,
}

impl<'l> ApexParser<'l> {
  pub fn new() -> Self {
    ApexParser {
      options: ParseOptions::default(),
      listener: None,
    }
  }

  pub fn options(mut self, options: ParseOptions) -> Self {
    self.options = options;
    self
  }

  /// Notify `listener` of every error found by the following parses. A
  /// parse that fails with a [`ResourceError`] notifies nothing.
  pub fn listener(mut self, listener: &'l mut dyn ErrorListener) -> Self {
    self.listener = Some(listener);
    self
  }

  pub fn parse_compilation_unit(
    &mut self,
    text: &str,
  ) -> Result<ParseResult<ast::CompilationUnit>, ResourceError> {
    self.run(text, EntryPoint::CompilationUnit)
  }

  pub fn parse_trigger_unit(
    &mut self,
    text: &str,
  ) -> Result<ParseResult<ast::TriggerUnit>, ResourceError> {
    self.run(text, EntryPoint::TriggerUnit)
  }

  pub fn parse_statement(
    &mut self,
    text: &str,
  ) -> Result<ParseResult<ast::StmtFragment>, ResourceError> {
    self.run(text, EntryPoint::Statement)
  }

  pub fn parse_expression(
    &mut self,
    text: &str,
  ) -> Result<ParseResult<ast::ExprFragment>, ResourceError> {
    self.run(text, EntryPoint::Expression)
  }

  /// Parses a SOQL or SOSL query written without the surrounding brackets.
  pub fn parse_query(
    &mut self,
    text: &str,
  ) -> Result<ParseResult<ast::QueryFragment>, ResourceError> {
    self.run(text, EntryPoint::Query)
  }

  pub fn parse_literal(
    &mut self,
    text: &str,
  ) -> Result<ParseResult<ast::LiteralFragment>, ResourceError> {
    self.run(text, EntryPoint::Literal)
  }

  pub fn parse(
    &mut self,
    text: &str,
    entry: EntryPoint,
  ) -> Result<ParseResult<ast::Root>, ResourceError> {
    self.run(text, entry)
  }

  /// Parses tokens obtained from [`tokenize`](crate::tokenize) or
  /// [`tokenize_with_mode`](crate::tokenize_with_mode). Lexical errors of
  /// those tokens are not reported again.
  pub fn parse_tokens(
    &mut self,
    text: &str,
    tokens: &[Token],
    entry: EntryPoint,
  ) -> Result<ParseResult<ast::Root>, ResourceError> {
    let span = debug_span!("parse_tokens", ?entry, len = text.len(), tokens = tokens.len());
    let _enter = span.enter();

    let (green, errors) = parse::parse_token_stream(text, tokens, entry, &self.options)?;
    self.finish(green, errors)
  }

  fn run<T: AstNode>(
    &mut self,
    text: &str,
    entry: EntryPoint,
  ) -> Result<ParseResult<T>, ResourceError> {
    let span = debug_span!("parse", ?entry, len = text.len());
    let _enter = span.enter();

    let (green, errors) = parse::parse_text(text, entry, &self.options)?;
    self.finish(green, errors)
  }

  fn finish<T>(
    &mut self,
    green: GreenNode,
    errors: Vec<SyntaxError>,
  ) -> Result<ParseResult<T>, ResourceError> {
    debug!(errors = errors.len(), "parsed");
    if let Some(listener) = &mut self.listener {
      parse::report(&errors, &mut **listener);
    }

    Ok(ParseResult::new(green, errors))
  }
}
