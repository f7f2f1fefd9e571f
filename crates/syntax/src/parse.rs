mod lex;
mod token_sink;
mod token_source;

use core::convert::TryFrom;

use apex_parse::{Completion, EntryPoint};
use tracing::{trace, warn};

use crate::{
  line_index::LineIndex, listener::ErrorListener, syntax_node::GreenNode, ParseOptions,
  ResourceError, SyntaxError, SyntaxErrorKind, SyntaxKind,
};
use token_sink::TextTreeSink;
use token_source::TextTokenSource;

pub use lex::*;

/// Lexer mode an entry point starts in.
pub(crate) fn lex_mode(entry: EntryPoint) -> LexMode {
  match entry {
    EntryPoint::Query => LexMode::Query,
    _ => LexMode::Apex,
  }
}

/// Tokens the grammar never sees: trivia, and characters the lexer already
/// reported as invalid.
pub(crate) fn is_skipped(kind: SyntaxKind) -> bool {
  kind.is_trivia() || kind == SyntaxKind::PARSE_ERR
}

pub(crate) fn check_len(text: &str) -> Result<(), ResourceError> {
  match u32::try_from(text.len()) {
    Ok(_) => Ok(()),
    Err(_) => Err(ResourceError::InputTooLarge { len: text.len() }),
  }
}

pub(crate) fn parse_text(
  text: &str,
  entry: EntryPoint,
  options: &ParseOptions,
) -> Result<(GreenNode, Vec<SyntaxError>), ResourceError> {
  check_len(text)?;

  let (tokens, lexer_errors) = tokenize_with_mode(text, lex_mode(entry));
  let (tree, parser_errors) = parse_token_stream(text, &tokens, entry, options)?;

  let mut errors = lexer_errors;
  errors.extend(parser_errors);
  Ok((tree, errors))
}

/// Hands the errors of a finished parse to `listener`, in order.
pub(crate) fn report(errors: &[SyntaxError], listener: &mut dyn ErrorListener) {
  for error in errors {
    trace!(
      kind = ?error.kind(),
      line = error.line(),
      column = error.column(),
      message = error.message(),
      "reporting error"
    );
    match error.kind() {
      SyntaxErrorKind::Lexical => listener.lexical_error(error),
      SyntaxErrorKind::Syntax => listener.syntax_error(error),
    }
  }
}

/// Parses tokens produced ahead of time. Their lengths have to add up to the
/// length of `text`.
pub(crate) fn parse_token_stream(
  text: &str,
  tokens: &[Token],
  entry: EntryPoint,
  options: &ParseOptions,
) -> Result<(GreenNode, Vec<SyntaxError>), ResourceError> {
  check_len(text)?;

  let covered = tokens
    .iter()
    .fold(0usize, |acc, token| acc.saturating_add(usize::from(token.len)));
  let mut offset = 0usize;
  let aligned = covered == text.len()
    && tokens.iter().all(|token| {
      offset += usize::from(token.len);
      text.is_char_boundary(offset)
    });
  if !aligned {
    return Err(ResourceError::TokenMismatch {
      tokens: covered,
      text: text.len(),
    });
  }

  let index = LineIndex::new(text);
  let mut token_source = TextTokenSource::new(text, tokens);
  let mut tree_sink = TextTreeSink::new(text, tokens, &index);

  let completion = apex_parse::parse(
    &mut token_source,
    &mut tree_sink,
    entry,
    &options.to_config(),
  );

  if completion == Completion::RecursionLimitReached {
    warn!(
      limit = options.recursion_limit,
      "parse aborted: recursion limit reached"
    );
    return Err(ResourceError::RecursionLimit {
      limit: options.recursion_limit,
    });
  }

  Ok(tree_sink.finish())
}
