//! Grammar of the Apex language and its query sub-languages.
//!
//! The parser is independent of any concrete tree or token representation:
//! it pulls tokens from a [`TokenSource`] and pushes nodes into a
//! [`TreeSink`].

#![recursion_limit = "512"]

#[macro_use]
mod syntax_kind;
#[macro_use]
mod token_set;
mod event;
mod grammar;
mod parser;

pub(crate) use token_set::TokenSet;

pub use syntax_kind::SyntaxKind;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParseError(pub String);

/// `TokenSource` abstracts the source of the tokens parser operates on.
pub trait TokenSource {
  fn current(&self) -> Token;

  /// Lookahead n token
  fn lookahead_nth(&self, n: usize) -> Token;

  /// bump cursor to next token
  fn bump(&mut self);

  /// Is the nth token an identifier spelled `kw`, ignoring ASCII case?
  fn is_contextual_kw(&self, n: usize, kw: &str) -> bool;
}

/// `Token` abstracts the cursor of `TokenSource` operates on.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Token {
  /// What is the current token?
  pub kind: SyntaxKind,

  /// Is the current token joined to the next one (`> >` vs `>>`).
  pub is_jointed_to_next: bool,
}

/// `TreeSink` abstracts details of a particular syntax tree implementation.
pub trait TreeSink {
  /// Adds new token to the current branch.
  fn token(&mut self, kind: SyntaxKind, n_raw_tokens: u8);

  /// Start new branch and make it current.
  fn start_node(&mut self, kind: SyntaxKind);

  /// Finish current branch and restore previous
  /// branch as current.
  fn finish_node(&mut self);

  fn error(&mut self, error: ParseError);
}

/// The grammar production parsing starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryPoint {
  /// A class, interface or enum declaration.
  CompilationUnit,
  /// `trigger Name on Object (events) { ... }`
  TriggerUnit,
  /// A single statement.
  Statement,
  /// A single expression.
  Expression,
  /// A SOQL or SOSL query without the surrounding brackets.
  Query,
  /// A single literal.
  Literal,
}

/// Knobs for a single parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
  /// Maximum number of syntax nodes open at the same time.
  pub recursion_limit: u32,

  /// Report trailing input after a statement, expression, query or literal
  /// fragment. Compilation and trigger units always require it.
  pub require_eof: bool,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      recursion_limit: 256,
      require_eof: false,
    }
  }
}

/// How a parse ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
  /// The whole production was parsed and replayed into the sink.
  Complete,
  /// Nesting exceeded `Config::recursion_limit`. Nothing was written to the
  /// sink.
  RecursionLimitReached,
}

/// Parse given tokens into the given sink, starting from `entry`.
pub fn parse(
  token_source: &mut impl TokenSource,
  tree_sink: &mut impl TreeSink,
  entry: EntryPoint,
  config: &Config,
) -> Completion {
  let mut p = parser::Parser::new(token_source, config.recursion_limit);
  grammar::root(&mut p, entry, config.require_eof);
  let (events, limit_hit) = p.finish();
  if limit_hit {
    return Completion::RecursionLimitReached;
  }

  event::process(tree_sink, events);
  Completion::Complete
}

#[cfg(test)]
mod tests {
  use super::*;
  use test_case::test_case;

  use SyntaxKind::*;

  struct Tokens {
    tokens: Vec<(SyntaxKind, bool)>,
    pos: usize,
  }

  impl Tokens {
    fn new(tokens: &[(SyntaxKind, bool)]) -> Self {
      Tokens {
        tokens: tokens.to_vec(),
        pos: 0,
      }
    }
  }

  impl TokenSource for Tokens {
    fn current(&self) -> Token {
      self.lookahead_nth(0)
    }

    fn lookahead_nth(&self, n: usize) -> Token {
      match self.tokens.get(self.pos + n) {
        Some(&(kind, is_jointed_to_next)) => Token {
          kind,
          is_jointed_to_next,
        },
        None => Token {
          kind: EOF,
          is_jointed_to_next: false,
        },
      }
    }

    fn bump(&mut self) {
      if self.pos < self.tokens.len() {
        self.pos += 1;
      }
    }

    fn is_contextual_kw(&self, _n: usize, _kw: &str) -> bool {
      false
    }
  }

  #[derive(Default)]
  struct Sink {
    out: Vec<String>,
    errors: Vec<String>,
  }

  impl TreeSink for Sink {
    fn token(&mut self, kind: SyntaxKind, n_raw_tokens: u8) {
      self.out.push(format!("{:?}/{}", kind, n_raw_tokens));
    }

    fn start_node(&mut self, kind: SyntaxKind) {
      self.out.push(format!("{:?}(", kind));
    }

    fn finish_node(&mut self) {
      self.out.push(")".into());
    }

    fn error(&mut self, error: ParseError) {
      self.errors.push(error.0);
    }
  }

  fn run(tokens: &[(SyntaxKind, bool)], entry: EntryPoint, config: &Config) -> (Completion, Sink) {
    let mut source = Tokens::new(tokens);
    let mut sink = Sink::default();
    let completion = parse(&mut source, &mut sink, entry, config);
    (completion, sink)
  }

  #[test]
  fn joint_greater_than_is_a_shift() {
    let (_, sink) = run(
      &[(IDENT, false), (T![>], true), (T![>], false), (INT_NUMBER, false)],
      EntryPoint::Expression,
      &Config::default(),
    );

    assert!(sink.errors.is_empty());
    assert!(sink.out.contains(&"SHR_OP/2".to_string()));
  }

  #[test]
  fn separated_greater_than_is_not_a_shift() {
    let (_, sink) = run(
      &[(IDENT, false), (T![>], false), (T![>], false), (INT_NUMBER, false)],
      EntryPoint::Expression,
      &Config::default(),
    );

    assert!(!sink.errors.is_empty());
    assert!(!sink.out.iter().any(|t| t.starts_with("SHR_OP")));
  }

  #[test_case(10, Completion::RecursionLimitReached ; "shallow_limit")]
  #[test_case(256, Completion::Complete ; "default_limit")]
  fn recursion_limit(limit: u32, expected: Completion) {
    let mut tokens = vec![(T!['('], false); 40];
    tokens.push((INT_NUMBER, false));
    tokens.extend(vec![(T![')'], false); 40]);

    let config = Config {
      recursion_limit: limit,
      require_eof: true,
    };
    let (completion, sink) = run(&tokens, EntryPoint::Expression, &config);
    assert_eq!(completion, expected);
    if expected == Completion::RecursionLimitReached {
      assert!(sink.out.is_empty());
    } else {
      assert!(sink.errors.is_empty());
    }
  }

  #[test]
  fn generic_lookahead_counts_towards_limit() {
    let mut tokens = Vec::new();
    for _ in 0..1000 {
      tokens.push((IDENT, false));
      tokens.push((T![<], false));
    }
    tokens.push((IDENT, false));
    tokens.push((T![;], false));

    let (completion, sink) = run(&tokens, EntryPoint::Statement, &Config::default());
    assert_eq!(completion, Completion::RecursionLimitReached);
    assert!(sink.out.is_empty());
  }

  #[test_case(&[(T!['('], false), (IDENT, false), (T![;], false)], "expected ')'" ; "paren")]
  #[test_case(&[(IDENT, false), (T!['('], false), (T![;], false)], "expected ')'" ; "empty_arguments")]
  fn missing_closer_is_one_error(tokens: &[(SyntaxKind, bool)], expected: &str) {
    let (_, sink) = run(tokens, EntryPoint::Expression, &Config::default());
    assert_eq!(sink.errors, vec![expected.to_string()]);
  }

  #[test]
  fn trailing_input_is_reported_on_demand() {
    let tokens = [(INT_NUMBER, false), (INT_NUMBER, false)];

    let (_, lenient) = run(&tokens, EntryPoint::Literal, &Config::default());
    assert!(lenient.errors.is_empty());

    let strict = Config {
      require_eof: true,
      ..Config::default()
    };
    let (_, strict) = run(&tokens, EntryPoint::Literal, &strict);
    assert_eq!(strict.errors, vec!["expected end of input".to_string()]);
  }
}
