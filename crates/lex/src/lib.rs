#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

use alloc::collections::VecDeque;
use logos::Logos;

mod keyword;
mod query;

pub mod unescape;

pub use keyword::Keyword;

use query::DateLen;

#[derive(Logos, Debug, PartialEq)]
enum RawToken {
  #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
  Ident,

  #[regex(r"[0-9]+")]
  Integer,

  #[regex(r"[0-9]+[lL]")]
  Long,

  #[regex(r"[0-9]*\.[0-9]+[dD]?")]
  #[regex(r"[0-9]+[dD]")]
  Decimal,

  #[regex(r"'(?:[^'\\\r\n]|\\.)*'")]
  String,

  #[regex(r"'(?:[^'\\\r\n]|\\.)*")]
  ErrorStringUnterminated,

  #[token("(")]
  SymbolLeftParen,

  #[token(")")]
  SymbolRightParen,

  #[token("{")]
  SymbolLeftBrace,

  #[token("}")]
  SymbolRightBrace,

  #[token("[")]
  SymbolLeftBracket,

  #[token("]")]
  SymbolRightBracket,

  #[token(";")]
  SymbolSemi,

  #[token(",")]
  SymbolComma,

  #[token(".")]
  SymbolDot,

  #[token("?.")]
  SymbolSafeDot,

  #[token("@")]
  SymbolAt,

  #[token("=")]
  OpAssign,

  #[token(">")]
  OpGreaterThan,

  #[token("<")]
  OpLessThan,

  #[token("!")]
  OpNot,

  #[token("~")]
  OpBitNeg,

  #[token("?")]
  OpQuestion,

  #[token("??")]
  OpCoalesce,

  #[token(":")]
  OpColon,

  #[token("==")]
  OpEqual,

  #[token("===")]
  OpTripleEqual,

  #[token("!=")]
  OpNotEqual,

  #[token("<>")]
  OpLessGreater,

  #[token("!==")]
  OpTripleNotEqual,

  #[token("<=")]
  OpLessThanOrEqual,

  #[token(">=")]
  OpGreaterThanOrEqual,

  #[token("&&")]
  OpAnd,

  #[token("||")]
  OpOr,

  #[token("++")]
  OpIncrement,

  #[token("--")]
  OpDecrement,

  #[token("+")]
  OpPlus,

  #[token("-")]
  OpMinus,

  #[token("*")]
  OpMul,

  #[token("/")]
  OpDiv,

  #[token("&")]
  OpBitAnd,

  #[token("|")]
  OpBitOr,

  #[token("^")]
  OpBitXor,

  #[token("%")]
  OpMod,

  #[token("=>")]
  OpMapsTo,

  #[token("+=")]
  OpPlusAssign,

  #[token("-=")]
  OpMinusAssign,

  #[token("*=")]
  OpMulAssign,

  #[token("/=")]
  OpDivAssign,

  #[token("&=")]
  OpAndAssign,

  #[token("|=")]
  OpOrAssign,

  #[token("^=")]
  OpXorAssign,

  #[token("<<=")]
  OpShiftLeftAssign,

  #[token(">>=")]
  OpShiftRightAssign,

  #[token(">>>=")]
  OpUnsignedShiftRightAssign,

  #[regex(r"[ \t\n\r\x0C]+")]
  Whitespace,

  #[regex(r"//[^\r\n]*")]
  LineComment,

  #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
  BlockComment,

  #[regex(r"/\*([^*]|\*+[^*/])*\**")]
  ErrorCommentUnterminated,

  #[error]
  Error,
}

macro_rules! token_enum {
  (
    $(#[$($enum_m:tt)*])*
    pub enum $name:ident {
      $($case:ident $(($inner:ty))? $(#[$($m:tt)*])*)*
    }
  ) => {
    $(#[$($enum_m)*])*
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    pub enum $name {
      $(
        $(#[$($m)*])*
        $case $(($inner))?,
      )*
    }
  };
}

token_enum! {
  /// Token kind.
  pub enum TokenKind {
    Keyword(Keyword)                          /// reserved word (see [`Keyword`])

    // variable tokens
    Ident                                     /// identifier token
    IntegerLiteral                            /// `42`
    LongLiteral                               /// `42L`
    DecimalLiteral                            /// `4.2`, `4.2d`
    StringLiteral                             /// `'foo'`

    // query-only literals
    DateLiteral                               /// `2020-01-01`
    DateTimeLiteral                           /// `2020-01-01T12:00:00Z`
    CurrencyLiteral                           /// `USD100.01`
    DateConstant                              /// `TODAY`, `LAST_QUARTER`, ...
    DateFormula                               /// `LAST_N_DAYS`, ...
    SearchLiteral                             /// `{term}` after `FIND`

    // symbols
    SymbolLeftParen                           /// `(`
    SymbolRightParen                          /// `)`
    SymbolLeftBrace                           /// `{`
    SymbolRightBrace                          /// `}`
    SymbolLeftBracket                         /// `[`
    SymbolRightBracket                        /// `]`
    SymbolSemi                                /// `;`
    SymbolComma                               /// `,`
    SymbolDot                                 /// `.`
    SymbolSafeDot                             /// `?.`
    SymbolAt                                  /// `@`

    // operators
    OpAssign                                  /// `=`
    OpGreaterThan                             /// `>`
    OpLessThan                                /// `<`
    OpNot                                     /// `!`
    OpBitNeg                                  /// `~`
    OpQuestion                                /// `?`
    OpCoalesce                                /// `??`
    OpColon                                   /// `:`
    OpEqual                                   /// `==`
    OpTripleEqual                             /// `===`
    OpNotEqual                                /// `!=`
    OpLessGreater                             /// `<>`
    OpTripleNotEqual                          /// `!==`
    OpLessThanOrEqual                         /// `<=`
    OpGreaterThanOrEqual                      /// `>=`
    OpAnd                                     /// `&&`
    OpOr                                      /// `||`
    OpIncrement                               /// `++`
    OpDecrement                               /// `--`
    OpPlus                                    /// `+`
    OpMinus                                   /// `-`
    OpMul                                     /// `*`
    OpDiv                                     /// `/`
    OpBitAnd                                  /// `&`
    OpBitOr                                   /// `|`
    OpBitXor                                  /// `^`
    OpMod                                     /// `%`
    OpMapsTo                                  /// `=>`
    OpPlusAssign                              /// `+=`
    OpMinusAssign                             /// `-=`
    OpMulAssign                               /// `*=`
    OpDivAssign                               /// `/=`
    OpAndAssign                               /// `&=`
    OpOrAssign                                /// `|=`
    OpXorAssign                               /// `^=`
    OpShiftLeftAssign                         /// `<<=`
    OpShiftRightAssign                        /// `>>=`
    OpUnsignedShiftRightAssign                /// `>>>=`

    Whitespace                                /// any whitespace
    LineComment                               /// `// comment`
    BlockComment                              /// `/* comment */`

    // errors
    ErrorStringUnterminated                   /// unterminated string
    ErrorCommentUnterminated                  /// unterminated comment
    ErrorSearchLiteralUnterminated            /// unterminated `{...}` search term
    ErrorInvalidToken                         /// invalid token
  }
}

impl TokenKind {
  pub fn is_error(self) -> bool {
    use TokenKind::*;

    match self {
      ErrorStringUnterminated
      | ErrorCommentUnterminated
      | ErrorSearchLiteralUnterminated
      | ErrorInvalidToken => true,
      _ => false,
    }
  }

  pub fn is_trivia(self) -> bool {
    use TokenKind::*;

    match self {
      Whitespace | LineComment | BlockComment | ErrorCommentUnterminated => true,
      _ => false,
    }
  }
}

/// Which vocabulary the lexer is currently using.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
  /// Plain Apex code.
  Apex,
  /// Inside `[SELECT ...]` or `[FIND ...]`.
  Query,
}

/// A token of apex source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
  /// The kind of token.
  pub kind: TokenKind,

  /// The token value.
  pub len: u32,
}

/// A lexer of apex source.
///
/// Switches to [`Mode::Query`] after a `[` that opens a SOQL or SOSL query
/// and back when the matching `]` is reached.
pub struct Lexer<'a> {
  inner: logos::Lexer<'a, RawToken>,
  done: bool,
  peeked: VecDeque<Token>,
  base: Mode,
  mode: Mode,
  /// open `[` inside the current query
  depth: u32,
  last: Option<TokenKind>,
  #[cfg(debug_assertions)]
  len: u32,
}

impl<'a> Lexer<'a> {
  pub fn new(content: &'a str) -> Self {
    Self::with_mode(content, Mode::Apex)
  }

  /// Creates a lexer that starts out in `mode`. A lexer started in
  /// [`Mode::Query`] never leaves it.
  pub fn with_mode(content: &'a str, mode: Mode) -> Self {
    Self {
      inner: RawToken::lexer(content),
      done: false,
      peeked: VecDeque::new(),
      base: mode,
      mode,
      depth: 0,
      last: None,
      #[cfg(debug_assertions)]
      len: 0,
    }
  }

  /// The mode the next unread token is lexed in.
  pub fn mode(&self) -> Mode {
    self.mode
  }

  fn read_token(&mut self) -> Option<Token> {
    if self.done {
      return None;
    }

    match self.inner.next() {
      None => {
        self.done = true;
        None
      }

      Some(raw) => {
        let kind = self.to_kind(raw);
        let len = self.inner.slice().len() as u32;

        #[cfg(debug_assertions)]
        {
          self.len += len;
          assert_eq!(self.len, self.inner.span().end as u32);
        }

        if !kind.is_trivia() {
          self.last = Some(kind);
        }

        Some(Token { kind, len })
      }
    }
  }

  fn to_kind(&mut self, raw: RawToken) -> TokenKind {
    match raw {
      RawToken::Ident => self.ident(),
      RawToken::Integer => self.integer(),
      RawToken::Long => TokenKind::LongLiteral,
      RawToken::Decimal => TokenKind::DecimalLiteral,
      RawToken::String => TokenKind::StringLiteral,
      RawToken::ErrorStringUnterminated => TokenKind::ErrorStringUnterminated,
      RawToken::SymbolLeftParen => TokenKind::SymbolLeftParen,
      RawToken::SymbolRightParen => TokenKind::SymbolRightParen,
      RawToken::SymbolLeftBrace => self.left_brace(),
      RawToken::SymbolRightBrace => TokenKind::SymbolRightBrace,
      RawToken::SymbolLeftBracket => {
        self.open_bracket();
        TokenKind::SymbolLeftBracket
      }
      RawToken::SymbolRightBracket => {
        self.close_bracket();
        TokenKind::SymbolRightBracket
      }
      RawToken::SymbolSemi => TokenKind::SymbolSemi,
      RawToken::SymbolComma => TokenKind::SymbolComma,
      RawToken::SymbolDot => TokenKind::SymbolDot,
      RawToken::SymbolSafeDot => TokenKind::SymbolSafeDot,
      RawToken::SymbolAt => TokenKind::SymbolAt,
      RawToken::OpAssign => TokenKind::OpAssign,
      RawToken::OpGreaterThan => TokenKind::OpGreaterThan,
      RawToken::OpLessThan => TokenKind::OpLessThan,
      RawToken::OpNot => TokenKind::OpNot,
      RawToken::OpBitNeg => TokenKind::OpBitNeg,
      RawToken::OpQuestion => TokenKind::OpQuestion,
      RawToken::OpCoalesce => TokenKind::OpCoalesce,
      RawToken::OpColon => TokenKind::OpColon,
      RawToken::OpEqual => TokenKind::OpEqual,
      RawToken::OpTripleEqual => TokenKind::OpTripleEqual,
      RawToken::OpNotEqual => TokenKind::OpNotEqual,
      RawToken::OpLessGreater => TokenKind::OpLessGreater,
      RawToken::OpTripleNotEqual => TokenKind::OpTripleNotEqual,
      RawToken::OpLessThanOrEqual => TokenKind::OpLessThanOrEqual,
      RawToken::OpGreaterThanOrEqual => TokenKind::OpGreaterThanOrEqual,
      RawToken::OpAnd => TokenKind::OpAnd,
      RawToken::OpOr => TokenKind::OpOr,
      RawToken::OpIncrement => TokenKind::OpIncrement,
      RawToken::OpDecrement => TokenKind::OpDecrement,
      RawToken::OpPlus => TokenKind::OpPlus,
      RawToken::OpMinus => TokenKind::OpMinus,
      RawToken::OpMul => TokenKind::OpMul,
      RawToken::OpDiv => TokenKind::OpDiv,
      RawToken::OpBitAnd => TokenKind::OpBitAnd,
      RawToken::OpBitOr => TokenKind::OpBitOr,
      RawToken::OpBitXor => TokenKind::OpBitXor,
      RawToken::OpMod => TokenKind::OpMod,
      RawToken::OpMapsTo => TokenKind::OpMapsTo,
      RawToken::OpPlusAssign => TokenKind::OpPlusAssign,
      RawToken::OpMinusAssign => TokenKind::OpMinusAssign,
      RawToken::OpMulAssign => TokenKind::OpMulAssign,
      RawToken::OpDivAssign => TokenKind::OpDivAssign,
      RawToken::OpAndAssign => TokenKind::OpAndAssign,
      RawToken::OpOrAssign => TokenKind::OpOrAssign,
      RawToken::OpXorAssign => TokenKind::OpXorAssign,
      RawToken::OpShiftLeftAssign => TokenKind::OpShiftLeftAssign,
      RawToken::OpShiftRightAssign => TokenKind::OpShiftRightAssign,
      RawToken::OpUnsignedShiftRightAssign => TokenKind::OpUnsignedShiftRightAssign,
      RawToken::Whitespace => TokenKind::Whitespace,
      RawToken::LineComment => TokenKind::LineComment,
      RawToken::BlockComment => TokenKind::BlockComment,
      RawToken::ErrorCommentUnterminated => TokenKind::ErrorCommentUnterminated,
      RawToken::Error => TokenKind::ErrorInvalidToken,
    }
  }

  fn ident(&mut self) -> TokenKind {
    let text = self.inner.slice();
    if self.mode == Mode::Apex {
      return Keyword::lookup(text, Mode::Apex).map_or(TokenKind::Ident, TokenKind::Keyword);
    }

    // `:acc1` is a bind variable and `a.usd1` a field, never amounts
    let named = matches!(
      self.last,
      Some(TokenKind::OpColon) | Some(TokenKind::SymbolDot) | Some(TokenKind::SymbolSafeDot)
    );
    if !named && query::is_currency_ident(text) {
      let fraction = query::currency_fraction(self.inner.remainder());
      self.inner.bump(fraction);
      return TokenKind::CurrencyLiteral;
    }

    if keyword::is_date_constant(text) {
      TokenKind::DateConstant
    } else if keyword::is_date_formula(text) {
      TokenKind::DateFormula
    } else {
      Keyword::lookup(text, Mode::Query).map_or(TokenKind::Ident, TokenKind::Keyword)
    }
  }

  fn integer(&mut self) -> TokenKind {
    if self.mode != Mode::Query || self.inner.slice().len() != 4 {
      return TokenKind::IntegerLiteral;
    }

    match query::date_suffix(self.inner.remainder()) {
      Some(DateLen::Date(n)) => {
        self.inner.bump(n);
        TokenKind::DateLiteral
      }
      Some(DateLen::DateTime(n)) => {
        self.inner.bump(n);
        TokenKind::DateTimeLiteral
      }
      None => TokenKind::IntegerLiteral,
    }
  }

  fn left_brace(&mut self) -> TokenKind {
    if self.mode != Mode::Query || self.last != Some(TokenKind::Keyword(Keyword::Find)) {
      return TokenKind::SymbolLeftBrace;
    }

    let rest = self.inner.remainder();
    match query::search_term(rest) {
      Some(n) => {
        self.inner.bump(n);
        TokenKind::SearchLiteral
      }
      None => {
        self.inner.bump(rest.len());
        TokenKind::ErrorSearchLiteralUnterminated
      }
    }
  }

  fn open_bracket(&mut self) {
    match self.mode {
      Mode::Query => self.depth += 1,
      Mode::Apex => {
        if query::opens_query(self.inner.remainder()) {
          self.mode = Mode::Query;
          self.depth = 1;
        }
      }
    }
  }

  fn close_bracket(&mut self) {
    if self.mode == Mode::Query && self.depth > 0 {
      self.depth -= 1;
      if self.depth == 0 {
        self.mode = self.base;
      }
    }
  }

  #[inline]
  pub fn peek(&mut self) -> Option<Token> {
    self.peek_nth(0)
  }

  pub fn peek_nth(&mut self, n: usize) -> Option<Token> {
    while self.peeked.len() <= n && !self.done {
      if let Some(tok) = self.read_token() {
        self.peeked.push_back(tok);
      }
    }

    self.peeked.get(n).copied()
  }
}

impl<'a> Iterator for Lexer<'a> {
  type Item = Token;

  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    match self.peeked.pop_front() {
      Some(v) => Some(v),
      None => self.read_token(),
    }
  }
}

/// Tokenize a string of apex into a list of tokens.
pub fn tokenize<'a>(content: &'a str) -> impl Iterator<Item = Token> + 'a {
  Lexer::new(content)
}

/// Tokenize a string starting in the given mode.
pub fn tokenize_with_mode<'a>(content: &'a str, mode: Mode) -> impl Iterator<Item = Token> + 'a {
  Lexer::with_mode(content, mode)
}

#[cfg(test)]
mod tests {
  use super::{Keyword, TokenKind::*, *};
  use test_case::test_case;

  macro_rules! test_tokens {
    (@lex $lex:expr, $src:expr, [$(
      $tok:expr
      $(=> $val:expr)?
    ),*$(,)?]) => {{
      let src: &str = $src;
      let mut lex = $lex;
      #[allow(unused_mut)]
      let mut index = 0;
      #[allow(unused_mut)]
      let mut offset = 0;
      $({
        let actual = lex.next().expect(&format!("Expected token {}", index + 1));
        let expected = $tok;
        assert_eq!(actual.kind, expected, "index: {}", index);
        $(
          let val = &src[offset as usize..(offset + actual.len) as usize];
          assert_eq!(val, $val, "index: {}", index);
        )?

        index += 1;
        offset += actual.len;
      })*

      match lex.next() {
        None => (),
        Some(t) => panic!("Expected exactly {} tokens, but got {:#?} when expecting EOF", index, t),
      }
    }};

    ($src:expr, [$($rest:tt)*]) => {{
      let src: &str = $src;
      test_tokens!(@lex Lexer::new(src), src, [$($rest)*])
    }};
  }

  macro_rules! test_query_tokens {
    ($src:expr, [$($rest:tt)*]) => {{
      let src: &str = $src;
      test_tokens!(@lex Lexer::with_mode(src, Mode::Query), src, [$($rest)*])
    }};
  }

  #[test]
  fn empty() {
    test_tokens!("", []);
  }

  #[test]
  fn whitespace() {
    test_tokens!("  \t\n\r\r\n", [Whitespace]);
  }

  #[test_case("{", SymbolLeftBrace)]
  #[test_case("}", SymbolRightBrace)]
  #[test_case("[", SymbolLeftBracket)]
  #[test_case("]", SymbolRightBracket)]
  #[test_case("(", SymbolLeftParen)]
  #[test_case(")", SymbolRightParen)]
  #[test_case(",", SymbolComma)]
  #[test_case(".", SymbolDot)]
  #[test_case("?.", SymbolSafeDot)]
  #[test_case(";", SymbolSemi)]
  #[test_case("@", SymbolAt)]
  fn symbol(src: &str, tok: TokenKind) {
    test_tokens!(src, [tok]);
  }

  #[test_case(":", OpColon)]
  #[test_case("?", OpQuestion)]
  #[test_case("??", OpCoalesce)]
  #[test_case("!", OpNot)]
  #[test_case("==", OpEqual)]
  #[test_case("===", OpTripleEqual)]
  #[test_case("!=", OpNotEqual)]
  #[test_case("!==", OpTripleNotEqual)]
  #[test_case("<>", OpLessGreater)]
  #[test_case("~", OpBitNeg)]
  #[test_case("+", OpPlus)]
  #[test_case("-", OpMinus)]
  #[test_case("++", OpIncrement)]
  #[test_case("--", OpDecrement)]
  #[test_case("*", OpMul)]
  #[test_case("/", OpDiv)]
  #[test_case("%", OpMod)]
  #[test_case("&", OpBitAnd)]
  #[test_case("|", OpBitOr)]
  #[test_case("^", OpBitXor)]
  #[test_case("&&", OpAnd)]
  #[test_case("||", OpOr)]
  #[test_case("=", OpAssign)]
  #[test_case("=>", OpMapsTo)]
  #[test_case("<", OpLessThan)]
  #[test_case(">", OpGreaterThan)]
  #[test_case("<=", OpLessThanOrEqual)]
  #[test_case(">=", OpGreaterThanOrEqual)]
  #[test_case("+=", OpPlusAssign)]
  #[test_case("<<=", OpShiftLeftAssign)]
  #[test_case(">>=", OpShiftRightAssign)]
  #[test_case(">>>=", OpUnsignedShiftRightAssign)]
  fn operator(src: &str, tok: TokenKind) {
    test_tokens!(src, [tok]);
  }

  #[test]
  fn shifts_are_split() {
    test_tokens!("a >> b", [Ident, Whitespace, OpGreaterThan, OpGreaterThan, Whitespace, Ident]);
  }

  #[test_case("1", IntegerLiteral ; "integer")]
  #[test_case("10L", LongLiteral ; "long_upper")]
  #[test_case("10l", LongLiteral ; "long_lower")]
  #[test_case("1.5", DecimalLiteral ; "decimal")]
  #[test_case(".5", DecimalLiteral ; "decimal_leading_dot")]
  #[test_case("1.5d", DecimalLiteral ; "decimal_suffix")]
  #[test_case("2D", DecimalLiteral ; "decimal_no_fraction")]
  fn number(src: &str, tok: TokenKind) {
    test_tokens!(src, [tok]);
  }

  #[test]
  fn signs_are_not_folded() {
    test_tokens!("-+-3", [OpMinus, OpPlus, OpMinus, IntegerLiteral=>"3"]);
  }

  #[test_case("'hi'" ; "plain")]
  #[test_case("'hi\\'there'" ; "escaped_quote")]
  #[test_case("'\\n\\u00e9'" ; "escapes")]
  #[test_case("''" ; "empty")]
  fn string(src: &str) {
    test_tokens!(src, [StringLiteral]);
  }

  #[test]
  fn string_unterminated() {
    test_tokens!(
      "'hi\nx",
      [ErrorStringUnterminated=>"'hi", Whitespace, Ident=>"x"]
    );
  }

  #[test_case("class", Keyword::Class ; "class_lower")]
  #[test_case("CLASS", Keyword::Class ; "class_upper")]
  #[test_case("Public", Keyword::Public ; "public_mixed")]
  #[test_case("testMethod", Keyword::TestMethod ; "test_method")]
  #[test_case("instanceOf", Keyword::Instanceof ; "instanceof_mixed")]
  #[test_case("null", Keyword::Null ; "null")]
  fn keyword(src: &str, kw: Keyword) {
    test_tokens!(src, [TokenKind::Keyword(kw)]);
  }

  #[test_case("select")]
  #[test_case("with")]
  #[test_case("sharing")]
  #[test_case("USER_MODE")]
  #[test_case("TODAY")]
  #[test_case("USD100")]
  fn not_reserved_in_code(src: &str) {
    test_tokens!(src, [Ident]);
  }

  #[test]
  fn identifiers() {
    test_tokens!(
      "foo bar123",
      [
        Ident=>"foo",
        Whitespace,
        Ident=>"bar123",
      ]
    );
  }

  #[test]
  fn line_comment() {
    test_tokens!("// hi\nx", [LineComment=>"// hi", Whitespace, Ident]);
  }

  #[test_case("/* hi \n bye */" ; "simple")]
  #[test_case("/**/" ; "minimal")]
  #[test_case("/** doc **/" ; "stars")]
  #[test_case("/*/*/" ; "slash_slack")]
  fn block_comment(src: &str) {
    test_tokens!(src, [BlockComment]);
  }

  #[test]
  fn block_comment_no_term() {
    test_tokens!("/* hi", [ErrorCommentUnterminated]);
  }

  #[test]
  fn junk() {
    test_tokens!("#", [ErrorInvalidToken]);
  }

  #[test]
  fn enters_and_leaves_query_mode() {
    let kw = TokenKind::Keyword;
    test_tokens!(
      "[Select Id from Account] from",
      [
        SymbolLeftBracket,
        kw(Keyword::Select)=>"Select",
        Whitespace,
        Ident=>"Id",
        Whitespace,
        kw(Keyword::From)=>"from",
        Whitespace,
        Ident=>"Account",
        SymbolRightBracket,
        Whitespace,
        Ident=>"from",
      ]
    );
  }

  #[test]
  fn index_is_not_a_query() {
    test_tokens!("a[selected]", [Ident, SymbolLeftBracket, Ident=>"selected", SymbolRightBracket]);
  }

  #[test]
  fn bracket_select_opens_query() {
    test_tokens!(
      "a[select]",
      [Ident, SymbolLeftBracket, TokenKind::Keyword(Keyword::Select), SymbolRightBracket]
    );
  }

  #[test]
  fn nested_brackets_stay_in_query() {
    let kw = TokenKind::Keyword;
    test_tokens!(
      "[select Id from A where Id = :ids[0] limit 1]",
      [
        SymbolLeftBracket,
        kw(Keyword::Select),
        Whitespace,
        Ident,
        Whitespace,
        kw(Keyword::From),
        Whitespace,
        Ident,
        Whitespace,
        kw(Keyword::Where),
        Whitespace,
        Ident,
        Whitespace,
        OpAssign,
        Whitespace,
        OpColon,
        Ident,
        SymbolLeftBracket,
        IntegerLiteral,
        SymbolRightBracket,
        Whitespace,
        kw(Keyword::Limit),
        Whitespace,
        IntegerLiteral,
        SymbolRightBracket,
      ]
    );
  }

  #[test_case("2020-01-01", DateLiteral ; "date")]
  #[test_case("2020-01-01T12:00:00Z", DateTimeLiteral ; "datetime")]
  #[test_case("2020-01-01T12:00:00.000+02:00", DateTimeLiteral ; "datetime_offset")]
  #[test_case("USD100.01", CurrencyLiteral ; "currency_fraction")]
  #[test_case("USD200", CurrencyLiteral ; "currency")]
  #[test_case("LAST_QUARTER", DateConstant ; "date_constant")]
  #[test_case("last_n_days", DateFormula ; "date_formula")]
  #[test_case("USER_MODE", TokenKind::Keyword(Keyword::UserMode) ; "user_mode")]
  fn query_literal(src: &str, tok: TokenKind) {
    test_query_tokens!(src, [tok]);
  }

  #[test]
  fn query_integer_is_not_a_date() {
    test_query_tokens!("2020 - 1", [IntegerLiteral, Whitespace, OpMinus, Whitespace, IntegerLiteral]);
  }

  #[test_case("= :acc1" ; "bind")]
  #[test_case("= : ids2" ; "bind_with_space")]
  #[test_case("= a.usd1" ; "field")]
  fn currency_shaped_name_in_query(src: &str) {
    let last = Lexer::with_mode(src, Mode::Query)
      .filter(|t| !t.kind.is_trivia())
      .last()
      .unwrap();
    assert_eq!(last.kind, Ident);
  }

  #[test]
  fn currency_member_in_code() {
    test_tokens!("USD100.name", [Ident=>"USD100", SymbolDot, Ident=>"name"]);
  }

  #[test]
  fn search_literal_after_find() {
    let kw = TokenKind::Keyword;
    test_tokens!(
      "[FIND {foo \\} bar} RETURNING Account]",
      [
        SymbolLeftBracket,
        kw(Keyword::Find),
        Whitespace,
        SearchLiteral=>"{foo \\} bar}",
        Whitespace,
        kw(Keyword::Returning),
        Whitespace,
        Ident,
        SymbolRightBracket,
      ]
    );
  }

  #[test]
  fn search_literal_unterminated() {
    test_query_tokens!("find {foo", [TokenKind::Keyword(Keyword::Find), Whitespace, ErrorSearchLiteralUnterminated]);
  }

  #[test]
  fn query_mode_is_sticky() {
    let mut lex = Lexer::with_mode("]select", Mode::Query);
    assert_eq!(lex.next().map(|t| t.kind), Some(SymbolRightBracket));
    assert_eq!(lex.mode(), Mode::Query);
    assert_eq!(lex.next().map(|t| t.kind), Some(TokenKind::Keyword(Keyword::Select)));
  }

  #[test]
  fn peek_does_not_consume() {
    let mut lex = Lexer::new("a b");
    assert_eq!(lex.peek_nth(2).map(|t| t.kind), Some(Ident));
    assert_eq!(lex.next().map(|t| t.kind), Some(Ident));
    assert_eq!(lex.next().map(|t| t.kind), Some(Whitespace));
  }
}
