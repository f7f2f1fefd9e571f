//! Lexer analyzes raw input string and produces lexemes (tokens).
//! It is just a bridge to `apex-lex`.

use core::convert::TryFrom;

use apex_lex::{Keyword, TokenKind};

use crate::{
  line_index::LineIndex,
  SyntaxError, SyntaxErrorKind,
  SyntaxKind::{self, *},
  TextRange, TextSize, T,
};

pub use apex_lex::Mode as LexMode;

/// A token of apex source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
  /// The kind of token.
  pub kind: SyntaxKind,

  /// The length of the token.
  pub len: TextSize,
}

/// Break a string of apex code up into its component tokens.
pub fn tokenize(text: &str) -> (Vec<Token>, Vec<SyntaxError>) {
  tokenize_with_mode(text, LexMode::Apex)
}

/// Break a string up into its component tokens, starting in `mode`.
///
/// Inputs longer than `u32::MAX` bytes can not be addressed by a
/// [`TextSize`] and yield no tokens.
pub fn tokenize_with_mode(text: &str, mode: LexMode) -> (Vec<Token>, Vec<SyntaxError>) {
  if text.is_empty() || u32::try_from(text.len()).is_err() {
    return Default::default();
  }

  let index = LineIndex::new(text);
  let mut tokens = Vec::new();
  let mut errors = Vec::new();
  let mut offset = TextSize::from(0);

  for token in apex_lex::tokenize_with_mode(text, mode) {
    let token_len = TextSize::from(token.len);
    let token_range = TextRange::at(offset, token_len);
    let token_text = &text[token_range];

    let (syntax_kind, err_message) = lexer_token_kind_to_syntax_kind(token.kind);

    tokens.push(Token {
      kind: syntax_kind,
      len: token_len,
    });

    if let Some(err_message) = err_message {
      errors.push(SyntaxError::new(
        SyntaxErrorKind::Lexical,
        err_message,
        token_range,
        index.line_col(offset),
        Some(token_text.into()),
      ));
    }

    offset += token_len;
  }

  (tokens, errors)
}

/// Returns `SyntaxKind` and an optional tokenize error message.
fn lexer_token_kind_to_syntax_kind(token_kind: TokenKind) -> (SyntaxKind, Option<&'static str>) {
  let syntax_kind = match token_kind {
    TokenKind::Keyword(kw) => keyword_kind(kw),
    TokenKind::Ident => IDENT,
    TokenKind::IntegerLiteral => INT_NUMBER,
    TokenKind::LongLiteral => LONG_NUMBER,
    TokenKind::DecimalLiteral => DECIMAL_NUMBER,
    TokenKind::StringLiteral => STRING,
    TokenKind::DateLiteral => DATE,
    TokenKind::DateTimeLiteral => DATE_TIME,
    TokenKind::CurrencyLiteral => CURRENCY,
    TokenKind::DateConstant => DATE_CONSTANT,
    TokenKind::DateFormula => DATE_FORMULA,
    TokenKind::SearchLiteral => SEARCH_TERM,
    TokenKind::SymbolLeftParen => T!['('],
    TokenKind::SymbolRightParen => T![')'],
    TokenKind::SymbolLeftBrace => T!['{'],
    TokenKind::SymbolRightBrace => T!['}'],
    TokenKind::SymbolLeftBracket => T!['['],
    TokenKind::SymbolRightBracket => T![']'],
    TokenKind::SymbolSemi => T![;],
    TokenKind::SymbolComma => T![,],
    TokenKind::SymbolDot => T![.],
    TokenKind::SymbolSafeDot => T![?.],
    TokenKind::SymbolAt => T![@],
    TokenKind::OpAssign => T![=],
    TokenKind::OpGreaterThan => T![>],
    TokenKind::OpLessThan => T![<],
    TokenKind::OpNot => T![!],
    TokenKind::OpBitNeg => T![~],
    TokenKind::OpQuestion => T![?],
    TokenKind::OpCoalesce => T![??],
    TokenKind::OpColon => T![:],
    TokenKind::OpEqual => T![==],
    TokenKind::OpTripleEqual => T![===],
    TokenKind::OpNotEqual => T![!=],
    TokenKind::OpLessGreater => T![<>],
    TokenKind::OpTripleNotEqual => T![!==],
    TokenKind::OpLessThanOrEqual => T![<=],
    TokenKind::OpGreaterThanOrEqual => T![>=],
    TokenKind::OpAnd => T![&&],
    TokenKind::OpOr => T![||],
    TokenKind::OpIncrement => T![++],
    TokenKind::OpDecrement => T![--],
    TokenKind::OpPlus => T![+],
    TokenKind::OpMinus => T![-],
    TokenKind::OpMul => T![*],
    TokenKind::OpDiv => T![/],
    TokenKind::OpBitAnd => T![&],
    TokenKind::OpBitOr => T![|],
    TokenKind::OpBitXor => T![^],
    TokenKind::OpMod => T![%],
    TokenKind::OpMapsTo => T![=>],
    TokenKind::OpPlusAssign => T![+=],
    TokenKind::OpMinusAssign => T![-=],
    TokenKind::OpMulAssign => T![*=],
    TokenKind::OpDivAssign => T![/=],
    TokenKind::OpAndAssign => T![&=],
    TokenKind::OpOrAssign => T![|=],
    TokenKind::OpXorAssign => T![^=],
    TokenKind::OpShiftLeftAssign => T![<<=],
    TokenKind::OpShiftRightAssign => T![>>=],
    TokenKind::OpUnsignedShiftRightAssign => T![>>>=],
    TokenKind::Whitespace => WHITESPACE,
    TokenKind::LineComment => COMMENT,
    TokenKind::BlockComment => COMMENT,

    TokenKind::ErrorStringUnterminated => {
      return (STRING, Some("Missing trailing `'` to terminate the string literal"))
    }
    TokenKind::ErrorCommentUnterminated => {
      return (COMMENT, Some("Missing trailing `*/` symbols to terminate the block comment"))
    }
    TokenKind::ErrorSearchLiteralUnterminated => {
      return (SEARCH_TERM, Some("Missing trailing `}` to terminate the search term"))
    }
    TokenKind::ErrorInvalidToken => return (PARSE_ERR, Some("Invalid token")),
  };

  (syntax_kind, None)
}

fn keyword_kind(kw: Keyword) -> SyntaxKind {
  match kw {
    Keyword::Abstract => T![abstract],
    Keyword::Break => T![break],
    Keyword::Catch => T![catch],
    Keyword::Class => T![class],
    Keyword::Continue => T![continue],
    Keyword::Delete => T![delete],
    Keyword::Do => T![do],
    Keyword::Else => T![else],
    Keyword::Enum => T![enum],
    Keyword::Extends => T![extends],
    Keyword::False => T![false],
    Keyword::Final => T![final],
    Keyword::Finally => T![finally],
    Keyword::For => T![for],
    Keyword::Global => T![global],
    Keyword::If => T![if],
    Keyword::Implements => T![implements],
    Keyword::Insert => T![insert],
    Keyword::Instanceof => T![instanceof],
    Keyword::Interface => T![interface],
    Keyword::Merge => T![merge],
    Keyword::New => T![new],
    Keyword::Null => T![null],
    Keyword::On => T![on],
    Keyword::Override => T![override],
    Keyword::Private => T![private],
    Keyword::Protected => T![protected],
    Keyword::Public => T![public],
    Keyword::Return => T![return],
    Keyword::Static => T![static],
    Keyword::Super => T![super],
    Keyword::TestMethod => T![testmethod],
    Keyword::This => T![this],
    Keyword::Throw => T![throw],
    Keyword::Transient => T![transient],
    Keyword::True => T![true],
    Keyword::Try => T![try],
    Keyword::Undelete => T![undelete],
    Keyword::Update => T![update],
    Keyword::Upsert => T![upsert],
    Keyword::Virtual => T![virtual],
    Keyword::Void => T![void],
    Keyword::WebService => T![webservice],
    Keyword::While => T![while],

    Keyword::Select => T![select],
    Keyword::From => T![from],
    Keyword::Where => T![where],
    Keyword::With => T![with],
    Keyword::Group => T![group],
    Keyword::By => T![by],
    Keyword::Order => T![order],
    Keyword::Limit => T![limit],
    Keyword::Offset => T![offset],
    Keyword::And => T![and],
    Keyword::Or => T![or],
    Keyword::Not => T![not],
    Keyword::Like => T![like],
    Keyword::In => T![in],
    Keyword::Includes => T![includes],
    Keyword::Excludes => T![excludes],
    Keyword::Asc => T![asc],
    Keyword::Desc => T![desc],
    Keyword::Nulls => T![nulls],
    Keyword::First => T![first],
    Keyword::Last => T![last],
    Keyword::Having => T![having],
    Keyword::Rollup => T![rollup],
    Keyword::Cube => T![cube],
    Keyword::Using => T![using],
    Keyword::Scope => T![scope],
    Keyword::TypeOf => T![typeof],
    Keyword::When => T![when],
    Keyword::Then => T![then],
    Keyword::End => T![end],
    Keyword::As => T![as],
    Keyword::All => T![all],
    Keyword::Rows => T![rows],
    Keyword::View => T![view],
    Keyword::Reference => T![reference],
    Keyword::Tracking => T![tracking],
    Keyword::ViewStat => T![viewstat],
    Keyword::SecurityEnforced => T![security_enforced],
    Keyword::UserMode => T![user_mode],
    Keyword::SystemMode => T![system_mode],
    Keyword::Data => T![data],
    Keyword::Category => T![category],
    Keyword::At => T![at],
    Keyword::Above => T![above],
    Keyword::Below => T![below],
    Keyword::AboveOrBelow => T![above_or_below],
    Keyword::Fields => T![fields],
    Keyword::Find => T![find],
    Keyword::Returning => T![returning],
  }
}
