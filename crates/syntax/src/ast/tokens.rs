use crate::{
  ast::AstToken,
  SyntaxKind::{self, *},
  SyntaxToken, TextRange, TextSize,
};
use beef::lean::Cow;

macro_rules! define_token {
  ($name:ident, $kind:ident) => {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct $name {
      pub(crate) syntax: SyntaxToken,
    }

    impl core::fmt::Display for $name {
      fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        core::fmt::Display::fmt(&self.syntax, f)
      }
    }

    impl AstToken for $name {
      fn can_cast(kind: SyntaxKind) -> bool {
        kind == $kind
      }

      fn cast(syntax: SyntaxToken) -> Option<Self> {
        if Self::can_cast(syntax.kind()) {
          Some(Self { syntax })
        } else {
          None
        }
      }

      fn syntax(&self) -> &SyntaxToken {
        &self.syntax
      }
    }
  };
}

define_token!(Whitespace, WHITESPACE);
define_token!(Comment, COMMENT);
define_token!(Ident, IDENT);
define_token!(IntNumber, INT_NUMBER);
define_token!(LongNumber, LONG_NUMBER);
define_token!(DecimalNumber, DECIMAL_NUMBER);
define_token!(String, STRING);

impl Ident {
  pub fn name(&self) -> &str {
    self.syntax.text().as_ref()
  }
}

impl Comment {
  pub fn kind(&self) -> CommentKind {
    if self.text().starts_with("/*") {
      CommentKind::Block
    } else {
      CommentKind::Line
    }
  }

  /// Whether a block comment is missing its closing `*/`.
  pub fn is_unterminated(&self) -> bool {
    self.kind().is_block() && (self.text().len() < 4 || !self.text().ends_with("*/"))
  }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CommentKind {
  Line,
  Block,
}

impl CommentKind {
  pub fn is_line(self) -> bool {
    self == Self::Line
  }

  pub fn is_block(self) -> bool {
    self == Self::Block
  }
}

impl Whitespace {
  pub fn spans_multiple_lines(&self) -> bool {
    let text = self.text();
    text
      .find('\n')
      .map_or(false, |idx| text[idx + 1..].contains('\n'))
  }
}

impl IntNumber {
  /// `None` when the literal does not fit an Apex `Integer`.
  pub fn value(&self) -> Option<i32> {
    self.text().parse().ok()
  }
}

impl LongNumber {
  pub fn value(&self) -> Option<i64> {
    let text = self.text().as_str();
    text[..text.len() - 1].parse().ok()
  }
}

impl DecimalNumber {
  pub fn value(&self) -> Option<f64> {
    let text = self.text().trim_end_matches(|c| c == 'd' || c == 'D');
    text.parse().ok()
  }
}

pub struct QuoteOffsets {
  pub quotes: [TextRange; 2],
  pub contents: TextRange,
}

impl QuoteOffsets {
  fn new(literal: &str) -> Option<QuoteOffsets> {
    if !literal.starts_with('\'') || literal.len() < 2 || !literal.ends_with('\'') {
      return None;
    }

    let quote = TextSize::of('\'');
    let end = TextSize::of(literal);
    let left_quote = TextRange::new(0.into(), quote);
    let right_quote = TextRange::new(end - quote, end);

    Some(QuoteOffsets {
      quotes: [left_quote, right_quote],
      contents: TextRange::new(left_quote.end(), right_quote.start()),
    })
  }
}

impl String {
  pub fn quote_offsets(&self) -> Option<QuoteOffsets> {
    let offsets = QuoteOffsets::new(self.text().as_str())?;
    let o = self.syntax().text_range().start();
    Some(QuoteOffsets {
      quotes: [offsets.quotes[0] + o, offsets.quotes[1] + o],
      contents: offsets.contents + o,
    })
  }

  pub fn text_range_between_quotes(&self) -> Option<TextRange> {
    self.quote_offsets().map(|it| it.contents)
  }

  /// The represented string, `None` if the literal is unterminated or holds
  /// an invalid escape sequence.
  pub fn value(&self) -> Option<Cow<'_, str>> {
    use apex_lex::unescape::*;

    let text = self.text().as_str();
    let text = &text[self.text_range_between_quotes()? - self.syntax().text_range().start()];

    let mut has_error = false;
    let parts = match unescape_str(text) {
      Unescaped::Original(s) => return Some(Cow::borrowed(s)),
      Unescaped::Parts(p) => p,
    };

    let mut buf = std::string::String::with_capacity(text.len());
    for part in parts {
      match part {
        Part::Str(s) => buf.push_str(s),
        Part::Chr(c) => buf.push(c),
        Part::Err(_) => has_error = true,
      }
    }

    if has_error {
      None
    } else {
      Some(Cow::owned(buf))
    }
  }
}
