//! Case-insensitive keyword classification.

use crate::Mode;

/// Words are only keywords in the mode(s) of their class.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Class {
  /// Reserved in Apex code and inside queries.
  Apex,
  /// Reserved inside `[SELECT ...]` and `[FIND ...]` only.
  Query,
}

macro_rules! keywords {
  (
    $(#[$($enum_m:tt)*])*
    pub enum $name:ident {
      $($case:ident => $text:literal, $class:ident;)*
    }
  ) => {
    $(#[$($enum_m)*])*
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    pub enum $name {
      $(
        #[doc = concat!("`", $text, "`")]
        $case,
      )*
    }

    impl $name {
      /// Every keyword, in declaration order.
      pub const ALL: &'static [$name] = &[$($name::$case,)*];

      /// The canonical (lower case) spelling of the keyword.
      pub fn as_str(self) -> &'static str {
        match self {
          $($name::$case => $text,)*
        }
      }

      fn class(self) -> Class {
        match self {
          $($name::$case => Class::$class,)*
        }
      }

      fn from_lowercase(text: &str) -> Option<Self> {
        match text {
          $($text => Some($name::$case),)*
          _ => None,
        }
      }
    }
  };
}

keywords! {
  /// A reserved word of Apex or of the embedded query languages.
  pub enum Keyword {
    Abstract => "abstract", Apex;
    Break => "break", Apex;
    Catch => "catch", Apex;
    Class => "class", Apex;
    Continue => "continue", Apex;
    Delete => "delete", Apex;
    Do => "do", Apex;
    Else => "else", Apex;
    Enum => "enum", Apex;
    Extends => "extends", Apex;
    False => "false", Apex;
    Final => "final", Apex;
    Finally => "finally", Apex;
    For => "for", Apex;
    Global => "global", Apex;
    If => "if", Apex;
    Implements => "implements", Apex;
    Insert => "insert", Apex;
    Instanceof => "instanceof", Apex;
    Interface => "interface", Apex;
    Merge => "merge", Apex;
    New => "new", Apex;
    Null => "null", Apex;
    On => "on", Apex;
    Override => "override", Apex;
    Private => "private", Apex;
    Protected => "protected", Apex;
    Public => "public", Apex;
    Return => "return", Apex;
    Static => "static", Apex;
    Super => "super", Apex;
    TestMethod => "testmethod", Apex;
    This => "this", Apex;
    Throw => "throw", Apex;
    Transient => "transient", Apex;
    True => "true", Apex;
    Try => "try", Apex;
    Undelete => "undelete", Apex;
    Update => "update", Apex;
    Upsert => "upsert", Apex;
    Virtual => "virtual", Apex;
    Void => "void", Apex;
    WebService => "webservice", Apex;
    While => "while", Apex;

    Select => "select", Query;
    From => "from", Query;
    Where => "where", Query;
    With => "with", Query;
    Group => "group", Query;
    By => "by", Query;
    Order => "order", Query;
    Limit => "limit", Query;
    Offset => "offset", Query;
    And => "and", Query;
    Or => "or", Query;
    Not => "not", Query;
    Like => "like", Query;
    In => "in", Query;
    Includes => "includes", Query;
    Excludes => "excludes", Query;
    Asc => "asc", Query;
    Desc => "desc", Query;
    Nulls => "nulls", Query;
    First => "first", Query;
    Last => "last", Query;
    Having => "having", Query;
    Rollup => "rollup", Query;
    Cube => "cube", Query;
    Using => "using", Query;
    Scope => "scope", Query;
    TypeOf => "typeof", Query;
    When => "when", Query;
    Then => "then", Query;
    End => "end", Query;
    As => "as", Query;
    All => "all", Query;
    Rows => "rows", Query;
    View => "view", Query;
    Reference => "reference", Query;
    Tracking => "tracking", Query;
    ViewStat => "viewstat", Query;
    SecurityEnforced => "security_enforced", Query;
    UserMode => "user_mode", Query;
    SystemMode => "system_mode", Query;
    Data => "data", Query;
    Category => "category", Query;
    At => "at", Query;
    Above => "above", Query;
    Below => "below", Query;
    AboveOrBelow => "above_or_below", Query;
    Fields => "fields", Query;
    Find => "find", Query;
    Returning => "returning", Query;
  }
}

impl Keyword {
  /// Classifies `text` as a keyword of `mode`, ignoring ASCII case.
  pub fn lookup(text: &str, mode: Mode) -> Option<Keyword> {
    let mut buf = [0u8; 32];
    let lower = lowercase(text, &mut buf)?;
    let kw = Keyword::from_lowercase(lower)?;
    match (kw.class(), mode) {
      (Class::Apex, _) | (Class::Query, Mode::Query) => Some(kw),
      (Class::Query, Mode::Apex) => None,
    }
  }

  /// Whether the keyword is reserved outside of queries.
  pub fn is_apex(self) -> bool {
    self.class() == Class::Apex
  }
}

const DATE_CONSTANTS: &[&str] = &[
  "yesterday",
  "today",
  "tomorrow",
  "last_week",
  "this_week",
  "next_week",
  "last_month",
  "this_month",
  "next_month",
  "last_90_days",
  "next_90_days",
  "this_quarter",
  "last_quarter",
  "next_quarter",
  "this_year",
  "last_year",
  "next_year",
  "this_fiscal_quarter",
  "last_fiscal_quarter",
  "next_fiscal_quarter",
  "this_fiscal_year",
  "last_fiscal_year",
  "next_fiscal_year",
];

const DATE_FORMULAS: &[&str] = &[
  "last_n_days",
  "next_n_days",
  "n_days_ago",
  "next_n_weeks",
  "last_n_weeks",
  "n_weeks_ago",
  "next_n_months",
  "last_n_months",
  "n_months_ago",
  "next_n_quarters",
  "last_n_quarters",
  "n_quarters_ago",
  "next_n_years",
  "last_n_years",
  "n_years_ago",
  "next_n_fiscal_quarters",
  "last_n_fiscal_quarters",
  "n_fiscal_quarters_ago",
  "next_n_fiscal_years",
  "last_n_fiscal_years",
  "n_fiscal_years_ago",
];

/// `TODAY`, `LAST_QUARTER`, ...
pub(crate) fn is_date_constant(text: &str) -> bool {
  let mut buf = [0u8; 32];
  lowercase(text, &mut buf).map_or(false, |lower| DATE_CONSTANTS.contains(&lower))
}

/// `LAST_N_DAYS`, `N_YEARS_AGO`, ... (always followed by `:n`).
pub(crate) fn is_date_formula(text: &str) -> bool {
  let mut buf = [0u8; 32];
  lowercase(text, &mut buf).map_or(false, |lower| DATE_FORMULAS.contains(&lower))
}

fn lowercase<'b>(text: &str, buf: &'b mut [u8; 32]) -> Option<&'b str> {
  let bytes = text.as_bytes();
  if bytes.len() > buf.len() {
    return None;
  }

  let buf = &mut buf[..bytes.len()];
  for (dst, src) in buf.iter_mut().zip(bytes) {
    *dst = src.to_ascii_lowercase();
  }

  core::str::from_utf8(buf).ok()
}

#[cfg(test)]
mod tests {
  use super::*;
  use test_case::test_case;

  #[test_case("class", Mode::Apex, Some(Keyword::Class) ; "class_lower")]
  #[test_case("CLASS", Mode::Apex, Some(Keyword::Class) ; "class_upper")]
  #[test_case("TestMethod", Mode::Apex, Some(Keyword::TestMethod) ; "test_method")]
  #[test_case("select", Mode::Apex, None ; "select_in_apex")]
  #[test_case("SeLeCt", Mode::Query, Some(Keyword::Select) ; "select_in_query")]
  #[test_case("USER_MODE", Mode::Apex, None ; "user_mode_in_apex")]
  #[test_case("USER_MODE", Mode::Query, Some(Keyword::UserMode) ; "user_mode_in_query")]
  #[test_case("update", Mode::Query, Some(Keyword::Update) ; "update_in_query")]
  #[test_case("sharing", Mode::Apex, None ; "sharing_is_contextual")]
  #[test_case("an_identifier_that_is_much_longer_than_any_keyword", Mode::Query, None ; "long_identifier")]
  fn lookup(text: &str, mode: Mode, expected: Option<Keyword>) {
    assert_eq!(Keyword::lookup(text, mode), expected);
  }

  #[test]
  fn spelling_round_trips() {
    for &kw in Keyword::ALL {
      assert_eq!(Keyword::lookup(kw.as_str(), Mode::Query), Some(kw));
    }
  }

  #[test_case("TODAY", true)]
  #[test_case("Last_Quarter", true)]
  #[test_case("LAST_N_DAYS", false)]
  fn date_constant(text: &str, expected: bool) {
    assert_eq!(is_date_constant(text), expected);
  }

  #[test_case("LAST_N_DAYS", true)]
  #[test_case("n_fiscal_years_ago", true)]
  #[test_case("TODAY", false)]
  fn date_formula(text: &str, expected: bool) {
    assert_eq!(is_date_formula(text), expected);
  }
}
