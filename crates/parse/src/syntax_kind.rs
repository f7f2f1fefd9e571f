macro_rules! define_syntax_kind {
  (@ ($name:ident) [$($acc:tt)*] [$($m_acc:tt)*] [$($t_acc:tt)*] [$($k_acc:tt)*]) => {
    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
    #[repr(u16)]
    #[allow(non_camel_case_types)]
    pub enum $name {
      $($acc)*
    }

    impl $name {
      /// Source text of punctuation, operators and keywords.
      pub fn text(self) -> Option<&'static str> {
        let text = match self {
          $($t_acc)*
          _ => return None,
        };

        Some(text.trim_matches('\''))
      }

      /// Whether this is a (possibly contextual) keyword.
      pub fn is_kw(self) -> bool {
        match self {
          $($k_acc)*
          _ => false,
        }
      }
    }

    #[macro_export]
    macro_rules! T {
      $($m_acc)*
    }
  };

  (@ $ctx:tt [$($acc:tt)*] $m_acc:tt $t_acc:tt $k_acc:tt $name:ident #hidden $($rest:tt)*) => {
    define_syntax_kind! {
      @ $ctx [$($acc)* #[doc(hidden)] $name,] $m_acc $t_acc $k_acc $($rest)*
    }
  };

  (@ $ctx:tt [$($acc:tt)*] $m_acc:tt $t_acc:tt $k_acc:tt $name:ident #[$($m:tt)*] $($rest:tt)*) => {
    define_syntax_kind! {
      @ $ctx [$($acc)* #[$($m)*] $name,] $m_acc $t_acc $k_acc $($rest)*
    }
  };

  (@ $ctx:tt [$($acc:tt)*] [$($m_acc:tt)*] [$($t_acc:tt)*] $k_acc:tt $name:ident [$($tok:tt)*] #[$($m:tt)*] $($rest:tt)*) => {
    define_syntax_kind! {
      @ $ctx
      [$($acc)* #[$($m)*] $name,]
      [$($m_acc)* [$($tok)*] => { $crate::SyntaxKind::$name };]
      [$($t_acc)* $name => stringify!($($tok)*),]
      $k_acc
      $($rest)*
    }
  };

  (@ $ctx:tt [$($acc:tt)*] [$($m_acc:tt)*] [$($t_acc:tt)*] [$($k_acc:tt)*] $name:ident [$($tok:tt)*] kw #[$($m:tt)*] $($rest:tt)*) => {
    define_syntax_kind! {
      @ $ctx
      [$($acc)* #[$($m)*] $name,]
      [$($m_acc)* [$($tok)*] => { $crate::SyntaxKind::$name };]
      [$($t_acc)* $name => stringify!($($tok)*),]
      [$($k_acc)* $name => true,]
      $($rest)*
    }
  };

  (pub enum $name:ident { $($body:tt)* }) => {
    define_syntax_kind! {
      @ ($name) [] [] [] [] $($body)*
    }
  };
}

define_syntax_kind! {
  pub enum SyntaxKind {
    // special
    TOMBSTONE                   #hidden
    EOF                         #hidden

    // symbols
    L_PAREN                     ['('] /// `(`
    R_PAREN                     [')'] /// `)`
    L_CURLY                     ['{'] /// `{`
    R_CURLY                     ['}'] /// `}`
    L_BRACK                     ['['] /// `[`
    R_BRACK                     [']'] /// `]`
    SEMICOLON                   [;] /// `;`
    COMMA                       [,] /// `,`
    DOT                         [.] /// `.`
    SAFE_DOT                    [?.] /// `?.`
    AT                          [@] /// `@`

    // operators
    ASSIGN_OP                   [=] /// `=`
    GT_OP                       [>] /// `>`
    LT_OP                       [<] /// `<`
    NOT_OP                      [!] /// `!`
    BIT_NEG_OP                  [~] /// `~`
    QUESTION_OP                 [?] /// `?`
    COALESCE_OP                 [??] /// `??`
    COLON_OP                    [:] /// `:`
    EQ_OP                       [==] /// `==`
    TRIPLE_EQ_OP                [===] /// `===`
    NOT_EQ_OP                   [!=] /// `!=`
    LESS_GREATER_OP             [<>] /// `<>`
    TRIPLE_NOT_EQ_OP            [!==] /// `!==`
    LT_EQ_OP                    [<=] /// `<=`
    GT_EQ_OP                    [>=] /// `>=`
    AND_OP                      [&&] /// `&&`
    OR_OP                       [||] /// `||`
    INC_OP                      [++] /// `++`
    DEC_OP                      [--] /// `--`
    PLUS_OP                     [+] /// `+`
    MINUS_OP                    [-] /// `-`
    MUL_OP                      [*] /// `*`
    DIV_OP                      [/] /// `/`
    BIT_AND_OP                  [&] /// `&`
    BIT_OR_OP                   [|] /// `|`
    BIT_XOR_OP                  [^] /// `^`
    MOD_OP                      [%] /// `%`
    MAPS_TO_OP                  [=>] /// `=>`
    PLUS_ASSIGN_OP              [+=] /// `+=`
    MINUS_ASSIGN_OP             [-=] /// `-=`
    MUL_ASSIGN_OP               [*=] /// `*=`
    DIV_ASSIGN_OP               [/=] /// `/=`
    AND_ASSIGN_OP               [&=] /// `&=`
    OR_ASSIGN_OP                [|=] /// `|=`
    XOR_ASSIGN_OP               [^=] /// `^=`
    SHL_ASSIGN_OP               [<<=] /// `<<=`
    SHR_ASSIGN_OP               [>>=] /// `>>=`
    USHR_ASSIGN_OP              [>>>=] /// `>>>=`
    SHL_OP                      [<<] /// `<<` (two joint `<` tokens)
    SHR_OP                      [>>] /// `>>` (two joint `>` tokens)
    USHR_OP                     [>>>] /// `>>>` (three joint `>` tokens)

    // keywords
    ABSTRACT_KW                 [abstract] kw /// `abstract`
    BREAK_KW                    [break] kw /// `break`
    CATCH_KW                    [catch] kw /// `catch`
    CLASS_KW                    [class] kw /// `class`
    CONTINUE_KW                 [continue] kw /// `continue`
    DELETE_KW                   [delete] kw /// `delete`
    DO_KW                       [do] kw /// `do`
    ELSE_KW                     [else] kw /// `else`
    ENUM_KW                     [enum] kw /// `enum`
    EXTENDS_KW                  [extends] kw /// `extends`
    FALSE_KW                    [false] kw /// `false`
    FINAL_KW                    [final] kw /// `final`
    FINALLY_KW                  [finally] kw /// `finally`
    FOR_KW                      [for] kw /// `for`
    GLOBAL_KW                   [global] kw /// `global`
    IF_KW                       [if] kw /// `if`
    IMPLEMENTS_KW               [implements] kw /// `implements`
    INSERT_KW                   [insert] kw /// `insert`
    INSTANCEOF_KW               [instanceof] kw /// `instanceof`
    INTERFACE_KW                [interface] kw /// `interface`
    MERGE_KW                    [merge] kw /// `merge`
    NEW_KW                      [new] kw /// `new`
    NULL_KW                     [null] kw /// `null`
    ON_KW                       [on] kw /// `on`
    OVERRIDE_KW                 [override] kw /// `override`
    PRIVATE_KW                  [private] kw /// `private`
    PROTECTED_KW                [protected] kw /// `protected`
    PUBLIC_KW                   [public] kw /// `public`
    RETURN_KW                   [return] kw /// `return`
    STATIC_KW                   [static] kw /// `static`
    SUPER_KW                    [super] kw /// `super`
    TESTMETHOD_KW               [testmethod] kw /// `testmethod`
    THIS_KW                     [this] kw /// `this`
    THROW_KW                    [throw] kw /// `throw`
    TRANSIENT_KW                [transient] kw /// `transient`
    TRUE_KW                     [true] kw /// `true`
    TRY_KW                      [try] kw /// `try`
    UNDELETE_KW                 [undelete] kw /// `undelete`
    UPDATE_KW                   [update] kw /// `update`
    UPSERT_KW                   [upsert] kw /// `upsert`
    VIRTUAL_KW                  [virtual] kw /// `virtual`
    VOID_KW                     [void] kw /// `void`
    WEBSERVICE_KW               [webservice] kw /// `webservice`
    WHILE_KW                    [while] kw /// `while`

    // query keywords
    SELECT_KW                   [select] kw /// `select`
    FROM_KW                     [from] kw /// `from`
    WHERE_KW                    [where] kw /// `where`
    WITH_KW                     [with] kw /// `with` (also `with sharing`)
    GROUP_KW                    [group] kw /// `group`
    BY_KW                       [by] kw /// `by`
    ORDER_KW                    [order] kw /// `order`
    LIMIT_KW                    [limit] kw /// `limit`
    OFFSET_KW                   [offset] kw /// `offset`
    AND_KW                      [and] kw /// `and`
    OR_KW                       [or] kw /// `or`
    NOT_KW                      [not] kw /// `not`
    LIKE_KW                     [like] kw /// `like`
    IN_KW                       [in] kw /// `in`
    INCLUDES_KW                 [includes] kw /// `includes`
    EXCLUDES_KW                 [excludes] kw /// `excludes`
    ASC_KW                      [asc] kw /// `asc`
    DESC_KW                     [desc] kw /// `desc`
    NULLS_KW                    [nulls] kw /// `nulls`
    FIRST_KW                    [first] kw /// `first`
    LAST_KW                     [last] kw /// `last`
    HAVING_KW                   [having] kw /// `having`
    ROLLUP_KW                   [rollup] kw /// `rollup`
    CUBE_KW                     [cube] kw /// `cube`
    USING_KW                    [using] kw /// `using`
    SCOPE_KW                    [scope] kw /// `scope`
    TYPEOF_KW                   [typeof] kw /// `typeof`
    WHEN_KW                     [when] kw /// `when` (also switch arms)
    THEN_KW                     [then] kw /// `then`
    END_KW                      [end] kw /// `end`
    AS_KW                       [as] kw /// `as` (also DML access level)
    ALL_KW                      [all] kw /// `all`
    ROWS_KW                     [rows] kw /// `rows`
    VIEW_KW                     [view] kw /// `view`
    REFERENCE_KW                [reference] kw /// `reference`
    TRACKING_KW                 [tracking] kw /// `tracking`
    VIEWSTAT_KW                 [viewstat] kw /// `viewstat`
    SECURITY_ENFORCED_KW        [security_enforced] kw /// `security_enforced`
    USER_MODE_KW                [user_mode] kw /// `user_mode`
    SYSTEM_MODE_KW              [system_mode] kw /// `system_mode`
    DATA_KW                     [data] kw /// `data`
    CATEGORY_KW                 [category] kw /// `category`
    AT_KW                       [at] kw /// `at`
    ABOVE_KW                    [above] kw /// `above`
    BELOW_KW                    [below] kw /// `below`
    ABOVE_OR_BELOW_KW           [above_or_below] kw /// `above_or_below`
    FIELDS_KW                   [fields] kw /// `fields`
    FIND_KW                     [find] kw /// `find`
    RETURNING_KW                [returning] kw /// `returning`

    // contextual keywords (identifiers remapped by the grammar)
    AFTER_KW                    [after] kw /// `after`
    BEFORE_KW                   [before] kw /// `before`
    GET_KW                      [get] kw /// `get`
    SET_KW                      [set] kw /// `set`
    INHERITED_KW                [inherited] kw /// `inherited`
    SHARING_KW                  [sharing] kw /// `sharing`
    WITHOUT_KW                  [without] kw /// `without`
    SWITCH_KW                   [switch] kw /// `switch`
    TRIGGER_KW                  [trigger] kw /// `trigger`
    USER_KW                     [user] kw /// `user`
    SYSTEM_KW                   [system] kw /// `system`

    // other tokens
    IDENT                       /// Identifier
    INT_NUMBER                  /// Integer literal `42`
    LONG_NUMBER                 /// Long literal `42L`
    DECIMAL_NUMBER              /// Decimal literal `4.2`
    STRING                      /// String literal `'foo'`
    DATE                        /// Query date literal `2020-01-01`
    DATE_TIME                   /// Query datetime literal `2020-01-01T00:00:00Z`
    CURRENCY                    /// Query currency literal `USD100.01`
    DATE_CONSTANT               /// Query date constant `TODAY`
    DATE_FORMULA                /// Query date formula name `LAST_N_DAYS`
    SEARCH_TERM                 /// SOSL search term `{foo}`
    WHITESPACE                  /// Whitespace
    COMMENT                     /// Comment
    PARSE_ERR                   /// Error syntax (either token or compound)

    // roots
    COMPILATION_UNIT            /// A class, interface or enum declaration
    TRIGGER_UNIT                /// A trigger declaration
    STMT_FRAGMENT               /// Root of a single parsed statement
    EXPR_FRAGMENT               /// Root of a single parsed expression
    QUERY_FRAGMENT              /// Root of a single parsed query
    LITERAL_FRAGMENT            /// Root of a single parsed literal

    // declarations
    CLASS_DECL                  /// Class declaration
    INTERFACE_DECL              /// Interface declaration
    ENUM_DECL                   /// Enum declaration
    CLASS_BODY                  /// `{ member* }` of a class
    INTERFACE_BODY              /// `{ method* }` of an interface
    ENUM_BODY                   /// `{ A, B }` of an enum
    EXTENDS_CLAUSE              /// `extends T`
    IMPLEMENTS_CLAUSE           /// `implements T, U`
    FIELD_DECL                  /// Field declaration
    METHOD_DECL                 /// Method declaration
    CONSTRUCTOR_DECL            /// Constructor declaration
    PROPERTY_DECL               /// Property declaration
    PROPERTY_ACCESSOR           /// `get { }` / `set;`
    INITIALIZER                 /// `static? { }` in a class body
    PARAM_LIST                  /// Formal parameter list
    PARAM                       /// Formal parameter
    VAR_DECLARATOR              /// `name (= init)?`
    MODIFIER_LIST               /// Modifiers and annotations
    SHARING_MODIFIER            /// `with sharing`, `without sharing`, `inherited sharing`
    ANNOTATION                  /// `@Name(...)`
    ANNOTATION_ARGS             /// Parenthesised annotation arguments
    ELEMENT_VALUE_PAIR          /// `key = value` in annotation arguments
    TRIGGER_CASE                /// `before insert`
    NAME                        /// Declared name
    NAME_REF                    /// Referenced name

    // types
    TYPE_REF                    /// Type reference `a.B<C>[]`
    TYPE_NAME                   /// Segment of a type reference
    TYPE_ARGS                   /// `<A, B>`

    // statements
    BLOCK                       /// `{ stmt* }`
    LOCAL_VAR_DECL              /// Local variable declaration
    EXPR_STMT                   /// Expression statement
    IF_STMT                     /// If statement
    SWITCH_STMT                 /// Switch statement
    WHEN_CLAUSE                 /// `when ... { }`
    WHEN_VALUE                  /// What a when arm matches
    WHEN_LITERAL                /// A single when literal
    WHEN_TYPE_PATTERN           /// `when Account a`
    FOR_STMT                    /// For statement
    FOR_CONTROL                 /// `init; cond; update`
    FOR_EACH_CONTROL            /// `Type x : expr`
    FOR_INIT                    /// For loop initializer
    FOR_UPDATE                  /// For loop update expressions
    WHILE_STMT                  /// While statement
    DO_WHILE_STMT               /// Do-while statement
    TRY_STMT                    /// Try statement
    CATCH_CLAUSE                /// Catch clause
    FINALLY_CLAUSE              /// Finally clause
    RETURN_STMT                 /// Return statement
    THROW_STMT                  /// Throw statement
    BREAK_STMT                  /// Break statement
    CONTINUE_STMT               /// Continue statement
    DML_STMT                    /// insert, update, delete, undelete, upsert or merge
    ACCESS_LEVEL                /// `as user` / `as system`
    RUN_AS_STMT                 /// `System.runAs(u) { }`
    EMPTY_STMT                  /// `;`
    CONDITION                   /// Parenthesised condition
    THEN_BRANCH                 /// Statement executed when the condition holds
    ELSE_BRANCH                 /// Statement executed otherwise

    // expressions
    LITERAL                     /// Literal expression
    PAREN_EXPR                  /// `(e)`
    THIS_EXPR                   /// `this`
    SUPER_EXPR                  /// `super`
    FIELD_ACCESS_EXPR           /// `e.name` / `e?.name`
    CALL_EXPR                   /// `e(args)`
    INDEX_EXPR                  /// `e[i]`
    NEW_EXPR                    /// `new T(...)`
    ARRAY_DIM                   /// `[n]` in `new T[n]`
    COLLECTION_INIT             /// `{a, b}` or `{k => v}`
    MAP_ENTRY                   /// `k => v`
    CAST_EXPR                   /// `(T) e`
    PREFIX_EXPR                 /// `-e`, `!e`, `++e`
    POSTFIX_EXPR                /// `e++`
    BIN_EXPR                    /// `a + b`
    INSTANCEOF_EXPR             /// `e instanceof T`
    TERNARY_EXPR                /// `c ? a : b`
    ASSIGN_EXPR                 /// `a = b`, `a += b`
    CLASS_REF_EXPR              /// `T.class`
    SOQL_EXPR                   /// `[SELECT ...]`
    SOSL_EXPR                   /// `[FIND ...]`
    ARG_LIST                    /// Call arguments

    // soql
    QUERY                       /// SOQL select query
    SELECT_LIST                 /// Selected fields
    SELECT_FIELD                /// One selected entry
    FIELD_PATH                  /// `a.b.c`
    FIELD_LIST                  /// Plain field list (TYPEOF branches)
    SOQL_FUNCTION               /// `COUNT(Id)`
    SUBQUERY                    /// `(SELECT ...)`
    TYPEOF_CLAUSE               /// `TYPEOF ... END`
    TYPEOF_WHEN                 /// `WHEN T THEN fields`
    TYPEOF_ELSE                 /// `ELSE fields`
    FROM_CLAUSE                 /// `FROM ...`
    FROM_ENTRY                  /// Object name with optional alias
    USING_SCOPE_CLAUSE          /// `USING SCOPE x`
    WHERE_CLAUSE                /// `WHERE ...`
    WITH_CLAUSE                 /// `WITH ...`
    DATA_CATEGORY_FILTER        /// `Geo__c AT usa__c`
    GROUP_BY_CLAUSE             /// `GROUP BY ...`
    HAVING_CLAUSE               /// `HAVING ...`
    ORDER_BY_CLAUSE             /// `ORDER BY ...`
    ORDER_BY_FIELD              /// One ordering entry
    LIMIT_CLAUSE                /// `LIMIT n`
    OFFSET_CLAUSE               /// `OFFSET n`
    ALL_ROWS_CLAUSE             /// `ALL ROWS`
    FOR_CLAUSE                  /// `FOR VIEW`, `FOR UPDATE`, ...
    UPDATE_CLAUSE               /// `UPDATE TRACKING`, ...
    SOQL_LOGICAL_EXPR           /// `a AND b`, `a OR b`
    SOQL_NOT_EXPR               /// `NOT a`
    SOQL_PAREN_COND             /// `(cond)`
    SOQL_COMPARISON             /// `field op value`
    SOQL_LITERAL                /// Literal query value (possibly signed)
    SOQL_DATE_FORMULA           /// `LAST_N_DAYS:5`
    SOQL_BIND                   /// `:expr`
    SOQL_VALUE_LIST             /// `(a, b)`

    // sosl
    SOSL_QUERY                  /// SOSL find query
    SEARCH_GROUP                /// `IN ALL FIELDS`
    RETURNING_CLAUSE            /// `RETURNING ...`
    RETURNING_SPEC              /// `Account(Id, Name WHERE ...)`
    SOSL_WITH_CLAUSE            /// `WITH DIVISION = 'x'`, ...

    // special
    __LAST                      #hidden
  }
}

use SyntaxKind::*;

impl SyntaxKind {
  pub fn is_trivia(self) -> bool {
    match self {
      WHITESPACE | COMMENT => true,
      _ => false,
    }
  }

  /// Whether the keyword is recognised by the grammar rather than the lexer.
  pub fn is_contextual_kw(self) -> bool {
    match self {
      AFTER_KW | BEFORE_KW | GET_KW | SET_KW | INHERITED_KW | SHARING_KW | WITHOUT_KW
      | SWITCH_KW | TRIGGER_KW | USER_KW | SYSTEM_KW => true,
      _ => false,
    }
  }

  pub fn is_literal(self) -> bool {
    match self {
      INT_NUMBER | LONG_NUMBER | DECIMAL_NUMBER | STRING | TRUE_KW | FALSE_KW | NULL_KW => true,
      _ => false,
    }
  }

  /// Human readable name used in error messages.
  pub fn describe(self) -> String {
    match self {
      EOF => "end of input".into(),
      IDENT => "identifier".into(),
      _ => match self.text() {
        Some(text) => format!("'{}'", text),
        None => format!("{:?}", self).to_lowercase(),
      },
    }
  }
}

impl From<u16> for SyntaxKind {
  fn from(d: u16) -> SyntaxKind {
    assert!(d <= (SyntaxKind::__LAST as u16));
    unsafe { std::mem::transmute::<u16, SyntaxKind>(d) }
  }
}

impl From<SyntaxKind> for u16 {
  fn from(k: SyntaxKind) -> u16 {
    k as u16
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use test_case::test_case;

  #[test_case(T![;], "';'" ; "semicolon")]
  #[test_case(T!['}'], "'}'" ; "right_brace")]
  #[test_case(T![class], "'class'" ; "class_keyword")]
  #[test_case(IDENT, "identifier" ; "identifier")]
  #[test_case(EOF, "end of input" ; "eof")]
  #[test_case(TYPE_REF, "type_ref" ; "node")]
  fn describe(kind: SyntaxKind, expected: &str) {
    assert_eq!(kind.describe(), expected);
  }

  #[test]
  fn u16_round_trip() {
    for raw in 0..(__LAST as u16) {
      assert_eq!(u16::from(SyntaxKind::from(raw)), raw);
    }
  }

  #[test]
  fn keywords() {
    assert!(T![testmethod].is_kw());
    assert!(T![sharing].is_kw());
    assert!(T![sharing].is_contextual_kw());
    assert!(!IDENT.is_kw());
    assert!(!T![;].is_kw());
  }
}
