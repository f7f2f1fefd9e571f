use crate::{
  ast::{support, AstChildren, AstNode, AstToken, Ident, ModifierOwner, NameOwner, String},
  SyntaxKind::{self, *},
  SmolStr, SyntaxNode, SyntaxToken, T,
};

trait ConcreteNode: AstNode {
  const SYNTAX_KIND: SyntaxKind;
}

macro_rules! ast_node_member {
  ($name:ident, $(#[$($m:tt)*])* $fld:ident, $node:ident) => {
    $(#[$($m)*])*
    pub fn $fld(&self) -> Option<$node> { support::child(&self.syntax) }
  };

  ($name:ident, $(#[$($m:tt)*])* $fld:ident, [$node:ident]) => {
    $(#[$($m)*])*
    pub fn $fld(&self) -> AstChildren<$node> { support::children(&self.syntax) }
  };

  ($name:ident, $(#[$($m:tt)*])* $fld:ident, {$($tok:tt)*}) => {
    $(#[$($m)*])*
    pub fn $fld(&self) -> Option<SyntaxToken> { support::token(&self.syntax, T![$($tok)*]) }
  };

  ($name:ident, $(#[$($m:tt)*])* $fld:ident, ( $( {$($tok:tt)*} )|+ )) => {
    $(#[$($m)*])*
    pub fn $fld(&self) -> Option<SyntaxToken> { support::token_any_of(&self.syntax, &[
      $(T![$($tok)*],)*
    ]) }
  };

  ($name:ident, $(#[$($m:tt)*])* $fld:ident, ( $ast_token:ident )) => {
    $(#[$($m)*])*
    pub fn $fld(&self) -> Option<$ast_token> { support::token_kind(&self.syntax) }
  };

  ($name:ident, $(#[$($m:tt)*])* $fld:ident, ( $( $syntax:ident ).+ => $node:ident )) => {
    $(#[$($m)*])*
    pub fn $fld(&self) -> Option<$node> { support::nested_child(&self.syntax, &[
      $(SyntaxKind::$syntax,)*
    ]) }
  };
}

macro_rules! ast_node {
  (
    $(#[$($m:tt)*])*
    pub struct $name:ident($kind:ident) {
      $(
        $(#[$($fld_m:tt)*])*
        $fld:ident: $t:tt,
      )*
    }
  ) => {
    $(#[$($m)*])*
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct $name {
      pub(crate) syntax: SyntaxNode,
    }

    impl $name {
      $(
        ast_node_member!($name, $(#[$($fld_m)*])* $fld, $t);
      )*
    }

    impl AstNode for $name {
      #[inline]
      fn can_cast(kind: SyntaxKind) -> bool { kind == SyntaxKind::$kind }

      fn cast(syntax: SyntaxNode) -> Option<Self> {
        if Self::can_cast(syntax.kind()) {
          Some(Self { syntax })
        } else {
          None
        }
      }
      fn syntax(&self) -> &SyntaxNode { &self.syntax }
    }

    impl ConcreteNode for $name {
      const SYNTAX_KIND: SyntaxKind = SyntaxKind::$kind;
    }
  };
}

macro_rules! ast_kind {
  (
    $(#[$($m:tt)*])*
    pub enum $name:ident {
      $(
        $(#[$($variant_m:tt)*])*
        $variant:ident($inner:ident),
      )*
    }
  ) => {
    $(#[$($m)*])*
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub enum $name {
      $(
        $(#[$($variant_m)*])*
        $variant($inner),
      )*
    }

    impl AstNode for $name {
      fn can_cast(kind: SyntaxKind) -> bool {
        match kind {
          $(
            <$inner as ConcreteNode>::SYNTAX_KIND => true,
          )*
          _ => false,
        }
      }

      fn cast(syntax: SyntaxNode) -> Option<Self> {
        match syntax.kind() {
          $(
            <$inner as ConcreteNode>::SYNTAX_KIND => Some($name::$variant($inner { syntax })),
          )*
          _ => None,
        }
      }

      fn syntax(&self) -> &SyntaxNode {
        match self {
          $(
            $name::$variant(it) => &it.syntax,
          )*
        }
      }
    }
  };
}

macro_rules! op_kind {
  (
    $(#[$($m:tt)*])*
    pub enum $name:ident {
      $(
        $(#[$($variant_m:tt)*])*
        $variant:ident($($tok:tt)*),
      )*
    }
  ) => {
    $(#[$($m)*])*
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub enum $name {
      $(
        $(#[$($variant_m)*])*
        $variant(SyntaxToken),
      )*
    }

    impl AstToken for $name {
      fn can_cast(token: SyntaxKind) -> bool
      where
        Self: Sized
      {
        match token {
          $(
            T![$($tok)*] => true,
          )*
          _ => false,
        }
      }

      fn cast(syntax: SyntaxToken) -> Option<Self>
      where
        Self: Sized
      {
        match syntax.kind() {
          $(
            T![$($tok)*] => Some($name::$variant(syntax)),
          )*
          _ => None,
        }
      }

      fn syntax(&self) -> &SyntaxToken {
        match self {
          $(
            $name::$variant(s) => s,
          )*
        }
      }
    }
  }
}

macro_rules! impl_owner {
  ($trait:ident for $($name:ident),+ $(,)?) => {
    $(impl $trait for $name {})+
  };
}

/// Child nodes of `node` that come after its first token of one of `kinds`.
fn children_after<N: AstNode>(
  node: &SyntaxNode,
  kinds: &'static [SyntaxKind],
) -> impl Iterator<Item = N> {
  node
    .children_with_tokens()
    .skip_while(move |it| !kinds.contains(&it.kind()))
    .filter_map(|it| it.into_node())
    .filter_map(N::cast)
}

// roots

ast_node! {
  /// A class, interface or enum source file.
  pub struct CompilationUnit(COMPILATION_UNIT) {
    type_decl: TypeDecl,
  }
}

ast_node! {
  /// `trigger Name on Object (before insert, ...) { ... }`
  pub struct TriggerUnit(TRIGGER_UNIT) {
    trigger_token: {trigger},
    on_token: {on},
    object: NameRef,
    cases: [TriggerCase],
    body: Block,
  }
}

ast_node! {
  /// `before insert`, `after update`, ...
  pub struct TriggerCase(TRIGGER_CASE) {
    timing: ({before} | {after}),
    event: ({insert} | {update} | {delete} | {undelete}),
  }
}

ast_node! {
  pub struct StmtFragment(STMT_FRAGMENT) {
    stmt: Stmt,
  }
}

ast_node! {
  pub struct ExprFragment(EXPR_FRAGMENT) {
    expr: Expr,
  }
}

ast_node! {
  pub struct QueryFragment(QUERY_FRAGMENT) {
    query: Query,
  }
}

ast_node! {
  pub struct LiteralFragment(LITERAL_FRAGMENT) {
    literal: Literal,
  }
}

ast_kind! {
  /// Root of any parse.
  pub enum Root {
    CompilationUnit(CompilationUnit),
    TriggerUnit(TriggerUnit),
    Stmt(StmtFragment),
    Expr(ExprFragment),
    Query(QueryFragment),
    Literal(LiteralFragment),
  }
}

// names

ast_node! {
  /// Declared name.
  pub struct Name(NAME) {
    ident: (Ident),
  }
}

ast_node! {
  /// Referenced name, also used for plain identifier expressions.
  pub struct NameRef(NAME_REF) {
    ident: (Ident),
  }
}

impl Name {
  pub fn text(&self) -> Option<SmolStr> {
    self.syntax.first_token().map(|t| t.text().clone())
  }
}

impl NameRef {
  pub fn text(&self) -> Option<SmolStr> {
    self.syntax.first_token().map(|t| t.text().clone())
  }
}

// declarations

ast_node! {
  /// Modifiers, annotations and sharing modifiers in source order.
  pub struct ModifierList(MODIFIER_LIST) {
    annotations: [Annotation],
    sharing: SharingModifier,
  }
}

impl ModifierList {
  /// Keyword modifiers such as `public` or `static`.
  pub fn modifiers(&self) -> impl Iterator<Item = SyntaxToken> {
    self
      .syntax
      .children_with_tokens()
      .filter_map(|it| it.into_token())
      .filter(|it| it.kind().is_kw())
  }

  pub fn has(&self, kw: SyntaxKind) -> bool {
    self.modifiers().any(|it| it.kind() == kw)
  }
}

ast_node! {
  /// `@IsTest(SeeAllData=true)`
  pub struct Annotation(ANNOTATION) {
    at_token: {@},
    path: [NameRef],
    args: AnnotationArgs,
  }
}

impl Annotation {
  /// The dotted name, as written.
  pub fn name(&self) -> std::string::String {
    self
      .path()
      .filter_map(|it| it.text().map(|t| t.to_string()))
      .collect::<Vec<_>>()
      .join(".")
  }
}

ast_node! {
  pub struct AnnotationArgs(ANNOTATION_ARGS) {
    pairs: [ElementValuePair],
    value: Expr,
  }
}

ast_node! {
  /// `name = value` inside annotation arguments.
  pub struct ElementValuePair(ELEMENT_VALUE_PAIR) {
    key: NameRef,
    assign_token: {=},
  }
}

impl ElementValuePair {
  pub fn value(&self) -> Option<Expr> {
    children_after(&self.syntax, &[T![=]]).next()
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SharingKind {
  With,
  Without,
  Inherited,
}

ast_node! {
  /// `with sharing`, `without sharing` or `inherited sharing`.
  pub struct SharingModifier(SHARING_MODIFIER) {
    sharing_token: {sharing},
  }
}

impl SharingModifier {
  pub fn kind(&self) -> Option<SharingKind> {
    match self.syntax.first_token()?.kind() {
      T![with] => Some(SharingKind::With),
      T![without] => Some(SharingKind::Without),
      T![inherited] => Some(SharingKind::Inherited),
      _ => None,
    }
  }
}

ast_node! {
  pub struct ClassDecl(CLASS_DECL) {
    class_token: {class},
    extends: ExtendsClause,
    implements: ImplementsClause,
    body: ClassBody,
  }
}

ast_node! {
  pub struct InterfaceDecl(INTERFACE_DECL) {
    interface_token: {interface},
    extends: ExtendsClause,
    body: InterfaceBody,
  }
}

ast_node! {
  pub struct EnumDecl(ENUM_DECL) {
    enum_token: {enum},
    body: EnumBody,
  }
}

ast_kind! {
  /// A top level or nested type declaration.
  pub enum TypeDecl {
    Class(ClassDecl),
    Interface(InterfaceDecl),
    Enum(EnumDecl),
  }
}

ast_node! {
  pub struct ExtendsClause(EXTENDS_CLAUSE) {
    extends_token: {extends},
    types: [TypeRef],
  }
}

ast_node! {
  pub struct ImplementsClause(IMPLEMENTS_CLAUSE) {
    implements_token: {implements},
    types: [TypeRef],
  }
}

ast_node! {
  pub struct ClassBody(CLASS_BODY) {
    l_curly_token: {'{'},
    members: [Member],
    r_curly_token: {'}'},
  }
}

ast_node! {
  pub struct InterfaceBody(INTERFACE_BODY) {
    methods: [MethodDecl],
  }
}

ast_node! {
  pub struct EnumBody(ENUM_BODY) {
    values: [Name],
  }
}

ast_node! {
  /// `Integer a = 1, b;` in a class body.
  pub struct FieldDecl(FIELD_DECL) {
    ty: TypeRef,
    declarators: [VarDeclarator],
  }
}

ast_node! {
  pub struct MethodDecl(METHOD_DECL) {
    void_token: {void},
    return_type: TypeRef,
    params: ParamList,
    body: Block,
  }
}

ast_node! {
  pub struct ConstructorDecl(CONSTRUCTOR_DECL) {
    params: ParamList,
    body: Block,
  }
}

ast_node! {
  /// `public String name { get; private set; }`
  pub struct PropertyDecl(PROPERTY_DECL) {
    ty: TypeRef,
    accessors: [PropertyAccessor],
  }
}

ast_node! {
  pub struct PropertyAccessor(PROPERTY_ACCESSOR) {
    get_token: {get},
    set_token: {set},
    body: Block,
  }
}

ast_node! {
  /// `static { ... }` or `{ ... }` in a class body.
  pub struct Initializer(INITIALIZER) {
    static_token: {static},
    body: Block,
  }
}

ast_kind! {
  /// A declaration inside a class body.
  pub enum Member {
    Field(FieldDecl),
    Method(MethodDecl),
    Constructor(ConstructorDecl),
    Property(PropertyDecl),
    Initializer(Initializer),
    Class(ClassDecl),
    Interface(InterfaceDecl),
    Enum(EnumDecl),
  }
}

ast_node! {
  pub struct ParamList(PARAM_LIST) {
    l_paren_token: {'('},
    params: [Param],
    r_paren_token: {')'},
  }
}

ast_node! {
  pub struct Param(PARAM) {
    ty: TypeRef,
  }
}

ast_node! {
  /// `name` or `name = init`.
  pub struct VarDeclarator(VAR_DECLARATOR) {
    assign_token: {=},
    init: Expr,
  }
}

impl_owner!(NameOwner for
  ClassDecl,
  InterfaceDecl,
  EnumDecl,
  MethodDecl,
  ConstructorDecl,
  PropertyDecl,
  Param,
  VarDeclarator,
  TriggerUnit,
  WhenTypePattern,
  CatchClause,
  ForEachControl,
);

impl_owner!(ModifierOwner for
  ClassDecl,
  InterfaceDecl,
  EnumDecl,
  FieldDecl,
  MethodDecl,
  ConstructorDecl,
  PropertyDecl,
  PropertyAccessor,
  Param,
  LocalVarDecl,
  CatchClause,
  ForEachControl,
);

// types

ast_node! {
  /// `List<Account>`, `Schema.SObjectField[]`
  pub struct TypeRef(TYPE_REF) {
    segments: [TypeName],
  }
}

impl TypeRef {
  /// Number of `[]` suffixes.
  pub fn array_rank(&self) -> usize {
    self
      .syntax
      .children_with_tokens()
      .filter(|it| it.kind() == T!['['])
      .count()
  }
}

ast_node! {
  pub struct TypeName(TYPE_NAME) {
    ident: (Ident),
    args: TypeArgs,
  }
}

ast_node! {
  pub struct TypeArgs(TYPE_ARGS) {
    types: [TypeRef],
  }
}

// statements

ast_node! {
  pub struct Block(BLOCK) {
    l_curly_token: {'{'},
    stmts: [Stmt],
    r_curly_token: {'}'},
  }
}

ast_node! {
  pub struct LocalVarDecl(LOCAL_VAR_DECL) {
    ty: TypeRef,
    declarators: [VarDeclarator],
  }
}

ast_node! {
  pub struct ExprStmt(EXPR_STMT) {
    expr: Expr,
    semicolon_token: {;},
  }
}

ast_node! {
  /// A parenthesised condition, or the condition of a `for` loop.
  pub struct Condition(CONDITION) {
    expr: Expr,
  }
}

ast_node! {
  pub struct IfStmt(IF_STMT) {
    if_token: {if},
    condition: Condition,
    then_branch: (THEN_BRANCH => Stmt),
    else_branch: (ELSE_BRANCH => Stmt),
  }
}

ast_node! {
  pub struct WhileStmt(WHILE_STMT) {
    while_token: {while},
    condition: Condition,
    body: Stmt,
  }
}

ast_node! {
  pub struct DoWhileStmt(DO_WHILE_STMT) {
    do_token: {do},
    body: Block,
    condition: Condition,
  }
}

ast_node! {
  pub struct ForStmt(FOR_STMT) {
    for_token: {for},
    control: ForControl,
    each_control: ForEachControl,
    body: Stmt,
  }
}

ast_node! {
  /// `init; condition; update`
  pub struct ForControl(FOR_CONTROL) {
    init: ForInit,
    condition: Condition,
    update: ForUpdate,
  }
}

ast_node! {
  pub struct ForInit(FOR_INIT) {
    ty: TypeRef,
    declarators: [VarDeclarator],
    exprs: [Expr],
  }
}

ast_node! {
  pub struct ForUpdate(FOR_UPDATE) {
    exprs: [Expr],
  }
}

ast_node! {
  /// `Account a : accounts`
  pub struct ForEachControl(FOR_EACH_CONTROL) {
    ty: TypeRef,
    colon_token: {:},
  }
}

impl ForEachControl {
  pub fn iterable(&self) -> Option<Expr> {
    children_after(&self.syntax, &[T![:]]).next()
  }
}

ast_node! {
  pub struct TryStmt(TRY_STMT) {
    try_token: {try},
    body: Block,
    catches: [CatchClause],
    finally: FinallyClause,
  }
}

ast_node! {
  pub struct CatchClause(CATCH_CLAUSE) {
    ty: TypeRef,
    body: Block,
  }
}

ast_node! {
  pub struct FinallyClause(FINALLY_CLAUSE) {
    body: Block,
  }
}

ast_node! {
  pub struct ReturnStmt(RETURN_STMT) {
    return_token: {return},
    expr: Expr,
  }
}

ast_node! {
  pub struct ThrowStmt(THROW_STMT) {
    throw_token: {throw},
    expr: Expr,
  }
}

ast_node! {
  pub struct BreakStmt(BREAK_STMT) {
    break_token: {break},
  }
}

ast_node! {
  pub struct ContinueStmt(CONTINUE_STMT) {
    continue_token: {continue},
  }
}

ast_node! {
  /// `;`
  pub struct EmptyStmt(EMPTY_STMT) {
    semicolon_token: {;},
  }
}

ast_node! {
  /// `insert as user records;`, `merge master duplicate;`
  pub struct DmlStmt(DML_STMT) {
    op: ({insert} | {update} | {delete} | {undelete} | {upsert} | {merge}),
    access_level: AccessLevel,
    targets: [Expr],
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessMode {
  User,
  System,
}

ast_node! {
  /// `as user` / `as system`
  pub struct AccessLevel(ACCESS_LEVEL) {
    as_token: {as},
  }
}

impl AccessLevel {
  pub fn mode(&self) -> Option<AccessMode> {
    if support::token(&self.syntax, T![user]).is_some() {
      Some(AccessMode::User)
    } else if support::token(&self.syntax, T![system]).is_some() {
      Some(AccessMode::System)
    } else {
      None
    }
  }
}

ast_node! {
  /// `System.runAs(user) { ... }`
  pub struct RunAsStmt(RUN_AS_STMT) {
    args: ArgList,
    body: Block,
  }
}

ast_node! {
  /// `switch on expr { when ... { } }`
  pub struct SwitchStmt(SWITCH_STMT) {
    switch_token: {switch},
    on_token: {on},
    expr: Expr,
    when_clauses: [WhenClause],
  }
}

ast_node! {
  pub struct WhenClause(WHEN_CLAUSE) {
    when_token: {when},
    value: WhenValue,
    body: Block,
  }
}

ast_node! {
  pub struct WhenValue(WHEN_VALUE) {
    else_token: {else},
    type_pattern: WhenTypePattern,
    literals: [WhenLiteral],
  }
}

/// What a `when` arm matches.
#[derive(Debug, Clone)]
pub enum WhenPattern {
  Else,
  Type(WhenTypePattern),
  Literals(AstChildren<WhenLiteral>),
}

impl WhenValue {
  pub fn pattern(&self) -> WhenPattern {
    if self.else_token().is_some() {
      WhenPattern::Else
    } else if let Some(pattern) = self.type_pattern() {
      WhenPattern::Type(pattern)
    } else {
      WhenPattern::Literals(self.literals())
    }
  }
}

ast_node! {
  /// `when Account a`
  pub struct WhenTypePattern(WHEN_TYPE_PATTERN) {
    ty: TypeRef,
  }
}

ast_node! {
  /// `1`, `-2`, `'text'`, `ENUM_VALUE` or a parenthesised literal.
  pub struct WhenLiteral(WHEN_LITERAL) {
    l_paren_token: {'('},
    inner: WhenLiteral,
  }
}

impl WhenLiteral {
  pub fn is_parenthesized(&self) -> bool {
    self.l_paren_token().is_some()
  }

  /// The literal with every level of parentheses removed.
  pub fn unparenthesized(&self) -> WhenLiteral {
    let mut literal = self.clone();
    while let Some(inner) = literal.inner() {
      literal = inner;
    }
    literal
  }

  /// Source text of the literal without parentheses, signs included.
  pub fn value_text(&self) -> std::string::String {
    self
      .unparenthesized()
      .syntax
      .children_with_tokens()
      .filter_map(|it| it.into_token())
      .filter(|it| !it.kind().is_trivia())
      .map(|it| it.text().to_string())
      .collect()
  }
}

ast_kind! {
  pub enum Stmt {
    Block(Block),
    If(IfStmt),
    While(WhileStmt),
    DoWhile(DoWhileStmt),
    For(ForStmt),
    Switch(SwitchStmt),
    Try(TryStmt),
    Return(ReturnStmt),
    Throw(ThrowStmt),
    Break(BreakStmt),
    Continue(ContinueStmt),
    Dml(DmlStmt),
    RunAs(RunAsStmt),
    LocalVar(LocalVarDecl),
    Expr(ExprStmt),
    Empty(EmptyStmt),
  }
}

// expressions

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
  Integer,
  Long,
  Decimal,
  String,
  Boolean,
  Null,
}

ast_node! {
  pub struct Literal(LITERAL) {
    string: (String),
  }
}

impl Literal {
  pub fn token(&self) -> Option<SyntaxToken> {
    self
      .syntax
      .children_with_tokens()
      .filter_map(|it| it.into_token())
      .find(|it| !it.kind().is_trivia())
  }

  pub fn kind(&self) -> Option<LiteralKind> {
    let kind = match self.token()?.kind() {
      INT_NUMBER => LiteralKind::Integer,
      LONG_NUMBER => LiteralKind::Long,
      DECIMAL_NUMBER => LiteralKind::Decimal,
      STRING => LiteralKind::String,
      T![true] | T![false] => LiteralKind::Boolean,
      T![null] => LiteralKind::Null,
      _ => return None,
    };

    Some(kind)
  }

  pub fn text(&self) -> Option<SmolStr> {
    self.syntax.first_token().map(|t| t.text().clone())
  }
}

ast_node! {
  pub struct ParenExpr(PAREN_EXPR) {
    l_paren_token: {'('},
    expr: Expr,
    r_paren_token: {')'},
  }
}

ast_node! {
  pub struct ThisExpr(THIS_EXPR) {
    this_token: {this},
  }
}

ast_node! {
  pub struct SuperExpr(SUPER_EXPR) {
    super_token: {super},
  }
}

ast_node! {
  /// `target.field` or `target?.field`
  pub struct FieldAccessExpr(FIELD_ACCESS_EXPR) {
    target: Expr,
    safe_dot_token: {?.},
  }
}

impl FieldAccessExpr {
  pub fn field(&self) -> Option<NameRef> {
    children_after(&self.syntax, &[T![.], T![?.]]).next()
  }

  pub fn is_safe(&self) -> bool {
    self.safe_dot_token().is_some()
  }
}

ast_node! {
  /// `Account.class`
  pub struct ClassRefExpr(CLASS_REF_EXPR) {
    target: Expr,
    class_token: {class},
  }
}

ast_node! {
  pub struct CallExpr(CALL_EXPR) {
    callee: Expr,
    args: ArgList,
  }
}

ast_node! {
  pub struct ArgList(ARG_LIST) {
    l_paren_token: {'('},
    args: [Expr],
    r_paren_token: {')'},
  }
}

ast_node! {
  pub struct IndexExpr(INDEX_EXPR) {
    base: Expr,
    l_brack_token: {'['},
  }
}

impl IndexExpr {
  pub fn index(&self) -> Option<Expr> {
    support::children(&self.syntax).nth(1)
  }
}

ast_node! {
  /// `new T(...)`, `new T[n]`, `new T{...}`
  pub struct NewExpr(NEW_EXPR) {
    new_token: {new},
    ty: TypeRef,
    args: ArgList,
    dim: ArrayDim,
    init: CollectionInit,
  }
}

ast_node! {
  pub struct ArrayDim(ARRAY_DIM) {
    size: Expr,
  }
}

ast_node! {
  /// `{1, 2}` or `{'a' => 1}`
  pub struct CollectionInit(COLLECTION_INIT) {
    entries: [MapEntry],
    elements: [Expr],
  }
}

ast_node! {
  pub struct MapEntry(MAP_ENTRY) {
    key: Expr,
    maps_to_token: {=>},
  }
}

impl MapEntry {
  pub fn value(&self) -> Option<Expr> {
    children_after(&self.syntax, &[T![=>]]).next()
  }
}

ast_node! {
  /// `(Account) value`
  pub struct CastExpr(CAST_EXPR) {
    ty: TypeRef,
    expr: Expr,
  }
}

op_kind! {
  /// Prefix operator
  pub enum PrefixOp {
    Plus(+),
    Minus(-),
    Not(!),
    BitNeg(~),
    Increment(++),
    Decrement(--),
  }
}

ast_node! {
  pub struct PrefixExpr(PREFIX_EXPR) {
    op: (PrefixOp),
    expr: Expr,
  }
}

op_kind! {
  /// Postfix operator
  pub enum PostfixOp {
    Increment(++),
    Decrement(--),
  }
}

ast_node! {
  pub struct PostfixExpr(POSTFIX_EXPR) {
    expr: Expr,
    op: (PostfixOp),
  }
}

op_kind! {
  /// Binary operator
  pub enum BinaryOp {
    Mult(*),
    Div(/),
    Modulo(%),
    Plus(+),
    Minus(-),
    ShiftL(<<),
    ShiftR(>>),
    UnsignedShiftR(>>>),
    GreaterThan(>),
    GreaterThanOrEquals(>=),
    LessThan(<),
    LessThanOrEquals(<=),
    Equals(==),
    ExactEquals(===),
    NotEquals(!=),
    LessGreater(<>),
    ExactNotEquals(!==),
    BitAnd(&),
    BitXor(^),
    BitOr(|),
    And(&&),
    Or(||),
    Coalesce(??),
  }
}

ast_node! {
  /// A binary expression.
  pub struct BinExpr(BIN_EXPR) {
    op: (BinaryOp),
  }
}

impl BinExpr {
  pub fn lhs(&self) -> Option<Expr> {
    support::children(&self.syntax).next()
  }

  pub fn rhs(&self) -> Option<Expr> {
    support::children(&self.syntax).nth(1)
  }
}

ast_node! {
  /// `expr instanceof Type`
  pub struct InstanceOfExpr(INSTANCEOF_EXPR) {
    expr: Expr,
    instanceof_token: {instanceof},
    ty: TypeRef,
  }
}

ast_node! {
  /// `cond ? a : b`
  pub struct TernaryExpr(TERNARY_EXPR) {
    condition: Expr,
    question_token: {?},
    colon_token: {:},
  }
}

impl TernaryExpr {
  pub fn then_expr(&self) -> Option<Expr> {
    support::children(&self.syntax).nth(1)
  }

  pub fn else_expr(&self) -> Option<Expr> {
    support::children(&self.syntax).nth(2)
  }
}

op_kind! {
  /// Assignment operator
  pub enum AssignOp {
    Assign(=),
    PlusAssign(+=),
    MinusAssign(-=),
    MulAssign(*=),
    DivAssign(/=),
    AndAssign(&=),
    OrAssign(|=),
    XorAssign(^=),
    ShiftLAssign(<<=),
    ShiftRAssign(>>=),
    UnsignedShiftRAssign(>>>=),
  }
}

ast_node! {
  pub struct AssignExpr(ASSIGN_EXPR) {
    target: Expr,
    op: (AssignOp),
  }
}

impl AssignExpr {
  pub fn value(&self) -> Option<Expr> {
    support::children(&self.syntax).nth(1)
  }
}

ast_node! {
  /// `[SELECT ...]`
  pub struct SoqlExpr(SOQL_EXPR) {
    query: SoqlQuery,
  }
}

ast_node! {
  /// `[FIND ...]`
  pub struct SoslExpr(SOSL_EXPR) {
    query: SoslQuery,
  }
}

ast_kind! {
  pub enum Expr {
    Binary(BinExpr),
    Prefix(PrefixExpr),
    Postfix(PostfixExpr),
    Literal(Literal),
    Name(NameRef),
    Call(CallExpr),
    FieldAccess(FieldAccessExpr),
    Index(IndexExpr),
    New(NewExpr),
    Cast(CastExpr),
    Paren(ParenExpr),
    InstanceOf(InstanceOfExpr),
    Ternary(TernaryExpr),
    Assign(AssignExpr),
    SoqlQuery(SoqlExpr),
    SoslQuery(SoslExpr),
    This(ThisExpr),
    Super(SuperExpr),
    ClassRef(ClassRefExpr),
  }
}

// soql

ast_node! {
  /// `SELECT ... FROM ...`
  pub struct SoqlQuery(QUERY) {
    select_token: {select},
    select_list: SelectList,
    from_clause: FromClause,
    where_clause: WhereClause,
    with_clause: WithClause,
    group_by_clause: GroupByClause,
    order_by_clause: OrderByClause,
    limit_clause: LimitClause,
    offset_clause: OffsetClause,
  }
}

ast_node! {
  pub struct SelectList(SELECT_LIST) {
    fields: [SelectField],
  }
}

ast_node! {
  /// One entry of the select list, with an optional alias.
  pub struct SelectField(SELECT_FIELD) {
    path: FieldPath,
    function: SoqlFunction,
    subquery: Subquery,
    typeof_clause: TypeofClause,
    alias: Name,
  }
}

ast_node! {
  /// `Account.Owner.Name`
  pub struct FieldPath(FIELD_PATH) {}
}

impl FieldPath {
  pub fn segments(&self) -> impl Iterator<Item = SyntaxToken> {
    self
      .syntax
      .children_with_tokens()
      .filter_map(|it| it.into_token())
      .filter(|it| it.kind() == IDENT)
  }

  /// The dotted path, as written.
  pub fn text(&self) -> std::string::String {
    self
      .segments()
      .map(|it| it.text().to_string())
      .collect::<Vec<_>>()
      .join(".")
  }
}

ast_node! {
  /// `COUNT(Id)`, `FIELDS(ALL)`
  pub struct SoqlFunction(SOQL_FUNCTION) {
    l_paren_token: {'('},
    /// Field arguments, `ALL` in `FIELDS(ALL)` included.
    args: [FieldPath],
    /// Literal and bind arguments, `'mi'` in `DISTANCE(..., 'mi')`.
    values: [SoqlValue],
    r_paren_token: {')'},
  }
}

impl SoqlFunction {
  pub fn name(&self) -> Option<SyntaxToken> {
    self.syntax.first_token()
  }
}

ast_node! {
  pub struct Subquery(SUBQUERY) {
    query: SoqlQuery,
  }
}

ast_node! {
  /// `TYPEOF What WHEN Account THEN Phone ELSE Name END`
  pub struct TypeofClause(TYPEOF_CLAUSE) {
    field: FieldPath,
    when_arms: [TypeofWhen],
    else_arm: TypeofElse,
  }
}

ast_node! {
  pub struct TypeofWhen(TYPEOF_WHEN) {
    object: NameRef,
    fields: FieldList,
  }
}

ast_node! {
  pub struct TypeofElse(TYPEOF_ELSE) {
    fields: FieldList,
  }
}

ast_node! {
  pub struct FieldList(FIELD_LIST) {
    fields: [FieldPath],
    functions: [SoqlFunction],
  }
}

ast_node! {
  pub struct FromClause(FROM_CLAUSE) {
    entries: [FromEntry],
  }
}

ast_node! {
  pub struct FromEntry(FROM_ENTRY) {
    object: FieldPath,
    alias: Name,
  }
}

ast_node! {
  pub struct WhereClause(WHERE_CLAUSE) {
    condition: SoqlCondition,
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryMode {
  SecurityEnforced,
  UserMode,
  SystemMode,
}

ast_node! {
  /// `WITH SECURITY_ENFORCED`, `WITH USER_MODE`, `WITH DATA CATEGORY ...`
  pub struct WithClause(WITH_CLAUSE) {
    filters: [DataCategoryFilter],
    condition: SoqlCondition,
  }
}

impl WithClause {
  pub fn mode(&self) -> Option<QueryMode> {
    let token = support::token_any_of(
      &self.syntax,
      &[T![security_enforced], T![user_mode], T![system_mode]],
    )?;

    match token.kind() {
      T![security_enforced] => Some(QueryMode::SecurityEnforced),
      T![user_mode] => Some(QueryMode::UserMode),
      _ => Some(QueryMode::SystemMode),
    }
  }
}

ast_node! {
  pub struct DataCategoryFilter(DATA_CATEGORY_FILTER) {
    selector: ({at} | {above} | {below} | {above_or_below}),
    names: [NameRef],
  }
}

ast_node! {
  pub struct GroupByClause(GROUP_BY_CLAUSE) {
    rollup_token: {rollup},
    cube_token: {cube},
    fields: [FieldPath],
    having: HavingClause,
  }
}

ast_node! {
  pub struct HavingClause(HAVING_CLAUSE) {
    condition: SoqlCondition,
  }
}

ast_node! {
  pub struct OrderByClause(ORDER_BY_CLAUSE) {
    fields: [OrderByField],
  }
}

ast_node! {
  /// `Name DESC NULLS LAST`
  pub struct OrderByField(ORDER_BY_FIELD) {
    path: FieldPath,
    function: SoqlFunction,
    direction: ({asc} | {desc}),
    nulls: ({first} | {last}),
  }
}

ast_node! {
  pub struct LimitClause(LIMIT_CLAUSE) {
    value: SoqlValue,
  }
}

ast_node! {
  pub struct OffsetClause(OFFSET_CLAUSE) {
    value: SoqlValue,
  }
}

ast_node! {
  /// `a AND b`, `a OR b`
  pub struct SoqlLogicalExpr(SOQL_LOGICAL_EXPR) {
    op: ({and} | {or}),
  }
}

impl SoqlLogicalExpr {
  pub fn lhs(&self) -> Option<SoqlCondition> {
    support::children(&self.syntax).next()
  }

  pub fn rhs(&self) -> Option<SoqlCondition> {
    support::children(&self.syntax).nth(1)
  }
}

ast_node! {
  pub struct SoqlNotExpr(SOQL_NOT_EXPR) {
    not_token: {not},
    condition: SoqlCondition,
  }
}

ast_node! {
  pub struct SoqlParenCond(SOQL_PAREN_COND) {
    condition: SoqlCondition,
  }
}

ast_node! {
  /// `field op value`, `field IN (...)`
  pub struct SoqlComparison(SOQL_COMPARISON) {
    field: FieldPath,
    function: SoqlFunction,
    value: SoqlValue,
  }
}

impl SoqlComparison {
  pub fn op(&self) -> Option<SyntaxToken> {
    support::token_any_of(
      &self.syntax,
      &[
        T![=],
        T![!=],
        T![<>],
        T![<],
        T![>],
        T![<=],
        T![>=],
        T![like],
        T![in],
        T![includes],
        T![excludes],
      ],
    )
  }

  pub fn is_negated(&self) -> bool {
    support::token(&self.syntax, T![not]).is_some()
  }
}

ast_kind! {
  pub enum SoqlCondition {
    Logical(SoqlLogicalExpr),
    Not(SoqlNotExpr),
    Paren(SoqlParenCond),
    Comparison(SoqlComparison),
  }
}

ast_node! {
  /// A literal query value, possibly signed: `-100.123`, `USD200`,
  /// `2020-01-01T12:00:00Z`, `LAST_QUARTER`.
  pub struct SoqlLiteral(SOQL_LITERAL) {
    minus_token: {-},
  }
}

impl SoqlLiteral {
  pub fn token(&self) -> Option<SyntaxToken> {
    self
      .syntax
      .children_with_tokens()
      .filter_map(|it| it.into_token())
      .find(|it| !it.kind().is_trivia() && it.kind() != T![-] && it.kind() != T![+])
  }

  pub fn is_negative(&self) -> bool {
    self.minus_token().is_some()
  }
}

ast_node! {
  /// `LAST_N_DAYS:30`
  pub struct SoqlDateFormula(SOQL_DATE_FORMULA) {
    colon_token: {:},
  }
}

ast_node! {
  /// `:expr`
  pub struct SoqlBind(SOQL_BIND) {
    colon_token: {:},
    expr: Expr,
  }
}

ast_node! {
  pub struct SoqlValueList(SOQL_VALUE_LIST) {
    values: [SoqlValue],
  }
}

ast_kind! {
  pub enum SoqlValue {
    Literal(SoqlLiteral),
    DateFormula(SoqlDateFormula),
    Bind(SoqlBind),
    Subquery(Subquery),
    List(SoqlValueList),
  }
}

// sosl

ast_node! {
  /// `FIND {term} IN ALL FIELDS RETURNING ...`
  pub struct SoslQuery(SOSL_QUERY) {
    find_token: {find},
    search_group: SearchGroup,
    returning: ReturningClause,
    with_clauses: [SoslWithClause],
    limit_clause: LimitClause,
  }
}

impl SoslQuery {
  /// The `{...}` or quoted search term, absent when a bind is used.
  pub fn search_term(&self) -> Option<SyntaxToken> {
    support::token_any_of(&self.syntax, &[SEARCH_TERM, STRING])
  }

  pub fn search_bind(&self) -> Option<SoqlBind> {
    support::child(&self.syntax)
  }
}

ast_node! {
  /// `IN ALL FIELDS`
  pub struct SearchGroup(SEARCH_GROUP) {
    in_token: {in},
    fields_token: {fields},
  }
}

ast_node! {
  pub struct ReturningClause(RETURNING_CLAUSE) {
    specs: [ReturningSpec],
  }
}

ast_node! {
  /// `Account(Id, Name WHERE ...)`
  pub struct ReturningSpec(RETURNING_SPEC) {
    object: NameRef,
    fields: FieldList,
    where_clause: WhereClause,
    order_by_clause: OrderByClause,
    limit_clause: LimitClause,
    offset_clause: OffsetClause,
  }
}

ast_node! {
  /// `WITH DIVISION = 'Global'`, `WITH SNIPPET`, ...
  pub struct SoslWithClause(SOSL_WITH_CLAUSE) {
    with_token: {with},
    value: SoqlValue,
  }
}

ast_kind! {
  pub enum Query {
    Soql(SoqlQuery),
    Sosl(SoslQuery),
  }
}
