use test_case::test_case;

use crate::{
  ast::{self, AstNode, AstToken},
  parse_compilation_unit, parse_expression, parse_literal, parse_query, parse_statement,
  parse_trigger_unit, tokenize, ApexParser, EntryPoint, ParseOptions, ResourceError, SyntaxError,
  SyntaxErrorCounter, SyntaxErrorKind, SyntaxKind, T,
};

fn messages(errors: &[SyntaxError]) -> Vec<&str> {
  errors.iter().map(|e| e.message()).collect()
}

fn stmt(text: &str) -> ast::Stmt {
  let parse = parse_statement(text).unwrap();
  pretty_assertions::assert_eq!(messages(parse.errors()), Vec::<&str>::new(), "{}", text);
  parse.tree().stmt().unwrap()
}

fn query(text: &str) -> ast::SoqlQuery {
  let parse = parse_query(text).unwrap();
  pretty_assertions::assert_eq!(messages(parse.errors()), Vec::<&str>::new(), "{}", text);
  match parse.tree().query().unwrap() {
    ast::Query::Soql(query) => query,
    ast::Query::Sosl(_) => panic!("expected a SOQL query"),
  }
}

#[test_case("x = 1;" ; "assignment")]
#[test_case("List<Account> accounts = new List<Account>();" ; "local_var")]
#[test_case("for (Account a : accounts) { a.Name = 'x'; }" ; "for_each")]
#[test_case("try { foo(); } catch (DmlException e) { } finally { }" ; "try_catch")]
#[test_case("do { i++; } while (i < 10);" ; "do_while")]
#[test_case("return a ?? b;" ; "return_coalesce")]
#[test_case("System.runAs(u) { insert a; }" ; "run_as")]
#[test_case("upsert accounts Account.Fields.External_Id__c;" ; "upsert_field")]
#[test_case("merge master duplicate;" ; "merge")]
#[test_case("Integer x = (Integer) o;" ; "cast")]
#[test_case("Map<Id, Account> m = new Map<Id, Account>{ a.Id => a };" ; "map_init")]
#[test_case("List<Account> accs = [SELECT Id FROM Account WHERE Name = :name];" ; "inline_soql")]
#[test_case("List<List<SObject>> r = [FIND 'Acme' IN ALL FIELDS RETURNING Account(Id)];" ; "inline_sosl")]
#[test_case("List<Account> a = [SELECT Id FROM Account WHERE Id = :acc1];" ; "inline_soql_bind")]
fn valid_statement(text: &str) {
  let parse = parse_statement(text).unwrap();
  pretty_assertions::assert_eq!(messages(parse.errors()), Vec::<&str>::new());
  assert_eq!(parse.syntax_node().kind(), SyntaxKind::STMT_FRAGMENT);
  assert_eq!(parse.syntax_node().to_string(), text);
}

#[test_case("a + b * c" ; "arithmetic")]
#[test_case("a?.b.c()" ; "safe_navigation")]
#[test_case("x instanceof Account ? 1 : 2" ; "instanceof_ternary")]
#[test_case("i >> 2 >>> 1" ; "shifts")]
#[test_case("String.class" ; "class_ref")]
#[test_case("new Account(Name = 'x')" ; "sobject_new")]
fn valid_expression(text: &str) {
  let parse = parse_expression(text).unwrap();
  pretty_assertions::assert_eq!(messages(parse.errors()), Vec::<&str>::new());
  assert!(parse.tree().expr().is_some());
}

#[test_case("42", ast::LiteralKind::Integer ; "integer")]
#[test_case("42L", ast::LiteralKind::Long ; "long")]
#[test_case("4.2", ast::LiteralKind::Decimal ; "decimal")]
#[test_case("'four'", ast::LiteralKind::String ; "string")]
#[test_case("TRUE", ast::LiteralKind::Boolean ; "boolean")]
#[test_case("null", ast::LiteralKind::Null ; "null")]
fn literal_kind(text: &str, expected: ast::LiteralKind) {
  let parse = parse_literal(text).unwrap();
  assert_eq!(parse.error_count(), 0);
  let literal = parse.tree().literal().unwrap();
  assert_eq!(literal.kind(), Some(expected));
  assert_eq!(literal.text().unwrap(), text);
}

#[test]
fn string_literal_value() {
  let literal = parse_literal(r"'it\'s\n'").unwrap().tree().literal().unwrap();
  let string = literal.string().unwrap();
  let value = string.value().unwrap();
  assert_eq!(&*value, "it's\n");
}

#[test_case("public class Hello {}" ; "lower")]
#[test_case("Public CLASS Hello {}" ; "mixed")]
#[test_case("PUBLIC WITH SHARING CLASS Hello EXTENDS Base {}" ; "upper")]
fn class_keywords_ignore_case(text: &str) {
  let parse = parse_compilation_unit(text).unwrap();
  pretty_assertions::assert_eq!(messages(parse.errors()), Vec::<&str>::new());

  let class = match parse.tree().type_decl().unwrap() {
    ast::TypeDecl::Class(class) => class,
    other => panic!("expected a class, got {:?}", other),
  };
  use ast::{ModifierOwner, NameOwner};
  assert_eq!(class.name().unwrap().text().unwrap(), "Hello");
  assert!(class.has_modifier(T![public]));
}

#[test]
fn case_does_not_change_tree_shape() {
  fn shape(text: &str) -> Vec<SyntaxKind> {
    parse_compilation_unit(text)
      .unwrap()
      .syntax_node()
      .descendants()
      .map(|it| it.kind())
      .collect()
  }

  assert_eq!(
    shape("public class A { void m() { if (x) { return; } else { insert a; } } }"),
    shape("PUBLIC Class A { VOID m() { IF (x) { RETURN; } ELSE { Insert a; } } }"),
  );
}

#[test_case("while (x++ < 10 && !(y-- < 0));" ; "while_body")]
#[test_case("for(x=0; x<10; x++);" ; "for_body")]
#[test_case("{ ; }" ; "block_content")]
fn empty_statement_allowed(text: &str) {
  assert_eq!(parse_statement(text).unwrap().error_count(), 0);
}

#[test]
fn empty_statement_rejected_in_if_branch() {
  let parse = parse_statement("if (x == 3); else { ; }").unwrap();
  assert_eq!(
    messages(parse.errors()),
    vec!["empty statement is not allowed here"]
  );

  let error = &parse.errors()[0];
  assert_eq!(error.kind(), SyntaxErrorKind::Syntax);
  assert_eq!(error.column(), 11);
  assert_eq!(error.token(), Some(";"));

  let if_stmt = match parse.tree().stmt().unwrap() {
    ast::Stmt::If(it) => it,
    other => panic!("expected if, got {:?}", other),
  };
  assert!(matches!(if_stmt.then_branch(), Some(ast::Stmt::Empty(_))));
  assert!(matches!(if_stmt.else_branch(), Some(ast::Stmt::Block(_))));
}

fn when_clauses(text: &str) -> Vec<ast::WhenClause> {
  match stmt(text) {
    ast::Stmt::Switch(switch) => switch.when_clauses().collect(),
    other => panic!("expected switch, got {:?}", other),
  }
}

fn literals(clause: &ast::WhenClause) -> Vec<ast::WhenLiteral> {
  match clause.value().unwrap().pattern() {
    ast::WhenPattern::Literals(literals) => literals.collect(),
    _ => panic!("expected literals"),
  }
}

#[test]
fn switch_parenthesized_literals() {
  let clauses = when_clauses(
    "switch on (x) { when 1 {return 1;} when ((2)) {return 2;} when (3),(4) {return 3;} }",
  );
  assert_eq!(clauses.len(), 3);

  let first = literals(&clauses[0]);
  assert_eq!(first.len(), 1);
  assert!(!first[0].is_parenthesized());
  assert_eq!(first[0].value_text(), "1");

  let second = literals(&clauses[1]);
  assert_eq!(second.len(), 1);
  let inner = second[0].inner().unwrap();
  assert!(second[0].is_parenthesized());
  assert!(inner.is_parenthesized());
  assert!(!inner.inner().unwrap().is_parenthesized());
  assert_eq!(second[0].value_text(), "2");

  let third = literals(&clauses[2]);
  let values: Vec<_> = third.iter().map(|it| it.value_text()).collect();
  assert_eq!(values, vec!["3", "4"]);
}

#[test]
fn switch_signed_literals() {
  let clauses = when_clauses(
    "switch on (x) { when -1 {return 1;} when (+2l) {return 1;} when -+-3 {return 3;} }",
  );
  let values: Vec<_> = clauses
    .iter()
    .map(|clause| literals(clause)[0].value_text())
    .collect();
  assert_eq!(values, vec!["-1", "+2l", "-+-3"]);
}

#[test]
fn switch_type_and_else_patterns() {
  let clauses = when_clauses(
    "switch on o { when Account a { } when 'x', null, RED { } when else { } }",
  );
  assert!(matches!(
    clauses[0].value().unwrap().pattern(),
    ast::WhenPattern::Type(_)
  ));
  assert_eq!(literals(&clauses[1]).len(), 3);
  assert!(matches!(
    clauses[2].value().unwrap().pattern(),
    ast::WhenPattern::Else
  ));
}

#[test]
fn trigger_unit() {
  let parse = parse_trigger_unit("trigger test on Account (before update, after update) {}").unwrap();
  pretty_assertions::assert_eq!(messages(parse.errors()), Vec::<&str>::new());

  let trigger = parse.tree();
  use ast::NameOwner;
  assert_eq!(trigger.name().unwrap().text().unwrap(), "test");
  assert_eq!(trigger.object().unwrap().text().unwrap(), "Account");

  let cases: Vec<_> = trigger
    .cases()
    .map(|case| {
      (
        case.timing().unwrap().kind(),
        case.event().unwrap().kind(),
      )
    })
    .collect();
  assert_eq!(
    cases,
    vec![(T![before], T![update]), (T![after], T![update])]
  );
  assert!(trigger.body().is_some());
}

#[test_case("USER_MODE", ast::QueryMode::UserMode ; "user_mode")]
#[test_case("SYSTEM_MODE", ast::QueryMode::SystemMode ; "system_mode")]
#[test_case("security_enforced", ast::QueryMode::SecurityEnforced ; "security_enforced")]
fn query_with_mode(mode: &str, expected: ast::QueryMode) {
  let query = query(&format!("SELECT Id FROM Account WITH {}", mode));
  assert_eq!(query.with_clause().unwrap().mode(), Some(expected));
}

#[test_case("USER", ast::AccessMode::User ; "user")]
#[test_case("SYSTEM", ast::AccessMode::System ; "system")]
#[test_case("user", ast::AccessMode::User ; "lower_user")]
fn dml_access_level(mode: &str, expected: ast::AccessMode) {
  let dml = match stmt(&format!("insert as {} contact;", mode)) {
    ast::Stmt::Dml(dml) => dml,
    other => panic!("expected dml, got {:?}", other),
  };
  assert_eq!(dml.op().unwrap().kind(), T![insert]);
  assert_eq!(dml.access_level().unwrap().mode(), Some(expected));
  assert_eq!(dml.targets().count(), 1);
}

#[test]
fn dml_target_named_as() {
  let dml = match stmt("insert as;") {
    ast::Stmt::Dml(dml) => dml,
    other => panic!("expected dml, got {:?}", other),
  };
  assert!(dml.access_level().is_none());
}

#[test]
fn missing_closing_brace() {
  let parse = parse_compilation_unit("public class Hello {").unwrap();
  pretty_assertions::assert_eq!(messages(parse.errors()), vec!["expected '}'"]);

  let error = &parse.errors()[0];
  assert_eq!((error.line(), error.column()), (1, 20));
  assert_eq!(error.token(), None);
  assert!(parse.tree().type_decl().is_some());
}

#[test]
fn trailing_input_in_compilation_unit() {
  let parse = parse_compilation_unit("class A {} class B {}").unwrap();
  pretty_assertions::assert_eq!(messages(parse.errors()), vec!["expected end of input"]);
  assert_eq!(parse.errors()[0].token(), Some("class"));
}

#[test]
fn errors_are_positioned() {
  let text = "class A {\n  void m() {\n    x = ;\n  }\n}";
  let parse = parse_compilation_unit(text).unwrap();
  let error = parse.errors().first().unwrap();
  assert_eq!(error.message(), "expected expression");
  assert_eq!(error.position(), crate::LineCol { line: 3, col: 8 });
  assert_eq!(error.to_string(), "3:8: expected expression (at ';')");
  assert_eq!(&text[error.range()], ";");
}

#[test_case("x = (a;", "expected ')'" ; "paren")]
#[test_case("x = [SELECT Id FROM Account;", "expected ']'" ; "inline_query")]
#[test_case("foo(;", "expected ')'" ; "arguments")]
#[test_case("foo(a;", "expected ')'" ; "arguments_after_value")]
fn missing_closer_reported_once(text: &str, expected: &str) {
  let parse = parse_statement(text).unwrap();
  pretty_assertions::assert_eq!(messages(parse.errors()), vec![expected]);
  assert_eq!(parse.errors()[0].token(), Some(";"));
}

#[test]
fn invalid_character_reported_once() {
  let text = "public class A { # }";
  let parse = parse_compilation_unit(text).unwrap();
  pretty_assertions::assert_eq!(messages(parse.errors()), vec!["Invalid token"]);

  let error = &parse.errors()[0];
  assert_eq!(error.kind(), SyntaxErrorKind::Lexical);
  assert_eq!(error.token(), Some("#"));
  assert_eq!(parse.syntax_node().to_string(), text);
  assert!(parse.tree().type_decl().is_some());
}

#[test]
fn lexical_errors_come_first() {
  let parse = parse_statement("x = 'open").unwrap();
  let kinds: Vec<_> = parse.errors().iter().map(|e| e.kind()).collect();
  assert_eq!(kinds[0], SyntaxErrorKind::Lexical);
  assert!(kinds[1..].iter().all(|k| *k == SyntaxErrorKind::Syntax));
}

#[test]
fn parsing_is_deterministic() {
  let text = "public class A { Integer x = ; void m() { switch on y { when 1 {} } } }";
  let first = parse_compilation_unit(text).unwrap();
  let second = parse_compilation_unit(text).unwrap();

  assert_eq!(first.green(), second.green());
  assert_eq!(first.errors(), second.errors());
}

#[test]
fn tree_is_lossless() {
  let text = "/* header */\npublic  class Hello { // trailing\n  Integer x = 1 + ;\n";
  let parse = parse_compilation_unit(text).unwrap();
  assert!(parse.error_count() > 0);
  assert_eq!(parse.syntax_node().to_string(), text);
}

#[test_case("Select Fields(All) from Account" ; "fields_all")]
#[test_case("SELECT Id FROM Account WHERE AnnualRevenue > USD100.01" ; "currency_decimal")]
#[test_case("SELECT Id FROM Account WHERE AnnualRevenue < USD200" ; "currency_integer")]
#[test_case("SELECT Id, (SELECT Id FROM Contacts WHERE CreatedDate > 2020-01-01T00:00:00Z) FROM Account" ; "datetime_subquery")]
#[test_case("SELECT Id FROM Account WHERE Amount__c > -100.123" ; "negative_decimal")]
#[test_case("SELECT Id FROM Opportunity WHERE CloseDate = LAST_QUARTER" ; "date_constant")]
#[test_case("SELECT Id FROM Opportunity WHERE CloseDate = LAST_N_DAYS:30" ; "date_formula")]
#[test_case("SELECT COUNT() FROM Contact GROUP BY ROLLUP(LeadSource) HAVING COUNT(Id) > 1" ; "group_by_rollup")]
#[test_case("SELECT Id FROM Account ORDER BY Name DESC NULLS LAST LIMIT 10 OFFSET 5" ; "order_limit_offset")]
#[test_case("SELECT Id FROM Account WHERE Id IN :ids AND NOT (Name LIKE 'A%' OR Type NOT IN ('x', 'y'))" ; "conditions")]
#[test_case("SELECT TYPEOF What WHEN Account THEN Phone ELSE Name END FROM Event" ; "typeof_select")]
#[test_case("SELECT Id FROM Account FOR UPDATE" ; "for_update")]
#[test_case("SELECT Id FROM Account WHERE Id = :acc1" ; "bind_named_like_currency")]
#[test_case("SELECT Id FROM Account WHERE Id IN :ids2" ; "in_bind_named_like_currency")]
#[test_case("SELECT Id FROM Account WHERE Owner.abc1 = USD5" ; "field_named_like_currency")]
fn valid_query(text: &str) {
  query(text);
}

#[test]
fn query_accessors() {
  let query = query("SELECT Id, Owner.Name n FROM Account a WHERE Amount > -100.123 LIMIT 5");

  let fields: Vec<_> = query
    .select_list()
    .unwrap()
    .fields()
    .map(|f| f.path().unwrap().text())
    .collect();
  assert_eq!(fields, vec!["Id", "Owner.Name"]);

  let comparison = match query.where_clause().unwrap().condition().unwrap() {
    ast::SoqlCondition::Comparison(it) => it,
    other => panic!("expected comparison, got {:?}", other),
  };
  assert_eq!(comparison.op().unwrap().kind(), T![>]);
  match comparison.value().unwrap() {
    ast::SoqlValue::Literal(literal) => {
      assert!(literal.is_negative());
      assert_eq!(literal.token().unwrap().text(), "100.123");
    }
    other => panic!("expected literal, got {:?}", other),
  }

  assert!(query.limit_clause().is_some());
}

#[test]
fn fields_function() {
  let query = query("SELECT FIELDS(ALL) FROM Account LIMIT 200");
  let field = query.select_list().unwrap().fields().next().unwrap();
  let function = field.function().unwrap();

  assert_eq!(function.name().unwrap().text(), "FIELDS");
  let args: Vec<_> = function.args().map(|it| it.text()).collect();
  assert_eq!(args, vec!["ALL"]);
  assert!(field.path().is_none());
}

#[test]
fn currency_in_code_is_an_identifier() {
  match stmt("USD100.name = 'name';") {
    ast::Stmt::Expr(expr) => match expr.expr().unwrap() {
      ast::Expr::Assign(assign) => match assign.target().unwrap() {
        ast::Expr::FieldAccess(access) => {
          assert_eq!(access.field().unwrap().text().unwrap(), "name")
        }
        other => panic!("expected field access, got {:?}", other),
      },
      other => panic!("expected assignment, got {:?}", other),
    },
    other => panic!("expected expression statement, got {:?}", other),
  }
}

#[test]
fn sosl_query() {
  let parse = parse_query("FIND {Acme*} IN NAME FIELDS RETURNING Account(Id, Name WHERE Type = 'x' LIMIT 5), Contact WITH DIVISION = 'Global' LIMIT 10").unwrap();
  pretty_assertions::assert_eq!(messages(parse.errors()), Vec::<&str>::new());

  let sosl = match parse.tree().query().unwrap() {
    ast::Query::Sosl(it) => it,
    ast::Query::Soql(_) => panic!("expected a SOSL query"),
  };
  assert_eq!(sosl.search_term().unwrap().text(), "{Acme*}");
  assert_eq!(sosl.returning().unwrap().specs().count(), 2);
  assert_eq!(sosl.with_clauses().count(), 1);
}

#[test]
fn class_with_inline_query() {
  let text = r#"
@IsTest
private with sharing class AccountTests {
  private static final Integer LIMIT_SIZE = 5;

  @IsTest(SeeAllData=false)
  static testMethod void selectsAccounts() {
    List<Account> accounts = [
      SELECT Id, Name, (SELECT Id FROM Contacts)
      FROM Account
      WHERE Name LIKE :('%' + prefix)
      WITH SECURITY_ENFORCED
      LIMIT :LIMIT_SIZE
    ];
    for (Account a : accounts) {
      a.Name = a.Name?.toUpperCase();
    }
    update as user accounts;
  }

  public String name { get; private set; }
}
"#;
  let parse = parse_compilation_unit(text).unwrap();
  pretty_assertions::assert_eq!(messages(parse.errors()), Vec::<&str>::new());

  let class = match parse.tree().type_decl().unwrap() {
    ast::TypeDecl::Class(class) => class,
    other => panic!("expected a class, got {:?}", other),
  };
  use ast::ModifierOwner;
  let modifiers = class.modifier_list().unwrap();
  assert_eq!(modifiers.annotations().next().unwrap().name(), "IsTest");
  assert_eq!(
    modifiers.sharing().unwrap().kind(),
    Some(ast::SharingKind::With)
  );

  let members: Vec<_> = class.body().unwrap().members().collect();
  assert_eq!(members.len(), 3);

  let query = parse
    .syntax_node()
    .descendants()
    .find_map(ast::SoqlExpr::cast)
    .and_then(|it| it.query())
    .unwrap();
  assert_eq!(
    query.with_clause().unwrap().mode(),
    Some(ast::QueryMode::SecurityEnforced)
  );
}

#[test]
fn listener_sees_every_error() {
  let mut counter = SyntaxErrorCounter::new();
  let parse = ApexParser::new()
    .listener(&mut counter)
    .parse_compilation_unit("public class Hello { String s = 'open\n")
    .unwrap();

  assert!(parse.error_count() >= 2);
  assert_eq!(counter.error_count(), parse.error_count());
  assert_eq!(counter.errors(), parse.errors());
  assert_eq!(counter.errors()[0].kind(), SyntaxErrorKind::Lexical);
}

#[test]
fn listener_is_shared_across_parses() {
  let mut errors: Vec<SyntaxError> = Vec::new();
  let mut parser = ApexParser::new().listener(&mut errors);
  parser.parse_statement("if (x); else;").unwrap();
  parser.parse_expression("a +").unwrap();
  drop(parser);

  assert_eq!(errors.len(), 3);
}

#[test]
fn fragment_leaves_rest_unconsumed() {
  let parse = parse_expression("a + b c d").unwrap();
  assert_eq!(parse.error_count(), 0);

  let parse = ApexParser::new()
    .options(ParseOptions::new().require_eof(true))
    .parse_expression("a + b c d")
    .unwrap();
  pretty_assertions::assert_eq!(messages(parse.errors()), vec!["expected end of input"]);
  assert_eq!(parse.syntax_node().to_string(), "a + b c d");
}

#[test]
fn recursion_limit() {
  let text = format!("{}x{}", "(".repeat(300), ")".repeat(300));
  assert_eq!(
    parse_expression(&text).unwrap_err(),
    ResourceError::RecursionLimit { limit: 256 }
  );

  let parse = ApexParser::new()
    .options(ParseOptions::new().recursion_limit(2048))
    .parse_expression(&text)
    .unwrap();
  assert_eq!(parse.error_count(), 0);
}

#[test]
fn recursion_limit_in_generic_lookahead() {
  let text = format!("{}x;", "a<".repeat(100_000));
  assert_eq!(
    parse_statement(&text).unwrap_err(),
    ResourceError::RecursionLimit { limit: 256 }
  );

  let nested = format!("{}Integer{} x;", "List<".repeat(20), ">".repeat(20));
  assert_eq!(parse_statement(&nested).unwrap().error_count(), 0);
}

#[test_case("{".repeat(400) ; "blocks")]
#[test_case(format!("{}#", "{".repeat(400)) ; "blocks_with_invalid_character")]
#[test_case(format!("{}1{}#", "(".repeat(400), ")".repeat(400)) ; "parens_with_invalid_character")]
fn recursion_limit_leaves_listener_untouched(text: String) {
  let mut counter = SyntaxErrorCounter::new();
  let result = ApexParser::new()
    .listener(&mut counter)
    .parse_statement(&text);

  assert!(result.is_err());
  assert_eq!(counter.error_count(), 0);
}

#[test]
fn ok_returns_all_errors() {
  let err = parse_statement("if (x); else;").unwrap().ok().unwrap_err();
  assert_eq!(err.0.len(), 2);
  pretty_assertions::assert_eq!(
    err.to_string(),
    "2 syntax error(s):\n1:6: empty statement is not allowed here (at ';')\n1:12: empty statement is not allowed here (at ';')"
  );

  assert!(parse_statement("x++;").unwrap().ok().is_ok());
}

#[test]
fn parse_pre_tokenized() {
  let text = "insert as system acc;";
  let (tokens, errors) = tokenize(text);
  assert!(errors.is_empty());

  let parse = ApexParser::new()
    .parse_tokens(text, &tokens, EntryPoint::Statement)
    .unwrap();
  assert_eq!(parse.error_count(), 0);
  assert!(matches!(parse.tree(), ast::Root::Stmt(_)));

  assert_eq!(
    ApexParser::new()
      .parse_tokens("insert", &tokens, EntryPoint::Statement)
      .unwrap_err(),
    ResourceError::TokenMismatch { tokens: 21, text: 6 },
  );
}

#[test]
fn untyped_entry_point() {
  let parse = ApexParser::new()
    .parse("SELECT Id FROM Account", EntryPoint::Query)
    .unwrap();
  assert_eq!(parse.error_count(), 0);
  match parse.tree() {
    ast::Root::Query(fragment) => assert!(fragment.query().is_some()),
    other => panic!("expected query, got {:?}", other),
  }
}

#[test]
fn empty_input() {
  let parse = parse_statement("").unwrap();
  pretty_assertions::assert_eq!(messages(parse.errors()), vec!["expected statement"]);
  assert_eq!(parse.errors()[0].position(), crate::LineCol { line: 1, col: 0 });
}

#[test]
fn comments_are_trivia() {
  let parse = parse_statement("/* a */ x = 1; // done").unwrap();
  assert_eq!(parse.error_count(), 0);

  let comments: Vec<_> = parse
    .syntax_node()
    .descendants_with_tokens()
    .filter_map(|it| it.into_token())
    .filter_map(ast::Comment::cast)
    .map(|c| c.kind())
    .collect();
  assert_eq!(
    comments,
    vec![ast::CommentKind::Block, ast::CommentKind::Line]
  );
}
