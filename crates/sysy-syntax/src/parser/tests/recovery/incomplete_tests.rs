use crate::parser::Parse;
use indoc::indoc;

#[test]
fn missing_semicolon_between_declarations() {
    let input = indoc! {r#"
    int a
    int b;
    "#};

    let parse = Parse::expect_invalid(input);
    insta::assert_snapshot!(parse.dump_diagnostics(), @"error at 5..5: expected `;`, found `int` (fix: insert `;`)");
    insta::assert_snapshot!(parse.dump_cst(), @r#"
    SourceFile
      VarDecl
        Type
          KwInt "int"
        VarDef
          Ident "a"
      VarDecl
        Type
          KwInt "int"
        VarDef
          Ident "b"
        Semicolon ";"
    "#);
}

#[test]
fn missing_semicolon_renders_insertion_point() {
    let input = "int a\n";

    let parse = Parse::expect_invalid(input);
    let rendered = parse.diagnostics().printer().source(input).render();
    assert!(rendered.contains("error: expected `;`, found end of input"));
    assert!(rendered.contains("help: insert `;`"));
}

#[test]
fn missing_expression_after_assign() {
    let parse = Parse::expect_invalid("void f() { x = ; }");

    insta::assert_snapshot!(parse.dump_diagnostics(), @"error at 15..16: expected an expression, found `;`");
    insta::assert_snapshot!(parse.dump_cst(), @r#"
    SourceFile
      FuncDef
        Type
          KwVoid "void"
        Ident "f"
        ParenOpen "("
        ParenClose ")"
        Block
          BraceOpen "{"
          AssignStmt
            Lval
              Ident "x"
            Assign "="
            Semicolon ";"
          BraceClose "}"
    "#);
}

#[test]
fn missing_function_body() {
    let parse = Parse::expect_invalid("int f()");

    insta::assert_snapshot!(parse.dump_diagnostics(), @"error at 7..7: expected function body, found end of input");
}

#[test]
fn const_without_initializer() {
    let parse = Parse::expect_invalid("const int n;");

    insta::assert_snapshot!(parse.dump_diagnostics(), @"error at 11..12: expected `=` and an initializer, found `;`");
}

#[test]
fn missing_identifier_in_declaration() {
    let parse = Parse::expect_invalid("int = 3;");

    insta::assert_snapshot!(parse.dump_diagnostics(), @"error at 4..5: expected an identifier, found `=`");
    insta::assert_snapshot!(parse.dump_cst(), @r#"
    SourceFile
      VarDecl
        Type
          KwInt "int"
        VarDef
          Assign "="
          InitVal
            Number
              Decimal "3"
        Semicolon ";"
    "#);
}

#[test]
fn missing_condition_parenthesis() {
    let parse = Parse::expect_invalid("void f() { while x) ; }");

    insta::assert_snapshot!(parse.dump_diagnostics(), @r"
    error at 17..18: expected `(`, found `x`
    error at 18..19: expected a statement, found `)`
    ");
}
