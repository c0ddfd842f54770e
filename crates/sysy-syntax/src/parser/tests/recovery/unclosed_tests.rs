use crate::parser::Parse;
use indoc::indoc;

#[test]
fn unclosed_function_body() {
    let input = indoc! {r#"
    int main() {
      return 0;
    "#};

    let parse = Parse::expect_invalid(input);
    insta::assert_snapshot!(parse.dump_diagnostics(), @"error at 11..25: missing closing `}` (related: opened here at 11..12)");
    insta::assert_snapshot!(parse.dump_cst(), @r#"
    SourceFile
      FuncDef
        Type
          KwInt "int"
        Ident "main"
        ParenOpen "("
        ParenClose ")"
        Block
          BraceOpen "{"
          ReturnStmt
            KwReturn "return"
            Number
              Octal "0"
            Semicolon ";"
    "#);
}

#[test]
fn unclosed_call_arguments() {
    let parse = Parse::expect_invalid("void f() { g(1; }");

    insta::assert_snapshot!(parse.dump_diagnostics(), @"error at 12..15: missing closing `)` (related: opened here at 12..13)");
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
          ExpStmt
            CallExp
              Ident "g"
              ParenOpen "("
              FuncRParams
                Number
                  Decimal "1"
            Semicolon ";"
          BraceClose "}"
    "#);
}

#[test]
fn unclosed_index() {
    let parse = Parse::expect_invalid("int x = a[1;");

    insta::assert_snapshot!(parse.dump_diagnostics(), @"error at 9..12: missing closing `]` (related: opened here at 9..10)");
}

#[test]
fn unclosed_initializer_list() {
    let parse = Parse::expect_invalid("int a[2] = {1, 2;");

    insta::assert_snapshot!(parse.dump_diagnostics(), @"error at 11..17: missing closing `}` (related: opened here at 11..12)");
}

#[test]
fn unclosed_block_recovers_following_items() {
    let input = indoc! {r#"
    void f() {
      {
        x = 1;
    }
    int y;
    "#};

    let parse = Parse::expect_invalid(input);
    let kinds: Vec<_> = parse
        .source_file()
        .items()
        .map(|item| item.as_cst().kind())
        .collect();
    // The inner block takes the closing brace, so `int y;` ends up inside the outer body
    assert_eq!(kinds, vec![crate::SyntaxKind::FuncDef]);
    assert_eq!(parse.diagnostics().filtered().len(), 1);
}
