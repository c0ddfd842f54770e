use crate::parser::Parse;

#[test]
fn garbage_at_top_level_is_skipped_to_next_declaration() {
    let parse = Parse::expect_invalid("@@ x int a;");

    insta::assert_snapshot!(parse.dump_diagnostics(), @"error at 0..2: expected a declaration or function definition, found `@@`");
    insta::assert_snapshot!(parse.dump_cst(), @r#"
    SourceFile
      Error
        Garbage "@@"
        Ident "x"
      VarDecl
        Type
          KwInt "int"
        VarDef
          Ident "a"
        Semicolon ";"
    "#);
}

#[test]
fn malformed_number() {
    let parse = Parse::expect_invalid("int a = 09;");

    insta::assert_snapshot!(parse.dump_diagnostics(), @"error at 8..10: invalid number literal `09`");
    insta::assert_snapshot!(parse.dump_cst(), @r#"
    SourceFile
      VarDecl
        Type
          KwInt "int"
        VarDef
          Ident "a"
          Assign "="
          InitVal
            Number
              BadNumber "09"
        Semicolon ";"
    "#);
}

#[test]
fn invalid_assignment_target() {
    let parse = Parse::expect_invalid("void f() { 1 = 2; }");

    insta::assert_snapshot!(parse.dump_diagnostics(), @"error at 11..12: cannot assign to `1`");
}

#[test]
fn else_without_if() {
    let parse = Parse::expect_invalid("void f() { else; }");

    insta::assert_snapshot!(parse.dump_diagnostics(), @"error at 11..15: `else` without a matching `if`");
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
          Error
            KwElse "else"
          ExpStmt
            Semicolon ";"
          BraceClose "}"
    "#);
}

#[test]
fn stray_token_in_block() {
    let parse = Parse::expect_invalid("void f() { ] return; }");

    insta::assert_snapshot!(parse.dump_diagnostics(), @"error at 11..12: expected a statement, found `]`");
}

#[test]
fn junk_before_semicolon_is_wrapped() {
    let parse = Parse::expect_invalid("int a ) ] ;");

    insta::assert_snapshot!(parse.dump_diagnostics(), @"error at 5..5: expected `;`, found `)` (fix: insert `;`)");
    insta::assert_snapshot!(parse.dump_cst(), @r#"
    SourceFile
      VarDecl
        Type
          KwInt "int"
        VarDef
          Ident "a"
        Error
          ParenClose ")"
          BracketClose "]"
        Semicolon ";"
    "#);
}

#[test]
fn unterminated_block_comment() {
    let parse = Parse::expect_invalid("int a; /* oops");

    insta::assert_snapshot!(parse.dump_diagnostics(), @"error at 14..14: unterminated block comment: expected `*/` (fix: close the comment) (related: comment starts here at 7..9)");
}
