use crate::parser::Parse;

#[test]
fn trailing_comment_attaches_to_root() {
    let parse = Parse::expect("int a; // c\n");
    assert!(parse.is_valid());

    insta::assert_snapshot!(parse.printer().with_trivia(true).dump(), @r#"
    SourceFile
      VarDecl
        Type
          KwInt "int"
        Whitespace " "
        VarDef
          Ident "a"
        Semicolon ";"
      Whitespace " "
      LineComment "// c"
      Newline "\n"
    "#);
}

#[test]
fn leading_trivia_stays_outside_the_next_item() {
    let parse = Parse::expect("/* doc */\nint a;");
    assert!(parse.is_valid());

    insta::assert_snapshot!(parse.printer().with_trivia(true).dump(), @r#"
    SourceFile
      BlockComment "/* doc */"
      Newline "\n"
      VarDecl
        Type
          KwInt "int"
        VarDef
          Ident "a"
        Semicolon ";"
    "#);
}

#[test]
fn comments_between_tokens_are_kept() {
    let source = "int /*x*/ a /*y*/ = 1 // z\n;";
    let parse = Parse::expect(source);

    assert!(parse.is_valid());
    assert_eq!(parse.syntax().text().to_string(), source);
}
