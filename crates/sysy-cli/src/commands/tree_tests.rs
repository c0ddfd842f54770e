use super::tree::render;

#[test]
fn named_tree() {
    let parse = sysy_syntax::parse("int a;").unwrap();

    insta::assert_snapshot!(render(&parse, false, false), @r#"
    SourceFile
      VarDecl
        Type
          KwInt "int"
        VarDef
          Ident "a"
        Semicolon ";"
    "#);
}

#[test]
fn raw_tree_with_spans() {
    let parse = sysy_syntax::parse("int a;\n").unwrap();

    insta::assert_snapshot!(render(&parse, true, true), @r#"
    SourceFile @0..7
      VarDecl @0..6
        Type @0..3
          KwInt @0..3 "int"
        Whitespace @3..4 " "
        VarDef @4..5
          Ident @4..5 "a"
        Semicolon @5..6 ";"
      Newline @6..7 "\n"
    "#);
}
