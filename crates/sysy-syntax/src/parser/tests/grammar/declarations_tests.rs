use crate::parser::Parse;
use indoc::indoc;

#[test]
fn scalar_declaration() {
    let res = Parse::expect_valid_cst("int a;");

    insta::assert_snapshot!(res, @r#"
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
fn declaration_list_with_initializers() {
    let res = Parse::expect_valid_cst("int a = 1, b, c = a;");

    insta::assert_snapshot!(res, @r#"
    SourceFile
      VarDecl
        Type
          KwInt "int"
        VarDef
          Ident "a"
          Assign "="
          InitVal
            Number
              Decimal "1"
        Comma ","
        VarDef
          Ident "b"
        Comma ","
        VarDef
          Ident "c"
          Assign "="
          InitVal
            Lval
              Ident "a"
        Semicolon ";"
    "#);
}

#[test]
fn array_with_nested_initializer_list() {
    let res = Parse::expect_valid_cst("int a[2][3] = {{1, 2}, {}};");

    insta::assert_snapshot!(res, @r#"
    SourceFile
      VarDecl
        Type
          KwInt "int"
        VarDef
          Ident "a"
          BracketOpen "["
          Number
            Decimal "2"
          BracketClose "]"
          BracketOpen "["
          Number
            Decimal "3"
          BracketClose "]"
          Assign "="
          InitVal
            BraceOpen "{"
            InitVal
              BraceOpen "{"
              InitVal
                Number
                  Decimal "1"
              Comma ","
              InitVal
                Number
                  Decimal "2"
              BraceClose "}"
            Comma ","
            InitVal
              BraceOpen "{"
              BraceClose "}"
            BraceClose "}"
        Semicolon ";"
    "#);
}

#[test]
fn const_declaration() {
    let input = indoc! {r#"
    const int N = 0x10, M[2] = {N, 017};
    "#};

    let res = Parse::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    SourceFile
      ConstDecl
        KwConst "const"
        Type
          KwInt "int"
        ConstDef
          Ident "N"
          Assign "="
          ConstInitVal
            Number
              Hexadecimal "0x10"
        Comma ","
        ConstDef
          Ident "M"
          BracketOpen "["
          Number
            Decimal "2"
          BracketClose "]"
          Assign "="
          ConstInitVal
            BraceOpen "{"
            ConstInitVal
              Lval
                Ident "N"
            Comma ","
            ConstInitVal
              Number
                Octal "017"
            BraceClose "}"
        Semicolon ";"
    "#);
}

#[test]
fn dimension_is_an_expression() {
    let res = Parse::expect_valid_cst("int a[N * 2];");

    insta::assert_snapshot!(res, @r#"
    SourceFile
      VarDecl
        Type
          KwInt "int"
        VarDef
          Ident "a"
          BracketOpen "["
          BinaryExp
            Lval
              Ident "N"
            Star "*"
            Number
              Decimal "2"
          BracketClose "]"
        Semicolon ";"
    "#);
}

#[test]
fn void_variable_is_syntactically_valid() {
    // Rejected later by analysis
    let res = Parse::expect_valid_cst("void v;");

    insta::assert_snapshot!(res, @r#"
    SourceFile
      VarDecl
        Type
          KwVoid "void"
        VarDef
          Ident "v"
        Semicolon ";"
    "#);
}
