use crate::parser::Parse;

#[test]
fn multiplicative_binds_tighter_and_left_associative() {
    let res = Parse::expect_valid_cst("int x = 1 + 2 * 3 - 4;");

    insta::assert_snapshot!(res, @r#"
    SourceFile
      VarDecl
        Type
          KwInt "int"
        VarDef
          Ident "x"
          Assign "="
          InitVal
            BinaryExp
              BinaryExp
                Number
                  Decimal "1"
                Plus "+"
                BinaryExp
                  Number
                    Decimal "2"
                  Star "*"
                  Number
                    Decimal "3"
              Minus "-"
              Number
                Decimal "4"
        Semicolon ";"
    "#);
}

#[test]
fn logical_and_relational_levels() {
    let res = Parse::expect_valid_cst("int x = a || b && c == d < e;");

    insta::assert_snapshot!(res, @r#"
    SourceFile
      VarDecl
        Type
          KwInt "int"
        VarDef
          Ident "x"
          Assign "="
          InitVal
            BinaryExp
              Lval
                Ident "a"
              OrOr "||"
              BinaryExp
                Lval
                  Ident "b"
                AndAnd "&&"
                BinaryExp
                  Lval
                    Ident "c"
                  EqEq "=="
                  BinaryExp
                    Lval
                      Ident "d"
                    Lt "<"
                    Lval
                      Ident "e"
        Semicolon ";"
    "#);
}

#[test]
fn parentheses_override_precedence() {
    let res = Parse::expect_valid_cst("void f() { x = (a || b) && c; }");

    insta::assert_snapshot!(res, @r#"
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
            BinaryExp
              ParenExp
                ParenOpen "("
                BinaryExp
                  Lval
                    Ident "a"
                  OrOr "||"
                  Lval
                    Ident "b"
                ParenClose ")"
              AndAnd "&&"
              Lval
                Ident "c"
            Semicolon ";"
          BraceClose "}"
    "#);
}

#[test]
fn unary_operators_and_calls() {
    let res = Parse::expect_valid_cst("void g() { putint(-f(1, !x)); }");

    insta::assert_snapshot!(res, @r#"
    SourceFile
      FuncDef
        Type
          KwVoid "void"
        Ident "g"
        ParenOpen "("
        ParenClose ")"
        Block
          BraceOpen "{"
          ExpStmt
            CallExp
              Ident "putint"
              ParenOpen "("
              FuncRParams
                UnaryExp
                  Minus "-"
                  CallExp
                    Ident "f"
                    ParenOpen "("
                    FuncRParams
                      Number
                        Decimal "1"
                      Comma ","
                      UnaryExp
                        Bang "!"
                        Lval
                          Ident "x"
                    ParenClose ")"
              ParenClose ")"
            Semicolon ";"
          BraceClose "}"
    "#);
}

#[test]
fn unary_binds_tighter_than_binary() {
    let res = Parse::expect_valid_cst("int x = - - a * b;");

    insta::assert_snapshot!(res, @r#"
    SourceFile
      VarDecl
        Type
          KwInt "int"
        VarDef
          Ident "x"
          Assign "="
          InitVal
            BinaryExp
              UnaryExp
                Minus "-"
                UnaryExp
                  Minus "-"
                  Lval
                    Ident "a"
              Star "*"
              Lval
                Ident "b"
        Semicolon ";"
    "#);
}

#[test]
fn call_without_arguments() {
    let res = Parse::expect_valid_cst("int x = getint();");

    insta::assert_snapshot!(res, @r#"
    SourceFile
      VarDecl
        Type
          KwInt "int"
        VarDef
          Ident "x"
          Assign "="
          InitVal
            CallExp
              Ident "getint"
              ParenOpen "("
              ParenClose ")"
        Semicolon ";"
    "#);
}
