use crate::parser::Parse;
use indoc::indoc;

#[test]
fn dangling_else_binds_to_nearest_if() {
    let res = Parse::expect_valid_cst("void f() { if (a) if (b) x = 1; else x = 2; }");

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
          IfStmt
            KwIf "if"
            ParenOpen "("
            Lval
              Ident "a"
            ParenClose ")"
            IfStmt
              KwIf "if"
              ParenOpen "("
              Lval
                Ident "b"
              ParenClose ")"
              AssignStmt
                Lval
                  Ident "x"
                Assign "="
                Number
                  Decimal "1"
                Semicolon ";"
              ElseBranch
                KwElse "else"
                AssignStmt
                  Lval
                    Ident "x"
                  Assign "="
                  Number
                    Decimal "2"
                  Semicolon ";"
          BraceClose "}"
    "#);
}

#[test]
fn while_with_jumps() {
    let input = indoc! {r#"
    void f() {
        while (1) {
            if (x) break;
            continue;
        }
    }
    "#};

    let res = Parse::expect_valid_cst(input);

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
          WhileStmt
            KwWhile "while"
            ParenOpen "("
            Number
              Decimal "1"
            ParenClose ")"
            Block
              BraceOpen "{"
              IfStmt
                KwIf "if"
                ParenOpen "("
                Lval
                  Ident "x"
                ParenClose ")"
                BreakStmt
                  KwBreak "break"
                  Semicolon ";"
              ContinueStmt
                KwContinue "continue"
                Semicolon ";"
              BraceClose "}"
          BraceClose "}"
    "#);
}

#[test]
fn block_items_mix_declarations_and_statements() {
    let input = indoc! {r#"
    void f() {
        const int n = 2;
        int a[n];
        ;
        {
            a[0] = n;
        }
        f();
        return;
    }
    "#};

    let res = Parse::expect_valid_cst(input);

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
          ConstDecl
            KwConst "const"
            Type
              KwInt "int"
            ConstDef
              Ident "n"
              Assign "="
              ConstInitVal
                Number
                  Decimal "2"
            Semicolon ";"
          VarDecl
            Type
              KwInt "int"
            VarDef
              Ident "a"
              BracketOpen "["
              Lval
                Ident "n"
              BracketClose "]"
            Semicolon ";"
          ExpStmt
            Semicolon ";"
          Block
            BraceOpen "{"
            AssignStmt
              Lval
                Ident "a"
                BracketOpen "["
                Number
                  Octal "0"
                BracketClose "]"
              Assign "="
              Lval
                Ident "n"
              Semicolon ";"
            BraceClose "}"
          ExpStmt
            CallExp
              Ident "f"
              ParenOpen "("
              ParenClose ")"
            Semicolon ";"
          ReturnStmt
            KwReturn "return"
            Semicolon ";"
          BraceClose "}"
    "#);
}

#[test]
fn expression_statement() {
    let res = Parse::expect_valid_cst("void f() { a + 1; }");

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
          ExpStmt
            BinaryExp
              Lval
                Ident "a"
              Plus "+"
              Number
                Decimal "1"
            Semicolon ";"
          BraceClose "}"
    "#);
}
