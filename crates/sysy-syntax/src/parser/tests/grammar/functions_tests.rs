use crate::parser::Parse;
use indoc::indoc;

#[test]
fn main_function() {
    let res = Parse::expect_valid_cst("int main() { return 0; }");

    insta::assert_snapshot!(res, @r#"
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
          BraceClose "}"
    "#);
}

#[test]
fn array_parameters() {
    let input = indoc! {r#"
    int f(int a, int b[][4]) {
        return b[a][0];
    }
    "#};

    let res = Parse::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    SourceFile
      FuncDef
        Type
          KwInt "int"
        Ident "f"
        ParenOpen "("
        FuncFParams
          FuncFParam
            Type
              KwInt "int"
            Ident "a"
          Comma ","
          FuncFParam
            Type
              KwInt "int"
            Ident "b"
            BracketOpen "["
            BracketClose "]"
            BracketOpen "["
            Number
              Decimal "4"
            BracketClose "]"
        ParenClose ")"
        Block
          BraceOpen "{"
          ReturnStmt
            KwReturn "return"
            Lval
              Ident "b"
              BracketOpen "["
              Lval
                Ident "a"
              BracketClose "]"
              BracketOpen "["
              Number
                Octal "0"
              BracketClose "]"
            Semicolon ";"
          BraceClose "}"
    "#);
}

#[test]
fn declarations_and_functions_interleave() {
    let input = indoc! {r#"
    int n;
    void set(int v) { n = v; }
    const int k = 1;
    "#};

    let res = Parse::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    SourceFile
      VarDecl
        Type
          KwInt "int"
        VarDef
          Ident "n"
        Semicolon ";"
      FuncDef
        Type
          KwVoid "void"
        Ident "set"
        ParenOpen "("
        FuncFParams
          FuncFParam
            Type
              KwInt "int"
            Ident "v"
        ParenClose ")"
        Block
          BraceOpen "{"
          AssignStmt
            Lval
              Ident "n"
            Assign "="
            Lval
              Ident "v"
            Semicolon ";"
          BraceClose "}"
      ConstDecl
        KwConst "const"
        Type
          KwInt "int"
        ConstDef
          Ident "k"
          Assign "="
          ConstInitVal
            Number
              Decimal "1"
        Semicolon ";"
    "#);
}
