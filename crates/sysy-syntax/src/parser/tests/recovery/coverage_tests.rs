use crate::diagnostics::DiagnosticKind;
use crate::parser::{Parse, ParseOptions, parse_with_options};

fn with_recursion_limit(limit: u32) -> ParseOptions {
    ParseOptions {
        recursion_limit: limit,
        ..ParseOptions::default()
    }
}

#[test]
fn deeply_nested_parens_hit_recursion_limit() {
    let source = "int a = ((((((((((1))))))))));";

    let parse = Parse::expect_with_options(source, with_recursion_limit(8));

    // Tree is still produced and lossless
    assert_eq!(parse.syntax().text().to_string(), source);
    insta::assert_snapshot!(parse.dump_diagnostics(), @"error at 15..16: nesting exceeds the limit of 8 levels");
}

#[test]
fn deeply_nested_blocks_hit_recursion_limit() {
    let depth = 64;
    let mut source = String::from("void f() ");
    for _ in 0..depth {
        source.push('{');
    }
    for _ in 0..depth {
        source.push('}');
    }

    let parse = Parse::expect_with_options(&source, with_recursion_limit(16));

    assert_eq!(parse.syntax().text().to_string(), source);
    let kinds: Vec<_> = parse.diagnostics().iter().map(|d| d.kind()).collect();
    assert_eq!(kinds, vec![DiagnosticKind::NestingTooDeep]);
}

#[test]
fn nesting_under_the_limit_is_fine() {
    let source = "int a = ((1));";

    let parse = Parse::expect_with_options(source, with_recursion_limit(8));
    assert!(parse.is_valid());
}

#[test]
fn long_operator_chain_hits_recursion_limit() {
    let source = format!("int s = {};", vec!["1"; 50_000].join(" + "));

    let parse = Parse::expect(&source);

    assert_eq!(parse.syntax().text().to_string(), source);
    let kinds: Vec<_> = parse.diagnostics().iter().map(|d| d.kind()).collect();
    assert_eq!(kinds, vec![DiagnosticKind::NestingTooDeep]);
}

#[test]
fn operator_chain_counts_towards_nesting() {
    let source = "int a = 1 + 2 + 3 + 4 + 5 + 6 + 7 + 8 + 9;";

    let shallow = Parse::expect_with_options(source, with_recursion_limit(4));
    let kinds: Vec<_> = shallow.diagnostics().iter().map(|d| d.kind()).collect();
    assert_eq!(kinds, vec![DiagnosticKind::NestingTooDeep]);
    assert_eq!(shallow.syntax().text().to_string(), source);

    let roomy = Parse::expect_with_options(source, with_recursion_limit(32));
    assert!(roomy.is_valid());
}

#[test]
fn many_declarations_exhaust_exec_fuel() {
    let source = "int a;\n".repeat(500);

    let result = parse_with_options(
        &source,
        ParseOptions {
            exec_fuel: Some(100),
            ..ParseOptions::default()
        },
    );

    assert!(
        matches!(result, Err(crate::Error::ExecFuelExhausted)),
        "expected ExecFuelExhausted error, got {:?}",
        result
    );
}

#[test]
fn unlimited_fuel() {
    let source = "int a;\n".repeat(500);

    let result = parse_with_options(
        &source,
        ParseOptions {
            exec_fuel: None,
            ..ParseOptions::default()
        },
    );

    assert!(result.is_ok_and(|parse| parse.is_valid()));
}

#[test]
fn arbitrary_input_round_trips() {
    let inputs = [
        "",
        "}}}",
        "int",
        "int (",
        "void f( { ;",
        "const const int = = ;",
        "int a[;",
        "if (x) else while",
        "int f() { return 1 +; }",
        "int main() { a[1][2 = 3; }",
        "/* open",
        "int a = 08 + 0x + 0;",
        "# $ % ^ & \u{1F600} int x;",
        "int main() {\r\n  return 0;\r\n}\r\n",
    ];
    for input in inputs {
        let parse = Parse::expect(input);
        assert_eq!(parse.syntax().text().to_string(), input, "input: {input:?}");
        assert_eq!(
            parse.source_file().as_cst().kind(),
            crate::SyntaxKind::SourceFile
        );
    }
}
