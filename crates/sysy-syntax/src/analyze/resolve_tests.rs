use indoc::indoc;
use rowan::TextSize;

use crate::analyze::{Resolution, SemanticModel, SymbolKind, analyze};
use crate::parser::Parse;

fn model(source: &str) -> SemanticModel {
    let parse = Parse::expect(source);
    analyze(&parse.source_file())
}

fn dump(source: &str) -> String {
    model(source).diagnostics().printer().render()
}

fn offset_of(source: &str, needle: &str) -> TextSize {
    TextSize::from(source.find(needle).unwrap() as u32)
}

#[test]
fn clean_program() {
    let input = indoc! {r#"
    const int N = 3;
    int a[N];
    int fact(int n) {
        if (n) return n * fact(n - 1);
        return 1;
    }
    int main() {
        int i = 0;
        while (i < N) {
            a[i] = fact(i);
            i = i + 1;
        }
        putint(a[2]);
        return 0;
    }
    "#};

    let model = model(input);
    assert!(model.diagnostics().is_empty(), "{}", dump(input));
}

#[test]
fn inner_declaration_shadows_outer() {
    let input = indoc! {r#"
    int x;
    int main() {
        int x = 1;
        {
            x = 2;
        }
        return x;
    }
    "#};

    let model = model(input);
    assert!(model.diagnostics().is_empty());

    let Some(Resolution::Symbol(id)) = model.resolve_at(offset_of(input, "x = 2")) else {
        panic!("expected a symbol");
    };
    let symbol = model.symbol(id);
    assert_eq!(symbol.kind(), SymbolKind::Variable);
    assert_eq!(symbol.name_range().start(), offset_of(input, "x = 1"));
}

#[test]
fn use_before_declaration() {
    insta::assert_snapshot!(
        dump("int main() { a = 1; int a; return 0; }"),
        @"error at 13..14: `a` is not defined"
    );
}

#[test]
fn globals_are_visible_only_after_declaration() {
    insta::assert_snapshot!(
        dump("int f() { return g; } int g;"),
        @"error at 17..18: `g` is not defined"
    );
}

#[test]
fn duplicate_in_same_scope() {
    insta::assert_snapshot!(
        dump("int a; int a;"),
        @"error at 11..12: `a` is already defined in this scope (related: first defined here at 4..5)"
    );
}

#[test]
fn parameters_share_the_body_scope() {
    insta::assert_snapshot!(
        dump("int f(int a) { int a; return a; }"),
        @"error at 19..20: `a` is already defined in this scope (related: first defined here at 10..11)"
    );
}

#[test]
fn nested_block_may_shadow_parameter() {
    let model = model("int f(int a) { { int a; } return a; }");
    assert!(model.diagnostics().is_empty());
}

#[test]
fn function_and_variable_collide() {
    insta::assert_snapshot!(
        dump("int f; int f() { return 0; }"),
        @"error at 11..12: `f` is already defined in this scope (related: first defined here at 4..5)"
    );
}

#[test]
fn calling_a_variable() {
    insta::assert_snapshot!(
        dump("int main() { int x; return x(); }"),
        @"error at 27..28: `x` is not a function"
    );
}

#[test]
fn function_used_as_value() {
    insta::assert_snapshot!(
        dump("int f() { return f + 1; }"),
        @"error at 17..18: `f` is a function, not a variable"
    );
}

#[test]
fn argument_count() {
    insta::assert_snapshot!(
        dump("void g(int a) {} int main() { g(); g(1, 2); putch(1); return 0; }"),
        @r"
    error at 30..31: `g` expects 1 argument, found 0
    error at 35..36: `g` expects 1 argument, found 2
    "
    );
}

#[test]
fn builtin_argument_count() {
    insta::assert_snapshot!(
        dump("int main() { return getint(1); }"),
        @"error at 20..26: `getint` expects 0 arguments, found 1"
    );
}

#[test]
fn assignment_to_constant() {
    insta::assert_snapshot!(
        dump("const int N = 1; int main() { N = 2; return N; }"),
        @"error at 30..31: cannot assign to constant `N`"
    );
}

#[test]
fn void_variables_and_parameters() {
    insta::assert_snapshot!(
        dump("void v; int f(void p) { return 0; }"),
        @r"
    error at 5..6: `v` cannot have type `void`
    error at 19..20: `p` cannot have type `void`
    "
    );
}

#[test]
fn undefined_function() {
    insta::assert_snapshot!(
        dump("int main() { return foo(1); }"),
        @"error at 20..23: `foo` is not defined"
    );
}

#[test]
fn builtins_resolve() {
    let input = "int main() { int n = getint(); putint(n); return 0; }";
    let model = model(input);
    assert!(model.diagnostics().is_empty());

    let Some(Resolution::Builtin(builtin)) = model.resolve_at(offset_of(input, "putint")) else {
        panic!("expected a builtin");
    };
    assert_eq!(builtin.signature(), "void putint(int)");
}

#[test]
fn user_definition_shadows_builtin() {
    let input = "int getint() { return 1; } int main() { return getint(); }";
    let model = model(input);
    assert!(model.diagnostics().is_empty());

    let call = offset_of(input, "getint();");
    assert!(matches!(model.resolve_at(call), Some(Resolution::Symbol(_))));
}

#[test]
fn dimensions_reference_constants() {
    let input = indoc! {r#"
    const int N = 3;
    int a[N];
    int f(int b[][N]) { return b[0][0]; }
    "#};

    assert!(model(input).diagnostics().is_empty());
}

#[test]
fn long_sum_resolves_every_operand() {
    let terms = vec!["x"; 50_000].join(" + ");
    let source = format!("int main() {{\n    int x = 1;\n    return {terms};\n}}\n");

    let model = model(&source);

    assert!(model.references().len() > 400);
    assert!(model.references().iter().all(|r| r.symbol().is_some()));
    assert!(model.diagnostics().is_empty());
}

#[test]
fn binary_operands_are_visited_in_source_order() {
    let input = "int a; int b; int c; int d;\nint main() { return a - b * c + (d / a); }";

    let model = model(input);

    let names: Vec<_> = model
        .references()
        .iter()
        .map(|r| &input[r.range()])
        .collect();
    assert_eq!(names, ["a", "b", "c", "d", "a"]);
}
