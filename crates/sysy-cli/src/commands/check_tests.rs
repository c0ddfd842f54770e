use indoc::indoc;

use super::check::{collect, passes, render_json};

#[test]
fn syntax_and_semantic_diagnostics_in_order() {
    let source = indoc! {r#"
    int main() {
      x = 1;
      return 0
    }
    "#};
    let parse = sysy_syntax::parse(source).unwrap();
    let diagnostics = collect(&parse);

    insta::assert_snapshot!(diagnostics.printer().render(), @r"
    error at 15..16: `x` is not defined
    error at 32..32: expected `;`, found `}` (fix: insert `;`)
    ");
    assert!(!passes(&diagnostics, false));
}

#[test]
fn warnings_fail_only_when_strict() {
    let parse = sysy_syntax::parse("int f() { return; }").unwrap();
    let diagnostics = collect(&parse);

    assert_eq!(diagnostics.warning_count(), 1);
    assert!(passes(&diagnostics, false));
    assert!(!passes(&diagnostics, true));
}

#[test]
fn clean_program_passes_strict() {
    let parse = sysy_syntax::parse("int main() { putint(getint()); return 0; }").unwrap();
    let diagnostics = collect(&parse);

    assert!(diagnostics.is_empty());
    assert!(passes(&diagnostics, true));
    assert_eq!(render_json(&diagnostics).unwrap(), "[]");
}

#[test]
fn json_output() {
    let parse = sysy_syntax::parse("int f() { return; }").unwrap();
    let json = render_json(&collect(&parse)).unwrap();

    insta::assert_snapshot!(json, @r#"
    [
      {
        "severity": "warning",
        "range": {
          "start": 10,
          "end": 17
        },
        "message": "`f` should return a value"
      }
    ]
    "#);
}

#[test]
fn rendered_with_source() {
    let source = "int main() { return y; }";
    let parse = sysy_syntax::parse(source).unwrap();
    let rendered = collect(&parse)
        .printer()
        .source(source)
        .path("main.sy")
        .render();

    assert!(rendered.contains("`y` is not defined"), "{rendered}");
    assert!(rendered.contains("main.sy"), "{rendered}");
}
