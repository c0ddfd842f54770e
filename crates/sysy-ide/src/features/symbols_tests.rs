use std::fmt::Write;

use indoc::indoc;
use lsp_types::{DocumentSymbol, Range, SymbolKind};

use crate::{Document, OffsetEncoding};

fn span(range: Range) -> String {
    format!(
        "{}:{}-{}:{}",
        range.start.line, range.start.character, range.end.line, range.end.character
    )
}

fn kind(kind: SymbolKind) -> &'static str {
    match kind {
        SymbolKind::FUNCTION => "function",
        SymbolKind::CONSTANT => "constant",
        SymbolKind::VARIABLE => "variable",
        _ => "other",
    }
}

fn outline(symbols: &[DocumentSymbol], depth: usize, out: &mut String) {
    for symbol in symbols {
        writeln!(
            out,
            "{}{} {} `{}` {} name {}",
            "  ".repeat(depth),
            symbol.name,
            kind(symbol.kind),
            symbol.detail.as_deref().unwrap_or_default(),
            span(symbol.range),
            span(symbol.selection_range),
        )
        .unwrap();
        if let Some(children) = &symbol.children {
            outline(children, depth + 1, out);
        }
    }
}

#[test]
fn document_outline() {
    let input = indoc! {r#"
    const int N = 4;
    int grid[N][N];
    int sum(int a[], int n) {
        int total = 0;
        while (n) {
            int last = a[n - 1];
            total = total + last;
            n = n - 1;
        }
        return total;
    }
    void noop() {}
    "#};
    let doc = Document::new(input, 1, OffsetEncoding::Utf16).unwrap();

    let mut out = String::new();
    outline(&doc.document_symbols().unwrap(), 0, &mut out);

    insta::assert_snapshot!(out, @r"
    N constant `int` 0:0-0:16 name 0:10-0:11
    grid variable `int[][]` 1:0-1:15 name 1:4-1:8
    sum function `int(int[], int)` 2:0-10:1 name 2:4-2:7
      a variable `int[]` 2:8-2:15 name 2:12-2:13
      n variable `int` 2:17-2:22 name 2:21-2:22
      total variable `int` 3:4-3:18 name 3:8-3:13
      last variable `int` 5:8-5:28 name 5:12-5:16
    noop function `void()` 11:0-11:14 name 11:5-11:9
    ");
}

#[test]
fn empty_document_has_no_symbols() {
    let doc = Document::new("", 1, OffsetEncoding::Utf16).unwrap();
    assert!(doc.document_symbols().unwrap().is_empty());
}
