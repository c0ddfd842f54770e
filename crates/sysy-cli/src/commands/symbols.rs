use std::fmt::Write;
use std::process::exit;

use serde::Serialize;
use sysy_syntax::analyze::ScopeKind;
use sysy_syntax::{SemanticModel, TextSize, analyze};

use super::parse_input;
use super::source::SourceInput;

pub struct SymbolsArgs {
    pub input: SourceInput,
    pub json: bool,
}

/// One declared name, as printed by `sysy symbols`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolEntry {
    pub name: String,
    pub kind: &'static str,
    #[serde(rename = "type")]
    pub ty: String,
    pub scope: &'static str,
    /// Scopes between the declaration and the global scope.
    pub depth: usize,
    /// 1-based.
    pub line: usize,
    /// 1-based, in characters.
    pub column: usize,
}

pub fn run(args: SymbolsArgs) {
    let (source, parse) = parse_input(&args.input);
    let model = analyze(&parse.source_file());
    let entries = entries(&source.text, &model);

    if args.json {
        match serde_json::to_string_pretty(&entries) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: {err}");
                exit(1);
            }
        }
    } else {
        print!("{}", render_text(&entries));
    }
}

/// Every declaration in source order.
pub fn entries(source: &str, model: &SemanticModel) -> Vec<SymbolEntry> {
    model
        .symbols()
        .iter()
        .map(|symbol| {
            let (line, column) = line_col(source, symbol.name_range().start());
            let scope = model.scope(symbol.scope());
            SymbolEntry {
                name: symbol.name().to_owned(),
                kind: symbol.kind().as_str(),
                ty: symbol.ty().to_string(),
                scope: match scope.kind() {
                    ScopeKind::Global => "global",
                    ScopeKind::Function => "function",
                    ScopeKind::Block => "block",
                },
                depth: model.scope_chain(symbol.scope()).count() - 1,
                line,
                column,
            }
        })
        .collect()
}

pub fn render_text(entries: &[SymbolEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        let _ = writeln!(
            out,
            "{}{} {}: {} @{}:{}",
            "  ".repeat(entry.depth),
            entry.kind,
            entry.name,
            entry.ty,
            entry.line,
            entry.column
        );
    }
    out
}

fn line_col(source: &str, offset: TextSize) -> (usize, usize) {
    let before = &source[..usize::from(offset)];
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let line = before.matches('\n').count() + 1;
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}
