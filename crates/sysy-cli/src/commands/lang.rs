use std::fmt::Write;
use std::process::exit;

use serde::Serialize;
use sysy_syntax::Language;

pub struct LangArgs {
    pub json: bool,
}

#[derive(Debug, Serialize)]
pub struct LangInfo {
    pub name: &'static str,
    pub abi_version: u32,
    pub file_types: &'static [&'static str],
    pub keywords: &'static [&'static str],
    pub node_kinds: Vec<NodeKindInfo>,
}

#[derive(Debug, Serialize)]
pub struct NodeKindInfo {
    pub id: u16,
    pub name: &'static str,
    pub named: bool,
}

pub fn run(args: LangArgs) {
    let info = describe(sysy_syntax::language());
    if args.json {
        match serde_json::to_string_pretty(&info) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: {err}");
                exit(1);
            }
        }
    } else {
        print!("{}", render_text(&info));
    }
}

pub fn describe(lang: &Language) -> LangInfo {
    let node_kinds = (0..lang.node_kind_count())
        .filter_map(|id| u16::try_from(id).ok())
        .filter_map(|id| {
            Some(NodeKindInfo {
                id,
                name: lang.node_kind_for_id(id)?,
                named: lang.node_kind_is_named(id),
            })
        })
        .collect();

    LangInfo {
        name: lang.name(),
        abi_version: lang.abi_version(),
        file_types: lang.file_types(),
        keywords: lang.keywords(),
        node_kinds,
    }
}

/// Named kinds print bare, anonymous ones quoted, as in tree-sitter grammars.
pub fn render_text(info: &LangInfo) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} (ABI {})", info.name, info.abi_version);
    let _ = writeln!(out, "file types: {}", info.file_types.join(", "));
    let _ = writeln!(out, "keywords: {}", info.keywords.join(", "));
    let _ = writeln!(out, "node kinds ({}):", info.node_kinds.len());
    for kind in &info.node_kinds {
        if kind.named {
            let _ = writeln!(out, "  {:>3}  {}", kind.id, kind.name);
        } else {
            let _ = writeln!(out, "  {:>3}  {:?}", kind.id, kind.name);
        }
    }
    out
}
