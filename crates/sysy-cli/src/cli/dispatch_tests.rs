//! Tests for CLI dispatch logic: argument parsing and params extraction.

use std::path::PathBuf;

use super::*;
use crate::cli::commands::{check_command, lang_command, lsp_command, symbols_command, tree_command};

#[test]
fn tree_flags() {
    let m = tree_command()
        .try_get_matches_from(["tree", "main.sy", "--raw", "--spans"])
        .unwrap();
    let params = TreeParams::from_matches(&m);

    assert_eq!(params.source_path, Some(PathBuf::from("main.sy")));
    assert_eq!(params.source_text, None);
    assert!(params.raw);
    assert!(params.spans);
}

#[test]
fn tree_inline_source() {
    let m = tree_command()
        .try_get_matches_from(["tree", "-s", "int a;"])
        .unwrap();
    let params = TreeParams::from_matches(&m);

    assert_eq!(params.source_path, None);
    assert_eq!(params.source_text.as_deref(), Some("int a;"));
    assert!(!params.raw);
}

#[test]
fn source_path_and_text_conflict() {
    let result = tree_command().try_get_matches_from(["tree", "main.sy", "-s", "int a;"]);
    assert!(result.is_err());
}

#[test]
fn stdin_source() {
    let m = check_command()
        .try_get_matches_from(["check", "-"])
        .unwrap();
    let params = CheckParams::from_matches(&m);
    assert_eq!(params.source_path, Some(PathBuf::from("-")));
}

#[test]
fn check_flags() {
    let m = check_command()
        .try_get_matches_from(["check", "main.sy", "--strict", "--json", "--color", "never"])
        .unwrap();
    let params = CheckParams::from_matches(&m);

    assert!(params.strict);
    assert!(params.json);
    assert_eq!(params.color, ColorChoice::Never);
    assert!(!params.color.should_colorize());
}

#[test]
fn check_defaults() {
    let m = check_command()
        .try_get_matches_from(["check", "main.sy"])
        .unwrap();
    let params = CheckParams::from_matches(&m);

    assert!(!params.strict);
    assert!(!params.json);
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn check_rejects_unknown_color() {
    let result = check_command().try_get_matches_from(["check", "main.sy", "--color", "pink"]);
    assert!(result.is_err());
}

#[test]
fn check_does_not_take_tree_flags() {
    let result = check_command().try_get_matches_from(["check", "main.sy", "--raw"]);
    assert!(result.is_err());
}

#[test]
fn symbols_json() {
    let m = symbols_command()
        .try_get_matches_from(["symbols", "-s", "int a;", "--json"])
        .unwrap();
    let params = SymbolsParams::from_matches(&m);
    assert!(params.json);
    assert_eq!(params.source_text.as_deref(), Some("int a;"));
}

#[test]
fn lang_json() {
    let m = lang_command().try_get_matches_from(["lang", "--json"]).unwrap();
    assert!(LangParams::from_matches(&m).json);

    let m = lang_command().try_get_matches_from(["lang"]).unwrap();
    assert!(!LangParams::from_matches(&m).json);
}

#[test]
fn lsp_port() {
    let m = lsp_command().try_get_matches_from(["lsp"]).unwrap();
    assert_eq!(LspParams::from_matches(&m).port, None);

    let m = lsp_command().try_get_matches_from(["lsp", "--port"]).unwrap();
    assert_eq!(LspParams::from_matches(&m).port, Some(sysy_lsp::DEFAULT_TCP_PORT));

    let m = lsp_command()
        .try_get_matches_from(["lsp", "--port", "7000"])
        .unwrap();
    assert_eq!(LspParams::from_matches(&m).port, Some(7000));

    assert!(lsp_command()
        .try_get_matches_from(["lsp", "--port", "http"])
        .is_err());
}

#[test]
fn cli_requires_subcommand() {
    assert!(build_cli().try_get_matches_from(["sysy"]).is_err());
    assert!(build_cli().try_get_matches_from(["sysy", "frobnicate"]).is_err());

    let m = build_cli()
        .try_get_matches_from(["sysy", "tree", "-s", "int a;"])
        .unwrap();
    assert_eq!(m.subcommand_name(), Some("tree"));
}

#[test]
fn cli_definition_is_consistent() {
    build_cli().debug_assert();
}
