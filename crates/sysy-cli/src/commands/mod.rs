pub mod check;
pub mod lang;
pub mod lsp;
pub mod source;
pub mod symbols;
pub mod tree;

#[cfg(test)]
mod check_tests;
#[cfg(test)]
mod tree_tests;

use std::process::exit;

use sysy_syntax::Parse;

use source::{Source, SourceInput};

/// Loads and parses the input, or reports the failure and exits.
pub(crate) fn parse_input(input: &SourceInput) -> (Source, Parse) {
    let source = input.load().unwrap_or_else(|err| {
        eprintln!("error: {err}");
        exit(1);
    });
    let parse = sysy_syntax::parse(&source.text).unwrap_or_else(|err| {
        eprintln!("error: {}: {err}", source.name);
        exit(1);
    });
    tracing::debug!(name = %source.name, bytes = source.text.len(), "parsed");
    (source, parse)
}
