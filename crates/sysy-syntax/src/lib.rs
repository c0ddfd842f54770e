//! SysY: grammar handle, recovering parser and semantic analysis.
//!
//! # Example
//!
//! ```
//! use sysy_syntax::{analyze, parse};
//!
//! let source = "int main() { return x; }";
//!
//! let parse = parse(source).expect("out of fuel");
//! let model = analyze(&parse.source_file());
//! assert!(parse.is_valid());
//! eprintln!("{}", model.diagnostics().render(source));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod analyze;
pub mod diagnostics;
pub mod language;
pub mod parser;


pub use analyze::{SemanticModel, analyze};
pub use diagnostics::{Diagnostics, DiagnosticsPrinter, Severity};
pub use language::{Language, language, tree_sitter_sysy_parser};
pub use parser::{
    Parse, ParseOptions, SyntaxKind, SyntaxNode, SyntaxToken, parse, parse_with_options,
};
pub use rowan::{TextRange, TextSize};

/// Errors that can occur during parsing.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Execution fuel exhausted (too many parser operations).
    #[error("execution limit exceeded")]
    ExecFuelExhausted,
}

/// Result type for parsing operations.
pub type Result<T> = std::result::Result<T, Error>;
