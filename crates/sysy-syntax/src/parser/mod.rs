//! Parser infrastructure for SysY.
//!
//! # Architecture
//!
//! This parser produces a lossless concrete syntax tree (CST) via Rowan's green tree builder.
//!
//! - Zero-copy parsing: tokens carry spans, text sliced only when building tree nodes
//! - Trivia buffering: whitespace/comments collected, then attached as leading trivia
//! - Checkpoint-based wrapping: binary expressions and assignments are wrapped retroactively
//! - Explicit recovery sets: per-production sets determine when to bail vs consume diagnostics
//!
//! # Recovery Strategy
//!
//! The parser is resilient and always produces a tree. Recovery follows these rules:
//!
//! 1. Unknown tokens get wrapped in `SyntaxKind::Error` nodes and consumed
//! 2. Missing expected tokens emit a diagnostic but don't consume (parent may handle)
//! 3. Recovery sets define "synchronization points" per production
//! 4. On nesting limit, remaining input goes into a single Error node
//!
//! Execution fuel exhaustion returns an actual error immediately.

pub mod ast;
pub mod cst;
pub mod lexer;
pub mod printer;

mod core;
mod grammar;
mod invariants;

#[cfg(test)]
mod cst_tests;
#[cfg(test)]
mod tests;

pub use cst::{SyntaxKind, SyntaxNode, SyntaxToken};

pub use core::{DEFAULT_EXEC_FUEL, DEFAULT_RECURSION_LIMIT, ParseOptions, Parser};
pub use printer::TreePrinter;

use crate::Result;
use crate::diagnostics::Diagnostics;

/// Parse result containing the green tree and syntax diagnostics.
///
/// The tree is always complete; diagnostics are returned separately.
/// Error nodes in the tree represent recovery points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parse {
    cst: rowan::GreenNode,
    diagnostics: Diagnostics,
}

impl Parse {
    pub fn as_cst(&self) -> &rowan::GreenNode {
        &self.cst
    }

    /// Creates a typed view over the immutable green tree.
    /// This is cheap: SyntaxNode is a thin wrapper with parent pointers.
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.cst.clone())
    }

    pub fn source_file(&self) -> ast::SourceFile {
        ast::SourceFile::cast(self.syntax()).expect("parser always produces SourceFile")
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn is_valid(&self) -> bool {
        !self.diagnostics.has_errors()
    }

    pub fn printer(&self) -> TreePrinter {
        TreePrinter::new(self.syntax())
    }
}

/// Main entry point with default limits. Returns Err on fuel exhaustion.
pub fn parse(source: &str) -> Result<Parse> {
    parse_with_options(source, ParseOptions::default())
}

pub fn parse_with_options(source: &str, options: ParseOptions) -> Result<Parse> {
    let mut parser = Parser::new(source, options);
    parser.parse_root();
    let (cst, diagnostics) = parser.finish()?;
    Ok(Parse { cst, diagnostics })
}
