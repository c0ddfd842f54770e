//! Semantic analysis over the typed AST.
//!
//! Two passes share the [`Visitor`] walk:
//! 1. Resolution builds scopes and symbols and binds every identifier use
//! 2. Flow checks validate `break`/`continue` placement and `return` values
//!
//! Problems are reported as diagnostics; analysis never fails.

mod builtins;
mod flow;
mod model;
mod resolve;
pub mod visitor;

#[cfg(test)]
mod resolve_tests;

pub use builtins::{BUILTINS, Builtin, builtin};
pub use model::{
    Access, ParamType, Reference, Resolution, Scope, ScopeId, ScopeKind, SemanticModel, Symbol,
    SymbolId, SymbolKind, SymbolType,
};
pub use visitor::Visitor;

use crate::parser::ast::SourceFile;
use flow::FlowChecker;
use resolve::Resolver;

pub fn analyze(file: &SourceFile) -> SemanticModel {
    let mut model = SemanticModel::new(file.text_range());
    Resolver::new(&mut model).visit_source_file(file);
    FlowChecker::new(&mut model.diagnostics).visit_source_file(file);
    model.diagnostics.sort();
    model
}
