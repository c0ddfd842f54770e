//! Grammar productions for SysY.
//!
//! This module implements all `parse_*` methods as an extension of `Parser`.
//! Node shapes follow the SysY tree-sitter grammar; `Exp` alternatives get
//! their own node kinds (`BinaryExp`, `UnaryExp`, `CallExp`, `ParenExp`).

mod expressions;
mod items;
mod statements;
