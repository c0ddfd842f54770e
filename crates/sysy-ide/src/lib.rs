//! Editor features over a single SysY document.
//!
//! A [`Document`] owns the text as a rope together with the parse and semantic model of
//! its current version. Features take LSP positions counted in the document's
//! [`OffsetEncoding`] and answer with `lsp-types` values, so a server forwards them as is.
//!
//! # Example
//!
//! ```
//! use sysy_ide::{Document, OffsetEncoding};
//! use sysy_ide::lsp_types::Position;
//!
//! let doc = Document::new("int n; int main() { return n; }", 1, OffsetEncoding::Utf16).unwrap();
//! let def = doc.find_definition(Position::new(0, 27)).unwrap().unwrap();
//! assert_eq!(def.name, "n");
//! ```

mod document;
mod features;
pub mod position;


pub use document::Document;
pub use features::{
    DEFAULT_HOVER_MAX_LENGTH, Definition, KEYWORDS, TOKEN_MODIFIERS, TOKEN_TYPES, semantic_tokens_legend,
};
pub use lsp_types;
pub use position::OffsetEncoding;

/// Errors raised while mapping editor positions onto a document.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("position {line}:{character} is outside the document")]
    PositionOutOfBounds { line: u32, character: u32 },

    #[error("offset {offset} is outside the document (length {len})")]
    OffsetOutOfBounds { offset: usize, len: usize },

    #[error("invalid range {start}..{end}")]
    InvalidRange { start: usize, end: usize },

    #[error(transparent)]
    Syntax(#[from] sysy_syntax::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
