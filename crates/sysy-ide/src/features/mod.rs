//! Editor features, one `impl Document` block per file.

mod completion;
mod definition;
mod diagnostics;
mod hover;
mod references;
mod semantic_tokens;
mod symbols;
mod token;

#[cfg(test)]
mod symbols_tests;

pub use completion::KEYWORDS;
pub use definition::Definition;
pub use hover::DEFAULT_HOVER_MAX_LENGTH;
pub use semantic_tokens::{TOKEN_MODIFIERS, TOKEN_TYPES, semantic_tokens_legend};
