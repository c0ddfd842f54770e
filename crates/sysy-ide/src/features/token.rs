use lsp_types::{Position, Range};
use sysy_syntax::SyntaxToken;
use sysy_syntax::analyze::Resolution;

use crate::{Document, Result};

impl Document {
    /// Range of the token under the cursor, `None` over whitespace.
    pub fn token_at(&self, position: Position) -> Result<Option<Range>> {
        let offset = self.offset_at(position)?;
        self.token_at_offset(offset)
            .map(|token| self.to_lsp_range(token.text_range()))
            .transpose()
    }

    /// The identifier under the cursor and what it names.
    pub(crate) fn resolution_under(
        &self,
        position: Position,
    ) -> Result<Option<(SyntaxToken, Resolution)>> {
        let offset = self.offset_at(position)?;
        let Some(ident) = self.ident_at_offset(offset) else {
            return Ok(None);
        };
        let resolution = self.model().resolve_at(ident.text_range().start());
        Ok(resolution.map(|r| (ident, r)))
    }
}
