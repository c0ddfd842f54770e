use lsp_types::{Position, Range};

use crate::{Document, Result};

impl Document {
    /// Every use of the symbol under the cursor, in source order, optionally led by its
    /// declaration.
    pub fn references(&self, position: Position, include_declaration: bool) -> Result<Vec<Range>> {
        let Some(id) = self.symbol_under(position)? else {
            return Ok(Vec::new());
        };
        let model = self.model();
        let declaration = include_declaration.then(|| model.symbol(id).name_range());
        declaration
            .into_iter()
            .chain(model.references_to(id).map(|r| r.range()))
            .map(|range| self.to_lsp_range(range))
            .collect()
    }
}
