use lsp_types::{Position, Range};
use sysy_syntax::analyze::{Resolution, SymbolId, SymbolKind};

use crate::{Document, Result};

/// Where a name is declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub name: String,
    pub kind: SymbolKind,
    /// The declaring construct: the whole declaration for variables and constants, the
    /// whole function for functions, the parameter for parameters.
    pub range: Range,
    /// Just the name.
    pub selection_range: Range,
}

impl Document {
    /// Definition of the identifier under the cursor. Builtins and unresolved names have none.
    pub fn find_definition(&self, position: Position) -> Result<Option<Definition>> {
        let Some(id) = self.symbol_under(position)? else {
            return Ok(None);
        };
        let symbol = self.model().symbol(id);
        Ok(Some(Definition {
            name: symbol.name().to_owned(),
            kind: symbol.kind(),
            range: self.to_lsp_range(symbol.decl_range())?,
            selection_range: self.to_lsp_range(symbol.name_range())?,
        }))
    }

    pub(crate) fn symbol_under(&self, position: Position) -> Result<Option<SymbolId>> {
        Ok(match self.resolution_under(position)? {
            Some((_, Resolution::Symbol(id))) => Some(id),
            _ => None,
        })
    }
}
