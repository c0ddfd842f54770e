use lsp_types::DocumentSymbol;
use sysy_syntax::analyze::{ScopeId, Symbol, SymbolKind};

use crate::{Document, Result};

impl Document {
    /// Outline: global declarations in source order, functions holding their parameters
    /// and locals.
    pub fn document_symbols(&self) -> Result<Vec<DocumentSymbol>> {
        let model = self.model();
        model
            .symbol_ids()
            .filter(|id| model.symbol(*id).scope() == ScopeId::GLOBAL)
            .map(|id| {
                let children = model
                    .function_scope(id)
                    .map(|scope| {
                        model
                            .symbols_within(scope)
                            .map(|child| self.document_symbol(model.symbol(child), None))
                            .collect::<Result<Vec<_>>>()
                    })
                    .transpose()?;
                self.document_symbol(model.symbol(id), children)
            })
            .collect()
    }

    #[allow(deprecated)]
    fn document_symbol(
        &self,
        symbol: &Symbol,
        children: Option<Vec<DocumentSymbol>>,
    ) -> Result<DocumentSymbol> {
        Ok(DocumentSymbol {
            name: symbol.name().to_owned(),
            detail: Some(symbol.ty().to_string()),
            kind: lsp_kind(symbol.kind()),
            tags: None,
            deprecated: None,
            range: self.to_lsp_range(symbol.decl_range())?,
            selection_range: self.to_lsp_range(symbol.name_range())?,
            children,
        })
    }
}

fn lsp_kind(kind: SymbolKind) -> lsp_types::SymbolKind {
    match kind {
        SymbolKind::Function => lsp_types::SymbolKind::FUNCTION,
        SymbolKind::Constant => lsp_types::SymbolKind::CONSTANT,
        SymbolKind::Variable | SymbolKind::Parameter => lsp_types::SymbolKind::VARIABLE,
    }
}
