use lsp_types::{CompletionItem, CompletionItemKind, Position};
use sysy_syntax::TextSize;
use sysy_syntax::analyze::{BUILTINS, Symbol, SymbolKind};

use crate::{Document, Result};

pub const KEYWORDS: &[&str] = &[
    "int", "void", "const", "if", "else", "while", "break", "continue", "return",
];

impl Document {
    /// Candidates for the identifier being typed left of the cursor: keywords first, then
    /// visible symbols innermost first, then builtins. Prefixes match case-insensitively.
    pub fn completion(
        &self,
        position: Position,
        include_keywords: bool,
    ) -> Result<Vec<CompletionItem>> {
        let offset = self.offset_at(position)?;
        let prefix = self.ident_prefix(offset).to_lowercase();
        let matches = |name: &str| name.to_lowercase().starts_with(&prefix);

        let mut items = Vec::new();
        if include_keywords {
            let keywords = KEYWORDS.iter().copied().filter(|kw| matches(kw));
            items.extend(keywords.map(|kw| CompletionItem {
                label: kw.to_owned(),
                kind: Some(CompletionItemKind::KEYWORD),
                ..Default::default()
            }));
        }

        let visible = self.visible_symbols_at(offset);
        items.extend(
            visible
                .iter()
                .filter(|symbol| matches(symbol.name()))
                .map(|symbol| CompletionItem {
                    label: symbol.name().to_owned(),
                    kind: Some(completion_kind(symbol.kind())),
                    detail: Some(symbol.ty().to_string()),
                    ..Default::default()
                }),
        );
        items.extend(
            BUILTINS
                .iter()
                .filter(|b| matches(b.name) && !visible.iter().any(|s| s.name() == b.name))
                .map(|b| CompletionItem {
                    label: b.name.to_owned(),
                    kind: Some(CompletionItemKind::FUNCTION),
                    detail: Some(b.signature()),
                    ..Default::default()
                }),
        );
        Ok(items)
    }

    /// Names usable at the cursor, innermost scope first, each name once.
    pub fn visible_symbols(&self, position: Position) -> Result<Vec<&Symbol>> {
        let offset = self.offset_at(position)?;
        Ok(self.visible_symbols_at(offset))
    }

    fn visible_symbols_at(&self, offset: TextSize) -> Vec<&Symbol> {
        self.model()
            .visible_symbols(offset)
            .into_iter()
            .map(|id| self.model().symbol(id))
            .collect()
    }

    /// Identifier characters immediately left of `offset`.
    fn ident_prefix(&self, offset: TextSize) -> &str {
        let before = &self.text()[..usize::from(offset)];
        let len = before
            .chars()
            .rev()
            .take_while(|c| c.is_ascii_alphanumeric() || *c == '_')
            .count();
        &before[before.len() - len..]
    }
}

fn completion_kind(kind: SymbolKind) -> CompletionItemKind {
    match kind {
        SymbolKind::Function => CompletionItemKind::FUNCTION,
        SymbolKind::Constant => CompletionItemKind::CONSTANT,
        SymbolKind::Variable | SymbolKind::Parameter => CompletionItemKind::VARIABLE,
    }
}
