use lsp_types::{Hover, HoverContents, MarkupContent, MarkupKind, Position};
use sysy_syntax::analyze::Resolution;

use crate::{Document, Result};

pub const DEFAULT_HOVER_MAX_LENGTH: usize = 200;

impl Document {
    /// Declaration text of the name under the cursor as a `sysy` code block.
    ///
    /// Functions show their signature only; builtins their prototype. Text longer than
    /// `max_length` bytes is cut at a character boundary and marked with `...`.
    pub fn hover(&self, position: Position, max_length: usize) -> Result<Option<Hover>> {
        let Some((token, resolution)) = self.resolution_under(position)? else {
            return Ok(None);
        };
        let text = match resolution {
            Resolution::Symbol(id) => {
                let symbol = self.model().symbol(id);
                let range = if symbol.is_function() {
                    self.parse()
                        .source_file()
                        .func_defs()
                        .find(|f| f.text_range() == symbol.decl_range())
                        .map_or(symbol.decl_range(), |f| f.signature_range())
                } else {
                    symbol.decl_range()
                };
                truncate(self.slice(range), max_length)
            }
            Resolution::Builtin(builtin) => builtin.signature(),
            Resolution::Unresolved => return Ok(None),
        };
        Ok(Some(Hover {
            contents: HoverContents::Markup(MarkupContent {
                kind: MarkupKind::Markdown,
                value: format!("```sysy\n{text}\n```"),
            }),
            range: Some(self.to_lsp_range(token.text_range())?),
        }))
    }
}

fn truncate(text: &str, max_length: usize) -> String {
    if text.len() <= max_length {
        return text.to_owned();
    }
    let mut end = max_length;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}
