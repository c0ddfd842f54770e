use lsp_types::{Position, Range};
use ropey::Rope;
use sysy_syntax::{
    Parse, SemanticModel, SyntaxKind, SyntaxToken, TextRange, TextSize, analyze, parse,
};

use crate::Result;
use crate::position::{OffsetEncoding, lsp_to_range, offset_to_position, position_to_offset};

/// An open SysY document.
///
/// Every change re-parses and re-analyzes the whole text, so the parse and model always
/// describe the current version.
#[derive(Debug, Clone)]
pub struct Document {
    rope: Rope,
    text: String,
    version: i32,
    encoding: OffsetEncoding,
    parse: Parse,
    model: SemanticModel,
}

impl Document {
    pub fn new(text: impl Into<String>, version: i32, encoding: OffsetEncoding) -> Result<Self> {
        let text = text.into();
        let (parse, model) = analyze_text(&text)?;
        Ok(Self {
            rope: Rope::from_str(&text),
            text,
            version,
            encoding,
            parse,
            model,
        })
    }

    /// Applies one content change. `range: None` replaces the whole text.
    ///
    /// On error the document is left as it was.
    pub fn apply_change(&mut self, range: Option<Range>, new_text: &str) -> Result<()> {
        let rope = match range {
            None => Rope::from_str(new_text),
            Some(range) => {
                let range = lsp_to_range(&self.rope, range, self.encoding)?;
                let mut rope = self.rope.clone();
                let start = rope.byte_to_char(range.start().into());
                let end = rope.byte_to_char(range.end().into());
                rope.remove(start..end);
                rope.insert(start, new_text);
                rope
            }
        };
        let text = rope.to_string();
        let (parse, model) = analyze_text(&text)?;
        tracing::trace!(
            bytes = text.len(),
            errors = parse.diagnostics().error_count(),
            "reparsed document"
        );
        self.rope = rope;
        self.text = text;
        self.parse = parse;
        self.model = model;
        Ok(())
    }

    pub fn set_version(&mut self, version: i32) {
        self.version = version;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    pub fn version(&self) -> i32 {
        self.version
    }

    pub fn encoding(&self) -> OffsetEncoding {
        self.encoding
    }

    pub fn parse(&self) -> &Parse {
        &self.parse
    }

    pub fn model(&self) -> &SemanticModel {
        &self.model
    }

    pub fn slice(&self, range: TextRange) -> &str {
        &self.text[range]
    }

    pub fn offset_at(&self, position: Position) -> Result<TextSize> {
        let offset = position_to_offset(&self.rope, position, self.encoding)?;
        Ok(TextSize::from(offset as u32))
    }

    pub fn position_at(&self, offset: TextSize) -> Result<Position> {
        offset_to_position(&self.rope, offset.into(), self.encoding)
    }

    pub fn to_lsp_range(&self, range: TextRange) -> Result<Range> {
        Ok(Range::new(
            self.position_at(range.start())?,
            self.position_at(range.end())?,
        ))
    }

    /// Token touching `offset`. Between two tokens an identifier wins, then any token
    /// that is not whitespace; ties go to the left one.
    pub(crate) fn token_at_offset(&self, offset: TextSize) -> Option<SyntaxToken> {
        let rank = |token: &SyntaxToken| match token.kind() {
            SyntaxKind::Ident => 2,
            SyntaxKind::Whitespace | SyntaxKind::Newline => 0,
            _ => 1,
        };
        let token = match self.parse.syntax().token_at_offset(offset) {
            rowan::TokenAtOffset::None => return None,
            rowan::TokenAtOffset::Single(token) => token,
            rowan::TokenAtOffset::Between(left, right) => {
                if rank(&right) > rank(&left) {
                    right
                } else {
                    left
                }
            }
        };
        (rank(&token) > 0).then_some(token)
    }

    pub(crate) fn ident_at_offset(&self, offset: TextSize) -> Option<SyntaxToken> {
        self.token_at_offset(offset)
            .filter(|token| token.kind() == SyntaxKind::Ident)
    }
}

fn analyze_text(text: &str) -> Result<(Parse, SemanticModel)> {
    let parse = parse(text)?;
    let model = analyze(&parse.source_file());
    Ok((parse, model))
}
