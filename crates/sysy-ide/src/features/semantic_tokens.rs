use lsp_types::{
    SemanticToken, SemanticTokenModifier, SemanticTokenType, SemanticTokens,
    SemanticTokensLegend,
};
use sysy_syntax::analyze::{Resolution, SymbolKind};
use sysy_syntax::{SyntaxKind, SyntaxToken, TextRange, TextSize};

use crate::{Document, Result};

/// Token types, indexed by the `token_type` field of each encoded token.
pub const TOKEN_TYPES: &[SemanticTokenType] = &[
    SemanticTokenType::KEYWORD,
    SemanticTokenType::FUNCTION,
    SemanticTokenType::VARIABLE,
    SemanticTokenType::NUMBER,
    SemanticTokenType::COMMENT,
    SemanticTokenType::OPERATOR,
    SemanticTokenType::TYPE,
];

pub const TOKEN_MODIFIERS: &[SemanticTokenModifier] = &[
    SemanticTokenModifier::DECLARATION,
    SemanticTokenModifier::READONLY,
];

const KEYWORD: u32 = 0;
const FUNCTION: u32 = 1;
const VARIABLE: u32 = 2;
const NUMBER: u32 = 3;
const COMMENT: u32 = 4;
const OPERATOR: u32 = 5;
const TYPE: u32 = 6;

const DECLARATION: u32 = 1 << 0;
const READONLY: u32 = 1 << 1;

pub fn semantic_tokens_legend() -> SemanticTokensLegend {
    SemanticTokensLegend {
        token_types: TOKEN_TYPES.to_vec(),
        token_modifiers: TOKEN_MODIFIERS.to_vec(),
    }
}

/// A classified token on a single line, before delta encoding.
struct Classified {
    line: u32,
    start: u32,
    length: u32,
    token_type: u32,
    modifiers: u32,
}

impl Document {
    /// Highlighting for the whole document, delta-encoded as LSP expects.
    pub fn semantic_tokens(&self) -> Result<SemanticTokens> {
        let mut classified = Vec::new();
        for token in self
            .parse()
            .syntax()
            .descendants_with_tokens()
            .filter_map(|element| element.into_token())
        {
            let Some((token_type, modifiers)) = self.classify(&token) else {
                continue;
            };
            for range in self.line_pieces(token.text_range()) {
                let start = self.position_at(range.start())?;
                let end = self.position_at(range.end())?;
                if end.character > start.character {
                    classified.push(Classified {
                        line: start.line,
                        start: start.character,
                        length: end.character - start.character,
                        token_type,
                        modifiers,
                    });
                }
            }
        }
        Ok(SemanticTokens {
            result_id: None,
            data: encode(&classified),
        })
    }

    fn classify(&self, token: &SyntaxToken) -> Option<(u32, u32)> {
        let kind = token.kind();
        let token_type = match kind {
            SyntaxKind::KwInt | SyntaxKind::KwVoid => TYPE,
            _ if kind.is_keyword() => KEYWORD,
            SyntaxKind::Decimal
            | SyntaxKind::Octal
            | SyntaxKind::Hexadecimal
            | SyntaxKind::BadNumber => NUMBER,
            _ if kind.is_comment() => COMMENT,
            _ if kind.is_operator() => OPERATOR,
            SyntaxKind::Ident => return Some(self.classify_ident(token)),
            _ => return None,
        };
        Some((token_type, 0))
    }

    fn classify_ident(&self, token: &SyntaxToken) -> (u32, u32) {
        let model = self.model();
        let start = token.text_range().start();
        let is_call = token
            .parent()
            .is_some_and(|parent| parent.kind() == SyntaxKind::CallExp);
        match model.resolve_at(start) {
            Some(Resolution::Symbol(id)) => {
                let symbol = model.symbol(id);
                let token_type = if symbol.is_function() { FUNCTION } else { VARIABLE };
                let mut modifiers = 0;
                if symbol.name_range() == token.text_range() {
                    modifiers |= DECLARATION;
                }
                if symbol.kind() == SymbolKind::Constant {
                    modifiers |= READONLY;
                }
                (token_type, modifiers)
            }
            Some(Resolution::Builtin(_)) => (FUNCTION, 0),
            _ if is_call => (FUNCTION, 0),
            _ => (VARIABLE, 0),
        }
    }

    /// Splits `range` at line breaks; each piece excludes the terminator.
    fn line_pieces(&self, range: TextRange) -> Vec<TextRange> {
        let rope = self.rope();
        let start: usize = range.start().into();
        let end: usize = range.end().into();
        let first = rope.byte_to_line(start);
        let last = rope.byte_to_line(end);
        if first == last {
            return vec![range];
        }
        (first..=last)
            .map(|line| {
                let line_start = rope.line_to_byte(line);
                let text = rope.line(line);
                let content = text.len_bytes() - trailing_break_len(&text.to_string());
                let piece_start = start.max(line_start);
                let piece_end = end.min(line_start + content);
                TextRange::new(offset(piece_start), offset(piece_end.max(piece_start)))
            })
            .collect()
    }
}

fn trailing_break_len(line: &str) -> usize {
    line.len() - line.trim_end_matches(['\n', '\r']).len()
}

fn offset(byte: usize) -> TextSize {
    TextSize::from(byte as u32)
}

fn encode(tokens: &[Classified]) -> Vec<SemanticToken> {
    let mut data = Vec::with_capacity(tokens.len());
    let (mut prev_line, mut prev_start) = (0, 0);
    for token in tokens {
        let delta_line = token.line - prev_line;
        let delta_start = if delta_line == 0 {
            token.start - prev_start
        } else {
            token.start
        };
        data.push(SemanticToken {
            delta_line,
            delta_start,
            length: token.length,
            token_type: token.token_type,
            token_modifiers_bitset: token.modifiers,
        });
        prev_line = token.line;
        prev_start = token.start;
    }
    data
}
