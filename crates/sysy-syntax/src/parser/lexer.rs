//! Tokenizer.
//!
//! Tokens are spans into the source; their text is sliced out on demand. Characters
//! no rule accepts are merged into one `Garbage` token per run, so a stray `@#$` costs
//! the parser one error instead of three.

use logos::Logos;
use rowan::{TextRange, TextSize};

use super::cst::SyntaxKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub span: TextRange,
}

impl Token {
    #[inline]
    pub fn new(kind: SyntaxKind, span: TextRange) -> Self {
        Self { kind, span }
    }

    #[inline]
    pub fn text<'src>(&self, source: &'src str) -> &'src str {
        &source[self.span]
    }
}

pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::new();
    for (result, span) in SyntaxKind::lexer(source).spanned() {
        let span = TextRange::new(offset(span.start), offset(span.end));
        match result {
            Ok(kind) => tokens.push(Token::new(kind, span)),
            Err(()) => match tokens.last_mut() {
                Some(last) if last.kind == SyntaxKind::Garbage && last.span.end() == span.start() => {
                    last.span = last.span.cover(span);
                }
                _ => tokens.push(Token::new(SyntaxKind::Garbage, span)),
            },
        }
    }
    tokens
}

fn offset(byte: usize) -> TextSize {
    TextSize::from(byte as u32)
}
