//! Token cursor, tree builder and diagnostic plumbing shared by the grammar rules.

use std::cell::Cell;

use rowan::{Checkpoint, GreenNode, GreenNodeBuilder, TextRange, TextSize};

use super::cst::{SyntaxKind, TokenSet};
use super::invariants::LOOKAHEAD_BUDGET;
use super::lexer::{Token, lex};
use crate::Error;
use crate::diagnostics::{DiagnosticBuilder, DiagnosticKind, Diagnostics};

/// Default execution fuel: one unit per consumed token.
pub const DEFAULT_EXEC_FUEL: u32 = 1_000_000;

/// Default nesting limit for blocks, statements and expressions.
pub const DEFAULT_RECURSION_LIMIT: u32 = 512;

/// Limits applied while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// `None` disables the limit.
    pub exec_fuel: Option<u32>,
    pub recursion_limit: u32,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            exec_fuel: Some(DEFAULT_EXEC_FUEL),
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }
}

/// Where a `(`, `[` or `{` was opened, for "unclosed" diagnostics.
#[derive(Debug, Clone, Copy)]
struct Opener {
    kind: SyntaxKind,
    span: TextRange,
}

pub struct Parser<'src> {
    pub(super) source: &'src str,
    pub(super) tokens: Vec<Token>,
    pub(super) pos: usize,
    /// Trivia seen but not yet attached; it goes in front of the next node or token.
    pending_trivia: Vec<Token>,
    builder: GreenNodeBuilder<'static>,
    pub(super) diagnostics: Diagnostics,
    openers: Vec<Opener>,
    pub(super) lookahead_budget: Cell<u32>,
    exec_fuel: Option<u32>,
    depth: u32,
    recursion_limit: u32,
    too_deep: bool,
    /// Start of the last reported diagnostic; a second report there is noise.
    last_report: Option<TextSize>,
    fatal: Option<Error>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, options: ParseOptions) -> Self {
        Self {
            source,
            tokens: lex(source),
            pos: 0,
            pending_trivia: Vec::new(),
            builder: GreenNodeBuilder::new(),
            diagnostics: Diagnostics::new(),
            openers: Vec::new(),
            lookahead_budget: Cell::new(LOOKAHEAD_BUDGET),
            exec_fuel: options.exec_fuel,
            depth: 0,
            recursion_limit: options.recursion_limit,
            too_deep: false,
            last_report: None,
            fatal: None,
        }
    }

    pub(super) fn finish(mut self) -> Result<(GreenNode, Diagnostics), Error> {
        self.flush_trivia();
        match self.fatal {
            Some(err) => Err(err),
            None => Ok((self.builder.finish(), self.diagnostics)),
        }
    }

    // Cursor

    fn skip_trivia(&mut self) {
        while let Some(&token) = self.tokens.get(self.pos) {
            if !token.kind.is_trivia() {
                break;
            }
            self.pending_trivia.push(token);
            self.pos += 1;
        }
    }

    fn at_end(&mut self) -> bool {
        self.skip_trivia();
        self.pos >= self.tokens.len()
    }

    /// Kind of the next significant token, `Error` at end of input.
    pub(super) fn current(&mut self) -> SyntaxKind {
        self.skip_trivia();
        self.ensure_progress();
        self.tokens
            .get(self.pos)
            .map_or(SyntaxKind::Error, |t| t.kind)
    }

    pub(super) fn current_span(&mut self) -> TextRange {
        self.skip_trivia();
        match self.tokens.get(self.pos) {
            Some(token) => token.span,
            None => TextRange::empty(TextSize::of(self.source)),
        }
    }

    pub(super) fn current_text(&mut self) -> &'src str {
        self.skip_trivia();
        self.tokens
            .get(self.pos)
            .map_or("", |token| token.text(self.source))
    }

    pub(super) fn should_stop(&mut self) -> bool {
        self.at_end() || self.fatal.is_some()
    }

    pub(super) fn currently_is(&mut self, kind: SyntaxKind) -> bool {
        !self.at_end() && self.current() == kind
    }

    pub(super) fn currently_is_one_of(&mut self, set: TokenSet) -> bool {
        !self.at_end() && set.contains(self.current())
    }

    /// Kind of the `n`th significant token from here; `peek_nth(0)` is the current one.
    pub(super) fn peek_nth(&mut self, n: usize) -> Option<SyntaxKind> {
        self.skip_trivia();
        self.tokens[self.pos..]
            .iter()
            .map(|t| t.kind)
            .filter(|kind| !kind.is_trivia())
            .nth(n)
    }

    pub(super) fn next_is(&mut self, kind: SyntaxKind) -> bool {
        self.peek_nth(1) == Some(kind)
    }

    pub(super) fn last_non_trivia_end(&self) -> Option<TextSize> {
        self.tokens[..self.pos]
            .iter()
            .rfind(|t| !t.kind.is_trivia())
            .map(|t| t.span.end())
    }

    /// `` `text` `` of the current token, or `end of input`.
    pub(super) fn found(&mut self) -> String {
        if self.should_stop() {
            "end of input".to_owned()
        } else {
            format!("`{}`", self.current_text())
        }
    }

    // Tree building

    fn flush_trivia(&mut self) {
        for token in std::mem::take(&mut self.pending_trivia) {
            self.builder
                .token(token.kind.into(), token.text(self.source));
        }
    }

    pub(super) fn eat_trivia(&mut self) {
        self.skip_trivia();
        self.flush_trivia();
    }

    pub(super) fn start_node(&mut self, kind: SyntaxKind) {
        self.flush_trivia();
        self.builder.start_node(kind.into());
    }

    pub(super) fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind) {
        self.builder.start_node_at(checkpoint, kind.into());
    }

    pub(super) fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    pub(super) fn checkpoint(&mut self) -> Checkpoint {
        self.flush_trivia();
        self.builder.checkpoint()
    }

    /// Moves the current token into the tree. Each call spends one unit of fuel;
    /// running dry is fatal, and `finish` then returns the error instead of a tree.
    pub(super) fn bump(&mut self) {
        self.skip_trivia();
        let Some(&token) = self.tokens.get(self.pos) else {
            panic!("bump past end of input");
        };
        self.refill_lookahead();
        match &mut self.exec_fuel {
            None => {}
            Some(0) => {
                self.fatal.get_or_insert(Error::ExecFuelExhausted);
            }
            Some(left) => *left -= 1,
        }
        self.flush_trivia();
        self.builder
            .token(token.kind.into(), token.text(self.source));
        self.pos += 1;
    }

    pub(super) fn eat_token(&mut self, kind: SyntaxKind) -> bool {
        let matches = self.currently_is(kind);
        if matches {
            self.bump();
        }
        matches
    }

    // Diagnostics

    /// `None` when something was already reported at `anchor`.
    fn report(
        &mut self,
        kind: DiagnosticKind,
        range: TextRange,
        anchor: TextSize,
    ) -> Option<DiagnosticBuilder<'_>> {
        if self.too_deep || self.last_report == Some(anchor) {
            return None;
        }
        self.last_report = Some(anchor);
        Some(self.diagnostics.report(kind, range))
    }

    pub(super) fn error_at(
        &mut self,
        kind: DiagnosticKind,
        range: TextRange,
        message: impl Into<String>,
    ) {
        if let Some(diag) = self.report(kind, range, range.start()) {
            diag.message(message).emit();
        }
    }

    pub(super) fn error_msg(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        let range = self.current_span();
        self.error_at(kind, range, message);
    }

    /// Reports at the current token and consumes it inside an `Error` node.
    pub(super) fn error_and_bump_msg(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        self.error_msg(kind, message);
        if !self.at_end() {
            self.start_node(SyntaxKind::Error);
            self.bump();
            self.finish_node();
        }
    }

    /// Reports at the current token, then wraps everything up to `recovery` in an `Error` node.
    pub(super) fn error_recover(&mut self, kind: DiagnosticKind, message: &str, recovery: TokenSet) {
        let skip = !self.currently_is_one_of(recovery) && !self.should_stop();
        if skip {
            self.start_node(SyntaxKind::Error);
        }
        self.error_msg(kind, message);
        if skip {
            while !self.currently_is_one_of(recovery) && !self.should_stop() {
                self.bump();
            }
            self.finish_node();
        }
    }

    /// On mismatch, reports without consuming anything.
    pub(super) fn expect(&mut self, kind: SyntaxKind, what: &str) -> bool {
        if self.eat_token(kind) {
            return true;
        }
        let found = self.found();
        self.error_msg(
            DiagnosticKind::UnexpectedToken,
            format!("expected {what}, found {found}"),
        );
        false
    }

    /// A missing `;` is reported right after the previous token, with an insertion fix.
    pub(super) fn expect_semicolon(&mut self) -> bool {
        if self.eat_token(SyntaxKind::Semicolon) {
            return true;
        }
        let found = self.found();
        let at = match self.last_non_trivia_end() {
            Some(end) => end,
            None => self.current_span().start(),
        };
        let range = TextRange::empty(at);
        if let Some(diag) = self.report(DiagnosticKind::MissingSemicolon, range, at) {
            diag.message(found).fix("insert `;`", ";").emit();
        }
        false
    }

    // Nesting

    /// `false` once nesting is too deep: the rest of the input has been swallowed into
    /// an `Error` node and the caller must not descend.
    pub(super) fn enter_recursion(&mut self) -> bool {
        if self.too_deep {
            return false;
        }
        if self.depth < self.recursion_limit {
            self.depth += 1;
            self.refill_lookahead();
            return true;
        }

        let range = self.current_span();
        let limit = self.recursion_limit.to_string();
        self.error_at(DiagnosticKind::NestingTooDeep, range, limit);
        self.too_deep = true;
        self.start_node(SyntaxKind::Error);
        while !self.should_stop() {
            self.bump();
        }
        self.finish_node();
        false
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.refill_lookahead();
    }

    pub(super) fn push_delimiter(&mut self, kind: SyntaxKind) {
        let span = self.current_span();
        self.openers.push(Opener { kind, span });
    }

    /// Closes the innermost delimiter. When `close` is missing, the diagnostic spans
    /// from the opener to the current token so nested errors fall inside it.
    pub(super) fn close_delimiter(&mut self, close: SyntaxKind, what: &str) -> bool {
        let opener = self.openers.pop();
        if self.eat_token(close) {
            return true;
        }
        let Some(opener) = opener else {
            return self.expect(close, what);
        };
        let kind = match opener.kind {
            SyntaxKind::BraceOpen => DiagnosticKind::UnclosedBrace,
            SyntaxKind::BracketOpen => DiagnosticKind::UnclosedBracket,
            _ => DiagnosticKind::UnclosedParen,
        };
        let current = self.current_span();
        let range = TextRange::new(opener.span.start(), current.end());
        if let Some(diag) = self.report(kind, range, current.start()) {
            diag.related_to("opened here", opener.span).emit();
        }
        false
    }
}
