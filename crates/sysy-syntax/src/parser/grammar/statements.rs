use rowan::TextRange;

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::{EXPR_FIRST, STMT_RECOVERY};

impl Parser<'_> {
    /// `'{' (Decl | Stmt)* '}'`
    pub(crate) fn parse_block(&mut self) {
        if !self.enter_recursion() {
            return;
        }
        self.start_node(SyntaxKind::Block);
        self.assert_current(SyntaxKind::BraceOpen);
        self.push_delimiter(SyntaxKind::BraceOpen);
        self.bump();

        while !self.should_stop() && !self.currently_is(SyntaxKind::BraceClose) {
            self.parse_block_item();
        }

        self.close_delimiter(SyntaxKind::BraceClose, "`}`");
        self.finish_node();
        self.exit_recursion();
    }

    fn parse_block_item(&mut self) {
        match self.current() {
            SyntaxKind::KwConst => self.parse_const_decl(),
            SyntaxKind::KwInt | SyntaxKind::KwVoid => self.parse_var_decl(),
            _ => self.parse_stmt(),
        }
    }

    fn parse_stmt(&mut self) {
        if !self.enter_recursion() {
            return;
        }
        match self.current() {
            SyntaxKind::BraceOpen => self.parse_block(),
            SyntaxKind::KwIf => self.parse_if_stmt(),
            SyntaxKind::KwWhile => self.parse_while_stmt(),
            SyntaxKind::KwBreak => self.parse_jump_stmt(SyntaxKind::BreakStmt),
            SyntaxKind::KwContinue => self.parse_jump_stmt(SyntaxKind::ContinueStmt),
            SyntaxKind::KwReturn => self.parse_return_stmt(),
            SyntaxKind::Semicolon => {
                self.start_node(SyntaxKind::ExpStmt);
                self.bump();
                self.finish_node();
            }
            SyntaxKind::KwElse => {
                self.error_and_bump_msg(
                    DiagnosticKind::UnexpectedToken,
                    "`else` without a matching `if`",
                );
            }
            kind if EXPR_FIRST.contains(kind) && !self.should_stop() => {
                self.parse_expr_or_assign_stmt()
            }
            _ => {
                let found = self.found();
                if self.currently_is(SyntaxKind::BraceClose) || self.should_stop() {
                    self.error_msg(DiagnosticKind::ExpectedStatement, found);
                } else {
                    self.error_and_bump_msg(DiagnosticKind::ExpectedStatement, found);
                }
            }
        }
        self.exit_recursion();
    }

    /// `Lval '=' Exp ';'` | `Exp ';'`
    ///
    /// Parsed as an expression first, then wrapped once the `=` is seen.
    fn parse_expr_or_assign_stmt(&mut self) {
        let checkpoint = self.checkpoint();
        let start = self.current_span().start();
        let lhs = self.parse_expr();

        if self.currently_is(SyntaxKind::Assign) {
            self.start_node_at(checkpoint, SyntaxKind::AssignStmt);
            if lhs.is_some_and(|kind| kind != SyntaxKind::Lval) {
                let end = self.last_non_trivia_end().unwrap_or(start);
                let range = TextRange::new(start, end);
                let source = self.source;
                let text = &source[std::ops::Range::<usize>::from(range)];
                self.error_at(DiagnosticKind::InvalidAssignmentTarget, range, text);
            }
            self.bump();
            self.parse_expr();
        } else {
            self.start_node_at(checkpoint, SyntaxKind::ExpStmt);
        }
        self.finish_stmt();
        self.finish_node();
    }

    /// `'if' '(' Exp ')' Stmt ('else' Stmt)?`, `else` binds to the nearest `if`.
    fn parse_if_stmt(&mut self) {
        self.start_node(SyntaxKind::IfStmt);
        self.bump();
        self.parse_condition();
        self.parse_stmt();
        if self.currently_is(SyntaxKind::KwElse) {
            self.start_node(SyntaxKind::ElseBranch);
            self.bump();
            self.parse_stmt();
            self.finish_node();
        }
        self.finish_node();
    }

    /// `'while' '(' Exp ')' Stmt`
    fn parse_while_stmt(&mut self) {
        self.start_node(SyntaxKind::WhileStmt);
        self.bump();
        self.parse_condition();
        self.parse_stmt();
        self.finish_node();
    }

    fn parse_condition(&mut self) {
        if !self.currently_is(SyntaxKind::ParenOpen) {
            self.expect(SyntaxKind::ParenOpen, "`(`");
            if self.currently_is_one_of(EXPR_FIRST) {
                self.parse_expr();
            }
            return;
        }
        self.push_delimiter(SyntaxKind::ParenOpen);
        self.bump();
        self.parse_expr();
        self.close_delimiter(SyntaxKind::ParenClose, "`)`");
    }

    /// `'break' ';'` | `'continue' ';'`
    fn parse_jump_stmt(&mut self, kind: SyntaxKind) {
        self.start_node(kind);
        self.bump();
        self.finish_stmt();
        self.finish_node();
    }

    /// `'return' Exp? ';'`
    fn parse_return_stmt(&mut self) {
        self.start_node(SyntaxKind::ReturnStmt);
        self.assert_current(SyntaxKind::KwReturn);
        self.bump();
        if self.currently_is_one_of(EXPR_FIRST) {
            self.parse_expr();
        }
        self.finish_stmt();
        self.finish_node();
    }

    /// Terminating `;`, skipping junk up to the next statement boundary.
    fn finish_stmt(&mut self) {
        if self.expect_semicolon() {
            return;
        }
        if self.currently_is_one_of(STMT_RECOVERY)
            || self.currently_is_one_of(EXPR_FIRST)
            || self.should_stop()
        {
            return;
        }
        self.start_node(SyntaxKind::Error);
        while !self.currently_is_one_of(STMT_RECOVERY) && !self.should_stop() {
            self.bump();
        }
        self.finish_node();
        self.eat_token(SyntaxKind::Semicolon);
    }
}
