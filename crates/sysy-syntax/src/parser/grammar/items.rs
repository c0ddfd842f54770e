use rowan::TextRange;

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::{DECL_FIRST, DECL_RECOVERY, ITEM_RECOVERY, TYPES};

impl Parser<'_> {
    pub fn parse_root(&mut self) {
        self.report_unterminated_comments();
        self.start_node(SyntaxKind::SourceFile);

        while !self.should_stop() {
            if self.currently_is_one_of(DECL_FIRST) {
                self.parse_item();
                continue;
            }
            let found = self.found();
            self.error_recover(DiagnosticKind::ExpectedItem, &found, ITEM_RECOVERY);
        }

        self.eat_trivia();
        self.finish_node();
    }

    /// Comments are trivia, so the parser never meets them; check the token stream up front.
    fn report_unterminated_comments(&mut self) {
        let unterminated: Vec<TextRange> = self
            .tokens
            .iter()
            .filter(|t| t.kind == SyntaxKind::UnterminatedComment)
            .map(|t| t.span)
            .collect();
        for span in unterminated {
            self.diagnostics
                .report(DiagnosticKind::UnterminatedComment, TextRange::empty(span.end()))
                .message("expected `*/`")
                .related_to("comment starts here", TextRange::at(span.start(), 2.into()))
                .fix("close the comment", "*/")
                .emit();
        }
    }

    /// `FuncDef` | `VarDecl` | `ConstDecl`.
    /// LL(3): `Type Ident (` starts a function definition.
    fn parse_item(&mut self) {
        if self.currently_is(SyntaxKind::KwConst) {
            self.parse_const_decl();
            return;
        }
        if self.peek_nth(1) == Some(SyntaxKind::Ident)
            && self.peek_nth(2) == Some(SyntaxKind::ParenOpen)
        {
            self.parse_func_def();
            return;
        }
        self.parse_var_decl();
    }

    pub(crate) fn parse_type(&mut self) -> bool {
        if self.currently_is_one_of(TYPES) {
            self.start_node(SyntaxKind::Type);
            self.bump();
            self.finish_node();
            return true;
        }
        let found = self.found();
        self.error_msg(DiagnosticKind::ExpectedType, found);
        false
    }

    pub(crate) fn expect_ident(&mut self) -> bool {
        if self.eat_token(SyntaxKind::Ident) {
            return true;
        }
        let found = self.found();
        self.error_msg(DiagnosticKind::ExpectedIdentifier, found);
        false
    }

    /// `Type Ident '(' FuncFParams? ')' Block`
    fn parse_func_def(&mut self) {
        self.start_node(SyntaxKind::FuncDef);
        self.parse_type();
        self.expect_ident();

        self.assert_current(SyntaxKind::ParenOpen);
        self.push_delimiter(SyntaxKind::ParenOpen);
        self.bump();
        if self.currently_is_one_of(TYPES) || self.currently_is(SyntaxKind::Ident) {
            self.parse_func_fparams();
        }
        self.close_delimiter(SyntaxKind::ParenClose, "`)`");

        if self.currently_is(SyntaxKind::BraceOpen) {
            self.parse_block();
        } else {
            let found = self.found();
            self.error_msg(
                DiagnosticKind::UnexpectedToken,
                format!("expected function body, found {}", found),
            );
        }
        self.finish_node();
    }

    fn parse_func_fparams(&mut self) {
        self.start_node(SyntaxKind::FuncFParams);
        loop {
            self.parse_func_fparam();
            if !self.eat_token(SyntaxKind::Comma) {
                break;
            }
        }
        self.finish_node();
    }

    /// `Type Ident ('[' ']' ('[' Exp ']')*)?`
    fn parse_func_fparam(&mut self) {
        self.start_node(SyntaxKind::FuncFParam);
        self.parse_type();
        self.expect_ident();
        if self.currently_is(SyntaxKind::BracketOpen) {
            self.push_delimiter(SyntaxKind::BracketOpen);
            self.bump();
            self.close_delimiter(SyntaxKind::BracketClose, "`]`");
            while self.currently_is(SyntaxKind::BracketOpen) {
                self.parse_dim();
            }
        }
        self.finish_node();
    }

    /// `Type VarDef (',' VarDef)* ';'`
    pub(crate) fn parse_var_decl(&mut self) {
        self.start_node(SyntaxKind::VarDecl);
        self.parse_type();
        self.parse_def_list(SyntaxKind::VarDef);
        self.finish_decl();
        self.finish_node();
    }

    /// `'const' Type ConstDef (',' ConstDef)* ';'`
    pub(crate) fn parse_const_decl(&mut self) {
        self.start_node(SyntaxKind::ConstDecl);
        self.assert_current(SyntaxKind::KwConst);
        self.bump();
        self.parse_type();
        self.parse_def_list(SyntaxKind::ConstDef);
        self.finish_decl();
        self.finish_node();
    }

    fn parse_def_list(&mut self, kind: SyntaxKind) {
        loop {
            self.parse_def(kind);
            if !self.eat_token(SyntaxKind::Comma) {
                break;
            }
        }
    }

    /// Terminating `;`. Junk before it is skipped so the declaration still closes cleanly.
    fn finish_decl(&mut self) {
        if self.expect_semicolon() {
            return;
        }
        if self.currently_is_one_of(DECL_RECOVERY) || self.should_stop() {
            return;
        }
        self.start_node(SyntaxKind::Error);
        while !self.currently_is_one_of(DECL_RECOVERY) && !self.should_stop() {
            self.bump();
        }
        self.finish_node();
        self.eat_token(SyntaxKind::Semicolon);
    }

    /// `VarDef`: `Ident ('[' Exp ']')* ('=' InitVal)?`
    /// `ConstDef`: `Ident ('[' Exp ']')* '=' ConstInitVal`
    fn parse_def(&mut self, kind: SyntaxKind) {
        self.start_node(kind);
        self.expect_ident();
        while self.currently_is(SyntaxKind::BracketOpen) {
            self.parse_dim();
        }

        let init_kind = if kind == SyntaxKind::ConstDef {
            SyntaxKind::ConstInitVal
        } else {
            SyntaxKind::InitVal
        };
        if self.eat_token(SyntaxKind::Assign) {
            self.parse_init_val(init_kind);
        } else if kind == SyntaxKind::ConstDef {
            self.expect(SyntaxKind::Assign, "`=` and an initializer");
        }
        self.finish_node();
    }

    /// `'[' Exp ']'`, the expression stays a direct child of the enclosing node.
    pub(crate) fn parse_dim(&mut self) {
        self.assert_current(SyntaxKind::BracketOpen);
        self.push_delimiter(SyntaxKind::BracketOpen);
        self.bump();
        self.parse_expr();
        self.close_delimiter(SyntaxKind::BracketClose, "`]`");
    }

    /// `Exp | '{' (InitVal (',' InitVal)*)? '}'`
    fn parse_init_val(&mut self, kind: SyntaxKind) {
        if !self.enter_recursion() {
            return;
        }
        self.start_node(kind);
        if self.currently_is(SyntaxKind::BraceOpen) {
            self.push_delimiter(SyntaxKind::BraceOpen);
            self.bump();
            if !self.currently_is(SyntaxKind::BraceClose) && !self.should_stop() {
                loop {
                    self.parse_init_val(kind);
                    if !self.eat_token(SyntaxKind::Comma) {
                        break;
                    }
                }
            }
            self.close_delimiter(SyntaxKind::BraceClose, "`}`");
        } else {
            self.parse_expr();
        }
        self.finish_node();
        self.exit_recursion();
    }
}
