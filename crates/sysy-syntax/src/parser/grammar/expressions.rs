use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::{EXPR_RECOVERY, NUMBERS, UNARY_OPS};

/// Left and right binding power of a binary operator. All levels are left-associative.
fn infix_binding_power(kind: SyntaxKind) -> Option<(u8, u8)> {
    let bp = match kind {
        SyntaxKind::OrOr => (1, 2),
        SyntaxKind::AndAnd => (3, 4),
        SyntaxKind::EqEq | SyntaxKind::NotEq => (5, 6),
        SyntaxKind::Lt | SyntaxKind::Gt | SyntaxKind::LtEq | SyntaxKind::GtEq => (7, 8),
        SyntaxKind::Plus | SyntaxKind::Minus => (9, 10),
        SyntaxKind::Star | SyntaxKind::Slash | SyntaxKind::Percent => (11, 12),
        _ => return None,
    };
    Some(bp)
}

impl Parser<'_> {
    /// Parses an expression and returns the kind of its outermost node,
    /// or `None` when no expression could be parsed.
    pub(crate) fn parse_expr(&mut self) -> Option<SyntaxKind> {
        self.parse_expr_bp(0)
    }

    fn parse_expr_bp(&mut self, min_bp: u8) -> Option<SyntaxKind> {
        if !self.enter_recursion() {
            return None;
        }
        let checkpoint = self.checkpoint();
        let mut result = self.parse_unary();
        // Every `BinaryExp` wrapped around the checkpoint is one more level of tree depth
        let mut levels = 0;

        if result.is_some() {
            loop {
                if self.should_stop() {
                    break;
                }
                let Some((left_bp, right_bp)) = infix_binding_power(self.current()) else {
                    break;
                };
                if left_bp < min_bp {
                    break;
                }
                if !self.enter_recursion() {
                    break;
                }
                levels += 1;
                self.start_node_at(checkpoint, SyntaxKind::BinaryExp);
                self.bump();
                self.parse_expr_bp(right_bp);
                self.finish_node();
                result = Some(SyntaxKind::BinaryExp);
            }
        }

        for _ in 0..levels {
            self.exit_recursion();
        }
        self.exit_recursion();
        result
    }

    /// `('+' | '-' | '!') UnaryExp` | primary
    fn parse_unary(&mut self) -> Option<SyntaxKind> {
        if !self.currently_is_one_of(UNARY_OPS) {
            return self.parse_primary();
        }
        if !self.enter_recursion() {
            return None;
        }
        self.start_node(SyntaxKind::UnaryExp);
        self.bump();
        self.parse_unary();
        self.finish_node();
        self.exit_recursion();
        Some(SyntaxKind::UnaryExp)
    }

    fn parse_primary(&mut self) -> Option<SyntaxKind> {
        if self.currently_is_one_of(NUMBERS) {
            self.parse_number();
            return Some(SyntaxKind::Number);
        }
        if self.currently_is(SyntaxKind::Ident) {
            if self.next_is(SyntaxKind::ParenOpen) {
                self.parse_call();
                return Some(SyntaxKind::CallExp);
            }
            self.parse_lval();
            return Some(SyntaxKind::Lval);
        }
        if self.currently_is(SyntaxKind::ParenOpen) {
            self.parse_paren();
            return Some(SyntaxKind::ParenExp);
        }

        let found = self.found();
        if self.currently_is_one_of(EXPR_RECOVERY) || self.should_stop() {
            self.error_msg(DiagnosticKind::ExpectedExpression, found);
        } else {
            self.error_and_bump_msg(DiagnosticKind::ExpectedExpression, found);
        }
        None
    }

    /// `Decimal | Octal | Hexadecimal`; malformed literals are kept and reported.
    fn parse_number(&mut self) {
        self.start_node(SyntaxKind::Number);
        if self.currently_is(SyntaxKind::BadNumber) {
            let range = self.current_span();
            let text = self.current_text();
            self.error_at(DiagnosticKind::InvalidNumber, range, text);
        }
        self.bump();
        self.finish_node();
    }

    /// `Ident ('[' Exp ']')*`
    fn parse_lval(&mut self) {
        self.start_node(SyntaxKind::Lval);
        self.bump();
        while self.currently_is(SyntaxKind::BracketOpen) {
            self.parse_dim();
        }
        self.finish_node();
    }

    /// `Ident '(' FuncRParams? ')'`
    fn parse_call(&mut self) {
        self.start_node(SyntaxKind::CallExp);
        self.bump();
        self.assert_current(SyntaxKind::ParenOpen);
        self.push_delimiter(SyntaxKind::ParenOpen);
        self.bump();

        if !self.currently_is(SyntaxKind::ParenClose) && !self.should_stop() {
            self.start_node(SyntaxKind::FuncRParams);
            loop {
                self.parse_expr();
                if !self.eat_token(SyntaxKind::Comma) {
                    break;
                }
            }
            self.finish_node();
        }

        self.close_delimiter(SyntaxKind::ParenClose, "`)`");
        self.finish_node();
    }

    /// `'(' Exp ')'`
    fn parse_paren(&mut self) {
        self.start_node(SyntaxKind::ParenExp);
        self.push_delimiter(SyntaxKind::ParenOpen);
        self.bump();
        self.parse_expr();
        self.close_delimiter(SyntaxKind::ParenClose, "`)`");
        self.finish_node();
    }
}
