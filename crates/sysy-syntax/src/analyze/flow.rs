//! Control-flow checks: loop jumps and return values.

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::parser::ast::{BaseType, BreakStmt, ContinueStmt, Expr, FuncDef, ReturnStmt, WhileStmt};

use super::visitor::{Visitor, walk_func_def, walk_while_stmt};

pub(super) struct FlowChecker<'d> {
    diagnostics: &'d mut Diagnostics,
    loop_depth: u32,
    function: Option<(String, Option<BaseType>)>,
}

impl<'d> FlowChecker<'d> {
    pub(super) fn new(diagnostics: &'d mut Diagnostics) -> Self {
        Self {
            diagnostics,
            loop_depth: 0,
            function: None,
        }
    }
}

impl Visitor for FlowChecker<'_> {
    fn visit_func_def(&mut self, def: &FuncDef) {
        let name = def.name().map_or_else(String::new, |n| n.text().to_owned());
        self.function = Some((name, def.return_type()));
        self.loop_depth = 0;
        walk_func_def(self, def);
        self.function = None;
    }

    fn visit_while_stmt(&mut self, stmt: &WhileStmt) {
        self.loop_depth += 1;
        walk_while_stmt(self, stmt);
        self.loop_depth -= 1;
    }

    fn visit_break_stmt(&mut self, stmt: &BreakStmt) {
        if self.loop_depth == 0 {
            self.diagnostics
                .report(DiagnosticKind::BreakOutsideLoop, stmt.text_range())
                .emit();
        }
    }

    fn visit_continue_stmt(&mut self, stmt: &ContinueStmt) {
        if self.loop_depth == 0 {
            self.diagnostics
                .report(DiagnosticKind::ContinueOutsideLoop, stmt.text_range())
                .emit();
        }
    }

    fn visit_return_stmt(&mut self, stmt: &ReturnStmt) {
        let Some((name, ret)) = &self.function else {
            return;
        };
        let kind = match (ret, stmt.value().is_some()) {
            (Some(BaseType::Void), true) => DiagnosticKind::ReturnValueInVoidFunction,
            (Some(BaseType::Int), false) => DiagnosticKind::MissingReturnValue,
            _ => return,
        };
        self.diagnostics
            .report(kind, stmt.text_range())
            .message(name.as_str())
            .emit();
    }

    fn visit_expr(&mut self, _expr: &Expr) {
        // Expressions hold no statements
    }
}
