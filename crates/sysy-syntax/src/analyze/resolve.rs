//! Name resolution: builds scopes and symbols, and binds every identifier use.

use rowan::TextRange;

use crate::diagnostics::DiagnosticKind;
use crate::parser::SyntaxToken;
use crate::parser::ast::{
    AssignStmt, BaseType, Block, CallExp, ConstDecl, Expr, FuncDef, FuncFParam, Lval, VarDecl,
};

use super::builtins::builtin;
use super::model::{
    Access, ParamType, Resolution, ScopeId, ScopeKind, SemanticModel, SymbolId, SymbolKind,
    SymbolType,
};
use super::visitor::{
    Visitor, walk_block, walk_call_exp, walk_const_def, walk_expr, walk_func_fparam, walk_lval,
    walk_var_def,
};

pub(super) struct Resolver<'m> {
    model: &'m mut SemanticModel,
    scope: ScopeId,
}

impl<'m> Resolver<'m> {
    pub(super) fn new(model: &'m mut SemanticModel) -> Self {
        Self {
            model,
            scope: ScopeId::GLOBAL,
        }
    }

    fn enter(&mut self, kind: ScopeKind, range: TextRange, owner: Option<SymbolId>) {
        self.scope = self.model.add_scope(self.scope, kind, range, owner);
    }

    fn exit(&mut self) {
        self.scope = self
            .model
            .scope(self.scope)
            .parent()
            .expect("exit called on the global scope");
    }

    fn declare(
        &mut self,
        name: &SyntaxToken,
        kind: SymbolKind,
        decl_range: TextRange,
        ty: SymbolType,
    ) -> SymbolId {
        let (id, first) = self.model.add_symbol(
            name.text(),
            kind,
            name.text_range(),
            decl_range,
            self.scope,
            ty,
        );
        if let Some(first) = first {
            let first_range = self.model.symbol(first).name_range();
            self.model
                .diagnostics
                .report(DiagnosticKind::DuplicateDefinition, name.text_range())
                .message(name.text())
                .related_to("first defined here", first_range)
                .emit();
        }
        id
    }

    fn check_not_void(&mut self, name: &SyntaxToken, base: Option<BaseType>) {
        if base == Some(BaseType::Void) {
            self.model
                .diagnostics
                .report(DiagnosticKind::VoidVariable, name.text_range())
                .message(name.text())
                .emit();
        }
    }

    fn resolve(&self, name: &SyntaxToken) -> Resolution {
        let offset = name.text_range().start();
        if let Some(id) = self.model.lookup(self.scope, name.text(), offset) {
            return Resolution::Symbol(id);
        }
        match builtin(name.text()) {
            Some(b) => Resolution::Builtin(b),
            None => Resolution::Unresolved,
        }
    }

    fn report_name(&mut self, kind: DiagnosticKind, name: &SyntaxToken) {
        self.model
            .diagnostics
            .report(kind, name.text_range())
            .message(name.text())
            .emit();
    }

    fn resolve_lval(&mut self, lval: &Lval, access: Access) {
        if let Some(name) = lval.name() {
            let resolution = self.resolve(&name);
            match resolution {
                Resolution::Unresolved => self.report_name(DiagnosticKind::UndefinedName, &name),
                Resolution::Builtin(_) => self.report_name(DiagnosticKind::NotAVariable, &name),
                Resolution::Symbol(id) => match self.model.symbol(id).kind() {
                    SymbolKind::Function => self.report_name(DiagnosticKind::NotAVariable, &name),
                    SymbolKind::Constant if access == Access::Write => {
                        self.report_name(DiagnosticKind::AssignToConstant, &name)
                    }
                    _ => {}
                },
            }
            self.model
                .add_reference(name.text_range(), access, resolution);
        }
        walk_lval(self, lval);
    }

    fn check_arity(&mut self, name: &SyntaxToken, expected: usize, found: usize) {
        if expected == found {
            return;
        }
        let plural = if expected == 1 { "" } else { "s" };
        self.model
            .diagnostics
            .report(DiagnosticKind::ArgumentCountMismatch, name.text_range())
            .message(format!(
                "`{}` expects {expected} argument{plural}, found {found}",
                name.text()
            ))
            .emit();
    }
}

fn param_type(param: &FuncFParam) -> ParamType {
    ParamType::array(param.base_type().unwrap_or(BaseType::Int), param.rank())
}

/// Scope of a function: from its name to the end of the body.
fn function_scope_range(def: &FuncDef) -> TextRange {
    let range = def.text_range();
    let start = def.name().map_or(range.start(), |n| n.text_range().end());
    TextRange::new(start, range.end())
}

impl Visitor for Resolver<'_> {
    fn visit_func_def(&mut self, def: &FuncDef) {
        let params: Vec<ParamType> = def.params().map(|p| param_type(&p)).collect();
        let ty = SymbolType::function(def.return_type(), params);
        let id = def
            .name()
            .map(|name| self.declare(&name, SymbolKind::Function, def.text_range(), ty));

        self.enter(ScopeKind::Function, function_scope_range(def), id);
        for param in def.params() {
            self.visit_func_fparam(&param);
        }
        // The outermost block shares the parameter scope
        if let Some(body) = def.body() {
            walk_block(self, &body);
        }
        self.exit();
    }

    fn visit_func_fparam(&mut self, param: &FuncFParam) {
        walk_func_fparam(self, param);
        let Some(name) = param.name() else {
            return;
        };
        let base = param.base_type();
        self.check_not_void(&name, base);
        let ty = SymbolType::value(base, param.rank());
        self.declare(&name, SymbolKind::Parameter, param.text_range(), ty);
    }

    fn visit_var_decl(&mut self, decl: &VarDecl) {
        let base = decl.base_type();
        for def in decl.defs() {
            if let Some(name) = def.name() {
                self.check_not_void(&name, base);
                let ty = SymbolType::value(base, def.dims().count());
                self.declare(&name, SymbolKind::Variable, decl.text_range(), ty);
            }
            walk_var_def(self, &def);
        }
    }

    fn visit_const_decl(&mut self, decl: &ConstDecl) {
        let base = decl.base_type();
        for def in decl.defs() {
            if let Some(name) = def.name() {
                self.check_not_void(&name, base);
                let ty = SymbolType::value(base, def.dims().count());
                self.declare(&name, SymbolKind::Constant, decl.text_range(), ty);
            }
            walk_const_def(self, &def);
        }
    }

    fn visit_block(&mut self, block: &Block) {
        self.enter(ScopeKind::Block, block.text_range(), None);
        walk_block(self, block);
        self.exit();
    }

    fn visit_assign_stmt(&mut self, stmt: &AssignStmt) {
        match stmt.target() {
            Some(Expr::Lval(lval)) => self.resolve_lval(&lval, Access::Write),
            Some(other) => walk_expr(self, &other),
            None => {}
        }
        if let Some(value) = stmt.value() {
            self.visit_expr(&value);
        }
    }

    fn visit_call_exp(&mut self, call: &CallExp) {
        if let Some(name) = call.name() {
            let resolution = self.resolve(&name);
            let found = call.arg_count();
            match resolution {
                Resolution::Unresolved => self.report_name(DiagnosticKind::UndefinedName, &name),
                Resolution::Builtin(b) => self.check_arity(&name, b.params.len(), found),
                Resolution::Symbol(id) => {
                    let expected = self.model.symbol(id).ty().params.as_ref().map(Vec::len);
                    match expected {
                        Some(expected) => self.check_arity(&name, expected, found),
                        None => self.report_name(DiagnosticKind::NotAFunction, &name),
                    }
                }
            }
            self.model
                .add_reference(name.text_range(), Access::Call, resolution);
        }
        walk_call_exp(self, call);
    }

    fn visit_lval(&mut self, lval: &Lval) {
        self.resolve_lval(lval, Access::Read);
    }
}
