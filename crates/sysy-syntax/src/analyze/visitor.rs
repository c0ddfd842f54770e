//! AST Visitor pattern.
//!
//! # Usage
//!
//! Implement `Visitor` for your struct. Override `visit_*` methods to add logic.
//! Call `walk_*` within your override to continue recursion (or omit it to stop).
//!
//! ```ignore
//! impl Visitor for MyPass {
//!     fn visit_while_stmt(&mut self, stmt: &WhileStmt) {
//!         self.depth += 1;
//!         walk_while_stmt(self, stmt);
//!         self.depth -= 1;
//!     }
//! }
//! ```

use crate::parser::ast::{
    AssignStmt, Block, BlockItem, BreakStmt, CallExp, ConstDecl, ConstDef, ConstInitVal,
    ContinueStmt, Expr, FuncDef, FuncFParam, IfStmt, InitVal, Item, Lval, Number, ReturnStmt,
    SourceFile, Stmt, VarDecl, VarDef, WhileStmt,
};

pub trait Visitor: Sized {
    fn visit_source_file(&mut self, file: &SourceFile) {
        walk_source_file(self, file);
    }

    fn visit_func_def(&mut self, def: &FuncDef) {
        walk_func_def(self, def);
    }

    fn visit_func_fparam(&mut self, param: &FuncFParam) {
        walk_func_fparam(self, param);
    }

    fn visit_var_decl(&mut self, decl: &VarDecl) {
        walk_var_decl(self, decl);
    }

    fn visit_var_def(&mut self, def: &VarDef) {
        walk_var_def(self, def);
    }

    fn visit_const_decl(&mut self, decl: &ConstDecl) {
        walk_const_decl(self, decl);
    }

    fn visit_const_def(&mut self, def: &ConstDef) {
        walk_const_def(self, def);
    }

    fn visit_init_val(&mut self, init: &InitVal) {
        walk_init_val(self, init);
    }

    fn visit_const_init_val(&mut self, init: &ConstInitVal) {
        walk_const_init_val(self, init);
    }

    fn visit_block(&mut self, block: &Block) {
        walk_block(self, block);
    }

    fn visit_stmt(&mut self, stmt: &Stmt) {
        walk_stmt(self, stmt);
    }

    fn visit_assign_stmt(&mut self, stmt: &AssignStmt) {
        walk_assign_stmt(self, stmt);
    }

    fn visit_if_stmt(&mut self, stmt: &IfStmt) {
        walk_if_stmt(self, stmt);
    }

    fn visit_while_stmt(&mut self, stmt: &WhileStmt) {
        walk_while_stmt(self, stmt);
    }

    fn visit_break_stmt(&mut self, _stmt: &BreakStmt) {
        // Leaf node
    }

    fn visit_continue_stmt(&mut self, _stmt: &ContinueStmt) {
        // Leaf node
    }

    fn visit_return_stmt(&mut self, stmt: &ReturnStmt) {
        walk_return_stmt(self, stmt);
    }

    fn visit_expr(&mut self, expr: &Expr) {
        walk_expr(self, expr);
    }

    fn visit_call_exp(&mut self, call: &CallExp) {
        walk_call_exp(self, call);
    }

    fn visit_lval(&mut self, lval: &Lval) {
        walk_lval(self, lval);
    }

    fn visit_number(&mut self, _number: &Number) {
        // Leaf node
    }
}

pub fn walk_source_file<V: Visitor>(visitor: &mut V, file: &SourceFile) {
    for item in file.items() {
        match item {
            Item::FuncDef(def) => visitor.visit_func_def(&def),
            Item::VarDecl(decl) => visitor.visit_var_decl(&decl),
            Item::ConstDecl(decl) => visitor.visit_const_decl(&decl),
        }
    }
}

pub fn walk_func_def<V: Visitor>(visitor: &mut V, def: &FuncDef) {
    for param in def.params() {
        visitor.visit_func_fparam(&param);
    }
    if let Some(body) = def.body() {
        visitor.visit_block(&body);
    }
}

pub fn walk_func_fparam<V: Visitor>(visitor: &mut V, param: &FuncFParam) {
    for dim in param.dims() {
        visitor.visit_expr(&dim);
    }
}

pub fn walk_var_decl<V: Visitor>(visitor: &mut V, decl: &VarDecl) {
    for def in decl.defs() {
        visitor.visit_var_def(&def);
    }
}

pub fn walk_var_def<V: Visitor>(visitor: &mut V, def: &VarDef) {
    for dim in def.dims() {
        visitor.visit_expr(&dim);
    }
    if let Some(init) = def.init() {
        visitor.visit_init_val(&init);
    }
}

pub fn walk_const_decl<V: Visitor>(visitor: &mut V, decl: &ConstDecl) {
    for def in decl.defs() {
        visitor.visit_const_def(&def);
    }
}

pub fn walk_const_def<V: Visitor>(visitor: &mut V, def: &ConstDef) {
    for dim in def.dims() {
        visitor.visit_expr(&dim);
    }
    if let Some(init) = def.init() {
        visitor.visit_const_init_val(&init);
    }
}

pub fn walk_init_val<V: Visitor>(visitor: &mut V, init: &InitVal) {
    if let Some(expr) = init.expr() {
        visitor.visit_expr(&expr);
    }
    for element in init.elements() {
        visitor.visit_init_val(&element);
    }
}

pub fn walk_const_init_val<V: Visitor>(visitor: &mut V, init: &ConstInitVal) {
    if let Some(expr) = init.expr() {
        visitor.visit_expr(&expr);
    }
    for element in init.elements() {
        visitor.visit_const_init_val(&element);
    }
}

pub fn walk_block<V: Visitor>(visitor: &mut V, block: &Block) {
    for item in block.items() {
        match item {
            BlockItem::VarDecl(decl) => visitor.visit_var_decl(&decl),
            BlockItem::ConstDecl(decl) => visitor.visit_const_decl(&decl),
            BlockItem::Stmt(stmt) => visitor.visit_stmt(&stmt),
        }
    }
}

pub fn walk_stmt<V: Visitor>(visitor: &mut V, stmt: &Stmt) {
    match stmt {
        Stmt::Assign(s) => visitor.visit_assign_stmt(s),
        Stmt::Exp(s) => {
            if let Some(expr) = s.expr() {
                visitor.visit_expr(&expr);
            }
        }
        Stmt::Block(b) => visitor.visit_block(b),
        Stmt::If(s) => visitor.visit_if_stmt(s),
        Stmt::While(s) => visitor.visit_while_stmt(s),
        Stmt::Break(s) => visitor.visit_break_stmt(s),
        Stmt::Continue(s) => visitor.visit_continue_stmt(s),
        Stmt::Return(s) => visitor.visit_return_stmt(s),
    }
}

pub fn walk_assign_stmt<V: Visitor>(visitor: &mut V, stmt: &AssignStmt) {
    if let Some(target) = stmt.target() {
        visitor.visit_expr(&target);
    }
    if let Some(value) = stmt.value() {
        visitor.visit_expr(&value);
    }
}

pub fn walk_if_stmt<V: Visitor>(visitor: &mut V, stmt: &IfStmt) {
    if let Some(cond) = stmt.condition() {
        visitor.visit_expr(&cond);
    }
    if let Some(then) = stmt.then_branch() {
        visitor.visit_stmt(&then);
    }
    if let Some(otherwise) = stmt.else_branch().and_then(|e| e.stmt()) {
        visitor.visit_stmt(&otherwise);
    }
}

pub fn walk_while_stmt<V: Visitor>(visitor: &mut V, stmt: &WhileStmt) {
    if let Some(cond) = stmt.condition() {
        visitor.visit_expr(&cond);
    }
    if let Some(body) = stmt.body() {
        visitor.visit_stmt(&body);
    }
}

pub fn walk_return_stmt<V: Visitor>(visitor: &mut V, stmt: &ReturnStmt) {
    if let Some(value) = stmt.value() {
        visitor.visit_expr(&value);
    }
}

/// Binary chains are walked without recursing down their left spine: nested left
/// operands that are themselves `BinaryExp`s are not passed to `visit_expr`, only the
/// leftmost operand and each right operand are, in source order.
pub fn walk_expr<V: Visitor>(visitor: &mut V, expr: &Expr) {
    match expr {
        Expr::Binary(b) => {
            let mut spine = vec![b.clone()];
            let mut leftmost = b.lhs();
            while let Some(Expr::Binary(inner)) = leftmost {
                leftmost = inner.lhs();
                spine.push(inner);
            }
            if let Some(lhs) = leftmost {
                visitor.visit_expr(&lhs);
            }
            for node in spine.iter().rev() {
                if let Some(rhs) = node.rhs() {
                    visitor.visit_expr(&rhs);
                }
            }
        }
        Expr::Unary(u) => {
            if let Some(operand) = u.operand() {
                visitor.visit_expr(&operand);
            }
        }
        Expr::Call(c) => visitor.visit_call_exp(c),
        Expr::Paren(p) => {
            if let Some(inner) = p.inner() {
                visitor.visit_expr(&inner);
            }
        }
        Expr::Lval(l) => visitor.visit_lval(l),
        Expr::Number(n) => visitor.visit_number(n),
    }
}

pub fn walk_call_exp<V: Visitor>(visitor: &mut V, call: &CallExp) {
    let Some(args) = call.arg_list() else {
        return;
    };
    for arg in args.args() {
        visitor.visit_expr(&arg);
    }
}

pub fn walk_lval<V: Visitor>(visitor: &mut V, lval: &Lval) {
    for index in lval.indices() {
        visitor.visit_expr(&index);
    }
}
