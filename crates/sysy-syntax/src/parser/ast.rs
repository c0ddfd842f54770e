//! Typed AST wrappers over CST nodes.
//!
//! Each struct wraps a `SyntaxNode` and provides typed accessors.
//! Cast is infallible for correct `SyntaxKind` - validation happens elsewhere.

use rowan::TextRange;

use super::cst::{SyntaxKind, SyntaxNode, SyntaxToken};

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl $name {
            pub fn cast(node: SyntaxNode) -> Option<Self> {
                (node.kind() == SyntaxKind::$kind).then(|| Self(node))
            }

            pub fn as_cst(&self) -> &SyntaxNode {
                &self.0
            }

            pub fn text_range(&self) -> TextRange {
                self.0.text_range()
            }
        }
    };
}

ast_node!(SourceFile, SourceFile);
ast_node!(FuncDef, FuncDef);
ast_node!(FuncFParams, FuncFParams);
ast_node!(FuncFParam, FuncFParam);
ast_node!(VarDecl, VarDecl);
ast_node!(ConstDecl, ConstDecl);
ast_node!(VarDef, VarDef);
ast_node!(ConstDef, ConstDef);
ast_node!(InitVal, InitVal);
ast_node!(ConstInitVal, ConstInitVal);
ast_node!(Type, Type);
ast_node!(Block, Block);
ast_node!(AssignStmt, AssignStmt);
ast_node!(ExpStmt, ExpStmt);
ast_node!(IfStmt, IfStmt);
ast_node!(ElseBranch, ElseBranch);
ast_node!(WhileStmt, WhileStmt);
ast_node!(BreakStmt, BreakStmt);
ast_node!(ContinueStmt, ContinueStmt);
ast_node!(ReturnStmt, ReturnStmt);
ast_node!(BinaryExp, BinaryExp);
ast_node!(UnaryExp, UnaryExp);
ast_node!(CallExp, CallExp);
ast_node!(FuncRParams, FuncRParams);
ast_node!(ParenExp, ParenExp);
ast_node!(Lval, Lval);
ast_node!(Number, Number);

fn token(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|it| it.into_token())
        .find(|t| t.kind() == kind)
}

fn ident(node: &SyntaxNode) -> Option<SyntaxToken> {
    token(node, SyntaxKind::Ident)
}

/// `int` or `void`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseType {
    Int,
    Void,
}

impl BaseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BaseType::Int => "int",
            BaseType::Void => "void",
        }
    }
}

impl std::fmt::Display for BaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level item.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Item {
    FuncDef(FuncDef),
    VarDecl(VarDecl),
    ConstDecl(ConstDecl),
}

impl Item {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::FuncDef => FuncDef::cast(node).map(Item::FuncDef),
            SyntaxKind::VarDecl => VarDecl::cast(node).map(Item::VarDecl),
            SyntaxKind::ConstDecl => ConstDecl::cast(node).map(Item::ConstDecl),
            _ => None,
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            Item::FuncDef(n) => n.as_cst(),
            Item::VarDecl(n) => n.as_cst(),
            Item::ConstDecl(n) => n.as_cst(),
        }
    }
}

/// Entry of a block: a declaration or a statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BlockItem {
    VarDecl(VarDecl),
    ConstDecl(ConstDecl),
    Stmt(Stmt),
}

impl BlockItem {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::VarDecl => VarDecl::cast(node).map(BlockItem::VarDecl),
            SyntaxKind::ConstDecl => ConstDecl::cast(node).map(BlockItem::ConstDecl),
            _ => Stmt::cast(node).map(BlockItem::Stmt),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Stmt {
    Assign(AssignStmt),
    Exp(ExpStmt),
    Block(Block),
    If(IfStmt),
    While(WhileStmt),
    Break(BreakStmt),
    Continue(ContinueStmt),
    Return(ReturnStmt),
}

impl Stmt {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::AssignStmt => AssignStmt::cast(node).map(Stmt::Assign),
            SyntaxKind::ExpStmt => ExpStmt::cast(node).map(Stmt::Exp),
            SyntaxKind::Block => Block::cast(node).map(Stmt::Block),
            SyntaxKind::IfStmt => IfStmt::cast(node).map(Stmt::If),
            SyntaxKind::WhileStmt => WhileStmt::cast(node).map(Stmt::While),
            SyntaxKind::BreakStmt => BreakStmt::cast(node).map(Stmt::Break),
            SyntaxKind::ContinueStmt => ContinueStmt::cast(node).map(Stmt::Continue),
            SyntaxKind::ReturnStmt => ReturnStmt::cast(node).map(Stmt::Return),
            _ => None,
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            Stmt::Assign(n) => n.as_cst(),
            Stmt::Exp(n) => n.as_cst(),
            Stmt::Block(n) => n.as_cst(),
            Stmt::If(n) => n.as_cst(),
            Stmt::While(n) => n.as_cst(),
            Stmt::Break(n) => n.as_cst(),
            Stmt::Continue(n) => n.as_cst(),
            Stmt::Return(n) => n.as_cst(),
        }
    }
}

/// Expression: any alternative of the `Exp` rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Binary(BinaryExp),
    Unary(UnaryExp),
    Call(CallExp),
    Paren(ParenExp),
    Lval(Lval),
    Number(Number),
}

impl Expr {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::BinaryExp => BinaryExp::cast(node).map(Expr::Binary),
            SyntaxKind::UnaryExp => UnaryExp::cast(node).map(Expr::Unary),
            SyntaxKind::CallExp => CallExp::cast(node).map(Expr::Call),
            SyntaxKind::ParenExp => ParenExp::cast(node).map(Expr::Paren),
            SyntaxKind::Lval => Lval::cast(node).map(Expr::Lval),
            SyntaxKind::Number => Number::cast(node).map(Expr::Number),
            _ => None,
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            Expr::Binary(n) => n.as_cst(),
            Expr::Unary(n) => n.as_cst(),
            Expr::Call(n) => n.as_cst(),
            Expr::Paren(n) => n.as_cst(),
            Expr::Lval(n) => n.as_cst(),
            Expr::Number(n) => n.as_cst(),
        }
    }

    pub fn text_range(&self) -> TextRange {
        self.as_cst().text_range()
    }
}

impl SourceFile {
    pub fn items(&self) -> impl Iterator<Item = Item> + '_ {
        self.0.children().filter_map(Item::cast)
    }

    pub fn func_defs(&self) -> impl Iterator<Item = FuncDef> + '_ {
        self.0.children().filter_map(FuncDef::cast)
    }
}

impl Type {
    pub fn token(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .find(|t| matches!(t.kind(), SyntaxKind::KwInt | SyntaxKind::KwVoid))
    }

    pub fn base(&self) -> Option<BaseType> {
        match self.token()?.kind() {
            SyntaxKind::KwInt => Some(BaseType::Int),
            SyntaxKind::KwVoid => Some(BaseType::Void),
            _ => None,
        }
    }
}

impl FuncDef {
    pub fn ty(&self) -> Option<Type> {
        self.0.children().find_map(Type::cast)
    }

    pub fn return_type(&self) -> Option<BaseType> {
        self.ty()?.base()
    }

    pub fn name(&self) -> Option<SyntaxToken> {
        ident(&self.0)
    }

    pub fn param_list(&self) -> Option<FuncFParams> {
        self.0.children().find_map(FuncFParams::cast)
    }

    pub fn params(&self) -> impl Iterator<Item = FuncFParam> + use<> {
        self.param_list()
            .into_iter()
            .flat_map(|list| list.0.children().filter_map(FuncFParam::cast).collect::<Vec<_>>())
    }

    pub fn body(&self) -> Option<Block> {
        self.0.children().find_map(Block::cast)
    }

    /// Range from the start of the definition to the closing `)` of the parameter list.
    pub fn signature_range(&self) -> TextRange {
        let start = self.0.text_range().start();
        let end = token(&self.0, SyntaxKind::ParenClose)
            .map(|t| t.text_range().end())
            .or_else(|| self.param_list().map(|p| p.text_range().end()))
            .or_else(|| self.name().map(|t| t.text_range().end()))
            .unwrap_or(start);
        TextRange::new(start, end)
    }
}

impl FuncFParams {
    pub fn params(&self) -> impl Iterator<Item = FuncFParam> + '_ {
        self.0.children().filter_map(FuncFParam::cast)
    }
}

impl FuncFParam {
    pub fn ty(&self) -> Option<Type> {
        self.0.children().find_map(Type::cast)
    }

    pub fn base_type(&self) -> Option<BaseType> {
        self.ty()?.base()
    }

    pub fn name(&self) -> Option<SyntaxToken> {
        ident(&self.0)
    }

    /// `int a[]` and `int a[][3]` are array parameters.
    pub fn is_array(&self) -> bool {
        token(&self.0, SyntaxKind::BracketOpen).is_some()
    }

    /// Dimensions after the leading `[]`.
    pub fn dims(&self) -> impl Iterator<Item = Expr> + '_ {
        self.0.children().filter_map(Expr::cast)
    }

    pub fn rank(&self) -> usize {
        if self.is_array() {
            1 + self.dims().count()
        } else {
            0
        }
    }
}

impl VarDecl {
    pub fn ty(&self) -> Option<Type> {
        self.0.children().find_map(Type::cast)
    }

    pub fn base_type(&self) -> Option<BaseType> {
        self.ty()?.base()
    }

    pub fn defs(&self) -> impl Iterator<Item = VarDef> + '_ {
        self.0.children().filter_map(VarDef::cast)
    }
}

impl ConstDecl {
    pub fn ty(&self) -> Option<Type> {
        self.0.children().find_map(Type::cast)
    }

    pub fn base_type(&self) -> Option<BaseType> {
        self.ty()?.base()
    }

    pub fn defs(&self) -> impl Iterator<Item = ConstDef> + '_ {
        self.0.children().filter_map(ConstDef::cast)
    }
}

impl VarDef {
    pub fn name(&self) -> Option<SyntaxToken> {
        ident(&self.0)
    }

    pub fn dims(&self) -> impl Iterator<Item = Expr> + '_ {
        self.0.children().filter_map(Expr::cast)
    }

    pub fn init(&self) -> Option<InitVal> {
        self.0.children().find_map(InitVal::cast)
    }
}

impl ConstDef {
    pub fn name(&self) -> Option<SyntaxToken> {
        ident(&self.0)
    }

    pub fn dims(&self) -> impl Iterator<Item = Expr> + '_ {
        self.0.children().filter_map(Expr::cast)
    }

    pub fn init(&self) -> Option<ConstInitVal> {
        self.0.children().find_map(ConstInitVal::cast)
    }
}

impl InitVal {
    /// `None` for brace lists.
    pub fn expr(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }

    pub fn is_list(&self) -> bool {
        token(&self.0, SyntaxKind::BraceOpen).is_some()
    }

    pub fn elements(&self) -> impl Iterator<Item = InitVal> + '_ {
        self.0.children().filter_map(InitVal::cast)
    }
}

impl ConstInitVal {
    pub fn expr(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }

    pub fn is_list(&self) -> bool {
        token(&self.0, SyntaxKind::BraceOpen).is_some()
    }

    pub fn elements(&self) -> impl Iterator<Item = ConstInitVal> + '_ {
        self.0.children().filter_map(ConstInitVal::cast)
    }
}

impl Block {
    pub fn items(&self) -> impl Iterator<Item = BlockItem> + '_ {
        self.0.children().filter_map(BlockItem::cast)
    }
}

impl AssignStmt {
    pub fn target(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }

    pub fn value(&self) -> Option<Expr> {
        self.0.children().filter_map(Expr::cast).nth(1)
    }
}

impl ExpStmt {
    /// `None` for the empty statement `;`.
    pub fn expr(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }
}

impl IfStmt {
    pub fn condition(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }

    pub fn then_branch(&self) -> Option<Stmt> {
        self.0.children().find_map(Stmt::cast)
    }

    pub fn else_branch(&self) -> Option<ElseBranch> {
        self.0.children().find_map(ElseBranch::cast)
    }
}

impl ElseBranch {
    pub fn stmt(&self) -> Option<Stmt> {
        self.0.children().find_map(Stmt::cast)
    }
}

impl WhileStmt {
    pub fn condition(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }

    pub fn body(&self) -> Option<Stmt> {
        self.0.children().find_map(Stmt::cast)
    }
}

impl BreakStmt {
    pub fn keyword(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::KwBreak)
    }
}

impl ContinueStmt {
    pub fn keyword(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::KwContinue)
    }
}

impl ReturnStmt {
    pub fn keyword(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::KwReturn)
    }

    pub fn value(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }
}

impl BinaryExp {
    pub fn lhs(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }

    pub fn rhs(&self) -> Option<Expr> {
        self.0.children().filter_map(Expr::cast).nth(1)
    }

    pub fn op(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .find(|t| t.kind().is_operator())
    }
}

impl UnaryExp {
    pub fn op(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .find(|t| t.kind().is_operator())
    }

    pub fn operand(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }
}

impl CallExp {
    pub fn name(&self) -> Option<SyntaxToken> {
        ident(&self.0)
    }

    pub fn arg_list(&self) -> Option<FuncRParams> {
        self.0.children().find_map(FuncRParams::cast)
    }

    pub fn arg_count(&self) -> usize {
        self.arg_list().map_or(0, |args| args.args().count())
    }
}

impl FuncRParams {
    pub fn args(&self) -> impl Iterator<Item = Expr> + '_ {
        self.0.children().filter_map(Expr::cast)
    }
}

impl ParenExp {
    pub fn inner(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }
}

impl Lval {
    pub fn name(&self) -> Option<SyntaxToken> {
        ident(&self.0)
    }

    pub fn indices(&self) -> impl Iterator<Item = Expr> + '_ {
        self.0.children().filter_map(Expr::cast)
    }
}

impl Number {
    pub fn token(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .find(|t| t.kind().is_number() || t.kind() == SyntaxKind::BadNumber)
    }

    /// Numeric value of the literal; `None` for malformed or overflowing literals.
    pub fn value(&self) -> Option<i64> {
        let token = self.token()?;
        let text = token.text();
        match token.kind() {
            SyntaxKind::Decimal => text.parse().ok(),
            SyntaxKind::Octal if text.len() == 1 => Some(0),
            SyntaxKind::Octal => i64::from_str_radix(&text[1..], 8).ok(),
            SyntaxKind::Hexadecimal => i64::from_str_radix(&text[2..], 16).ok(),
            _ => None,
        }
    }
}
