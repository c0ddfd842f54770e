//! Scopes, symbols and references of one SysY source file.

use std::collections::HashSet;
use std::fmt;

use indexmap::IndexMap;
use rowan::{TextRange, TextSize};

use crate::diagnostics::Diagnostics;
use crate::parser::ast::BaseType;

use super::builtins::{Builtin, builtin};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScopeId(u32);

impl ScopeId {
    pub const GLOBAL: ScopeId = ScopeId(0);

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SymbolId(u32);

impl SymbolId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScopeKind {
    Global,
    /// Parameters and the outermost block of a function body.
    Function,
    Block,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    parent: Option<ScopeId>,
    kind: ScopeKind,
    range: TextRange,
    /// Function that owns a `Function` scope.
    owner: Option<SymbolId>,
    /// First declaration of each name, in declaration order.
    symbols: IndexMap<String, SymbolId>,
}

impl Scope {
    pub fn parent(&self) -> Option<ScopeId> {
        self.parent
    }

    pub fn kind(&self) -> ScopeKind {
        self.kind
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn owner(&self) -> Option<SymbolId> {
        self.owner
    }

    pub fn get(&self, name: &str) -> Option<SymbolId> {
        self.symbols.get(name).copied()
    }

    pub fn symbols(&self) -> impl Iterator<Item = SymbolId> + '_ {
        self.symbols.values().copied()
    }

    /// The global scope spans the whole file; other scopes hold offsets strictly inside their
    /// delimiters.
    fn covers(&self, offset: TextSize) -> bool {
        match self.kind {
            ScopeKind::Global => true,
            _ => self.range.start() < offset && offset < self.range.end(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Function,
    Variable,
    Constant,
    Parameter,
}

impl SymbolKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SymbolKind::Function => "function",
            SymbolKind::Variable => "variable",
            SymbolKind::Constant => "constant",
            SymbolKind::Parameter => "parameter",
        }
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type of a function parameter: base type plus array rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParamType {
    pub base: BaseType,
    pub rank: usize,
}

impl ParamType {
    pub const fn scalar(base: BaseType) -> Self {
        Self { base, rank: 0 }
    }

    pub const fn array(base: BaseType, rank: usize) -> Self {
        Self { base, rank }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.base, "[]".repeat(self.rank))
    }
}

/// Declared type of a symbol. `base` is `None` when the declaration has no valid type keyword.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SymbolType {
    pub base: Option<BaseType>,
    pub rank: usize,
    /// Parameter types; `Some` only for functions.
    pub params: Option<Vec<ParamType>>,
}

impl SymbolType {
    pub fn value(base: Option<BaseType>, rank: usize) -> Self {
        Self {
            base,
            rank,
            params: None,
        }
    }

    pub fn function(ret: Option<BaseType>, params: Vec<ParamType>) -> Self {
        Self {
            base: ret,
            rank: 0,
            params: Some(params),
        }
    }
}

impl fmt::Display for SymbolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.base {
            Some(base) => write!(f, "{base}")?,
            None => f.write_str("?")?,
        }
        if let Some(params) = &self.params {
            let params: Vec<String> = params.iter().map(ToString::to_string).collect();
            return write!(f, "({})", params.join(", "));
        }
        f.write_str(&"[]".repeat(self.rank))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    name: String,
    kind: SymbolKind,
    name_range: TextRange,
    decl_range: TextRange,
    scope: ScopeId,
    ty: SymbolType,
}

impl Symbol {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> SymbolKind {
        self.kind
    }

    pub fn name_range(&self) -> TextRange {
        self.name_range
    }

    /// The declaring construct: the whole declaration for variables and constants, the
    /// whole definition for functions, the parameter for parameters.
    pub fn decl_range(&self) -> TextRange {
        self.decl_range
    }

    pub fn scope(&self) -> ScopeId {
        self.scope
    }

    pub fn ty(&self) -> &SymbolType {
        &self.ty
    }

    pub fn is_function(&self) -> bool {
        self.kind == SymbolKind::Function
    }

    /// A name is usable from the end of its declaring identifier.
    pub fn is_visible_at(&self, offset: TextSize) -> bool {
        self.name_range.end() <= offset
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Access {
    Read,
    Write,
    Call,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolution {
    Symbol(SymbolId),
    Builtin(&'static Builtin),
    Unresolved,
}

/// One identifier use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    range: TextRange,
    access: Access,
    resolution: Resolution,
}

impl Reference {
    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn access(&self) -> Access {
        self.access
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn symbol(&self) -> Option<SymbolId> {
        match self.resolution {
            Resolution::Symbol(id) => Some(id),
            _ => None,
        }
    }
}

/// Result of [`analyze`](super::analyze).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticModel {
    scopes: Vec<Scope>,
    symbols: Vec<Symbol>,
    references: Vec<Reference>,
    pub(super) diagnostics: Diagnostics,
}

impl SemanticModel {
    pub(super) fn new(file_range: TextRange) -> Self {
        let global = Scope {
            parent: None,
            kind: ScopeKind::Global,
            range: file_range,
            owner: None,
            symbols: IndexMap::new(),
        };
        Self {
            scopes: vec![global],
            symbols: Vec::new(),
            references: Vec::new(),
            diagnostics: Diagnostics::new(),
        }
    }

    pub(super) fn add_scope(
        &mut self,
        parent: ScopeId,
        kind: ScopeKind,
        range: TextRange,
        owner: Option<SymbolId>,
    ) -> ScopeId {
        let id = ScopeId(self.scopes.len() as u32);
        self.scopes.push(Scope {
            parent: Some(parent),
            kind,
            range,
            owner,
            symbols: IndexMap::new(),
        });
        id
    }

    /// Records a symbol. Returns the earlier symbol of the same name in the same scope,
    /// which keeps its place in the scope table.
    pub(super) fn add_symbol(
        &mut self,
        name: &str,
        kind: SymbolKind,
        name_range: TextRange,
        decl_range: TextRange,
        scope: ScopeId,
        ty: SymbolType,
    ) -> (SymbolId, Option<SymbolId>) {
        let id = SymbolId(self.symbols.len() as u32);
        self.symbols.push(Symbol {
            name: name.to_owned(),
            kind,
            name_range,
            decl_range,
            scope,
            ty,
        });
        let table = &mut self.scopes[scope.index()].symbols;
        if let Some(&first) = table.get(name) {
            return (id, Some(first));
        }
        table.insert(name.to_owned(), id);
        (id, None)
    }

    pub(super) fn add_reference(&mut self, range: TextRange, access: Access, resolution: Resolution) {
        self.references.push(Reference {
            range,
            access,
            resolution,
        });
    }

    pub fn scopes(&self) -> &[Scope] {
        &self.scopes
    }

    pub fn scope(&self, id: ScopeId) -> &Scope {
        &self.scopes[id.index()]
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn symbol(&self, id: SymbolId) -> &Symbol {
        &self.symbols[id.index()]
    }

    pub fn symbol_ids(&self) -> impl Iterator<Item = SymbolId> + use<> {
        (0..self.symbols.len() as u32).map(SymbolId)
    }

    pub fn references(&self) -> &[Reference] {
        &self.references
    }

    /// Semantic diagnostics, ordered by position.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Innermost scope containing `offset`.
    pub fn scope_at(&self, offset: TextSize) -> ScopeId {
        // Scopes are created in source order, so the last covering scope is the innermost
        self.scopes
            .iter()
            .rposition(|scope| scope.covers(offset))
            .map_or(ScopeId::GLOBAL, |i| ScopeId(i as u32))
    }

    pub fn scope_chain(&self, scope: ScopeId) -> impl Iterator<Item = ScopeId> + '_ {
        std::iter::successors(Some(scope), |id| self.scope(*id).parent)
    }

    /// Whether `scope` is `ancestor` or nested inside it.
    pub fn is_within(&self, scope: ScopeId, ancestor: ScopeId) -> bool {
        self.scope_chain(scope).any(|id| id == ancestor)
    }

    /// Looks `name` up starting at `scope`, honoring declaration order.
    pub fn lookup(&self, scope: ScopeId, name: &str, offset: TextSize) -> Option<SymbolId> {
        self.scope_chain(scope).find_map(|id| {
            self.scope(id)
                .get(name)
                .filter(|sym| self.symbol(*sym).is_visible_at(offset))
        })
    }

    /// Resolves `name` as written at `offset`. User declarations shadow builtins.
    pub fn resolve_name(&self, name: &str, offset: TextSize) -> Resolution {
        if let Some(id) = self.lookup(self.scope_at(offset), name, offset) {
            return Resolution::Symbol(id);
        }
        match builtin(name) {
            Some(b) => Resolution::Builtin(b),
            None => Resolution::Unresolved,
        }
    }

    /// Symbols usable at `offset`, innermost scope first and most recent first within a
    /// scope. Shadowed names appear once.
    pub fn visible_symbols(&self, offset: TextSize) -> Vec<SymbolId> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for scope in self.scope_chain(self.scope_at(offset)) {
            for (name, &id) in self.scope(scope).symbols.iter().rev() {
                if self.symbol(id).is_visible_at(offset) && seen.insert(name.as_str()) {
                    out.push(id);
                }
            }
        }
        out
    }

    /// Symbol declared by the identifier at `offset`.
    pub fn symbol_at(&self, offset: TextSize) -> Option<SymbolId> {
        self.symbol_ids()
            .find(|id| self.symbol(*id).name_range.contains_inclusive(offset))
    }

    pub fn reference_at(&self, offset: TextSize) -> Option<&Reference> {
        self.references
            .iter()
            .find(|r| r.range.contains_inclusive(offset))
    }

    /// What the identifier at `offset` denotes, whether it declares or uses a name.
    pub fn resolve_at(&self, offset: TextSize) -> Option<Resolution> {
        if let Some(id) = self.symbol_at(offset) {
            return Some(Resolution::Symbol(id));
        }
        self.reference_at(offset).map(Reference::resolution)
    }

    pub fn references_to(&self, symbol: SymbolId) -> impl Iterator<Item = &Reference> + '_ {
        self.references
            .iter()
            .filter(move |r| r.resolution == Resolution::Symbol(symbol))
    }

    /// The scope holding a function's parameters and body.
    pub fn function_scope(&self, function: SymbolId) -> Option<ScopeId> {
        self.scopes
            .iter()
            .position(|s| s.owner == Some(function))
            .map(|i| ScopeId(i as u32))
    }

    /// Symbols declared in `scope` or any scope nested in it, in source order.
    pub fn symbols_within(&self, scope: ScopeId) -> impl Iterator<Item = SymbolId> + '_ {
        self.symbol_ids()
            .filter(move |id| self.is_within(self.symbol(*id).scope, scope))
    }
}
