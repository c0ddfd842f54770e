//! The SysY grammar handle.
//!
//! A single immutable [`Language`] value describes the grammar: its name, the node kinds
//! the parser produces, keywords and file types. C hosts obtain it through
//! [`tree_sitter_sysy_parser`] and query it with the `sysy_language_*` accessors declared
//! in `include/sysy_parser.h`.

use std::ffi::c_char;

use crate::Result;
use crate::parser::{self, Parse, SyntaxKind};

/// Layout version of [`Language`]. Bumped whenever the kind table changes incompatibly.
pub const ABI_VERSION: u32 = 1;

pub const KEYWORDS: &[&str] = &[
    "int", "void", "const", "if", "else", "while", "break", "continue", "return",
];

pub const FILE_TYPES: &[&str] = &["sy"];

/// Opaque grammar descriptor. Only one instance exists, see [`language`].
#[repr(C)]
#[derive(Debug, PartialEq, Eq)]
pub struct Language {
    abi_version: u32,
    node_kind_count: u16,
}

static LANGUAGE: Language = Language {
    abi_version: ABI_VERSION,
    node_kind_count: SyntaxKind::__LAST as u16,
};

/// The SysY grammar handle.
pub fn language() -> &'static Language {
    &LANGUAGE
}

/// C entry point: returns the grammar handle. Never null, same pointer on every call.
#[unsafe(no_mangle)]
pub extern "C" fn tree_sitter_sysy_parser() -> *const Language {
    &LANGUAGE
}

#[unsafe(no_mangle)]
pub extern "C" fn sysy_language_name(language: Option<&Language>) -> *const c_char {
    match language {
        Some(_) => c"sysy".as_ptr(),
        None => std::ptr::null(),
    }
}

#[unsafe(no_mangle)]
pub extern "C" fn sysy_language_abi_version(language: Option<&Language>) -> u32 {
    language.map_or(0, Language::abi_version)
}

#[unsafe(no_mangle)]
pub extern "C" fn sysy_language_node_kind_count(language: Option<&Language>) -> u32 {
    language.map_or(0, |l| l.node_kind_count as u32)
}

/// NUL-terminated kind name, or null for a null handle or an out-of-range id.
#[unsafe(no_mangle)]
pub extern "C" fn sysy_language_node_kind_for_id(
    language: Option<&Language>,
    id: u16,
) -> *const c_char {
    let Some(language) = language else {
        return std::ptr::null();
    };
    match language.kind(id) {
        Some(kind) => kind_name_nul(kind).as_ptr().cast(),
        None => std::ptr::null(),
    }
}

impl Language {
    pub fn name(&self) -> &'static str {
        "sysy"
    }

    pub fn abi_version(&self) -> u32 {
        self.abi_version
    }

    pub fn node_kind_count(&self) -> usize {
        self.node_kind_count as usize
    }

    pub fn kind(&self, id: u16) -> Option<SyntaxKind> {
        if id >= self.node_kind_count {
            return None;
        }
        SyntaxKind::from_raw(id)
    }

    pub fn node_kind_for_id(&self, id: u16) -> Option<&'static str> {
        self.kind(id).map(kind_name)
    }

    /// Lowest id whose name and namedness match.
    pub fn id_for_node_kind(&self, name: &str, named: bool) -> Option<u16> {
        (0..self.node_kind_count).find(|&id| {
            self.kind(id)
                .is_some_and(|kind| kind_name(kind) == name && is_named(kind) == named)
        })
    }

    pub fn node_kind_is_named(&self, id: u16) -> bool {
        self.kind(id).is_some_and(is_named)
    }

    pub fn keywords(&self) -> &'static [&'static str] {
        KEYWORDS
    }

    pub fn file_types(&self) -> &'static [&'static str] {
        FILE_TYPES
    }

    pub fn parse(&self, source: &str) -> Result<Parse> {
        parser::parse(source)
    }
}

/// Public name of a kind, as the grammar spells it.
pub fn kind_name(kind: SyntaxKind) -> &'static str {
    let name = kind_name_nul(kind);
    &name[..name.len() - 1]
}

/// Named kinds are rules and identifier-like leaves; punctuation, operators and keywords are anonymous.
pub fn is_named(kind: SyntaxKind) -> bool {
    use SyntaxKind::*;
    if kind.is_node() || kind.is_comment() || kind.is_error() {
        return true;
    }
    matches!(kind, Ident | Decimal | Octal | Hexadecimal)
}

fn kind_name_nul(kind: SyntaxKind) -> &'static str {
    use SyntaxKind::*;
    match kind {
        ParenOpen => "(\0",
        ParenClose => ")\0",
        BracketOpen => "[\0",
        BracketClose => "]\0",
        BraceOpen => "{\0",
        BraceClose => "}\0",
        Comma => ",\0",
        Semicolon => ";\0",
        Assign => "=\0",
        Plus => "+\0",
        Minus => "-\0",
        Star => "*\0",
        Slash => "/\0",
        Percent => "%\0",
        Bang => "!\0",
        Lt => "<\0",
        Gt => ">\0",
        LtEq => "<=\0",
        GtEq => ">=\0",
        EqEq => "==\0",
        NotEq => "!=\0",
        AndAnd => "&&\0",
        OrOr => "||\0",
        KwInt => "int\0",
        KwVoid => "void\0",
        KwConst => "const\0",
        KwIf => "if\0",
        KwElse => "else\0",
        KwWhile => "while\0",
        KwBreak => "break\0",
        KwContinue => "continue\0",
        KwReturn => "return\0",
        Ident => "Ident\0",
        Decimal => "Decimal\0",
        Octal => "Octal\0",
        Hexadecimal => "Hexadecimal\0",
        Whitespace => "whitespace\0",
        Newline => "newline\0",
        LineComment | BlockComment | UnterminatedComment => "comment\0",
        BadNumber | Garbage | Error => "ERROR\0",
        SourceFile => "source_file\0",
        FuncDef => "FuncDef\0",
        FuncFParams => "FuncFParams\0",
        FuncFParam => "FuncFParam\0",
        VarDecl => "VarDecl\0",
        ConstDecl => "ConstDecl\0",
        VarDef => "VarDef\0",
        ConstDef => "ConstDef\0",
        InitVal => "InitVal\0",
        ConstInitVal => "ConstInitVal\0",
        Type => "Type\0",
        Block => "Block\0",
        AssignStmt => "AssignStmt\0",
        ExpStmt => "ExpStmt\0",
        IfStmt => "IfStmt\0",
        ElseBranch => "ElseBranch\0",
        WhileStmt => "WhileStmt\0",
        BreakStmt => "BreakStmt\0",
        ContinueStmt => "ContinueStmt\0",
        ReturnStmt => "ReturnStmt\0",
        BinaryExp => "BinaryExp\0",
        UnaryExp => "UnaryExp\0",
        CallExp => "CallExp\0",
        FuncRParams => "FuncRParams\0",
        ParenExp => "ParenExp\0",
        Lval => "Lval\0",
        Number => "Number\0",
        __LAST => "\0",
    }
}
