//! Syntax kinds for SysY.
//!
//! `SyntaxKind` serves dual roles: token kinds (from lexer) and node kinds (from parser).
//! Logos derives token recognition; node kinds lack token/regex attributes.
//! `SysyLang` implements Rowan's `Language` trait for tree construction.

use logos::Logos;
use rowan::Language;

/// All token and node kinds. Tokens first, then nodes, then `__LAST` sentinel.
/// `#[repr(u16)]` enables safe transmute in `kind_from_raw`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    #[token("(")]
    ParenOpen = 0,

    #[token(")")]
    ParenClose,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token(",")]
    Comma,

    #[token(";")]
    Semicolon,

    #[token("=")]
    Assign,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,

    #[token("%")]
    Percent,

    #[token("!")]
    Bang,

    #[token("<")]
    Lt,

    #[token(">")]
    Gt,

    #[token("<=")]
    LtEq,

    #[token(">=")]
    GtEq,

    #[token("==")]
    EqEq,

    #[token("!=")]
    NotEq,

    #[token("&&")]
    AndAnd,

    #[token("||")]
    OrOr,

    #[token("int")]
    KwInt,

    #[token("void")]
    KwVoid,

    #[token("const")]
    KwConst,

    #[token("if")]
    KwIf,

    #[token("else")]
    KwElse,

    #[token("while")]
    KwWhile,

    #[token("break")]
    KwBreak,

    #[token("continue")]
    KwContinue,

    #[token("return")]
    KwReturn,

    /// Defined after keywords so they take precedence.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,

    #[regex(r"[1-9][0-9]*")]
    Decimal,

    #[regex(r"0[0-7]*")]
    Octal,

    #[regex(r"0[xX][0-9a-fA-F]+")]
    Hexadecimal,

    /// Octal-looking literal containing `8` or `9`.
    #[regex(r"0[0-7]*[89][0-9]*")]
    BadNumber,

    #[regex(r"[ \t\x0B\x0C]+")]
    Whitespace,

    #[token("\n")]
    #[token("\r\n")]
    #[token("\r")]
    Newline,

    #[regex(r"//[^\n]*", allow_greedy = true)]
    LineComment,

    #[regex(r"/\*[^*]*\*+(?:[^/*][^*]*\*+)*/", allow_greedy = true)]
    BlockComment,

    /// `/*` without a closing `*/`; runs to end of input.
    #[regex(r"/\*[^*]*(?:\*+[^/*][^*]*)*\**", allow_greedy = true)]
    UnterminatedComment,

    /// Coalesced unrecognized characters
    Garbage,
    Error,

    // --- Node kinds (non-terminals) ---
    SourceFile,
    FuncDef,
    FuncFParams,
    FuncFParam,
    VarDecl,
    ConstDecl,
    VarDef,
    ConstDef,
    InitVal,
    ConstInitVal,
    Type,
    Block,
    AssignStmt,
    ExpStmt,
    IfStmt,
    ElseBranch,
    WhileStmt,
    BreakStmt,
    ContinueStmt,
    ReturnStmt,
    BinaryExp,
    UnaryExp,
    CallExp,
    FuncRParams,
    ParenExp,
    Lval,
    Number,

    // Must be last - used for bounds checking in `kind_from_raw`
    #[doc(hidden)]
    __LAST,
}

use SyntaxKind::*;

impl SyntaxKind {
    /// Converts a raw discriminant back into a kind, `None` when out of range.
    #[inline]
    pub fn from_raw(raw: u16) -> Option<Self> {
        if raw >= __LAST as u16 {
            return None;
        }
        // SAFETY: bounds checked above, and SyntaxKind is repr(u16) with contiguous discriminants
        Some(unsafe { std::mem::transmute::<u16, SyntaxKind>(raw) })
    }

    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Whitespace | Newline | LineComment | BlockComment | UnterminatedComment
        )
    }

    #[inline]
    pub fn is_comment(self) -> bool {
        matches!(self, LineComment | BlockComment | UnterminatedComment)
    }

    #[inline]
    pub fn is_error(self) -> bool {
        matches!(self, Error | Garbage | BadNumber)
    }

    #[inline]
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            KwInt
                | KwVoid
                | KwConst
                | KwIf
                | KwElse
                | KwWhile
                | KwBreak
                | KwContinue
                | KwReturn
        )
    }

    #[inline]
    pub fn is_number(self) -> bool {
        matches!(self, Decimal | Octal | Hexadecimal)
    }

    #[inline]
    pub fn is_operator(self) -> bool {
        matches!(
            self,
            Assign
                | Plus
                | Minus
                | Star
                | Slash
                | Percent
                | Bang
                | Lt
                | Gt
                | LtEq
                | GtEq
                | EqEq
                | NotEq
                | AndAnd
                | OrOr
        )
    }

    #[inline]
    pub fn is_token(self) -> bool {
        self < SourceFile
    }

    #[inline]
    pub fn is_node(self) -> bool {
        self >= SourceFile && self < __LAST
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    #[inline]
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Language tag for Rowan's tree types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SysyLang {}

impl Language for SysyLang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        SyntaxKind::from_raw(raw.0).expect("raw syntax kind out of range")
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for Rowan types parameterized by our language.
pub type SyntaxNode = rowan::SyntaxNode<SysyLang>;
pub type SyntaxToken = rowan::SyntaxToken<SysyLang>;
pub type SyntaxElement = rowan::NodeOrToken<SyntaxNode, SyntaxToken>;

/// 64-bit bitset of token `SyntaxKind`s for O(1) membership testing.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TokenSet(u64);

impl TokenSet {
    /// Creates an empty token set.
    pub const EMPTY: TokenSet = TokenSet(0);

    /// Panics at compile time if any kind's discriminant >= 64.
    #[inline]
    pub const fn new(kinds: &[SyntaxKind]) -> Self {
        let mut bits = 0u64;
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u16;
            assert!(kind < 64, "SyntaxKind value exceeds TokenSet capacity");
            bits |= 1 << kind;
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn single(kind: SyntaxKind) -> Self {
        let kind = kind as u16;
        assert!(kind < 64, "SyntaxKind value exceeds TokenSet capacity");
        TokenSet(1 << kind)
    }

    #[inline]
    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let kind = kind as u16;
        if kind >= 64 {
            return false;
        }
        self.0 & (1 << kind) != 0
    }

    #[inline]
    pub const fn union(self, other: TokenSet) -> TokenSet {
        TokenSet(self.0 | other.0)
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_set();
        for i in 0..64u16 {
            if self.0 & (1 << i) != 0
                && let Some(kind) = SyntaxKind::from_raw(i)
            {
                list.entry(&kind);
            }
        }
        list.finish()
    }
}

/// Pre-defined token sets for the parser.
pub mod token_sets {
    use super::*;

    pub const TYPES: TokenSet = TokenSet::new(&[KwInt, KwVoid]);

    /// FIRST set of a top-level item or block declaration.
    pub const DECL_FIRST: TokenSet = TokenSet::new(&[KwInt, KwVoid, KwConst]);

    pub const NUMBERS: TokenSet = TokenSet::new(&[Decimal, Octal, Hexadecimal, BadNumber]);

    pub const UNARY_OPS: TokenSet = TokenSet::new(&[Plus, Minus, Bang]);

    /// FIRST set of an expression.
    pub const EXPR_FIRST: TokenSet = TokenSet::new(&[
        Ident,
        Decimal,
        Octal,
        Hexadecimal,
        BadNumber,
        ParenOpen,
        Plus,
        Minus,
        Bang,
    ]);

    pub const TRIVIA: TokenSet = TokenSet::new(&[
        Whitespace,
        Newline,
        LineComment,
        BlockComment,
        UnterminatedComment,
    ]);

    /// Tokens at which top-level error recovery stops.
    pub const ITEM_RECOVERY: TokenSet = DECL_FIRST;

    /// Tokens at which statement-level error recovery stops.
    pub const STMT_RECOVERY: TokenSet = TokenSet::new(&[
        Semicolon,
        BraceClose,
        KwIf,
        KwWhile,
        KwBreak,
        KwContinue,
        KwReturn,
        KwInt,
        KwVoid,
        KwConst,
    ]);

    /// Tokens at which a declaration list gives up.
    pub const DECL_RECOVERY: TokenSet =
        TokenSet::new(&[Semicolon, BraceClose, KwInt, KwVoid, KwConst]);

    /// Tokens a missing operand must not swallow.
    pub const EXPR_RECOVERY: TokenSet = TokenSet::new(&[
        ParenClose,
        BracketClose,
        BraceOpen,
        BraceClose,
        Comma,
        Semicolon,
        Assign,
    ])
    .union(STMT_RECOVERY);
}
