use rowan::TextRange;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// What went wrong. Declaration order is priority order, highest first: see
/// [`Diagnostics::filtered`](super::Diagnostics::filtered).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // Unbalanced delimiters
    UnclosedBrace,
    UnclosedParen,
    UnclosedBracket,

    // Something required is missing
    ExpectedItem,
    ExpectedStatement,
    ExpectedExpression,
    ExpectedType,
    ExpectedIdentifier,
    MissingSemicolon,

    // Something is there that should not be
    UnterminatedComment,
    InvalidNumber,
    InvalidAssignmentTarget,
    UnexpectedToken,
    NestingTooDeep,

    // Semantic pass
    DuplicateDefinition,
    UndefinedName,
    NotAFunction,
    NotAVariable,
    ArgumentCountMismatch,
    AssignToConstant,
    VoidVariable,
    BreakOutsideLoop,
    ContinueOutsideLoop,
    ReturnValueInVoidFunction,
    MissingReturnValue,
}

impl DiagnosticKind {
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::MissingReturnValue => Severity::Warning,
            _ => Severity::Error,
        }
    }

    pub fn suppresses(&self, other: &DiagnosticKind) -> bool {
        self < other
    }

    /// Unbalanced delimiters, usually a consequence of something missing inside.
    pub fn is_structural_error(&self) -> bool {
        matches!(
            self,
            Self::UnclosedBrace | Self::UnclosedParen | Self::UnclosedBracket
        )
    }

    pub fn is_root_cause_error(&self) -> bool {
        matches!(
            self,
            Self::ExpectedItem
                | Self::ExpectedStatement
                | Self::ExpectedExpression
                | Self::ExpectedType
                | Self::ExpectedIdentifier
                | Self::MissingSemicolon
        )
    }

    /// Reported by the semantic pass rather than the parser.
    pub fn is_semantic(&self) -> bool {
        *self >= Self::DuplicateDefinition
    }

    /// Message used when the reporter adds no detail.
    pub fn summary(&self) -> &'static str {
        match self {
            Self::UnclosedBrace => "missing closing `}`",
            Self::UnclosedParen => "missing closing `)`",
            Self::UnclosedBracket => "missing closing `]`",

            Self::ExpectedItem => "expected a declaration or function definition",
            Self::ExpectedStatement => "expected a statement",
            Self::ExpectedExpression => "expected an expression",
            Self::ExpectedType => "expected `int` or `void`",
            Self::ExpectedIdentifier => "expected an identifier",
            Self::MissingSemicolon => "missing `;`",

            Self::UnterminatedComment => "unterminated block comment",
            Self::InvalidNumber => "invalid number literal",
            Self::InvalidAssignmentTarget => "left side of `=` must be a variable",
            Self::UnexpectedToken => "unexpected token",
            Self::NestingTooDeep => "nesting too deep",

            Self::DuplicateDefinition => "duplicate definition",
            Self::UndefinedName => "undefined name",
            Self::NotAFunction => "not a function",
            Self::NotAVariable => "not a variable",
            Self::ArgumentCountMismatch => "wrong number of arguments",
            Self::AssignToConstant => "cannot assign to a constant",
            Self::VoidVariable => "variable cannot have type `void`",
            Self::BreakOutsideLoop => "`break` outside of a loop",
            Self::ContinueOutsideLoop => "`continue` outside of a loop",
            Self::ReturnValueInVoidFunction => "`void` function cannot return a value",
            Self::MissingReturnValue => "missing return value",
        }
    }

    /// Full message. `detail` is what the reporter knows: the offending token as
    /// `` `text` ``, a name, or for `UnexpectedToken` and `ArgumentCountMismatch`
    /// the whole sentence.
    pub fn message(&self, detail: Option<&str>) -> String {
        let Some(detail) = detail else {
            return self.summary().to_owned();
        };
        match self {
            Self::ExpectedItem
            | Self::ExpectedStatement
            | Self::ExpectedExpression
            | Self::ExpectedType
            | Self::ExpectedIdentifier => format!("{}, found {detail}", self.summary()),
            Self::UnexpectedToken | Self::ArgumentCountMismatch => detail.to_owned(),
            Self::MissingSemicolon => format!("expected `;`, found {detail}"),
            Self::InvalidNumber => format!("invalid number literal `{detail}`"),
            Self::InvalidAssignmentTarget => format!("cannot assign to `{detail}`"),
            Self::NestingTooDeep => format!("nesting exceeds the limit of {detail} levels"),

            Self::DuplicateDefinition => format!("`{detail}` is already defined in this scope"),
            Self::UndefinedName => format!("`{detail}` is not defined"),
            Self::NotAFunction => format!("`{detail}` is not a function"),
            Self::NotAVariable => format!("`{detail}` is a function, not a variable"),
            Self::AssignToConstant => format!("cannot assign to constant `{detail}`"),
            Self::VoidVariable => format!("`{detail}` cannot have type `void`"),
            Self::ReturnValueInVoidFunction => {
                format!("`{detail}` returns `void` and cannot return a value")
            }
            Self::MissingReturnValue => format!("`{detail}` should return a value"),

            _ => format!("{}: {detail}", self.summary()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Suggested edit: replace the diagnostic's range with `replacement`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fix {
    pub(crate) replacement: String,
    pub(crate) description: String,
}

impl Fix {
    pub fn new(replacement: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            replacement: replacement.into(),
            description: description.into(),
        }
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedInfo {
    #[serde(serialize_with = "serialize_text_range")]
    pub(crate) range: TextRange,
    pub(crate) message: String,
}

impl RelatedInfo {
    pub fn new(range: TextRange, message: impl Into<String>) -> Self {
        Self {
            range,
            message: message.into(),
        }
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    /// The range shown to the user (underlined in output).
    pub(crate) range: TextRange,
    pub(crate) message: String,
    pub(crate) fix: Option<Fix>,
    pub(crate) related: Vec<RelatedInfo>,
}

impl DiagnosticMessage {
    pub(crate) fn new(kind: DiagnosticKind, range: TextRange, message: impl Into<String>) -> Self {
        Self {
            kind,
            range,
            message: message.into(),
            fix: None,
            related: Vec::new(),
        }
    }

    pub(crate) fn with_default_message(kind: DiagnosticKind, range: TextRange) -> Self {
        Self::new(kind, range, kind.summary())
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn fix(&self) -> Option<&Fix> {
        self.fix.as_ref()
    }

    pub fn related(&self) -> &[RelatedInfo] {
        &self.related
    }

    pub fn severity(&self) -> Severity {
        self.kind.default_severity()
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }
}

fn serialize_text_range<S: Serializer>(range: &TextRange, s: S) -> Result<S::Ok, S::Error> {
    let mut state = s.serialize_struct("TextRange", 2)?;
    state.serialize_field("start", &u32::from(range.start()))?;
    state.serialize_field("end", &u32::from(range.end()))?;
    state.end()
}

struct SerializedRange(TextRange);

impl Serialize for SerializedRange {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        serialize_text_range(&self.0, s)
    }
}

impl Serialize for DiagnosticMessage {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        let fields = 3 + usize::from(self.fix.is_some()) + usize::from(!self.related.is_empty());
        let mut state = s.serialize_struct("DiagnosticMessage", fields)?;
        state.serialize_field("severity", &self.severity())?;
        state.serialize_field("range", &SerializedRange(self.range))?;
        state.serialize_field("message", &self.message)?;
        if let Some(fix) = &self.fix {
            state.serialize_field("fix", fix)?;
        } else {
            state.skip_field("fix")?;
        }
        if self.related.is_empty() {
            state.skip_field("related")?;
        } else {
            state.serialize_field("related", &self.related)?;
        }
        state.end()
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}..{}: {}",
            self.severity(),
            u32::from(self.range.start()),
            u32::from(self.range.end()),
            self.message
        )?;
        if let Some(fix) = &self.fix {
            write!(f, " (fix: {})", fix.description)?;
        }
        for related in &self.related {
            write!(
                f,
                " (related: {} at {}..{})",
                related.message,
                u32::from(related.range.start()),
                u32::from(related.range.end())
            )?;
        }
        Ok(())
    }
}
