//! Diagnostics collected while parsing and analyzing.
//!
//! Both passes report into a [`Diagnostics`] through the [`DiagnosticBuilder`] returned by
//! [`Diagnostics::report`]. Consumers usually call [`Diagnostics::filtered`] first: one
//! mistake tends to produce several messages, and only the root cause is worth showing.

mod message;
mod printer;


use rowan::TextRange;

pub use message::{DiagnosticKind, DiagnosticMessage, Fix, RelatedInfo, Severity};
pub use printer::DiagnosticsPrinter;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    messages: Vec<DiagnosticMessage>,
}

#[must_use = "diagnostic not emitted, call .emit()"]
pub struct DiagnosticBuilder<'a> {
    diagnostics: &'a mut Diagnostics,
    message: DiagnosticMessage,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a diagnostic with the kind's default message; `.message()` fills in detail.
    pub fn report(&mut self, kind: DiagnosticKind, range: TextRange) -> DiagnosticBuilder<'_> {
        DiagnosticBuilder {
            diagnostics: self,
            message: DiagnosticMessage::with_default_message(kind, range),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticMessage> {
        self.messages.iter()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn has_warnings(&self) -> bool {
        self.warning_count() > 0
    }

    pub fn error_count(&self) -> usize {
        self.messages.iter().filter(|d| d.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.messages.iter().filter(|d| d.is_warning()).count()
    }

    /// Drops messages that are consequences of another message of the same pass.
    ///
    /// `a` hides `b` when `a` has higher priority and either strictly contains `b` or
    /// starts where `b` does. At a shared start, a missing-piece error (`expected ...`,
    /// missing `;`) also hides an unclosed-delimiter error. A hidden message hides nothing.
    pub fn filtered(&self) -> Diagnostics {
        let mut hidden = vec![false; self.messages.len()];
        for (i, a) in self.messages.iter().enumerate() {
            for (j, b) in self.messages.iter().enumerate() {
                if i != j && !hidden[i] && !hidden[j] && hides(a, b) {
                    hidden[j] = true;
                }
            }
        }

        let messages = self
            .messages
            .iter()
            .zip(hidden)
            .filter_map(|(m, hidden)| (!hidden).then(|| m.clone()))
            .collect();
        Diagnostics { messages }
    }

    pub fn printer(&self) -> DiagnosticsPrinter<'_, '_> {
        DiagnosticsPrinter::new(self)
    }

    pub fn render(&self, source: &str) -> String {
        self.printer().source(source).render()
    }

    pub fn render_colored(&self, source: &str, colored: bool) -> String {
        self.printer().source(source).colored(colored).render()
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.messages.extend(other.messages);
    }

    /// Orders messages by position, then by priority.
    pub fn sort(&mut self) {
        self.messages
            .sort_by_key(|m| (m.range.start(), m.range.end(), m.kind));
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a DiagnosticMessage;
    type IntoIter = std::slice::Iter<'a, DiagnosticMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

impl DiagnosticBuilder<'_> {
    /// Detail rendered through the kind's message template.
    pub fn message(mut self, msg: impl Into<String>) -> Self {
        let detail = msg.into();
        self.message.message = self.message.kind.message(Some(&detail));
        self
    }

    pub fn related_to(mut self, msg: impl Into<String>, range: TextRange) -> Self {
        self.message.related.push(RelatedInfo::new(range, msg));
        self
    }

    pub fn fix(mut self, description: impl Into<String>, replacement: impl Into<String>) -> Self {
        self.message.fix = Some(Fix::new(replacement, description));
        self
    }

    pub fn emit(self) {
        self.diagnostics.messages.push(self.message);
    }
}

fn hides(a: &DiagnosticMessage, b: &DiagnosticMessage) -> bool {
    // Syntax and semantic messages never explain each other
    if a.kind.is_semantic() != b.kind.is_semantic() {
        return false;
    }
    let (outer, inner) = (a.range, b.range);
    if outer.start() < inner.start() && inner.end() <= outer.end() {
        return a.kind.suppresses(&b.kind);
    }
    if outer.start() == inner.start() {
        return a.kind.suppresses(&b.kind)
            || (a.kind.is_root_cause_error() && b.kind.is_structural_error());
    }
    false
}
