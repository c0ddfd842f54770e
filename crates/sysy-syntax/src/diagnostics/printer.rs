//! Text output for diagnostics.
//!
//! Without a source, each diagnostic prints as one `severity at start..end: message` line,
//! which keeps test snapshots compact. With a source, each one becomes an annotated
//! snippet, followed by a preview of the fix when it has one.

use std::fmt::Write;
use std::ops::Range;

use annotate_snippets::{AnnotationKind, Group, Level, Patch, Renderer, Snippet};
use rowan::TextRange;

use super::Diagnostics;
use super::message::{DiagnosticMessage, Severity};

pub struct DiagnosticsPrinter<'d, 's> {
    diagnostics: &'d Diagnostics,
    source: Option<&'s str>,
    path: Option<&'s str>,
    colored: bool,
}

impl<'d, 's> DiagnosticsPrinter<'d, 's> {
    pub fn new(diagnostics: &'d Diagnostics) -> Self {
        Self {
            diagnostics,
            source: None,
            path: None,
            colored: false,
        }
    }

    pub fn source(mut self, source: &'s str) -> Self {
        self.source = Some(source);
        self
    }

    /// File name shown in snippet headers.
    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.format(&mut out);
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        match self.source {
            None => self.format_lines(w),
            Some(source) => self.format_snippets(source, w),
        }
    }

    fn format_lines(&self, w: &mut impl Write) -> std::fmt::Result {
        let mut separator = "";
        for diag in self.diagnostics {
            write!(w, "{separator}{diag}")?;
            separator = "\n";
        }
        Ok(())
    }

    fn format_snippets(&self, source: &str, w: &mut impl Write) -> std::fmt::Result {
        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };
        let mut separator = "";
        for diag in self.diagnostics {
            let groups = report(source, self.path, diag);
            write!(w, "{separator}{}", renderer.render(&groups))?;
            separator = "\n";
        }
        Ok(())
    }
}

fn report<'a>(source: &'a str, path: Option<&'a str>, diag: &'a DiagnosticMessage) -> Vec<Group<'a>> {
    let mut snippet = Snippet::source(source).line_start(1).annotation(
        AnnotationKind::Primary
            .span(display_span(diag.range, source))
            .label(&diag.message),
    );
    if let Some(path) = path {
        snippet = snippet.path(path);
    }
    let snippet = diag.related.iter().fold(snippet, |snippet, related| {
        snippet.annotation(
            AnnotationKind::Context
                .span(display_span(related.range, source))
                .label(&related.message),
        )
    });

    let mut groups = vec![level(diag.severity()).primary_title(&diag.message).element(snippet)];
    if let Some(fix) = &diag.fix {
        let patch = Snippet::source(source)
            .line_start(1)
            .patch(Patch::new(byte_range(diag.range), &fix.replacement));
        groups.push(Level::HELP.secondary_title(&fix.description).element(patch));
    }
    groups
}

fn level(severity: Severity) -> Level<'static> {
    match severity {
        Severity::Error => Level::ERROR,
        Severity::Warning => Level::WARNING,
    }
}

fn byte_range(range: TextRange) -> Range<usize> {
    range.start().into()..range.end().into()
}

/// Empty ranges, like the spot of a missing `;`, underline the character that follows.
fn display_span(range: TextRange, source: &str) -> Range<usize> {
    let span = byte_range(range);
    if !span.is_empty() {
        return span;
    }
    match source.get(span.start..).and_then(|rest| rest.chars().next()) {
        Some(c) => span.start..span.start + c.len_utf8(),
        None => span,
    }
}
