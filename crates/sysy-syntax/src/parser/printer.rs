use std::fmt::Write;

use rowan::{NodeOrToken, TextRange, WalkEvent};

use super::cst::SyntaxNode;

/// Indented dump of a syntax tree, one node or token per line.
///
/// Tokens print their text as a quoted string. Trivia and `@start..end` byte spans are
/// left out unless asked for.
pub struct TreePrinter {
    root: SyntaxNode,
    trivia: bool,
    spans: bool,
}

impl TreePrinter {
    pub fn new(root: SyntaxNode) -> Self {
        Self {
            root,
            trivia: false,
            spans: false,
        }
    }

    pub fn with_trivia(mut self, value: bool) -> Self {
        self.trivia = value;
        self
    }

    pub fn with_spans(mut self, value: bool) -> Self {
        self.spans = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.format(&mut out);
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let mut depth = 0usize;
        for event in self.root.preorder_with_tokens() {
            let element = match event {
                WalkEvent::Enter(element) => element,
                WalkEvent::Leave(NodeOrToken::Node(_)) => {
                    depth -= 1;
                    continue;
                }
                WalkEvent::Leave(NodeOrToken::Token(_)) => continue,
            };
            let indent = "  ".repeat(depth);
            match element {
                NodeOrToken::Node(node) => {
                    writeln!(w, "{indent}{:?}{}", node.kind(), self.span(node.text_range()))?;
                    depth += 1;
                }
                NodeOrToken::Token(token) if self.trivia || !token.kind().is_trivia() => {
                    let span = self.span(token.text_range());
                    writeln!(w, "{indent}{:?}{span} {:?}", token.kind(), token.text())?;
                }
                NodeOrToken::Token(_) => {}
            }
        }
        Ok(())
    }

    fn span(&self, range: TextRange) -> String {
        if self.spans {
            format!(" @{}..{}", u32::from(range.start()), u32::from(range.end()))
        } else {
            String::new()
        }
    }
}
