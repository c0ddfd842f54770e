use lsp_types::{
    Diagnostic, DiagnosticRelatedInformation, DiagnosticSeverity, Location, Uri,
};
use sysy_syntax::Severity;
use sysy_syntax::diagnostics::DiagnosticMessage;

use crate::{Document, Result};

impl Document {
    /// Syntax diagnostics plus, when `include_semantic` is set, semantic ones. Cascades
    /// are filtered out and the result is ordered by position.
    pub fn diagnostics(&self, uri: &Uri, include_semantic: bool) -> Result<Vec<Diagnostic>> {
        let mut all = self.parse().diagnostics().clone();
        if include_semantic {
            all.extend(self.model().diagnostics().clone());
        }
        let mut all = all.filtered();
        all.sort();
        all.iter().map(|d| self.to_lsp_diagnostic(uri, d)).collect()
    }

    fn to_lsp_diagnostic(&self, uri: &Uri, diagnostic: &DiagnosticMessage) -> Result<Diagnostic> {
        let severity = match diagnostic.severity() {
            Severity::Error => DiagnosticSeverity::ERROR,
            Severity::Warning => DiagnosticSeverity::WARNING,
        };
        let related = diagnostic
            .related()
            .iter()
            .map(|info| {
                Ok(DiagnosticRelatedInformation {
                    location: Location::new(uri.clone(), self.to_lsp_range(info.range())?),
                    message: info.message().to_owned(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Diagnostic {
            range: self.to_lsp_range(diagnostic.range())?,
            severity: Some(severity),
            source: Some("sysy".to_owned()),
            message: diagnostic.message().to_owned(),
            related_information: (!related.is_empty()).then_some(related),
            ..Default::default()
        })
    }
}
