//! Guards against grammar bugs, as opposed to bad input. Excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use super::core::Parser;
use super::cst::SyntaxKind;

/// Lookaheads allowed between two consumed tokens before the parser counts as stuck.
pub(super) const LOOKAHEAD_BUDGET: u32 = 256;

impl Parser<'_> {
    /// Each lookahead spends budget and each consumed token refills it, so an empty
    /// budget means some grammar loop stopped advancing.
    #[inline]
    pub(super) fn ensure_progress(&self) {
        let left = self.lookahead_budget.get();
        assert!(left > 0, "parser stuck at token {} without consuming input", self.pos);
        self.lookahead_budget.set(left - 1);
    }

    #[inline]
    pub(super) fn refill_lookahead(&self) {
        self.lookahead_budget.set(LOOKAHEAD_BUDGET);
    }

    /// Grammar rules are entered on their leading token, which the caller has checked.
    #[inline]
    pub(super) fn assert_current(&mut self, expected: SyntaxKind) {
        let found = self.current();
        assert_eq!(
            found, expected,
            "grammar rule for {expected:?} entered at {found:?}"
        );
    }
}
