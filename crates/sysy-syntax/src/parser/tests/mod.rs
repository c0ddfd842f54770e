mod grammar;
mod recovery;

use crate::parser::{Parse, ParseOptions, parse, parse_with_options};

impl Parse {
    #[track_caller]
    pub fn expect(src: &str) -> Self {
        parse(src).unwrap()
    }

    #[track_caller]
    pub fn expect_valid_cst(src: &str) -> String {
        let parse = Self::expect(src);
        if !parse.is_valid() {
            panic!(
                "Expected valid source, got error:\n{}",
                parse.diagnostics().render(src)
            );
        }
        parse.printer().dump()
    }

    #[track_caller]
    pub fn expect_invalid(src: &str) -> Self {
        let parse = Self::expect(src);
        if parse.is_valid() {
            panic!("Expected errors, got valid tree:\n{}", parse.printer().dump());
        }
        parse
    }

    #[track_caller]
    pub fn expect_with_options(src: &str, options: ParseOptions) -> Self {
        parse_with_options(src, options).unwrap()
    }

    pub fn dump_cst(&self) -> String {
        self.printer().dump()
    }

    /// One line per diagnostic after cascade filtering.
    pub fn dump_diagnostics(&self) -> String {
        self.diagnostics().filtered().printer().render()
    }
}
