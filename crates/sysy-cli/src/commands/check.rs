use std::process::exit;

use sysy_syntax::diagnostics::DiagnosticMessage;
use sysy_syntax::{Diagnostics, Parse, analyze};

use super::parse_input;
use super::source::SourceInput;

pub struct CheckArgs {
    pub input: SourceInput,
    pub strict: bool,
    pub json: bool,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let (source, parse) = parse_input(&args.input);
    let diagnostics = collect(&parse);
    let valid = passes(&diagnostics, args.strict);

    if args.json {
        match render_json(&diagnostics) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: {err}");
                exit(1);
            }
        }
    } else if !diagnostics.is_empty() {
        let rendered = diagnostics
            .printer()
            .source(&source.text)
            .path(&source.name)
            .colored(args.color)
            .render();
        eprint!("{rendered}");
    }

    tracing::debug!(
        errors = diagnostics.error_count(),
        warnings = diagnostics.warning_count(),
        "checked"
    );
    if !valid {
        exit(1);
    }

    // Silent on success (like cargo check)
}

/// Syntax and semantic diagnostics without cascades, in source order.
pub fn collect(parse: &Parse) -> Diagnostics {
    let model = analyze(&parse.source_file());
    let mut all = parse.diagnostics().clone();
    all.extend(model.diagnostics().clone());
    let mut all = all.filtered();
    all.sort();
    all
}

pub fn passes(diagnostics: &Diagnostics, strict: bool) -> bool {
    if strict {
        !diagnostics.has_errors() && !diagnostics.has_warnings()
    } else {
        !diagnostics.has_errors()
    }
}

pub fn render_json(diagnostics: &Diagnostics) -> serde_json::Result<String> {
    let messages: Vec<&DiagnosticMessage> = diagnostics.iter().collect();
    serde_json::to_string_pretty(&messages)
}
