mod cli;
mod commands;

use cli::{CheckParams, LangParams, LspParams, SymbolsParams, TreeParams, build_cli};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, in `tracing-subscriber` env-filter syntax.
const LOG_ENV: &str = "SYSY_LOG";

fn main() {
    init_tracing();

    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("tree", m)) => {
            let params = TreeParams::from_matches(m);
            commands::tree::run(params.into());
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("symbols", m)) => {
            let params = SymbolsParams::from_matches(m);
            commands::symbols::run(params.into());
        }
        Some(("lang", m)) => {
            let params = LangParams::from_matches(m);
            commands::lang::run(params.into());
        }
        Some(("lsp", m)) => {
            let params = LspParams::from_matches(m);
            commands::lsp::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

// Stdout may carry the LSP protocol, so logs always go to stderr.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
