//! Command builders for the CLI.
//!
//! Each command is built from the shared arg builders in `args.rs`. Commands that read a
//! program all take the same `SOURCE` / `-s TEXT` pair.

use clap::Command;
use sysy_lsp::DEFAULT_TCP_PORT;

use super::args::*;

fn with_source_args(cmd: Command) -> Command {
    cmd.arg(source_path_arg()).arg(source_text_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("sysy")
        .about("SysY parser, checker and language server")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(tree_command())
        .subcommand(check_command())
        .subcommand(symbols_command())
        .subcommand(lang_command())
        .subcommand(lsp_command())
}

/// Print the concrete syntax tree.
pub fn tree_command() -> Command {
    let cmd = Command::new("tree")
        .about("Print the concrete syntax tree")
        .override_usage(
            "\
  sysy tree <SOURCE>
  sysy tree -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  sysy tree main.sy                 # named nodes and tokens
  sysy tree main.sy --raw --spans   # with trivia and byte spans
  cat main.sy | sysy tree -         # from stdin
  sysy tree -s 'int a;'             # inline source"#,
        )
        .arg(raw_arg())
        .arg(spans_arg());

    with_source_args(cmd)
}

/// Report syntax and semantic diagnostics.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Report syntax and semantic diagnostics")
        .override_usage(
            "\
  sysy check <SOURCE>
  sysy check -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  sysy check main.sy                # errors fail, warnings are shown
  sysy check main.sy --strict       # warnings fail too
  sysy check main.sy --json         # diagnostics as JSON on stdout"#,
        )
        .arg(strict_arg())
        .arg(json_arg())
        .arg(color_arg());

    with_source_args(cmd)
}

/// List declared symbols.
pub fn symbols_command() -> Command {
    let cmd = Command::new("symbols")
        .about("List declared symbols with their types")
        .override_usage(
            "\
  sysy symbols <SOURCE>
  sysy symbols -s <TEXT>",
        )
        .arg(json_arg());

    with_source_args(cmd)
}

/// Describe the grammar handle.
pub fn lang_command() -> Command {
    Command::new("lang")
        .about("Describe the grammar: ABI version, node kinds, keywords")
        .arg(json_arg())
}

/// Run the language server.
pub fn lsp_command() -> Command {
    Command::new("lsp")
        .about("Run the language server")
        .override_usage(
            "\
  sysy lsp
  sysy lsp --port [PORT]",
        )
        .after_help(format!(
            "\
EXAMPLES:
  sysy lsp                          # stdio
  sysy lsp --port                   # TCP on 127.0.0.1:{DEFAULT_TCP_PORT}
  SYSY_LOG=debug sysy lsp           # log every message to stderr"
        ))
        .arg(port_arg())
}
