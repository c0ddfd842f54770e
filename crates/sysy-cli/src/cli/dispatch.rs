//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::lang::LangArgs;
use crate::commands::lsp::LspArgs;
use crate::commands::source::SourceInput;
use crate::commands::symbols::SymbolsArgs;
use crate::commands::tree::TreeArgs;

pub struct TreeParams {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub raw: bool,
    pub spans: bool,
}

impl TreeParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            raw: m.get_flag("raw"),
            spans: m.get_flag("spans"),
        }
    }
}

impl From<TreeParams> for TreeArgs {
    fn from(p: TreeParams) -> Self {
        Self {
            input: SourceInput::new(p.source_path, p.source_text),
            raw: p.raw,
            spans: p.spans,
        }
    }
}

pub struct CheckParams {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub strict: bool,
    pub json: bool,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            strict: m.get_flag("strict"),
            json: m.get_flag("json"),
            color: ColorChoice::from_flag(m.get_one::<String>("color").map(String::as_str)),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            input: SourceInput::new(p.source_path, p.source_text),
            strict: p.strict,
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct SymbolsParams {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub json: bool,
}

impl SymbolsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            json: m.get_flag("json"),
        }
    }
}

impl From<SymbolsParams> for SymbolsArgs {
    fn from(p: SymbolsParams) -> Self {
        Self {
            input: SourceInput::new(p.source_path, p.source_text),
            json: p.json,
        }
    }
}

pub struct LangParams {
    pub json: bool,
}

impl LangParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            json: m.get_flag("json"),
        }
    }
}

impl From<LangParams> for LangArgs {
    fn from(p: LangParams) -> Self {
        Self { json: p.json }
    }
}

pub struct LspParams {
    pub port: Option<u16>,
}

impl LspParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            port: m.get_one::<u16>("port").copied(),
        }
    }
}

impl From<LspParams> for LspArgs {
    fn from(p: LspParams) -> Self {
        Self { port: p.port }
    }
}
