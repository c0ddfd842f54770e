//! Program text from a file, stdin or the command line.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("cannot use both --source and positional SOURCE")]
    Conflict,

    #[error("source required (positional or --source)")]
    Missing,

    #[error("cannot read {path}: {error}")]
    Read { path: String, error: io::Error },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceInput {
    path: Option<PathBuf>,
    text: Option<String>,
}

/// Loaded program text and the name used for it in diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub name: String,
    pub text: String,
}

impl SourceInput {
    pub fn new(path: Option<PathBuf>, text: Option<String>) -> Self {
        Self { path, text }
    }

    pub fn load(&self) -> Result<Source, SourceError> {
        self.load_from(io::stdin().lock())
    }

    /// Like [`load`](Self::load), reading `-` from `stdin`.
    pub fn load_from(&self, mut stdin: impl Read) -> Result<Source, SourceError> {
        match (&self.text, &self.path) {
            (Some(_), Some(_)) => Err(SourceError::Conflict),
            (None, None) => Err(SourceError::Missing),
            (Some(text), None) => Ok(Source {
                name: "<inline>".to_owned(),
                text: text.clone(),
            }),
            (None, Some(path)) if is_stdin(path) => {
                let mut text = String::new();
                stdin
                    .read_to_string(&mut text)
                    .map_err(|error| SourceError::Read {
                        path: "<stdin>".to_owned(),
                        error,
                    })?;
                Ok(Source {
                    name: "<stdin>".to_owned(),
                    text,
                })
            }
            (None, Some(path)) => {
                let name = path.display().to_string();
                match fs::read_to_string(path) {
                    Ok(text) => Ok(Source { name, text }),
                    Err(error) => Err(SourceError::Read { path: name, error }),
                }
            }
        }
    }
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}
