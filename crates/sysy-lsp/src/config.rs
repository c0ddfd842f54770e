use serde::Deserialize;
use serde_json::Value;
use sysy_ide::DEFAULT_HOVER_MAX_LENGTH;

/// Server behaviour, read from `initializationOptions`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServerConfig {
    /// Bytes of declaration text shown on hover before it is cut off.
    pub hover_max_length: usize,
    /// Offer keywords alongside symbols in completion.
    pub keyword_completion: bool,
    /// Publish semantic diagnostics, not just syntax errors.
    pub semantic_diagnostics: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            hover_max_length: DEFAULT_HOVER_MAX_LENGTH,
            keyword_completion: true,
            semantic_diagnostics: true,
        }
    }
}

impl ServerConfig {
    /// Missing options give the defaults; malformed ones are logged and ignored.
    pub fn from_initialization_options(options: Option<Value>) -> Self {
        let Some(options) = options.filter(|v| !v.is_null()) else {
            return Self::default();
        };
        match serde_json::from_value(options) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(%err, "ignoring malformed initializationOptions");
                Self::default()
            }
        }
    }
}
