use std::path::PathBuf;

use crate::error::{TagError, TagResult};

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_BIND: &str = "0.0.0.0";

/// How tasks are matched against the taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Tokenize and compare each token's lemma against keywords.
    Lemma,
    /// Tokenize only; tokens are compared verbatim, no lemma lookup.
    Tokens,
    /// Check keyword containment in the lowercased task text.
    Substring,
}

/// Runtime configuration, resolved from the environment once at startup.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Bind address for the HTTP listener.
    pub bind: String,
    /// Listener port. `PORT` keeps the name most deploy targets inject.
    pub port: u16,
    /// Matching strategy. `substring` disables the normalizer entirely.
    pub match_mode: MatchMode,
    /// Optional path to an external lemma dictionary (JSON map of
    /// inflected form to base form), merged over the built-in table.
    pub lemma_dict: Option<PathBuf>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig {
            bind: DEFAULT_BIND.to_string(),
            port: DEFAULT_PORT,
            match_mode: MatchMode::Lemma,
            lemma_dict: None,
        }
    }
}

impl ServiceConfig {
    /// Resolve configuration from the process environment.
    ///
    /// Unset variables fall back to defaults; a malformed `PORT` or
    /// `TASKTAG_MATCH_MODE` is a startup error rather than a silent default.
    pub fn from_env() -> TagResult<Self> {
        let mut config = ServiceConfig::default();

        if let Ok(port) = std::env::var("PORT") {
            config.port = port
                .parse()
                .map_err(|_| TagError::InvalidInput(format!("invalid PORT value: {port}")))?;
        }

        if let Ok(bind) = std::env::var("TASKTAG_BIND") {
            config.bind = bind;
        }

        if let Ok(mode) = std::env::var("TASKTAG_MATCH_MODE") {
            config.match_mode = match mode.to_lowercase().as_str() {
                "lemma" => MatchMode::Lemma,
                "tokens" => MatchMode::Tokens,
                "substring" => MatchMode::Substring,
                other => {
                    return Err(TagError::InvalidInput(format!(
                        "invalid TASKTAG_MATCH_MODE value: {other} (expected lemma, tokens, or substring)"
                    )))
                }
            };
        }

        if let Ok(path) = std::env::var("TASKTAG_LEMMA_DICT") {
            if !path.is_empty() {
                config.lemma_dict = Some(PathBuf::from(path));
            }
        }

        Ok(config)
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}
