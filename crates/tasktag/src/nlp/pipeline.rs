use std::sync::Arc;

use tracing::warn;

use crate::config::{MatchMode, ServiceConfig};
use crate::nlp::lemmatizer::Lemmatizer;
use crate::nlp::tokenizer::tokenize;

/// A single normalized word with its base form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    text: String,
    lemma: String,
}

impl Token {
    pub fn new(text: String, lemma: String) -> Self {
        Token { text, lemma }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn lemma(&self) -> &str {
        &self.lemma
    }
}

/// Capability contract for linguistic normalizers: ordered tokens, each
/// exposing a lemma accessor. Satisfied by the full lemma pipeline and by
/// the naive pass-through tokenizer alike.
pub trait Analyze: Send + Sync {
    fn analyze(&self, text: &str) -> Vec<Token>;
}

/// Tokenizer plus lemma lookup.
pub struct LemmaPipeline {
    lemmatizer: Lemmatizer,
}

impl LemmaPipeline {
    pub fn new(lemmatizer: Lemmatizer) -> Self {
        LemmaPipeline { lemmatizer }
    }
}

impl Analyze for LemmaPipeline {
    fn analyze(&self, text: &str) -> Vec<Token> {
        tokenize(text)
            .into_iter()
            .map(|word| {
                let lemma = self.lemmatizer.lemma(&word);
                Token::new(word, lemma)
            })
            .collect()
    }
}

/// Pass-through tokenizer: every token is its own lemma.
pub struct PlainTokenizer;

impl Analyze for PlainTokenizer {
    fn analyze(&self, text: &str) -> Vec<Token> {
        tokenize(text)
            .into_iter()
            .map(|word| Token::new(word.clone(), word))
            .collect()
    }
}

/// Normalizer availability, decided once at startup.
///
/// `Unavailable` switches the tagger to substring matching; it is a
/// configuration outcome, never a user-visible error.
#[derive(Clone)]
pub enum Normalizer {
    Available(Arc<dyn Analyze>),
    Unavailable,
}

impl Normalizer {
    /// Resolve the normalizer from configuration.
    ///
    /// Chain: external lemma dictionary if configured and loadable, else the
    /// built-in lemma table, else (mode `tokens`) the pass-through tokenizer,
    /// else (mode `substring`) no normalizer at all.
    pub fn load(config: &ServiceConfig) -> Self {
        match config.match_mode {
            MatchMode::Lemma => {
                let lemmatizer = match &config.lemma_dict {
                    Some(path) => Lemmatizer::load(path).unwrap_or_else(|error| {
                        warn!(%error, "lemma dictionary unusable, using built-in table");
                        Lemmatizer::builtin()
                    }),
                    None => Lemmatizer::builtin(),
                };
                Normalizer::Available(Arc::new(LemmaPipeline::new(lemmatizer)))
            }
            MatchMode::Tokens => Normalizer::Available(Arc::new(PlainTokenizer)),
            MatchMode::Substring => Normalizer::Unavailable,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Normalizer::Available(_))
    }
}
