//! Text normalization: tokenization and lemma lookup.

pub mod lemmatizer;
pub mod pipeline;
pub mod tokenizer;

pub use lemmatizer::Lemmatizer;
pub use pipeline::{Analyze, LemmaPipeline, Normalizer, PlainTokenizer, Token};
pub use tokenizer::tokenize;
