pub mod server;

pub mod config;
pub mod error;
pub mod nlp;
pub mod tagger;
pub mod taxonomy;

pub use crate::config::ServiceConfig;
pub use crate::error::{TagError, TagResult};
pub use crate::tagger::{Tagger, OTHER_CATEGORY};
pub use crate::taxonomy::{Category, Taxonomy};
