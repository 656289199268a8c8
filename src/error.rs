//! Load Errors
//!
//! Failures while parsing the embedded catalog and site config.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to parse catalog: {0}")]
    Catalog(#[source] serde_json::Error),

    #[error("failed to parse site config: {0}")]
    Config(#[source] serde_json::Error),

    #[error("duplicate item id in catalog: {0}")]
    DuplicateItemId(String),

    #[error("item \"{title}\" has an empty id")]
    EmptyItemId { title: String },
}
