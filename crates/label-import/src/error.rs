//! Error types for label extraction and import.

use thiserror::Error;

use crate::category::Category;

/// Boxed error returned by a [`LabelClient`](crate::client::LabelClient).
pub type ClientError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised while building or importing labels.
#[derive(Debug, Error)]
pub enum LabelError {
    /// No label of this category was ever added to the set
    #[error("No {0} label recorded")]
    MissingCategory(Category),

    /// The target client failed to create a label
    #[error("Failed to create label '{title}': {source}")]
    Client {
        title: String,
        #[source]
        source: ClientError,
    },
}

/// Errors raised while loading ticket records.
#[derive(Debug, Error)]
pub enum RecordError {
    /// Reading the ticket dump failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The ticket dump is not valid JSON or has the wrong shape
    #[error("Malformed ticket data: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Errors in pipeline configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A category name that is not one of the known categories
    #[error("Unknown label category: {0}")]
    UnknownCategory(String),

    /// An environment variable holds bytes that are not valid UTF-8
    #[error("{0} is not valid UTF-8")]
    NotUnicode(&'static str),
}
