//! Error types

use thiserror::Error;

/// A raw integer that does not name a state of the given flag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("{flag} must be one of {allowed}, got {value}")]
    OutOfRange {
        flag: &'static str,
        allowed: &'static str,
        value: u8,
    },
}

/// Errors from loading a [`TreeNodeConfig`](crate::TreeNodeConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("prefix_cls must not be empty")]
    EmptyPrefix,
}
