//! Error types for pagewise
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for pagewise
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid limit {limit}, expected one of {options:?}")]
    InvalidLimit { limit: usize, options: Vec<usize> },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Engine Errors
    // ============================================================================
    #[error("Sort failed: {message}")]
    Sort { message: String },

    #[error("Search failed: {message}")]
    Search { message: String },

    // ============================================================================
    // Collaborator Errors
    // ============================================================================
    #[error("Render failed: {message}")]
    Render { message: String },

    #[error("Navigation render failed: {message}")]
    Navigation { message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a sort error
    pub fn sort(message: impl Into<String>) -> Self {
        Self::Sort {
            message: message.into(),
        }
    }

    /// Create a search error
    pub fn search(message: impl Into<String>) -> Self {
        Self::Search {
            message: message.into(),
        }
    }

    /// Create a render error
    pub fn render(message: impl Into<String>) -> Self {
        Self::Render {
            message: message.into(),
        }
    }

    /// Create a navigation render error
    pub fn navigation(message: impl Into<String>) -> Self {
        Self::Navigation {
            message: message.into(),
        }
    }

    /// Create an invalid limit error
    pub fn invalid_limit(limit: usize, options: &[usize]) -> Self {
        Self::InvalidLimit {
            limit,
            options: options.to_vec(),
        }
    }

    /// Check if this error came from a render collaborator.
    ///
    /// State mutated before the callback ran is kept when this is true.
    pub fn is_render_failure(&self) -> bool {
        matches!(self, Error::Render { .. } | Error::Navigation { .. })
    }
}

/// Result type alias for pagewise
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
