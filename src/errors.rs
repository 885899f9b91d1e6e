// Copyright 2025 Cowboy AI, LLC.

//! Error types for vocabulary operations

use thiserror::Error;

/// Errors that can occur while building a visual vocabulary
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VocabularyError {
    /// A key fell outside the closed vocabulary of one of the catalogs
    #[error("Unknown {catalog} key: {key}")]
    UnknownKey {
        /// Name of the catalog that rejected the key
        catalog: &'static str,
        /// The offending key as supplied by the caller
        key: String,
    },
}

/// Result type for vocabulary operations
pub type VocabularyResult<T> = Result<T, VocabularyError>;

impl VocabularyError {
    /// Create an unknown-key error for the given catalog
    pub fn unknown_key(catalog: &'static str, key: impl Into<String>) -> Self {
        VocabularyError::UnknownKey {
            catalog,
            key: key.into(),
        }
    }

    /// Name of the catalog this error refers to
    pub fn catalog(&self) -> &'static str {
        match self {
            VocabularyError::UnknownKey { catalog, .. } => catalog,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_key_names_catalog_and_value() {
        let err = VocabularyError::unknown_key("varietal", "syrah_shiraz_typo");
        assert_eq!(err.catalog(), "varietal");
        assert_eq!(err.to_string(), "Unknown varietal key: syrah_shiraz_typo");
    }
}
