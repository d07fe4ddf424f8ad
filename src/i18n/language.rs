//! Language type: a code validated against a registry.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use thiserror::Error;

/// Why a code could not become a [`Language`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LanguageError {
    #[error("Unknown language code: '{0}'")]
    Unknown(String),

    #[error("Language '{0}' is not enabled")]
    Disabled(String),
}

/// A validated language.
///
/// Only codes that exist in a registry and are enabled there can be turned
/// into a `Language`, so holding one means the code is safe to route on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    config: &'static LanguageConfig,
}

impl Language {
    /// Create a Language from a code, checked against the global registry.
    ///
    /// # Example
    /// ```
    /// use localized_router::i18n::Language;
    ///
    /// let french = Language::from_code("fr").unwrap();
    /// assert_eq!(french.native_name(), "Français");
    /// ```
    pub fn from_code(code: &str) -> Result<Language, LanguageError> {
        Self::from_registry(LanguageRegistry::get(), code)
    }

    /// Create a Language from a code, checked against a specific registry.
    pub fn from_registry(
        registry: &'static LanguageRegistry,
        code: &str,
    ) -> Result<Language, LanguageError> {
        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Language { config }),
            Some(_) => Err(LanguageError::Disabled(code.to_string())),
            None => Err(LanguageError::Unknown(code.to_string())),
        }
    }

    /// The code as it appears in URLs (e.g., "en", "pt-br").
    pub fn code(&self) -> &'static str {
        self.config.code
    }

    /// English name of the language (e.g., "English", "Spanish").
    pub fn name(&self) -> &'static str {
        self.config.name
    }

    /// Native name of the language (e.g., "English", "Español").
    pub fn native_name(&self) -> &'static str {
        self.config.native_name
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
