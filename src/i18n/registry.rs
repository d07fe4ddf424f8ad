//! Registry of every language the application knows about.
//!
//! The built-in table lives behind a `OnceLock`; custom registries can be
//! built explicitly and leaked to `'static` for tests or embedding.

use std::sync::OnceLock;

/// One known language and its routing flags.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageConfig {
    /// Language code as it appears in URLs (e.g., "en", "pt-br")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Spanish", "French")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "Español", "Français")
    pub native_name: &'static str,

    /// Whether this is the default language (only one should be true)
    pub is_default: bool,

    /// Whether this language is enabled for use
    pub enabled: bool,
}

/// Known languages, immutable once built.
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// The built-in registry, initialized on first use.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry::new(default_languages()))
    }

    /// Build a registry from an explicit language table.
    pub fn new(languages: Vec<LanguageConfig>) -> Self {
        Self { languages }
    }

    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all enabled languages, in table order.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// Get the default language configuration.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if exactly one entry is marked as default
    /// * `None` if there is no default entry or more than one
    pub fn default_language(&self) -> Option<&LanguageConfig> {
        let mut defaults = self.languages.iter().filter(|lang| lang.is_default);

        match (defaults.next(), defaults.next()) {
            (Some(config), None) => Some(config),
            _ => None,
        }
    }
}

/// Default language configurations.
///
/// English is the default; German is listed but disabled until its
/// catalog is translated.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_default: true,
            enabled: true,
        },
        LanguageConfig {
            code: "es",
            name: "Spanish",
            native_name: "Español",
            is_default: false,
            enabled: true,
        },
        LanguageConfig {
            code: "fr",
            name: "French",
            native_name: "Français",
            is_default: false,
            enabled: true,
        },
        LanguageConfig {
            code: "de",
            name: "German",
            native_name: "Deutsch",
            is_default: false,
            enabled: false,
        },
    ]
}
