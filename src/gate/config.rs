//! Validated, immutable gate configuration.

use crate::gate::context::LocaleContext;
use crate::gate::route_match::{is_language_segment, match_location, LanguageParam, Location};
use crate::i18n::{CatalogValidator, Language, LanguageError, LanguageRegistry, MessageCatalog};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, warn};

/// Default route of the language selection page.
pub const DEFAULT_SELECTION_ROUTE: &str = "/languages";

/// Configuration mistakes rejected at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("at least one supported language is required")]
    NoSupportedLanguages,

    #[error("unknown language code '{0}'")]
    UnknownLanguage(String),

    #[error("language '{0}' is disabled in the registry")]
    LanguageDisabled(String),

    #[error("language code '{0}' can never match a URL language segment")]
    UnroutableLanguage(String),

    #[error("default language '{0}' is not in the supported set")]
    DefaultNotSupported(String),

    #[error("no message catalog for supported language '{0}'")]
    MissingCatalog(String),

    #[error("invalid language selection route '{0}'")]
    InvalidSelectionRoute(String),
}

impl From<LanguageError> for ConfigError {
    fn from(err: LanguageError) -> Self {
        match err {
            LanguageError::Unknown(code) => ConfigError::UnknownLanguage(code),
            LanguageError::Disabled(code) => ConfigError::LanguageDisabled(code),
        }
    }
}

/// Route of the health check, served outside the gate.
pub const HEALTH_ROUTE: &str = "/health";

/// Route of the metrics report, served outside the gate.
pub const METRICS_ROUTE: &str = "/metrics";

/// A supported language together with its catalog.
#[derive(Debug, Clone)]
struct SupportedLanguage {
    language: Language,
    catalog: Arc<MessageCatalog>,
}

/// Static configuration of the locale gate.
///
/// Built once at startup and never mutated. Changing the supported set or
/// the catalogs means building a new `GateConfig`.
#[derive(Debug, Clone)]
pub struct GateConfig {
    supported: Vec<SupportedLanguage>,
    default_language: Language,
    selection_route: String,
}

impl GateConfig {
    /// Validate and build a configuration.
    ///
    /// `catalogs` must hold an entry for every supported code; extra entries
    /// are ignored.
    pub fn new(
        registry: &'static LanguageRegistry,
        supported: &[&str],
        default_language: &str,
        selection_route: &str,
        mut catalogs: HashMap<String, MessageCatalog>,
    ) -> Result<Self, ConfigError> {
        if supported.is_empty() {
            return Err(ConfigError::NoSupportedLanguages);
        }

        let mut languages: Vec<Language> = Vec::with_capacity(supported.len());
        for code in supported {
            let language = Language::from_registry(registry, code)?;
            if !is_language_segment(language.code()) {
                return Err(ConfigError::UnroutableLanguage(language.code().to_string()));
            }
            if !languages.contains(&language) {
                languages.push(language);
            }
        }

        let default = languages
            .iter()
            .copied()
            .find(|language| language.code() == default_language)
            .ok_or_else(|| ConfigError::DefaultNotSupported(default_language.to_string()))?;

        let mut entries = Vec::with_capacity(languages.len());
        for language in languages {
            let catalog = catalogs
                .remove(language.code())
                .ok_or_else(|| ConfigError::MissingCatalog(language.code().to_string()))?;
            entries.push(SupportedLanguage {
                language,
                catalog: Arc::new(catalog),
            });
        }

        validate_selection_route(selection_route)?;

        let config = Self {
            supported: entries,
            default_language: default,
            selection_route: selection_route.to_string(),
        };
        config.log_catalog_report();
        Ok(config)
    }

    /// Build a configuration using the catalogs that ship with the crate.
    pub fn builtin(
        registry: &'static LanguageRegistry,
        supported: &[&str],
        default_language: &str,
        selection_route: &str,
    ) -> Result<Self, ConfigError> {
        let catalogs = supported
            .iter()
            .filter_map(|code| MessageCatalog::builtin(code).map(|c| (code.to_string(), c)))
            .collect();
        Self::new(
            registry,
            supported,
            default_language,
            selection_route,
            catalogs,
        )
    }

    /// Supported languages, in configuration order.
    pub fn supported(&self) -> impl Iterator<Item = Language> + '_ {
        self.supported.iter().map(|entry| entry.language)
    }

    /// Locale context for a supported code, `None` when unsupported.
    pub fn locale(&self, code: &str) -> Option<LocaleContext> {
        self.supported
            .iter()
            .find(|entry| entry.language.code() == code)
            .map(|entry| LocaleContext::new(entry.language, Arc::clone(&entry.catalog)))
    }

    pub fn default_language(&self) -> Language {
        self.default_language
    }

    pub fn selection_route(&self) -> &str {
        &self.selection_route
    }

    /// Check every catalog against the default language's catalog and log
    /// what's wrong. Findings never fail startup.
    fn log_catalog_report(&self) {
        let Some(reference) = self
            .supported
            .iter()
            .find(|entry| entry.language == self.default_language)
        else {
            return;
        };

        for entry in &self.supported {
            if entry.language == self.default_language {
                continue;
            }
            let language = entry.language;
            let report = CatalogValidator::validate(&reference.catalog, &entry.catalog);
            if report.is_clean() {
                debug!("Catalog for {} is consistent", language);
                continue;
            }
            for problem in &report.errors {
                error!("Catalog {}: {}", language, problem);
            }
            for problem in &report.warnings {
                warn!("Catalog {}: {}", language, problem);
            }
        }
    }
}

/// The selection page is registered as a literal axum route next to the
/// ungated routes, so it must be a plain absolute path that neither the gate
/// nor another route already claims.
fn validate_selection_route(route: &str) -> Result<(), ConfigError> {
    let invalid = || ConfigError::InvalidSelectionRoute(route.to_string());

    if !route.starts_with('/') || route.contains(['?', '#']) {
        return Err(invalid());
    }
    if route.contains([':', '*', '{', '}']) {
        return Err(invalid());
    }
    if route == HEALTH_ROUTE || route == METRICS_ROUTE {
        return Err(invalid());
    }
    if let LanguageParam::Present(_) = match_location(&Location::parse(route)).language {
        return Err(invalid());
    }
    Ok(())
}
