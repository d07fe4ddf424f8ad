use crate::gate::{ConfigError, GateConfig, DEFAULT_SELECTION_ROUTE};
use crate::i18n::LanguageRegistry;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,

    // Locale gate
    pub default_language: String,
    pub supported_languages: Vec<String>,
    pub language_selection_path: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let registry = LanguageRegistry::get();

        Ok(Self {
            // Server
            port: match std::env::var("PORT") {
                Ok(value) => value
                    .trim()
                    .parse()
                    .with_context(|| format!("PORT is not a valid port: {value}"))?,
                Err(_) => 8080,
            },

            // Locale gate - defaults come from the language registry
            default_language: match std::env::var("DEFAULT_LANGUAGE") {
                Ok(value) => value.trim().to_string(),
                Err(_) => registry
                    .default_language()
                    .map(|lang| lang.code.to_string())
                    .context("language registry has no single default language")?,
            },
            supported_languages: std::env::var("SUPPORTED_LANGUAGES")
                .map(|value| parse_list(&value))
                .unwrap_or_else(|_| {
                    registry
                        .list_enabled()
                        .iter()
                        .map(|lang| lang.code.to_string())
                        .collect()
                }),
            language_selection_path: std::env::var("LANGUAGE_SELECTION_PATH")
                .unwrap_or_else(|_| DEFAULT_SELECTION_ROUTE.to_string()),
        })
    }

    /// Validate the locale settings into a gate configuration using the
    /// built-in catalogs.
    pub fn gate_config(&self) -> std::result::Result<GateConfig, ConfigError> {
        let supported: Vec<&str> = self.supported_languages.iter().map(String::as_str).collect();
        GateConfig::builtin(
            LanguageRegistry::get(),
            &supported,
            &self.default_language,
            &self.language_selection_path,
        )
    }
}

/// Split a comma-separated list, dropping blanks.
fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 4] = [
        "PORT",
        "DEFAULT_LANGUAGE",
        "SUPPORTED_LANGUAGES",
        "LANGUAGE_SELECTION_PATH",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn test_parse_list() {
        assert_eq!(parse_list("en, fr,,es "), vec!["en", "fr", "es"]);
        assert!(parse_list(" , ").is_empty());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        let config = Config::from_env().unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.default_language, "en");
        assert_eq!(config.supported_languages, vec!["en", "es", "fr"]);
        assert_eq!(config.language_selection_path, "/languages");
        assert!(config.gate_config().is_ok());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("PORT", "3000");
        std::env::set_var("DEFAULT_LANGUAGE", "fr");
        std::env::set_var("SUPPORTED_LANGUAGES", "fr,en");
        std::env::set_var("LANGUAGE_SELECTION_PATH", "/choose");

        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.port, 3000);
        let gate = config.gate_config().unwrap();
        assert_eq!(gate.default_language().code(), "fr");
        assert_eq!(gate.supported().count(), 2);
        assert_eq!(gate.selection_route(), "/choose");
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_port() {
        clear_env();
        std::env::set_var("PORT", "eighty");

        let err = Config::from_env().unwrap_err();
        clear_env();

        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    #[serial]
    fn test_gate_config_rejects_default_outside_set() {
        clear_env();
        std::env::set_var("DEFAULT_LANGUAGE", "es");
        std::env::set_var("SUPPORTED_LANGUAGES", "en,fr");

        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(
            config.gate_config().unwrap_err(),
            ConfigError::DefaultNotSupported("es".to_string())
        );
    }
}
