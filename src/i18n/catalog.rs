//! Message catalogs: localized user-facing strings, keyed by message id.
//!
//! Strings are stored raw. Placeholders use `{name}` and are filled in by
//! [`MessageCatalog::format`].

use serde::Serialize;
use std::collections::BTreeMap;

/// Localized strings for one language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MessageCatalog {
    entries: BTreeMap<&'static str, &'static str>,
}

impl MessageCatalog {
    /// Build a catalog from a static key/string table.
    pub fn from_entries(entries: &[(&'static str, &'static str)]) -> Self {
        Self {
            entries: entries.iter().copied().collect(),
        }
    }

    /// Built-in catalog for a language code, if one ships with the crate.
    pub fn builtin(code: &str) -> Option<Self> {
        let table = match code {
            "en" => ENGLISH_MESSAGES,
            "es" => SPANISH_MESSAGES,
            "fr" => FRENCH_MESSAGES,
            _ => return None,
        };
        Some(Self::from_entries(table))
    }

    /// Look up a message by key.
    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.entries.get(key).copied()
    }

    /// Look up a message and substitute `{name}` placeholders.
    ///
    /// Placeholders without a matching argument are left untouched.
    pub fn format(&self, key: &str, args: &[(&str, &str)]) -> Option<String> {
        let template = self.get(key)?;
        Some(fill_placeholders(template, args))
    }

    /// Message keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub(crate) fn fill_placeholders(template: &str, args: &[(&str, &str)]) -> String {
    args.iter().fold(template.to_string(), |text, (name, value)| {
        text.replace(&format!("{{{name}}}"), value)
    })
}

// ==================== English Messages ====================

/// English messages (default language)
pub const ENGLISH_MESSAGES: &[(&str, &str)] = &[
    ("app.title", "Localized Router"),
    ("nav.home", "Home"),
    ("nav.about", "About"),
    ("nav.languages", "Change language"),
    ("home.heading", "Welcome"),
    ("home.body", "You are browsing in {language}."),
    ("about.heading", "About"),
    (
        "about.body",
        "Every page lives under a language prefix such as /en or /fr.",
    ),
    ("not_found.heading", "Page not found"),
    ("not_found.body", "There is nothing at {path}."),
];

// ==================== Spanish Messages ====================

/// Spanish messages
pub const SPANISH_MESSAGES: &[(&str, &str)] = &[
    ("app.title", "Enrutador Localizado"),
    ("nav.home", "Inicio"),
    ("nav.about", "Acerca de"),
    ("nav.languages", "Cambiar idioma"),
    ("home.heading", "Bienvenido"),
    ("home.body", "Estás navegando en {language}."),
    ("about.heading", "Acerca de"),
    (
        "about.body",
        "Cada página vive bajo un prefijo de idioma como /en o /es.",
    ),
    ("not_found.heading", "Página no encontrada"),
    ("not_found.body", "No hay nada en {path}."),
];

// ==================== French Messages ====================

/// French messages
pub const FRENCH_MESSAGES: &[(&str, &str)] = &[
    ("app.title", "Routeur Localisé"),
    ("nav.home", "Accueil"),
    ("nav.about", "À propos"),
    ("nav.languages", "Changer de langue"),
    ("home.heading", "Bienvenue"),
    ("home.body", "Vous naviguez en {language}."),
    ("about.heading", "À propos"),
    (
        "about.body",
        "Chaque page se trouve sous un préfixe de langue comme /en ou /fr.",
    ),
    ("not_found.heading", "Page introuvable"),
    ("not_found.body", "Il n'y a rien à {path}."),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalogs_exist() {
        assert!(MessageCatalog::builtin("en").is_some());
        assert!(MessageCatalog::builtin("es").is_some());
        assert!(MessageCatalog::builtin("fr").is_some());
        assert!(MessageCatalog::builtin("de").is_none());
    }

    #[test]
    fn test_builtin_catalogs_share_keys() {
        let english: Vec<_> = MessageCatalog::builtin("en").unwrap().keys().collect();
        for code in ["es", "fr"] {
            let other: Vec<_> = MessageCatalog::builtin(code).unwrap().keys().collect();
            assert_eq!(english, other, "key mismatch for {code}");
        }
    }

    #[test]
    fn test_get_existing_and_missing() {
        let catalog = MessageCatalog::builtin("fr").unwrap();
        assert_eq!(catalog.get("nav.home"), Some("Accueil"));
        assert_eq!(catalog.get("nav.missing"), None);
    }

    #[test]
    fn test_format_substitutes_placeholder() {
        let catalog = MessageCatalog::builtin("es").unwrap();
        let text = catalog.format("home.body", &[("language", "Español")]);
        assert_eq!(text.as_deref(), Some("Estás navegando en Español."));
    }

    #[test]
    fn test_format_leaves_unknown_placeholder() {
        let catalog = MessageCatalog::builtin("en").unwrap();
        let text = catalog.format("not_found.body", &[("other", "x")]);
        assert_eq!(text.as_deref(), Some("There is nothing at {path}."));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = MessageCatalog::default();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert_eq!(catalog.get("app.title"), None);
    }

    #[test]
    fn test_serializes_as_flat_object() {
        let catalog = MessageCatalog::from_entries(&[("b", "2"), ("a", "1")]);
        let json = serde_json::to_string(&catalog).unwrap();
        assert_eq!(json, r#"{"a":"1","b":"2"}"#);
    }
}
