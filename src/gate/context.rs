//! The locale context handed to rendered content.

use crate::i18n::{fill_placeholders, Language, MessageCatalog};
use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;
use std::sync::Arc;
use tracing::{debug, error};

/// Resolved language plus its message catalog.
///
/// Only the gate constructs these, and only for a language that is both
/// supported and present in the URL, so the pair is always consistent.
#[derive(Debug, Clone)]
pub struct LocaleContext {
    language: Language,
    catalog: Arc<MessageCatalog>,
}

impl LocaleContext {
    pub(crate) fn new(language: Language, catalog: Arc<MessageCatalog>) -> Self {
        Self { language, catalog }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn code(&self) -> &'static str {
        self.language.code()
    }

    pub fn catalog(&self) -> &MessageCatalog {
        &self.catalog
    }

    /// Translate `key`, falling back to the key itself when the catalog has
    /// no entry for it.
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        match self.catalog.get(key) {
            Some(text) => text,
            None => {
                debug!("Missing message '{}' for {}", key, self.language);
                key
            }
        }
    }

    /// Translate `key` and fill `{name}` placeholders.
    pub fn format(&self, key: &str, args: &[(&str, &str)]) -> String {
        fill_placeholders(self.t(key), args)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for LocaleContext
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<LocaleContext>().cloned().ok_or_else(|| {
            error!("LocaleContext requested on a route outside the locale gate");
            StatusCode::INTERNAL_SERVER_ERROR
        })
    }
}
