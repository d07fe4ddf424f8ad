//! Internationalization (i18n) module.
//!
//! Everything the gate needs to know about languages and their strings.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all known languages and their metadata
//! - `language`: Type-safe `Language`, a code validated against a registry
//! - `catalog`: Message catalogs (message key to localized string)
//! - `validator`: Catalog consistency checks run at startup
//! - `metrics`: Counters of gate outcomes
//!
//! # Example
//!
//! ```
//! use localized_router::i18n::{Language, LanguageRegistry, MessageCatalog};
//!
//! let default = LanguageRegistry::get().default_language().unwrap();
//! assert_eq!(default.code, "en");
//!
//! let french = Language::from_code("fr").unwrap();
//! let catalog = MessageCatalog::builtin(french.code()).unwrap();
//! assert_eq!(catalog.get("nav.home"), Some("Accueil"));
//! ```

mod catalog;
mod language;
mod metrics;
mod registry;
mod validator;

pub use catalog::MessageCatalog;
pub(crate) use catalog::fill_placeholders;
pub use language::{Language, LanguageError};
pub use metrics::{GateMetrics, MetricsReport};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use validator::{CatalogValidator, ValidationReport};
