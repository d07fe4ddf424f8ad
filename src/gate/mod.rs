//! Locale router gate.
//!
//! Every navigation is matched against a language segment pattern and
//! resolved to one of three outcomes: redirect to the language selection
//! page, redirect to the language-prefixed path, or render with a
//! [`LocaleContext`].
//!
//! ```
//! use localized_router::gate::{GateConfig, GateOutcome, LocaleGate, Location};
//! use localized_router::i18n::LanguageRegistry;
//!
//! let config = GateConfig::builtin(LanguageRegistry::get(), &["en", "fr"], "en", "/languages")?;
//! let gate = LocaleGate::new(config);
//!
//! match gate.evaluate(&Location::parse("/about")) {
//!     GateOutcome::Canonicalize { to } => assert_eq!(to, "/en/about"),
//!     other => panic!("unexpected {other:?}"),
//! }
//! # Ok::<(), localized_router::gate::ConfigError>(())
//! ```

mod config;
mod context;
mod decision;
mod route_match;

pub use config::{
    ConfigError, GateConfig, DEFAULT_SELECTION_ROUTE, HEALTH_ROUTE, METRICS_ROUTE,
};
pub use context::LocaleContext;
pub use decision::{GateOutcome, LocaleGate};
pub use route_match::{is_language_segment, match_location, LanguageParam, Location, RouteMatch};
