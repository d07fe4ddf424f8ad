//! Language-prefixed URL gate.
//!
//! Every path is expected to start with a supported language code
//! (`/en/about`). Paths without one are redirected to the default
//! language's prefix, paths with an unsupported one go to the language
//! selection page, and everything else renders with a
//! [`gate::LocaleContext`] holding the language and its messages.

pub mod config;
pub mod gate;
pub mod i18n;
pub mod navigation;
pub mod server;
