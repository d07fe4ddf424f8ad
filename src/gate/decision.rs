//! The locale gate: decides between redirecting and rendering.

use crate::gate::config::GateConfig;
use crate::gate::context::LocaleContext;
use crate::gate::route_match::{match_location, LanguageParam, Location};
use crate::navigation::{NavigationMode, Navigator};
use std::sync::Arc;
use tracing::{debug, info};

/// What the gate decided for one navigation.
#[derive(Debug, Clone)]
pub enum GateOutcome {
    /// The language is unsupported: go to the language selection page.
    SelectLanguage { to: String },
    /// The language is supported but missing from the path: prefix it.
    Canonicalize { to: String },
    /// The path is canonical: render with this context.
    Render(LocaleContext),
}

impl GateOutcome {
    /// Redirect target and history mode, or `None` for a render.
    pub fn redirect(&self) -> Option<(&str, NavigationMode)> {
        match self {
            GateOutcome::SelectLanguage { to } => Some((to, NavigationMode::Push)),
            GateOutcome::Canonicalize { to } => Some((to, NavigationMode::Replace)),
            GateOutcome::Render(_) => None,
        }
    }

    pub fn is_render(&self) -> bool {
        matches!(self, GateOutcome::Render(_))
    }
}

/// Gate in front of everything that renders localized content.
///
/// Cheap to clone; the configuration is shared.
#[derive(Debug, Clone)]
pub struct LocaleGate {
    config: Arc<GateConfig>,
}

impl LocaleGate {
    pub fn new(config: GateConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Decide what to do with `location`. Pure; no side effects.
    ///
    /// Rules, first match wins:
    /// 1. the candidate is the path's language segment, or the default language
    /// 2. an unsupported candidate goes to the selection page
    /// 3. a path that doesn't start with `/<candidate>` gets it prepended
    /// 4. otherwise render with the candidate's catalog
    pub fn evaluate(&self, location: &Location) -> GateOutcome {
        let route = match_location(location);
        let candidate = match &route.language {
            LanguageParam::Present(code) => code.as_str(),
            LanguageParam::Absent => self.config.default_language().code(),
        };

        let Some(context) = self.config.locale(candidate) else {
            debug!("Unsupported language '{}' in {}", candidate, location.pathname);
            return GateOutcome::SelectLanguage {
                to: self.config.selection_route().to_string(),
            };
        };

        let prefix = format!("/{}", context.code());
        let pathname = &location.pathname;
        if pathname != &prefix && !pathname.starts_with(&format!("{prefix}/")) {
            let to = format!("{prefix}{pathname}{}{}", location.search, location.hash);
            debug!("Canonicalizing {} to {}", pathname, to);
            return GateOutcome::Canonicalize { to };
        }

        GateOutcome::Render(context)
    }

    /// Evaluate `location` and carry out any redirect through `navigator`.
    ///
    /// Returns the locale context when the content may render.
    pub fn on_navigate(
        &self,
        location: &Location,
        navigator: &dyn Navigator,
    ) -> Option<LocaleContext> {
        match self.evaluate(location) {
            GateOutcome::Render(context) => Some(context),
            outcome => {
                if let Some((to, mode)) = outcome.redirect() {
                    info!("Redirecting {} to {} ({:?})", location.href(), to, mode);
                    navigator.navigate(to, mode);
                }
                None
            }
        }
    }
}
