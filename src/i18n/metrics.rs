//! Gate outcome metrics.
//!
//! Counts how navigations were resolved: rendered in place, redirected to a
//! canonical language-prefixed path, or sent to the language selection page.

use crate::gate::GateOutcome;
use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counters for locale gate outcomes.
///
/// Owned by the application state and shared across request tasks.
#[derive(Debug, Default)]
pub struct GateMetrics {
    /// Navigations rendered with a locale context
    renders: AtomicUsize,

    /// Navigations redirected to a language-prefixed path
    canonical_redirects: AtomicUsize,

    /// Navigations redirected to the language selection page
    selection_redirects: AtomicUsize,
}

impl GateMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record whichever outcome the gate produced.
    pub fn record(&self, outcome: &GateOutcome) {
        let counter = match outcome {
            GateOutcome::Render(_) => &self.renders,
            GateOutcome::Canonicalize { .. } => &self.canonical_redirects,
            GateOutcome::SelectLanguage { .. } => &self.selection_redirects,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Get the current render count.
    pub fn renders(&self) -> usize {
        self.renders.load(Ordering::Relaxed)
    }

    /// Get the current canonical redirect count.
    pub fn canonical_redirects(&self) -> usize {
        self.canonical_redirects.load(Ordering::Relaxed)
    }

    /// Get the current language selection redirect count.
    pub fn selection_redirects(&self) -> usize {
        self.selection_redirects.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let renders = self.renders();
        let canonical = self.canonical_redirects();
        let selection = self.selection_redirects();
        let total = renders + canonical + selection;
        let redirect_rate = if total > 0 {
            ((canonical + selection) as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            navigations: total,
            renders,
            canonical_redirects: canonical,
            selection_redirects: selection,
            redirect_rate,
        }
    }
}

/// Metrics report containing current gate statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    /// Total navigations evaluated
    pub navigations: usize,

    /// Navigations rendered in place
    pub renders: usize,

    /// Redirects that added a language prefix
    pub canonical_redirects: usize,

    /// Redirects to the language selection page
    pub selection_redirects: usize,

    /// Share of navigations that redirected, as a percentage (0-100)
    pub redirect_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::{GateConfig, LocaleGate, Location};
    use crate::i18n::LanguageRegistry;

    fn gate() -> LocaleGate {
        let config = GateConfig::builtin(LanguageRegistry::get(), &["en", "fr"], "en", "/languages")
            .expect("valid config");
        LocaleGate::new(config)
    }

    fn record(metrics: &GateMetrics, path: &str) {
        let outcome = gate().evaluate(&Location::parse(path));
        metrics.record(&outcome);
    }

    // ==================== Counter Tests ====================

    #[test]
    fn test_record_render() {
        let metrics = GateMetrics::new();
        record(&metrics, "/fr/about");
        assert_eq!(metrics.renders(), 1);
        assert_eq!(metrics.canonical_redirects(), 0);
    }

    #[test]
    fn test_record_canonical_redirect() {
        let metrics = GateMetrics::new();
        record(&metrics, "/about");
        record(&metrics, "/");
        assert_eq!(metrics.canonical_redirects(), 2);
    }

    #[test]
    fn test_record_selection_redirect() {
        let metrics = GateMetrics::new();
        record(&metrics, "/es/about");
        assert_eq!(metrics.selection_redirects(), 1);
    }

    // ==================== Report Tests ====================

    #[test]
    fn test_report_empty() {
        let report = GateMetrics::new().report();

        assert_eq!(report.navigations, 0);
        assert_eq!(report.redirect_rate, 0.0);
    }

    #[test]
    fn test_report_redirect_rate() {
        let metrics = GateMetrics::new();

        // 1 render, 2 canonical, 1 selection = 75% redirects
        record(&metrics, "/en");
        record(&metrics, "/about");
        record(&metrics, "/contact");
        record(&metrics, "/de");

        let report = metrics.report();
        assert_eq!(report.navigations, 4);
        assert_eq!(report.renders, 1);
        assert_eq!(report.canonical_redirects, 2);
        assert_eq!(report.selection_redirects, 1);
        assert_eq!(report.redirect_rate, 75.0);
    }

    #[test]
    fn test_report_serializes() {
        let metrics = GateMetrics::new();
        record(&metrics, "/en");

        let json = serde_json::to_value(metrics.report()).unwrap();
        assert_eq!(json["renders"], 1);
        assert_eq!(json["redirect_rate"], 0.0);
    }
}
