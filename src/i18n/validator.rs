//! Catalog consistency validation.
//!
//! Checks a translated catalog against the default language's catalog so
//! that missing keys and broken placeholders show up at startup instead of
//! as raw keys or unfilled `{name}` markers on a rendered page.

use crate::i18n::MessageCatalog;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Issues that will render incorrectly (placeholder mismatches)
    pub errors: Vec<String>,

    /// Issues that degrade gracefully (missing or extra keys)
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for catalog consistency.
pub struct CatalogValidator;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl CatalogValidator {
    /// Validate `candidate` against the `reference` catalog.
    ///
    /// - keys present in the reference but missing from the candidate are warnings
    /// - keys present only in the candidate are warnings
    /// - a shared key whose placeholder sets differ is an error
    pub fn validate(reference: &MessageCatalog, candidate: &MessageCatalog) -> ValidationReport {
        let mut report = ValidationReport::new();

        for key in reference.keys() {
            let Some(reference_text) = reference.get(key) else {
                continue;
            };
            match candidate.get(key) {
                None => report.warnings.push(format!("Missing key: {key}")),
                Some(candidate_text) => {
                    let expected = Self::extract_placeholders(reference_text);
                    let actual = Self::extract_placeholders(candidate_text);
                    if expected != actual {
                        report.errors.push(format!(
                            "Placeholder mismatch for {key}: expected {expected:?}, found {actual:?}"
                        ));
                    }
                }
            }
        }

        for key in candidate.keys() {
            if reference.get(key).is_none() {
                report.warnings.push(format!("Unknown key: {key}"));
            }
        }

        report
    }

    /// Extract the set of `{name}` placeholders from a message
    fn extract_placeholders(text: &str) -> BTreeSet<String> {
        let regex = PLACEHOLDER_REGEX.get_or_init(|| {
            Regex::new(r"\{([a-z_][a-z0-9_]*)\}").expect("placeholder pattern is valid")
        });

        regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }
}
