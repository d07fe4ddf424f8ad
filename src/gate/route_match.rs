//! Path parsing and language segment extraction.

use regex::Regex;
use std::sync::OnceLock;

/// Shortest and longest language segment accepted.
const SEGMENT_LEN: std::ops::RangeInclusive<usize> = 2..=5;

static SEGMENT_REGEX: OnceLock<Regex> = OnceLock::new();

fn segment_regex() -> &'static Regex {
    SEGMENT_REGEX.get_or_init(|| {
        Regex::new(r"^[a-z]{2,3}(?:-[a-z]{1,2})?$").expect("segment pattern is valid")
    })
}

/// The current location as handed over by the navigation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Path component, always starting with `/`
    pub pathname: String,
    /// Query string including the leading `?`, or empty
    pub search: String,
    /// Fragment including the leading `#`, or empty
    pub hash: String,
    /// Navigation key from the history layer, when it provides one
    pub key: Option<String>,
}

impl Location {
    /// Split a full path (`/a/b?x=1#y`) into its parts.
    ///
    /// An empty pathname is normalized to `/`.
    pub fn parse(full: &str) -> Self {
        let (rest, hash) = match full.find('#') {
            Some(i) => full.split_at(i),
            None => (full, ""),
        };
        let (pathname, search) = match rest.find('?') {
            Some(i) => rest.split_at(i),
            None => (rest, ""),
        };
        let pathname = if pathname.is_empty() {
            "/".to_string()
        } else if pathname.starts_with('/') {
            pathname.to_string()
        } else {
            format!("/{pathname}")
        };

        Self {
            pathname,
            search: search.to_string(),
            hash: hash.to_string(),
            key: None,
        }
    }

    /// Attach the history layer's navigation key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Reassemble pathname, query, and fragment.
    pub fn href(&self) -> String {
        format!("{}{}{}", self.pathname, self.search, self.hash)
    }
}

/// Language parameter extracted from the first path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageParam {
    /// The first segment is language-shaped
    Present(String),
    /// No segment, or one that doesn't look like a language code
    Absent,
}

impl LanguageParam {
    pub fn as_deref(&self) -> Option<&str> {
        match self {
            LanguageParam::Present(code) => Some(code),
            LanguageParam::Absent => None,
        }
    }
}

/// Result of matching a location against the language segment pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub location: Location,
    pub language: LanguageParam,
    /// Pathname after the language segment (`/about`, `/`, or empty);
    /// the whole pathname when no language was extracted
    pub remainder: String,
}

/// True when `segment` has the shape of a routable language code:
/// 2 to 5 characters, a 2 or 3 letter lowercase primary subtag and an
/// optional `-` plus 1 or 2 letter subtag.
pub fn is_language_segment(segment: &str) -> bool {
    SEGMENT_LEN.contains(&segment.len()) && segment_regex().is_match(segment)
}

/// Match a location's first path segment against the language pattern.
pub fn match_location(location: &Location) -> RouteMatch {
    let path = location.pathname.strip_prefix('/').unwrap_or(&location.pathname);
    let (first, rest) = match path.find('/') {
        Some(i) => path.split_at(i),
        None => (path, ""),
    };

    let (language, remainder) = if is_language_segment(first) {
        (LanguageParam::Present(first.to_string()), rest.to_string())
    } else {
        (LanguageParam::Absent, location.pathname.clone())
    };

    RouteMatch {
        location: location.clone(),
        language,
        remainder,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Location Tests ====================

    #[test]
    fn test_parse_full_path() {
        let location = Location::parse("/fr/about?x=1#y");
        assert_eq!(location.pathname, "/fr/about");
        assert_eq!(location.search, "?x=1");
        assert_eq!(location.hash, "#y");
        assert_eq!(location.key, None);
    }

    #[test]
    fn test_parse_fragment_containing_question_mark() {
        let location = Location::parse("/en#a?b");
        assert_eq!(location.pathname, "/en");
        assert_eq!(location.search, "");
        assert_eq!(location.hash, "#a?b");
    }

    #[test]
    fn test_parse_empty_is_root() {
        assert_eq!(Location::parse("").pathname, "/");
        assert_eq!(Location::parse("?q=1").pathname, "/");
    }

    #[test]
    fn test_parse_adds_leading_slash() {
        assert_eq!(Location::parse("about").pathname, "/about");
    }

    #[test]
    fn test_href_round_trips() {
        let full = "/en/docs/intro?lang=x&y=2#section-3";
        assert_eq!(Location::parse(full).href(), full);
    }

    #[test]
    fn test_with_key() {
        let location = Location::parse("/en").with_key("k7");
        assert_eq!(location.key.as_deref(), Some("k7"));
    }

    // ==================== Segment Shape Tests ====================

    #[test]
    fn test_language_segments_accepted() {
        for segment in ["en", "fr", "fil", "pt-br", "zh-tw", "sr-l"] {
            assert!(is_language_segment(segment), "{segment}");
        }
    }

    #[test]
    fn test_malformed_segments_rejected() {
        for segment in [
            "", "e", "EN", "En", "e1", "12", "about", "home", "english", "abc-de", "-en", "en-",
            "en--", "en_us",
        ] {
            assert!(!is_language_segment(segment), "{segment}");
        }
    }

    // ==================== match_location Tests ====================

    #[test]
    fn test_match_with_language_and_rest() {
        let m = match_location(&Location::parse("/fr/about?x=1#y"));
        assert_eq!(m.language, LanguageParam::Present("fr".to_string()));
        assert_eq!(m.remainder, "/about");
        assert_eq!(m.location.search, "?x=1");
    }

    #[test]
    fn test_match_exact_language() {
        let m = match_location(&Location::parse("/en"));
        assert_eq!(m.language.as_deref(), Some("en"));
        assert_eq!(m.remainder, "");
    }

    #[test]
    fn test_match_language_with_trailing_slash() {
        let m = match_location(&Location::parse("/en/"));
        assert_eq!(m.language.as_deref(), Some("en"));
        assert_eq!(m.remainder, "/");
    }

    #[test]
    fn test_match_unsupported_but_well_formed() {
        let m = match_location(&Location::parse("/de/about"));
        assert_eq!(m.language.as_deref(), Some("de"));
    }

    #[test]
    fn test_match_absent_for_word_segment() {
        let m = match_location(&Location::parse("/about"));
        assert_eq!(m.language, LanguageParam::Absent);
        assert_eq!(m.remainder, "/about");
    }

    #[test]
    fn test_match_absent_for_root() {
        let m = match_location(&Location::parse("/"));
        assert_eq!(m.language, LanguageParam::Absent);
        assert_eq!(m.remainder, "/");
    }

    #[test]
    fn test_match_takes_whole_segment() {
        let m = match_location(&Location::parse("/enx/about"));
        assert_eq!(m.language.as_deref(), Some("enx"));
        let m = match_location(&Location::parse("/entry/about"));
        assert_eq!(m.language, LanguageParam::Absent);
    }
}
