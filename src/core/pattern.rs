//! URI patterns for routing and discovery
//!
//! A pattern is an ordered sequence of segments matched pairwise against an
//! inbound URI path. Literal segments must be equal to the path segment;
//! variable segments match any single segment and capture it under the
//! variable's name. A pattern containing at least one variable segment is
//! "templated" and describes a family of resources rather than a single one.

use std::collections::HashMap;
use std::fmt;

/// One segment of a URI pattern
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PatternSegment {
    /// Matches a path segment with exactly this text
    Literal(String),

    /// Matches any single path segment and binds it under the given name
    Variable(String),
}

impl PatternSegment {
    /// Convenience constructor for a literal segment
    pub fn literal(text: impl Into<String>) -> Self {
        PatternSegment::Literal(text.into())
    }

    /// Convenience constructor for a variable segment
    pub fn variable(name: impl Into<String>) -> Self {
        PatternSegment::Variable(name.into())
    }
}

/// Variable bindings produced by a successful match
///
/// Keys are variable names, values are the path segments they matched.
/// Iteration order carries no meaning; callers must not depend on it.
pub type Bindings = HashMap<String, String>;

/// An ordered sequence of pattern segments
///
/// Patterns are constructed once at registration time and never mutated.
/// Well-formedness (unique variable names within one pattern) is the
/// registering handler's responsibility and is not validated here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    segments: Vec<PatternSegment>,
}

impl Pattern {
    /// Create a pattern from a sequence of segments
    pub fn new(segments: Vec<PatternSegment>) -> Self {
        Self { segments }
    }

    /// Parse a pattern from its textual form
    ///
    /// Segments are slash-separated; a segment wrapped in braces becomes a
    /// variable, anything else a literal. Leading and trailing slashes are
    /// tolerated. No URI syntax validation is performed.
    ///
    /// `"sensors/{id}"` parses to `[Literal("sensors"), Variable("id")]`.
    pub fn parse(text: &str) -> Self {
        let segments = text
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| {
                if s.len() >= 2 && s.starts_with('{') && s.ends_with('}') {
                    PatternSegment::Variable(s[1..s.len() - 1].to_string())
                } else {
                    PatternSegment::Literal(s.to_string())
                }
            })
            .collect();
        Self { segments }
    }

    /// The fixed pattern of the discovery resource itself
    pub fn well_known_core() -> Self {
        Self::new(vec![
            PatternSegment::literal(".well-known"),
            PatternSegment::literal("core"),
        ])
    }

    /// The segments of this pattern, in order
    pub fn segments(&self) -> &[PatternSegment] {
        &self.segments
    }

    /// True iff the pattern contains at least one variable segment
    ///
    /// False for the empty pattern and for all-literal patterns.
    pub fn is_templated(&self) -> bool {
        self.segments
            .iter()
            .any(|s| matches!(s, PatternSegment::Variable(_)))
    }

    /// Match this pattern against a URI path
    ///
    /// Lengths must match exactly: there is no prefix, suffix, or
    /// wildcard-remainder matching. The empty pattern matches only the
    /// empty path. Returns the variable bindings on success.
    pub fn matches(&self, path: &[String]) -> Option<Bindings> {
        if self.segments.len() != path.len() {
            return None;
        }

        let mut bindings = Bindings::new();
        for (segment, value) in self.segments.iter().zip(path.iter()) {
            match segment {
                PatternSegment::Literal(text) => {
                    if text != value {
                        return None;
                    }
                }
                PatternSegment::Variable(name) => {
                    bindings.insert(name.clone(), value.clone());
                }
            }
        }
        Some(bindings)
    }

    /// The concrete URI this pattern names, if it is not templated
    ///
    /// Returns `None` for templated patterns; their concrete URIs come from
    /// the owning handler's expansion instead.
    pub fn concrete_uri(&self) -> Option<String> {
        let mut parts = Vec::with_capacity(self.segments.len());
        for segment in &self.segments {
            match segment {
                PatternSegment::Literal(text) => parts.push(text.as_str()),
                PatternSegment::Variable(_) => return None,
            }
        }
        Some(parts.join("/"))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .segments
            .iter()
            .map(|s| match s {
                PatternSegment::Literal(text) => text.clone(),
                PatternSegment::Variable(name) => format!("{{{}}}", name),
            })
            .collect();
        write!(f, "{}", parts.join("/"))
    }
}

/// Split a slash-separated URI path into its segments
///
/// Empty segments (from leading, trailing, or doubled slashes) are dropped.
pub fn split_path(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(segments: &[&str]) -> Vec<String> {
        segments.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_is_templated_empty_pattern() {
        assert!(!Pattern::new(vec![]).is_templated());
    }

    #[test]
    fn test_is_templated_all_literals() {
        let pattern = Pattern::new(vec![PatternSegment::literal("one")]);
        assert!(!pattern.is_templated());
    }

    #[test]
    fn test_is_templated_with_variable() {
        let pattern = Pattern::new(vec![
            PatternSegment::literal("one"),
            PatternSegment::variable("second"),
        ]);
        assert!(pattern.is_templated());
    }

    #[test]
    fn test_empty_pattern_matches_only_empty_path() {
        let pattern = Pattern::new(vec![]);
        assert_eq!(pattern.matches(&[]), Some(Bindings::new()));
        assert_eq!(pattern.matches(&path(&["one"])), None);
    }

    #[test]
    fn test_shorter_path_does_not_match() {
        let pattern = Pattern::parse("one/two");
        assert_eq!(pattern.matches(&path(&["one"])), None);
    }

    #[test]
    fn test_longer_path_does_not_match() {
        let pattern = Pattern::parse("one");
        assert_eq!(pattern.matches(&path(&["one", "two"])), None);
    }

    #[test]
    fn test_literal_match_produces_empty_bindings() {
        let pattern = Pattern::parse("one/two");
        assert_eq!(pattern.matches(&path(&["one", "two"])), Some(Bindings::new()));
    }

    #[test]
    fn test_literal_mismatch() {
        let pattern = Pattern::parse("one/two");
        assert_eq!(pattern.matches(&path(&["one", "three"])), None);
    }

    #[test]
    fn test_variable_binds_matched_segment() {
        let pattern = Pattern::parse("one/{second}");

        let bindings = pattern.matches(&path(&["one", "two"])).unwrap();
        assert_eq!(bindings.get("second"), Some(&"two".to_string()));

        let bindings = pattern.matches(&path(&["one", "three"])).unwrap();
        assert_eq!(bindings.get("second"), Some(&"three".to_string()));
    }

    #[test]
    fn test_parse_brace_syntax() {
        let pattern = Pattern::parse("/sensors/{id}/");
        assert_eq!(
            pattern.segments(),
            &[
                PatternSegment::literal("sensors"),
                PatternSegment::variable("id"),
            ]
        );
    }

    #[test]
    fn test_concrete_uri_for_literal_pattern() {
        let pattern = Pattern::parse("sensors/temp");
        assert_eq!(pattern.concrete_uri(), Some("sensors/temp".to_string()));
    }

    #[test]
    fn test_concrete_uri_none_for_templated() {
        let pattern = Pattern::parse("sensors/{id}");
        assert_eq!(pattern.concrete_uri(), None);
    }

    #[test]
    fn test_display_round_trip() {
        let pattern = Pattern::parse("sensors/{id}/value");
        assert_eq!(pattern.to_string(), "sensors/{id}/value");
    }

    #[test]
    fn test_split_path_drops_empty_segments() {
        assert_eq!(split_path("/.well-known/core"), path(&[".well-known", "core"]));
        assert_eq!(split_path(""), Vec::<String>::new());
    }
}
