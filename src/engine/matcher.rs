//! Whole-word matchers for slot values
//!
//! A slot value is matched literally: every regex metacharacter is escaped
//! before the pattern is anchored on word boundaries and made
//! case-insensitive.

use regex::Regex;
use std::ops::Range;

use super::error::RenderError;

/// Pattern source for a slot value. Deterministic for a given input.
pub fn word_pattern(word: &str) -> String {
    format!(r"(?i)\b{}\b", regex::escape(word))
}

/// Compiled whole-word matcher for one slot value
#[derive(Debug, Clone)]
pub struct WordMatcher {
    regex: Regex,
}

impl WordMatcher {
    /// Build a matcher. Returns `None` for empty or whitespace-only values,
    /// which never match anything.
    pub fn new(word: &str) -> Result<Option<Self>, RenderError> {
        if word.trim().is_empty() {
            return Ok(None);
        }
        let regex = Regex::new(&word_pattern(word))?;
        Ok(Some(Self { regex }))
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// First whole-word occurrence starting at or after byte `start`.
    /// Text before `start` still counts for the word boundary.
    pub fn find_at(&self, text: &str, start: usize) -> Option<Range<usize>> {
        self.regex
            .find_at(text, start)
            .filter(|m| !m.is_empty())
            .map(|m| m.range())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find_all(matcher: &WordMatcher, text: &str) -> Vec<Range<usize>> {
        let mut found = Vec::new();
        let mut pos = 0;
        while let Some(range) = matcher.find_at(text, pos) {
            pos = range.end;
            found.push(range);
        }
        found
    }

    #[test]
    fn test_pattern_construction_is_idempotent() {
        let first = word_pattern("c++ (beta)");
        let second = word_pattern("c++ (beta)");
        assert_eq!(first, second);

        let a = WordMatcher::new("a.b").unwrap().unwrap();
        let b = WordMatcher::new("a.b").unwrap().unwrap();
        assert_eq!(a.pattern(), b.pattern());
    }

    #[test]
    fn test_metacharacters_match_literally() {
        let matcher = WordMatcher::new("a.b").unwrap().unwrap();
        assert_eq!(find_all(&matcher, "axb a.b"), vec![4..7]);
    }

    #[test]
    fn test_case_insensitive() {
        let matcher = WordMatcher::new("fox").unwrap().unwrap();
        assert_eq!(find_all(&matcher, "Fox and FOX"), vec![0..3, 8..11]);
    }

    #[test]
    fn test_no_partial_word_matches() {
        let matcher = WordMatcher::new("cat").unwrap().unwrap();
        assert!(find_all(&matcher, "category concatenate scatter").is_empty());
        assert_eq!(find_all(&matcher, "the cat, the category"), vec![4..7]);
    }

    #[test]
    fn test_blank_values_have_no_matcher() {
        assert!(WordMatcher::new("").unwrap().is_none());
        assert!(WordMatcher::new("  \t").unwrap().is_none());
    }

    #[test]
    fn test_find_at_keeps_boundary_context() {
        let matcher = WordMatcher::new("la").unwrap().unwrap();
        assert_eq!(matcher.find_at("sing la la", 6), Some(8..10));
        assert_eq!(matcher.find_at("sala", 2), None);
    }

    #[test]
    fn test_multi_word_value() {
        let matcher = WordMatcher::new("hot air balloon").unwrap().unwrap();
        assert_eq!(find_all(&matcher, "a Hot Air Balloon ride"), vec![2..17]);
    }
}
