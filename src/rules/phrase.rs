use std::collections::HashSet;

use serde::{Deserialize, Serialize};

// ============================================================================
// Phrase predicates over lowercased text
// ============================================================================

/// A substring predicate evaluated against lowercased text.
///
/// Built from `const` data so that rule tables read as plain lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phrase {
    /// At least one of the substrings occurs
    Any(&'static [&'static str]),

    /// Every nested phrase holds
    All(&'static [Phrase]),

    /// At least one nested phrase holds
    Either(&'static [Phrase]),
}

impl Phrase {
    /// Evaluate against text that is already lowercased.
    pub fn matches(&self, lowered: &str) -> bool {
        match self {
            Phrase::Any(words) => words.iter().any(|w| lowered.contains(w)),
            Phrase::All(parts) => parts.iter().all(|p| p.matches(lowered)),
            Phrase::Either(parts) => parts.iter().any(|p| p.matches(lowered)),
        }
    }
}

/// Case-insensitive trigger keywords; hits when any keyword is a substring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordSet(Vec<String>);

impl KeywordSet {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty() && seen.insert(w.clone()))
            .collect();
        Self(words)
    }

    /// Whether any keyword occurs in `lowered` (already lowercased text).
    pub fn hits(&self, lowered: &str) -> bool {
        self.0.iter().any(|k| lowered.contains(k.as_str()))
    }

    pub fn words(&self) -> &[String] {
        &self.0
    }
}

// ============================================================================
// Ordered rule scans
// ============================================================================

/// A phrase predicate paired with the value it selects.
#[derive(Debug, Clone, Copy)]
pub struct Rule<T> {
    pub when: Phrase,
    pub then: T,
}

/// First item in list order whose predicate holds for `text`.
///
/// `text` is lowercased once; later items are not evaluated after a hit.
pub fn first_match<'a, T>(
    items: &'a [T],
    text: &str,
    pred: impl Fn(&T, &str) -> bool,
) -> Option<&'a T> {
    let lowered = text.to_lowercase();
    items.iter().find(|item| pred(item, &lowered))
}

/// Every item whose predicate holds for `text`, in list order.
pub fn all_matches<'a, T>(
    items: &'a [T],
    text: &str,
    pred: impl Fn(&T, &str) -> bool,
) -> Vec<&'a T> {
    let lowered = text.to_lowercase();
    items.iter().filter(|item| pred(item, &lowered)).collect()
}

/// Value of the first rule whose phrase holds for `text`.
pub fn first_rule<'a, T>(rules: &'a [Rule<T>], text: &str) -> Option<&'a T> {
    first_match(rules, text, |rule, lowered| rule.when.matches(lowered)).map(|rule| &rule.then)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADD_TO_CART: Phrase = Phrase::All(&[Phrase::Any(&["add", "click"]), Phrase::Any(&["cart"])]);

    #[test]
    fn all_requires_every_part() {
        assert!(ADD_TO_CART.matches("click add to cart"));
        assert!(!ADD_TO_CART.matches("click apply"));
    }

    #[test]
    fn either_accepts_any_part() {
        let p = Phrase::Either(&[Phrase::Any(&["success"]), ADD_TO_CART]);
        assert!(p.matches("success shown"));
        assert!(p.matches("add to cart"));
        assert!(!p.matches("nothing here"));
    }

    #[test]
    fn first_rule_stops_at_first_hit() {
        let rules = [
            Rule { when: Phrase::Any(&["a"]), then: 1 },
            Rule { when: Phrase::Any(&["b"]), then: 2 },
        ];
        assert_eq!(first_rule(&rules, "B and A"), Some(&1));
        assert_eq!(first_rule(&rules, "only B"), Some(&2));
        assert_eq!(first_rule(&rules, "xyz"), None);
    }

    #[test]
    fn keyword_set_is_case_insensitive() {
        let set = KeywordSet::new(["Coupon", " SAVE15 "]);
        assert_eq!(set.words(), &["coupon".to_string(), "save15".to_string()]);
        assert!(set.hits("apply save15 now"));
    }

    #[test]
    fn keyword_set_drops_repeats_anywhere() {
        let set = KeywordSet::new(["code", "coupon", "CODE", " code"]);
        assert_eq!(set.words(), &["code".to_string(), "coupon".to_string()]);
    }
}
