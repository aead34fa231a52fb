use std::collections::HashSet;

use crate::docs::document::DocumentSet;

/// Supplies context text relevant to a prompt.
pub trait ContextRetriever {
    fn retrieve(&self, prompt: &str, documents: &DocumentSet) -> String;
}

/// Ranks blank-line-separated chunks by how many prompt terms they share.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordRetriever {
    pub top_n: usize,
}

impl Default for KeywordRetriever {
    fn default() -> Self {
        Self { top_n: 5 }
    }
}

/// Terms shorter than this many characters are ignored when scoring.
const MIN_TERM_LEN: usize = 3;

fn terms(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|t| t.chars().count() >= MIN_TERM_LEN)
        .map(str::to_string)
        .collect()
}

impl ContextRetriever for KeywordRetriever {
    fn retrieve(&self, prompt: &str, documents: &DocumentSet) -> String {
        let wanted = terms(prompt);
        if wanted.is_empty() || self.top_n == 0 {
            return String::new();
        }

        // (score, document index, chunk index, chunk)
        let mut scored: Vec<(usize, usize, usize, &str)> = Vec::new();
        for (d, doc) in documents.documents.iter().enumerate() {
            for (c, chunk) in doc.text.split("\n\n").enumerate() {
                let chunk = chunk.trim();
                if chunk.is_empty() {
                    continue;
                }
                let score = terms(chunk).intersection(&wanted).count();
                if score > 0 {
                    scored.push((score, d, c, chunk));
                }
            }
        }

        // Highest score first; ties keep document order.
        scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)).then(a.2.cmp(&b.2)));

        scored
            .into_iter()
            .take(self.top_n)
            .map(|(_, _, _, chunk)| chunk)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terms_count_characters_not_bytes() {
        let t = terms("é1 éte ab abc");
        assert!(!t.contains("é1"));
        assert!(t.contains("éte"));
        assert!(!t.contains("ab"));
        assert!(t.contains("abc"));
    }
}
