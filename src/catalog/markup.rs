use std::collections::BTreeMap;

use regex::Regex;

use crate::error::QaError;

// ============================================================================
// Start-tag scanning
// ============================================================================

/// A single start tag found in page markup.
///
/// Only the tag name and its attributes are kept. Nesting, text content and
/// end tags are ignored: the catalog needs attribute lookups, not a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    /// Lowercased element name
    pub name: String,

    /// Attributes keyed by lowercased name. Valueless attributes map to "".
    pub attributes: BTreeMap<String, String>,

    /// Byte offset of the `<` in the scanned markup
    pub offset: usize,
}

impl Tag {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    /// Whether the whitespace-separated `class` list contains `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .map(|c| c.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }
}

/// Tokenize the start tags of `markup`.
///
/// Comments are skipped. Blank markup and a start tag that never reaches its
/// closing `>` are reported as errors.
pub fn scan_tags(markup: &str) -> Result<Vec<Tag>, QaError> {
    if markup.trim().is_empty() {
        return Err(QaError::EmptyMarkup);
    }

    let comment = Regex::new(r"(?s)<!--.*?-->")?;
    let raw_text = Regex::new(r"(?is)(<(?:script|style)\b[^>]*>)(.*?)(</(?:script|style)\s*>)")?;
    let open = Regex::new(r"<([A-Za-z][A-Za-z0-9-]*)")?;
    let attribute =
        Regex::new(r#"([^\s=/>"'][^\s=/>]*)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>][^\s>]*)))?"#)?;

    // Blank out comments and script/style bodies so offsets still line up
    // with the input.
    let cleaned = comment
        .replace_all(markup, |caps: &regex::Captures| " ".repeat(caps[0].len()))
        .into_owned();
    let cleaned = raw_text
        .replace_all(&cleaned, |caps: &regex::Captures| {
            format!("{}{}{}", &caps[1], " ".repeat(caps[2].len()), &caps[3])
        })
        .into_owned();

    let mut tags = Vec::new();
    let mut cursor = 0;

    while let Some(caps) = open.captures_at(&cleaned, cursor) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            break;
        };
        let end = find_tag_end(&cleaned, whole.end())
            .ok_or(QaError::UnterminatedTag { offset: whole.start() })?;

        let body = cleaned[whole.end()..end].trim_end_matches('/');
        let attributes = attribute
            .captures_iter(body)
            .filter_map(|a| {
                let key = a.get(1)?.as_str().to_lowercase();
                let value = a
                    .get(2)
                    .or_else(|| a.get(3))
                    .or_else(|| a.get(4))
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_default();
                Some((key, value))
            })
            .collect();

        tags.push(Tag {
            name: name.as_str().to_lowercase(),
            attributes,
            offset: whole.start(),
        });

        cursor = end + 1;
    }

    Ok(tags)
}

/// Position of the `>` closing a start tag, skipping quoted attribute values.
///
/// A quote opens a value only when the previous non-whitespace character is
/// `=`; anywhere else it is an ordinary character.
fn find_tag_end(markup: &str, from: usize) -> Option<usize> {
    let mut quote: Option<char> = None;
    let mut after_equals = false;
    for (i, c) in markup[from..].char_indices() {
        if let Some(q) = quote {
            if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '>' => return Some(from + i),
            '"' | '\'' if after_equals => quote = Some(c),
            c if c.is_whitespace() => continue,
            _ => {}
        }
        after_equals = c == '=';
    }
    None
}
