use std::fmt;

#[derive(Debug)]
pub enum QaError {
    /// Reading or writing a file failed
    Io { path: String, source: std::io::Error },

    /// Page markup was blank
    EmptyMarkup,

    /// A start tag was opened but never closed with `>`
    UnterminatedTag { offset: usize },

    /// A scanning pattern failed to compile
    Pattern(regex::Error),

    /// JSON parsing failed (test case input, documents)
    JsonParse { context: String, source: serde_json::Error },

    /// YAML parsing or serializing failed
    Yaml { context: String, source: serde_yaml::Error },

    /// Serializing generated output failed
    Serialize { context: String, source: serde_json::Error },
}

impl QaError {
    pub fn io(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        QaError::Io {
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}

impl fmt::Display for QaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QaError::Io { path, source } => write!(f, "I/O error on '{}': {}", path, source),
            QaError::EmptyMarkup => write!(f, "Page markup is empty"),
            QaError::UnterminatedTag { offset } => {
                write!(f, "Unterminated tag starting at byte {}", offset)
            }
            QaError::Pattern(e) => write!(f, "Invalid scan pattern: {}", e),
            QaError::JsonParse { context, source } => {
                write!(f, "JSON parse error ({}): {}", context, source)
            }
            QaError::Yaml { context, source } => {
                write!(f, "YAML error ({}): {}", context, source)
            }
            QaError::Serialize { context, source } => {
                write!(f, "Serialize error ({}): {}", context, source)
            }
        }
    }
}

impl std::error::Error for QaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QaError::Io { source, .. } => Some(source),
            QaError::Pattern(source) => Some(source),
            QaError::JsonParse { source, .. } => Some(source),
            QaError::Yaml { source, .. } => Some(source),
            QaError::Serialize { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<regex::Error> for QaError {
    fn from(e: regex::Error) -> Self {
        QaError::Pattern(e)
    }
}
