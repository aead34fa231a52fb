use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::QaError;

/// Marker text for files whose format is not read as text.
pub const UNSUPPORTED_MARKER: &str = "[UNSUPPORTED FILE TYPE]";

/// Extensions read verbatim as UTF-8 text.
const TEXT_EXTENSIONS: [&str; 6] = ["txt", "md", "json", "csv", "html", "htm"];

/// One uploaded support document and its extracted text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedDocument {
    /// File name without directories, used as the grounding label
    pub filename: String,
    pub text: String,
}

/// Read a document as text.
///
/// Never fails: unsupported formats and read errors are recorded in the
/// document text so that the batch still loads.
pub fn load_document(path: &Path) -> UploadedDocument {
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    let text = if !TEXT_EXTENSIONS.contains(&extension.as_str()) {
        tracing::warn!(file = %filename, "unsupported document type");
        UNSUPPORTED_MARKER.to_string()
    } else {
        match std::fs::read(path) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) => {
                let err = QaError::io(path, e);
                tracing::warn!(error = %err, "could not read document");
                format!("[ERROR Extracting Text: {}]", err)
            }
        }
    };

    UploadedDocument { filename, text }
}

/// The documents uploaded for one generation context. Replaced as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSet {
    pub documents: Vec<UploadedDocument>,
}

impl DocumentSet {
    pub fn new(documents: Vec<UploadedDocument>) -> Self {
        Self { documents }
    }

    /// Load each path; directories contribute their files in name order.
    pub fn from_paths<P: AsRef<Path>>(paths: &[P]) -> Result<Self, QaError> {
        let mut documents = Vec::new();
        for path in paths {
            let path = path.as_ref();
            if path.is_dir() {
                documents.extend(Self::from_dir(path)?.documents);
            } else {
                documents.push(load_document(path));
            }
        }
        Ok(Self { documents })
    }

    /// Load every regular file directly inside `dir`, sorted by name.
    pub fn from_dir(dir: &Path) -> Result<Self, QaError> {
        let mut files: Vec<PathBuf> = std::fs::read_dir(dir)
            .map_err(|e| QaError::io(dir, e))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.is_file())
            .collect();
        files.sort();

        Ok(Self {
            documents: files.iter().map(|p| load_document(p)).collect(),
        })
    }

    /// Document names, in load order.
    pub fn labels(&self) -> Vec<String> {
        self.documents.iter().map(|d| d.filename.clone()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }
}
