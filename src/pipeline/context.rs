use std::sync::Arc;

use crate::catalog::catalog_model::PageCatalog;
use crate::docs::document::DocumentSet;

/// Immutable inputs shared by the requests of one session.
///
/// Each request receives its own snapshot; updating the page or the uploaded
/// documents produces a new context instead of mutating the old one.
#[derive(Debug, Clone, Default)]
pub struct GenerationContext {
    pub catalog: Arc<PageCatalog>,
    pub documents: Arc<DocumentSet>,
}

impl GenerationContext {
    pub fn new(catalog: PageCatalog, documents: DocumentSet) -> Self {
        Self {
            catalog: Arc::new(catalog),
            documents: Arc::new(documents),
        }
    }

    /// Snapshot with the page catalog replaced wholesale.
    pub fn with_catalog(&self, catalog: PageCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            documents: Arc::clone(&self.documents),
        }
    }

    /// Snapshot with the uploaded documents replaced wholesale.
    pub fn with_documents(&self, documents: DocumentSet) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
            documents: Arc::new(documents),
        }
    }
}
