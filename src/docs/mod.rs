pub mod document;
pub mod retriever;
