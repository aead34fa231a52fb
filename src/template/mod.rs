pub mod library;
pub mod matcher;
pub mod template_model;
