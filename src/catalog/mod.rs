pub mod builder;
pub mod catalog_model;
pub mod known;
pub mod markup;
