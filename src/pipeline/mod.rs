pub mod context;
pub mod generator;
