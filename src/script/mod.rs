pub mod action;
pub mod compiler;
pub mod renderer;
pub mod synthesizer;
