pub mod assembler;
pub mod grounding;
pub mod testcase_model;
