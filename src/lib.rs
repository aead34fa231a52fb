//! Rule-based QA test-case and Selenium script generation for the NetCart
//! checkout page.
//!
//! Prompt -> matched templates -> test cases -> compiled steps -> script text.

pub mod catalog;
pub mod cli;
pub mod docs;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod rules;
pub mod script;
pub mod template;
pub mod testcase;
pub mod trace;
