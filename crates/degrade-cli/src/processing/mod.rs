//! End-to-end study processing.

mod input;
mod study;

pub use input::{base_name, prompt_for_filename};
pub use study::run_study;
