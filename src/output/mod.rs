//! Terminal output formatting
//!
//! Display utilities for boards and pages.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_page, print_status};
