//! Command implementations

pub mod simple;
pub mod turn;

pub use simple::run_simple;
pub use turn::{run_guess, run_start};
