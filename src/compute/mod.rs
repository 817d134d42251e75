//! Compute module - Graph generation and the immune edge cover search.

mod generator;

pub mod immune;

pub use generator::*;
pub use immune::{ImmuneSearch, search};
