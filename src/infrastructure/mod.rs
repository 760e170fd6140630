//! Infrastructure layer for host interactions.
//!
//! - [`api`]: the countries endpoint contract and response interpretation
//! - [`paths`]: sandbox paths for the data directory and user files

pub mod api;
pub mod paths;

pub use paths::{expand_tilde, get_data_dir};
