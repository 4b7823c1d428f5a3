//! Infrastructure layer for filesystem and environment interactions.
//!
//! Resolves where the default state file and trace output live.

pub mod paths;

pub use paths::{default_state_file, expand_tilde, get_data_dir};
