//! Bosses: long-running goals with an HP pool.

pub mod types;

pub use types::*;
