//! Player, stats, rank and the death penalty.

#![allow(unused_imports)]

pub mod penalty;
pub mod player;
pub mod rank;
pub mod stats;

pub use penalty::*;
pub use player::*;
pub use rank::*;
pub use stats::*;
