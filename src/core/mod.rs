//! Core game state, balance numbers and state transitions.

#![allow(unused_imports)]

pub mod balance;
pub mod config;
pub mod constants;
pub mod error;
pub mod game_logic;
pub mod game_state;

pub use balance::*;
pub use config::*;
pub use error::*;
pub use game_logic::*;
pub use game_state::*;
