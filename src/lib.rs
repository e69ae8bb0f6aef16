#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod bitboard;
mod common;
mod config;
mod game;
mod generator;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod placement;
#[cfg(feature = "std")]
mod player_cli;
mod solver;
mod trie;
#[cfg(feature = "std")]
pub mod ui;

pub use bitboard::{BitBoard, BitBoardError};
pub use common::*;
pub use config::*;
pub use game::*;
pub use generator::*;
pub use grid::Grid;
#[cfg(feature = "std")]
pub use logging::{init_logging, init_logging_with};
pub use placement::*;
#[cfg(feature = "std")]
pub use player_cli::*;
pub use solver::{find_words, Solver};
pub use trie::{NodeId, Trie};
