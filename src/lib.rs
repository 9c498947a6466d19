//! Onigiri: a one-ply lookahead move selector for 6x6 Reversi.
//!
//! The crate decides what to play; it does not run games. An outside game
//! loop hands it a board and a side to move, gets back a coordinate (or
//! `None` for a forced pass), and applies that move to its own board.
//!
//! ## Modules
//!
//! - [`constants`] - Board size, capture directions, positional weights
//! - [`board`] - Stones, coordinates, and the immutable 6x6 board
//! - [`rules`] - Legality, move enumeration, move simulation
//! - [`eval`] - Positional evaluation
//! - [`select`] - One-ply lookahead with an opponent-reply penalty
//! - [`agent`] - The `Agent` trait and its implementations
//! - [`error`] - Input validation errors
//!
//! ## Example
//!
//! ```
//! use onigiri::agent::{Agent, OnigiriAgent};
//! use onigiri::board::{Board, Stone};
//! use onigiri::rules::apply_move;
//!
//! let board = Board::new();
//! let mv = OnigiriAgent.choose_move(&board, Stone::Black).unwrap();
//! let next = apply_move(&board, Stone::Black, mv);
//! assert_eq!(next.count(Stone::Black), 4);
//! ```

pub mod agent;
pub mod board;
pub mod constants;
pub mod error;
pub mod eval;
pub mod rules;
pub mod select;

pub use agent::{place, Agent, OnigiriAgent, RandomAgent};
pub use board::{Board, Coord, Stone};
pub use error::Error;
