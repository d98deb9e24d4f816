//! Exhaustive search toolkit
//!
//! This crate provides:
//! - Tic-Tac-Toe rules over immutable boards, with reachability validation
//! - Exhaustive minimax search choosing the optimal move for either side
//! - A person/movie co-starring graph loaded from CSV tables
//! - Frontier-based breadth-first search for degrees of separation
//! - The `searchlab` command-line interface

pub mod cli;
pub mod degrees;
pub mod error;
pub mod identifiers;
pub mod minimax;
pub mod tictactoe;

pub use degrees::{Graph, PathStep, shortest_path};
pub use error::{Error, Result};
pub use minimax::{TieBreak, minimax};
pub use tictactoe::{Action, Board, Cell, Player};
