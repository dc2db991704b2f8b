//! A small and simple library for playing N×N tic-tac-toe perfectly.
//!
//! The crate models the board, detects finished games and solves the remaining game tree with
//! exact minimax search and alpha-beta pruning. The win length is always the board size.
//! Everything is synchronous and free of I/O; presentation is left to the caller.
//!
//! # Example
//!
//! ```rust
//! use tictactoe_lib::board::{Board, Player};
//! use tictactoe_lib::search::MinimaxSearch;
//!
//! // Create a new 3x3 board and let the minimizer open in the centre
//! let mut board = Board::new(3).unwrap();
//! board.mark(1, 1, Player::Minimizer).unwrap();
//!
//! // Create and configure a search instance using the builder
//! let mut search = MinimaxSearch::builder()
//!     .with_alpha_beta_pruning(true)
//!     .build()
//!     .unwrap();
//!
//! // Solve the position for the maximizer
//! let best_move = search.search(&board, Player::Maximizer).unwrap();
//!
//! println!("The best move is: ({}, {})", best_move.row, best_move.col);
//! assert_eq!(best_move.score, 0);
//! ```

/// Contains the `Board` struct, the `Player` and `GameOutcome` enums.
pub mod board;
/// Contains the crate-wide `GameError` and `Result` alias.
pub mod error;
/// Contains the `Game` driver that owns the live board of a human-versus-computer game.
pub mod game;
/// Contains display labels and the text format for boards.
pub mod labels;
/// Contains the winning lines and their per-size cache.
pub mod lines;
/// Contains traits and implementations for random number generation.
pub mod random;
/// The core module of the library, containing the `MinimaxSearch` implementation.
pub mod search;
/// Contains the `SearchNode` and `SearchStats` structs describing a finished search.
pub mod search_node;
/// Contains the `Strategy` enum and the `choose_move` dispatcher.
pub mod strategy;

pub use board::{Board, GameOutcome, Player};
pub use error::{GameError, Result};
pub use search::{Move, optimal_move};
pub use strategy::{Strategy, choose_move};
