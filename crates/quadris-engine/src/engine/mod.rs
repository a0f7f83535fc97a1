//! Game rules and state management.
//!
//! This module implements the actual falling-block gameplay on top of the
//! passive [`core`](crate::core) types:
//!
//! - [`Board`] - single source of truth: settled grid, active piece, score,
//!   terminal state
//! - [`Movement`] - command layer translating player intents into validated
//!   piece mutations
//! - [`PieceFactory`] - seedable random piece spawner
//! - [`GameStats`] - score and counters accrued per lock
//!
//! # Game flow
//!
//! An external driver owns one [`Board`] and drives it synchronously:
//!
//! 1. Issue movement commands through [`Movement`] (each validated against
//!    the board, rejected moves leave no trace)
//! 2. On a tick or hard-drop, call [`Board::lock_piece`] to drop, merge,
//!    clear full rows, score, and spawn the next piece
//! 3. Poll [`Board::cell`] for every visible cell each frame
//! 4. Stop when [`Board::state`] reports game over; the final
//!    [`Board::stats`] are what the driver reports to its score sink
//!
//! # Example
//!
//! ```
//! use quadris_engine::{Board, Movement, PieceFactory, Spin};
//!
//! let mut board = Board::with_factory(PieceFactory::with_seed(7));
//!
//! let mut movement = Movement::new(&mut board);
//! movement.try_left().ok();
//! movement.try_rotate(Spin::Clockwise).ok();
//!
//! board.lock_piece();
//! assert!(!board.state().is_game_over());
//! ```

pub use self::{board::*, movement::*, piece_factory::*, stats::*};

pub(crate) mod board;
pub(crate) mod movement;
pub(crate) mod piece_factory;
pub(crate) mod stats;
