//! Passive data structures for the playfield and pieces.
//!
//! Nothing in this module enforces game rules; the types here are owned and
//! mutated by [`Board`](crate::engine::Board), which is the single authority
//! for placement legality.

pub use self::{cell::*, grid::*, piece::*};

pub(crate) mod cell;
pub(crate) mod grid;
pub(crate) mod piece;
