//! Rules engine for Dog Territory Battle, a two-player territory game on a
//! dynamically-bounded grid.
//!
//! The board is an unbounded integer lattice whose playable area is wherever
//! the pieces stand, capped at a 4x4 bounding box. Pieces move between each
//! player's hand and the board; every on-board piece must stay connected to
//! the formation, and a player whose boss piece gets surrounded on all four
//! orthogonal sides loses.
//!
//! Everything in [`rules`] is a pure function over an immutable
//! [`board::BoardState`] snapshot: callers ask "where can this piece go" and
//! commit the chosen move themselves (or through [`game::GameState`], the
//! in-memory commit layer).

pub mod board;
pub mod bounds;
pub mod coord;
pub mod error;
pub mod game;
pub mod pieces;
pub mod rules;
