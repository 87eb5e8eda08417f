//! The move-legality rules: pure functions from a board snapshot to legal
//! destination sets and board-wide invariant checks.

pub mod adjacency;
pub mod movement;
pub mod placement;
pub mod pipeline;

pub use pipeline::{
    board_move_candidates, hand_placement_candidates, is_boss_surrounded, would_exceed_board_limit,
    MoveCandidates,
};
