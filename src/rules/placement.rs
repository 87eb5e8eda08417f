//! Placement candidates for pieces coming out of the hand.

use rustc_hash::FxHashSet;

use crate::board::BoardState;
use crate::coord::Coord;
use crate::pieces::PlayerId;

/// Cells where `player` could drop a hand piece: the union of the
/// 8-neighborhoods of their own on-board pieces, minus occupied cells.
///
/// Empty when the player has nothing on the board yet. The very first
/// placement of a game has no reference point and is the caller's decision
/// (the standard setup pre-places both bosses, so the engine never sees it).
pub fn placement_targets(board: &BoardState, player: PlayerId) -> Vec<Coord> {
    let mut seen: FxHashSet<Coord> = FxHashSet::default();
    let mut out = Vec::new();

    for piece in board.on_board().filter(|p| p.owner == player) {
        let Some(cell) = piece.cell() else { continue };
        for n in cell.neighbors() {
            if !board.is_occupied(n) && seen.insert(n) {
                out.push(n);
            }
        }
    }
    out
}
