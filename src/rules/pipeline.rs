//! The invariant filters and the public query surface of the rules engine.
//!
//! Candidate generation is a pipeline: a generator produces raw destination
//! cells, then each filter strips the ones that would break a board
//! invariant. Order matters; later filters assume earlier exclusions.

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::board::{BoardState, PieceId};
use crate::bounds::{would_exceed_max, BoundingBox};
use crate::coord::{Coord, ORTHOGONAL_STEPS};
use crate::error::RulesError;
use crate::pieces::PlayerId;
use crate::rules::adjacency::all_connected;
use crate::rules::movement::move_targets;
use crate::rules::placement::placement_targets;

/// Result of selecting an on-board piece: where it may go, and whether it may
/// leave the board entirely.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveCandidates {
    pub cells: Vec<Coord>,
    pub can_return_to_hand: bool,
}

/// Legal destinations for an on-board piece, plus the return-to-hand flag.
///
/// Pure: the board snapshot is never mutated, and identical inputs yield
/// identical outputs. An empty candidate list is a valid result.
pub fn board_move_candidates(
    board: &BoardState,
    piece_id: PieceId,
) -> Result<MoveCandidates, RulesError> {
    let piece = board.piece(piece_id)?;
    let from = piece.cell().ok_or(RulesError::PieceNotOnBoard(piece_id))?;
    let owner = piece.owner;

    // Every occupied cell except the mover's own: these block sliding and
    // stay fixed in all hypothetical placements below.
    let others: FxHashSet<Coord> = board.occupied_cells_without(piece_id).collect();

    let mut cells = move_targets(piece.kind.profile(), from, &others);
    debug!(piece = ?piece_id, raw = cells.len(), "generated move candidates");

    dedup_and_drop_occupied(&mut cells, &others, Some(from));
    cells.retain(|&c| !would_exceed_max(others.iter().copied(), c));
    cells.retain(|&c| !would_self_endanger(board, owner, piece_id, c, &others));
    cells.retain(|&c| {
        let mut hypothetical = others.clone();
        hypothetical.insert(c);
        all_connected(&hypothetical)
    });
    debug!(piece = ?piece_id, legal = cells.len(), "filtered move candidates");

    let can_return_to_hand = !piece.kind.is_boss() && all_connected(&others);

    Ok(MoveCandidates {
        cells,
        can_return_to_hand,
    })
}

/// Legal drop cells for a hand piece.
///
/// Adjacency to an own piece is built into the generator, and a drop can
/// never disconnect the formation, so only the bounding-box and
/// self-endangerment filters apply.
pub fn hand_placement_candidates(
    board: &BoardState,
    piece_id: PieceId,
) -> Result<Vec<Coord>, RulesError> {
    let piece = board.piece(piece_id)?;
    if piece.cell().is_some() {
        return Err(RulesError::PieceNotInHand(piece_id));
    }
    let owner = piece.owner;

    let occupied: FxHashSet<Coord> = board.occupied_cells().collect();

    let mut cells = placement_targets(board, owner);
    debug!(piece = ?piece_id, raw = cells.len(), "generated placement candidates");

    cells.retain(|&c| !would_exceed_max(occupied.iter().copied(), c));
    cells.retain(|&c| !would_self_endanger(board, owner, piece_id, c, &occupied));
    debug!(piece = ?piece_id, legal = cells.len(), "filtered placement candidates");

    Ok(cells)
}

/// Is `player`'s boss surrounded on all 4 orthogonal sides?
///
/// A side is blocked by any piece on it, or by the board edge once the
/// bounding box spans the full limit on that axis. False when the player has
/// no boss on the board. This is the win condition as seen by the opponent,
/// and the same test the self-endangerment filter runs on hypothetical
/// boards.
pub fn is_boss_surrounded(board: &BoardState, player: PlayerId) -> bool {
    let Some(boss) = board.boss_cell(player) else {
        return false;
    };
    let occupied: FxHashSet<Coord> = board.occupied_cells().collect();
    let Some(bb) = BoundingBox::of(occupied.iter().copied()) else {
        return false;
    };
    surrounded(boss, &occupied, &bb)
}

/// Would putting a piece on `candidate` stretch the board past the 4x4 limit?
///
/// Exposed for pre-validation by callers highlighting squares.
pub fn would_exceed_board_limit(board: &BoardState, candidate: Coord) -> bool {
    would_exceed_max(board.occupied_cells(), candidate)
}

/// Remove occupied cells, the mover's own cell, and duplicates, preserving
/// generation order.
fn dedup_and_drop_occupied(
    cells: &mut Vec<Coord>,
    occupied: &FxHashSet<Coord>,
    own_cell: Option<Coord>,
) {
    let mut seen: FxHashSet<Coord> = FxHashSet::default();
    cells.retain(|&c| {
        !occupied.contains(&c) && Some(c) != own_cell && seen.insert(c)
    });
}

/// Would the acting player's boss end up surrounded if the selected piece
/// stood on `candidate`, with all other pieces fixed?
///
/// `fixed` holds every occupied cell except the selected piece's own. Skipped
/// (returns false) when the player has no boss on the hypothetical board.
fn would_self_endanger(
    board: &BoardState,
    player: PlayerId,
    piece_id: PieceId,
    candidate: Coord,
    fixed: &FxHashSet<Coord>,
) -> bool {
    let boss = match board.piece(piece_id) {
        Ok(p) if p.kind.is_boss() => Some(candidate),
        _ => board.boss_cell(player),
    };
    let Some(boss) = boss else {
        return false;
    };

    let mut hypothetical = fixed.clone();
    hypothetical.insert(candidate);
    let Some(bb) = BoundingBox::of(hypothetical.iter().copied()) else {
        return false;
    };
    surrounded(boss, &hypothetical, &bb)
}

fn surrounded(boss: Coord, occupied: &FxHashSet<Coord>, bb: &BoundingBox) -> bool {
    ORTHOGONAL_STEPS.iter().all(|&dir| {
        let n = boss + dir;
        if occupied.contains(&n) {
            return true;
        }
        // Off-board counts as blocked only on an axis already at full span.
        let off_x = dir.x != 0 && bb.x_closed() && (n.x < bb.min_x || n.x > bb.max_x);
        let off_y = dir.y != 0 && bb.y_closed() && (n.y < bb.min_y || n.y > bb.max_y);
        off_x || off_y
    })
}
