//! Raw movement-candidate generation for pieces already on the board.
//!
//! Output here is pre-filter: the pipeline still removes candidates that
//! break the bounding-box, self-endangerment, or connectivity invariants.

use rustc_hash::FxHashSet;

use crate::bounds::MAX_SPAN;
use crate::coord::{Coord, DIAGONAL_STEPS, ORTHOGONAL_STEPS};
use crate::pieces::{MoveProfile, MovementKind};

/// Candidate destination cells for a piece at `from` with movement `profile`.
///
/// `occupied` is the set of every occupied cell *except* the mover's own
/// (the mover never blocks itself, and its current cell is not a
/// destination).
pub fn move_targets(profile: MoveProfile, from: Coord, occupied: &FxHashSet<Coord>) -> Vec<Coord> {
    match profile.kind {
        MovementKind::BentSpecial => bent_targets(from, occupied),
        MovementKind::Orthogonal => slide_targets(from, occupied, &ORTHOGONAL_STEPS, profile.max_steps),
        MovementKind::Diagonal => slide_targets(from, occupied, &DIAGONAL_STEPS, profile.max_steps),
        MovementKind::OrthogonalDiagonal => {
            let mut out = slide_targets(from, occupied, &ORTHOGONAL_STEPS, profile.max_steps);
            out.extend(slide_targets(from, occupied, &DIAGONAL_STEPS, profile.max_steps));
            out
        }
    }
}

fn slide_targets(
    from: Coord,
    occupied: &FxHashSet<Coord>,
    dirs: &[Coord],
    max_steps: Option<u8>,
) -> Vec<Coord> {
    // Unbounded sliders cannot usefully go further than the board limit; the
    // bounding-box filter rejects anything past it anyway.
    let limit = max_steps.map(i16::from).unwrap_or(MAX_SPAN);

    let mut out = Vec::new();
    for &dir in dirs {
        let mut cur = from;
        for _ in 0..limit {
            cur += dir;
            if occupied.contains(&cur) {
                // No jumping: the first blocker ends the scan in this direction.
                break;
            }
            out.push(cur);
        }
    }
    out
}

/// The bent hop: two cells in an orthogonal direction, then one cell at a
/// right angle. Only the endpoint needs to be free; the piece hops over
/// whatever sits in between.
fn bent_targets(from: Coord, occupied: &FxHashSet<Coord>) -> Vec<Coord> {
    let mut out = Vec::new();
    for &dir in &ORTHOGONAL_STEPS {
        let mid = from + dir + dir;
        for &turn in &ORTHOGONAL_STEPS {
            if turn == dir || turn + dir == Coord::new(0, 0) {
                continue;
            }
            let end = mid + turn;
            if !occupied.contains(&end) {
                out.push(end);
            }
        }
    }
    out
}
