use rustc_hash::FxHashSet;

use dog_territory_battle::board::{BoardState, Piece, PieceId};
use dog_territory_battle::coord::Coord;
use dog_territory_battle::pieces::{MoveProfile, MovementKind, PieceKind, PlayerId};
use dog_territory_battle::rules::movement::move_targets;
use dog_territory_battle::rules::board_move_candidates;

fn occ(v: &[(i16, i16)]) -> FxHashSet<Coord> {
    v.iter().map(|&(x, y)| Coord::new(x, y)).collect()
}

#[test]
fn orthogonal_slider_stops_at_first_blocker() {
    // Three-step orthogonal mover at the origin, blocker two cells up:
    // the +y ray yields exactly (0, 1), never (0, 3).
    let profile = MoveProfile::new(MovementKind::Orthogonal, Some(3), false).unwrap();
    let targets = move_targets(profile, Coord::new(0, 0), &occ(&[(0, 2)]));

    let up: Vec<Coord> = targets
        .iter()
        .copied()
        .filter(|c| c.x == 0 && c.y > 0)
        .collect();
    assert_eq!(up, vec![Coord::new(0, 1)]);
    // The other three rays are unobstructed.
    assert!(targets.contains(&Coord::new(0, -3)));
    assert!(targets.contains(&Coord::new(3, 0)));
    assert!(targets.contains(&Coord::new(-3, 0)));
}

#[test]
fn bent_mover_produces_the_eight_hop_endpoints() {
    let targets = move_targets(PieceKind::Hajike.profile(), Coord::new(2, 2), &occ(&[]));
    let got: FxHashSet<Coord> = targets.iter().copied().collect();
    let want = occ(&[
        (4, 3),
        (4, 1),
        (0, 3),
        (0, 1),
        (3, 4),
        (1, 4),
        (3, 0),
        (1, 0),
    ]);
    assert_eq!(got, want);
    assert_eq!(targets.len(), 8);
}

#[test]
fn bent_mover_hops_over_blockers_but_needs_a_free_endpoint() {
    // Blockers on the straight two-cell leg are ignored; an occupied
    // endpoint is not.
    let targets = move_targets(
        PieceKind::Hajike.profile(),
        Coord::new(2, 2),
        &occ(&[(2, 3), (2, 4), (3, 4)]),
    );
    assert!(targets.contains(&Coord::new(1, 4)));
    assert!(!targets.contains(&Coord::new(3, 4)));
}

#[test]
fn diagonal_mover_never_leaves_its_diagonals() {
    let targets = move_targets(PieceKind::Mamedeppo.profile(), Coord::new(0, 0), &occ(&[]));
    assert_eq!(targets.len(), 4);
    assert!(targets
        .iter()
        .all(|c| c.x.abs() == 1 && c.y.abs() == 1));
}

#[test]
fn boss_on_standard_opening_keeps_contact_with_the_other_boss() {
    // Standard opening: player one's boss at (1, 0), player two's at (1, 1).
    // Every legal boss move must keep the two-piece formation connected, so
    // only the four cells touching (1, 1) survive.
    let board = BoardState::new(&[
        Piece::on_board(1, PlayerId::One, PieceKind::Boss, Coord::new(1, 0)),
        Piece::on_board(2, PlayerId::Two, PieceKind::Boss, Coord::new(1, 1)),
    ])
    .unwrap();

    let candidates = board_move_candidates(&board, PieceId(1)).unwrap();
    let got: FxHashSet<Coord> = candidates.cells.iter().copied().collect();
    assert_eq!(got, occ(&[(0, 0), (2, 0), (0, 1), (2, 1)]));
    assert!(!candidates.can_return_to_hand);
}

#[test]
fn unbounded_slider_is_still_bounded_by_the_board_limit() {
    let board = BoardState::new(&[
        Piece::on_board(1, PlayerId::One, PieceKind::Boss, Coord::new(0, 0)),
        Piece::on_board(2, PlayerId::One, PieceKind::Totsu, Coord::new(0, 1)),
        Piece::on_board(3, PlayerId::Two, PieceKind::Boss, Coord::new(1, 0)),
    ])
    .unwrap();

    let candidates = board_move_candidates(&board, PieceId(2)).unwrap();
    // However far the slider could run, nothing may stretch the box past 4.
    for &c in &candidates.cells {
        let bb = dog_territory_battle::bounds::BoundingBox::of([Coord::new(0, 0), Coord::new(1, 0), c])
            .unwrap();
        assert!(bb.width() <= 4 && bb.height() <= 4, "candidate {c} exceeds limit");
    }
}
