use rustc_hash::FxHashSet;

use dog_territory_battle::board::{BoardState, Piece, PieceId};
use dog_territory_battle::coord::Coord;
use dog_territory_battle::pieces::{PieceKind, PlayerId};
use dog_territory_battle::rules::adjacency::{all_connected, connected_without, has_any_neighbor};
use dog_territory_battle::rules::board_move_candidates;

fn cells(v: &[(i16, i16)]) -> FxHashSet<Coord> {
    v.iter().map(|&(x, y)| Coord::new(x, y)).collect()
}

#[test]
fn connected_formations_round_trip() {
    assert!(all_connected(&cells(&[])));
    assert!(all_connected(&cells(&[(0, 0)])));
    assert!(all_connected(&cells(&[(0, 0), (1, 1), (2, 1), (2, 2)])));

    // Two clusters with no pair within Chebyshev distance 1.
    assert!(!all_connected(&cells(&[(0, 0), (1, 0), (3, 2), (3, 3)])));
}

#[test]
fn per_piece_adjacency_is_weaker_than_connectivity() {
    // Every cell has a neighbor, yet the set splits into two islands.
    let split = cells(&[(0, 0), (1, 0), (3, 2), (3, 3)]);
    for &c in &split {
        let others: FxHashSet<Coord> = split.iter().copied().filter(|&o| o != c).collect();
        assert!(has_any_neighbor(c, &others));
    }
    assert!(!all_connected(&split));
}

#[test]
fn bridge_pieces_cannot_leave_the_board() {
    // (1, 0) bridges the ends of a three-piece line.
    let line = [
        Piece::on_board(1, PlayerId::One, PieceKind::Aniki, Coord::new(0, 0)),
        Piece::on_board(2, PlayerId::One, PieceKind::Yaiba, Coord::new(1, 0)),
        Piece::on_board(3, PlayerId::Two, PieceKind::Mamedeppo, Coord::new(2, 0)),
    ];
    let board = BoardState::new(&line).unwrap();

    let bridge = board_move_candidates(&board, PieceId(2)).unwrap();
    assert!(!bridge.can_return_to_hand);

    let end = board_move_candidates(&board, PieceId(1)).unwrap();
    assert!(end.can_return_to_hand);
}

#[test]
fn moves_that_split_the_formation_are_excluded() {
    let line = [
        Piece::on_board(1, PlayerId::One, PieceKind::Aniki, Coord::new(0, 0)),
        Piece::on_board(2, PlayerId::One, PieceKind::Yaiba, Coord::new(1, 0)),
        Piece::on_board(3, PlayerId::Two, PieceKind::Mamedeppo, Coord::new(2, 0)),
    ];
    let board = BoardState::new(&line).unwrap();

    // Wherever the bridge piece goes, the result must stay one component.
    let candidates = board_move_candidates(&board, PieceId(2)).unwrap();
    for &c in &candidates.cells {
        let hypothetical = cells(&[(0, 0), (2, 0)])
            .into_iter()
            .chain(std::iter::once(c))
            .collect();
        assert!(all_connected(&hypothetical), "candidate {c} splits the board");
    }
    // The orthogonal step up keeps contact with both ends.
    assert!(candidates.cells.contains(&Coord::new(1, 1)));
}

#[test]
fn removal_check_matches_connected_without() {
    let formation = cells(&[(0, 0), (1, 0), (2, 0), (2, 1)]);
    assert!(connected_without(&formation, Coord::new(2, 1)));
    assert!(!connected_without(&formation, Coord::new(1, 0)));
}
