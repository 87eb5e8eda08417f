use rustc_hash::FxHashMap;

use crate::coord::Coord;
use crate::error::RulesError;
use crate::pieces::{PieceKind, PlayerId};

/// Stable identity of a piece for the whole game.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PieceId(pub u32);

/// Where a piece currently is. Pieces are never destroyed; they only move
/// between the hand and the board.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Location {
    InHand,
    OnBoard(Coord),
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    pub id: PieceId,
    pub owner: PlayerId,
    pub kind: PieceKind,
    pub location: Location,
}

impl Piece {
    pub fn in_hand(id: u32, owner: PlayerId, kind: PieceKind) -> Self {
        Self {
            id: PieceId(id),
            owner,
            kind,
            location: Location::InHand,
        }
    }

    pub fn on_board(id: u32, owner: PlayerId, kind: PieceKind, at: Coord) -> Self {
        Self {
            id: PieceId(id),
            owner,
            kind,
            location: Location::OnBoard(at),
        }
    }

    #[inline]
    pub fn cell(&self) -> Option<Coord> {
        match self.location {
            Location::InHand => None,
            Location::OnBoard(c) => Some(c),
        }
    }
}

/// An immutable snapshot of every piece in the game, with O(1) occupancy
/// lookup for the on-board subset.
///
/// The board is a sparse map over the unbounded lattice; there is no dense
/// grid anywhere. The engine never mutates a snapshot: the caller commits a
/// move and rebuilds.
#[derive(Clone, Debug)]
pub struct BoardState {
    pieces: Vec<Piece>,
    by_cell: FxHashMap<Coord, PieceId>,
}

impl BoardState {
    /// Build a snapshot, rejecting duplicate ids and cell conflicts.
    pub fn new(pieces: &[Piece]) -> Result<Self, RulesError> {
        let mut by_cell = FxHashMap::default();
        let mut seen_ids = FxHashMap::default();

        for p in pieces {
            if seen_ids.insert(p.id, ()).is_some() {
                return Err(RulesError::DuplicatePieceId(p.id));
            }
            if let Location::OnBoard(c) = p.location {
                if by_cell.insert(c, p.id).is_some() {
                    return Err(RulesError::CellConflict(c));
                }
            }
        }

        Ok(Self {
            pieces: pieces.to_vec(),
            by_cell,
        })
    }

    pub fn piece(&self, id: PieceId) -> Result<&Piece, RulesError> {
        self.pieces
            .iter()
            .find(|p| p.id == id)
            .ok_or(RulesError::UnknownPiece(id))
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    #[inline]
    pub fn is_occupied(&self, c: Coord) -> bool {
        self.by_cell.contains_key(&c)
    }

    pub fn piece_at(&self, c: Coord) -> Option<&Piece> {
        let id = self.by_cell.get(&c)?;
        self.pieces.iter().find(|p| p.id == *id)
    }

    /// All occupied cells.
    pub fn occupied_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.by_cell.keys().copied()
    }

    /// Occupied cells excluding one piece (the mover, typically).
    pub fn occupied_cells_without(&self, id: PieceId) -> impl Iterator<Item = Coord> + '_ {
        self.by_cell
            .iter()
            .filter(move |(_, pid)| **pid != id)
            .map(|(c, _)| *c)
    }

    pub fn on_board(&self) -> impl Iterator<Item = &Piece> {
        self.pieces
            .iter()
            .filter(|p| matches!(p.location, Location::OnBoard(_)))
    }

    pub fn on_board_count(&self) -> usize {
        self.by_cell.len()
    }

    pub fn hand_pieces(&self, owner: PlayerId) -> impl Iterator<Item = &Piece> {
        self.pieces
            .iter()
            .filter(move |p| p.owner == owner && p.location == Location::InHand)
    }

    /// The cell of `owner`'s boss, if it is on the board.
    pub fn boss_cell(&self, owner: PlayerId) -> Option<Coord> {
        self.on_board()
            .find(|p| p.owner == owner && p.kind.is_boss())
            .and_then(|p| p.cell())
    }
}

impl PartialEq for BoardState {
    fn eq(&self, other: &Self) -> bool {
        self.pieces == other.pieces
    }
}
