//! Committed-move bookkeeping on top of the pure rules engine: whose turn it
//! is, applying an action, and deciding the winner.
//!
//! The rules functions in [`crate::rules`] only ever look at snapshots; this
//! is the one place state actually changes.

use tracing::debug;

use crate::board::{BoardState, Location, Piece, PieceId};
use crate::coord::Coord;
use crate::error::RulesError;
use crate::pieces::{PieceKind, PlayerId};
use crate::rules::{board_move_candidates, hand_placement_candidates, is_boss_surrounded};

/// A turn action as chosen by a player.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Move an on-board piece to a new cell.
    Move { piece: PieceId, to: Coord },
    /// Place a hand piece on the board.
    Place { piece: PieceId, to: Coord },
    /// Return an on-board piece to its owner's hand.
    Withdraw { piece: PieceId },
}

impl Action {
    fn piece(self) -> PieceId {
        match self {
            Action::Move { piece, .. } | Action::Place { piece, .. } | Action::Withdraw { piece } => {
                piece
            }
        }
    }
}

/// What a committed action led to.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    NextTurn(PlayerId),
    Winner(PlayerId),
}

/// The authoritative game state: the full piece collection plus turn and
/// winner bookkeeping.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pieces: Vec<Piece>,
    current_turn: PlayerId,
    winner: Option<PlayerId>,
}

impl GameState {
    /// The standard opening: each player's boss pre-placed on adjacent cells,
    /// the other five dogs in hand, player one to move.
    pub fn standard() -> Self {
        let mut pieces = Vec::with_capacity(12);
        let mut next_id = 1u32;
        for (owner, boss_at) in [
            (PlayerId::One, Coord::new(1, 0)),
            (PlayerId::Two, Coord::new(1, 1)),
        ] {
            for kind in PieceKind::ROSTER {
                if kind.is_boss() {
                    pieces.push(Piece::on_board(next_id, owner, kind, boss_at));
                } else {
                    pieces.push(Piece::in_hand(next_id, owner, kind));
                }
                next_id += 1;
            }
        }
        Self {
            pieces,
            current_turn: PlayerId::One,
            winner: None,
        }
    }

    /// A game from an arbitrary piece collection; validates it the same way
    /// the rules engine would.
    pub fn from_pieces(pieces: Vec<Piece>, current_turn: PlayerId) -> Result<Self, RulesError> {
        BoardState::new(&pieces)?;
        Ok(Self {
            pieces,
            current_turn,
            winner: None,
        })
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn current_turn(&self) -> PlayerId {
        self.current_turn
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// A fresh snapshot for candidate queries.
    pub fn board(&self) -> Result<BoardState, RulesError> {
        BoardState::new(&self.pieces)
    }

    /// Validate and commit one action for the player to move.
    ///
    /// Legality is exactly "the target is among the pipeline's candidates"
    /// (or the pipeline's return-to-hand flag, for withdrawals), so every
    /// committed state satisfies the board invariants. After a move or a
    /// placement the boss-surrounded test runs for both players; a finished
    /// game rejects all further actions.
    pub fn apply(&mut self, action: Action) -> Result<Outcome, RulesError> {
        if self.winner.is_some() {
            return Err(RulesError::GameOver);
        }

        let board = BoardState::new(&self.pieces)?;
        let piece = board.piece(action.piece())?;
        if piece.owner != self.current_turn {
            return Err(RulesError::NotYourTurn(piece.owner));
        }

        let new_location = match action {
            Action::Move { piece, to } => {
                let candidates = board_move_candidates(&board, piece)?;
                if !candidates.cells.contains(&to) {
                    return Err(RulesError::IllegalMove { piece, to });
                }
                Location::OnBoard(to)
            }
            Action::Place { piece, to } => {
                let candidates = hand_placement_candidates(&board, piece)?;
                if !candidates.contains(&to) {
                    return Err(RulesError::IllegalMove { piece, to });
                }
                Location::OnBoard(to)
            }
            Action::Withdraw { piece } => {
                let candidates = board_move_candidates(&board, piece)?;
                if !candidates.can_return_to_hand {
                    return Err(RulesError::IllegalWithdraw(piece));
                }
                Location::InHand
            }
        };

        let id = action.piece();
        for p in &mut self.pieces {
            if p.id == id {
                p.location = new_location;
            }
        }
        debug!(?action, turn = ?self.current_turn, "committed action");

        // Withdrawing removes a blocker and cannot surround anyone.
        if !matches!(action, Action::Withdraw { .. }) {
            let board = BoardState::new(&self.pieces)?;
            for player in [PlayerId::One, PlayerId::Two] {
                if is_boss_surrounded(&board, player) {
                    let winner = player.other();
                    self.winner = Some(winner);
                    debug!(?winner, "boss surrounded, game over");
                    return Ok(Outcome::Winner(winner));
                }
            }
        }

        self.current_turn = self.current_turn.other();
        Ok(Outcome::NextTurn(self.current_turn))
    }
}
