use thiserror::Error;

use crate::board::PieceId;
use crate::coord::Coord;
use crate::pieces::PlayerId;

/// Errors signalled by the rules engine and the game state machine.
///
/// "No legal moves" is never an error; an empty candidate set is a valid
/// outcome. These variants all mean the input itself was unusable
/// (configuration faults) or an action was rejected by the rules.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RulesError {
    #[error("piece id {0:?} appears more than once")]
    DuplicatePieceId(PieceId),

    #[error("two pieces occupy the same cell {0}")]
    CellConflict(Coord),

    #[error("no piece with id {0:?}")]
    UnknownPiece(PieceId),

    #[error("piece {0:?} is not on the board")]
    PieceNotOnBoard(PieceId),

    #[error("piece {0:?} is not in hand")]
    PieceNotInHand(PieceId),

    #[error("movement profile is malformed")]
    InvalidProfile,

    #[error("it is not {0:?}'s turn")]
    NotYourTurn(PlayerId),

    #[error("move to {to} is not legal for piece {piece:?}")]
    IllegalMove { piece: PieceId, to: Coord },

    #[error("piece {0:?} may not be returned to hand")]
    IllegalWithdraw(PieceId),

    #[error("the game is already over")]
    GameOver,
}
