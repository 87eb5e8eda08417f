use crate::error::RulesError;

/// One of the two players.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    #[inline]
    pub fn other(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }
}

/// How a piece is allowed to move across the board.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MovementKind {
    Orthogonal,
    Diagonal,
    OrthogonalDiagonal,
    /// Two cells orthogonally, then one cell at a right angle, hopping over
    /// anything in between.
    BentSpecial,
}

/// Immutable movement descriptor for a piece type.
///
/// `max_steps == None` means unbounded sliding (the bounding-box limit still
/// caps it in practice). For `BentSpecial` the step count is irrelevant.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveProfile {
    pub kind: MovementKind,
    pub max_steps: Option<u8>,
    pub is_boss: bool,
}

impl MoveProfile {
    pub fn new(
        kind: MovementKind,
        max_steps: Option<u8>,
        is_boss: bool,
    ) -> Result<Self, RulesError> {
        if max_steps == Some(0) {
            return Err(RulesError::InvalidProfile);
        }
        Ok(Self {
            kind,
            max_steps,
            is_boss,
        })
    }
}

/// The six standard dog types.
///
/// Exactly one kind (`Boss`) is the boss: it can never be returned to hand
/// and it being surrounded loses the game.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceKind {
    /// Any direction, one step.
    Boss,
    /// Any direction, one step.
    Aniki,
    /// Orthogonal, one step.
    Yaiba,
    /// Diagonal, one step.
    Mamedeppo,
    /// Orthogonal, any distance.
    Totsu,
    /// The bent two-then-one hop.
    Hajike,
}

impl PieceKind {
    pub fn profile(self) -> MoveProfile {
        use MovementKind::*;
        use PieceKind::*;
        let (kind, max_steps, is_boss) = match self {
            Boss => (OrthogonalDiagonal, Some(1), true),
            Aniki => (OrthogonalDiagonal, Some(1), false),
            Yaiba => (Orthogonal, Some(1), false),
            Mamedeppo => (Diagonal, Some(1), false),
            Totsu => (Orthogonal, None, false),
            Hajike => (BentSpecial, None, false),
        };
        MoveProfile {
            kind,
            max_steps,
            is_boss,
        }
    }

    #[inline]
    pub fn is_boss(self) -> bool {
        matches!(self, PieceKind::Boss)
    }

    /// The full per-player roster, boss first.
    pub const ROSTER: [PieceKind; 6] = [
        PieceKind::Boss,
        PieceKind::Aniki,
        PieceKind::Yaiba,
        PieceKind::Mamedeppo,
        PieceKind::Totsu,
        PieceKind::Hajike,
    ];
}
