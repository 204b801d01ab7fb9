//! Move rejection reasons.

use crate::env::Tile;
use crate::error::{ErrorSeverity, GameError};
use crate::state::Position;

/// Why the hero could not enter a tile.
///
/// Both variants are recovered locally: the move is logged and dropped, the
/// hero stays where it was.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveError {
    #[error("destination {destination} is out of bounds")]
    OutOfBounds { destination: Position },

    #[error("destination {destination} is impassable {tile:?}")]
    Impassable { destination: Position, tile: Tile },
}

impl MoveError {
    /// Adventure-log line describing the rejection.
    pub fn narration(&self) -> String {
        match self {
            Self::OutOfBounds { destination } => {
                format!("Cannot move to {destination} - beyond the edge of the map!")
            }
            Self::Impassable { destination, tile } => {
                format!(
                    "Cannot move to {destination} - {} is impassable!",
                    tile.name()
                )
            }
        }
    }
}

impl GameError for MoveError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::OutOfBounds { .. } => "MOVE_OUT_OF_BOUNDS",
            Self::Impassable { .. } => "MOVE_IMPASSABLE",
        }
    }
}
