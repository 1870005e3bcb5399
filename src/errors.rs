// This file is part of the chess-games library.
// Copyright (C) 2025 The chess-games developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

use std::{error::Error, fmt};

use crate::{color::Color, game::GameId, square::Square};

/// Reason why a submitted move was rejected.
///
/// Variants are listed in the order the checks run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum InvalidMove {
    /// The source or destination is not a square label.
    MalformedSquare,
    /// Source and destination are the same square.
    SameSquare,
    /// There is no piece on the source square.
    NoPieceOnSource {
        #[allow(missing_docs)]
        square: Square,
    },
    /// The piece on the source square belongs to the side that is not to
    /// move.
    NotYourTurn {
        /// The side to move.
        turn: Color,
    },
    /// The destination holds a piece of the moving side.
    FriendlyDestination {
        #[allow(missing_docs)]
        square: Square,
    },
    /// The piece cannot move like that.
    IllegalMove,
    /// The move would leave the own king attacked. Only reported when king
    /// safety is [enforced](crate::rules::KingSafety::Enforced).
    KingInCheck,
}

impl fmt::Display for InvalidMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            InvalidMove::MalformedSquare => f.write_str("malformed square"),
            InvalidMove::SameSquare => f.write_str("source and destination are the same square"),
            InvalidMove::NoPieceOnSource { square } => {
                write!(f, "no piece on source square {square}")
            }
            InvalidMove::NotYourTurn { turn } => write!(f, "not your turn: {turn} to move"),
            InvalidMove::FriendlyDestination { square } => {
                write!(f, "destination {square} is occupied by a friendly piece")
            }
            InvalidMove::IllegalMove => f.write_str("illegal move"),
            InvalidMove::KingInCheck => f.write_str("illegal move: king would be in check"),
        }
    }
}

impl Error for InvalidMove {}

/// Error when operating on a stored game.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GameError {
    /// No game with this id.
    NotFound {
        #[allow(missing_docs)]
        id: GameId,
    },
    /// The submitted revision is missing or does not match the current
    /// revision. Fetch the game again and retry.
    Conflict {
        #[allow(missing_docs)]
        current: u64,
        #[allow(missing_docs)]
        submitted: Option<u64>,
    },
    /// The move was rejected.
    InvalidMove(InvalidMove),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::NotFound { id } => write!(f, "game not found: {id}"),
            GameError::Conflict {
                current,
                submitted: Some(submitted),
            } => write!(
                f,
                "revision conflict: game is at revision {current}, got {submitted}"
            ),
            GameError::Conflict {
                current,
                submitted: None,
            } => write!(
                f,
                "revision conflict: game is at revision {current}, got none"
            ),
            GameError::InvalidMove(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl Error for GameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            GameError::InvalidMove(err) => Some(err),
            _ => None,
        }
    }
}

impl From<InvalidMove> for GameError {
    fn from(err: InvalidMove) -> GameError {
        GameError::InvalidMove(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = InvalidMove::NoPieceOnSource { square: Square::E3 };
        assert!(err.to_string().contains("no piece"));
        assert!(InvalidMove::IllegalMove.to_string().contains("illegal move"));
        assert!(InvalidMove::KingInCheck.to_string().contains("illegal move"));
    }

    #[test]
    fn test_source() {
        let err = GameError::from(InvalidMove::SameSquare);
        assert!(err.source().is_some());
        let err = GameError::Conflict {
            current: 1,
            submitted: Some(0),
        };
        assert!(err.source().is_none());
    }
}
