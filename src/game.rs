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

//! A single game and its snapshots.

use std::{borrow::Borrow, fmt};

use crate::{
    board::Board,
    color::Color,
    errors::{GameError, InvalidMove},
    m::Move,
    rules::{self, KingSafety},
    square::Square,
    view::{self, PositionMap},
};

/// Opaque identifier of a game.
#[derive(Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct GameId(String);

impl GameId {
    /// Generates a fresh id of 32 lowercase hex digits.
    pub fn random() -> GameId {
        GameId(format!("{:032x}", rand::random::<u128>()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for GameId {
    fn from(id: String) -> GameId {
        GameId(id)
    }
}

impl From<&str> for GameId {
    fn from(id: &str) -> GameId {
        GameId(id.to_owned())
    }
}

impl Borrow<str> for GameId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for GameId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for GameId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// Lifecycle of a game. Games never end, since checkmate, stalemate and
/// the draw rules are not detected.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Status {
    #[default]
    InProgress,
}

impl Status {
    pub const fn as_str(self) -> &'static str {
        match self {
            Status::InProgress => "IN_PROGRESS",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Status {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A move submitted by a client.
///
/// Squares are kept as the labels the client sent, so that malformed input
/// is reported as an [`InvalidMove`] rather than failing earlier.
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct MoveRequest {
    pub from: String,
    pub to: String,
    /// Requested promotion role. Accepted but not acted upon.
    #[cfg_attr(feature = "serde", serde(default))]
    pub promotion: Option<String>,
    /// The revision the client based the move on. Must match the current
    /// revision of the game.
    #[cfg_attr(feature = "serde", serde(default, rename = "clientRev"))]
    pub client_revision: Option<u64>,
}

impl MoveRequest {
    pub fn new(from: &str, to: &str, client_revision: u64) -> MoveRequest {
        MoveRequest {
            from: from.to_owned(),
            to: to.to_owned(),
            promotion: None,
            client_revision: Some(client_revision),
        }
    }
}

/// Point-in-time snapshot of a game, detached from the live board.
///
/// # Serialization
///
/// With the `serde` feature, a snapshot serializes with the field names
/// `gameId`, `rev`, `position`, `turn`, `status`, `lastFrom` and `lastTo`.
/// The turn is written as `WHITE` or `BLACK`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct GameState {
    pub id: GameId,
    pub revision: u64,
    pub position: PositionMap,
    pub turn: Color,
    pub status: Status,
    pub last_from: Option<Square>,
    pub last_to: Option<Square>,
}

#[cfg(feature = "serde")]
impl serde::Serialize for GameState {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct as _;

        let mut state = serializer.serialize_struct("GameState", 7)?;
        state.serialize_field("gameId", &self.id)?;
        state.serialize_field("rev", &self.revision)?;
        state.serialize_field("position", &self.position)?;
        state.serialize_field("turn", self.turn.upper_name())?;
        state.serialize_field("status", &self.status)?;
        state.serialize_field("lastFrom", &self.last_from)?;
        state.serialize_field("lastTo", &self.last_to)?;
        state.end()
    }
}

/// A game in progress: a board plus turn and revision bookkeeping.
#[derive(Clone, Debug)]
pub struct Game {
    id: GameId,
    board: Board,
    revision: u64,
    turn: Color,
    status: Status,
    last_from: Option<Square>,
    last_to: Option<Square>,
}

impl Game {
    /// A new game at revision 0 from the standard starting position, with
    /// white to move.
    pub fn new(id: GameId) -> Game {
        Game {
            id,
            board: Board::new(),
            revision: 0,
            turn: Color::White,
            status: Status::InProgress,
            last_from: None,
            last_to: None,
        }
    }

    pub fn id(&self) -> &GameId {
        &self.id
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn last_move(&self) -> Option<(Square, Square)> {
        self.last_from.zip(self.last_to)
    }

    pub fn state(&self) -> GameState {
        GameState {
            id: self.id.clone(),
            revision: self.revision,
            position: view::position_map(&self.board),
            turn: self.turn,
            status: self.status,
            last_from: self.last_from,
            last_to: self.last_to,
        }
    }

    /// Validates and plays a move.
    ///
    /// Nothing changes unless the move is accepted. On success the board is
    /// updated, the revision is incremented by one, the move is remembered
    /// as the last move and the turn passes to the other side.
    ///
    /// # Errors
    ///
    /// * [`GameError::Conflict`] if `request` is not based on the current
    ///   revision.
    /// * [`GameError::InvalidMove`] if a label is malformed or the move is
    ///   rejected by [`rules::validate()`].
    pub fn play(
        &mut self,
        request: &MoveRequest,
        king_safety: KingSafety,
    ) -> Result<Move, GameError> {
        if request.client_revision != Some(self.revision) {
            return Err(GameError::Conflict {
                current: self.revision,
                submitted: request.client_revision,
            });
        }

        let m = Move::from_labels(&request.from, &request.to)
            .map_err(|_| InvalidMove::MalformedSquare)?;

        rules::validate(&self.board, self.turn, &m, king_safety)?;

        self.board
            .move_piece(m.from, m.to)
            .map_err(|_| InvalidMove::NoPieceOnSource { square: m.from })?;

        self.revision += 1;
        self.last_from = Some(m.from);
        self.last_to = Some(m.to);
        self.turn = !self.turn;

        Ok(m)
    }
}
