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

use crate::{color::Color, role::Role, square::Square};

/// A piece on the board.
///
/// The [`Color`] and [`Role`] are fixed for the lifetime of the piece. The
/// square is kept in sync by the [`Board`](crate::Board) that owns it, and
/// the has-moved flag is set the first time the board relocates it.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Piece {
    color: Color,
    role: Role,
    square: Square,
    has_moved: bool,
}

/// Codes indexed by `[color as usize][role as usize - 1]`.
static CODES: [[&str; 6]; 2] = [
    ["bP", "bN", "bB", "bR", "bQ", "bK"],
    ["wP", "wN", "wB", "wR", "wQ", "wK"],
];

impl Piece {
    /// A piece standing on `square` that has not moved yet.
    pub const fn new(color: Color, role: Role, square: Square) -> Piece {
        Piece {
            color,
            role,
            square,
            has_moved: false,
        }
    }

    #[inline]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// The square this piece stands on.
    #[inline]
    pub const fn square(&self) -> Square {
        self.square
    }

    /// Whether the piece has been moved at least once.
    #[inline]
    pub const fn has_moved(&self) -> bool {
        self.has_moved
    }

    pub fn set_has_moved(&mut self, has_moved: bool) {
        self.has_moved = has_moved;
    }

    pub(crate) fn place(&mut self, square: Square) {
        self.square = square;
    }

    /// Two letter code: `w` or `b`, followed by the uppercase role letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_games::{Color, Piece, Role, Square};
    ///
    /// let knight = Piece::new(Color::Black, Role::Knight, Square::G8);
    /// assert_eq!(knight.code(), "bN");
    /// ```
    pub fn code(&self) -> &'static str {
        CODES[self.color as usize][self.role as usize - 1]
    }

    /// Letter used in FENs, uppercase for white.
    pub fn fen_char(&self) -> char {
        self.role.fen_char(self.color)
    }

    /// Whether both pieces belong to the same side.
    #[inline]
    pub fn is_friend_of(&self, other: &Piece) -> bool {
        self.color == other.color
    }
}
