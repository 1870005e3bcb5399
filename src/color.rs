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

use std::{error::Error, fmt, ops, str::FromStr};

use crate::square::Rank;

/// `White` or `Black`. White always moves first.
#[allow(missing_docs)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Color {
    Black = 0,
    White = 1,
}

impl Color {
    /// Gets the color from its FEN letter.
    pub const fn from_char(ch: char) -> Option<Color> {
        match ch {
            'w' => Some(Color::White),
            'b' => Some(Color::Black),
            _ => None,
        }
    }

    #[inline]
    pub const fn from_white(white: bool) -> Color {
        if white {
            Color::White
        } else {
            Color::Black
        }
    }

    #[inline]
    pub fn fold_wb<T>(self, white: T, black: T) -> T {
        match self {
            Color::White => white,
            Color::Black => black,
        }
    }

    #[inline]
    pub const fn is_white(self) -> bool {
        matches!(self, Color::White)
    }

    #[inline]
    pub const fn is_black(self) -> bool {
        matches!(self, Color::Black)
    }

    /// The rank the pieces of this color start on.
    #[inline]
    pub fn backrank(self) -> Rank {
        self.fold_wb(Rank::First, Rank::Eighth)
    }

    /// The rank the pawns of this color start on.
    #[inline]
    pub fn pawn_rank(self) -> Rank {
        self.fold_wb(Rank::Second, Rank::Seventh)
    }

    /// Rank delta of a single pawn push.
    #[inline]
    pub fn forward(self) -> i32 {
        self.fold_wb(1, -1)
    }

    /// Single lowercase letter as used in piece codes and FENs.
    pub fn char(self) -> char {
        self.fold_wb('w', 'b')
    }

    /// Uppercase name as used by the external game state.
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_games::Color;
    ///
    /// assert_eq!(Color::White.upper_name(), "WHITE");
    /// assert_eq!(Color::Black.upper_name(), "BLACK");
    /// ```
    pub fn upper_name(self) -> &'static str {
        self.fold_wb("WHITE", "BLACK")
    }

    /// `White` and `Black`, in this order.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];
}

impl ops::Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.fold_wb(Color::Black, Color::White)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.fold_wb("white", "black"))
    }
}

/// Error when parsing an invalid color name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseColorError;

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid color")
    }
}

impl Error for ParseColorError {}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Accepts both `white` and `WHITE` style names.
    fn from_str(s: &str) -> Result<Color, ParseColorError> {
        Ok(match s {
            "white" | "WHITE" => Color::White,
            "black" | "BLACK" => Color::Black,
            _ => return Err(ParseColorError),
        })
    }
}
