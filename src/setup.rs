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

//! Starting arrangements.

use crate::{
    board::Board,
    color::Color,
    piece::Piece,
    role::Role,
    square::{File, Square},
};

/// Back rank roles from the a-file to the h-file.
pub const BACKRANK: [Role; 8] = [
    Role::Rook,
    Role::Knight,
    Role::Bishop,
    Role::Queen,
    Role::King,
    Role::Bishop,
    Role::Knight,
    Role::Rook,
];

/// Places the standard chess starting position on `board`.
///
/// Squares outside the first, second, seventh and eighth ranks are left
/// alone, and pieces already standing on the filled squares are replaced.
/// Call this on an [empty](Board::empty) board.
///
/// # Examples
///
/// ```
/// use chess_games::{setup, Board, Square};
///
/// let mut board = Board::empty();
/// setup::fill_standard(&mut board);
/// assert_eq!(board.count(), 32);
/// assert_eq!(board.piece_at(Square::D8).map(|p| p.code()), Some("bQ"));
/// ```
pub fn fill_standard(board: &mut Board) {
    for color in Color::ALL {
        for (file, role) in File::ALL.into_iter().zip(BACKRANK) {
            let pawn = Square::from_coords(file, color.pawn_rank());
            board.set_piece_at(pawn, Piece::new(color, Role::Pawn, pawn));

            let sq = Square::from_coords(file, color.backrank());
            board.set_piece_at(sq, Piece::new(color, role, sq));
        }
    }
}
