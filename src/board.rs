//! Piece positions on a board.
//!
//! # Examples
//!
//! ```
//! use chess_games::{Board, Color, Square};
//!
//! let mut board = Board::new();
//! assert_eq!(board.piece_at(Square::E2).map(|p| p.code()), Some("wP"));
//!
//! board.move_piece(Square::E2, Square::E4)?;
//! assert!(board.piece_at(Square::E2).is_none());
//! assert_eq!(board.piece_at(Square::E4).map(|p| p.square()), Some(Square::E4));
//! # Ok::<_, chess_games::board::BoardError>(())
//! ```

use std::{
    error::Error,
    fmt::{self, Write as _},
    str::FromStr,
};

use crate::{
    color::Color,
    piece::Piece,
    role::Role,
    setup,
    square::{File, Rank, Square},
};

/// Error when relocating a piece.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BoardError {
    /// There is no piece on the square to move from.
    EmptySource {
        #[allow(missing_docs)]
        from: Square,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            BoardError::EmptySource { from } => write!(f, "no piece on from-square {from}"),
        }
    }
}

impl Error for BoardError {}

/// Error when parsing the piece placement part of a FEN.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseBoardError;

impl fmt::Display for ParseBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid board fen")
    }
}

impl Error for ParseBoardError {}

/// [`Piece`] positions on a board.
///
/// Each of the 64 squares owns at most one piece. Every primitive that puts
/// a piece on a square also updates the square recorded on the piece, so
/// `board.piece_at(sq).map(Piece::square)` is always `Some(sq)` or `None`.
///
/// The primitives know nothing about the rules. Use [`crate::rules`] to
/// decide whether a move is allowed before calling
/// [`Board::move_piece()`].
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Board {
    /// The standard chess starting position.
    pub fn new() -> Board {
        let mut board = Board::empty();
        setup::fill_standard(&mut board);
        board
    }

    /// A board without any pieces.
    pub const fn empty() -> Board {
        Board {
            squares: [const { None }; 64],
        }
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<&Piece> {
        self.squares[sq.to_usize()].as_ref()
    }

    #[inline]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(Piece::color)
    }

    #[inline]
    pub fn role_at(&self, sq: Square) -> Option<Role> {
        self.piece_at(sq).map(Piece::role)
    }

    /// Puts `piece` on `sq`, returning the piece it replaces.
    pub fn set_piece_at(&mut self, sq: Square, mut piece: Piece) -> Option<Piece> {
        piece.place(sq);
        self.squares[sq.to_usize()].replace(piece)
    }

    /// Clears `sq`, returning the piece that stood there.
    pub fn remove_piece_at(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.to_usize()].take()
    }

    /// Relocates the piece on `from` to `to` and marks it as moved. Anything
    /// standing on `to` is captured and returned.
    ///
    /// This does not check that the move is legal.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptySource`] if there is no piece on `from`.
    /// The board is unchanged in that case.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Result<Option<Piece>, BoardError> {
        let mut piece = self
            .remove_piece_at(from)
            .ok_or(BoardError::EmptySource { from })?;
        piece.set_has_moved(true);
        Ok(self.set_piece_at(to, piece))
    }

    /// Iterates over all pieces in ascending square order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.squares.iter().flatten()
    }

    /// Number of occupied squares.
    pub fn count(&self) -> usize {
        self.pieces().count()
    }

    pub fn is_empty(&self) -> bool {
        self.squares.iter().all(Option::is_none)
    }

    /// The square of the first king of `color`, if any.
    pub fn king_of(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|p| p.role() == Role::King && p.color() == color)
            .map(Piece::square)
    }

    /// Parses the piece placement part of a FEN, e.g.
    /// `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR`.
    ///
    /// Pawns that are not on their starting rank are marked as moved.
    ///
    /// # Errors
    ///
    /// Returns [`ParseBoardError`] unless the input describes exactly eight
    /// ranks of eight squares each.
    pub fn from_board_fen(board_fen: &[u8]) -> Result<Board, ParseBoardError> {
        let mut board = Board::empty();
        let mut rank = 7;
        let mut file = 0;

        for &ch in board_fen {
            match ch {
                b'/' if file == 8 && rank > 0 => {
                    file = 0;
                    rank -= 1;
                }
                b'1'..=b'8' => {
                    file += usize::from(ch - b'0');
                    if file > 8 {
                        return Err(ParseBoardError);
                    }
                }
                _ => {
                    let role = Role::from_char(char::from(ch)).ok_or(ParseBoardError)?;
                    if file >= 8 {
                        return Err(ParseBoardError);
                    }
                    let color = Color::from_white(ch.is_ascii_uppercase());
                    let sq = Square::from_coords(File::ALL[file], Rank::ALL[rank]);
                    let mut piece = Piece::new(color, role, sq);
                    if role == Role::Pawn && sq.rank() != color.pawn_rank() {
                        piece.set_has_moved(true);
                    }
                    board.set_piece_at(sq, piece);
                    file += 1;
                }
            }
        }

        if rank == 0 && file == 8 {
            Ok(board)
        } else {
            Err(ParseBoardError)
        }
    }

    /// Renders the piece placement part of a FEN.
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_games::Board;
    ///
    /// assert_eq!(
    ///     Board::new().board_fen(),
    ///     "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"
    /// );
    /// ```
    pub fn board_fen(&self) -> String {
        let mut fen = String::with_capacity(15);

        for rank in Rank::ALL.into_iter().rev() {
            let mut empty = 0u8;

            for file in File::ALL {
                match self.piece_at(Square::from_coords(file, rank)) {
                    Some(piece) => {
                        if empty > 0 {
                            fen.push(char::from(b'0' + empty));
                            empty = 0;
                        }
                        fen.push(piece.fen_char());
                    }
                    None => empty += 1,
                }
            }

            if empty > 0 {
                fen.push(char::from(b'0' + empty));
            }

            if rank > Rank::First {
                fen.push('/');
            }
        }

        fen
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Board, ParseBoardError> {
        Board::from_board_fen(s.as_bytes())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.board_fen())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::ALL.into_iter().rev() {
            for file in File::ALL {
                f.write_char(
                    self.piece_at(Square::from_coords(file, rank))
                        .map_or('.', Piece::fen_char),
                )?;
                f.write_char(if file < File::H { ' ' } else { '\n' })?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_at() {
        let board = Board::new();
        assert_eq!(board.role_at(Square::A2), Some(Role::Pawn));
        assert_eq!(board.color_at(Square::A2), Some(Color::White));
        assert_eq!(board.role_at(Square::B1), Some(Role::Knight));
        assert_eq!(board.piece_at(Square::E4), None);
    }

    #[test]
    fn test_set_piece_at_syncs_square() {
        let mut board = Board::empty();
        let piece = Piece::new(Color::White, Role::Rook, Square::H8);
        assert_eq!(board.set_piece_at(Square::A3, piece), None);
        assert_eq!(board.piece_at(Square::A3).map(Piece::square), Some(Square::A3));
    }

    #[test]
    fn test_remove_piece_at() {
        let mut board = Board::new();
        let removed = board.remove_piece_at(Square::D1).expect("queen");
        assert_eq!(removed.role(), Role::Queen);
        assert_eq!(board.piece_at(Square::D1), None);
        assert_eq!(board.remove_piece_at(Square::D1), None);
    }

    #[test]
    fn test_move_piece() {
        let mut board = Board::new();
        assert_eq!(board.move_piece(Square::G1, Square::F3), Ok(None));
        let knight = board.piece_at(Square::F3).expect("knight");
        assert_eq!(knight.role(), Role::Knight);
        assert_eq!(knight.square(), Square::F3);
        assert!(knight.has_moved());
        assert_eq!(board.piece_at(Square::G1), None);
    }

    #[test]
    fn test_move_piece_captures() {
        let mut board = Board::new();
        let captured = board.move_piece(Square::A1, Square::A7).expect("rook on a1");
        assert_eq!(captured.map(|p| p.code()), Some("bP"));
        assert_eq!(board.count(), 31);
        assert_eq!(board.piece_at(Square::A7).map(Piece::code), Some("wR"));
    }

    #[test]
    fn test_move_piece_from_empty_square() {
        let mut board = Board::new();
        let before = board.clone();
        assert_eq!(
            board.move_piece(Square::E4, Square::E5),
            Err(BoardError::EmptySource { from: Square::E4 })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_board_fen_round_trip() {
        for fen in [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
            "8/8/8/8/8/8/8/8",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R",
        ] {
            let board: Board = fen.parse().expect("valid board fen");
            assert_eq!(board.board_fen(), fen);
        }
    }

    #[test]
    fn test_invalid_board_fen() {
        for fen in [
            "",
            "8/8/8/8/8/8/8",
            "8/8/8/8/8/8/8/8/8",
            "9/8/8/8/8/8/8/8",
            "ppppppppp/8/8/8/8/8/8/8",
            "x7/8/8/8/8/8/8/8",
            "4k4/8/8/8/8/8/8/8",
        ] {
            assert_eq!(fen.parse::<Board>(), Err(ParseBoardError), "{fen}");
        }
    }

    #[test]
    fn test_parsed_pawns_off_start_rank_have_moved() {
        let board: Board = "8/8/8/8/4P3/8/3P4/8".parse().expect("valid board fen");
        assert!(board.piece_at(Square::E4).expect("pawn").has_moved());
        assert!(!board.piece_at(Square::D2).expect("pawn").has_moved());
    }

    #[test]
    fn test_king_of() {
        let board = Board::new();
        assert_eq!(board.king_of(Color::White), Some(Square::E1));
        assert_eq!(board.king_of(Color::Black), Some(Square::E8));
        assert_eq!(Board::empty().king_of(Color::White), None);
    }
}
