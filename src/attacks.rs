//! Movement patterns and attack detection.
//!
//! Directions and offsets are `(files, ranks)` pairs. The order of each
//! table is the order in which [`crate::rules`] reports targets.
//!
//! # Example
//!
//! ```
//! use chess_games::{attacks, Board, Color, Square};
//!
//! let board: Board = "4k3/8/8/8/8/8/8/R3K3".parse()?;
//!
//! // The rook on a1 sees along the first rank up to the king.
//! assert!(attacks::is_attacked(&board, Square::D1, Color::White));
//! assert!(attacks::is_attacked(&board, Square::A8, Color::White));
//! assert!(!attacks::is_attacked(&board, Square::B2, Color::White));
//! # Ok::<_, chess_games::board::ParseBoardError>(())
//! ```

use arrayvec::ArrayVec;

use crate::{board::Board, color::Color, role::Role, square::Square};

/// Orthogonal directions.
pub const ROOK_DIRECTIONS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Diagonal directions.
pub const BISHOP_DIRECTIONS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Orthogonal directions followed by diagonal directions.
pub const QUEEN_DIRECTIONS: [(i32, i32); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub const KING_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Capture offsets of a pawn, relative to its direction of travel.
const PAWN_CAPTURE_FILES: [i32; 2] = [-1, 1];

/// Walks from a square in one direction. Yields every empty square and
/// then the first occupied square, if any, regardless of its color.
#[derive(Clone, Debug)]
pub struct Ray<'a> {
    board: &'a Board,
    current: Square,
    direction: (i32, i32),
    done: bool,
}

impl<'a> Ray<'a> {
    pub fn new(board: &'a Board, from: Square, direction: (i32, i32)) -> Ray<'a> {
        Ray {
            board,
            current: from,
            direction,
            done: false,
        }
    }
}

impl Iterator for Ray<'_> {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        if self.done {
            return None;
        }
        let (df, dr) = self.direction;
        match self.current.offset(df, dr) {
            Some(sq) => {
                self.current = sq;
                self.done = self.board.piece_at(sq).is_some();
                Some(sq)
            }
            None => {
                self.done = true;
                None
            }
        }
    }
}

impl std::iter::FusedIterator for Ray<'_> {}

/// The first occupied square when walking from `from` in `direction`.
pub fn first_blocker(board: &Board, from: Square, direction: (i32, i32)) -> Option<Square> {
    Ray::new(board, from, direction).find(|&sq| board.piece_at(sq).is_some())
}

/// Squares a pawn of `color` on `sq` attacks, whether occupied or not.
pub fn pawn_attacks(color: Color, sq: Square) -> impl Iterator<Item = Square> {
    PAWN_CAPTURE_FILES
        .into_iter()
        .filter_map(move |df| sq.offset(df, color.forward()))
}

fn is_piece(board: &Board, sq: Square, color: Color, roles: &[Role]) -> bool {
    board
        .piece_at(sq)
        .is_some_and(|p| p.color() == color && roles.contains(&p.role()))
}

/// Squares of pieces of color `by` that attack `sq`.
///
/// Knights, kings and pawns are listed before sliders. The occupant of
/// `sq` itself, if any, does not matter.
pub fn attackers(board: &Board, sq: Square, by: Color) -> ArrayVec<Square, 16> {
    let mut result = ArrayVec::new();

    let mut push = |from: Square| {
        // A side has at most 16 pieces.
        let _ = result.try_push(from);
    };

    for (df, dr) in KNIGHT_OFFSETS {
        if let Some(from) = sq.offset(df, dr) {
            if is_piece(board, from, by, &[Role::Knight]) {
                push(from);
            }
        }
    }

    for (df, dr) in KING_OFFSETS {
        if let Some(from) = sq.offset(df, dr) {
            if is_piece(board, from, by, &[Role::King]) {
                push(from);
            }
        }
    }

    // A pawn attacks sq from where a pawn of the other color on sq would.
    for from in pawn_attacks(!by, sq) {
        if is_piece(board, from, by, &[Role::Pawn]) {
            push(from);
        }
    }

    for direction in ROOK_DIRECTIONS {
        if let Some(from) = first_blocker(board, sq, direction) {
            if is_piece(board, from, by, &[Role::Rook, Role::Queen]) {
                push(from);
            }
        }
    }

    for direction in BISHOP_DIRECTIONS {
        if let Some(from) = first_blocker(board, sq, direction) {
            if is_piece(board, from, by, &[Role::Bishop, Role::Queen]) {
                push(from);
            }
        }
    }

    result
}

/// Tests if any piece of color `by` attacks `sq`.
pub fn is_attacked(board: &Board, sq: Square, by: Color) -> bool {
    !attackers(board, sq, by).is_empty()
}
