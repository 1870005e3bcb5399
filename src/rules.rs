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

//! Move generation and the legality gate.
//!
//! Targets are *pseudo-legal*: they follow the movement pattern of the
//! piece, stay on the board and respect occupancy, but do not consider
//! whether the own king is left attacked. Castling and en passant are not
//! generated, and promotions are not carried out.
//!
//! # Examples
//!
//! ```
//! use chess_games::{rules, Board, Square};
//!
//! let board = Board::new();
//! let targets = rules::pseudo_legal_targets(&board, Square::G1);
//! assert_eq!(targets.as_slice(), &[Square::H3, Square::F3]);
//!
//! // Malformed labels and empty squares have no targets.
//! assert!(rules::pseudo_legal_targets_for_label(&board, "z9").is_empty());
//! assert!(rules::pseudo_legal_targets_for_label(&board, "e4").is_empty());
//! ```

use arrayvec::ArrayVec;

use crate::{
    attacks::{
        self, Ray, BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, QUEEN_DIRECTIONS,
        ROOK_DIRECTIONS,
    },
    board::Board,
    color::Color,
    errors::InvalidMove,
    m::Move,
    role::Role,
    square::Square,
};

/// Target squares of a single piece. A queen in the middle of an empty
/// board has the most, 27.
pub type Targets = ArrayVec<Square, 27>;

/// Whether the legality gate rejects moves that leave the own king
/// attacked.
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(rename_all = "snake_case"))]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Default)]
pub enum KingSafety {
    /// Only movement patterns and occupancy are checked.
    #[default]
    Unchecked,
    /// The move is also played on a scratch board, and rejected if any
    /// opposing piece then attacks the own king.
    Enforced,
}

/// Computes the pseudo-legal targets of the piece on `from`, in a fixed
/// order per role. Returns no targets if `from` is empty.
///
/// * Pawns push one square forward if it is empty, and two squares from
///   their starting rank if both are empty. They move diagonally forward
///   only to capture.
/// * Knights and kings step to any square not held by a friendly piece.
/// * Rooks, bishops and queens slide until the first occupied square,
///   which is included if it holds an enemy piece.
///
/// The side to move plays no role here.
pub fn pseudo_legal_targets(board: &Board, from: Square) -> Targets {
    let mut targets = Targets::new();

    let Some(piece) = board.piece_at(from) else {
        return targets;
    };

    let color = piece.color();
    match piece.role() {
        Role::Pawn => pawn_targets(board, from, color, &mut targets),
        Role::Knight => stepping_targets(board, from, color, &KNIGHT_OFFSETS, &mut targets),
        Role::King => stepping_targets(board, from, color, &KING_OFFSETS, &mut targets),
        Role::Rook => sliding_targets(board, from, color, &ROOK_DIRECTIONS, &mut targets),
        Role::Bishop => sliding_targets(board, from, color, &BISHOP_DIRECTIONS, &mut targets),
        Role::Queen => sliding_targets(board, from, color, &QUEEN_DIRECTIONS, &mut targets),
    }

    targets
}

/// Like [`pseudo_legal_targets()`], but takes a square label. A malformed
/// label has no targets.
pub fn pseudo_legal_targets_for_label(board: &Board, from: &str) -> Targets {
    from.parse()
        .map_or_else(|_| Targets::new(), |sq| pseudo_legal_targets(board, sq))
}

fn pawn_targets(board: &Board, from: Square, color: Color, targets: &mut Targets) {
    let forward = color.forward();

    if let Some(single) = from.offset(0, forward) {
        if board.piece_at(single).is_none() {
            targets.push(single);

            if from.rank() == color.pawn_rank() {
                if let Some(double) = from.offset(0, 2 * forward) {
                    if board.piece_at(double).is_none() {
                        targets.push(double);
                    }
                }
            }
        }
    }

    for to in attacks::pawn_attacks(color, from) {
        if board.color_at(to) == Some(!color) {
            targets.push(to);
        }
    }
}

fn stepping_targets(
    board: &Board,
    from: Square,
    color: Color,
    offsets: &[(i32, i32)],
    targets: &mut Targets,
) {
    for &(df, dr) in offsets {
        if let Some(to) = from.offset(df, dr) {
            if board.color_at(to) != Some(color) {
                targets.push(to);
            }
        }
    }
}

fn sliding_targets(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[(i32, i32)],
    targets: &mut Targets,
) {
    for &direction in directions {
        for to in Ray::new(board, from, direction) {
            if board.color_at(to) != Some(color) {
                targets.push(to);
            }
        }
    }
}

/// Runs the legality gate for `turn` to play `m` on `board`, reporting the
/// first check that fails.
///
/// The checks run in this order: the move goes somewhere, there is a piece
/// on the source square, it belongs to `turn`, the destination does not
/// hold a friendly piece, the destination is a
/// [pseudo-legal target](pseudo_legal_targets()), and finally, if
/// `king_safety` is [`KingSafety::Enforced`], the own king is not attacked
/// afterwards.
///
/// # Errors
///
/// Returns the [`InvalidMove`] describing the failed check.
pub fn validate(
    board: &Board,
    turn: Color,
    m: &Move,
    king_safety: KingSafety,
) -> Result<(), InvalidMove> {
    if m.is_null() {
        return Err(InvalidMove::SameSquare);
    }

    let mover = board
        .piece_at(m.from)
        .ok_or(InvalidMove::NoPieceOnSource { square: m.from })?;

    if mover.color() != turn {
        return Err(InvalidMove::NotYourTurn { turn });
    }

    if board.color_at(m.to) == Some(turn) {
        return Err(InvalidMove::FriendlyDestination { square: m.to });
    }

    if !pseudo_legal_targets(board, m.from).contains(&m.to) {
        return Err(InvalidMove::IllegalMove);
    }

    if king_safety == KingSafety::Enforced && leaves_king_attacked(board, m) {
        return Err(InvalidMove::KingInCheck);
    }

    Ok(())
}

/// Tests if `turn` may play `m` on `board`. See [`validate()`].
pub fn is_legal(board: &Board, turn: Color, m: &Move, king_safety: KingSafety) -> bool {
    validate(board, turn, m, king_safety).is_ok()
}

/// Like [`is_legal()`], but takes square labels. Malformed labels are not
/// legal.
pub fn is_legal_labels(
    board: &Board,
    turn: Color,
    from: &str,
    to: &str,
    king_safety: KingSafety,
) -> bool {
    Move::from_labels(from, to).is_ok_and(|m| is_legal(board, turn, &m, king_safety))
}

/// Plays `m` on a scratch copy of `board` and tests if the king of the
/// moving side is attacked afterwards. A side without a king is never in
/// check.
pub fn leaves_king_attacked(board: &Board, m: &Move) -> bool {
    let Some(color) = board.color_at(m.from) else {
        return false;
    };

    let mut after = board.clone();
    if after.move_piece(m.from, m.to).is_err() {
        return false;
    }

    after
        .king_of(color)
        .is_some_and(|king| attacks::is_attacked(&after, king, !color))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(fen: &str) -> Board {
        fen.parse().expect("valid board fen")
    }

    fn targets(board: &Board, from: Square) -> Vec<Square> {
        pseudo_legal_targets(board, from).to_vec()
    }

    #[test]
    fn test_starting_position_has_twenty_white_moves() {
        let b = Board::new();
        let total: usize = Square::ALL
            .into_iter()
            .filter(|&sq| b.color_at(sq) == Some(Color::White))
            .map(|sq| pseudo_legal_targets(&b, sq).len())
            .sum();
        assert_eq!(total, 20);
    }

    #[test]
    fn test_rook_blocked_by_friend_captures_enemy() {
        let b = board("8/8/8/8/8/8/P7/R2n4");
        assert_eq!(targets(&b, Square::A1), vec![Square::B1, Square::C1, Square::D1]);
    }

    #[test]
    fn test_rook_on_open_board() {
        let b = board("8/8/8/8/3R4/8/8/8");
        assert_eq!(targets(&b, Square::D4).len(), 14);
    }

    #[test]
    fn test_bishop_rays() {
        let b = board("8/8/8/8/8/4p3/8/2B5");
        assert_eq!(
            targets(&b, Square::C1),
            vec![Square::D2, Square::E3, Square::B2, Square::A3]
        );
    }

    #[test]
    fn test_queen_on_empty_board() {
        let b = board("8/8/8/8/3Q4/8/8/8");
        assert_eq!(targets(&b, Square::D4).len(), 27);
    }

    #[test]
    fn test_pawn_double_push() {
        let mut b = Board::new();
        assert_eq!(targets(&b, Square::E2), vec![Square::E3, Square::E4]);
        assert_eq!(targets(&b, Square::D7), vec![Square::D6, Square::D5]);

        // Any piece directly in front blocks both pushes.
        b.move_piece(Square::G8, Square::E3).expect("knight on g8");
        assert!(targets(&b, Square::E2).is_empty());
    }

    #[test]
    fn test_pawn_double_push_blocked_on_second_square() {
        let b = board("8/8/8/8/4n3/8/4P3/8");
        assert_eq!(targets(&b, Square::E2), vec![Square::E3]);
    }

    #[test]
    fn test_pawn_captures_only_enemies() {
        let b = board("8/8/8/8/8/3p1P2/4P3/8");
        assert_eq!(targets(&b, Square::E2), vec![Square::E3, Square::E4, Square::D3]);
    }

    #[test]
    fn test_pawn_never_moves_to_empty_diagonal() {
        let b = board("8/8/8/8/8/8/4P3/8");
        assert!(!targets(&b, Square::E2).contains(&Square::D3));
        assert!(!targets(&b, Square::E2).contains(&Square::F3));
    }

    #[test]
    fn test_pawn_double_push_ignores_has_moved() {
        let mut b = board("8/8/8/8/8/8/4P3/8");
        let mut pawn = b.remove_piece_at(Square::E2).expect("pawn");
        pawn.set_has_moved(true);
        b.set_piece_at(Square::E2, pawn);
        assert_eq!(targets(&b, Square::E2), vec![Square::E3, Square::E4]);
    }

    #[test]
    fn test_black_pawn_moves_down() {
        let b = board("8/4p3/3P4/8/8/8/8/8");
        assert_eq!(targets(&b, Square::E7), vec![Square::E6, Square::E5, Square::D6]);
    }

    #[test]
    fn test_knight_targets() {
        let b = Board::new();
        assert_eq!(targets(&b, Square::B1), vec![Square::C3, Square::A3]);
    }

    #[test]
    fn test_knight_captures() {
        let b = board("8/8/8/8/8/2p5/3P4/1N6");
        assert_eq!(targets(&b, Square::B1), vec![Square::C3, Square::A3]);
    }

    #[test]
    fn test_king_targets() {
        assert!(targets(&Board::new(), Square::E1).is_empty());

        let b = board("8/8/8/8/8/8/3p4/4K3");
        assert_eq!(
            targets(&b, Square::E1),
            vec![Square::D1, Square::D2, Square::E2, Square::F1, Square::F2]
        );
    }

    #[test]
    fn test_empty_and_malformed_sources() {
        let b = Board::new();
        assert!(pseudo_legal_targets(&b, Square::E4).is_empty());
        for label in ["", "e", "e22", "i2", "E2"] {
            assert!(pseudo_legal_targets_for_label(&b, label).is_empty(), "{label}");
        }
        assert_eq!(
            pseudo_legal_targets_for_label(&b, "e2").as_slice(),
            &[Square::E3, Square::E4]
        );
    }

    #[test]
    fn test_targets_ignore_turn() {
        let b = Board::new();
        assert_eq!(targets(&b, Square::E7), vec![Square::E6, Square::E5]);
    }

    #[test]
    fn test_validate_order() {
        let b = Board::new();
        let unchecked = KingSafety::Unchecked;
        let v = |from, to| validate(&b, Color::White, &Move::new(from, to), unchecked);

        assert_eq!(v(Square::E2, Square::E2), Err(InvalidMove::SameSquare));
        assert_eq!(
            v(Square::E3, Square::E4),
            Err(InvalidMove::NoPieceOnSource { square: Square::E3 })
        );
        assert_eq!(
            v(Square::E7, Square::E5),
            Err(InvalidMove::NotYourTurn { turn: Color::White })
        );
        assert_eq!(
            v(Square::A1, Square::A2),
            Err(InvalidMove::FriendlyDestination { square: Square::A2 })
        );
        assert_eq!(v(Square::E2, Square::E5), Err(InvalidMove::IllegalMove));
        assert_eq!(v(Square::A1, Square::A7), Err(InvalidMove::IllegalMove));
        assert_eq!(v(Square::E2, Square::E4), Ok(()));
    }

    #[test]
    fn test_is_legal_labels() {
        let b = Board::new();
        let unchecked = KingSafety::Unchecked;
        assert!(is_legal_labels(&b, Color::White, "g1", "f3", unchecked));
        assert!(!is_legal_labels(&b, Color::White, "z9", "e4", unchecked));
        assert!(!is_legal_labels(&b, Color::White, "e2", "i1", unchecked));
        assert!(!is_legal_labels(&b, Color::White, "e2", "e2", unchecked));
        assert!(!is_legal_labels(&b, Color::Black, "g1", "f3", unchecked));
        assert!(is_legal_labels(&b, Color::Black, "g8", "f6", unchecked));
    }

    #[test]
    fn test_king_safety() {
        // Moving along the pin keeps the king covered.
        let b = board("4r3/8/8/8/8/8/4P3/4K3");
        let m = Move::new(Square::E2, Square::E3);
        assert!(is_legal(&b, Color::White, &m, KingSafety::Unchecked));
        assert_eq!(validate(&b, Color::White, &m, KingSafety::Enforced), Ok(()));

        // Already in check, and the pawn move does nothing about it.
        let b = board("8/8/8/8/8/8/3P4/2K1r3");
        let m = Move::new(Square::D2, Square::D3);
        assert!(is_legal(&b, Color::White, &m, KingSafety::Unchecked));
        assert!(!is_legal(&b, Color::White, &m, KingSafety::Enforced));

        let b = board("8/8/8/8/8/8/8/4K2r");
        let m = Move::new(Square::E1, Square::F1);
        assert!(is_legal(&b, Color::White, &m, KingSafety::Unchecked));
        assert_eq!(
            validate(&b, Color::White, &m, KingSafety::Enforced),
            Err(InvalidMove::KingInCheck)
        );
        assert!(is_legal(&b, Color::White, &Move::new(Square::E1, Square::E2), KingSafety::Enforced));
    }

    #[test]
    fn test_king_safety_pin() {
        let b = board("8/8/8/8/8/8/8/1K1B2r1");
        let m = Move::new(Square::D1, Square::E2);
        assert!(is_legal(&b, Color::White, &m, KingSafety::Unchecked));
        assert_eq!(
            validate(&b, Color::White, &m, KingSafety::Enforced),
            Err(InvalidMove::KingInCheck)
        );
    }

    #[test]
    fn test_king_safety_without_king() {
        let b = board("8/8/8/8/8/8/4P3/4r3");
        let m = Move::new(Square::E2, Square::E3);
        assert!(!leaves_king_attacked(&b, &m));
    }
}
