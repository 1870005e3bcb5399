//! Sparse views of a board for external consumers.

use std::slice;

use crate::{board::Board, square::Square};

/// Occupied squares mapped to [piece codes](crate::Piece::code), in
/// ascending square order (`a1`, `b1`, ..., `h1`, `a2`, ..., `h8`).
///
/// Empty squares have no entry. The ordering is stable so that clients can
/// diff consecutive snapshots.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct PositionMap {
    entries: Vec<(Square, &'static str)>,
}

impl PositionMap {
    /// Gets the code of the piece on `sq`.
    pub fn get(&self, sq: Square) -> Option<&'static str> {
        self.entries
            .binary_search_by_key(&sq, |&(key, _)| key)
            .ok()
            .map(|i| self.entries[i].1)
    }

    pub fn contains(&self, sq: Square) -> bool {
        self.get(sq).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Square, &'static str)> + '_ {
        self.entries.iter().copied()
    }
}

impl<'a> IntoIterator for &'a PositionMap {
    type Item = &'a (Square, &'static str);
    type IntoIter = slice::Iter<'a, (Square, &'static str)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PositionMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Projects `board` to a [`PositionMap`].
///
/// # Examples
///
/// ```
/// use chess_games::{view, Board, Square};
///
/// let position = view::position_map(&Board::new());
/// assert_eq!(position.len(), 32);
/// assert_eq!(position.get(Square::E1), Some("wK"));
/// assert_eq!(position.iter().next(), Some((Square::A1, "wR")));
/// ```
pub fn position_map(board: &Board) -> PositionMap {
    PositionMap {
        entries: board.pieces().map(|p| (p.square(), p.code())).collect(),
    }
}
