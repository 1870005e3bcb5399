use std::{error::Error, fmt, str::FromStr};

use crate::{
    role::Role,
    square::{Square, SquareError},
};

/// Error when parsing a syntactically invalid move.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseMoveError;

impl fmt::Display for ParseMoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid move notation")
    }
}

impl Error for ParseMoveError {}

impl From<SquareError> for ParseMoveError {
    fn from(_: SquareError) -> ParseMoveError {
        ParseMoveError
    }
}

/// A move from one square to another.
///
/// The promotion role is carried along but not acted upon by the rules.
///
/// # Display
///
/// `Move` is written the way text protocols usually write moves: both
/// square labels, followed by the lowercase promotion letter if any.
///
/// ```
/// use chess_games::{Move, Role, Square};
///
/// let m: Move = "e7e8q".parse()?;
/// assert_eq!(m, Move { from: Square::E7, to: Square::E8, promotion: Some(Role::Queen) });
/// assert_eq!(m.to_string(), "e7e8q");
/// # Ok::<_, chess_games::ParseMoveError>(())
/// ```
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Role>,
}

impl Move {
    /// A move without promotion.
    pub const fn new(from: Square, to: Square) -> Move {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    /// Builds a move from two square labels.
    ///
    /// # Errors
    ///
    /// Returns [`SquareError::InvalidFormat`] if either label is malformed.
    pub fn from_labels(from: &str, to: &str) -> Result<Move, SquareError> {
        Ok(Move::new(from.parse()?, to.parse()?))
    }

    /// Parses a move like `g1f3` or `e7e8q`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseMoveError`] if `s` is not four or five bytes, a label
    /// is malformed, or the promotion letter is not one of `n`, `b`, `r`,
    /// `q`.
    pub fn from_ascii(s: &[u8]) -> Result<Move, ParseMoveError> {
        if s.len() != 4 && s.len() != 5 {
            return Err(ParseMoveError);
        }

        let from = Square::from_ascii(&s[0..2])?;
        let to = Square::from_ascii(&s[2..4])?;

        let promotion = match s.get(4) {
            None => None,
            Some(b'n') => Some(Role::Knight),
            Some(b'b') => Some(Role::Bishop),
            Some(b'r') => Some(Role::Rook),
            Some(b'q') => Some(Role::Queen),
            Some(_) => return Err(ParseMoveError),
        };

        Ok(Move {
            from,
            to,
            promotion,
        })
    }

    /// Checks if the move goes nowhere.
    pub fn is_null(&self) -> bool {
        self.from == self.to
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Move, ParseMoveError> {
        Move::from_ascii(s.as_bytes())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(role) = self.promotion {
            write!(f, "{}", role.char())?;
        }
        Ok(())
    }
}
