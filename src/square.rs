use std::{
    error::Error,
    fmt::{self, Write as _},
    str::FromStr,
};

/// Error when converting a label or an index to a [`Square`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SquareError {
    /// The label is not a file letter `a`-`h` followed by a rank digit
    /// `1`-`8`.
    InvalidFormat,
    /// The index is not in `0..=63`.
    OutOfRange,
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match *self {
            SquareError::InvalidFormat => "invalid square name",
            SquareError::OutOfRange => "square index out of range",
        })
    }
}

impl Error for SquareError {}

/// A file of the chessboard.
#[allow(missing_docs)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
#[repr(u8)]
pub enum File {
    A = 0,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl File {
    /// Gets the file from its lowercase letter.
    pub const fn from_char(ch: char) -> Option<File> {
        match ch {
            'a'..='h' => Some(File::ALL[(ch as u8 - b'a') as usize]),
            _ => None,
        }
    }

    #[inline]
    pub const fn char(self) -> char {
        (b'a' + self as u8) as char
    }

    /// Moves `delta` files to the right, or `None` when leaving the board.
    #[inline]
    pub const fn offset(self, delta: i32) -> Option<File> {
        let index = self as i32 + delta;
        if 0 <= index && index < 8 {
            Some(File::ALL[index as usize])
        } else {
            None
        }
    }

    /// `A` to `H`.
    pub const ALL: [File; 8] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
    ];
}

/// A rank of the chessboard.
#[allow(missing_docs)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
#[repr(u8)]
pub enum Rank {
    First = 0,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
    Seventh,
    Eighth,
}

impl Rank {
    /// Gets the rank from its digit.
    pub const fn from_char(ch: char) -> Option<Rank> {
        match ch {
            '1'..='8' => Some(Rank::ALL[(ch as u8 - b'1') as usize]),
            _ => None,
        }
    }

    #[inline]
    pub const fn char(self) -> char {
        (b'1' + self as u8) as char
    }

    /// Moves `delta` ranks up, or `None` when leaving the board.
    #[inline]
    pub const fn offset(self, delta: i32) -> Option<Rank> {
        let index = self as i32 + delta;
        if 0 <= index && index < 8 {
            Some(Rank::ALL[index as usize])
        } else {
            None
        }
    }

    /// `First` to `Eighth`.
    pub const ALL: [Rank; 8] = [
        Rank::First,
        Rank::Second,
        Rank::Third,
        Rank::Fourth,
        Rank::Fifth,
        Rank::Sixth,
        Rank::Seventh,
        Rank::Eighth,
    ];
}

/// A square of the chessboard, indexed `(rank << 3) | file` so that
/// `A1` is `0`, `H1` is `7` and `H8` is `63`.
///
/// The textual form is the label, a file letter followed by a rank digit.
///
/// # Examples
///
/// ```
/// use chess_games::{File, Rank, Square};
///
/// let sq: Square = "e4".parse()?;
/// assert_eq!(sq, Square::E4);
/// assert_eq!(u32::from(sq), 28);
/// assert_eq!(sq.file(), File::E);
/// assert_eq!(sq.rank(), Rank::Fourth);
/// assert_eq!(sq.to_string(), "e4");
/// # Ok::<_, chess_games::SquareError>(())
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Square(u8);

impl Square {
    /// Combines a file and a rank.
    #[inline]
    pub const fn from_coords(file: File, rank: Rank) -> Square {
        Square(((rank as u8) << 3) | file as u8)
    }

    /// Parses a label such as `e4`.
    ///
    /// # Errors
    ///
    /// Returns [`SquareError::InvalidFormat`] if `s` is not exactly two
    /// bytes, or the bytes are not a file letter `a`-`h` followed by a rank
    /// digit `1`-`8`.
    pub fn from_ascii(s: &[u8]) -> Result<Square, SquareError> {
        let &[file, rank] = s else {
            return Err(SquareError::InvalidFormat);
        };
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(SquareError::InvalidFormat);
        }
        let index = (u32::from(rank - b'1') << 3) | u32::from(file - b'a');
        Square::try_from(index)
    }

    #[inline]
    pub const fn file(self) -> File {
        File::ALL[(self.0 & 7) as usize]
    }

    #[inline]
    pub const fn rank(self) -> Rank {
        Rank::ALL[(self.0 >> 3) as usize]
    }

    #[inline]
    pub const fn to_u32(self) -> u32 {
        self.0 as u32
    }

    #[inline]
    pub const fn to_usize(self) -> usize {
        self.0 as usize
    }

    /// Steps `df` files and `dr` ranks away, or `None` when leaving the
    /// board. Never wraps around an edge.
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_games::Square;
    ///
    /// assert_eq!(Square::B1.offset(1, 2), Some(Square::C3));
    /// assert_eq!(Square::H4.offset(1, 0), None);
    /// ```
    #[inline]
    pub const fn offset(self, df: i32, dr: i32) -> Option<Square> {
        match (self.file().offset(df), self.rank().offset(dr)) {
            (Some(file), Some(rank)) => Some(Square::from_coords(file, rank)),
            _ => None,
        }
    }

    /// Writes the two letter label into `f`.
    fn write_label<W: fmt::Write>(self, f: &mut W) -> fmt::Result {
        f.write_char(self.file().char())?;
        f.write_char(self.rank().char())
    }

    /// All squares in ascending index order.
    pub const ALL: [Square; 64] = {
        let mut all = [Square(0); 64];
        let mut i = 0;
        while i < 64 {
            all[i] = Square(i as u8);
            i += 1;
        }
        all
    };
}

macro_rules! try_square_from_int_impl {
    ($($t:ty)+) => {
        $(impl TryFrom<$t> for Square {
            type Error = SquareError;

            #[inline]
            fn try_from(value: $t) -> Result<Square, SquareError> {
                if (0..64).contains(&value) {
                    Ok(Square(value as u8))
                } else {
                    Err(SquareError::OutOfRange)
                }
            }
        })+
    }
}

try_square_from_int_impl! { u8 i8 u32 i32 u64 i64 usize isize }

macro_rules! int_from_square_impl {
    ($($t:ty)+) => {
        $(impl From<Square> for $t {
            #[inline]
            fn from(sq: Square) -> $t {
                sq.0 as $t
            }
        })+
    }
}

int_from_square_impl! { u8 u32 u64 usize }

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Square, SquareError> {
        Square::from_ascii(s.as_bytes())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_label(f)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.file().char().to_ascii_uppercase())?;
        f.write_char(self.rank().char())
    }
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for Square {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Square> {
        Ok(Square(u.int_in_range(0..=63)?))
    }

    fn size_hint(_depth: usize) -> (usize, Option<usize>) {
        (1, Some(1))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Square {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Square {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Square, D::Error> {
        struct SquareVisitor;

        impl serde::de::Visitor<'_> for SquareVisitor {
            type Value = Square;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("square name")
            }

            fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<Square, E> {
                value.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(SquareVisitor)
    }
}

macro_rules! square_consts {
    ($($name:ident = $index:expr,)+) => {
        impl Square {
            $(
                #[allow(missing_docs)]
                pub const $name: Square = Square($index);
            )+
        }
    }
}

#[rustfmt::skip]
square_consts! {
    A1 = 0, B1 = 1, C1 = 2, D1 = 3, E1 = 4, F1 = 5, G1 = 6, H1 = 7,
    A2 = 8, B2 = 9, C2 = 10, D2 = 11, E2 = 12, F2 = 13, G2 = 14, H2 = 15,
    A3 = 16, B3 = 17, C3 = 18, D3 = 19, E3 = 20, F3 = 21, G3 = 22, H3 = 23,
    A4 = 24, B4 = 25, C4 = 26, D4 = 27, E4 = 28, F4 = 29, G4 = 30, H4 = 31,
    A5 = 32, B5 = 33, C5 = 34, D5 = 35, E5 = 36, F5 = 37, G5 = 38, H5 = 39,
    A6 = 40, B6 = 41, C6 = 42, D6 = 43, E6 = 44, F6 = 45, G6 = 46, H6 = 47,
    A7 = 48, B7 = 49, C7 = 50, D7 = 51, E7 = 52, F7 = 53, G7 = 54, H7 = 55,
    A8 = 56, B8 = 57, C8 = 58, D8 = 59, E8 = 60, F8 = 61, G8 = 62, H8 = 63,
}
