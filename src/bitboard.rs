use crate::square::Square;
use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

/// A set of squares, one bit per square.
///
/// This is the result type of the move generator: each destination square appears at most
/// once, and the order of iteration (lowest index first) carries no meaning.
///
/// ```
/// use boardreader::{BitBoard, Square};
///
/// let bb = BitBoard(7); // lower-left 3 squares
///
/// let mut count = 0;
///
/// // Iterate over each square in the bitboard
/// for _ in bb {
///     count += 1;
/// }
///
/// assert_eq!(count, 3);
/// assert!(bb.contains(Square::make_square(2, 0)));
/// ```
#[derive(PartialEq, Eq, PartialOrd, Clone, Copy, Debug, Default, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct BitBoard(pub u64);

/// An empty bitboard.  It is sometimes useful to use !EMPTY to get the universe of squares.
///
/// ```
///     use boardreader::EMPTY;
///
///     assert_eq!(EMPTY.popcnt(), 0);
///
///     assert_eq!((!EMPTY).popcnt(), 64);
/// ```
pub const EMPTY: BitBoard = BitBoard(0);

impl BitAnd for BitBoard {
    type Output = BitBoard;

    #[inline]
    fn bitand(self, other: BitBoard) -> BitBoard {
        BitBoard(self.0 & other.0)
    }
}

impl BitOr for BitBoard {
    type Output = BitBoard;

    #[inline]
    fn bitor(self, other: BitBoard) -> BitBoard {
        BitBoard(self.0 | other.0)
    }
}

impl BitXor for BitBoard {
    type Output = BitBoard;

    #[inline]
    fn bitxor(self, other: BitBoard) -> BitBoard {
        BitBoard(self.0 ^ other.0)
    }
}

impl BitAndAssign for BitBoard {
    #[inline]
    fn bitand_assign(&mut self, other: BitBoard) {
        self.0 &= other.0;
    }
}

impl BitOrAssign for BitBoard {
    #[inline]
    fn bitor_assign(&mut self, other: BitBoard) {
        self.0 |= other.0;
    }
}

impl BitXorAssign for BitBoard {
    #[inline]
    fn bitxor_assign(&mut self, other: BitBoard) {
        self.0 ^= other.0;
    }
}

impl Not for BitBoard {
    type Output = BitBoard;

    #[inline]
    fn not(self) -> BitBoard {
        BitBoard(!self.0)
    }
}

impl fmt::Display for BitBoard {
    /// Row 7 on top, the same way the board is usually drawn.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut s: String = "".to_owned();
        for y in (0..8).rev() {
            for x in 0..8 {
                if self.contains(Square::make_square(x, y)) {
                    s.push_str("X ");
                } else {
                    s.push_str(". ");
                }
            }
            s.push_str("\n");
        }
        write!(f, "{}", s)
    }
}

impl BitBoard {
    /// Construct a new `BitBoard` with a particular `Square` set
    #[inline]
    pub fn from_square(sq: Square) -> BitBoard {
        BitBoard(1u64 << sq.to_int())
    }

    /// Is this `Square` in the set?
    #[inline]
    pub fn contains(&self, sq: Square) -> bool {
        *self & BitBoard::from_square(sq) != EMPTY
    }

    /// Convert a `BitBoard` to a `Square`.  This grabs the least-significant `Square`
    #[inline]
    pub fn to_square(&self) -> Square {
        Square::new(self.0.trailing_zeros() as u8)
    }

    /// Count the number of `Squares` set in this `BitBoard`
    #[inline]
    pub fn popcnt(&self) -> u32 {
        self.0.count_ones()
    }
}

/// For the `BitBoard`, iterate over every `Square` set.
impl Iterator for BitBoard {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            let result = self.to_square();
            *self ^= BitBoard::from_square(result);
            Some(result)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.popcnt() as usize;
        (len, Some(len))
    }
}

#[test]
fn iterates_every_set_square_once() {
    let squares = [
        Square::make_square(0, 0),
        Square::make_square(7, 0),
        Square::make_square(3, 4),
        Square::make_square(7, 7),
    ];
    let bb = squares
        .iter()
        .fold(EMPTY, |b, s| b | BitBoard::from_square(*s));

    assert_eq!(bb.popcnt(), 4);
    let collected: Vec<Square> = bb.collect();
    assert_eq!(collected, squares.to_vec());
}

#[test]
fn display_draws_top_row_first() {
    let bb = BitBoard::from_square(Square::make_square(0, 7));
    let drawn = format!("{}", bb);
    assert!(drawn.starts_with("X . . . . . . . \n"));
    assert!(drawn.ends_with(". . . . . . . . \n"));
}
