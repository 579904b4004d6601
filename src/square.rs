use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Represent a square on the chess board
///
/// A `Square` always refers to one of the 64 cells.  The only way to reach a square from raw
/// coordinates is through a checked constructor, so nothing holding a `Square` can index off
/// the board.
#[derive(PartialEq, Ord, Eq, PartialOrd, Copy, Clone, Debug, Hash, Default)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Square(u8);

/// How many squares are there?
pub const NUM_SQUARES: usize = 64;

/// Convert an (x, y) coordinate to a board index.
///
/// Both coordinates must already be in `0..8`.  This is plain arithmetic and does not check.
///
/// ```
/// use boardreader::coordinate_to_index;
///
/// assert_eq!(coordinate_to_index(0, 0), 0);
/// assert_eq!(coordinate_to_index(3, 1), 11);
/// assert_eq!(coordinate_to_index(7, 7), 63);
/// ```
#[inline]
pub fn coordinate_to_index(x: u8, y: u8) -> usize {
    (y as usize) * 8 + (x as usize)
}

/// Convert a board index back to its (x, y) coordinate.
#[inline]
pub fn index_to_coordinate(index: usize) -> (u8, u8) {
    ((index % 8) as u8, (index / 8) as u8)
}

impl Square {
    /// Create a new square, given an index.
    /// Note: It is invalid, but allowed, to pass in a number >= 64.  Doing so will wrap around.
    #[inline]
    pub const fn new(sq: u8) -> Square {
        Square(sq & 63)
    }

    /// Make a square given an x (file) and a y (rank) coordinate.
    /// Note: It is invalid, but allowed, to pass in a coordinate >= 8.  Doing so will wrap
    /// around.
    #[inline]
    pub fn make_square(x: u8, y: u8) -> Square {
        Square::new(((y & 7) << 3) | (x & 7))
    }

    /// Make a square from signed coordinates, or `None` if they fall off the board.
    ///
    /// ```
    /// use boardreader::Square;
    ///
    /// assert_eq!(Square::from_coordinates(3, 4), Some(Square::make_square(3, 4)));
    /// assert_eq!(Square::from_coordinates(-1, 4), None);
    /// assert_eq!(Square::from_coordinates(3, 8), None);
    /// ```
    #[inline]
    pub fn from_coordinates(x: i8, y: i8) -> Option<Square> {
        if x < 0 || y < 0 || x > 7 || y > 7 {
            None
        } else {
            Some(Square::make_square(x as u8, y as u8))
        }
    }

    /// Step from this square by `(dx, dy)`.  If that leaves the board, return `None`.
    #[inline]
    pub fn offset(&self, dx: i8, dy: i8) -> Option<Square> {
        Square::from_coordinates(self.get_x() as i8 + dx, self.get_y() as i8 + dy)
    }

    /// Return the x coordinate (file) of this square.
    #[inline]
    pub fn get_x(&self) -> u8 {
        self.0 & 7
    }

    /// Return the y coordinate (rank) of this square.
    #[inline]
    pub fn get_y(&self) -> u8 {
        self.0 >> 3
    }

    /// Return both coordinates.
    #[inline]
    pub fn coordinates(&self) -> (u8, u8) {
        (self.get_x(), self.get_y())
    }

    /// Convert this square to an integer.
    #[inline]
    pub fn to_int(&self) -> u8 {
        self.0
    }

    /// Convert this `Square` to a `usize` for table lookup purposes
    #[inline]
    pub fn to_index(&self) -> usize {
        self.0 as usize
    }
}

const fn all_squares() -> [Square; NUM_SQUARES] {
    let mut result = [Square(0); NUM_SQUARES];
    let mut i = 0;
    while i < NUM_SQUARES {
        result[i] = Square::new(i as u8);
        i += 1;
    }
    result
}

/// A list of every square on the chessboard.
pub const ALL_SQUARES: [Square; NUM_SQUARES] = all_squares();

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (('a' as u8) + self.get_x()) as char,
            (('1' as u8) + self.get_y()) as char
        )
    }
}

impl FromStr for Square {
    type Err = Error;

    /// Parse a square such as `e4`.  The file letter is x, the rank digit is y + 1.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidSquare {
            square: s.to_string(),
        };
        let ch: Vec<char> = s.chars().collect();
        if ch.len() != 2 {
            return Err(invalid());
        }
        let x = match ch[0] {
            'a'..='h' => (ch[0] as u8) - ('a' as u8),
            _ => return Err(invalid()),
        };
        let y = match ch[1] {
            '1'..='8' => (ch[1] as u8) - ('1' as u8),
            _ => return Err(invalid()),
        };
        Ok(Square::make_square(x, y))
    }
}
