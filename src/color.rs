use std::ops::Not;

/// Represent a color.
///
/// `White` starts on row 0 and its pawns advance towards row 7.  `Black` starts on row 7 and its
/// pawns advance towards row 0.
#[derive(PartialOrd, PartialEq, Eq, Copy, Clone, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    White,
    Black,
}

/// How many colors are there?
pub const NUM_COLORS: usize = 2;
/// List all colors
pub const ALL_COLORS: [Color; NUM_COLORS] = [Color::White, Color::Black];

impl Color {
    /// Convert the `Color` to a `usize` for table lookups.
    #[inline]
    pub fn to_index(&self) -> usize {
        *self as usize
    }

    /// Which way is "forward" for my pawns, as a delta on the y axis.
    ///
    /// ```
    /// use boardreader::Color;
    ///
    /// assert_eq!(Color::White.forward(), 1);
    /// assert_eq!(Color::Black.forward(), -1);
    /// ```
    #[inline]
    pub fn forward(&self) -> i8 {
        match *self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// The row my non-pawn pieces start on.
    #[inline]
    pub fn to_my_backrank(&self) -> u8 {
        match *self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// The row my pawns start on.
    #[inline]
    pub fn to_second_rank(&self) -> u8 {
        match *self {
            Color::White => 1,
            Color::Black => 6,
        }
    }
}

impl Not for Color {
    type Output = Color;

    /// Get the other color.
    #[inline]
    fn not(self) -> Color {
        if self == Color::White {
            Color::Black
        } else {
            Color::White
        }
    }
}

#[test]
fn colors_face_each_other() {
    for color in ALL_COLORS.iter() {
        assert_eq!(color.forward(), -(!*color).forward());
        let distance = color.to_second_rank() as i8 - color.to_my_backrank() as i8;
        assert_eq!(distance, color.forward());
    }
}
