//! The packed one-byte piece encoding.
//!
//! `0` is an empty square, `1..=6` are the black pieces and `10..=15` are the white pieces, both
//! in `Piece` order (pawn, knight, bishop, rook, queen, king).  Boards stored as `[u8; 64]` in
//! this encoding can be converted with `Board::from_codes` and `Board::to_codes`.

use crate::color::Color;
use crate::error::Error;
use crate::piece::{Piece, ALL_PIECES};
use std::convert::TryFrom;

pub const NULL_SPACE: u8 = 0x0;

pub const BLACK_PAWN: u8 = 0x1;
pub const BLACK_KNIGHT: u8 = 0x2;
pub const BLACK_BISHOP: u8 = 0x3;
pub const BLACK_ROOK: u8 = 0x4;
pub const BLACK_QUEEN: u8 = 0x5;
pub const BLACK_KING: u8 = 0x6;

pub const WHITE_PAWN: u8 = 0xA;
pub const WHITE_KNIGHT: u8 = 0xB;
pub const WHITE_BISHOP: u8 = 0xC;
pub const WHITE_ROOK: u8 = 0xD;
pub const WHITE_QUEEN: u8 = 0xE;
pub const WHITE_KING: u8 = 0xF;

/// One packed cell.
#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Debug, Hash, Default)]
pub struct PieceCode(pub u8);

impl PieceCode {
    /// Pack the contents of a cell.
    ///
    /// ```
    /// use boardreader::{PieceCode, Piece, Color};
    ///
    /// assert_eq!(PieceCode::encode(None), PieceCode(0));
    /// assert_eq!(PieceCode::encode(Some((Piece::Pawn, Color::Black))), PieceCode(1));
    /// assert_eq!(PieceCode::encode(Some((Piece::King, Color::White))), PieceCode(15));
    /// ```
    #[inline]
    pub fn encode(cell: Option<(Piece, Color)>) -> PieceCode {
        match cell {
            None => PieceCode(NULL_SPACE),
            Some((piece, Color::Black)) => PieceCode(BLACK_PAWN + piece.to_index() as u8),
            Some((piece, Color::White)) => PieceCode(WHITE_PAWN + piece.to_index() as u8),
        }
    }

    /// Unpack a cell.  Codes 7, 8, 9 and anything above 15 are rejected.
    #[inline]
    pub fn decode(&self) -> Result<Option<(Piece, Color)>, Error> {
        match self.0 {
            NULL_SPACE => Ok(None),
            BLACK_PAWN..=BLACK_KING => Ok(Some((
                ALL_PIECES[(self.0 - BLACK_PAWN) as usize],
                Color::Black,
            ))),
            WHITE_PAWN..=WHITE_KING => Ok(Some((
                ALL_PIECES[(self.0 - WHITE_PAWN) as usize],
                Color::White,
            ))),
            code => Err(Error::InvalidPieceCode { code }),
        }
    }

    /// Is this the code of a white piece?
    #[inline]
    pub fn is_white(&self) -> bool {
        self.0 > 9
    }
}

impl TryFrom<u8> for PieceCode {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        let code = PieceCode(code);
        code.decode()?;
        Ok(code)
    }
}
