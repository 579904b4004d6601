use failure::Fail;

/// Sometimes, bad stuff happens.
#[derive(Clone, Debug, PartialEq, Fail)]
pub enum Error {
    /// The string could not be turned into a square on the board
    #[fail(display = "Invalid square: {}", square)]
    InvalidSquare { square: String },

    /// A packed piece code outside of the 13 defined values
    #[fail(display = "Invalid piece code: {}", code)]
    InvalidPieceCode { code: u8 },
}
