use crate::bitboard::{BitBoard, EMPTY};
use crate::code::PieceCode;
use crate::color::{Color, ALL_COLORS};
use crate::error::Error;
use crate::piece::Piece;
use crate::square::{Square, ALL_SQUARES, NUM_SQUARES};

use std::fmt;
use std::ops::{Index, IndexMut};
use tracing::{debug, trace};

/// The back rank, file by file.  The king stands on x = 3 and the queen on x = 4.
const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::King,
    Piece::Queen,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// A representation of a chess board.  That's why you're here, right?
///
/// The board is nothing but piece placement: 64 cells indexed by `y * 8 + x`, each either empty
/// (`None`) or holding a piece of some color.  There is no side to move, no castle rights and no
/// move counters.
///
/// Nothing here checks whether a position or a move makes sense.  Ask the move generator first,
/// then call `relocate`.
///
/// ```
/// use boardreader::{Board, Square, Piece, Color};
///
/// let mut board = Board::empty();
/// board
///     .piece(Square::make_square(0, 0), Piece::Rook, Color::White)
///     .piece(Square::make_square(0, 7), Piece::Rook, Color::Black);
///
/// // You can index the board by the square:
/// assert_eq!(board[Square::make_square(0, 0)], Some((Piece::Rook, Color::White)));
/// assert_eq!(board.piece_at(0, 7), Some((Piece::Rook, Color::Black)));
/// assert_eq!(board.piece_at(4, 4), None);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct Board {
    squares: [Option<(Piece, Color)>; NUM_SQUARES],
}

impl Board {
    /// Construct a board with nothing on it.
    pub fn empty() -> Board {
        Board {
            squares: [None; NUM_SQUARES],
        }
    }

    /// Construct the starting position.
    ///
    /// White fills rows 0 and 1, black fills rows 6 and 7.  The back ranks read rook, knight,
    /// bishop, king, queen, bishop, knight, rook from x = 0 to x = 7.
    ///
    /// ```
    /// use boardreader::{Board, Piece, Color};
    ///
    /// let board = Board::new_standard();
    /// assert_eq!(board.piece_at(3, 0), Some((Piece::King, Color::White)));
    /// assert_eq!(board.piece_at(4, 7), Some((Piece::Queen, Color::Black)));
    /// assert_eq!(board.piece_at(5, 6), Some((Piece::Pawn, Color::Black)));
    /// ```
    pub fn new_standard() -> Board {
        let mut result = Board::empty();
        for x in 0..8 {
            for color in ALL_COLORS.iter() {
                result.set_piece_at(x, color.to_second_rank(), Some((Piece::Pawn, *color)));
                result.set_piece_at(
                    x,
                    color.to_my_backrank(),
                    Some((BACK_RANK[x as usize], *color)),
                );
            }
        }
        result
    }

    /// Build a board from the packed one-byte encoding (see `PieceCode`).
    ///
    /// ```
    /// use boardreader::{Board, Piece, Color};
    ///
    /// let mut codes = [0u8; 64];
    /// codes[11] = 0xA; // a white pawn on (3, 1)
    /// let board = Board::from_codes(&codes).expect("valid codes");
    /// assert_eq!(board.piece_at(3, 1), Some((Piece::Pawn, Color::White)));
    ///
    /// codes[12] = 7;
    /// assert!(Board::from_codes(&codes).is_err());
    /// ```
    pub fn from_codes(codes: &[u8; NUM_SQUARES]) -> Result<Board, Error> {
        let mut result = Board::empty();
        for (cell, code) in result.squares.iter_mut().zip(codes.iter()) {
            *cell = PieceCode(*code).decode()?;
        }
        Ok(result)
    }

    /// Pack this board into the one-byte encoding.
    pub fn to_codes(&self) -> [u8; NUM_SQUARES] {
        let mut result = [0u8; NUM_SQUARES];
        for (code, cell) in result.iter_mut().zip(self.squares.iter()) {
            *code = PieceCode::encode(*cell).0;
        }
        result
    }

    /// What is on (x, y)?  Both coordinates must be in `0..8`.
    #[inline]
    pub fn piece_at(&self, x: u8, y: u8) -> Option<(Piece, Color)> {
        debug_assert!(x < 8 && y < 8);
        self[Square::make_square(x, y)]
    }

    /// Overwrite (x, y).  Both coordinates must be in `0..8`.
    #[inline]
    pub fn set_piece_at(&mut self, x: u8, y: u8, cell: Option<(Piece, Color)>) {
        debug_assert!(x < 8 && y < 8);
        self[Square::make_square(x, y)] = cell;
    }

    /// What piece type is on this square, if any?
    #[inline]
    pub fn piece_on(&self, square: Square) -> Option<Piece> {
        self[square].map(|(piece, _)| piece)
    }

    /// What color is the piece on this square, if any?
    #[inline]
    pub fn color_on(&self, square: Square) -> Option<Color> {
        self[square].map(|(_, color)| color)
    }

    /// Set a piece on a square.
    ///
    /// Note that this can and will overwrite another piece on the square if need.
    ///
    /// This function can be used on self directly or in a builder pattern.
    pub fn piece(&mut self, square: Square, piece: Piece, color: Color) -> &mut Self {
        self[square] = Some((piece, color));
        self
    }

    /// Clear a square on the board.
    ///
    /// This function can be used on self directly or in a builder pattern.
    pub fn clear_square(&mut self, square: Square) -> &mut Self {
        self[square] = None;
        self
    }

    /// Move whatever is on `source` to `dest`, leaving `source` empty.
    ///
    /// This is raw relocation: it does not ask whether the move is legal.  A piece on `dest` is
    /// overwritten, and relocating an empty square simply empties `dest`.
    ///
    /// ```
    /// use boardreader::{Board, Square, Piece, Color};
    ///
    /// let mut board = Board::new_standard();
    /// board.relocate(Square::make_square(3, 1), Square::make_square(3, 3));
    /// assert_eq!(board.piece_at(3, 1), None);
    /// assert_eq!(board.piece_at(3, 3), Some((Piece::Pawn, Color::White)));
    /// ```
    pub fn relocate(&mut self, source: Square, dest: Square) {
        let moving = self[source];
        match (moving, self[dest]) {
            (None, _) => debug!(%source, %dest, "relocating an empty square"),
            (Some(_), Some((piece, color))) => {
                debug!(%source, %dest, ?piece, ?color, "relocation overwrites a piece")
            }
            (Some(_), None) => trace!(%source, %dest, "relocate"),
        }
        self[source] = None;
        self[dest] = moving;
    }

    /// A `BitBoard` of every occupied square.
    pub fn combined(&self) -> BitBoard {
        ALL_SQUARES
            .iter()
            .filter(|sq| self[**sq].is_some())
            .fold(EMPTY, |b, sq| b | BitBoard::from_square(*sq))
    }

    /// A `BitBoard` of every square holding a piece of `color`.
    pub fn color_combined(&self, color: Color) -> BitBoard {
        ALL_SQUARES
            .iter()
            .filter(|sq| self.color_on(**sq) == Some(color))
            .fold(EMPTY, |b, sq| b | BitBoard::from_square(*sq))
    }

    /// Iterate over every piece of `color`, lowest square first.
    pub fn pieces_of<'a>(&'a self, color: Color) -> impl Iterator<Item = (Square, Piece)> + 'a {
        self.squares
            .iter()
            .enumerate()
            .filter_map(move |(i, cell)| match *cell {
                Some((piece, c)) if c == color => Some((Square::new(i as u8), piece)),
                _ => None,
            })
    }
}

impl Default for Board {
    #[inline]
    fn default() -> Board {
        Board::new_standard()
    }
}

impl Index<Square> for Board {
    type Output = Option<(Piece, Color)>;

    fn index(&self, index: Square) -> &Self::Output {
        &self.squares[index.to_index()]
    }
}

impl IndexMut<Square> for Board {
    fn index_mut(&mut self, index: Square) -> &mut Self::Output {
        &mut self.squares[index.to_index()]
    }
}

impl fmt::Display for Board {
    /// Dump the packed codes as a grid.
    ///
    /// The first line numbers the columns.  Each following line is one row, starting at row 0,
    /// and ends with that row's number.  Codes are padded so one and two digit codes line up.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for x in 0..8 {
            write!(f, "{:<3}", x)?;
        }
        writeln!(f)?;
        for y in 0..8 {
            for x in 0..8 {
                write!(f, "{:<3}", PieceCode::encode(self.piece_at(x, y)).0)?;
            }
            writeln!(f, "{}", y)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::*;
    use crate::piece::ALL_PIECES;

    #[test]
    fn standard_board_material() {
        let board = Board::new_standard();
        let expected = [8, 2, 2, 2, 1, 1];
        for color in ALL_COLORS.iter() {
            for (piece, count) in ALL_PIECES.iter().zip(expected.iter()) {
                let found = board.pieces_of(*color).filter(|(_, p)| p == piece).count();
                assert_eq!(found, *count, "{:?} {:?}", color, piece);
            }
        }
        assert_eq!(board.combined().popcnt(), 32);
    }

    #[test]
    fn standard_board_home_rows() {
        let board = Board::new_standard();
        for (sq, _) in board.pieces_of(Color::White) {
            assert!(sq.get_y() <= 1);
        }
        for (sq, _) in board.pieces_of(Color::Black) {
            assert!(sq.get_y() >= 6);
        }
        assert_eq!(board.color_combined(Color::White), BitBoard(0xffff));
        assert_eq!(
            board.color_combined(Color::Black),
            BitBoard(0xffff_0000_0000_0000)
        );
    }

    #[test]
    fn standard_board_codes() {
        let codes = Board::new_standard().to_codes();
        assert_eq!(
            &codes[0..8],
            &[
                WHITE_ROOK,
                WHITE_KNIGHT,
                WHITE_BISHOP,
                WHITE_KING,
                WHITE_QUEEN,
                WHITE_BISHOP,
                WHITE_KNIGHT,
                WHITE_ROOK
            ]
        );
        assert!(codes[8..16].iter().all(|c| *c == WHITE_PAWN));
        assert!(codes[16..48].iter().all(|c| *c == NULL_SPACE));
        assert!(codes[48..56].iter().all(|c| *c == BLACK_PAWN));
        assert_eq!(
            &codes[56..64],
            &[
                BLACK_ROOK,
                BLACK_KNIGHT,
                BLACK_BISHOP,
                BLACK_KING,
                BLACK_QUEEN,
                BLACK_BISHOP,
                BLACK_KNIGHT,
                BLACK_ROOK
            ]
        );
        assert_eq!(Board::from_codes(&codes), Ok(Board::new_standard()));
    }

    #[test]
    fn relocate_overwrites_the_destination() {
        let mut board = Board::new_standard();
        let src = Square::make_square(0, 0);
        let dst = Square::make_square(0, 6);
        board.relocate(src, dst);
        assert_eq!(board[dst], Some((Piece::Rook, Color::White)));
        assert_eq!(board[src], None);
        assert_eq!(board.combined().popcnt(), 31);
    }

    #[test]
    fn relocate_an_empty_square() {
        let mut board = Board::new_standard();
        let src = Square::make_square(4, 4);
        let dst = Square::make_square(4, 0);
        board.relocate(src, dst);
        assert_eq!(board[dst], None);
        assert_eq!(board[src], None);
    }

    #[test]
    fn set_and_clear() {
        let mut board = Board::empty();
        board.set_piece_at(2, 5, Some((Piece::Bishop, Color::Black)));
        assert_eq!(board.piece_on(Square::make_square(2, 5)), Some(Piece::Bishop));
        assert_eq!(board.color_on(Square::make_square(2, 5)), Some(Color::Black));
        board.clear_square(Square::make_square(2, 5));
        assert_eq!(board, Board::empty());
    }

    #[test]
    fn display_pads_codes() {
        let drawn = format!("{}", Board::new_standard());
        let lines: Vec<&str> = drawn.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "0  1  2  3  4  5  6  7  ");
        assert_eq!(lines[1], "13 11 12 15 14 12 11 13 0");
        assert_eq!(lines[2], "10 10 10 10 10 10 10 10 1");
        assert_eq!(lines[3], "0  0  0  0  0  0  0  0  2");
        assert_eq!(lines[8], "4  2  3  6  5  3  2  4  7");
    }
}
