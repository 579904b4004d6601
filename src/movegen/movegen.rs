use crate::bitboard::{BitBoard, EMPTY};
use crate::board::Board;
use crate::chess_move::ChessMove;
use crate::color::Color;
use crate::movegen::piece_type::*;
use crate::piece::Piece;
use crate::square::{Square, NUM_SQUARES};
use arrayvec::ArrayVec;
use std::iter::ExactSizeIterator;
use tracing::debug;

#[derive(Copy, Clone, PartialEq, PartialOrd, Debug)]
pub struct SquareAndBitBoard {
    square: Square,
    bitboard: BitBoard,
}

impl SquareAndBitBoard {
    pub fn new(sq: Square, bb: BitBoard) -> SquareAndBitBoard {
        SquareAndBitBoard {
            square: sq,
            bitboard: bb,
        }
    }
}

/// One entry per piece that has somewhere to go.  A board cannot hold more than 64 pieces.
pub type MoveList = ArrayVec<SquareAndBitBoard, NUM_SQUARES>;

/// Every square the piece on `square` can move to, or `EMPTY` if the square is empty.
///
/// Sliding pieces stop at the edge of the board and at the first piece in their way, which they
/// capture if it belongs to the other color.  Kings and knights land on any square of their
/// pattern not held by their own color.  Pawns follow their own rules (see the crate docs).
///
/// Nothing here knows about check, castling, en passant or promotion.
///
/// ```
/// use boardreader::{moves_for, Board, Square};
///
/// let board = Board::new_standard();
///
/// // the knight on b1 can reach a3 and c3
/// let moves = moves_for(&board, Square::make_square(1, 0));
/// assert_eq!(moves.popcnt(), 2);
/// assert!(moves.contains(Square::make_square(0, 2)));
/// assert!(moves.contains(Square::make_square(2, 2)));
///
/// // the rook on a1 is boxed in
/// assert_eq!(moves_for(&board, Square::make_square(0, 0)).popcnt(), 0);
/// ```
pub fn moves_for(board: &Board, square: Square) -> BitBoard {
    match board[square] {
        None => EMPTY,
        Some((piece, color)) => match piece {
            Piece::Pawn => PawnType::pseudo_legals(board, square, color),
            Piece::Knight => KnightType::pseudo_legals(board, square, color),
            Piece::Bishop => BishopType::pseudo_legals(board, square, color),
            Piece::Rook => RookType::pseudo_legals(board, square, color),
            Piece::Queen => QueenType::pseudo_legals(board, square, color),
            Piece::King => KingType::pseudo_legals(board, square, color),
        },
    }
}

/// Same as `moves_for`, but from raw coordinates.  Coordinates off the board have no moves.
///
/// ```
/// use boardreader::{moves_for_xy, Board, EMPTY};
///
/// let board = Board::new_standard();
/// assert_eq!(moves_for_xy(&board, 4, 1).popcnt(), 2);
/// assert_eq!(moves_for_xy(&board, -1, 1), EMPTY);
/// assert_eq!(moves_for_xy(&board, 4, 8), EMPTY);
/// ```
pub fn moves_for_xy(board: &Board, x: i8, y: i8) -> BitBoard {
    Square::from_coordinates(x, y).map_or(EMPTY, |sq| moves_for(board, sq))
}

/// An incremental move generator over every piece of one color.
///
/// This structure has some extra features over calling `moves_for` on each square, such as:
///
/// * Being an iterator of `ChessMove`s, each knowing whether it captures
/// * Only iterating moves that match a certain pattern
/// * Being iterable multiple times (such as, iterating once for all captures, then iterating again
///   for all quiets)
///
/// # Examples
///
/// ```
/// use boardreader::{Board, Color, MoveGen, EMPTY};
///
/// // create a board with the initial position
/// let board = Board::new_standard();
///
/// // create an iterable
/// let mut iterable = MoveGen::new(&board, Color::White);
///
/// // make sure .len() works.
/// assert_eq!(iterable.len(), 20); // the .len() function does *not* consume the iterator
///
/// // lets iterate over targets.
/// let targets = board.color_combined(Color::Black);
/// iterable.set_iterator_mask(targets);
///
/// // count the number of targets
/// let mut count = 0;
/// for m in &mut iterable {
///     assert!(m.is_capture());
///     count += 1;
/// }
/// assert_eq!(count, 0);
///
/// // now, iterate over the rest of the moves
/// iterable.set_iterator_mask(!EMPTY);
/// for m in &mut iterable {
///     assert!(!m.is_capture());
///     count += 1;
/// }
///
/// // make sure it works
/// assert_eq!(count, 20);
/// ```
pub struct MoveGen {
    moves: MoveList,
    targets: BitBoard,
    iterator_mask: BitBoard,
    index: usize,
}

impl MoveGen {
    /// Create a new `MoveGen` structure for the pieces of `color`.
    pub fn new(board: &Board, color: Color) -> MoveGen {
        let mut moves = MoveList::new();
        PawnType::legals(&mut moves, board, color);
        KnightType::legals(&mut moves, board, color);
        BishopType::legals(&mut moves, board, color);
        RookType::legals(&mut moves, board, color);
        QueenType::legals(&mut moves, board, color);
        KingType::legals(&mut moves, board, color);

        let result = MoveGen {
            moves,
            targets: board.color_combined(!color),
            iterator_mask: !EMPTY,
            index: 0,
        };
        debug!(?color, pieces = result.moves.len(), moves = result.len(), "generated moves");
        result
    }

    /// The squares holding pieces of the other color.  A move landing on one of them is a
    /// capture.
    pub fn targets(&self) -> BitBoard {
        self.targets
    }

    /// Never, ever, iterate any moves that land on the following squares
    pub fn remove_mask(&mut self, mask: BitBoard) {
        for x in 0..self.moves.len() {
            self.moves[x].bitboard &= !mask;
        }
        self.set_iterator_mask(self.iterator_mask);
    }

    /// Never, ever, iterate this move
    pub fn remove_move(&mut self, chess_move: ChessMove) -> bool {
        for x in 0..self.moves.len() {
            if self.moves[x].square == chess_move.get_source() {
                self.moves[x].bitboard &= !BitBoard::from_square(chess_move.get_dest());
                self.set_iterator_mask(self.iterator_mask);
                return true;
            }
        }
        false
    }

    /// For now, Only iterate moves that land on the following squares
    /// Note: Once iteration is completed, you can pass in a mask of ! `EMPTY`
    ///       to get the remaining moves, or another mask
    pub fn set_iterator_mask(&mut self, mask: BitBoard) {
        self.iterator_mask = mask;
        self.index = 0;

        // the iterator portion of this struct relies on the invariant that
        // the bitboards at the beginning of the moves[] array are the only
        // ones used.  As a result, we must partition the list such that the
        // assumption is true.

        // first, find the first non-used moves index, and store that in i
        let mut i = 0;
        while i < self.moves.len() && self.moves[i].bitboard & self.iterator_mask != EMPTY {
            i += 1;
        }

        // next, find each element past i where the moves are used, and store
        // that in i.  Then, increment i to point to a new unused slot.
        for j in (i + 1)..self.moves.len() {
            if self.moves[j].bitboard & self.iterator_mask != EMPTY {
                self.moves.swap(i, j);
                i += 1;
            }
        }
    }
}

impl ExactSizeIterator for MoveGen {
    /// Give the exact length of this iterator
    fn len(&self) -> usize {
        let mut result = 0;
        for i in 0..self.moves.len() {
            if self.moves[i].bitboard & self.iterator_mask == EMPTY {
                break;
            }
            result += (self.moves[i].bitboard & self.iterator_mask).popcnt() as usize;
        }
        result
    }
}

impl Iterator for MoveGen {
    type Item = ChessMove;

    /// Give a size_hint to some functions that need it
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }

    /// Find the next chess move.
    fn next(&mut self) -> Option<ChessMove> {
        if self.index >= self.moves.len()
            || self.moves[self.index].bitboard & self.iterator_mask == EMPTY
        {
            // are we done?
            None
        } else {
            let targets = self.targets;
            let entry = &mut self.moves[self.index];
            let src = entry.square;
            let dest = (entry.bitboard & self.iterator_mask).to_square();

            entry.bitboard ^= BitBoard::from_square(dest);
            if entry.bitboard & self.iterator_mask == EMPTY {
                self.index += 1;
            }
            Some(ChessMove::new(src, dest, targets.contains(dest)))
        }
    }
}
