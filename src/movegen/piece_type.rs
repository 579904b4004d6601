use crate::bitboard::{BitBoard, EMPTY};
use crate::board::Board;
use crate::color::Color;
use crate::direction::{Direction, ALL_DIRECTIONS, DIAGONAL, KNIGHT_JUMPS, ORTHOGONAL};
use crate::movegen::{MoveList, SquareAndBitBoard};
use crate::piece::Piece;
use crate::square::Square;

pub trait PieceType {
    fn into_piece() -> Piece;
    fn pseudo_legals(board: &Board, src: Square, color: Color) -> BitBoard;

    /// Push the moves of every `color` piece of this type onto `movelist`.
    #[inline(always)]
    fn legals(movelist: &mut MoveList, board: &Board, color: Color) {
        for (src, piece) in board.pieces_of(color) {
            if piece != Self::into_piece() {
                continue;
            }
            let moves = Self::pseudo_legals(board, src, color);
            if moves != EMPTY {
                movelist.push(SquareAndBitBoard::new(src, moves));
            }
        }
    }
}

pub struct PawnType;
pub struct BishopType;
pub struct KnightType;
pub struct RookType;
pub struct QueenType;
pub struct KingType;

/// Slide from `src` along each direction.  Empty squares are collected and the ray goes on.  An
/// enemy piece is collected and ends the ray.  A friendly piece ends the ray without being
/// collected.
fn ray_cast(board: &Board, src: Square, color: Color, directions: &[Direction]) -> BitBoard {
    let mut result = EMPTY;
    for &(dx, dy) in directions {
        let mut next = src.offset(dx, dy);
        while let Some(dest) = next {
            match board.color_on(dest) {
                None => {
                    result |= BitBoard::from_square(dest);
                    next = dest.offset(dx, dy);
                }
                Some(c) => {
                    if c != color {
                        result |= BitBoard::from_square(dest);
                    }
                    break;
                }
            }
        }
    }
    result
}

/// Every `src + offset` that is on the board and not held by a friendly piece.
fn single_step(board: &Board, src: Square, color: Color, offsets: &[Direction]) -> BitBoard {
    offsets
        .iter()
        .filter_map(|&(dx, dy)| src.offset(dx, dy))
        .filter(|dest| board.color_on(*dest) != Some(color))
        .fold(EMPTY, |b, dest| b | BitBoard::from_square(dest))
}

impl PieceType for PawnType {
    fn into_piece() -> Piece {
        Piece::Pawn
    }

    /// One step forward onto an empty square, two steps from row 1 or row 6 when both squares
    /// are empty, and one step diagonally forward onto an enemy piece.
    ///
    /// The two-step rows are checked literally, whatever the pawn's color.
    #[inline(always)]
    fn pseudo_legals(board: &Board, src: Square, color: Color) -> BitBoard {
        let forward = color.forward();
        let mut result = EMPTY;

        if let Some(one) = src.offset(0, forward) {
            if board[one].is_none() {
                result |= BitBoard::from_square(one);

                if src.get_y() == 1 || src.get_y() == 6 {
                    if let Some(two) = src.offset(0, 2 * forward) {
                        if board[two].is_none() {
                            result |= BitBoard::from_square(two);
                        }
                    }
                }
            }
        }

        for dx in [-1, 1].iter() {
            if let Some(dest) = src.offset(*dx, forward) {
                if board.color_on(dest) == Some(!color) {
                    result |= BitBoard::from_square(dest);
                }
            }
        }

        result
    }
}

impl PieceType for BishopType {
    fn into_piece() -> Piece {
        Piece::Bishop
    }

    #[inline(always)]
    fn pseudo_legals(board: &Board, src: Square, color: Color) -> BitBoard {
        ray_cast(board, src, color, &DIAGONAL)
    }
}

impl PieceType for KnightType {
    fn into_piece() -> Piece {
        Piece::Knight
    }

    #[inline(always)]
    fn pseudo_legals(board: &Board, src: Square, color: Color) -> BitBoard {
        single_step(board, src, color, &KNIGHT_JUMPS)
    }
}

impl PieceType for RookType {
    fn into_piece() -> Piece {
        Piece::Rook
    }

    #[inline(always)]
    fn pseudo_legals(board: &Board, src: Square, color: Color) -> BitBoard {
        ray_cast(board, src, color, &ORTHOGONAL)
    }
}

impl PieceType for QueenType {
    fn into_piece() -> Piece {
        Piece::Queen
    }

    #[inline(always)]
    fn pseudo_legals(board: &Board, src: Square, color: Color) -> BitBoard {
        ray_cast(board, src, color, &ALL_DIRECTIONS)
    }
}

impl PieceType for KingType {
    fn into_piece() -> Piece {
        Piece::King
    }

    #[inline(always)]
    fn pseudo_legals(board: &Board, src: Square, color: Color) -> BitBoard {
        single_step(board, src, color, &ALL_DIRECTIONS)
    }
}
