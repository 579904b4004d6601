//! # Rust Chess Move Generator over a Compact Board
//!
//! This crate tells you where a piece may go.  It keeps a 64-cell board (`y * 8 + x`, with
//! `(0, 0)` the corner on White's home row), knows how each piece type moves, and returns the
//! destination squares as a `BitBoard`.
//!
//! It stops at movement geometry.  Check, pins, castling, en passant and promotion are not
//! modelled, and neither is the side to move.  Pawns move towards row 7 for White and towards
//! row 0 for Black, take one step onto an empty square, two steps from row 1 or row 6 when both
//! squares are empty, and capture one step diagonally forward.
//!
//! ## Example
//!
//! ```
//! use boardreader::{moves_for, Board, Color, MoveGen, Piece, Square};
//!
//! let mut board = Board::new_standard();
//!
//! // drop a white pawn in front of the black pawns
//! board.set_piece_at(3, 5, Some((Piece::Pawn, Color::White)));
//!
//! // the black pawn on (2, 6) can advance one or two squares, or take on (3, 5)
//! let moves = moves_for(&board, Square::make_square(2, 6));
//! assert_eq!(moves.popcnt(), 3);
//! assert!(moves.contains(Square::make_square(3, 5)));
//!
//! // or walk every move for one side
//! let captures = MoveGen::new(&board, Color::Black).filter(|m| m.is_capture()).count();
//! assert_eq!(captures, 2);
//! ```

mod board;
pub use crate::board::*;

mod bitboard;
pub use crate::bitboard::{BitBoard, EMPTY};

mod chess_move;
pub use crate::chess_move::*;

mod code;
pub use crate::code::*;

mod color;
pub use crate::color::*;

mod direction;
pub use crate::direction::*;

mod error;
pub use crate::error::*;

mod movegen;
pub use crate::movegen::{moves_for, moves_for_xy, MoveGen};

mod piece;
pub use crate::piece::*;

mod square;
pub use crate::square::*;
