use crate::square::Square;
use std::cmp::Ordering;
use std::fmt;

/// Represent a ChessMove in memory
///
/// Besides the two squares, a move remembers whether it lands on an enemy piece.  That is all the
/// generator knows: it has no notion of check, promotion or en passant.
#[derive(Clone, Copy, Eq, PartialEq, Default, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct ChessMove {
    source: Square,
    dest: Square,
    capture: bool,
}

impl ChessMove {
    /// Create a new chess move, given a source `Square`, a destination `Square`, and whether or
    /// not the destination holds a piece of the other color.
    #[inline]
    pub fn new(source: Square, dest: Square, capture: bool) -> ChessMove {
        ChessMove {
            source,
            dest,
            capture,
        }
    }

    /// Get the source square (square the piece is currently on).
    #[inline]
    pub fn get_source(&self) -> Square {
        self.source
    }

    /// Get the destination square (square the piece is going to).
    #[inline]
    pub fn get_dest(&self) -> Square {
        self.dest
    }

    /// Does this move take a piece?
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.capture
    }
}

impl fmt::Display for ChessMove {
    /// `b1c3` for a quiet move, `e4xd5` for a capture.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.capture {
            write!(f, "{}x{}", self.source, self.dest)
        } else {
            write!(f, "{}{}", self.source, self.dest)
        }
    }
}

impl Ord for ChessMove {
    fn cmp(&self, other: &ChessMove) -> Ordering {
        self.source
            .cmp(&other.source)
            .then(self.dest.cmp(&other.dest))
            .then(self.capture.cmp(&other.capture))
    }
}

impl PartialOrd for ChessMove {
    fn partial_cmp(&self, other: &ChessMove) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_marks_captures() {
        let b1 = Square::make_square(1, 0);
        let c3 = Square::make_square(2, 2);
        assert_eq!(format!("{}", ChessMove::new(b1, c3, false)), "b1c3");
        assert_eq!(format!("{}", ChessMove::new(b1, c3, true)), "b1xc3");
    }

    #[test]
    fn ordered_by_source_then_dest() {
        let a = ChessMove::new(Square::new(1), Square::new(40), false);
        let b = ChessMove::new(Square::new(2), Square::new(3), false);
        let c = ChessMove::new(Square::new(2), Square::new(4), true);
        let mut moves = vec![c, a, b];
        moves.sort();
        assert_eq!(moves, vec![a, b, c]);
    }
}
