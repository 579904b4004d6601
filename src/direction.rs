/// A step across the board, as `(dx, dy)`.
pub type Direction = (i8, i8);

/// The four diagonal directions a bishop slides in.
pub const DIAGONAL: [Direction; 4] = [(-1, 1), (1, 1), (-1, -1), (1, -1)];

/// The four orthogonal directions a rook slides in.
pub const ORTHOGONAL: [Direction; 4] = [(-1, 0), (0, 1), (0, -1), (1, 0)];

/// Every direction a queen slides in, and every step a king can take.
pub const ALL_DIRECTIONS: [Direction; 8] = [
    (-1, 1),
    (1, 1),
    (-1, -1),
    (1, -1),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 0),
];

/// The eight L-shaped knight jumps.
pub const KNIGHT_JUMPS: [Direction; 8] = [
    (-2, 1),
    (-2, -1),
    (2, -1),
    (2, 1),
    (1, 2),
    (-1, 2),
    (1, -2),
    (-1, -2),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_directions_is_the_union() {
        for d in DIAGONAL.iter().chain(ORTHOGONAL.iter()) {
            assert!(ALL_DIRECTIONS.contains(d));
        }
        assert_eq!(ALL_DIRECTIONS.len(), DIAGONAL.len() + ORTHOGONAL.len());
    }

    #[test]
    fn knight_jumps_are_l_shaped() {
        for &(dx, dy) in KNIGHT_JUMPS.iter() {
            let (a, b) = (dx.abs(), dy.abs());
            assert!((a == 1 && b == 2) || (a == 2 && b == 1));
        }
        for (i, a) in KNIGHT_JUMPS.iter().enumerate() {
            for b in KNIGHT_JUMPS[i + 1..].iter() {
                assert_ne!(a, b);
            }
        }
    }
}
