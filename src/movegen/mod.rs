mod movegen;
pub use self::movegen::*;

mod piece_type;
