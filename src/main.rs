use boardreader::{moves_for, Board, Color, Error, Piece, Square};
use std::env;
use std::str::FromStr;
use tracing::info;
use tracing_subscriber::EnvFilter;

// Prints the starting board, drops a white pawn on d6 and lists the moves of the piece on the
// square named by the first argument (c7 when absent).  Set RUST_LOG=debug to see the board
// store and generator logs.
fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let square = match env::args().nth(1) {
        Some(arg) => Square::from_str(&arg)?,
        None => Square::make_square(2, 6),
    };

    let mut board = Board::new_standard();
    println!("{}\n\n", board);

    board.set_piece_at(3, 5, Some((Piece::Pawn, Color::White)));
    println!("{}", board);

    match board[square] {
        None => info!(%square, "square is empty"),
        Some((piece, color)) => info!(%square, piece = %piece.to_string(color), "listing moves"),
    }

    for dest in moves_for(&board, square) {
        let (x, y) = dest.coordinates();
        println!("[{}, {}] {}", x, y, dest);
    }

    Ok(())
}
