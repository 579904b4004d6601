#[macro_use]
extern crate bencher;
extern crate boardreader;

use bencher::Bencher;
use boardreader::{moves_for, Board, Color, MoveGen, Piece, Square, ALL_SQUARES};

// A middlegame-looking position: a few pieces developed and a pawn taken on d4.
fn middlegame() -> Board {
    let mut board = Board::new_standard();
    board.relocate(Square::make_square(4, 1), Square::make_square(4, 3));
    board.relocate(Square::make_square(4, 6), Square::make_square(4, 4));
    board.relocate(Square::make_square(6, 0), Square::make_square(5, 2));
    board.relocate(Square::make_square(1, 7), Square::make_square(2, 5));
    board.relocate(Square::make_square(5, 0), Square::make_square(2, 3));
    board.relocate(Square::make_square(3, 1), Square::make_square(3, 3));
    board.relocate(Square::make_square(4, 4), Square::make_square(3, 3));
    board
}

fn moves_for_every_square(bench: &mut Bencher) {
    let board = middlegame();
    bench.iter(|| {
        ALL_SQUARES
            .iter()
            .map(|sq| moves_for(&board, *sq).popcnt())
            .sum::<u32>()
    });
}

fn movegen_white(bench: &mut Bencher) {
    let board = middlegame();
    bench.iter(|| MoveGen::new(&board, Color::White).len());
}

fn movegen_black(bench: &mut Bencher) {
    let board = middlegame();
    bench.iter(|| MoveGen::new(&board, Color::Black).len());
}

fn lone_queen(bench: &mut Bencher) {
    let mut board = Board::empty();
    board.piece(Square::make_square(3, 3), Piece::Queen, Color::White);
    bench.iter(|| assert_eq!(moves_for(&board, Square::make_square(3, 3)).popcnt(), 27));
}

fn relocate_and_back(bench: &mut Bencher) {
    let mut board = middlegame();
    let src = Square::make_square(5, 2);
    let dest = Square::make_square(6, 4);
    bench.iter(|| {
        board.relocate(src, dest);
        board.relocate(dest, src);
    });
}

benchmark_group!(
    benches,
    moves_for_every_square,
    movegen_white,
    movegen_black,
    lone_queen,
    relocate_and_back
);

benchmark_main!(benches);
