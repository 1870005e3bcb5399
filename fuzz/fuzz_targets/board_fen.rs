#![no_main]

use chess_games::Board;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(board) = Board::from_board_fen(data) else {
        return;
    };
    let roundtripped = Board::from_board_fen(board.board_fen().as_bytes()).expect("roundtrip");
    assert_eq!(board.board_fen(), roundtripped.board_fen());
    assert!(board.pieces().all(|p| board.piece_at(p.square()) == Some(p)));
});
