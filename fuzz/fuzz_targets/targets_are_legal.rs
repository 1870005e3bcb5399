#![no_main]

use arbitrary::Arbitrary;
use chess_games::{rules, Board, KingSafety, Move};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Data<'a> {
    board_fen: &'a [u8],
    candidate: Move,
}

fuzz_target!(|data: Data<'_>| {
    let Ok(board) = Board::from_board_fen(data.board_fen) else {
        return;
    };
    let Some(turn) = board.color_at(data.candidate.from) else {
        assert!(rules::pseudo_legal_targets(&board, data.candidate.from).is_empty());
        return;
    };

    let targets = rules::pseudo_legal_targets(&board, data.candidate.from);
    assert_eq!(
        targets.contains(&data.candidate.to),
        rules::is_legal(&board, turn, &data.candidate, KingSafety::Unchecked)
    );
    if rules::is_legal(&board, turn, &data.candidate, KingSafety::Enforced) {
        assert!(targets.contains(&data.candidate.to));
    }
});
