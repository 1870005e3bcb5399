use chess_games::{
    rules, view, Board, Color, GameState, GameStore, KingSafety, Move, MoveRequest, Square,
};
use iai::black_box;

fn bench_targets_starting_position() {
    let board = Board::new();
    let total: usize = Square::ALL
        .into_iter()
        .map(|sq| rules::pseudo_legal_targets(black_box(&board), sq).len())
        .sum();
    assert_eq!(total, 40);
}

fn bench_targets_middlegame() {
    let board: Board = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R"
        .parse()
        .expect("valid board fen");
    let total: usize = Square::ALL
        .into_iter()
        .filter(|&sq| board.color_at(sq) == Some(Color::White))
        .map(|sq| rules::pseudo_legal_targets(black_box(&board), sq).len())
        .sum();
    assert_eq!(total, 32);
}

fn bench_validate_enforced() -> bool {
    let board: Board = "4r3/8/8/8/8/8/3B4/4K3".parse().expect("valid board fen");
    rules::is_legal(
        black_box(&board),
        Color::White,
        &Move::new(Square::D2, Square::E3),
        KingSafety::Enforced,
    )
}

fn bench_board_fen() -> Board {
    black_box("rnbqkbnr/pp1ppppp/8/2p5/4P3/5N2/PPPP1PPP/RNBQKB1R")
        .parse()
        .expect("valid board fen")
}

fn bench_position_map() -> usize {
    view::position_map(black_box(&Board::new())).len()
}

fn bench_play_opening() -> GameState {
    let store = GameStore::new();
    let id = store.create().id;

    let mut state = None;
    for (rev, (from, to)) in [("e2", "e4"), ("e7", "e5"), ("g1", "f3"), ("b8", "c6")]
        .into_iter()
        .enumerate()
    {
        state = Some(
            store
                .apply_move(id.as_str(), &MoveRequest::new(from, to, rev as u64))
                .expect("legal move"),
        );
    }
    state.expect("moves played")
}

iai::main!(
    bench_targets_starting_position,
    bench_targets_middlegame,
    bench_validate_enforced,
    bench_board_fen,
    bench_position_map,
    bench_play_opening,
);
