use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use tictactoe::board::{Board, Player, Pos};
use tictactoe::search::Searcher;

/// Positions with the computer to move, from the costly opening reply
/// down to a forced endgame.
fn corpus() -> Vec<Board> {
    let mut boards = Vec::new();

    // Opening reply: the human has taken the center
    let mut b = Board::new();
    b.place_mark(Pos::new(1, 1), Player::Human);
    boards.push(b.clone());

    // Midgame: two moves each side pending
    b.place_mark(Pos::new(0, 0), Player::Computer);
    b.place_mark(Pos::new(2, 2), Player::Human);
    boards.push(b.clone());

    // Endgame: the computer must block
    b.place_mark(Pos::new(0, 2), Player::Computer);
    b.place_mark(Pos::new(2, 0), Player::Human);
    boards.push(b);

    boards
}

fn bench_best_move(c: &mut Criterion) {
    let boards = corpus();
    let mut searcher = Searcher::new();

    c.bench_function("search/opening_reply", |bch| {
        bch.iter(|| black_box(searcher.search(&boards[0]).best_move))
    });

    c.bench_function("search/corpus", |bch| {
        bch.iter(|| {
            let mut nodes = 0;
            for board in &boards {
                nodes += searcher.search(board).nodes;
            }
            black_box(nodes)
        })
    });
}

criterion_group!(benches, bench_best_move);
criterion_main!(benches);
