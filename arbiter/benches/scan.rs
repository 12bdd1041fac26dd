/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use arbiter::*;

fn legal_moves_benchmark(c: &mut Criterion) {
    let startpos = Board::default();
    c.bench_function("Startpos legal moves", |b| {
        b.iter(|| black_box(&startpos).legal_moves());
    });

    let kiwipete = Board::from_fen(FEN_KIWIPETE).unwrap();
    c.bench_function("Kiwipete legal moves", |b| {
        b.iter(|| black_box(&kiwipete).legal_moves());
    });
}

fn terminal_scan_benchmark(c: &mut Criterion) {
    // Fool's mate: the scan has to exhaust every probe before concluding
    let mate = Board::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w - -").unwrap();

    c.bench_function("Checkmate scan", |b| {
        b.iter(|| {
            let scanner = CheckScanner::new(black_box(&mate));
            black_box(scanner.is_game_over(Color::White))
        });
    });
}

criterion_group!(benches, legal_moves_benchmark, terminal_scan_benchmark);
criterion_main!(benches);
