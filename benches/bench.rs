use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tile_astar::{parse_grid, solve, Heuristic, SearchConfig};

const GOAL: &str = "1 2 3 4 5 6 7 8 0";

const SIMPLE_INPUT: &str = "
1 2 3
5 0 6
4 7 8";

const MEDIUM_INPUT: &str = "
0 1 3
4 2 5
7 8 6";

const HARDER_INPUT: &str = "
8 6 7
2 5 4
3 0 1";

const FIFTEEN_INPUT: &str = "
 1  2  3  4
 5  6  0  8
 9 10  7 11
13 14 15 12";

const FIFTEEN_GOAL: &str = "1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 0";

fn criterion_bench(c: &mut Criterion) {
    let cases = [
        ("simple", SIMPLE_INPUT, GOAL),
        ("medium", MEDIUM_INPUT, GOAL),
        ("harder", HARDER_INPUT, GOAL),
        ("fifteen", FIFTEEN_INPUT, FIFTEEN_GOAL),
    ];

    for heuristic in [Heuristic::MisplacedTiles, Heuristic::Manhattan] {
        for (name, input, target) in cases {
            // misplaced tiles is too slow on the 31-move instance to be useful
            if name == "harder" && heuristic == Heuristic::MisplacedTiles {
                continue;
            }
            let input = parse_grid(input).unwrap();
            let target = parse_grid(target).unwrap();
            let config = SearchConfig::new(heuristic);
            c.bench_function(&format!("{name}/{heuristic}"), |b| {
                b.iter(|| {
                    solve(black_box(&input), black_box(&target), config).unwrap();
                })
            });
        }
    }
}

criterion_group!(benches, criterion_bench);
criterion_main!(benches);
