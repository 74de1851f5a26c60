use criterion::{
    criterion_group,
    criterion_main,
    BenchmarkGroup,
    Criterion
};
use criterion::measurement::WallTime;

use sudoku_deduction::Sudoku;
use sudoku_deduction::rules::Algorithms;

use std::time::Duration;

const MEASUREMENT_TIME_SECS: u64 = 10;

// Explanation of benchmark classes:
//
// exclusion only: Only naked-subset exclusion (up to size 3) is enabled.
// all algorithms: The default configuration, i.e. naked subsets, hidden
//                 singles, and line-crossing-box elimination.

// Solvable by exclusion alone.
const EASY: &str = "\
    **5****4*\n\
    **2***8**\n\
    *7812**59\n\
    ****43***\n\
    **9*6*4**\n\
    ***51****\n\
    96**8571*\n\
    **4***5**\n\
    *1****9**";

// WPF Sudoku GP 2020 Round 5 Puzzle 5. Keeps every algorithm busy until the
// fixed point.
const DIFFICULT: &str = "\
    *5*3***7*\n\
    1***2*8**\n\
    *2*4*9***\n\
    **31**7*6\n\
    *4**6**5*\n\
    5*6**34**\n\
    ***8*2*3*\n\
    **7*9***2\n\
    *6***1*8*";

fn resolve(puzzle: &str, algorithms: Algorithms) -> Sudoku {
    let mut sudoku = Sudoku::new(3).unwrap();
    sudoku.set_algorithms(algorithms);
    sudoku.load(puzzle).unwrap();
    sudoku.resolve().unwrap();
    sudoku
}

fn benchmark_puzzle(group: &mut BenchmarkGroup<'_, WallTime>, name: &str,
        puzzle: &str) {
    let exclusion_only = Algorithms {
        group_exclude_max_size: 3,
        only_cell_for_value: false,
        line_cross_box: false
    };

    group.bench_function(format!("{} exclusion only", name),
        |b| b.iter(|| resolve(puzzle, exclusion_only.clone())));
    group.bench_function(format!("{} all algorithms", name),
        |b| b.iter(|| resolve(puzzle, Algorithms::default())));
}

fn benchmark_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    group.measurement_time(Duration::from_secs(MEASUREMENT_TIME_SECS));

    benchmark_puzzle(&mut group, "easy", EASY);
    benchmark_puzzle(&mut group, "difficult", DIFFICULT);
}

criterion_group!(benches, benchmark_resolve);
criterion_main!(benches);
