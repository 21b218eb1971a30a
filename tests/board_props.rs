use morris::{Board, BOARD_SIZE};
use proptest::prelude::*;

/// Cell glyphs in row-major order, separators skipped.
fn glyphs(layout: &str) -> Vec<char> {
    layout
        .lines()
        .step_by(2)
        .flat_map(|line| line.split('-').flat_map(|s| s.chars()))
        .collect()
}

fn only_marked(layout: &str, row: usize, col: usize) -> bool {
    glyphs(layout).iter().enumerate().all(|(i, g)| {
        let here = i == (row - 1) * BOARD_SIZE + (col - 1);
        *g == if here { 'x' } else { 'o' }
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn place_marks_exactly_one_cell(row in 1..=BOARD_SIZE, col in 1..=BOARD_SIZE) {
        let mut board = Board::new();
        board.place(row, col).unwrap();
        prop_assert!(only_marked(&board.layout(), row, col));
    }

    #[test]
    fn move_from_anywhere_marks_only_target(
        fr in 1..=BOARD_SIZE,
        fc in 1..=BOARD_SIZE,
        tr in 1..=BOARD_SIZE,
        tc in 1..=BOARD_SIZE,
    ) {
        let mut board = Board::new();
        board.move_marker((fr, fc), (tr, tc)).unwrap();
        prop_assert!(only_marked(&board.layout(), tr, tc));
    }

    #[test]
    fn separators_never_change(row in 1..=BOARD_SIZE, col in 1..=BOARD_SIZE) {
        let mut board = Board::new();
        board.place(row, col).unwrap();
        let layout = board.layout();
        let lines: Vec<&str> = layout.lines().collect();
        prop_assert_eq!(lines.len(), 5);
        prop_assert_eq!(lines[1], "|\\|/|");
        prop_assert_eq!(lines[3], "|/|\\|");
    }
}
