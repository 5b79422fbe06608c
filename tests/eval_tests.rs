//! Evaluation tests - direction of each scoring term
//!
//! The exact coefficients are tunable policy; these tests pin only the
//! direction each term pushes the score in.

use blockbot::core::Board;
use blockbot::engine::eval::{board_metrics, evaluate, EvalWeights};
use blockbot::types::CellState;

fn board_with_blocks(blocks: &[(i8, i8)]) -> Board {
    let mut board = Board::new();
    for &(x, y) in blocks {
        assert!(board.set(x, y, CellState::Block));
    }
    board
}

#[test]
fn test_more_holes_score_lower() {
    let weights = EvalWeights::default();

    // equal heights: a solid column of two vs a roof over a hole
    let no_hole = board_with_blocks(&[(0, 18), (0, 19)]);
    let one_hole = board_with_blocks(&[(0, 18)]);

    assert_eq!(board_metrics(&no_hole).holes, 0);
    assert_eq!(board_metrics(&one_hole).holes, 1);
    assert!(evaluate(&no_hole, &weights) > evaluate(&one_hole, &weights));
}

#[test]
fn test_more_completed_lines_score_higher() {
    let weights = EvalWeights::default();

    let mut nine_cells = Board::new();
    for x in 0..9 {
        nine_cells.set(x, 19, CellState::Block);
    }
    let mut full_row = nine_cells.clone();
    full_row.set(9, 19, CellState::Block);

    assert_eq!(board_metrics(&nine_cells).completed_lines, 0);
    assert_eq!(board_metrics(&full_row).completed_lines, 1);
    assert!(evaluate(&full_row, &weights) > evaluate(&nine_cells, &weights));
}

#[test]
fn test_taller_stacks_score_lower() {
    let weights = EvalWeights::default();

    // same tallest column and no holes; only the aggregate height differs
    let shorter = board_with_blocks(&[(0, 18), (0, 19)]);
    let taller = board_with_blocks(&[(0, 18), (0, 19), (5, 19)]);

    assert!(evaluate(&shorter, &weights) > evaluate(&taller, &weights));
}

#[test]
fn test_rougher_surfaces_score_lower() {
    let weights = EvalWeights::default();

    // two cells each: flat pair vs a two-high spike
    let flat = board_with_blocks(&[(0, 19), (1, 19)]);
    let spike = board_with_blocks(&[(0, 18), (0, 19)]);

    assert!(evaluate(&flat, &weights) > evaluate(&spike, &weights));
}

#[test]
fn test_solid_rows_never_count_as_completed() {
    let weights = EvalWeights::default();

    let mut solid_row = Board::new();
    let mut block_row = Board::new();
    for x in 0..10 {
        solid_row.set(x, 19, CellState::Solid);
        block_row.set(x, 19, CellState::Block);
    }

    assert_eq!(board_metrics(&solid_row).completed_lines, 0);
    assert_eq!(board_metrics(&block_row).completed_lines, 1);
    // identical shape, so the whole difference is the line bonus
    assert_eq!(
        evaluate(&block_row, &weights) - evaluate(&solid_row, &weights),
        weights.completed_line
    );
}

#[test]
fn test_empty_board_is_the_neutral_score() {
    assert_eq!(evaluate(&Board::new(), &EvalWeights::default()), 0);
}
