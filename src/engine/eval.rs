//! Evaluation module - scoring a settled board
//!
//! A board scores as a weighted sum of four shape terms: completed rows
//! (good), holes, aggregate column height, and roughness (all bad).
//! The weights are tunable policy, not a contract; only the direction of
//! each term is pinned by tests.

use serde::Deserialize;

use crate::core::board::Board;
use crate::types::{CellState, BOARD_HEIGHT, BOARD_WIDTH};

const W: usize = BOARD_WIDTH as usize;
const H: usize = BOARD_HEIGHT as usize;

/// Scoring weights. All values are magnitudes: `completed_line` is added
/// per full row, the rest are subtracted per unit.
///
/// A profile can be loaded from JSON; missing fields keep their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EvalWeights {
    /// Bonus per row fully occupied by settled blocks
    pub completed_line: i32,
    /// Penalty per empty cell with a block above it in its column
    pub hole: i32,
    /// Penalty per unit of summed column height
    pub height: i32,
    /// Penalty per row of difference between tallest and shortest column
    pub roughness: i32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            completed_line: 138,
            hole: 32,
            height: 4,
            roughness: 9,
        }
    }
}

/// Shape metrics extracted from a board in one pass per column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardMetrics {
    /// Stack height per column, counting Block and Solid cells
    pub heights: [u8; W],
    /// Empty cells with at least one Block above them in the same column
    pub holes: u32,
    /// Rows fully occupied by Block cells (Solid floor rows never count)
    pub completed_lines: u32,
}

/// Scan the board column by column for heights and holes, then row by
/// row for completed lines. Active cells are transparent throughout.
pub fn board_metrics(board: &Board) -> BoardMetrics {
    let mut heights = [0u8; W];
    let mut holes = 0u32;

    for x in 0..W {
        let mut block_above = false;
        for y in 0..H {
            match board.get(x as i8, y as i8) {
                Some(CellState::Block) => {
                    if heights[x] == 0 {
                        heights[x] = (H - y) as u8;
                    }
                    block_above = true;
                }
                Some(CellState::Solid) => {
                    if heights[x] == 0 {
                        heights[x] = (H - y) as u8;
                    }
                }
                _ => {
                    if block_above {
                        holes += 1;
                    }
                }
            }
        }
    }

    let mut completed_lines = 0u32;
    for y in 0..H {
        let full = (0..W).all(|x| board.get(x as i8, y as i8) == Some(CellState::Block));
        if full {
            completed_lines += 1;
        }
    }

    BoardMetrics {
        heights,
        holes,
        completed_lines,
    }
}

/// Score a board; higher is better
pub fn evaluate(board: &Board, weights: &EvalWeights) -> i32 {
    let metrics = board_metrics(board);

    let mut aggregate: i32 = 0;
    let mut tallest: i32 = 0;
    let mut shortest: i32 = i32::MAX;
    for h in metrics.heights {
        let h = h as i32;
        aggregate += h;
        tallest = tallest.max(h);
        shortest = shortest.min(h);
    }
    let roughness = tallest - shortest;

    weights.completed_line * metrics.completed_lines as i32
        - weights.hole * metrics.holes as i32
        - weights.height * aggregate
        - weights.roughness * roughness
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(cells: &[(i8, i8, CellState)]) -> Board {
        let mut board = Board::new();
        for &(x, y, state) in cells {
            assert!(board.set(x, y, state));
        }
        board
    }

    #[test]
    fn test_metrics_empty_board() {
        let m = board_metrics(&Board::new());
        assert_eq!(m.heights, [0; W]);
        assert_eq!(m.holes, 0);
        assert_eq!(m.completed_lines, 0);
    }

    #[test]
    fn test_metrics_counts_holes_under_blocks() {
        // col 0: block on 17, empties on 18 and 19 -> two holes
        let board = board_with(&[(0, 17, CellState::Block)]);
        let m = board_metrics(&board);
        assert_eq!(m.heights[0], 3);
        assert_eq!(m.holes, 2);
    }

    #[test]
    fn test_metrics_solid_covers_no_holes() {
        // a solid cell above an empty cell is not a roof for hole purposes
        let board = board_with(&[(0, 18, CellState::Solid)]);
        let m = board_metrics(&board);
        assert_eq!(m.heights[0], 2);
        assert_eq!(m.holes, 0);
    }

    #[test]
    fn test_metrics_completed_line_requires_blocks() {
        let mut board = Board::new();
        for x in 0..10 {
            board.set(x, 19, CellState::Solid);
        }
        for x in 0..10 {
            board.set(x, 18, CellState::Block);
        }
        let m = board_metrics(&board);
        assert_eq!(m.completed_lines, 1);
    }

    #[test]
    fn test_weight_profile_partial_json() {
        let weights: EvalWeights = serde_json::from_str(r#"{"hole": 99}"#).unwrap();
        assert_eq!(weights.hole, 99);
        assert_eq!(weights.completed_line, EvalWeights::default().completed_line);
    }
}
