//! Simulation primitives - legality, one-step movement, gravity drop
//!
//! All functions are pure: they take a board and a piece and mutate
//! neither. The search builds every candidate placement out of these.

use crate::core::board::Board;
use crate::core::pieces::Piece;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// A pose is legal when no cell overlaps settled material and no cell
/// leaves the sides or the floor. Cells above the top row are permitted;
/// pieces spawn up there.
pub fn is_legal(board: &Board, piece: &Piece) -> bool {
    piece.cells().iter().all(|&(x, y)| {
        if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return false;
        }
        !board.is_block(x, y)
    })
}

/// Check if the piece can move one row down
pub fn can_move_down(board: &Board, piece: &Piece) -> bool {
    is_legal(board, &piece.shifted(0, 1))
}

/// Check if the piece can move one column left
pub fn can_move_left(board: &Board, piece: &Piece) -> bool {
    is_legal(board, &piece.shifted(-1, 0))
}

/// Check if the piece can move one column right
pub fn can_move_right(board: &Board, piece: &Piece) -> bool {
    is_legal(board, &piece.shifted(1, 0))
}

/// Drop the piece straight down to its resting pose.
/// Bounded by the board height, so it always terminates.
pub fn drop_to_rest(board: &Board, piece: &Piece) -> Piece {
    let mut cursor = *piece;
    while can_move_down(board, &cursor) {
        cursor = cursor.shifted(0, 1);
    }
    cursor
}

/// Settle the piece onto a new board
pub fn lock(board: &Board, piece: &Piece) -> Board {
    board.with_piece_locked(piece)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CellState, PieceKind, Rotation};

    #[test]
    fn test_spawn_pose_above_board_is_legal() {
        let board = Board::new();
        let piece = Piece::spawn(PieceKind::O);
        // the top half of the O box sits above the visible board
        assert!(piece.cells().iter().any(|&(_, y)| y < 0));
        assert!(is_legal(&board, &piece));
    }

    #[test]
    fn test_side_and_floor_bounds_are_hard() {
        let board = Board::new();
        let piece = Piece::new(PieceKind::O, Rotation::North, -1, 5);
        assert!(!is_legal(&board, &piece));

        let piece = Piece::new(PieceKind::O, Rotation::North, 9, 5);
        assert!(!is_legal(&board, &piece));

        let piece = Piece::new(PieceKind::O, Rotation::North, 4, 19);
        assert!(!is_legal(&board, &piece));
    }

    #[test]
    fn test_drop_to_rest_lands_on_blocks() {
        let mut board = Board::new();
        board.set(4, 19, CellState::Block);
        board.set(5, 19, CellState::Block);

        let rested = drop_to_rest(&board, &Piece::spawn(PieceKind::O));
        assert_eq!(rested.cells(), [(4, 17), (5, 17), (4, 18), (5, 18)]);
        assert!(is_legal(&board, &rested));
        assert!(!can_move_down(&board, &rested));
    }

    #[test]
    fn test_solid_counts_as_floor() {
        let mut board = Board::new();
        for x in 0..10 {
            board.set(x, 19, CellState::Solid);
        }

        let rested = drop_to_rest(&board, &Piece::spawn(PieceKind::O));
        assert_eq!(rested.cells(), [(4, 17), (5, 17), (4, 18), (5, 18)]);
    }
}
