//! Simulation tests - legality, movement, gravity drop

use blockbot::core::{Board, Piece};
use blockbot::engine::sim::{
    can_move_down, can_move_left, can_move_right, drop_to_rest, is_legal, lock,
};
use blockbot::types::{CellState, PieceKind, Rotation};

const ALL_KINDS: [PieceKind; 7] = [
    PieceKind::I,
    PieceKind::O,
    PieceKind::T,
    PieceKind::S,
    PieceKind::Z,
    PieceKind::J,
    PieceKind::L,
];

fn board_with_blocks(blocks: &[(i8, i8)]) -> Board {
    let mut board = Board::new();
    for &(x, y) in blocks {
        assert!(board.set(x, y, CellState::Block));
    }
    board
}

#[test]
fn test_cells_above_the_board_are_legal() {
    let board = Board::new();
    // vertical I reaching up past the top edge
    let piece = Piece::new(PieceKind::I, Rotation::East, 3, -3);
    assert!(piece.cells().iter().any(|&(_, y)| y < 0));
    assert!(is_legal(&board, &piece));
}

#[test]
fn test_lateral_and_floor_bounds_are_hard() {
    let board = Board::new();

    assert!(!is_legal(&board, &Piece::new(PieceKind::O, Rotation::North, -1, 10)));
    assert!(!is_legal(&board, &Piece::new(PieceKind::O, Rotation::North, 9, 10)));
    assert!(!is_legal(&board, &Piece::new(PieceKind::O, Rotation::North, 4, 19)));
}

#[test]
fn test_collision_with_settled_material() {
    let board = board_with_blocks(&[(4, 10)]);
    let piece = Piece::new(PieceKind::O, Rotation::North, 4, 10);
    assert!(!is_legal(&board, &piece));

    // the same pose is fine one column over
    assert!(is_legal(&board, &piece.shifted(1, 0)));
}

#[test]
fn test_active_cells_do_not_collide() {
    // boards decoded mid-turn still carry the falling piece as Active
    let mut board = Board::new();
    board.set(4, 10, CellState::Active);
    board.set(5, 10, CellState::Active);

    let piece = Piece::new(PieceKind::O, Rotation::North, 4, 10);
    assert!(is_legal(&board, &piece));
}

#[test]
fn test_one_step_moves_match_legality() {
    let board = board_with_blocks(&[(6, 11), (6, 10)]);
    let piece = Piece::new(PieceKind::O, Rotation::North, 4, 10);

    assert!(can_move_left(&board, &piece));
    // cells would cover column 6
    assert!(!can_move_right(&board, &piece));
    assert!(can_move_down(&board, &piece));
}

#[test]
fn test_drop_to_rest_is_legal_and_grounded() {
    let board = board_with_blocks(&[(0, 19), (1, 19), (2, 18), (7, 15)]);

    for kind in ALL_KINDS {
        for shift in [-2, 0, 2] {
            let piece = Piece::spawn(kind).shifted(shift, 0);
            if !is_legal(&board, &piece) {
                continue;
            }
            let rested = drop_to_rest(&board, &piece);
            assert!(is_legal(&board, &rested), "{kind:?} rested in an illegal pose");
            assert!(
                !can_move_down(&board, &rested),
                "{kind:?} rested but can still fall"
            );
        }
    }
}

#[test]
fn test_drop_to_rest_reaches_the_floor_on_an_empty_board() {
    let board = Board::new();
    let rested = drop_to_rest(&board, &Piece::spawn(PieceKind::T));
    // T north: wings on the bottom row
    assert_eq!(rested.cells(), [(4, 18), (3, 19), (4, 19), (5, 19)]);
}

#[test]
fn test_lock_settles_every_cell() {
    let board = Board::new();
    let rested = drop_to_rest(&board, &Piece::spawn(PieceKind::I));
    let locked = lock(&board, &rested);

    for (x, y) in rested.cells() {
        assert_eq!(locked.get(x, y), Some(CellState::Block));
    }
    // locking never mutates the input board
    assert_eq!(board, Board::new());
}
