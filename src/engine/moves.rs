//! Move translation - from a chosen placement to engine move primitives
//!
//! The engine consumes one move string per turn: some number of turnright
//! moves, then shifts in one direction, then a single drop. The drop is
//! terminal; nothing after it is accepted.

use arrayvec::ArrayVec;

use crate::engine::search::Placement;
use crate::types::{Move, BOARD_WIDTH};

/// Upper bound on moves in one turn: three rotations, at most a board
/// width of shifts, one drop.
pub const MAX_MOVES: usize = 3 + BOARD_WIDTH as usize + 1;

/// Expand a placement into the primitive moves that reach it.
/// Positive offset emits left shifts, negative emits right shifts.
pub fn placement_to_moves(placement: &Placement) -> ArrayVec<Move, MAX_MOVES> {
    let mut moves = ArrayVec::new();

    for _ in 0..placement.rotations {
        moves.push(Move::TurnRight);
    }

    for _ in 0..placement.offset.unsigned_abs() {
        moves.push(if placement.offset > 0 {
            Move::Left
        } else {
            Move::Right
        });
    }

    moves.push(Move::Drop);
    moves
}
