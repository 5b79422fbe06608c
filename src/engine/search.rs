//! Placement search - enumerate every reachable resting placement of the
//! active piece, score the board each one produces, optionally credit each
//! candidate with the best follow-up of the next piece.

use crate::core::board::Board;
use crate::core::pieces::Piece;
use crate::engine::eval::{evaluate, EvalWeights};
use crate::engine::sim;
use crate::types::PieceKind;

/// Score contributed by a follow-up piece that has nowhere legal to go.
/// Large enough to drown out any reachable board score, so candidates
/// that top the board out lose to every candidate that does not.
const TOPPED_OUT_PENALTY: i32 = -1_000_000;

/// A chosen final pose, described the way the move protocol wants it:
/// rotation steps from the spawn orientation plus a signed column offset.
///
/// Offset sign convention: positive means shift left that many columns,
/// negative means shift right. Pinned by tests; inverting it sends every
/// piece to the mirrored column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Clockwise rotation steps from the pose the search was given (0-3)
    pub rotations: u8,
    /// Signed column offset from that pose (positive = left)
    pub offset: i8,
    /// Evaluated score of the resulting board, including any lookahead
    pub score: i32,
}

/// Search every rotation and every reachable column of `piece` for the
/// placement whose locked board evaluates best.
///
/// `depth` is the number of follow-up pieces to simulate: with `depth > 0`
/// and a `next` kind, each candidate board is credited with the top score
/// the next piece can reach on it from its spawn pose. The recursive call
/// always passes `depth - 1` and no further piece, so the lookahead is
/// exactly one level regardless of input.
///
/// Enumeration order is rotations 0..=3, then columns leftmost to
/// rightmost within a rotation. Score comparison uses `>=`, so the
/// later-enumerated candidate wins ties. Output determinism depends on
/// this exact order and comparison.
///
/// Returns None when no column of any rotation admits a legal pose,
/// which is the topped-out condition for the caller to report.
pub fn find_best_placement(
    board: &Board,
    piece: Piece,
    next: Option<PieceKind>,
    depth: u8,
    weights: &EvalWeights,
) -> Option<Placement> {
    let mut best: Option<Placement> = None;

    // Rotation state accumulates across the loop; the engine's turnright
    // move is cumulative the same way.
    let mut rotated = piece;
    for rotations in 0..4u8 {
        if rotations != 0 {
            rotated = rotated.rotated_cw();
        }

        // Walk to the leftmost legal column for this rotation, counting
        // the steps taken.
        let mut cursor = rotated;
        let mut left: i8 = 0;
        while sim::can_move_left(board, &cursor) {
            cursor = cursor.shifted(-1, 0);
            left += 1;
        }

        // Scan rightward. The walk ends when the un-dropped pose stops
        // being legal, which also bounds it at the right wall.
        while sim::is_legal(board, &cursor) {
            let rested = sim::drop_to_rest(board, &cursor);
            let locked = sim::lock(board, &rested);

            let mut score = evaluate(&locked, weights);
            if depth > 0 {
                if let Some(kind) = next {
                    score += match find_best_placement(
                        &locked,
                        Piece::spawn(kind),
                        None,
                        depth - 1,
                        weights,
                    ) {
                        Some(follow_up) => follow_up.score,
                        None => TOPPED_OUT_PENALTY,
                    };
                }
            }

            if best.map_or(true, |b| score >= b.score) {
                best = Some(Placement {
                    rotations,
                    offset: left,
                    score,
                });
            }

            cursor = cursor.shifted(1, 0);
            left -= 1;
        }
    }

    best
}
