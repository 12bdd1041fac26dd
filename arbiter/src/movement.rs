/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::{Board, Piece, PieceKind, Square};

/// Unit directions for orthogonal sliding movement (Rook, Queen).
pub const ORTHOGONAL_DIRS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Unit directions for diagonal sliding movement (Bishop, Queen).
pub const DIAGONAL_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// The eight (file, rank) jumps available to a Knight.
pub const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (-1, -2),
    (1, -2),
    (2, -1),
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
];

/// The eight adjacent (file, rank) steps available to a King.
pub const KING_STEPS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Returns `true` if the geometric movement pattern of `piece` permits moving
/// from `from` to `to`, ignoring the occupancy of intervening squares.
///
/// Destination occupancy *does* participate for pawns, whose pushes require
/// an empty destination and whose diagonal captures require an occupied one.
/// Whether that occupant is friendly is the pipeline's concern, not this
/// function's. Zero displacement is never a valid movement.
pub fn is_valid_movement(board: &Board, piece: Piece, from: Square, to: Square) -> bool {
    if from == to {
        return false;
    }

    let file_delta = to.file().inner() as i8 - from.file().inner() as i8;
    let rank_delta = to.rank().inner() as i8 - from.rank().inner() as i8;

    match piece.kind() {
        PieceKind::Pawn => {
            let forward = piece.color().forward();

            // Single push onto an empty square
            (file_delta == 0 && rank_delta == forward && board.piece_at(to).is_none())
                // Double push while the first-move flag is still clear
                || (file_delta == 0
                    && rank_delta == 2 * forward
                    && !piece.has_moved()
                    && board.piece_at(to).is_none())
                // Diagonal capture onto an occupied square
                || (file_delta.abs() == 1 && rank_delta == forward && board.piece_at(to).is_some())
        }
        PieceKind::Knight => matches!((file_delta.abs(), rank_delta.abs()), (1, 2) | (2, 1)),
        PieceKind::Bishop => file_delta.abs() == rank_delta.abs(),
        PieceKind::Rook => file_delta == 0 || rank_delta == 0,
        PieceKind::Queen => {
            file_delta == 0 || rank_delta == 0 || file_delta.abs() == rank_delta.abs()
        }
        PieceKind::King => file_delta.abs().max(rank_delta.abs()) == 1,
    }
}

/// Returns `true` if a piece occupies any square strictly between `from` and
/// `to` along `piece`'s path.
///
/// Sliding pieces walk every intermediate square. A pawn's two-square advance
/// checks the square it jumps over. Knights and kings never collide.
pub fn move_collides(board: &Board, piece: Piece, from: Square, to: Square) -> bool {
    match piece.kind() {
        PieceKind::Knight | PieceKind::King => false,
        PieceKind::Pawn => {
            from.distance_ranks(to) == 2
                && from
                    .forward_by(piece.color(), 1)
                    .is_some_and(|jumped| board.has(jumped))
        }
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            let file_delta = to.file().inner() as i8 - from.file().inner() as i8;
            let rank_delta = to.rank().inner() as i8 - from.rank().inner() as i8;

            // A target off every line of movement has no path to test
            if file_delta != 0 && rank_delta != 0 && file_delta.abs() != rank_delta.abs() {
                return false;
            }

            let steps = file_delta.abs().max(rank_delta.abs());
            let dir = (file_delta.signum(), rank_delta.signum());

            for i in 1..steps {
                // Every strictly-between square lies on the board
                let Some(between) = from.offset(dir.0 * i, dir.1 * i) else {
                    break;
                };

                if board.has(between) {
                    return true;
                }
            }

            false
        }
    }
}
