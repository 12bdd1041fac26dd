/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::{
    Board, Color, Move, PieceKind, Square, DIAGONAL_DIRS, KING_STEPS, KNIGHT_JUMPS, ORTHOGONAL_DIRS,
};

/// Pure threat-detection queries over a borrowed [`Board`].
///
/// A king is attacked if any of eight probe families finds an opposing
/// piece: four orthogonal rays (Rook/Queen), four diagonal rays
/// (Bishop/Queen), eight knight jumps, two forward-diagonal pawn squares,
/// and eight adjacent king squares. Rays walk outward up to seven squares
/// and stop at the first occupant, testing only that nearest piece.
///
/// Hypothetical evaluation takes the proposed [`Move`] as an explicit
/// parameter: the origin square is treated as vacated (rays pass through
/// it), and the destination square as occupied by the mover (rays stop
/// there, and any occupant of it is considered captured). No board state is
/// touched by any query.
#[derive(Clone, Copy)]
pub struct CheckScanner<'a> {
    board: &'a Board,
}

impl<'a> CheckScanner<'a> {
    /// Creates a new [`CheckScanner`] over `board`.
    #[inline(always)]
    pub const fn new(board: &'a Board) -> Self {
        Self { board }
    }

    /// Returns `true` if, after hypothetically performing `mv`, the king of
    /// the acting piece's side would be attacked.
    ///
    /// If the acting piece is the king itself, threats are evaluated against
    /// the move's destination; otherwise against the king's current square.
    ///
    /// # Example
    /// ```
    /// # use arbiter::*;
    /// // A white bishop shielding its king from a black rook may not leave the file
    /// let board = Board::from_fen("4r2k/8/8/8/8/8/4B3/4K3 w - -").unwrap();
    /// let scanner = CheckScanner::new(&board);
    ///
    /// let away = Move::new(&board, Square::E2, Square::D3).unwrap();
    /// assert!(scanner.leaves_king_in_check(&away));
    /// ```
    pub fn leaves_king_in_check(&self, mv: &Move) -> bool {
        let color = mv.piece().color();

        let king = if mv.piece().is_king() {
            mv.to()
        } else {
            self.king_square(color)
        };

        self.attacked(king, color, Some(mv.from()), Some(mv.to()))
    }

    /// Returns `true` if `color`'s king is attacked in the current position.
    pub fn is_in_check(&self, color: Color) -> bool {
        self.attacked(self.king_square(color), color, None, None)
    }

    /// Returns `true` if no piece of `color` has any legal destination square
    /// anywhere on the board.
    ///
    /// The first legal move found short-circuits. Only meaningful when
    /// `color` is the side to move, since legality includes turn order.
    /// Distinguishing checkmate from stalemate is the caller's job, via
    /// [`CheckScanner::is_in_check`].
    pub fn is_game_over(&self, color: Color) -> bool {
        for from in Square::iter() {
            let Some(piece) = self.board.piece_at(from) else {
                continue;
            };
            if piece.color() != color {
                continue;
            }

            for to in Square::iter() {
                let Some(mv) = Move::new(self.board, from, to) else {
                    continue;
                };
                if self.board.is_legal(mv) {
                    return false;
                }
            }
        }

        true
    }

    /// The square `color`'s king stands on.
    ///
    /// Exactly one king per side exists for the lifetime of a game; a missing
    /// king here means that invariant was already broken elsewhere.
    fn king_square(&self, color: Color) -> Square {
        self.board
            .find_king(color)
            .expect("exactly one king per side must be on the board")
    }

    /// The OR of all eight probe families against `color`'s king on `king`.
    fn attacked(
        &self,
        king: Square,
        color: Color,
        vacated: Option<Square>,
        mover_dest: Option<Square>,
    ) -> bool {
        use PieceKind::*;

        let forward = color.forward();
        let pawn_squares = [(-1, forward), (1, forward)];

        self.hit_on_ray(king, color, &ORTHOGONAL_DIRS, [Rook, Queen], vacated, mover_dest)
            || self.hit_on_ray(king, color, &DIAGONAL_DIRS, [Bishop, Queen], vacated, mover_dest)
            || self.hit_at_offsets(king, color, &KNIGHT_JUMPS, Knight, mover_dest)
            || self.hit_at_offsets(king, color, &pawn_squares, Pawn, mover_dest)
            || self.hit_at_offsets(king, color, &KING_STEPS, King, mover_dest)
    }

    /// Walks each direction in `dirs` outward from `king`, testing the first
    /// occupant encountered against `threats`.
    fn hit_on_ray(
        &self,
        king: Square,
        color: Color,
        dirs: &[(i8, i8)],
        threats: [PieceKind; 2],
        vacated: Option<Square>,
        mover_dest: Option<Square>,
    ) -> bool {
        dirs.iter().any(|&(file_dir, rank_dir)| {
            for i in 1..8i8 {
                let Some(square) = king.offset(file_dir * i, rank_dir * i) else {
                    break;
                };

                // The mover now stands here and shields its own king
                if Some(square) == mover_dest {
                    break;
                }
                // The mover has left here; the ray passes through
                if Some(square) == vacated {
                    continue;
                }

                if let Some(piece) = self.board.piece_at(square) {
                    return piece.color() != color && threats.contains(&piece.kind());
                }
            }

            false
        })
    }

    /// Tests each fixed offset from `king` for an opposing piece of `threat`
    /// kind. An occupant of `mover_dest` is hypothetically captured and so
    /// never a threat.
    fn hit_at_offsets(
        &self,
        king: Square,
        color: Color,
        offsets: &[(i8, i8)],
        threat: PieceKind,
        mover_dest: Option<Square>,
    ) -> bool {
        offsets.iter().any(|&(file_delta, rank_delta)| {
            king.offset(file_delta, rank_delta).is_some_and(|square| {
                Some(square) != mover_dest
                    && self
                        .board
                        .piece_at(square)
                        .is_some_and(|piece| piece.color() != color && piece.kind() == threat)
            })
        })
    }
}
