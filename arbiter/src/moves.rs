/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{error, fmt, ops::Deref};

use super::{Board, Piece, Square, MAX_NUM_MOVES};

/// An alias for an [`arrayvec::ArrayVec`] containing at most [`MAX_NUM_MOVES`] moves.
pub type MoveList = arrayvec::ArrayVec<Move, MAX_NUM_MOVES>;

/// A proposed transition on a [`Board`]: the acting piece, its origin and
/// destination squares, and the piece currently on the destination, if any.
///
/// A [`Move`] is a value snapshot taken at construction time; building one
/// never mutates the board. It carries no claim of legality - pass it to
/// [`Board::validate`] for that.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Move {
    piece: Piece,
    from: Square,
    to: Square,
    capture: Option<Piece>,
}

impl Move {
    /// Creates a new [`Move`] of the piece on `from` to `to`, resolving the
    /// capture target against `board`.
    ///
    /// Returns `None` if `from` is empty. The capture is whatever currently
    /// occupies `to`; when `from == to` there is no capture, since the
    /// occupant would be the acting piece itself.
    ///
    /// # Example
    /// ```
    /// # use arbiter::*;
    /// let board = Board::default();
    /// let mv = Move::new(&board, Square::G1, Square::F3).unwrap();
    /// assert_eq!(mv.piece().kind(), PieceKind::Knight);
    /// assert!(mv.capture().is_none());
    /// assert!(Move::new(&board, Square::E4, Square::E5).is_none());
    /// ```
    pub fn new(board: &Board, from: Square, to: Square) -> Option<Self> {
        let piece = board.piece_at(from)?;
        let capture = if from != to { board.piece_at(to) } else { None };

        Some(Self {
            piece,
            from,
            to,
            capture,
        })
    }

    /// The acting [`Piece`], as it was when this [`Move`] was constructed.
    #[inline(always)]
    pub const fn piece(&self) -> Piece {
        self.piece
    }

    /// The [`Square`] the acting piece moves from.
    #[inline(always)]
    pub const fn from(&self) -> Square {
        self.from
    }

    /// The [`Square`] the acting piece moves to.
    #[inline(always)]
    pub const fn to(&self) -> Square {
        self.to
    }

    /// The [`Piece`] this move would capture, if any.
    #[inline(always)]
    pub const fn capture(&self) -> Option<Piece> {
        self.capture
    }
}

impl fmt::Display for Move {
    /// Displays in coordinate form, like `e2e4`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// A [`Move`] that has passed the full legality pipeline of the [`Board`] it
/// was validated against.
///
/// Only [`Board::validate`] creates these, so [`Board::apply`] cannot fail:
/// applying an unvalidated move is unrepresentable. The proof is only as
/// fresh as the board it came from - applying it after other mutations is a
/// caller contract violation, exactly as with the underlying [`Move`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ValidatedMove {
    pub(crate) mv: Move,
}

impl Deref for ValidatedMove {
    type Target = Move;
    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        &self.mv
    }
}

impl fmt::Display for ValidatedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.mv.fmt(f)
    }
}

/// Why a [`Move`] was rejected by [`Board::validate`].
///
/// Variants are ordered as the pipeline evaluates them; validation
/// short-circuits on the first failure.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IllegalMove {
    /// The game is already over; no further moves are accepted.
    GameOver,
    /// The acting piece does not belong to the side to move.
    NotYourTurn,
    /// The destination is occupied by a piece of the acting piece's own side.
    FriendlyCapture,
    /// The acting piece's movement pattern does not permit the destination.
    InvalidMovement,
    /// A piece occupies a square strictly between origin and destination.
    PathBlocked,
    /// Making the move would leave the acting side's own king in check.
    SelfCheck,
}

impl fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::GameOver => "The game is already over",
            Self::NotYourTurn => "Tried to move a piece that wasn't yours",
            Self::FriendlyCapture => "Tried to capture your own piece",
            Self::InvalidMovement => "That piece cannot move that way",
            Self::PathBlocked => "Another piece blocks the path",
            Self::SelfCheck => "That move would leave your own king in check",
        };

        write!(f, "{reason}")
    }
}

impl error::Error for IllegalMove {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    #[test]
    fn test_move_is_a_snapshot() {
        let board = Board::default();
        let mv = Move::new(&board, Square::E2, Square::E4).unwrap();

        assert_eq!(mv.from(), Square::E2);
        assert_eq!(mv.to(), Square::E4);
        assert_eq!(mv.piece().color(), Color::White);
        assert!(mv.capture().is_none());

        // Constructing a move must not touch the board
        assert_eq!(board, Board::default());
    }

    #[test]
    fn test_capture_resolved_at_construction() {
        let board = Board::from_fen("k7/8/8/3p4/8/8/8/B6K w - -").unwrap();
        let mv = Move::new(&board, Square::A1, Square::D5).unwrap();

        let capture = mv.capture().unwrap();
        assert_eq!(capture.color(), Color::Black);
        assert!(capture.is_pawn());
    }

    #[test]
    fn test_null_move_captures_nothing() {
        let board = Board::default();
        let mv = Move::new(&board, Square::E1, Square::E1).unwrap();

        // The occupant of the destination is the acting piece, not a capture
        assert!(mv.capture().is_none());
    }
}
