/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{fmt, ops::Index, str::FromStr};

use anyhow::{anyhow, bail, Result};

use super::{
    movement, CheckScanner, Color, File, IllegalMove, Move, MoveList, Piece, Rank, Square,
    ValidatedMove, FEN_STARTPOS,
};

/// How a game stands: still in progress, won by one side, or drawn.
///
/// Produced by [`Board::apply`] after every move; checkmate yields
/// [`Outcome::Win`] for the side that delivered it, stalemate yields
/// [`Outcome::Draw`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default)]
pub enum Outcome {
    #[default]
    Ongoing,
    Win(Color),
    Draw,
}

impl Outcome {
    /// Returns `true` if the game has ended.
    #[inline(always)]
    pub const fn is_game_over(&self) -> bool {
        !matches!(self, Self::Ongoing)
    }

    /// The winning [`Color`], if the game ended in checkmate.
    #[inline(always)]
    pub const fn winner(&self) -> Option<Color> {
        match self {
            Self::Win(color) => Some(*color),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ongoing => write!(f, "game in progress"),
            Self::Win(Color::White) => write!(f, "White wins!"),
            Self::Win(Color::Black) => write!(f, "Black wins!"),
            Self::Draw => write!(f, "Stalemate!"),
        }
    }
}

/// Returns `true` iff both pieces are present and share a side.
///
/// `None` never matches anything - including another `None`.
///
/// # Example
/// ```
/// # use arbiter::*;
/// let pawn = Piece::new(Color::White, PieceKind::Pawn);
/// let rook = Piece::new(Color::White, PieceKind::Rook);
/// assert!(same_side(Some(pawn), Some(rook)));
/// assert!(!same_side(Some(pawn), None));
/// assert!(!same_side(None, None));
/// ```
#[inline(always)]
pub fn same_side(a: Option<Piece>, b: Option<Piece>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.color() == b.color(),
        _ => false,
    }
}

/// A chessboard: piece placements, the side to move, a transient selection
/// slot for input/rendering layers, and the game [`Outcome`].
///
/// Placements live in a square-indexed mailbox, so every square holds at
/// most one piece by construction. The only mutating entry points are
/// [`Board::apply`] (which requires a [`ValidatedMove`]) and the
/// convenience wrapper [`Board::make_move`]; every query is pure.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    /// At most one piece per square, indexed by [`Square`].
    mailbox: [Option<Piece>; Square::COUNT],

    /// The [`Color`] whose turn it is.
    side_to_move: Color,

    /// Selection slot for the input/rendering layers. Never consulted by the
    /// legality pipeline or the scanner.
    selected: Option<Square>,

    /// Set once a terminal position is reached; all moves are rejected after.
    outcome: Outcome,
}

impl Board {
    /// Creates a new, empty [`Board`] containing no pieces, with White to move.
    ///
    /// # Example
    /// ```
    /// # use arbiter::Board;
    /// let board = Board::new();
    /// assert_eq!(board.to_fen(), "8/8/8/8/8/8/8/8 w");
    /// ```
    #[inline(always)]
    pub const fn new() -> Self {
        Self {
            mailbox: [None; Square::COUNT],
            side_to_move: Color::White,
            selected: None,
            outcome: Outcome::Ongoing,
        }
    }

    /// Constructs a [`Board`] from the provided FEN string.
    ///
    /// Only the placement field and (optionally) the side-to-move field are
    /// used; castling, en passant, and move-counter fields are ignored, as
    /// none of those rules are modeled. A pawn parsed off its home rank is
    /// marked as having moved, so it no longer gets a two-square advance.
    ///
    /// # Example
    /// ```
    /// # use arbiter::*;
    /// let board = Board::from_fen("k7/8/8/8/8/8/8/7K b - -").unwrap();
    /// assert_eq!(board.side_to_move(), Color::Black);
    /// assert!(board.piece_at(Square::H1).unwrap().is_king());
    /// ```
    pub fn from_fen(fen: &str) -> Result<Self> {
        let mut board = Self::new();
        let mut split = fen.trim().split(' ');

        let placements = split
            .next()
            .ok_or(anyhow!("FEN string must have piece placements."))?;

        if placements.matches('/').count() != 7 {
            bail!("Missing placements for all 8 ranks.");
        }

        // Need to reverse this so that White pieces are at the "bottom" of the board
        for (rank, placements) in placements.split('/').rev().enumerate() {
            let mut file = 0;
            let rank = rank as u8;

            for piece_char in placements.chars() {
                if let Ok(mut piece) = Piece::from_uci(piece_char) {
                    let square = Square::new(File::new_unchecked(file), Rank::new_unchecked(rank));

                    // A pawn off its home rank has necessarily moved already
                    if piece.is_pawn() && square.rank() != Rank::second(piece.color()) {
                        piece.mark_moved();
                    }

                    board.place(piece, square);
                    file += 1;
                } else {
                    let Some(empty) = piece_char.to_digit(10) else {
                        bail!("Found non-piece, non-numeric char {piece_char:?} when parsing FEN.");
                    };
                    file += empty as u8;
                }
            }
        }

        if let Some(side) = split.next() {
            board.side_to_move = Color::from_uci(side)?;
        }

        Ok(board)
    }

    /// Generates a FEN-style string of this [`Board`]: the placement field
    /// followed by the side to move.
    pub fn to_fen(&self) -> String {
        let mut placements: [String; 8] = Default::default();

        for rank in Rank::iter() {
            let mut empty_spaces = 0;
            for file in File::iter() {
                if let Some(piece) = self.piece_at(file * rank) {
                    if empty_spaces != 0 {
                        placements[rank.index()] += &empty_spaces.to_string();
                        empty_spaces = 0;
                    }
                    placements[rank.index()].push(piece.char());
                } else {
                    empty_spaces += 1;
                }
            }

            if empty_spaces != 0 {
                placements[rank.index()] += &empty_spaces.to_string();
            }
        }
        placements.reverse();

        format!("{} {}", placements.join("/"), self.side_to_move)
    }

    /// Fetches the [`Piece`] at the provided [`Square`], if there is one.
    ///
    /// # Example
    /// ```
    /// # use arbiter::*;
    /// let board = Board::default();
    /// assert_eq!(board.piece_at(Square::A2).unwrap().kind(), PieceKind::Pawn);
    /// assert!(board.piece_at(Square::E4).is_none());
    /// ```
    #[inline(always)]
    pub const fn piece_at(&self, square: Square) -> Option<Piece> {
        self.mailbox[square.index()]
    }

    /// Fetches the [`Piece`] at the provided signed file/rank coordinates.
    ///
    /// Out-of-range coordinates resolve to "no piece" rather than faulting,
    /// which is what input hit-testing wants.
    ///
    /// # Example
    /// ```
    /// # use arbiter::*;
    /// let board = Board::default();
    /// assert!(board.piece_on(4, 0).is_some());
    /// assert!(board.piece_on(-1, 9).is_none());
    /// ```
    #[inline(always)]
    pub fn piece_on(&self, file: i8, rank: i8) -> Option<Piece> {
        Square::from_coords(file, rank).and_then(|square| self.piece_at(square))
    }

    /// Returns `true` if there is a piece at the given [`Square`].
    #[inline(always)]
    pub const fn has(&self, square: Square) -> bool {
        self.mailbox[square.index()].is_some()
    }

    /// Places the provided [`Piece`] on the supplied [`Square`], replacing
    /// any piece already there.
    #[inline(always)]
    pub fn place(&mut self, piece: Piece, square: Square) {
        self.mailbox[square.index()] = Some(piece);
    }

    /// Takes the [`Piece`] from a given [`Square`], if there is one present.
    #[inline(always)]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.mailbox[square.index()].take()
    }

    /// Clears the supplied [`Square`] of any piece.
    #[inline(always)]
    pub fn clear(&mut self, square: Square) {
        self.take(square);
    }

    /// The [`Color`] whose turn it is.
    #[inline(always)]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// The current game [`Outcome`].
    #[inline(always)]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// The currently selected [`Square`], if any.
    ///
    /// This is a slot for the input/rendering layers (set on click, read for
    /// highlighting); the engine itself never reads it.
    #[inline(always)]
    pub const fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// Sets or clears the selection slot. See [`Board::selected`].
    #[inline(always)]
    pub fn select(&mut self, square: Option<Square>) {
        self.selected = square;
    }

    /// The [`Square`] of `color`'s king, if one is on the board.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        Square::iter().find(|&square| {
            self.piece_at(square)
                .is_some_and(|piece| piece.is_king() && piece.color() == color)
        })
    }

    /// Runs the full legality pipeline on `mv`, returning proof of legality
    /// or the first reason for rejection.
    ///
    /// The checks run in a fixed order and short-circuit:
    /// game over, turn order, friendly capture, movement pattern, path
    /// collision, then self-check.
    ///
    /// # Example
    /// ```
    /// # use arbiter::*;
    /// let board = Board::default();
    ///
    /// let mv = Move::new(&board, Square::E2, Square::E4).unwrap();
    /// assert!(board.validate(mv).is_ok());
    ///
    /// let mv = Move::new(&board, Square::E7, Square::E5).unwrap();
    /// assert_eq!(board.validate(mv), Err(IllegalMove::NotYourTurn));
    /// ```
    pub fn validate(&self, mv: Move) -> Result<ValidatedMove, IllegalMove> {
        if self.outcome.is_game_over() {
            return Err(IllegalMove::GameOver);
        }

        if mv.piece().color() != self.side_to_move {
            return Err(IllegalMove::NotYourTurn);
        }

        if same_side(Some(mv.piece()), mv.capture()) {
            return Err(IllegalMove::FriendlyCapture);
        }

        if !movement::is_valid_movement(self, mv.piece(), mv.from(), mv.to()) {
            return Err(IllegalMove::InvalidMovement);
        }

        if movement::move_collides(self, mv.piece(), mv.from(), mv.to()) {
            return Err(IllegalMove::PathBlocked);
        }

        if CheckScanner::new(self).leaves_king_in_check(&mv) {
            return Err(IllegalMove::SelfCheck);
        }

        Ok(ValidatedMove { mv })
    }

    /// Returns `true` if `mv` passes the full legality pipeline.
    ///
    /// Pure: calling this any number of times leaves the board untouched.
    #[inline(always)]
    pub fn is_legal(&self, mv: Move) -> bool {
        self.validate(mv).is_ok()
    }

    /// Applies a validated move. Cannot fail.
    ///
    /// Relocates the acting piece (marking it as moved), removes any
    /// captured piece, flips the side to move, and then scans the new
    /// position: if the new side to move has no legal move anywhere, the
    /// game ends - a win for the mover if that side is in check, a draw
    /// otherwise.
    ///
    /// The proof must be fresh: applying a [`ValidatedMove`] from an earlier
    /// board state is a caller contract violation.
    pub fn apply(&mut self, validated: ValidatedMove) {
        let mv = validated.mv;

        let Some(mut piece) = self.take(mv.from()) else {
            return;
        };
        piece.mark_moved();

        self.take(mv.to());
        self.place(piece, mv.to());

        self.side_to_move = self.side_to_move.opponent();

        let scanner = CheckScanner::new(self);
        if scanner.is_game_over(self.side_to_move) {
            let checkmate = scanner.is_in_check(self.side_to_move);
            self.outcome = if checkmate {
                Outcome::Win(self.side_to_move.opponent())
            } else {
                Outcome::Draw
            };
        }
    }

    /// Validates and applies `mv` in one step.
    ///
    /// # Example
    /// ```
    /// # use arbiter::*;
    /// let mut board = Board::default();
    /// board.make_move(Move::new(&board, Square::E2, Square::E4).unwrap()).unwrap();
    /// assert_eq!(board.side_to_move(), Color::Black);
    /// ```
    #[inline(always)]
    pub fn make_move(&mut self, mv: Move) -> Result<(), IllegalMove> {
        let validated = self.validate(mv)?;
        self.apply(validated);
        Ok(())
    }

    /// All legal moves of the piece on `from`, if any.
    ///
    /// This is what a rendering layer highlights for a selected piece.
    pub fn legal_moves_from(&self, from: Square) -> MoveList {
        let mut moves = MoveList::new();

        for to in Square::iter() {
            if let Some(mv) = Move::new(self, from, to) {
                if self.is_legal(mv) {
                    moves.push(mv);
                }
            }
        }

        moves
    }

    /// All legal moves for the side to move.
    pub fn legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();

        for (from, piece) in self.iter() {
            if piece.color() != self.side_to_move {
                continue;
            }
            moves.extend(self.legal_moves_from(from));
        }

        moves
    }

    /// Creates a [`BoardIter`] over all occupied [`Square`]s and their pieces.
    #[inline(always)]
    pub const fn iter(&self) -> BoardIter<'_> {
        BoardIter {
            board: self,
            index: 0,
        }
    }
}

impl Default for Board {
    #[inline(always)]
    fn default() -> Self {
        // Safe unwrap because the FEN for startpos is always valid
        Self::from_fen(FEN_STARTPOS).unwrap()
    }
}

impl FromStr for Board {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_fen(s)
    }
}

impl Index<Square> for Board {
    type Output = Option<Piece>;
    #[inline(always)]
    fn index(&self, index: Square) -> &Self::Output {
        &self.mailbox[index.index()]
    }
}

impl<'a> IntoIterator for &'a Board {
    type IntoIter = BoardIter<'a>;
    type Item = <BoardIter<'a> as Iterator>::Item;
    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::iter().rev() {
            write!(f, "{rank}| ")?;

            for file in File::iter() {
                let occupant = self.piece_at(file * rank).map(|p| p.char()).unwrap_or('.');
                write!(f, "{occupant} ")?;
            }

            writeln!(f)?;
        }
        write!(f, " +")?;
        for _ in File::iter() {
            write!(f, "--")?;
        }
        write!(f, "\n   ")?;
        for file in File::iter() {
            write!(f, "{file} ")?;
        }

        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::iter().rev() {
            write!(f, "{rank}|")?;
            for file in File::iter() {
                let occupant = self.piece_at(file * rank).map(|p| p.char()).unwrap_or('.');
                write!(f, " {occupant}")?;
            }

            if rank == Rank::SEVEN {
                write!(f, "           FEN: {}", self.to_fen())?;
            } else if rank == Rank::SIX {
                write!(f, "          Side: {}", self.side_to_move())?;
            } else if rank == Rank::FIVE {
                write!(f, "       Outcome: {}", self.outcome())?;
            } else if rank == Rank::FOUR {
                let selected = self
                    .selected()
                    .map(|s| s.to_uci())
                    .unwrap_or(String::from("-"));
                write!(f, "      Selected: {selected}")?;
            }
            writeln!(f)?;
        }
        write!(f, " +")?;
        for _ in File::iter() {
            write!(f, "--")?;
        }
        write!(f, "\n   ")?;
        for file in File::iter() {
            write!(f, "{file} ")?;
        }

        Ok(())
    }
}

/// An iterator over the occupied squares of a [`Board`].
///
/// Yields a tuple of a [`Square`] and the [`Piece`] standing on it.
pub struct BoardIter<'a> {
    /// The board to retrieve pieces from.
    board: &'a Board,

    /// The next square index to examine.
    index: usize,
}

impl<'a> Iterator for BoardIter<'a> {
    type Item = (Square, Piece);

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < Square::COUNT {
            let square = Square::from_index(self.index)?;
            self.index += 1;

            if let Some(piece) = self.board.piece_at(square) {
                return Some((square, piece));
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startpos_layout() {
        let board = Board::default();

        assert_eq!(board.side_to_move(), Color::White);
        assert_eq!(board.outcome(), Outcome::Ongoing);
        assert_eq!(board.iter().count(), 32);
        assert_eq!(
            board.to_fen(),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w"
        );
        assert_eq!(board.find_king(Color::White), Some(Square::E1));
        assert_eq!(board.find_king(Color::Black), Some(Square::E8));
    }

    #[test]
    fn test_fen_roundtrip() {
        for fen in [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w",
            "k7/8/8/3p4/8/8/8/B6K b",
            "8/8/8/8/8/8/8/8 w",
        ] {
            assert_eq!(Board::from_fen(fen).unwrap().to_fen(), fen);
        }

        assert!(Board::from_fen("only/three/ranks").is_err());
        assert!(Board::from_fen("8/8/8/8/8/xxxxxxxx/8/8 w").is_err());
    }

    #[test]
    fn test_double_push_legal_and_turn_gated() {
        let board = Board::default();

        // White's two-square first advance is legal and unobstructed
        let mv = Move::new(&board, Square::E2, Square::E4).unwrap();
        assert!(board.is_legal(mv));

        // Black's symmetric advance is illegal on White's turn
        let mv = Move::new(&board, Square::E7, Square::E5).unwrap();
        assert_eq!(board.validate(mv), Err(IllegalMove::NotYourTurn));
    }

    #[test]
    fn test_rejection_reasons() {
        let board = Board::default();

        // Rook takes its own pawn
        let mv = Move::new(&board, Square::A1, Square::A2).unwrap();
        assert_eq!(board.validate(mv), Err(IllegalMove::FriendlyCapture));

        // Rook leaves its lines of movement
        let mv = Move::new(&board, Square::A1, Square::B3).unwrap();
        assert_eq!(board.validate(mv), Err(IllegalMove::InvalidMovement));

        // Rook through its own pawn
        let mv = Move::new(&board, Square::A1, Square::A4).unwrap();
        assert_eq!(board.validate(mv), Err(IllegalMove::PathBlocked));

        // Null moves are not movements
        let mv = Move::new(&board, Square::E1, Square::E1).unwrap();
        assert_eq!(board.validate(mv), Err(IllegalMove::InvalidMovement));
    }

    #[test]
    fn test_validation_is_pure() {
        let board = Board::default();
        let copy = board;

        for from in Square::iter() {
            for to in Square::iter() {
                if let Some(mv) = Move::new(&board, from, to) {
                    board.is_legal(mv);
                }
            }
        }

        assert_eq!(board, copy);
    }

    #[test]
    fn test_make_move_flips_turn_and_marks_moved() {
        let mut board = Board::default();

        board
            .make_move(Move::new(&board, Square::G1, Square::F3).unwrap())
            .unwrap();
        assert_eq!(board.side_to_move(), Color::Black);

        let knight = board.piece_at(Square::F3).unwrap();
        assert!(knight.has_moved());
        assert!(board.piece_at(Square::G1).is_none());

        board
            .make_move(Move::new(&board, Square::B8, Square::C6).unwrap())
            .unwrap();
        assert_eq!(board.side_to_move(), Color::White);
    }

    #[test]
    fn test_capture_removes_exactly_the_captured_piece() {
        let mut board = Board::default();
        board
            .make_move(Move::new(&board, Square::E2, Square::E4).unwrap())
            .unwrap();
        board
            .make_move(Move::new(&board, Square::D7, Square::D5).unwrap())
            .unwrap();
        board
            .make_move(Move::new(&board, Square::E4, Square::D5).unwrap())
            .unwrap();

        assert_eq!(board.iter().count(), 31);
        let pawn = board.piece_at(Square::D5).unwrap();
        assert_eq!(pawn.color(), Color::White);
        assert!(pawn.is_pawn() && pawn.has_moved());
        assert!(board.piece_at(Square::E4).is_none());
    }

    #[test]
    fn test_pinned_to_the_checking_file() {
        // White king on e1, black rook bearing down the open e-file
        let board = Board::from_fen("4r2k/8/8/8/8/8/R7/4K3 w - -").unwrap();

        // Anything that neither blocks, captures, nor steps off the file is rejected
        let mv = Move::new(&board, Square::A2, Square::A3).unwrap();
        assert_eq!(board.validate(mv), Err(IllegalMove::SelfCheck));

        let mv = Move::new(&board, Square::E1, Square::E2).unwrap();
        assert_eq!(board.validate(mv), Err(IllegalMove::SelfCheck));

        // Interposing and sidestepping both resolve the check
        assert!(board.is_legal(Move::new(&board, Square::A2, Square::E2).unwrap()));
        assert!(board.is_legal(Move::new(&board, Square::E1, Square::D1).unwrap()));
    }

    #[test]
    fn test_knight_is_unaffected_by_crowding() {
        // A knight ringed by pawns on every adjacent square still jumps out
        let board = Board::from_fen("k7/8/8/3ppp2/3pNp2/3ppp2/8/7K w - -").unwrap();

        let mv = Move::new(&board, Square::E4, Square::C5).unwrap();
        assert!(board.is_legal(mv));

        let mv = Move::new(&board, Square::E4, Square::G3).unwrap();
        assert!(board.is_legal(mv));
    }

    #[test]
    fn test_fools_mate_ends_the_game() {
        let mut board = Board::default();

        for (from, to) in [
            (Square::F2, Square::F3),
            (Square::E7, Square::E5),
            (Square::G2, Square::G4),
            (Square::D8, Square::H4),
        ] {
            board.make_move(Move::new(&board, from, to).unwrap()).unwrap();
        }

        assert_eq!(board.outcome(), Outcome::Win(Color::Black));
        assert_eq!(board.outcome().winner(), Some(Color::Black));

        // Once over, everything is rejected - even otherwise-fine moves
        let mv = Move::new(&board, Square::E2, Square::E3).unwrap();
        assert_eq!(board.validate(mv), Err(IllegalMove::GameOver));
    }

    #[test]
    fn test_stalemate_ends_in_a_draw() {
        // Qf7 leaves the cornered black king without a single legal move
        let mut board = Board::from_fen("7k/8/6K1/5Q2/8/8/8/8 w - -").unwrap();

        board
            .make_move(Move::new(&board, Square::F5, Square::F7).unwrap())
            .unwrap();

        assert_eq!(board.outcome(), Outcome::Draw);
        assert_eq!(board.outcome().winner(), None);
        assert!(board.outcome().is_game_over());
    }

    #[test]
    fn test_legal_move_enumeration() {
        let board = Board::default();

        // The classic 20: 16 pawn moves plus 4 knight moves
        assert_eq!(board.legal_moves().len(), 20);

        let knight_moves = board.legal_moves_from(Square::G1);
        assert_eq!(knight_moves.len(), 2);
        assert!(knight_moves.iter().any(|mv| mv.to() == Square::F3));
        assert!(knight_moves.iter().any(|mv| mv.to() == Square::H3));

        // Empty squares and opposing pieces yield nothing on White's turn
        assert!(board.legal_moves_from(Square::E4).is_empty());
        assert!(board.legal_moves_from(Square::E7).is_empty());
    }

    #[test]
    fn test_selection_slot_is_inert() {
        let mut board = Board::default();
        assert_eq!(board.selected(), None);

        board.select(Some(Square::E2));
        assert_eq!(board.selected(), Some(Square::E2));

        // Selection has no bearing on legality
        let mv = Move::new(&board, Square::G1, Square::F3).unwrap();
        assert!(board.is_legal(mv));

        board.select(None);
        assert_eq!(board.selected(), None);
    }

    #[test]
    fn test_two_phase_validation() {
        let mut board = Board::default();

        let mv = Move::new(&board, Square::D2, Square::D4).unwrap();
        let validated = board.validate(mv).unwrap();
        assert_eq!(validated.to(), Square::D4);

        board.apply(validated);
        assert!(board.piece_at(Square::D4).unwrap().is_pawn());
        assert_eq!(board.side_to_move(), Color::Black);
    }

    #[test]
    fn test_same_side_option_semantics() {
        let pawn = Piece::new(Color::White, crate::PieceKind::Pawn);
        let king = Piece::new(Color::Black, crate::PieceKind::King);

        assert!(same_side(Some(pawn), Some(pawn)));
        assert!(!same_side(Some(pawn), Some(king)));
        assert!(!same_side(Some(pawn), None));
        assert!(!same_side(None, Some(king)));
        assert!(!same_side(None, None));
    }
}
