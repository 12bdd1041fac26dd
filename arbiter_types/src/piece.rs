/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{fmt, str::FromStr};

use anyhow::{bail, Result};

/// The color of a player (and of that player's pieces).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default)]
pub enum Color {
    #[default]
    White,
    Black,
}

impl Color {
    pub const COUNT: usize = 2;

    /// Returns `true` if this [`Color`] is White.
    #[inline(always)]
    pub const fn is_white(&self) -> bool {
        matches!(self, Self::White)
    }

    /// The opposing [`Color`].
    ///
    /// # Example
    /// ```
    /// # use arbiter_types::Color;
    /// assert_eq!(Color::White.opponent(), Color::Black);
    /// assert_eq!(Color::Black.opponent(), Color::White);
    /// ```
    #[inline(always)]
    pub const fn opponent(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// The rank direction in which this [`Color`]'s pawns advance:
    /// `+1` for White, `-1` for Black.
    #[inline(always)]
    pub const fn forward(&self) -> i8 {
        match self {
            Self::White => 1,
            Self::Black => -1,
        }
    }

    /// A `usize` for indexing into lists of 2 elements.
    #[inline(always)]
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// Creates a new [`Color`] from a string like `"w"` or `"b"`.
    pub fn from_uci(color: &str) -> Result<Self> {
        match color {
            "w" | "W" => Ok(Self::White),
            "b" | "B" => Ok(Self::Black),
            _ => bail!("Invalid color string {color:?}. Must be \"w\" or \"b\""),
        }
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_uci(s)
    }
}

impl fmt::Display for Color {
    /// Displays as `w` or `b`, as in a FEN string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", if self.is_white() { 'w' } else { 'b' })
    }
}

/// The kind of a chess piece.
///
/// A closed enum so that every movement rule and threat probe is forced to
/// handle all six kinds exhaustively.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const COUNT: usize = 6;

    /// Creates a new [`PieceKind`] from a character like `'N'` (case-insensitive).
    pub fn from_char(kind: char) -> Result<Self> {
        match kind.to_ascii_uppercase() {
            'P' => Ok(Self::Pawn),
            'N' => Ok(Self::Knight),
            'B' => Ok(Self::Bishop),
            'R' => Ok(Self::Rook),
            'Q' => Ok(Self::Queen),
            'K' => Ok(Self::King),
            _ => bail!("Invalid piece character {kind:?}"),
        }
    }

    /// Converts this [`PieceKind`] to an uppercase character like `'N'`.
    #[inline(always)]
    pub const fn char(&self) -> char {
        match self {
            Self::Pawn => 'P',
            Self::Knight => 'N',
            Self::Bishop => 'B',
            Self::Rook => 'R',
            Self::Queen => 'Q',
            Self::King => 'K',
        }
    }

    /// The human-readable name of this [`PieceKind`].
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Pawn => "Pawn",
            Self::Knight => "Knight",
            Self::Bishop => "Bishop",
            Self::Rook => "Rook",
            Self::Queen => "Queen",
            Self::King => "King",
        }
    }

    /// A `usize` for indexing into lists of 6 elements.
    #[inline(always)]
    pub const fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A chess piece: a [`PieceKind`], the [`Color`] that owns it, and whether it
/// has moved at least once this game.
///
/// The moved flag is consumed only by the pawn's two-square first advance,
/// but is carried on every piece so that state is available generically.
/// Pieces are plain values; they live in the board's square-indexed
/// collection and have no identity beyond the square they occupy.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Piece {
    color: Color,
    kind: PieceKind,
    has_moved: bool,
}

impl Piece {
    /// Creates a new, not-yet-moved [`Piece`].
    ///
    /// # Example
    /// ```
    /// # use arbiter_types::{Color, Piece, PieceKind};
    /// let knight = Piece::new(Color::White, PieceKind::Knight);
    /// assert_eq!(knight.char(), 'N');
    /// assert!(!knight.has_moved());
    /// ```
    #[inline(always)]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self {
            color,
            kind,
            has_moved: false,
        }
    }

    /// Creates a new [`Piece`] from a FEN character: uppercase for White,
    /// lowercase for Black.
    ///
    /// # Example
    /// ```
    /// # use arbiter_types::{Color, Piece, PieceKind};
    /// let piece = Piece::from_uci('q').unwrap();
    /// assert_eq!(piece.color(), Color::Black);
    /// assert_eq!(piece.kind(), PieceKind::Queen);
    /// ```
    pub fn from_uci(piece: char) -> Result<Self> {
        let kind = PieceKind::from_char(piece)?;
        let color = if piece.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };

        Ok(Self::new(color, kind))
    }

    /// The [`Color`] that owns this [`Piece`].
    #[inline(always)]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// The [`PieceKind`] of this [`Piece`].
    #[inline(always)]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Returns `true` if this [`Piece`] has moved at least once this game.
    #[inline(always)]
    pub const fn has_moved(&self) -> bool {
        self.has_moved
    }

    /// Marks this [`Piece`] as having moved. Never unset for the rest of the game.
    #[inline(always)]
    pub fn mark_moved(&mut self) {
        self.has_moved = true;
    }

    /// Returns `true` if this [`Piece`] is a pawn.
    #[inline(always)]
    pub const fn is_pawn(&self) -> bool {
        matches!(self.kind, PieceKind::Pawn)
    }

    /// Returns `true` if this [`Piece`] is a king.
    #[inline(always)]
    pub const fn is_king(&self) -> bool {
        matches!(self.kind, PieceKind::King)
    }

    /// Converts this [`Piece`] to its FEN character: uppercase for White,
    /// lowercase for Black.
    ///
    /// # Example
    /// ```
    /// # use arbiter_types::{Color, Piece, PieceKind};
    /// assert_eq!(Piece::new(Color::White, PieceKind::Rook).char(), 'R');
    /// assert_eq!(Piece::new(Color::Black, PieceKind::Rook).char(), 'r');
    /// ```
    #[inline(always)]
    pub const fn char(&self) -> char {
        if self.color.is_white() {
            self.kind.char()
        } else {
            self.kind.char().to_ascii_lowercase()
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}
