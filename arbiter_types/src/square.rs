/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{fmt, ops::Mul, str::FromStr};

use anyhow::{anyhow, bail, Result};

use super::Color;

/// A file (column) on a chessboard, from `A` to `H`.
///
/// Internally represented as a `u8` in the range `[0, 7]`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Default)]
pub struct File(pub(crate) u8);

impl File {
    pub const A: Self = Self(0);
    pub const B: Self = Self(1);
    pub const C: Self = Self(2);
    pub const D: Self = Self(3);
    pub const E: Self = Self(4);
    pub const F: Self = Self(5);
    pub const G: Self = Self(6);
    pub const H: Self = Self(7);

    pub const COUNT: usize = 8;

    /// Creates a new [`File`] from the provided index.
    ///
    /// # Example
    /// ```
    /// # use arbiter_types::File;
    /// assert!(File::new(3).is_ok());
    /// assert!(File::new(8).is_err());
    /// ```
    pub fn new(file: u8) -> Result<Self> {
        if file >= Self::COUNT as u8 {
            bail!("Invalid file index {file}. Must be in [0, 7]");
        }
        Ok(Self(file))
    }

    /// Creates a new [`File`] without checking that `file` is a valid index.
    #[inline(always)]
    pub const fn new_unchecked(file: u8) -> Self {
        Self(file)
    }

    /// Creates a new [`File`] from a character like `'e'` (or `'E'`).
    pub fn from_char(c: char) -> Result<Self> {
        let file = c
            .to_ascii_lowercase()
            .to_digit(18)
            .ok_or(anyhow!("Invalid file character {c:?}"))?;

        if file < 10 {
            bail!("Invalid file character {c:?}. Must be in [a, h]");
        }

        Self::new(file as u8 - 10)
    }

    /// Converts this [`File`] to a lowercase character like `'e'`.
    #[inline(always)]
    pub const fn char(&self) -> char {
        (b'a' + self.0) as char
    }

    /// The inner `u8` of this [`File`].
    #[inline(always)]
    pub const fn inner(&self) -> u8 {
        self.0
    }

    /// A `usize` for indexing into lists of 8 elements.
    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    /// An iterator over all files, from `A` to `H`.
    #[inline(always)]
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> {
        (0..Self::COUNT as u8).map(Self)
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

/// A rank (row) on a chessboard, from `1` to `8`.
///
/// Internally represented as a `u8` in the range `[0, 7]`.
/// White's pieces start on ranks `1` and `2`; Black's on ranks `7` and `8`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Default)]
pub struct Rank(pub(crate) u8);

impl Rank {
    pub const ONE: Self = Self(0);
    pub const TWO: Self = Self(1);
    pub const THREE: Self = Self(2);
    pub const FOUR: Self = Self(3);
    pub const FIVE: Self = Self(4);
    pub const SIX: Self = Self(5);
    pub const SEVEN: Self = Self(6);
    pub const EIGHT: Self = Self(7);

    pub const COUNT: usize = 8;

    /// Creates a new [`Rank`] from the provided index.
    pub fn new(rank: u8) -> Result<Self> {
        if rank >= Self::COUNT as u8 {
            bail!("Invalid rank index {rank}. Must be in [0, 7]");
        }
        Ok(Self(rank))
    }

    /// Creates a new [`Rank`] without checking that `rank` is a valid index.
    #[inline(always)]
    pub const fn new_unchecked(rank: u8) -> Self {
        Self(rank)
    }

    /// Creates a new [`Rank`] from a character like `'4'`.
    pub fn from_char(c: char) -> Result<Self> {
        let rank = c.to_digit(10).ok_or(anyhow!("Invalid rank character {c:?}"))?;

        if !(1..=8).contains(&rank) {
            bail!("Invalid rank character {c:?}. Must be in [1, 8]");
        }

        Self::new(rank as u8 - 1)
    }

    /// Converts this [`Rank`] to a character like `'4'`.
    #[inline(always)]
    pub const fn char(&self) -> char {
        (b'1' + self.0) as char
    }

    /// The inner `u8` of this [`Rank`].
    #[inline(always)]
    pub const fn inner(&self) -> u8 {
        self.0
    }

    /// A `usize` for indexing into lists of 8 elements.
    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    /// The rank on which `color`'s non-pawn pieces start.
    ///
    /// # Example
    /// ```
    /// # use arbiter_types::{Color, Rank};
    /// assert_eq!(Rank::first(Color::White), Rank::ONE);
    /// assert_eq!(Rank::first(Color::Black), Rank::EIGHT);
    /// ```
    #[inline(always)]
    pub const fn first(color: Color) -> Self {
        match color {
            Color::White => Self::ONE,
            Color::Black => Self::EIGHT,
        }
    }

    /// The rank on which `color`'s pawns start.
    ///
    /// # Example
    /// ```
    /// # use arbiter_types::{Color, Rank};
    /// assert_eq!(Rank::second(Color::White), Rank::TWO);
    /// assert_eq!(Rank::second(Color::Black), Rank::SEVEN);
    /// ```
    #[inline(always)]
    pub const fn second(color: Color) -> Self {
        match color {
            Color::White => Self::TWO,
            Color::Black => Self::SEVEN,
        }
    }

    /// The absolute difference between `self` and `other`.
    #[inline(always)]
    pub const fn abs_diff(&self, other: Self) -> u8 {
        self.0.abs_diff(other.0)
    }

    /// An iterator over all ranks, from `1` to `8`.
    #[inline(always)]
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> {
        (0..Self::COUNT as u8).map(Self)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

/// A single square on a chessboard.
///
/// Internally represented as a `u8` index in the range `[0, 63]`, where `A1`
/// is `0` and `H8` is `63`. A [`Square`] is always on the board; coordinate
/// arithmetic that would leave the board yields `None` instead (see
/// [`Square::offset`]), so out-of-range lookups resolve to "no piece" rather
/// than faulting.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Default)]
pub struct Square(pub(crate) u8);

#[rustfmt::skip]
impl Square {
    pub const A1: Self = Self(0);
    pub const B1: Self = Self(1);
    pub const C1: Self = Self(2);
    pub const D1: Self = Self(3);
    pub const E1: Self = Self(4);
    pub const F1: Self = Self(5);
    pub const G1: Self = Self(6);
    pub const H1: Self = Self(7);
    pub const A2: Self = Self(8);
    pub const B2: Self = Self(9);
    pub const C2: Self = Self(10);
    pub const D2: Self = Self(11);
    pub const E2: Self = Self(12);
    pub const F2: Self = Self(13);
    pub const G2: Self = Self(14);
    pub const H2: Self = Self(15);
    pub const A3: Self = Self(16);
    pub const B3: Self = Self(17);
    pub const C3: Self = Self(18);
    pub const D3: Self = Self(19);
    pub const E3: Self = Self(20);
    pub const F3: Self = Self(21);
    pub const G3: Self = Self(22);
    pub const H3: Self = Self(23);
    pub const A4: Self = Self(24);
    pub const B4: Self = Self(25);
    pub const C4: Self = Self(26);
    pub const D4: Self = Self(27);
    pub const E4: Self = Self(28);
    pub const F4: Self = Self(29);
    pub const G4: Self = Self(30);
    pub const H4: Self = Self(31);
    pub const A5: Self = Self(32);
    pub const B5: Self = Self(33);
    pub const C5: Self = Self(34);
    pub const D5: Self = Self(35);
    pub const E5: Self = Self(36);
    pub const F5: Self = Self(37);
    pub const G5: Self = Self(38);
    pub const H5: Self = Self(39);
    pub const A6: Self = Self(40);
    pub const B6: Self = Self(41);
    pub const C6: Self = Self(42);
    pub const D6: Self = Self(43);
    pub const E6: Self = Self(44);
    pub const F6: Self = Self(45);
    pub const G6: Self = Self(46);
    pub const H6: Self = Self(47);
    pub const A7: Self = Self(48);
    pub const B7: Self = Self(49);
    pub const C7: Self = Self(50);
    pub const D7: Self = Self(51);
    pub const E7: Self = Self(52);
    pub const F7: Self = Self(53);
    pub const G7: Self = Self(54);
    pub const H7: Self = Self(55);
    pub const A8: Self = Self(56);
    pub const B8: Self = Self(57);
    pub const C8: Self = Self(58);
    pub const D8: Self = Self(59);
    pub const E8: Self = Self(60);
    pub const F8: Self = Self(61);
    pub const G8: Self = Self(62);
    pub const H8: Self = Self(63);
}

impl Square {
    pub const COUNT: usize = 64;

    /// Creates a new [`Square`] from the provided [`File`] and [`Rank`].
    ///
    /// # Example
    /// ```
    /// # use arbiter_types::{File, Rank, Square};
    /// assert_eq!(Square::new(File::E, Rank::FOUR), Square::E4);
    /// ```
    #[inline(always)]
    pub const fn new(file: File, rank: Rank) -> Self {
        Self(rank.0 * 8 + file.0)
    }

    /// Creates a new [`Square`] from the provided index, if it is in `[0, 63]`.
    #[inline(always)]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Creates a new [`Square`] from signed file/rank coordinates, yielding
    /// `None` if either coordinate is off the board.
    ///
    /// # Example
    /// ```
    /// # use arbiter_types::Square;
    /// assert_eq!(Square::from_coords(4, 3), Some(Square::E4));
    /// assert_eq!(Square::from_coords(-1, 3), None);
    /// assert_eq!(Square::from_coords(4, 8), None);
    /// ```
    #[inline(always)]
    pub const fn from_coords(file: i8, rank: i8) -> Option<Self> {
        if file >= 0 && file < 8 && rank >= 0 && rank < 8 {
            Some(Self(rank as u8 * 8 + file as u8))
        } else {
            None
        }
    }

    /// The [`File`] of this [`Square`].
    #[inline(always)]
    pub const fn file(&self) -> File {
        File(self.0 % 8)
    }

    /// The [`Rank`] of this [`Square`].
    #[inline(always)]
    pub const fn rank(&self) -> Rank {
        Rank(self.0 / 8)
    }

    /// A `usize` for indexing into lists of 64 elements.
    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    /// The square `file_delta` files and `rank_delta` ranks away from `self`,
    /// or `None` if that would leave the board.
    ///
    /// # Example
    /// ```
    /// # use arbiter_types::Square;
    /// assert_eq!(Square::E4.offset(1, 2), Some(Square::F6));
    /// assert_eq!(Square::A1.offset(-1, 0), None);
    /// ```
    #[inline(always)]
    pub const fn offset(&self, file_delta: i8, rank_delta: i8) -> Option<Self> {
        Self::from_coords(
            self.file().0 as i8 + file_delta,
            self.rank().0 as i8 + rank_delta,
        )
    }

    /// The square `n` ranks forward of `self`, from `color`'s perspective.
    ///
    /// "Forward" is towards rank 8 for White and towards rank 1 for Black.
    ///
    /// # Example
    /// ```
    /// # use arbiter_types::{Color, Square};
    /// assert_eq!(Square::E2.forward_by(Color::White, 2), Some(Square::E4));
    /// assert_eq!(Square::E2.forward_by(Color::Black, 2), None);
    /// ```
    #[inline(always)]
    pub const fn forward_by(&self, color: Color, n: u8) -> Option<Self> {
        self.offset(0, color.forward() * n as i8)
    }

    /// The number of files between `self` and `other`.
    #[inline(always)]
    pub const fn distance_files(&self, other: Self) -> u8 {
        self.file().0.abs_diff(other.file().0)
    }

    /// The number of ranks between `self` and `other`.
    #[inline(always)]
    pub const fn distance_ranks(&self, other: Self) -> u8 {
        self.rank().0.abs_diff(other.rank().0)
    }

    /// Creates a new [`Square`] from a string like `"e4"`.
    ///
    /// # Example
    /// ```
    /// # use arbiter_types::Square;
    /// assert_eq!(Square::from_uci("e4").unwrap(), Square::E4);
    /// assert!(Square::from_uci("j9").is_err());
    /// ```
    pub fn from_uci(square: &str) -> Result<Self> {
        let mut chars = square.trim().chars();

        let file = File::from_char(chars.next().ok_or(anyhow!("Square cannot be empty"))?)?;
        let rank = Rank::from_char(chars.next().ok_or(anyhow!("Square must have a rank"))?)?;

        if chars.next().is_some() {
            bail!("Invalid square {square:?}. Must be a file followed by a rank, like \"e4\"");
        }

        Ok(Self::new(file, rank))
    }

    /// Converts this [`Square`] to a string like `"e4"`.
    #[inline(always)]
    pub fn to_uci(self) -> String {
        format!("{}{}", self.file(), self.rank())
    }

    /// An iterator over all 64 squares, from `A1` to `H8`.
    #[inline(always)]
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> {
        (0..Self::COUNT as u8).map(Self)
    }
}

impl Mul<Rank> for File {
    type Output = Square;
    /// `file * rank` is shorthand for [`Square::new`].
    #[inline(always)]
    fn mul(self, rank: Rank) -> Self::Output {
        Square::new(self, rank)
    }
}

impl FromStr for Square {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_uci(s)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_parts_roundtrip() {
        for square in Square::iter() {
            assert_eq!(Square::new(square.file(), square.rank()), square);
            assert_eq!(Square::from_index(square.index()), Some(square));
        }
    }

    #[test]
    fn test_offset_stays_on_board() {
        assert_eq!(Square::E4.offset(0, 0), Some(Square::E4));
        assert_eq!(Square::H8.offset(1, 0), None);
        assert_eq!(Square::H8.offset(0, 1), None);
        assert_eq!(Square::A1.offset(-1, -1), None);

        // A king's walk around the rim never wraps to the other edge
        assert_eq!(Square::A4.offset(-1, 0), None);
        assert_eq!(Square::H4.offset(1, 0), None);
    }

    #[test]
    fn test_forward_is_color_relative() {
        assert_eq!(Square::E2.forward_by(Color::White, 1), Some(Square::E3));
        assert_eq!(Square::E7.forward_by(Color::Black, 1), Some(Square::E6));
        assert_eq!(Square::E8.forward_by(Color::White, 1), None);
        assert_eq!(Square::E1.forward_by(Color::Black, 1), None);
    }

    #[test]
    fn test_uci_roundtrip() {
        for square in Square::iter() {
            assert_eq!(Square::from_uci(&square.to_uci()).unwrap(), square);
        }
        assert!(Square::from_uci("e9").is_err());
        assert!(Square::from_uci("i4").is_err());
        assert!(Square::from_uci("e44").is_err());
    }
}
