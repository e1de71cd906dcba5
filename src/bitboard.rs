//! A fixed-size cell set using const generics.
//!
//! The type is `no_std` friendly and avoids heap allocations. An `N×N` board
//! is packed into an unsigned integer `T`, one bit per cell, row-major.

use core::ops::{BitAnd, BitOr};
use core::{any, fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};
use thiserror::Error;

use crate::coord::Coord;

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BitBoardError {
    /// Requested board size N*N exceeds the capacity of `T`.
    #[error("SizeTooLarge: N*N={} exceeds T::BITS={capacity}", .n * .n)]
    SizeTooLarge { n: usize, capacity: usize },
    /// Coordinate lies outside `[0, N)` on some axis.
    #[error("OutOfBounds: row={}, col={}", .coord.row, .coord.col)]
    OutOfBounds { coord: Coord },
}

/// A set of cells on an N×N board stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    const BOARD_BITS: usize = N * N;

    #[inline]
    fn mask() -> T {
        if Self::BOARD_BITS == mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::BOARD_BITS) - T::one()
        }
    }

    /// Create an empty set without checking that `N*N` fits into `T`.
    #[inline]
    pub fn new() -> Self {
        BitBoard { bits: T::zero() }
    }

    /// Fallible constructor: `Err(SizeTooLarge)` if N*N > T::BITS.
    pub fn try_new() -> Result<Self, BitBoardError> {
        let capacity = mem::size_of::<T>() * 8;
        if Self::BOARD_BITS > capacity {
            Err(BitBoardError::SizeTooLarge { n: N, capacity })
        } else {
            Ok(Self::new())
        }
    }

    /// Build a set from coordinates; fails on the first one off the board.
    pub fn from_cells<I>(cells: I) -> Result<Self, BitBoardError>
    where
        I: IntoIterator<Item = Coord>,
    {
        let mut set = Self::new();
        for cell in cells {
            set.insert(cell)?;
        }
        Ok(set)
    }

    /// Number of cells in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    pub fn contains(&self, coord: Coord) -> Result<bool, BitBoardError> {
        let idx = Self::index(coord)?;
        Ok(((self.bits >> idx) & T::one()) != T::zero())
    }

    /// Add `coord`. Returns `true` if it was not in the set before.
    pub fn insert(&mut self, coord: Coord) -> Result<bool, BitBoardError> {
        let idx = Self::index(coord)?;
        let bit = T::one() << idx;
        let fresh = (self.bits & bit).is_zero();
        self.bits = self.bits | bit;
        Ok(fresh)
    }

    #[inline]
    fn index(coord: Coord) -> Result<usize, BitBoardError> {
        let n = N as i32;
        if coord.row < 0 || coord.col < 0 || coord.row >= n || coord.col >= n {
            Err(BitBoardError::OutOfBounds { coord })
        } else {
            Ok(coord.row as usize * N + coord.col as usize)
        }
    }

    /// Iterator over the cells in the set, row-major.
    #[inline]
    pub fn iter(&self) -> Cells<'_, T, N> {
        Cells { board: self, idx: 0 }
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}, {}>:", any::type_name::<T>(), N)?;
        for r in 0..N {
            for c in 0..N {
                let bit = if ((self.bits >> (r * N + c)) & T::one()) != T::zero() {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the cells of a bitboard.
#[derive(Clone, Copy)]
pub struct Cells<'a, T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    board: &'a BitBoard<T, N>,
    idx: usize,
}

impl<'a, T, const N: usize> Iterator for Cells<'a, T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = Coord;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if ((self.board.bits >> idx) & T::one()) != T::zero() {
                return Some(Coord::new((idx / N) as i32, (idx % N) as i32));
            }
        }
        None
    }
}

/// Cells present in both sets.
impl<T, const N: usize> BitAnd for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits & rhs.bits & Self::mask(),
        }
    }
}

/// Cells present in either set.
impl<T, const N: usize> BitOr for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        BitBoard {
            bits: (self.bits | rhs.bits) & Self::mask(),
        }
    }
}
