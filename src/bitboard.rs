//! Square cell sets packed into a single unsigned integer.
//!
//! `BitBoard<T, N>` stores an `N×N` grid in `T`, one bit per cell, numbered
//! row-major from the top-left corner. Every cell set in the engine (ship
//! masks, damage, shot history, targeting pools) is one of these, so
//! iteration and random draws always see cells in the same order. The type
//! is `no_std` and never allocates.

use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned};
use rand::Rng;

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitBoardError {
    /// `N*N` cells do not fit in the bits of `T`.
    SizeTooLarge { n: usize, capacity: usize },
    /// Row or column outside `0..N`.
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::SizeTooLarge { n, capacity } => {
                write!(f, "{}x{} grid needs {} bits, only {} available", n, n, n * n, capacity)
            }
            BitBoardError::IndexOutOfBounds { row, col } => {
                write!(f, "cell ({}, {}) is outside the grid", row, col)
            }
        }
    }
}

/// A set of cells on an `N×N` grid.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned,
{
    const CELLS: usize = N * N;
    const CAPACITY: usize = mem::size_of::<T>() * 8;

    #[inline]
    fn grid_mask() -> T {
        if Self::CELLS >= Self::CAPACITY {
            !T::zero()
        } else {
            (T::one() << Self::CELLS) - T::one()
        }
    }

    #[inline]
    fn bit(row: usize, col: usize) -> Result<T, BitBoardError> {
        if row >= N || col >= N {
            return Err(BitBoardError::IndexOutOfBounds { row, col });
        }
        Ok(T::one() << (row * N + col))
    }

    #[inline]
    fn from_bits(bits: T) -> Self {
        BitBoard {
            bits: bits & Self::grid_mask(),
        }
    }

    /// The empty set. Does not check that the grid fits in `T`.
    #[inline]
    pub fn new() -> Self {
        BitBoard { bits: T::zero() }
    }

    /// Every cell of the grid.
    #[inline]
    pub fn full() -> Self {
        Self::from_bits(!T::zero())
    }

    /// The empty set, or `SizeTooLarge` when `N*N` exceeds the width of `T`.
    pub fn try_new() -> Result<Self, BitBoardError> {
        if Self::CELLS > Self::CAPACITY {
            Err(BitBoardError::SizeTooLarge {
                n: N,
                capacity: Self::CAPACITY,
            })
        } else {
            Ok(Self::new())
        }
    }

    /// Build a set from `(row, col)` pairs. Fails on the first pair outside the grid.
    pub fn from_iter<I>(cells: I) -> Result<Self, BitBoardError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        cells.into_iter().try_fold(Self::new(), |mut board, (r, c)| {
            board.set(r, c)?;
            Ok(board)
        })
    }

    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Membership test that rejects positions outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Result<bool, BitBoardError> {
        Ok(!(self.bits & Self::bit(row, col)?).is_zero())
    }

    /// Membership test; positions outside the grid are never members.
    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.get(row, col).unwrap_or(false)
    }

    pub fn set(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        self.bits = self.bits | Self::bit(row, col)?;
        Ok(())
    }

    pub fn clear(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        self.bits = self.bits & !Self::bit(row, col)?;
        Ok(())
    }

    /// `true` when every member of `self` is also in `other`.
    #[inline]
    pub fn is_subset(&self, other: &Self) -> bool {
        (self.bits & !other.bits).is_zero()
    }

    /// Members in row-major order.
    #[inline]
    pub fn iter_set_bits(&self) -> SetBits<T, N> {
        SetBits { rest: self.bits }
    }

    /// The `n`-th member in row-major order.
    pub fn nth_set_bit(&self, n: usize) -> Option<(usize, usize)> {
        self.iter_set_bits().nth(n)
    }

    /// A member drawn uniformly at random, `None` for the empty set.
    pub fn random_set_bit<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<(usize, usize)> {
        match self.count_ones() {
            0 => None,
            count => self.nth_set_bit(rng.random_range(0..count)),
        }
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard({} cells)", self.count_ones())?;
        for r in 0..N {
            for c in 0..N {
                f.write_str(if self.contains(r, c) { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the members of a [`BitBoard`], lowest cell first.
#[derive(Clone, Copy, Debug)]
pub struct SetBits<T, const N: usize> {
    rest: T,
}

impl<T, const N: usize> Iterator for SetBits<T, N>
where
    T: PrimInt + Unsigned,
{
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_zero() {
            return None;
        }
        let idx = self.rest.trailing_zeros() as usize;
        // drop the lowest set bit
        self.rest = self.rest & (self.rest - T::one());
        Some((idx / N, idx % N))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.rest.count_ones() as usize;
        (left, Some(left))
    }
}

macro_rules! set_op {
    ($op:ident, $method:ident, $assign:ident, $assign_method:ident, $sym:tt) => {
        impl<T, const N: usize> $op for BitBoard<T, N>
        where
            T: PrimInt + Unsigned,
        {
            type Output = Self;
            #[inline]
            fn $method(self, rhs: Self) -> Self {
                Self::from_bits(self.bits $sym rhs.bits)
            }
        }

        impl<T, const N: usize> $assign for BitBoard<T, N>
        where
            T: PrimInt + Unsigned,
        {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                *self = *self $sym rhs;
            }
        }
    };
}

set_op!(BitAnd, bitand, BitAndAssign, bitand_assign, &);
set_op!(BitOr, bitor, BitOrAssign, bitor_assign, |);

/// Complement within the grid.
impl<T, const N: usize> Not for BitBoard<T, N>
where
    T: PrimInt + Unsigned,
{
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Self::from_bits(!self.bits)
    }
}
