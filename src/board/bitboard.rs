//! Bitboard implementation for the 8x8 grid

use super::Pos;

/// One bit per cell, row-major: bit `row * 8 + col`.
/// The whole 8x8 board fits in a single u64.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Bitboard {
    bits: u64,
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Single-bit mask for `pos`, zero when `pos` is off the board
    #[inline]
    fn mask(pos: Pos) -> u64 {
        if pos.on_board() {
            1u64 << pos.to_index()
        } else {
            0
        }
    }

    /// Set a bit at position. Off-board positions are ignored.
    #[inline]
    pub fn set(&mut self, pos: Pos) {
        self.bits |= Self::mask(pos);
    }

    /// Clear a bit at position. Off-board positions are ignored.
    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        self.bits &= !Self::mask(pos);
    }

    /// Check if bit is set at position
    #[inline]
    pub fn get(&self, pos: Pos) -> bool {
        self.bits & Self::mask(pos) != 0
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.count_ones()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.bits == u64::MAX
    }

    #[inline]
    pub fn union(self, other: Bitboard) -> Bitboard {
        Bitboard {
            bits: self.bits | other.bits,
        }
    }

    #[inline]
    pub fn complement(self) -> Bitboard {
        Bitboard { bits: !self.bits }
    }

    /// Iterate over set bit positions in row-major order
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter { bits: self.bits }
    }
}

/// Iterator over set bits in a Bitboard, lowest index first
pub struct BitboardIter {
    bits: u64,
}

impl Iterator for BitboardIter {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let idx = self.bits.trailing_zeros() as usize;
        // Clear the bit we just found
        self.bits &= self.bits - 1;
        Some(Pos::from_index(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitboardIter {}
