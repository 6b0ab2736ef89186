//! Fixed-size bitset over the four-color palette
//!
//! Used both as a candidate domain in the exact solver and as an exclusion
//! mask in the heuristic solver. Provides O(1) membership testing without
//! allocation.

use crate::io::configuration::COLOR_COUNT;
use bitvec::prelude::{BitArr, BitArray, Lsb0};
use std::fmt;

type ColorBits = BitArr!(for COLOR_COUNT, in u8, Lsb0);

/// Subset of the color palette `{0, 1, 2, 3}`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorSet {
    bits: ColorBits,
}

impl ColorSet {
    /// Create a set with no colors present
    pub const fn empty() -> Self {
        Self {
            bits: BitArray::ZERO,
        }
    }

    /// Create a set containing every palette color
    pub fn full() -> Self {
        let mut set = Self::empty();
        for color in 0..COLOR_COUNT {
            set.insert(color as u8);
        }
        set
    }

    /// Insert a color index
    pub fn insert(&mut self, color: u8) {
        if (color as usize) < COLOR_COUNT {
            self.bits.set(color as usize, true);
        }
    }

    /// Remove a color index
    pub fn remove(&mut self, color: u8) {
        if (color as usize) < COLOR_COUNT {
            self.bits.set(color as usize, false);
        }
    }

    /// Test color membership
    pub fn contains(&self, color: u8) -> bool {
        (color as usize) < COLOR_COUNT && self.bits.get(color as usize).as_deref() == Some(&true)
    }

    /// Test if no colors are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count colors in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Remove and return the smallest color present
    pub fn pop_first(&mut self) -> Option<u8> {
        let index = self.bits.first_one()?;
        self.bits.set(index, false);
        Some(index as u8)
    }

    /// Iterate colors in ascending numeric order
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.bits.iter_ones().map(|index| index as u8)
    }
}

impl Default for ColorSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for ColorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ColorSet({} colors: {:?})",
            self.count(),
            self.iter().collect::<Vec<_>>()
        )
    }
}
