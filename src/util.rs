//! This module contains utility functionality needed for this crate. Most
//! prominently, it contains the definition of the [ValueSet] used for storing
//! the candidate values of cells.

use std::fmt::{self, Debug, Formatter};
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Sub, SubAssign};

/// The largest value a [ValueSet] can hold. Since all candidate values of a
/// grid with size `s` lie in `[1, s]`, this also bounds the size of grids this
/// crate can operate on.
pub const MAX_VALUE: usize = 63;

/// A set of candidate values implemented as a bit mask over a single machine
/// word, where the bit at position `v` represents the value `v`. Values must
/// lie in the range `[1, MAX_VALUE]`. This is sufficient for every grid whose
/// size does not exceed [MAX_VALUE] and much faster than a general-purpose
/// set.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct ValueSet {
    bits: u64
}

/// An iterator over the values contained in a [ValueSet], in ascending order.
pub struct ValueSetIter {
    bits: u64
}

impl Iterator for ValueSetIter {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.bits == 0 {
            None
        }
        else {
            let value = self.bits.trailing_zeros() as usize;
            self.bits &= self.bits - 1;
            Some(value)
        }
    }
}

impl ValueSet {

    /// Creates a new, empty `ValueSet`.
    pub fn empty() -> ValueSet {
        ValueSet { bits: 0 }
    }

    /// Creates a new `ValueSet` containing all values in `[1, size]`. `size`
    /// must not exceed [MAX_VALUE].
    pub fn full(size: usize) -> ValueSet {
        debug_assert!(size <= MAX_VALUE);

        ValueSet {
            bits: ((1u64 << size) - 1) << 1
        }
    }

    /// Creates a new `ValueSet` containing only the given value, which must be
    /// in the range `[1, MAX_VALUE]`.
    pub fn singleton(value: usize) -> ValueSet {
        debug_assert!(value >= 1 && value <= MAX_VALUE);

        ValueSet {
            bits: 1u64 << value
        }
    }

    /// Indicates whether this set contains the given value. Values outside the
    /// range `[1, MAX_VALUE]` are never contained.
    pub fn contains(&self, value: usize) -> bool {
        value <= MAX_VALUE && (self.bits >> value) & 1 == 1
    }

    /// Inserts the given value into this set, which must be in the range
    /// `[1, MAX_VALUE]`. Returns `true` if the set changed, i.e. the value was
    /// not present before.
    pub fn insert(&mut self, value: usize) -> bool {
        debug_assert!(value >= 1 && value <= MAX_VALUE);

        let mask = 1u64 << value;
        let changed = self.bits & mask == 0;
        self.bits |= mask;
        changed
    }

    /// Removes the given value from this set, which must be in the range
    /// `[1, MAX_VALUE]`. Returns `true` if the set changed, i.e. the value was
    /// present before.
    pub fn remove(&mut self, value: usize) -> bool {
        debug_assert!(value >= 1 && value <= MAX_VALUE);

        let mask = 1u64 << value;
        let changed = self.bits & mask != 0;
        self.bits &= !mask;
        changed
    }

    /// Returns the number of values contained in this set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Indicates whether this set is empty, i.e. contains no values.
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// If this set contains exactly one value, that value is returned,
    /// otherwise `None`.
    pub fn as_single(&self) -> Option<usize> {
        if self.len() == 1 {
            Some(self.bits.trailing_zeros() as usize)
        }
        else {
            None
        }
    }

    /// Indicates whether every value of this set is also contained in `other`.
    /// The empty set is a subset of every set.
    pub fn is_subset(&self, other: &ValueSet) -> bool {
        self.bits & !other.bits == 0
    }

    /// Returns an iterator over the values contained in this set in ascending
    /// order.
    pub fn iter(&self) -> ValueSetIter {
        ValueSetIter { bits: self.bits }
    }
}

impl Debug for ValueSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl IntoIterator for ValueSet {
    type Item = usize;
    type IntoIter = ValueSetIter;

    fn into_iter(self) -> ValueSetIter {
        self.iter()
    }
}

impl IntoIterator for &ValueSet {
    type Item = usize;
    type IntoIter = ValueSetIter;

    fn into_iter(self) -> ValueSetIter {
        self.iter()
    }
}

impl BitOr for ValueSet {
    type Output = ValueSet;

    /// Computes the set union of the two operands.
    fn bitor(self, rhs: ValueSet) -> ValueSet {
        ValueSet { bits: self.bits | rhs.bits }
    }
}

impl BitOrAssign for ValueSet {
    fn bitor_assign(&mut self, rhs: ValueSet) {
        self.bits |= rhs.bits;
    }
}

impl BitAnd for ValueSet {
    type Output = ValueSet;

    /// Computes the set intersection of the two operands.
    fn bitand(self, rhs: ValueSet) -> ValueSet {
        ValueSet { bits: self.bits & rhs.bits }
    }
}

impl BitAndAssign for ValueSet {
    fn bitand_assign(&mut self, rhs: ValueSet) {
        self.bits &= rhs.bits;
    }
}

impl Sub for ValueSet {
    type Output = ValueSet;

    /// Computes the set difference of the two operands, i.e. the values of the
    /// left-hand-side which are not contained in the right-hand-side.
    fn sub(self, rhs: ValueSet) -> ValueSet {
        ValueSet { bits: self.bits & !rhs.bits }
    }
}

impl SubAssign for ValueSet {
    fn sub_assign(&mut self, rhs: ValueSet) {
        self.bits &= !rhs.bits;
    }
}

/// Creates a new [ValueSet](crate::util::ValueSet) that contains the listed
/// values.
///
/// An example usage of this macro looks as follows:
///
/// ```
/// use sudoku_deduction::set;
/// use sudoku_deduction::util::ValueSet;
///
/// let set = set!(2, 4);
/// assert!(set.contains(2));
/// assert!(!set.contains(3));
/// assert_eq!(2, set.len());
/// ```
#[macro_export]
macro_rules! set {
    ($($vs:expr),*) => {
        {
            #[allow(unused_mut)]
            let mut set = ValueSet::empty();
            $(set.insert($vs);)*
            set
        }
    };
}
