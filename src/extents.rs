//! Row-major arithmetic on the extents of an `R`-dimensional shape.
//!
//! Every method that does arithmetic is a `const fn`, so shapes and
//! coordinates that are known at compile time cost nothing at run time.

use std::convert::{TryFrom};

use super::{AssertRank, Coordinates, Result, Shape, ShapeError};

/// The product of `extents[from..]`.
pub(crate) const fn product(extents: &[usize], from: usize) -> usize {
    let mut total = 1;
    let mut axis = from;
    while axis < extents.len() {
        total *= extents[axis];
        axis += 1;
    }
    total
}

/// The row-major offset of `index`, accumulating from the outermost axis.
pub(crate) const fn offset_of(index: &[usize], extents: &[usize]) -> usize {
    let mut offset = 0;
    let mut axis = 0;
    while axis < extents.len() {
        offset = offset * extents[axis] + index[axis];
        axis += 1;
    }
    offset
}

/// Component `axis` of the index at row-major `offset`.
pub(crate) const fn component(offset: usize, extents: &[usize], axis: usize) -> usize {
    (offset / product(extents, axis + 1)) % extents[axis]
}

// ----------------------------------------------------------------------------

/// The extents of an `R`-dimensional shape, outermost axis first.
///
/// `Extents` define the row-major ("C") ordering of indices: the innermost
/// axis varies fastest. All extents are positive.
///
/// ```
/// use fixed_shape::{Extents};
/// const E: Extents<3> = Extents::of::<[[[i32; 5]; 3]; 2]>();
/// const OFFSET: usize = E.offset_of(&[1, 2, 4]);
/// assert_eq!(OFFSET, 29);
/// assert_eq!(E.index_of(OFFSET), [1, 2, 4]);
/// assert_eq!(E.next_index([0, 2, 4], 1), [1, 0, 0]);
/// ```
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub struct Extents<const R: usize>([usize; R]);

impl<const R: usize> Extents<R> {
    /// Panics (which in a `const` context is a compile error) if any extent is
    /// zero.
    pub const fn new(extents: [usize; R]) -> Self {
        let mut axis = 0;
        while axis < R {
            assert!(extents[axis] > 0, "zero-length axes are not supported");
            axis += 1;
        }
        Self(extents)
    }

    /// Returns the extents of the nested array type `A`.
    ///
    /// Fails to compile unless `R` is `A::RANK`.
    ///
    /// ```compile_fail
    /// use fixed_shape::{Extents};
    /// const E: Extents<2> = Extents::of::<[[[i32; 5]; 3]; 2]>();
    /// ```
    pub const fn of<A: Shape>() -> Self {
        let () = AssertRank::<A, R>::OK;
        let mut extents = [0; R];
        let mut axis = 0;
        while axis < R {
            extents[axis] = A::DIMS.get(axis);
            axis += 1;
        }
        Self::new(extents)
    }

    pub const fn rank(&self) -> usize { R }

    /// The extent of `axis`. Panics if `axis >= R`.
    pub const fn get(&self, axis: usize) -> usize { self.0[axis] }

    pub const fn as_array(&self) -> &[usize; R] { &self.0 }

    /// The number of items, which is the product of the extents.
    pub const fn total_items(&self) -> usize { product(&self.0, 0) }

    /// The number of items spanned by one step along `axis`.
    ///
    /// This is the product of the extents of all axes inside `axis`, so the
    /// stride of the innermost axis is `1`.
    pub const fn stride(&self, axis: usize) -> usize { product(&self.0, axis + 1) }

    /// The extent of the innermost axis, i.e. the length of a row.
    pub const fn inner_extent(&self) -> usize {
        if R == 0 { 1 } else { self.0[R.saturating_sub(1)] }
    }

    /// Returns `true` if every component of `index` is less than its extent.
    pub const fn is_valid(&self, index: &[usize; R]) -> bool {
        let mut axis = 0;
        while axis < R {
            if index[axis] >= self.0[axis] { return false; }
            axis += 1;
        }
        true
    }

    /// The index whose offset is `0`.
    pub const fn first(&self) -> [usize; R] { [0; R] }

    /// The index whose offset is `total_items() - 1`.
    pub const fn last(&self) -> [usize; R] {
        let mut index = [0; R];
        let mut axis = 0;
        while axis < R {
            index[axis] = self.0[axis] - 1;
            axis += 1;
        }
        index
    }

    pub const fn is_first(&self, index: &[usize; R]) -> bool {
        let mut axis = 0;
        while axis < R {
            if index[axis] != 0 { return false; }
            axis += 1;
        }
        true
    }

    pub const fn is_last(&self, index: &[usize; R]) -> bool {
        let mut axis = 0;
        while axis < R {
            if index[axis] + 1 != self.0[axis] { return false; }
            axis += 1;
        }
        true
    }

    /// Returns the row-major offset of `index`.
    ///
    /// `index` must be valid. This is not checked.
    pub const fn offset_of(&self, index: &[usize; R]) -> usize { offset_of(index, &self.0) }

    /// Returns the index whose row-major offset is `offset`.
    ///
    /// `offset` must be less than [`Self::total_items()`]. This is not checked;
    /// larger offsets wrap around.
    pub const fn index_of(&self, offset: usize) -> [usize; R] {
        let mut index = [0; R];
        let mut axis = 0;
        while axis < R {
            index[axis] = component(offset, &self.0, axis);
            axis += 1;
        }
        index
    }

    /// Returns the index `step` places after `index` in row-major order.
    ///
    /// The index is treated as a mixed-radix number whose least significant
    /// digit is the innermost axis. Carries propagate outwards.
    ///
    /// A carry out of the outermost axis is discarded: stepping past the last
    /// index silently wraps around to the start. The result does not say
    /// whether this happened. Count steps, or use [`Self::increment()`].
    pub const fn next_index(&self, index: [usize; R], step: usize) -> [usize; R] {
        let mut next = index;
        let mut carry = step;
        let mut axis = R;
        while carry > 0 && axis > 0 {
            axis -= 1;
            let extent = self.0[axis];
            // `next[axis] < extent`, so this cannot overflow for any `carry`.
            let digit = next[axis] + carry % extent;
            next[axis] = digit % extent;
            carry = carry / extent + digit / extent;
        }
        next
    }

    /// Returns the index one whole row after `index`, i.e. with the same
    /// innermost component in the next row. Wraps like [`Self::next_index()`].
    pub const fn next_stride(&self, index: [usize; R]) -> [usize; R] {
        self.next_index(index, self.inner_extent())
    }

    /// Returns the index after `index` in row-major order, and whether it
    /// wrapped around, i.e. whether `index` was the last index.
    pub const fn checked_next(&self, index: [usize; R]) -> ([usize; R], bool) {
        let mut next = index;
        let mut axis = R;
        while axis > 0 {
            axis -= 1;
            next[axis] += 1;
            if next[axis] < self.0[axis] { return (next, false); }
            next[axis] = 0;
        }
        (next, true)
    }

    /// Advances `index` to the next index in row-major order.
    ///
    /// Returns `true` if `index` was the last index, in which case it wraps
    /// around to the first index. See [`Self::checked_next()`].
    pub fn increment(&self, index: &mut [usize; R]) -> bool {
        let (next, wrapped) = self.checked_next(*index);
        *index = next;
        wrapped
    }

    /// Returns an iterator over every [`Coordinate`] in row-major order.
    ///
    /// [`Coordinate`]: super::Coordinate
    pub fn coordinates(&self) -> Coordinates<R> { Coordinates::new(*self) }

    /// Returns an iterator over the first [`Coordinate`] of every row.
    ///
    /// [`Coordinate`]: super::Coordinate
    pub fn rows(&self) -> Coordinates<R> { Coordinates::rows(*self) }
}

impl<const R: usize> TryFrom<&[usize]> for Extents<R> {
    type Error = ShapeError;

    fn try_from(dims: &[usize]) -> Result<Self> {
        let extents = <[usize; R]>::try_from(dims)
            .map_err(|_| ShapeError::RankMismatch {expected: R, found: dims.len()})?;
        if let Some(axis) = extents.iter().position(|&e| e == 0) {
            return Err(ShapeError::ZeroExtent {axis});
        }
        Ok(Self(extents))
    }
}

impl<const R: usize> From<Extents<R>> for [usize; R] {
    fn from(extents: Extents<R>) -> Self { extents.0 }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use pretty_assertions::{assert_eq};

    use super::*;

    const E34: Extents<2> = Extents::of::<[[i32; 4]; 3]>();
    const E235: Extents<3> = Extents::of::<[[[i32; 5]; 3]; 2]>();

    const _: () = assert!(E34.total_items() == 12);
    const _: () = assert!(E34.offset_of(&[2, 3]) == 11);
    const _: () = assert!(E235.stride(0) == 15);
    const _: () = assert!(E235.is_last(&E235.last()));
    const _: () = assert!(E235.is_first(&E235.next_index(E235.last(), 1)));

    #[test]
    fn of() {
        assert_eq!(E34.as_array(), &[3, 4]);
        assert_eq!(E235.as_array(), &[2, 3, 5]);
        assert_eq!(Extents::<1>::of::<[u8; 7]>().as_array(), &[7]);
        assert_eq!(Extents::<0>::of::<u8>().total_items(), 1);
    }

    #[test]
    #[should_panic(expected = "zero-length")]
    fn zero_extent() {
        Extents::new([3, 0]);
    }

    #[test]
    fn try_from_slice() {
        assert_eq!(Extents::<2>::try_from(&[3usize, 4][..]), Ok(E34));
        assert_eq!(
            Extents::<2>::try_from(&[3usize, 4, 5][..]),
            Err(ShapeError::RankMismatch {expected: 2, found: 3}),
        );
        assert_eq!(
            Extents::<3>::try_from(&[3usize, 0, 5][..]),
            Err(ShapeError::ZeroExtent {axis: 1}),
        );
    }

    #[test]
    fn strides() {
        assert_eq!(E235.stride(0), 15);
        assert_eq!(E235.stride(1), 5);
        assert_eq!(E235.stride(2), 1);
        assert_eq!(E235.inner_extent(), 5);
        assert_eq!(Extents::<0>::new([]).inner_extent(), 1);
    }

    #[test]
    fn offsets() {
        let expected = [
            [0, 0], [0, 1], [0, 2], [0, 3],
            [1, 0], [1, 1], [1, 2], [1, 3],
            [2, 0], [2, 1], [2, 2], [2, 3],
        ];
        for (offset, index) in expected.iter().enumerate() {
            assert_eq!(E34.index_of(offset), *index);
            assert_eq!(E34.offset_of(index), offset);
        }
    }

    fn assert_round_trip<const R: usize>(extents: Extents<R>) {
        for offset in 0..extents.total_items() {
            let index = extents.index_of(offset);
            assert!(extents.is_valid(&index), "{:?} at {}", index, offset);
            assert_eq!(extents.offset_of(&index), offset);
            assert_eq!(extents.index_of(extents.offset_of(&index)), index);
        }
    }

    #[test]
    fn round_trip() {
        assert_round_trip(Extents::new([1]));
        assert_round_trip(Extents::new([11]));
        assert_round_trip(E34);
        assert_round_trip(E235);
        assert_round_trip(Extents::new([5, 6, 3]));
        assert_round_trip(Extents::new([2, 1, 3, 1, 4]));
    }

    #[test]
    fn first_and_last() {
        assert_eq!(E235.first(), [0, 0, 0]);
        assert_eq!(E235.last(), [1, 2, 4]);
        assert!(E235.is_first(&[0, 0, 0]));
        assert!(!E235.is_first(&[0, 0, 1]));
        assert!(E235.is_last(&[1, 2, 4]));
        assert!(!E235.is_last(&[0, 2, 4]));
        let unit = Extents::new([1]);
        assert!(unit.is_first(&[0]));
        assert!(unit.is_last(&[0]));
    }

    #[test]
    fn validity() {
        assert!(E34.is_valid(&[2, 3]));
        assert!(!E34.is_valid(&[3, 0]));
        assert!(!E34.is_valid(&[0, 4]));
    }

    fn assert_enumeration<const R: usize>(extents: Extents<R>) {
        let mut index = extents.first();
        for offset in 0..extents.total_items() {
            assert_eq!(extents.offset_of(&index), offset);
            assert_eq!(extents.is_last(&index), offset + 1 == extents.total_items());
            index = extents.next_index(index, 1);
        }
        assert_eq!(index, extents.first());
    }

    #[test]
    fn enumeration() {
        assert_enumeration(Extents::new([1]));
        assert_enumeration(Extents::new([6]));
        assert_enumeration(E34);
        assert_enumeration(E235);
        assert_enumeration(Extents::new([3, 2, 3]));
    }

    #[test]
    fn carries() {
        assert_eq!(E235.next_index([0, 0, 4], 1), [0, 1, 0]);
        assert_eq!(E235.next_index([0, 2, 4], 1), [1, 0, 0]);
        assert_eq!(E235.next_index([1, 2, 4], 1), [0, 0, 0]);
        assert_eq!(E235.next_index([0, 1, 3], 0), [0, 1, 3]);
        assert_eq!(E235.next_index([0, 0, 0], 7), [0, 1, 2]);
        assert_eq!(E235.next_index([1, 2, 3], 3), [0, 0, 1]);
    }

    #[test]
    fn degenerate() {
        let unit = Extents::<1>::of::<[char; 1]>();
        assert_eq!(unit.total_items(), 1);
        assert_eq!(unit.next_index([0], 1), [0]);
        assert_eq!(unit.next_stride([0]), [0]);
    }

    #[test]
    fn next_stride() {
        let mut index = E235.first();
        for _ in 0..E235.inner_extent() { index = E235.next_index(index, 1); }
        assert_eq!(E235.next_stride(E235.first()), index);
        assert_eq!(E235.next_stride([0, 0, 3]), [0, 1, 3]);
        assert_eq!(E235.next_stride([0, 2, 3]), [1, 0, 3]);
        assert_eq!(E235.next_stride([1, 2, 3]), [0, 0, 3]);
    }

    #[test]
    fn huge_steps_wrap() {
        fn check<const R: usize>(extents: Extents<R>) {
            let total = extents.total_items();
            for step in [usize::MAX, usize::MAX - 1, total * 7 + 3] {
                for offset in 0..total {
                    let index = extents.index_of(offset);
                    let expected = extents.index_of((offset + step % total) % total);
                    assert_eq!(extents.next_index(index, step), expected, "{:?} + {}", index, step);
                }
            }
        }
        check(Extents::new([2, 3]));
        check(Extents::new([1, 1]));
        check(Extents::new([7]));
        check(E235);
        assert_eq!(Extents::new([2, 3]).next_index([1, 2], usize::MAX), [0, 2]);
    }

    const _: () = assert!(E34.checked_next([2, 3]).1);
    const _: () = assert!(!E34.checked_next([0, 3]).1);

    #[test]
    fn increment() {
        let mut index = [0, 3];
        assert!(!E34.increment(&mut index));
        assert_eq!(index, [1, 0]);
        let mut index = E34.last();
        assert!(E34.increment(&mut index));
        assert_eq!(index, [0, 0]);
        let mut count = 1;
        while !E34.increment(&mut index) { count += 1; }
        assert_eq!(count, E34.total_items());
        assert_eq!(E34.checked_next([1, 3]), ([2, 0], false));
        assert_eq!(Extents::<0>::new([]).checked_next([]), ([], true));
    }
}
