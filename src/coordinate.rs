//! Coordinates: indices that are known to be valid for their extents.

use std::fmt;
use std::ops::{Index};

use super::{Extents, Result, Shape, ShapeError};

/// A valid index into an `R`-dimensional shape, paired with the shape's
/// [`Extents`].
///
/// Every component is less than the extent of its axis. The constructors that
/// don't return a [`Result`] panic otherwise, which in a `const` context is a
/// compile error:
///
/// ```compile_fail
/// use fixed_shape::{Coordinate, Extents};
/// const C: Coordinate<2> = Coordinate::new([3, 0], Extents::new([3, 4]));
/// ```
///
/// ```
/// use fixed_shape::{Coordinate, Extents};
/// const C: Coordinate<2> = Coordinate::new([2, 3], Extents::new([3, 4]));
/// assert!(C.is_last());
/// assert_eq!(C.offset(), 11);
/// assert!(C.next_index().is_first());
/// ```
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub struct Coordinate<const R: usize> {
    index: [usize; R],
    extents: Extents<R>,
}

impl<const R: usize> Coordinate<R> {
    /// Panics if `index` is not valid for `extents`.
    pub const fn new(index: [usize; R], extents: Extents<R>) -> Self {
        assert!(extents.is_valid(&index), "coordinate is out of range");
        Self {index, extents}
    }

    pub(crate) const fn new_unchecked(index: [usize; R], extents: Extents<R>) -> Self {
        Self {index, extents}
    }

    /// Like [`Self::new()`], but reports the first out-of-range axis as an
    /// error.
    pub fn try_new(index: [usize; R], extents: Extents<R>) -> Result<Self> {
        for (axis, (&i, &extent)) in index.iter().zip(extents.as_array()).enumerate() {
            if i >= extent {
                return Err(ShapeError::OutOfRange {axis, index: i, extent});
            }
        }
        Ok(Self {index, extents})
    }

    /// The coordinate whose components are all zero.
    pub const fn first(extents: Extents<R>) -> Self {
        Self {index: extents.first(), extents}
    }

    /// The coordinate whose components are all one less than their extents.
    pub const fn last(extents: Extents<R>) -> Self {
        Self {index: extents.last(), extents}
    }

    /// The first coordinate of the nested array type `A`.
    ///
    /// Fails to compile unless `R` is `A::RANK`.
    pub const fn first_of<A: Shape>() -> Self { Self::first(Extents::of::<A>()) }

    /// The last coordinate of the nested array type `A`.
    ///
    /// Fails to compile unless `R` is `A::RANK`.
    pub const fn last_of<A: Shape>() -> Self { Self::last(Extents::of::<A>()) }

    /// Returns the coordinate at row-major `offset`.
    ///
    /// `offset` must be less than `extents.total_items()`. This is not
    /// checked; use [`Self::try_from_offset()`] for untrusted offsets.
    pub const fn from_offset(offset: usize, extents: Extents<R>) -> Self {
        Self {index: extents.index_of(offset), extents}
    }

    /// Like [`Self::from_offset()`], but checks `offset`.
    pub fn try_from_offset(offset: usize, extents: Extents<R>) -> Result<Self> {
        let total_items = extents.total_items();
        if offset >= total_items {
            return Err(ShapeError::OffsetOutOfRange {offset, total_items});
        }
        Ok(Self::from_offset(offset, extents))
    }

    pub const fn index(&self) -> &[usize; R] { &self.index }

    pub const fn extents(&self) -> &Extents<R> { &self.extents }

    pub const fn rank(&self) -> usize { R }

    /// The row-major offset of `self`.
    pub const fn offset(&self) -> usize { self.extents.offset_of(&self.index) }

    pub const fn is_first(&self) -> bool { self.extents.is_first(&self.index) }

    pub const fn is_last(&self) -> bool { self.extents.is_last(&self.index) }

    /// The next coordinate in row-major order.
    ///
    /// The successor of the last coordinate is the first coordinate.
    pub const fn next_index(self) -> Self { self.next_index_by(1) }

    /// The coordinate `step` places after `self` in row-major order, wrapping
    /// around past the last coordinate. See [`Extents::next_index()`].
    pub const fn next_index_by(self, step: usize) -> Self {
        Self {index: self.extents.next_index(self.index, step), extents: self.extents}
    }

    /// The coordinate with the same innermost component in the next row. See
    /// [`Extents::next_stride()`].
    pub const fn next_stride(self) -> Self {
        Self {index: self.extents.next_stride(self.index), extents: self.extents}
    }
}

impl<const R: usize> Index<usize> for Coordinate<R> {
    type Output = usize;
    fn index(&self, axis: usize) -> &usize { &self.index[axis] }
}

impl<const R: usize> From<Coordinate<R>> for [usize; R] {
    fn from(coordinate: Coordinate<R>) -> Self { coordinate.index }
}

impl<const R: usize> fmt::Display for Coordinate<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (axis, i) in self.index.iter().enumerate() {
            if axis > 0 { write!(f, ", ")?; }
            write!(f, "{}", i)?;
        }
        write!(f, ")")
    }
}

// ----------------------------------------------------------------------------
