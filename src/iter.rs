//! Iterators over the coordinates and items of a shape.

use std::iter::{FusedIterator};
use std::ops::{Range};

use super::{Coordinate, Extents, Shape, get_at};

/// An iterator over [`Coordinate`]s in row-major order.
///
/// Returned by [`Extents::coordinates()`], which visits every coordinate
/// exactly once, and by [`Extents::rows()`], which visits the first coordinate
/// of every row.
///
/// ```
/// use fixed_shape::{Coordinates};
/// let offsets: Vec<usize> = Coordinates::<2>::of::<[[u8; 4]; 3]>().map(|c| c.offset()).collect();
/// assert_eq!(offsets, (0..12).collect::<Vec<_>>());
/// ```
#[derive(Debug, Clone)]
pub struct Coordinates<const R: usize> {
    extents: Extents<R>,
    next: [usize; R],
    step: usize,
    remaining: usize,
}

impl<const R: usize> Coordinates<R> {
    pub fn new(extents: Extents<R>) -> Self {
        Self {extents, next: extents.first(), step: 1, remaining: extents.total_items()}
    }

    /// Steps by [`Extents::next_stride()`], visiting the start of each row.
    pub fn rows(extents: Extents<R>) -> Self {
        let step = extents.inner_extent();
        Self {extents, next: extents.first(), step, remaining: extents.total_items() / step}
    }

    /// Every coordinate of the nested array type `A`.
    ///
    /// Fails to compile unless `R` is `A::RANK`.
    pub fn of<A: Shape>() -> Self { Self::new(Extents::of::<A>()) }
}

impl<const R: usize> Iterator for Coordinates<R> {
    type Item = Coordinate<R>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 { return None; }
        let coordinate = Coordinate::new_unchecked(self.next, self.extents);
        self.next = self.extents.next_index(self.next, self.step);
        self.remaining -= 1;
        Some(coordinate)
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.remaining, Some(self.remaining)) }
}

impl<const R: usize> ExactSizeIterator for Coordinates<R> {}

impl<const R: usize> FusedIterator for Coordinates<R> {}

// ----------------------------------------------------------------------------

/// An iterator over references to every item of a [`Shape`], in row-major
/// order.
///
/// ```
/// use fixed_shape::{Items};
/// let a: [[i32; 2]; 3] = [[1, 2], [3, 4], [5, 6]];
/// assert_eq!(Items::new(&a).copied().collect::<Vec<i32>>(), [1, 2, 3, 4, 5, 6]);
/// ```
#[derive(Debug)]
pub struct Items<'a, A: Shape> {
    array: &'a A,
    offsets: Range<usize>,
}

impl<'a, A: Shape> Items<'a, A> {
    pub fn new(array: &'a A) -> Self {
        Self {array, offsets: 0..A::TOTAL_ITEMS}
    }
}

impl<'a, A: Shape> Clone for Items<'a, A> {
    fn clone(&self) -> Self { Self {array: self.array, offsets: self.offsets.clone()} }
}

impl<'a, A: Shape> Iterator for Items<'a, A> {
    type Item = &'a A::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let array = self.array;
        self.offsets.next().map(|offset| get_at(array, offset))
    }

    fn size_hint(&self) -> (usize, Option<usize>) { self.offsets.size_hint() }
}

impl<'a, A: Shape> DoubleEndedIterator for Items<'a, A> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let array = self.array;
        self.offsets.next_back().map(|offset| get_at(array, offset))
    }
}

impl<'a, A: Shape> ExactSizeIterator for Items<'a, A> {}

impl<'a, A: Shape> FusedIterator for Items<'a, A> {}

// ----------------------------------------------------------------------------
