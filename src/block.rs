//! A fixed-capacity container that nests like a built-in array.

use std::ops::{Deref, DerefMut, Index, IndexMut};

use super::{Dims, Shape};

/// A fixed-capacity container of exactly `N` `T`s.
///
/// `Block<T, N>` behaves like `[T; N]` in most respects, and nests like it:
/// it implements [`Shape`] with one more axis than `T`. It exists so that the
/// multi-dimensional algorithms in this crate can be used with a container type
/// that your own code can extend, e.g. with trait implementations.
///
/// ```
/// use fixed_shape::{Block, Coordinate, Extents};
/// type B = Block<Block<i32, 3>, 2>;
/// let mut b: B = Block([Block([1, 2, 3]), Block([4, 5, 6])]);
/// let c = Coordinate::new([1, 2], Extents::of::<B>());
/// assert_eq!(b[c], 6);
/// b[c] = 60;
/// assert_eq!(b[1][2], 60);
/// ```
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Block<T, const N: usize>(pub [T; N]);

impl<T, const N: usize> Block<T, N> {
    pub const fn new(items: [T; N]) -> Self { Self(items) }

    /// Always `N`.
    pub const fn len(&self) -> usize { N }

    pub const fn is_empty(&self) -> bool { N == 0 }

    /// Returns the contents.
    pub fn into_inner(self) -> [T; N] { self.0 }
}

impl<T, const N: usize> Deref for Block<T, N> {
    type Target = [T; N];
    fn deref(&self) -> &Self::Target { &self.0 }
}

impl<T, const N: usize> DerefMut for Block<T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target { &mut self.0 }
}

// `Block` is also indexed by `Coordinate`, which hides the `Index` impls of
// the `Deref` target.
impl<T, const N: usize> Index<usize> for Block<T, N> {
    type Output = T;
    fn index(&self, i: usize) -> &T { &self.0[i] }
}

impl<T, const N: usize> IndexMut<usize> for Block<T, N> {
    fn index_mut(&mut self, i: usize) -> &mut T { &mut self.0[i] }
}

impl<T, const N: usize> From<[T; N]> for Block<T, N> {
    fn from(items: [T; N]) -> Self { Self(items) }
}

impl<T, const N: usize> From<Block<T, N>> for [T; N] {
    fn from(block: Block<T, N>) -> Self { block.0 }
}

impl<T, const N: usize> IntoIterator for Block<T, N> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, N>;
    fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
}

impl<'a, T, const N: usize> IntoIterator for &'a Block<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter { self.0.iter() }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut Block<T, N> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter { self.0.iter_mut() }
}

impl<T: Shape, const N: usize> Shape for Block<T, N> {
    type Item = T::Item;
    const RANK: usize = T::RANK + 1;
    const DIMS: Dims = T::DIMS.prepend(N);
    const TOTAL_ITEMS: usize = N * T::TOTAL_ITEMS;

    #[inline(always)]
    fn at_ref(&self, index: &[usize]) -> &Self::Item {
        self.0[index[0]].at_ref(&index[1..])
    }

    #[inline(always)]
    fn at_mut(&mut self, index: &[usize]) -> &mut Self::Item {
        self.0[index[0]].at_mut(&index[1..])
    }
}

// ----------------------------------------------------------------------------
