//! Compile-time introspection of nested fixed-size arrays.
//!
//! A [`Shape`] is anything that can be viewed as a rectangular,
//! multi-dimensional arrangement of [`Shape::Item`]s. Nesting is peeled off
//! one level at a time until a [`Scalar`] is reached. The rank, the extents
//! and the number of items are associated constants, so the compiler computes
//! them once per type.

use std::marker::{PhantomData};

/// The deepest nesting that [`Dims`] can describe.
pub const MAX_RANK: usize = 16;

/// Implemented by element types that terminate the nesting of a [`Shape`].
///
/// A type that implements `Scalar` automatically implements `Shape` with rank
/// `0`, and so do arrays of it, arrays of arrays of it, and so on. If you want
/// your own element type to work with this crate, implement `Scalar` for it.
///
/// ```
/// use fixed_shape::{Scalar, Shape};
/// #[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
/// struct Celsius(f32);
/// impl Scalar for Celsius {}
/// assert_eq!(<[[Celsius; 7]; 52]>::RANK, 2);
/// ```
pub trait Scalar: Sized {}

impl Scalar for bool {}
impl Scalar for char {}

impl Scalar for i8 {}
impl Scalar for i16 {}
impl Scalar for i32 {}
impl Scalar for i64 {}
impl Scalar for i128 {}
impl Scalar for isize {}

impl Scalar for u8 {}
impl Scalar for u16 {}
impl Scalar for u32 {}
impl Scalar for u64 {}
impl Scalar for u128 {}
impl Scalar for usize {}

impl Scalar for f32 {}
impl Scalar for f64 {}

impl Scalar for String {}
impl<'a> Scalar for &'a str {}

impl<T: Scalar> Scalar for Option<T> {}

// ----------------------------------------------------------------------------

/// The extents of a [`Shape`], outermost axis first.
///
/// This is a fixed-capacity list that can be built in a `const` context. It is
/// what [`Shape::DIMS`] holds. To pair extents with coordinates, convert to
/// [`Extents`] using [`Extents::of()`].
///
/// [`Extents`]: super::Extents
/// [`Extents::of()`]: super::Extents::of()
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Dims {
    len: usize,
    items: [usize; MAX_RANK],
}

impl Dims {
    /// The extents of a [`Scalar`]: there are none.
    pub const EMPTY: Self = Self {len: 0, items: [0; MAX_RANK]};

    /// Returns `self` with a new outermost axis of length `extent`.
    ///
    /// Panics (which in a `const` context is a compile error) if the result
    /// would have more than [`MAX_RANK`] axes.
    pub const fn prepend(self, extent: usize) -> Self {
        assert!(self.len < MAX_RANK, "nesting is deeper than MAX_RANK");
        let mut items = [0; MAX_RANK];
        items[0] = extent;
        let mut axis = 0;
        while axis < self.len {
            items[axis + 1] = self.items[axis];
            axis += 1;
        }
        Self {len: self.len + 1, items}
    }

    /// The number of axes.
    pub const fn len(&self) -> usize { self.len }

    /// `true` for the extents of a [`Scalar`].
    pub const fn is_empty(&self) -> bool { self.len == 0 }

    /// Returns the extent of `axis`, or `0` if there is no such axis.
    pub const fn get(&self, axis: usize) -> usize {
        if axis < self.len { self.items[axis] } else { 0 }
    }

    /// The product of all the extents, which is `1` if there are none.
    pub const fn product(&self) -> usize {
        let mut total = 1;
        let mut axis = 0;
        while axis < self.len {
            total *= self.items[axis];
            axis += 1;
        }
        total
    }

    pub fn as_slice(&self) -> &[usize] { &self.items[..self.len] }
}

// ----------------------------------------------------------------------------

/// Implemented by nested fixed-size arrays, viewed as rectangular
/// multi-dimensional arrays of [`Self::Item`].
///
/// The implementations for `[T; N]` and [`Block<T, N>`] add one axis of length
/// `N` in front of the axes of `T`. The implementation for [`Scalar`]s
/// terminates the recursion.
///
/// ```
/// use fixed_shape::{Shape, Block};
/// type A = [[[u8; 5]; 3]; 2];
/// assert_eq!(A::RANK, 3);
/// assert_eq!(A::DIMS.as_slice(), [2, 3, 5]);
/// assert_eq!(A::TOTAL_ITEMS, 30);
///
/// // Built-in arrays and `Block`s mix freely.
/// type B = Block<[Block<u8, 5>; 3], 2>;
/// assert_eq!(B::DIMS, A::DIMS);
/// ```
///
/// [`Block<T, N>`]: super::Block
pub trait Shape {
    /// The element type left after stripping every level of nesting.
    type Item;

    /// The number of levels of nesting, which is `0` for a [`Scalar`].
    const RANK: usize;

    /// The extent of each level of nesting, outermost first.
    const DIMS: Dims;

    /// The number of `Item`s, which is the product of [`Self::DIMS`].
    const TOTAL_ITEMS: usize;

    /// Returns the `Item` at `index`, descending one axis per component.
    ///
    /// `index.len()` must be [`Self::RANK`]. Out-of-range components are not
    /// checked here, beyond the bounds checks of the underlying arrays. Prefer
    /// [`get()`], which checks the rank at compile time.
    ///
    /// [`get()`]: super::get()
    fn at_ref(&self, index: &[usize]) -> &Self::Item;

    /// Like [`Self::at_ref()`], but allows the `Item` to be modified.
    fn at_mut(&mut self, index: &[usize]) -> &mut Self::Item;
}

impl<T: Scalar> Shape for T {
    type Item = T;
    const RANK: usize = 0;
    const DIMS: Dims = Dims::EMPTY;
    const TOTAL_ITEMS: usize = 1;

    #[inline(always)]
    fn at_ref(&self, index: &[usize]) -> &T {
        debug_assert!(index.is_empty(), "Index {:?} is too long", index);
        self
    }

    #[inline(always)]
    fn at_mut(&mut self, index: &[usize]) -> &mut T {
        debug_assert!(index.is_empty(), "Index {:?} is too long", index);
        self
    }
}

impl<T: Shape, const N: usize> Shape for [T; N] {
    type Item = T::Item;
    const RANK: usize = T::RANK + 1;
    const DIMS: Dims = T::DIMS.prepend(N);
    const TOTAL_ITEMS: usize = N * T::TOTAL_ITEMS;

    #[inline(always)]
    fn at_ref(&self, index: &[usize]) -> &Self::Item {
        self[index[0]].at_ref(&index[1..])
    }

    #[inline(always)]
    fn at_mut(&mut self, index: &[usize]) -> &mut Self::Item {
        self[index[0]].at_mut(&index[1..])
    }
}

/// Returns the extent of `axis` of `A`, counting the outermost axis as `0`.
///
/// Returns `0` if `A` has no such axis, e.g. if `A` is a [`Scalar`].
///
/// ```
/// use fixed_shape::{extent};
/// const E: usize = extent::<[[i32; 4]; 3]>(1);
/// assert_eq!(E, 4);
/// assert_eq!(extent::<[[i32; 4]; 3]>(2), 0);
/// assert_eq!(extent::<i32>(0), 0);
/// ```
pub const fn extent<A: Shape>(axis: usize) -> usize { A::DIMS.get(axis) }

// ----------------------------------------------------------------------------

/// Fails to compile unless `A::RANK == R`. Use as `let () = AssertRank::<A, R>::OK;`.
pub(crate) struct AssertRank<A, const R: usize>(PhantomData<A>);

impl<A: Shape, const R: usize> AssertRank<A, R> {
    pub(crate) const OK: () = assert!(A::RANK == R, "coordinate rank differs from array rank");
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const _: () = assert!(<i32 as Shape>::RANK == 0);
    const _: () = assert!(<i32 as Shape>::TOTAL_ITEMS == 1);
    const _: () = assert!(<[i32; 11] as Shape>::RANK == 1);
    const _: () = assert!(<[[[i32; 4]; 3]; 9] as Shape>::RANK == 3);
    const _: () = assert!(<[[[i32; 4]; 3]; 9] as Shape>::TOTAL_ITEMS == 9 * 3 * 4);
    const _: () = assert!(extent::<[[[i32; 4]; 3]; 9]>(0) == 9);
    const _: () = assert!(extent::<[[[i32; 4]; 3]; 9]>(2) == 4);

    fn assert_dims<A: Shape>(rank: usize, dims: &[usize], total_items: usize) {
        assert_eq!(A::RANK, rank);
        assert_eq!(A::DIMS.len(), rank);
        assert_eq!(A::DIMS.as_slice(), dims);
        assert_eq!(A::TOTAL_ITEMS, total_items);
        assert_eq!(A::DIMS.product(), total_items);
    }

    #[test]
    fn dims() {
        assert_dims::<u8>(0, &[], 1);
        assert_dims::<[u8; 1]>(1, &[1], 1);
        assert_dims::<[u8; 11]>(1, &[11], 11);
        assert_dims::<[[u8; 4]; 2]>(2, &[2, 4], 8);
        assert_dims::<[[[u8; 100]; 50]; 25]>(3, &[25, 50, 100], 25 * 50 * 100);
        assert_dims::<[[Option<char>; 22]; 11]>(2, &[11, 22], 11 * 22);
    }

    #[test]
    fn scalar_sentinels() {
        assert!(Dims::EMPTY.is_empty());
        assert_eq!(Dims::EMPTY.get(0), 0);
        assert_eq!(Dims::EMPTY.product(), 1);
        assert_eq!(extent::<f64>(0), 0);
        assert_eq!(extent::<[f64; 3]>(1), 0);
    }

    #[test]
    fn prepend() {
        let d = Dims::EMPTY.prepend(5).prepend(3).prepend(2);
        assert_eq!(d.as_slice(), [2, 3, 5]);
        assert_eq!(d.get(1), 3);
    }

    #[test]
    #[should_panic(expected = "MAX_RANK")]
    fn prepend_too_deep() {
        let mut d = Dims::EMPTY;
        for _ in 0..=MAX_RANK { d = d.prepend(1); }
    }

    #[test]
    fn at_ref_and_at_mut() {
        let mut a: [[i32; 3]; 2] = [[1, 2, 3], [4, 5, 6]];
        assert_eq!(*a.at_ref(&[0, 0]), 1);
        assert_eq!(*a.at_ref(&[1, 2]), 6);
        *a.at_mut(&[1, 0]) = 40;
        assert_eq!(a, [[1, 2, 3], [40, 5, 6]]);
        let mut x = 7u8;
        *x.at_mut(&[]) += 1;
        assert_eq!(*x.at_ref(&[]), 8);
    }

    #[test]
    #[should_panic]
    fn at_ref_out_of_range() {
        let a: [[i32; 3]; 2] = [[1, 2, 3], [4, 5, 6]];
        let _ = a.at_ref(&[2, 0]);
    }
}
