//! Element access by [`Coordinate`] or by row-major offset.
//!
//! Access descends one axis at a time, indexing the outermost axis with the
//! first component. The rank of a `Coordinate` is checked against the rank of
//! the array at compile time. Components and offsets are not checked beyond the
//! bounds checks of the underlying arrays; validate them with
//! [`Coordinate::try_new()`] or [`Coordinate::try_from_offset()`] if they come
//! from outside.

use std::ops::{Index, IndexMut};

use super::{AssertRank, Block, Coordinate, Extents, Shape, MAX_RANK};
use super::extents::{component};

/// Returns a reference to the item of `array` at `coordinate`.
///
/// Fails to compile unless `R` is `A::RANK`.
///
/// ```
/// use fixed_shape::{get, Coordinate};
/// let a: [[i32; 4]; 3] = [[10, 20, 30, 40], [11, 21, 31, 41], [12, 22, 32, 42]];
/// assert_eq!(*get(&a, &Coordinate::<2>::first_of::<[[i32; 4]; 3]>()), 10);
/// assert_eq!(*get(&a, &Coordinate::<2>::last_of::<[[i32; 4]; 3]>()), 42);
/// ```
///
/// ```compile_fail
/// use fixed_shape::{get, Coordinate, Extents};
/// let a: [[i32; 4]; 3] = [[0; 4]; 3];
/// get(&a, &Coordinate::new([0, 0, 0], Extents::new([3, 4, 1])));
/// ```
pub fn get<'a, A: Shape, const R: usize>(array: &'a A, coordinate: &Coordinate<R>) -> &'a A::Item {
    let () = AssertRank::<A, R>::OK;
    debug_assert_eq!(*coordinate.extents(), Extents::of::<A>(), "Coordinate {} is for a different shape", coordinate);
    array.at_ref(coordinate.index())
}

/// Returns a mutable reference to the item of `array` at `coordinate`.
///
/// Fails to compile unless `R` is `A::RANK`.
///
/// ```
/// use fixed_shape::{get_mut, Coordinate};
/// let mut a: [[u8; 2]; 2] = [[1, 2], [3, 4]];
/// *get_mut(&mut a, &Coordinate::<2>::last_of::<[[u8; 2]; 2]>()) = 40;
/// assert_eq!(a, [[1, 2], [3, 40]]);
/// ```
pub fn get_mut<'a, A: Shape, const R: usize>(array: &'a mut A, coordinate: &Coordinate<R>) -> &'a mut A::Item {
    let () = AssertRank::<A, R>::OK;
    debug_assert_eq!(*coordinate.extents(), Extents::of::<A>(), "Coordinate {} is for a different shape", coordinate);
    array.at_mut(coordinate.index())
}

/// The index at row-major `offset` in an array of type `A`, padded with zeros.
fn index_of<A: Shape>(offset: usize) -> [usize; MAX_RANK] {
    let dims = A::DIMS;
    let mut index = [0; MAX_RANK];
    for (axis, i) in index[..dims.len()].iter_mut().enumerate() {
        *i = component(offset, dims.as_slice(), axis);
    }
    index
}

/// Returns a reference to the item of `array` at row-major `offset`.
///
/// `offset` must be less than `A::TOTAL_ITEMS`. Larger offsets wrap around.
///
/// ```
/// use fixed_shape::{get_at};
/// let a: [[i32; 4]; 3] = [[10, 20, 30, 40], [11, 21, 31, 41], [12, 22, 32, 42]];
/// assert_eq!(*get_at(&a, 5), 21);
/// ```
pub fn get_at<A: Shape>(array: &A, offset: usize) -> &A::Item {
    let index = index_of::<A>(offset);
    array.at_ref(&index[..A::RANK])
}

/// Returns a mutable reference to the item of `array` at row-major `offset`.
///
/// `offset` must be less than `A::TOTAL_ITEMS`. Larger offsets wrap around.
pub fn get_at_mut<A: Shape>(array: &mut A, offset: usize) -> &mut A::Item {
    let index = index_of::<A>(offset);
    array.at_mut(&index[..A::RANK])
}

// ----------------------------------------------------------------------------

impl<T: Shape, const N: usize, const R: usize> Index<Coordinate<R>> for Block<T, N> {
    type Output = T::Item;
    fn index(&self, coordinate: Coordinate<R>) -> &Self::Output { get(self, &coordinate) }
}

impl<T: Shape, const N: usize, const R: usize> IndexMut<Coordinate<R>> for Block<T, N> {
    fn index_mut(&mut self, coordinate: Coordinate<R>) -> &mut Self::Output { get_mut(self, &coordinate) }
}

// ----------------------------------------------------------------------------
