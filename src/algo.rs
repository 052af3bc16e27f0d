//! Whole-array algorithms.
//!
//! Every algorithm visits the items of a [`Shape`] in row-major order, so the
//! results are deterministic even for operators that are not associative or
//! commutative, and ties are always broken in favour of the item that comes
//! first.

use std::fmt;
use std::ops::{Add, Deref, Mul};

use super::{AssertRank, Coordinate, Extents, Items, Shape, get, get_at};

/// Combines every item of `array` with an accumulator, in row-major order.
///
/// This is a left fold: the result is `op(...op(op(init, a0), a1)..., an)`.
///
/// ```
/// use fixed_shape::{accumulate};
/// let a: [[i32; 2]; 2] = [[1, 2], [3, 4]];
/// assert_eq!(accumulate(&a, 0, |acc, &x| acc * 10 + x), 1234);
/// ```
pub fn accumulate<A: Shape, B>(array: &A, init: B, op: impl FnMut(B, &A::Item) -> B) -> B {
    Items::new(array).fold(init, op)
}

/// Returns the sum of the items of `array`.
///
/// There is always at least one item, so no zero is needed.
///
/// ```
/// use fixed_shape::{sum};
/// let a: [i32; 5] = [2, 4, 6, 8, 10];
/// assert_eq!(sum(&a), 30);
/// ```
pub fn sum<A: Shape>(array: &A) -> A::Item where A::Item: Clone + Add<Output=A::Item> {
    Items::new(array).skip(1).fold(get_at(array, 0).clone(), |acc, x| acc + x.clone())
}

/// Returns the product of the items of `array`.
///
/// ```
/// use fixed_shape::{product};
/// let a: [i32; 5] = [2, 4, 6, 8, 10];
/// assert_eq!(product(&a), 3840);
/// ```
pub fn product<A: Shape>(array: &A) -> A::Item where A::Item: Clone + Mul<Output=A::Item> {
    Items::new(array).skip(1).fold(get_at(array, 0).clone(), |acc, x| acc * x.clone())
}

/// Returns the [`Coordinate`] of every item of `array` that satisfies
/// `predicate`, in row-major order.
///
/// Fails to compile unless `R` is `A::RANK`.
///
/// ```
/// use fixed_shape::{find_if, Coordinate};
/// let a: [[i32; 3]; 2] = [[1, 8, 3], [8, 5, 6]];
/// let found: Vec<Coordinate<2>> = find_if(&a, |&x| x == 8).collect();
/// assert_eq!(found.len(), 2);
/// assert_eq!(found[0].index(), &[0, 1]);
/// assert_eq!(found[1].index(), &[1, 0]);
/// ```
pub fn find_if<'a, A, P, const R: usize>(array: &'a A, mut predicate: P) -> impl Iterator<Item=Coordinate<R>> + 'a
where
    A: Shape,
    P: FnMut(&A::Item) -> bool + 'a,
{
    let () = AssertRank::<A, R>::OK;
    Extents::of::<A>().coordinates().filter(move |c| predicate(get(array, c)))
}

/// Returns the [`Coordinate`] of the smallest item of `array`.
///
/// If several items are equally small, returns the first in row-major order.
/// Items that are not comparable (e.g. NaNs) are never selected unless they
/// come first.
///
/// ```
/// use fixed_shape::{find_min, Coordinate};
/// let a: [[i32; 3]; 2] = [[4, 2, 3], [2, 5, 6]];
/// let c: Coordinate<2> = find_min(&a);
/// assert_eq!(c.index(), &[0, 1]);
/// ```
pub fn find_min<A: Shape, const R: usize>(array: &A) -> Coordinate<R> where A::Item: PartialOrd {
    let mut coordinates = Extents::of::<A>().coordinates();
    let mut best = Coordinate::first_of::<A>();
    coordinates.next();
    for c in coordinates {
        if get(array, &c) < get(array, &best) { best = c; }
    }
    best
}

/// Like [`find_min()`], but ignores `excluded` coordinates. Returns `None` if
/// everything is excluded.
fn find_min_excluding<A: Shape, const R: usize>(
    array: &A,
    excluded: &[Coordinate<R>],
) -> Option<Coordinate<R>> where A::Item: PartialOrd {
    let mut best: Option<Coordinate<R>> = None;
    for c in Extents::of::<A>().coordinates() {
        if excluded.contains(&c) { continue; }
        let better = match best {
            None => true,
            Some(b) => get(array, &c) < get(array, &b),
        };
        if better { best = Some(c); }
    }
    best
}

/// Returns the [`Coordinate`]s of the `K` smallest items of `array`, smallest
/// first.
///
/// Each coordinate is selected at most once, by repeating [`find_min()`] over
/// the coordinates not yet selected. Equal items are therefore selected in
/// row-major order. If `K` exceeds the number of items, every coordinate is
/// returned.
///
/// ```
/// use fixed_shape::{find_k_min, get, Found};
/// let a: [[i32; 4]; 3] = [[10, 20, 30, 40], [11, 21, 31, 41], [12, 22, 32, 42]];
/// let found: Found<2, 4> = find_k_min(&a);
/// assert_eq!(found.values(&a).copied().collect::<Vec<i32>>(), [10, 11, 12, 20]);
/// assert_eq!(*get(&a, &found[3]), 20);
/// ```
pub fn find_k_min<A: Shape, const R: usize, const K: usize>(array: &A) -> Found<R, K> where A::Item: PartialOrd {
    let k = if K > A::TOTAL_ITEMS {
        log::debug!("Clamping k = {} to the {} items of the array", K, A::TOTAL_ITEMS);
        A::TOTAL_ITEMS
    } else {
        K
    };
    let mut found = Found::new(Coordinate::first_of::<A>());
    for _ in 0..k {
        let Some(c) = find_min_excluding(array, found.as_slice()) else { break };
        found.push(c);
    }
    found
}

// ----------------------------------------------------------------------------

/// At most `K` [`Coordinate`]s, in the order they were found.
///
/// Dereferences to a slice of the coordinates actually found.
#[derive(Copy, Clone)]
pub struct Found<const R: usize, const K: usize> {
    len: usize,
    items: [Coordinate<R>; K],
}

impl<const R: usize, const K: usize> Found<R, K> {
    /// An empty collection. `fill` occupies the unused capacity.
    pub(crate) fn new(fill: Coordinate<R>) -> Self {
        Self {len: 0, items: [fill; K]}
    }

    pub(crate) fn push(&mut self, coordinate: Coordinate<R>) {
        debug_assert!(self.len < K, "Found is full");
        self.items[self.len] = coordinate;
        self.len += 1;
    }

    /// The capacity, which is `K`.
    pub const fn capacity(&self) -> usize { K }

    pub fn as_slice(&self) -> &[Coordinate<R>] { &self.items[..self.len] }

    /// Returns the items of `array` at the found coordinates, in order.
    ///
    /// Fails to compile unless `R` is `A::RANK`.
    pub fn values<'a, A: Shape>(&'a self, array: &'a A) -> impl Iterator<Item=&'a A::Item> + 'a {
        self.as_slice().iter().map(move |c| get(array, c))
    }
}

impl<const R: usize, const K: usize> Deref for Found<R, K> {
    type Target = [Coordinate<R>];
    fn deref(&self) -> &Self::Target { self.as_slice() }
}

impl<'a, const R: usize, const K: usize> IntoIterator for &'a Found<R, K> {
    type Item = &'a Coordinate<R>;
    type IntoIter = std::slice::Iter<'a, Coordinate<R>>;
    fn into_iter(self) -> Self::IntoIter { self.as_slice().iter() }
}

impl<const R: usize, const K: usize> PartialEq for Found<R, K> {
    fn eq(&self, other: &Self) -> bool { self.as_slice() == other.as_slice() }
}

impl<const R: usize, const K: usize> Eq for Found<R, K> {}

impl<const R: usize, const K: usize> fmt::Debug for Found<R, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

// ----------------------------------------------------------------------------
