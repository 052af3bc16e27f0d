//! A pure-Rust library for treating nested fixed-size arrays as rectangular,
//! multi-dimensional arrays whose shape is known at compile time.
//!
//! Trait [`Shape`] is implemented by built-in arrays such as `[[[T; 5]; 3]; 2]`
//! and by the fixed-capacity container [`Block<T, N>`], nested in any
//! combination, provided the innermost type implements [`Scalar`]. The rank,
//! the extents and the number of items are associated constants, computed by
//! the compiler.
//!
//! [`Extents<R>`] describes the shape of an `R`-dimensional array at the
//! value level, and does all the row-major arithmetic: converting between
//! indices and linear offsets, and stepping from one index to the next. A
//! [`Coordinate<R>`] is an index that is valid for its `Extents`. All of this
//! is `const fn`, so it can be evaluated at compile time:
//!
//! ```
//! use fixed_shape::{Coordinate};
//! type A = [[[f32; 5]; 3]; 2];
//! const LAST: Coordinate<3> = Coordinate::last_of::<A>();
//! const _: () = assert!(LAST.offset() == 29);
//! ```
//!
//! Using a `Coordinate` whose rank differs from that of the array is a compile
//! error, and so is a `const` `Coordinate` that is out of range.
//!
//! [`get()`] and friends access items by `Coordinate` or by offset. The
//! whole-array algorithms [`sum()`], [`product()`], [`accumulate()`],
//! [`find_if()`], [`find_min()`] and [`find_k_min()`] visit the items in
//! row-major order, i.e. with the innermost axis varying fastest.

mod shape;
pub use shape::{Scalar, Dims, Shape, MAX_RANK, extent};
pub(crate) use shape::{AssertRank};

mod block;
pub use block::{Block};

mod error;
pub use error::{ShapeError, Result};

mod extents;
pub use extents::{Extents};

mod coordinate;
pub use coordinate::{Coordinate};

mod iter;
pub use iter::{Coordinates, Items};

mod access;
pub use access::{get, get_mut, get_at, get_at_mut};

mod algo;
pub use algo::{accumulate, sum, product, find_if, find_min, find_k_min, Found};
