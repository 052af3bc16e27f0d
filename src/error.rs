/// Errors reported by the checked constructors of [`Extents`] and
/// [`Coordinate`].
///
/// The arithmetic itself never fails; these are only produced at the boundary
/// where run-time values are turned into extents, coordinates or offsets.
///
/// [`Extents`]: super::Extents
/// [`Coordinate`]: super::Coordinate
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    /// A coordinate component is not less than the extent of its axis.
    #[error("index {index} is out of range for axis {axis} of extent {extent}")]
    OutOfRange { axis: usize, index: usize, extent: usize },

    /// A linear offset is not less than the number of items.
    #[error("offset {offset} is out of range for {total_items} items")]
    OffsetOutOfRange { offset: usize, total_items: usize },

    /// The number of extents does not match the rank.
    #[error("rank mismatch: expected {expected}, found {found}")]
    RankMismatch { expected: usize, found: usize },

    /// Zero-length axes are not supported.
    #[error("axis {axis} has extent 0")]
    ZeroExtent { axis: usize },
}

/// Result type for the checked constructors.
pub type Result<T> = std::result::Result<T, ShapeError>;
