//! Grid coordinates.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Multiplier for the y-coordinate in the hash.
///
/// Exceeds any expected x-coordinate, so two distinct coordinates in range
/// can never share a hash.
const HASH_FACTOR: u64 = (1 << 31) - 1;

/// The coordinates of a cell, with the hash cached at construction.
///
/// Equality is exact `(x, y)` equality; the hash is only a fast pre-check
/// and a probe starting position for [`PointSet`](crate::PointSet).
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "(i32, i32)", into = "(i32, i32)"))]
pub struct Point {
    x: i32,
    y: i32,
    hash: u64,
}

impl Point {
    /// Creates a point and caches its hash.
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        let hash = (x as u64).wrapping_add(HASH_FACTOR.wrapping_mul(y as u64));
        Self { x, y, hash }
    }

    /// The x-coordinate.
    #[inline]
    pub fn x(&self) -> i32 {
        self.x
    }

    /// The y-coordinate.
    #[inline]
    pub fn y(&self) -> i32 {
        self.y
    }

    /// The cached hash, `x + (2^31 - 1) * y`.
    #[inline]
    pub fn hash(&self) -> u64 {
        self.hash
    }
}

impl PartialEq for Point {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        // The hash is a pure function of the coordinates, so comparing it
        // first only short-circuits mismatches.
        self.hash == other.hash && self.x == other.x && self.y == other.y
    }
}

impl Eq for Point {}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (i32, i32) {
    #[inline]
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}
