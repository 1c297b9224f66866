//! Distance functions for points on a plane.
//!
//! These are useful as heuristics for searching on grids and geometric graphs.

use num_traits::Float;

/// Computes the Manhattan distance between two points.
///
/// # Examples
///
/// ```
/// use approx::assert_relative_eq;
/// use grapo::algorithms;
///
/// assert_relative_eq!(algorithms::manhattan_distance(0.0, 0.0, 3.0, -4.0), 7.0);
/// ```
pub fn manhattan_distance<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Float,
{
    (x1 - x2).abs() + (y1 - y2).abs()
}

/// Computes the Euclidean distance between two points.
///
/// # Examples
///
/// ```
/// use approx::assert_relative_eq;
/// use grapo::algorithms;
///
/// assert_relative_eq!(algorithms::euclidean_distance(0.0, 0.0, 3.0, 4.0), 5.0);
/// ```
pub fn euclidean_distance<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Float,
{
    (x2 - x1).hypot(y2 - y1)
}
