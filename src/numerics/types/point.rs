// src/numerics/types/point.rs
// Point2 is an alias for Vector2.

use super::vector::Vector2;

/// Point2 is an alias to Vector2 to represent positions in the plane.
///
/// Positions and directions share one representation; the alias names the
/// intent at call sites. The alias keeps generic template parameterization.
pub type Point2<T = f32> = Vector2<T>;
