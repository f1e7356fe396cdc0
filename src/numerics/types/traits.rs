// src/numerics/types/traits.rs
// Scalar trait shared by the plane types.

/// FloatingPoint is the scalar bound for the plane vector types.
///
/// It asks for `Copy`, ordering, the four arithmetic operators on `Self`,
/// and named zero/one constants. `f32` is the working precision of the
/// operation set; `f64` instantiations are available for callers that want
/// wider components on the generic core.
pub trait FloatingPoint:
Copy + PartialOrd
+ core::ops::Add<Output = Self>
+ core::ops::Sub<Output = Self>
+ core::ops::Mul<Output = Self>
+ core::ops::Div<Output = Self>
{
    fn zero() -> Self;
    fn one() -> Self;
}

impl FloatingPoint for f32 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
}

impl FloatingPoint for f64 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
}
