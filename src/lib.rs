pub mod numerics;

pub use numerics::types::point::Point2;
pub use numerics::types::vector::Vector2;
