//! Basic usage example for the plane vector type
//!
//! This example walks through construction, in-place arithmetic,
//! normalization, and the pure helper functions.

use planar::{Point2, Vector2};

fn main() {
    println!("Planar Vector2 Example");
    println!("======================");

    construction_example();
    arithmetic_example();
    normalization_example();
    steering_example();
}

/// Constructors, named directions, and conversions.
fn construction_example() {
    println!("\n--- Construction ---");

    let origin: Vector2 = Vector2::zero();
    let diagonal: Vector2 = Vector2::one();
    let from_tuple: Vector2<f32> = (3.0f32, 4.0f32).into();

    println!("origin = {}", origin);
    println!("diagonal = {}", diagonal);
    println!("from_tuple = {}", from_tuple);
    println!("up = {}, down = {}, left = {}, right = {}",
             Vector2::up(), Vector2::down(), Vector2::left(), Vector2::right());
}

/// In-place operators and the division guards.
fn arithmetic_example() {
    println!("\n--- Arithmetic ---");

    let mut position = Vector2::new(1.0_f32, 1.0);
    position += Vector2::new(2.0, 3.0);
    println!("after += (2, 3): {}", position);

    position *= 2.0;
    println!("after *= 2: {}", position);

    // A zero divisor component skips the whole division.
    position /= Vector2::new(0.0, 2.0);
    println!("after /= (0, 2) (skipped): {}", position);

    position /= Vector2::new(3.0, 4.0);
    println!("after /= (3, 4): {}", position);
}

/// Length, normalization, and the degenerate-vector fallback.
fn normalization_example() {
    println!("\n--- Normalization ---");

    let velocity = Vector2::new(3.0_f32, 4.0);
    println!("velocity = {}, length = {}", velocity, velocity.length());
    println!("normalized = {}", velocity.normalized());

    let mut tiny = Vector2::new(1e-6_f32, 0.0);
    tiny.normalize();
    println!("near-zero vectors normalize to {}", tiny);

    let capped = Vector2::clamp_magnitude(Vector2::new(10.0, 0.0), 5.0);
    println!("clamped to max length 5: {}", capped);
}

/// Angles, interpolation, and movement helpers.
fn steering_example() {
    println!("\n--- Steering ---");

    let heading = Vector2::right();
    let goal_direction = Vector2::up();

    println!("angle between {} and {}: {} degrees",
             heading, goal_direction, Vector2::angle(heading, goal_direction));
    println!("signed angle to starboard: {} degrees",
             Vector2::signed_angle(heading, Vector2::down()));

    let start = Point2::new(0.0_f32, 0.0);
    let goal = Point2::new(8.0_f32, 4.0);
    println!("halfway point: {}", Vector2::lerp(start, goal, 0.5));
    println!("distance: {}", Vector2::distance(start, goal));
    println!("one step of move_towards: {}",
             Vector2::move_towards(start, goal, 1.0));
}
