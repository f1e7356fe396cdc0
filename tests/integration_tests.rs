// tests/integration_tests.rs
//! Integration tests driving the plane vector operations together

use planar::{Point2, Vector2};

#[test]
fn test_projectile_bounce_workflow() {
    println!("=== Projectile Bounce Workflow Test ===");

    // A projectile travels down-right and hits a horizontal floor.
    let mut velocity = Vector2::new(3.0_f32, -4.0);
    let floor_normal = Vector2::up();

    let bounced = Vector2::reflect(velocity, floor_normal);
    assert_eq!(bounced, Vector2::new(3.0, 4.0));

    // Speed is preserved by the reflection.
    assert_eq!(bounced.length(), velocity.length());

    // Damp the bounce and cap the speed for the next frame.
    velocity = bounced;
    velocity *= 0.5;
    assert_eq!(velocity, Vector2::new(1.5, 2.0));

    let capped = Vector2::clamp_magnitude(velocity, 2.0);
    assert!((capped.length() - 2.0).abs() < 1e-6);

    println!("Projectile bounce workflow: OK");
}

#[test]
fn test_seek_and_arrive_behaviour() {
    println!("=== Seek and Arrive Behaviour Test ===");

    let target = Point2::new(3.0_f32, 4.0);
    let start = Point2::new(0.0_f32, 0.0);

    // Far from the target, a seeker steers along the normalized offset.
    let mut heading = target - start;
    assert_eq!(heading.length(), 5.0);
    heading.normalize();
    assert_eq!(heading, Vector2::new(0.6, 0.8));

    // Once the remaining distance fits inside the step, the move snaps.
    let close = Point2::new(2.5_f32, 4.0);
    assert_eq!(Vector2::move_towards(close, target, 1.0), target);
    assert_eq!(Vector2::distance(close, target), 0.5);

    println!("Seek and arrive behaviour: OK");
}

#[test]
fn test_steering_angles() {
    println!("=== Steering Angles Test ===");

    let heading = Vector2::right();
    let to_port = Vector2::up();
    let to_starboard = Vector2::down();

    // Port turns are positive, starboard turns negative, same magnitude.
    let port_angle = Vector2::signed_angle(heading, to_port);
    let starboard_angle = Vector2::signed_angle(heading, to_starboard);
    assert!(port_angle > 0.0);
    assert!(starboard_angle < 0.0);
    assert_eq!(port_angle, -starboard_angle);
    assert_eq!(port_angle, Vector2::angle(heading, to_port));

    // The perpendicular of the heading points to port.
    assert_eq!(Vector2::perpendicular(heading), to_port);

    // Dead ahead measures zero.
    assert_eq!(Vector2::signed_angle(heading, Vector2::new(5.0_f32, 0.0)), 0.0);

    println!("Steering angles: OK");
}

#[test]
fn test_interpolation_paths() {
    println!("=== Interpolation Paths Test ===");

    let a = Vector2::new(0.0_f32, 0.0);
    let b = Vector2::new(8.0_f32, 4.0);

    // Clamped interpolation never leaves the segment.
    assert_eq!(Vector2::lerp(a, b, -3.0), a);
    assert_eq!(Vector2::lerp(a, b, 0.25), Vector2::new(2.0, 1.0));
    assert_eq!(Vector2::lerp(a, b, 7.0), b);

    // Unclamped interpolation extends the segment both ways.
    assert_eq!(Vector2::lerp_unclamped(a, b, 1.5), Vector2::new(12.0, 6.0));
    assert_eq!(Vector2::lerp_unclamped(a, b, -0.5), Vector2::new(-4.0, -2.0));

    println!("Interpolation paths: OK");
}

#[test]
fn test_bounding_region_from_min_max() {
    println!("=== Bounding Region Test ===");

    let corners = [
        Point2::new(1.0_f32, 5.0),
        Point2::new(3.0_f32, 2.0),
        Point2::new(-2.0_f32, 4.0),
    ];

    let mut lower = corners[0];
    let mut upper = corners[0];
    for corner in &corners[1..] {
        lower = Vector2::min(lower, *corner);
        upper = Vector2::max(upper, *corner);
    }

    assert_eq!(lower, Point2::new(-2.0, 2.0));
    assert_eq!(upper, Point2::new(3.0, 5.0));

    // Every corner sits inside the region.
    for corner in &corners {
        assert!(corner.x >= lower.x && corner.x <= upper.x);
        assert!(corner.y >= lower.y && corner.y <= upper.y);
    }

    println!("Bounding region: OK");
}

#[test]
fn test_concurrent_read_sharing() {
    println!("=== Concurrent Read Sharing Test ===");

    use std::sync::Arc;
    use std::thread;

    // Vectors are plain values; read-only sharing needs no locking.
    let shared = Arc::new(Vector2::new(3.0_f32, 4.0));

    let mut handles = vec![];
    for i in 0..4 {
        let shared_clone = Arc::clone(&shared);

        let handle = thread::spawn(move || {
            assert_eq!(shared_clone.length(), 5.0);
            assert_eq!(shared_clone.normalized(), Vector2::new(0.6, 0.8));
            println!("Thread {} read shared vector successfully", i);
        });

        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    println!("Concurrent read sharing: OK");
}

#[test]
fn test_serialization_interop() {
    println!("=== Serialization Interop Test ===");

    let waypoints = vec![
        Point2::new(0.0_f32, 0.0),
        Point2::new(1.5_f32, -2.5),
        Point2::new(10.0_f32, 20.0),
    ];

    let encoded = bincode::serialize(&waypoints).expect("serialize failed");
    let decoded: Vec<Point2> = bincode::deserialize(&encoded).expect("deserialize failed");

    assert_eq!(waypoints, decoded);

    println!("Serialization interop: OK");
}

#[test]
fn test_display_and_conversion_interop() {
    println!("=== Display and Conversion Interop Test ===");

    let v: Vector2<f32> = (2.0f32, 3.0f32).into();
    assert_eq!(format!("{}", v), "(2, 3)");

    let as_array: [f32; 2] = v.into();
    assert_eq!(as_array, [2.0, 3.0]);

    let round_trip = Vector2::from(as_array);
    assert_eq!(round_trip, v);

    println!("Display and conversion interop: OK");
}
