//! Heading conventions on the navigation plane
//!
//! Headings are in degrees. Heading 0 faces +x and increasing the heading
//! turns towards -z, so the forward vector is `(cos h, -sin h)`.

use glam::Vec2;

/// Unit forward vector for a heading
pub fn direction(heading_deg: f32) -> Vec2 {
    let (sin, cos) = heading_deg.to_radians().sin_cos();
    Vec2::new(cos, -sin)
}

/// Heading that faces along `delta`, in [0, 360)
pub fn towards(delta: Vec2) -> f32 {
    normalize((-delta.y).atan2(delta.x).to_degrees())
}

/// Wrap into [0, 360)
pub fn normalize(heading_deg: f32) -> f32 {
    let wrapped = heading_deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Signed shortest turn from `from` to `to`, in [-180, 180]
pub fn shortest_delta(from: f32, to: f32) -> f32 {
    let mut diff = (to - from) % 360.0;
    if diff > 180.0 {
        diff -= 360.0;
    } else if diff < -180.0 {
        diff += 360.0;
    }
    diff
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_convention() {
        let east = direction(0.0);
        assert!((east - Vec2::new(1.0, 0.0)).length() < 1e-6);
        // Turning left by 90° faces -z
        let north = direction(90.0);
        assert!((north - Vec2::new(0.0, -1.0)).length() < 1e-6);
    }

    #[test]
    fn test_towards_inverts_direction() {
        for heading in [0.0, 30.0, 135.0, 270.0, 359.0] {
            let back = towards(direction(heading) * 5.0);
            assert!(shortest_delta(back, heading).abs() < 1e-3, "{heading} -> {back}");
        }
    }

    #[test]
    fn test_towards_just_below_axis_stays_in_range() {
        // A tiny negative angle would wrap to exactly 360 without normalizing
        let z = f32::from_bits(20.0f32.to_bits() + 1) - 20.0;
        let heading = towards(Vec2::new(10.0, z));
        assert!((0.0..360.0).contains(&heading), "{heading}");
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(370.0), 10.0);
        assert_eq!(normalize(-90.0), 270.0);
        assert_eq!(normalize(360.0), 0.0);
        assert!(normalize(-1e-9) < 360.0);
    }

    #[test]
    fn test_shortest_delta_wraps() {
        assert_eq!(shortest_delta(350.0, 10.0), 20.0);
        assert_eq!(shortest_delta(10.0, 350.0), -20.0);
        assert_eq!(shortest_delta(0.0, 180.0), 180.0);
        assert_eq!(shortest_delta(90.0, 45.0), -45.0);
    }
}
