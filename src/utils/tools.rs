use crate::glm;
use std::ops::{Add, Div, Mul, Sub};

/// Maps numeric ranges.
pub fn map_range<T>(from_range: (T, T), to_range: (T, T), s: T) -> T
where
    T: Sub<Output = T> + Copy + Mul<Output = T> + Div<Output = T> + Add<Output = T>,
{
    to_range.0 + (s - from_range.0) * (to_range.1 - to_range.0) / (from_range.1 - from_range.0)
}

/// Rotates ``point`` by ``angle`` radians around ``center``.
pub fn rotate_about(point: &glm::Vec2, center: &glm::Vec2, angle: f32) -> glm::Vec2 {
    glm::rotate_vec2(&(point - center), angle) + center
}

/// Converts an angle to radians if it is given in degrees.
pub fn to_radians(angle: f32, is_degrees: bool) -> f32 {
    if is_degrees {
        angle.to_radians()
    } else {
        angle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_turn_about_center() {
        let rotated = rotate_about(
            &glm::vec2(2.0, 1.0),
            &glm::vec2(1.0, 1.0),
            std::f32::consts::FRAC_PI_2,
        );
        assert!((rotated - glm::vec2(1.0, 2.0)).norm() < 1e-5);
    }

    #[test]
    fn ranges() {
        assert_eq!(map_range((0.0, 10.0), (0.0, 1.0), 3.0), 0.3);
        assert_eq!(to_radians(180.0, true), std::f32::consts::PI);
        assert_eq!(to_radians(1.5, false), 1.5);
    }
}
