//! Wall collision response
//!
//! Each axis is resolved on its own: a ball past either wall has that
//! velocity component reversed and damped, and is snapped back inside.

/// Result of resolving one axis against its two walls
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisResult {
    pub pos: f32,
    pub vel: f32,
}

/// Resolve one axis of a ball against walls at `0` and `extent`
///
/// On a hit the velocity becomes `-vel * damping` and the position is
/// clamped to `radius` or `extent - radius`, whichever wall was crossed.
pub fn resolve_axis(pos: f32, vel: f32, radius: f32, extent: f32, damping: f32) -> AxisResult {
    let low = radius;
    let high = extent - radius;

    if pos < low {
        AxisResult {
            pos: low,
            vel: -vel * damping,
        }
    } else if pos > high {
        AxisResult {
            pos: high,
            vel: -vel * damping,
        }
    } else {
        AxisResult { pos, vel }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inside_untouched() {
        let result = resolve_axis(50.0, 3.0, 10.0, 320.0, 0.95);
        assert_eq!(result, AxisResult { pos: 50.0, vel: 3.0 });
    }

    #[test]
    fn test_left_wall() {
        let result = resolve_axis(3.0, -4.0, 10.0, 320.0, 0.95);
        assert_eq!(result.pos, 10.0);
        assert!((result.vel - 3.8).abs() < 1e-6);
    }

    #[test]
    fn test_right_wall() {
        let result = resolve_axis(318.0, 2.0, 5.0, 320.0, 0.95);
        assert_eq!(result.pos, 315.0);
        assert!((result.vel + 1.9).abs() < 1e-6);
    }

    #[test]
    fn test_touching_wall_is_not_a_hit() {
        let result = resolve_axis(10.0, -1.0, 10.0, 320.0, 0.95);
        assert_eq!(result, AxisResult { pos: 10.0, vel: -1.0 });
        let result = resolve_axis(310.0, 1.0, 10.0, 320.0, 0.95);
        assert_eq!(result, AxisResult { pos: 310.0, vel: 1.0 });
    }
}
