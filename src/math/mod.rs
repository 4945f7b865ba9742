//! # Math Helpers
//!
//! Small interpolation utilities shared by the tick engines. Everything
//! here is stateless; per-gesture state lives on the controller.

use cgmath::{InnerSpace, Vector3};

/// Distance below which interpolation snaps to the goal instead of
/// producing denormal-sized steps.
const SNAP_EPSILON_SQ: f32 = 1.0e-8;

/// Framerate-aware interpolation of a position toward a goal.
///
/// Moves `current` toward `target` by `dt * speed` of the remaining
/// distance, clamped so a large timestep never overshoots. A speed of
/// zero or less disables smoothing and returns the goal directly.
///
/// Used by the translate engine to soften pointer jitter at the cost of
/// the target trailing the cursor by a tick.
pub fn vinterp_to(
    current: Vector3<f32>,
    target: Vector3<f32>,
    dt: f32,
    speed: f32,
) -> Vector3<f32> {
    if speed <= 0.0 {
        return target;
    }

    let delta = target - current;
    if delta.magnitude2() < SNAP_EPSILON_SQ {
        return target;
    }

    let step = (dt * speed).clamp(0.0, 1.0);
    current + delta * step
}

/// Planar pointer displacement magnitude between two 2D samples.
pub fn planar_distance(ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    (bx - ax).hypot(by - ay)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector3;

    #[test]
    fn vinterp_moves_fractionally_toward_target() {
        let current = Vector3::new(0.0, 0.0, 0.0);
        let target = Vector3::new(10.0, 0.0, 0.0);

        // dt * speed = 0.25, so a quarter of the distance per step.
        let next = vinterp_to(current, target, 0.01, 25.0);
        assert!((next.x - 2.5).abs() < 1.0e-5);
        assert_eq!(next.y, 0.0);
        assert_eq!(next.z, 0.0);
    }

    #[test]
    fn vinterp_never_overshoots() {
        let current = Vector3::new(0.0, 0.0, 0.0);
        let target = Vector3::new(1.0, 2.0, 3.0);

        // dt * speed far above 1.0 clamps to exactly the goal.
        let next = vinterp_to(current, target, 1.0, 100.0);
        assert!((next - target).magnitude() < 1.0e-6);
    }

    #[test]
    fn vinterp_zero_speed_snaps_to_target() {
        let current = Vector3::new(5.0, 5.0, 5.0);
        let target = Vector3::new(1.0, 1.0, 1.0);
        assert_eq!(vinterp_to(current, target, 0.017, 0.0), target);
    }

    #[test]
    fn vinterp_at_target_is_stable() {
        let at = Vector3::new(3.0, -2.0, 1.0);
        assert_eq!(vinterp_to(at, at, 0.017, 25.0), at);
    }

    #[test]
    fn planar_distance_is_symmetric() {
        let d = planar_distance(100.0, 100.0, 103.0, 104.0);
        assert!((d - 5.0).abs() < 1.0e-5);
        assert_eq!(d, planar_distance(103.0, 104.0, 100.0, 100.0));
    }
}
