//! Pure animation math shared by the cards, carousel, and glass viewer
//!
//! Per-frame procedural motion is a pure function of elapsed time; the
//! hover scale is a separate spring-interpolated value blended on top by
//! the caller.

use std::f64::consts::FRAC_PI_2;

/// Maximum tilt angle for the interactive cards, degrees.
const MAX_TILT_DEG: f64 = 7.5;

/// Amplitude of the idle floating motion.
const FLOAT_AMPLITUDE: f64 = 0.1;

/// A slider item's position classification relative to the active slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Left,
    Center,
    Right,
}

/// Cyclic role assignment: the active index is centered, the next two
/// items wrap around to the right, everything else sits to the left.
pub fn assign_role(index: usize, active: usize, len: usize) -> Role {
    if len == 0 {
        return Role::Center;
    }
    let offset = (index as i64 - active as i64).rem_euclid(len as i64);
    match offset {
        0 => Role::Center,
        1 | 2 => Role::Right,
        _ => Role::Left,
    }
}

/// Sine-eased tilt from normalized pointer offsets in `[-1, 1]`.
/// Returns `(rotate_x, rotate_y)` in degrees.
pub fn tilt_angles(dx: f64, dy: f64) -> (f64, f64) {
    let rotate_y = (dx * FRAC_PI_2).sin() * MAX_TILT_DEG;
    let rotate_x = (dy * FRAC_PI_2).sin() * MAX_TILT_DEG;
    (rotate_x, rotate_y)
}

/// CSS transform for a card being tilted by the pointer.
pub fn tilt_transform(role: Role, rotate_x: f64, rotate_y: f64) -> String {
    let (yaw_bias, scale) = match role {
        Role::Center => (0.0, 1.00),
        Role::Left => (-15.0, 0.90),
        Role::Right => (15.0, 0.90),
    };
    format!(
        "perspective(1000px) rotateX({rotate_x:.2}deg) rotateY({:.2}deg) scale({scale:.2})",
        rotate_y + yaw_bias
    )
}

/// CSS transform for a card at rest in its role.
pub fn resting_transform(role: Role) -> String {
    match role {
        Role::Center => "perspective(1000px) rotateX(0) rotateY(0) scale(0.95)".to_string(),
        Role::Left => "perspective(1000px) rotateX(0) rotateY(-15deg) scale(0.85)".to_string(),
        Role::Right => "perspective(1000px) rotateX(0) rotateY(15deg) scale(0.85)".to_string(),
    }
}

/// Idle floating offset around the base position at elapsed time `t`
/// (seconds): slow x/z drift, faster vertical bob.
pub fn float_offset(t: f64) -> (f64, f64, f64) {
    (
        (t * 0.5).sin() * FLOAT_AMPLITUDE,
        (t * 2.0).sin() * FLOAT_AMPLITUDE,
        (t * 0.5).cos() * FLOAT_AMPLITUDE,
    )
}

/// Per-frame yaw increment for the glass: slower while hovered.
pub fn yaw_rate(hovered: bool) -> f64 {
    if hovered { 0.015 } else { 0.025 }
}

/// Ease-out cubic.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Mount-in scale: eases from zero to `resting` over `duration` seconds,
/// independent of hover state.
pub fn mount_scale(elapsed: f64, duration: f64, resting: f64) -> f64 {
    resting * ease_out_cubic(elapsed / duration)
}

/// Under-damped spring interpolator for the hover scale.
///
/// Constants match the wobbly preset of the original spring library
/// (tension 180, friction 12): a visible overshoot before settling.
#[derive(Debug, Clone, Copy)]
pub struct Spring {
    value: f64,
    velocity: f64,
    tension: f64,
    friction: f64,
}

impl Spring {
    pub fn wobbly(initial: f64) -> Self {
        Self {
            value: initial,
            velocity: 0.0,
            tension: 180.0,
            friction: 12.0,
        }
    }

    /// Advance by `dt` seconds toward `target`.
    pub fn step(&mut self, target: f64, dt: f64) -> f64 {
        let acceleration = self.tension * (target - self.value) - self.friction * self.velocity;
        self.velocity += acceleration * dt;
        self.value += self.velocity * dt;
        self.value
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_assignment_is_cyclic() {
        // N=7, active=0
        assert_eq!(assign_role(0, 0, 7), Role::Center);
        assert_eq!(assign_role(1, 0, 7), Role::Right);
        assert_eq!(assign_role(2, 0, 7), Role::Right);
        for i in 3..7 {
            assert_eq!(assign_role(i, 0, 7), Role::Left);
        }

        // N=7, active=5: right side wraps around the end.
        assert_eq!(assign_role(5, 5, 7), Role::Center);
        assert_eq!(assign_role(6, 5, 7), Role::Right);
        assert_eq!(assign_role(0, 5, 7), Role::Right);
        for i in 1..5 {
            assert_eq!(assign_role(i, 5, 7), Role::Left);
        }
    }

    #[test]
    fn test_tilt_angles_bounded_and_eased() {
        let (rx, ry) = tilt_angles(1.0, -1.0);
        assert!((ry - 7.5).abs() < 1e-9);
        assert!((rx + 7.5).abs() < 1e-9);

        // Sine easing: half offset tilts more than half the max angle.
        let (_, ry_half) = tilt_angles(0.5, 0.0);
        assert!(ry_half > 7.5 / 2.0);
        assert!(ry_half < 7.5);

        let (rx0, ry0) = tilt_angles(0.0, 0.0);
        assert_eq!((rx0, ry0), (0.0, 0.0));
    }

    #[test]
    fn test_role_transforms() {
        assert_eq!(
            tilt_transform(Role::Center, 0.0, 0.0),
            "perspective(1000px) rotateX(0.00deg) rotateY(0.00deg) scale(1.00)"
        );
        assert_eq!(
            tilt_transform(Role::Left, 2.0, 3.0),
            "perspective(1000px) rotateX(2.00deg) rotateY(-12.00deg) scale(0.90)"
        );
        assert!(resting_transform(Role::Right).contains("rotateY(15deg) scale(0.85)"));
    }

    #[test]
    fn test_float_offset_amplitude() {
        for i in 0..200 {
            let t = i as f64 * 0.1;
            let (x, y, z) = float_offset(t);
            assert!(x.abs() <= FLOAT_AMPLITUDE + 1e-12);
            assert!(y.abs() <= FLOAT_AMPLITUDE + 1e-12);
            assert!(z.abs() <= FLOAT_AMPLITUDE + 1e-12);
        }
        let (x, _, z) = float_offset(0.0);
        assert_eq!(x, 0.0);
        assert!((z - FLOAT_AMPLITUDE).abs() < 1e-12);
    }

    #[test]
    fn test_yaw_slows_on_hover() {
        assert!(yaw_rate(true) < yaw_rate(false));
    }

    #[test]
    fn test_mount_scale_eases_to_resting() {
        assert_eq!(mount_scale(0.0, 0.6, 0.8), 0.0);
        assert!((mount_scale(0.6, 0.6, 0.8) - 0.8).abs() < 1e-12);
        // Past the duration it stays clamped at resting.
        assert!((mount_scale(5.0, 0.6, 0.8) - 0.8).abs() < 1e-12);
        // Ease-out: front-loaded progress.
        assert!(mount_scale(0.3, 0.6, 0.8) > 0.4);
    }

    #[test]
    fn test_spring_converges_with_overshoot() {
        let mut spring = Spring::wobbly(0.80);
        let mut peak: f64 = 0.0;
        for _ in 0..600 {
            peak = peak.max(spring.step(0.82, 1.0 / 60.0));
        }
        // Wobbly preset overshoots the target before settling on it.
        assert!(peak > 0.82);
        assert!((spring.value() - 0.82).abs() < 1e-3);
    }
}
