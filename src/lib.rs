//! Rim Pong - A circular arena paddle game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball, paddle arc, collisions, scoring)
//! - `tuning`: Data-driven game balance
//! - `platform`: Input translation and browser bindings

pub mod platform;
pub mod sim;
pub mod tuning;

pub use tuning::{Tuning, TuningError};

use glam::Vec2;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Arena boundary radius
    pub const BOUNDARY_RADIUS: f32 = 150.0;
    /// Canvas dimensions; the boundary is centered on the canvas
    pub const CANVAS_WIDTH: f32 = 400.0;
    pub const CANVAS_HEIGHT: f32 = 400.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Units per tick
    pub const BALL_START_SPEED: f32 = 3.0;
    /// Upper bound when deflections speed the ball up
    pub const BALL_MAX_SPEED: f32 = 12.0;
    /// Speed multiplier per deflection (1.0 = constant speed)
    pub const DEFLECTION_SPEED_GAIN: f32 = 1.0;

    /// Paddle defaults (lengths are arc lengths along the boundary)
    pub const PADDLE_START_ANGLE: f32 = std::f32::consts::FRAC_PI_2;
    pub const PADDLE_INITIAL_LENGTH: f32 = 60.0;
    pub const PADDLE_MIN_LENGTH: f32 = 15.0;
    pub const PADDLE_MAX_LENGTH: f32 = 150.0;
    /// Length added or removed on every deflection
    pub const PADDLE_LENGTH_STEP: f32 = 5.0;
    /// Radians per tick while a rotate button is held
    pub const PADDLE_ANGULAR_SPEED: f32 = 0.09;

    /// Horizontal drag (pixels) needed before a swipe rotates the paddle
    pub const SWIPE_SENSITIVITY: f32 = 10.0;
    /// Swipe rotation relative to button rotation
    pub const SWIPE_SPEED_MULTIPLIER: f32 = 2.0;
}

/// Normalize an angle to [0, 2π)
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    use std::f32::consts::TAU;
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid rounds tiny negative inputs up to exactly TAU
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, theta)
#[inline]
pub fn cartesian_to_polar(pos: Vec2) -> (f32, f32) {
    (pos.length(), pos.y.atan2(pos.x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{PI, TAU};

    #[test]
    fn test_normalize_angle() {
        assert_eq!(normalize_angle(0.0), 0.0);
        assert!((normalize_angle(-0.3) - (TAU - 0.3)).abs() < 1e-5);
        assert!((normalize_angle(3.0 * PI) - PI).abs() < 1e-5);
        assert_eq!(normalize_angle(TAU), 0.0);
        assert!(normalize_angle(-1e-9) < TAU);
    }

    #[test]
    fn test_polar_roundtrip() {
        let p = polar_to_cartesian(100.0, PI / 3.0);
        let (r, theta) = cartesian_to_polar(p);
        assert!((r - 100.0).abs() < 1e-3);
        assert!((theta - PI / 3.0).abs() < 1e-5);
    }
}
