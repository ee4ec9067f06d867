//! Paddle arc geometry
//!
//! The paddle lives on the boundary circle. Its angular extent is derived
//! from its arc length: span = length / boundary_radius, centered on the
//! paddle angle. Both ends are normalized to [0, 2π), so an arc crossing
//! angle 0 ends up with `theta_start > theta_end`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{normalize_angle, polar_to_cartesian};

/// Angular extent covered by the paddle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaddleArc {
    /// Angular center of the paddle (radians, [0, 2π))
    pub center: f32,
    /// Start angle (radians, normalized to [0, 2π))
    pub theta_start: f32,
    /// End angle (radians, normalized to [0, 2π))
    pub theta_end: f32,
}

impl PaddleArc {
    /// Build the arc covered by a paddle of `length` centered at `angle`
    /// on a boundary of `boundary_radius`.
    pub fn new(angle: f32, length: f32, boundary_radius: f32) -> Self {
        let half_span = length / boundary_radius / 2.0;
        Self {
            center: normalize_angle(angle),
            theta_start: normalize_angle(angle - half_span),
            theta_end: normalize_angle(angle + half_span),
        }
    }

    /// True when the arc crosses angle 0
    #[inline]
    pub fn wraps(&self) -> bool {
        self.theta_start >= self.theta_end
    }

    /// Angular span of the arc (handles wraparound)
    pub fn angular_span(&self) -> f32 {
        let mut span = self.theta_end - self.theta_start;
        if span < 0.0 {
            span += std::f32::consts::TAU;
        }
        span
    }

    /// Check if an angle is within the arc's angular extent (ends inclusive)
    pub fn contains_angle(&self, theta: f32) -> bool {
        let theta = normalize_angle(theta);
        let start = self.theta_start;
        let end = self.theta_end;

        if start < end {
            theta >= start && theta <= end
        } else {
            // Wraparound case (e.g., start=2π-0.3, end=0.3)
            theta >= start || theta <= end
        }
    }

    /// Sample points along the arc at `radius`, start to end.
    ///
    /// Positions are relative to the boundary center.
    pub fn sample_points(&self, radius: f32, num_points: usize) -> Vec<Vec2> {
        let span = self.angular_span();

        (0..num_points)
            .map(|i| {
                let t = i as f32 / (num_points - 1).max(1) as f32;
                let theta = self.theta_start + t * span;
                polar_to_cartesian(radius, theta)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    #[test]
    fn test_arc_from_paddle() {
        // 60 units on a 150 radius boundary is a 0.4 rad span
        let arc = PaddleArc::new(FRAC_PI_2, 60.0, 150.0);
        assert!((arc.theta_start - (FRAC_PI_2 - 0.2)).abs() < 1e-5);
        assert!((arc.theta_end - (FRAC_PI_2 + 0.2)).abs() < 1e-5);
        assert!((arc.angular_span() - 0.4).abs() < 1e-5);
        assert!(!arc.wraps());
    }

    #[test]
    fn test_arc_contains_angle_no_wrap() {
        let arc = PaddleArc::new(FRAC_PI_2, 60.0, 150.0);
        assert!(arc.contains_angle(FRAC_PI_2));
        assert!(arc.contains_angle(FRAC_PI_2 + 0.19));
        assert!(arc.contains_angle(FRAC_PI_2 - 0.19));
        assert!(!arc.contains_angle(FRAC_PI_2 + 0.25));
        assert!(!arc.contains_angle(-FRAC_PI_2));
    }

    #[test]
    fn test_arc_contains_angle_wraparound() {
        // Half span of 0.3 rad around angle 0
        let arc = PaddleArc::new(0.0, 0.6 * 150.0, 150.0);
        assert!(arc.wraps());
        assert!((arc.theta_start - (TAU - 0.3)).abs() < 1e-5);
        assert!((arc.theta_end - 0.3).abs() < 1e-5);

        assert!(arc.contains_angle(TAU - 0.1));
        assert!(arc.contains_angle(-0.1));
        assert!(arc.contains_angle(0.0));
        assert!(arc.contains_angle(0.2));
        assert!(!arc.contains_angle(PI));
        assert!(!arc.contains_angle(0.4));
        assert!(!arc.contains_angle(TAU - 0.4));
    }

    #[test]
    fn test_angular_span_wraparound() {
        let arc = PaddleArc::new(0.0, 0.6 * 150.0, 150.0);
        assert!((arc.angular_span() - 0.6).abs() < 1e-4);
    }

    #[test]
    fn test_sample_points_follow_arc() {
        let arc = PaddleArc::new(0.0, 0.6 * 150.0, 150.0);
        let points = arc.sample_points(150.0, 5);
        assert_eq!(points.len(), 5);
        for p in &points {
            assert!((p.length() - 150.0).abs() < 1e-3);
        }
        for p in &points[1..4] {
            assert!(arc.contains_angle(p.y.atan2(p.x)));
        }
        // Middle sample sits on the paddle center
        assert!(points[2].y.abs() < 1e-3);
    }
}
