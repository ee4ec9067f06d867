//! Collision detection and response against the boundary circle
//!
//! The ball only ever touches one surface: the rim. Whether that touch is a
//! deflection or a miss is decided by the paddle arc; this module only
//! answers "is the ball on the rim, and where" and provides the reflection
//! math.

use glam::Vec2;

use crate::{cartesian_to_polar, normalize_angle, polar_to_cartesian};

/// Ball touching the rim
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryContact {
    /// Distance of the ball center from the boundary center
    pub distance: f32,
    /// Angle from the boundary center to the ball (the surface normal axis),
    /// as returned by atan2, in (-π, π]
    pub normal_angle: f32,
}

impl BoundaryContact {
    /// Contact angle normalized to [0, 2π) for arc membership tests
    #[inline]
    pub fn angle(&self) -> f32 {
        normalize_angle(self.normal_angle)
    }
}

/// Check whether a ball at `ball_pos` (relative to the boundary center)
/// has reached the rim.
///
/// Returns `None` while `distance < boundary_radius - ball_radius`.
pub fn boundary_contact(
    ball_pos: Vec2,
    ball_radius: f32,
    boundary_radius: f32,
) -> Option<BoundaryContact> {
    let (distance, normal_angle) = cartesian_to_polar(ball_pos);

    if distance < boundary_radius - ball_radius {
        return None;
    }

    Some(BoundaryContact {
        distance,
        normal_angle,
    })
}

/// Reflect a direction of travel off the rim.
///
/// `incidence` is the pre-collision travel angle and `normal_angle` the
/// angle from the center to the contact point. Equivalent to
/// v' = v - 2(v·n)n on unit vectors.
#[inline]
pub fn reflect_angle(normal_angle: f32, incidence: f32) -> f32 {
    normalize_angle(2.0 * normal_angle - incidence + std::f32::consts::PI)
}

/// Where to put the ball after a deflection: one unit inside the contact
/// threshold so the next tick does not register the same contact again.
#[inline]
pub fn contact_position(normal_angle: f32, ball_radius: f32, boundary_radius: f32) -> Vec2 {
    polar_to_cartesian(boundary_radius - ball_radius - 1.0, normal_angle)
}
