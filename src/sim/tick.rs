//! Single-step simulation tick
//!
//! Core game loop that advances a session by exactly one step. The driver
//! calls [`tick`] once per frame and renders the session afterwards.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::{BoundaryContact, boundary_contact, contact_position, reflect_angle};
use super::state::{GamePhase, GameSession, Paddle};
use crate::{cartesian_to_polar, normalize_angle};

/// Input intents for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TickInput {
    /// Rotate button held: angle increases
    pub rotate_clockwise: bool,
    /// Rotate button held: angle decreases
    pub rotate_counter_clockwise: bool,
    /// One-shot rotation from a drag gesture (radians, added as-is)
    pub swipe_delta: Option<f32>,
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickEvent {
    /// Session already ended; nothing changed
    Idle,
    /// Ball still travelling inside the arena
    Airborne,
    /// Ball bounced off the paddle
    Deflected { score: u64, paddle_length: f32 },
    /// Ball reached the rim outside the paddle; the session is over
    Missed { final_score: u64 },
}

/// Advance the session by one tick
pub fn tick<R: Rng + ?Sized>(
    session: &mut GameSession,
    input: &TickInput,
    rng: &mut R,
) -> TickEvent {
    if !session.is_running() {
        return TickEvent::Idle;
    }

    session.time_ticks += 1;

    rotate_paddle(&mut session.paddle, input);

    let ball = &mut session.ball;
    ball.pos += ball.velocity();

    let Some(contact) = boundary_contact(ball.pos, ball.radius, session.boundary.radius) else {
        return TickEvent::Airborne;
    };

    if session.paddle_arc().contains_angle(contact.angle()) {
        deflect(session, &contact, rng)
    } else {
        session.phase = GamePhase::Ended;
        log::info!(
            "Missed at {:.3} rad after {} ticks, final score {}",
            contact.angle(),
            session.time_ticks,
            session.score
        );
        TickEvent::Missed {
            final_score: session.score,
        }
    }
}

/// Apply held buttons and any swipe delta. Both channels stack.
fn rotate_paddle(paddle: &mut Paddle, input: &TickInput) {
    let mut delta = 0.0;
    if input.rotate_counter_clockwise {
        delta -= paddle.angular_speed;
    }
    if input.rotate_clockwise {
        delta += paddle.angular_speed;
    }
    if let Some(swipe) = input.swipe_delta {
        delta += swipe;
    }
    paddle.rotate(delta);
}

fn deflect<R: Rng + ?Sized>(
    session: &mut GameSession,
    contact: &BoundaryContact,
    rng: &mut R,
) -> TickEvent {
    let tuning = session.tuning;
    let ball = &mut session.ball;

    let incidence = ball.angle;
    ball.angle = reflect_angle(contact.normal_angle, incidence);
    ball.pos = contact_position(contact.normal_angle, ball.radius, session.boundary.radius);

    if tuning.deflection_speed_gain > 1.0 {
        ball.speed = (ball.speed * tuning.deflection_speed_gain).min(tuning.max_ball_speed);
    }

    session.score += 1;

    // Cursed paddle: coin flip between shrinking and growing
    let step = tuning.paddle_length_step;
    let delta = if rng.random_bool(0.5) { -step } else { step };
    session
        .paddle
        .resize(delta, tuning.min_paddle_length, tuning.max_paddle_length);

    log::debug!(
        "Deflect #{} at {:.3} rad, paddle length {}",
        session.score,
        contact.angle(),
        session.paddle.length
    );

    TickEvent::Deflected {
        score: session.score,
        paddle_length: session.paddle.length,
    }
}

/// Demo/attract mode controller.
///
/// Predicts where the ball will reach the rim and steers the paddle there
/// through the swipe channel, which lets it stop exactly on target instead
/// of overshooting by a whole button step.
pub fn autopilot_input(session: &GameSession) -> TickInput {
    let ball = &session.ball;
    let reach = session.boundary.radius - ball.radius;
    let vel = ball.velocity();

    let target = if vel.length_squared() > f32::EPSILON {
        // Ray/circle intersection: |pos + t*vel| = reach, far root
        let a = vel.dot(vel);
        let b = 2.0 * ball.pos.dot(vel);
        let c = ball.pos.dot(ball.pos) - reach * reach;
        let disc = (b * b - 4.0 * a * c).max(0.0);
        let t = ((-b + disc.sqrt()) / (2.0 * a)).max(0.0);
        cartesian_to_polar(ball.pos + vel * t).1
    } else if ball.pos.length_squared() > f32::EPSILON {
        cartesian_to_polar(ball.pos).1
    } else {
        return TickInput::default();
    };

    let delta = shortest_arc(session.paddle.angle, target);
    let max_step = session.paddle.angular_speed;
    if delta.abs() < 1e-4 {
        return TickInput::default();
    }

    TickInput {
        swipe_delta: Some(delta.clamp(-max_step, max_step)),
        ..Default::default()
    }
}

/// Signed rotation from `from` to `to`, in [-π, π)
fn shortest_arc(from: f32, to: f32) -> f32 {
    use std::f32::consts::PI;
    normalize_angle(to - from + PI) - PI
}
