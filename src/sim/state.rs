//! Game state and core simulation types
//!
//! A `GameSession` is the whole game: one ball, one paddle, the boundary and
//! the score. It is replaced, never reused, when a new game starts.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::arc::PaddleArc;
use crate::consts::PADDLE_START_ANGLE;
use crate::tuning::Tuning;
use crate::{normalize_angle, polar_to_cartesian};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball in play, ticks advance the simulation
    #[default]
    Running,
    /// Ball missed the paddle; only a new session leaves this phase
    Ended,
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Position relative to the boundary center
    pub pos: Vec2,
    /// Direction of travel (radians)
    pub angle: f32,
    /// Distance travelled per tick
    pub speed: f32,
    pub radius: f32,
}

impl Ball {
    /// A ball at the center heading in a uniformly random direction
    pub fn spawn<R: Rng + ?Sized>(radius: f32, speed: f32, rng: &mut R) -> Self {
        Self {
            pos: Vec2::ZERO,
            angle: random_angle(rng),
            speed,
            radius,
        }
    }

    /// Velocity vector for this tick
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        polar_to_cartesian(self.speed, self.angle)
    }
}

/// The player's paddle, an arc riding on the boundary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Angular center of the paddle (radians, [0, 2π))
    pub angle: f32,
    /// Arc length along the boundary
    pub length: f32,
    /// Rotation per tick while a button is held (radians)
    pub angular_speed: f32,
}

impl Paddle {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            angle: PADDLE_START_ANGLE,
            length: tuning.initial_paddle_length,
            angular_speed: tuning.paddle_angular_speed,
        }
    }

    /// Rotate by `delta` radians, keeping the angle in [0, 2π)
    pub fn rotate(&mut self, delta: f32) {
        self.angle = normalize_angle(self.angle + delta);
    }

    /// Grow (or shrink, for negative `delta`) and clamp to [min, max]
    pub fn resize(&mut self, delta: f32, min: f32, max: f32) {
        self.length = (self.length + delta).clamp(min, max);
    }

    /// Get the paddle's angular extent on a boundary of `boundary_radius`
    pub fn as_arc(&self, boundary_radius: f32) -> PaddleArc {
        PaddleArc::new(self.angle, self.length, boundary_radius)
    }
}

/// The arena rim. Fixed for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Boundary {
    /// Canvas-space center (only used for screen conversion)
    pub center: Vec2,
    pub radius: f32,
}

impl Boundary {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            center: Vec2::new(tuning.canvas_width / 2.0, tuning.canvas_height / 2.0),
            radius: tuning.boundary_radius,
        }
    }

    /// Convert a center-relative position to canvas coordinates
    #[inline]
    pub fn to_screen(&self, pos: Vec2) -> Vec2 {
        self.center + pos
    }
}

/// Complete game state (deterministic given the caller's RNG, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    /// Balance values this session was created with
    pub tuning: Tuning,
    pub boundary: Boundary,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Successful deflections
    pub score: u64,
    pub phase: GamePhase,
    /// Ticks simulated while running
    pub time_ticks: u64,
}

impl GameSession {
    /// Create a fresh session: ball centered with a random heading, paddle
    /// at π/2 with its initial length, score 0, running.
    pub fn new<R: Rng + ?Sized>(tuning: Tuning, rng: &mut R) -> Self {
        let ball = Ball::spawn(tuning.ball_radius, tuning.ball_start_speed, rng);
        log::debug!("New session, ball heading {:.3} rad", ball.angle);

        Self {
            boundary: Boundary::new(&tuning),
            paddle: Paddle::new(&tuning),
            ball,
            score: 0,
            phase: GamePhase::Running,
            time_ticks: 0,
            tuning,
        }
    }

    /// Respawn the ball at the center with a new random heading and the
    /// starting speed. Paddle and score are left alone.
    pub fn reset_ball<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.ball = Ball::spawn(self.tuning.ball_radius, self.tuning.ball_start_speed, rng);
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Current angular extent of the paddle
    pub fn paddle_arc(&self) -> PaddleArc {
        self.paddle.as_arc(self.boundary.radius)
    }

    /// Ball position in canvas coordinates
    pub fn ball_screen_pos(&self) -> Vec2 {
        self.boundary.to_screen(self.ball.pos)
    }

    /// JSON snapshot for renderers living outside Rust
    pub fn snapshot_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Start a new game. Equivalent to [`GameSession::new`].
pub fn create_initial_state<R: Rng + ?Sized>(tuning: Tuning, rng: &mut R) -> GameSession {
    GameSession::new(tuning, rng)
}

fn random_angle<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    normalize_angle(rng.random_range(0.0..std::f32::consts::TAU))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use std::f32::consts::{FRAC_PI_2, TAU};

    #[test]
    fn test_initial_state() {
        let mut rng = Pcg32::seed_from_u64(12345);
        let tuning = Tuning::default();
        let session = create_initial_state(tuning, &mut rng);

        assert_eq!(session.score, 0);
        assert!(session.is_running());
        assert_eq!(session.time_ticks, 0);
        assert_eq!(session.paddle.length, tuning.initial_paddle_length);
        assert!((session.paddle.angle - FRAC_PI_2).abs() < 1e-6);
        assert_eq!(session.ball.pos, Vec2::ZERO);
        assert_eq!(session.ball.speed, tuning.ball_start_speed);
        assert_eq!(session.ball.radius, tuning.ball_radius);
        assert!((0.0..TAU).contains(&session.ball.angle));
    }

    #[test]
    fn test_same_seed_same_heading() {
        let a = GameSession::new(Tuning::default(), &mut Pcg32::seed_from_u64(7));
        let b = GameSession::new(Tuning::default(), &mut Pcg32::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_reset_ball_keeps_paddle_and_score() {
        let mut rng = Pcg32::seed_from_u64(99);
        let mut session = GameSession::new(Tuning::default(), &mut rng);
        session.score = 12;
        session.paddle.length = 90.0;
        session.paddle.angle = 1.0;
        session.ball.pos = Vec2::new(40.0, -20.0);
        session.ball.speed = 8.0;

        session.reset_ball(&mut rng);

        assert_eq!(session.score, 12);
        assert_eq!(session.paddle.length, 90.0);
        assert_eq!(session.paddle.angle, 1.0);
        assert_eq!(session.ball.pos, Vec2::ZERO);
        assert_eq!(session.ball.speed, session.tuning.ball_start_speed);
    }

    #[test]
    fn test_random_headings_cover_circle() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut quadrants = [false; 4];
        for _ in 0..200 {
            let ball = Ball::spawn(10.0, 3.0, &mut rng);
            assert!((0.0..TAU).contains(&ball.angle));
            quadrants[(ball.angle / FRAC_PI_2) as usize % 4] = true;
        }
        assert!(quadrants.iter().all(|q| *q));
    }

    #[test]
    fn test_paddle_rotate_wraps() {
        let mut paddle = Paddle::new(&Tuning::default());
        paddle.angle = 0.05;
        paddle.rotate(-0.09);
        assert!((paddle.angle - (TAU - 0.04)).abs() < 1e-5);
        paddle.rotate(0.09);
        assert!((paddle.angle - 0.05).abs() < 1e-4);
    }

    #[test]
    fn test_paddle_resize_clamps() {
        let mut paddle = Paddle::new(&Tuning::default());
        paddle.length = 17.0;
        paddle.resize(-5.0, 15.0, 150.0);
        assert_eq!(paddle.length, 15.0);
        paddle.length = 148.0;
        paddle.resize(5.0, 15.0, 150.0);
        assert_eq!(paddle.length, 150.0);
    }

    #[test]
    fn test_screen_conversion() {
        let session = GameSession::new(Tuning::default(), &mut Pcg32::seed_from_u64(3));
        assert_eq!(session.ball_screen_pos(), Vec2::new(200.0, 200.0));
    }

    #[test]
    fn test_snapshot_json() {
        let session = GameSession::new(Tuning::default(), &mut Pcg32::seed_from_u64(3));
        let json = session.snapshot_json().unwrap();
        let back: GameSession = serde_json::from_str(&json).unwrap();
        assert_eq!(back.score, 0);
        assert_eq!(back.phase, GamePhase::Running);
        assert_eq!(back.paddle, session.paddle);
    }
}
