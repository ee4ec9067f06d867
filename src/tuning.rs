//! Data-driven game balance
//!
//! Every number the simulation uses lives in [`Tuning`]. Defaults come from
//! [`crate::consts`]; drivers may override them from a JSON file, where any
//! missing field keeps its default.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors from loading or validating a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Game balance values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Arena rim radius
    pub boundary_radius: f32,
    /// Canvas size; the arena is drawn at its center
    pub canvas_width: f32,
    pub canvas_height: f32,

    pub ball_radius: f32,
    /// Ball speed on every (re)spawn, units per tick
    pub ball_start_speed: f32,
    /// Ceiling for `deflection_speed_gain`
    pub max_ball_speed: f32,
    /// Speed multiplier applied on each deflection (1.0 = off)
    pub deflection_speed_gain: f32,

    pub initial_paddle_length: f32,
    pub min_paddle_length: f32,
    pub max_paddle_length: f32,
    /// Length gained or lost per deflection
    pub paddle_length_step: f32,
    /// Radians per tick while a rotate button is held
    pub paddle_angular_speed: f32,

    /// Drag distance (pixels) before a swipe registers
    pub swipe_sensitivity: f32,
    /// Swipe rotation as a multiple of `paddle_angular_speed`
    pub swipe_speed_multiplier: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            boundary_radius: BOUNDARY_RADIUS,
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,

            ball_radius: BALL_RADIUS,
            ball_start_speed: BALL_START_SPEED,
            max_ball_speed: BALL_MAX_SPEED,
            deflection_speed_gain: DEFLECTION_SPEED_GAIN,

            initial_paddle_length: PADDLE_INITIAL_LENGTH,
            min_paddle_length: PADDLE_MIN_LENGTH,
            max_paddle_length: PADDLE_MAX_LENGTH,
            paddle_length_step: PADDLE_LENGTH_STEP,
            paddle_angular_speed: PADDLE_ANGULAR_SPEED,

            swipe_sensitivity: SWIPE_SENSITIVITY,
            swipe_speed_multiplier: SWIPE_SPEED_MULTIPLIER,
        }
    }
}

fn invalid(field: &'static str, reason: &'static str) -> TuningError {
    TuningError::Invalid { field, reason }
}

fn positive(field: &'static str, value: f32) -> Result<(), TuningError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(invalid(field, "must be finite and > 0"));
    }
    Ok(())
}

impl Tuning {
    /// Check that the values describe a playable arena
    pub fn validate(&self) -> Result<(), TuningError> {
        positive("boundary_radius", self.boundary_radius)?;
        positive("canvas_width", self.canvas_width)?;
        positive("canvas_height", self.canvas_height)?;
        positive("ball_radius", self.ball_radius)?;
        positive("ball_start_speed", self.ball_start_speed)?;
        positive("max_ball_speed", self.max_ball_speed)?;
        positive("min_paddle_length", self.min_paddle_length)?;
        positive("paddle_angular_speed", self.paddle_angular_speed)?;
        positive("swipe_speed_multiplier", self.swipe_speed_multiplier)?;

        if self.ball_radius + 1.0 >= self.boundary_radius {
            return Err(invalid("ball_radius", "ball must fit inside the boundary"));
        }
        if !self.max_paddle_length.is_finite() || self.max_paddle_length < self.min_paddle_length
        {
            return Err(invalid("max_paddle_length", "must be >= min_paddle_length"));
        }
        if self.max_paddle_length >= std::f32::consts::TAU * self.boundary_radius {
            return Err(invalid(
                "max_paddle_length",
                "must be shorter than the boundary circumference",
            ));
        }
        if !(self.min_paddle_length..=self.max_paddle_length).contains(&self.initial_paddle_length)
        {
            return Err(invalid(
                "initial_paddle_length",
                "must be within [min_paddle_length, max_paddle_length]",
            ));
        }
        if !self.paddle_length_step.is_finite() || self.paddle_length_step < 0.0 {
            return Err(invalid("paddle_length_step", "must be finite and >= 0"));
        }
        if !self.deflection_speed_gain.is_finite() || self.deflection_speed_gain < 1.0 {
            return Err(invalid("deflection_speed_gain", "must be finite and >= 1"));
        }
        if self.max_ball_speed < self.ball_start_speed {
            return Err(invalid("max_ball_speed", "must be >= ball_start_speed"));
        }
        if !self.swipe_sensitivity.is_finite() || self.swipe_sensitivity < 0.0 {
            return Err(invalid("swipe_sensitivity", "must be finite and >= 0"));
        }
        Ok(())
    }

    /// Parse and validate tuning JSON
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Rotation applied by one registered swipe step (radians)
    #[inline]
    pub fn swipe_step(&self) -> f32 {
        self.paddle_angular_speed * self.swipe_speed_multiplier
    }
}
