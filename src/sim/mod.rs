//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per tick, no wall clock
//! - Randomness only through the caller's RNG
//! - No rendering or platform dependencies

pub mod arc;
pub mod collision;
pub mod state;
pub mod tick;

pub use arc::PaddleArc;
pub use collision::{BoundaryContact, boundary_contact, contact_position, reflect_angle};
pub use state::{Ball, Boundary, GamePhase, GameSession, Paddle, create_initial_state};
pub use tick::{TickEvent, TickInput, autopilot_input, tick};
