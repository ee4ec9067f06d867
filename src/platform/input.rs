//! Input translation
//!
//! Browser-style events (press/release on the rotate buttons, touch drags on
//! the canvas) are folded into per-tick [`TickInput`] intents. The driver
//! forwards events as they arrive and calls [`InputState::sample`] once per
//! tick.

use crate::sim::TickInput;
use crate::tuning::Tuning;

/// On-screen rotate buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    RotateLeft,
    RotateRight,
}

/// Turns horizontal drags into discrete rotation steps
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    /// X of the last processed touch point, `None` when no drag is active
    last_x: Option<f32>,
    /// Rotation waiting for the next tick
    pending: Option<f32>,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f32) {
        self.last_x = Some(x);
    }

    /// Process a touch move. Dragging right past `sensitivity` rotates
    /// counter-clockwise by `step`, dragging left rotates clockwise.
    pub fn moved(&mut self, x: f32, sensitivity: f32, step: f32) {
        let Some(last_x) = self.last_x else {
            return;
        };

        let dx = x - last_x;
        if dx > sensitivity {
            self.pending = Some(self.pending.unwrap_or(0.0) - step);
        } else if dx < -sensitivity {
            self.pending = Some(self.pending.unwrap_or(0.0) + step);
        }
        self.last_x = Some(x);
    }

    pub fn end(&mut self) {
        self.last_x = None;
    }

    pub fn is_active(&self) -> bool {
        self.last_x.is_some()
    }

    /// Take the rotation accumulated since the last tick
    pub fn take(&mut self) -> Option<f32> {
        self.pending.take()
    }
}

/// Held buttons plus the swipe tracker
#[derive(Debug, Clone)]
pub struct InputState {
    rotate_clockwise: bool,
    rotate_counter_clockwise: bool,
    swipe: SwipeTracker,
    swipe_sensitivity: f32,
    swipe_step: f32,
}

impl InputState {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            rotate_clockwise: false,
            rotate_counter_clockwise: false,
            swipe: SwipeTracker::default(),
            swipe_sensitivity: tuning.swipe_sensitivity,
            swipe_step: tuning.swipe_step(),
        }
    }

    /// The buttons are wired crossed: "left" spins the paddle clockwise on
    /// screen (angle increasing with y pointing down), "right" the other way.
    pub fn press(&mut self, button: Button) {
        match button {
            Button::RotateLeft => self.rotate_clockwise = true,
            Button::RotateRight => self.rotate_counter_clockwise = true,
        }
    }

    pub fn release(&mut self, button: Button) {
        match button {
            Button::RotateLeft => self.rotate_clockwise = false,
            Button::RotateRight => self.rotate_counter_clockwise = false,
        }
    }

    /// Global pointer release, or the game just ended
    pub fn release_all(&mut self) {
        self.rotate_clockwise = false;
        self.rotate_counter_clockwise = false;
    }

    pub fn touch_start(&mut self, x: f32) {
        self.swipe.begin(x);
    }

    pub fn touch_move(&mut self, x: f32) {
        self.swipe.moved(x, self.swipe_sensitivity, self.swipe_step);
    }

    pub fn touch_end(&mut self) {
        self.swipe.end();
    }

    /// Intents for this tick. Consumes any pending swipe rotation.
    pub fn sample(&mut self) -> TickInput {
        TickInput {
            rotate_clockwise: self.rotate_clockwise,
            rotate_counter_clockwise: self.rotate_counter_clockwise,
            swipe_delta: self.swipe.take(),
        }
    }
}
