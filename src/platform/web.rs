//! Browser bindings
//!
//! `WebGame` owns a session and its RNG; the page forwards DOM events to it,
//! calls `tick` from `requestAnimationFrame` and reads geometry back for
//! drawing.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use wasm_bindgen::prelude::*;

use super::input::{Button, InputState};
use crate::sim::{GameSession, TickEvent, autopilot_input, tick};
use crate::tuning::Tuning;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Rim Pong (web) starting...");
}

/// Game instance holding all state
#[wasm_bindgen]
pub struct WebGame {
    session: GameSession,
    input: InputState,
    rng: Pcg32,
    demo: bool,
}

#[wasm_bindgen]
impl WebGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64) -> WebGame {
        Self::build(Tuning::default(), seed)
    }

    /// Create a game from tuning JSON (missing fields use defaults)
    pub fn with_tuning(seed: u64, tuning_json: &str) -> Result<WebGame, JsError> {
        let tuning = Tuning::from_json(tuning_json)?;
        Ok(Self::build(tuning, seed))
    }

    /// "New game": replace the session wholesale
    pub fn new_game(&mut self, seed: u64) {
        self.rng = Pcg32::seed_from_u64(seed);
        self.session = GameSession::new(self.session.tuning, &mut self.rng);
        self.input.release_all();
        log::info!("New game with seed {}", seed);
    }

    /// Advance one frame. Returns whether the game is still running.
    pub fn tick(&mut self) -> bool {
        let input = if self.demo {
            autopilot_input(&self.session)
        } else {
            self.input.sample()
        };

        if let TickEvent::Missed { final_score } = tick(&mut self.session, &input, &mut self.rng)
        {
            self.input.release_all();
            log::info!("Game over, score {}", final_score);
        }
        self.session.is_running()
    }

    pub fn set_demo(&mut self, demo: bool) {
        self.demo = demo;
    }

    pub fn press_left(&mut self) {
        self.input.press(Button::RotateLeft);
    }

    pub fn press_right(&mut self) {
        self.input.press(Button::RotateRight);
    }

    pub fn release_left(&mut self) {
        self.input.release(Button::RotateLeft);
    }

    pub fn release_right(&mut self) {
        self.input.release(Button::RotateRight);
    }

    pub fn release_all(&mut self) {
        self.input.release_all();
    }

    pub fn touch_start(&mut self, x: f32) {
        self.input.touch_start(x);
    }

    pub fn touch_move(&mut self, x: f32) {
        self.input.touch_move(x);
    }

    pub fn touch_end(&mut self) {
        self.input.touch_end();
    }

    pub fn score(&self) -> u32 {
        self.session.score.min(u32::MAX as u64) as u32
    }

    pub fn running(&self) -> bool {
        self.session.is_running()
    }

    pub fn center_x(&self) -> f32 {
        self.session.boundary.center.x
    }

    pub fn center_y(&self) -> f32 {
        self.session.boundary.center.y
    }

    pub fn boundary_radius(&self) -> f32 {
        self.session.boundary.radius
    }

    /// Ball x in canvas coordinates
    pub fn ball_x(&self) -> f32 {
        self.session.ball_screen_pos().x
    }

    /// Ball y in canvas coordinates
    pub fn ball_y(&self) -> f32 {
        self.session.ball_screen_pos().y
    }

    pub fn ball_radius(&self) -> f32 {
        self.session.ball.radius
    }

    pub fn paddle_angle(&self) -> f32 {
        self.session.paddle.angle
    }

    pub fn paddle_length(&self) -> f32 {
        self.session.paddle.length
    }

    /// Paddle arc start, for `ctx.arc(cx, cy, r, start, end)`
    pub fn paddle_start(&self) -> f32 {
        self.session.paddle_arc().theta_start
    }

    pub fn paddle_end(&self) -> f32 {
        self.session.paddle_arc().theta_end
    }

    /// Full session as JSON
    pub fn snapshot_json(&self) -> Result<String, JsError> {
        Ok(self.session.snapshot_json()?)
    }
}

impl WebGame {
    fn build(tuning: Tuning, seed: u64) -> WebGame {
        let mut rng = Pcg32::seed_from_u64(seed);
        let session = GameSession::new(tuning, &mut rng);
        WebGame {
            input: InputState::new(&tuning),
            session,
            rng,
            demo: false,
        }
    }
}
