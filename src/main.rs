//! Rim Pong entry point
//!
//! The web build is driven from JavaScript through `platform::web`. Natively
//! this runs a headless attract-mode game and logs how it went.
//!
//! Usage: `rim-pong [tuning.json] [seed]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use rim_pong::Tuning;
    use rim_pong::sim::{GameSession, TickEvent, autopilot_input, tick};

    /// Ten minutes of play at 60 ticks per second
    const MAX_TICKS: u64 = 60 * 60 * 10;
    const DEFAULT_SEED: u64 = 42;

    env_logger::init();
    log::info!("Rim Pong (native) starting...");

    let mut args = std::env::args().skip(1);

    let tuning = match args.next() {
        Some(path) => match Tuning::load(&path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path);
                tuning
            }
            Err(e) => {
                log::warn!("Using default tuning, {}: {}", path, e);
                Tuning::default()
            }
        },
        None => Tuning::default(),
    };

    let seed = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(seed)) => seed,
        Some(Err(e)) => {
            log::warn!("Bad seed ({}), using {}", e, DEFAULT_SEED);
            DEFAULT_SEED
        }
        None => DEFAULT_SEED,
    };

    let mut rng = Pcg32::seed_from_u64(seed);
    let mut session = GameSession::new(tuning, &mut rng);
    log::info!("Seed {}, tuning {:?}", seed, tuning);

    while session.is_running() && session.time_ticks < MAX_TICKS {
        let input = autopilot_input(&session);
        if let TickEvent::Deflected { score, .. } = tick(&mut session, &input, &mut rng) {
            if score % 25 == 0 {
                log::info!(
                    "Score {} at tick {}, paddle length {}",
                    score,
                    session.time_ticks,
                    session.paddle.length
                );
            }
        }
    }

    if session.is_running() {
        log::info!("Tick limit reached");
    }
    println!(
        "Score: {} ({} ticks, {})",
        session.score,
        session.time_ticks,
        if session.is_running() { "still running" } else { "game over" }
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::wasm_start, this is just to satisfy the compiler
}
