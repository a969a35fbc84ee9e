//! Deadline Runner entry point
//!
//! The native build is a headless host: it plays one autopilot run at a fixed
//! frame rate and prints the game-over summary as JSON. The browser build is
//! driven through `platform::web::WebGame` instead.
//!
//! Usage: `deadline-runner [desktop|mobile] [seed]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use deadline_runner::sim::autopilot;
    use deadline_runner::sim::rng::{runtime_rng, seeded_rng};
    use deadline_runner::sim::{GameEvent, GamePhase};
    use deadline_runner::{DeviceClass, Session, Tuning};

    /// Host frame length (60 Hz)
    const FRAME_MS: f32 = 1000.0 / 60.0;
    /// Give up after ten minutes of simulated play
    const MAX_FRAMES: u32 = 60 * 60 * 10;

    env_logger::init();

    let mut args = std::env::args().skip(1);
    let device = match args.next() {
        Some(arg) => DeviceClass::from_str(&arg).unwrap_or_else(|| {
            log::warn!("Unknown device class '{}', using desktop", arg);
            DeviceClass::Desktop
        }),
        None => DeviceClass::Desktop,
    };
    let rng = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(seed)) => {
            log::info!("Seeded run: {}", seed);
            seeded_rng(seed)
        }
        Some(Err(e)) => {
            log::warn!("Invalid seed ({}), using a random one", e);
            runtime_rng()
        }
        None => runtime_rng(),
    };

    log::info!("Deadline Runner (native) starting...");
    let mut session = Session::with_rng(Tuning::for_device(device), rng);
    session.start_game();

    let mut frames = 0;
    while session.phase() == GamePhase::Running && frames < MAX_FRAMES {
        if autopilot::should_jump(session.state()) {
            session.jump();
        }
        session.tick(FRAME_MS);
        frames += 1;

        for event in session.drain_events() {
            match event {
                GameEvent::GameOver(summary) => match serde_json::to_string_pretty(&summary) {
                    Ok(json) => println!("{}", json),
                    Err(e) => log::error!("Failed to serialize summary: {}", e),
                },
                GameEvent::SprintStarted | GameEvent::CategoryUnlocked { .. } => {
                    log::info!("{:?} at {}m", event, session.snapshot().distance)
                }
                other => log::debug!("{:?}", other),
            }
        }
    }

    if session.phase() == GamePhase::Running {
        log::info!("Stopped after {} frames", frames);
        match serde_json::to_string_pretty(session.snapshot()) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Failed to serialize snapshot: {}", e),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::WebGame, this is just to satisfy the compiler
}
