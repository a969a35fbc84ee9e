//! Browser bindings
//!
//! The page owns exactly one `WebGame` and drives it from its
//! `requestAnimationFrame` loop. Snapshots and events cross the boundary as
//! JSON; audio and score storage stay on the JS side and react to events.

use wasm_bindgen::prelude::*;

use crate::session::Session;
use crate::sim::rng::seeded_rng;
use crate::tuning::{DeviceClass, Tuning};

/// Game instance held by the page
#[wasm_bindgen]
pub struct WebGame {
    session: Session,
    /// Logger and panic hook installed
    initialized: bool,
}

#[wasm_bindgen]
impl WebGame {
    /// Create a game; `tuning_json` may override any subset of the balance
    #[wasm_bindgen(constructor)]
    pub fn new(device: &str, tuning_json: Option<String>) -> WebGame {
        let mut tuning = match tuning_json {
            Some(json) => Tuning::from_json(&json),
            None => Tuning::default(),
        };
        tuning.device = DeviceClass::from_str(device).unwrap_or_default();

        let seed = js_sys::Date::now() as u64;
        WebGame {
            session: Session::with_rng(tuning, seeded_rng(seed)),
            initialized: false,
        }
    }

    /// Install logging and the panic hook; safe to call more than once
    pub fn init(&mut self) -> bool {
        if self.initialized {
            return false;
        }
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            log::warn!("Logger already installed");
        }
        self.initialized = true;
        log::info!(
            "Deadline Runner ready ({})",
            self.session.tuning().device.as_str()
        );
        true
    }

    pub fn start(&mut self) -> bool {
        self.session.start_game()
    }

    pub fn reset(&mut self) {
        self.session.reset_game();
    }

    pub fn jump(&mut self) -> bool {
        self.session.jump()
    }

    pub fn tick(&mut self, delta_ms: f32) {
        self.session.tick(delta_ms);
    }

    /// Current snapshot as JSON
    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(self.session.snapshot()).unwrap_or_else(|e| {
            log::warn!("Snapshot serialization failed: {}", e);
            "{}".to_string()
        })
    }

    /// Drain pending events as a JSON array
    pub fn drain_events_json(&mut self) -> String {
        let events = self.session.drain_events();
        serde_json::to_string(&events).unwrap_or_else(|e| {
            log::warn!("Event serialization failed: {}", e);
            "[]".to_string()
        })
    }
}
