//! Transient text bubbles driven by game events
//!
//! Bounded and insertion-ordered: posting past the cap evicts the oldest
//! bubble. Regular posts are rate limited by a shared cooldown; priority
//! posts (sprint, combo milestones) skip it.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::rng::RandomSource;
use crate::tuning::Tuning;

pub const SPRINT_TEXT: &str = "SPRINT! Nothing can stop you!";

pub const HIT_LINES: [&str; 4] = [
    "Ouch! A grinch got you!",
    "Grinched!",
    "That one stung...",
    "Watch out!",
];

pub const COLLECT_LINES: [&str; 4] = ["+Energy", "An elf joins in!", "Nice grab!", "Keep going!"];

pub const SPECIAL_LINES: [&str; 3] = ["Golden elf! Big boost!", "Jackpot!", "Full of cheer!"];

/// Bubble text for a combo milestone
pub fn milestone_text(combo: u32) -> String {
    format!("{combo} combo!")
}

/// Pick a flavor line
pub fn pick_line<R: RandomSource>(rng: &mut R, lines: &[&'static str]) -> &'static str {
    *rng.pick(lines)
}

/// A single bubble
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackMessage {
    pub text: String,
    pub remaining_ms: f32,
    pub priority: bool,
}

/// Bounded bubble queue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackQueue {
    messages: VecDeque<FeedbackMessage>,
    /// Time until the next regular post is accepted (ms)
    cooldown_ms: f32,
    max_bubbles: usize,
    cooldown_duration_ms: f32,
    display_ms: f32,
}

impl FeedbackQueue {
    pub fn new(max_bubbles: usize, cooldown_duration_ms: f32, display_ms: f32) -> Self {
        Self {
            messages: VecDeque::with_capacity(max_bubbles),
            cooldown_ms: 0.0,
            max_bubbles,
            cooldown_duration_ms,
            display_ms,
        }
    }

    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self::new(
            tuning.feedback_max_bubbles,
            tuning.feedback_cooldown_ms,
            tuning.feedback_duration_ms,
        )
    }

    /// Queue a bubble; returns false if it was rate limited
    pub fn post(&mut self, text: &str, priority: bool) -> bool {
        if self.max_bubbles == 0 {
            return false;
        }
        if !priority && self.cooldown_ms > 0.0 {
            return false;
        }

        while self.messages.len() >= self.max_bubbles {
            self.messages.pop_front();
        }
        self.messages.push_back(FeedbackMessage {
            text: text.to_string(),
            remaining_ms: self.display_ms,
            priority,
        });
        self.cooldown_ms = self.cooldown_duration_ms;
        true
    }

    /// Age bubbles and the cooldown; expired bubbles are dropped
    pub fn update(&mut self, dt_ms: f32) {
        self.cooldown_ms = (self.cooldown_ms - dt_ms).max(0.0);
        for message in self.messages.iter_mut() {
            message.remaining_ms -= dt_ms;
        }
        self.messages.retain(|m| m.remaining_ms > 0.0);
    }

    pub fn messages(&self) -> impl Iterator<Item = &FeedbackMessage> {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
