//! Timed narration beats that pre-empt the battle state machine.
//! This module exists to keep the narration queue and its wave animation testable on their own.
//! It does not own the decision of what to narrate.

use std::collections::VecDeque;

use crate::canvas::{Canvas, TextStyle};
use crate::geometry::{FT_PER_SECOND, screen_center, seconds_to_ft};
use crate::output::{FrameOutput, SoundCue};

/// Standard duration of a turn or ritual announcement, in seconds.
pub const ANNOUNCE_SECONDS: f32 = 1.7;
/// Duration of the ritual outcome beat, in seconds.
pub const OUTCOME_SECONDS: f32 = 1.1;

const WAVE_GAIN: f32 = 1.5;

#[derive(Clone, Debug, PartialEq)]
pub struct ScriptedText {
    text: String,
    total: f32,
    time_left: f32,
    cue_played: bool,
    wave: f32,
}

impl ScriptedText {
    pub fn new(seconds: f32, text: impl Into<String>) -> Self {
        let total = seconds_to_ft(seconds);
        Self { text: text.into(), total, time_left: total, cue_played: false, wave: 0.0 }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn time_left(&self) -> f32 {
        self.time_left
    }

    /// Wobble amplitude computed on the last update.
    pub fn wave(&self) -> f32 {
        self.wave
    }

    pub fn is_finished(&self) -> bool {
        self.time_left <= 0.0
    }

    fn update(&mut self, dt: f32, out: &mut FrameOutput) {
        if !self.cue_played {
            out.play(SoundCue::ScriptedText);
            self.cue_played = true;
        }

        // The text settles during its first second on screen.
        let t = self.time_left;
        self.wave = if t >= self.total - FT_PER_SECOND {
            ((t - FT_PER_SECOND) * WAVE_GAIN).max(0.0)
        } else {
            0.0
        };
        self.time_left -= dt;
    }
}

#[derive(Clone, Debug, Default)]
pub struct ScriptedQueue {
    events: VecDeque<ScriptedText>,
}

impl ScriptedQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_text(&mut self, seconds: f32, text: impl Into<String>) {
        let event = ScriptedText::new(seconds, text);
        log::debug!("narrate {:?}", event.text());
        self.events.push_back(event);
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn current(&self) -> Option<&ScriptedText> {
        self.events.front()
    }

    /// Advance only the front beat, then drop it once its time is up.
    pub fn update(&mut self, dt: f32, out: &mut FrameOutput) {
        if let Some(front) = self.events.front_mut() {
            front.update(dt, out);
        }
        self.events.retain(|event| !event.is_finished());
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        if let Some(front) = self.events.front() {
            canvas.text(screen_center(), front.text(), TextStyle::Big, front.wave());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plays_cue_once_and_expires() {
        let mut queue = ScriptedQueue::new();
        queue.push_text(1.0, "Battle start!");
        let mut out = FrameOutput::new();
        for _ in 0..59 {
            queue.update(1.0, &mut out);
            assert!(!queue.is_empty());
        }
        queue.update(1.0, &mut out);
        assert!(queue.is_empty());
        assert_eq!(out.cues, vec![SoundCue::ScriptedText]);
    }

    #[test]
    fn only_the_front_beat_advances() {
        let mut queue = ScriptedQueue::new();
        queue.push_text(ANNOUNCE_SECONDS, "Fireball");
        queue.push_text(OUTCOME_SECONDS, "Success!");
        let mut out = FrameOutput::new();
        queue.update(10.0, &mut out);
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.current().map(ScriptedText::text), Some("Fireball"));
        assert_eq!(queue.events[1].time_left(), seconds_to_ft(OUTCOME_SECONDS));
    }

    #[test]
    fn wave_decays_during_the_first_second() {
        let mut text = ScriptedText::new(ANNOUNCE_SECONDS, "Enemy turn!");
        let mut out = FrameOutput::new();
        text.update(1.0, &mut out);
        assert_eq!(text.wave(), (seconds_to_ft(ANNOUNCE_SECONDS) - 60.0) * 1.5);
        while text.time_left() > 60.0 {
            text.update(1.0, &mut out);
        }
        text.update(1.0, &mut out);
        assert_eq!(text.wave(), 0.0);
    }

    #[test]
    fn draws_front_text_big() {
        let mut queue = ScriptedQueue::new();
        queue.push_text(1.0, "Player turn!");
        let mut canvas = crate::canvas::RecordingCanvas::default();
        queue.draw(&mut canvas);
        assert_eq!(canvas.texts, vec!["Player turn!".to_string()]);
    }
}
