// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{sample, GlitchStyle, MovementType, Random, SampleMode};
use serde::Serialize;

/// Fastest and slowest move interval, in milliseconds.
const SPEED_RANGE_MS: (f64, f64) = (1.0, 10.0);

/// A draw in `[0, 5]` above this makes the glitch blink.
const BLINK_THRESHOLD: f64 = 2.0;

/// Headless state of one glitch bar.
///
/// Positions are whole pixels measured from the top of the frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Glitch {
    movement: MovementType,
    top: f64,
    height: f64,
    speed_ms: u64,
    showing: bool,
    blinking: bool,
    style: GlitchStyle,
    frame_height: f64,
}

impl Glitch {
    pub fn spawn<R: Random + ?Sized>(random: &R, frame_height: f64) -> Self {
        let frame_height = frame_height.max(0.0);
        let movement = MovementType::pick(random);
        let top = sample(random, 0.0, frame_height, SampleMode::Integer);
        let height = sample(random, 0.0, frame_height / 8.0, SampleMode::Integer);
        let style = GlitchStyle::pick(random);
        let speed_ms = sample(random, SPEED_RANGE_MS.0, SPEED_RANGE_MS.1, SampleMode::Integer) as u64;
        let blinking = sample(random, 0.0, 5.0, SampleMode::Integer) > BLINK_THRESHOLD;

        Self {
            movement,
            top,
            height,
            speed_ms,
            showing: true,
            blinking,
            style,
            frame_height,
        }
    }

    /// Moves one step in the current direction plus a jitter of up to one
    /// pixel, wrapping to the opposite edge when leaving the frame.
    pub fn step<R: Random + ?Sized>(&mut self, random: &R) {
        let mut top = self.top + self.movement.drift();
        top += sample(random, -1.0, 1.0, SampleMode::Integer);

        let bottom = self.bottom();
        if top < 0.0 {
            top = bottom;
        } else if top > bottom {
            top = 0.0;
        }
        self.top = top;
    }

    pub fn reroll_movement<R: Random + ?Sized>(&mut self, random: &R) {
        self.movement = MovementType::pick(random);
    }

    pub fn reroll_style<R: Random + ?Sized>(&mut self, random: &R) {
        self.style = GlitchStyle::pick(random);
    }

    pub fn blink(&mut self) {
        self.showing = false;
    }

    pub fn reveal(&mut self) {
        self.showing = true;
    }

    pub fn movement(&self) -> MovementType {
        self.movement
    }

    pub fn top(&self) -> f64 {
        self.top
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn speed_ms(&self) -> u64 {
        self.speed_ms
    }

    pub fn is_showing(&self) -> bool {
        self.showing
    }

    pub fn is_blinking(&self) -> bool {
        self.blinking
    }

    pub fn style(&self) -> GlitchStyle {
        self.style
    }

    pub fn frame_height(&self) -> f64 {
        self.frame_height
    }

    /// Places the glitch at an exact position, clamped to the frame's whole pixels.
    pub fn with_top(mut self, top: f64) -> Self {
        self.top = top.max(0.0).min(self.bottom());
        self
    }

    /// Lowest whole-pixel position inside the frame.
    fn bottom(&self) -> f64 {
        self.frame_height.floor()
    }

    pub fn with_movement(mut self, movement: MovementType) -> Self {
        self.movement = movement;
        self
    }
}
