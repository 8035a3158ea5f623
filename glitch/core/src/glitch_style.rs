// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{pick_index, Random};
use serde::{Deserialize, Serialize};

const NOISE_IMAGE_URL: &str = "https://i.stack.imgur.com/sIIwU.gif";

/// Backdrop treatment applied to the area under a glitch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GlitchStyle {
    Noise { opacity: f64 },
    Invert { amount: f64 },
    Blur { radius_px: f64 },
    HueRotate { degrees: f64 },
    Saturate { amount: f64 },
}

impl GlitchStyle {
    pub const TABLE: [GlitchStyle; 6] = [
        GlitchStyle::Noise { opacity: 0.3 },
        GlitchStyle::Invert { amount: 1.0 },
        GlitchStyle::Blur { radius_px: 10.0 },
        GlitchStyle::HueRotate { degrees: 120.0 },
        GlitchStyle::HueRotate { degrees: 10.0 },
        GlitchStyle::Saturate { amount: 1.8 },
    ];

    pub fn pick<R: Random + ?Sized>(random: &R) -> Self {
        let idx = pick_index(random, Self::TABLE.len()).unwrap_or(0);
        Self::TABLE[idx]
    }

    /// CSS declarations for this style.
    pub fn css(&self) -> String {
        match self {
            GlitchStyle::Noise { opacity } => {
                format!("background: url({}); opacity: {}", NOISE_IMAGE_URL, opacity)
            }
            GlitchStyle::Invert { amount } => format!("backdrop-filter: invert({})", amount),
            GlitchStyle::Blur { radius_px } => format!("backdrop-filter: blur({}px)", radius_px),
            GlitchStyle::HueRotate { degrees } => {
                format!("backdrop-filter: hue-rotate({}deg)", degrees)
            }
            GlitchStyle::Saturate { amount } => format!("backdrop-filter: saturate({})", amount),
        }
    }
}
