// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use serde::{Deserialize, Serialize};

/// How a bounded draw is shaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleMode {
    /// Whole numbers only, both bounds reachable.
    Integer,
    /// Any value in the closed range.
    Fractional,
}

impl SampleMode {
    /// Mode implied by the legacy `decimal` flag.
    ///
    /// Whole-number bounds silently switch to integer sampling unless
    /// `decimal` is set. Callers who care should pass a mode to
    /// [`crate::sample`] instead of relying on this.
    pub fn infer(min: f64, max: f64, decimal: bool) -> Self {
        if !decimal && is_whole(min) && is_whole(max) {
            SampleMode::Integer
        } else {
            SampleMode::Fractional
        }
    }
}

pub(crate) fn is_whole(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}
