// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::Random;

/// Process-wide source backed by the thread-local `fastrand` generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct FastrandRandom;

impl Random for FastrandRandom {
    fn f64(&self) -> f64 {
        fastrand::f64()
    }
}
