// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Uniform entropy source.
///
/// Implementations return values in `[0, 1)` and must be safe to share
/// between callers on different threads.
pub trait Random: Send + Sync {
    fn f64(&self) -> f64;
}

impl<R: Random + ?Sized> Random for &R {
    fn f64(&self) -> f64 {
        (**self).f64()
    }
}

impl<R: Random + ?Sized> Random for Box<R> {
    fn f64(&self) -> f64 {
        (**self).f64()
    }
}
