// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{Glitch, IntervalPlan, Random, SceneConfig};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedGlitch {
    pub glitch: Glitch,
    pub plan: IntervalPlan,
}

/// A photo of fixed size with glitch bars laid over it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    width: f64,
    height: f64,
    image_url: String,
    glitches: Vec<PlannedGlitch>,
}

impl Scene {
    pub fn new<R: Random + ?Sized>(random: &R, config: &SceneConfig) -> Self {
        let glitches: Vec<PlannedGlitch> = (0..config.num_glitches)
            .map(|_| {
                let glitch = Glitch::spawn(random, config.height);
                let plan = IntervalPlan::draw(random, &config.timing, &glitch);
                PlannedGlitch { glitch, plan }
            })
            .collect();

        debug!(
            width = config.width,
            height = config.height,
            glitches = glitches.len(),
            "built scene"
        );

        Self {
            width: config.width,
            height: config.height,
            image_url: image_url(config.width, config.height),
            glitches,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn glitches(&self) -> &[PlannedGlitch] {
        &self.glitches
    }

    pub fn glitches_mut(&mut self) -> &mut [PlannedGlitch] {
        &mut self.glitches
    }
}

/// Random photo of the given size from picsum.photos.
pub fn image_url(width: f64, height: f64) -> String {
    format!("https://picsum.photos/{}/{}", width, height)
}
