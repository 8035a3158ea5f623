// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

pub mod random;
pub use random::Random;

pub mod fastrand_random;
pub use fastrand_random::FastrandRandom;

pub mod seeded_random;
pub use seeded_random::SeededRandom;

pub mod scripted_random;
pub use scripted_random::ScriptedRandom;

mod sample_mode;
pub use sample_mode::SampleMode;

pub mod rand_between;
pub use rand_between::{pick_index, rand_between, rand_between_with, rand_int, sample};

mod sample_stats;
pub use sample_stats::SampleStats;

mod movement_type;
pub use movement_type::MovementType;

mod glitch_style;
pub use glitch_style::GlitchStyle;

mod glitch;
pub use glitch::Glitch;

mod interval_plan;
pub use interval_plan::{interval_ms, IntervalPlan};

mod scene;
pub use scene::{PlannedGlitch, Scene};

mod scene_config;
pub use scene_config::{SceneConfig, TimingConfig};

mod config_error;
pub use config_error::ConfigError;
