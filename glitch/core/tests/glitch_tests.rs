// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use glitch_core::{
    interval_ms, scripted_random::ONE_BELOW, Glitch, GlitchStyle, IntervalPlan, MovementType,
    ScriptedRandom, SeededRandom, TimingConfig,
};

const FRAME_HEIGHT: f64 = 500.0;

/// Jitter draw that adds nothing: floor(0.5 * 3) - 1 == 0
const NO_JITTER: f64 = 0.5;

fn placed(top: f64, movement: MovementType) -> Glitch {
    Glitch::spawn(&ScriptedRandom::constant(0.0), FRAME_HEIGHT)
        .with_top(top)
        .with_movement(movement)
}

// ============================================================
// Spawning
// ============================================================

#[test]
fn test_spawn_lowest_draws() {
    let glitch = Glitch::spawn(&ScriptedRandom::constant(0.0), FRAME_HEIGHT);
    assert_eq!(glitch.movement(), MovementType::Random);
    assert_eq!(glitch.top(), 0.0);
    assert_eq!(glitch.height(), 0.0);
    assert_eq!(glitch.style(), GlitchStyle::Noise { opacity: 0.3 });
    assert_eq!(glitch.speed_ms(), 1);
    assert!(!glitch.is_blinking());
    assert!(glitch.is_showing());
}

#[test]
fn test_spawn_highest_draws() {
    let glitch = Glitch::spawn(&ScriptedRandom::constant(ONE_BELOW), FRAME_HEIGHT);
    assert_eq!(glitch.movement(), MovementType::Down);
    assert_eq!(glitch.top(), FRAME_HEIGHT);
    // 500 / 8 = 62.5, rounded down to whole pixels
    assert_eq!(glitch.height(), 62.0);
    assert_eq!(glitch.style(), GlitchStyle::Saturate { amount: 1.8 });
    assert_eq!(glitch.speed_ms(), 10);
    assert!(glitch.is_blinking());
}

#[test]
fn test_spawn_stays_in_frame() {
    let random = SeededRandom::new(17);
    for _ in 0..500 {
        let glitch = Glitch::spawn(&random, FRAME_HEIGHT);
        assert!((0.0..=FRAME_HEIGHT).contains(&glitch.top()));
        assert!((0.0..=62.0).contains(&glitch.height()));
        assert_eq!(glitch.top().fract(), 0.0);
        assert_eq!(glitch.height().fract(), 0.0);
        assert!((1..=10).contains(&glitch.speed_ms()));
        assert!(GlitchStyle::TABLE.contains(&glitch.style()));
    }
}

#[test]
fn test_blinking_share_is_about_half() {
    // Draws 3, 4 and 5 out of 0..=5 blink
    let random = SeededRandom::new(8);
    let blinking = (0..6000)
        .filter(|_| Glitch::spawn(&random, FRAME_HEIGHT).is_blinking())
        .count();
    assert!(blinking > 2700 && blinking < 3300, "saw {}", blinking);
}

// ============================================================
// Movement
// ============================================================

#[test]
fn test_step_moves_in_direction() {
    let random = ScriptedRandom::constant(NO_JITTER);

    let mut up = placed(250.0, MovementType::Up);
    up.step(&random);
    assert_eq!(up.top(), 249.0);

    let mut down = placed(250.0, MovementType::Down);
    down.step(&random);
    assert_eq!(down.top(), 251.0);

    let mut still = placed(250.0, MovementType::Random);
    still.step(&random);
    assert_eq!(still.top(), 250.0);
}

#[test]
fn test_step_adds_jitter() {
    let mut glitch = placed(250.0, MovementType::Random);
    glitch.step(&ScriptedRandom::constant(0.0));
    assert_eq!(glitch.top(), 249.0);
    glitch.step(&ScriptedRandom::constant(ONE_BELOW));
    assert_eq!(glitch.top(), 250.0);
}

#[test]
fn test_step_wraps_past_top_edge() {
    let mut glitch = placed(0.0, MovementType::Up);
    glitch.step(&ScriptedRandom::constant(NO_JITTER));
    assert_eq!(glitch.top(), FRAME_HEIGHT);
}

#[test]
fn test_step_wraps_past_bottom_edge() {
    let mut glitch = placed(FRAME_HEIGHT, MovementType::Down);
    glitch.step(&ScriptedRandom::constant(NO_JITTER));
    assert_eq!(glitch.top(), 0.0);
}

#[test]
fn test_step_wraps_to_whole_pixel() {
    let frame = Glitch::spawn(&ScriptedRandom::constant(0.0), 100.5);
    let random = ScriptedRandom::constant(NO_JITTER);

    let mut up = frame.clone().with_top(0.0).with_movement(MovementType::Up);
    up.step(&random);
    assert_eq!(up.top(), 100.0);

    let mut down = frame.clone().with_top(100.0).with_movement(MovementType::Down);
    down.step(&random);
    assert_eq!(down.top(), 0.0);

    assert_eq!(frame.with_top(900.0).top(), 100.0);
}

#[test]
fn test_step_stays_whole_in_fractional_frame() {
    let random = SeededRandom::new(21);
    let mut glitch = Glitch::spawn(&random, 100.5).with_movement(MovementType::Up);
    for _ in 0..2000 {
        glitch.step(&random);
        assert_eq!(glitch.top().fract(), 0.0, "saw {}", glitch.top());
        assert!((0.0..=100.0).contains(&glitch.top()));
    }
}

#[test]
fn test_step_never_leaves_frame() {
    let random = SeededRandom::new(4);
    for movement in MovementType::ALL {
        let mut glitch = placed(5.0, movement);
        for _ in 0..5000 {
            glitch.step(&random);
            assert!((0.0..=FRAME_HEIGHT).contains(&glitch.top()), "saw {}", glitch.top());
        }
    }
}

#[test]
fn test_with_top_is_clamped() {
    assert_eq!(placed(-20.0, MovementType::Up).top(), 0.0);
    assert_eq!(placed(900.0, MovementType::Up).top(), FRAME_HEIGHT);
}

#[test]
fn test_movement_pick_covers_every_type() {
    assert_eq!(MovementType::pick(&ScriptedRandom::constant(0.0)), MovementType::Random);
    assert_eq!(MovementType::pick(&ScriptedRandom::constant(0.5)), MovementType::Up);
    assert_eq!(MovementType::pick(&ScriptedRandom::constant(ONE_BELOW)), MovementType::Down);
}

// ============================================================
// Re-rolls and blinking
// ============================================================

#[test]
fn test_reroll_movement_and_style() {
    let mut glitch = Glitch::spawn(&ScriptedRandom::constant(0.0), FRAME_HEIGHT);
    let random = ScriptedRandom::constant(ONE_BELOW);

    glitch.reroll_movement(&random);
    assert_eq!(glitch.movement(), MovementType::Down);

    glitch.reroll_style(&random);
    assert_eq!(glitch.style(), GlitchStyle::Saturate { amount: 1.8 });
}

#[test]
fn test_blink_then_reveal() {
    let mut glitch = Glitch::spawn(&ScriptedRandom::constant(0.0), FRAME_HEIGHT);
    glitch.blink();
    assert!(!glitch.is_showing());
    glitch.reveal();
    assert!(glitch.is_showing());
}

#[test]
fn test_style_css() {
    let css: Vec<String> = GlitchStyle::TABLE.iter().map(|s| s.css()).collect();
    assert_eq!(
        css,
        vec![
            "background: url(https://i.stack.imgur.com/sIIwU.gif); opacity: 0.3",
            "backdrop-filter: invert(1)",
            "backdrop-filter: blur(10px)",
            "backdrop-filter: hue-rotate(120deg)",
            "backdrop-filter: hue-rotate(10deg)",
            "backdrop-filter: saturate(1.8)",
        ]
    );
}

// ============================================================
// Interval plans
// ============================================================

#[test]
fn test_interval_without_max_is_exact() {
    let random = SeededRandom::new(1);
    for _ in 0..100 {
        assert_eq!(interval_ms(&random, 300, None), 300);
    }
}

#[test]
fn test_interval_with_max_is_inclusive() {
    assert_eq!(interval_ms(&ScriptedRandom::constant(0.0), 100, Some(5000)), 100);
    assert_eq!(
        interval_ms(&ScriptedRandom::constant(ONE_BELOW), 100, Some(5000)),
        5000
    );
}

#[test]
fn test_plan_for_quiet_glitch() {
    let random = ScriptedRandom::constant(0.0);
    let glitch = Glitch::spawn(&random, FRAME_HEIGHT);
    let plan = IntervalPlan::draw(&random, &TimingConfig::default(), &glitch);

    assert_eq!(plan.movement_change_ms, 5000);
    assert_eq!(plan.move_ms, 1);
    assert_eq!(plan.blink_ms, None);
    assert_eq!(plan.blink_duration_ms, 50);
    assert_eq!(plan.style_change_ms, 3000);
    assert_eq!(plan.blink(), None);
}

#[test]
fn test_plan_for_blinking_glitch() {
    let random = ScriptedRandom::constant(ONE_BELOW);
    let glitch = Glitch::spawn(&random, FRAME_HEIGHT);
    let plan = IntervalPlan::draw(&random, &TimingConfig::default(), &glitch);

    assert_eq!(plan.movement_change_ms, 10_000);
    assert_eq!(plan.move_ms, 10);
    assert_eq!(plan.blink_ms, Some(5000));
    assert_eq!(plan.style_change_ms, 10_000);
    assert_eq!(plan.movement(), std::time::Duration::from_millis(10));
    assert_eq!(plan.blink_duration(), std::time::Duration::from_millis(50));
}
