//! End-to-end runs through the public API

use sky_flap::consts::SIM_DT;
use sky_flap::sim::autopilot;
use sky_flap::sim::{CrashCause, GameEvent, GamePhase, GameState, TickInput, tick};
use sky_flap::{FrameStatus, FrameToken, Game, SimConfig};

/// Run one frame, asserting the loop did not go stale
fn step(game: &mut Game, token: FrameToken) -> Option<FrameToken> {
    match game.frame(token, SIM_DT) {
        FrameStatus::Continue(next) => Some(next),
        FrameStatus::Suspended => None,
        FrameStatus::Stale => panic!("frame token went stale"),
    }
}

#[test]
fn spaced_flaps_keep_playing_without_score() {
    // Obstacles spawn far to the right and never reach the body in this window
    let config = SimConfig {
        playfield_width: 4000.0,
        ..Default::default()
    };
    let mut game = Game::new(config, 1).unwrap();
    let mut token = game.activate().unwrap();

    for frame in 1..=210 {
        if frame % 60 == 0 {
            assert!(game.activate().is_none(), "loop should already be running");
        }
        token = step(&mut game, token).expect("run ended early");
        let snap = game.snapshot();
        assert!(snap.body.y >= 0.0);
    }

    let snap = game.snapshot();
    assert_eq!(snap.phase, GamePhase::Playing);
    assert_eq!(snap.score, 0);
    let body_right = game.config().body_x + game.config().body_size;
    assert!(snap.obstacles.iter().all(|o| o.x > body_right));
}

#[test]
fn free_fall_hits_ground() {
    let config = SimConfig::default();
    let mut game = Game::new(config.clone(), 2).unwrap();
    let mut token = game.activate().unwrap();

    let mut frames = 0;
    while let Some(next) = step(&mut game, token) {
        token = next;
        frames += 1;
        assert!(frames < 1000, "body never reached the ground");
    }

    let snap = game.snapshot();
    assert_eq!(snap.phase, GamePhase::GameOver);
    assert_eq!(snap.score, 0);
    assert!(snap.body.y + config.body_size > config.ground_y());
    assert!(snap.events.contains(&GameEvent::Crashed {
        cause: CrashCause::Ground
    }));
    assert!(!game.is_running());
}

#[test]
fn restart_resets_everything() {
    let config = SimConfig::default();
    let mut game = Game::new(config.clone(), 3).unwrap();
    let mut token = game.activate().unwrap();
    while let Some(next) = step(&mut game, token) {
        token = next;
    }
    assert_eq!(game.phase(), GamePhase::GameOver);
    assert!(!game.snapshot().obstacles.is_empty());

    let token = game.activate().unwrap();
    assert!(step(&mut game, token).is_some());

    let snap = game.snapshot();
    assert_eq!(snap.phase, GamePhase::Playing);
    assert_eq!(snap.score, 0);
    assert!(snap.obstacles.is_empty());
    assert_eq!(snap.body.y, config.body_start_y());
    assert_eq!(snap.body.vy, config.flap_impulse);
}

#[test]
fn scoring_through_open_gaps() {
    // Gap spans the whole sky, so only the ground can end the run
    let config = SimConfig {
        gap_margin_top: 0.0,
        gap_margin_bottom: 0.0,
        gap_height: 536.0,
        ..Default::default()
    };
    let config = config.validate().unwrap();
    let mut state = GameState::new(4, &config);

    let mut scored = Vec::new();
    for _ in 0..600 {
        let input = TickInput {
            activate: autopilot::should_activate(&state, &config),
        };
        tick(&mut state, &input, &config, SIM_DT);
        for event in &state.events {
            if let GameEvent::Scored { id, score } = event {
                scored.push((*id, *score));
            }
        }
    }

    assert_eq!(state.phase, GamePhase::Playing);
    assert!(state.score >= 3, "score was {}", state.score);
    assert_eq!(scored.len() as u32, state.score);
    for (i, (id, score)) in scored.iter().enumerate() {
        assert_eq!(*score, i as u32 + 1);
        assert_eq!(*id, i as u32 + 1);
    }
}

#[test]
fn same_seed_same_game() {
    let config = SimConfig::default();
    let mut a = GameState::new(777, &config);
    let mut b = GameState::new(777, &config);

    for _ in 0..2000 {
        let input = TickInput {
            activate: autopilot::should_activate(&a, &config),
        };
        tick(&mut a, &input, &config, SIM_DT);
        tick(&mut b, &input, &config, SIM_DT);
    }

    assert_eq!(a.snapshot(), b.snapshot());
}
