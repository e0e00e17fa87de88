use glam::Vec2;
use proptest::prelude::*;

use pong::Tuning;
use pong::sim::{
    DrawCommand, MatchEvent, MatchState, RandomSource, RngState, ScriptedRolls, Side, TickInput,
    advance, bounce, redirection,
};

fn running(tuning: &Tuning, pos: Vec2, vel: Vec2) -> MatchState {
    let mut state = MatchState::new(tuning);
    state.running = true;
    state.ball.pos = pos;
    state.ball.vel = vel;
    state
}

#[test]
fn test_click_then_fifty_ticks() {
    let tuning = Tuning::default();
    // Every roll lands on 0, so the serve is (+1, +1)
    let mut rng = ScriptedRolls::constant(0);

    // Waiting tick serves from the centre
    let frame = advance(MatchState::new(&tuning), &TickInput::default(), &tuning, &mut rng);
    let mut state = frame.state;
    assert!(!state.running);
    assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
    assert_eq!(state.ball.vel, Vec2::new(1.0, 1.0));

    // The click tick launches and moves the ball
    let click = TickInput {
        click: true,
        ..Default::default()
    };
    let frame = advance(state, &click, &tuning, &mut rng);
    assert!(frame.state.running);
    assert_eq!(
        frame.events,
        vec![MatchEvent::Launched {
            vel: Vec2::new(1.0, 1.0)
        }]
    );
    state = frame.state;

    for _ in 1..50 {
        let frame = advance(state, &TickInput::default(), &tuning, &mut rng);
        assert!(frame.events.is_empty());
        state = frame.state;
    }
    assert!(state.running);
    assert_eq!(state.ball.pos, Vec2::new(450.0, 350.0));
    assert_eq!(state.ball.vel, Vec2::new(1.0, 1.0));
}

#[test]
fn test_serve_bias_converges() {
    let tuning = Tuning::default();
    let mut rng = RngState::new(7).to_rng();
    let state = MatchState::new(&tuning);

    const RESETS: u32 = 3000;
    let (mut plus_x, mut plus_y) = (0u32, 0u32);
    for _ in 0..RESETS {
        let frame = advance(state, &TickInput::default(), &tuning, &mut rng);
        assert!(!frame.state.running);
        if frame.state.ball.vel.x > 0.0 {
            plus_x += 1;
        }
        if frame.state.ball.vel.y > 0.0 {
            plus_y += 1;
        }
    }

    let px = plus_x as f64 / RESETS as f64;
    let py = plus_y as f64 / RESETS as f64;
    assert!((px - 1.0 / 3.0).abs() < 0.05, "P(vx = +1) = {}", px);
    assert!((py - 1.0 / 3.0).abs() < 0.05, "P(vy = +1) = {}", py);
}

#[test]
fn test_redirection_never_positive_with_default_tuning() {
    let tuning = Tuning::default();
    let mut rng = RngState::new(11).to_rng();
    for _ in 0..1000 {
        assert_eq!(redirection(&mut rng, &tuning), -4.0);
    }
}

#[test]
fn test_long_rally_speeds_up() {
    let tuning = Tuning::default();
    let mut state = running(&tuning, Vec2::new(400.0, 300.0), Vec2::new(-1.0, 1.0));
    let mut rng = ScriptedRolls::constant(0);
    let input = TickInput {
        autoplay: true,
        ..Default::default()
    };

    let mut hits = 0;
    let start_speed = state.ball.vel.x.abs();
    for _ in 0..5000 {
        let frame = advance(state, &input, &tuning, &mut rng);
        hits += frame
            .events
            .iter()
            .filter(|e| matches!(e, MatchEvent::PaddleHit { .. }))
            .count();
        state = frame.state;
        if !state.running {
            break;
        }
    }

    assert!(hits > 0);
    assert!(state.ball.vel.x.abs() > start_speed || !state.running);
}

#[test]
fn test_scores_only_on_goal_lines() {
    let tuning = Tuning::default();
    let mut rng = RngState::new(5).to_rng();
    let mut state = MatchState::new(&tuning);
    let input = TickInput {
        autoplay: true,
        ..Default::default()
    };

    for _ in 0..20_000 {
        let before = state;
        let frame = advance(state, &input, &tuning, &mut rng);
        state = frame.state;

        let total_before = before.score_one + before.score_two;
        let total_after = state.score_one + state.score_two;
        assert!(state.score_one >= before.score_one);
        assert!(state.score_two >= before.score_two);
        assert!(total_after - total_before <= 1);

        if state.score_one > before.score_one {
            assert!(state.ball.pos.x > tuning.paddle_two_x() + tuning.paddle_width);
            assert!(!state.running);
        }
        if state.score_two > before.score_two {
            assert!(state.ball.pos.x < tuning.paddle_one_x() - tuning.paddle_width);
            assert!(!state.running);
        }
    }
}

/// Draws always land on one value
struct Fixed(u32);

impl RandomSource for Fixed {
    fn next_below(&mut self, bound: u32) -> u32 {
        self.0 % bound
    }
}

#[test]
fn test_custom_random_source() {
    let tuning = Tuning::default();
    let frame = advance(
        MatchState::new(&tuning),
        &TickInput::default(),
        &tuning,
        &mut Fixed(0),
    );
    assert_eq!(frame.state.ball.vel, Vec2::new(1.0, 1.0));

    let frame = advance(
        MatchState::new(&tuning),
        &TickInput::default(),
        &tuning,
        &mut Fixed(1),
    );
    assert_eq!(frame.state.ball.vel, Vec2::new(-1.0, -1.0));
}

#[test]
fn test_running_frame_draws_ball_and_no_prompt() {
    let tuning = Tuning::default();
    let state = running(&tuning, Vec2::new(200.0, 200.0), Vec2::new(1.0, -1.0));
    let frame = advance(state, &TickInput::default(), &tuning, &mut Fixed(0));

    assert!(frame.commands.iter().all(|c| !matches!(c, DrawCommand::StrokeText { .. })));
    assert_eq!(
        frame.commands[1],
        DrawCommand::FillOval {
            x: 201.0,
            y: 199.0,
            diameter: 20.0
        }
    );
}

proptest! {
    #[test]
    fn prop_waiting_tick_resets_to_center(
        x in -1000.0f32..1000.0,
        y in -1000.0f32..1000.0,
        score_one in 0u32..20,
        score_two in 0u32..20,
        seed in any::<u64>(),
    ) {
        let tuning = Tuning::default();
        let mut state = MatchState::new(&tuning);
        state.ball.pos = Vec2::new(x, y);
        state.score_one = score_one;
        state.score_two = score_two;

        let mut rng = RngState::new(seed).to_rng();
        let frame = advance(state, &TickInput::default(), &tuning, &mut rng);

        prop_assert_eq!(frame.state.ball.pos, Vec2::new(400.0, 300.0));
        prop_assert_eq!(frame.state.ball.vel.x.abs(), 1.0);
        prop_assert_eq!(frame.state.ball.vel.y.abs(), 1.0);
        prop_assert_eq!((frame.state.score_one, frame.state.score_two), (score_one, score_two));
    }

    #[test]
    fn prop_bounce_escalates(
        vx in prop_oneof![-50.0f32..-0.5, 0.5f32..50.0],
        vy in prop_oneof![-50.0f32..-0.5, 0.5f32..50.0],
        positive in any::<bool>(),
    ) {
        let magnitude = if positive { 4.0 } else { -4.0 };
        let out = bounce(Vec2::new(vx, vy), magnitude);

        prop_assert_eq!(out.x, -(vx + vx.signum()));
        prop_assert_eq!(out.y, -(vy + vy.signum() * magnitude));
        // Horizontal speed always grows by one and reverses
        prop_assert!((out.x.abs() - (vx.abs() + 1.0)).abs() < 1e-4);
        prop_assert!(out.x.signum() != vx.signum());
    }

    #[test]
    fn prop_containment_flips_vertical(
        x in 100.0f32..600.0,
        y in prop_oneof![-200.0f32..-1.0, 601.0f32..800.0],
        vy in prop_oneof![-5.0f32..-0.5, 0.5f32..5.0],
    ) {
        let tuning = Tuning::default();
        // Step so that the advanced position lands at (x, y)
        let state = running(&tuning, Vec2::new(x - 1.0, y - vy), Vec2::new(1.0, vy));
        let frame = advance(state, &TickInput::default(), &tuning, &mut Fixed(0));

        prop_assert_eq!(frame.state.ball.vel.y, -vy);
        let bounced = frame
            .events
            .iter()
            .any(|e| matches!(e, MatchEvent::WallBounce { .. }));
        prop_assert!(bounced);
    }

    #[test]
    fn prop_difficulty_tiers(
        ball_x in 0.0f32..780.0,
        ball_y in 0.0f32..600.0,
        paddle_y in -100.0f32..700.0,
        lead in -3i32..=3,
    ) {
        let tuning = Tuning::default();
        // A still ball isolates the paddle update
        let mut state = running(&tuning, Vec2::new(ball_x, ball_y), Vec2::ZERO);
        state.paddle_two.y = paddle_y;
        state.score_one = (3 + lead) as u32;
        state.score_two = 3;

        let frame = advance(state, &TickInput::default(), &tuning, &mut Fixed(0));
        // Only look at ticks where nothing else changed the ball or the score
        prop_assume!(frame.events.is_empty());
        let got = frame.state.paddle_two.y;

        let (threshold, snap, step) = match lead.signum() {
            0 => (600.0, 50.0, 1.525),
            1 => (600.0, 50.0, 2.2),
            _ => (700.0, 100.0, 1.15),
        };
        let expected = if ball_x < threshold {
            ball_y - snap
        } else if ball_y > paddle_y + 50.0 {
            paddle_y + step
        } else {
            paddle_y - step
        };
        prop_assert!((got - expected).abs() < 1e-3, "got {} expected {}", got, expected);
        prop_assert_eq!(frame.state.ball.pos, Vec2::new(ball_x, ball_y));
    }
}

#[test]
fn test_paddle_two_hit_reports_side() {
    let tuning = Tuning::default();
    // Ball already past the threshold so paddle two steps instead of snapping
    let mut state = running(&tuning, Vec2::new(765.0, 450.0), Vec2::new(1.0, 1.0));
    state.paddle_two.y = 400.0;
    let frame = advance(state, &TickInput::default(), &tuning, &mut Fixed(0));

    assert_eq!(frame.state.ball.vel, Vec2::new(-2.0, 3.0));
    assert!(frame.events.contains(&MatchEvent::PaddleHit {
        side: Side::Two,
        vel: Vec2::new(-2.0, 3.0)
    }));
}
