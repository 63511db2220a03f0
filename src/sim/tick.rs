//! Per-frame simulation step
//!
//! Order matters: spawning runs before integration, so a new ball moves and
//! collides in the frame it appears.

use rand::Rng;

use super::collision::{resolve_paddle, resolve_walls};
use super::state::{GameEvent, GameState};

/// Input for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Human paddle y in court space (pointer already mapped through the inverse transform)
    pub paddle_y: Option<f32>,
}

/// Advance the game state by `elapsed` seconds
pub fn tick<R: Rng>(state: &mut GameState<R>, input: &TickInput, elapsed: f32) {
    state.events.clear();

    if let Some(y) = input.paddle_y {
        state.set_player_y(y);
    }

    // Spawn gate
    state.match_clock += elapsed;
    if state.match_clock > state.spawn_threshold && state.spawn_ball().is_some() {
        state.spawn_threshold += state.tuning.spawn_interval;
    }

    // Paddles
    state
        .ai
        .steer(&mut state.opponent, &state.balls, &mut state.rng, elapsed);
    state.player.clamp_to(&state.court);
    state.opponent.clamp_to(&state.court);

    // Integration
    for ball in &mut state.balls {
        ball.advance(elapsed, &state.tuning);
    }

    // Collisions: player paddle, then opponent paddle, then walls
    let blend = state.tuning.paddle_blend;
    for (i, ball) in state.balls.iter_mut().enumerate() {
        for paddle in [&state.player, &state.opponent] {
            if let Some(bounce) = resolve_paddle(paddle, ball, blend) {
                log::trace!("Ball {} {:?} bounce off {:?} paddle", i, bounce, paddle.side);
                state.events.push(GameEvent::PaddleHit {
                    ball: i,
                    side: paddle.side,
                });
            }
        }
    }
    for (i, ball) in state.balls.iter_mut().enumerate() {
        if resolve_walls(&state.court, ball) {
            state.events.push(GameEvent::WallHit { ball: i });
        }
    }

    // Trails
    for ball in &mut state.balls {
        ball.trail.record(ball.pos, elapsed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::sim::state::Side;
    use glam::Vec2;

    #[test]
    fn test_opening_ball_heads_left() {
        let mut state = GameState::new(12345);
        tick(&mut state, &TickInput::default(), SIM_DT);

        let ball = &state.balls[0];
        assert!(ball.pos.x < 0.0);
        assert_eq!(ball.pos.y, 0.0);
        assert!((ball.age - SIM_DT).abs() < 1e-7);
        assert_eq!(ball.trail.len(), 3);
    }

    #[test]
    fn test_zero_elapsed_is_noop() {
        let mut state = GameState::new(5);
        for _ in 0..30 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        let before: Vec<_> = state.balls.iter().map(|b| (b.pos, b.vel, b.age)).collect();
        let trail_before: Vec<Vec<Vec2>> = state
            .balls
            .iter()
            .map(|b| b.trail.iter().map(|s| s.pos).collect())
            .collect();

        tick(&mut state, &TickInput::default(), 0.0);

        let after: Vec<_> = state.balls.iter().map(|b| (b.pos, b.vel, b.age)).collect();
        assert_eq!(before, after);
        for (ball, old) in state.balls.iter().zip(&trail_before) {
            // Only a duplicate of the current position is added
            let positions: Vec<Vec2> = ball.trail.iter().map(|s| s.pos).collect();
            assert_eq!(positions.len(), old.len() + 1);
            assert_eq!(positions[0], ball.pos);
            assert_eq!(&positions[1..], &old[..]);
        }
    }

    #[test]
    fn test_pointer_moves_player_and_is_clamped() {
        let mut state = GameState::new(1);
        let input = TickInput {
            paddle_y: Some(2.5),
        };
        tick(&mut state, &input, SIM_DT);
        assert_eq!(state.player.pos.y, 2.5);

        let input = TickInput {
            paddle_y: Some(50.0),
        };
        tick(&mut state, &input, SIM_DT);
        assert_eq!(state.player.pos.y, 4.0);
    }

    #[test]
    fn test_spawn_cadence() {
        let mut state = GameState::new(77);
        let input = TickInput::default();
        let dt = 0.05;

        // Just short of the first threshold
        for _ in 0..119 {
            tick(&mut state, &input, dt);
        }
        assert_eq!(state.balls.len(), 1);

        for _ in 0..2 {
            tick(&mut state, &input, dt);
        }
        assert_eq!(state.balls.len(), 2);
        assert_eq!(state.spawn_threshold, 12.0);
    }

    #[test]
    fn test_spawned_ball_moves_in_first_frame() {
        let mut state = GameState::new(8);
        state.match_clock = 10.0;
        state.spawn_threshold = 10.0;

        tick(&mut state, &TickInput::default(), SIM_DT);

        assert_eq!(state.balls.len(), 2);
        assert!(state.events.contains(&GameEvent::BallSpawned { ball: 1 }));
        let ball = &state.balls[1];
        assert!(ball.pos.x != 0.0);
        assert!(ball.age > 0.0);
    }

    #[test]
    fn test_player_paddle_returns_ball() {
        let mut state = GameState::new(3);
        let input = TickInput {
            paddle_y: Some(0.0),
        };

        let mut returned = false;
        for _ in 0..240 {
            tick(&mut state, &input, SIM_DT);
            if state.events.contains(&GameEvent::PaddleHit {
                ball: 0,
                side: Side::Left,
            }) {
                returned = true;
                break;
            }
        }

        assert!(returned, "opening ball should meet the centred paddle");
        let ball = &state.balls[0];
        assert!(ball.vel.x > 0.0);
        assert_eq!(ball.owner, Some(Side::Left));
        assert!(ball.pos.x >= state.player.pos.x + state.player.radius.x + ball.radius.x - 1e-5);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);

        for i in 0..2000 {
            let input = TickInput {
                paddle_y: Some((i as f32 * 0.01).sin() * 3.0),
            };
            tick(&mut state1, &input, SIM_DT);
            tick(&mut state2, &input, SIM_DT);
        }

        assert_eq!(state1.balls.len(), state2.balls.len());
        for (a, b) in state1.balls.iter().zip(&state2.balls) {
            assert_eq!(a.pos, b.pos);
            assert_eq!(a.vel, b.vel);
        }
        assert_eq!(state1.opponent.pos, state2.opponent.pos);
    }

    #[test]
    fn test_balls_stay_on_court() {
        let mut state = GameState::new(2024);
        for i in 0..6000 {
            let input = TickInput {
                paddle_y: Some((i as f32 * 0.02).cos() * 4.0),
            };
            tick(&mut state, &input, SIM_DT);

            for ball in &state.balls {
                assert!(ball.pos.x.abs() + ball.radius.x <= state.court.radius.x + 1e-4);
                assert!(ball.pos.y.abs() + ball.radius.y <= state.court.radius.y + 1e-4);
            }
            for paddle in [&state.player, &state.opponent] {
                assert!(paddle.pos.y.abs() + paddle.radius.y <= state.court.radius.y + 1e-4);
            }
        }
    }
}
