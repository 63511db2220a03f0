//! Game state and core simulation types

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::ai::OpponentController;
use super::trail::TrailBuffer;
use crate::tuning::Tuning;

/// Which end of the court a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Human-controlled
    Left,
    /// AI-controlled
    Right,
}

impl Side {
    /// -1 for left, +1 for right
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }

    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Origin-centred playing field; walls are the planes at ±radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Court {
    pub radius: Vec2,
}

/// A ball entity
#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: Vec2,
    /// Direction of travel. Scaled by the speed ramp each frame, never renormalised.
    pub vel: Vec2,
    /// Half-extents of the bounding rectangle
    pub radius: Vec2,
    /// Seconds since spawn
    pub age: f32,
    /// Side whose trail colour applies; `None` until a paddle touches the opening ball
    pub owner: Option<Side>,
    pub trail: TrailBuffer,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: Vec2, owner: Option<Side>, trail_lifetime: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            age: 0.0,
            owner,
            trail: TrailBuffer::seeded(pos, trail_lifetime),
        }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.pos - self.radius
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.radius
    }

    /// Age the ball and move it along its direction at the ramped speed
    pub fn advance(&mut self, elapsed: f32, tuning: &Tuning) {
        self.age += elapsed;
        let speed = tuning.speed_at(self.age);
        self.pos += elapsed * speed * self.vel;
    }
}

/// A paddle; only its vertical position is controlled
#[derive(Debug, Clone)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,
    pub radius: Vec2,
}

impl Paddle {
    pub fn new(side: Side, tuning: &Tuning) -> Self {
        Self {
            side,
            pos: Vec2::new(tuning.paddle_x(side), 0.0),
            radius: tuning.paddle_radius,
        }
    }

    /// Keep the whole paddle between the top and bottom walls
    pub fn clamp_to(&mut self, court: &Court) {
        let limit = (court.radius.y - self.radius.y).max(0.0);
        self.pos.y = self.pos.y.clamp(-limit, limit);
    }
}

/// Score counters. Scoring rules live with the host; the projector only draws them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

/// Things that happened during the last tick, for sound and effects
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    BallSpawned { ball: usize },
    PaddleHit { ball: usize, side: Side },
    WallHit { ball: usize },
}

/// Complete simulation state
///
/// The random source is injected so runs are reproducible; `GameState::new`
/// seeds a `Pcg32`.
#[derive(Debug, Clone)]
pub struct GameState<R = Pcg32> {
    pub tuning: Tuning,
    pub rng: R,
    pub court: Court,
    /// Human-controlled paddle (left)
    pub player: Paddle,
    /// AI-controlled paddle (right)
    pub opponent: Paddle,
    pub ai: OpponentController,
    /// Live balls; indices are stable because balls are never removed
    pub balls: Vec<Ball>,
    /// Seconds since match start
    pub match_clock: f32,
    /// Match clock value that triggers the next extra ball
    pub spawn_threshold: f32,
    /// Events raised during the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameState<Pcg32> {
    /// Create a match with default tuning and the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_rng(Tuning::default(), Pcg32::seed_from_u64(seed))
    }
}

impl<R> GameState<R> {
    /// Apply a pointer position (court space) to the human paddle
    pub fn set_player_y(&mut self, y: f32) {
        self.player.pos.y = y;
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.player,
            Side::Right => &self.opponent,
        }
    }
}

impl<R: Rng> GameState<R> {
    /// Create a match with the given tuning and random source.
    ///
    /// Tuning that fails validation is replaced by the defaults.
    pub fn with_rng(tuning: Tuning, rng: R) -> Self {
        let tuning = match tuning.validate() {
            Ok(()) => tuning,
            Err(e) => {
                log::warn!("Rejected tuning ({}), using defaults", e);
                Tuning::default()
            }
        };
        let court = Court {
            radius: tuning.court_radius,
        };
        let opening = Ball::new(
            Vec2::ZERO,
            Vec2::new(-1.0, 0.0),
            Vec2::splat(tuning.ball_base_radius),
            None,
            tuning.trail_lifetime,
        );

        log::info!(
            "Match start: court {:?}, up to {} balls every {}s",
            court.radius,
            tuning.max_balls,
            tuning.spawn_interval
        );

        Self {
            player: Paddle::new(Side::Left, &tuning),
            opponent: Paddle::new(Side::Right, &tuning),
            ai: OpponentController::new(&tuning),
            balls: vec![opening],
            match_clock: 0.0,
            spawn_threshold: tuning.first_spawn_at,
            events: Vec::new(),
            court,
            rng,
            tuning,
        }
    }

    /// Spawn an extra ball at the centre with a random size and direction.
    ///
    /// Returns the new ball's index, or `None` once the population cap is reached.
    pub fn spawn_ball(&mut self) -> Option<usize> {
        if self.balls.len() >= self.tuning.max_balls {
            return None;
        }

        let (lo, hi) = self.tuning.ball_radius_jitter;
        let jitter = if lo < hi { self.rng.random_range(lo..hi) } else { lo };
        let r = if self.rng.random_bool(0.5) {
            self.tuning.ball_base_radius + jitter
        } else {
            self.tuning.ball_base_radius - jitter
        };

        // Heading toward a side counts as that side's ball until a paddle touches it
        let side = if self.rng.random_bool(0.5) {
            Side::Left
        } else {
            Side::Right
        };

        let ball = Ball::new(
            Vec2::ZERO,
            Vec2::new(side.sign(), 0.0),
            Vec2::splat(r),
            Some(side),
            self.tuning.trail_lifetime,
        );
        self.balls.push(ball);

        let index = self.balls.len() - 1;
        log::info!(
            "Ball {} spawned at t={:.2}s (radius {:.3}, heading {:?})",
            index,
            self.match_clock,
            r,
            side
        );
        self.events.push(GameEvent::BallSpawned { ball: index });
        Some(index)
    }
}
