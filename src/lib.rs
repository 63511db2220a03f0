//! Rainbow Pong - multi-ball Pong with rainbow trails
//!
//! Core modules:
//! - `sim`: Simulation (trails, collisions, opponent AI, per-frame step)
//! - `renderer`: Read-only projection of game state into coloured rectangles
//! - `tuning`: Data-driven game balance
//! - `settings`: Display preferences

pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::{QualityPreset, Settings, TrailStyle};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed step used by the headless host (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;

    /// Court half-extents
    pub const COURT_RADIUS: Vec2 = Vec2::new(7.0, 5.0);

    /// Paddle half-extents
    pub const PADDLE_RADIUS: Vec2 = Vec2::new(0.2, 1.0);
    /// Distance from the side wall to the paddle centre
    pub const PADDLE_INSET: f32 = 0.5;
    /// Weight given to the hit offset when a paddle face remaps vertical velocity
    pub const PADDLE_BLEND: f32 = 0.75;

    /// Ball defaults
    pub const BALL_BASE_RADIUS: f32 = 0.2;
    /// Spawned balls grow or shrink by a value drawn from this range
    pub const BALL_RADIUS_JITTER: (f32, f32) = (0.03, 0.1);
    pub const MAX_BALLS: usize = 6;

    /// Seconds between extra balls
    pub const SPAWN_INTERVAL: f32 = 6.0;
    /// Match clock value the first extra ball waits for
    pub const FIRST_SPAWN_AT: f32 = 6.0;

    /// Speed ramp: BASE * 2^(age / DOUBLING), capped at MAX
    pub const BALL_BASE_SPEED: f32 = 4.0;
    pub const BALL_SPEED_DOUBLING: f32 = 5.0;
    pub const BALL_MAX_SPEED: f32 = 10.0;

    /// Seconds a trail sample is kept
    pub const TRAIL_LIFETIME: f32 = 1.3;

    /// Opponent paddle speed (units/second)
    pub const AI_MAX_SPEED: f32 = 10.0;
    /// Opponent re-aims after a delay drawn from this range
    pub const AI_REACTION: (f32, f32) = (0.5, 1.0);
    /// Opponent aims this far (at most) above or below its target
    pub const AI_OFFSET_RANGE: f32 = 1.25;
}

/// Exponential speed ramp for a ball of the given age
#[inline]
pub fn ramp_speed(age: f32, base: f32, doubling: f32, max: f32) -> f32 {
    (base * 2f32.powf(age / doubling)).min(max)
}
