//! Data-driven game balance
//!
//! Every simulation constant lives in [`Tuning`]. Defaults come from
//! [`crate::consts`]; a JSON document may override any subset of fields.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Reasons a tuning document is rejected
#[derive(Debug, Clone, PartialEq)]
pub enum TuningError {
    /// The document is not valid JSON for [`Tuning`]
    Parse(String),
    /// A field holds a value the simulation cannot run with
    Invalid { field: &'static str, reason: &'static str },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "tuning parse error: {msg}"),
            Self::Invalid { field, reason } => write!(f, "invalid tuning `{field}`: {reason}"),
        }
    }
}

impl std::error::Error for TuningError {}

/// Simulation balance parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Court half-extents
    pub court_radius: Vec2,
    /// Paddle half-extents
    pub paddle_radius: Vec2,
    /// Distance from side wall to paddle centre
    pub paddle_inset: f32,
    /// How strongly a side hit remaps vertical velocity toward the hit offset
    pub paddle_blend: f32,

    pub ball_base_radius: f32,
    /// Half-open range `[lo, hi)` of the radius jitter applied to spawned balls
    pub ball_radius_jitter: (f32, f32),
    pub max_balls: usize,

    pub spawn_interval: f32,
    pub first_spawn_at: f32,

    pub base_speed: f32,
    pub speed_doubling: f32,
    pub max_speed: f32,

    pub trail_lifetime: f32,

    pub ai_max_speed: f32,
    pub ai_reaction: (f32, f32),
    pub ai_offset_range: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            court_radius: COURT_RADIUS,
            paddle_radius: PADDLE_RADIUS,
            paddle_inset: PADDLE_INSET,
            paddle_blend: PADDLE_BLEND,

            ball_base_radius: BALL_BASE_RADIUS,
            ball_radius_jitter: BALL_RADIUS_JITTER,
            max_balls: MAX_BALLS,

            spawn_interval: SPAWN_INTERVAL,
            first_spawn_at: FIRST_SPAWN_AT,

            base_speed: BALL_BASE_SPEED,
            speed_doubling: BALL_SPEED_DOUBLING,
            max_speed: BALL_MAX_SPEED,

            trail_lifetime: TRAIL_LIFETIME,

            ai_max_speed: AI_MAX_SPEED,
            ai_reaction: AI_REACTION,
            ai_offset_range: AI_OFFSET_RANGE,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self =
            serde_json::from_str(json).map_err(|e| TuningError::Parse(e.to_string()))?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn to_json(&self) -> String {
        // Plain data with string keys; serialization cannot fail
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Check that the parameters describe a playable court
    pub fn validate(&self) -> Result<(), TuningError> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<(), TuningError> {
            Err(TuningError::Invalid { field, reason })
        }

        let finite = [
            ("court_radius", self.court_radius.is_finite()),
            ("paddle_radius", self.paddle_radius.is_finite()),
            ("paddle_inset", self.paddle_inset.is_finite()),
            ("ball_base_radius", self.ball_base_radius.is_finite()),
            ("ball_radius_jitter", self.ball_radius_jitter.1.is_finite()),
            ("spawn_interval", self.spawn_interval.is_finite()),
            ("first_spawn_at", self.first_spawn_at.is_finite()),
            ("max_speed", self.max_speed.is_finite()),
            ("speed_doubling", self.speed_doubling.is_finite()),
            ("trail_lifetime", self.trail_lifetime.is_finite()),
            ("ai_max_speed", self.ai_max_speed.is_finite()),
            ("ai_reaction", self.ai_reaction.1.is_finite()),
            ("ai_offset_range", self.ai_offset_range.is_finite()),
        ];
        if let Some((field, _)) = finite.into_iter().find(|(_, ok)| !ok) {
            return invalid(field, "must be finite");
        }

        if !(self.court_radius.x > 0.0 && self.court_radius.y > 0.0) {
            return invalid("court_radius", "must be positive on both axes");
        }
        if !(self.paddle_radius.x > 0.0 && self.paddle_radius.y > 0.0) {
            return invalid("paddle_radius", "must be positive on both axes");
        }
        if self.paddle_radius.y > self.court_radius.y {
            return invalid("paddle_radius", "paddle is taller than the court");
        }
        if !(self.paddle_inset > 0.0 && self.paddle_inset < self.court_radius.x) {
            return invalid("paddle_inset", "must lie inside the court");
        }
        if !(0.0..=1.0).contains(&self.paddle_blend) {
            return invalid("paddle_blend", "must be within [0, 1]");
        }
        let (lo, hi) = self.ball_radius_jitter;
        if !(lo >= 0.0 && lo < hi) {
            return invalid("ball_radius_jitter", "expected 0 <= lo < hi");
        }
        if !(self.ball_base_radius - hi > 0.0) {
            return invalid("ball_base_radius", "jitter could produce a non-positive radius");
        }
        if self.ball_base_radius + hi >= self.court_radius.min_element() {
            return invalid("ball_base_radius", "largest ball does not fit in the court");
        }
        if self.max_balls == 0 {
            return invalid("max_balls", "at least one ball is required");
        }
        if !(self.spawn_interval > 0.0) {
            return invalid("spawn_interval", "must be positive");
        }
        if !(self.base_speed > 0.0 && self.max_speed >= self.base_speed) {
            return invalid("max_speed", "expected 0 < base_speed <= max_speed");
        }
        if !(self.speed_doubling > 0.0) {
            return invalid("speed_doubling", "must be positive");
        }
        if !(self.trail_lifetime > 0.0) {
            return invalid("trail_lifetime", "must be positive");
        }
        let (lo, hi) = self.ai_reaction;
        if !(lo > 0.0 && lo < hi) {
            return invalid("ai_reaction", "expected 0 < lo < hi");
        }
        if !(self.ai_max_speed >= 0.0 && self.ai_offset_range >= 0.0) {
            return invalid("ai_max_speed", "AI speed and offset range must be non-negative");
        }
        Ok(())
    }

    /// Effective ball speed for the given age
    #[inline]
    pub fn speed_at(&self, age: f32) -> f32 {
        crate::ramp_speed(age, self.base_speed, self.speed_doubling, self.max_speed)
    }

    /// Fixed x position of a paddle on the given side
    pub fn paddle_x(&self, side: crate::sim::Side) -> f32 {
        side.sign() * (self.court_radius.x - self.paddle_inset)
    }
}
