//! Time-decaying position history for ball trails
//!
//! Samples are stored oldest-first: new samples are pushed at the back and
//! expired ones popped from the front. Ages never decrease from the newest
//! sample to the oldest.

use std::collections::VecDeque;

use glam::Vec2;

/// A recorded ball position and how long ago it was recorded
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailSample {
    pub pos: Vec2,
    pub age: f32,
}

/// Bounded-duration trail of one ball
#[derive(Debug, Clone)]
pub struct TrailBuffer {
    samples: VecDeque<TrailSample>,
    lifetime: f32,
}

impl TrailBuffer {
    pub fn new(lifetime: f32) -> Self {
        Self {
            samples: VecDeque::new(),
            lifetime,
        }
    }

    /// Trail for a ball that has "always" been at `pos`.
    ///
    /// Two samples span the whole lifetime so a fresh ball draws a full,
    /// stationary trail on its first frame instead of growing one.
    pub fn seeded(pos: Vec2, lifetime: f32) -> Self {
        let mut trail = Self::new(lifetime);
        trail.samples.push_back(TrailSample { pos, age: lifetime });
        trail.samples.push_back(TrailSample { pos, age: 0.0 });
        trail
    }

    #[inline]
    pub fn lifetime(&self) -> f32 {
        self.lifetime
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn newest(&self) -> Option<&TrailSample> {
        self.samples.back()
    }

    pub fn oldest(&self) -> Option<&TrailSample> {
        self.samples.front()
    }

    /// Samples from newest to oldest
    pub fn iter(&self) -> impl Iterator<Item = &TrailSample> {
        self.samples.iter().rev()
    }

    /// Record a fresh sample
    pub fn append(&mut self, pos: Vec2) {
        self.samples.push_back(TrailSample { pos, age: 0.0 });
    }

    pub fn age_all(&mut self, dt: f32) {
        for sample in &mut self.samples {
            sample.age += dt;
        }
    }

    /// Drop expired samples.
    ///
    /// The oldest sample only goes once the one after it has also expired, so
    /// there is always a pair bracketing the lifetime boundary.
    pub fn trim(&mut self) {
        while self.samples.len() >= 2 && self.samples[1].age > self.lifetime {
            self.samples.pop_front();
        }
    }

    /// Per-frame maintenance: age, append, trim
    pub fn record(&mut self, pos: Vec2, dt: f32) {
        self.age_all(dt);
        self.append(pos);
        self.trim();
    }

    /// Position the ball had `t` seconds ago, interpolated between the two
    /// samples that bracket `t`.
    ///
    /// Returns `None` when the trail cannot cover `t`; callers skip that instant.
    pub fn sample_at(&self, t: f32) -> Option<Vec2> {
        if self.samples.len() < 2 || !t.is_finite() {
            return None;
        }

        let mut newer = self.samples.back()?;
        if t < newer.age {
            return None;
        }

        for older in self.samples.iter().rev().skip(1) {
            if older.age >= t {
                let span = older.age - newer.age;
                if span <= f32::EPSILON {
                    return Some(newer.pos);
                }
                let f = (t - newer.age) / span;
                return Some(newer.pos.lerp(older.pos, f));
            }
            newer = older;
        }

        None
    }
}
