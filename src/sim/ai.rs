//! Reactive opponent paddle
//!
//! The opponent chases the nearest ball that is heading its way and was last
//! touched by the other side, aiming a little above or below it. The aim offset
//! is re-rolled on a short random timer so the opponent is beatable.

use rand::Rng;

use super::state::{Ball, Paddle};
use crate::tuning::Tuning;

/// Opponent controller state
#[derive(Debug, Clone)]
pub struct OpponentController {
    /// Seconds until the aim offset is re-rolled
    pub reaction_timer: f32,
    /// Signed offset added to the tracked ball's y
    pub target_offset: f32,
    /// Units per second
    pub max_speed: f32,
    pub reaction: (f32, f32),
    pub offset_range: f32,
}

impl OpponentController {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            reaction_timer: 0.0,
            target_offset: 0.0,
            max_speed: tuning.ai_max_speed,
            reaction: tuning.ai_reaction,
            offset_range: tuning.ai_offset_range,
        }
    }

    /// Count down the reaction timer and re-roll the aim when it runs out.
    ///
    /// Expiry is checked against `elapsed` rather than zero: a timer that would
    /// run out during the next frame of the same length fires now.
    pub fn update_reaction<R: Rng>(&mut self, rng: &mut R, elapsed: f32) {
        self.reaction_timer -= elapsed;
        if self.reaction_timer < elapsed {
            let (lo, hi) = self.reaction;
            self.reaction_timer = if lo < hi { rng.random_range(lo..hi) } else { lo };
            self.target_offset = if self.offset_range > 0.0 {
                rng.random_range(-self.offset_range..self.offset_range)
            } else {
                0.0
            };
            log::debug!(
                "Opponent re-aims: offset {:.3}, next in {:.2}s",
                self.target_offset,
                self.reaction_timer
            );
        }
    }

    /// Index of the ball the paddle should chase, if any.
    ///
    /// Candidates move toward the paddle's side and are owned by the opposing
    /// side; the closest one (Euclidean) wins.
    pub fn select_target(paddle: &Paddle, balls: &[Ball]) -> Option<usize> {
        let toward = paddle.side.sign();
        let shooter = paddle.side.opponent();

        balls
            .iter()
            .enumerate()
            .filter(|(_, ball)| ball.vel.x * toward > 0.0 && ball.owner == Some(shooter))
            .map(|(i, ball)| (i, ball.pos.distance_squared(paddle.pos)))
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(i, _)| i)
    }

    /// Move the paddle toward the chosen ball, never overshooting the aim point.
    ///
    /// With no candidate the paddle holds still. Returns the tracked index.
    pub fn track(&self, paddle: &mut Paddle, balls: &[Ball], elapsed: f32) -> Option<usize> {
        let target = Self::select_target(paddle, balls)?;
        let aim = balls[target].pos.y + self.target_offset;
        let max_step = self.max_speed * elapsed;

        paddle.pos.y = if paddle.pos.y < aim {
            aim.min(paddle.pos.y + max_step)
        } else {
            aim.max(paddle.pos.y - max_step)
        };
        Some(target)
    }

    /// Full per-frame update: reaction timer, then tracking
    pub fn steer<R: Rng>(
        &mut self,
        paddle: &mut Paddle,
        balls: &[Ball],
        rng: &mut R,
        elapsed: f32,
    ) -> Option<usize> {
        self.update_reaction(rng, elapsed);
        self.track(paddle, balls, elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Side;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn setup() -> (OpponentController, Paddle) {
        let tuning = Tuning::default();
        (
            OpponentController::new(&tuning),
            Paddle::new(Side::Right, &tuning),
        )
    }

    fn ball(pos: Vec2, vel: Vec2, owner: Option<Side>) -> Ball {
        Ball::new(pos, vel, Vec2::splat(0.2), owner, 1.3)
    }

    #[test]
    fn test_select_nearest_inbound_player_ball() {
        let (_, paddle) = setup();
        let balls = vec![
            // Heading away
            ball(Vec2::new(5.0, 0.0), Vec2::new(-1.0, 0.0), Some(Side::Left)),
            // Already touched by the opponent
            ball(Vec2::new(6.0, 0.0), Vec2::new(1.0, 0.0), Some(Side::Right)),
            // Neutral opening ball
            ball(Vec2::new(5.5, 0.0), Vec2::new(1.0, 0.0), None),
            ball(Vec2::new(0.0, 2.0), Vec2::new(1.0, 0.2), Some(Side::Left)),
            ball(Vec2::new(3.0, -1.0), Vec2::new(1.0, -0.2), Some(Side::Left)),
        ];

        assert_eq!(OpponentController::select_target(&paddle, &balls), Some(4));
    }

    #[test]
    fn test_no_candidate_holds_position() {
        let (ai, mut paddle) = setup();
        paddle.pos.y = 1.5;
        let balls = vec![ball(Vec2::new(3.0, -3.0), Vec2::new(-1.0, 0.0), Some(Side::Left))];

        assert_eq!(ai.track(&mut paddle, &balls, 0.1), None);
        assert_eq!(paddle.pos.y, 1.5);
        assert_eq!(ai.track(&mut paddle, &[], 0.1), None);
        assert_eq!(paddle.pos.y, 1.5);
    }

    #[test]
    fn test_track_converges_without_overshoot() {
        let (ai, mut paddle) = setup();
        let dt = 1.0 / 60.0;
        let max_step = ai.max_speed * dt;
        let balls = vec![ball(Vec2::new(2.0, 3.0), Vec2::new(1.0, 0.0), Some(Side::Left))];

        let mut last_gap = f32::INFINITY;
        for _ in 0..120 {
            ai.track(&mut paddle, &balls, dt);
            let gap = 3.0 - paddle.pos.y;
            assert!(gap >= 0.0, "overshot by {}", -gap);
            assert!(gap <= last_gap);
            last_gap = gap;
        }
        assert!(last_gap <= max_step);
        assert_eq!(paddle.pos.y, 3.0);
    }

    #[test]
    fn test_track_applies_offset_and_speed_limit() {
        let (mut ai, mut paddle) = setup();
        ai.target_offset = -1.0;
        let balls = vec![ball(Vec2::new(0.0, -4.0), Vec2::new(1.0, 0.0), Some(Side::Left))];

        ai.track(&mut paddle, &balls, 0.1);
        assert!((paddle.pos.y - -1.0).abs() < 1e-6, "one full step of 10 * 0.1");
    }

    #[test]
    fn test_reaction_reroll_ranges() {
        let (mut ai, _) = setup();
        let mut rng = Pcg32::seed_from_u64(3);

        for _ in 0..200 {
            ai.update_reaction(&mut rng, 1.0 / 60.0);
            assert!(ai.reaction_timer < 1.0);
            assert!((-1.25..1.25).contains(&ai.target_offset));
        }
    }

    #[test]
    fn test_reaction_fires_one_frame_early() {
        let (mut ai, _) = setup();
        let mut rng = Pcg32::seed_from_u64(11);
        ai.reaction_timer = 0.15;
        ai.target_offset = 5.0;

        // 0.05 left is still positive but shorter than the frame
        ai.update_reaction(&mut rng, 0.1);
        assert!((0.5..1.0).contains(&ai.reaction_timer), "timer {}", ai.reaction_timer);
        assert!((-1.25..1.25).contains(&ai.target_offset));
    }

    #[test]
    fn test_reaction_waits_for_timer() {
        let (mut ai, _) = setup();
        let mut rng = Pcg32::seed_from_u64(3);
        ai.reaction_timer = 0.8;
        ai.target_offset = 0.5;

        ai.update_reaction(&mut rng, 0.1);
        assert!((ai.reaction_timer - 0.7).abs() < 1e-6);
        assert_eq!(ai.target_offset, 0.5);
    }
}
