//! Collision detection and response for axis-aligned rectangles
//!
//! Balls, paddles and the court are all boxes. A paddle hit pushes the ball out
//! along the axis with the narrower overlap; walls clamp and reflect.

use glam::Vec2;

use super::state::{Ball, Court, Paddle};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_center(center: Vec2, radius: Vec2) -> Self {
        Self {
            min: center - radius,
            max: center + radius,
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Overlap of two boxes, or `None` if they are apart or only touch
    pub fn intersection(&self, other: &Aabb) -> Option<Aabb> {
        let min = self.min.max(other.min);
        let max = self.max.min(other.max);
        if min.x >= max.x || min.y >= max.y {
            return None;
        }
        Some(Aabb { min, max })
    }
}

/// How a paddle deflected a ball
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bounce {
    /// Ball struck the paddle face and was pushed out sideways
    Horizontal,
    /// Ball struck the top or bottom end and was pushed out vertically
    Vertical,
}

/// Resolve a paddle against a ball, mutating the ball in place.
///
/// The narrower overlap axis is the one the ball is pushed out along; ties go
/// to the paddle face (horizontal bounce).
pub fn resolve_paddle(paddle: &Paddle, ball: &mut Ball, blend: f32) -> Option<Bounce> {
    let paddle_box = Aabb::from_center(paddle.pos, paddle.radius);
    let ball_box = Aabb::from_center(ball.pos, ball.radius);
    let overlap = paddle_box.intersection(&ball_box)?.size();

    let bounce = if overlap.x > overlap.y {
        if ball.pos.y > paddle.pos.y {
            ball.pos.y = paddle.pos.y + paddle.radius.y + ball.radius.y;
            ball.vel.y = ball.vel.y.abs();
        } else {
            ball.pos.y = paddle.pos.y - paddle.radius.y - ball.radius.y;
            ball.vel.y = -ball.vel.y.abs();
        }
        Bounce::Vertical
    } else {
        if ball.pos.x > paddle.pos.x {
            ball.pos.x = paddle.pos.x + paddle.radius.x + ball.radius.x;
            ball.vel.x = ball.vel.x.abs();
        } else {
            ball.pos.x = paddle.pos.x - paddle.radius.x - ball.radius.x;
            ball.vel.x = -ball.vel.x.abs();
        }
        // Steer by where the ball struck the face. The result is not renormalised,
        // so repeated hits drift the direction's magnitude and with it the
        // effective speed on top of the age ramp.
        let offset = (ball.pos.y - paddle.pos.y) / (paddle.radius.y + ball.radius.y);
        ball.vel.y = ball.vel.y + (offset - ball.vel.y) * blend;
        Bounce::Horizontal
    };

    ball.owner = Some(paddle.side);
    Some(bounce)
}

/// Keep a ball inside the court.
///
/// Each wall clamps the position first and then flips velocity only if it still
/// points outward, so a ball already heading back in is left alone.
/// Returns `true` if any wall was touched.
pub fn resolve_walls(court: &Court, ball: &mut Ball) -> bool {
    let limit = court.radius - ball.radius;
    let mut touched = false;

    if ball.pos.y > limit.y {
        ball.pos.y = limit.y;
        if ball.vel.y > 0.0 {
            ball.vel.y = -ball.vel.y;
        }
        touched = true;
    }
    if ball.pos.y < -limit.y {
        ball.pos.y = -limit.y;
        if ball.vel.y < 0.0 {
            ball.vel.y = -ball.vel.y;
        }
        touched = true;
    }

    if ball.pos.x > limit.x {
        ball.pos.x = limit.x;
        if ball.vel.x > 0.0 {
            ball.vel.x = -ball.vel.x;
        }
        touched = true;
    }
    if ball.pos.x < -limit.x {
        ball.pos.x = -limit.x;
        if ball.vel.x < 0.0 {
            ball.vel.x = -ball.vel.x;
        }
        touched = true;
    }

    touched
}
