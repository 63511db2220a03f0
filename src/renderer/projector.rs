//! Projection of game state into drawable rectangles
//!
//! Read-only: nothing here mutates simulation state. The renderer gets a list
//! of rectangles in draw order plus the court-to-clip transform to place them.

use glam::{Affine2, Mat2, Mat4, UVec2, Vec2, Vec4};

use super::shapes::{Rect, triangulate};
use super::vertex::{Vertex, colors};
use crate::settings::{Settings, TrailStyle};
use crate::sim::{GameState, Score, Side};

/// Thickness (half) of the court walls
pub const WALL_RADIUS: f32 = 0.05;
/// Drop shadow displacement (downward)
pub const SHADOW_OFFSET: f32 = 0.07;
/// Space between the outside of the walls and the edge of the window
pub const PADDING: f32 = 0.14;
/// Half-size of one score pip
pub const SCORE_RADIUS: Vec2 = Vec2::new(0.1, 0.1);

/// Court-space <-> clip-space mapping for a given window shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CourtTransform {
    pub court_to_clip: Affine2,
    pub clip_to_court: Affine2,
}

impl CourtTransform {
    /// Fit the scene rectangle into clip space, keeping court units square
    pub fn fit(scene_min: Vec2, scene_max: Vec2, drawable_size: UVec2) -> Self {
        let size = drawable_size.max(UVec2::ONE).as_vec2();
        let aspect = size.x / size.y;
        let extent = scene_max - scene_min;

        // x must fit in [-aspect, aspect], y in [-1, 1]
        let scale = (2.0 * aspect / extent.x).min(2.0 / extent.y);
        let center = 0.5 * (scene_max + scene_min);
        let axis_scale = Vec2::new(scale / aspect, scale);

        Self {
            court_to_clip: Affine2::from_mat2_translation(
                Mat2::from_diagonal(axis_scale),
                -center * axis_scale,
            ),
            clip_to_court: Affine2::from_mat2_translation(
                Mat2::from_diagonal(axis_scale.recip()),
                center,
            ),
        }
    }

    #[inline]
    pub fn to_clip(&self, court: Vec2) -> Vec2 {
        self.court_to_clip.transform_point2(court)
    }

    #[inline]
    pub fn to_court(&self, clip: Vec2) -> Vec2 {
        self.clip_to_court.transform_point2(clip)
    }

    /// Object-to-clip matrix for the shader uniform
    pub fn court_to_clip_mat4(&self) -> Mat4 {
        let m = self.court_to_clip.matrix2;
        let t = self.court_to_clip.translation;
        Mat4::from_cols(
            Vec4::new(m.x_axis.x, m.x_axis.y, 0.0, 0.0),
            Vec4::new(m.y_axis.x, m.y_axis.y, 0.0, 0.0),
            Vec4::Z,
            Vec4::new(t.x, t.y, 0.0, 1.0),
        )
    }
}

/// Window pixel (top-left origin, +y down) to clip space (+y up), sampling pixel centres
pub fn pixel_to_clip(pixel: Vec2, window_size: UVec2) -> Vec2 {
    let size = window_size.max(UVec2::ONE).as_vec2();
    Vec2::new(
        (pixel.x + 0.5) / size.x * 2.0 - 1.0,
        (pixel.y + 0.5) / size.y * -2.0 + 1.0,
    )
}

/// One frame of drawable geometry
#[derive(Debug, Clone)]
pub struct Frame {
    /// Rectangles in draw order (back to front)
    pub rects: Vec<Rect>,
    pub transform: CourtTransform,
}

impl Frame {
    /// Pre-triangulated geometry for renderers that want a vertex buffer
    pub fn vertices(&self) -> Vec<Vertex> {
        triangulate(&self.rects)
    }
}

/// Visible court area including walls, score row and padding
pub fn scene_bounds(court_radius: Vec2) -> (Vec2, Vec2) {
    let min = -court_radius - Vec2::splat(2.0 * WALL_RADIUS + PADDING);
    let max = Vec2::new(
        court_radius.x + 2.0 * WALL_RADIUS + PADDING,
        court_radius.y + 2.0 * WALL_RADIUS + 3.0 * SCORE_RADIUS.y + PADDING,
    );
    (min, max)
}

/// Project the current state into a frame.
///
/// Draw order: shadows (optional), trails, walls, paddles, balls, score pips.
pub fn project<R>(
    state: &GameState<R>,
    score: Score,
    settings: &Settings,
    drawable_size: UVec2,
) -> Frame {
    let court = state.court.radius;
    let mut solids = Vec::new();

    // Walls
    let side_wall = Vec2::new(WALL_RADIUS, court.y + 2.0 * WALL_RADIUS);
    let end_wall = Vec2::new(court.x, WALL_RADIUS);
    solids.push(Rect::new(Vec2::new(-court.x - WALL_RADIUS, 0.0), side_wall, colors::FOREGROUND));
    solids.push(Rect::new(Vec2::new(court.x + WALL_RADIUS, 0.0), side_wall, colors::FOREGROUND));
    solids.push(Rect::new(Vec2::new(0.0, -court.y - WALL_RADIUS), end_wall, colors::FOREGROUND));
    solids.push(Rect::new(Vec2::new(0.0, court.y + WALL_RADIUS), end_wall, colors::FOREGROUND));

    for paddle in [Side::Left, Side::Right].map(|side| state.paddle(side)) {
        solids.push(Rect::new(paddle.pos, paddle.radius, colors::paddle(paddle.side)));
    }
    for ball in &state.balls {
        solids.push(Rect::new(ball.pos, ball.radius, colors::FOREGROUND));
    }

    let mut rects = Vec::with_capacity(solids.len() * 2 + state.balls.len() * colors::RAINBOW.len());

    if settings.shadows {
        let offset = Vec2::new(0.0, -SHADOW_OFFSET);
        rects.extend(solids.iter().map(|r| r.shadow(offset, colors::SHADOW)));
    }

    // Trails, oldest instant first
    let palette = &colors::RAINBOW;
    let slots = settings.trail_slots(palette.len());
    for ball in &state.balls {
        let lifetime = ball.trail.lifetime();
        for i in (0..slots).rev() {
            let t = (i + 1) as f32 / slots as f32 * lifetime;
            let Some(at) = ball.trail.sample_at(t) else {
                continue;
            };
            let color = match settings.trail_style {
                TrailStyle::Owner => colors::trail(ball.owner),
                TrailStyle::Rainbow => palette[i * palette.len() / slots],
            };
            rects.push(Rect::new(at, ball.radius, color));
        }
    }

    rects.extend(solids);

    if settings.show_score {
        let y = court.y + 2.0 * WALL_RADIUS + 2.0 * SCORE_RADIUS.y;
        for i in 0..score.left {
            let x = -court.x + (2.0 + 3.0 * i as f32) * SCORE_RADIUS.x;
            rects.push(Rect::new(Vec2::new(x, y), SCORE_RADIUS, colors::FOREGROUND));
        }
        for i in 0..score.right {
            let x = court.x - (2.0 + 3.0 * i as f32) * SCORE_RADIUS.x;
            rects.push(Rect::new(Vec2::new(x, y), SCORE_RADIUS, colors::FOREGROUND));
        }
    }

    let (scene_min, scene_max) = scene_bounds(court);
    Frame {
        rects,
        transform: CourtTransform::fit(scene_min, scene_max, drawable_size),
    }
}
