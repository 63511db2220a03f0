//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering and
//! platform dependencies:
//! - Randomness only through the injected RNG
//! - Stable iteration order (balls are never removed)

pub mod ai;
pub mod collision;
pub mod state;
pub mod tick;
pub mod trail;

pub use ai::OpponentController;
pub use collision::{Aabb, Bounce, resolve_paddle, resolve_walls};
pub use state::{Ball, Court, GameEvent, GameState, Paddle, Score, Side};
pub use tick::{TickInput, tick};
pub use trail::{TrailBuffer, TrailSample};
