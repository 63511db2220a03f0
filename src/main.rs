//! Rainbow Pong headless host
//!
//! Runs the simulation at a fixed timestep with a scripted human paddle and
//! logs what happens. Usage: `rainbow-pong [seed] [seconds]`.
//! Set `RAINBOW_PONG_TUNING` to a JSON file to override game balance.

#![cfg_attr(target_arch = "wasm32", allow(unused))]

use std::error::Error;

use glam::UVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use rainbow_pong::consts::SIM_DT;
use rainbow_pong::renderer::project;
use rainbow_pong::sim::{GameEvent, GameState, Score, Side, TickInput, tick};
use rainbow_pong::{Settings, Tuning};

const DEFAULT_SEED: u64 = 0x5eed;
const DEFAULT_SECONDS: f32 = 60.0;

fn load_tuning() -> Result<Tuning, Box<dyn Error>> {
    match std::env::var("RAINBOW_PONG_TUNING") {
        Ok(path) => {
            let json = std::fs::read_to_string(&path)?;
            let tuning = Tuning::from_json(&json)?;
            log::info!("Loaded tuning from {}", path);
            Ok(tuning)
        }
        Err(_) => Ok(Tuning::default()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = match args.next() {
        Some(s) => s.parse::<u64>()?,
        None => DEFAULT_SEED,
    };
    let seconds = match args.next() {
        Some(s) => s.parse::<f32>()?,
        None => DEFAULT_SECONDS,
    };

    let tuning = load_tuning()?;
    let mut state = GameState::with_rng(tuning, Pcg32::seed_from_u64(seed));
    let mut score = Score::default();
    let settings = Settings::default();

    log::info!("Rainbow Pong (headless) seed {} for {}s", seed, seconds);

    let frames = (seconds / SIM_DT).ceil() as u64;
    let mut paddle_hits = 0u32;
    let mut wall_hits = 0u32;

    for frame in 0..frames {
        let t = frame as f32 * SIM_DT;
        let input = TickInput {
            paddle_y: Some((t * 1.7).sin() * state.court.radius.y),
        };
        tick(&mut state, &input, SIM_DT);

        for event in &state.events {
            match *event {
                GameEvent::PaddleHit { .. } => paddle_hits += 1,
                GameEvent::WallHit { ball } => {
                    wall_hits += 1;
                    // Demo scoring: a ball reaching an end wall scores for the other side
                    let b = &state.balls[ball];
                    let edge = state.court.radius.x - b.radius.x;
                    if b.pos.x >= edge {
                        score.left += 1;
                    } else if b.pos.x <= -edge {
                        score.right += 1;
                    }
                }
                GameEvent::BallSpawned { .. } => {}
            }
        }

        if frame % 120 == 0 {
            log::debug!(
                "t={:.1}s balls={} opponent_y={:.2} score {}-{}",
                t,
                state.balls.len(),
                state.opponent.pos.y,
                score.left,
                score.right
            );
        }
    }

    let frame = project(&state, score, &settings, UVec2::new(1280, 720));
    let owned = |side: Side| state.balls.iter().filter(|b| b.owner == Some(side)).count();

    log::info!(
        "Done: {} balls ({} left-owned, {} right-owned), {} paddle hits, {} wall hits",
        state.balls.len(),
        owned(Side::Left),
        owned(Side::Right),
        paddle_hits,
        wall_hits
    );
    log::info!(
        "Final frame: {} rects, {} vertices, score {}-{}",
        frame.rects.len(),
        frame.vertices().len(),
        score.left,
        score.right
    );

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The headless host only runs natively; browser hosts drive the library directly
}
