//! Headless simulator (default binary).
//!
//! Plays one game with the reference driver: each piece gets a random number
//! of clockwise turns and a random legal column, then is hard-dropped. Prints
//! a summary line followed by the final board (or the final frame as JSON).
//! Log verbosity follows `RUST_LOG` (default `info`).

mod config;

use anyhow::{Context, Result};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use tetris_rules::core::SimpleRng;
use tetris_rules::engine::{apply_place, x_range, GameAction, GameState};

use crate::config::SimConfig;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = SimConfig::from_env();
    info!(?config, "starting simulation");

    let mut rng = SimpleRng::new(config.seed);
    let mut game = GameState::new(&mut rng);
    let mut pieces = 0usize;

    while !game.game_over() && pieces < config.max_pieces {
        game = place_random(&game, &mut rng);
        pieces += 1;
    }

    println!(
        "pieces={} score={} lines={} level={} game_over={}",
        pieces,
        game.score(),
        game.lines(),
        game.level(),
        game.game_over()
    );

    if config.json {
        let json = serde_json::to_string_pretty(&game.snapshot())
            .context("serializing final frame")?;
        println!("{json}");
    } else {
        print!("{}", game.board());
    }

    Ok(())
}

/// Random rotation and column; a refused placement drops the piece where it is.
fn place_random(game: &GameState, rng: &mut SimpleRng) -> GameState {
    let rotations = rng.next_range(4) as u8;
    let Some((lo, hi)) = x_range(game, rotations) else {
        return game.clone();
    };
    let target_x = lo + rng.next_range((hi - lo + 1) as u32) as i32;

    match apply_place(game, target_x, rotations, rng) {
        Ok(next) => next,
        Err(err) => {
            debug!(%err, target_x, rotations, "placement refused, dropping in place");
            game.apply_action(GameAction::HardDrop, rng)
        }
    }
}
