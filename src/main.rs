//! Headless match-3 runner (default binary).
//!
//! Builds a board from a config, then repeatedly plays the swap that matches
//! the most cells until the move budget runs out or the board deadlocks.
//! Useful for eyeballing cascades and checking that a seed replays identically.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::{debug, info, warn};
use serde::Serialize;

use match3::core::{Board, BoardConfig, BoardSnapshot, BoardView};
use match3::engine::{apply_move, best_swap};
use match3::types::Position;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Play a seeded match-3 board with the greedy hint and report the cascades"
)]
struct Cli {
    /// JSON board config (width, height, tile_types, seed, weights)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// RNG seed (overrides the config file and MATCH3_SEED)
    #[arg(long, value_name = "N")]
    seed: Option<u32>,

    /// Maximum number of swaps to play
    #[arg(long, value_name = "N", default_value_t = 50)]
    moves: u32,

    /// Print per-move results and the final board as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct MoveRecord {
    index: u32,
    a: Position,
    b: Position,
    cleared: u32,
    chains: u32,
    created: usize,
}

#[derive(Debug, Serialize)]
struct Report {
    config: BoardConfig,
    moves: Vec<MoveRecord>,
    deadlocked: bool,
    final_board: BoardSnapshot,
}

fn load_config(cli: &Cli) -> Result<BoardConfig> {
    let mut config = match &cli.config {
        Some(path) => BoardConfig::from_json_file(path)
            .with_context(|| format!("invalid config in {}", path.display()))?,
        None => BoardConfig::default(),
    };

    config.apply_env(|key| std::env::var(key).ok())?;
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = load_config(&cli)?;
    let mut board = Board::from_config(&config).context("failed to build board")?;
    info!(
        "board {}x{}, {} tile types, seed {}",
        config.width, config.height, config.tile_types, config.seed
    );

    let mut records = Vec::new();
    let mut deadlocked = false;
    for index in 0..cli.moves {
        let Some(swap) = best_swap(&board) else {
            warn!("no matching swap left after {} moves", index);
            deadlocked = true;
            break;
        };

        let result = apply_move(&mut board, swap.a, swap.b)
            .map_err(|e| anyhow::anyhow!("hinted swap rejected: {}", e.message()))?;
        let created = board.last_created_specials().len();
        debug!(
            "move {}: {} <-> {} cleared {} in {} chain(s), {} special(s)",
            index + 1,
            swap.a,
            swap.b,
            result.cleared,
            result.chains,
            created
        );
        records.push(MoveRecord {
            index: index + 1,
            a: swap.a,
            b: swap.b,
            cleared: result.cleared,
            chains: result.chains,
            created,
        });
    }

    let total_cleared: u32 = records.iter().map(|r| r.cleared).sum();
    let longest_chain = records.iter().map(|r| r.chains).max().unwrap_or(0);
    let specials: usize = records.iter().map(|r| r.created).sum();
    info!(
        "played {} move(s): {} cleared, longest chain {}, {} special(s) created",
        records.len(),
        total_cleared,
        longest_chain,
        specials
    );

    let final_board = BoardSnapshot::capture(&board);
    if cli.json {
        let report = Report {
            config,
            moves: records,
            deadlocked,
            final_board,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", final_board.render_text());
    }

    Ok(())
}
