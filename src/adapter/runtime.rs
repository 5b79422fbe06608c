//! Adapter runtime - the blocking read-dispatch-respond loop
//!
//! Reads engine lines from any `BufRead`, folds them into a
//! [`BotState`], and answers each action request with a move string on
//! the given `Write` sink. I/O is injected so tests can drive a whole
//! session from in-memory buffers.

use std::env;
use std::fs;
use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};

use crate::adapter::protocol::{self, BotState, Message, Setting};
use crate::engine::eval::EvalWeights;
use crate::engine::moves::placement_to_moves;
use crate::engine::search::find_best_placement;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Runtime configuration, read from the environment by the binary
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub weights: EvalWeights,
    /// Follow-up pieces to simulate per candidate; the engine announces
    /// one next piece, so anything above 1 buys nothing
    pub lookahead: u8,
    /// Emit per-turn diagnostics on stderr
    pub log: bool,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            weights: EvalWeights::default(),
            lookahead: 1,
            log: false,
        }
    }
}

impl BotConfig {
    /// Create from environment variables:
    ///
    /// - `BLOCKBOT_WEIGHTS`: path to a JSON weight profile
    /// - `BLOCKBOT_LOOKAHEAD`: 0 disables the second ply
    /// - `BLOCKBOT_LOG`: any non-empty value enables stderr diagnostics
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(path) = env::var("BLOCKBOT_WEIGHTS") {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("reading weight profile {path}"))?;
            config.weights = serde_json::from_str(&text)
                .with_context(|| format!("parsing weight profile {path}"))?;
        }

        if let Ok(value) = env::var("BLOCKBOT_LOOKAHEAD") {
            config.lookahead = value
                .parse()
                .context("BLOCKBOT_LOOKAHEAD must be a small integer")?;
        }

        config.log = env::var("BLOCKBOT_LOG").map(|v| !v.is_empty()).unwrap_or(false);

        Ok(config)
    }
}

/// Run the session until the engine closes its side.
/// Settings that contradict the fixed board dimensions abort the run.
pub fn run(config: &BotConfig, input: impl BufRead, mut output: impl Write) -> Result<()> {
    let mut state = BotState::new();

    for line in input.lines() {
        let line = line.context("reading engine input")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let message =
            protocol::parse_line(line).with_context(|| format!("bad engine line: {line}"))?;

        match message {
            Message::Settings(Setting::FieldWidth(width)) if width != BOARD_WIDTH => {
                bail!("engine field width {width} unsupported, expected {BOARD_WIDTH}");
            }
            Message::Settings(Setting::FieldHeight(height)) if height != BOARD_HEIGHT => {
                bail!("engine field height {height} unsupported, expected {BOARD_HEIGHT}");
            }
            Message::Action { timebank_ms } => {
                let reply = answer_action(config, &state, timebank_ms);
                writeln!(output, "{reply}").context("writing moves")?;
                output.flush().context("flushing moves")?;
            }
            other => state.apply(other),
        }
    }

    Ok(())
}

/// Choose this turn's move string from the accumulated state
fn answer_action(config: &BotConfig, state: &BotState, timebank_ms: u32) -> String {
    let (Some(board), Some(piece)) = (state.field.as_ref(), state.current_piece()) else {
        // action before any field/piece update; nothing sensible to do
        if config.log {
            eprintln!("[blockbot] round {}: action without game state", state.round);
        }
        return protocol::NO_MOVES.to_string();
    };

    match find_best_placement(board, piece, state.next_piece, config.lookahead, &config.weights) {
        Some(placement) => {
            if config.log {
                eprintln!(
                    "[blockbot] round {}: rot={} offset={} score={} (timebank {}ms)",
                    state.round, placement.rotations, placement.offset, placement.score, timebank_ms
                );
            }
            protocol::encode_moves(&placement_to_moves(&placement))
        }
        None => {
            if config.log {
                eprintln!("[blockbot] round {}: no legal placement", state.round);
            }
            protocol::NO_MOVES.to_string()
        }
    }
}
