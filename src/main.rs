//! Engine-protocol bot runner (default binary).
//!
//! Reads the game engine's line protocol on stdin and answers each action
//! request with a move string on stdout. Configuration comes from the
//! environment; diagnostics, when enabled, go to stderr only.

use std::io;

use anyhow::Result;

use blockbot::adapter::runtime::{run, BotConfig};

fn main() -> Result<()> {
    let config = BotConfig::from_env()?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&config, stdin.lock(), stdout.lock())
}
