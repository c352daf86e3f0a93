use std::path::PathBuf;

use clap::Parser;

/// Two-player tic-tac-toe with persistent scores
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "tic_tac_toe", version, about)]
pub struct Config {
    /// File holding tallies and match history
    #[arg(long, env = "TICTACTOE_DATA", default_value = "tictactoe-scores.json")]
    pub data_file: PathBuf,

    /// Keep scores in memory only
    #[arg(long)]
    pub no_persist: bool,

    /// Largest display scale of the 960x540 surface
    #[arg(long, default_value_t = 1.0, value_parser = parse_scale)]
    pub max_scale: f32,
}

fn parse_scale(value: &str) -> Result<f32, String> {
    let scale: f32 = value.parse().map_err(|_| format!("`{}` is not a number", value))?;
    if scale.is_finite() && scale > 0.0 {
        Ok(scale)
    } else {
        Err(format!("scale must be positive, got {}", scale))
    }
}
