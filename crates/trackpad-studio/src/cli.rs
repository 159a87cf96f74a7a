use clap::Parser;
use trackpad_engine::coords::Vec2;

pub const DEFAULT_SIZE: f64 = 100.0;
pub const DEFAULT_DEBOUNCE_MS: u64 = 150;

#[derive(Parser, Debug)]
#[command(
    name = "trackpad-studio",
    version,
    about = "Runs pointer samples through the circular trackpad engine"
)]
pub struct Cli {
    #[arg(long, default_value_t = DEFAULT_SIZE, help = "Trackpad width in pixels")]
    pub width: f64,
    #[arg(long, default_value_t = DEFAULT_SIZE, help = "Trackpad height in pixels")]
    pub height: f64,
    #[arg(long, help = "Color wheel radius (defaults to the shorter side)")]
    pub radius: Option<f64>,
    #[arg(long, help = "Log filter in env_logger syntax (overrides RUST_LOG)")]
    pub log: Option<String>,
    #[arg(
        long,
        default_value_t = DEFAULT_DEBOUNCE_MS,
        help = "Minimum gap between boundary notifications"
    )]
    pub debounce_ms: u64,
    #[arg(long, help = "Disable ANSI color swatches and log coloring")]
    pub no_color: bool,
    #[arg(
        value_parser = parse_point,
        allow_hyphen_values = true,
        value_name = "X,Y",
        help = "Pointer samples in screen pixels; defaults to the corners and center"
    )]
    pub samples: Vec<Vec2>,
}

/// Parses `x,y` into a point.
pub fn parse_point(s: &str) -> Result<Vec2, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got `{s}`"))?;
    let x: f64 = x.trim().parse().map_err(|_| format!("invalid x coordinate `{x}`"))?;
    let y: f64 = y.trim().parse().map_err(|_| format!("invalid y coordinate `{y}`"))?;
    Ok(Vec2::new(x, y))
}
