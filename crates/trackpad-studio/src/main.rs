use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use trackpad_engine::coords::{Rect, Vec2};
use trackpad_engine::input::{CoordinatorConfig, DebouncedNotifier, InputCoordinator, LogNotifier};
use trackpad_engine::logging::{LoggingConfig, WriteStyle, init_logging};
use trackpad_engine::paint::Rgb;

mod cli;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::default();
    if let Some(filter) = &cli.log {
        logging = logging.env_filter(filter.clone());
    }
    if cli.no_color {
        logging = logging.write_style(WriteStyle::Never);
    }
    init_logging(logging);

    let frame = Rect::new(0.0, 0.0, cli.width, cli.height);
    frame
        .size
        .validated()
        .context("--width and --height must both be positive")?;

    let notifier = DebouncedNotifier::with_interval(LogNotifier, Duration::from_millis(cli.debounce_ms));
    let coordinator = InputCoordinator::with_config(
        notifier,
        CoordinatorConfig { radius: cli.radius },
    );

    let samples = if cli.samples.is_empty() {
        sweep(frame)
    } else {
        cli.samples.clone()
    };

    log::debug!("running {} samples", samples.len());

    let radius = cli.radius.unwrap_or_else(|| frame.min_extent());
    println!();
    println!("  circular trackpad  {}x{}  radius {}", cli.width, cli.height, radius);
    println!("  ──────────────────────────────────────────────────────────────");

    for point in samples {
        let sample = coordinator
            .process_frame(point, frame)
            .with_context(|| format!("processing sample ({}, {})", point.x, point.y))?;

        println!(
            "  ({:>8.2}, {:>8.2})  ->  cursor ({:>8.3}, {:>8.3})  {}  {}{}",
            point.x,
            point.y,
            sample.cursor.x,
            sample.cursor.y,
            swatch(sample.color, cli.no_color),
            sample.color,
            if sample.clamped() { "  [bump]" } else { "" },
        );
    }
    println!();

    Ok(())
}

/// Corners and center of `frame`.
fn sweep(frame: Rect) -> Vec<Vec2> {
    let min = frame.min();
    let max = frame.max();
    vec![
        frame.center(),
        Vec2::new(min.x, min.y),
        Vec2::new(max.x, min.y),
        Vec2::new(min.x, max.y),
        Vec2::new(max.x, max.y),
    ]
}

fn swatch(color: Rgb, plain: bool) -> String {
    if plain {
        return String::new();
    }
    let [r, g, b] = color.to_srgb_u8();
    format!("\x1b[48;2;{r};{g};{b}m    \x1b[0m")
}
