mod cli;

use std::path::Path;

use anyhow::{Context, Result};
use bouquet_engine::logging::{init_logging, LoggingConfig};
use bouquet_engine::paint::{PixelBuffer, ResampleConfig};
use bouquet_engine::render::UniformTable;
use bouquet_ui::prelude::*;
use clap::Parser;
use serde::Deserialize;

use cli::{merge_config, Cli, Command};

/// Object form of a stops file. `stops` stays dynamic so element errors are
/// reported by the stop list itself.
#[derive(Debug, Deserialize)]
struct GradientFile {
    #[serde(default)]
    config: Option<ResampleConfig>,
    stops: serde_json::Value,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(LoggingConfig {
        env_filter: cli.log.clone(),
        ..Default::default()
    });

    let alpha = cli.alpha_mode();

    let image = match &cli.command {
        Command::Linear {
            stops,
            stops_file,
            resolution,
            reversed,
        } => {
            let (file_config, stop_values) = match stops_file {
                Some(path) => {
                    let (file_config, value) = read_stops_file(path)?;
                    (file_config, Some(value))
                }
                None => (None, None),
            };
            let config = merge_config(file_config, *resolution, *reversed, alpha);

            let mut g = LinearGradient::with_config(UniformTable::new(), config);
            match stop_values {
                Some(value) => g.set_color_stops_json(&value),
                None => g.set_color_stops(stops.clone()),
            }
            .context("invalid color stops")?;
            g.render_texture(cli.width, cli.height)
        }
        Command::Bilinear {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
        } => {
            let mut g = BilinearGradient::new().alpha_mode(alpha);
            if let Some(c) = top_left {
                g.set_top_left_color(c.as_str()).context("--top-left")?;
            }
            if let Some(c) = top_right {
                g.set_top_right_color(c.as_str()).context("--top-right")?;
            }
            if let Some(c) = bottom_left {
                g.set_bottom_left_color(c.as_str()).context("--bottom-left")?;
            }
            if let Some(c) = bottom_right {
                g.set_bottom_right_color(c.as_str()).context("--bottom-right")?;
            }
            g.render_texture(cli.width, cli.height)
        }
        Command::Radial { center, border } => {
            let mut g = RadialGradient::new().alpha_mode(alpha);
            if let Some(c) = center {
                g.set_center_color(c.as_str()).context("--center")?;
            }
            if let Some(c) = border {
                g.set_border_color(c.as_str()).context("--border")?;
            }
            g.render_texture(cli.width, cli.height)
        }
    };

    write_png(&cli.output, image)?;
    log::info!(
        "wrote {}x{} gradient to {}",
        cli.width,
        cli.height,
        cli.output.display()
    );
    Ok(())
}

fn read_stops_file(path: &Path) -> Result<(Option<ResampleConfig>, serde_json::Value)> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;

    if value.is_array() {
        return Ok((None, value));
    }
    let file: GradientFile = serde_json::from_value(value)
        .with_context(|| format!("{} is neither a stop array nor a gradient object", path.display()))?;
    Ok((file.config, file.stops))
}

fn write_png(path: &Path, image: PixelBuffer) -> Result<()> {
    let (width, height) = image.size();
    let buffer = image::RgbaImage::from_raw(width, height, image.into_pixels())
        .context("pixel buffer does not match image size")?;
    buffer
        .save(path)
        .with_context(|| format!("failed to write {}", path.display()))
}
