use std::path::PathBuf;

use bouquet_engine::paint::{AlphaMode, ColorStop, Orientation, ResampleConfig};
use clap::{Parser, Subcommand};

/// Render Bouquet gradient widgets to PNG files.
#[derive(Debug, Parser)]
#[command(name = "bouquet-studio", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output PNG path.
    #[arg(short, long, global = true, default_value = "gradient.png")]
    pub output: PathBuf,

    /// Image width in pixels.
    #[arg(long, global = true, default_value_t = 100)]
    pub width: u32,

    /// Image height in pixels.
    #[arg(long, global = true, default_value_t = 100)]
    pub height: u32,

    /// Write premultiplied RGB instead of straight alpha.
    #[arg(long, global = true)]
    pub premultiplied: bool,

    /// Log filter in env_logger syntax (defaults to RUST_LOG, then "info").
    #[arg(long, global = true)]
    pub log: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Multi-stop gradient from left to right.
    Linear {
        /// Color stop as POSITION:COLOR, e.g. `0.5:#ff8800`. Repeatable.
        #[arg(long = "stop", value_parser = parse_stop)]
        stops: Vec<ColorStop>,

        /// JSON file with a stop array, or `{"config": {...}, "stops": [...]}`.
        #[arg(long, conflicts_with = "stops")]
        stops_file: Option<PathBuf>,

        /// Lookup texture resolution, also the maximum number of stops
        /// [default: stops file value, else 1024].
        #[arg(long)]
        resolution: Option<usize>,

        /// Map position 0.0 to the right edge.
        #[arg(long)]
        reversed: bool,
    },
    /// Four-corner gradient.
    Bilinear {
        #[arg(long)]
        top_left: Option<String>,
        #[arg(long)]
        top_right: Option<String>,
        #[arg(long)]
        bottom_left: Option<String>,
        #[arg(long)]
        bottom_right: Option<String>,
    },
    /// Center-to-border gradient.
    Radial {
        #[arg(long)]
        center: Option<String>,
        #[arg(long)]
        border: Option<String>,
    },
}

impl Cli {
    /// PNG alpha handling. Straight unless `--premultiplied`.
    pub fn alpha_mode(&self) -> AlphaMode {
        if self.premultiplied {
            AlphaMode::Premultiplied
        } else {
            AlphaMode::Straight
        }
    }
}

/// Resampler settings for `linear`.
///
/// Starts from the stops file's `config` (or the defaults); explicit
/// `--resolution`/`--reversed` win over it and `alpha` always comes from the
/// command line.
pub fn merge_config(
    file: Option<ResampleConfig>,
    resolution: Option<usize>,
    reversed: bool,
    alpha: AlphaMode,
) -> ResampleConfig {
    let mut config = file.unwrap_or_default();
    if let Some(width) = resolution {
        config.width = width;
    }
    if reversed {
        config.orientation = Orientation::Reversed;
    }
    config.alpha = alpha;
    config
}

/// Parses `POSITION:COLOR`. The color part may itself be a hex string or a name.
pub fn parse_stop(s: &str) -> Result<ColorStop, String> {
    let (pos, color) = s
        .split_once(':')
        .ok_or_else(|| format!("expected POSITION:COLOR, got {s:?}"))?;
    let position: f64 = pos
        .trim()
        .parse()
        .map_err(|e| format!("invalid stop position {pos:?}: {e}"))?;
    ColorStop::new(position, color.trim()).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn stop_argument() {
        let s = parse_stop("0.5:#ff0000").unwrap();
        assert_eq!(s.position(), 0.5);
        assert_eq!(s.color().to_array(), [1.0, 0.0, 0.0, 1.0]);

        // out-of-range positions clamp like everywhere else
        assert_eq!(parse_stop("2:white").unwrap().position(), 1.0);

        assert!(parse_stop("red").is_err());
        assert!(parse_stop("x:red").is_err());
        assert!(parse_stop("0.1:nocolor").is_err());
    }

    #[test]
    fn linear_with_stops() {
        let cli = Cli::try_parse_from([
            "bouquet-studio",
            "linear",
            "--stop",
            "0:black",
            "--stop",
            "1:white",
            "--width",
            "256",
            "-o",
            "ramp.png",
        ])
        .unwrap();
        assert_eq!(cli.width, 256);
        assert_eq!(cli.output, PathBuf::from("ramp.png"));
        let Command::Linear { ref stops, reversed, .. } = cli.command else {
            panic!("expected linear");
        };
        assert_eq!(stops.len(), 2);
        assert!(!reversed);
        assert_eq!(cli.alpha_mode(), AlphaMode::Straight);
    }

    // ── config merge ──────────────────────────────────────────────────────

    #[test]
    fn file_config_never_overrides_output_alpha() {
        let file: ResampleConfig = serde_json::from_str(r#"{"width": 4}"#).unwrap();
        assert_eq!(file.alpha, AlphaMode::Premultiplied);

        let config = merge_config(Some(file), None, false, AlphaMode::Straight);
        assert_eq!(config.width, 4);
        assert_eq!(config.alpha, AlphaMode::Straight);
        assert_eq!(config.orientation, Orientation::Forward);
    }

    #[test]
    fn explicit_flags_win_over_file_config() {
        let file = ResampleConfig { width: 4, ..Default::default() };
        let config = merge_config(Some(file), Some(16), true, AlphaMode::Premultiplied);
        assert_eq!(config.width, 16);
        assert_eq!(config.orientation, Orientation::Reversed);
        assert_eq!(config.alpha, AlphaMode::Premultiplied);
    }

    #[test]
    fn file_orientation_kept_without_flag() {
        let file = ResampleConfig { orientation: Orientation::Reversed, ..Default::default() };
        let config = merge_config(Some(file), None, false, AlphaMode::Straight);
        assert_eq!(config.orientation, Orientation::Reversed);
    }

    #[test]
    fn no_file_uses_defaults() {
        let config = merge_config(None, None, false, AlphaMode::Straight);
        assert_eq!(config.width, 1024);
        assert_eq!(config.orientation, Orientation::Forward);
    }

    #[test]
    fn premultiplied_flag() {
        let cli = Cli::try_parse_from(["bouquet-studio", "radial", "--premultiplied"]).unwrap();
        assert_eq!(cli.alpha_mode(), AlphaMode::Premultiplied);
    }
}
