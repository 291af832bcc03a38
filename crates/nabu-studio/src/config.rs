use std::io::IsTerminal;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use nabu_engine::logging::LoggingConfig;

pub const DEFAULT_ENDPOINT: &str = "https://api.randomuser.me/";
pub const DEFAULT_COUNT: u32 = 50;

/// When to emit ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

/// Command line of the contact feed.
#[derive(Debug, Parser)]
#[command(name = "nabu-studio", version, about = "Random contact feed behind a timed loading gate")]
pub struct Cli {
    /// Contact API endpoint; `?results=<count>` is appended.
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Number of contacts to request.
    #[arg(long, default_value_t = DEFAULT_COUNT, value_parser = clap::value_parser!(u32).range(1..=5000))]
    pub count: u32,

    /// Frame width in terminal columns.
    #[arg(long, default_value_t = 80, value_parser = clap::value_parser!(u16).range(20..))]
    pub width: u16,

    /// Frame height in rows. Defaults to fitting the content.
    #[arg(long)]
    pub height: Option<u16>,

    /// Frames per second while waiting for contacts.
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=120))]
    pub fps: u32,

    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Log filter in `env_logger` syntax, e.g. `nabu_ui=debug`. Falls back to `RUST_LOG`.
    #[arg(long)]
    pub log: Option<String>,
}

/// Resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct StudioConfig {
    pub endpoint: String,
    pub count: u32,
    pub width: usize,
    pub height: Option<usize>,
    pub frame_interval: Duration,
    pub ansi: bool,
    pub logging: LoggingConfig,
}

impl Cli {
    pub fn into_config(self) -> StudioConfig {
        let ansi = match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        };
        let write_style = match self.color {
            ColorMode::Always => env_logger::WriteStyle::Always,
            ColorMode::Never => env_logger::WriteStyle::Never,
            ColorMode::Auto => env_logger::WriteStyle::Auto,
        };

        StudioConfig {
            endpoint: self.endpoint,
            count: self.count,
            width: usize::from(self.width),
            height: self.height.map(usize::from),
            frame_interval: Duration::from_secs(1) / self.fps,
            ansi,
            logging: LoggingConfig { env_filter: self.log, write_style },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_public_api() {
        let cfg = Cli::parse_from(["nabu-studio", "--color", "never"]).into_config();
        assert_eq!(cfg.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(cfg.count, 50);
        assert_eq!(cfg.width, 80);
        assert_eq!(cfg.height, None);
        assert_eq!(cfg.frame_interval, Duration::from_millis(100));
        assert!(!cfg.ansi);
    }

    #[test]
    fn explicit_flags_are_applied() {
        let cfg = Cli::parse_from([
            "nabu-studio", "--count", "5", "--width", "40", "--height", "12",
            "--fps", "20", "--color", "always", "--log", "debug",
        ])
        .into_config();
        assert_eq!(cfg.count, 5);
        assert_eq!(cfg.width, 40);
        assert_eq!(cfg.height, Some(12));
        assert_eq!(cfg.frame_interval, Duration::from_millis(50));
        assert!(cfg.ansi);
        assert_eq!(cfg.logging.env_filter.as_deref(), Some("debug"));
    }

    #[test]
    fn zero_count_is_rejected() {
        assert!(Cli::try_parse_from(["nabu-studio", "--count", "0"]).is_err());
    }
}
