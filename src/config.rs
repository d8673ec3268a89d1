//! Runtime configuration.
//!
//! Values come from `LIFE_*` environment variables with built-in defaults,
//! then command-line flags override whatever the environment set.
//!
//! - `LIFE_PATTERN`: seed pattern name (default: "cluster")
//! - `LIFE_ENCODING`: "binary" or "aging" (default: "binary")
//! - `LIFE_INTERVAL_MS`: pause between generations (default: 1000, minimum: 100)
//! - `LIFE_GENERATIONS`: successor steps before exit (default: 1000)
//! - `LIFE_RENDER`: "full" or "diff" (default: "full")

use std::time::Duration;

use clap::Parser;

use crate::core::Pattern;
use crate::term::RenderMode;
use crate::types::{Encoding, DEFAULT_GENERATIONS, DEFAULT_INTERVAL_MS, MIN_INTERVAL_MS};

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub pattern: Pattern,
    pub encoding: Encoding,
    pub interval: Duration,
    pub generations: u32,
    pub render: RenderMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pattern: Pattern::default(),
            encoding: Encoding::default(),
            interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
            generations: DEFAULT_GENERATIONS,
            render: RenderMode::default(),
        }
    }
}

impl Config {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup. Unparseable values keep the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(v) = lookup("LIFE_PATTERN") {
            match Pattern::from_str(&v) {
                Some(p) => config.pattern = p,
                None => tracing::warn!(value = %v, "ignoring unknown LIFE_PATTERN"),
            }
        }
        if let Some(v) = lookup("LIFE_ENCODING") {
            match Encoding::from_str(&v) {
                Some(e) => config.encoding = e,
                None => tracing::warn!(value = %v, "ignoring unknown LIFE_ENCODING"),
            }
        }
        if let Some(ms) = lookup("LIFE_INTERVAL_MS").and_then(|s| s.trim().parse().ok()) {
            config.interval = interval_from_ms(ms, "LIFE_INTERVAL_MS");
        }
        if let Some(n) = lookup("LIFE_GENERATIONS").and_then(|s| s.trim().parse().ok()) {
            config.generations = n;
        }
        if let Some(v) = lookup("LIFE_RENDER") {
            match RenderMode::from_str(&v) {
                Some(m) => config.render = m,
                None => tracing::warn!(value = %v, "ignoring unknown LIFE_RENDER"),
            }
        }

        config
    }

    /// Environment config with command-line overrides applied.
    pub fn resolve(args: &Args) -> Self {
        Self::from_env().with_args(args)
    }

    pub fn with_args(mut self, args: &Args) -> Self {
        if let Some(p) = args.pattern {
            self.pattern = p;
        }
        if let Some(e) = args.encoding {
            self.encoding = e;
        }
        if let Some(ms) = args.interval_ms {
            self.interval = interval_from_ms(ms, "--interval-ms");
        }
        if let Some(n) = args.generations {
            self.generations = n;
        }
        if let Some(m) = args.render {
            self.render = m;
        }
        self
    }
}

/// Interval for `ms`, raised to `MIN_INTERVAL_MS` when below it.
fn interval_from_ms(ms: u64, source: &str) -> Duration {
    if ms < MIN_INTERVAL_MS {
        tracing::warn!(
            source,
            requested_ms = ms,
            min_ms = MIN_INTERVAL_MS,
            "interval below minimum, clamping"
        );
    }
    Duration::from_millis(ms.max(MIN_INTERVAL_MS))
}

/// Conway's Game of Life in the terminal
#[derive(Parser, Debug, Default)]
#[command(name = "tui-life")]
#[command(about = "Run Conway's Game of Life full-screen in the terminal")]
pub struct Args {
    /// Seed pattern: cluster, acorn, diehard, blinker, glider
    #[arg(long, short = 'p', value_parser = parse_pattern)]
    pub pattern: Option<Pattern>,

    /// Cell encoding: binary or aging
    #[arg(long, short = 'e', value_parser = parse_encoding)]
    pub encoding: Option<Encoding>,

    /// Pause between generations in milliseconds (minimum 100)
    #[arg(long, short = 'i')]
    pub interval_ms: Option<u64>,

    /// Number of generations to run before exiting
    #[arg(long, short = 'n')]
    pub generations: Option<u32>,

    /// Redraw strategy: full or diff
    #[arg(long, value_parser = parse_render_mode)]
    pub render: Option<RenderMode>,
}

fn parse_pattern(s: &str) -> Result<Pattern, String> {
    Pattern::from_str(s).ok_or_else(|| format!("expected one of: {}", Pattern::names()))
}

fn parse_encoding(s: &str) -> Result<Encoding, String> {
    Encoding::from_str(s).ok_or_else(|| "expected binary or aging".to_string())
}

fn parse_render_mode(s: &str) -> Result<RenderMode, String> {
    RenderMode::from_str(s).ok_or_else(|| "expected full or diff".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::patterns::{ACORN, CLUSTER, DIEHARD, GLIDER};
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_match_original_program() {
        let c = Config::default();
        assert_eq!(c.pattern, CLUSTER);
        assert_eq!(c.encoding, Encoding::Binary);
        assert_eq!(c.interval, Duration::from_millis(1000));
        assert_eq!(c.generations, 1000);
        assert_eq!(c.render, RenderMode::Full);
    }

    #[test]
    fn env_values_are_applied() {
        let c = Config::from_lookup(lookup(&[
            ("LIFE_PATTERN", "Acorn"),
            ("LIFE_ENCODING", "aging"),
            ("LIFE_INTERVAL_MS", "100"),
            ("LIFE_GENERATIONS", " 42 "),
            ("LIFE_RENDER", "diff"),
        ]));
        assert_eq!(c.pattern, ACORN);
        assert_eq!(c.encoding, Encoding::Aging);
        assert_eq!(c.interval, Duration::from_millis(100));
        assert_eq!(c.generations, 42);
        assert_eq!(c.render, RenderMode::Diff);
    }

    #[test]
    fn invalid_env_values_keep_defaults() {
        let c = Config::from_lookup(lookup(&[
            ("LIFE_PATTERN", "gosper"),
            ("LIFE_INTERVAL_MS", "soon"),
            ("LIFE_GENERATIONS", "-1"),
        ]));
        assert_eq!(c, Config::default());
    }

    #[test]
    fn flags_override_env() {
        let env = Config::from_lookup(lookup(&[
            ("LIFE_PATTERN", "acorn"),
            ("LIFE_GENERATIONS", "5"),
        ]));
        let args =
            Args::try_parse_from(["tui-life", "--pattern", "diehard", "-i", "250"]).unwrap();
        let c = env.with_args(&args);
        assert_eq!(c.pattern, DIEHARD);
        assert_eq!(c.generations, 5);
        assert_eq!(c.interval, Duration::from_millis(250));
    }

    #[test]
    fn env_interval_is_clamped_to_minimum() {
        let zero = Config::from_lookup(lookup(&[("LIFE_INTERVAL_MS", "0")]));
        assert_eq!(zero.interval, Duration::from_millis(MIN_INTERVAL_MS));

        let just_below = Config::from_lookup(lookup(&[("LIFE_INTERVAL_MS", "99")]));
        assert_eq!(just_below.interval, Duration::from_millis(100));

        let at_floor = Config::from_lookup(lookup(&[("LIFE_INTERVAL_MS", "100")]));
        assert_eq!(at_floor.interval, Duration::from_millis(100));
    }

    #[test]
    fn flag_interval_is_clamped_to_minimum() {
        let args = Args::try_parse_from(["tui-life", "-i", "5"]).unwrap();
        let c = Config::default().with_args(&args);
        assert_eq!(c.interval, Duration::from_millis(MIN_INTERVAL_MS));

        let args = Args::try_parse_from(["tui-life", "--interval-ms", "0"]).unwrap();
        let c = Config::default().with_args(&args);
        assert_eq!(c.interval, Duration::from_millis(MIN_INTERVAL_MS));
    }

    #[test]
    fn flag_parsing_is_case_insensitive() {
        let args = Args::try_parse_from(["tui-life", "-p", "GLIDER", "-e", "Aging"]).unwrap();
        assert_eq!(args.pattern, Some(GLIDER));
        assert_eq!(args.encoding, Some(Encoding::Aging));
    }

    #[test]
    fn unknown_flag_values_are_rejected() {
        assert!(Args::try_parse_from(["tui-life", "--pattern", "gosper"]).is_err());
        assert!(Args::try_parse_from(["tui-life", "--render", "sometimes"]).is_err());
        assert!(Args::try_parse_from(["tui-life", "--generations", "many"]).is_err());
    }
}
