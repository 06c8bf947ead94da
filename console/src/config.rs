use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use life::{RenderOptions, DEFAULT_DELIMITERS};
use serde::Deserialize;

use crate::cli::Cli;
use crate::patterns::Pattern;

pub const GRID_WIDTH: usize = 60;
pub const GRID_LENGTH: usize = GRID_WIDTH * 9 / 16;
/// A random grid starts with about one cell in this many alive.
pub const ALIVE_RATIO: usize = 4;
pub const SLEEP_DURATION: Duration = Duration::from_millis(150);
/// Largest random grid the driver will build.
pub const MAX_CELLS: usize = 1 << 24;

/// Optional settings read from a TOML file. Command line flags win over these.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub file: Option<PathBuf>,
    pub delimiters: Option<String>,
    pub pattern: Option<Pattern>,
    pub width: Option<usize>,
    pub length: Option<usize>,
    pub alive: Option<usize>,
    pub seed: Option<u64>,
    pub generations: Option<u64>,
    pub delay_ms: Option<u64>,
    pub grid_lines: Option<bool>,
    pub box_lines: Option<bool>,
    pub clear: Option<bool>,
}

impl FileConfig {
    /// Read a config file. A relative `file` is taken relative to the config
    /// file's directory.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let mut config: FileConfig =
            toml::from_str(&text).with_context(|| format!("parse config {}", path.display()))?;

        if let (Some(file), Some(dir)) = (&config.file, path.parent()) {
            if file.is_relative() {
                config.file = Some(dir.join(file));
            }
        }
        Ok(config)
    }

    fn wants_random(&self) -> bool {
        self.width.is_some() || self.length.is_some() || self.alive.is_some() || self.seed.is_some()
    }

    /// Grid sources set in this file. The command line allows only one, and
    /// so does the config file.
    fn sources(&self) -> Vec<&'static str> {
        let mut sources = Vec::new();
        if self.file.is_some() {
            sources.push("file");
        }
        if self.pattern.is_some() {
            sources.push("pattern");
        }
        if self.wants_random() {
            sources.push("random grid (width/length/alive/seed)");
        }
        sources
    }
}

/// Where the first generation comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File { path: PathBuf, delimiters: Vec<char> },
    Pattern(Pattern),
    Random {
        width: usize,
        length: usize,
        alive: usize,
        seed: Option<u64>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub source: Source,
    /// Zero means run until the grid stops changing.
    pub generations: u64,
    pub delay: Duration,
    pub render: RenderOptions,
    pub clear: bool,
}

impl Settings {
    pub fn resolve(cli: &Cli, config: FileConfig) -> anyhow::Result<Self> {
        let config_sources = config.sources();
        anyhow::ensure!(
            config_sources.len() <= 1,
            "config file sets more than one grid source: {}",
            config_sources.join(", ")
        );

        let cli_has_source = cli.file.is_some() || cli.pattern.is_some() || cli.wants_random();
        if cli_has_source && (config.file.is_some() || config.pattern.is_some()) {
            log::warn!("command line grid source overrides the one in the config file");
        }

        let source = if let Some(path) = &cli.file {
            file_source(path, cli, &config)
        } else if let Some(pattern) = cli.pattern {
            Source::Pattern(pattern)
        } else if cli.wants_random() {
            random_source(cli, &config)
        } else if let Some(path) = &config.file {
            file_source(path, cli, &config)
        } else if let Some(pattern) = config.pattern {
            Source::Pattern(pattern)
        } else {
            random_source(cli, &config)
        };

        if !matches!(source, Source::File { .. })
            && (cli.delimiters.is_some() || config.delimiters.is_some())
        {
            log::warn!("delimiters only apply to a grid file and are ignored");
        }

        Ok(Settings {
            source,
            generations: cli.generations.or(config.generations).unwrap_or(0),
            delay: cli
                .delay_ms
                .or(config.delay_ms)
                .map_or(SLEEP_DURATION, Duration::from_millis),
            render: RenderOptions {
                grid_lines: cli.grid_lines || config.grid_lines.unwrap_or(false),
                box_lines: cli.box_lines || config.box_lines.unwrap_or(false),
            },
            clear: !cli.no_clear && config.clear.unwrap_or(true),
        })
    }
}

fn file_source(path: &Path, cli: &Cli, config: &FileConfig) -> Source {
    let delimiters = match cli.delimiters.as_ref().or(config.delimiters.as_ref()) {
        Some(chars) if !chars.is_empty() => chars.chars().collect(),
        _ => DEFAULT_DELIMITERS.to_vec(),
    };
    Source::File {
        path: path.to_path_buf(),
        delimiters,
    }
}

fn random_source(cli: &Cli, config: &FileConfig) -> Source {
    let width = cli.width.or(config.width).unwrap_or(GRID_WIDTH);
    let length = cli.length.or(config.length).unwrap_or(GRID_LENGTH);
    Source::Random {
        width,
        length,
        alive: cli
            .alive
            .or(config.alive)
            .unwrap_or(width.saturating_mul(length) / ALIVE_RATIO),
        seed: cli.seed.or(config.seed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_random_grid() {
        let settings = Settings::resolve(&Cli::default(), FileConfig::default()).unwrap();
        assert_eq!(
            settings.source,
            Source::Random {
                width: GRID_WIDTH,
                length: GRID_LENGTH,
                alive: GRID_WIDTH * GRID_LENGTH / ALIVE_RATIO,
                seed: None
            }
        );
        assert_eq!(settings.generations, 0);
        assert_eq!(settings.delay, SLEEP_DURATION);
        assert_eq!(settings.render, RenderOptions::default());
        assert!(settings.clear);
    }

    #[test]
    fn config_file_fills_in_missing_flags() {
        let config: FileConfig = toml::from_str(
            r#"
            pattern = "glider"
            generations = 30
            delay_ms = 5
            box_lines = true
            clear = false
            "#,
        )
        .unwrap();
        let settings = Settings::resolve(&Cli::default(), config).unwrap();
        assert_eq!(settings.source, Source::Pattern(Pattern::Glider));
        assert_eq!(settings.generations, 30);
        assert_eq!(settings.delay, Duration::from_millis(5));
        assert!(settings.render.box_lines);
        assert!(!settings.clear);
    }

    #[test]
    fn command_line_wins_over_config_file() {
        let config = FileConfig {
            width: Some(8),
            generations: Some(3),
            ..Default::default()
        };
        let cli = Cli {
            length: Some(4),
            alive: Some(2),
            generations: Some(9),
            ..Default::default()
        };
        let settings = Settings::resolve(&cli, config).unwrap();
        assert_eq!(
            settings.source,
            Source::Random {
                width: 8,
                length: 4,
                alive: 2,
                seed: None
            }
        );
        assert_eq!(settings.generations, 9);
    }

    #[test]
    fn file_source_uses_configured_delimiters() {
        let config = FileConfig {
            delimiters: Some("|".to_string()),
            ..Default::default()
        };
        let cli = Cli {
            file: Some(PathBuf::from("grid.txt")),
            ..Default::default()
        };
        assert_eq!(
            Settings::resolve(&cli, config).unwrap().source,
            Source::File {
                path: PathBuf::from("grid.txt"),
                delimiters: vec!['|']
            }
        );
    }

    #[test]
    fn command_line_source_replaces_config_source() {
        let config = FileConfig {
            pattern: Some(Pattern::Toad),
            ..Default::default()
        };
        let cli = Cli {
            width: Some(5),
            length: Some(5),
            ..Default::default()
        };
        let settings = Settings::resolve(&cli, config).unwrap();
        assert!(matches!(
            settings.source,
            Source::Random {
                width: 5,
                length: 5,
                ..
            }
        ));
    }

    #[test]
    fn config_file_with_two_sources_is_rejected() {
        let both = FileConfig {
            file: Some(PathBuf::from("grid.csv")),
            pattern: Some(Pattern::Glider),
            ..Default::default()
        };
        let err = Settings::resolve(&Cli::default(), both).unwrap_err();
        assert!(err.to_string().contains("file, pattern"), "{err}");

        let pattern_and_size = FileConfig {
            pattern: Some(Pattern::Glider),
            width: Some(10),
            ..Default::default()
        };
        assert!(Settings::resolve(&Cli::default(), pattern_and_size).is_err());
    }

    #[test]
    fn delimiters_without_grid_file_are_ignored() {
        let cli = Cli {
            pattern: Some(Pattern::Blinker),
            delimiters: Some(";".to_string()),
            ..Default::default()
        };
        let settings = Settings::resolve(&cli, FileConfig::default()).unwrap();
        assert_eq!(settings.source, Source::Pattern(Pattern::Blinker));
    }

    #[test]
    fn oversized_default_alive_count_does_not_overflow() {
        let cli = Cli {
            width: Some(usize::MAX),
            length: Some(3),
            ..Default::default()
        };
        let settings = Settings::resolve(&cli, FileConfig::default()).unwrap();
        assert!(matches!(
            settings.source,
            Source::Random {
                alive,
                ..
            } if alive == usize::MAX / ALIVE_RATIO
        ));
    }

    #[test]
    fn unknown_config_keys_are_rejected() {
        assert!(toml::from_str::<FileConfig>("speed = 3").is_err());
    }

    #[test]
    fn load_reads_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("life.toml");
        std::fs::write(&path, "width = 12\nlength = 7\nseed = 1\n").unwrap();

        let config = FileConfig::load(&path).unwrap();
        assert_eq!(config.width, Some(12));
        assert_eq!(config.length, Some(7));
        assert_eq!(config.seed, Some(1));
        assert!(FileConfig::load(&dir.path().join("missing.toml")).is_err());
    }

    #[test]
    fn relative_grid_file_is_resolved_next_to_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("life.toml");
        std::fs::write(&path, "file = \"toad.csv\"\n").unwrap();
        assert_eq!(FileConfig::load(&path).unwrap().file, Some(dir.path().join("toad.csv")));

        let absolute = dir.path().join("elsewhere").join("toad.csv");
        std::fs::write(&path, format!("file = {:?}\n", absolute.display().to_string())).unwrap();
        assert_eq!(FileConfig::load(&path).unwrap().file, Some(absolute));
    }
}
