//! Configuration resolution for the CLI binary.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::lookup::DEFAULT_CONCURRENCY;

/// Raw TOML config file contents. Every field is optional so a file only
/// needs to name the settings it wants to change.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    pub lyrics_dir: Option<String>,
    pub artist: Option<String>,
    pub concurrency: Option<usize>,
    pub seed: Option<u64>,
    pub json: Option<bool>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}

/// The settings the CLI supplies before file config resolution.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub lyrics_dir: Option<PathBuf>,
    pub artist: Option<String>,
    pub concurrency: usize,
    pub seed: Option<u64>,
    pub json: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            lyrics_dir: None,
            artist: None,
            concurrency: DEFAULT_CONCURRENCY,
            seed: None,
            json: false,
        }
    }
}

/// The fully resolved application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub lyrics_dir: PathBuf,
    pub artist: String,
    pub concurrency: usize,
    pub seed: Option<u64>,
    pub json: bool,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let lyrics_dir = file
            .lyrics_dir
            .map(PathBuf::from)
            .or_else(|| cli.lyrics_dir.clone())
            .ok_or_else(|| {
                anyhow::anyhow!("lyrics_dir must be specified as an argument or in the config file")
            })?;

        if !lyrics_dir.exists() {
            bail!("Lyrics directory does not exist: {:?}", lyrics_dir);
        }
        if !lyrics_dir.is_dir() {
            bail!("lyrics_dir is not a directory: {:?}", lyrics_dir);
        }

        let artist = file
            .artist
            .or_else(|| cli.artist.clone())
            .unwrap_or_else(|| default_artist(&lyrics_dir));

        let concurrency = file.concurrency.unwrap_or(cli.concurrency);
        let seed = file.seed.or(cli.seed);
        let json = file.json.unwrap_or(cli.json);

        Ok(Self {
            lyrics_dir,
            artist,
            concurrency,
            seed,
            json,
        })
    }
}

/// Without an explicit artist name, the lyrics directory name stands in.
fn default_artist(lyrics_dir: &Path) -> String {
    lyrics_dir
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| "Unknown Artist".to_string())
}
