use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use lyric_census::config::{AppConfig, CliConfig, FileConfig};
use lyric_census::lookup::{run_session, FileLyricSource, DEFAULT_CONCURRENCY};
use lyric_census::report;
use lyric_census::session::{LyricReducer, SessionTracker};

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(msg).with_context(|| format!("Error resolving path: {}", s));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Directory holding one `<title>.txt` lyric file per recording.
    #[clap(value_parser = parse_path)]
    pub lyrics_dir: Option<PathBuf>,

    /// Artist name shown in the report. Defaults to the directory name.
    #[clap(long)]
    pub artist: Option<String>,

    /// How many lyric lookups run concurrently.
    #[clap(long, default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// Seed for the unique word sampling, for reproducible reports.
    #[clap(long)]
    pub seed: Option<u64>,

    /// Print the report as pretty JSON instead of text.
    #[clap(long)]
    pub json: bool,

    /// Path to a TOML config file whose values override the other arguments.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    info!(
        "lyric-census {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH")
    );

    let file_config = match &cli_args.config {
        Some(path) => Some(FileConfig::load(path)?),
        None => None,
    };
    let cli_config = CliConfig {
        lyrics_dir: cli_args.lyrics_dir,
        artist: cli_args.artist,
        concurrency: cli_args.concurrency,
        seed: cli_args.seed,
        json: cli_args.json,
    };
    let config = AppConfig::resolve(&cli_config, file_config)?;

    info!("Reading lyrics from {:?}...", config.lyrics_dir);
    let source = Arc::new(FileLyricSource::new(&config.lyrics_dir));
    let titles = source
        .titles()
        .await
        .with_context(|| format!("Failed to list lyric files in {:?}", config.lyrics_dir))?;
    if titles.is_empty() {
        anyhow::bail!("No .txt lyric files found in {:?}", config.lyrics_dir);
    }
    info!("Tracking {} recordings for {}", titles.len(), config.artist);

    let reducer = match config.seed {
        Some(seed) => LyricReducer::seeded(seed),
        None => LyricReducer::new(),
    };
    let mut tracker = SessionTracker::new(reducer);
    let snapshot = run_session(&mut tracker, source, titles, config.concurrency).await;

    if config.json {
        println!("{}", report::render_json(&config.artist, &snapshot)?);
    } else {
        print!("{}", report::render_text(&config.artist, &snapshot));
    }
    Ok(())
}
