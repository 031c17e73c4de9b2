//! Terminal runner (default binary).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use blockfall::config::DEFAULT_CONFIG_PATH;
use blockfall::core::RandomizerKind;
use blockfall::term::TerminalRenderer;
use blockfall::{logging, App, FileHighScoreStore, Settings};

#[derive(Parser, Debug)]
#[command(name = "blockfall", version, about = "Falling-block puzzle game for the terminal")]
struct Args {
    /// Settings file (JSON); missing files fall back to defaults
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Seed the piece generator for a reproducible game
    #[arg(short, long)]
    seed: Option<u64>,

    /// Piece randomizer: uniform or bag
    #[arg(short, long, value_parser = parse_randomizer)]
    randomizer: Option<RandomizerKind>,

    #[arg(long)]
    high_score_file: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Write the default settings to --config and exit
    #[arg(long)]
    write_default_config: bool,
}

fn parse_randomizer(value: &str) -> Result<RandomizerKind, String> {
    match value.to_ascii_lowercase().as_str() {
        "uniform" => Ok(RandomizerKind::Uniform),
        "bag" => Ok(RandomizerKind::Bag),
        other => Err(format!("unknown randomizer '{other}' (expected uniform or bag)")),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.write_default_config {
        Settings::default()
            .save(&args.config)
            .context("failed to write default settings")?;
        println!("wrote {}", args.config.display());
        return Ok(());
    }

    let mut settings = Settings::load(&args.config).context("failed to load settings")?;
    if let Some(seed) = args.seed {
        settings.session.seed = Some(seed);
    }
    if let Some(randomizer) = args.randomizer {
        settings.session.randomizer = randomizer;
    }
    if let Some(path) = args.high_score_file {
        settings.high_score_path = path;
    }
    if let Some(path) = args.log_file {
        settings.log_path = Some(path);
    }

    logging::init(settings.log_path.as_deref())?;
    tracing::info!(
        randomizer = settings.session.randomizer.as_str(),
        seed = ?settings.session.seed,
        "starting"
    );

    let store = FileHighScoreStore::new(settings.high_score_path.clone());
    let mut app = App::new(&settings, store);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = app.run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_randomizer() {
        assert_eq!(parse_randomizer("Bag"), Ok(RandomizerKind::Bag));
        assert_eq!(parse_randomizer("uniform"), Ok(RandomizerKind::Uniform));
        assert!(parse_randomizer("sevenbag").is_err());
    }

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from(["blockfall", "--seed", "9", "-r", "bag", "--log-file", "x.log"]);
        assert_eq!(args.seed, Some(9));
        assert_eq!(args.randomizer, Some(RandomizerKind::Bag));
        assert_eq!(args.log_file, Some(PathBuf::from("x.log")));
        assert_eq!(args.config, PathBuf::from(DEFAULT_CONFIG_PATH));
    }
}
