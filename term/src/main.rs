use clap::Parser;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use tracing_subscriber::filter::LevelFilter;

mod game;
mod input;
mod settings;
mod view;

#[derive(Parser, Debug)]
#[command(version, about = "Minesweeper in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// TOML settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Cell glyphs to draw the board with
    #[arg(short, long, value_enum)]
    glyphs: Option<settings::GlyphStyle>,

    /// Print a JSON snapshot after every update
    #[arg(long)]
    json: bool,
}

impl Args {
    fn settings(&self) -> anyhow::Result<settings::Settings> {
        let mut settings = match &self.config {
            Some(path) => settings::Settings::load(path)?,
            None => settings::Settings::default(),
        };

        if self.seed.is_some() {
            settings.seed = self.seed;
        }
        if let Some(glyphs) = self.glyphs {
            settings.glyphs = glyphs;
        }
        settings.json |= self.json;

        Ok(settings)
    }
}

fn level_filter(filter: log::LevelFilter) -> LevelFilter {
    match filter {
        log::LevelFilter::Off => LevelFilter::OFF,
        log::LevelFilter::Error => LevelFilter::ERROR,
        log::LevelFilter::Warn => LevelFilter::WARN,
        log::LevelFilter::Info => LevelFilter::INFO,
        log::LevelFilter::Debug => LevelFilter::DEBUG,
        log::LevelFilter::Trace => LevelFilter::TRACE,
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level_filter(args.verbose.log_level_filter()))
        .init();

    let settings = args.settings()?;
    log::debug!("settings: {:?}", settings);

    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            if tx.send(line).is_err() {
                break;
            }
        }
    });

    let mut view = game::GameView::new(settings)?;
    view.run(rx, &mut io::stdout().lock())?;

    log::debug!("App stopped in state {:?}", view.session().state());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let args = Args::parse_from(["minesweep", "--seed", "9", "--glyphs", "emoji", "--json"]);

        let settings = args.settings().unwrap();

        assert_eq!(settings.seed, Some(9));
        assert_eq!(settings.glyphs, settings::GlyphStyle::Emoji);
        assert!(settings.json);
    }

    #[test]
    fn verbosity_maps_to_tracing_levels() {
        assert_eq!(level_filter(log::LevelFilter::Off), LevelFilter::OFF);
        assert_eq!(level_filter(log::LevelFilter::Debug), LevelFilter::DEBUG);
    }
}
