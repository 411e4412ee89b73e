mod app;
mod clipboard;
mod config;
mod input;
mod palette;
mod sound;
mod tui;

use anyhow::Context;
use clap::{Parser, Subcommand};
use palette::{Rgb, RngSource, Selection, Tone};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::OpenOptions;
use std::path::Path;

#[derive(Debug, Parser)]
#[command(name = "tonewheel", version, about = "Tone-based color palette generator")]
struct Cli {
    /// Override config file path.
    #[arg(long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Seed the random source for reproducible palettes.
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the interactive TUI (default).
    Tui,
    /// Print one palette to stdout (headless).
    Generate {
        /// Tone to include, in order; repeat for a gradient.
        #[arg(short, long = "tone", value_name = "TONE")]
        tones: Vec<Tone>,
        /// Print a JSON array instead of one code per line.
        #[arg(long)]
        json: bool,
    },
    /// List tones and their base colors.
    Tones,
    /// Show luminance and label contrast for a hex color.
    Check {
        /// Color as #RRGGBB.
        color: Rgb,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(cli.config.as_deref()).context("load config")?;

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => {
            init_file_logging(&cfg).context("init logging")?;
            let mut terminal = tui::TerminalGuard::enter(cfg.ui.mouse).context("init terminal")?;
            let mut app = app::App::new(cfg, seeded_rng(cli.seed));
            app.run(terminal.terminal_mut()).await?;
        }
        Command::Generate { tones, json } => {
            init_stderr_logging(&cfg);
            let selection = if tones.is_empty() {
                cfg.palette.selection()
            } else {
                tones.into_iter().collect::<Selection>()
            };
            let generator = cfg.palette.generator();
            let mut rng = RngSource(seeded_rng(cli.seed));
            let palette = generator.generate(&selection, &mut rng);
            tracing::debug!(tones = selection.len(), "generated palette");
            if json {
                println!("{}", serde_json::to_string_pretty(&palette)?);
            } else {
                for code in palette.hex_codes() {
                    println!("{code}");
                }
            }
        }
        Command::Tones => {
            for tone in Tone::ALL {
                println!("{}  {:<7} {}", tone.key(), tone.name(), tone.base());
            }
        }
        Command::Check { color } => {
            let label = if color.is_light() { "light (dark label)" } else { "dark (light label)" };
            println!("{color}  luminance {:.3}  {label}", color.luminance());
        }
    }

    Ok(())
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

fn init_stderr_logging(cfg: &config::Config) {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_max_level(cfg.log.level())
        .with_writer(std::io::stderr)
        .init();
}

/// The TUI owns the terminal, so logs go to a file in the data dir.
fn init_file_logging(cfg: &config::Config) -> anyhow::Result<()> {
    let dir: &Path = &cfg.paths.data_dir;
    std::fs::create_dir_all(dir).with_context(|| format!("create dir {}", dir.display()))?;
    let path = dir.join("tonewheel.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_ansi(false)
        .with_max_level(cfg.log.level())
        .with_writer(std::sync::Mutex::new(file))
        .init();
    Ok(())
}
