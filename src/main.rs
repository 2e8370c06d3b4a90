mod ai;
mod app;
mod color;
mod config;
mod error;
mod export;
mod harmony;
mod input;
mod storage;
mod swatches;
mod tui;

use anyhow::Context;
use clap::{Parser, Subcommand};
use color::Hex;
use swatches::{MAX_SLOTS, MIN_SLOTS, Palette};

/// Terminal color palette designer
#[derive(Debug, Parser)]
#[command(name = "spectrum", version)]
struct Cli {
    /// Override config file path.
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the interactive TUI (default).
    Tui,
    /// Generate a palette and print it (headless).
    Generate {
        /// Number of colors (2-10).
        #[arg(long, default_value_t = 5)]
        size: usize,
        /// Keep this color; repeat to lock several. Locked colors come first.
        #[arg(long = "lock")]
        locks: Vec<Hex>,
    },
    /// Print a harmony sequence derived from a base color.
    Harmony {
        base: String,
        #[arg(long, default_value_t = 5)]
        count: usize,
    },
    /// Ask the AI assistant for a palette and print it.
    Ai {
        prompt: String,
        #[arg(long, default_value_t = 5)]
        count: usize,
    },
    /// Inspect saved palettes.
    Saved {
        #[command(subcommand)]
        cmd: SavedCommand,
    },
    /// Write a random palette to an export file.
    Export {
        #[arg(long, default_value_t = 5)]
        size: usize,
    },
}

#[derive(Debug, Subcommand)]
enum SavedCommand {
    /// List saved palettes, newest first.
    List,
    /// Delete a saved palette by id.
    Delete { id: i64 },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(cli.config.as_deref()).context("load config")?;
    let command = cli.command.unwrap_or(Command::Tui);

    init_logging(&cfg, matches!(command, Command::Tui))?;

    match command {
        Command::Tui => {
            let mut app = app::App::new(cfg.clone())?;
            let mut terminal = tui::TerminalGuard::enter(cfg.input.mouse).context("enter tui")?;
            app.run(terminal.terminal_mut()).await?;
        }
        Command::Generate { size, locks } => {
            let palette = generate_headless(size, &locks)?;
            print_palette(&palette);
        }
        Command::Harmony { base, count } => {
            let colors = harmony::generate_harmony_str(&base, count, &mut rand::rng())?;
            print_colors(&colors);
        }
        Command::Ai { prompt, count } => {
            let client = ai::AiClient::from_config(&cfg.ai)?;
            let colors = client
                .generate_colors(&prompt, count.clamp(MIN_SLOTS, MAX_SLOTS))
                .await?;
            print_colors(&colors);
        }
        Command::Saved { cmd } => {
            let storage = storage::Storage::open(&cfg.paths.database())?;
            match cmd {
                SavedCommand::List => {
                    for saved in storage.load_saved_palettes()? {
                        let colors: Vec<String> =
                            saved.colors.iter().map(ToString::to_string).collect();
                        println!("{}  {}  {}", saved.id, saved.timestamp, colors.join(" "));
                    }
                }
                SavedCommand::Delete { id } => {
                    let mut saved = storage.load_saved_palettes()?;
                    let before = saved.len();
                    saved.retain(|s| s.id != id);
                    if saved.len() == before {
                        anyhow::bail!("no saved palette with id {id}");
                    }
                    storage.store_saved_palettes(&saved)?;
                    println!("Deleted palette {id}.");
                }
            }
        }
        Command::Export { size } => {
            let palette = Palette::random(size, &mut rand::rng());
            let path = export::write_export(&cfg.paths.export_dir, &palette.hexes())?;
            println!("{}", path.display());
        }
    }

    Ok(())
}

/// TUI mode logs to a file so output never lands on the alternate screen.
fn init_logging(cfg: &config::Config, tui: bool) -> anyhow::Result<()> {
    if tui {
        let path = cfg.paths.log_file();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create dir {}", parent.display()))?;
        }
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("open {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_target(false)
            .with_level(true)
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(file))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_target(false)
            .with_level(true)
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(())
}

/// Locked colors take the first slots; the rest is filled and regenerated.
fn generate_headless(size: usize, locked: &[Hex]) -> anyhow::Result<Palette> {
    if locked.len() > MAX_SLOTS {
        anyhow::bail!("at most {MAX_SLOTS} colors can be locked");
    }

    let mut rng = rand::rng();
    let size = size.clamp(MIN_SLOTS, MAX_SLOTS).max(locked.len());
    let mut hexes = locked.to_vec();
    while hexes.len() < size {
        hexes.push(harmony::random_hex(&mut rng));
    }

    let mut palette = Palette::from_hexes(&hexes).context("palette needs at least two colors")?;
    for i in 0..locked.len() {
        palette.set_locked(i, true);
    }
    palette.regenerate(&mut rng);
    Ok(palette)
}

fn print_palette(palette: &Palette) {
    for swatch in palette.swatches() {
        let name = swatch.hex.name().unwrap_or("-");
        let lock = if swatch.locked { "  (locked)" } else { "" };
        println!("{}  {name}{lock}", swatch.hex);
    }
}

fn print_colors(colors: &[Hex]) {
    for hex in colors {
        println!("{}  {}", hex, hex.name().unwrap_or("-"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locked_colors_lead_the_generated_palette() {
        let locks = vec![Hex::new(255, 0, 0), Hex::new(0, 0, 255)];
        let palette = generate_headless(4, &locks).unwrap();
        assert_eq!(palette.len(), 4);
        assert_eq!(&palette.hexes()[..2], &locks[..]);
        assert!(palette.swatches()[..2].iter().all(|s| s.locked));
        assert!(palette.swatches()[2..].iter().all(|s| !s.locked));
    }

    #[test]
    fn size_grows_to_fit_locks() {
        let locks = vec![Hex::new(1, 1, 1); 3];
        assert_eq!(generate_headless(2, &locks).unwrap().len(), 3);
        assert!(generate_headless(5, &vec![Hex::new(1, 1, 1); 11]).is_err());
    }

    #[test]
    fn lock_flags_parse_as_colors() {
        let mut args = vec!["spectrum", "generate"];
        args.extend(["--lock", "ff0000", "--lock", "#00FF00"]);
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Some(Command::Generate { size, locks }) => {
                assert_eq!(size, 5);
                assert_eq!(locks, vec![Hex::new(255, 0, 0), Hex::new(0, 255, 0)]);
            }
            other => panic!("unexpected command {other:?}"),
        }
        let bad = ["spectrum", "generate", "--lock", "nothex"];
        assert!(Cli::try_parse_from(bad).is_err());
    }
}
