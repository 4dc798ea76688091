use clap::{Parser, Subcommand};
use showreel::layout::{GalleryEngine, HoverRequest};
use showreel::{animation, config, content, generate, output};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "showreel")]
#[command(about = "Static site generator for video portfolio showcases")]
#[command(long_about = "\
Static site generator for video portfolio showcases

Each section of projects.toml becomes a gallery: a fanned 3D stack of video
tiles on wide screens and a looping marquee on narrow ones.

Content structure:

  content/
  ├── config.toml      # Layout, marquee and colors (optional)
  └── projects.toml    # Headline, call-to-action and sections

Items without an id are skipped with a warning. Set RUST_LOG to control
log output, or pass --verbose.

Run 'showreel gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Log hover transitions and file writes
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the showcase page into the output directory
    Build,
    /// Validate content and config without writing anything
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
    /// Print the desktop layout computed for one section
    Layout {
        /// Section title (case-insensitive)
        section: String,
        /// 1-based position of the tile to hover
        #[arg(long)]
        hover: Option<NonZeroUsize>,
        /// Emit the layout as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Build => {
            println!("==> Building {}", cli.source.display());
            let report = generate::generate(&cli.source, &cli.output)?;
            output::print_generate_output(&report);
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let sections = generate::check(&cli.source)?;
            output::print_check_output(&sections);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::Layout {
            section,
            hover,
            json,
        } => {
            let site_config = config::load_config(&cli.source)?;
            let showcase = content::load_showcase(&cli.source)?;
            let found = showcase
                .section(&section)
                .ok_or_else(|| format!("no section titled '{section}'"))?;

            let mut engine =
                GalleryEngine::new(&found.items, &site_config.layout, animation::init());
            if let Some(position) = hover {
                engine.handle(HoverRequest::Enter(position.get() - 1));
            }
            let view = engine.desktop();

            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                output::print_layout_table(&found.title, engine.hovered(), &view);
            }
        }
    }

    Ok(())
}

/// Install the global `tracing` subscriber. `RUST_LOG` takes precedence.
fn init_logging(verbose: bool) {
    let default = if verbose { "showreel=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
