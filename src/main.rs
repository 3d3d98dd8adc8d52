use clap::{Parser, Subcommand};
use showcase::{config, generate, output};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let hash = env!("GIT_HASH");
    if hash.is_empty() {
        env!("CARGO_PKG_VERSION")
    } else {
        // Leaked once at startup — trivial, called exactly once
        Box::leak(format!("{}+{hash}", env!("CARGO_PKG_VERSION")).into_boxed_str())
    }
}

#[derive(Parser)]
#[command(name = "showcase")]
#[command(about = "Static landing-page generator")]
#[command(long_about = "\
Static landing-page generator

One TOML config drives one self-contained HTML page: an image carousel,
an intro block, a stats-card grid, and a footer. Every setting has a
stock default, so `showcase build` with no config at all produces the
complete default site.

Page structure:

  index.html
  ├── carousel            # cyclic slide strip with prev/next + indicators
  ├── intro               # heading + markdown body
  ├── stats               # card grid with delta pills and accent badges
  └── footer              # © year company + link list

Run 'showcase gen-config' to generate a documented showcase.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Config file
    #[arg(long, default_value = "showcase.toml", global = true)]
    config: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the page and write it to the output directory
    Build,
    /// Load and validate the config, render in memory, write nothing
    Check,
    /// Print a stock showcase.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            let site_config = config::load_config(&cli.config)?;
            generate::generate(&site_config, &cli.output)?;
            output::print_page_summary(&site_config);
            println!("Site generated at {}", cli.output.display());
        }
        Command::Check => {
            let site_config = config::load_config(&cli.config)?;
            // Rendering exercises every component; discard the result.
            let _ = generate::render_page(&site_config);
            output::print_page_summary(&site_config);
            println!("Config is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
