//! specdoc CLI - writes the HouseCall Pro MCP Server technical specification

use std::path::{Path, PathBuf};

use clap::Parser;
use log::info;

use specdoc::{DEFAULT_OUTPUT, Packager, Theme, build_document};

#[derive(Parser)]
#[command(name = "specdoc")]
#[command(version)]
#[command(about = "Generate the HouseCall Pro MCP Server technical specification (.docx)", long_about = None)]
struct Cli {
    /// Output document path
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// YAML file overriding theme values
    #[arg(long, value_name = "FILE")]
    theme: Option<PathBuf>,

    /// Log packaging details
    #[arg(long)]
    verbose: bool,
}

fn run(output: &Path, theme: Option<&Path>) -> specdoc::Result<()> {
    let theme = match theme {
        Some(path) => {
            info!("Loading theme from {}", path.display());
            Theme::from_path(path)?
        },
        None => Theme::default(),
    };

    let tree = build_document(&theme)?;
    Packager::save(&tree, output)?;
    info!(
        "Specification document created successfully: {}",
        output.display()
    );
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(&cli.output, cli.theme.as_deref()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
