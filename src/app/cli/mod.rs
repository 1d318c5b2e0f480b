//! CLI adapter.

mod help;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::app::api;
use crate::domain::AppError;

const RULER_WIDTH: usize = 80;

#[derive(Parser)]
#[command(name = "prdgen")]
#[command(version)]
#[command(
    about = "Generate a Product Requirements Document from a product idea",
    long_about = None,
    after_help = help::INPUT_FORMAT_HELP,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Input file (JSON, YAML or TOML). Prompts interactively when omitted
    input: Option<PathBuf>,
    /// Directory to write the PRD into (overrides config)
    #[arg(short = 'o', long)]
    output_dir: Option<PathBuf>,
    /// Config file (defaults to $PRDGEN_CONFIG, then ./prdgen.toml)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,
    /// Skip the console preview
    #[arg(long)]
    no_preview: bool,
    /// Print the PRD to stdout instead of writing a file
    #[arg(long, conflicts_with_all = ["output_dir", "no_preview"])]
    stdout: bool,
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the field names accepted in input files
    Fields,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Fields) => {
            println!("{}", help::field_list());
            Ok(())
        }
        None if cli.stdout => run_stdout(cli.input.as_deref()),
        None => run_generate(&cli),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn run_stdout(input_path: Option<&Path>) -> Result<(), AppError> {
    let input = api::read_input(input_path)?;
    println!("{}", api::render_document(&input));
    Ok(())
}

fn run_generate(cli: &Cli) -> Result<(), AppError> {
    let mut config = api::load_config(cli.config.as_deref())?;
    if let Some(dir) = &cli.output_dir {
        config.output.dir = dir.clone();
    }
    if cli.no_preview {
        config.output.preview_lines = 0;
    }

    println!("PRD Generator\n");
    let input = api::read_input(cli.input.as_deref())?;
    if let Some(path) = &cli.input {
        println!("Loaded product input from: {}", path.display());
    }

    println!("\n=== Generating PRD ===\n");
    let outcome = api::generate_document(&input, &config.output)?;

    println!("✓ PRD generated successfully!");
    println!("✓ Saved to: {}", outcome.path.display());

    if let Some(preview) = outcome.preview {
        let ruler = "-".repeat(RULER_WIDTH);
        println!("\nPreview:\n{ruler}");
        println!("{}", preview.render());
        println!("{ruler}");
    }
    Ok(())
}
