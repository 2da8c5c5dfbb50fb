use clap::{Parser, Subcommand};
use degrade_cli::{prompt_for_filename, run_study};
use degrade_core::models::StudyKind;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "degrade")]
#[command(version, about = "Grayscale image degradation studies", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sweep bit depths and report quantization quality loss
    Quantization {
        /// Input image file (prompted for interactively when omitted)
        #[arg(value_name = "INPUT")]
        input: Option<PathBuf>,

        /// Root directory the results directory is created under
        #[arg(short, long, value_name = "DIR")]
        out: Option<PathBuf>,

        /// Enable diagnostic output
        #[arg(long)]
        verbose: bool,
    },

    /// Sweep reduction factors and report spatial-resolution quality loss
    Spatial {
        /// Input image file (prompted for interactively when omitted)
        #[arg(value_name = "INPUT")]
        input: Option<PathBuf>,

        /// Root directory the results directory is created under
        #[arg(short, long, value_name = "DIR")]
        out: Option<PathBuf>,

        /// Enable diagnostic output
        #[arg(long)]
        verbose: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Quantization {
            input,
            out,
            verbose,
        } => cmd_study(StudyKind::Quantization, input, out, verbose),

        Commands::Spatial {
            input,
            out,
            verbose,
        } => cmd_study(StudyKind::Spatial, input, out, verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_study(
    kind: StudyKind,
    input: Option<PathBuf>,
    out: Option<PathBuf>,
    verbose: bool,
) -> Result<(), String> {
    degrade_core::config::set_verbose(verbose);
    degrade_core::config::log_config_usage();

    let input = match input {
        Some(path) => path,
        None => prompt_for_filename()?,
    };
    let out_root = out.unwrap_or_else(|| PathBuf::from("."));

    let config = &degrade_core::config::study_config_handle().config;

    println!("\nProcessing Image: {}", input.display());
    run_study(kind, &input, &out_root, &config.defaults)
}
