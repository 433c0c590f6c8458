//! Terrella command-line interface.
//!
//! Run forward models from TOML job files:
//! ```sh
//! terrella-cli run job.toml
//! terrella-cli validate job.toml
//! terrella-cli components
//! ```

mod config;
mod runner;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "terrella-cli")]
#[command(about = "Terrella: magnetic dipole survey forward modelling")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a forward model from a TOML job file.
    Run {
        /// Path to the job configuration file.
        config: PathBuf,
        /// Output directory (overrides config file setting).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate a job file without running the forward model.
    Validate {
        /// Path to the job configuration file.
        config: PathBuf,
    },
    /// Display the component / receiver-orientation table.
    Components,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { config, output } => {
            let job = config::load_config(&config)?;
            println!("Job: {}", config.display());

            let out_dir = output.unwrap_or_else(|| PathBuf::from(&job.output.directory));
            runner::run_job(&job, &out_dir)?;

            println!("Done.");
            Ok(())
        }
        Commands::Validate { config } => {
            let _job = config::load_config(&config)?;
            println!("Job file is valid: {}", config.display());
            Ok(())
        }
        Commands::Components => {
            println!("Field components and receiver orientations:");
            println!();
            println!("  Bt — total field, measured along the source direction");
            println!("  Bg — vertical gradient of Bt (1 m finite difference)");
            println!("  Bx — northing component, receiver (I, D) = (0, 0)");
            println!("  By — easting component, receiver (I, D) = (0, 90)");
            println!("  Bz — vertical component, receiver (I, D) = (90, 0)");
            Ok(())
        }
    }
}
