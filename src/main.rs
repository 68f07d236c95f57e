use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::info;

use julia_sets::{
    CliRenderController, DEFAULT_MAX_ITERATIONS, JULIA_FUNCTIONS, JuliaConfig, PpmFilePresenter,
};

/// Escape-time Julia set renderer.
#[derive(Debug, Parser)]
#[command(name = "julia_sets", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the selectable functions with their indices
    List,
    /// Render one function to a PPM image
    Render {
        /// Catalog index of the function to draw
        #[arg(short, long, default_value_t = 0)]
        function: usize,

        #[arg(short, long, default_value = "output/julia.ppm")]
        output: PathBuf,

        #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
        max_iterations: u32,

        /// Sampling step in complex-plane units
        #[arg(long)]
        step: Option<f64>,

        #[arg(long, default_value_t = 600)]
        width: u32,

        #[arg(long, default_value_t = 600)]
        height: u32,

        /// Walk the grid on a single thread
        #[arg(long)]
        serial: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    match Cli::parse().command {
        Command::List => {
            for (index, function) in JULIA_FUNCTIONS.iter().enumerate() {
                println!("{}: f(z) = {}", index, function);
            }
        }
        Command::Render {
            function,
            output,
            max_iterations,
            step,
            width,
            height,
            serial,
        } => {
            let mut config = JuliaConfig {
                max_iterations,
                ..JuliaConfig::default()
            };
            if let Some(step) = step {
                config.grid = config.grid.with_step(step)?;
            }

            let mut controller =
                CliRenderController::new(PpmFilePresenter::new(), config, (width, height), !serial);

            let summary = controller.generate(function)?;
            println!(
                "Function {} took {}s",
                summary.function,
                summary.duration.as_millis() as f64 / 1000.0
            );

            controller.write(&output)?;
            info!("{} samples written to {}", summary.samples, output.display());
        }
    }

    Ok(())
}
