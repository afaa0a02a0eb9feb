pub mod analysis;
pub mod cli;
pub mod formats;
pub mod model;
pub mod runtime;
pub mod stains;
pub mod workflow;

pub fn run_cli() -> Result<(), String> {
    cli::run_cli()
}
