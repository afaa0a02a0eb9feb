use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::{Value, json};

use crate::model::Thumbnail;
use crate::runtime::AppContext;
use crate::stains::builtin_profiles;

#[derive(Debug, Parser)]
#[command(
    name = "histotype",
    version,
    about = "Microscopy thumbnail stain and image-type estimation CLI"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print thumbnail dimensions and source properties.
    Info {
        input: PathBuf,
    },
    /// Count dark, light and mid-range pixels.
    Stats {
        input: PathBuf,
        #[arg(long)]
        dark: Option<u8>,
        #[arg(long)]
        light: Option<u8>,
    },
    /// Estimate the image type behind a thumbnail.
    Estimate {
        input: PathBuf,
        #[arg(long)]
        dark: Option<u8>,
        #[arg(long)]
        light: Option<u8>,
    },
    /// Run an analysis recipe and print its report.
    Run {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        recipe: PathBuf,
        #[arg(long)]
        report: Option<PathBuf>,
    },
    Analyses {
        #[command(subcommand)]
        command: AnalysesCommand,
    },
    Profiles {
        #[command(subcommand)]
        command: ProfilesCommand,
    },
}

#[derive(Debug, Subcommand)]
enum AnalysesCommand {
    List,
}

#[derive(Debug, Subcommand)]
enum ProfilesCommand {
    List,
}

#[derive(Debug, Serialize)]
struct ThumbnailInfo {
    width: usize,
    height: usize,
    rgb: bool,
    source: Option<String>,
}

#[derive(Debug, Serialize)]
struct EstimateInfo {
    image_type: Option<String>,
    measurements: BTreeMap<String, Value>,
}

pub fn run_cli() -> Result<(), String> {
    let cli = Cli::parse();
    let app = AppContext::new();

    match cli.command {
        Commands::Info { input } => {
            let thumbnail = read_thumbnail(&app, &input)?;
            let info = ThumbnailInfo {
                width: thumbnail.width(),
                height: thumbnail.height(),
                rgb: thumbnail.metadata.rgb,
                source: thumbnail
                    .metadata
                    .source
                    .as_ref()
                    .map(|path| path.display().to_string()),
            };
            print_pretty(&info)?;
        }
        Commands::Stats { input, dark, light } => {
            let thumbnail = read_thumbnail(&app, &input)?;
            let output = app
                .analysis_service()
                .execute("pixels.stats", &thumbnail, &threshold_params(dark, light))
                .map_err(|error| error.to_string())?;
            print_pretty(&output.measurements.values)?;
        }
        Commands::Estimate { input, dark, light } => {
            let thumbnail = read_thumbnail(&app, &input)?;
            let output = app
                .analysis_service()
                .execute("type.estimate", &thumbnail, &threshold_params(dark, light))
                .map_err(|error| error.to_string())?;
            let info = EstimateInfo {
                image_type: output.classification.map(|image_type| image_type.to_string()),
                measurements: output.measurements.values,
            };
            print_pretty(&info)?;
        }
        Commands::Run {
            input,
            recipe,
            report,
        } => {
            let thumbnail = read_thumbnail(&app, &input)?;
            let spec = app
                .recipe_service()
                .load_recipe(&recipe)
                .map_err(|error| error.to_string())?;
            let run_report = app
                .recipe_service()
                .run(&spec, &thumbnail)
                .map_err(|error| error.to_string())?;
            if let Some(report_path) = report {
                app.recipe_service()
                    .save_report(&report_path, &run_report)
                    .map_err(|error| error.to_string())?;
            }
            print_pretty(&run_report)?;
        }
        Commands::Analyses { command } => match command {
            AnalysesCommand::List => {
                print_pretty(&app.analysis_service().list())?;
            }
        },
        Commands::Profiles { command } => match command {
            ProfilesCommand::List => {
                print_pretty(&builtin_profiles())?;
            }
        },
    }

    Ok(())
}

fn read_thumbnail(app: &AppContext, input: &PathBuf) -> Result<Thumbnail, String> {
    let thumbnail = app
        .io_service()
        .read(input)
        .map_err(|error| error.to_string())?;
    app.thumbnail_service()
        .validate(&thumbnail)
        .map_err(|error| error.to_string())?;
    Ok(thumbnail)
}

fn threshold_params(dark: Option<u8>, light: Option<u8>) -> Value {
    let mut params = serde_json::Map::new();
    if let Some(dark) = dark {
        params.insert("dark".to_string(), json!(dark));
    }
    if let Some(light) = light {
        params.insert("light".to_string(), json!(light));
    }
    Value::Object(params)
}

fn print_pretty<T: Serialize>(value: &T) -> Result<(), String> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).map_err(|error| error.to_string())?
    );
    Ok(())
}
