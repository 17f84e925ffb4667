//! FILENAME: app/src/cli.rs
// PURPOSE: Command-line surface. Parses arguments and drives the commands.

use crate::{commands, create_app_state_with, files, report, AppState};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tiang_persistence::{load_config, ProjectConfig};

#[derive(Parser, Debug)]
#[command(name = "rab-tiang")]
#[command(about = "Classify power poles by angle and compute the cost estimate (RAB)")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, value_name = "FILE", help = "JSON project file (starting category, prices)")]
    pub config: Option<PathBuf>,
    #[arg(long, short, global = true, action = clap::ArgAction::Count, help = "More log output (-v info, -vv debug)")]
    pub verbose: u8,
    #[arg(long, global = true, value_name = "FILE", help = "Also append log lines to this file")]
    pub log_file: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(about = "Build a project and print the pole list and RAB")]
    Report {
        #[arg(long, value_name = "FILE", help = "Pole spreadsheet (replaces manual poles)")]
        poles: Option<String>,
        #[arg(long, value_name = "FILE", help = "Price spreadsheet (URAIAN rows)")]
        prices: Option<String>,
        #[arg(long, value_name = "DEGREES", allow_hyphen_values = true, help = "Add a pole manually (repeatable)")]
        angle: Vec<String>,
        #[arg(long, value_name = "CAT", help = "Category of the first pole")]
        start: Option<String>,
        #[arg(long, value_name = "CAT.FIELD=VALUE", help = "Override a unit price, e.g. TM1.material=6000000")]
        price: Vec<String>,
        #[arg(long, value_name = "N", help = "Remove the pole at line number N (1-based)")]
        remove: Vec<usize>,
        #[arg(long, help = "Recompute middle-pole angles from coordinates")]
        angles_from_coordinates: bool,
        #[arg(long, value_name = "DIR|FILE", help = "Write the RAB workbook")]
        export: Option<PathBuf>,
        #[arg(long, help = "Print JSON instead of text")]
        json: bool,
    },
    #[command(about = "Classify angles without building a project")]
    Classify {
        #[arg(required = true, allow_hyphen_values = true, help = "Angles in degrees")]
        angles: Vec<String>,
    },
    #[command(about = "Print the effective configuration as JSON")]
    Config,
}

fn load_state(config: Option<&PathBuf>) -> Result<AppState, String> {
    let config = match config {
        Some(path) => load_config(path).map_err(|e| format!("{}: {}", path.display(), e))?,
        None => ProjectConfig::default(),
    };
    Ok(create_app_state_with(&config))
}

/// Run a parsed command line and return what should be printed.
pub fn run(cli: Cli) -> Result<String, String> {
    let state = load_state(cli.config.as_ref())?;

    match cli.command {
        Commands::Report {
            poles,
            prices,
            angle,
            start,
            price,
            remove,
            angles_from_coordinates,
            export,
            json,
        } => {
            let mut notes = Vec::new();

            if let Some(path) = prices {
                notes.push(files::import_prices_file(&state, &path)?.message);
            }
            for assignment in &price {
                commands::apply_price_override(&state, assignment)?;
            }
            if let Some(path) = poles {
                notes.push(files::import_poles_file(&state, &path)?.message);
            }
            for input in &angle {
                commands::add_pole(&state, input)?;
            }
            if !remove.is_empty() {
                commands::remove_poles_at(&state, &remove)?;
            }
            if angles_from_coordinates {
                commands::derive_angles_from_coordinates(&state)?;
            }
            if let Some(category) = start {
                commands::set_starting_category(&state, &category)?;
            }

            let data = commands::get_report(&state)?;
            let mut out = if json {
                report::render_json(&data)?
            } else {
                report::render_text(&data)
            };

            if let Some(target) = export {
                let target = target.to_string_lossy().to_string();
                let today = chrono::Local::now().date_naive();
                let written = files::export_rab(&state, &target, today)?;
                notes.push(format!("Exported RAB to {}", written));
            }

            // JSON output stays machine-readable; notes go to the log instead
            if !json {
                for note in notes {
                    out.push('\n');
                    out.push_str(&note);
                }
            } else {
                for note in notes {
                    log::info!(target: "CLI", "{}", note);
                }
            }
            Ok(out)
        }
        Commands::Classify { angles } => {
            let lines: Vec<String> = commands::classify_angles(&angles)
                .into_iter()
                .map(|(input, category)| format!("{}\t{}", input, category))
                .collect();
            Ok(lines.join("\n"))
        }
        Commands::Config => {
            let config = commands::get_config(&state)?;
            config.to_json().map_err(|e| e.to_string())
        }
    }
}
