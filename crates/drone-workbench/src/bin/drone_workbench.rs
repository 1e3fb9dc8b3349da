use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use drone_workbench::{
    init_logging, load_planner, render_plan, render_recipes, MarkerReading, WorkbenchError,
    WorkbenchSpec,
};
use log::LevelFilter;

#[derive(Debug, Parser)]
#[command(name = "drone-workbench", version, about = "Plan drone hover points over the workbench")]
struct Cli {
    /// Log level for stderr output (off, error, warn, info, debug, trace).
    /// `RUST_LOG`, when set, takes precedence.
    #[arg(long, global = true, default_value = "warn")]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute per-drone flight targets for a craft recipe.
    Plan {
        /// Recipe (craft) id.
        #[arg(long)]
        recipe: u32,
        /// Cell id of the detected marker.
        #[arg(long)]
        marker: i32,
        /// Measured marker position in meters, `x,y,z`.
        #[arg(long, value_parser = parse_xyz, allow_hyphen_values = true)]
        position: [f64; 3],
        /// Workbench config JSON; the built-in workbench is used otherwise.
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Print the plan as JSON instead of text.
        #[arg(long)]
        json: bool,
        /// Write the JSON plan report to this path.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// List the configured recipes.
    Recipes {
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Print (or write) the built-in workbench config as JSON.
    Catalog {
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn parse_xyz(s: &str) -> Result<[f64; 3], String> {
    let parts = s
        .split(',')
        .map(|v| v.trim().parse::<f64>().map_err(|e| format!("{v:?}: {e}")))
        .collect::<Result<Vec<_>, _>>()?;
    match parts.as_slice() {
        [x, y, z] => Ok([*x, *y, *z]),
        _ => Err(format!("expected x,y,z but got {} values", parts.len())),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_logging(cli.log_level) {
        eprintln!("failed to initialize logger: {err}");
    }

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), WorkbenchError> {
    match command {
        Command::Plan {
            recipe,
            marker,
            position,
            catalog,
            json,
            output,
        } => {
            let planner = load_planner(catalog.as_deref())?;
            let plan = planner.plan(recipe, &MarkerReading::new(position, marker));
            if !plan.diagnostics.is_empty() {
                log::warn!("plan has {} reported conditions", plan.diagnostics.len());
            }

            if let Some(path) = output {
                plan.write_json(&path)?;
                println!("wrote flight plan JSON to {}", path.display());
            } else if json {
                println!("{}", plan.to_json_pretty()?);
            } else {
                print!("{}", render_plan(&plan));
            }
        }
        Command::Recipes { catalog } => {
            let planner = load_planner(catalog.as_deref())?;
            print!("{}", render_recipes(planner.catalog()));
        }
        Command::Catalog { output } => {
            let spec = WorkbenchSpec::builtin();
            match output {
                Some(path) => {
                    spec.write_json(&path)?;
                    println!("wrote workbench config to {}", path.display());
                }
                None => println!("{}", serde_json::to_string_pretty(&spec)?),
            }
        }
    }
    Ok(())
}
