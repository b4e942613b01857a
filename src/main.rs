use clap::Parser;
use color_eyre::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;
use std::path::PathBuf;

use estate_fixtures::export::{export_csv, export_json, write_unit};
use estate_fixtures::generator::UnitGenerator;
use estate_fixtures::model::{default_projects, load_projects};

#[derive(Parser, Debug)]
#[command(name = "estate-fixtures")]
#[command(about = "Estate Fixtures - generate mock real-estate unit records")]
#[command(version)]
struct Args {
    /// JSON file of project definitions (defaults to the built-in set)
    #[arg(long, value_name = "FILE")]
    projects: Option<PathBuf>,

    /// RNG seed for reproducible output
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Export to CSV (optional output path)
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Export to JSON (optional output path)
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let projects = match &args.projects {
        Some(path) => load_projects(path)?,
        None => default_projects(),
    };

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let generator = UnitGenerator::new(projects, rng);

    if args.csv.is_some() || args.json.is_some() {
        let units: Vec<_> = generator.collect();

        if let Some(csv_path) = &args.csv {
            export_csv(&units, csv_path)?;
            println!("Exported to CSV: {}", csv_path.display());
        }

        if let Some(json_path) = &args.json {
            export_json(&units, json_path)?;
            println!("Exported to JSON: {}", json_path.display());
        }

        return Ok(());
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for unit in generator {
        write_unit(&mut out, &unit)?;
    }
    out.flush()?;

    Ok(())
}
