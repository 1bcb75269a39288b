use clap::Parser;
use color_eyre::Result;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use booth_map::correlate::{build_floor_plan, count_unique_title_codes};
use booth_map::error::LoadError;
use booth_map::export::{export_csv, export_json};
use booth_map::layout::LayoutSource;
use booth_map::parser::{load_booth_names, load_floor_map, load_listings, load_stamp_rallies};
use booth_map::ui::App;

#[derive(Parser, Debug)]
#[command(name = "booth-map")]
#[command(about = "Booth Map - place convention listings on the venue floor plan")]
#[command(version)]
struct Args {
    /// Path to listings JSON
    #[arg(required = true)]
    listings: PathBuf,

    /// draw.io floor map to take booth positions from
    #[arg(long, value_name = "FILE")]
    floormap: Option<PathBuf>,

    /// JSON map of booth code (or range) to booth name
    #[arg(long, value_name = "FILE")]
    booth_names: Option<PathBuf>,

    /// Stamp rallies JSON
    #[arg(long, value_name = "FILE")]
    rallies: Option<PathBuf>,

    /// Export to CSV (optional output path)
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Export to JSON (optional output path)
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,
}

/// Optional venue assets never stop the program.
fn or_default<T: Default>(loaded: Option<Result<T, LoadError>>, what: &str) -> T {
    match loaded {
        None => T::default(),
        Some(Ok(value)) => value,
        Some(Err(err)) => {
            tracing::warn!(error = %err, "could not load {what}, continuing without it");
            T::default()
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let listings = load_listings(&args.listings)?;

    let floor_map = args
        .floormap
        .as_ref()
        .map(|path| load_floor_map(path).map(Some));
    let layout = match or_default(floor_map, "floor map") {
        Some(xml) => LayoutSource::diagram(xml),
        None => LayoutSource::Generated,
    };
    let booth_names = or_default(args.booth_names.as_ref().map(load_booth_names), "booth names");
    let rallies = or_default(args.rallies.as_ref().map(load_stamp_rallies), "stamp rallies");

    let title_codes = count_unique_title_codes(listings.iter().map(|l| l.title.as_str()));
    let plan = build_floor_plan(&listings, &layout, booth_names, rallies);

    if let Some(csv_path) = &args.csv {
        export_csv(&plan, csv_path)?;
        println!("Exported to CSV: {}", csv_path.display());
    }

    if let Some(json_path) = &args.json {
        export_json(&plan, json_path)?;
        println!("Exported to JSON: {}", json_path.display());
    }

    if args.csv.is_some() || args.json.is_some() {
        return Ok(());
    }

    let terminal = ratatui::init();
    let result = App::new(plan)
        .with_title_code_count(title_codes)
        .run(terminal);
    ratatui::restore();
    result
}
