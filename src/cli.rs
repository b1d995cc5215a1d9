use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

use crate::dates::parse_date;

#[derive(Parser, Debug)]
#[command(name = "harvest-hours", version)]
#[command(about = "Hours logged across two Harvest accounts, with progress to a monthly goal", long_about = None)]
pub struct Args {
    #[arg(long, help = "Load credentials from this file instead of ./.env")]
    pub env_file: Option<PathBuf>,
    #[arg(long, help = "Team member whose hours are reported")]
    pub user: Option<String>,
    #[arg(long, help = "Monthly goal in hours")]
    pub goal: Option<f64>,
    #[arg(long, value_parser = parse_date, help = "Compute ranges as of this date (YYYY-MM-DD)")]
    pub as_of: Option<NaiveDate>,
    #[arg(short, long, help = "Enable debug logging on stderr")]
    pub verbose: bool,
}
