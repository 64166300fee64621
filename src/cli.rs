//! Defines command-line interface options using `clap` for the RuDiCy application.

use clap::Parser;
use std::path::PathBuf;

/// A CLI tool for computing diurnal cycles from NetCDF files
#[derive(Parser, Debug)]
#[command(
    version = "0.1.0",
    name = "RuDiCy",
    about = "App for computing area-averaged diurnal cycles from NetCDF files"
)]
pub struct Args {
    /// Path to the NetCDF file
    #[arg(short, long)]
    pub file: PathBuf,

    /// Variable to average onto local time-of-day buckets
    #[arg(long)]
    pub var: Option<String>,

    /// Do not snap local-time offsets onto the dataset's sampling grid
    #[arg(long, default_value_t = false)]
    pub ignore_resolution: bool,

    /// Center local-time labels at the midpoint of each sampling bucket
    #[arg(long, default_value_t = false)]
    pub center: bool,

    /// Path to save result as NetCDF. If not set, prints to terminal.
    #[arg(long)]
    pub output_netcdf: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Number of threads to use for parallel processing. Defaults to number of CPU cores.
    #[arg(short = 't', long)]
    pub threads: Option<usize>,

    /// List all variables and dimensions in the NetCDF file
    #[arg(long)]
    pub list_vars: bool,
}
