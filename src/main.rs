//! Entry point for the RuDiCy application.
//! Handles CLI parsing, file loading, and dispatches the diurnal-cycle computation.

use clap::Parser;
use netcdf::open;
mod cli;

use cli::Args;
use ru_di_cy::diurnal::avg_diurnal_cycle;
use ru_di_cy::local_time::LocalTimeOptions;
use ru_di_cy::netcdf_io::{read_gridded_variable, write_diurnal_cycle};
use ru_di_cy::parallel::{get_parallel_info, ParallelConfig};
use ru_di_cy::timestamp::file_datestr;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args = Args::parse();

    println!(
        r#"
------------------------------------------------------------------
            ______      ______  _  _____
            | ___ \     |  _  \(_)/  __ \
            | |_/ /_   _| | | | _ | /  \/_   _
            |    /| | | | | | || || |   | | | |
            | |\ \| |_| | |/ / | || \__/\ |_| |
            \_| \_|\__,_|___/  |_| \____/\__, |
                                          __/ |
                 Rust-based diurnal cycles|___/
------------------------------------------------------------------
                        "#
    );

    // Configure the thread pool before any parallel work
    let parallel_config = ParallelConfig::new(args.threads);
    parallel_config.setup_global_pool()?;

    if args.verbose {
        get_parallel_info().print_info();
    }

    // Open NetCDF file
    let file = open(&args.file)?;
    println!("Successfully opened NetCDF file: {}", args.file.display());

    if args.list_vars {
        println!("\nVariables:");
        for var in file.variables() {
            let dims: Vec<String> = var
                .dimensions()
                .iter()
                .map(|d| format!("{} ({})", d.name(), d.len()))
                .collect();
            println!("   {} [{}]", var.name(), dims.join(", "));
        }
        return Ok(());
    }

    let var_name = args
        .var
        .ok_or("No variable specified. Use --var <name> or --list-vars.")?;

    let variable = read_gridded_variable(&file, &var_name)?;
    println!(
        "🚀 Loaded variable '{}' with shape {:?} ({} time samples, {} longitudes)",
        variable.name,
        variable.shape(),
        variable.time.len(),
        variable.lon.len()
    );

    let options = LocalTimeOptions {
        keep_resolution: !args.ignore_resolution,
        center: args.center,
    };
    let cycle = avg_diurnal_cycle(&variable, options)?;
    println!(
        "✅ Averaged onto {} time-of-day buckets (inferred resolution: {}s)",
        cycle.num_buckets(),
        cycle.resolution_seconds
    );

    if let Some(output_path) = args.output_netcdf {
        write_diurnal_cycle(&cycle, &output_path)?;
        println!("✅ Saved result to {}", output_path.display());
    } else {
        println!("\nDiurnal cycle of '{}':", var_name);
        for (bucket, tod) in cycle.time_of_day.iter().enumerate() {
            let slice = cycle.data.index_axis(ndarray::Axis(0), bucket);
            let valid: Vec<f64> = slice.iter().copied().filter(|v| v.is_finite()).collect();
            if valid.is_empty() {
                println!("   {}  (all missing)", tod.format("%H:%M:%S"));
            } else {
                let mean = valid.iter().sum::<f64>() / valid.len() as f64;
                println!("   {}  mean over remaining dims: {:.4}", tod.format("%H:%M:%S"), mean);
            }
        }
        println!(
            "\n💡 Tip: Use --output-netcdf diurnal_{}.nc to save the full result",
            file_datestr(chrono::Utc::now())
        );
    }

    Ok(())
}
