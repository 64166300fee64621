//! RuDiCy: area-averaged diurnal cycles for gridded climate data
//!
//! A Rust library for computing the average diurnal (daily) cycle of a
//! gridded, time-varying field. RuDiCy approximates the local solar time of
//! every (time, longitude) sample from longitude alone (15° ≡ 1 hour), groups
//! the samples by local time-of-day, and averages each group with missing
//! values skipped, using parallel processing for the reduction.
//!
//! ## Key Features
//!
//! - **Local-Time Approximation**: Longitude-based local solar time, optionally
//!   snapped to the dataset's own sampling grid and bucket-centered
//! - **Resolution Inference**: The sampling interval is inferred from the time
//!   coordinate and validated for uniform spacing
//! - **NaN-Aware Averaging**: Missing samples are excluded per group and slice
//! - **Parallel Processing**: Efficient pooling using Rayon for multi-core processing
//! - **NetCDF Support**: Read gridded variables and write results via NetCDF
//! - **Histogram Helpers**: Conditional 2D-histogram normalization and bin centers
//!
//! ## Module Organization
//!
//! - [`grid`]: The labeled gridded-variable container
//! - [`sampling`]: Sampling-resolution inference
//! - [`local_time`]: Local solar time approximation
//! - [`diurnal`]: Diurnal-cycle aggregation
//! - [`histogram`]: 2D-histogram helpers
//! - [`timestamp`]: Timestamp formatting helpers
//! - [`netcdf_io`]: NetCDF file I/O operations
//! - [`parallel`]: Parallel processing configuration
//! - [`errors`]: Centralized error handling
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use ru_di_cy::prelude::*;
//! use netcdf::open;
//!
//! // Open a NetCDF file and load a variable with its time/lon coordinates
//! let file = open("data.nc").unwrap();
//! let variable = read_gridded_variable(&file, "temperature").unwrap();
//!
//! // Average onto local time-of-day buckets
//! let cycle = avg_diurnal_cycle(&variable, LocalTimeOptions::default()).unwrap();
//! for (tod, value) in cycle.time_of_day.iter().zip(cycle.data.iter()) {
//!     println!("{tod}: {value}");
//! }
//! ```
//!
//! The library is designed for atmospheric/climate workflows and provides
//! clear error reporting for debugging and analysis.

// Core modules
pub mod diurnal;
pub mod errors;
pub mod grid;
pub mod histogram;
pub mod local_time;
pub mod netcdf_io;
pub mod parallel;
pub mod sampling;
pub mod timestamp;

// Direct re-exports for the public API
pub use diurnal::*;
pub use errors::*;
pub use grid::*;
pub use histogram::*;
pub use local_time::*;
pub use netcdf_io::*;
pub use parallel::*;
pub use sampling::*;
pub use timestamp::*;

// High-level convenience API
pub mod prelude {
    //! Commonly used imports for convenience
    pub use crate::diurnal::{avg_diurnal_cycle, DiurnalCycle, TIME_OF_DAY_DIM};
    pub use crate::errors::{Result, RuDiCyError};
    pub use crate::grid::{GriddedVariable, LON_DIM, TIME_DIM};
    pub use crate::histogram::{bin_centers, conditional_hist2d, NormAxis};
    pub use crate::local_time::{approx_local_time, local_time_offsets, LocalTimeOptions};
    pub use crate::netcdf_io::{read_gridded_variable, write_diurnal_cycle};
    pub use crate::parallel::ParallelConfig;
    pub use crate::sampling::infer_resolution_seconds;
    pub use crate::timestamp::file_datestr;
}
