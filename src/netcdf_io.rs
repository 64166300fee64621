//! NetCDF I/O operations
//!
//! This module loads gridded variables (with CF-style time decoding) from
//! NetCDF files into the crate's labeled container and writes computed
//! diurnal-cycle results to new NetCDF files.

use crate::diurnal::{DiurnalCycle, TIME_OF_DAY_DIM};
use crate::errors::{Result, RuDiCyError};
use crate::grid::{GriddedVariable, LON_DIM, TIME_DIM};
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use ndarray::{Array1, ArrayD, IxDyn};
use netcdf::{create, AttributeValue, File};
use std::{fs, path::Path};

/// Read a gridded variable from a NetCDF file, decoding its "time" and "lon"
/// coordinate variables.
///
/// The data is loaded as f64; the "time" coordinate is decoded via its
/// CF-style `units` attribute (e.g. `"hours since 2020-01-01 00:00:00"`).
///
/// # Errors
///
/// Returns an error if the variable or a coordinate variable is missing, the
/// time units cannot be decoded, or the coordinate lengths do not match the
/// variable's dimensions.
pub fn read_gridded_variable(file: &File, var_name: &str) -> Result<GriddedVariable> {
    let var = file
        .variable(var_name)
        .ok_or_else(|| RuDiCyError::VariableNotFound {
            var: var_name.to_string(),
        })?;

    let dims: Vec<String> = var
        .dimensions()
        .iter()
        .map(|d| d.name().to_string())
        .collect();
    let shape: Vec<usize> = var
        .dimensions()
        .iter()
        .map(netcdf::Dimension::len)
        .collect();

    let data_vec = var.get_values::<f64, _>(..)?;
    let data = ArrayD::from_shape_vec(IxDyn(&shape), data_vec)?;

    let time = read_time_coordinate(file)?;
    let lon = read_lon_coordinate(file)?;

    GriddedVariable::new(var_name, data, dims, time, lon)
}

/// Read and decode the "time" coordinate variable of a NetCDF file.
///
/// # Errors
///
/// Returns an error if the variable is missing, carries no string `units`
/// attribute, or the units cannot be parsed.
pub fn read_time_coordinate(file: &File) -> Result<Vec<DateTime<Utc>>> {
    let var = file
        .variable(TIME_DIM)
        .ok_or_else(|| RuDiCyError::VariableNotFound {
            var: TIME_DIM.to_string(),
        })?;

    let units_attr = var.attribute("units").ok_or_else(|| {
        RuDiCyError::TimeDecodeError("time variable has no 'units' attribute".to_string())
    })?;
    let units = match units_attr.value()? {
        AttributeValue::Str(s) => s,
        other => {
            return Err(RuDiCyError::TimeDecodeError(format!(
                "time 'units' attribute is not a string: {:?}",
                other
            )))
        }
    };

    let values = var.get_values::<f64, _>(..)?;
    decode_cf_times(&values, &units)
}

/// Read the "lon" coordinate variable of a NetCDF file as f64 degrees.
///
/// # Errors
///
/// Returns an error if the variable is missing or cannot be read.
pub fn read_lon_coordinate(file: &File) -> Result<Vec<f64>> {
    let var = file
        .variable(LON_DIM)
        .ok_or_else(|| RuDiCyError::VariableNotFound {
            var: LON_DIM.to_string(),
        })?;
    Ok(var.get_values::<f64, _>(..)?)
}

/// Decode numeric time values with a CF-style units string
/// (`"<unit> since <datetime>"`) into UTC timestamps.
///
/// Supported units are seconds, minutes, hours and days. Values are rounded
/// to the nearest whole second.
///
/// # Errors
///
/// Returns [`RuDiCyError::TimeDecodeError`] if the units string or the base
/// datetime cannot be parsed.
pub fn decode_cf_times(values: &[f64], units: &str) -> Result<Vec<DateTime<Utc>>> {
    let (unit, base_str) = units.split_once(" since ").ok_or_else(|| {
        RuDiCyError::TimeDecodeError(format!(
            "expected '<unit> since <datetime>' units, got '{}'",
            units
        ))
    })?;

    let unit_seconds: f64 = match unit.trim().to_lowercase().as_str() {
        "second" | "seconds" | "sec" | "secs" | "s" => 1.0,
        "minute" | "minutes" | "min" | "mins" => 60.0,
        "hour" | "hours" | "hr" | "hrs" | "h" => 3600.0,
        "day" | "days" | "d" => 86400.0,
        other => {
            return Err(RuDiCyError::TimeDecodeError(format!(
                "unsupported time unit '{}'",
                other
            )))
        }
    };

    let base = parse_base_datetime(base_str.trim())?;

    Ok(values
        .iter()
        .map(|&v| {
            #[allow(clippy::cast_possible_truncation)]
            let seconds = (v * unit_seconds).round() as i64;
            base + Duration::seconds(seconds)
        })
        .collect())
}

fn parse_base_datetime(base: &str) -> Result<DateTime<Utc>> {
    let base = base.trim_end_matches(" UTC").trim_end_matches('Z');

    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(base, format) {
            return Ok(dt.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(base, "%Y-%m-%d") {
        if let Some(dt) = date.and_hms_opt(0, 0, 0) {
            return Ok(dt.and_utc());
        }
    }

    Err(RuDiCyError::TimeDecodeError(format!(
        "cannot parse base datetime '{}'",
        base
    )))
}

/// Write a diurnal-cycle result to a new NetCDF file.
///
/// Creates the "time_of_day" coordinate variable (seconds since local
/// midnight) plus the pass-through dimensions, writes the averaged data with
/// a NaN `_FillValue`, and stamps a `history` attribute.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_diurnal_cycle(cycle: &DiurnalCycle, output_path: &Path) -> Result<()> {
    if output_path.exists() {
        fs::remove_file(output_path)?;
    }

    let mut file = create(output_path)?;

    // Define dimensions
    for (dim_name, &dim_len) in cycle.dims.iter().zip(cycle.data.shape()) {
        file.add_dimension(dim_name, dim_len)?;
    }

    // Coordinate variable for the grouped dimension
    let seconds: Array1<f64> = cycle
        .seconds_of_day()
        .iter()
        .map(|&s| f64::from(s))
        .collect();
    let mut tod_var = file.add_variable::<f64>(TIME_OF_DAY_DIM, &[TIME_OF_DAY_DIM])?;
    tod_var.put_attribute("units", "seconds since local midnight")?;
    tod_var.put(seconds.view(), ..)?;

    let dim_refs: Vec<&str> = cycle.dims.iter().map(|s| s.as_str()).collect();
    let mut data_var = file.add_variable::<f64>(&cycle.name, &dim_refs)?;
    data_var.put_attribute("_FillValue", f64::NAN)?;
    data_var.put_attribute(
        "cell_methods",
        format!("{} {}: mean (local time of day)", TIME_DIM, LON_DIM),
    )?;
    data_var.put(cycle.data.view(), ..)?;

    // Add history attribute
    file.add_attribute(
        "history",
        format!("Created by RuDiCy on {}", Utc::now().to_rfc3339()),
    )?;

    Ok(())
}
