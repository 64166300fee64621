//! Area-averaged diurnal cycle computation
//!
//! The aggregation pipeline: infer the sampling resolution of the dataset,
//! approximate the local time of every (time, longitude) sample, group the
//! samples by the time-of-day component of that label, and average each group
//! with missing values skipped. The "time" and "lon" dimensions are consumed;
//! every other dimension passes through.

use crate::errors::{Result, RuDiCyError};
use crate::grid::{GriddedVariable, LON_DIM, TIME_DIM};
use crate::local_time::{local_time_offsets, LocalTimeOptions};
use crate::sampling::infer_resolution_seconds;
use chrono::{NaiveTime, Timelike};
use ndarray::{Array2, ArrayD, IxDyn};
use rayon::prelude::*;

/// Name of the derived output dimension replacing "time" and "lon"
pub const TIME_OF_DAY_DIM: &str = "time_of_day";

/// Result of a diurnal-cycle aggregation.
///
/// Holds the mean of all (time, lon) samples per local time-of-day bucket,
/// with the same non-consumed dimensions as the input plus a leading
/// "time_of_day" dimension. Buckets are in ascending time-of-day order.
#[derive(Debug, Clone)]
pub struct DiurnalCycle {
    /// Result variable name, derived from the input variable
    pub name: String,
    /// Averaged data; NaN where a bucket/slice had no valid samples
    pub data: ArrayD<f64>,
    /// Dimension names of `data`: "time_of_day" followed by the pass-through dimensions
    pub dims: Vec<String>,
    /// Local time-of-day label of each bucket, ascending
    pub time_of_day: Vec<NaiveTime>,
    /// Sampling resolution inferred from the input, in seconds
    pub resolution_seconds: i64,
}

impl DiurnalCycle {
    /// Time-of-day bucket labels as seconds since local midnight
    #[must_use]
    pub fn seconds_of_day(&self) -> Vec<u32> {
        self.time_of_day
            .iter()
            .map(NaiveTime::num_seconds_from_midnight)
            .collect()
    }

    /// Number of time-of-day buckets
    #[must_use]
    pub fn num_buckets(&self) -> usize {
        self.time_of_day.len()
    }
}

/// Compute the average diurnal cycle of a gridded variable by grouping its
/// samples on approximate local time.
///
/// Every combination of sample time and longitude is separately shifted to
/// local time - each longitude column gets its own time-of-day labeling - and
/// all combinations are pooled afterward. The sampling resolution is inferred
/// fresh from the time coordinate on every call. Degenerate size-1 input
/// dimensions are squeezed out of the result.
///
/// # Arguments
///
/// * `var` - Input variable with "time" and "lon" dimensions
/// * `options` - Local-time approximation behavior (grid snapping, centering)
///
/// # Errors
///
/// Returns an error if:
/// - the "time" or "lon" dimension is missing
/// - the time coordinate is not evenly spaced ([`RuDiCyError::NonUniformSampling`])
/// - the resolution cannot be inferred (fewer than two samples, fractional gaps)
pub fn avg_diurnal_cycle(var: &GriddedVariable, options: LocalTimeOptions) -> Result<DiurnalCycle> {
    let time_axis = var.axis_of(TIME_DIM)?;
    let lon_axis = var.axis_of(LON_DIM)?;

    let resolution_seconds = infer_resolution_seconds(&var.time)?;
    let offsets = local_time_offsets(&var.lon, resolution_seconds, options)?;

    let n_time = var.time.len();
    let n_lon = var.lon.len();

    // Local time-of-day key per (time, lon) sample, as seconds since midnight.
    // The date component of the local-time label is discarded here.
    let keys = Array2::from_shape_fn((n_time, n_lon), |(t, l)| {
        (var.time[t] + offsets[l]).num_seconds_from_midnight()
    });

    // Ascending bucket order, key -> bucket index
    let sorted_keys: std::collections::BTreeSet<u32> = keys.iter().copied().collect();
    let bucket_of: std::collections::BTreeMap<u32, usize> = sorted_keys
        .iter()
        .enumerate()
        .map(|(bucket, &key)| (key, bucket))
        .collect();
    let n_buckets = bucket_of.len();

    // Pass-through axes, with degenerate size-1 dimensions squeezed out of
    // the result
    let shape = var.shape();
    let remaining_axes: Vec<usize> = (0..var.data.ndim())
        .filter(|&ax| ax != time_axis && ax != lon_axis && shape[ax] != 1)
        .collect();
    let remaining_shape: Vec<usize> = remaining_axes.iter().map(|&ax| shape[ax]).collect();
    let slice_size: usize = remaining_shape.iter().product();

    println!(
        "⚡ Pooling {} samples into {} time-of-day buckets across {} CPU cores",
        n_time * n_lon * slice_size,
        n_buckets,
        rayon::current_num_threads()
    );

    // Manual group-by-aggregate, parallel over the pass-through slices:
    // each slice walks all (time, lon) samples once, accumulating a running
    // (sum, count) per bucket, then finalizes to a mean.
    let per_slice: Vec<Vec<f64>> = (0..slice_size)
        .into_par_iter()
        .map(|flat_idx| {
            // Convert flat index back to multi-dimensional coordinates of the
            // pass-through axes
            let mut coords = vec![0; shape.len()];
            let mut remaining = flat_idx;
            for (pos, &ax) in remaining_axes.iter().enumerate() {
                let stride: usize = remaining_shape[pos + 1..].iter().product();
                coords[ax] = remaining / stride;
                remaining %= stride;
            }

            let mut sums = vec![0.0_f64; n_buckets];
            let mut counts = vec![0_u64; n_buckets];

            for t in 0..n_time {
                for l in 0..n_lon {
                    coords[time_axis] = t;
                    coords[lon_axis] = l;
                    if let Some(&value) = var.data.get(coords.as_slice()) {
                        if value.is_finite() {
                            let bucket = bucket_of[&keys[[t, l]]];
                            sums[bucket] += value;
                            counts[bucket] += 1;
                        }
                    }
                }
            }

            sums.iter()
                .zip(&counts)
                .map(|(&sum, &count)| {
                    if count > 0 {
                        sum / count as f64
                    } else {
                        f64::NAN // all samples in this bucket/slice were missing
                    }
                })
                .collect()
        })
        .collect();

    // Assemble with "time_of_day" as the leading axis
    let mut out = Vec::with_capacity(n_buckets * slice_size);
    for bucket in 0..n_buckets {
        for slice in &per_slice {
            out.push(slice[bucket]);
        }
    }

    let mut out_shape = Vec::with_capacity(1 + remaining_shape.len());
    out_shape.push(n_buckets);
    out_shape.extend_from_slice(&remaining_shape);
    let data = ArrayD::from_shape_vec(IxDyn(&out_shape), out)?;

    let mut dims = Vec::with_capacity(1 + remaining_axes.len());
    dims.push(TIME_OF_DAY_DIM.to_string());
    dims.extend(remaining_axes.iter().map(|&ax| var.dims[ax].clone()));

    let time_of_day = bucket_of
        .keys()
        .map(|&key| {
            NaiveTime::from_num_seconds_from_midnight_opt(key, 0).ok_or_else(|| {
                RuDiCyError::Generic(format!("invalid seconds-since-midnight key {}", key))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(DiurnalCycle {
        name: format!("{}_diurnal_cycle", var.name),
        data,
        dims,
        time_of_day,
        resolution_seconds,
    })
}
