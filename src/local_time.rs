//! Local solar time approximation
//!
//! Converts longitude into a time offset (15 degrees of longitude = 1 hour,
//! from the Earth's 360 degrees / 24 h rotation) and shifts a reference time
//! coordinate by it, yielding an approximate local time per (time, longitude)
//! pair. No equation-of-time correction is applied.

use crate::errors::{Result, RuDiCyError};
use chrono::{DateTime, Duration, Utc};
use ndarray::Array2;

/// Seconds of local-time offset per degree of longitude (3600 s / 15 deg)
const SECONDS_PER_DEGREE: f64 = 240.0;

/// Options controlling the local-time approximation.
#[derive(Debug, Clone, Copy)]
pub struct LocalTimeOptions {
    /// If true, snap each longitude's offset onto the dataset's own time grid
    /// so that adding it to a sampled timestamp yields another value on that
    /// grid. Default: true.
    pub keep_resolution: bool,
    /// If true, place the local-time label at the midpoint of the sampling
    /// bucket rather than its start, by adding half a resolution step to the
    /// snapped offset. Only meaningful together with `keep_resolution`; with
    /// `keep_resolution` false, centering is a documented no-op. Default: false.
    pub center: bool,
}

impl Default for LocalTimeOptions {
    fn default() -> Self {
        Self {
            keep_resolution: true,
            center: false,
        }
    }
}

/// Compute the per-longitude local-time offset, in whole seconds.
///
/// The offset is `floor(longitude * 240)` seconds. With
/// `options.keep_resolution`, the offset is truncated toward the earlier
/// resolution bucket (floor division by `resolution_seconds`, re-multiplied),
/// for positive and negative offsets alike. With `options.center` on top of
/// that, `resolution_seconds / 2` is added to land on the bucket midpoint.
///
/// # Errors
///
/// Returns [`RuDiCyError::InvalidResolution`] if `resolution_seconds` is not
/// positive.
pub fn local_time_offsets(
    longitude: &[f64],
    resolution_seconds: i64,
    options: LocalTimeOptions,
) -> Result<Vec<Duration>> {
    if resolution_seconds <= 0 {
        return Err(RuDiCyError::InvalidResolution {
            message: format!("resolution must be positive, got {}s", resolution_seconds),
        });
    }

    let offsets = longitude
        .iter()
        .map(|&lon| {
            #[allow(clippy::cast_possible_truncation)]
            let mut offset_seconds = (lon * SECONDS_PER_DEGREE).floor() as i64;

            if options.keep_resolution {
                offset_seconds = offset_seconds.div_euclid(resolution_seconds) * resolution_seconds;

                if options.center {
                    offset_seconds += resolution_seconds / 2;
                }
            }

            Duration::seconds(offset_seconds)
        })
        .collect();

    Ok(offsets)
}

/// Compute an approximation of the local time from a reference time
/// coordinate and a longitude coordinate.
///
/// Broadcast-adds the per-longitude offset to every reference timestamp. The
/// result has shape `(reference_time.len(), longitude.len())`: one local-time
/// value per (time, longitude) pair.
///
/// # Arguments
///
/// * `reference_time` - Timestamps for which the local time is approximated
/// * `longitude` - Longitude values in degrees
/// * `resolution_seconds` - The time resolution of the dataset, in seconds
/// * `options` - Grid snapping and centering behavior
///
/// # Errors
///
/// Returns an error if `resolution_seconds` is not positive.
pub fn approx_local_time(
    reference_time: &[DateTime<Utc>],
    longitude: &[f64],
    resolution_seconds: i64,
    options: LocalTimeOptions,
) -> Result<Array2<DateTime<Utc>>> {
    let offsets = local_time_offsets(longitude, resolution_seconds, options)?;

    Ok(Array2::from_shape_fn(
        (reference_time.len(), longitude.len()),
        |(t, l)| reference_time[t] + offsets[l],
    ))
}
