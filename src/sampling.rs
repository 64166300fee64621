//! Sampling-resolution inference
//!
//! Determines the fixed interval between consecutive samples of a time
//! coordinate. The aggregation pipeline calls this on every invocation; the
//! result is never cached.

use crate::errors::{Result, RuDiCyError};
use chrono::{DateTime, Utc};

/// Infer the sampling resolution of a time coordinate, in whole seconds.
///
/// Computes the distinct consecutive gaps of the coordinate. The coordinate
/// must be evenly spaced: a single distinct gap value is the resolution.
///
/// Gaps with a fractional-second component are rejected rather than rounded;
/// sub-second sampling is not supported.
///
/// # Errors
///
/// Returns an error if:
/// - fewer than two timestamps are provided (no gap to infer)
/// - the gaps are not all equal ([`RuDiCyError::NonUniformSampling`])
/// - a gap is zero or negative (coordinate not monotonically increasing)
/// - a gap is not a whole number of seconds
pub fn infer_resolution_seconds(time: &[DateTime<Utc>]) -> Result<i64> {
    if time.len() < 2 {
        return Err(RuDiCyError::InvalidResolution {
            message: format!(
                "need at least two time samples to infer a resolution, got {}",
                time.len()
            ),
        });
    }

    let mut resolution: Option<i64> = None;

    for pair in time.windows(2) {
        let gap = pair[1] - pair[0];

        if gap.subsec_nanos() != 0 {
            return Err(RuDiCyError::InvalidResolution {
                message: format!(
                    "time gap {} is not a whole number of seconds; sub-second sampling is not supported",
                    gap
                ),
            });
        }

        let gap_seconds = gap.num_seconds();
        if gap_seconds <= 0 {
            return Err(RuDiCyError::InvalidResolution {
                message: "time coordinate must be strictly increasing".to_string(),
            });
        }

        match resolution {
            None => resolution = Some(gap_seconds),
            Some(expected) if expected != gap_seconds => {
                return Err(RuDiCyError::NonUniformSampling(format!(
                    "The samples of the dataset are not evenly spaced in time \
                     (found gaps of {}s and {}s). Please doublecheck and provide \
                     a dataset with evenly spaced samples!",
                    expected, gap_seconds
                )));
            }
            Some(_) => {}
        }
    }

    // windows(2) yielded at least one pair, so resolution is set
    Ok(resolution.unwrap_or_default())
}
