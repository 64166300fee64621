//! Labeled gridded variables
//!
//! A [`GriddedVariable`] is the crate's minimal labeled-array container: an
//! N-dimensional data array with named dimensions plus decoded "time" and
//! "lon" coordinates. It is the unit of input for the diurnal-cycle
//! aggregation and the unit of output of the NetCDF reader.

use crate::errors::{Result, RuDiCyError};
use chrono::{DateTime, Utc};
use ndarray::ArrayD;

/// Name of the time dimension consumed by the aggregation
pub const TIME_DIM: &str = "time";

/// Name of the longitude dimension consumed by the aggregation
pub const LON_DIM: &str = "lon";

/// A gridded, time-varying variable with named dimensions.
///
/// The data array may carry arbitrary extra dimensions (latitude, vertical
/// level, ...) besides "time" and "lon"; those pass through the aggregation
/// untouched. Longitude values keep the caller's convention ([-180, 180] or
/// [0, 360)) - no wraparound normalization is applied anywhere.
#[derive(Debug, Clone)]
pub struct GriddedVariable {
    /// Variable name, used for labeling results
    pub name: String,
    /// Data values; NaN marks missing samples
    pub data: ArrayD<f64>,
    /// Dimension names, one per axis of `data`, in axis order
    pub dims: Vec<String>,
    /// Timestamps along the "time" dimension, monotonically increasing
    pub time: Vec<DateTime<Utc>>,
    /// Longitude values in degrees along the "lon" dimension
    pub lon: Vec<f64>,
}

impl GriddedVariable {
    /// Create a new gridded variable, validating dimensions against coordinates.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the number of dimension names does not match the array rank
    /// - the "time" or "lon" dimension is missing
    /// - a coordinate length does not match its dimension length
    pub fn new(
        name: impl Into<String>,
        data: ArrayD<f64>,
        dims: Vec<String>,
        time: Vec<DateTime<Utc>>,
        lon: Vec<f64>,
    ) -> Result<Self> {
        let name = name.into();

        if dims.len() != data.ndim() {
            return Err(RuDiCyError::RankMismatch {
                var: name,
                names: dims.len(),
                rank: data.ndim(),
            });
        }

        let var = Self {
            name,
            data,
            dims,
            time,
            lon,
        };

        let time_axis = var.axis_of(TIME_DIM)?;
        let lon_axis = var.axis_of(LON_DIM)?;

        var.check_coord_len(TIME_DIM, time_axis, var.time.len())?;
        var.check_coord_len(LON_DIM, lon_axis, var.lon.len())?;

        Ok(var)
    }

    /// Axis index of a named dimension.
    ///
    /// # Errors
    ///
    /// Returns [`RuDiCyError::DimensionNotFound`] if the variable has no
    /// dimension with that name.
    pub fn axis_of(&self, dim: &str) -> Result<usize> {
        self.dims
            .iter()
            .position(|d| d == dim)
            .ok_or_else(|| RuDiCyError::DimensionNotFound {
                var: self.name.clone(),
                dim: dim.to_string(),
            })
    }

    /// Shape of the data array
    #[must_use]
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    fn check_coord_len(&self, dim: &str, axis: usize, coord_len: usize) -> Result<()> {
        let dim_len = self.data.shape()[axis];
        if coord_len != dim_len {
            return Err(RuDiCyError::CoordinateMismatch {
                dim: dim.to_string(),
                message: format!("coordinate has {} values, dimension has {}", coord_len, dim_len),
            });
        }
        Ok(())
    }
}
