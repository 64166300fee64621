//! 2D histogram helpers
//!
//! Conditional normalization of a compound 2D histogram along one axis, plus
//! a bin-center convenience. These operate on plain numeric arrays and
//! bin-edge slices, independent of the gridded data model.

use crate::errors::{Result, RuDiCyError};
use ndarray::{Array1, Array2, Axis};

/// Axis along which a 2D histogram is normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormAxis {
    /// Normalize along x: divide by the x-bin widths and by each row's total
    X,
    /// Normalize along y: divide by the y-bin widths and by each column's total
    Y,
}

impl NormAxis {
    /// Get the string representation of the axis
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
        }
    }
}

/// Get a conditional 2D histogram from a compound 2D histogram.
///
/// Divides each count by the bin width along the normalization axis and by
/// the total count of its slice along the other axis, yielding a conditional
/// density per slice. Rows index y, columns index x.
///
/// # Errors
///
/// Returns [`RuDiCyError::InvalidHistogram`] if the number of bin edges is
/// not the normalized axis length plus one.
pub fn conditional_hist2d(
    counts: &Array2<f64>,
    norm_bins: &[f64],
    norm_axis: NormAxis,
) -> Result<Array2<f64>> {
    let (n_rows, n_cols) = counts.dim();
    let axis_len = match norm_axis {
        NormAxis::X => n_cols,
        NormAxis::Y => n_rows,
    };

    if norm_bins.len() != axis_len + 1 {
        return Err(RuDiCyError::InvalidHistogram {
            message: format!(
                "expected {} bin edges for {} bins along '{}', got {}",
                axis_len + 1,
                axis_len,
                norm_axis.as_str(),
                norm_bins.len()
            ),
        });
    }

    let widths: Vec<f64> = norm_bins.windows(2).map(|w| w[1] - w[0]).collect();

    let result = match norm_axis {
        NormAxis::X => {
            let row_sums = counts.sum_axis(Axis(1));
            Array2::from_shape_fn((n_rows, n_cols), |(i, j)| {
                counts[[i, j]] / widths[j] / row_sums[i]
            })
        }
        NormAxis::Y => {
            let col_sums = counts.sum_axis(Axis(0));
            Array2::from_shape_fn((n_rows, n_cols), |(i, j)| {
                counts[[i, j]] / widths[i] / col_sums[j]
            })
        }
    };

    Ok(result)
}

/// Calculate the centers of bins given their edges.
#[must_use]
pub fn bin_centers(bin_edges: &[f64]) -> Array1<f64> {
    bin_edges
        .windows(2)
        .map(|w| (w[0] + w[1]) / 2.0)
        .collect()
}
