//! Regular grid partitioning of a bounding box.

use super::config::GridMode;
use crate::error::{GnsError, Result};
use crate::space::{BoundingBox, Interval};

/// Splits a domain into a grid of equally sized neighborhoods.
pub struct NeighborhoodGenerator;

/// Per-axis grid: the ordered cell edges.
struct AxisGrid {
    starts: Vec<f64>,
    /// Upper edge of each cell, indexed like `starts`.
    ends: Vec<f64>,
    /// Which starts produce a cell on this axis.
    kept: Vec<bool>,
}

impl NeighborhoodGenerator {
    /// Partitions `domain` into `cells_per_dimension` cells along every axis.
    ///
    /// Cells are returned in row-major Cartesian order (the last axis
    /// varies fastest). This order is the VNS scan order, so it decides
    /// which of two equally good neighborhoods wins.
    ///
    /// # Errors
    ///
    /// - [`GnsError::InvalidDimension`] if `dimension` is zero or differs
    ///   from `domain.dimension()`.
    /// - [`GnsError::InvalidPartition`] if `cells_per_dimension` is zero.
    ///
    /// In [`GridMode::Truncated`] the result may be empty: a range
    /// narrower than the cell count truncates to a zero cell width, and the
    /// retention rule can drop the only boundary of a short range.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_gns::neighborhood::{GridMode, NeighborhoodGenerator};
    /// use u_gns::space::BoundingBox;
    ///
    /// let domain = BoundingBox::uniform(1, -10.0, 10.0).unwrap();
    /// let cells = NeighborhoodGenerator::generate(&domain, 1, 2, GridMode::Truncated).unwrap();
    /// assert_eq!(cells.len(), 2);
    /// assert_eq!(cells[0], BoundingBox::uniform(1, -10.0, 0.0).unwrap());
    /// assert_eq!(cells[1], BoundingBox::uniform(1, 0.0, 10.0).unwrap());
    /// ```
    pub fn generate(
        domain: &BoundingBox,
        dimension: usize,
        cells_per_dimension: usize,
        mode: GridMode,
    ) -> Result<Vec<BoundingBox>> {
        if dimension == 0 || domain.dimension() != dimension {
            return Err(GnsError::InvalidDimension {
                expected: domain.dimension(),
                got: dimension,
            });
        }
        if cells_per_dimension == 0 {
            return Err(GnsError::InvalidPartition(
                "cells_per_dimension must be at least 1".into(),
            ));
        }

        let axes = domain
            .intervals()
            .iter()
            .map(|iv| match mode {
                GridMode::Truncated => truncated_axis(iv, cells_per_dimension),
                GridMode::Exact => exact_axis(iv, cells_per_dimension),
            })
            .collect::<Vec<_>>();

        if axes.iter().any(|a| !a.kept.contains(&true)) {
            return Ok(Vec::new());
        }

        let mut neighborhoods = Vec::new();
        let mut index = vec![0usize; dimension];
        loop {
            let cell: Vec<Interval> = axes
                .iter()
                .zip(&index)
                .filter(|&(axis, &i)| axis.kept[i])
                .map(|(axis, &i)| Interval::new(axis.starts[i], axis.ends[i]))
                .collect::<Result<_>>()?;

            if cell.len() == dimension {
                neighborhoods.push(BoundingBox::new(cell)?);
            }

            // Odometer increment, last axis fastest.
            let mut axis = dimension;
            loop {
                if axis == 0 {
                    return Ok(neighborhoods);
                }
                axis -= 1;
                index[axis] += 1;
                if index[axis] < axes[axis].starts.len() {
                    break;
                }
                index[axis] = 0;
            }
        }
    }
}

fn truncated_axis(iv: &Interval, cells: usize) -> AxisGrid {
    let width = (iv.width() / cells as f64).trunc();
    if width < 1.0 {
        return AxisGrid {
            starts: Vec::new(),
            ends: Vec::new(),
            kept: Vec::new(),
        };
    }

    let first = iv.low().ceil();
    let last_allowed = iv.high().floor();
    let mut starts = Vec::new();
    let mut b = first;
    while b <= last_allowed {
        starts.push(b);
        b += width;
    }

    let last = starts.last().copied().unwrap_or(first);
    let kept = starts
        .iter()
        .map(|&c| c < last || c + width <= last)
        .collect();
    let ends = starts.iter().map(|&c| c + width).collect();

    AxisGrid { starts, ends, kept }
}

fn exact_axis(iv: &Interval, cells: usize) -> AxisGrid {
    let width = iv.width() / cells as f64;
    let starts: Vec<f64> = (0..cells)
        .map(|k| iv.low() + k as f64 * width)
        .collect();
    let ends = (0..cells)
        .map(|k| {
            if k + 1 == cells {
                iv.high()
            } else {
                iv.low() + (k + 1) as f64 * width
            }
        })
        .collect();

    AxisGrid {
        kept: vec![true; starts.len()],
        starts,
        ends,
    }
}
