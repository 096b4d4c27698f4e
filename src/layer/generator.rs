//! Nested layer construction.

use super::config::LayerCenter;
use crate::error::{GnsError, Result};
use crate::space::{BoundingBox, Interval};
use tracing::debug;

/// Produces progressively larger boxes, innermost first.
pub struct LayerGenerator;

impl LayerGenerator {
    /// Builds `num_layers` nested boxes over `base_range`.
    ///
    /// Layer `i` scales the base extent by `(i + 1) / num_layers`, so the
    /// last layer spans the whole base range. One layer reduces GNS to a
    /// plain VNS over the full domain.
    ///
    /// # Errors
    ///
    /// - [`GnsError::InvalidDimension`] if `dimension` is zero or differs
    ///   from `base_range.dimension()`.
    /// - [`GnsError::InvalidPartition`] if `num_layers` is zero or the base
    ///   range has no positive extent to scale.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_gns::layer::{LayerCenter, LayerGenerator};
    /// use u_gns::space::BoundingBox;
    ///
    /// let base = BoundingBox::uniform(2, -500.0, 500.0).unwrap();
    /// let layers = LayerGenerator::generate(2, 2, &base, LayerCenter::Origin).unwrap();
    /// assert_eq!(layers[0], BoundingBox::uniform(2, -250.0, 250.0).unwrap());
    /// assert_eq!(layers[1], base);
    /// ```
    pub fn generate(
        dimension: usize,
        num_layers: usize,
        base_range: &BoundingBox,
        center: LayerCenter,
    ) -> Result<Vec<BoundingBox>> {
        if dimension == 0 || base_range.dimension() != dimension {
            return Err(GnsError::InvalidDimension {
                expected: base_range.dimension(),
                got: dimension,
            });
        }
        if num_layers == 0 {
            return Err(GnsError::InvalidPartition(
                "num_layers must be at least 1".into(),
            ));
        }

        // (center, half extent of the outermost layer) per axis
        let axes: Vec<(f64, f64)> = base_range
            .intervals()
            .iter()
            .map(|iv| match center {
                LayerCenter::Origin => (0.0, iv.high()),
                LayerCenter::DomainCenter => (iv.center(), 0.5 * iv.width()),
            })
            .collect();

        if let Some(axis) = axes.iter().position(|&(_, half)| half <= 0.0) {
            return Err(GnsError::InvalidPartition(format!(
                "axis {axis} of the base range has no positive extent to layer"
            )));
        }

        let mut layers = Vec::with_capacity(num_layers);
        for i in 0..num_layers {
            let scale = (i + 1) as f64;
            let intervals = axes
                .iter()
                .map(|&(c, half)| {
                    let size = half / num_layers as f64 * scale;
                    Interval::new(c - size, c + size)
                })
                .collect::<Result<Vec<_>>>()?;
            let layer = BoundingBox::new(intervals)?;
            debug!(layer = i, bounds = ?layer.intervals(), "generated layer");
            layers.push(layer);
        }

        Ok(layers)
    }
}
