//! Axis-aligned intervals and boxes.

use crate::error::{GnsError, Result};

/// A closed interval `[low, high]` with finite edges and `low <= high`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    low: f64,
    high: f64,
}

impl Interval {
    /// Creates an interval, rejecting `low > high` and non-finite edges.
    pub fn new(low: f64, high: f64) -> Result<Self> {
        if !low.is_finite() || !high.is_finite() || low > high {
            return Err(GnsError::InvalidBounds { low, high });
        }
        Ok(Self { low, high })
    }

    /// `[-extent, extent]`.
    pub fn symmetric(extent: f64) -> Result<Self> {
        Self::new(-extent, extent)
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    pub fn center(&self) -> f64 {
        0.5 * (self.low + self.high)
    }

    pub fn contains(&self, x: f64) -> bool {
        self.low <= x && x <= self.high
    }

    /// Whether `other` lies entirely inside `self`.
    pub fn contains_interval(&self, other: &Interval) -> bool {
        self.low <= other.low && other.high <= self.high
    }

    pub fn clamp(&self, x: f64) -> f64 {
        x.clamp(self.low, self.high)
    }
}

/// An axis-aligned box: one [`Interval`] per dimension.
///
/// Neighborhoods and layers are both plain bounding boxes; the
/// distinction is only in how they are produced.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    intervals: Vec<Interval>,
}

impl BoundingBox {
    /// Creates a box from per-dimension intervals.
    ///
    /// Returns [`GnsError::InvalidDimension`] for an empty interval list.
    pub fn new(intervals: Vec<Interval>) -> Result<Self> {
        if intervals.is_empty() {
            return Err(GnsError::InvalidDimension {
                expected: 1,
                got: 0,
            });
        }
        Ok(Self { intervals })
    }

    /// Builds a box from `(low, high)` pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_gns::space::BoundingBox;
    ///
    /// let b = BoundingBox::from_pairs(&[(-10.0, 10.0), (0.0, 1.0)]).unwrap();
    /// assert_eq!(b.dimension(), 2);
    /// assert!(b.contains(&[5.0, 0.5]));
    /// ```
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Result<Self> {
        let intervals = pairs
            .iter()
            .map(|&(low, high)| Interval::new(low, high))
            .collect::<Result<Vec<_>>>()?;
        Self::new(intervals)
    }

    /// The same `[low, high]` on every axis.
    pub fn uniform(dimension: usize, low: f64, high: f64) -> Result<Self> {
        let interval = Interval::new(low, high)?;
        Self::new(vec![interval; dimension])
    }

    /// `[-extents[d], extents[d]]` on each axis `d`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_gns::space::BoundingBox;
    ///
    /// let b = BoundingBox::symmetric(&[500.0, 5.12]).unwrap();
    /// assert_eq!(b, BoundingBox::from_pairs(&[(-500.0, 500.0), (-5.12, 5.12)]).unwrap());
    /// ```
    pub fn symmetric(extents: &[f64]) -> Result<Self> {
        let intervals = extents
            .iter()
            .map(|&e| Interval::symmetric(e))
            .collect::<Result<Vec<_>>>()?;
        Self::new(intervals)
    }

    pub fn dimension(&self) -> usize {
        self.intervals.len()
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn interval(&self, axis: usize) -> &Interval {
        &self.intervals[axis]
    }

    pub fn widths(&self) -> Vec<f64> {
        self.intervals.iter().map(Interval::width).collect()
    }

    pub fn center(&self) -> Vec<f64> {
        self.intervals.iter().map(Interval::center).collect()
    }

    /// Whether `point` has this box's dimension and lies inside it.
    pub fn contains(&self, point: &[f64]) -> bool {
        point.len() == self.dimension()
            && self
                .intervals
                .iter()
                .zip(point)
                .all(|(iv, &x)| iv.contains(x))
    }

    /// Whether `other` lies entirely inside `self`.
    pub fn contains_box(&self, other: &BoundingBox) -> bool {
        other.dimension() == self.dimension()
            && self
                .intervals
                .iter()
                .zip(&other.intervals)
                .all(|(outer, inner)| outer.contains_interval(inner))
    }

    /// Projects `point` onto the box, axis by axis.
    pub fn clamp(&self, point: &[f64]) -> Vec<f64> {
        self.intervals
            .iter()
            .zip(point)
            .map(|(iv, &x)| iv.clamp(x))
            .collect()
    }

    /// Fails with [`GnsError::InvalidDimension`] unless `point` matches.
    pub fn check_point(&self, point: &[f64]) -> Result<()> {
        if point.len() != self.dimension() {
            return Err(GnsError::InvalidDimension {
                expected: self.dimension(),
                got: point.len(),
            });
        }
        Ok(())
    }

    /// A stable 64-bit digest of the edges, used for seeding.
    pub(crate) fn fingerprint(&self) -> u64 {
        self.intervals.iter().fold(0x9E37_79B9_7F4A_7C15, |acc, iv| {
            let acc = mix(acc ^ iv.low.to_bits());
            mix(acc ^ iv.high.to_bits())
        })
    }
}

// splitmix64 finalizer
fn mix(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
