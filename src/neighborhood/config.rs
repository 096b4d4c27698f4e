//! Grid construction modes.

/// How cell widths and grid boundaries are computed.
///
/// # Examples
///
/// ```
/// use u_gns::neighborhood::GridMode;
///
/// assert_eq!(GridMode::default(), GridMode::Truncated);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GridMode {
    /// Integer grid: the cell width is truncated toward zero and the
    /// boundaries run over integers from `ceil(low)` to `floor(high)`.
    ///
    /// A cell is kept on an axis when its lower edge lies strictly below
    /// the axis's last boundary, or its upper edge does not exceed it;
    /// a combination survives only when every axis is kept. Ranges that
    /// are not divisible by the cell count leave a strip near the upper
    /// edge uncovered. A range narrower than the cell count yields no
    /// cells at all. This is the grid published benchmark runs use.
    #[default]
    Truncated,

    /// Floating grid: exactly `cells^dimension` cells of width
    /// `(high - low) / cells`, each fully inside the domain.
    Exact,
}
