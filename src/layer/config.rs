//! Layer placement.

/// Where nested layers are centered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LayerCenter {
    /// Every layer is `[-s, s]` with `s = high * (i + 1) / num_layers`.
    ///
    /// Only meaningful for ranges symmetric about zero; the lower edge of
    /// the base range is ignored.
    #[default]
    Origin,

    /// Layers grow around the midpoint of the base range, reaching the
    /// full range at the outermost layer.
    DomainCenter,
}
