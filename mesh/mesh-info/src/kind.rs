//! Channel kinds.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The category of per-face information a channel stores.
///
/// Each kind appears at most once in an [`InfoRegistry`](crate::InfoRegistry)
/// and is used as its lookup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InfoKind {
    /// Default base material binding per face.
    BaseMaterial,
    /// Default color per face.
    Color,
    /// Texture coordinates per face corner.
    TexCoord,
    /// Beam lattice clipping attributes per face.
    BeamLattice,
}

impl InfoKind {
    /// All kinds, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::BaseMaterial,
        Self::Color,
        Self::TexCoord,
        Self::BeamLattice,
    ];

    /// Stable tag for this kind.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_info::InfoKind;
    ///
    /// assert_eq!(InfoKind::TexCoord.as_str(), "tex_coord");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BaseMaterial => "base_material",
            Self::Color => "color",
            Self::TexCoord => "tex_coord",
            Self::BeamLattice => "beam_lattice",
        }
    }
}

impl fmt::Display for InfoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
