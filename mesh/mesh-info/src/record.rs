//! Per-face record types.
//!
//! A record is the value one channel stores for one face. Each record type
//! names the [`InfoKind`] of the channel that holds it, so a registry can be
//! queried by record type without any runtime type inspection.

use std::fmt;
use std::str::FromStr;

use nalgebra::Point2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::InfoError;
use crate::face_data::FaceData;
use crate::info::MeshInfo;
use crate::kind::InfoKind;

/// A value stored once per face by an information channel.
pub trait FaceRecord: Default + Clone + PartialEq + fmt::Debug + Sized {
    /// The kind of channel holding records of this type.
    const KIND: InfoKind;

    /// Whether the record holds one sub-value per face corner.
    const CORNER_INDEXED: bool = false;

    /// Reorder per-corner sub-values so that corner `i` takes the value
    /// previously held by corner `perm[i]`.
    ///
    /// `perm` is always a permutation of `{0, 1, 2}`. Face-level records
    /// keep the default no-op.
    fn permute_corners(&mut self, _perm: [usize; 3]) {}

    /// Borrow the typed channel out of a [`MeshInfo`] of the matching kind.
    fn from_info(info: &MeshInfo) -> Option<&FaceData<Self>>;

    /// Mutably borrow the typed channel out of a [`MeshInfo`] of the matching kind.
    fn from_info_mut(info: &mut MeshInfo) -> Option<&mut FaceData<Self>>;

    /// Wrap a typed channel into a [`MeshInfo`].
    fn into_info(data: FaceData<Self>) -> MeshInfo;
}

macro_rules! impl_info_projection {
    ($variant:ident) => {
        fn from_info(info: &MeshInfo) -> Option<&FaceData<Self>> {
            match info {
                MeshInfo::$variant(data) => Some(data),
                _ => None,
            }
        }

        fn from_info_mut(info: &mut MeshInfo) -> Option<&mut FaceData<Self>> {
            match info {
                MeshInfo::$variant(data) => Some(data),
                _ => None,
            }
        }

        fn into_info(data: FaceData<Self>) -> MeshInfo {
            MeshInfo::$variant(data)
        }
    };
}

/// Default base material binding of a face.
///
/// Points at entry `index` of the base material group `resource_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BaseMaterialRecord {
    /// Resource ID of the base material group.
    pub resource_id: u64,
    /// Index of the material within the group.
    pub index: u64,
}

impl BaseMaterialRecord {
    /// Create a binding to material `index` of group `resource_id`.
    #[must_use]
    pub const fn new(resource_id: u64, index: u64) -> Self {
        Self { resource_id, index }
    }
}

impl FaceRecord for BaseMaterialRecord {
    const KIND: InfoKind = InfoKind::BaseMaterial;

    impl_info_projection!(BaseMaterial);
}

/// Default color of a face, 8-bit RGBA.
///
/// The all-zero default means no color is assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColorRecord {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255).
    pub a: u8,
}

impl ColorRecord {
    /// Create a color from RGBA components.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_info::ColorRecord;
    ///
    /// let orange = ColorRecord::new(255, 128, 0, 255);
    /// assert_eq!(orange.g, 128);
    /// ```
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from RGB components.
    #[must_use]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Whether a color has been assigned.
    #[must_use]
    pub fn is_assigned(self) -> bool {
        self != Self::default()
    }
}

impl FaceRecord for ColorRecord {
    const KIND: InfoKind = InfoKind::Color;

    impl_info_projection!(Color);
}

/// Texture coordinates of the three corners of a face.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TexCoordRecord {
    /// Resource ID of the texture the coordinates refer to.
    pub texture_id: u64,
    /// UV coordinates, one per corner.
    pub uvs: [Point2<f32>; 3],
}

impl TexCoordRecord {
    /// Create texture coordinates for the three corners of a face.
    #[must_use]
    pub const fn new(texture_id: u64, uvs: [Point2<f32>; 3]) -> Self {
        Self { texture_id, uvs }
    }
}

impl Default for TexCoordRecord {
    fn default() -> Self {
        Self {
            texture_id: 0,
            uvs: [Point2::origin(); 3],
        }
    }
}

impl FaceRecord for TexCoordRecord {
    const KIND: InfoKind = InfoKind::TexCoord;
    const CORNER_INDEXED: bool = true;

    fn permute_corners(&mut self, perm: [usize; 3]) {
        let old = self.uvs;
        self.uvs = [old[perm[0]], old[perm[1]], old[perm[2]]];
    }

    impl_info_projection!(TexCoord);
}

/// Clipping behavior of a beam lattice against its clipping mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ClipMode {
    /// No clipping.
    #[default]
    None,
    /// Keep the lattice inside the clipping mesh.
    Inside,
    /// Keep the lattice outside the clipping mesh.
    Outside,
}

impl ClipMode {
    /// Token used for this mode in model files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Inside => "inside",
            Self::Outside => "outside",
        }
    }
}

impl fmt::Display for ClipMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClipMode {
    type Err = InfoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "inside" => Ok(Self::Inside),
            "outside" => Ok(Self::Outside),
            other => Err(InfoError::InvalidClipMode(other.to_string())),
        }
    }
}

/// Beam lattice attributes of a face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BeamLatticeRecord {
    /// How the lattice is clipped.
    pub clip_mode: ClipMode,
    /// Resource ID of the clipping mesh, if any.
    pub clipping_mesh_id: Option<u64>,
    /// Resource ID of the representation mesh, if any.
    pub representation_mesh_id: Option<u64>,
}

impl BeamLatticeRecord {
    /// Set the clipping mesh and mode.
    #[must_use]
    pub const fn with_clipping(mut self, mode: ClipMode, mesh_id: u64) -> Self {
        self.clip_mode = mode;
        self.clipping_mesh_id = Some(mesh_id);
        self
    }

    /// Set the representation mesh.
    #[must_use]
    pub const fn with_representation(mut self, mesh_id: u64) -> Self {
        self.representation_mesh_id = Some(mesh_id);
        self
    }
}

impl FaceRecord for BeamLatticeRecord {
    const KIND: InfoKind = InfoKind::BeamLattice;

    impl_info_projection!(BeamLattice);
}
