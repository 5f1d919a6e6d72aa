//! Per-face information channels for triangle meshes.
//!
//! A mesh read from a model file carries more than geometry: default
//! materials, colors, texture coordinates and beam lattice attributes are
//! stored per face. This crate keeps each of those in its own channel and
//! keeps all channels in step with the mesh as faces are added, merged,
//! reset, or re-wound.
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero Bevy dependencies**. It does not parse
//! or write files and does not store geometry; callers notify the registry
//! when the owning mesh changes.
//!
//! # Overview
//!
//! - [`FaceRecord`] - A value stored once per face ([`ColorRecord`],
//!   [`TexCoordRecord`], [`BaseMaterialRecord`], [`BeamLatticeRecord`])
//! - [`FaceData`] - A channel: one record per face plus its internal ID
//! - [`MeshInfo`] - A channel of any kind
//! - [`InfoRegistry`] - The channels of one mesh, keyed by [`InfoKind`]
//!
//! # Internal IDs
//!
//! Registration assigns each channel an [`InternalId`], starting at 1 and
//! increasing by one per registration. IDs are referenced from serialized
//! output, so a reader must register channels in the same order to get the
//! same IDs back. IDs are never reused, and the space ends at
//! [`MAX_INTERNAL_ID`].
//!
//! # Example
//!
//! ```
//! use mesh_info::{ColorRecord, FaceData, InfoKind, InfoRegistry, TexCoordRecord};
//!
//! let mut registry = InfoRegistry::new();
//! registry.register(FaceData::<ColorRecord>::new()).unwrap();
//! registry.register(FaceData::<TexCoordRecord>::new()).unwrap();
//!
//! // The mesh gained two faces
//! registry.add_faces(2).unwrap();
//!
//! if let Some(colors) = registry.records_mut::<ColorRecord>() {
//!     colors[0] = ColorRecord::opaque(255, 0, 0);
//! }
//!
//! // Mesh repair flipped face 0: swap its last two corners
//! registry.permute_face_corners(0, 0, 2, 1);
//!
//! assert_eq!(registry.len(), 2);
//! assert_eq!(registry.get(InfoKind::TexCoord).map(|t| t.face_count()), Some(2));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod face_data;
mod id;
mod info;
mod kind;
mod record;
mod registry;

pub use error::{InfoError, InfoResult};
pub use face_data::FaceData;
pub use id::{InternalId, MAX_INTERNAL_ID};
pub use info::MeshInfo;
pub use kind::InfoKind;
pub use record::{
    BaseMaterialRecord, BeamLatticeRecord, ClipMode, ColorRecord, FaceRecord, TexCoordRecord,
};
pub use registry::InfoRegistry;

// Re-export for convenience
pub use nalgebra::Point2;
