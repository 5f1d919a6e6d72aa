//! The polymorphic information channel.

use crate::error::InfoResult;
use crate::face_data::FaceData;
use crate::id::InternalId;
use crate::kind::InfoKind;
use crate::record::{
    BaseMaterialRecord, BeamLatticeRecord, ColorRecord, FaceRecord, TexCoordRecord,
};

/// One information channel of any kind.
///
/// Each variant wraps the [`FaceData`] of one record type, so the variant
/// always agrees with [`kind`](Self::kind). Any `FaceData<R>` converts into
/// a `MeshInfo` with [`From`].
///
/// # Example
///
/// ```
/// use mesh_info::{ColorRecord, FaceData, InfoKind, MeshInfo};
///
/// let info = MeshInfo::from(FaceData::<ColorRecord>::with_faces(3));
/// assert_eq!(info.kind(), InfoKind::Color);
/// assert_eq!(info.face_count(), 3);
/// ```
#[derive(Debug, PartialEq)]
#[non_exhaustive]
pub enum MeshInfo {
    /// Default base material per face.
    BaseMaterial(FaceData<BaseMaterialRecord>),
    /// Default color per face.
    Color(FaceData<ColorRecord>),
    /// Texture coordinates per face corner.
    TexCoord(FaceData<TexCoordRecord>),
    /// Beam lattice attributes per face.
    BeamLattice(FaceData<BeamLatticeRecord>),
}

macro_rules! dispatch {
    ($self:expr, $data:ident => $body:expr) => {
        match $self {
            MeshInfo::BaseMaterial($data) => $body,
            MeshInfo::Color($data) => $body,
            MeshInfo::TexCoord($data) => $body,
            MeshInfo::BeamLattice($data) => $body,
        }
    };
}

impl MeshInfo {
    /// The kind of this channel.
    #[must_use]
    pub const fn kind(&self) -> InfoKind {
        match self {
            Self::BaseMaterial(_) => BaseMaterialRecord::KIND,
            Self::Color(_) => ColorRecord::KIND,
            Self::TexCoord(_) => TexCoordRecord::KIND,
            Self::BeamLattice(_) => BeamLatticeRecord::KIND,
        }
    }

    /// The ID assigned at registration, or `None` if not registered.
    #[must_use]
    pub fn internal_id(&self) -> Option<InternalId> {
        dispatch!(self, data => data.internal_id())
    }

    /// Number of faces this channel holds records for.
    #[must_use]
    pub fn face_count(&self) -> usize {
        dispatch!(self, data => data.face_count())
    }

    /// Whether records hold one value per face corner.
    #[must_use]
    pub const fn is_corner_indexed(&self) -> bool {
        match self {
            Self::BaseMaterial(_) => BaseMaterialRecord::CORNER_INDEXED,
            Self::Color(_) => ColorRecord::CORNER_INDEXED,
            Self::TexCoord(_) => TexCoordRecord::CORNER_INDEXED,
            Self::BeamLattice(_) => BeamLatticeRecord::CORNER_INDEXED,
        }
    }

    /// Borrow the typed channel if this is a channel of `R`.
    #[must_use]
    pub fn as_data<R: FaceRecord>(&self) -> Option<&FaceData<R>> {
        R::from_info(self)
    }

    pub(crate) fn as_data_mut<R: FaceRecord>(&mut self) -> Option<&mut FaceData<R>> {
        R::from_info_mut(self)
    }

    pub(crate) fn assign_internal_id(&mut self, id: InternalId) {
        dispatch!(self, data => data.assign_internal_id(id));
    }

    pub(crate) fn reserve(&mut self, count: usize) -> InfoResult<()> {
        dispatch!(self, data => data.reserve(count))
    }

    pub(crate) fn commit(&mut self, count: usize) {
        dispatch!(self, data => data.commit(count));
    }

    pub(crate) fn grow(&mut self, count: usize) -> InfoResult<()> {
        dispatch!(self, data => data.grow(count))
    }

    pub(crate) fn reset_face(&mut self, face: usize) {
        dispatch!(self, data => data.reset_face(face));
    }

    pub(crate) fn permute_corners(&mut self, face: usize, perm: [usize; 3]) {
        dispatch!(self, data => data.permute_corners(face, perm));
    }

    /// Copy one record from a channel of the same kind. Channels of a
    /// different kind are ignored.
    pub(crate) fn clone_face_from(&mut self, face: usize, other: &Self, other_face: usize) {
        match (self, other) {
            (Self::BaseMaterial(dst), Self::BaseMaterial(src)) => {
                dst.clone_face_from(face, src, other_face);
            }
            (Self::Color(dst), Self::Color(src)) => dst.clone_face_from(face, src, other_face),
            (Self::TexCoord(dst), Self::TexCoord(src)) => {
                dst.clone_face_from(face, src, other_face);
            }
            (Self::BeamLattice(dst), Self::BeamLattice(src)) => {
                dst.clone_face_from(face, src, other_face);
            }
            _ => {}
        }
    }

    /// A fresh, unregistered channel of the same kind with `face_count` default records.
    pub(crate) fn empty_like(&self, face_count: usize) -> InfoResult<Self> {
        dispatch!(self, data => data.empty_like(face_count).map(Self::from))
    }
}

impl<R: FaceRecord> From<FaceData<R>> for MeshInfo {
    fn from(data: FaceData<R>) -> Self {
        R::into_info(data)
    }
}
