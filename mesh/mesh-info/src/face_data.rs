//! Face-indexed record storage.

use tracing::warn;

use crate::error::{InfoError, InfoResult};
use crate::id::InternalId;
use crate::kind::InfoKind;
use crate::record::FaceRecord;

/// An information channel: one record of type `R` per mesh face.
///
/// Channels are built by format code, filled with records, and then handed
/// to an [`InfoRegistry`](crate::InfoRegistry), which assigns the internal ID
/// and from then on keeps the face count in step with the mesh. Records can
/// be read and overwritten in place, but the face count can only change
/// through the registry.
///
/// # Example
///
/// ```
/// use mesh_info::{ColorRecord, FaceData};
///
/// let mut colors = FaceData::<ColorRecord>::with_faces(2);
/// colors.set(1, ColorRecord::opaque(255, 0, 0));
///
/// assert_eq!(colors.face_count(), 2);
/// assert_eq!(colors.get(0), Some(&ColorRecord::default()));
/// assert!(colors.internal_id().is_none());
/// ```
#[derive(Debug, PartialEq)]
pub struct FaceData<R: FaceRecord> {
    internal_id: Option<InternalId>,
    records: Vec<R>,
}

impl<R: FaceRecord> Default for FaceData<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: FaceRecord> FaceData<R> {
    /// Create an empty channel.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            internal_id: None,
            records: Vec::new(),
        }
    }

    /// Create a channel holding `face_count` default records.
    #[must_use]
    pub fn with_faces(face_count: usize) -> Self {
        Self {
            internal_id: None,
            records: vec![R::default(); face_count],
        }
    }

    /// Create a channel from existing records, one per face.
    #[must_use]
    pub const fn from_records(records: Vec<R>) -> Self {
        Self {
            internal_id: None,
            records,
        }
    }

    /// The kind of this channel.
    #[must_use]
    pub const fn kind(&self) -> InfoKind {
        R::KIND
    }

    /// The ID assigned at registration, or `None` if not registered.
    #[must_use]
    pub const fn internal_id(&self) -> Option<InternalId> {
        self.internal_id
    }

    /// Number of faces this channel holds records for.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.records.len()
    }

    /// Record of a face.
    #[must_use]
    pub fn get(&self, face: usize) -> Option<&R> {
        self.records.get(face)
    }

    /// Mutable record of a face.
    pub fn get_mut(&mut self, face: usize) -> Option<&mut R> {
        self.records.get_mut(face)
    }

    /// Overwrite the record of a face.
    ///
    /// Returns `false` if `face` is out of range.
    pub fn set(&mut self, face: usize, record: R) -> bool {
        match self.records.get_mut(face) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }

    /// Iterate over records in face order.
    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.records.iter()
    }

    /// All records in face order.
    #[must_use]
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// All records in face order, mutably.
    pub fn records_mut(&mut self) -> &mut [R] {
        &mut self.records
    }

    /// Assign the internal ID. Called once, by the registry.
    pub(crate) fn assign_internal_id(&mut self, id: InternalId) {
        debug_assert!(
            self.internal_id.is_none(),
            "internal ID of '{}' channel assigned twice",
            R::KIND
        );
        self.internal_id = Some(id);
    }

    /// Reserve room for `count` more faces without changing the face count.
    pub(crate) fn reserve(&mut self, count: usize) -> InfoResult<()> {
        self.records
            .try_reserve(count)
            .map_err(|source| InfoError::GrowthFailed {
                kind: R::KIND,
                requested: count,
                source,
            })
    }

    /// Append `count` default records.
    ///
    /// Does not allocate if [`reserve`](Self::reserve) succeeded for the same count.
    pub(crate) fn commit(&mut self, count: usize) {
        let len = self.records.len() + count;
        self.records.resize(len, R::default());
    }

    /// Append `count` default records, or leave the channel untouched on failure.
    pub(crate) fn grow(&mut self, count: usize) -> InfoResult<()> {
        self.reserve(count)?;
        self.commit(count);
        Ok(())
    }

    /// Restore the default record of a face.
    pub(crate) fn reset_face(&mut self, face: usize) {
        if let Some(slot) = self.records.get_mut(face) {
            *slot = R::default();
        } else {
            warn!(
                "Skipping reset of face {} on '{}' channel with {} faces",
                face,
                R::KIND,
                self.records.len()
            );
        }
    }

    /// Copy the record of `other_face` in `other` into `face`.
    pub(crate) fn clone_face_from(&mut self, face: usize, other: &Self, other_face: usize) {
        match (self.records.get_mut(face), other.records.get(other_face)) {
            (Some(dst), Some(src)) => dst.clone_from(src),
            _ => warn!(
                "Skipping clone of '{}' record from face {} into face {}: index out of range",
                R::KIND,
                other_face,
                face
            ),
        }
    }

    /// Reorder the per-corner values of a face.
    pub(crate) fn permute_corners(&mut self, face: usize, perm: [usize; 3]) {
        if !R::CORNER_INDEXED {
            return;
        }
        if let Some(slot) = self.records.get_mut(face) {
            slot.permute_corners(perm);
        } else {
            warn!(
                "Skipping corner permutation of face {} on '{}' channel with {} faces",
                face,
                R::KIND,
                self.records.len()
            );
        }
    }

    /// A fresh, unregistered channel of the same kind with `face_count` default records.
    #[allow(clippy::unused_self)]
    pub(crate) fn empty_like(&self, face_count: usize) -> InfoResult<Self> {
        let mut data = Self::new();
        data.grow(face_count)?;
        Ok(data)
    }
}
