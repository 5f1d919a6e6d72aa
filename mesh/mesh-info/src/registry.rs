//! Registry of the information channels of one mesh.
//!
//! An [`InfoRegistry`] owns at most one channel per [`InfoKind`], hands out
//! internal IDs at registration, and applies every face-level operation to
//! all of its channels so they always hold one record per mesh face.

use hashbrown::HashMap;
use tracing::{debug, warn};

use crate::error::{InfoError, InfoResult};
use crate::face_data::FaceData;
use crate::id::InternalId;
use crate::info::MeshInfo;
use crate::kind::InfoKind;
use crate::record::FaceRecord;

/// The information channels of a mesh, keyed by kind.
///
/// The registry tracks the mesh face count. Every registered channel holds
/// exactly that many records after each operation returns.
///
/// # Example
///
/// ```
/// use mesh_info::{ColorRecord, FaceData, InfoKind, InfoRegistry};
///
/// let mut registry = InfoRegistry::new();
/// let id = registry.register(FaceData::<ColorRecord>::new()).ok();
/// assert_eq!(id.map(|id| id.get()), Some(1));
///
/// registry.add_faces(3).unwrap();
/// assert_eq!(registry.get(InfoKind::Color).map(|c| c.face_count()), Some(3));
/// ```
#[derive(Debug)]
pub struct InfoRegistry {
    /// Channels indexed by kind.
    infos: HashMap<InfoKind, MeshInfo>,
    /// ID handed to the next registered channel; `None` once exhausted.
    next_id: Option<InternalId>,
    /// Face count of the owning mesh.
    face_count: usize,
}

impl Default for InfoRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl InfoRegistry {
    /// Create an empty registry with no faces.
    #[must_use]
    pub fn new() -> Self {
        Self {
            infos: HashMap::new(),
            next_id: Some(InternalId::FIRST),
            face_count: 0,
        }
    }

    /// Register a channel, taking ownership of it.
    ///
    /// The channel receives the next internal ID. A channel holding fewer
    /// faces than the registry is padded with default records.
    ///
    /// # Errors
    ///
    /// - [`InfoError::DuplicateKind`] if a channel of the same kind is registered.
    /// - [`InfoError::FaceCountMismatch`] if the channel holds more faces than the registry.
    /// - [`InfoError::GrowthFailed`] if padding the channel fails.
    /// - [`InfoError::IdSpaceSaturated`] if the ID space was already exhausted.
    ///
    /// In all of the above cases the registry is unchanged. Additionally:
    ///
    /// - [`InfoError::RegistrationExhausted`] if the channel took the last
    ///   ID. The channel **is** registered; later registrations are rejected.
    pub fn register(&mut self, info: impl Into<MeshInfo>) -> InfoResult<InternalId> {
        let mut info = info.into();
        let kind = info.kind();

        let Some(id) = self.next_id else {
            return Err(InfoError::IdSpaceSaturated { kind });
        };
        if self.infos.contains_key(&kind) {
            return Err(InfoError::DuplicateKind { kind });
        }

        let faces = info.face_count();
        if faces > self.face_count {
            return Err(InfoError::FaceCountMismatch {
                kind,
                expected: self.face_count,
                actual: faces,
            });
        }
        info.grow(self.face_count - faces)?;

        info.assign_internal_id(id);
        self.infos.insert(kind, info);
        debug!("Registered '{}' channel with internal ID {}", kind, id);

        if id.is_max() {
            self.next_id = None;
            return Err(InfoError::RegistrationExhausted { kind, id });
        }
        self.next_id = id.next();
        Ok(id)
    }

    /// Kinds of the registered channels, in no particular order.
    pub fn kinds(&self) -> impl Iterator<Item = InfoKind> + '_ {
        self.infos.keys().copied()
    }

    /// Append `count` default records to every channel.
    ///
    /// Either every channel grows by `count` or none does.
    ///
    /// # Errors
    ///
    /// - [`InfoError::FaceCountOverflow`] if the new face count does not
    ///   fit in `usize`.
    /// - The first [`InfoError::GrowthFailed`] encountered.
    ///
    /// On error all channels and the tracked face count are unchanged.
    pub fn add_faces(&mut self, count: usize) -> InfoResult<()> {
        let Some(face_count) = self.face_count.checked_add(count) else {
            return Err(InfoError::FaceCountOverflow {
                current: self.face_count,
                requested: count,
            });
        };
        for info in self.infos.values_mut() {
            info.reserve(count)?;
        }
        for info in self.infos.values_mut() {
            info.commit(count);
        }
        self.face_count = face_count;
        debug!(
            "Grew {} channels by {} faces to {}",
            self.infos.len(),
            count,
            self.face_count
        );
        Ok(())
    }

    /// Get the channel of a kind.
    #[must_use]
    pub fn get(&self, kind: InfoKind) -> Option<&MeshInfo> {
        self.infos.get(&kind)
    }

    /// Get the typed channel holding records of type `R`.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_info::{ColorRecord, FaceData, InfoRegistry, TexCoordRecord};
    ///
    /// let mut registry = InfoRegistry::new();
    /// registry.register(FaceData::<ColorRecord>::new()).unwrap();
    ///
    /// assert!(registry.typed::<ColorRecord>().is_some());
    /// assert!(registry.typed::<TexCoordRecord>().is_none());
    /// ```
    #[must_use]
    pub fn typed<R: FaceRecord>(&self) -> Option<&FaceData<R>> {
        self.infos.get(&R::KIND).and_then(MeshInfo::as_data)
    }

    /// Mutable records of the channel holding type `R`.
    ///
    /// Records can be overwritten in place; the face count stays under
    /// the registry's control.
    pub fn records_mut<R: FaceRecord>(&mut self) -> Option<&mut [R]> {
        self.infos
            .get_mut(&R::KIND)
            .and_then(MeshInfo::as_data_mut)
            .map(FaceData::records_mut)
    }

    /// Get the channel registered with `id`.
    #[must_use]
    pub fn get_by_id(&self, id: InternalId) -> Option<&MeshInfo> {
        self.infos
            .values()
            .find(|info| info.internal_id() == Some(id))
    }

    /// Channels in ascending internal ID order, which is registration order.
    pub fn iter_by_id(&self) -> impl Iterator<Item = &MeshInfo> {
        let mut infos: Vec<&MeshInfo> = self.infos.values().collect();
        infos.sort_by_key(|info| info.internal_id());
        infos.into_iter()
    }

    /// Check whether a channel of a kind is registered.
    #[must_use]
    pub fn contains(&self, kind: InfoKind) -> bool {
        self.infos.contains_key(&kind)
    }

    /// Number of registered channels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.infos.len()
    }

    /// Check if no channel is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.infos.is_empty()
    }

    /// Face count of the owning mesh, as tracked by the registry.
    #[must_use]
    pub const fn face_count(&self) -> usize {
        self.face_count
    }

    /// Add an empty channel for every kind `other` has and this registry lacks.
    ///
    /// New channels hold `current_face_count` default records and are
    /// registered in the order `other` registered them. Kinds present in
    /// both registries are left untouched. Records are carried over later,
    /// face by face, with [`clone_face_from`](Self::clone_face_from).
    ///
    /// # Errors
    ///
    /// - [`InfoError::FaceCountMismatch`] if `current_face_count` differs
    ///   from a nonzero [`face_count`](Self::face_count). A registry that has
    ///   neither channels nor faces adopts `current_face_count`.
    /// - Any error from [`register`](Self::register); channels added before
    ///   the failure stay registered.
    pub fn merge_from(&mut self, other: &Self, current_face_count: usize) -> InfoResult<()> {
        let missing: Vec<&MeshInfo> = other
            .iter_by_id()
            .filter(|info| !self.infos.contains_key(&info.kind()))
            .collect();

        let Some(first) = missing.first() else {
            return Ok(());
        };
        if self.infos.is_empty() && self.face_count == 0 {
            self.face_count = current_face_count;
        } else if current_face_count != self.face_count {
            return Err(InfoError::FaceCountMismatch {
                kind: first.kind(),
                expected: self.face_count,
                actual: current_face_count,
            });
        }

        for info in &missing {
            let fresh = info.empty_like(current_face_count)?;
            self.register(fresh)?;
        }
        debug!(
            "Merged {} new channels at {} faces",
            missing.len(),
            current_face_count
        );
        Ok(())
    }

    /// Copy the records of `other_face` in `other` into `face`.
    ///
    /// Only kinds registered in both registries are copied; the rest are
    /// skipped.
    pub fn clone_face_from(&mut self, face: usize, other: &Self, other_face: usize) {
        for (kind, info) in &mut self.infos {
            if let Some(src) = other.infos.get(kind) {
                info.clone_face_from(face, src, other_face);
            }
        }
    }

    /// Restore the default record of a face in every channel.
    pub fn reset_face(&mut self, face: usize) {
        for info in self.infos.values_mut() {
            info.reset_face(face);
        }
    }

    /// Remove the channel of a kind.
    ///
    /// Returns whether a channel was removed. Its internal ID is not reused.
    pub fn remove(&mut self, kind: InfoKind) -> bool {
        self.infos.remove(&kind).is_some()
    }

    /// Reorder the corners of a face in every corner-indexed channel.
    ///
    /// Corner `i` takes the value previously held by corner `n1`, `n2` or
    /// `n3` respectively. Face-level channels are unaffected. Arguments that
    /// are not a permutation of `0, 1, 2` are ignored.
    pub fn permute_face_corners(&mut self, face: usize, n1: usize, n2: usize, n3: usize) {
        let perm = [n1, n2, n3];
        let mut sorted = perm;
        sorted.sort_unstable();
        if sorted != [0, 1, 2] {
            warn!(
                "Ignoring invalid corner permutation {:?} for face {}",
                perm, face
            );
            return;
        }

        for info in self.infos.values_mut() {
            info.permute_corners(face, perm);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::id::MAX_INTERNAL_ID;
    use crate::record::{
        BaseMaterialRecord, BeamLatticeRecord, ClipMode, ColorRecord, TexCoordRecord,
    };
    use nalgebra::Point2;

    fn blue() -> ColorRecord {
        ColorRecord::opaque(0, 0, 255)
    }

    fn uv_record() -> TexCoordRecord {
        TexCoordRecord::new(
            2,
            [
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 0.0),
                Point2::new(0.0, 1.0),
            ],
        )
    }

    fn registry_with(face_count: usize) -> InfoRegistry {
        let mut registry = InfoRegistry::new();
        registry.add_faces(face_count).unwrap();
        registry.register(FaceData::<ColorRecord>::new()).unwrap();
        registry.register(FaceData::<TexCoordRecord>::new()).unwrap();
        registry
    }

    #[test]
    fn test_new_registry() {
        let registry = InfoRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert_eq!(registry.face_count(), 0);
        assert_eq!(registry.next_id, Some(InternalId::FIRST));
    }

    #[test]
    fn test_register_assigns_increasing_ids() {
        let mut registry = InfoRegistry::new();

        let ids = [
            registry.register(FaceData::<ColorRecord>::new()).ok(),
            registry.register(FaceData::<TexCoordRecord>::new()).ok(),
            registry.register(FaceData::<BaseMaterialRecord>::new()).ok(),
        ];

        assert_eq!(ids.map(|id| id.map(InternalId::get)), [Some(1), Some(2), Some(3)]);
        assert_eq!(
            registry.get(InfoKind::TexCoord).and_then(MeshInfo::internal_id),
            InternalId::new(2)
        );
    }

    #[test]
    fn test_register_duplicate_kind() {
        let mut registry = InfoRegistry::new();
        registry.register(FaceData::<ColorRecord>::new()).unwrap();

        let result = registry.register(FaceData::<ColorRecord>::with_faces(0));
        assert!(matches!(
            result,
            Err(InfoError::DuplicateKind {
                kind: InfoKind::Color
            })
        ));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.next_id, InternalId::new(2));
    }

    #[test]
    fn test_register_at_max_still_registers() {
        let mut registry = InfoRegistry::new();
        registry.next_id = Some(InternalId::MAX);

        let result = registry.register(FaceData::<ColorRecord>::new());

        assert!(matches!(
            result,
            Err(InfoError::RegistrationExhausted { id, .. }) if id.get() == MAX_INTERNAL_ID
        ));
        assert_eq!(
            registry.get(InfoKind::Color).and_then(MeshInfo::internal_id),
            Some(InternalId::MAX)
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_register_after_exhaustion_is_rejected() {
        let mut registry = InfoRegistry::new();
        registry.next_id = Some(InternalId::MAX);
        let first = registry.register(FaceData::<ColorRecord>::new());
        assert!(matches!(first, Err(InfoError::RegistrationExhausted { .. })));

        let result = registry.register(FaceData::<TexCoordRecord>::new());

        assert!(matches!(
            result,
            Err(InfoError::IdSpaceSaturated {
                kind: InfoKind::TexCoord
            })
        ));
        assert!(!registry.contains(InfoKind::TexCoord));
    }

    #[test]
    fn test_register_pads_to_face_count() {
        let mut registry = InfoRegistry::new();
        registry.add_faces(4).unwrap();
        registry
            .register(FaceData::from_records(vec![blue()]))
            .unwrap();

        let colors = registry.typed::<ColorRecord>();
        assert_eq!(colors.map(FaceData::face_count), Some(4));
        assert_eq!(colors.and_then(|c| c.get(0)), Some(&blue()));
        assert_eq!(colors.and_then(|c| c.get(3)), Some(&ColorRecord::default()));
    }

    #[test]
    fn test_register_too_many_faces() {
        let mut registry = InfoRegistry::new();
        registry.add_faces(1).unwrap();

        let result = registry.register(FaceData::<ColorRecord>::with_faces(2));
        assert!(matches!(
            result,
            Err(InfoError::FaceCountMismatch {
                expected: 1,
                actual: 2,
                ..
            })
        ));
        assert!(registry.is_empty());
        assert_eq!(registry.next_id, Some(InternalId::FIRST));
    }

    #[test]
    fn test_add_faces_keeps_existing_records() {
        let mut registry = registry_with(2);
        if let Some(colors) = registry.records_mut::<ColorRecord>() {
            colors[1] = blue();
        }

        registry.add_faces(3).unwrap();

        assert_eq!(registry.face_count(), 5);
        for kind in [InfoKind::Color, InfoKind::TexCoord] {
            assert_eq!(registry.get(kind).map(MeshInfo::face_count), Some(5));
        }
        let colors = registry.typed::<ColorRecord>();
        assert_eq!(colors.and_then(|c| c.get(1)), Some(&blue()));
        assert_eq!(colors.and_then(|c| c.get(4)), Some(&ColorRecord::default()));
    }

    #[test]
    fn test_add_faces_failure_is_atomic() {
        let mut registry = registry_with(2);
        registry.register(FaceData::<BeamLatticeRecord>::new()).unwrap();

        let result = registry.add_faces(usize::MAX / 2);

        assert!(matches!(result, Err(InfoError::GrowthFailed { .. })));
        assert_eq!(registry.face_count(), 2);
        assert!(registry.iter_by_id().all(|info| info.face_count() == 2));
    }

    #[test]
    fn test_add_faces_overflow() {
        let mut registry = registry_with(2);

        let result = registry.add_faces(usize::MAX);

        assert!(matches!(
            result,
            Err(InfoError::FaceCountOverflow {
                current: 2,
                requested: usize::MAX,
            })
        ));
        assert_eq!(registry.face_count(), 2);
        assert!(registry.iter_by_id().all(|info| info.face_count() == 2));
    }

    #[test]
    fn test_add_faces_overflow_without_channels() {
        let mut registry = InfoRegistry::new();
        registry.add_faces(usize::MAX).unwrap();

        let result = registry.add_faces(1);

        assert!(matches!(result, Err(InfoError::FaceCountOverflow { .. })));
        assert_eq!(registry.face_count(), usize::MAX);
    }

    #[test]
    fn test_remove_does_not_reuse_ids() {
        let mut registry = InfoRegistry::new();
        registry.register(FaceData::<ColorRecord>::new()).unwrap();

        assert!(registry.remove(InfoKind::Color));
        assert!(!registry.remove(InfoKind::Color));
        assert!(registry.get(InfoKind::Color).is_none());

        let id = registry.register(FaceData::<ColorRecord>::new()).ok();
        assert_eq!(id.map(InternalId::get), Some(2));
    }

    #[test]
    fn test_get_by_id_and_order() {
        let mut registry = InfoRegistry::new();
        registry.register(FaceData::<BeamLatticeRecord>::new()).unwrap();
        registry.register(FaceData::<BaseMaterialRecord>::new()).unwrap();
        registry.register(FaceData::<ColorRecord>::new()).unwrap();

        let order: Vec<InfoKind> = registry.iter_by_id().map(MeshInfo::kind).collect();
        assert_eq!(
            order,
            [InfoKind::BeamLattice, InfoKind::BaseMaterial, InfoKind::Color]
        );
        assert_eq!(
            InternalId::new(2)
                .and_then(|id| registry.get_by_id(id))
                .map(MeshInfo::kind),
            Some(InfoKind::BaseMaterial)
        );
        assert!(InternalId::new(9).and_then(|id| registry.get_by_id(id)).is_none());
    }

    #[test]
    fn test_reset_face() {
        let mut registry = registry_with(2);
        if let Some(colors) = registry.records_mut::<ColorRecord>() {
            colors.fill(blue());
        }

        registry.reset_face(1);

        let colors = registry.typed::<ColorRecord>().map(FaceData::records);
        assert_eq!(colors, Some(&[blue(), ColorRecord::default()][..]));
    }

    #[test]
    fn test_permute_skips_face_level_channels() {
        let mut registry = registry_with(1);
        if let Some(colors) = registry.records_mut::<ColorRecord>() {
            colors[0] = blue();
        }
        if let Some(uvs) = registry.records_mut::<TexCoordRecord>() {
            uvs[0] = uv_record();
        }

        registry.permute_face_corners(0, 2, 1, 0);

        let expected = uv_record().uvs;
        assert_eq!(
            registry.typed::<TexCoordRecord>().and_then(|t| t.get(0)).map(|r| r.uvs),
            Some([expected[2], expected[1], expected[0]])
        );
        assert_eq!(
            registry.typed::<ColorRecord>().and_then(|c| c.get(0)),
            Some(&blue())
        );
    }

    #[test]
    fn test_permute_invalid_is_ignored() {
        let mut registry = registry_with(1);
        if let Some(uvs) = registry.records_mut::<TexCoordRecord>() {
            uvs[0] = uv_record();
        }

        registry.permute_face_corners(0, 0, 0, 1);
        registry.permute_face_corners(0, 0, 1, 3);

        assert_eq!(
            registry.typed::<TexCoordRecord>().and_then(|t| t.get(0)),
            Some(&uv_record())
        );
    }

    #[test]
    fn test_merge_adds_missing_kinds() {
        let mut target = InfoRegistry::new();
        target.add_faces(2).unwrap();
        target.register(FaceData::<ColorRecord>::new()).unwrap();

        let mut source = registry_with(3);
        if let Some(uvs) = source.records_mut::<TexCoordRecord>() {
            uvs.fill(uv_record());
        }
        let clipped = BeamLatticeRecord::default().with_clipping(ClipMode::Inside, 7);
        source
            .register(FaceData::from_records(vec![clipped; 3]))
            .unwrap();

        assert!(target.merge_from(&source, 2).is_ok());

        assert_eq!(target.len(), 3);
        assert_eq!(
            target.get(InfoKind::TexCoord).and_then(MeshInfo::internal_id),
            InternalId::new(2)
        );
        assert_eq!(
            target.get(InfoKind::BeamLattice).and_then(MeshInfo::internal_id),
            InternalId::new(3)
        );
        assert!(target.iter_by_id().all(|info| info.face_count() == 2));
        assert_eq!(
            target.typed::<TexCoordRecord>().map(FaceData::records),
            Some(&[TexCoordRecord::default(); 2][..])
        );
        assert_eq!(
            target.typed::<BeamLatticeRecord>().map(FaceData::records),
            Some(&[BeamLatticeRecord::default(); 2][..])
        );
    }

    #[test]
    fn test_merge_into_empty_adopts_face_count() {
        let mut target = InfoRegistry::new();
        let source = registry_with(1);

        assert!(target.merge_from(&source, 6).is_ok());

        assert_eq!(target.face_count(), 6);
        assert_eq!(
            target.get(InfoKind::Color).map(MeshInfo::face_count),
            Some(6)
        );
    }

    #[test]
    fn test_merge_keeps_tracked_face_count() {
        let mut target = InfoRegistry::new();
        target.add_faces(5).unwrap();
        let source = registry_with(1);

        let result = target.merge_from(&source, 2);

        assert!(matches!(
            result,
            Err(InfoError::FaceCountMismatch {
                expected: 5,
                actual: 2,
                ..
            })
        ));
        assert_eq!(target.face_count(), 5);
        assert!(target.is_empty());

        assert!(target.merge_from(&source, 5).is_ok());
        assert_eq!(
            target.get(InfoKind::Color).map(MeshInfo::face_count),
            Some(5)
        );
    }

    #[test]
    fn test_merge_face_count_mismatch() {
        let mut target = InfoRegistry::new();
        target.add_faces(2).unwrap();
        target.register(FaceData::<ColorRecord>::new()).unwrap();
        let source = registry_with(1);

        let result = target.merge_from(&source, 3);

        assert!(matches!(
            result,
            Err(InfoError::FaceCountMismatch {
                kind: InfoKind::TexCoord,
                expected: 2,
                actual: 3,
            })
        ));
        assert_eq!(target.len(), 1);
    }

    #[test]
    fn test_clone_face_from_skips_unshared_kinds() {
        let mut target = registry_with(2);
        if let Some(uvs) = target.records_mut::<TexCoordRecord>() {
            uvs[0] = uv_record();
        }

        let mut source = InfoRegistry::new();
        source.add_faces(2).unwrap();
        source
            .register(FaceData::from_records(vec![ColorRecord::default(), blue()]))
            .unwrap();
        source.register(FaceData::<BaseMaterialRecord>::new()).unwrap();

        target.clone_face_from(0, &source, 1);

        assert_eq!(
            target.typed::<ColorRecord>().and_then(|c| c.get(0)),
            Some(&blue())
        );
        assert_eq!(
            target.typed::<TexCoordRecord>().and_then(|t| t.get(0)),
            Some(&uv_record())
        );
        assert!(!target.contains(InfoKind::BaseMaterial));
    }
}
