//! Volume registry: the set of live volumes in registration order.

use std::collections::BTreeMap;

use log::trace;

use super::color::Rgb;
use super::error::EditError;
use super::face::Face;
use super::volume::{Volume, VolumeId};

/// Live volumes keyed by id. Ids are handed out in increasing order, so
/// iterating the map yields registration order.
#[derive(Debug, Clone)]
pub struct VolumeRegistry {
    volumes: BTreeMap<VolumeId, Volume>,
    next_id: u64,
}

impl VolumeRegistry {
    pub fn new() -> Self {
        Self {
            volumes: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Allocate a fresh volume ID.
    fn alloc_id(&mut self) -> VolumeId {
        let id = VolumeId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Register a volume and return its new id. Any id already on the volume
    /// is replaced.
    pub fn insert(&mut self, mut volume: Volume) -> VolumeId {
        let id = self.alloc_id();
        volume.id = id;
        trace!("registered volume {id} at {:?}", volume.center());
        self.volumes.insert(id, volume);
        id
    }

    pub fn extend(&mut self, volumes: impl IntoIterator<Item = Volume>) -> Vec<VolumeId> {
        volumes.into_iter().map(|v| self.insert(v)).collect()
    }

    pub fn remove(&mut self, id: VolumeId) -> Option<Volume> {
        self.volumes.remove(&id)
    }

    pub fn get(&self, id: VolumeId) -> Option<&Volume> {
        self.volumes.get(&id)
    }

    pub fn get_mut(&mut self, id: VolumeId) -> Option<&mut Volume> {
        self.volumes.get_mut(&id)
    }

    /// Like `get`, but a missing id is reported as a dangling reference.
    pub fn lookup(&self, id: VolumeId) -> Result<&Volume, EditError> {
        self.get(id).ok_or(EditError::DanglingReference(id))
    }

    pub fn contains(&self, id: VolumeId) -> bool {
        self.volumes.contains_key(&id)
    }

    /// All volumes in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Volume> {
        self.volumes.values()
    }

    /// Volumes a pointer ray may hit. Every registered volume is pickable,
    /// fixed ones included; overlays are never registered here.
    pub fn pickable(&self) -> impl Iterator<Item = &Volume> {
        self.iter()
    }

    pub fn len(&self) -> usize {
        self.volumes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.volumes.is_empty()
    }

    pub fn editable_count(&self) -> usize {
        self.iter().filter(|v| !v.fixed).count()
    }

    /// Persisted colour of one face, if the volume still exists
    pub fn face_color(&self, id: VolumeId, face: Face) -> Option<Rgb> {
        self.get(id).map(|v| v.colors.base(face.index()))
    }

    /// Apply a remove+add pair. All removals are checked before anything
    /// changes; on error the registry is untouched.
    pub fn commit(&mut self, remove: &[VolumeId], add: Vec<Volume>) -> Result<Vec<VolumeId>, EditError> {
        if let Some(&missing) = remove.iter().find(|id| !self.contains(**id)) {
            return Err(EditError::DanglingReference(missing));
        }
        for id in remove {
            self.volumes.remove(id);
        }
        Ok(self.extend(add))
    }
}

impl Default for VolumeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
