//! Keyed, grow-only pool of reusable pointer instances.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::components::IndicatorTemplate;
use crate::components::PointerRole;

/// Identifies a pool bucket. Buckets are scoped by role as well as key, so
/// an on-screen marker and an off-screen arrow sharing a key string never
/// exchange instances.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PoolKey {
    pub role: PointerRole,
    pub key:  String,
}

impl From<&IndicatorTemplate> for PoolKey {
    fn from(template: &IndicatorTemplate) -> Self {
        Self {
            role: template.role,
            key:  template.key.clone(),
        }
    }
}

/// Stable index of an instance inside the pool. Buckets only ever grow, so
/// a handle stays valid for the lifetime of the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerHandle {
    bucket: usize,
    slot:   usize,
}

/// A pooled indicator: the visibility flag plus the placement the
/// rendering layer consumes.
#[derive(Debug, Clone)]
pub struct PointerInstance {
    active:       bool,
    pub position: Vec2,
    pub angle:    f32,
}

impl PointerInstance {
    const fn new() -> Self {
        Self {
            active:   false,
            position: Vec2::ZERO,
            angle:    0.0,
        }
    }

    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// The placement angle as a rotation around the screen normal.
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_z(self.angle)
    }
}

#[derive(Debug)]
struct PointerBucket {
    key:       PoolKey,
    instances: Vec<PointerInstance>,
}

/// Pool of pointer instances, bucketed by template key.
///
/// `acquire` hands out the first inactive instance of a bucket, creating
/// one when every instance is in use. Instances are never dropped; an
/// indicator disappearing simply leaves its instance inactive for the next
/// acquire, trading unbounded growth for allocation-free repeat lookups.
#[derive(Resource, Debug, Default)]
pub struct PointerPool {
    buckets: Vec<PointerBucket>,
    by_key:  HashMap<PoolKey, usize>,
}

impl PointerPool {
    /// Returns a handle to an inactive instance in the template's bucket,
    /// growing the bucket when none is free. The instance stays inactive;
    /// activation happens on attach.
    pub fn acquire(&mut self, template: &IndicatorTemplate) -> PointerHandle {
        let key = PoolKey::from(template);
        let bucket_index = match self.by_key.get(&key) {
            Some(&index) => index,
            None => {
                self.buckets.push(PointerBucket {
                    key:       key.clone(),
                    instances: Vec::new(),
                });
                self.by_key.insert(key, self.buckets.len() - 1);
                self.buckets.len() - 1
            },
        };

        let bucket = &mut self.buckets[bucket_index];
        let slot = match bucket.instances.iter().position(|instance| !instance.active) {
            Some(slot) => slot,
            None => {
                bucket.instances.push(PointerInstance::new());
                debug!(
                    "pointer bucket {:?} grew to {}",
                    bucket.key,
                    bucket.instances.len()
                );
                bucket.instances.len() - 1
            },
        };

        PointerHandle {
            bucket: bucket_index,
            slot,
        }
    }

    pub fn get(&self, handle: PointerHandle) -> Option<&PointerInstance> {
        self.buckets
            .get(handle.bucket)
            .and_then(|bucket| bucket.instances.get(handle.slot))
    }

    pub fn get_mut(&mut self, handle: PointerHandle) -> Option<&mut PointerInstance> {
        self.buckets
            .get_mut(handle.bucket)
            .and_then(|bucket| bucket.instances.get_mut(handle.slot))
    }

    /// The bucket key an instance was created under.
    pub fn key(&self, handle: PointerHandle) -> Option<&PoolKey> {
        self.buckets.get(handle.bucket).map(|bucket| &bucket.key)
    }

    pub(crate) fn set_active(&mut self, handle: PointerHandle, active: bool) {
        if let Some(instance) = self.get_mut(handle) {
            instance.active = active;
        }
    }

    /// Active instances with their handles, for the rendering layer.
    pub fn iter_active(&self) -> impl Iterator<Item = (PointerHandle, &PointerInstance)> {
        self.buckets.iter().enumerate().flat_map(|(bucket, b)| {
            b.instances
                .iter()
                .enumerate()
                .filter(|(_, instance)| instance.active)
                .map(move |(slot, instance)| (PointerHandle { bucket, slot }, instance))
        })
    }

    /// Total number of instances ever created, across all buckets.
    pub fn instance_count(&self) -> usize {
        self.buckets.iter().map(|bucket| bucket.instances.len()).sum()
    }

    pub fn bucket_size(&self, key: &PoolKey) -> usize {
        self.by_key
            .get(key)
            .map_or(0, |&index| self.buckets[index].instances.len())
    }
}
