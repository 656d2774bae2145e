//! Collision queries
//!
//! The player core asks its environment two questions: "cast a ray and report
//! the nearest hit" and "does this sphere touch anything". Both are filtered by
//! a [`LayerMask`] so ground probes, ceiling probes and aim rays can look at
//! different classifications of geometry.
//!
//! [`StaticWorld`] is a small box-collider implementation used by tests and the
//! headless demo. A game would implement [`CollisionQuery`] over its own
//! physics engine instead.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::collision::{aabb_surface_normal, ray_aabb_intersect, sphere_aabb_overlap};

/// Bit set of collision layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerMask(pub u32);

impl LayerMask {
    /// Matches nothing.
    pub const NONE: Self = Self(0);
    /// Walkable surfaces.
    pub const GROUND: Self = Self(1 << 0);
    /// Overhead geometry that blocks standing up.
    pub const OBSTRUCTION: Self = Self(1 << 1);
    /// Loose objects the player can aim at or pick up.
    pub const INTERACTABLE: Self = Self(1 << 2);
    /// Matches every layer.
    pub const ALL: Self = Self(u32::MAX);

    /// Combine two masks.
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// True if the masks share at least one layer.
    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// True if every layer of `other` is in `self`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        Self::GROUND
    }
}

impl std::ops::BitOr for LayerMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

/// Opaque handle to a collider owned by the collision world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColliderId(pub u32);

/// Nearest hit reported by a raycast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// World-space position where the ray touched the collider
    pub position: Vec3,
    /// Outward surface normal at the hit point
    pub normal: Vec3,
    /// Distance from ray origin to hit point
    pub distance: f32,
    /// Collider that was hit
    pub collider: ColliderId,
}

/// Ray and volume queries against the world's collision geometry.
pub trait CollisionQuery {
    /// Cast a ray and return the nearest hit within `max_distance` on `mask`.
    ///
    /// `direction` must be normalized.
    fn raycast(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<RayHit>;

    /// True if a sphere at `center` overlaps any collider on `mask`.
    fn overlap_sphere(&self, center: Vec3, radius: f32, mask: LayerMask) -> bool;

    /// Gameplay tag attached to a collider, if any.
    fn tag(&self, _collider: ColliderId) -> Option<&str> {
        None
    }
}

/// An axis-aligned solid box in a [`StaticWorld`].
#[derive(Debug, Clone, PartialEq)]
pub struct StaticCollider {
    pub id: ColliderId,
    pub min: Vec3,
    pub max: Vec3,
    pub layers: LayerMask,
    pub tag: Option<String>,
}

/// A set of static box colliders.
///
/// # Example
///
/// ```rust,ignore
/// let mut world = StaticWorld::new();
/// world.add_box(Vec3::new(-50.0, -1.0, -50.0), Vec3::new(50.0, 0.0, 50.0), LayerMask::GROUND);
/// let hit = world.raycast(Vec3::new(0.0, 0.1, 0.0), Vec3::NEG_Y, 0.2, LayerMask::GROUND);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticWorld {
    colliders: Vec<StaticCollider>,
    next_id: u32,
}

impl StaticWorld {
    /// Create an empty world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an untagged box and return its id.
    pub fn add_box(&mut self, min: Vec3, max: Vec3, layers: LayerMask) -> ColliderId {
        self.insert(min, max, layers, None)
    }

    /// Add a tagged box and return its id.
    pub fn add_tagged_box(
        &mut self,
        min: Vec3,
        max: Vec3,
        layers: LayerMask,
        tag: impl Into<String>,
    ) -> ColliderId {
        self.insert(min, max, layers, Some(tag.into()))
    }

    fn insert(
        &mut self,
        min: Vec3,
        max: Vec3,
        layers: LayerMask,
        tag: Option<String>,
    ) -> ColliderId {
        let id = ColliderId(self.next_id);
        self.next_id += 1;
        self.colliders.push(StaticCollider {
            id,
            min: min.min(max),
            max: min.max(max),
            layers,
            tag,
        });
        id
    }

    /// Remove a collider. Returns the removed collider if it existed.
    pub fn remove(&mut self, id: ColliderId) -> Option<StaticCollider> {
        let index = self.colliders.iter().position(|c| c.id == id)?;
        Some(self.colliders.remove(index))
    }

    /// Look up a collider by id.
    pub fn get(&self, id: ColliderId) -> Option<&StaticCollider> {
        self.colliders.iter().find(|c| c.id == id)
    }

    /// Number of colliders in the world.
    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    /// True when the world has no colliders.
    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }
}

impl CollisionQuery for StaticWorld {
    fn raycast(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<RayHit> {
        self.colliders
            .iter()
            .filter(|c| c.layers.intersects(mask))
            .filter_map(|c| {
                ray_aabb_intersect(origin, direction, c.min, c.max)
                    .filter(|t| *t <= max_distance)
                    .map(|t| {
                        let position = origin + direction * t;
                        RayHit {
                            position,
                            normal: aabb_surface_normal(position, c.min, c.max),
                            distance: t,
                            collider: c.id,
                        }
                    })
            })
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }

    fn overlap_sphere(&self, center: Vec3, radius: f32, mask: LayerMask) -> bool {
        self.colliders
            .iter()
            .filter(|c| c.layers.intersects(mask))
            .any(|c| sphere_aabb_overlap(center, radius, c.min, c.max))
    }

    fn tag(&self, collider: ColliderId) -> Option<&str> {
        self.get(collider).and_then(|c| c.tag.as_deref())
    }
}
