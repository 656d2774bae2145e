//! Physics collaborators for the player core.
//!
//! The locomotion core never integrates rigid bodies itself. It consumes two
//! capabilities from its environment:
//!
//! - a collision query ("cast a ray and report the nearest hit", "does this
//!   sphere overlap anything") against layer classifications, and
//! - a capsule-shaped kinematic body with mutable height/center and a
//!   position-delta `move_by` operation.
//!
//! # Unit System
//!
//! **1 unit = 1 meter**, seconds for time, Y is up.
//!
//! # Submodules
//!
//! - [`types`] - Core mathematical types re-exported from glam
//! - [`collision`] - Ray/sphere vs AABB primitives
//! - [`query`] - The [`CollisionQuery`] trait, [`LayerMask`] and [`StaticWorld`]
//! - [`body`] - The [`CharacterBody`] trait and [`KinematicCapsule`]

pub mod body;
pub mod collision;
pub mod query;
pub mod types;

pub use body::{CAPSULE_RADIUS, CharacterBody, KinematicCapsule};
pub use collision::{aabb_surface_normal, ray_aabb_intersect, sphere_aabb_overlap};
pub use query::{ColliderId, CollisionQuery, LayerMask, RayHit, StaticCollider, StaticWorld};
pub use types::{Quat, Vec2, Vec3};
