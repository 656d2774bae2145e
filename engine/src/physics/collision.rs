//! Collision primitives
//!
//! Ray and sphere tests against axis-aligned boxes, used by
//! [`StaticWorld`](super::StaticWorld) to answer queries. Boxes are solid:
//! a ray whose origin is already inside one touches it at distance 0.
//!
//! ```ignore
//! use first_person_engine::physics::ray_aabb_intersect;
//!
//! // Feet at y = 0.1 above a floor slab whose top is y = 0
//! let feet = Vec3::new(0.0, 0.1, 0.0);
//! let floor = (Vec3::new(-5.0, -1.0, -5.0), Vec3::new(5.0, 0.0, 5.0));
//! assert_eq!(ray_aabb_intersect(feet, Vec3::NEG_Y, floor.0, floor.1), Some(0.1));
//! ```

use glam::Vec3;

/// Distance along `ray_dir` (unit length) from `ray_origin` to the box
/// `[aabb_min, aabb_max]`, by slab clipping. `None` if the box is missed or
/// lies entirely behind the origin.
pub fn ray_aabb_intersect(
    ray_origin: Vec3,
    ray_dir: Vec3,
    aabb_min: Vec3,
    aabb_max: Vec3,
) -> Option<f32> {
    // Near-zero direction components become huge inverse values so the
    // corresponding slab is either always or never crossed.
    let inv = |d: f32| {
        if d.abs() > 1e-10 {
            1.0 / d
        } else if d.is_sign_negative() {
            f32::MIN
        } else {
            f32::MAX
        }
    };
    let inv_dir = Vec3::new(inv(ray_dir.x), inv(ray_dir.y), inv(ray_dir.z));

    let t1 = (aabb_min - ray_origin) * inv_dir;
    let t2 = (aabb_max - ray_origin) * inv_dir;

    let t_min = t1.min(t2).max_element();
    let t_max = t1.max(t2).min_element();

    // Inside the box the entry time is negative; clamp it to contact
    (t_max >= t_min && t_max >= 0.0).then(|| t_min.max(0.0))
}

/// Tests whether a sphere overlaps an AABB.
///
/// Uses the closest point on the box to the sphere center; touching counts
/// as overlap.
pub fn sphere_aabb_overlap(center: Vec3, radius: f32, aabb_min: Vec3, aabb_max: Vec3) -> bool {
    let closest = center.clamp(aabb_min, aabb_max);
    closest.distance_squared(center) <= radius * radius
}

/// Outward normal of the box face nearest to `point`.
pub fn aabb_surface_normal(point: Vec3, aabb_min: Vec3, aabb_max: Vec3) -> Vec3 {
    let center = (aabb_min + aabb_max) * 0.5;
    let half_extents = ((aabb_max - aabb_min) * 0.5).max(Vec3::splat(1e-6));
    let normalized = (point - center) / half_extents;

    let dominant = normalized.abs();
    if dominant.x >= dominant.y && dominant.x >= dominant.z {
        Vec3::X * normalized.x.signum()
    } else if dominant.y >= dominant.z {
        Vec3::Y * normalized.y.signum()
    } else {
        Vec3::Z * normalized.z.signum()
    }
}
