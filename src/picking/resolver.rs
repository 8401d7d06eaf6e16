use glam::{Vec2, Vec3};

use super::ray::Ray;
use crate::camera::Camera;
use crate::scene::{BlockId, GroundPlane, PlacementGrid};

/// Client-space rectangle of the render surface, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Left edge.
    pub left: f32,
    /// Top edge.
    pub top: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Viewport {
    /// Viewport anchored at the client origin.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width,
            height,
        }
    }

    /// Width over height, or `None` for a degenerate rectangle.
    pub fn aspect(&self) -> Option<f32> {
        self.has_area().then(|| self.width / self.height)
    }

    fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Map a client-space point to normalized device coordinates:
    /// `[-1, 1]` across the rectangle with +Y pointing up.
    pub fn normalize(&self, client_x: f32, client_y: f32) -> Option<Vec2> {
        if !self.has_area() {
            return None;
        }
        Some(Vec2::new(
            ((client_x - self.left) / self.width) * 2.0 - 1.0,
            -((client_y - self.top) / self.height) * 2.0 + 1.0,
        ))
    }
}

/// What a pick ray struck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PickTarget {
    /// The ground plane.
    Ground,
    /// A placed block.
    Block(BlockId),
}

/// Nearest intersection along a pointer ray. Transient: produced per
/// pointer interaction and consumed immediately.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickResult {
    /// World-space hit point.
    pub point: Vec3,
    /// Object that was hit.
    pub target: PickTarget,
    /// Outward face normal for block hits; `None` for the ground.
    pub normal: Option<Vec3>,
    /// Distance from the camera eye to `point`.
    pub distance: f32,
}

/// Resolve a client-space pointer position to the nearest surface under
/// it.
///
/// The ground is always a candidate, followed by every placed block; the
/// hit with the smallest ray parameter wins regardless of test order, so
/// a block standing on the ground occludes the ground behind it. Returns
/// `None` when the ray hits nothing or the viewport has no area.
pub fn resolve_pointer(
    client_x: f32,
    client_y: f32,
    viewport: &Viewport,
    camera: &Camera,
    ground: &GroundPlane,
    grid: &PlacementGrid,
) -> Option<PickResult> {
    let ndc = viewport.normalize(client_x, client_y)?;
    let ray = Ray::from_camera(camera, ndc)?;

    let mut nearest = ground.intersect(&ray).map(|t| PickResult {
        point: ray.at(t),
        target: PickTarget::Ground,
        normal: None,
        distance: t,
    });

    for block in grid {
        let (min, max) = block.bounds();
        let Some((t, normal)) = ray.intersect_aabb(min, max) else {
            continue;
        };
        if nearest.is_some_and(|hit| hit.distance <= t) {
            continue;
        }
        nearest = Some(PickResult {
            point: ray.at(t),
            target: PickTarget::Block(block.id),
            normal: Some(normal),
            distance: t,
        });
    }

    nearest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Material;

    const EPS: f32 = 1e-3;

    /// Camera straight above the origin, tilted a hair off the pole so
    /// the up vector stays well-defined.
    fn top_down_camera() -> Camera {
        Camera {
            eye: Vec3::new(0.0, 20.0, 0.001),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy: 60.0,
            znear: 0.1,
            zfar: 1000.0,
        }
    }

    fn viewport() -> Viewport {
        Viewport {
            left: 100.0,
            top: 50.0,
            width: 400.0,
            height: 400.0,
        }
    }

    #[test]
    fn normalize_inverts_y() {
        let vp = viewport();
        assert_eq!(vp.normalize(100.0, 50.0), Some(Vec2::new(-1.0, 1.0)));
        assert_eq!(vp.normalize(500.0, 450.0), Some(Vec2::new(1.0, -1.0)));
        assert_eq!(vp.normalize(300.0, 250.0), Some(Vec2::ZERO));
    }

    #[test]
    fn degenerate_viewport_resolves_nothing() {
        let vp = Viewport::new(0.0, 300.0);
        assert!(vp.normalize(10.0, 10.0).is_none());
        assert!(vp.aspect().is_none());
        let hit = resolve_pointer(
            10.0,
            10.0,
            &vp,
            &top_down_camera(),
            &GroundPlane::default(),
            &PlacementGrid::default(),
        );
        assert!(hit.is_none());
    }

    #[test]
    fn empty_scene_hits_ground_without_normal() {
        let hit = resolve_pointer(
            300.0,
            250.0,
            &viewport(),
            &top_down_camera(),
            &GroundPlane::default(),
            &PlacementGrid::default(),
        )
        .unwrap();
        assert_eq!(hit.target, PickTarget::Ground);
        assert!(hit.normal.is_none());
        assert!(hit.point.distance(Vec3::new(0.0, -0.01, 0.0)) < EPS);
    }

    #[test]
    fn block_occludes_ground() {
        let mut grid = PlacementGrid::default();
        let id = grid.place(Vec3::ZERO, Material::Stone).unwrap();
        let hit = resolve_pointer(
            300.0,
            250.0,
            &viewport(),
            &top_down_camera(),
            &GroundPlane::default(),
            &grid,
        )
        .unwrap();
        assert_eq!(hit.target, PickTarget::Block(id));
        assert_eq!(hit.normal, Some(Vec3::Y));
        assert!((hit.point.y - 1.0).abs() < EPS);
    }

    #[test]
    fn nearest_of_several_blocks_wins() {
        let mut grid = PlacementGrid::new(1.0, true);
        let _ = grid.place(Vec3::ZERO, Material::Stone).unwrap();
        let top = grid
            .place_adjacent_to_face(Vec3::new(0.0, 1.0, 0.0), Vec3::Y, Material::Wood)
            .unwrap();
        let hit = resolve_pointer(
            300.0,
            250.0,
            &viewport(),
            &top_down_camera(),
            &GroundPlane::default(),
            &grid,
        )
        .unwrap();
        assert_eq!(hit.target, PickTarget::Block(top));
        assert!((hit.point.y - 2.0).abs() < EPS);
    }

    #[test]
    fn ray_past_the_ground_edge_misses() {
        // Looking at the horizon from a low angle: the top of the
        // viewport sees sky beyond the 32×32 ground.
        let camera = Camera {
            eye: Vec3::new(0.0, 2.0, 20.0),
            ..top_down_camera()
        };
        let hit = resolve_pointer(
            300.0,
            50.0,
            &viewport(),
            &camera,
            &GroundPlane::default(),
            &PlacementGrid::default(),
        );
        assert!(hit.is_none());
    }
}
