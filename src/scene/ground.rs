use glam::Vec3;

use crate::options::GridOptions;
use crate::picking::Ray;

/// Finite, double-sided horizontal plane centered at the origin.
///
/// Catches clicks where no block is present. Rays that cross the plane's
/// infinite extension outside the square do not hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundPlane {
    /// Edge length of the square.
    pub size: f32,
    /// World-space height of the plane.
    pub height: f32,
}

impl Default for GroundPlane {
    fn default() -> Self {
        Self::from(&GridOptions::default())
    }
}

impl From<&GridOptions> for GroundPlane {
    fn from(options: &GridOptions) -> Self {
        Self {
            size: options.ground_size.max(0.0),
            height: options.ground_height,
        }
    }
}

impl GroundPlane {
    /// Whether a point on the plane lies within the square.
    pub fn contains(&self, point: Vec3) -> bool {
        let half = self.size * 0.5;
        point.x.abs() <= half && point.z.abs() <= half
    }

    /// Ray parameter of the hit, if the ray crosses the square.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let t = ray.intersect_horizontal_plane(self.height)?;
        self.contains(ray.at(t)).then_some(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hits_inside_square_only() {
        let ground = GroundPlane::default();
        let inside = Ray::new(Vec3::new(15.0, 5.0, -15.0), Vec3::NEG_Y).unwrap();
        assert!(ground.intersect(&inside).is_some());

        let outside = Ray::new(Vec3::new(16.5, 5.0, 0.0), Vec3::NEG_Y).unwrap();
        assert!(ground.intersect(&outside).is_none());
    }

    #[test]
    fn sits_just_below_zero() {
        let ground = GroundPlane::default();
        let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::NEG_Y).unwrap();
        let t = ground.intersect(&ray).unwrap();
        assert!((ray.at(t).y + 0.01).abs() < 1e-6);
    }
}
