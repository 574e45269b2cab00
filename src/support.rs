//! Minkowski difference support points.

use glam::Vec3;

use crate::shape::{support, SupportMap};
use crate::transform::Transform;

/// A shape together with its optional world transform.
#[derive(Clone, Copy)]
pub struct Collider<'a> {
    pub shape: &'a dyn SupportMap,
    pub transform: Option<&'a Transform>,
}

impl<'a> Collider<'a> {
    pub fn new(shape: &'a dyn SupportMap, transform: Option<&'a Transform>) -> Self {
        Self { shape, transform }
    }

    /// World-space support point along `direction`.
    #[inline]
    pub fn support(&self, direction: Vec3) -> Vec3 {
        support(self.shape, self.transform, direction)
    }
}

impl std::fmt::Debug for Collider<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collider")
            .field("transform", &self.transform)
            .finish_non_exhaustive()
    }
}

/// A vertex of the Minkowski difference `A - B`, together with the points on
/// each shape that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SupportPoint {
    /// Support point on shape A.
    pub a: Vec3,
    /// Support point on shape B.
    pub b: Vec3,
    /// `a - b`.
    pub point: Vec3,
}

impl SupportPoint {
    #[inline]
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self { a, b, point: a - b }
    }
}

/// Support point of the Minkowski difference `A - B` along `direction`.
#[inline]
pub fn generate_support(a: &Collider<'_>, b: &Collider<'_>, direction: Vec3) -> SupportPoint {
    SupportPoint::new(a.support(direction), b.support(-direction))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{Aabb, Sphere};

    #[test]
    fn test_generate_support_keeps_components() {
        let sphere = Sphere {
            center: Vec3::ZERO,
            radius: 1.0,
        };
        let aabb = Aabb {
            min: Vec3::new(2.0, -1.0, -1.0),
            max: Vec3::new(4.0, 1.0, 1.0),
        };
        let a = Collider::new(&sphere, None);
        let b = Collider::new(&aabb, None);

        let sp = generate_support(&a, &b, Vec3::X);
        assert_eq!(sp.a, Vec3::X);
        // Box support along -X picks the min corner
        assert_eq!(sp.b, Vec3::new(2.0, -1.0, -1.0));
        assert_eq!(sp.point, sp.a - sp.b);
    }

    #[test]
    fn test_generate_support_with_transform() {
        let sphere = Sphere {
            center: Vec3::ZERO,
            radius: 1.0,
        };
        let ta = Transform::from_translation(Vec3::new(0.0, 3.0, 0.0));
        let tb = Transform::from_translation(Vec3::new(0.0, -3.0, 0.0));
        let a = Collider::new(&sphere, Some(&ta));
        let b = Collider::new(&sphere, Some(&tb));

        let sp = generate_support(&a, &b, Vec3::NEG_Y);
        let eps = 1e-5;
        assert!((sp.a - Vec3::new(0.0, 2.0, 0.0)).length() < eps);
        assert!((sp.b - Vec3::new(0.0, -2.0, 0.0)).length() < eps);
        assert!((sp.point - Vec3::new(0.0, 4.0, 0.0)).length() < eps);
    }
}
