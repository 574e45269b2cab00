//! Convex shape primitives and their support functions.

use glam::Vec3;

use crate::error::ShapeError;
use crate::transform::Transform;

/// A convex shape representable by a support mapping function.
///
/// A support function returns the point of the shape furthest along a given
/// direction. Any convex shape is uniquely determined by its support function,
/// which is all GJK and EPA need to know about it.
pub trait SupportMap {
    /// Object-space support point along an object-space `direction`.
    ///
    /// `direction` is not required to be normalized.
    fn local_support(&self, direction: Vec3) -> Vec3;
}

impl<S: SupportMap + ?Sized> SupportMap for &S {
    #[inline]
    fn local_support(&self, direction: Vec3) -> Vec3 {
        (**self).local_support(direction)
    }
}

/// World-space support point of `shape` along a world-space `direction`.
///
/// The direction is carried into object space, the shape's own support
/// function is evaluated there, and the result is mapped back to world space.
/// Without a transform the shape is already in world space.
#[inline]
pub fn support<S: SupportMap + ?Sized>(
    shape: &S,
    transform: Option<&Transform>,
    direction: Vec3,
) -> Vec3 {
    match transform {
        Some(transform) => {
            // Directions are covectors: map with the transpose of (R * S).
            let local_dir = transform.rotation_scale().transpose() * direction;
            transform.transform_point(shape.local_support(local_dir))
        }
        None => shape.local_support(direction),
    }
}

/// Sphere given by its center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32) -> Result<Self, ShapeError> {
        if !center.is_finite() || !radius.is_finite() {
            return Err(ShapeError::NonFinite);
        }
        if radius < 0.0 {
            return Err(ShapeError::NegativeRadius(radius));
        }
        Ok(Self { center, radius })
    }

    /// World-space center and radius. Non-uniform scale is covered by the
    /// largest axis.
    pub fn world(&self, transform: Option<&Transform>) -> (Vec3, f32) {
        match transform {
            Some(t) => (t.transform_point(self.center), self.radius * t.max_scale()),
            None => (self.center, self.radius),
        }
    }
}

impl SupportMap for Sphere {
    #[inline]
    fn local_support(&self, direction: Vec3) -> Vec3 {
        self.center + direction.normalize_or_zero() * self.radius
    }
}

/// Axis-aligned box in object space.
///
/// Also used as a world-space bounding volume by [`Shape::compute_bounds`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Result<Self, ShapeError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ShapeError::NonFinite);
        }
        if min.cmpgt(max).any() {
            return Err(ShapeError::InvertedAabb { min, max });
        }
        Ok(Self { min, max })
    }

    /// Box centered at `center` with the given half extents.
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        let half_extents = half_extents.abs();
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Test whether two boxes overlap on every axis (touching counts).
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    #[inline]
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// World-space bounds of this box under `transform`.
    fn transformed(&self, transform: &Transform) -> Aabb {
        let center = transform.transform_point(self.center());

        // For each world axis, sum the projected local half extents
        let m = transform.rotation_scale();
        let half = self.half_extents();
        let extent = m.x_axis.abs() * half.x + m.y_axis.abs() * half.y + m.z_axis.abs() * half.z;

        Aabb {
            min: center - extent,
            max: center + extent,
        }
    }
}

impl SupportMap for Aabb {
    #[inline]
    fn local_support(&self, direction: Vec3) -> Vec3 {
        Vec3::new(
            if direction.x > 0.0 { self.max.x } else { self.min.x },
            if direction.y > 0.0 { self.max.y } else { self.min.y },
            if direction.z > 0.0 { self.max.z } else { self.min.z },
        )
    }
}

/// Convex point set. The vertices are assumed to form a convex hull; only
/// non-emptiness and finiteness are checked.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvexHull {
    points: Vec<Vec3>,
}

impl ConvexHull {
    pub fn new(points: Vec<Vec3>) -> Result<Self, ShapeError> {
        if points.is_empty() {
            return Err(ShapeError::EmptyHull);
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(ShapeError::NonFiniteVertex { index });
        }
        Ok(Self { points })
    }

    /// Eight corners of a box, as a hull.
    pub fn from_aabb(aabb: &Aabb) -> Self {
        let (lo, hi) = (aabb.min, aabb.max);
        let points = (0..8)
            .map(|i| {
                Vec3::new(
                    if i & 1 == 0 { lo.x } else { hi.x },
                    if i & 2 == 0 { lo.y } else { hi.y },
                    if i & 4 == 0 { lo.z } else { hi.z },
                )
            })
            .collect();
        Self { points }
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.points
    }

    /// Number of vertices. Never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.points.len()
    }
}

impl SupportMap for ConvexHull {
    #[inline]
    fn local_support(&self, direction: Vec3) -> Vec3 {
        // Ties keep the first vertex found.
        let mut best = self.points[0];
        let mut best_dot = best.dot(direction);
        for p in &self.points[1..] {
            let d = p.dot(direction);
            if d > best_dot {
                best_dot = d;
                best = *p;
            }
        }
        best
    }
}

/// Closed set of convex shapes supported by the narrowphase.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
    Aabb(Aabb),
    ConvexHull(ConvexHull),
}

impl Shape {
    /// Compute the world-space bounding box for this shape.
    pub fn compute_bounds(&self, transform: Option<&Transform>) -> Aabb {
        match self {
            Shape::Sphere(sphere) => {
                let (center, radius) = sphere.world(transform);
                Aabb::from_center_half_extents(center, Vec3::splat(radius))
            }
            Shape::Aabb(aabb) => match transform {
                Some(t) => aabb.transformed(t),
                None => *aabb,
            },
            Shape::ConvexHull(hull) => {
                let mut min = Vec3::splat(f32::MAX);
                let mut max = Vec3::splat(f32::MIN);
                for p in hull.vertices() {
                    let wp = transform.map_or(*p, |t| t.transform_point(*p));
                    min = min.min(wp);
                    max = max.max(wp);
                }
                Aabb { min, max }
            }
        }
    }
}

impl SupportMap for Shape {
    #[inline]
    fn local_support(&self, direction: Vec3) -> Vec3 {
        match self {
            Shape::Sphere(sphere) => sphere.local_support(direction),
            Shape::Aabb(aabb) => aabb.local_support(direction),
            Shape::ConvexHull(hull) => hull.local_support(direction),
        }
    }
}

impl From<Sphere> for Shape {
    fn from(sphere: Sphere) -> Self {
        Shape::Sphere(sphere)
    }
}

impl From<Aabb> for Shape {
    fn from(aabb: Aabb) -> Self {
        Shape::Aabb(aabb)
    }
}

impl From<ConvexHull> for Shape {
    fn from(hull: ConvexHull) -> Self {
        Shape::ConvexHull(hull)
    }
}
