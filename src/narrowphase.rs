//! Per shape-pair collision entry points.
//!
//! Every function takes the two shapes with their optional transforms and
//! returns `(hit, contact)`. The contact is only computed when `want_contact`
//! is set and the shapes intersect. Normals point from the first argument to
//! the second.

use glam::Vec3;

use crate::contact::ContactInfo;
use crate::gjk::gjk;
use crate::shape::{Aabb, ConvexHull, Shape, Sphere, SupportMap};
use crate::support::Collider;
use crate::transform::Transform;

/// Center distance below which two spheres are treated as concentric.
const CONCENTRIC_EPSILON: f32 = 1e-6;

/// Closed-form sphere test. Does not go through GJK.
pub fn sphere_vs_sphere(
    a: &Sphere,
    transform_a: Option<&Transform>,
    b: &Sphere,
    transform_b: Option<&Transform>,
    want_contact: bool,
) -> (bool, Option<ContactInfo>) {
    let (center_a, radius_a) = a.world(transform_a);
    let (center_b, radius_b) = b.world(transform_b);

    let diff = center_b - center_a;
    let dist_sq = diff.length_squared();
    let min_dist = radius_a + radius_b;

    if dist_sq >= min_dist * min_dist {
        return (false, None);
    }
    if !want_contact {
        return (true, None);
    }

    let dist = dist_sq.sqrt();
    let normal = if dist > CONCENTRIC_EPSILON {
        diff / dist
    } else {
        Vec3::Y
    };

    let contact = ContactInfo {
        hit: true,
        normal,
        depth: min_dist - dist,
        point_a: center_a + normal * radius_a,
        point_b: center_b - normal * radius_b,
    };
    (true, Some(contact))
}

pub fn sphere_vs_aabb(
    a: &Sphere,
    transform_a: Option<&Transform>,
    b: &Aabb,
    transform_b: Option<&Transform>,
    want_contact: bool,
) -> (bool, Option<ContactInfo>) {
    convex_vs_convex(a, transform_a, b, transform_b, want_contact)
}

pub fn sphere_vs_poly(
    a: &Sphere,
    transform_a: Option<&Transform>,
    b: &ConvexHull,
    transform_b: Option<&Transform>,
    want_contact: bool,
) -> (bool, Option<ContactInfo>) {
    convex_vs_convex(a, transform_a, b, transform_b, want_contact)
}

pub fn aabb_vs_sphere(
    a: &Aabb,
    transform_a: Option<&Transform>,
    b: &Sphere,
    transform_b: Option<&Transform>,
    want_contact: bool,
) -> (bool, Option<ContactInfo>) {
    flip(sphere_vs_aabb(b, transform_b, a, transform_a, want_contact))
}

pub fn aabb_vs_aabb(
    a: &Aabb,
    transform_a: Option<&Transform>,
    b: &Aabb,
    transform_b: Option<&Transform>,
    want_contact: bool,
) -> (bool, Option<ContactInfo>) {
    convex_vs_convex(a, transform_a, b, transform_b, want_contact)
}

pub fn aabb_vs_poly(
    a: &Aabb,
    transform_a: Option<&Transform>,
    b: &ConvexHull,
    transform_b: Option<&Transform>,
    want_contact: bool,
) -> (bool, Option<ContactInfo>) {
    convex_vs_convex(a, transform_a, b, transform_b, want_contact)
}

pub fn poly_vs_sphere(
    a: &ConvexHull,
    transform_a: Option<&Transform>,
    b: &Sphere,
    transform_b: Option<&Transform>,
    want_contact: bool,
) -> (bool, Option<ContactInfo>) {
    flip(sphere_vs_poly(b, transform_b, a, transform_a, want_contact))
}

pub fn poly_vs_aabb(
    a: &ConvexHull,
    transform_a: Option<&Transform>,
    b: &Aabb,
    transform_b: Option<&Transform>,
    want_contact: bool,
) -> (bool, Option<ContactInfo>) {
    flip(aabb_vs_poly(b, transform_b, a, transform_a, want_contact))
}

pub fn poly_vs_poly(
    a: &ConvexHull,
    transform_a: Option<&Transform>,
    b: &ConvexHull,
    transform_b: Option<&Transform>,
    want_contact: bool,
) -> (bool, Option<ContactInfo>) {
    convex_vs_convex(a, transform_a, b, transform_b, want_contact)
}

/// Dispatch to the pair function matching the two shape variants.
pub fn shape_vs_shape(
    a: &Shape,
    transform_a: Option<&Transform>,
    b: &Shape,
    transform_b: Option<&Transform>,
    want_contact: bool,
) -> (bool, Option<ContactInfo>) {
    let (ta, tb, want) = (transform_a, transform_b, want_contact);
    match (a, b) {
        (Shape::Sphere(a), Shape::Sphere(b)) => sphere_vs_sphere(a, ta, b, tb, want),
        (Shape::Sphere(a), Shape::Aabb(b)) => sphere_vs_aabb(a, ta, b, tb, want),
        (Shape::Sphere(a), Shape::ConvexHull(b)) => sphere_vs_poly(a, ta, b, tb, want),
        (Shape::Aabb(a), Shape::Sphere(b)) => aabb_vs_sphere(a, ta, b, tb, want),
        (Shape::Aabb(a), Shape::Aabb(b)) => aabb_vs_aabb(a, ta, b, tb, want),
        (Shape::Aabb(a), Shape::ConvexHull(b)) => aabb_vs_poly(a, ta, b, tb, want),
        (Shape::ConvexHull(a), Shape::Sphere(b)) => poly_vs_sphere(a, ta, b, tb, want),
        (Shape::ConvexHull(a), Shape::Aabb(b)) => poly_vs_aabb(a, ta, b, tb, want),
        (Shape::ConvexHull(a), Shape::ConvexHull(b)) => poly_vs_poly(a, ta, b, tb, want),
    }
}

fn convex_vs_convex(
    a: &dyn SupportMap,
    transform_a: Option<&Transform>,
    b: &dyn SupportMap,
    transform_b: Option<&Transform>,
    want_contact: bool,
) -> (bool, Option<ContactInfo>) {
    gjk(
        &Collider::new(a, transform_a),
        &Collider::new(b, transform_b),
        want_contact,
    )
}

/// Report a forwarded result in the caller's argument order.
#[inline]
fn flip((hit, contact): (bool, Option<ContactInfo>)) -> (bool, Option<ContactInfo>) {
    (hit, contact.map(|c| c.flipped()))
}
