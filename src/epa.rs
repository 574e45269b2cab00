//! EPA (Expanding Polytope Algorithm) for penetration depth and witness points.
//!
//! Starting from the tetrahedron GJK terminated with, the polytope is grown
//! toward the boundary of the Minkowski difference until the face closest to
//! the origin lies on that boundary. The face and loose edge buffers are fixed
//! capacity ([`EPA_MAX_FACES`], [`EPA_MAX_LOOSE_EDGES`]); together with the
//! iteration cap they bound the worst-case cost of a query. When an expansion
//! no longer fits, the search stops at the current closest face.

use arrayvec::ArrayVec;
use glam::Vec3;
use tracing::{debug, trace, warn};

use crate::config::{NarrowphaseConfig, EPA_MAX_FACES, EPA_MAX_LOOSE_EDGES, EPA_WINDING_BIAS};
use crate::contact::ContactInfo;
use crate::simplex::Tetrahedron;
use crate::support::{generate_support, Collider, SupportPoint};

/// Relative threshold under which a face is too thin for barycentric
/// reconstruction.
const BARYCENTRIC_EPSILON: f32 = 1e-7;

/// A triangular polytope face with an outward unit normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolytopeFace {
    pub points: [SupportPoint; 3],
    pub normal: Vec3,
}

impl PolytopeFace {
    /// Face with the normal of `(b - a) x (c - a)`. Returns `None` for a
    /// degenerate triangle.
    fn new(a: SupportPoint, b: SupportPoint, c: SupportPoint) -> Option<Self> {
        let normal = (b.point - a.point)
            .cross(c.point - a.point)
            .try_normalize()?;
        Some(Self {
            points: [a, b, c],
            normal,
        })
    }

    /// Distance from the origin to the face's plane.
    #[inline]
    pub fn distance(&self) -> f32 {
        self.points[0].point.dot(self.normal)
    }

    /// Whether `point` lies in front of the face.
    #[inline]
    fn is_visible_from(&self, point: Vec3) -> bool {
        self.normal.dot(point - self.points[0].point) > 0.0
    }

    /// Barycentric weights of the origin's projection onto the face.
    ///
    /// Falls back to the centroid when the triangle is too thin for a stable
    /// solve.
    fn barycentric(&self, distance: f32) -> Vec3 {
        let [p0, p1, p2] = self.points.map(|p| p.point);
        let q = self.normal * distance;

        let v0 = p1 - p0;
        let v1 = p2 - p0;
        let v2 = q - p0;
        let d00 = v0.dot(v0);
        let d01 = v0.dot(v1);
        let d11 = v1.dot(v1);
        let d20 = v2.dot(v0);
        let d21 = v2.dot(v1);
        let denom = d00 * d11 - d01 * d01;

        if denom.is_nan() || denom <= BARYCENTRIC_EPSILON * d00 * d11 {
            return Vec3::splat(1.0 / 3.0);
        }

        let v = (d11 * d20 - d01 * d21) / denom;
        let w = (d00 * d21 - d01 * d20) / denom;
        Vec3::new(1.0 - v - w, v, w)
    }

    /// Contact described by this face at the given distance.
    fn contact(&self, distance: f32, hit: bool) -> ContactInfo {
        let weights = self.barycentric(distance);
        let [s0, s1, s2] = self.points;
        ContactInfo {
            hit,
            normal: self.normal.normalize_or_zero(),
            depth: distance,
            point_a: s0.a * weights.x + s1.a * weights.y + s2.a * weights.z,
            point_b: s0.b * weights.x + s1.b * weights.y + s2.b * weights.z,
        }
    }
}

/// A directed polytope edge left exposed after removing visible faces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LooseEdge {
    pub start: SupportPoint,
    pub end: SupportPoint,
}

impl LooseEdge {
    #[inline]
    fn is_reverse_of(&self, other: &LooseEdge) -> bool {
        self.start == other.end && self.end == other.start
    }
}

/// Triangle-faced approximation of the Minkowski difference boundary.
#[derive(Debug, Clone, Default)]
pub struct Polytope {
    faces: ArrayVec<PolytopeFace, EPA_MAX_FACES>,
}

impl Polytope {
    /// Build the polytope from GJK's terminal tetrahedron `a b c d`.
    pub fn from_tetrahedron(tetrahedron: &Tetrahedron) -> Self {
        let [a, b, c, d] = *tetrahedron;
        let faces = [(a, b, c), (a, c, d), (a, d, b), (b, d, c)]
            .into_iter()
            .filter_map(|(p0, p1, p2)| PolytopeFace::new(p0, p1, p2))
            .collect();
        Self { faces }
    }

    pub fn faces(&self) -> &[PolytopeFace] {
        &self.faces
    }

    /// The face whose plane is closest to the origin, with its distance.
    pub fn closest_face(&self) -> Option<(usize, f32)> {
        let mut faces = self.faces.iter().enumerate();
        let (_, first) = faces.next()?;
        let mut best = (0, first.distance());
        for (i, face) in faces {
            let dist = face.distance();
            if dist < best.1 {
                best = (i, dist);
            }
        }
        Some(best)
    }

    /// Remove every face visible from `point` and stitch the hole closed with
    /// new faces fanning out from it.
    ///
    /// Returns `false` and leaves the polytope untouched if the expansion
    /// would overflow the face or loose edge buffers. A partial expansion
    /// would leave holes and overestimate the depth.
    pub fn expand(&mut self, point: SupportPoint) -> bool {
        let mut loose_edges = ArrayVec::<LooseEdge, EPA_MAX_LOOSE_EDGES>::new();
        let mut visible = 0;

        for face in self.faces.iter().filter(|f| f.is_visible_from(point.point)) {
            visible += 1;
            let [p0, p1, p2] = face.points;
            for (start, end) in [(p0, p1), (p1, p2), (p2, p0)] {
                let edge = LooseEdge { start, end };
                // An edge shared with another removed face is interior
                if let Some(k) = loose_edges.iter().position(|e| e.is_reverse_of(&edge)) {
                    loose_edges.swap_remove(k);
                } else if loose_edges.try_push(edge).is_err() {
                    trace!("epa: loose edge buffer full");
                    return false;
                }
            }
        }

        if self.faces.len() - visible + loose_edges.len() > EPA_MAX_FACES {
            trace!(faces = self.faces.len(), visible, "epa: face buffer full");
            return false;
        }

        let mut i = 0;
        while i < self.faces.len() {
            if self.faces[i].is_visible_from(point.point) {
                self.faces.swap_remove(i);
            } else {
                i += 1;
            }
        }
        for edge in &loose_edges {
            let Some(mut face) = PolytopeFace::new(edge.start, edge.end, point) else {
                continue;
            };
            // Keep the normal pointing away from the origin
            if face.distance() + EPA_WINDING_BIAS < 0.0 {
                face.points.swap(0, 1);
                face.normal = -face.normal;
            }
            self.faces.push(face);
        }
        true
    }
}

/// Compute the penetration normal, depth and witness points of two
/// intersecting colliders, with the default configuration.
pub fn epa(tetrahedron: &Tetrahedron, a: &Collider<'_>, b: &Collider<'_>) -> ContactInfo {
    epa_with_config(tetrahedron, a, b, &NarrowphaseConfig::default())
}

/// [`epa`] with an explicit configuration.
///
/// If the iteration budget or the polytope capacity runs out, the contact
/// from the last closest face is returned with `hit` set to `false`. Its
/// depth never exceeds the true penetration depth.
pub fn epa_with_config(
    tetrahedron: &Tetrahedron,
    a: &Collider<'_>,
    b: &Collider<'_>,
    config: &NarrowphaseConfig,
) -> ContactInfo {
    let mut polytope = Polytope::from_tetrahedron(tetrahedron);
    let mut best: Option<(PolytopeFace, f32)> = None;

    for iteration in 0..config.epa_max_iterations {
        let Some((index, min_dist)) = polytope.closest_face() else {
            trace!(iteration, "epa: polytope has no faces");
            break;
        };
        let face = polytope.faces()[index];
        best = Some((face, min_dist));

        let new_point = generate_support(a, b, face.normal);
        if new_point.point.dot(face.normal) - min_dist < config.epa_tolerance {
            trace!(iteration, depth = min_dist, "epa: converged");
            return face.contact(min_dist, true);
        }

        if !polytope.expand(new_point) {
            debug!(
                iteration,
                depth = min_dist,
                "epa: polytope capacity exhausted, returning best estimate"
            );
            return face.contact(min_dist, false);
        }
    }

    warn!(
        max_iterations = config.epa_max_iterations,
        "epa: did not converge, returning best estimate"
    );
    best.map_or_else(ContactInfo::none, |(face, dist)| face.contact(dist, false))
}
