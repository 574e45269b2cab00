//! GJK intersection test on the Minkowski difference of two colliders.

use glam::Vec3;
use tracing::{debug, trace};

use crate::config::NarrowphaseConfig;
use crate::contact::ContactInfo;
use crate::epa::epa_with_config;
use crate::simplex::{triple_cross, Simplex, Tetrahedron};
use crate::support::{generate_support, Collider};

/// Squared length below which a search direction is treated as zero.
const DEGENERATE_DIRECTION_SQ: f32 = 1e-12;

/// The result of the GJK algorithm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GjkOutcome {
    /// The terminal tetrahedron encloses the origin: the shapes intersect.
    EnclosesOrigin(Tetrahedron),
    /// A support point failed to pass the origin: the shapes are disjoint.
    NoIntersection,
    /// The iteration cap was reached without a definitive answer. Treated as
    /// a miss, so near-degenerate inputs may produce false negatives.
    IterationLimitReached,
}

impl GjkOutcome {
    #[inline]
    pub fn is_intersecting(&self) -> bool {
        matches!(self, GjkOutcome::EnclosesOrigin(_))
    }
}

/// Run the GJK loop until it proves or disproves that the origin lies inside
/// the Minkowski difference `A - B`.
pub fn gjk_intersection(
    a: &Collider<'_>,
    b: &Collider<'_>,
    config: &NarrowphaseConfig,
) -> GjkOutcome {
    // First support point along an arbitrary direction
    let c = generate_support(a, b, Vec3::X);
    let mut direction = -c.point;
    if direction.length_squared() < DEGENERATE_DIRECTION_SQ {
        // The shapes touch exactly at the first support point
        direction = Vec3::NEG_X;
    }

    let b_point = generate_support(a, b, direction);
    if b_point.point.dot(direction) <= 0.0 {
        trace!("gjk: separated on initial segment");
        return GjkOutcome::NoIntersection;
    }

    let mut simplex = Simplex::line(b_point, c);
    direction = line_direction(b_point.point, c.point);

    for iteration in 0..config.gjk_max_iterations {
        let new_point = generate_support(a, b, direction);
        if new_point.point.dot(direction) <= 0.0 {
            trace!(iteration, "gjk: separated");
            return GjkOutcome::NoIntersection;
        }

        simplex.push(new_point);
        if simplex.update(&mut direction) {
            trace!(iteration, "gjk: origin enclosed");
            // update() only reports enclosure for a full tetrahedron
            return simplex
                .tetrahedron()
                .map_or(GjkOutcome::IterationLimitReached, GjkOutcome::EnclosesOrigin);
        }
    }

    debug!(
        max_iterations = config.gjk_max_iterations,
        "gjk: iteration limit reached, reporting no intersection"
    );
    GjkOutcome::IterationLimitReached
}

/// Search direction perpendicular to the segment `c -> b`, toward the origin.
fn line_direction(b: Vec3, c: Vec3) -> Vec3 {
    let bc = c - b;
    let direction = triple_cross(bc, -b, bc);
    if direction.length_squared() >= DEGENERATE_DIRECTION_SQ {
        return direction;
    }

    // Origin lies on the line: any perpendicular will do
    let direction = bc.cross(Vec3::X);
    if direction.length_squared() >= DEGENERATE_DIRECTION_SQ {
        return direction;
    }
    bc.cross(Vec3::NEG_Z)
}

/// GJK intersection test with the default configuration.
///
/// When `want_contact` is set and the shapes intersect, EPA refines the
/// terminal simplex into a contact.
pub fn gjk(a: &Collider<'_>, b: &Collider<'_>, want_contact: bool) -> (bool, Option<ContactInfo>) {
    gjk_with_config(a, b, want_contact, &NarrowphaseConfig::default())
}

/// [`gjk`] with an explicit configuration.
pub fn gjk_with_config(
    a: &Collider<'_>,
    b: &Collider<'_>,
    want_contact: bool,
    config: &NarrowphaseConfig,
) -> (bool, Option<ContactInfo>) {
    match gjk_intersection(a, b, config) {
        GjkOutcome::EnclosesOrigin(tetrahedron) => {
            let contact = want_contact.then(|| epa_with_config(&tetrahedron, a, b, config));
            (true, contact)
        }
        GjkOutcome::NoIntersection | GjkOutcome::IterationLimitReached => (false, None),
    }
}
