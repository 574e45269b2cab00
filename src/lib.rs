//! Rein narrowphase collision detection.
//!
//! A shape-agnostic GJK intersection test combined with EPA for penetration
//! depth and witness point recovery.
//!
//! # Architecture
//!
//! The library is organized into layers, leaves first:
//!
//! 1. **transform** - Translation, rotation and scale with a cached rotation-scale matrix
//! 2. **shape** - Convex primitives (sphere, box, convex hull) and their support functions
//! 3. **support** - Minkowski difference support points
//! 4. **simplex** / **gjk** - Simplex construction and the GJK intersection loop
//! 5. **epa** - Expanding polytope refinement of a GJK terminal tetrahedron
//! 6. **narrowphase** - Per shape-pair entry points
//!
//! All queries are stateless: shapes and transforms are read-only inputs, so
//! queries on disjoint pairs can run on separate threads.

pub mod config;
pub mod contact;
pub mod epa;
pub mod error;
pub mod gjk;
pub mod narrowphase;
pub mod shape;
pub mod simplex;
pub mod support;
pub mod transform;


pub use config::NarrowphaseConfig;
pub use contact::ContactInfo;
pub use epa::{epa, epa_with_config};
pub use error::ShapeError;
pub use gjk::{gjk, gjk_intersection, gjk_with_config, GjkOutcome};
pub use narrowphase::{
    aabb_vs_aabb, aabb_vs_poly, aabb_vs_sphere, poly_vs_aabb, poly_vs_poly, poly_vs_sphere,
    shape_vs_shape, sphere_vs_aabb, sphere_vs_poly, sphere_vs_sphere,
};
pub use shape::{support, Aabb, ConvexHull, Shape, Sphere, SupportMap};
pub use simplex::{Simplex, Tetrahedron};
pub use support::{generate_support, Collider, SupportPoint};
pub use transform::Transform;

// Re-export glam for convenience
pub use glam;
