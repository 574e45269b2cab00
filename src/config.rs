//! Iteration caps and tolerances for the GJK and EPA loops.
//!
//! The caps are the only mechanism bounding the worst-case cost of a query.
//! Reaching one is reported as a conservative miss (GJK) or an approximate
//! contact (EPA), never as an error.

/// Default maximum number of GJK iterations.
pub const GJK_MAX_ITERATIONS: u32 = 64;

/// Default maximum number of EPA expansion iterations.
pub const EPA_MAX_ITERATIONS: u32 = 64;

/// Default EPA convergence tolerance.
pub const EPA_TOLERANCE: f32 = 1e-5;

/// Capacity of the EPA face buffer.
pub const EPA_MAX_FACES: usize = 64;

/// Capacity of the EPA loose edge buffer.
pub const EPA_MAX_LOOSE_EDGES: usize = 32;

/// Absolute bias used when correcting the winding of new EPA faces.
pub const EPA_WINDING_BIAS: f32 = 1e-6;

/// Configuration for narrowphase queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NarrowphaseConfig {
    /// Maximum number of GJK iterations. Default: 64.
    pub gjk_max_iterations: u32,
    /// Maximum number of EPA iterations. Default: 64.
    pub epa_max_iterations: u32,
    /// EPA stops once a new support point improves on the closest face by
    /// less than this distance. Default: 1e-5.
    pub epa_tolerance: f32,
}

impl Default for NarrowphaseConfig {
    fn default() -> Self {
        Self {
            gjk_max_iterations: GJK_MAX_ITERATIONS,
            epa_max_iterations: EPA_MAX_ITERATIONS,
            epa_tolerance: EPA_TOLERANCE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrowphase_config_default() {
        let config = NarrowphaseConfig::default();
        assert_eq!(config.gjk_max_iterations, 64);
        assert_eq!(config.epa_max_iterations, 64);
        assert!((config.epa_tolerance - 1e-5).abs() < 1e-12);
    }

    #[test]
    fn test_buffer_caps() {
        assert_eq!(EPA_MAX_FACES, 64);
        assert_eq!(EPA_MAX_LOOSE_EDGES, 32);
    }
}
