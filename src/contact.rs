//! Contact data produced by narrowphase queries.

use glam::Vec3;

/// Information about a contact between two shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactInfo {
    /// Whether the contact was resolved. EPA reports `false` for a best-effort
    /// estimate when it runs out of iterations.
    pub hit: bool,
    /// Contact normal (from shape A to shape B). Moving B by `normal * depth`
    /// separates the shapes.
    pub normal: Vec3,
    /// Penetration depth.
    pub depth: f32,
    /// Deepest point of shape A inside shape B, in world space.
    pub point_a: Vec3,
    /// Deepest point of shape B inside shape A, in world space.
    pub point_b: Vec3,
}

impl ContactInfo {
    /// An empty, unresolved contact.
    pub fn none() -> Self {
        Self {
            hit: false,
            normal: Vec3::ZERO,
            depth: 0.0,
            point_a: Vec3::ZERO,
            point_b: Vec3::ZERO,
        }
    }

    /// Single world-space contact point halfway between the witness points.
    #[inline]
    pub fn midpoint(&self) -> Vec3 {
        (self.point_a + self.point_b) * 0.5
    }

    /// The same contact seen with the shapes swapped.
    #[inline]
    pub fn flipped(&self) -> Self {
        Self {
            hit: self.hit,
            normal: -self.normal,
            depth: self.depth,
            point_a: self.point_b,
            point_b: self.point_a,
        }
    }
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flipped() {
        let contact = ContactInfo {
            hit: true,
            normal: Vec3::X,
            depth: 0.5,
            point_a: Vec3::new(1.0, 0.0, 0.0),
            point_b: Vec3::new(0.5, 0.0, 0.0),
        };
        let flipped = contact.flipped();
        assert_eq!(flipped.normal, Vec3::NEG_X);
        assert_eq!(flipped.point_a, contact.point_b);
        assert_eq!(flipped.point_b, contact.point_a);
        assert_eq!(flipped.depth, contact.depth);
        assert_eq!(flipped.flipped(), contact);
        assert_eq!(contact.midpoint(), Vec3::new(0.75, 0.0, 0.0));
    }

    #[test]
    fn test_default_is_none() {
        let contact = ContactInfo::default();
        assert!(!contact.hit);
        assert_eq!(contact.depth, 0.0);
    }
}
