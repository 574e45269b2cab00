//! Rigid transform with non-uniform scale, used to move support queries
//! between object space and world space.

use glam::{Mat3, Mat4, Quat, Vec3};

/// Translation, rotation and scale, plus the derived rotation-scale matrix and
/// its inverse.
///
/// The matrices are recomputed by every setter, so the fields are private.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    translation: Vec3,
    rotation: Quat,
    scale: Vec3,
    rotation_scale: Mat3,
    inverse_rotation_scale: Mat3,
}

impl Transform {
    /// Create a transform from its components.
    pub fn new(translation: Vec3, rotation: Quat, scale: Vec3) -> Self {
        let mut transform = Self {
            translation,
            rotation,
            scale,
            rotation_scale: Mat3::IDENTITY,
            inverse_rotation_scale: Mat3::IDENTITY,
        };
        transform.update_matrices();
        transform
    }

    /// Create an identity transform.
    pub fn identity() -> Self {
        Self::new(Vec3::ZERO, Quat::IDENTITY, Vec3::ONE)
    }

    /// Create a transform from a translation.
    pub fn from_translation(translation: Vec3) -> Self {
        Self::new(translation, Quat::IDENTITY, Vec3::ONE)
    }

    /// Create a transform from a translation and a rotation.
    pub fn from_translation_rotation(translation: Vec3, rotation: Quat) -> Self {
        Self::new(translation, rotation, Vec3::ONE)
    }

    /// Decompose a 4x4 matrix into a Transform.
    ///
    /// Note: This assumes the matrix represents a valid affine transform
    /// (no shear).
    pub fn from_matrix(mat: Mat4) -> Self {
        let (scale, rotation, translation) = mat.to_scale_rotation_translation();
        Self::new(translation, rotation, scale)
    }

    /// Convert to a 4x4 matrix (translation * rotation * scale).
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }

    pub fn translation(&self) -> Vec3 {
        self.translation
    }

    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    /// Rotation followed by scale as a single 3x3 matrix (`R * S`).
    pub fn rotation_scale(&self) -> Mat3 {
        self.rotation_scale
    }

    /// Inverse of [`Transform::rotation_scale`].
    ///
    /// Support mapping does not use this: directions go through the transpose
    /// of [`Transform::rotation_scale`], which differs under non-uniform scale.
    pub fn inverse_rotation_scale(&self) -> Mat3 {
        self.inverse_rotation_scale
    }

    pub fn set_translation(&mut self, translation: Vec3) {
        self.translation = translation;
    }

    pub fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
        self.update_matrices();
    }

    pub fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
        self.update_matrices();
    }

    /// Map an object-space point to world space.
    #[inline]
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.rotation_scale * point + self.translation
    }

    /// Map an object-space vector to world space (no translation).
    #[inline]
    pub fn transform_vector(&self, vector: Vec3) -> Vec3 {
        self.rotation_scale * vector
    }

    /// Map a world-space vector to object space (no translation).
    #[inline]
    pub fn inverse_transform_vector(&self, vector: Vec3) -> Vec3 {
        self.inverse_rotation_scale * vector
    }

    /// Largest absolute scale factor over the three axes.
    #[inline]
    pub fn max_scale(&self) -> f32 {
        self.scale.abs().max_element()
    }

    fn update_matrices(&mut self) {
        self.rotation_scale = Mat3::from_quat(self.rotation) * Mat3::from_diagonal(self.scale);
        self.inverse_rotation_scale = self.rotation_scale.inverse();
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
