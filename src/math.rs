//! Matrix helpers on top of glam.
//!
//! Every method right-multiplies, so a chain of calls reads in the same order
//! the transforms apply to a vertex from the outside in:
//! `parent.translated(a).rotated_xyz(r)` is `parent * T(a) * R(r)`.

pub use glam::{Mat4, Vec3, Vec4};

/// Extension trait for building kinematic chains one step at a time.
pub trait TransformExt {
    /// Append a translation
    fn translated(self, offset: Vec3) -> Self;

    /// Append a rotation about X, then Y, then Z (radians, local axes)
    fn rotated_xyz(self, euler: Vec3) -> Self;

    /// Append a non-uniform scale
    fn scaled(self, scale: Vec3) -> Self;

    /// Append a rotation whose fixed point is `pivot` instead of the origin
    fn rotated_about_pivot(self, pivot: Vec3, euler: Vec3) -> Self;

    /// True when the bottom row is exactly (0, 0, 0, 1)
    fn is_affine(&self) -> bool;
}

impl TransformExt for Mat4 {
    #[inline]
    fn translated(self, offset: Vec3) -> Mat4 {
        self * Mat4::from_translation(offset)
    }

    #[inline]
    fn rotated_xyz(self, euler: Vec3) -> Mat4 {
        self * Mat4::from_rotation_x(euler.x)
            * Mat4::from_rotation_y(euler.y)
            * Mat4::from_rotation_z(euler.z)
    }

    #[inline]
    fn scaled(self, scale: Vec3) -> Mat4 {
        self * Mat4::from_scale(scale)
    }

    #[inline]
    fn rotated_about_pivot(self, pivot: Vec3, euler: Vec3) -> Mat4 {
        rotate_about_pivot(self, pivot, euler)
    }

    fn is_affine(&self) -> bool {
        self.row(3) == Vec4::W
    }
}

/// Shift to `pivot`, rotate X then Y then Z, shift back.
///
/// Lets a segment hinge at one of its ends rather than at its center.
pub fn rotate_about_pivot(matrix: Mat4, pivot: Vec3, euler: Vec3) -> Mat4 {
    matrix
        .translated(pivot)
        .rotated_xyz(euler)
        .translated(-pivot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_zero_rotation_is_exact_identity() {
        assert_eq!(Mat4::IDENTITY.rotated_xyz(Vec3::ZERO), Mat4::IDENTITY);
    }

    #[test]
    fn test_rotation_order_is_x_then_y_then_z() {
        let euler = Vec3::new(0.3, -0.7, 1.1);
        let expected = Mat4::from_rotation_x(euler.x)
            * Mat4::from_rotation_y(euler.y)
            * Mat4::from_rotation_z(euler.z);
        assert_eq!(Mat4::IDENTITY.rotated_xyz(euler), expected);

        let swapped = Mat4::from_rotation_z(euler.z)
            * Mat4::from_rotation_y(euler.y)
            * Mat4::from_rotation_x(euler.x);
        assert!(!expected.abs_diff_eq(swapped, EPS));
    }

    #[test]
    fn test_pivot_point_is_fixed() {
        let pivot = Vec3::new(-0.35, 0.0, 0.0);
        let m = rotate_about_pivot(Mat4::IDENTITY, pivot, Vec3::new(0.0, 0.0, FRAC_PI_2));
        let moved = m.transform_point3(pivot);
        assert!(moved.abs_diff_eq(pivot, EPS), "pivot moved to {moved}");

        // The far end swings around the pivot
        let tip = m.transform_point3(Vec3::new(0.35, 0.0, 0.0));
        assert!(tip.abs_diff_eq(Vec3::new(-0.35, 0.7, 0.0), EPS), "tip at {tip}");
    }

    #[test]
    fn test_scaled_appends_after_chain() {
        let m = Mat4::IDENTITY
            .translated(Vec3::new(1.0, 2.0, 3.0))
            .scaled(Vec3::new(2.0, 2.0, 2.0));
        let p = m.transform_point3(Vec3::new(0.5, 0.0, 0.0));
        assert!(p.abs_diff_eq(Vec3::new(2.0, 2.0, 3.0), EPS));
    }

    #[test]
    fn test_is_affine() {
        assert!(Mat4::IDENTITY.rotated_xyz(Vec3::splat(1.0)).is_affine());
        let projection = Mat4::perspective_rh(0.5, 1.0, 0.1, 100.0);
        assert!(!projection.is_affine());
    }
}
