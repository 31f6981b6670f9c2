use glam::{Mat4, Vec3};

/// Fixed eye position, above and to the front-right of the figure
pub const CAMERA_EYE: Vec3 = Vec3::new(4.0, 4.0, 6.0);

/// The camera always looks at the torso origin
pub const CAMERA_TARGET: Vec3 = Vec3::ZERO;

/// Vertical field of view (30 degrees)
pub const FIELD_OF_VIEW_Y: f32 = std::f32::consts::PI / 6.0;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 100.0;

/// Static look-at camera. Only the aspect ratio changes, on resize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    /// Viewport width / height
    pub aspect: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: CAMERA_EYE,
            target: CAMERA_TARGET,
            aspect: 1.0,
        }
    }
}

impl Camera {
    /// Camera matched to a viewport size. A zero height is treated as 1 pixel.
    pub fn for_viewport(width: u32, height: u32) -> Self {
        Self::default().with_viewport(width, height)
    }

    /// Same camera with the aspect ratio of a new viewport
    pub fn with_viewport(self, width: u32, height: u32) -> Camera {
        Camera {
            aspect: width.max(1) as f32 / height.max(1) as f32,
            ..self
        }
    }

    /// World to view transform, +Y up
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, Vec3::Y)
    }

    /// Right-handed perspective with a [0, 1] depth range
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(FIELD_OF_VIEW_Y, self.aspect, Z_NEAR, Z_FAR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_camera_above_target() {
        let camera = Camera::default();
        assert!(camera.eye.y > camera.target.y);
        assert_eq!(camera.aspect, 1.0);
    }

    #[test]
    fn test_view_matrix_looks_at_target() {
        let view = Camera::default().view_matrix();

        for val in view.to_cols_array() {
            assert!(!val.is_nan(), "View matrix should not contain NaN");
        }

        // Target lands on the -Z axis in view space
        let target = view.transform_point3(CAMERA_TARGET);
        assert!(target.x.abs() < 1e-5 && target.y.abs() < 1e-5);
        assert!((target.z + CAMERA_EYE.length()).abs() < 1e-4);

        // Eye is the view-space origin
        assert!(view.transform_point3(CAMERA_EYE).length() < 1e-5);
    }

    #[test]
    fn test_view_matrix_is_stable() {
        let camera = Camera::default();
        assert_eq!(camera.view_matrix(), camera.view_matrix());
    }

    #[test]
    fn test_viewport_aspect() {
        let camera = Camera::for_viewport(800, 400);
        assert_eq!(camera.aspect, 2.0);
        assert_eq!(camera.eye, CAMERA_EYE);

        // Degenerate height does not divide by zero
        let collapsed = camera.with_viewport(640, 0);
        assert_eq!(collapsed.aspect, 640.0);
        assert!(collapsed.projection_matrix().is_finite());
    }

    #[test]
    fn test_projection_maps_near_plane_to_zero_depth() {
        let projection = Camera::default().projection_matrix();
        let p = projection.project_point3(glam::Vec3::new(0.0, 0.0, -Z_NEAR));
        assert!(p.z.abs() < 1e-5, "near plane depth {}", p.z);
        let p = projection.project_point3(glam::Vec3::new(0.0, 0.0, -Z_FAR));
        assert!((p.z - 1.0).abs() < 1e-4, "far plane depth {}", p.z);
    }
}
