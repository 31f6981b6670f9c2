//! Fixed proportions of the cube robot.
//!
//! Everything here is a plain constant so the rig and its tests agree on the
//! exact same numbers. Sizes are in cube units (the shared mesh is a unit cube).

/// Default edge length of the torso cube
pub const DEFAULT_TORSO_SIZE: f32 = 1.0;
/// Default edge length of the head cube
pub const DEFAULT_HEAD_SIZE: f32 = 0.5;
/// Default arm length multiplier
pub const DEFAULT_ARM_LENGTH_SCALE: f32 = 1.0;
/// Default leg length multiplier
pub const DEFAULT_LEG_LENGTH_SCALE: f32 = 1.0;

/// Arm segment length (along X) at `arm_length_scale == 1`
pub const ARM_WIDTH_FACTOR: f32 = 0.7;
/// Arm segment thickness along Y
pub const ARM_HEIGHT: f32 = 0.3;
/// Arm segment thickness along Z
pub const ARM_DEPTH: f32 = 0.3;

/// Leg thickness along X; also used for the hip drop below the torso
pub const LEG_WIDTH: f32 = 0.4;
/// Leg length (along Y) at `leg_length_scale == 1`
pub const LEG_HEIGHT_FACTOR: f32 = 0.8;
/// Leg thickness along Z
pub const LEG_DEPTH: f32 = 0.4;
/// Sideways hip attachment distance from the torso center.
/// Does not follow torso or leg size.
pub const HIP_OFFSET_X: f32 = 0.25;

/// Rest pose, in degrees. Arms hang outward and forward.
pub const REST_LEFT_LOWER_ARM_Z_DEG: f32 = -30.0;
pub const REST_RIGHT_LOWER_ARM_Z_DEG: f32 = 30.0;
pub const REST_LEFT_UPPER_ARM_Y_DEG: f32 = -90.0;
pub const REST_RIGHT_UPPER_ARM_Y_DEG: f32 = 90.0;

/// Arm segment length for a given arm length multiplier
#[inline]
pub fn arm_width(arm_length_scale: f32) -> f32 {
    ARM_WIDTH_FACTOR * arm_length_scale
}

/// Leg length for a given leg length multiplier
#[inline]
pub fn leg_height(leg_length_scale: f32) -> f32 {
    LEG_HEIGHT_FACTOR * leg_length_scale
}
