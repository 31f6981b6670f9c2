use super::id::{Axis, Joint, PoseField, Size};
use crate::figure_constants::*;
use glam::Vec3;

/// Euler angles of one joint, in radians.
///
/// Applied X first, then Y, then Z, always in that order.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EulerAngles {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl EulerAngles {
    pub const ZERO: EulerAngles = EulerAngles::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn from_degrees(x: f32, y: f32, z: f32) -> Self {
        Self::new(x.to_radians(), y.to_radians(), z.to_radians())
    }

    /// (x, y, z) in degrees
    pub fn to_degrees(self) -> [f32; 3] {
        [self.x.to_degrees(), self.y.to_degrees(), self.z.to_degrees()]
    }

    #[inline]
    pub fn get(self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    #[inline]
    pub fn set(&mut self, axis: Axis, radians: f32) {
        match axis {
            Axis::X => self.x = radians,
            Axis::Y => self.y = radians,
            Axis::Z => self.z = radians,
        }
    }

    #[inline]
    pub fn as_vec3(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

/// Everything that shapes the figure: one Euler triple per joint plus four sizes.
///
/// Values are stored exactly as given. Angles are not wrapped or clamped and
/// sizes are not validated; the rig accepts any real number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseState {
    pub torso_size: f32,
    pub head_size: f32,
    pub arm_length_scale: f32,
    pub leg_length_scale: f32,

    /// Indexed by [`Joint::index`]
    pub angles: [EulerAngles; Joint::COUNT],
}

impl Default for PoseState {
    fn default() -> Self {
        Self::rest_pose()
    }
}

impl PoseState {
    /// Startup pose: default sizes, arms angled outward and forward
    pub fn rest_pose() -> Self {
        let mut angles = [EulerAngles::ZERO; Joint::COUNT];
        angles[Joint::LeftLowerArm.index()] =
            EulerAngles::from_degrees(0.0, 0.0, REST_LEFT_LOWER_ARM_Z_DEG);
        angles[Joint::RightLowerArm.index()] =
            EulerAngles::from_degrees(0.0, 0.0, REST_RIGHT_LOWER_ARM_Z_DEG);
        angles[Joint::LeftUpperArm.index()] =
            EulerAngles::from_degrees(0.0, REST_LEFT_UPPER_ARM_Y_DEG, 0.0);
        angles[Joint::RightUpperArm.index()] =
            EulerAngles::from_degrees(0.0, REST_RIGHT_UPPER_ARM_Y_DEG, 0.0);

        Self {
            torso_size: DEFAULT_TORSO_SIZE,
            head_size: DEFAULT_HEAD_SIZE,
            arm_length_scale: DEFAULT_ARM_LENGTH_SCALE,
            leg_length_scale: DEFAULT_LEG_LENGTH_SCALE,
            angles,
        }
    }

    /// Default sizes with every angle at zero
    pub fn zeroed() -> Self {
        Self {
            angles: [EulerAngles::ZERO; Joint::COUNT],
            ..Self::rest_pose()
        }
    }

    #[inline]
    pub fn joint(&self, joint: Joint) -> EulerAngles {
        self.angles[joint.index()]
    }

    #[inline]
    pub fn set_joint(&mut self, joint: Joint, angles: EulerAngles) {
        self.angles[joint.index()] = angles;
    }

    pub fn size(&self, size: Size) -> f32 {
        match size {
            Size::Torso => self.torso_size,
            Size::Head => self.head_size,
            Size::ArmLength => self.arm_length_scale,
            Size::LegLength => self.leg_length_scale,
        }
    }

    pub fn set_size(&mut self, size: Size, value: f32) {
        match size {
            Size::Torso => self.torso_size = value,
            Size::Head => self.head_size = value,
            Size::ArmLength => self.arm_length_scale = value,
            Size::LegLength => self.leg_length_scale = value,
        }
    }

    /// Read one field (radians for angles)
    pub fn get(&self, field: PoseField) -> f32 {
        match field {
            PoseField::Angle(joint, axis) => self.joint(joint).get(axis),
            PoseField::Size(size) => self.size(size),
        }
    }

    /// Write one field (radians for angles)
    pub fn set(&mut self, field: PoseField, value: f32) {
        match field {
            PoseField::Angle(joint, axis) => self.angles[joint.index()].set(axis, value),
            PoseField::Size(size) => self.set_size(size, value),
        }
    }

    /// Return a new pose with one field replaced
    pub fn with(self, field: PoseField, value: f32) -> Self {
        let mut new_pose = self;
        new_pose.set(field, value);
        new_pose
    }

    /// Length of each arm segment along its own X axis
    #[inline]
    pub fn arm_width(&self) -> f32 {
        arm_width(self.arm_length_scale)
    }

    /// Length of each leg along its own Y axis
    #[inline]
    pub fn leg_height(&self) -> f32 {
        leg_height(self.leg_length_scale)
    }
}
