use super::id::{Joint, PoseField};
use super::state::{EulerAngles, PoseState};
use crate::error::InputError;
use serde::{Deserialize, Serialize};

// ============================================================================
// JSON pose snapshots
// ============================================================================

/// Euler angles in degrees, the unit the sliders use
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
pub struct EulerDegrees {
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    #[serde(default)]
    pub z: f32,
}

impl EulerDegrees {
    pub fn to_radians(self) -> EulerAngles {
        EulerAngles::from_degrees(self.x, self.y, self.z)
    }

    pub fn from_radians(angles: EulerAngles) -> Self {
        let [x, y, z] = angles.to_degrees();
        Self { x, y, z }
    }
}

/// Serialized pose. Missing entries keep their rest-pose value on import.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PoseSnapshot {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub torso_size: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_size: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arm_length_scale: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leg_length_scale: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub torso: Option<EulerDegrees>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head: Option<EulerDegrees>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_lower_arm: Option<EulerDegrees>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_upper_arm: Option<EulerDegrees>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_lower_arm: Option<EulerDegrees>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_upper_arm: Option<EulerDegrees>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_leg: Option<EulerDegrees>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_leg: Option<EulerDegrees>,
}

fn default_version() -> u32 {
    1
}

impl PoseSnapshot {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    fn joint_slot(&self, joint: Joint) -> Option<EulerDegrees> {
        match joint {
            Joint::Torso => self.torso,
            Joint::Head => self.head,
            Joint::LeftLowerArm => self.left_lower_arm,
            Joint::LeftUpperArm => self.left_upper_arm,
            Joint::RightLowerArm => self.right_lower_arm,
            Joint::RightUpperArm => self.right_upper_arm,
            Joint::LeftLeg => self.left_leg,
            Joint::RightLeg => self.right_leg,
        }
    }

    fn joint_slot_mut(&mut self, joint: Joint) -> &mut Option<EulerDegrees> {
        match joint {
            Joint::Torso => &mut self.torso,
            Joint::Head => &mut self.head,
            Joint::LeftLowerArm => &mut self.left_lower_arm,
            Joint::LeftUpperArm => &mut self.left_upper_arm,
            Joint::RightLowerArm => &mut self.right_lower_arm,
            Joint::RightUpperArm => &mut self.right_upper_arm,
            Joint::LeftLeg => &mut self.left_leg,
            Joint::RightLeg => &mut self.right_leg,
        }
    }

    /// Rest pose with every present entry applied on top.
    ///
    /// Fails if any value is not finite once converted, e.g. `1e39` read as `f32`.
    pub fn to_pose(&self) -> Result<PoseState, InputError> {
        let mut pose = PoseState::rest_pose();

        if let Some(v) = self.torso_size {
            pose.torso_size = v;
        }
        if let Some(v) = self.head_size {
            pose.head_size = v;
        }
        if let Some(v) = self.arm_length_scale {
            pose.arm_length_scale = v;
        }
        if let Some(v) = self.leg_length_scale {
            pose.leg_length_scale = v;
        }

        for joint in Joint::ALL {
            if let Some(degrees) = self.joint_slot(joint) {
                pose.set_joint(joint, degrees.to_radians());
            }
        }

        match PoseField::all().find(|field| !pose.get(*field).is_finite()) {
            Some(field) => Err(InputError::InvalidValue {
                id: field.control_id(),
                value: pose.get(field).to_string(),
            }),
            None => Ok(pose),
        }
    }

    /// Full snapshot: every field is written
    pub fn from_pose(pose: &PoseState) -> Self {
        let mut snapshot = PoseSnapshot {
            version: default_version(),
            torso_size: Some(pose.torso_size),
            head_size: Some(pose.head_size),
            arm_length_scale: Some(pose.arm_length_scale),
            leg_length_scale: Some(pose.leg_length_scale),
            ..Default::default()
        };

        for joint in Joint::ALL {
            *snapshot.joint_slot_mut(joint) = Some(EulerDegrees::from_radians(pose.joint(joint)));
        }

        snapshot
    }
}
