//! Kinematic chain of the cube robot
//!
//! Turns a [`PoseState`] into one model matrix per body part. The torso is the
//! root at the world origin; head, arms and legs hang off the torso's rotated
//! frame, and each arm chains lower segment -> upper segment.
//!
//! ## Conventions
//!
//! - Joint rotations are always X, then Y, then Z.
//! - Left and right limbs share one code path; the [`Side`] sign flips the
//!   sideways offsets. Rotations are never mirrored, each side has its own
//!   angle fields.
//! - Composition is a pure function of the pose. Nothing is cached between calls.

use crate::figure_constants::{ARM_DEPTH, ARM_HEIGHT, HIP_OFFSET_X, LEG_DEPTH, LEG_WIDTH};
use crate::math::TransformExt;
use crate::pose::{Joint, PoseState, Side};
use glam::{Mat4, Vec3};

/// One drawn cube of the figure, in draw order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BodyPart {
    Torso = 0,
    Head = 1,
    LeftLowerArm = 2,
    LeftUpperArm = 3,
    RightLowerArm = 4,
    RightUpperArm = 5,
    LeftLeg = 6,
    RightLeg = 7,
}

impl BodyPart {
    pub const COUNT: usize = 8;

    pub const ALL: [BodyPart; Self::COUNT] = [
        BodyPart::Torso,
        BodyPart::Head,
        BodyPart::LeftLowerArm,
        BodyPart::LeftUpperArm,
        BodyPart::RightLowerArm,
        BodyPart::RightUpperArm,
        BodyPart::LeftLeg,
        BodyPart::RightLeg,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Every joint drives exactly one drawn part
impl From<Joint> for BodyPart {
    fn from(joint: Joint) -> Self {
        match joint {
            Joint::Torso => BodyPart::Torso,
            Joint::Head => BodyPart::Head,
            Joint::LeftLowerArm => BodyPart::LeftLowerArm,
            Joint::LeftUpperArm => BodyPart::LeftUpperArm,
            Joint::RightLowerArm => BodyPart::RightLowerArm,
            Joint::RightUpperArm => BodyPart::RightUpperArm,
            Joint::LeftLeg => BodyPart::LeftLeg,
            Joint::RightLeg => BodyPart::RightLeg,
        }
    }
}

/// Chain matrix of a part plus the box dimensions the unit cube is scaled to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartTransform {
    pub part: BodyPart,
    /// Parent chain, pivot shifts and joint rotation; no scale
    pub chain: Mat4,
    /// Width, height and depth of the part's box
    pub dimensions: Vec3,
}

impl PartTransform {
    /// `chain * scale(dimensions)`, mapping the unit cube onto the part
    #[inline]
    pub fn model_matrix(&self) -> Mat4 {
        self.chain.scaled(self.dimensions)
    }
}

/// All composed parts for one redraw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureTransforms {
    parts: [PartTransform; BodyPart::COUNT],
}

impl FigureTransforms {
    #[inline]
    pub fn get(&self, part: BodyPart) -> &PartTransform {
        &self.parts[part.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &PartTransform> {
        self.parts.iter()
    }
}

/// Torso frame: rotation only, placed at the origin
pub fn torso_matrix(pose: &PoseState) -> Mat4 {
    Mat4::IDENTITY.rotated_xyz(pose.joint(Joint::Torso).as_vec3())
}

fn head(pose: &PoseState, torso: Mat4) -> PartTransform {
    let lift = (pose.head_size + pose.torso_size) / 2.0;
    let chain = torso
        .translated(Vec3::new(0.0, lift, 0.0))
        .rotated_xyz(pose.joint(Joint::Head).as_vec3());

    PartTransform {
        part: BodyPart::Head,
        chain,
        dimensions: Vec3::splat(pose.head_size),
    }
}

/// Lower and upper arm segment for one side
fn arm(pose: &PoseState, torso: Mat4, side: Side) -> [PartTransform; 2] {
    let s = side.sign();
    let width = pose.arm_width();
    let dimensions = Vec3::new(width, ARM_HEIGHT, ARM_DEPTH);
    // Inner edge of a segment relative to its center
    let hinge = Vec3::new(-s * width / 2.0, 0.0, 0.0);

    let lower_joint = Joint::lower_arm(side);
    let upper_joint = Joint::upper_arm(side);

    let shoulder = torso.translated(Vec3::new(s * (width + pose.torso_size) / 2.0, 0.0, 0.0));
    let lower = shoulder.rotated_about_pivot(hinge, pose.joint(lower_joint).as_vec3());

    let elbow = lower.translated(Vec3::new(s * width, 0.0, 0.0));
    let upper = elbow.rotated_about_pivot(hinge, pose.joint(upper_joint).as_vec3());

    [
        PartTransform {
            part: lower_joint.into(),
            chain: lower,
            dimensions,
        },
        PartTransform {
            part: upper_joint.into(),
            chain: upper,
            dimensions,
        },
    ]
}

fn leg(pose: &PoseState, torso: Mat4, side: Side) -> PartTransform {
    let joint = Joint::leg(side);
    let height = pose.leg_height();
    let hip = torso.translated(Vec3::new(
        side.sign() * HIP_OFFSET_X,
        -(LEG_WIDTH + pose.torso_size) / 2.0,
        0.0,
    ));
    let chain = hip.rotated_about_pivot(
        Vec3::new(0.0, height / 2.0, 0.0),
        pose.joint(joint).as_vec3(),
    );

    PartTransform {
        part: joint.into(),
        chain,
        dimensions: Vec3::new(LEG_WIDTH, height, LEG_DEPTH),
    }
}

/// Walk the whole chain for a pose.
pub fn compose_figure(pose: &PoseState) -> FigureTransforms {
    let torso = torso_matrix(pose);
    let [left_lower, left_upper] = arm(pose, torso, Side::Left);
    let [right_lower, right_upper] = arm(pose, torso, Side::Right);

    FigureTransforms {
        parts: [
            PartTransform {
                part: BodyPart::Torso,
                chain: torso,
                dimensions: Vec3::splat(pose.torso_size),
            },
            head(pose, torso),
            left_lower,
            left_upper,
            right_lower,
            right_upper,
            leg(pose, torso, Side::Left),
            leg(pose, torso, Side::Right),
        ],
    }
}
