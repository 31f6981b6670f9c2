use serde::{Deserialize, Serialize};

/// Which side of the figure a limb is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Left, Side::Right];

    /// Mirror multiplier applied to sideways offsets: +1 left, -1 right
    #[inline]
    pub const fn sign(self) -> f32 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }
}

/// Rotation axis of a joint angle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    #[inline]
    pub const fn suffix(self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }
}

/// Every joint that carries its own Euler angles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Joint {
    Torso = 0,
    Head = 1,
    LeftLowerArm = 2,
    LeftUpperArm = 3,
    RightLowerArm = 4,
    RightUpperArm = 5,
    LeftLeg = 6,
    RightLeg = 7,
}

impl Joint {
    /// Total number of posable joints
    pub const COUNT: usize = 8;

    pub const ALL: [Joint; Self::COUNT] = [
        Joint::Torso,
        Joint::Head,
        Joint::LeftLowerArm,
        Joint::LeftUpperArm,
        Joint::RightLowerArm,
        Joint::RightUpperArm,
        Joint::LeftLeg,
        Joint::RightLeg,
    ];

    /// Convert to array index
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Shoulder-side arm joint for a side
    pub const fn lower_arm(side: Side) -> Joint {
        match side {
            Side::Left => Joint::LeftLowerArm,
            Side::Right => Joint::RightLowerArm,
        }
    }

    /// Elbow-side arm joint for a side
    pub const fn upper_arm(side: Side) -> Joint {
        match side {
            Side::Left => Joint::LeftUpperArm,
            Side::Right => Joint::RightUpperArm,
        }
    }

    pub const fn leg(side: Side) -> Joint {
        match side {
            Side::Left => Joint::LeftLeg,
            Side::Right => Joint::RightLeg,
        }
    }

    /// Prefix of the slider ids driving this joint (`lowerL` + `X` = `lowerLX`)
    const fn control_prefix(self) -> &'static str {
        match self {
            Joint::Torso => "torso",
            Joint::Head => "head",
            Joint::LeftLowerArm => "lowerL",
            Joint::LeftUpperArm => "upperL",
            Joint::RightLowerArm => "lowerR",
            Joint::RightUpperArm => "upperR",
            Joint::LeftLeg => "legL",
            Joint::RightLeg => "legR",
        }
    }
}

/// Size scalars of the figure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Size {
    Torso = 0,
    Head = 1,
    ArmLength = 2,
    LegLength = 3,
}

impl Size {
    pub const COUNT: usize = 4;

    pub const ALL: [Size; Self::COUNT] =
        [Size::Torso, Size::Head, Size::ArmLength, Size::LegLength];

    const fn control_id(self) -> &'static str {
        match self {
            Size::Torso => "torsoSize",
            Size::Head => "headSize",
            Size::ArmLength => "armLength",
            Size::LegLength => "legLength",
        }
    }
}

/// One scalar of the pose: a joint angle about one axis, or a size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PoseField {
    Angle(Joint, Axis),
    Size(Size),
}

impl PoseField {
    /// 8 joints x 3 axes + 4 sizes
    pub const COUNT: usize = Joint::COUNT * Axis::ALL.len() + Size::COUNT;

    /// All fields, angles first (joint-major), then sizes
    pub fn all() -> impl Iterator<Item = PoseField> {
        Joint::ALL
            .into_iter()
            .flat_map(|joint| {
                Axis::ALL
                    .into_iter()
                    .map(move |axis| PoseField::Angle(joint, axis))
            })
            .chain(Size::ALL.into_iter().map(PoseField::Size))
    }

    /// Angle fields are edited in degrees and stored in radians
    #[inline]
    pub const fn is_angle(self) -> bool {
        matches!(self, PoseField::Angle(..))
    }

    /// DOM id of the slider bound to this field
    pub fn control_id(self) -> String {
        match self {
            PoseField::Angle(joint, axis) => {
                format!("{}{}", joint.control_prefix(), axis.suffix())
            }
            PoseField::Size(size) => size.control_id().to_string(),
        }
    }

    /// Reverse of [`PoseField::control_id`]
    pub fn from_control_id(id: &str) -> Option<PoseField> {
        for size in Size::ALL {
            if size.control_id() == id {
                return Some(PoseField::Size(size));
            }
        }

        let (prefix, suffix) = id.split_at_checked(id.len().checked_sub(1)?)?;
        let axis = Axis::ALL.into_iter().find(|a| a.suffix() == suffix)?;
        let joint = Joint::ALL
            .into_iter()
            .find(|j| j.control_prefix() == prefix)?;
        Some(PoseField::Angle(joint, axis))
    }
}
