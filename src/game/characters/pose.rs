// Discrete sprite poses

/// Which animation the character shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Pose {
    #[default]
    Idle,
    WalkLeft,
    WalkRight,
    JumpLeft,
    JumpRight,
}

impl Pose {
    #[cfg(test)]
    pub const ALL: [Pose; 5] = [
        Pose::Idle,
        Pose::WalkLeft,
        Pose::WalkRight,
        Pose::JumpLeft,
        Pose::JumpRight,
    ];

    /// Pose for a grounded character moving at horizontal speed `vx`
    pub fn from_velocity(vx: f32) -> Self {
        if vx > 0.0 {
            Self::WalkRight
        } else if vx < 0.0 {
            Self::WalkLeft
        } else {
            Self::Idle
        }
    }

    /// Airborne pose for a facing direction (negative = left)
    pub fn jump(facing: f32) -> Self {
        if facing < 0.0 {
            Self::JumpLeft
        } else {
            Self::JumpRight
        }
    }

    /// Left-facing poses reuse the right-facing frames mirrored
    pub fn is_flipped(&self) -> bool {
        matches!(self, Self::WalkLeft | Self::JumpLeft)
    }

    #[cfg(test)]
    pub fn is_airborne(&self) -> bool {
        matches!(self, Self::JumpLeft | Self::JumpRight)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::WalkLeft => "walk_left",
            Self::WalkRight => "walk_right",
            Self::JumpLeft => "jump_left",
            Self::JumpRight => "jump_right",
        }
    }
}
