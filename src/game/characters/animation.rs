// Sprite-frame cycling
//
// An `Animation` is a fixed list of frames and a tick divider: every
// `period` calls to `advance` move to the next frame, wrapping at the end.
// A period of 0 is a still pose.

use super::pose::Pose;
use crate::engine::assets::{AtlasRegion, TextureAtlas, TextureHandle};

/// Sprite-sheet region names
pub mod regions {
    pub const IDLE: &str = "idle";
    pub const WALK_1: &str = "walk_1";
    pub const WALK_2: &str = "walk_2";
    pub const WALK_3: &str = "walk_3";
    pub const JUMP: &str = "jump";
}

/// Ticks between walk frames
pub const WALK_PERIOD: u32 = 10;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AnimationError {
    #[error("Animation has no frames")]
    NoFrames,

    #[error("Sprite sheet has no region named {0}")]
    MissingRegion(String),
}

/// One still image: a region of a sprite sheet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub texture: TextureHandle,
    pub region: AtlasRegion,
}

impl Frame {
    /// Look up a named region of the sheet
    pub fn from_atlas(atlas: &TextureAtlas, name: &str) -> Result<Self, AnimationError> {
        let region = atlas
            .get_region(name)
            .ok_or_else(|| AnimationError::MissingRegion(name.to_string()))?;
        Ok(Self {
            texture: atlas.texture,
            region: *region,
        })
    }
}

/// A looping frame sequence throttled to one step every `period` ticks
#[derive(Debug, Clone)]
pub struct Animation {
    frames: Vec<Frame>,
    period: u32,
    current_frame: usize,
    counter: u32,
}

impl Animation {
    /// Create an animation starting at frame 0. `period == 0` never advances.
    pub fn new(frames: Vec<Frame>, period: u32) -> Result<Self, AnimationError> {
        if frames.is_empty() {
            return Err(AnimationError::NoFrames);
        }
        Ok(Self {
            frames,
            period,
            current_frame: 0,
            counter: 0,
        })
    }

    /// A single-frame animation that never advances
    pub fn still(frame: Frame) -> Self {
        Self {
            frames: vec![frame],
            period: 0,
            current_frame: 0,
            counter: 0,
        }
    }

    /// Count one tick, stepping to the next frame every `period` ticks
    pub fn advance(&mut self) {
        if self.period == 0 {
            return;
        }

        self.counter += 1;
        if self.counter < self.period {
            return;
        }

        self.counter = 0;
        self.current_frame = (self.current_frame + 1) % self.frames.len();
    }

    /// The frame to draw now
    pub fn current_frame_image(&self) -> &Frame {
        &self.frames[self.current_frame]
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    #[cfg(test)]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    #[cfg(test)]
    pub fn period(&self) -> u32 {
        self.period
    }
}

/// One animation per pose, built once from the sprite sheet
#[derive(Debug, Clone)]
pub struct AnimationSet {
    idle: Animation,
    walk_left: Animation,
    walk_right: Animation,
    jump_left: Animation,
    jump_right: Animation,
}

impl AnimationSet {
    /// Build every pose's animation from the sheet's named regions.
    ///
    /// Walking plays the three walk frames last-to-first. Left-facing poses
    /// share the right-facing frames and are mirrored at draw time.
    pub fn from_atlas(atlas: &TextureAtlas) -> Result<Self, AnimationError> {
        let idle = Animation::still(Frame::from_atlas(atlas, regions::IDLE)?);

        let walk_frames = [regions::WALK_3, regions::WALK_2, regions::WALK_1]
            .into_iter()
            .map(|name| Frame::from_atlas(atlas, name))
            .collect::<Result<Vec<_>, _>>()?;
        let walk = Animation::new(walk_frames, WALK_PERIOD)?;

        let jump = Animation::still(Frame::from_atlas(atlas, regions::JUMP)?);

        Ok(Self {
            idle,
            walk_left: walk.clone(),
            walk_right: walk,
            jump_left: jump.clone(),
            jump_right: jump,
        })
    }

    pub fn get(&self, pose: Pose) -> &Animation {
        match pose {
            Pose::Idle => &self.idle,
            Pose::WalkLeft => &self.walk_left,
            Pose::WalkRight => &self.walk_right,
            Pose::JumpLeft => &self.jump_left,
            Pose::JumpRight => &self.jump_right,
        }
    }

    pub fn get_mut(&mut self, pose: Pose) -> &mut Animation {
        match pose {
            Pose::Idle => &mut self.idle,
            Pose::WalkLeft => &mut self.walk_left,
            Pose::WalkRight => &mut self.walk_right,
            Pose::JumpLeft => &mut self.jump_left,
            Pose::JumpRight => &mut self.jump_right,
        }
    }
}

/// Mark the standard Mario sheet's regions on `atlas`: 20x35 cells on a
/// 30px stride along row y = 50
pub fn add_standard_regions(atlas: &mut TextureAtlas) {
    atlas.add_rect(regions::IDLE, 208, 50, 228, 85);
    atlas.add_rect(regions::WALK_1, 238, 50, 258, 85);
    atlas.add_rect(regions::WALK_2, 268, 50, 288, 85);
    atlas.add_rect(regions::WALK_3, 298, 50, 318, 85);
    atlas.add_rect(regions::JUMP, 358, 50, 378, 85);
}
