// One running game: update and draw

use glam::{Affine2, Vec2};

use super::assets::GameAssets;
use super::characters::{AnimationError, AnimationSet, Character};
use super::config::GameConfig;
use crate::engine::assets::{AtlasRegion, TextureHandle};
use crate::engine::input::PlayerInput;
use crate::engine::renderer::{DrawCommand, DrawQueue};

/// All mutable game state
pub struct Game {
    character: Character,
    background: TextureHandle,
    background_region: AtlasRegion,
    background_scale: f32,
    sprite_scale: f32,
}

impl Game {
    /// Build the game, character included, before the first tick
    pub fn new(assets: &GameAssets, config: &GameConfig) -> Result<Self, AnimationError> {
        let animations = AnimationSet::from_atlas(&assets.sprite_sheet)?;
        Ok(Self {
            character: Character::new(config.character.clone(), animations),
            background: assets.background,
            background_region: assets.background_region,
            background_scale: config.background_scale,
            sprite_scale: config.sprite_scale,
        })
    }

    /// Run one tick: input, motion, pose, animation
    pub fn update(&mut self, input: &PlayerInput) {
        self.character.apply_input(input);
        self.character.tick();
        self.character.update_pose();
        self.character.advance_animation();
    }

    /// Queue this frame's images, back to front
    pub fn draw(&self, queue: &mut DrawQueue) {
        queue.push(DrawCommand::new(
            self.background,
            self.background_region,
            Affine2::from_scale(Vec2::splat(self.background_scale)),
        ));

        let frame = self.character.current_frame();
        queue.push(DrawCommand::new(
            frame.texture,
            frame.region,
            self.character_transform(frame.region.size()),
        ));
    }

    /// Scale about the sprite's top-left, then move it to the character's
    /// position. Mirrored poses flip around the sprite's vertical center line.
    fn character_transform(&self, frame_size: Vec2) -> Affine2 {
        let s = self.sprite_scale;
        let position = self.character.position;
        if self.character.pose().is_flipped() {
            Affine2::from_translation(position + Vec2::new(frame_size.x * s, 0.0))
                * Affine2::from_scale(Vec2::new(-s, s))
        } else {
            Affine2::from_translation(position) * Affine2::from_scale(Vec2::splat(s))
        }
    }

    #[cfg(test)]
    pub fn character(&self) -> &Character {
        &self.character
    }
}
