// The player character: tick-based motion and pose selection

use glam::Vec2;
use log::debug;

use super::animation::{Animation, AnimationSet, Frame};
use super::pose::Pose;
use super::stats::CharacterStats;
use crate::core::math::{approach, clamp};
use crate::engine::input::{Action, PlayerInput};

/// The player-controlled character
#[derive(Debug, Clone)]
pub struct Character {
    /// Top-left corner of the sprite in playfield pixels
    pub position: Vec2,
    /// Pixels per tick; positive y is downward
    pub velocity: Vec2,

    stats: CharacterStats,

    /// Last horizontal direction moved (1 = right, -1 = left)
    facing_direction: f32,

    /// Pose whose animation is shown
    pose: Pose,
    animations: AnimationSet,
}

impl Character {
    /// Place a character at the spawn point, standing still
    pub fn new(stats: CharacterStats, animations: AnimationSet) -> Self {
        Self {
            position: stats.spawn,
            velocity: Vec2::ZERO,
            stats,
            facing_direction: 1.0,
            pose: Pose::Idle,
            animations,
        }
    }

    /// Set velocity from this tick's input.
    ///
    /// A held direction sets horizontal speed outright (left wins over
    /// right); with neither held the speed is left to decay in `tick`.
    /// Jump fires only on the press edge, and only from the ground.
    pub fn apply_input(&mut self, input: &PlayerInput) {
        let horizontal = input.horizontal();
        if horizontal != 0.0 {
            self.velocity.x = horizontal * self.stats.walk_speed;
            self.facing_direction = horizontal;
        }

        if input.just_pressed(Action::Jump) {
            self.try_jump();
        }
    }

    /// Start a jump if standing on the ground
    pub fn try_jump(&mut self) -> bool {
        if !self.is_grounded() {
            return false;
        }
        self.velocity.y = -self.stats.jump_impulse;
        debug!("Jump from x = {:.1}", self.position.x);
        true
    }

    /// Advance one tick: move, clamp to the floor and walls, then apply
    /// friction and gravity for the next tick
    pub fn tick(&mut self) {
        let stats = &self.stats;

        self.position += self.velocity;

        if self.position.y > stats.ground_y {
            self.position.y = stats.ground_y;
            if stats.land_resets_fall_speed && self.velocity.y > 0.0 {
                self.velocity.y = 0.0;
            }
        }
        self.position.x = clamp(self.position.x, stats.wall_left, stats.wall_right);

        self.velocity.x = approach(self.velocity.x, 0.0, stats.friction);
        self.velocity.y = (self.velocity.y + stats.gravity).min(stats.max_fall_speed);
    }

    /// Pose implied by the current velocity
    pub fn select_pose(&self) -> Pose {
        if self.stats.airborne_poses && !self.is_grounded() {
            return Pose::jump(self.facing_direction);
        }
        Pose::from_velocity(self.velocity.x)
    }

    /// Switch the shown animation to `select_pose()`. The animation picked
    /// keeps its own frame and counter.
    pub fn update_pose(&mut self) {
        let pose = self.select_pose();
        if pose != self.pose {
            debug!(
                "Pose {} -> {} (resuming at frame {})",
                self.pose.name(),
                pose.name(),
                self.animations.get(pose).current_frame()
            );
            self.pose = pose;
        }
    }

    /// Count one tick on the shown animation
    pub fn advance_animation(&mut self) {
        self.animations.get_mut(self.pose).advance();
    }

    pub fn is_grounded(&self) -> bool {
        self.position.y >= self.stats.ground_y
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn current_animation(&self) -> &Animation {
        self.animations.get(self.pose)
    }

    /// The frame to draw this tick
    pub fn current_frame(&self) -> &Frame {
        self.current_animation().current_frame_image()
    }

    #[cfg(test)]
    pub fn stats(&self) -> &CharacterStats {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::{AssetHandle, AssetId, TextureAtlas};
    use crate::game::characters::animation::{add_standard_regions, WALK_PERIOD};
    use approx::assert_relative_eq;

    fn character_with(stats: CharacterStats) -> Character {
        let mut atlas =
            TextureAtlas::new(AssetHandle::new(AssetId::from_path("mario.png")), 400, 100);
        add_standard_regions(&mut atlas);
        Character::new(stats, AnimationSet::from_atlas(&atlas).unwrap())
    }

    fn character() -> Character {
        character_with(CharacterStats::default())
    }

    fn pressing(actions: &[Action]) -> PlayerInput {
        let mut input = PlayerInput::new();
        for &action in actions {
            input.press(action);
        }
        input
    }

    /// One full game tick, closing out the input edge afterwards
    fn step(character: &mut Character, input: &mut PlayerInput) {
        character.apply_input(input);
        character.tick();
        character.update_pose();
        character.advance_animation();
        input.update();
    }

    #[test]
    fn test_spawns_still_at_spawn_point() {
        let c = character();
        assert_eq!(c.position, CharacterStats::default().spawn);
        assert_eq!(c.velocity, Vec2::ZERO);
        assert_eq!(c.pose(), Pose::Idle);
        assert!(c.is_grounded());
    }

    #[test]
    fn test_idle_tick_keeps_x() {
        let mut c = character();
        let x = c.position.x;
        c.tick();
        assert_eq!(c.position.x, x);
    }

    #[test]
    fn test_holding_right_moves_right_every_tick() {
        let mut c = character();
        let mut input = pressing(&[Action::MoveRight]);

        let mut last_x = c.position.x;
        for _ in 0..5 {
            step(&mut c, &mut input);
            assert!(c.position.x > last_x);
            last_x = c.position.x;
        }
        assert_eq!(c.pose(), Pose::WalkRight);
    }

    #[test]
    fn test_left_wins_over_right() {
        let mut c = character();
        c.apply_input(&pressing(&[Action::MoveLeft, Action::MoveRight]));
        assert_eq!(c.velocity.x, -c.stats().walk_speed);
    }

    #[test]
    fn test_release_decays_without_crossing_zero() {
        let mut c = character();
        let mut input = pressing(&[Action::MoveRight]);
        step(&mut c, &mut input);
        input.release(Action::MoveRight);

        let friction = c.stats().friction;
        let mut last_vx = c.velocity.x;
        for _ in 0..100 {
            step(&mut c, &mut input);
            assert!(c.velocity.x >= 0.0, "speed crossed zero");
            assert!(c.velocity.x <= last_vx);
            assert!(last_vx - c.velocity.x <= friction + 1e-5);
            last_vx = c.velocity.x;
        }
        assert_eq!(c.velocity.x, 0.0);
        assert_eq!(c.pose(), Pose::Idle);
    }

    #[test]
    fn test_leftward_decay_stays_negative() {
        let mut c = character();
        c.velocity.x = -0.25;
        c.tick();
        assert_relative_eq!(c.velocity.x, -0.15, epsilon = 1e-6);
        c.tick();
        c.tick();
        assert_eq!(c.velocity.x, 0.0);
    }

    #[test]
    fn test_walls_clamp_x() {
        let mut c = character();
        let mut input = pressing(&[Action::MoveLeft]);
        for _ in 0..200 {
            step(&mut c, &mut input);
            assert!(c.position.x >= c.stats().wall_left);
        }
        assert_eq!(c.position.x, c.stats().wall_left);

        let mut input = pressing(&[Action::MoveRight]);
        for _ in 0..1000 {
            step(&mut c, &mut input);
            assert!(c.position.x <= c.stats().wall_right);
        }
        assert_eq!(c.position.x, c.stats().wall_right);
    }

    #[test]
    fn test_never_below_ground() {
        let mut c = character();
        let mut input = pressing(&[Action::Jump]);
        for i in 0..600 {
            if i % 90 == 0 {
                input.release(Action::Jump);
                input.press(Action::Jump);
            }
            step(&mut c, &mut input);
            assert!(c.position.y <= c.stats().ground_y);
        }
    }

    #[test]
    fn test_jump_from_ground() {
        let mut c = character();
        let mut input = pressing(&[Action::Jump]);
        step(&mut c, &mut input);

        assert!(!c.is_grounded());
        assert_relative_eq!(c.position.y, c.stats().ground_y - c.stats().jump_impulse);
    }

    #[test]
    fn test_held_jump_does_not_retrigger() {
        let mut c = character();
        let mut input = pressing(&[Action::Jump]);

        let mut jumps = 0;
        let mut was_grounded = true;
        for _ in 0..600 {
            step(&mut c, &mut input);
            if was_grounded && !c.is_grounded() {
                jumps += 1;
            }
            was_grounded = c.is_grounded();
        }
        assert_eq!(jumps, 1);
        assert!(c.is_grounded());
    }

    #[test]
    fn test_no_jump_while_airborne() {
        let mut c = character();
        assert!(c.try_jump());
        c.tick();
        let vy = c.velocity.y;
        assert!(!c.try_jump());
        assert_eq!(c.velocity.y, vy);
    }

    #[test]
    fn test_gravity_capped() {
        let mut c = character();
        c.position.y = -10_000.0;
        for _ in 0..1000 {
            c.tick();
            assert!(c.velocity.y <= c.stats().max_fall_speed);
        }
        assert_eq!(c.velocity.y, c.stats().max_fall_speed);
    }

    #[test]
    fn test_standing_keeps_fall_speed_by_default() {
        let mut c = character();
        for _ in 0..10 {
            c.tick();
        }
        assert!(c.is_grounded());
        assert_relative_eq!(c.velocity.y, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_landing_reset_when_enabled() {
        let mut c = character_with(CharacterStats {
            land_resets_fall_speed: true,
            ..CharacterStats::default()
        });
        for _ in 0..10 {
            c.tick();
        }
        // Reset on contact, then one tick of gravity
        assert_relative_eq!(c.velocity.y, c.stats().gravity);
    }

    #[test]
    fn test_pose_from_velocity_only_by_default() {
        let mut c = character();
        let mut input = pressing(&[Action::MoveLeft, Action::Jump]);
        step(&mut c, &mut input);

        assert!(!c.is_grounded());
        assert_eq!(c.pose(), Pose::WalkLeft);
        assert!(c.pose().is_flipped());
    }

    #[test]
    fn test_airborne_poses_when_enabled() {
        let mut c = character_with(CharacterStats {
            airborne_poses: true,
            ..CharacterStats::default()
        });
        let mut input = pressing(&[Action::MoveLeft, Action::Jump]);
        step(&mut c, &mut input);

        assert_eq!(c.pose(), Pose::JumpLeft);
        assert!(c.pose().is_airborne());
    }

    #[test]
    fn test_only_shown_animation_advances() {
        let mut c = character();
        let mut input = pressing(&[Action::MoveRight]);
        for _ in 0..WALK_PERIOD {
            step(&mut c, &mut input);
        }
        assert_eq!(c.current_animation().current_frame(), 1);
        assert_eq!(c.current_frame().region.x, 268);
    }

    #[test]
    fn test_switching_pose_keeps_animation_progress() {
        let mut c = character();
        let mut input = pressing(&[Action::MoveRight]);
        for _ in 0..WALK_PERIOD {
            step(&mut c, &mut input);
        }

        // Stop long enough to go idle, then walk again
        input.release(Action::MoveRight);
        while c.pose() != Pose::Idle {
            step(&mut c, &mut input);
        }
        input.press(Action::MoveRight);
        step(&mut c, &mut input);

        assert_eq!(c.pose(), Pose::WalkRight);
        assert!(c.current_animation().current_frame() >= 1);
    }
}
