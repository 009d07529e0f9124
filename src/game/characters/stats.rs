// Character movement tuning and playfield bounds
//
// All speeds are in playfield pixels per tick (60 ticks per second).

use glam::Vec2;

#[derive(Debug, Clone, PartialEq)]
pub struct CharacterStats {
    // Spawn
    /// Top-left corner of the sprite when the game starts
    pub spawn: Vec2,

    // Playfield
    /// Leftmost allowed x
    pub wall_left: f32,
    /// Rightmost allowed x
    pub wall_right: f32,
    /// Largest allowed y; standing on the ground means `y == ground_y`
    pub ground_y: f32,

    // Movement
    /// Horizontal speed set while a direction is held
    pub walk_speed: f32,
    /// Horizontal speed lost per tick
    pub friction: f32,
    /// Downward speed gained per tick
    pub gravity: f32,
    /// Cap on downward speed
    pub max_fall_speed: f32,
    /// Upward speed given by a jump
    pub jump_impulse: f32,

    // Behavior switches
    /// Zero downward speed on touching the ground. Off by default: vertical
    /// speed keeps building against the floor and is only re-capped by gravity.
    pub land_resets_fall_speed: bool,
    /// Use the jump poses while airborne instead of the velocity-only walk/idle choice
    pub airborne_poses: bool,
}

pub const BASE_STATS: CharacterStats = CharacterStats {
    spawn: Vec2::new(100.0, 285.0),

    wall_left: 0.0,
    wall_right: 1470.0,
    // Same line as the spawn, so the standing character counts as grounded
    ground_y: 285.0,

    walk_speed: 4.0,
    friction: 0.1,
    gravity: 0.1,
    max_fall_speed: 20.0,
    jump_impulse: 5.0,

    land_resets_fall_speed: false,
    airborne_poses: false,
};

impl Default for CharacterStats {
    fn default() -> Self {
        BASE_STATS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stats() {
        let stats = CharacterStats::default();
        assert_eq!(stats.walk_speed, 4.0);
        assert_eq!(stats.wall_right, 1470.0);
        assert!(!stats.land_resets_fall_speed);
    }

    #[test]
    fn test_spawn_inside_playfield() {
        let stats = CharacterStats::default();
        assert!(stats.spawn.x >= stats.wall_left && stats.spawn.x <= stats.wall_right);
        assert!(stats.spawn.y <= stats.ground_y);
    }

    #[test]
    fn test_spawn_stands_on_ground() {
        let stats = CharacterStats::default();
        assert_eq!(stats.spawn, Vec2::new(100.0, 285.0));
        assert_eq!(stats.spawn.y, stats.ground_y);
    }
}
