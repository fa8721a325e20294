//! Player data: position, weapon heat, shield and powerup modifiers.

use crate::config;

#[derive(Clone, Debug)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    /// Ticks until the next shot is allowed.
    pub fire_cooldown: u32,
    pub fire_delay: u32,
    pub base_fire_delay: u32,
    pub max_projectiles: usize,
    pub base_max_projectiles: usize,
    /// Weapon heat, 0..=100.
    pub heat: f32,
    /// Heat added per shot.
    pub heat_rate: f32,
    pub base_heat_rate: f32,
    /// Heat drained per tick.
    pub cooling_rate: f32,
    /// Firing is blocked while set; clears when heat drains to 0.
    pub overheated: bool,
    /// While nonzero, heat holds at the maximum; at expiry it drops to the
    /// partial-reset level and normal cooling resumes.
    pub overheat_timer: u32,
    pub cooling_upgraded: bool,
    /// Faster-firing powerup countdown; 0 when inactive.
    pub fast_firing_timer: u32,
    pub shield: bool,
    pub shield_timer: u32,
    /// Rendered bright for a few ticks after the shield absorbs a hit.
    pub shield_flash: u32,
}

impl Player {
    pub fn new(x: i32, y: i32) -> Player {
        Player {
            x,
            y,
            fire_cooldown: 0,
            fire_delay: config::PLAYER_FIRE_DELAY,
            base_fire_delay: config::PLAYER_FIRE_DELAY,
            max_projectiles: config::PLAYER_MAX_PROJECTILES,
            base_max_projectiles: config::PLAYER_MAX_PROJECTILES,
            heat: 0.0,
            heat_rate: config::HEAT_RATE,
            base_heat_rate: config::HEAT_RATE,
            cooling_rate: config::COOLING_RATE,
            overheated: false,
            overheat_timer: 0,
            cooling_upgraded: false,
            fast_firing_timer: 0,
            shield: false,
            shield_timer: 0,
            shield_flash: 0,
        }
    }
}
