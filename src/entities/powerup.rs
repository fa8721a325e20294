//! Powerup data.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerupKind {
    /// Raises the concurrent-projectile cap by one (bounded).
    ExtraProjectile,
    /// Shorter fire delay and less heat per shot, for a limited time.
    FasterFiring,
    /// Less heat per shot and twice the cooling rate, permanently.
    RapidCooling,
    /// Absorbs incoming hits for a limited time.
    Shield,
}

impl PowerupKind {
    /// Uniform drop table, indexed by a 0..4 roll.
    pub fn from_index(i: u8) -> PowerupKind {
        match i % 4 {
            0 => PowerupKind::ExtraProjectile,
            1 => PowerupKind::FasterFiring,
            2 => PowerupKind::RapidCooling,
            _ => PowerupKind::Shield,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PowerupKind::ExtraProjectile => "EXTRA PROJECTILE",
            PowerupKind::FasterFiring => "FASTER FIRING",
            PowerupKind::RapidCooling => "RAPID COOLING",
            PowerupKind::Shield => "SHIELD",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Powerup {
    pub x: f32,
    pub y: f32,
    pub kind: PowerupKind,
    pub collected: bool,
}
