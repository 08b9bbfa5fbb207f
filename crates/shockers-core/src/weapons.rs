//! Per-weapon ballistics.
//!
//! Consolidates the parameters of each selectable loadout.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::enums::WeaponKind;

/// Ballistic profile for a weapon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeaponProfile {
    /// Damage per bullet.
    pub damage: u32,
    /// Minimum seconds between shots.
    pub fire_interval_secs: f64,
    /// Viewmodel kick (cosmetic).
    pub recoil: f64,
    /// Bullet speed (units/s).
    pub bullet_speed: f64,
}

/// Get the ballistic profile for a weapon.
pub fn get_profile(kind: WeaponKind) -> WeaponProfile {
    match kind {
        WeaponKind::Eggk47 => WeaponProfile {
            damage: 25,
            fire_interval_secs: 0.15,
            recoil: 0.02,
            bullet_speed: 48.0,
        },
        WeaponKind::Scrambler => WeaponProfile {
            damage: 15,
            fire_interval_secs: 0.1,
            recoil: 0.01,
            bullet_speed: 54.0,
        },
        WeaponKind::FreeRanger => WeaponProfile {
            damage: 50,
            fire_interval_secs: 0.5,
            recoil: 0.04,
            bullet_speed: 42.0,
        },
    }
}

/// Unrecognised weapon id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown weapon `{0}` (expected eggk-47, scrambler or free-ranger)")]
pub struct ParseWeaponError(pub String);

impl WeaponKind {
    pub const ALL: [WeaponKind; 3] = [
        WeaponKind::Eggk47,
        WeaponKind::Scrambler,
        WeaponKind::FreeRanger,
    ];

    /// Menu id of the weapon.
    pub fn id(self) -> &'static str {
        match self {
            WeaponKind::Eggk47 => "eggk-47",
            WeaponKind::Scrambler => "scrambler",
            WeaponKind::FreeRanger => "free-ranger",
        }
    }
}

impl fmt::Display for WeaponKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for WeaponKind {
    type Err = ParseWeaponError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        WeaponKind::ALL
            .into_iter()
            .find(|kind| kind.id() == needle)
            .ok_or_else(|| ParseWeaponError(s.to_string()))
    }
}
