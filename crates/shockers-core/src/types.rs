//! Fundamental geometric and simulation types.
//!
//! Axes follow the renderer's camera space: `y` is up, the ground plane
//! is `x`/`z`.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// World-space position in map units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub DVec3);

/// World-space velocity in map units per second.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub DVec3);

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each Active tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z))
    }

    /// Clamp `x` and `z` into the square `[-half_extent, half_extent]`.
    pub fn clamp_horizontal(&mut self, half_extent: f64) {
        self.0.x = self.0.x.clamp(-half_extent, half_extent);
        self.0.z = self.0.z.clamp(-half_extent, half_extent);
    }
}

impl SimTime {
    /// Seconds per tick.
    pub fn dt(&self) -> f64 {
        crate::constants::DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}

/// Unit vector the camera looks along for the given yaw and pitch.
///
/// Yaw rotates about `+y` with zero facing `-z`; positive pitch looks up.
pub fn look_direction(yaw: f64, pitch: f64) -> DVec3 {
    let (sin_yaw, cos_yaw) = yaw.sin_cos();
    let (sin_pitch, cos_pitch) = pitch.sin_cos();
    DVec3::new(-sin_yaw * cos_pitch, sin_pitch, -cos_yaw * cos_pitch)
}

/// Rotate a ground-plane vector about `+y` by `yaw` radians.
pub fn rotate_about_up(v: DVec3, yaw: f64) -> DVec3 {
    let (sin_yaw, cos_yaw) = yaw.sin_cos();
    DVec3::new(
        v.x * cos_yaw + v.z * sin_yaw,
        v.y,
        -v.x * sin_yaw + v.z * cos_yaw,
    )
}

/// Inverse of [`look_direction`]: yaw and pitch that face along `dir`.
pub fn yaw_pitch_toward(dir: DVec3) -> (f64, f64) {
    let dir = dir.normalize_or_zero();
    let yaw = (-dir.x).atan2(-dir.z);
    let pitch = dir.y.clamp(-1.0, 1.0).asin();
    (yaw, pitch)
}
