//! Simulation constants and tuning defaults.
//!
//! Rates are per second. The browser build advanced everything once per
//! rendered frame; the values below are those per-frame figures scaled to
//! a 60 Hz fixed timestep.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Map ---

/// Half-width of the square map (units from origin to edge).
pub const MAP_SIZE: f64 = 60.0;

/// Inset from the map edge that players and bots cannot cross.
pub const MAP_EDGE_MARGIN: f64 = 5.0;

/// Bullets above this height are out of bounds.
pub const BULLET_CEILING: f64 = 50.0;

// --- Player ---

/// Maximum (and starting) health for players and bots.
pub const MAX_HEALTH: u32 = 100;

/// Camera height when standing on the ground.
pub const PLAYER_EYE_HEIGHT: f64 = 2.0;

/// Walking speed (units/s).
pub const PLAYER_MOVE_SPEED: f64 = 7.2;

/// Initial upward speed of a jump (units/s).
pub const PLAYER_JUMP_SPEED: f64 = 12.0;

/// Downward acceleration while airborne (units/s²).
pub const GRAVITY: f64 = 36.0;

/// Radius around the eye position that bot bullets must reach.
pub const PLAYER_HIT_RADIUS: f64 = 1.0;

/// Distance in front of the eye where player bullets spawn.
pub const PLAYER_MUZZLE_OFFSET: f64 = 1.0;

/// Pitch limit so the look direction never becomes vertical.
pub const PLAYER_PITCH_LIMIT: f64 = std::f64::consts::FRAC_PI_2 - 0.01;

// --- Bots ---

/// Bots spawned per match.
pub const BOT_COUNT: usize = 4;

/// Body colours, indexed by bot id.
pub const BOT_COLORS: [&str; BOT_COUNT] = ["#ff5555", "#5555ff", "#55ff55", "#ffff55"];

/// Body radius, also the hit radius for player bullets.
pub const BOT_SIZE: f64 = 1.0;

/// Height bots spawn (and stay) at.
pub const BOT_SPAWN_HEIGHT: f64 = 0.5;

/// Minimum spawn distance from the origin.
pub const BOT_SPAWN_DISTANCE_MIN: f64 = 15.0;

/// Maximum spawn distance from the origin.
pub const BOT_SPAWN_DISTANCE_MAX: f64 = 20.0;

/// Seconds between steering refreshes.
pub const BOT_AI_REFRESH_SECS: f64 = 0.5;

/// Weight of the to-player direction in the steering blend.
pub const BOT_STEER_PLAYER_WEIGHT: f64 = 0.7;

/// Full width of the per-axis steering jitter.
pub const BOT_STEER_JITTER: f64 = 0.5;

/// Slowest bot speed (units/s), used when right next to the player.
pub const BOT_SPEED_BASE: f64 = 1.2;

/// Fastest bot speed (units/s).
pub const BOT_SPEED_MAX: f64 = 2.4;

/// Distance over which bot speed ramps from base toward max.
pub const BOT_SPEED_RAMP_DISTANCE: f64 = 30.0;

/// Cap on the speed ramp fraction.
pub const BOT_SPEED_RAMP_CAP: f64 = 0.8;

/// Baseline firing rate (expected shots per second).
pub const BOT_FIRE_RATE_BASE: f64 = 0.12;

/// Extra firing rate at point-blank range, fading out by
/// `BOT_FIRE_PROXIMITY_RANGE`.
pub const BOT_FIRE_RATE_BONUS: f64 = 0.3;

/// Range beyond which bots get no proximity firing bonus.
pub const BOT_FIRE_PROXIMITY_RANGE: f64 = 25.0;

/// Aim error per axis at 10 units, grows linearly with distance.
pub const BOT_AIM_SPREAD: f64 = 0.1;

/// Distance unit the aim spread is expressed against.
pub const BOT_AIM_SPREAD_DISTANCE: f64 = 10.0;

/// Gap between the bot surface and a freshly fired bullet.
pub const BOT_MUZZLE_GAP: f64 = 0.2;

/// Bot bullet speed (units/s).
pub const BOT_BULLET_SPEED: f64 = 48.0;

/// Damage dealt to the player per bot bullet.
pub const BOT_BULLET_DAMAGE: u32 = 10;

// --- Match lifecycle ---

/// Countdown steps before the match goes live.
pub const COUNTDOWN_STEPS: u32 = 3;

/// Seconds per countdown step.
pub const COUNTDOWN_STEP_SECS: f64 = 1.0;

/// How long the "GO!" banner stays up after the match starts.
pub const GO_BANNER_SECS: f64 = 1.0;

/// Banner shown before the first countdown step elapses.
pub const READY_BANNER: &str = "Get Ready!";

/// Banner shown when the countdown finishes.
pub const GO_BANNER: &str = "GO!";

/// Red damage overlay duration after the player is hit.
pub const DAMAGE_FLASH_SECS: f64 = 0.3;

/// Gun recoil animation duration after a shot.
pub const RECOIL_SECS: f64 = 0.05;
