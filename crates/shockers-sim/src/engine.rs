//! Simulation engine for a single match.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `MatchSnapshot`s. Completely headless,
//! so the same seed and command stream always replay the same match.

use std::collections::VecDeque;

use glam::DVec3;
use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use shockers_core::commands::PlayerCommand;
use shockers_core::components::{Look, Player};
use shockers_core::constants::PLAYER_PITCH_LIMIT;
use shockers_core::enums::{EndReason, Key, MatchPhase, WeaponKind};
use shockers_core::events::GameEvent;
use shockers_core::state::{MatchResult, MatchSnapshot};
use shockers_core::tuning::{Tuning, TuningError};
use shockers_core::types::{Position, SimTime};

use crate::match_state::{InputState, MatchState};
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new match.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same match.
    pub seed: u64,
    /// Loadout chosen before the match.
    pub weapon: WeaponKind,
    pub tuning: Tuning,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            weapon: WeaponKind::default(),
            tuning: Tuning::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all match state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    match_state: MatchState,
    tuning: Tuning,
    rng: ChaCha8Rng,
    player: Entity,
    input: InputState,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<GameEvent>,
    next_bullet_sequence: u64,
}

impl SimulationEngine {
    /// Create a new engine. The match starts in the countdown with only the
    /// player in the world. Fails if the tuning does not validate.
    pub fn new(config: SimConfig) -> Result<Self, TuningError> {
        config.tuning.validate()?;

        let mut world = World::new();
        let player = world_setup::spawn_player(&mut world, config.weapon);

        Ok(Self {
            world,
            time: SimTime::default(),
            match_state: MatchState::default(),
            tuning: config.tuning,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            player,
            input: InputState::default(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            next_bullet_sequence: 0,
        })
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the match by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> MatchSnapshot {
        self.process_commands();

        match self.match_state.phase {
            MatchPhase::Countdown => self.run_countdown(),
            MatchPhase::Active => {
                self.run_systems();
                self.time.advance();
            }
            MatchPhase::Paused | MatchPhase::Ended => {}
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            self.player,
            &self.time,
            &self.match_state,
            events,
        )
    }

    /// Get the current match phase.
    pub fn phase(&self) -> MatchPhase {
        self.match_state.phase
    }

    /// Get the current simulation time. Only advances while Active.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// The final result, once the match has ended.
    pub fn result(&self) -> Option<MatchResult> {
        self.match_state.result
    }

    /// Spawn a bullet directly (for tests). Damage and speed follow the
    /// owner: the equipped weapon for the player, tuning for bots.
    #[cfg(test)]
    pub fn spawn_test_bullet(
        &mut self,
        owner: shockers_core::enums::BulletOwner,
        origin: DVec3,
        direction: DVec3,
    ) {
        use shockers_core::components::Weapon;
        use shockers_core::enums::BulletOwner;

        let (speed, damage) = match owner {
            BulletOwner::Player => {
                let kind = self
                    .world
                    .get::<&Weapon>(self.player)
                    .map(|w| w.kind)
                    .unwrap_or_default();
                let profile = shockers_core::weapons::get_profile(kind);
                (profile.bullet_speed, profile.damage)
            }
            BulletOwner::Bot => (self.tuning.bot_bullet_speed, self.tuning.bot_bullet_damage),
        };
        world_setup::spawn_bullet(
            &mut self.world,
            &mut self.next_bullet_sequence,
            owner,
            origin,
            direction.normalize(),
            speed,
            damage,
        );
    }

    /// Overwrite the player's health (for tests).
    #[cfg(test)]
    pub fn set_player_health(&mut self, health: u32) {
        if let Ok(mut stats) = self.world.get::<&mut Player>(self.player) {
            stats.health = health;
        }
    }

    /// Teleport the player (for tests).
    #[cfg(test)]
    pub fn set_player_position(&mut self, position: DVec3) {
        if let Ok(mut pos) = self.world.get::<&mut Position>(self.player) {
            pos.0 = position;
        }
    }

    /// Move a bot (for tests).
    #[cfg(test)]
    pub fn set_bot_position(&mut self, bot_id: u32, position: DVec3) {
        use shockers_core::components::Bot;

        for (_entity, (bot, pos)) in self.world.query_mut::<(&Bot, &mut Position)>() {
            if bot.id == bot_id {
                pos.0 = position;
            }
        }
    }

    /// Overwrite a bot's health (for tests).
    #[cfg(test)]
    pub fn set_bot_health(&mut self, bot_id: u32, health: u32) {
        use shockers_core::components::{Bot, Health};

        for (_entity, (bot, hp)) in self.world.query_mut::<(&Bot, &mut Health)>() {
            if bot.id == bot_id {
                hp.0 = health;
            }
        }
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        if self.match_state.is_over() {
            debug!(?command, "match over, command ignored");
            return;
        }

        match command {
            PlayerCommand::KeyDown { key: Key::Escape } | PlayerCommand::TogglePause => {
                self.toggle_pause();
            }
            PlayerCommand::KeyDown { key } => {
                self.input.held.insert(key);
                if key == Key::Space && self.match_state.phase == MatchPhase::Active {
                    self.input.jump_requested = true;
                }
            }
            PlayerCommand::KeyUp { key } => {
                self.input.held.remove(&key);
            }
            PlayerCommand::Look { yaw, pitch } => {
                if self.match_state.phase == MatchPhase::Paused
                    || !yaw.is_finite()
                    || !pitch.is_finite()
                {
                    debug!(yaw, pitch, "look ignored");
                    return;
                }
                if let Ok(mut look) = self.world.get::<&mut Look>(self.player) {
                    look.yaw = yaw;
                    look.pitch = pitch.clamp(-PLAYER_PITCH_LIMIT, PLAYER_PITCH_LIMIT);
                }
            }
            PlayerCommand::Fire => {
                if self.match_state.phase != MatchPhase::Active {
                    debug!(phase = ?self.match_state.phase, "fire ignored");
                    return;
                }
                systems::shooting::try_fire(
                    &mut self.world,
                    self.player,
                    &mut self.match_state,
                    &mut self.next_bullet_sequence,
                    &mut self.events,
                );
            }
            PlayerCommand::ExitMatch => {
                if self.match_state.phase != MatchPhase::Paused {
                    debug!(phase = ?self.match_state.phase, "exit ignored outside pause menu");
                    return;
                }
                let score = self.player_score();
                if let Some(event) = self.match_state.end(EndReason::PlayerExited, score) {
                    self.events.push(event);
                    info!(score, "player exited match");
                }
            }
        }
    }

    fn toggle_pause(&mut self) {
        match self.match_state.phase {
            MatchPhase::Active => {
                self.match_state.phase = MatchPhase::Paused;
                self.events.push(GameEvent::Paused);
                info!(tick = self.time.tick, "match paused");
            }
            MatchPhase::Paused => {
                self.match_state.phase = MatchPhase::Active;
                self.events.push(GameEvent::Resumed);
                info!(tick = self.time.tick, "match resumed");
            }
            phase => debug!(?phase, "pause toggle ignored"),
        }
    }

    /// Step the pre-match countdown. Bots spawn when it reaches zero.
    fn run_countdown(&mut self) {
        let Some(remaining) = self.match_state.advance_countdown(self.time.dt()) else {
            return;
        };
        self.events.push(GameEvent::CountdownTick { remaining });

        if remaining == 0 {
            world_setup::spawn_bots(&mut self.world, &mut self.rng);
            self.match_state.go_live();
            self.events.push(GameEvent::MatchStarted);
            info!("match started");
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let dt = self.time.dt();

        // 1. Player movement
        systems::player_movement::run(
            &mut self.world,
            self.player,
            &mut self.input,
            &self.tuning,
            dt,
        );
        // 2. Bullets (advance + collision)
        systems::bullets::run(
            &mut self.world,
            self.player,
            &mut self.match_state,
            &self.tuning,
            &mut self.events,
            dt,
        );
        // 3. Bot AI (steer, move, fire)
        if !self.match_state.is_over() {
            let player_position = self.player_position();
            systems::bot_ai::run(
                &mut self.world,
                player_position,
                &self.tuning,
                &mut self.rng,
                &mut self.next_bullet_sequence,
                &mut self.events,
                dt,
            );
        }
        // 4. Cleanup
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
        // 5. Timers
        systems::timers::run(&mut self.world, self.player, &mut self.match_state, dt);

        if let Some(result) = self.match_state.result {
            info!(
                won = result.won,
                score = result.score,
                reason = ?result.reason,
                tick = self.time.tick,
                "match ended"
            );
        }
    }

    fn player_position(&self) -> DVec3 {
        self.world
            .get::<&Position>(self.player)
            .map(|pos| pos.0)
            .unwrap_or_default()
    }

    fn player_score(&self) -> u32 {
        self.world
            .get::<&Player>(self.player)
            .map(|stats| stats.score)
            .unwrap_or_default()
    }
}
