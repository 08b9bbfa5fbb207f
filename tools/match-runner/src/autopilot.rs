//! Scripted stand-in for a human player: strafes side to side, turns to the
//! nearest live bot and holds the trigger.

use shockers_core::commands::PlayerCommand;
use shockers_core::constants::TICK_RATE;
use shockers_core::enums::{Key, MatchPhase};
use shockers_core::state::{BotView, MatchSnapshot};
use shockers_core::types::yaw_pitch_toward;

/// Ticks spent strafing in one direction before switching.
const STRAFE_TICKS: u64 = 2 * TICK_RATE as u64;

#[derive(Debug, Default)]
pub struct Autopilot {
    strafe: Option<Key>,
}

impl Autopilot {
    /// Commands to queue for the tick after `snapshot`.
    pub fn commands(&mut self, snapshot: &MatchSnapshot) -> Vec<PlayerCommand> {
        if snapshot.phase != MatchPhase::Active {
            return Vec::new();
        }

        let mut commands = Vec::new();

        let want = if (snapshot.time.tick / STRAFE_TICKS) % 2 == 0 {
            Key::A
        } else {
            Key::D
        };
        if self.strafe != Some(want) {
            if let Some(old) = self.strafe.replace(want) {
                commands.push(PlayerCommand::KeyUp { key: old });
            }
            commands.push(PlayerCommand::KeyDown { key: want });
        }

        if let Some(target) = nearest_live_bot(snapshot) {
            let eye = snapshot.player.position;
            let (yaw, pitch) = yaw_pitch_toward((target.position - eye).normalize_or_zero());
            commands.push(PlayerCommand::Look { yaw, pitch });
            commands.push(PlayerCommand::Fire);
        }

        commands
    }
}

pub fn nearest_live_bot(snapshot: &MatchSnapshot) -> Option<&BotView> {
    let eye = snapshot.player.position;
    snapshot
        .bots
        .iter()
        .filter(|b| b.alive)
        .min_by(|a, b| {
            a.position
                .distance_squared(eye)
                .total_cmp(&b.position.distance_squared(eye))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    fn bot(id: u32, position: DVec3, alive: bool) -> BotView {
        BotView {
            id,
            position,
            color: "#ffffff".into(),
            size: 1.0,
            health: if alive { 100 } else { 0 },
            alive,
            look_at: DVec3::ZERO,
        }
    }

    fn active_snapshot(bots: Vec<BotView>) -> MatchSnapshot {
        let mut snapshot = MatchSnapshot {
            phase: MatchPhase::Active,
            bots,
            ..Default::default()
        };
        snapshot.player.position = DVec3::new(0.0, 2.0, 0.0);
        snapshot
    }

    #[test]
    fn test_idle_outside_active_phase() {
        let mut pilot = Autopilot::default();
        let snapshot = MatchSnapshot::default();
        assert!(pilot.commands(&snapshot).is_empty());
    }

    #[test]
    fn test_targets_nearest_live_bot() {
        let snapshot = active_snapshot(vec![
            bot(0, DVec3::new(2.0, 0.5, 0.0), false),
            bot(1, DVec3::new(0.0, 0.5, -10.0), true),
            bot(2, DVec3::new(15.0, 0.5, 0.0), true),
        ]);
        assert_eq!(nearest_live_bot(&snapshot).map(|b| b.id), Some(1));

        let mut pilot = Autopilot::default();
        let commands = pilot.commands(&snapshot);
        assert_eq!(commands.last(), Some(&PlayerCommand::Fire));
        let look = commands
            .iter()
            .find_map(|c| match c {
                PlayerCommand::Look { yaw, pitch } => Some((*yaw, *pitch)),
                _ => None,
            })
            .unwrap();
        assert!(look.0.abs() < 1e-9, "bot straight ahead means zero yaw");
        assert!(look.1 < 0.0, "bot is below eye level");
    }

    #[test]
    fn test_strafe_switches_direction() {
        let mut pilot = Autopilot::default();
        let mut snapshot = active_snapshot(Vec::new());

        let first = pilot.commands(&snapshot);
        assert_eq!(first, vec![PlayerCommand::KeyDown { key: Key::A }]);
        assert!(pilot.commands(&snapshot).is_empty());

        snapshot.time.tick = STRAFE_TICKS;
        let switched = pilot.commands(&snapshot);
        assert_eq!(
            switched,
            vec![
                PlayerCommand::KeyUp { key: Key::A },
                PlayerCommand::KeyDown { key: Key::D },
            ]
        );
    }
}
