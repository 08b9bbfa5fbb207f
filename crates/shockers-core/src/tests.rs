#[cfg(test)]
mod tests {
    use glam::DVec3;

    use crate::commands::PlayerCommand;
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::state::MatchSnapshot;
    use crate::tuning::{Tuning, TuningError};
    use crate::types::{look_direction, rotate_about_up, yaw_pitch_toward, Position, SimTime};
    use crate::weapons::{get_profile, ParseWeaponError};

    #[test]
    fn test_command_wire_format_is_tagged() {
        let json = serde_json::to_string(&PlayerCommand::KeyDown { key: Key::W }).unwrap();
        assert_eq!(json, r#"{"type":"KeyDown","key":"W"}"#);

        let parsed: PlayerCommand =
            serde_json::from_str(r#"{"type":"Look","yaw":1.5,"pitch":-0.25}"#).unwrap();
        assert_eq!(
            parsed,
            PlayerCommand::Look {
                yaw: 1.5,
                pitch: -0.25
            }
        );

        let fire: PlayerCommand = serde_json::from_str(r#"{"type":"Fire"}"#).unwrap();
        assert_eq!(fire, PlayerCommand::Fire);
    }

    #[test]
    fn test_match_ended_event_serializes_signal() {
        let event = GameEvent::MatchEnded {
            outcome: MatchOutcome::Won,
            reason: EndReason::AllBotsEliminated,
            score: 4,
        };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["type"], "MatchEnded");
        assert_eq!(value["outcome"], "Won");
        assert_eq!(value["score"], 4);
    }

    #[test]
    fn test_default_snapshot_serializes() {
        let snap = MatchSnapshot::default();
        let json = serde_json::to_string(&snap).unwrap();
        let back: MatchSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.phase, MatchPhase::Countdown);
        assert!(back.result.is_none());
    }

    #[test]
    fn test_end_reason_outcomes() {
        assert_eq!(EndReason::AllBotsEliminated.outcome(), MatchOutcome::Won);
        assert_eq!(EndReason::PlayerKilled.outcome(), MatchOutcome::Lost);
        assert_eq!(EndReason::PlayerExited.outcome(), MatchOutcome::Lost);
    }

    // ---- Geometry ----

    #[test]
    fn test_look_direction_zero_faces_negative_z() {
        let dir = look_direction(0.0, 0.0);
        assert!((dir - DVec3::new(0.0, 0.0, -1.0)).length() < 1e-12);
    }

    #[test]
    fn test_look_direction_is_unit_length() {
        for &(yaw, pitch) in &[(0.3, 0.2), (-2.0, 1.2), (3.0, -0.7)] {
            let dir = look_direction(yaw, pitch);
            assert!((dir.length() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_rotate_forward_matches_flat_look_direction() {
        // Walking "forward" (-z) rotated by yaw must follow the camera.
        let yaw = 0.9;
        let walked = rotate_about_up(DVec3::new(0.0, 0.0, -1.0), yaw);
        let looked = look_direction(yaw, 0.0);
        assert!((walked - looked).length() < 1e-12);
    }

    #[test]
    fn test_yaw_pitch_toward_inverts_look_direction() {
        let (yaw, pitch) = (-1.1, 0.4);
        let (back_yaw, back_pitch) = yaw_pitch_toward(look_direction(yaw, pitch));
        assert!((back_yaw - yaw).abs() < 1e-9);
        assert!((back_pitch - pitch).abs() < 1e-9);
    }

    #[test]
    fn test_position_clamp_horizontal() {
        let mut pos = Position::new(80.0, 7.0, -99.0);
        pos.clamp_horizontal(55.0);
        assert_eq!(pos, Position::new(55.0, 7.0, -55.0));
    }

    #[test]
    fn test_sim_time_sixty_ticks_one_second() {
        let mut time = SimTime::default();
        for _ in 0..TICK_RATE {
            time.advance();
        }
        assert_eq!(time.tick, 60);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-9);
    }

    // ---- Weapons ----

    #[test]
    fn test_default_weapon_matches_base_damage() {
        let profile = get_profile(WeaponKind::default());
        assert_eq!(profile.damage, 25);
        assert!((profile.bullet_speed - 48.0).abs() < 1e-12);
    }

    #[test]
    fn test_weapon_parse() {
        assert_eq!("eggk-47".parse(), Ok(WeaponKind::Eggk47));
        assert_eq!(" Free-Ranger ".parse(), Ok(WeaponKind::FreeRanger));
        assert_eq!(
            "bazooka".parse::<WeaponKind>(),
            Err(ParseWeaponError("bazooka".to_string()))
        );
        for kind in WeaponKind::ALL {
            assert_eq!(kind.to_string().parse(), Ok(kind));
        }
    }

    // ---- Tuning ----

    #[test]
    fn test_tuning_defaults_validate() {
        let tuning = Tuning::default();
        tuning.validate().unwrap();
        assert!((tuning.play_area_half_extent() - 55.0).abs() < 1e-12);
    }

    #[test]
    fn test_tuning_partial_override() {
        let tuning = Tuning::from_json_str(r#"{ "gravity": 20.0, "bot_bullet_damage": 5 }"#)
            .unwrap();
        assert!((tuning.gravity - 20.0).abs() < 1e-12);
        assert_eq!(tuning.bot_bullet_damage, 5);
        assert!((tuning.map_size - MAP_SIZE).abs() < 1e-12);
    }

    #[test]
    fn test_tuning_rejects_malformed_json() {
        let err = Tuning::from_json_str("{ gravity: ").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
    }

    #[test]
    fn test_tuning_rejects_out_of_range() {
        let err = Tuning::from_json_str(r#"{ "gravity": -1.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "gravity", .. }));

        let err = Tuning::from_json_str(r#"{ "map_size": 4.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "map_edge_margin",
                ..
            }
        ));

        let err =
            Tuning::from_json_str(r#"{ "bot_speed_base": 3.0, "bot_speed_max": 2.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "bot_speed_max",
                ..
            }
        ));
    }

    #[test]
    fn test_tuning_missing_file_is_io_error() {
        let err = Tuning::from_path("/definitely/not/here/tuning.json").unwrap_err();
        assert!(matches!(err, TuningError::Io(_)));
    }
}
