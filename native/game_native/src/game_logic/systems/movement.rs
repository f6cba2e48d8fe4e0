//! Path: native/game_native/src/game_logic/systems/movement.rs
//! Summary: プレイヤー移動（キー > ジョイスティック > ポインタ追従）とカメラ追従

use crate::world::GameWorld;
use game_core::constants::{JOYSTICK_DEADZONE, SEEK_STOP_DIST_SQ};
use game_core::util::dist_sq;

/// 入力の優先順位: キー → ジョイスティック → ポインタ追従。
/// ジョイスティックが有効ならデッドゾーン内でもポインタ追従には落ちない
pub(crate) fn update_player_movement(w: &mut GameWorld, dt60: f32) {
    let input = w.input;
    let p = &mut w.player;
    let (kx, ky) = input.key_axis();

    if kx != 0.0 || ky != 0.0 {
        let len = (kx * kx + ky * ky).sqrt();
        p.x += kx / len * p.speed * dt60;
        p.y += ky / len * p.speed * dt60;
        p.facing = ky.atan2(kx);
    } else if let Some((jx, jy)) = input.joystick {
        let len = (jx * jx + jy * jy).sqrt();
        if len > JOYSTICK_DEADZONE {
            let strength = len.min(1.0);
            p.x += jx / len * strength * p.speed * dt60;
            p.y += jy / len * strength * p.speed * dt60;
            p.facing = jy.atan2(jx);
        }
    } else if let Some((tx, ty)) = input.seek_target {
        if dist_sq(p.x, p.y, tx, ty) > SEEK_STOP_DIST_SQ {
            let angle = (ty - p.y).atan2(tx - p.x);
            p.x += angle.cos() * p.speed * dt60;
            p.y += angle.sin() * p.speed * dt60;
            p.facing = angle;
        }
    }

    w.camera_x = p.x - w.view_width / 2.0;
    w.camera_y = p.y - w.view_height / 2.0;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputIntent;

    fn world() -> GameWorld {
        GameWorld::new(1, 1280.0, 720.0)
    }

    #[test]
    fn diagonal_keys_are_normalized() {
        let mut w = world();
        w.input = InputIntent { right: true, down: true, ..Default::default() };
        update_player_movement(&mut w, 1.0);
        let moved = (w.player.x.powi(2) + w.player.y.powi(2)).sqrt();
        assert!((moved - w.player.speed).abs() < 0.001);
        assert!((w.player.facing - std::f32::consts::FRAC_PI_4).abs() < 0.001);
    }

    #[test]
    fn keys_override_joystick() {
        let mut w = world();
        w.input = InputIntent { left: true, joystick: Some((1.0, 0.0)), ..Default::default() };
        update_player_movement(&mut w, 1.0);
        assert!(w.player.x < 0.0);
    }

    #[test]
    fn joystick_deadzone_does_not_fall_through_to_seek() {
        let mut w = world();
        w.input = InputIntent {
            joystick: Some((0.05, 0.0)),
            seek_target: Some((500.0, 0.0)),
            ..Default::default()
        };
        update_player_movement(&mut w, 1.0);
        assert_eq!((w.player.x, w.player.y), (0.0, 0.0));
    }

    #[test]
    fn seek_stops_within_ten_px() {
        let mut w = world();
        w.input = InputIntent { seek_target: Some((8.0, 0.0)), ..Default::default() };
        update_player_movement(&mut w, 1.0);
        assert_eq!(w.player.x, 0.0);

        w.input.seek_target = Some((100.0, 0.0));
        update_player_movement(&mut w, 2.0);
        assert!((w.player.x - 2.0 * w.player.speed).abs() < 0.001);
    }

    #[test]
    fn camera_centers_on_player() {
        let mut w = world();
        w.input = InputIntent { up: true, ..Default::default() };
        update_player_movement(&mut w, 1.0);
        assert!((w.camera_x - (w.player.x - 640.0)).abs() < 0.001);
        assert!((w.camera_y - (w.player.y - 360.0)).abs() < 0.001);
    }
}
