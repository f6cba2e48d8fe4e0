//! Path: native/game_native/src/nif/session_nif.rs
//! Summary: セッション NIF（作成・開始・入力・tick・強化選択・HUD・イベント drain）

use super::load::SessionResource;
use super::util::{json_err, lock_poisoned_err, session_err};
use crate::input::InputIntent;
use crate::render_snapshot::build_render_frame;
use crate::session::{GameSession, SessionConfig};
use rustler::{Atom, NifResult, ResourceArc};
use std::sync::RwLock;

use crate::ok;

type Point = Option<(f64, f64)>;

#[rustler::nif]
pub fn create_session(seed: u64, viewport_width: f64, viewport_height: f64) -> ResourceArc<SessionResource> {
    let config = SessionConfig {
        viewport_width:  viewport_width as f32,
        viewport_height: viewport_height as f32,
        seed,
    };
    ResourceArc::new(SessionResource(RwLock::new(GameSession::new(config))))
}

#[rustler::nif]
pub fn start_session(session: ResourceArc<SessionResource>, now: f64) -> NifResult<Atom> {
    let mut s = session.0.write().map_err(|_| lock_poisoned_err())?;
    s.start_session(now);
    Ok(ok())
}

#[rustler::nif]
pub fn return_to_title(session: ResourceArc<SessionResource>) -> NifResult<Atom> {
    let mut s = session.0.write().map_err(|_| lock_poisoned_err())?;
    s.return_to_title();
    Ok(ok())
}

#[rustler::nif]
#[allow(clippy::too_many_arguments)]
pub fn set_input(
    session: ResourceArc<SessionResource>,
    up: bool,
    down: bool,
    left: bool,
    right: bool,
    joystick: Point,
    seek_target: Point,
) -> NifResult<Atom> {
    let mut s = session.0.write().map_err(|_| lock_poisoned_err())?;
    let to_f32 = |p: Point| p.map(|(x, y)| (x as f32, y as f32));
    s.set_input(InputIntent {
        up,
        down,
        left,
        right,
        joystick:    to_f32(joystick),
        seek_target: to_f32(seek_target),
    });
    Ok(ok())
}

/// 1 アニメーションフレーム分進め、frame_id を返す
#[rustler::nif(schedule = "DirtyCpu")]
pub fn tick(session: ResourceArc<SessionResource>, now: f64) -> NifResult<u32> {
    let mut s = session.0.write().map_err(|_| lock_poisoned_err())?;
    s.tick(now);
    Ok(s.world().frame_id)
}

#[rustler::nif]
pub fn select_upgrade(session: ResourceArc<SessionResource>, id: String, now: f64) -> NifResult<Atom> {
    let mut s = session.0.write().map_err(|_| lock_poisoned_err())?;
    s.select_upgrade(&id, now).map_err(session_err)?;
    Ok(ok())
}

/// (score, level, "MM:SS", hp_ratio, xp_ratio)
#[rustler::nif]
pub fn get_hud_data(session: ResourceArc<SessionResource>) -> NifResult<(u32, u32, String, f64, f64)> {
    let s = session.0.read().map_err(|_| lock_poisoned_err())?;
    let hud = s.hud();
    Ok((hud.score, hud.level, hud.time, hud.hp_ratio as f64, hud.xp_ratio as f64))
}

/// 溜まったイベントを JSON 文字列のリストで返す
#[rustler::nif]
pub fn drain_frame_events(session: ResourceArc<SessionResource>) -> NifResult<Vec<String>> {
    let mut s = session.0.write().map_err(|_| lock_poisoned_err())?;
    s.drain_events()
        .iter()
        .map(|e| serde_json::to_string(e).map_err(json_err))
        .collect()
}

#[rustler::nif]
pub fn get_render_frame(session: ResourceArc<SessionResource>) -> NifResult<String> {
    let s = session.0.read().map_err(|_| lock_poisoned_err())?;
    serde_json::to_string(&build_render_frame(s.world())).map_err(json_err)
}

#[rustler::nif]
pub fn get_result(session: ResourceArc<SessionResource>) -> NifResult<Option<String>> {
    let s = session.0.read().map_err(|_| lock_poisoned_err())?;
    s.result().map(|r| serde_json::to_string(r).map_err(json_err)).transpose()
}
