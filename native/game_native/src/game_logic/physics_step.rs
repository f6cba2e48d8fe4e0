//! Path: native/game_native/src/game_logic/physics_step.rs
//! Summary: 1 フレーム分のシミュレーション（順序固定）

use super::systems::effects::update_visual_effects;
use super::systems::enemies::update_enemies;
use super::systems::items::{update_gems, update_items};
use super::systems::leveling::trigger_level_up;
use super::systems::movement::update_player_movement;
use super::systems::projectiles::{update_axes, update_bullets, update_holy_pools};
use super::systems::spawn::update_swarms;
use super::systems::weapons::update_weapon_attacks;
use crate::world::{FrameDelta, GameWorld};
use game_core::constants::FRAME_BUDGET_MS;

/// フレームステップ本体。`now` はホストのタイムスタンプ（ms）
///
/// NotStarted / Over / Paused ではエフェクトの寿命だけ進める。
/// レベルアップ待ちがあるフレームは一時停止して選択肢を出すだけで終わる。
pub(crate) fn physics_step_inner(w: &mut GameWorld, now: f64) {
    // trace にしておき、RUST_LOG=trace のときだけ毎フレーム出力
    log::trace!("physics_step: now={:.1}ms frame_id={}", now, w.frame_id);
    let t_start = std::time::Instant::now();

    w.frame_id += 1;
    let FrameDelta { dt, dt60 } = w.clock.advance(now);

    if w.clock.is_running() {
        if w.pending_level_ups > 0 {
            trigger_level_up(w);
            return;
        }
        simulate(w, now, dt, dt60);
    }

    update_visual_effects(w, dt);

    let elapsed_ms = t_start.elapsed().as_secs_f64() * 1000.0;
    w.last_step_time_ms = elapsed_ms;
    if elapsed_ms > FRAME_BUDGET_MS {
        log::warn!(
            "frame budget exceeded: {:.2}ms (enemies: {}, bullets: {})",
            elapsed_ms,
            w.enemies.len(),
            w.bullets.len()
        );
    }
}

fn simulate(w: &mut GameWorld, now: f64, dt: f32, dt60: f32) {
    // ── 経過時間とスウォーム ────────────────────────────────────
    w.clock.elapsed_secs += dt;
    update_swarms(w);

    // ── 移動 + カメラ ───────────────────────────────────────────
    update_player_movement(w, dt60);

    // ── 武器（Spatial Hash はここで 1 回だけ再構築）────────────
    w.rebuild_collision();
    update_weapon_attacks(w, now, dt60);

    // ── 弾丸・投げ斧・聖水 ──────────────────────────────────────
    update_bullets(w, now, dt60);
    update_axes(w, now, dt, dt60);
    update_holy_pools(w, now, dt);

    // ── ルート ──────────────────────────────────────────────────
    update_items(w);
    update_gems(w);

    // ── 敵（Orbit 接触・撃破・追跡・接触ダメージ）──────────────
    update_enemies(w, now, dt60);
}
