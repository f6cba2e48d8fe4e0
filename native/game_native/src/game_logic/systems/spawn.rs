//! Path: native/game_native/src/game_logic/systems/spawn.rs
//! Summary: スポーンディレクター（定期スポーン・ボス出現・時刻固定のスウォーム）

use crate::world::{EnemySpawn, FrameEvent, GameWorld};
use game_core::boss::BossKind;
use game_core::constants::{
    COLOR_SWARM, MAX_LIVE_ENEMIES, SWARM_BASE_HP, SWARM_BASE_SPEED, SWARM_ENEMY_SIZE,
    SWARM_HP_PER_SEC, SWARM_RING_RADIUS, SWARM_SIZE, SWARM_SPEED_PER_SEC, SWARM_TRIGGER_SECS,
};
use game_core::enemy::{EnemyKind, EnemyStats};
use game_core::util::{ring_position, spawn_interval_ms, spawn_position_on_view_edge};

/// 定期スポーンタスク本体。次回までの待ち時間（ms）を返す
///
/// セッションが Running / Paused でなければ None を返し、チェーンを止める。
/// Paused 中と上限到達時はスポーンせずに待ち時間だけ返す。
pub(crate) fn run_spawn_tick(w: &mut GameWorld) -> Option<f64> {
    if !w.clock.is_live() {
        log::debug!("spawn chain stopped: phase={:?}", w.clock.phase);
        return None;
    }
    if w.clock.is_running() {
        if w.enemies.len() < MAX_LIVE_ENEMIES {
            spawn_one(w);
        } else {
            log::trace!("spawn skipped: {} live enemies", w.enemies.len());
        }
    }
    Some(spawn_interval_ms(w.clock.elapsed_secs))
}

/// 出現条件を満たした未出現ボス（Mid → Final の順で 1 体）
fn due_boss(w: &GameWorld) -> Option<BossKind> {
    let elapsed = w.clock.elapsed_secs;
    BossKind::ALL
        .into_iter()
        .find(|b| elapsed > b.params().trigger_secs && !w.bosses_spawned.contains(b))
}

fn spawn_one(w: &mut GameWorld) {
    let (x, y) = spawn_position_on_view_edge(
        &mut w.rng, w.camera_x, w.camera_y, w.view_width, w.view_height,
    );
    let civilian = EnemyKind::roll(w.clock.elapsed_secs, &mut w.rng);

    match due_boss(w) {
        Some(boss) => {
            w.bosses_spawned.insert(boss);
            w.spawn_enemy(boss.enemy_kind(), x, y);
            log::info!("boss spawned: {} at {:.1}s", boss.name(), w.clock.elapsed_secs);
            w.frame_events.push(FrameEvent::BossSpawned { boss_kind: boss });
        }
        None => {
            w.spawn_enemy(civilian, x, y);
        }
    }
}

/// 指定時刻を越えたスウォームを 1 回だけ発生させる
pub(crate) fn update_swarms(w: &mut GameWorld) {
    for at in SWARM_TRIGGER_SECS {
        if w.clock.elapsed_secs >= at as f32 && w.swarms_fired.insert(at) {
            spawn_swarm(w, at);
        }
    }
}

/// プレイヤー中心の円周上に高速・低 HP の Bat を等間隔で並べる
fn spawn_swarm(w: &mut GameWorld, at_secs: u32) {
    let t = w.clock.elapsed_secs;
    let stats = EnemyStats {
        size:  SWARM_ENEMY_SIZE,
        hp:    SWARM_BASE_HP + t * SWARM_HP_PER_SEC,
        speed: SWARM_BASE_SPEED + t * SWARM_SPEED_PER_SEC,
        color: COLOR_SWARM,
    };
    for i in 0..SWARM_SIZE {
        let (x, y) = ring_position(w.player.x, w.player.y, SWARM_RING_RADIUS, i, SWARM_SIZE);
        w.enemies.acquire(EnemySpawn { x, y, kind: EnemyKind::Bat, stats });
    }
    log::info!("swarm at {}s: {} bats", at_secs, SWARM_SIZE);
    w.frame_events.push(FrameEvent::SwarmTriggered { at_secs, count: SWARM_SIZE });
}
