//! Path: native/game_native/src/game_logic/systems/enemies.rs
//! Summary: 敵パス（Orbit 接触 → 撃破処理 → Chase AI → 接触ダメージ）

use super::damage::{apply_contact_damage_to_player, apply_damage_to_enemy};
use crate::game_logic::chase_ai::update_chase_ai;
use crate::world::{FrameEvent, GameWorld, Gem, Item};
use game_core::constants::{
    BOSS_GEM_COUNT, BOSS_GEM_JITTER, BOSS_TOKEN_OFFSET_X, ORBIT_HIT_COOLDOWN_MS,
    ORBIT_HIT_PADDING, ORBIT_KNOCKBACK, ORBIT_MAX_SATELLITES, ORBIT_RADIUS,
};
use game_core::item::{GemTier, ItemKind};
use game_core::util::dist_sq;
use game_core::weapon::WeaponKind;
use std::f32::consts::TAU;

/// 敵パス本体。セッションが終わったら即座に打ち切る
pub(crate) fn update_enemies(w: &mut GameWorld, now: f64, dt60: f32) {
    if resolve_orbit_and_deaths(w, now) {
        return;
    }

    let (px, py) = (w.player.x, w.player.y);
    update_chase_ai(&mut w.enemies, px, py, dt60, w.clock.elapsed_secs);

    resolve_contact_damage(w, now, dt60);
}

/// 衛星の現在位置（プレイヤー中心）
pub(crate) fn orbit_satellites(w: &GameWorld) -> impl Iterator<Item = (usize, f32, f32, f32)> + '_ {
    let orbit = w.arsenal.get(WeaponKind::Orbit);
    let count = if orbit.is_owned() { orbit.count as usize } else { 0 };
    let step = TAU / count.max(1) as f32;
    (0..count.min(ORBIT_MAX_SATELLITES)).map(move |k| {
        let angle = orbit.angle + step * k as f32;
        (k, angle, w.player.x + angle.cos() * ORBIT_RADIUS, w.player.y + angle.sin() * ORBIT_RADIUS)
    })
}

/// Orbit 接触ダメージと撃破判定（逐次）。勝敗が確定したら true
fn resolve_orbit_and_deaths(w: &mut GameWorld, now: f64) -> bool {
    let satellites: Vec<_> = orbit_satellites(w).collect();
    let damage = w.arsenal.get(WeaponKind::Orbit).damage;
    let color = WeaponKind::Orbit.hit_color();

    for i in 0..w.enemies.slot_count() {
        let Some(e) = w.enemies.get_at_mut(i) else { continue };

        for &(k, angle, sx, sy) in &satellites {
            let reach = e.size + ORBIT_HIT_PADDING;
            if dist_sq(e.x, e.y, sx, sy) >= reach * reach {
                continue;
            }
            if e.orbit_hit_at[k].is_some_and(|t| now - t <= ORBIT_HIT_COOLDOWN_MS) {
                continue;
            }
            e.orbit_hit_at[k] = Some(now);
            apply_damage_to_enemy(e, &mut w.effects, damage, color, now);
            e.x += angle.cos() * ORBIT_KNOCKBACK;
            e.y += angle.sin() * ORBIT_KNOCKBACK;
        }

        if e.hp <= 0.0 && handle_enemy_death(w, i) {
            return true;
        }
    }
    false
}

/// 撃破処理。最終ボスならセッション勝利で true を返す
fn handle_enemy_death(w: &mut GameWorld, index: usize) -> bool {
    let Some(e) = w.enemies.get_at(index) else { return false };
    let (x, y, kind) = (e.x, e.y, e.kind);
    w.frame_events.push(FrameEvent::EnemyKilled { enemy_kind: kind, x, y });

    if let Some(boss) = kind.boss() {
        log::info!("boss defeated: {} at {:.1}s", boss.name(), w.clock.elapsed_secs);
        w.frame_events.push(FrameEvent::BossDefeated { boss_kind: boss });
        if boss.ends_session() {
            w.enemies.release_at(index);
            w.finish_session(true);
            return true;
        }
    }

    let tier = GemTier::at(w.clock.elapsed_secs);
    if kind.is_boss() {
        for _ in 0..BOSS_GEM_COUNT {
            let gx = x + w.rng.range(-BOSS_GEM_JITTER, BOSS_GEM_JITTER);
            let gy = y + w.rng.range(-BOSS_GEM_JITTER, BOSS_GEM_JITTER);
            w.gems.push(Gem::new(gx, gy, tier));
        }
        w.items.push(Item { x, y, kind: ItemKind::Magnet });
        w.items.push(Item { x: x + BOSS_TOKEN_OFFSET_X, y, kind: ItemKind::LevelUp });
    } else {
        w.gems.push(Gem::new(x, y, tier));
        let roll = w.rng.next_f32();
        if let Some(drop) = ItemKind::roll_drop(roll, w.passives.luck_factor()) {
            w.items.push(Item { x, y, kind: drop });
        }
    }

    let heal = w.passives.lifesteal_heal(w.player.hp, w.player.max_hp);
    w.player.heal(heal);
    w.score += 1;
    w.enemies.release_at(index);
    false
}

/// 接触中の敵 1 体につき dt60 ダメージ。HP が尽きたら敗北
fn resolve_contact_damage(w: &mut GameWorld, now: f64, dt60: f32) {
    for i in 0..w.enemies.slot_count() {
        let Some(e) = w.enemies.get_at(i) else { continue };
        let reach = w.player.size + e.size;
        if dist_sq(e.x, e.y, w.player.x, w.player.y) >= reach * reach {
            continue;
        }
        if let Some(shown) = apply_contact_damage_to_player(&mut w.player, &mut w.effects, dt60, now) {
            w.frame_events.push(FrameEvent::PlayerDamaged { damage: shown });
        }
        if w.player.is_dead() {
            w.finish_session(false);
            return;
        }
    }
}
