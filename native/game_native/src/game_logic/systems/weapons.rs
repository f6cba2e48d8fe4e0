//! Path: native/game_native/src/game_logic/systems/weapons.rs
//! Summary: 武器 9 種の発射処理（クールダウン判定・ターゲット選択・弾/範囲の生成）

use super::damage::apply_damage_to_enemy;
use crate::game_logic::chase_ai::{find_k_nearest_enemies, find_nearest_enemy_spatial};
use crate::world::{BulletSpawn, GameWorld, HolyPool, ThrownAxe};
use game_core::constants::{
    AXE_LIFETIME, AXE_SPREAD, AXE_THROW_LIFT, AXE_THROW_SPEED, DAGGER_MUZZLE_OFFSET,
    DAGGER_SPREAD, HOLY_POOL_DIST_SPREAD, HOLY_POOL_MIN_DIST, MAX_ENEMY_SIZE, WAND_BOLT_SPEED,
    WAND_MAX_RANGE, WAND_SPREAD,
};
use game_core::util::{dist_sq, random_point_in_annulus, wrap_angle};
use game_core::weapon::WeaponKind;
use std::f32::consts::TAU;

/// 扇状に並べた i 番目の角度オフセット（中央揃え）
#[inline]
fn fan_offset(i: u32, count: u32, spread: f32) -> f32 {
    (i as f32 - (count as f32 - 1.0) / 2.0) * spread
}

/// 所持武器を順に判定して発射する。Orbit はクールダウンを持たず角度だけ進める
///
/// 発射した武器だけ `last_fire` を更新する。ターゲット必須の武器で
/// 対象がいなかった場合はクールダウンを消費しない。
pub(crate) fn update_weapon_attacks(w: &mut GameWorld, now: f64, dt60: f32) {
    let scale = w.passives.cooldown_scale();

    for kind in WeaponKind::ALL {
        if kind == WeaponKind::Orbit {
            advance_orbit(w, dt60);
            continue;
        }
        if !w.arsenal.get(kind).ready(now, scale) {
            continue;
        }

        let fired = match kind {
            WeaponKind::Wand      => fire_wand(w),
            WeaponKind::Garlic    => fire_garlic(w, now),
            WeaponKind::Whip      => fire_whip(w, now),
            WeaponKind::Dagger    => fire_dagger(w),
            WeaponKind::Axe       => fire_axe(w),
            WeaponKind::Lightning => fire_lightning(w, now),
            WeaponKind::Holywater => fire_holywater(w),
            WeaponKind::Frost     => fire_frost(w, now),
            WeaponKind::Orbit     => false,
        };

        if fired {
            w.arsenal.get_mut(kind).last_fire = Some(now);
            log::trace!("weapon fired: {} at {:.0}ms", kind.id(), now);
        }
    }
}

fn advance_orbit(w: &mut GameWorld, dt60: f32) {
    let orbit = w.arsenal.get_mut(WeaponKind::Orbit);
    if orbit.is_owned() {
        orbit.angle = (orbit.angle + orbit.speed * dt60) % TAU;
    }
}

/// 射程 1200 内の最近接へ `count` 発を扇状に撃つ
fn fire_wand(w: &mut GameWorld) -> bool {
    let ws = *w.arsenal.get(WeaponKind::Wand);
    let (px, py) = (w.player.x, w.player.y);
    let Some(target) =
        find_nearest_enemy_spatial(&w.collision, &w.enemies, px, py, WAND_MAX_RANGE, &mut w.query_buf)
    else {
        return false;
    };
    let Some((tx, ty)) = w.enemies.get_at(target).map(|e| (e.x, e.y)) else {
        return false;
    };

    let base = (ty - py).atan2(tx - px);
    for i in 0..ws.count {
        let angle = base + fan_offset(i, ws.count, WAND_SPREAD);
        w.bullets.acquire(BulletSpawn {
            x:      px,
            y:      py,
            vx:     angle.cos() * WAND_BOLT_SPEED,
            vy:     angle.sin() * WAND_BOLT_SPEED,
            damage: ws.damage,
            source: WeaponKind::Wand,
        });
    }
    true
}

/// 半径内の全敵にダメージ。対象がいなくても発動扱い
fn fire_garlic(w: &mut GameWorld, now: f64) -> bool {
    let ws = *w.arsenal.get(WeaponKind::Garlic);
    let (px, py) = (w.player.x, w.player.y);
    let color = WeaponKind::Garlic.hit_color();

    w.collision.query_nearby_into(px, py, ws.radius + MAX_ENEMY_SIZE, &mut w.query_buf);
    for &i in &w.query_buf {
        let Some(e) = w.enemies.get_at_mut(i) else { continue };
        let reach = ws.radius + e.size;
        if dist_sq(e.x, e.y, px, py) < reach * reach {
            apply_damage_to_enemy(e, &mut w.effects, ws.damage, color, now);
        }
    }
    true
}

/// 向いている方向の扇形を薙ぐ
fn fire_whip(w: &mut GameWorld, now: f64) -> bool {
    let ws = *w.arsenal.get(WeaponKind::Whip);
    let (px, py) = (w.player.x, w.player.y);
    let facing = w.player.facing;
    let half_arc = ws.arc / 2.0;
    let color = WeaponKind::Whip.hit_color();

    w.collision.query_nearby_into(px, py, ws.range + MAX_ENEMY_SIZE, &mut w.query_buf);
    for &i in &w.query_buf {
        let Some(e) = w.enemies.get_at_mut(i) else { continue };
        let reach = ws.range + e.size;
        if dist_sq(e.x, e.y, px, py) > reach * reach {
            continue;
        }
        let diff = wrap_angle((e.y - py).atan2(e.x - px) - facing);
        if diff.abs() <= half_arc {
            apply_damage_to_enemy(e, &mut w.effects, ws.damage, color, now);
        }
    }
    w.effects.spawn_whip(px, py, facing, ws.arc, ws.range);
    true
}

fn fire_dagger(w: &mut GameWorld) -> bool {
    let ws = *w.arsenal.get(WeaponKind::Dagger);
    let facing = w.player.facing;
    let sx = w.player.x + facing.cos() * DAGGER_MUZZLE_OFFSET;
    let sy = w.player.y + facing.sin() * DAGGER_MUZZLE_OFFSET;

    for i in 0..ws.count {
        let angle = facing + fan_offset(i, ws.count, DAGGER_SPREAD);
        w.bullets.acquire(BulletSpawn {
            x:      sx,
            y:      sy,
            vx:     angle.cos() * ws.speed,
            vy:     angle.sin() * ws.speed,
            damage: ws.damage,
            source: WeaponKind::Dagger,
        });
    }
    true
}

/// 上向きに放り投げる。以降は重力で落ちる
fn fire_axe(w: &mut GameWorld) -> bool {
    let ws = *w.arsenal.get(WeaponKind::Axe);
    let facing = w.player.facing;

    for i in 0..ws.count {
        let angle = facing + fan_offset(i, ws.count, AXE_SPREAD);
        let rotation = w.rng.next_f32() * TAU;
        w.axes.push(ThrownAxe {
            x:      w.player.x,
            y:      w.player.y,
            vx:     angle.cos() * AXE_THROW_SPEED,
            vy:     angle.sin() * AXE_THROW_SPEED - AXE_THROW_LIFT,
            damage: ws.damage,
            life:   AXE_LIFETIME,
            rotation,
        });
    }
    true
}

fn fire_lightning(w: &mut GameWorld, now: f64) -> bool {
    let ws = *w.arsenal.get(WeaponKind::Lightning);
    let color = WeaponKind::Lightning.hit_color();
    find_k_nearest_enemies(&w.enemies, w.player.x, w.player.y, ws.count as usize, &mut w.query_buf);
    if w.query_buf.is_empty() {
        return false;
    }
    for &i in &w.query_buf {
        let Some(e) = w.enemies.get_at_mut(i) else { continue };
        apply_damage_to_enemy(e, &mut w.effects, ws.damage, color, now);
        w.effects.spawn_lightning(e.x, e.y);
    }
    true
}

/// プレイヤー周囲の円環内ランダム位置に聖水の床を置く
fn fire_holywater(w: &mut GameWorld) -> bool {
    let ws = *w.arsenal.get(WeaponKind::Holywater);
    for _ in 0..ws.count {
        let (x, y) = random_point_in_annulus(
            &mut w.rng, w.player.x, w.player.y, HOLY_POOL_MIN_DIST, HOLY_POOL_DIST_SPREAD,
        );
        w.holy_pools.push(HolyPool {
            x,
            y,
            radius:   ws.radius,
            damage:   ws.damage,
            life:     ws.duration,
            max_life: ws.duration,
            tick:     0.0,
        });
    }
    true
}

/// K 近傍にダメージ + 減速（既存の減速より強い/長い方を残す）
fn fire_frost(w: &mut GameWorld, now: f64) -> bool {
    let ws = *w.arsenal.get(WeaponKind::Frost);
    let color = WeaponKind::Frost.hit_color();
    let t = w.clock.elapsed_secs;
    find_k_nearest_enemies(&w.enemies, w.player.x, w.player.y, ws.count as usize, &mut w.query_buf);
    if w.query_buf.is_empty() {
        return false;
    }
    for &i in &w.query_buf {
        let Some(e) = w.enemies.get_at_mut(i) else { continue };
        apply_damage_to_enemy(e, &mut w.effects, ws.damage, color, now);
        e.slow_until = e.slow_until.max(t + ws.slow_duration);
        e.slow_factor = e.slow_factor.max(ws.slow);
    }
    true
}
