//! Path: native/game_native/src/game_logic/systems/projectiles.rs
//! Summary: 弾丸の移動と命中、投げ斧・聖水の床の持続ダメージ

use super::damage::apply_damage_to_enemy;
use crate::world::GameWorld;
use game_core::constants::{
    AXE_GRAVITY, AXE_HIT_PADDING, AXE_SPIN, BULLET_DESPAWN_DIST, BULLET_HIT_PADDING,
    HOLY_POOL_TICK_SECS, MAX_ENEMY_SIZE,
};
use game_core::util::dist_sq;
use game_core::weapon::WeaponKind;

/// 弾丸を進め、プレイヤーから離れすぎたものと命中したものを回収する
///
/// 1 発が当たるのは 1 体だけ。候補が複数なら若いスロットを優先する。
pub(crate) fn update_bullets(w: &mut GameWorld, now: f64, dt60: f32) {
    let (px, py) = (w.player.x, w.player.y);
    let despawn_sq = BULLET_DESPAWN_DIST * BULLET_DESPAWN_DIST;

    for bi in 0..w.bullets.slot_count() {
        let Some(b) = w.bullets.get_at_mut(bi) else { continue };
        b.x += b.vx * dt60;
        b.y += b.vy * dt60;
        let b = *b;

        if dist_sq(b.x, b.y, px, py) > despawn_sq {
            w.bullets.release_at(bi);
            continue;
        }

        w.collision.query_nearby_into(b.x, b.y, MAX_ENEMY_SIZE + BULLET_HIT_PADDING, &mut w.query_buf);
        w.query_buf.sort_unstable();
        let hit = w.query_buf.iter().copied().find(|&ei| {
            w.enemies.get_at(ei).is_some_and(|e| {
                let reach = e.size + BULLET_HIT_PADDING;
                dist_sq(e.x, e.y, b.x, b.y) < reach * reach
            })
        });

        if let Some(ei) = hit {
            if let Some(e) = w.enemies.get_at_mut(ei) {
                apply_damage_to_enemy(e, &mut w.effects, b.damage, b.source.hit_color(), now);
            }
            w.bullets.release_at(bi);
        }
    }
}

/// 投げ斧: 重力で落下しながら重なった敵すべてに毎フレームダメージ
pub(crate) fn update_axes(w: &mut GameWorld, now: f64, dt: f32, dt60: f32) {
    let color = WeaponKind::Axe.hit_color();
    let GameWorld { axes, enemies, collision, effects, query_buf, .. } = w;

    axes.retain_mut(|ax| {
        ax.life -= dt;
        ax.vy += AXE_GRAVITY * dt60 / 60.0;
        ax.x += ax.vx * dt60;
        ax.y += ax.vy * dt60;
        ax.rotation += AXE_SPIN * dt60;
        if ax.life <= 0.0 {
            return false;
        }

        collision.query_nearby_into(ax.x, ax.y, MAX_ENEMY_SIZE + AXE_HIT_PADDING, query_buf);
        for &ei in query_buf.iter() {
            let Some(e) = enemies.get_at_mut(ei) else { continue };
            let reach = e.size + AXE_HIT_PADDING;
            if dist_sq(e.x, e.y, ax.x, ax.y) <= reach * reach {
                apply_damage_to_enemy(e, effects, ax.damage, color, now);
            }
        }
        true
    });
}

/// 聖水の床: 0.22 秒ごとに範囲内の全敵へダメージ
pub(crate) fn update_holy_pools(w: &mut GameWorld, now: f64, dt: f32) {
    let color = WeaponKind::Holywater.hit_color();
    let GameWorld { holy_pools, enemies, collision, effects, query_buf, .. } = w;

    holy_pools.retain_mut(|pool| {
        pool.life -= dt;
        pool.tick -= dt;
        if pool.life <= 0.0 {
            return false;
        }
        if pool.tick > 0.0 {
            return true;
        }
        pool.tick = HOLY_POOL_TICK_SECS;

        collision.query_nearby_into(pool.x, pool.y, pool.radius + MAX_ENEMY_SIZE, query_buf);
        for &ei in query_buf.iter() {
            let Some(e) = enemies.get_at_mut(ei) else { continue };
            let reach = pool.radius + e.size;
            if dist_sq(e.x, e.y, pool.x, pool.y) <= reach * reach {
                apply_damage_to_enemy(e, effects, pool.damage, color, now);
            }
        }
        true
    });
}
