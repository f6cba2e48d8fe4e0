//! Path: native/game_native/src/game_logic/chase_ai.rs
//! Summary: 敵 Chase AI（rayon 並列）と最近接・K 近傍探索

use crate::world::EnemyPool;
use game_core::physics::spatial_hash::SpatialHash;
use game_core::util::dist_sq;
use rayon::prelude::*;

/// 最近接の生存敵スロットを返す（全探索）
pub fn find_nearest_enemy(enemies: &EnemyPool, px: f32, py: f32) -> Option<usize> {
    let mut min_dist = f32::MAX;
    let mut nearest  = None;
    for (id, e) in enemies.iter() {
        let d = dist_sq(e.x, e.y, px, py);
        if d < min_dist {
            min_dist = d;
            nearest  = Some(id.index as usize);
        }
    }
    nearest
}

/// Spatial Hash を使った最近接探索。`max_range` より遠い敵は対象外
///
/// 候補はセル単位なので、最後に正確な距離で絞り込む。
pub fn find_nearest_enemy_spatial(
    collision: &SpatialHash,
    enemies: &EnemyPool,
    px: f32,
    py: f32,
    max_range: f32,
    buf: &mut Vec<usize>,
) -> Option<usize> {
    collision.query_nearby_into(px, py, max_range, buf);
    let range_sq = max_range * max_range;
    buf.iter()
        .filter_map(|&i| enemies.get_at(i).map(|e| (i, dist_sq(e.x, e.y, px, py))))
        .filter(|&(_, d)| d <= range_sq)
        .min_by(|(ia, da), (ib, db)| da.total_cmp(db).then(ia.cmp(ib)))
        .map(|(i, _)| i)
}

/// 近い順に最大 `k` 体のスロットを `out` に詰める（全探索）
pub fn find_k_nearest_enemies(
    enemies: &EnemyPool,
    px: f32,
    py: f32,
    k: usize,
    out: &mut Vec<usize>,
) {
    out.clear();
    if k == 0 {
        return;
    }
    let mut ranked: Vec<(f32, usize)> = enemies
        .iter()
        .map(|(id, e)| (dist_sq(e.x, e.y, px, py), id.index as usize))
        .collect();
    let by_dist = |a: &(f32, usize), b: &(f32, usize)| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1));
    if ranked.len() > k {
        ranked.select_nth_unstable_by(k - 1, by_dist);
        ranked.truncate(k);
    }
    ranked.sort_unstable_by(by_dist);
    out.extend(ranked.into_iter().map(|(_, i)| i));
}

/// 全生存敵をプレイヤーへ直進させる（rayon 並列）
///
/// 減速中の敵は `slow_multiplier` 倍の速度で動く。
pub fn update_chase_ai(
    enemies: &mut EnemyPool,
    player_x: f32,
    player_y: f32,
    dt60: f32,
    elapsed_secs: f32,
) {
    enemies
        .slots_mut()
        .par_iter_mut()
        .filter_map(|slot| slot.live_mut())
        .for_each(|e| {
            let dx   = player_x - e.x;
            let dy   = player_y - e.y;
            let dist = (dx * dx + dy * dy).sqrt().max(0.001);
            let step = e.speed * e.slow_multiplier(elapsed_secs) * dt60;
            e.x += (dx / dist) * step;
            e.y += (dy / dist) * step;
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{new_enemy_pool, EnemySpawn};
    use game_core::enemy::EnemyKind;

    fn pool_with(points: &[(f32, f32)]) -> EnemyPool {
        let mut pool = new_enemy_pool();
        for &(x, y) in points {
            let stats = EnemyKind::Skull.stats_at(0.0);
            pool.acquire(EnemySpawn { x, y, kind: EnemyKind::Skull, stats });
        }
        pool
    }

    #[test]
    fn nearest_prefers_closest_live_enemy() {
        let mut pool = pool_with(&[(100.0, 0.0), (30.0, 0.0), (-50.0, 0.0)]);
        assert_eq!(find_nearest_enemy(&pool, 0.0, 0.0), Some(1));
        pool.release_at(1);
        assert_eq!(find_nearest_enemy(&pool, 0.0, 0.0), Some(2));
    }

    #[test]
    fn spatial_nearest_respects_max_range() {
        let pool = pool_with(&[(500.0, 0.0), (900.0, 0.0)]);
        let mut hash = SpatialHash::new(128.0);
        for (id, e) in pool.iter() {
            hash.insert(id.index as usize, e.x, e.y);
        }
        let mut buf = Vec::new();
        assert_eq!(find_nearest_enemy_spatial(&hash, &pool, 0.0, 0.0, 600.0, &mut buf), Some(0));
        assert_eq!(find_nearest_enemy_spatial(&hash, &pool, 0.0, 0.0, 400.0, &mut buf), None);
    }

    #[test]
    fn k_nearest_is_sorted_and_bounded() {
        let pool = pool_with(&[(40.0, 0.0), (10.0, 0.0), (30.0, 0.0), (20.0, 0.0)]);
        let mut out = Vec::new();
        find_k_nearest_enemies(&pool, 0.0, 0.0, 3, &mut out);
        assert_eq!(out, vec![1, 3, 2]);
        find_k_nearest_enemies(&pool, 0.0, 0.0, 10, &mut out);
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn chase_moves_toward_player_at_speed() {
        let mut pool = pool_with(&[(100.0, 0.0)]);
        let speed = pool.get_at(0).map(|e| e.speed).unwrap_or_default();
        update_chase_ai(&mut pool, 0.0, 0.0, 1.0, 0.0);
        let e = pool.get_at(0).expect("enemy");
        assert!((e.x - (100.0 - speed)).abs() < 0.001);
        assert!(e.y.abs() < 0.001);
    }
}
