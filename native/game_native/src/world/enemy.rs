//! Path: native/game_native/src/world/enemy.rs
//! Summary: 敵レコード（Enemy）と世代付きプール上の敵集合

use game_core::constants::{ENEMY_POOL_RETAIN, ORBIT_MAX_SATELLITES, SLOW_MULTIPLIER_FLOOR};
use game_core::enemy::{EnemyKind, EnemyStats};
use game_core::pool::{EntityPool, Poolable};

/// スポーン時に渡すプロパティ
#[derive(Clone, Copy, Debug)]
pub struct EnemySpawn {
    pub x:     f32,
    pub y:     f32,
    pub kind:  EnemyKind,
    pub stats: EnemyStats,
}

/// 敵 1 体。プールに保持される間も再利用されるため、一時状態は `reset` で必ず消す
#[derive(Clone, Debug)]
pub struct Enemy {
    pub x:      f32,
    pub y:      f32,
    pub size:   f32,
    pub hp:     f32,
    pub max_hp: f32,
    pub speed:  f32,
    pub color:  [f32; 4],
    pub kind:   EnemyKind,
    // ── 一時状態 ──
    pub last_hit_fx_at:      Option<f64>,
    pub last_damage_text_at: Option<f64>,
    /// 未表示のダメージ合計
    pub pending_damage:      f32,
    /// 減速の終了時刻（経過秒）
    pub slow_until:          f32,
    pub slow_factor:         f32,
    /// 衛星ごとの最終ヒット時刻（ms）
    pub orbit_hit_at:        [Option<f64>; ORBIT_MAX_SATELLITES],
}

impl Enemy {
    /// 減速中なら max(0.2, 1 - slow_factor)、それ以外は 1
    pub fn slow_multiplier(&self, elapsed_secs: f32) -> f32 {
        if elapsed_secs < self.slow_until {
            (1.0 - self.slow_factor).max(SLOW_MULTIPLIER_FLOOR)
        } else {
            1.0
        }
    }

    fn clear_transient(&mut self) {
        self.last_hit_fx_at      = None;
        self.last_damage_text_at = None;
        self.pending_damage      = 0.0;
        self.slow_until          = 0.0;
        self.slow_factor         = 0.0;
        self.orbit_hit_at        = [None; ORBIT_MAX_SATELLITES];
    }
}

impl Poolable for Enemy {
    type Props = EnemySpawn;

    fn spawn(props: EnemySpawn) -> Self {
        Self {
            x:      props.x,
            y:      props.y,
            size:   props.stats.size,
            hp:     props.stats.hp,
            max_hp: props.stats.hp,
            speed:  props.stats.speed,
            color:  props.stats.color,
            kind:   props.kind,
            last_hit_fx_at:      None,
            last_damage_text_at: None,
            pending_damage:      0.0,
            slow_until:          0.0,
            slow_factor:         0.0,
            orbit_hit_at:        [None; ORBIT_MAX_SATELLITES],
        }
    }

    fn respawn(&mut self, props: EnemySpawn) {
        self.x      = props.x;
        self.y      = props.y;
        self.size   = props.stats.size;
        self.hp     = props.stats.hp;
        self.max_hp = props.stats.hp;
        self.speed  = props.stats.speed;
        self.color  = props.stats.color;
        self.kind   = props.kind;
        self.clear_transient();
    }

    fn reset(&mut self) {
        self.clear_transient();
    }
}

pub type EnemyPool = EntityPool<Enemy>;

pub fn new_enemy_pool() -> EnemyPool {
    EntityPool::new(ENEMY_POOL_RETAIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skull(x: f32, y: f32) -> EnemySpawn {
        EnemySpawn { x, y, kind: EnemyKind::Skull, stats: EnemyKind::Skull.stats_at(0.0) }
    }

    #[test]
    fn reused_enemy_carries_no_combat_state() {
        let mut pool = new_enemy_pool();
        let id = pool.acquire(skull(0.0, 0.0));
        if let Some(e) = pool.get_mut(id) {
            e.last_hit_fx_at = Some(100.0);
            e.last_damage_text_at = Some(100.0);
            e.pending_damage = 12.0;
            e.slow_until = 9.0;
            e.slow_factor = 0.5;
            e.orbit_hit_at[2] = Some(50.0);
        }
        pool.release(id);

        let id2 = pool.acquire(skull(5.0, 6.0));
        assert_eq!(id2.index, id.index);
        let e = pool.get(id2).cloned();
        let Some(e) = e else { panic!("reacquired enemy missing") };
        assert_eq!((e.x, e.y), (5.0, 6.0));
        assert!(e.last_hit_fx_at.is_none());
        assert!(e.last_damage_text_at.is_none());
        assert_eq!(e.pending_damage, 0.0);
        assert_eq!(e.slow_until, 0.0);
        assert_eq!(e.slow_factor, 0.0);
        assert!(e.orbit_hit_at.iter().all(Option::is_none));
        assert!((e.hp - e.max_hp).abs() < 0.001);
    }

    #[test]
    fn slow_multiplier_has_floor_and_expires() {
        let mut pool = new_enemy_pool();
        let id = pool.acquire(skull(0.0, 0.0));
        let Some(e) = pool.get_mut(id) else { panic!("enemy missing") };
        e.slow_until = 2.0;
        e.slow_factor = 0.95;
        assert!((e.slow_multiplier(1.0) - 0.2).abs() < 0.001);
        assert!((e.slow_multiplier(2.0) - 1.0).abs() < 0.001);
    }
}
