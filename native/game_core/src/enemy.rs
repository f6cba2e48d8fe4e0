//! Path: native/game_core/src/enemy.rs
//! Summary: 敵種類・時間スケールのステータス・スポーン抽選の共通定義

use crate::boss::BossKind;
use crate::constants::{
    BAT_ROLL_CHANCE, DEMON_ROLL_CHANCE, DEMON_UNLOCK_SECS, ENEMY_BASE_HP, ENEMY_BASE_SPEED,
    ENEMY_HP_PER_SEC, ENEMY_SIZE, ENEMY_SPEED_PER_SEC,
};
use crate::entity_params::{EnemyParams, ENEMY_ID_BAT, ENEMY_ID_DEMON, ENEMY_ID_SKULL};
use crate::physics::rng::SimpleRng;
use serde::Serialize;

/// 敵の種類（通常 3 種 + ボス 2 種）
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyKind {
    /// 標準
    #[default]
    Skull,
    /// 速くて脆い
    Bat,
    /// 硬くて遅い（DEMON_UNLOCK_SECS 以降）
    Demon,
    MidBoss,
    FinalBoss,
}

/// スポーン時のステータス
#[derive(Clone, Copy, Debug)]
pub struct EnemyStats {
    pub size:  f32,
    pub hp:    f32,
    pub speed: f32,
    pub color: [f32; 4],
}

impl EnemyKind {
    pub fn is_boss(&self) -> bool {
        self.boss().is_some()
    }

    pub fn boss(&self) -> Option<BossKind> {
        match self {
            Self::MidBoss   => Some(BossKind::Mid),
            Self::FinalBoss => Some(BossKind::Final),
            Self::Skull | Self::Bat | Self::Demon => None,
        }
    }

    fn civilian_id(&self) -> u8 {
        match self {
            Self::Bat   => ENEMY_ID_BAT,
            Self::Demon => ENEMY_ID_DEMON,
            _           => ENEMY_ID_SKULL,
        }
    }

    pub fn render_kind(&self) -> u8 {
        match self.boss() {
            Some(boss) => boss.params().render_kind,
            None => EnemyParams::get(self.civilian_id()).render_kind,
        }
    }

    /// 経過時間 `elapsed_secs` でスポーンする場合のステータス
    pub fn stats_at(&self, elapsed_secs: f32) -> EnemyStats {
        if let Some(boss) = self.boss() {
            let p = boss.params();
            return EnemyStats { size: p.size, hp: p.max_hp, speed: p.speed, color: p.color };
        }
        let p = EnemyParams::get(self.civilian_id());
        EnemyStats {
            size:  ENEMY_SIZE,
            hp:    (ENEMY_BASE_HP + elapsed_secs * ENEMY_HP_PER_SEC) * p.hp_mul,
            speed: (ENEMY_BASE_SPEED + elapsed_secs * ENEMY_SPEED_PER_SEC) * p.speed_mul,
            color: p.color,
        }
    }

    /// 通常敵の抽選。Demon は解禁後のみ、残りを Bat / Skull で分ける
    pub fn roll(elapsed_secs: f32, rng: &mut SimpleRng) -> Self {
        let roll = rng.next_f32();
        if elapsed_secs > DEMON_UNLOCK_SECS && roll < DEMON_ROLL_CHANCE {
            Self::Demon
        } else if roll < BAT_ROLL_CHANCE {
            Self::Bat
        } else {
            Self::Skull
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_scale_with_elapsed_time() {
        let s0 = EnemyKind::Skull.stats_at(0.0);
        assert!((s0.hp - 10.0).abs() < 0.001);
        assert!((s0.speed - 2.0).abs() < 0.001);
        let s60 = EnemyKind::Skull.stats_at(60.0);
        assert!((s60.hp - 40.0).abs() < 0.001);
        assert!((s60.speed - 3.2).abs() < 0.001);
    }

    #[test]
    fn variant_multipliers_apply() {
        let bat = EnemyKind::Bat.stats_at(0.0);
        assert!((bat.hp - 7.5).abs() < 0.001);
        assert!((bat.speed - 2.7).abs() < 0.001);
        let demon = EnemyKind::Demon.stats_at(50.0);
        assert!((demon.hp - 35.0 * 1.8).abs() < 0.001);
        assert!((demon.speed - 3.0 * 0.9).abs() < 0.001);
    }

    #[test]
    fn boss_stats_are_fixed() {
        let s = EnemyKind::FinalBoss.stats_at(500.0);
        assert!((s.hp - 5000.0).abs() < 0.001);
        assert!((s.size - 100.0).abs() < 0.001);
        assert!(EnemyKind::MidBoss.is_boss());
        assert!(!EnemyKind::Demon.is_boss());
    }

    #[test]
    fn no_demons_before_unlock() {
        let mut rng = SimpleRng::new(42);
        for _ in 0..500 {
            assert_ne!(EnemyKind::roll(45.0, &mut rng), EnemyKind::Demon);
        }
        let mut rng = SimpleRng::new(42);
        let demons = (0..500)
            .filter(|_| EnemyKind::roll(46.0, &mut rng) == EnemyKind::Demon)
            .count();
        assert!(demons > 0);
    }
}
