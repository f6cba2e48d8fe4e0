//! Path: native/game_core/src/boss.rs
//! Summary: ボス種類（中ボス・最終ボス）の定義

use crate::enemy::EnemyKind;
use crate::entity_params::{BossParams, BOSS_ID_FINAL, BOSS_ID_MID};
use serde::Serialize;

/// ボスの種類。各セッションでそれぞれ 1 回だけ出現する
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum BossKind {
    Mid   = BOSS_ID_MID,
    Final = BOSS_ID_FINAL,
}

impl BossKind {
    /// 出現判定の優先順
    pub const ALL: [BossKind; 2] = [BossKind::Mid, BossKind::Final];

    pub fn params(&self) -> &'static BossParams {
        BossParams::get(*self as u8)
    }

    pub fn enemy_kind(&self) -> EnemyKind {
        match self {
            Self::Mid   => EnemyKind::MidBoss,
            Self::Final => EnemyKind::FinalBoss,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Mid   => "Crimson Warden",
            Self::Final => "Lord of the Night",
        }
    }

    /// 撃破でセッション勝利となるボスか
    pub fn ends_session(&self) -> bool {
        matches!(self, Self::Final)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_follow_discriminant() {
        assert_eq!(BossKind::Mid as u8, BOSS_ID_MID);
        assert_eq!(BossKind::Final as u8, BOSS_ID_FINAL);
        assert!(BossKind::Final.params().max_hp > BossKind::Mid.params().max_hp);
    }

    #[test]
    fn triggers_are_ordered() {
        assert!((BossKind::Mid.params().trigger_secs - 30.0).abs() < 0.001);
        assert!((BossKind::Final.params().trigger_secs - 60.0).abs() < 0.001);
        assert!(BossKind::Final.ends_session());
        assert!(!BossKind::Mid.ends_session());
    }
}
