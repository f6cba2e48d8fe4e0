//! Path: native/game_core/src/passive.rs
//! Summary: パッシブスキル（移動速度・吸血・幸運・クールダウン短縮・磁力）のレベルと補正値

use crate::constants::{COOLDOWN_SCALE_FLOOR, COOLDOWN_SCALE_PER_CDR};
use serde::Serialize;

pub const MAX_PASSIVE_LEVEL: u32 = 5;
pub const PASSIVE_KIND_COUNT: usize = 5;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PassiveKind {
    Speed,
    Lifesteal,
    Luck,
    Cdr,
    MagnetPlus,
}

impl PassiveKind {
    pub const ALL: [PassiveKind; PASSIVE_KIND_COUNT] = [
        PassiveKind::Speed,
        PassiveKind::Lifesteal,
        PassiveKind::Luck,
        PassiveKind::Cdr,
        PassiveKind::MagnetPlus,
    ];

    pub fn index(&self) -> usize {
        match self {
            PassiveKind::Speed      => 0,
            PassiveKind::Lifesteal  => 1,
            PassiveKind::Luck       => 2,
            PassiveKind::Cdr        => 3,
            PassiveKind::MagnetPlus => 4,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            PassiveKind::Speed      => "speed",
            PassiveKind::Lifesteal  => "lifesteal",
            PassiveKind::Luck       => "luck",
            PassiveKind::Cdr        => "cdr",
            PassiveKind::MagnetPlus => "magnetplus",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.id() == id)
    }
}

/// パッシブのレベル表
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PassiveLevels {
    levels: [u32; PASSIVE_KIND_COUNT],
}

impl PassiveLevels {
    pub fn level(&self, kind: PassiveKind) -> u32 {
        self.levels[kind.index()]
    }

    pub fn raise(&mut self, kind: PassiveKind) {
        self.levels[kind.index()] += 1;
    }

    /// 全武器のクールダウン倍率（下限 0.45）
    pub fn cooldown_scale(&self) -> f32 {
        (1.0 - self.level(PassiveKind::Cdr) as f32 * COOLDOWN_SCALE_PER_CDR).max(COOLDOWN_SCALE_FLOOR)
    }

    /// ドロップ率倍率
    pub fn luck_factor(&self) -> f32 {
        1.0 + self.level(PassiveKind::Luck) as f32 * 0.25
    }

    /// 宝石の吸引半径ボーナス（px）
    pub fn magnet_bonus(&self) -> f32 {
        self.level(PassiveKind::MagnetPlus) as f32 * 40.0
    }

    /// 撃破時の回復量。未習得なら 0
    pub fn lifesteal_heal(&self, hp: f32, max_hp: f32) -> f32 {
        let lv = self.level(PassiveKind::Lifesteal);
        if lv == 0 {
            return 0.0;
        }
        (2.0 + lv as f32 * 0.6).min(max_hp - hp).max(0.0)
    }
}
