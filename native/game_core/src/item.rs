//! Path: native/game_core/src/item.rs
//! Summary: アイテム種類・ドロップ抽選・経験値宝石の時間帯ティア

use crate::constants::{DROP_LEVEL_UP_CHANCE, DROP_MAGNET_CHANCE, DROP_POTION_CHANCE};
use serde::Serialize;

/// アイテムの種類
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum ItemKind {
    Potion  = 0, // 回復（固定量）
    Magnet  = 1, // 全宝石を吸引状態に
    LevelUp = 2, // レベルアップ待ちを直接 +1
}

pub const RENDER_KIND_GEM:      u8 = 5;
pub const RENDER_KIND_POTION:   u8 = 6;
pub const RENDER_KIND_MAGNET:   u8 = 7;
pub const RENDER_KIND_LEVEL_UP: u8 = 8;

impl ItemKind {
    pub fn render_kind(self) -> u8 {
        match self {
            Self::Potion  => RENDER_KIND_POTION,
            Self::Magnet  => RENDER_KIND_MAGNET,
            Self::LevelUp => RENDER_KIND_LEVEL_UP,
        }
    }

    /// 通常敵のドロップ抽選。`roll` は [0, 1)、`luck` は幸運倍率
    pub fn roll_drop(roll: f32, luck: f32) -> Option<Self> {
        if roll < DROP_POTION_CHANCE * luck {
            Some(Self::Potion)
        } else if roll < DROP_MAGNET_CHANCE * luck {
            Some(Self::Magnet)
        } else if roll < DROP_LEVEL_UP_CHANCE * luck {
            Some(Self::LevelUp)
        } else {
            None
        }
    }
}

// ─── GemTier ──────────────────────────────────────────────────

/// 経験値宝石の等級。撃破時点の経過時間で決まる
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GemTier {
    Blue,
    Green,
    Red,
}

impl GemTier {
    pub fn at(elapsed_secs: f32) -> Self {
        if elapsed_secs > 60.0 {
            Self::Red
        } else if elapsed_secs > 30.0 {
            Self::Green
        } else {
            Self::Blue
        }
    }

    pub fn value(self) -> u32 {
        match self {
            Self::Blue  => 1,
            Self::Green => 5,
            Self::Red   => 15,
        }
    }

    pub fn size(self) -> f32 {
        match self {
            Self::Blue  => 6.0,
            Self::Green => 7.0,
            Self::Red   => 8.0,
        }
    }

    pub fn color(self) -> [f32; 4] {
        match self {
            Self::Blue  => [0.27, 0.67, 1.0, 1.0],
            Self::Green => [0.29, 0.98, 0.29, 1.0],
            Self::Red   => [1.0, 0.32, 0.32, 1.0],
        }
    }
}
