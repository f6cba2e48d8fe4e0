//! Path: native/game_native/src/world/loot.rs
//! Summary: 経験値宝石とドロップアイテム

use game_core::item::{GemTier, ItemKind};

#[derive(Clone, Copy, Debug)]
pub struct Gem {
    pub x:        f32,
    pub y:        f32,
    pub tier:     GemTier,
    pub value:    u32,
    pub size:     f32,
    /// 磁石アイテムで吸引状態になった宝石は距離に関係なく寄ってくる
    pub magnetic: bool,
}

impl Gem {
    pub fn new(x: f32, y: f32, tier: GemTier) -> Self {
        Self { x, y, tier, value: tier.value(), size: tier.size(), magnetic: false }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Item {
    pub x:    f32,
    pub y:    f32,
    pub kind: ItemKind,
}
