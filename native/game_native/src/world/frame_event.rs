//! Path: native/game_native/src/world/frame_event.rs
//! Summary: フレーム内で発生したゲームイベント（UI・ホスト側へ drain される）

use crate::session::SessionResult;
use game_core::boss::BossKind;
use game_core::enemy::EnemyKind;
use game_core::item::ItemKind;
use game_core::upgrade::{UpgradeChoice, UpgradeId};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum FrameEvent {
    EnemyKilled      { enemy_kind: EnemyKind, x: f32, y: f32 },
    /// 間引き表示と同じ単位でまとめた被ダメージ
    PlayerDamaged    { damage: f32 },
    LevelUp          { new_level: u32 },
    /// 選択肢の提示（シミュレーションは一時停止している）
    LevelUpAvailable { choices: Vec<UpgradeChoice> },
    UpgradeApplied   { id: UpgradeId, level: u32 },
    ItemPickup       { item_kind: ItemKind },
    BossSpawned      { boss_kind: BossKind },
    BossDefeated     { boss_kind: BossKind },
    SwarmTriggered   { at_secs: u32, count: usize },
    SessionEnded     { result: SessionResult },
}
