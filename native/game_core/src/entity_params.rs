//! Path: native/game_core/src/entity_params.rs
//! Summary: 敵・ボスの種別ごとのパラメータテーブル
//!
//! 通常敵は経過時間から算出した基礎ステータスに倍率を掛け、ボスは固定値を使う。

/// 通常敵のパラメータ（基礎 hp / speed に掛ける倍率）
#[derive(Clone, Copy, Debug)]
pub struct EnemyParams {
    pub hp_mul:      f32,
    pub speed_mul:   f32,
    pub render_kind: u8,
    /// 描画色 [r, g, b, a]
    pub color:       [f32; 4],
}

pub const ENEMY_ID_SKULL: u8 = 0;
pub const ENEMY_ID_BAT:   u8 = 1;
pub const ENEMY_ID_DEMON: u8 = 2;

static ENEMY_TABLE: [EnemyParams; 3] = [
    EnemyParams { hp_mul: 1.0,  speed_mul: 1.0,  render_kind: 1, color: [1.0,  0.32, 0.32, 1.0] }, // Skull
    EnemyParams { hp_mul: 0.75, speed_mul: 1.35, render_kind: 2, color: [0.73, 0.54, 1.0,  1.0] }, // Bat
    EnemyParams { hp_mul: 1.8,  speed_mul: 0.9,  render_kind: 3, color: [0.85, 0.29, 0.48, 1.0] }, // Demon
];

impl EnemyParams {
    /// 範囲外の ID は Skull 扱い
    pub fn get(id: u8) -> &'static EnemyParams {
        ENEMY_TABLE.get(id as usize).unwrap_or(&ENEMY_TABLE[0])
    }
}

// ─── BossParams ───────────────────────────────────────────────

/// ボスのパラメータ
#[derive(Clone, Copy, Debug)]
pub struct BossParams {
    pub size:         f32,
    pub max_hp:       f32,
    pub speed:        f32,
    /// この経過秒を超えたスポーンティックで出現する
    pub trigger_secs: f32,
    pub render_kind:  u8,
    pub color:        [f32; 4],
}

pub const BOSS_ID_MID:   u8 = 0;
pub const BOSS_ID_FINAL: u8 = 1;

static BOSS_TABLE: [BossParams; 2] = [
    BossParams { size: 60.0,  max_hp: 1000.0, speed: 2.5, trigger_secs: 30.0, render_kind: 11, color: [1.0, 0.0, 1.0, 1.0] }, // Mid
    BossParams { size: 100.0, max_hp: 5000.0, speed: 1.5, trigger_secs: 60.0, render_kind: 12, color: [1.0, 0.0, 0.0, 1.0] }, // Final
];

impl BossParams {
    pub fn get(id: u8) -> &'static BossParams {
        BOSS_TABLE.get(id as usize).unwrap_or(&BOSS_TABLE[0])
    }
}
