//! Path: native/game_native/src/world/area.rs
//! Summary: 範囲攻撃の持続オブジェクト（投げ斧・聖水の床）

/// 投げ斧。寿命まで重力で落下し、重なった敵に毎フレームダメージ
#[derive(Clone, Copy, Debug)]
pub struct ThrownAxe {
    pub x:        f32,
    pub y:        f32,
    pub vx:       f32,
    pub vy:       f32,
    pub damage:   f32,
    /// 残り寿命（秒）
    pub life:     f32,
    /// 描画用の回転角
    pub rotation: f32,
}

/// 聖水の床。`tick` が 0 以下になるたびに範囲内の全敵へダメージ
#[derive(Clone, Copy, Debug)]
pub struct HolyPool {
    pub x:        f32,
    pub y:        f32,
    pub radius:   f32,
    pub damage:   f32,
    pub life:     f32,
    pub max_life: f32,
    pub tick:     f32,
}

impl HolyPool {
    /// 描画のフェード用（1 → 0）
    pub fn life_ratio(&self) -> f32 {
        if self.max_life <= 0.0 {
            return 0.0;
        }
        (self.life / self.max_life).clamp(0.0, 1.0)
    }
}
