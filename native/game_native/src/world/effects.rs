//! Path: native/game_native/src/world/effects.rs
//! Summary: 表示専用エフェクト（ヒット閃光・ダメージ数値・鞭の軌跡・落雷）
//!
//! シミュレーション結果には影響しない。一時停止中やゲームオーバー後も減衰を続ける。

use game_core::constants::{
    DAMAGE_TEXT_DRIFT, DAMAGE_TEXT_GRAVITY, DAMAGE_TEXT_LIFETIME, DAMAGE_TEXT_RISE, HIT_FX_GROWTH,
    HIT_FX_LIFETIME, LIGHTNING_FX_LIFETIME, WHIP_FX_LIFETIME,
};
use game_core::physics::rng::SimpleRng;
use serde::Serialize;

#[derive(Clone, Copy, Debug, Serialize)]
pub struct HitEffect {
    pub x:        f32,
    pub y:        f32,
    pub size:     f32,
    pub color:    [f32; 4],
    pub life:     f32,
    pub max_life: f32,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct DamageText {
    pub x:        f32,
    pub y:        f32,
    pub vx:       f32,
    pub vy:       f32,
    pub value:    u32,
    pub color:    [f32; 4],
    pub life:     f32,
    pub max_life: f32,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct WhipSwing {
    pub x:        f32,
    pub y:        f32,
    pub angle:    f32,
    pub arc:      f32,
    pub range:    f32,
    pub life:     f32,
    pub max_life: f32,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct LightningStrike {
    pub x:        f32,
    pub y:        f32,
    pub life:     f32,
    pub max_life: f32,
}

/// 表示エフェクトのキュー群（独自の乱数列を持つ）
pub struct VisualEffects {
    pub hits:      Vec<HitEffect>,
    pub texts:     Vec<DamageText>,
    pub whips:     Vec<WhipSwing>,
    pub lightning: Vec<LightningStrike>,
    rng:           SimpleRng,
}

impl VisualEffects {
    pub fn new(seed: u64) -> Self {
        Self {
            hits:      Vec::new(),
            texts:     Vec::new(),
            whips:     Vec::new(),
            lightning: Vec::new(),
            rng:       SimpleRng::new(seed),
        }
    }

    pub fn len(&self) -> usize {
        self.hits.len() + self.texts.len() + self.whips.len() + self.lightning.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn spawn_hit(&mut self, x: f32, y: f32, color: [f32; 4], size: f32) {
        self.hits.push(HitEffect {
            x, y, size, color,
            life:     HIT_FX_LIFETIME,
            max_life: HIT_FX_LIFETIME,
        });
    }

    /// 数値を (x ± 5, y) に出し、左右にランダムに流しながら浮かせる
    pub fn spawn_damage_text(&mut self, x: f32, y: f32, value: u32, color: [f32; 4]) {
        let jitter = self.rng.range(-5.0, 5.0);
        let vx = (self.rng.next_f32() - 0.5) * DAMAGE_TEXT_DRIFT;
        self.texts.push(DamageText {
            x: x + jitter,
            y,
            vx,
            vy:       -DAMAGE_TEXT_RISE,
            value,
            color,
            life:     DAMAGE_TEXT_LIFETIME,
            max_life: DAMAGE_TEXT_LIFETIME,
        });
    }

    pub fn spawn_whip(&mut self, x: f32, y: f32, angle: f32, arc: f32, range: f32) {
        self.whips.push(WhipSwing {
            x, y, angle, arc, range,
            life:     WHIP_FX_LIFETIME,
            max_life: WHIP_FX_LIFETIME,
        });
    }

    pub fn spawn_lightning(&mut self, x: f32, y: f32) {
        self.lightning.push(LightningStrike {
            x, y,
            life:     LIGHTNING_FX_LIFETIME,
            max_life: LIGHTNING_FX_LIFETIME,
        });
    }

    /// 寿命を減らし、尽きたものを取り除く
    pub fn update(&mut self, dt: f32) {
        self.hits.retain_mut(|fx| {
            fx.life -= dt;
            fx.size += HIT_FX_GROWTH * dt;
            fx.life > 0.0
        });
        self.texts.retain_mut(|t| {
            t.life -= dt;
            t.x += t.vx * dt;
            t.y += t.vy * dt;
            t.vy += DAMAGE_TEXT_GRAVITY * dt;
            t.life > 0.0
        });
        self.whips.retain_mut(|w| {
            w.life -= dt;
            w.life > 0.0
        });
        self.lightning.retain_mut(|l| {
            l.life -= dt;
            l.life > 0.0
        });
    }
}
