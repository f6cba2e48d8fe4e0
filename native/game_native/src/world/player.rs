//! Path: native/game_native/src/world/player.rs
//! Summary: プレイヤー状態（座標・HP・レベル・経験値・向き・被弾演出の間引き）

use game_core::constants::{PLAYER_MAX_HP, PLAYER_SIZE, PLAYER_SPEED, PLAYER_START_XP_TO_NEXT};
use game_core::util::next_xp_threshold;

/// プレイヤー状態
#[derive(Clone, Debug)]
pub struct PlayerState {
    pub x:       f32,
    pub y:       f32,
    /// 当たり判定半径
    pub size:    f32,
    pub hp:      f32,
    pub max_hp:  f32,
    /// 60Hz 1 ティックあたりの移動量（px）
    pub speed:   f32,
    pub level:   u32,
    pub xp:      u32,
    pub next_xp: u32,
    /// 向き（rad）。Whip / Dagger / Axe が参照する
    pub facing:  f32,
    /// 表示待ちの被ダメージ合計
    pub damage_accumulator:  f32,
    pub last_damage_text_at: Option<f64>,
    pub last_hit_fx_at:      Option<f64>,
}

impl PlayerState {
    pub fn new() -> Self {
        Self {
            x:       0.0,
            y:       0.0,
            size:    PLAYER_SIZE,
            hp:      PLAYER_MAX_HP,
            max_hp:  PLAYER_MAX_HP,
            speed:   PLAYER_SPEED,
            level:   1,
            xp:      0,
            next_xp: PLAYER_START_XP_TO_NEXT,
            facing:  0.0,
            damage_accumulator:  0.0,
            last_damage_text_at: None,
            last_hit_fx_at:      None,
        }
    }

    /// 経験値を加算し、しきい値を超えた回数だけレベルを上げる。
    /// 上がったレベル数を返す（レベルアップ待ちキューへ加算する値）
    pub fn gain_xp(&mut self, amount: u32) -> u32 {
        self.xp += amount;
        let mut gained = 0;
        while self.xp >= self.next_xp {
            self.xp -= self.next_xp;
            self.level += 1;
            self.next_xp = next_xp_threshold(self.next_xp);
            gained += 1;
        }
        gained
    }

    /// 回復（最大 HP で頭打ち）。実際に回復した量を返す
    pub fn heal(&mut self, amount: f32) -> f32 {
        let before = self.hp;
        self.hp = (self.hp + amount.max(0.0)).min(self.max_hp);
        self.hp - before
    }

    /// 被ダメージ（0 で下限）
    pub fn take_damage(&mut self, amount: f32) {
        self.hp = (self.hp - amount).max(0.0);
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0.0
    }

    pub fn hp_ratio(&self) -> f32 {
        if self.max_hp <= 0.0 {
            return 0.0;
        }
        (self.hp / self.max_hp).clamp(0.0, 1.0)
    }

    pub fn xp_ratio(&self) -> f32 {
        if self.next_xp == 0 {
            return 0.0;
        }
        (self.xp as f32 / self.next_xp as f32).clamp(0.0, 1.0)
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new()
    }
}
