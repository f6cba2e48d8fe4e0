//! Path: native/game_native/src/input.rs
//! Summary: 正規化済みの入力意図（キー・ジョイスティック・ポインタ追従先）

use serde::{Deserialize, Serialize};

/// デバイス入力を変換した結果。シミュレーションは読むだけ
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InputIntent {
    pub up:          bool,
    pub down:        bool,
    pub left:        bool,
    pub right:       bool,
    /// アクティブなジョイスティックの傾き（各軸 -1..=1）
    pub joystick:    Option<(f32, f32)>,
    /// ポインタ / タッチの追従先（ワールド座標）
    pub seek_target: Option<(f32, f32)>,
}

impl InputIntent {
    /// キー入力の合成方向（未正規化）。押されていなければ (0, 0)
    pub fn key_axis(&self) -> (f32, f32) {
        let x = (self.right as i32 - self.left as i32) as f32;
        let y = (self.down as i32 - self.up as i32) as f32;
        (x, y)
    }
}
