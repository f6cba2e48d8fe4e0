//! Path: native/game_native/src/game_logic/systems/effects.rs
//! Summary: 演出エフェクトの寿命更新（一時停止中・終了後も進める）

use crate::world::GameWorld;

pub(crate) fn update_visual_effects(w: &mut GameWorld, dt: f32) {
    w.effects.update(dt);
}
