//! Path: native/game_native/src/game_logic/mod.rs
//! Summary: 物理ステップ・Chase AI・イベント drain・各システム

pub(crate) mod chase_ai;
mod events;
mod physics_step;
pub(crate) mod systems;

pub use chase_ai::{
    find_k_nearest_enemies, find_nearest_enemy, find_nearest_enemy_spatial, update_chase_ai,
};
pub(crate) use events::drain_frame_events_inner;
pub(crate) use physics_step::physics_step_inner;
