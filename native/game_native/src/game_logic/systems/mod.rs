//! Path: native/game_native/src/game_logic/systems/mod.rs
//! Summary: フレーム内の各システム

pub(crate) mod damage;
pub(crate) mod effects;
pub(crate) mod enemies;
pub(crate) mod items;
pub(crate) mod leveling;
pub(crate) mod movement;
pub(crate) mod projectiles;
pub(crate) mod spawn;
pub(crate) mod weapons;
