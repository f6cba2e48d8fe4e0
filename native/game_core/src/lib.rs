//! Path: native/game_core/src/lib.rs
//! Summary: ゲームコア共通ロジック（定数・カタログ・エンティティプール・物理プリミティブ）

pub mod boss;
pub mod constants;
pub mod enemy;
pub mod entity_params;
pub mod item;
pub mod passive;
pub mod physics;
pub mod pool;
pub mod upgrade;
pub mod util;
pub mod weapon;
