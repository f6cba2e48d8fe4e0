//! Path: native/game_native/src/world/mod.rs
//! Summary: ワールド型（PlayerState, Enemy, Bullet, 範囲攻撃, ルート, エフェクト, GameWorld）

mod area;
mod bullet;
mod effects;
mod enemy;
mod frame_event;
mod game_world;
mod loot;
mod player;
mod session_clock;

pub use area::{HolyPool, ThrownAxe};
pub use bullet::{new_bullet_pool, Bullet, BulletPool, BulletSpawn};
pub use effects::{DamageText, HitEffect, LightningStrike, VisualEffects, WhipSwing};
pub use enemy::{new_enemy_pool, Enemy, EnemyPool, EnemySpawn};
pub use frame_event::FrameEvent;
pub use game_world::GameWorld;
pub use loot::{Gem, Item};
pub use player::PlayerState;
pub use session_clock::{FrameDelta, SessionClock, SessionPhase};
