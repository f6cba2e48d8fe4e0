//! Path: native/game_native/src/lib.rs
//! Summary: モジュール宣言・pub use・（nif feature 時のみ）rustler::init

pub use game_core::boss::BossKind;
pub use game_core::enemy::EnemyKind;
pub use game_core::passive::PassiveKind;
pub use game_core::pool::EntityId;
pub use game_core::upgrade::{UpgradeChoice, UpgradeId};
pub use game_core::weapon::WeaponKind;

#[cfg(feature = "nif")]
rustler::atoms! {
    ok,
    not_awaiting_upgrade,
    upgrade_not_offered,
    unknown_upgrade,
}

mod game_logic;
mod input;
#[cfg(feature = "nif")]
mod nif;
mod render_snapshot;
mod scheduler;
mod session;
mod world;

pub use game_logic::{
    find_k_nearest_enemies, find_nearest_enemy, find_nearest_enemy_spatial, update_chase_ai,
};
pub use input::InputIntent;
pub use render_snapshot::{build_render_frame, EnemySprite, PlayerSprite, RenderFrame};
pub use scheduler::TimerQueue;
pub use session::{GameSession, HudData, SessionConfig, SessionError, SessionResult};
pub use world::{
    new_bullet_pool, new_enemy_pool, Bullet, BulletPool, DamageText, Enemy, EnemyPool,
    EnemySpawn, FrameEvent, GameWorld, Gem, HitEffect, HolyPool, Item, LightningStrike,
    PlayerState, SessionClock, SessionPhase, ThrownAxe, VisualEffects, WhipSwing,
};

#[cfg(feature = "nif")]
rustler::init!("Elixir.App.NifBridge", load = nif::load);
