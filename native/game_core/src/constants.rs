//! Path: native/game_core/src/constants.rs
//! Summary: ビューポート・プレイヤー・スポーン・武器・ドロップなどのチューニング定数
//!
//! 速度系の値はすべて「60Hz 1 ティックあたりの px」で表し、実フレームでは dt60 を掛けて使う。

// Default viewport
pub const SCREEN_WIDTH:  f32 = 1280.0;
pub const SCREEN_HEIGHT: f32 = 720.0;

// Frame budget (warn only)
pub const FRAME_BUDGET_MS: f64 = 1000.0 / 60.0;

// ─── Player ───────────────────────────────────────────────────
pub const PLAYER_SIZE:        f32 = 25.0;
pub const PLAYER_MAX_HP:      f32 = 100.0;
pub const PLAYER_SPEED:       f32 = 5.0;
pub const PLAYER_START_XP_TO_NEXT: u32 = 5;
/// ジョイスティックのデッドゾーン（最大振れ幅に対する比）
pub const JOYSTICK_DEADZONE:  f32 = 0.08;
/// ポインタ追従の停止距離（二乗）
pub const SEEK_STOP_DIST_SQ:  f32 = 100.0;
/// 接触ダメージ表示の間引き（ms）
pub const PLAYER_DAMAGE_TEXT_INTERVAL_MS: f64 = 180.0;
pub const PLAYER_HIT_FX_SIZE_RATIO:       f32 = 0.85;

// ─── Spawn director ───────────────────────────────────────────
pub const FIRST_SPAWN_DELAY_MS:   f64 = 500.0;
pub const SPAWN_INTERVAL_BASE_MS: f64 = 1000.0;
pub const SPAWN_INTERVAL_DECAY_MS_PER_SEC: f64 = 15.0;
pub const SPAWN_INTERVAL_MIN_MS:  f64 = 150.0;
pub const MAX_LIVE_ENEMIES:       usize = 350;
pub const SPAWN_EDGE_MARGIN:      f32 = 100.0;
pub const ENEMY_BASE_HP:          f32 = 10.0;
pub const ENEMY_HP_PER_SEC:       f32 = 0.5;
pub const ENEMY_BASE_SPEED:       f32 = 2.0;
pub const ENEMY_SPEED_PER_SEC:    f32 = 0.02;
pub const ENEMY_SIZE:             f32 = 20.0;
/// Demon が出現し始める経過秒
pub const DEMON_UNLOCK_SECS:      f32 = 45.0;
pub const DEMON_ROLL_CHANCE:      f32 = 0.22;
pub const BAT_ROLL_CHANCE:        f32 = 0.45;

/// スウォーム発生時刻（経過秒）
pub const SWARM_TRIGGER_SECS: [u32; 3] = [20, 45, 75];
pub const SWARM_SIZE:         usize = 30;
pub const SWARM_RING_RADIUS:  f32 = 900.0;
pub const SWARM_BASE_HP:      f32 = 5.0;
pub const SWARM_HP_PER_SEC:   f32 = 0.3;
pub const SWARM_BASE_SPEED:   f32 = 2.5;
pub const SWARM_SPEED_PER_SEC: f32 = 0.02;
pub const SWARM_ENEMY_SIZE:   f32 = 15.0;

/// 最大の敵サイズ（最終ボス）。空間ハッシュのクエリ半径拡張に使う
pub const MAX_ENEMY_SIZE: f32 = 100.0;

// ─── Entity pool ──────────────────────────────────────────────
pub const ENEMY_POOL_RETAIN:  usize = 1200;
pub const BULLET_POOL_RETAIN: usize = 1500;

// ─── Spatial hash ─────────────────────────────────────────────
pub const CELL_SIZE: f32 = 128.0;

// ─── Weapons ──────────────────────────────────────────────────
pub const COOLDOWN_SCALE_PER_CDR: f32 = 0.08;
pub const COOLDOWN_SCALE_FLOOR:   f32 = 0.45;
pub const WAND_MAX_RANGE:         f32 = 1200.0;
pub const WAND_BOLT_SPEED:        f32 = 15.0;
pub const WAND_SPREAD:            f32 = 0.2;
pub const ORBIT_RADIUS:           f32 = 150.0;
pub const ORBIT_HIT_PADDING:      f32 = 15.0;
pub const ORBIT_HIT_COOLDOWN_MS:  f64 = 500.0;
pub const ORBIT_KNOCKBACK:        f32 = 20.0;
pub const ORBIT_MAX_SATELLITES:   usize = 5;
pub const DAGGER_SPREAD:          f32 = 0.08;
pub const DAGGER_MUZZLE_OFFSET:   f32 = 16.0;
pub const AXE_SPREAD:             f32 = 0.22;
pub const AXE_THROW_SPEED:        f32 = 7.0;
pub const AXE_THROW_LIFT:         f32 = 10.0;
pub const AXE_LIFETIME:           f32 = 1.5;
pub const AXE_GRAVITY:            f32 = 28.0;
pub const AXE_SPIN:               f32 = 0.18;
pub const AXE_HIT_PADDING:        f32 = 16.0;
pub const HOLY_POOL_MIN_DIST:     f32 = 120.0;
pub const HOLY_POOL_DIST_SPREAD:  f32 = 220.0;
pub const HOLY_POOL_TICK_SECS:    f32 = 0.22;
pub const FROST_SLOW_CAP:         f32 = 0.6;
/// 減速倍率の下限
pub const SLOW_MULTIPLIER_FLOOR:  f32 = 0.2;

// ─── Projectiles ──────────────────────────────────────────────
pub const BULLET_DESPAWN_DIST: f32 = 2000.0;
pub const BULLET_HIT_PADDING:  f32 = 10.0;

// ─── Damage feedback ──────────────────────────────────────────
pub const HIT_FX_INTERVAL_MS:      f64 = 45.0;
pub const DAMAGE_TEXT_INTERVAL_MS: f64 = 120.0;
pub const HIT_FX_MAX_SIZE:         f32 = 42.0;
pub const HIT_FX_SIZE_RATIO:       f32 = 0.9;
pub const HIT_FX_LIFETIME:         f32 = 0.22;
pub const HIT_FX_GROWTH:           f32 = 110.0;
pub const DAMAGE_TEXT_LIFETIME:    f32 = 0.75;
pub const DAMAGE_TEXT_RISE:        f32 = 88.0;
pub const DAMAGE_TEXT_DRIFT:       f32 = 32.0;
pub const DAMAGE_TEXT_GRAVITY:     f32 = 120.0;
pub const WHIP_FX_LIFETIME:        f32 = 0.18;
pub const LIGHTNING_FX_LIFETIME:   f32 = 0.16;

// ─── Loot ─────────────────────────────────────────────────────
pub const ITEM_COLLECT_PADDING:  f32 = 20.0;
pub const GEM_COLLECT_PADDING:   f32 = 10.0;
pub const GEM_MAGNET_RANGE:      f32 = 150.0;
pub const GEM_DRIFT_RATE:        f32 = 0.15;
pub const POTION_HEAL:           f32 = 30.0;
pub const BOSS_GEM_COUNT:        usize = 15;
pub const BOSS_GEM_JITTER:       f32 = 30.0;
pub const BOSS_TOKEN_OFFSET_X:   f32 = 20.0;
/// 通常敵のドロップ判定しきい値（luck 倍率前、累積）
pub const DROP_POTION_CHANCE:    f32 = 0.02;
pub const DROP_MAGNET_CHANCE:    f32 = 0.03;
pub const DROP_LEVEL_UP_CHANCE:  f32 = 0.035;

// ─── Level-up ─────────────────────────────────────────────────
pub const LEVEL_UP_CHOICES: usize = 3;
pub const HEAL_UPGRADE_RATIO: f32 = 0.5;

// ─── Colors ───────────────────────────────────────────────────
pub const COLOR_DEFAULT_HIT:   [f32; 4] = [1.0, 0.89, 0.60, 1.0];
pub const COLOR_DAMAGE_TEXT:   [f32; 4] = [1.0, 0.89, 0.60, 1.0];
pub const COLOR_PLAYER_TEXT:   [f32; 4] = [1.0, 0.60, 0.65, 1.0];
pub const COLOR_PLAYER_HIT:    [f32; 4] = [1.0, 0.50, 0.50, 1.0];
pub const COLOR_SWARM:         [f32; 4] = [1.0, 0.67, 0.0, 1.0];
