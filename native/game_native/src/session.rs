//! Path: native/game_native/src/session.rs
//! Summary: ゲームセッション（ワールド + タイマーキュー）と UI 向け呼び出し口
//!
//! ホストは毎アニメーションフレーム `tick(now)` を 1 回呼ぶ。
//! 期限の来たタイマータスクを先に実行し、その後 1 フレーム分進める。

use crate::game_logic::systems::damage::apply_damage_to_enemy;
use crate::game_logic::systems::leveling::{apply_upgrade, current_level};
use crate::game_logic::systems::spawn::run_spawn_tick;
use crate::game_logic::{drain_frame_events_inner, physics_step_inner};
use crate::input::InputIntent;
use crate::scheduler::TimerQueue;
use crate::world::{FrameEvent, GameWorld, SessionPhase};
use game_core::constants::{COLOR_DEFAULT_HIT, FIRST_SPAWN_DELAY_MS, SCREEN_HEIGHT, SCREEN_WIDTH};
use game_core::physics::rng::SimpleRng;
use game_core::pool::EntityId;
use game_core::upgrade::{UpgradeChoice, UpgradeId};
use game_core::util::format_mm_ss;
use serde::Serialize;

// ─── Config / Error / UI 型 ───────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionConfig {
    pub viewport_width:  f32,
    pub viewport_height: f32,
    /// ワールド乱数の元。リセットのたびにここから派生させる
    pub seed:            u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { viewport_width: SCREEN_WIDTH, viewport_height: SCREEN_HEIGHT, seed: 1 }
    }
}

/// UI 呼び出しの誤用。シミュレーション側の失敗ではない
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("no level-up choice is pending")]
    NotAwaitingUpgrade,
    #[error("upgrade `{0}` was not offered")]
    UpgradeNotOffered(String),
    #[error("unknown upgrade id `{0}`")]
    UnknownUpgrade(String),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HudData {
    pub score:    u32,
    pub level:    u32,
    /// "MM:SS"
    pub time:     String,
    pub hp_ratio: f32,
    pub xp_ratio: f32,
    pub phase:    SessionPhase,
}

/// 勝敗確定時のリザルト
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SessionResult {
    pub win:              bool,
    /// "MM:SS"
    pub elapsed:          String,
    pub elapsed_secs:     f32,
    pub score:            u32,
    pub level:            u32,
    pub weapons_unlocked: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ScheduledTask {
    SpawnTick,
}

// ─── GameSession ──────────────────────────────────────────────

pub struct GameSession {
    config:   SessionConfig,
    seed_rng: SimpleRng,
    world:    GameWorld,
    timers:   TimerQueue<ScheduledTask>,
}

impl GameSession {
    pub fn new(config: SessionConfig) -> Self {
        let mut seed_rng = SimpleRng::new(config.seed);
        let world = Self::fresh_world(&config, &mut seed_rng);
        Self { config, seed_rng, world, timers: TimerQueue::new() }
    }

    fn fresh_world(config: &SessionConfig, seed_rng: &mut SimpleRng) -> GameWorld {
        let seed = seed_rng.next_u32() as u64;
        GameWorld::new(seed, config.viewport_width, config.viewport_height)
    }

    /// 空のワールドに作り直してから開始する。最初のスポーンは 500ms 後
    pub fn start_session(&mut self, now: f64) {
        self.reset();
        self.world.clock.start(now);
        self.timers.schedule(now + FIRST_SPAWN_DELAY_MS, ScheduledTask::SpawnTick);
        log::info!(
            "session started at {:.0}ms (viewport {}x{})",
            now, self.config.viewport_width, self.config.viewport_height
        );
    }

    /// タイトルへ戻る。未実行のタイマーも捨てる
    pub fn return_to_title(&mut self) {
        self.reset();
        log::info!("returned to title");
    }

    pub fn reset(&mut self) {
        self.timers.clear();
        self.world = Self::fresh_world(&self.config, &mut self.seed_rng);
    }

    /// 期限の来たタイマー → フレームステップの順に処理する
    pub fn tick(&mut self, now: f64) {
        self.run_due_timers(now);
        physics_step_inner(&mut self.world, now);
    }

    fn run_due_timers(&mut self, now: f64) {
        while let Some((due, task)) = self.timers.pop_due(now) {
            match task {
                ScheduledTask::SpawnTick => {
                    // 次回期限は実際の発火時刻から数える
                    if let Some(delay) = run_spawn_tick(&mut self.world) {
                        self.timers.schedule(now.max(due) + delay, ScheduledTask::SpawnTick);
                    }
                }
            }
        }
    }

    pub fn set_input(&mut self, input: InputIntent) {
        self.world.input = input;
    }

    /// 提示中の選択肢から 1 つを適用して再開する（文字列 ID 版）
    pub fn select_upgrade(&mut self, id: &str, now: f64) -> Result<UpgradeChoice, SessionError> {
        let Some(upgrade) = UpgradeId::parse(id) else {
            log::warn!("select_upgrade: unknown id {:?}", id);
            return Err(SessionError::UnknownUpgrade(id.to_string()));
        };
        self.select_upgrade_id(upgrade, now)
    }

    pub fn select_upgrade_id(&mut self, id: UpgradeId, now: f64) -> Result<UpgradeChoice, SessionError> {
        let w = &mut self.world;
        if !w.clock.is_paused() || w.level_choices.is_empty() {
            log::warn!("select_upgrade({}) while {:?}", id.id(), w.clock.phase);
            return Err(SessionError::NotAwaitingUpgrade);
        }
        if !w.level_choices.iter().any(|c| c.id == id) {
            log::warn!("select_upgrade: {} not among offered choices", id.id());
            return Err(SessionError::UpgradeNotOffered(id.id().to_string()));
        }

        apply_upgrade(w, id);
        let level = current_level(w, id);
        w.level_choices.clear();
        w.clock.resume(now);
        w.frame_events.push(FrameEvent::UpgradeApplied { id, level });
        log::debug!("upgrade applied: {} -> lv{}", id.id(), level);
        Ok(UpgradeChoice::new(id, level))
    }

    /// 武器ダメージと同じ窓口で敵にダメージを与える。撃破処理は次のフレームで行われる
    pub fn apply_damage(&mut self, id: EntityId, amount: f32, now: f64) -> bool {
        let w = &mut self.world;
        match w.enemies.get_mut(id) {
            Some(e) => {
                apply_damage_to_enemy(e, &mut w.effects, amount, COLOR_DEFAULT_HIT, now);
                true
            }
            None => false,
        }
    }

    pub fn hud(&self) -> HudData {
        let w = &self.world;
        HudData {
            score:    w.score,
            level:    w.player.level,
            time:     format_mm_ss(w.clock.elapsed_secs),
            hp_ratio: w.player.hp_ratio(),
            xp_ratio: w.player.xp_ratio(),
            phase:    w.clock.phase,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.world.clock.phase
    }

    pub fn level_choices(&self) -> &[UpgradeChoice] {
        &self.world.level_choices
    }

    pub fn result(&self) -> Option<&SessionResult> {
        self.world.result.as_ref()
    }

    pub fn drain_events(&mut self) -> Vec<FrameEvent> {
        drain_frame_events_inner(&mut self.world)
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn world(&self) -> &GameWorld {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut GameWorld {
        &mut self.world
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::Gem;
    use game_core::boss::BossKind;
    use game_core::enemy::EnemyKind;
    use game_core::item::GemTier;
    use game_core::util::spawn_interval_ms;

    fn started(now: f64) -> GameSession {
        let mut s = GameSession::new(SessionConfig { seed: 42, ..Default::default() });
        s.start_session(now);
        s
    }

    /// プレイヤー位置に動かない頑丈な敵を置く
    fn anchor_enemy(s: &mut GameSession, kind: EnemyKind) -> EntityId {
        let w = s.world_mut();
        let (x, y) = (w.player.x, w.player.y);
        let id = w.spawn_enemy(kind, x, y);
        if let Some(e) = w.enemies.get_mut(id) {
            e.hp = 1.0e9;
            e.speed = 0.0;
        }
        id
    }

    fn contact_damage_over_one_second(fps: u32) -> f32 {
        let start = 10_000.0;
        let mut s = started(start);
        anchor_enemy(&mut s, EnemyKind::Skull);
        let frame_ms = 1000.0 / fps as f64;
        for k in 1..=fps {
            s.tick(start + frame_ms * k as f64);
        }
        let p = &s.world().player;
        p.max_hp - p.hp
    }

    #[test]
    fn contact_damage_is_frame_rate_independent() {
        let at_30 = contact_damage_over_one_second(30);
        let at_60 = contact_damage_over_one_second(60);
        assert!((at_30 - 60.0).abs() < 0.01, "30fps: {}", at_30);
        assert!((at_60 - 60.0).abs() < 0.01, "60fps: {}", at_60);
    }

    #[test]
    fn immediate_death_ends_in_loss() {
        let mut s = started(0.0);
        s.world_mut().player.hp = 0.5;
        anchor_enemy(&mut s, EnemyKind::Skull);
        s.tick(16.0);

        assert_eq!(s.phase(), SessionPhase::Over);
        let r = s.result().cloned().expect("result");
        assert!(!r.win);
        assert_eq!((r.level, r.score), (1, 0));
        assert_eq!(s.world().player.hp, 0.0);
        let events = s.drain_events();
        assert!(events.iter().any(|e| matches!(e, FrameEvent::SessionEnded { result } if !result.win)));
    }

    #[test]
    fn final_boss_kill_wins_and_freezes_simulation() {
        let mut s = started(0.0);
        let id = {
            let w = s.world_mut();
            w.clock.elapsed_secs = 70.0;
            w.spawn_enemy(EnemyKind::FinalBoss, 600.0, 0.0)
        };
        assert!(s.apply_damage(id, 10_000.0, 10.0));
        s.tick(16.0);

        assert_eq!(s.phase(), SessionPhase::Over);
        assert!(s.result().is_some_and(|r| r.win));
        let elapsed = s.world().clock.elapsed_secs;
        s.tick(1000.0);
        assert_eq!(s.world().clock.elapsed_secs, elapsed);
        assert!(!s.apply_damage(id, 1.0, 1000.0));
    }

    #[test]
    fn each_boss_spawns_exactly_once() {
        let mut s = started(0.0);
        s.world_mut().clock.elapsed_secs = 65.0;
        let mut spawned = Vec::new();
        let mut now = 0.0;
        while now < 3000.0 {
            now += 16.0;
            s.tick(now);
            if let Some(choice) = s.level_choices().first().map(|c| c.id) {
                let _ = s.select_upgrade_id(choice, now);
            }
            for e in s.drain_events() {
                if let FrameEvent::BossSpawned { boss_kind } = e {
                    spawned.push(boss_kind);
                }
            }
        }
        assert_eq!(spawned, vec![BossKind::Mid, BossKind::Final]);
    }

    #[test]
    fn reset_twice_gives_same_empty_state_and_ignores_stragglers() {
        let mut s = started(0.0);
        for k in 1..=100 {
            s.tick(k as f64 * 16.0);
        }
        s.reset();
        s.reset();

        assert_eq!(s.phase(), SessionPhase::NotStarted);
        assert_eq!(s.pending_timers(), 0);
        let w = s.world();
        assert!(w.enemies.is_empty() && w.bullets.is_empty() && w.gems.is_empty());
        assert_eq!((w.player.level, w.score, w.pending_level_ups), (1, 0, 0));

        s.tick(5000.0);
        assert!(s.world().enemies.is_empty());
        assert_eq!(s.world().clock.elapsed_secs, 0.0);
    }

    #[test]
    fn gem_levels_up_then_pauses_and_resumes_on_selection() {
        let mut s = started(0.0);
        {
            let w = s.world_mut();
            let (x, y) = (w.player.x, w.player.y);
            w.gems.push(Gem::new(x, y, GemTier::Green));
        }
        s.tick(16.0);
        assert_eq!(s.world().player.level, 2);
        assert_eq!(s.world().pending_level_ups, 1);

        s.tick(32.0);
        assert_eq!(s.phase(), SessionPhase::Paused);
        assert_eq!(s.world().pending_level_ups, 0);
        assert_eq!(s.level_choices().len(), 3);

        let paused_at = s.world().clock.elapsed_secs;
        s.tick(2000.0);
        assert_eq!(s.world().clock.elapsed_secs, paused_at);

        let pick = s.level_choices()[0].id;
        let applied = s.select_upgrade(pick.id(), 5000.0).expect("offered");
        assert_eq!(applied.id, pick);
        assert_eq!(s.phase(), SessionPhase::Running);
        assert!(s.level_choices().is_empty());

        s.tick(5016.0);
        assert!((s.world().clock.elapsed_secs - paused_at - 0.016).abs() < 1e-4);
    }

    #[test]
    fn select_upgrade_rejects_misuse() {
        let mut s = started(0.0);
        assert_eq!(s.select_upgrade("wand", 0.0), Err(SessionError::NotAwaitingUpgrade));
        assert_eq!(
            s.select_upgrade("bogus", 0.0),
            Err(SessionError::UnknownUpgrade("bogus".to_string()))
        );

        s.world_mut().pending_level_ups = 1;
        s.tick(16.0);
        let offered: Vec<_> = s.level_choices().iter().map(|c| c.id).collect();
        let missing = UpgradeId::catalog().find(|id| !offered.contains(id)).expect("catalog > 3");
        assert_eq!(
            s.select_upgrade_id(missing, 20.0),
            Err(SessionError::UpgradeNotOffered(missing.id().to_string()))
        );
        assert_eq!(s.phase(), SessionPhase::Paused);
    }

    #[test]
    fn spawn_timer_runs_on_schedule() {
        let mut s = started(0.0);
        s.tick(400.0);
        assert!(s.world().enemies.is_empty());
        s.tick(500.0);
        assert_eq!(s.world().enemies.len(), 1);
        assert_eq!(s.pending_timers(), 1);
    }

    #[test]
    fn spawn_timer_rearms_from_fire_time_after_stall() {
        let mut s = started(0.0);
        s.tick(5000.0);
        assert_eq!(s.pending_timers(), 1);
        let expected = 5000.0 + spawn_interval_ms(0.0);
        assert_eq!(s.timers.next_due(), Some(expected));

        s.tick(expected - 1.0);
        assert_eq!(s.timers.next_due(), Some(expected));
    }

    #[test]
    fn hud_reflects_world() {
        let mut s = started(0.0);
        s.world_mut().player.hp = 25.0;
        s.world_mut().clock.elapsed_secs = 75.4;
        let hud = s.hud();
        assert_eq!(hud.time, "01:15");
        assert!((hud.hp_ratio - 0.25).abs() < 0.001);
        assert_eq!(hud.phase, SessionPhase::Running);
    }
}
