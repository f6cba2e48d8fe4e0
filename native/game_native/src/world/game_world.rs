//! Path: native/game_native/src/world/game_world.rs
//! Summary: ゲームワールド（1 セッション分の全状態を持つ集約）

use super::{
    new_bullet_pool, new_enemy_pool, BulletPool, EnemyPool, EnemySpawn, FrameEvent, Gem,
    HolyPool, Item, PlayerState, SessionClock, ThrownAxe, VisualEffects,
};
use crate::input::InputIntent;
use crate::session::SessionResult;
use game_core::boss::BossKind;
use game_core::constants::CELL_SIZE;
use game_core::enemy::EnemyKind;
use game_core::passive::PassiveLevels;
use game_core::physics::rng::SimpleRng;
use game_core::physics::spatial_hash::SpatialHash;
use game_core::pool::EntityId;
use game_core::upgrade::UpgradeChoice;
use game_core::util::format_mm_ss;
use game_core::weapon::Arsenal;
use rustc_hash::FxHashSet;

/// ゲームワールド。リセット時は丸ごと作り直す
pub struct GameWorld {
    pub frame_id:          u32,
    pub clock:             SessionClock,
    pub view_width:        f32,
    pub view_height:       f32,
    /// 画面左上のワールド座標
    pub camera_x:          f32,
    pub camera_y:          f32,
    pub player:            PlayerState,
    pub input:             InputIntent,
    pub enemies:           EnemyPool,
    pub bullets:           BulletPool,
    pub axes:              Vec<ThrownAxe>,
    pub holy_pools:        Vec<HolyPool>,
    pub gems:              Vec<Gem>,
    pub items:             Vec<Item>,
    pub effects:           VisualEffects,
    pub arsenal:           Arsenal,
    pub passives:          PassiveLevels,
    pub rng:               SimpleRng,
    /// 敵スロット index の空間ハッシュ（武器フェーズ前に毎フレーム再構築）
    pub collision:         SpatialHash,
    /// 近傍クエリ結果の再利用バッファ
    pub query_buf:         Vec<usize>,
    /// 撃破数
    pub score:             u32,
    /// 未処理のレベルアップ数
    pub pending_level_ups: u32,
    pub bosses_spawned:    FxHashSet<BossKind>,
    /// 発生済みスウォームの時刻（秒）
    pub swarms_fired:      FxHashSet<u32>,
    /// 提示中の選択肢（Paused の間だけ非空）
    pub level_choices:     Vec<UpgradeChoice>,
    pub result:            Option<SessionResult>,
    /// このフレームで発生したイベント（drain される）
    pub frame_events:      Vec<FrameEvent>,
    /// 直近フレームのステップ処理時間（ms）
    pub last_step_time_ms: f64,
}

impl GameWorld {
    pub fn new(seed: u64, view_width: f32, view_height: f32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let effects_rng_seed = rng.fork().next_u32() as u64;
        let player = PlayerState::new();
        Self {
            frame_id:          0,
            clock:             SessionClock::new(),
            view_width,
            view_height,
            camera_x:          player.x - view_width / 2.0,
            camera_y:          player.y - view_height / 2.0,
            player,
            input:             InputIntent::default(),
            enemies:           new_enemy_pool(),
            bullets:           new_bullet_pool(),
            axes:              Vec::new(),
            holy_pools:        Vec::new(),
            gems:              Vec::new(),
            items:             Vec::new(),
            effects:           VisualEffects::new(effects_rng_seed),
            arsenal:           Arsenal::new(),
            passives:          PassiveLevels::default(),
            rng,
            collision:         SpatialHash::new(CELL_SIZE),
            query_buf:         Vec::new(),
            score:             0,
            pending_level_ups: 0,
            bosses_spawned:    FxHashSet::default(),
            swarms_fired:      FxHashSet::default(),
            level_choices:     Vec::new(),
            result:            None,
            frame_events:      Vec::new(),
            last_step_time_ms: 0.0,
        }
    }

    /// 現在の経過時間に応じたステータスで敵を 1 体出す
    pub fn spawn_enemy(&mut self, kind: EnemyKind, x: f32, y: f32) -> EntityId {
        let stats = kind.stats_at(self.clock.elapsed_secs);
        self.enemies.acquire(EnemySpawn { x, y, kind, stats })
    }

    /// 経験値を加算し、上がったレベル数をレベルアップ待ちに積む
    pub fn grant_xp(&mut self, amount: u32) {
        let gained = self.player.gain_xp(amount);
        if gained > 0 {
            self.pending_level_ups += gained;
            self.frame_events.push(FrameEvent::LevelUp { new_level: self.player.level });
        }
    }

    /// 衝突判定用の Spatial Hash を再構築する
    pub(crate) fn rebuild_collision(&mut self) {
        self.collision.clear();
        for (id, e) in self.enemies.iter() {
            self.collision.insert(id.index as usize, e.x, e.y);
        }
    }

    /// 勝敗確定。リザルトを作って Over に遷移する（二重確定はしない）
    pub(crate) fn finish_session(&mut self, win: bool) {
        if self.result.is_some() {
            return;
        }
        self.clock.finish();
        self.level_choices.clear();
        let result = SessionResult {
            win,
            elapsed:          format_mm_ss(self.clock.elapsed_secs),
            elapsed_secs:     self.clock.elapsed_secs,
            score:            self.score,
            level:            self.player.level,
            weapons_unlocked: self.arsenal.unlocked_count(),
        };
        log::info!(
            "session over: win={} time={} score={} level={}",
            win, result.elapsed, result.score, result.level
        );
        self.frame_events.push(FrameEvent::SessionEnded { result: result.clone() });
        self.result = Some(result);
    }
}
