//! Path: native/game_core/src/weapon.rs
//! Summary: 武器種類（9 種）・武器ごとの状態レコード・強化ルール

use serde::Serialize;

pub const MAX_WEAPON_LEVEL: u32 = 5;
pub const WEAPON_KIND_COUNT: usize = 9;

// ─── WeaponKind ───────────────────────────────────────────────
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponKind {
    /// 最寄りの敵へ魔法弾
    Wand,
    /// 周囲へのダメージパルス
    Garlic,
    /// プレイヤーを周回する衛星
    Orbit,
    /// 向いている方向への扇状攻撃
    Whip,
    /// 向いている方向への高速連射
    Dagger,
    /// 重力付きで投げる斧（寿命中は毎フレーム多段ヒット）
    Axe,
    /// 近い順に K 体へ落雷
    Lightning,
    /// 周囲にダメージ床を設置
    Holywater,
    /// 近い順に K 体へダメージ + 減速
    Frost,
}

impl WeaponKind {
    pub const ALL: [WeaponKind; WEAPON_KIND_COUNT] = [
        WeaponKind::Wand,
        WeaponKind::Garlic,
        WeaponKind::Orbit,
        WeaponKind::Whip,
        WeaponKind::Dagger,
        WeaponKind::Axe,
        WeaponKind::Lightning,
        WeaponKind::Holywater,
        WeaponKind::Frost,
    ];

    pub fn index(&self) -> usize {
        match self {
            WeaponKind::Wand      => 0,
            WeaponKind::Garlic    => 1,
            WeaponKind::Orbit     => 2,
            WeaponKind::Whip      => 3,
            WeaponKind::Dagger    => 4,
            WeaponKind::Axe       => 5,
            WeaponKind::Lightning => 6,
            WeaponKind::Holywater => 7,
            WeaponKind::Frost     => 8,
        }
    }

    /// 外部 API で使う識別子
    pub fn id(&self) -> &'static str {
        match self {
            WeaponKind::Wand      => "wand",
            WeaponKind::Garlic    => "garlic",
            WeaponKind::Orbit     => "orbit",
            WeaponKind::Whip      => "whip",
            WeaponKind::Dagger    => "dagger",
            WeaponKind::Axe       => "axe",
            WeaponKind::Lightning => "lightning",
            WeaponKind::Holywater => "holywater",
            WeaponKind::Frost     => "frost",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.id() == id)
    }

    /// ヒットエフェクトの色
    pub fn hit_color(&self) -> [f32; 4] {
        match self {
            WeaponKind::Wand | WeaponKind::Dagger => [0.79, 0.94, 1.0, 1.0],
            WeaponKind::Garlic    => [1.0, 0.95, 0.64, 1.0],
            WeaponKind::Orbit     => [0.78, 0.72, 1.0, 1.0],
            WeaponKind::Whip      => [1.0, 0.84, 0.66, 1.0],
            WeaponKind::Axe       => [1.0, 0.85, 0.67, 1.0],
            WeaponKind::Lightning => [0.84, 0.92, 1.0, 1.0],
            WeaponKind::Holywater => [0.72, 0.95, 1.0, 1.0],
            WeaponKind::Frost     => [0.75, 0.91, 1.0, 1.0],
        }
    }

    /// セッション開始時の状態（Wand のみ所持）
    pub fn initial_state(&self) -> WeaponState {
        let base = WeaponState::default();
        match self {
            WeaponKind::Wand => WeaponState {
                level: 1, damage: 15.0, cooldown_ms: 600.0, count: 1, ..base
            },
            WeaponKind::Garlic => WeaponState {
                damage: 5.0, cooldown_ms: 500.0, radius: 120.0, ..base
            },
            WeaponKind::Orbit => WeaponState {
                damage: 10.0, count: 0, speed: 0.05, radius: 150.0, ..base
            },
            WeaponKind::Whip => WeaponState {
                damage: 28.0, cooldown_ms: 900.0, range: 220.0, arc: 1.35, ..base
            },
            WeaponKind::Dagger => WeaponState {
                damage: 10.0, cooldown_ms: 180.0, speed: 21.0, count: 1, ..base
            },
            WeaponKind::Axe => WeaponState {
                damage: 22.0, cooldown_ms: 1100.0, count: 1, ..base
            },
            WeaponKind::Lightning => WeaponState {
                damage: 34.0, cooldown_ms: 1800.0, count: 1, ..base
            },
            WeaponKind::Holywater => WeaponState {
                damage: 8.0, cooldown_ms: 1500.0, count: 1, radius: 95.0, duration: 2.4, ..base
            },
            WeaponKind::Frost => WeaponState {
                damage: 12.0, cooldown_ms: 720.0, count: 1, slow: 0.26, slow_duration: 1.3, ..base
            },
        }
    }

    /// 1 段階強化する。レベル上限の判定は呼び出し側（選択肢生成）で行う
    pub fn apply_upgrade(&self, w: &mut WeaponState) {
        w.level += 1;
        match self {
            WeaponKind::Wand => {
                w.count += 1;
                w.damage += 5.0;
            }
            WeaponKind::Garlic => {
                w.radius += 20.0;
                w.damage += 3.0;
            }
            WeaponKind::Orbit => {
                w.count += 1;
                w.speed += 0.01;
            }
            WeaponKind::Whip => {
                w.damage += 8.0;
                w.range += 16.0;
                w.arc += 0.05;
            }
            WeaponKind::Dagger => {
                w.damage += 4.0;
                w.count += 1;
                w.speed += 1.0;
            }
            WeaponKind::Axe => {
                w.damage += 6.0;
                w.count += 1;
            }
            WeaponKind::Lightning => {
                w.damage += 10.0;
                w.count += 1;
            }
            WeaponKind::Holywater => {
                w.damage += 3.0;
                w.count += 1;
                w.radius += 10.0;
                w.duration += 0.25;
            }
            WeaponKind::Frost => {
                w.damage += 4.0;
                w.count += 1;
                w.slow = (w.slow + 0.06).min(crate::constants::FROST_SLOW_CAP);
                w.slow_duration += 0.12;
            }
        }
    }
}

// ─── WeaponState ──────────────────────────────────────────────

/// 武器 1 種ぶんの状態。使わないフィールドは 0 のまま
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct WeaponState {
    /// 0 = 未所持
    pub level:         u32,
    pub damage:        f32,
    pub count:         u32,
    pub cooldown_ms:   f64,
    pub radius:        f32,
    pub range:         f32,
    /// 扇の全角（rad）
    pub arc:           f32,
    /// 弾速（Dagger）または角速度 rad/tick（Orbit）
    pub speed:         f32,
    /// 衛星の現在角（Orbit）
    pub angle:         f32,
    /// 設置物の持続秒（Holywater）
    pub duration:      f32,
    pub slow:          f32,
    pub slow_duration: f32,
    /// 最後に発射したタイムスタンプ（ms）。未発射なら None
    #[serde(skip)]
    pub last_fire:     Option<f64>,
}

impl WeaponState {
    pub fn is_owned(&self) -> bool {
        self.level > 0
    }

    /// `now - last_fire > cooldown * scale` を満たすか
    pub fn ready(&self, now: f64, cooldown_scale: f32) -> bool {
        if !self.is_owned() {
            return false;
        }
        match self.last_fire {
            None => true,
            Some(t) => now - t > self.cooldown_ms * cooldown_scale as f64,
        }
    }
}

// ─── Arsenal ──────────────────────────────────────────────────

/// 全武器の状態（WeaponKind::index() で引く）
#[derive(Clone, Debug)]
pub struct Arsenal {
    states: [WeaponState; WEAPON_KIND_COUNT],
}

impl Arsenal {
    pub fn new() -> Self {
        Self { states: WeaponKind::ALL.map(|k| k.initial_state()) }
    }

    pub fn get(&self, kind: WeaponKind) -> &WeaponState {
        &self.states[kind.index()]
    }

    pub fn get_mut(&mut self, kind: WeaponKind) -> &mut WeaponState {
        &mut self.states[kind.index()]
    }

    pub fn upgrade(&mut self, kind: WeaponKind) {
        kind.apply_upgrade(&mut self.states[kind.index()]);
    }

    pub fn level(&self, kind: WeaponKind) -> u32 {
        self.get(kind).level
    }

    /// 所持している武器の種類数
    pub fn unlocked_count(&self) -> u32 {
        self.states.iter().filter(|s| s.is_owned()).count() as u32
    }
}

impl Default for Arsenal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_wand_is_owned_at_start() {
        let arsenal = Arsenal::new();
        assert_eq!(arsenal.unlocked_count(), 1);
        assert!(arsenal.get(WeaponKind::Wand).is_owned());
        assert!(!arsenal.get(WeaponKind::Frost).is_owned());
    }

    #[test]
    fn index_matches_all_order() {
        for (i, k) in WeaponKind::ALL.iter().enumerate() {
            assert_eq!(k.index(), i);
            assert_eq!(WeaponKind::from_id(k.id()), Some(*k));
        }
        assert_eq!(WeaponKind::from_id("sword"), None);
    }

    #[test]
    fn unowned_weapon_is_never_ready() {
        let arsenal = Arsenal::new();
        assert!(!arsenal.get(WeaponKind::Garlic).ready(1.0e9, 1.0));
    }

    #[test]
    fn cooldown_gate_is_strict() {
        let mut w = WeaponKind::Wand.initial_state();
        assert!(w.ready(0.0, 1.0));
        w.last_fire = Some(1000.0);
        assert!(!w.ready(1600.0, 1.0));
        assert!(w.ready(1600.5, 1.0));
        // 0.45 倍まで短縮
        assert!(w.ready(1000.0 + 600.0 * 0.45 + 0.5, 0.45));
    }

    #[test]
    fn frost_slow_is_capped() {
        let mut arsenal = Arsenal::new();
        for _ in 0..10 {
            arsenal.upgrade(WeaponKind::Frost);
        }
        let f = arsenal.get(WeaponKind::Frost);
        assert!((f.slow - 0.6).abs() < 0.001);
        assert!((f.slow_duration - (1.3 + 1.2)).abs() < 0.001);
    }

    #[test]
    fn orbit_upgrade_adds_satellite() {
        let mut arsenal = Arsenal::new();
        arsenal.upgrade(WeaponKind::Orbit);
        let o = arsenal.get(WeaponKind::Orbit);
        assert_eq!((o.level, o.count), (1, 1));
        assert!((o.speed - 0.06).abs() < 0.0001);
    }
}
