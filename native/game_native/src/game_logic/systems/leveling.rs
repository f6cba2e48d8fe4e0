//! Path: native/game_native/src/game_logic/systems/leveling.rs
//! Summary: レベルアップ選択肢の生成と強化の適用

use crate::world::{FrameEvent, GameWorld};
use game_core::constants::{HEAL_UPGRADE_RATIO, LEVEL_UP_CHOICES};
use game_core::passive::PassiveKind;
use game_core::upgrade::{UpgradeChoice, UpgradeId};

/// 強化の現在レベル（回復は常に 0）
pub(crate) fn current_level(w: &GameWorld, id: UpgradeId) -> u32 {
    match id {
        UpgradeId::Weapon(kind)  => w.arsenal.level(kind),
        UpgradeId::Passive(kind) => w.passives.level(kind),
        UpgradeId::Heal          => 0,
    }
}

/// 上限未満の強化 + 回復からランダムに最大 3 件を選ぶ（Fisher–Yates）
pub(crate) fn compute_upgrade_choices(w: &mut GameWorld) -> Vec<UpgradeChoice> {
    let mut pool: Vec<UpgradeId> = UpgradeId::catalog()
        .filter(|&id| current_level(w, id) < id.max_level())
        .collect();

    for i in (1..pool.len()).rev() {
        let j = w.rng.next_index(i + 1);
        pool.swap(i, j);
    }
    pool.truncate(LEVEL_UP_CHOICES);

    pool.into_iter()
        .map(|id| UpgradeChoice::new(id, current_level(w, id)))
        .collect()
}

/// レベルアップ待ちを 1 つ消化して一時停止し、選択肢を提示する
pub(crate) fn trigger_level_up(w: &mut GameWorld) {
    w.pending_level_ups -= 1;
    w.clock.pause();
    let choices = compute_upgrade_choices(w);
    log::info!(
        "level up: lv={} choices=[{}] pending={}",
        w.player.level,
        choices.iter().map(|c| c.id.id()).collect::<Vec<_>>().join(", "),
        w.pending_level_ups
    );
    w.level_choices = choices.clone();
    w.frame_events.push(FrameEvent::LevelUpAvailable { choices });
}

/// 選ばれた強化を 1 段階適用する
pub(crate) fn apply_upgrade(w: &mut GameWorld, id: UpgradeId) {
    match id {
        UpgradeId::Weapon(kind) => w.arsenal.upgrade(kind),
        UpgradeId::Passive(kind) => {
            w.passives.raise(kind);
            if kind == PassiveKind::Speed {
                w.player.speed += 0.5;
            }
        }
        UpgradeId::Heal => {
            let amount = w.player.max_hp * HEAL_UPGRADE_RATIO;
            w.player.heal(amount);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::weapon::{WeaponKind, MAX_WEAPON_LEVEL};

    fn world() -> GameWorld {
        let mut w = GameWorld::new(9, 1280.0, 720.0);
        w.clock.start(0.0);
        w
    }

    #[test]
    fn choices_are_three_distinct_entries() {
        let mut w = world();
        let choices = compute_upgrade_choices(&mut w);
        assert_eq!(choices.len(), LEVEL_UP_CHOICES);
        assert_ne!(choices[0].id, choices[1].id);
        assert_ne!(choices[1].id, choices[2].id);
        assert_ne!(choices[0].id, choices[2].id);
    }

    #[test]
    fn maxed_upgrades_are_excluded() {
        let mut w = world();
        for kind in WeaponKind::ALL {
            while w.arsenal.level(kind) < MAX_WEAPON_LEVEL {
                w.arsenal.upgrade(kind);
            }
        }
        for kind in PassiveKind::ALL {
            for _ in 0..5 {
                w.passives.raise(kind);
            }
        }
        let choices = compute_upgrade_choices(&mut w);
        assert_eq!(choices.len(), 1);
        assert_eq!(choices[0].id, UpgradeId::Heal);
        assert_eq!(choices[0].level, 0);
    }

    #[test]
    fn trigger_pauses_and_offers_choices() {
        let mut w = world();
        w.pending_level_ups = 2;
        trigger_level_up(&mut w);
        assert!(w.clock.is_paused());
        assert_eq!(w.pending_level_ups, 1);
        assert_eq!(w.level_choices.len(), 3);
        assert!(matches!(w.frame_events.last(), Some(FrameEvent::LevelUpAvailable { .. })));
    }

    #[test]
    fn speed_and_heal_upgrades_touch_player() {
        let mut w = world();
        apply_upgrade(&mut w, UpgradeId::Passive(PassiveKind::Speed));
        assert!((w.player.speed - 5.5).abs() < 0.001);

        w.player.hp = 10.0;
        apply_upgrade(&mut w, UpgradeId::Heal);
        assert!((w.player.hp - 60.0).abs() < 0.001);
        apply_upgrade(&mut w, UpgradeId::Heal);
        apply_upgrade(&mut w, UpgradeId::Heal);
        assert_eq!(w.player.hp, 100.0);
    }

    #[test]
    fn weapon_upgrade_unlocks_at_level_one() {
        let mut w = world();
        apply_upgrade(&mut w, UpgradeId::Weapon(WeaponKind::Axe));
        assert_eq!(w.arsenal.level(WeaponKind::Axe), 1);
        assert_eq!(w.arsenal.get(WeaponKind::Axe).count, 2);
    }
}
