//! Path: native/game_native/src/game_logic/systems/items.rs
//! Summary: ドロップアイテムの収集と経験値宝石の吸引・収集

use crate::world::{FrameEvent, GameWorld};
use game_core::constants::{
    GEM_COLLECT_PADDING, GEM_DRIFT_RATE, GEM_MAGNET_RANGE, ITEM_COLLECT_PADDING, POTION_HEAL,
};
use game_core::item::ItemKind;
use game_core::util::dist_sq;

/// 接触したアイテムを即時適用して取り除く
pub(crate) fn update_items(w: &mut GameWorld) {
    let (px, py) = (w.player.x, w.player.y);
    let reach = w.player.size + ITEM_COLLECT_PADDING;
    let reach_sq = reach * reach;

    let mut i = 0;
    while i < w.items.len() {
        let item = w.items[i];
        if dist_sq(item.x, item.y, px, py) >= reach_sq {
            i += 1;
            continue;
        }
        w.items.swap_remove(i);

        match item.kind {
            ItemKind::Potion => {
                w.player.heal(POTION_HEAL);
            }
            ItemKind::Magnet => {
                for g in w.gems.iter_mut() {
                    g.magnetic = true;
                }
            }
            ItemKind::LevelUp => {
                w.pending_level_ups += 1;
            }
        }
        log::debug!("item picked up: {:?}", item.kind);
        w.frame_events.push(FrameEvent::ItemPickup { item_kind: item.kind });
    }
}

/// 吸引範囲内（または磁石状態）の宝石をプレイヤーへ寄せ、届いたものを経験値にする
///
/// 収集判定には移動前の距離を使う。
pub(crate) fn update_gems(w: &mut GameWorld) {
    let (px, py) = (w.player.x, w.player.y);
    let bonus = w.passives.magnet_bonus();
    let magnet_range = GEM_MAGNET_RANGE + bonus;
    let magnet_sq = magnet_range * magnet_range;
    let collect = w.player.size + GEM_COLLECT_PADDING + bonus * 0.5;
    let collect_sq = collect * collect;

    let mut xp = 0;
    w.gems.retain_mut(|g| {
        let d = dist_sq(g.x, g.y, px, py);
        if g.magnetic || d < magnet_sq {
            g.x += (px - g.x) * GEM_DRIFT_RATE;
            g.y += (py - g.y) * GEM_DRIFT_RATE;
        }
        if d < collect_sq {
            xp += g.value;
            return false;
        }
        true
    });

    if xp > 0 {
        w.grant_xp(xp);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{Gem, Item};
    use game_core::item::GemTier;
    use game_core::passive::PassiveKind;

    fn world() -> GameWorld {
        GameWorld::new(2, 1280.0, 720.0)
    }

    #[test]
    fn potion_heals_capped_and_emits_pickup() {
        let mut w = world();
        w.player.hp = 90.0;
        w.items.push(Item { x: 10.0, y: 0.0, kind: ItemKind::Potion });
        w.items.push(Item { x: 500.0, y: 0.0, kind: ItemKind::Potion });
        update_items(&mut w);
        assert_eq!(w.player.hp, 100.0);
        assert_eq!(w.items.len(), 1);
        assert_eq!(w.frame_events, vec![FrameEvent::ItemPickup { item_kind: ItemKind::Potion }]);
    }

    #[test]
    fn magnet_flags_every_gem() {
        let mut w = world();
        w.gems.push(Gem::new(2000.0, 0.0, GemTier::Blue));
        w.gems.push(Gem::new(-900.0, 40.0, GemTier::Red));
        w.items.push(Item { x: 0.0, y: 0.0, kind: ItemKind::Magnet });
        update_items(&mut w);
        assert!(w.gems.iter().all(|g| g.magnetic));
    }

    #[test]
    fn level_up_token_adds_pending() {
        let mut w = world();
        w.items.push(Item { x: 0.0, y: 0.0, kind: ItemKind::LevelUp });
        update_items(&mut w);
        assert_eq!(w.pending_level_ups, 1);
        assert_eq!(w.player.level, 1);
    }

    #[test]
    fn gem_drifts_inside_magnet_range_only() {
        let mut w = world();
        w.gems.push(Gem::new(100.0, 0.0, GemTier::Blue));
        w.gems.push(Gem::new(400.0, 0.0, GemTier::Blue));
        update_gems(&mut w);
        assert!((w.gems[0].x - 85.0).abs() < 0.001);
        assert_eq!(w.gems[1].x, 400.0);
    }

    #[test]
    fn gem_collection_uses_pre_drift_distance() {
        let mut w = world();
        // 35 + bonus 0 の境界のすぐ外: 移動後は内側だが、このフレームでは拾わない
        w.gems.push(Gem::new(36.0, 0.0, GemTier::Blue));
        update_gems(&mut w);
        assert_eq!(w.gems.len(), 1);
        update_gems(&mut w);
        assert!(w.gems.is_empty());
        assert_eq!(w.player.xp, 1);
    }

    #[test]
    fn magnet_passive_extends_collect_radius() {
        let mut w = world();
        w.passives.raise(PassiveKind::MagnetPlus);
        w.gems.push(Gem::new(50.0, 0.0, GemTier::Blue));
        update_gems(&mut w);
        assert!(w.gems.is_empty());
    }

    #[test]
    fn green_gem_levels_up_once() {
        let mut w = world();
        w.gems.push(Gem::new(0.0, 0.0, GemTier::Green));
        update_gems(&mut w);
        assert_eq!(w.player.level, 2);
        assert_eq!(w.player.xp, 0);
        assert_eq!(w.pending_level_ups, 1);
    }
}
