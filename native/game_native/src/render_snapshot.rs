//! Path: native/game_native/src/render_snapshot.rs
//! Summary: GameWorld から描画用スナップショットを構築
//!
//! 描画側はワールドを直接触らず、フレームステップ後にこのコピーだけを読む。

use crate::game_logic::systems::enemies::orbit_satellites;
use crate::world::{DamageText, GameWorld, HitEffect, LightningStrike, SessionPhase, WhipSwing};
use serde::Serialize;

/// (x, y, size, render_kind, color, hp_ratio)
pub type EnemySprite = (f32, f32, f32, u8, [f32; 4], f32);

#[derive(Clone, Debug, Serialize)]
pub struct PlayerSprite {
    pub x:      f32,
    pub y:      f32,
    pub size:   f32,
    pub facing: f32,
}

#[derive(Clone, Debug, Serialize)]
pub struct RenderFrame {
    pub frame_id:      u32,
    pub phase:         SessionPhase,
    pub camera_offset: (f32, f32),
    pub player:        PlayerSprite,
    pub enemies:       Vec<EnemySprite>,
    /// (x, y, angle)
    pub bullets:       Vec<(f32, f32, f32)>,
    /// (x, y, rotation)
    pub axes:          Vec<(f32, f32, f32)>,
    /// (x, y, radius, alpha)
    pub holy_pools:    Vec<(f32, f32, f32, f32)>,
    /// (x, y, size, color)
    pub gems:          Vec<(f32, f32, f32, [f32; 4])>,
    /// (x, y, render_kind)
    pub items:         Vec<(f32, f32, u8)>,
    /// 衛星の位置 (x, y)
    pub satellites:    Vec<(f32, f32)>,
    pub hits:          Vec<HitEffect>,
    pub texts:         Vec<DamageText>,
    pub whips:         Vec<WhipSwing>,
    pub lightning:     Vec<LightningStrike>,
}

pub fn build_render_frame(w: &GameWorld) -> RenderFrame {
    // 1. 敵・弾
    let enemies = w
        .enemies
        .iter()
        .map(|(_, e)| {
            let hp_ratio = if e.max_hp > 0.0 { (e.hp / e.max_hp).clamp(0.0, 1.0) } else { 0.0 };
            (e.x, e.y, e.size, e.kind.render_kind(), e.color, hp_ratio)
        })
        .collect();

    let bullets = w
        .bullets
        .iter()
        .map(|(_, b)| (b.x, b.y, b.vy.atan2(b.vx)))
        .collect();

    // 2. 範囲攻撃
    let axes = w.axes.iter().map(|a| (a.x, a.y, a.rotation)).collect();
    let holy_pools = w
        .holy_pools
        .iter()
        .map(|p| (p.x, p.y, p.radius, p.life_ratio()))
        .collect();

    // 3. ルート
    let gems = w.gems.iter().map(|g| (g.x, g.y, g.size, g.tier.color())).collect();
    let items = w.items.iter().map(|i| (i.x, i.y, i.kind.render_kind())).collect();

    let satellites = orbit_satellites(w).map(|(_, _, x, y)| (x, y)).collect();

    RenderFrame {
        frame_id:      w.frame_id,
        phase:         w.clock.phase,
        camera_offset: (w.camera_x, w.camera_y),
        player: PlayerSprite {
            x:      w.player.x,
            y:      w.player.y,
            size:   w.player.size,
            facing: w.player.facing,
        },
        enemies,
        bullets,
        axes,
        holy_pools,
        gems,
        items,
        satellites,
        hits:          w.effects.hits.clone(),
        texts:         w.effects.texts.clone(),
        whips:         w.effects.whips.clone(),
        lightning:     w.effects.lightning.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::Gem;
    use game_core::enemy::EnemyKind;
    use game_core::item::GemTier;
    use game_core::weapon::WeaponKind;

    #[test]
    fn snapshot_copies_live_entities() {
        let mut w = GameWorld::new(4, 1280.0, 720.0);
        let id = w.spawn_enemy(EnemyKind::Bat, 10.0, 20.0);
        w.spawn_enemy(EnemyKind::Skull, 30.0, 40.0);
        w.enemies.release(id);
        w.gems.push(Gem::new(1.0, 2.0, GemTier::Red));

        let frame = build_render_frame(&w);
        assert_eq!(frame.enemies.len(), 1);
        assert_eq!((frame.enemies[0].0, frame.enemies[0].1), (30.0, 40.0));
        assert_eq!(frame.gems.len(), 1);
        assert_eq!(frame.camera_offset, (-640.0, -360.0));
        assert!(frame.satellites.is_empty());
    }

    #[test]
    fn satellites_follow_orbit_count() {
        let mut w = GameWorld::new(4, 1280.0, 720.0);
        w.arsenal.upgrade(WeaponKind::Orbit);
        w.arsenal.upgrade(WeaponKind::Orbit);
        let frame = build_render_frame(&w);
        assert_eq!(frame.satellites.len(), 2);
        assert!((frame.satellites[0].0 - 150.0).abs() < 0.001);
        assert!((frame.satellites[1].0 + 150.0).abs() < 0.001);
    }
}
