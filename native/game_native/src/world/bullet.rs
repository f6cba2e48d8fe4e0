//! Path: native/game_native/src/world/bullet.rs
//! Summary: 直進弾（Wand / Dagger）のレコードとプール

use game_core::constants::BULLET_POOL_RETAIN;
use game_core::pool::{EntityPool, Poolable};
use game_core::weapon::WeaponKind;

#[derive(Clone, Copy, Debug)]
pub struct BulletSpawn {
    pub x:      f32,
    pub y:      f32,
    pub vx:     f32,
    pub vy:     f32,
    pub damage: f32,
    pub source: WeaponKind,
}

/// 直進弾。最初に当たった敵 1 体にダメージを与えて消える
#[derive(Clone, Copy, Debug)]
pub struct Bullet {
    pub x:      f32,
    pub y:      f32,
    /// 60Hz 1 ティックあたりの速度
    pub vx:     f32,
    pub vy:     f32,
    pub damage: f32,
    /// 発射元武器（描画とヒット色）
    pub source: WeaponKind,
}

impl Poolable for Bullet {
    type Props = BulletSpawn;

    fn spawn(p: BulletSpawn) -> Self {
        Self { x: p.x, y: p.y, vx: p.vx, vy: p.vy, damage: p.damage, source: p.source }
    }

    fn respawn(&mut self, p: BulletSpawn) {
        *self = Self::spawn(p);
    }

    fn reset(&mut self) {
        self.vx = 0.0;
        self.vy = 0.0;
        self.damage = 0.0;
    }
}

pub type BulletPool = EntityPool<Bullet>;

pub fn new_bullet_pool() -> BulletPool {
    EntityPool::new(BULLET_POOL_RETAIN)
}
