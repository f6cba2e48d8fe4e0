//! Path: native/game_core/src/pool.rs
//! Summary: 世代付きハンドルのエンティティプール（敵・弾丸の再利用）
//!
//! スロットは密な Vec に並び、解放されたスロットは 2 種類のスタックに積まれる。
//! - `recycled`: レコードを保持したまま解放されたスロット（上限 `retain_cap`）
//! - `vacant`:   上限超過でレコードを破棄したスロット
//!
//! 解放のたびに世代を進めるため、古い `EntityId` での参照は `None` になる。

use serde::Serialize;

/// プールに載せるレコード。`reset` は解放時に一時状態をすべて初期化する。
pub trait Poolable {
    type Props;

    fn spawn(props: Self::Props) -> Self;
    /// 保持済みレコードを新しいプロパティで上書きする
    fn respawn(&mut self, props: Self::Props);
    fn reset(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct EntityId {
    pub index:      u32,
    pub generation: u32,
}

#[derive(Debug)]
pub struct Slot<T> {
    generation: u32,
    alive:      bool,
    record:     Option<T>,
}

impl<T> Slot<T> {
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn live(&self) -> Option<&T> {
        if self.alive { self.record.as_ref() } else { None }
    }

    pub fn live_mut(&mut self) -> Option<&mut T> {
        if self.alive { self.record.as_mut() } else { None }
    }
}

pub struct EntityPool<T: Poolable> {
    slots:      Vec<Slot<T>>,
    recycled:   Vec<usize>,
    vacant:     Vec<usize>,
    retain_cap: usize,
    live:       usize,
}

impl<T: Poolable> EntityPool<T> {
    pub fn new(retain_cap: usize) -> Self {
        Self {
            slots:      Vec::new(),
            recycled:   Vec::new(),
            vacant:     Vec::new(),
            retain_cap,
            live:       0,
        }
    }

    /// 生存数
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// 確保済みスロット数（生存 + 解放済み）
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// 再利用待ちで保持しているレコード数
    pub fn retained(&self) -> usize {
        self.recycled.len()
    }

    pub fn retain_cap(&self) -> usize {
        self.retain_cap
    }

    pub fn acquire(&mut self, props: T::Props) -> EntityId {
        let index = if let Some(i) = self.recycled.pop() {
            let slot = &mut self.slots[i];
            match slot.record.as_mut() {
                Some(record) => record.respawn(props),
                None => slot.record = Some(T::spawn(props)),
            }
            i
        } else if let Some(i) = self.vacant.pop() {
            self.slots[i].record = Some(T::spawn(props));
            i
        } else {
            self.slots.push(Slot { generation: 0, alive: false, record: Some(T::spawn(props)) });
            self.slots.len() - 1
        };
        let slot = &mut self.slots[index];
        slot.alive = true;
        self.live += 1;
        EntityId { index: index as u32, generation: slot.generation }
    }

    /// ハンドルが現在も有効なら解放する。古いハンドルなら false
    pub fn release(&mut self, id: EntityId) -> bool {
        if !self.is_current(id) {
            return false;
        }
        self.release_at(id.index as usize)
    }

    pub fn release_at(&mut self, index: usize) -> bool {
        let Some(slot) = self.slots.get_mut(index) else {
            return false;
        };
        if !slot.alive {
            return false;
        }
        slot.alive = false;
        slot.generation = slot.generation.wrapping_add(1);
        self.live = self.live.saturating_sub(1);
        if self.recycled.len() < self.retain_cap {
            if let Some(record) = slot.record.as_mut() {
                record.reset();
            }
            self.recycled.push(index);
        } else {
            slot.record = None;
            self.vacant.push(index);
        }
        true
    }

    fn is_current(&self, id: EntityId) -> bool {
        self.slots
            .get(id.index as usize)
            .is_some_and(|s| s.alive && s.generation == id.generation)
    }

    pub fn get(&self, id: EntityId) -> Option<&T> {
        if !self.is_current(id) {
            return None;
        }
        self.slots[id.index as usize].record.as_ref()
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut T> {
        if !self.is_current(id) {
            return None;
        }
        self.slots[id.index as usize].record.as_mut()
    }

    /// スロット index から生存レコードを引く（空間ハッシュの結果用）
    pub fn get_at(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Slot::live)
    }

    pub fn get_at_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index).and_then(Slot::live_mut)
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &T)> {
        self.slots.iter().enumerate().filter_map(|(i, s)| {
            let generation = s.generation;
            s.live().map(|r| (EntityId { index: i as u32, generation }, r))
        })
    }

    /// 並列パス用の生スロット列。生存判定は `Slot::live_mut` で行う
    pub fn slots_mut(&mut self) -> &mut [Slot<T>] {
        &mut self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Dummy {
        value:   u32,
        scratch: u32,
    }

    impl Poolable for Dummy {
        type Props = u32;

        fn spawn(value: u32) -> Self {
            Self { value, scratch: 0 }
        }

        fn respawn(&mut self, value: u32) {
            self.value = value;
        }

        fn reset(&mut self) {
            self.scratch = 0;
        }
    }

    #[test]
    fn release_then_acquire_reuses_slot_with_reset_state() {
        let mut pool: EntityPool<Dummy> = EntityPool::new(4);
        let a = pool.acquire(1);
        if let Some(d) = pool.get_mut(a) {
            d.scratch = 99;
        }
        assert!(pool.release(a));

        let b = pool.acquire(2);
        assert_eq!(b.index, a.index);
        assert_ne!(b.generation, a.generation);
        let d = pool.get(b).map(|d| (d.value, d.scratch));
        assert_eq!(d, Some((2, 0)));
        assert_eq!(pool.slot_count(), 1);
    }

    #[test]
    fn stale_handle_is_detected() {
        let mut pool: EntityPool<Dummy> = EntityPool::new(4);
        let a = pool.acquire(1);
        pool.release(a);
        let _b = pool.acquire(2);
        assert!(pool.get(a).is_none());
        assert!(pool.get_mut(a).is_none());
        assert!(!pool.release(a));
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn retention_is_capped() {
        let mut pool: EntityPool<Dummy> = EntityPool::new(2);
        let ids: Vec<EntityId> = (0..5).map(|i| pool.acquire(i)).collect();
        for id in &ids {
            pool.release(*id);
        }
        assert_eq!(pool.retained(), 2);
        assert!(pool.is_empty());

        // 破棄済みスロットも再利用され、スロット数は増えない
        for i in 0..5 {
            pool.acquire(10 + i);
        }
        assert_eq!(pool.slot_count(), 5);
        assert_eq!(pool.len(), 5);
        assert_eq!(pool.retained(), 0);
    }

    #[test]
    fn iteration_skips_released_slots() {
        let mut pool: EntityPool<Dummy> = EntityPool::new(8);
        let a = pool.acquire(1);
        let b = pool.acquire(2);
        let c = pool.acquire(3);
        pool.release(b);
        let seen: Vec<u32> = pool.iter().map(|(_, d)| d.value).collect();
        assert_eq!(seen, vec![1, 3]);
        assert_eq!(pool.get(a).map(|d| d.value), Some(1));
        assert!(pool.get(b).is_none());
        assert!(pool.get_at(c.index as usize).is_some());
        assert!(!pool.release_at(b.index as usize));
    }
}
