//! Path: native/game_native/src/scheduler.rs
//! Summary: 期限付きタスクキュー（期限の早い順、同時刻は登録順）
//!
//! 定期タスクは実行のたびに次回期限を返し、呼び出し側が積み直す。
//! リセット時は `clear()` で未実行分をすべて捨てる。

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

struct Entry<T> {
    due_ms: f64,
    seq:    u64,
    task:   T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.due_ms.total_cmp(&other.due_ms).then(self.seq.cmp(&other.seq))
    }
}

pub struct TimerQueue<T> {
    heap: BinaryHeap<Reverse<Entry<T>>>,
    seq:  u64,
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self { heap: BinaryHeap::new(), seq: 0 }
    }

    pub fn schedule(&mut self, due_ms: f64, task: T) {
        self.seq += 1;
        self.heap.push(Reverse(Entry { due_ms, seq: self.seq, task }));
    }

    /// 期限が `now` 以前のタスクを 1 件取り出す
    pub fn pop_due(&mut self, now: f64) -> Option<(f64, T)> {
        if self.next_due()? > now {
            return None;
        }
        self.heap.pop().map(|Reverse(e)| (e.due_ms, e.task))
    }

    pub fn next_due(&self) -> Option<f64> {
        self.heap.peek().map(|Reverse(e)| e.due_ms)
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_due_order_then_insertion_order() {
        let mut q = TimerQueue::new();
        q.schedule(300.0, "c");
        q.schedule(100.0, "a");
        q.schedule(300.0, "d");
        q.schedule(200.0, "b");

        let mut order = Vec::new();
        while let Some((_, t)) = q.pop_due(1000.0) {
            order.push(t);
        }
        assert_eq!(order, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn future_tasks_stay_queued() {
        let mut q = TimerQueue::new();
        q.schedule(500.0, 1u8);
        assert_eq!(q.pop_due(499.9), None);
        assert_eq!(q.next_due(), Some(500.0));
        assert_eq!(q.pop_due(500.0), Some((500.0, 1)));
        assert!(q.is_empty());
    }

    #[test]
    fn clear_drops_pending_tasks() {
        let mut q = TimerQueue::new();
        q.schedule(0.0, ());
        q.schedule(10.0, ());
        q.clear();
        assert_eq!(q.len(), 0);
        assert_eq!(q.pop_due(f64::MAX), None);
    }
}
