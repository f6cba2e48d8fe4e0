//! Path: native/game_core/src/physics/rng.rs
//! Summary: 決定論的 LCG 乱数ジェネレータ（スポーン・ドロップ・演出で共用）

#[derive(Clone, Debug)]
pub struct SimpleRng(u64);

impl SimpleRng {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn next_u32(&mut self) -> u32 {
        self.0 = self.0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 33) as u32
    }

    /// [0, 1) の一様乱数
    pub fn next_f32(&mut self) -> f32 {
        // 上位 24bit だけ使えば 1.0 に丸まらない
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }

    /// [lo, hi) の一様乱数
    pub fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + self.next_f32() * (hi - lo)
    }

    /// [0, n) のインデックス。n == 0 なら 0
    pub fn next_index(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        (self.next_u32() as usize) % n
    }

    /// 子 RNG 用のシードを派生させる（演出系を本体の乱数列から切り離す）
    pub fn fork(&mut self) -> SimpleRng {
        let hi = self.next_u32() as u64;
        let lo = self.next_u32() as u64;
        SimpleRng::new((hi << 32) | lo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_reproducibility() {
        let mut rng = SimpleRng::new(12345);
        let a: Vec<u32> = (0..10).map(|_| rng.next_u32()).collect();
        let mut rng2 = SimpleRng::new(12345);
        let b: Vec<u32> = (0..10).map(|_| rng2.next_u32()).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn next_f32_is_half_open() {
        let mut rng = SimpleRng::new(999);
        for _ in 0..1000 {
            let f = rng.next_f32();
            assert!((0.0..1.0).contains(&f));
        }
    }

    #[test]
    fn range_and_index_stay_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..500 {
            let r = rng.range(120.0, 340.0);
            assert!(r >= 120.0 && r <= 340.0);
            assert!(rng.next_index(4) < 4);
        }
        assert_eq!(rng.next_index(0), 0);
    }
}
