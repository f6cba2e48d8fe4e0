//! Path: native/game_native/benches/ai_bench.rs
//! Summary: Chase AI ベンチマーク（rayon 並列、世代付きプール）

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use game_native::{new_enemy_pool, update_chase_ai, EnemyKind, EnemyPool, EnemySpawn};

fn setup_enemies(n: usize) -> EnemyPool {
    let mut enemies = new_enemy_pool();
    for i in 0..n {
        let x = (i as f32 * 1.7) % 1280.0;
        let y = (i as f32 * 2.3) % 720.0;
        let kind = if i % 3 == 0 { EnemyKind::Bat } else { EnemyKind::Skull };
        enemies.acquire(EnemySpawn { x, y, kind, stats: kind.stats_at(30.0) });
    }
    // 歯抜けのスロットも混ぜる
    for i in (0..n).step_by(7) {
        enemies.release_at(i);
    }
    enemies
}

fn bench_chase_ai(c: &mut Criterion) {
    let n = 10_000;
    let player_x = 640.0;
    let player_y = 360.0;
    let dt60 = 1.0;

    c.bench_function("chase_ai_rayon", |b| {
        b.iter_batched(
            || setup_enemies(n),
            |mut enemies| {
                update_chase_ai(&mut enemies, player_x, player_y, dt60, 30.0);
                enemies
            },
            BatchSize::PerIteration,
        )
    });
}

criterion_group!(benches, bench_chase_ai);
criterion_main!(benches);
