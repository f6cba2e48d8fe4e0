//! Path: native/game_core/src/util.rs
//! Summary: 経験値カーブ・スポーン間隔・スポーン位置・時間表示などの共通ユーティリティ

use crate::constants::{
    SPAWN_EDGE_MARGIN, SPAWN_INTERVAL_BASE_MS, SPAWN_INTERVAL_DECAY_MS_PER_SEC,
    SPAWN_INTERVAL_MIN_MS,
};
use crate::physics::rng::SimpleRng;

/// 現在のしきい値から次のレベルのしきい値を返す（floor(next * 1.3) + 5）
pub fn next_xp_threshold(current: u32) -> u32 {
    current * 13 / 10 + 5
}

/// 経過時間に応じた次のスポーンまでの間隔（ms）
pub fn spawn_interval_ms(elapsed_secs: f32) -> f64 {
    (SPAWN_INTERVAL_BASE_MS - elapsed_secs as f64 * SPAWN_INTERVAL_DECAY_MS_PER_SEC)
        .max(SPAWN_INTERVAL_MIN_MS)
}

/// 二乗距離（sqrt を避けて高速化）
#[inline]
pub fn dist_sq(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let dx = x1 - x2;
    let dy = y1 - y2;
    dx * dx + dy * dy
}

/// 角度差を -π〜π に正規化
#[inline]
pub fn wrap_angle(a: f32) -> f32 {
    a.sin().atan2(a.cos())
}

/// 経過秒を "MM:SS" に整形
pub fn format_mm_ss(total_secs: f32) -> String {
    let total = total_secs.max(0.0) as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// カメラ矩形の四辺いずれかの外側（margin 分）にランダム配置
/// side: 0=上, 1=右, 2=下, 3=左
pub fn spawn_position_on_view_edge(
    rng: &mut SimpleRng,
    camera_x: f32,
    camera_y: f32,
    view_w: f32,
    view_h: f32,
) -> (f32, f32) {
    let side = rng.next_index(4);
    let t = rng.next_f32();
    match side {
        0 => (camera_x + t * view_w, camera_y - SPAWN_EDGE_MARGIN),
        1 => (camera_x + view_w + SPAWN_EDGE_MARGIN, camera_y + t * view_h),
        2 => (camera_x + t * view_w, camera_y + view_h + SPAWN_EDGE_MARGIN),
        _ => (camera_x - SPAWN_EDGE_MARGIN, camera_y + t * view_h),
    }
}

/// 中心 (cx, cy) の円周上に `count` 体を等間隔で並べたときの `i` 番目の位置
pub fn ring_position(cx: f32, cy: f32, radius: f32, i: usize, count: usize) -> (f32, f32) {
    let angle = std::f32::consts::TAU / count.max(1) as f32 * i as f32;
    (cx + angle.cos() * radius, cy + angle.sin() * radius)
}

/// (cx, cy) を中心とする円環 [min_dist, min_dist + spread) 内のランダム位置
pub fn random_point_in_annulus(
    rng: &mut SimpleRng,
    cx: f32,
    cy: f32,
    min_dist: f32,
    spread: f32,
) -> (f32, f32) {
    let angle = rng.next_f32() * std::f32::consts::TAU;
    let dist = min_dist + rng.next_f32() * spread;
    (cx + angle.cos() * dist, cy + angle.sin() * dist)
}
