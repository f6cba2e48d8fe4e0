//! Path: native/game_native/src/game_logic/systems/damage.rs
//! Summary: ダメージ適用の共通窓口（ヒットエフェクト・ダメージ数値の間引き付き）

use crate::world::{Enemy, PlayerState, VisualEffects};
use game_core::constants::{
    COLOR_DAMAGE_TEXT, COLOR_PLAYER_HIT, COLOR_PLAYER_TEXT, DAMAGE_TEXT_INTERVAL_MS,
    HIT_FX_INTERVAL_MS, HIT_FX_MAX_SIZE, HIT_FX_SIZE_RATIO, PLAYER_DAMAGE_TEXT_INTERVAL_MS,
    PLAYER_HIT_FX_SIZE_RATIO,
};

#[inline]
fn interval_elapsed(last: Option<f64>, now: f64, interval_ms: f64) -> bool {
    last.map_or(true, |t| now - t > interval_ms)
}

/// 敵に `amount` を与える。武器由来のダメージはすべてここを通る
///
/// ヒットエフェクトは 45ms、数値表示は 120ms ごとに間引き、
/// 表示できなかった分は次の表示にまとめる。撃破判定は呼び出し側で行う。
pub(crate) fn apply_damage_to_enemy(
    enemy: &mut Enemy,
    effects: &mut VisualEffects,
    amount: f32,
    color: [f32; 4],
    now: f64,
) {
    if amount <= 0.0 {
        return;
    }
    enemy.hp -= amount;

    if interval_elapsed(enemy.last_hit_fx_at, now, HIT_FX_INTERVAL_MS) {
        let size = (enemy.size * HIT_FX_SIZE_RATIO).min(HIT_FX_MAX_SIZE);
        effects.spawn_hit(enemy.x, enemy.y, color, size);
        enemy.last_hit_fx_at = Some(now);
    }

    enemy.pending_damage += amount;
    if interval_elapsed(enemy.last_damage_text_at, now, DAMAGE_TEXT_INTERVAL_MS) {
        let shown = enemy.pending_damage.round().max(1.0) as u32;
        effects.spawn_damage_text(enemy.x, enemy.y - enemy.size - 8.0, shown, COLOR_DAMAGE_TEXT);
        enemy.pending_damage = 0.0;
        enemy.last_damage_text_at = Some(now);
    }
}

/// 接触ダメージをプレイヤーに与える
///
/// 数値表示が出たフレームだけ、まとめた表示量を `Some` で返す。
pub(crate) fn apply_contact_damage_to_player(
    player: &mut PlayerState,
    effects: &mut VisualEffects,
    amount: f32,
    now: f64,
) -> Option<f32> {
    player.take_damage(amount);
    player.damage_accumulator += amount;

    let mut shown = None;
    if interval_elapsed(player.last_damage_text_at, now, PLAYER_DAMAGE_TEXT_INTERVAL_MS) {
        let value = player.damage_accumulator.round().max(1.0);
        effects.spawn_damage_text(player.x, player.y - player.size - 10.0, value as u32, COLOR_PLAYER_TEXT);
        player.damage_accumulator = 0.0;
        player.last_damage_text_at = Some(now);
        shown = Some(value);
    }

    if interval_elapsed(player.last_hit_fx_at, now, HIT_FX_INTERVAL_MS) {
        effects.spawn_hit(player.x, player.y, COLOR_PLAYER_HIT, player.size * PLAYER_HIT_FX_SIZE_RATIO);
        player.last_hit_fx_at = Some(now);
    }
    shown
}
