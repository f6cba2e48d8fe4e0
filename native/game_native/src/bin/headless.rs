//! Path: native/game_native/src/bin/headless.rs
//! Summary: ヘッドレス実行（固定フレームレートで 1 セッション回し、リザルトを JSON で出力）
//!
//! 環境変数: SURVIVORS_SEED / SURVIVORS_SECONDS / SURVIVORS_FPS、ログは RUST_LOG。

use game_native::{GameSession, InputIntent, SessionConfig, SessionPhase};
use std::str::FromStr;

const DEFAULT_SECONDS: f64 = 120.0;
const DEFAULT_FPS: f64 = 60.0;

fn env_or<T: FromStr + Copy + std::fmt::Debug>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            log::warn!("{}={:?} is not valid, using {:?}", key, raw, default);
            default
        }),
        Err(_) => default,
    }
}

/// 経過時間に応じてゆっくり向きを変えるジョイスティック入力
fn autopilot(t_secs: f64) -> InputIntent {
    let a = (t_secs * 0.35) as f32;
    InputIntent { joystick: Some((a.cos(), a.sin())), ..Default::default() }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = env_logger::Builder::from_default_env().try_init();

    let seed: u64 = env_or("SURVIVORS_SEED", 1);
    let seconds: f64 = env_or("SURVIVORS_SECONDS", DEFAULT_SECONDS);
    let fps: f64 = env_or("SURVIVORS_FPS", DEFAULT_FPS).max(1.0);
    let frame_ms = 1000.0 / fps;

    let mut session = GameSession::new(SessionConfig { seed, ..Default::default() });
    session.start_session(0.0);
    log::info!("headless run: seed={} seconds={} fps={}", seed, seconds, fps);

    let mut now = 0.0;
    let mut next_report = 10.0;
    while now < seconds * 1000.0 && session.phase() != SessionPhase::Over {
        now += frame_ms;
        session.set_input(autopilot(now / 1000.0));
        session.tick(now);

        if let Some(choice) = session.level_choices().first().map(|c| c.id) {
            session.select_upgrade_id(choice, now)?;
        }
        for event in session.drain_events() {
            log::debug!("{}", serde_json::to_string(&event)?);
        }

        let elapsed = session.world().clock.elapsed_secs as f64;
        if elapsed >= next_report {
            let hud = session.hud();
            log::info!(
                "t={} lv={} score={} hp={:.0}% enemies={}",
                hud.time, hud.level, hud.score, hud.hp_ratio * 100.0, session.world().enemies.len()
            );
            next_report += 10.0;
        }
    }

    match session.result() {
        Some(result) => println!("{}", serde_json::to_string_pretty(result)?),
        None => println!("{}", serde_json::to_string_pretty(&session.hud())?),
    }
    Ok(())
}
