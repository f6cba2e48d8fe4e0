//! Path: native/game_native/src/world/session_clock.rs
//! Summary: セッションの状態遷移と可変フレーム dt の計算
//!
//! NotStarted → Running ⇄ Paused → Over。Over はリセットまで抜けない。

use serde::Serialize;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    #[default]
    NotStarted,
    Running,
    /// レベルアップ選択待ち
    Paused,
    Over,
}

/// 1 フレームの経過時間
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameDelta {
    /// 秒
    pub dt:   f32,
    /// 60Hz 基準のティック数（dt * 60）
    pub dt60: f32,
}

#[derive(Clone, Debug, Default)]
pub struct SessionClock {
    pub phase:         SessionPhase,
    /// シミュレーション上の経過秒（一時停止中は進まない）
    pub elapsed_secs:  f32,
    /// 直前フレームのタイムスタンプ（ms）
    pub last_frame_ms: Option<f64>,
}

impl SessionClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, now: f64) {
        self.phase = SessionPhase::Running;
        self.elapsed_secs = 0.0;
        self.last_frame_ms = Some(now);
    }

    /// `now` までの dt を返し、基準時刻を進める。
    /// 時刻が巻き戻った場合は 0 として扱う
    pub fn advance(&mut self, now: f64) -> FrameDelta {
        let dt = match self.last_frame_ms {
            Some(last) => ((now - last) / 1000.0).max(0.0) as f32,
            None => 0.0,
        };
        self.last_frame_ms = Some(now);
        FrameDelta { dt, dt60: dt * 60.0 }
    }

    pub fn pause(&mut self) {
        if self.phase == SessionPhase::Running {
            self.phase = SessionPhase::Paused;
        }
    }

    /// 一時停止を解除し、停止中の時間を dt に含めないよう基準時刻を置き直す
    pub fn resume(&mut self, now: f64) {
        if self.phase == SessionPhase::Paused {
            self.phase = SessionPhase::Running;
        }
        self.last_frame_ms = Some(now);
    }

    pub fn finish(&mut self) {
        self.phase = SessionPhase::Over;
    }

    pub fn is_running(&self) -> bool {
        self.phase == SessionPhase::Running
    }

    pub fn is_paused(&self) -> bool {
        self.phase == SessionPhase::Paused
    }

    /// 開始済みかつ未終了（Running / Paused）
    pub fn is_live(&self) -> bool {
        matches!(self.phase, SessionPhase::Running | SessionPhase::Paused)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_computes_dt_and_dt60() {
        let mut clock = SessionClock::new();
        clock.start(1000.0);
        let d = clock.advance(1016.0);
        assert!((d.dt - 0.016).abs() < 1e-6);
        assert!((d.dt60 - 0.96).abs() < 1e-4);
    }

    #[test]
    fn resume_discards_paused_interval() {
        let mut clock = SessionClock::new();
        clock.start(0.0);
        clock.pause();
        assert!(clock.is_paused());
        clock.resume(10_000.0);
        assert!(clock.is_running());
        let d = clock.advance(10_016.0);
        assert!(d.dt < 0.02);
    }

    #[test]
    fn over_is_terminal_for_pause_and_resume() {
        let mut clock = SessionClock::new();
        clock.start(0.0);
        clock.finish();
        clock.pause();
        clock.resume(5.0);
        assert_eq!(clock.phase, SessionPhase::Over);
        assert!(!clock.is_live());
    }
}
