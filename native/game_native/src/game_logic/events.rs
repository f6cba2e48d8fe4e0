//! Path: native/game_native/src/game_logic/events.rs
//! Summary: フレームイベントの drain

use crate::world::{FrameEvent, GameWorld};

/// 溜まったイベントを発生順に取り出す
pub(crate) fn drain_frame_events_inner(w: &mut GameWorld) -> Vec<FrameEvent> {
    w.frame_events.drain(..).collect()
}
