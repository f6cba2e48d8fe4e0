//! Path: native/game_native/src/nif/load.rs
//! Summary: NIF ローダー（パニックフック・ロガー・リソース登録・アトム事前登録）

use crate::session::GameSession;
use std::sync::RwLock;

/// Elixir 側が保持するセッションハンドル
pub struct SessionResource(pub RwLock<GameSession>);

/// デバッグビルド時のみ: NIF パニック時に Rust のバックトレースを stderr に出力する。
#[cfg(debug_assertions)]
fn init_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("[Rust NIF Panic] {}", info);
        eprintln!("Backtrace:\n{}", std::backtrace::Backtrace::force_capture());
    }));
}

#[allow(non_local_definitions)]
pub fn load(env: rustler::Env, _: rustler::Term) -> bool {
    #[cfg(debug_assertions)]
    init_panic_hook();
    let _ = env_logger::Builder::from_default_env().try_init();

    let _ = rustler::resource!(SessionResource, env);
    // アトムを NIF ロード時に事前登録して、比較が確実に動作するようにする
    let _ = crate::ok();
    let _ = crate::not_awaiting_upgrade();
    let _ = crate::upgrade_not_offered();
    let _ = crate::unknown_upgrade();
    log::debug!("game_native NIF loaded");
    true
}
