//! Path: native/game_native/src/nif/util.rs
//! Summary: NIF 共通ユーティリティ（lock_poisoned_err, セッションエラー変換）

use crate::session::SessionError;

/// RwLock の PoisonError を NifResult に変換するヘルパー
#[inline]
pub(crate) fn lock_poisoned_err() -> rustler::Error {
    rustler::Error::RaiseAtom("lock_poisoned")
}

/// UI 呼び出しの誤用を `{:error, {reason_atom, message}}` にする
pub(crate) fn session_err(e: SessionError) -> rustler::Error {
    let reason = match e {
        SessionError::NotAwaitingUpgrade   => crate::not_awaiting_upgrade(),
        SessionError::UpgradeNotOffered(_) => crate::upgrade_not_offered(),
        SessionError::UnknownUpgrade(_)    => crate::unknown_upgrade(),
    };
    rustler::Error::Term(Box::new((reason, e.to_string())))
}

/// JSON 化の失敗を `{:error, message}` にする
pub(crate) fn json_err(e: serde_json::Error) -> rustler::Error {
    rustler::Error::Term(Box::new(e.to_string()))
}
