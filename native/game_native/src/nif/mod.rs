//! Path: native/game_native/src/nif/mod.rs
//! Summary: NIF エントリモジュール（feature = "nif"）

mod load;
mod session_nif;
mod util;

pub use load::load;
