// src/app/mod.rs
//! ゲームセッション (GameApp) と Undo 履歴を置くモジュールだよ！

pub mod game_app;
pub mod history;
