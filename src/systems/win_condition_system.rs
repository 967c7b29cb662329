// src/systems/win_condition_system.rs
use log::info;

use crate::components::game_state::{GameState, GameStatus};

/// ゲームの勝利条件をチェックするシステムだよ！🏆🎉
///
/// 盤面を見て、全部のカードが組札に揃っていれば `GameStatus::Won` にする。
/// 勝ちの状態から Undo で戻った場合は `Playing` に戻るよ。
#[derive(Default)]
pub struct WinConditionSystem;

impl WinConditionSystem {
    pub fn new() -> Self {
        Self
    }

    /// 勝利状態を更新して、今の状態を返す。
    pub fn execute(&self, state: &mut GameState) -> GameStatus {
        if state.refresh_status() {
            info!("🎉🎉🎉 ゲームクリア！おめでとう！ 🎉🎉🎉");
        }
        state.status()
    }
}
