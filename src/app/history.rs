// src/app/history.rs
//! Undo 用の履歴（スナップショットのスタック）だよ！⏪

use crate::components::game_state::GameState;

/// 盤面スナップショットの LIFO スタック。
///
/// 1回のプレイヤー操作につき1つ、操作する直前の盤面を積む。
/// 上限はなし。新しいゲームで空っぽになる。
#[derive(Debug, Clone, Default)]
pub struct MoveHistory {
    snapshots: Vec<GameState>,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, snapshot: GameState) {
        self.snapshots.push(snapshot);
    }

    pub fn pop(&mut self) -> Option<GameState> {
        self.snapshots.pop()
    }

    /// 次の Undo で戻る盤面を覗く。
    pub fn peek(&self) -> Option<&GameState> {
        self.snapshots.last()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}
