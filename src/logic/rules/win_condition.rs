//! ゲームの勝利条件とオートフィニッシュの判定ロジックを定義するよ。

use crate::components::game_state::GameState;
use crate::config::rules::CARDS_PER_SUIT;

/// 4つの組札が全部13枚になっていたら勝ち！🏆
pub fn is_won(state: &GameState) -> bool {
    state.foundation_piles().iter().all(|pile| pile.len() == CARDS_PER_SUIT)
}

/// 場札に裏向きのカードが1枚も残っていないか。
pub fn all_tableau_face_up(state: &GameState) -> bool {
    state
        .tableau_piles()
        .iter()
        .all(|pile| pile.cards().iter().all(|card| card.is_face_up))
}

/// オートフィニッシュが使えるか。隠れた情報が無くて、まだ勝っていないときだけ。
pub fn can_auto_finish(state: &GameState) -> bool {
    all_tableau_face_up(state) && !is_won(state)
}
