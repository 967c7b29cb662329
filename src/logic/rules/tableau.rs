//! 場札 (Tableau) へのカード移動ルールを定義するよ。

use log::debug;

use crate::components::card::{Card, Rank};
use crate::components::stack::Pile;

/// 列の先頭カード `leading` が、一番上が `top` の場札に置けるかチェックする。
///
/// - 空の列には K だけ
/// - そうでなければ、色が反対で、ランクがちょうど1つ小さいこと
/// - 裏向きのカードの上には置けない
pub fn can_place_on_tableau(leading: &Card, top: Option<&Card>) -> bool {
    match top {
        None => leading.rank == Rank::King,
        Some(top) => {
            top.is_face_up
                && leading.is_opposite_color(top)
                && leading.rank.next() == Some(top.rank)
        }
    }
}

/// カード列 `run`（先頭が一番深いカード）を場札 `tableau` に置けるかチェックする。
pub fn can_move_to_tableau(run: &[Card], tableau: &Pile) -> bool {
    let Some(leading) = run.first() else {
        return false;
    };
    let result = can_place_on_tableau(leading, tableau.top());
    debug!(
        "[Tableau Rule] {} (+{} more) onto {} (top: {}) -> {}",
        leading,
        run.len() - 1,
        tableau.stack_type(),
        tableau.top().map_or_else(|| "empty".to_string(), |top| top.to_string()),
        result
    );
    result
}
