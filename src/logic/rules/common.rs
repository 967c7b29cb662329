//! ルール判定で共通して使うヘルパー関数や型を置くよ。

use itertools::Itertools;

use crate::components::card::Card;
pub use crate::components::card::CardColor;

/// カード列をログ用の文字列にする。例: `7♣ 6♦ 5♣`
pub(crate) fn describe_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards.iter().join(" ")
}
