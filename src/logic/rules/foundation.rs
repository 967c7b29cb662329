//! 組札 (Foundation) へのカード移動ルールを定義するよ。

use log::debug;

use crate::components::card::{Card, Rank};
use crate::components::stack::Pile;

/// カードが、一番上が `top` の組札に置けるかチェックする。
///
/// - 空なら A だけ
/// - 空でなければ、同じスートで一つ上のランクだけ
pub fn can_place_on_foundation(card: &Card, top: Option<&Card>) -> bool {
    match top {
        None => card.rank == Rank::Ace,
        Some(top) => card.suit == top.suit && top.rank.next() == Some(card.rank),
    }
}

/// 指定されたカードが、特定の組札 (Foundation) の一番上に置けるかチェックする。
pub fn can_move_to_foundation(card: &Card, foundation: &Pile) -> bool {
    let result = can_place_on_foundation(card, foundation.top());
    debug!(
        "[Foundation Rule] {} onto {} (top: {}) -> {}",
        card,
        foundation.stack_type(),
        foundation.top().map_or_else(|| "empty".to_string(), |top| top.to_string()),
        result
    );
    result
}

/// 組札として正しい並びか（同じスートで A から1つずつ上がっている）。空でも OK。
pub fn is_valid_foundation_sequence(cards: &[Card]) -> bool {
    let Some(first) = cards.first() else {
        return true;
    };
    cards.iter().enumerate().all(|(i, card)| {
        card.suit == first.suit && usize::from(card.rank.value()) == i + 1 && card.is_face_up
    })
}
