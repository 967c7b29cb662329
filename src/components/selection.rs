// src/components/selection.rs

use serde::{Deserialize, Serialize};

use crate::components::card::Card;
use crate::components::stack::StackType;

/// 持ち上げたカードがどこから来たか、を表す Enum だよ！🖐️
///
/// 失敗したドロップでは、この情報を使ってカードを元の場所・元の位置に戻すんだ。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickedFrom {
    /// 捨て札 (Waste) の一番上から1枚。
    Waste,
    /// 場札 (Tableau) の `pile_index` 列目、下から `depth_index` 番目より上を丸ごと。
    Tableau { pile_index: u8, depth_index: usize },
    /// 組札 (Foundation) の一番上から1枚（かんたんモードだけ）。
    Foundation { pile_index: u8 },
}

impl PickedFrom {
    /// 戻し先のスタック。
    pub fn stack_type(&self) -> StackType {
        match *self {
            PickedFrom::Waste => StackType::Waste,
            PickedFrom::Tableau { pile_index, .. } => StackType::Tableau(pile_index),
            PickedFrom::Foundation { pile_index } => StackType::Foundation(pile_index),
        }
    }
}

/// プレイヤーが今「持っている」カードたち。
///
/// 持ち上げた瞬間に元の山から取り出され（所有権ごと移動！）、
/// ドロップ成功で置き先へ、失敗なら元の山へ戻る。ターンをまたいで残ることはないよ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    cards: Vec<Card>,
    origin: PickedFrom,
}

impl Selection {
    pub(crate) fn new(cards: Vec<Card>, origin: PickedFrom) -> Self {
        Self { cards, origin }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// 置き先の一番上に乗ることになるカード（列の先頭）。
    pub fn leading_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    pub fn origin(&self) -> PickedFrom {
        self.origin
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub(crate) fn into_parts(self) -> (Vec<Card>, PickedFrom) {
        (self.cards, self.origin)
    }
}
