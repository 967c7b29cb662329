// src/components/stack.rs

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::components::card::Card;

/// カードを置く場所の種類を示す Enum だよ。
/// これを使って、山札なのか、場札の何列目なのか、などを区別するよ。
/// 外側（入力レイヤー）から「どの山か」を指定するときもこれを使う！
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackType {
    /// 場札 (Tableau)。7つの列があるので、列番号 (0-6) を持つ。
    Tableau(u8),
    /// 組札 (Foundation)。4つあるので番号 (0-3) を持つ。
    /// どのスートを積むかは最初に置かれた A で決まるよ。
    Foundation(u8),
    /// 山札 (Stock)。裏向きのカードをここから引く。
    Stock,
    /// 山札からめくったカードを置く場所 (Waste)。
    Waste,
}

impl fmt::Display for StackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackType::Tableau(i) => write!(f, "Tableau({})", i),
            StackType::Foundation(i) => write!(f, "Foundation({})", i),
            StackType::Stock => write!(f, "Stock"),
            StackType::Waste => write!(f, "Waste"),
        }
    }
}

/// カードの山（スタック）そのもの。
///
/// `cards` の最後の要素が「一番上」(top) で、いちばん触りやすいカードだよ。
/// 中身を直接いじれるのはこのクレートの中だけ。外からは読むだけ！
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pile {
    stack_type: StackType,
    cards: Vec<Card>,
}

impl Pile {
    pub fn new(stack_type: StackType) -> Self {
        Self { stack_type, cards: Vec::new() }
    }

    pub(crate) fn with_cards(stack_type: StackType, cards: Vec<Card>) -> Self {
        Self { stack_type, cards }
    }

    pub fn stack_type(&self) -> StackType {
        self.stack_type
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// 表向きの部分（末尾の連続した表向きカード）が始まる位置。
    /// 全部裏向きなら `len()` を返すよ。
    pub fn face_up_start(&self) -> usize {
        self.cards
            .iter()
            .rposition(|card| !card.is_face_up)
            .map_or(0, |last_hidden| last_hidden + 1)
    }

    pub(crate) fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub(crate) fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// `depth` から上を丸ごと取り出す。取り出したカードの所有権は呼び出し側へ。
    pub(crate) fn split_off(&mut self, depth: usize) -> Vec<Card> {
        self.cards.split_off(depth)
    }

    /// カードの列をまとめて一番上に積む。
    pub(crate) fn append(&mut self, cards: &mut Vec<Card>) {
        self.cards.append(cards);
    }

    /// 一番上のカードが裏向きなら表にする。表にしたら true。
    pub(crate) fn reveal_top(&mut self) -> bool {
        match self.cards.last_mut() {
            Some(card) if !card.is_face_up => {
                card.flip(true);
                true
            }
            _ => false,
        }
    }
}

impl fmt::Display for Pile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: [{}]", self.stack_type, self.cards.iter().join(" "))
    }
}
