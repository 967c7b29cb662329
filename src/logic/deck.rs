// src/logic/deck.rs

use itertools::iproduct;
use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng, SeedableRng};

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
use crate::config::rules::DECK_SIZE;
use crate::error::GameError;

/// 52枚のカードデッキだよ！🃏
///
/// 新しいゲームのたびに作って、一度だけシャッフルして、配り切ったら捨てる。
/// 配った後のカードは盤面 (`GameState`) のものになるよ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// 標準的な52枚のデッキを作る。
    ///
    /// 並びはスート順 (ハート, ダイヤ, クラブ, スペード) × ランク昇順 (A..K)。
    /// 全部裏向き (`is_face_up: false`) だよ！
    pub fn build() -> Self {
        let cards: Vec<Card> = iproduct!(ALL_SUITS, ALL_RANKS)
            .map(|(suit, rank)| Card::new(suit, rank))
            .collect();
        debug_assert_eq!(cards.len(), DECK_SIZE);
        Self { cards }
    }

    /// 決まった並びのデッキを作る（テストや再現用）。`deal` は最後の要素から配るよ。
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// 一様ランダムな並べ替え（Fisher–Yates）。ゲームで唯一の乱数はここ！🎲
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// シードがあれば `StdRng` で再現可能に、無ければ OS 由来の乱数でシャッフルする。
    pub fn shuffle_with_seed(&mut self, seed: Option<u64>) {
        match seed {
            Some(seed) => {
                debug!("[Deck] shuffling with seed {}", seed);
                self.shuffle(&mut StdRng::seed_from_u64(seed));
            }
            None => self.shuffle(&mut thread_rng()),
        }
    }

    /// 一番最後のカードを取り出して返す。もう無ければ `EmptyDeck`。
    pub fn deal(&mut self) -> Result<Card, GameError> {
        self.cards.pop().ok_or(GameError::EmptyDeck)
    }
}
