// src/systems/deal_system.rs

use log::{debug, info};

use crate::components::game_state::GameState;
use crate::config::rules::{DECK_SIZE, TABLEAU_COUNT};
use crate::error::GameError;
use crate::logic::deck::Deck;

// === 初期カード配置システム！ ===
// ゲーム開始時に、7つの場札と山札にカードを配る役割を担うシステムだよ。
#[derive(Default)]
pub struct DealInitialCardsSystem;

impl DealInitialCardsSystem {
    pub fn new() -> Self {
        Self
    }

    /// ゲームの初期カード配置を実行する関数だよ！ 🎉
    ///
    /// # 処理の流れ
    /// 1. 場札 (Tableau) の i 列目に i+1 枚を配る。各列で最後に配ったカードだけ表向き。
    /// 2. 残りの24枚を、配った順に裏向きのまま山札 (Stock) に積む。
    ///
    /// デッキはシャッフル済みで渡してね。配り終わったデッキは空っぽになる。
    pub fn execute(&self, state: &mut GameState, deck: &mut Deck) -> Result<(), GameError> {
        debug_assert_eq!(deck.len(), DECK_SIZE, "dealing requires a full deck");
        debug_assert_eq!(state.card_count(), 0, "dealing requires an empty board");

        // --- 1. 場札 (Tableau) への配置 ---
        for tableau_index in 0..TABLEAU_COUNT {
            for card_in_tableau in 0..=tableau_index {
                let mut card = deck.deal()?;
                // その列の一番上のカードだけ表向きにするよ！👀
                card.flip(card_in_tableau == tableau_index);
                if let Some(pile) = state.tableau_mut(tableau_index) {
                    pile.push(card);
                }
            }
            debug!("[Deal] {}", state.tableau_piles()[tableau_index]);
        }

        // --- 2. 山札 (Stock) への配置 ---
        let stock = state.stock_mut();
        while !deck.is_empty() {
            let mut card = deck.deal()?;
            card.flip(false);
            stock.push(card);
        }

        info!(
            "[Deal] dealt {} tableau cards, {} cards left in stock",
            state.tableau_piles().iter().map(|pile| pile.len()).sum::<usize>(),
            state.stock().len()
        );
        Ok(())
    }
}
