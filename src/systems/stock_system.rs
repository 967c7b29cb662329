// src/systems/stock_system.rs
//! 山札 (Stock) をクリックしたときの処理だよ。
//! 山札があれば1枚めくって捨て札へ、空っぽなら捨て札をまとめて山札に戻す！🔄

use log::{debug, info};

use crate::components::card::Card;
use crate::components::game_state::GameState;
use crate::logic::rules::stock_waste;

/// 山札クリックの結果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOutcome {
    /// 1枚めくって捨て札に置いた。
    Drew(Card),
    /// 捨て札を山札に戻した（戻した枚数）。
    Recycled(usize),
    /// 山札も捨て札も空なので何もしなかった。
    Nothing,
}

#[derive(Default)]
pub struct StockSystem;

impl StockSystem {
    pub fn new() -> Self {
        Self
    }

    /// 山札を1回クリックした処理。
    pub fn draw_or_recycle(&self, state: &mut GameState) -> DrawOutcome {
        let (stock, waste) = state.stock_and_waste_mut();

        if stock_waste::can_draw(stock) {
            if let Some(mut card) = stock.pop() {
                card.flip(true);
                waste.push(card);
                debug!("[Stock] drew {} ({} left in stock)", card, stock.len());
                return DrawOutcome::Drew(card);
            }
        }

        if stock_waste::can_recycle_waste(stock, waste) {
            // 捨て札の上から順に山札へ積むので、次のドローは一番古い捨て札からになる
            let mut count = 0;
            while let Some(mut card) = waste.pop() {
                card.flip(false);
                stock.push(card);
                count += 1;
            }
            info!("[Stock] recycled {} cards from waste back to stock", count);
            return DrawOutcome::Recycled(count);
        }

        debug!("[Stock] stock and waste are both empty");
        DrawOutcome::Nothing
    }
}
