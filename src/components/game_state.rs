// src/components/game_state.rs

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::components::card::Card;
use crate::components::stack::{Pile, StackType};
use crate::config::rules::{DECK_SIZE, FOUNDATION_COUNT, TABLEAU_COUNT};
use crate::error::GameError;
use crate::logic::rules;

/// ゲーム全体の進み具合を表す列挙型だよ！🏆
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// ゲームが進行中
    #[default]
    Playing,
    /// 勝利！4つの組札が全部 K まで積み上がった
    Won,
}

/// 盤面まるごと。13個の山（場札7、組札4、山札1、捨て札1）と勝利フラグを持つよ。
///
/// 持ち主はセッション（`GameApp`）ひとりだけ。中身を変えられるのはクレート内の
/// システムだけで、外からは読み取り専用のアクセサで見る。
/// `PartialEq` は全カードの並びと向きまで比べる構造比較！
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    tableau: [Pile; TABLEAU_COUNT],
    foundations: [Pile; FOUNDATION_COUNT],
    stock: Pile,
    waste: Pile,
    status: GameStatus,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// 空っぽの盤面を作る。カードは `DealInitialCardsSystem` が配るよ。
    pub fn new() -> Self {
        Self {
            tableau: std::array::from_fn(|i| Pile::new(StackType::Tableau(i as u8))),
            foundations: std::array::from_fn(|i| Pile::new(StackType::Foundation(i as u8))),
            stock: Pile::new(StackType::Stock),
            waste: Pile::new(StackType::Waste),
            status: GameStatus::Playing,
        }
    }

    /// 山ごとのカード列から盤面を組み立てる。スナップショットの復元で使う。
    pub(crate) fn from_piles(
        tableau: [Vec<Card>; TABLEAU_COUNT],
        foundations: [Vec<Card>; FOUNDATION_COUNT],
        stock: Vec<Card>,
        waste: Vec<Card>,
    ) -> Self {
        let mut tableau = tableau.into_iter();
        let mut foundations = foundations.into_iter();
        let mut state = Self {
            tableau: std::array::from_fn(|i| {
                Pile::with_cards(StackType::Tableau(i as u8), tableau.next().unwrap_or_default())
            }),
            foundations: std::array::from_fn(|i| {
                Pile::with_cards(StackType::Foundation(i as u8), foundations.next().unwrap_or_default())
            }),
            stock: Pile::with_cards(StackType::Stock, stock),
            waste: Pile::with_cards(StackType::Waste, waste),
            status: GameStatus::Playing,
        };
        state.refresh_status();
        state
    }

    pub fn tableau_piles(&self) -> &[Pile] {
        &self.tableau
    }

    pub fn foundation_piles(&self) -> &[Pile] {
        &self.foundations
    }

    pub fn tableau(&self, index: usize) -> Option<&Pile> {
        self.tableau.get(index)
    }

    pub fn foundation(&self, index: usize) -> Option<&Pile> {
        self.foundations.get(index)
    }

    pub fn stock(&self) -> &Pile {
        &self.stock
    }

    pub fn waste(&self) -> &Pile {
        &self.waste
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// `StackType` から山を引く。範囲外の番号なら None。
    pub fn pile(&self, stack_type: StackType) -> Option<&Pile> {
        match stack_type {
            StackType::Tableau(i) => self.tableau.get(usize::from(i)),
            StackType::Foundation(i) => self.foundations.get(usize::from(i)),
            StackType::Stock => Some(&self.stock),
            StackType::Waste => Some(&self.waste),
        }
    }

    pub(crate) fn pile_mut(&mut self, stack_type: StackType) -> Option<&mut Pile> {
        match stack_type {
            StackType::Tableau(i) => self.tableau.get_mut(usize::from(i)),
            StackType::Foundation(i) => self.foundations.get_mut(usize::from(i)),
            StackType::Stock => Some(&mut self.stock),
            StackType::Waste => Some(&mut self.waste),
        }
    }

    /// 山札と捨て札を同時に借りる（ドロー／リサイクル用）。
    pub(crate) fn stock_and_waste_mut(&mut self) -> (&mut Pile, &mut Pile) {
        (&mut self.stock, &mut self.waste)
    }

    pub(crate) fn tableau_mut(&mut self, index: usize) -> Option<&mut Pile> {
        self.tableau.get_mut(index)
    }

    pub(crate) fn foundation_mut(&mut self, index: usize) -> Option<&mut Pile> {
        self.foundations.get_mut(index)
    }

    pub(crate) fn waste_mut(&mut self) -> &mut Pile {
        &mut self.waste
    }

    pub(crate) fn stock_mut(&mut self) -> &mut Pile {
        &mut self.stock
    }

    /// 勝利判定。状態を変えない純粋な関数だよ。
    pub fn is_won(&self) -> bool {
        rules::is_won(self)
    }

    /// 場札のカードが全部表向きか（隠れた情報がもう無いか）。
    pub fn all_tableau_face_up(&self) -> bool {
        rules::all_tableau_face_up(self)
    }

    /// 勝利フラグを盤面から計算し直す。新しく勝利になったら true。
    pub(crate) fn refresh_status(&mut self) -> bool {
        let was_won = self.status == GameStatus::Won;
        self.status = if self.is_won() { GameStatus::Won } else { GameStatus::Playing };
        !was_won && self.status == GameStatus::Won
    }

    /// 全部の山のカードを、場札 → 組札 → 山札 → 捨て札の順に並べて返す。
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> {
        self.tableau
            .iter()
            .chain(self.foundations.iter())
            .chain([&self.stock, &self.waste])
            .flat_map(|pile| pile.cards().iter())
    }

    pub fn card_count(&self) -> usize {
        self.all_cards().count()
    }

    /// 盤面の不変条件をチェックする。
    ///
    /// `held` は今プレイヤーが持っているカード。盤面のカードと合わせてちょうど
    /// 52種類が1枚ずつになっていないとダメ。ほかに、山札は全部裏、捨て札は全部表、
    /// 組札は同じスートで A から順番、場札の裏向きカードは表向きより下だけ。
    pub fn check_integrity(&self, held: &[Card]) -> Result<(), GameError> {
        let total = self.card_count() + held.len();
        if total != DECK_SIZE {
            return Err(GameError::CorruptState(format!("expected {} cards, found {}", DECK_SIZE, total)));
        }

        let mut seen = HashSet::with_capacity(DECK_SIZE);
        for card in self.all_cards().chain(held.iter()) {
            if !seen.insert(card.id()) {
                return Err(GameError::CorruptState(format!("duplicate card {}", card)));
            }
        }

        if let Some(card) = self.stock.cards().iter().find(|card| card.is_face_up) {
            return Err(GameError::CorruptState(format!("face-up card {} in stock", card)));
        }
        if let Some(card) = self.waste.cards().iter().find(|card| !card.is_face_up) {
            return Err(GameError::CorruptState(format!("face-down card {} in waste", card)));
        }
        for pile in &self.foundations {
            if !rules::is_valid_foundation_sequence(pile.cards()) {
                return Err(GameError::CorruptState(format!("foundation out of order: {}", pile)));
            }
        }
        for pile in &self.tableau {
            // 最後の裏向きカードより下に表向きがあったら、一度めくったカードが隠れたことになる
            let revealed_below_hidden = pile.cards()[..pile.face_up_start()].iter().any(|card| card.is_face_up);
            if revealed_below_hidden {
                return Err(GameError::CorruptState(format!("hidden card above a revealed one: {}", pile)));
            }
        }
        Ok(())
    }

    /// 誰もカードを持っていない「落ち着いた」盤面のチェック。
    ///
    /// `check_integrity` に加えて、場札の一番上が全部表向きなことも確かめる。
    /// 持ち上げ中は元の列の一番上が裏のままなので、そのときは使わないでね。
    pub fn check_resting(&self) -> Result<(), GameError> {
        self.check_integrity(&[])?;
        if let Some(pile) = self.tableau.iter().find(|pile| pile.top().is_some_and(|top| !top.is_face_up)) {
            return Err(GameError::CorruptState(format!("face-down card on top of {}", pile)));
        }
        Ok(())
    }
}
