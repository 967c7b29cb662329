// src/protocol.rs

// 盤面を外に出すときのデータ形式（保存ファイルの形）を定義するよ！💌
// 山ごとに (スート, ランク, 表向き) の3つ組リストを並べた、シンプルな JSON になる。
//
// {"tableau": [[["spades", 13, true]], ...7列], "foundation": [...4山], "stock": [...], "waste": [...]}
use serde::{Deserialize, Serialize};

use crate::components::card::{Card, Rank, Suit};
use crate::components::game_state::GameState;
use crate::components::stack::Pile;
use crate::config::rules::{FOUNDATION_COUNT, TABLEAU_COUNT};
use crate::error::GameError;

/// カード1枚の状態。JSON では `["hearts", 1, true]` みたいな配列になるよ。
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardData(pub Suit, pub Rank, pub bool);

impl From<&Card> for CardData {
    fn from(card: &Card) -> Self {
        CardData(card.suit, card.rank, card.is_face_up)
    }
}

impl From<CardData> for Card {
    fn from(CardData(suit, rank, is_face_up): CardData) -> Self {
        Card { suit, rank, is_face_up }
    }
}

/// ゲームの状態全体を表すデータ構造だよ。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GameStateData {
    pub tableau: Vec<Vec<CardData>>,
    pub foundation: Vec<Vec<CardData>>,
    pub stock: Vec<CardData>,
    pub waste: Vec<CardData>,
}

fn pile_data(pile: &Pile) -> Vec<CardData> {
    pile.cards().iter().map(CardData::from).collect()
}

fn into_cards(data: Vec<CardData>) -> Vec<Card> {
    data.into_iter().map(Card::from).collect()
}

/// 山の数が合っているか確かめて、固定長の配列にする。
fn into_piles<const N: usize>(data: Vec<Vec<CardData>>, what: &str) -> Result<[Vec<Card>; N], GameError> {
    let found = data.len();
    let piles: Vec<Vec<Card>> = data.into_iter().map(into_cards).collect();
    piles
        .try_into()
        .map_err(|_| GameError::CorruptState(format!("expected {} {} piles, found {}", N, what, found)))
}

impl From<&GameState> for GameStateData {
    fn from(state: &GameState) -> Self {
        GameStateData {
            tableau: state.tableau_piles().iter().map(pile_data).collect(),
            foundation: state.foundation_piles().iter().map(pile_data).collect(),
            stock: pile_data(state.stock()),
            waste: pile_data(state.waste()),
        }
    }
}

impl TryFrom<GameStateData> for GameState {
    type Error = GameError;

    /// 盤面に戻す。山の数とカードの整合性（52枚ちょうど、重複なし、場札の裏表…）をチェックするよ。
    fn try_from(data: GameStateData) -> Result<Self, Self::Error> {
        let tableau: [Vec<Card>; TABLEAU_COUNT] = into_piles(data.tableau, "tableau")?;
        let foundations: [Vec<Card>; FOUNDATION_COUNT] = into_piles(data.foundation, "foundation")?;
        let state = GameState::from_piles(tableau, foundations, into_cards(data.stock), into_cards(data.waste));
        state.check_resting()?;
        Ok(state)
    }
}

impl GameStateData {
    pub fn to_json(&self) -> Result<String, GameError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, GameError> {
        Ok(serde_json::from_str(json)?)
    }
}
