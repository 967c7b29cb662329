// src/config/rules.rs
//! クロンダイクのルールで決まっている数字をまとめておくよ！

/// 場札 (Tableau) の列数。
pub const TABLEAU_COUNT: usize = 7;
/// 組札 (Foundation) の数。スートの数と同じ。
pub const FOUNDATION_COUNT: usize = 4;
/// 1スートあたりの枚数 (A〜K)。組札が完成したときの枚数でもある。
pub const CARDS_PER_SUIT: usize = 13;
/// デッキの枚数。
pub const DECK_SIZE: usize = FOUNDATION_COUNT * CARDS_PER_SUIT;
/// 最初に場札へ配る枚数 (1+2+...+7)。
pub const INITIAL_TABLEAU_CARDS: usize = TABLEAU_COUNT * (TABLEAU_COUNT + 1) / 2;
/// 配り終わった後に山札 (Stock) に残る枚数。
pub const INITIAL_STOCK_CARDS: usize = DECK_SIZE - INITIAL_TABLEAU_CARDS;
