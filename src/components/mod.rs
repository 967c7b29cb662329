// src/components/mod.rs

// ゲームを組み立てる部品たち！カード、山、持っているカード、盤面全体。
pub mod card;
pub mod game_state;
pub mod selection;
pub mod stack;
