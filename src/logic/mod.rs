// src/logic/mod.rs
//! ゲームのルールと、盤面に依存しない純粋なロジックたち。

pub mod auto_move;
pub mod deck;
pub mod rules;
