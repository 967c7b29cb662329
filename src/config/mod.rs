// src/config/mod.rs
//! ルール定数とセッション設定。

pub mod difficulty;
pub mod rules;

use serde::{Deserialize, Serialize};

use crate::error::GameError;
pub use difficulty::{Capabilities, Difficulty};

/// 1セッション分の設定。入力レイヤーから JSON で渡されることもあるよ。
///
/// ```json
/// { "difficulty": "expert", "seed": 42 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub difficulty: Difficulty,
    /// 指定するとシャッフルが再現可能になる。
    pub seed: Option<u64>,
}

impl SessionConfig {
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        Ok(serde_json::from_str(json)?)
    }
}
