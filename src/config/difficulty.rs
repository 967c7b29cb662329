// src/config/difficulty.rs
//! 難易度と、それで決まる「できること」(Capabilities) の設定だよ。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::GameError;

/// ゲームの難易度。外部設定として渡されるよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// 組札からも持ち上げられる + Undo できる。
    Beginner,
    /// Undo できる。
    #[default]
    Medium,
    /// Undo なし！
    Expert,
}

impl Difficulty {
    /// 難易度を能力セットに変換する。セッション開始時に一度だけ呼ぶ想定。
    pub fn capabilities(self) -> Capabilities {
        match self {
            Difficulty::Beginner => Capabilities { allow_undo: true, allow_foundation_pickup: true },
            Difficulty::Medium => Capabilities { allow_undo: true, allow_foundation_pickup: false },
            Difficulty::Expert => Capabilities { allow_undo: false, allow_foundation_pickup: false },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Medium => "medium",
            Difficulty::Expert => "expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "medium" => Ok(Difficulty::Medium),
            "expert" => Ok(Difficulty::Expert),
            _ => Err(GameError::UnknownDifficulty(s.to_string())),
        }
    }
}

/// 難易度から決まる能力のスイッチ。`pick_up` と `undo` がこれを見るよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    pub allow_undo: bool,
    pub allow_foundation_pickup: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Difficulty::default().capabilities()
    }
}
