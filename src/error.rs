// src/error.rs
//! エンジン全体で使うエラー型だよ。
//!
//! 「置けなかった」「履歴が空」みたいな普通のゲーム上の結果は、ここのエラーか
//! 各操作の結果 Enum (`DropOutcome` など) で返すよ。パニックはしない！
//! カードの重複・消失みたいな「ありえない」状態だけが `CorruptState` になる。

use std::fmt;

use crate::components::stack::StackType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// 52枚より多く配ろうとした。
    EmptyDeck,
    /// 置き先がそのカードを受け付けない。
    IllegalMove,
    /// 何も持っていないのにドロップしようとした。
    NoSelection,
    /// Undo しようとしたけど履歴が空っぽ。
    EmptyHistory,
    /// 存在しない山や、持ち上げられない位置を指定した。
    InvalidOrigin { origin: StackType, depth: Option<usize> },
    /// もうカードを持っている最中なので、その操作はできない。
    SelectionPending,
    /// 今の難易度ではその山からは持ち上げられない。
    PickupNotAllowed(StackType),
    /// カードの集合が壊れている（重複・消失など）。
    CorruptState(String),
    /// スナップショットの読み書きに失敗した。
    Serialization(String),
    /// 知らない難易度名。
    UnknownDifficulty(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::EmptyDeck => write!(f, "the deck has no cards left to deal"),
            GameError::IllegalMove => write!(f, "the destination does not accept the held cards"),
            GameError::NoSelection => write!(f, "no cards are currently held"),
            GameError::EmptyHistory => write!(f, "there is no move to undo"),
            GameError::InvalidOrigin { origin, depth: Some(depth) } => {
                write!(f, "cannot pick up from {} at depth {}", origin, depth)
            }
            GameError::InvalidOrigin { origin, depth: None } => {
                write!(f, "cannot pick up from {}", origin)
            }
            GameError::SelectionPending => write!(f, "cards are already held; drop them first"),
            GameError::PickupNotAllowed(origin) => {
                write!(f, "picking up from {} is disabled at this difficulty", origin)
            }
            GameError::CorruptState(reason) => write!(f, "corrupt game state: {}", reason),
            GameError::Serialization(reason) => write!(f, "snapshot serialization failed: {}", reason),
            GameError::UnknownDifficulty(name) => write!(f, "unknown difficulty '{}'", name),
        }
    }
}

impl std::error::Error for GameError {}

impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        GameError::Serialization(err.to_string())
    }
}
