// src/lib.rs

//! クロンダイク（ソリティア）のルールエンジンだよ！🃏
//!
//! 描画や入力は持たない。入力レイヤーは [`GameApp`] のインテント
//! (`pick_up` / `attempt_drop` / `draw_or_recycle` / `undo` / `auto_finish` / `new_game`)
//! を呼んで、返ってきた結果と [`GameState`] を見て画面を作る想定。
//!
//! ```no_run
//! use klondike_engine::{Difficulty, GameApp, StackType};
//!
//! let mut app = GameApp::new(Difficulty::Medium)?;
//! app.draw_or_recycle()?;
//! app.pick_up(StackType::Waste, None)?;
//! app.attempt_drop(StackType::Tableau(0))?;
//! # Ok::<(), klondike_engine::GameError>(())
//! ```

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod logic;
pub mod protocol;
pub mod systems;

// よく使う型はルートから使えるようにしておくね。
pub use app::game_app::{GameApp, PickUp, UndoOutcome};
pub use app::history::MoveHistory;
pub use components::card::{Card, CardColor, CardId, Rank, Suit};
pub use components::game_state::{GameState, GameStatus};
pub use components::selection::{PickedFrom, Selection};
pub use components::stack::{Pile, StackType};
pub use config::{Capabilities, Difficulty, SessionConfig};
pub use error::GameError;
pub use logic::deck::Deck;
pub use protocol::{CardData, GameStateData};
pub use systems::{DrawOutcome, DropOutcome};
