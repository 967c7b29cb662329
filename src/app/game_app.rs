// src/app/game_app.rs

use log::{debug, info, warn};

use crate::components::card::Card;
use crate::components::game_state::{GameState, GameStatus};
use crate::components::selection::{PickedFrom, Selection};
use crate::components::stack::StackType;
use crate::config::{Capabilities, Difficulty, SessionConfig};
use crate::error::GameError;
use crate::logic::auto_move;
use crate::logic::deck::Deck;
use crate::logic::rules;
use crate::protocol::GameStateData;
use crate::systems::{
    DealInitialCardsSystem, DrawOutcome, DropOutcome, MoveCardSystem, StockSystem, WinConditionSystem,
};

use super::history::MoveHistory;

/// 持ち上げの結果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickUp {
    /// カードを持った！（中身のコピーと持ち上げ元）
    Picked { cards: Vec<Card>, origin: PickedFrom },
    /// 空の山をクリックしただけ。
    Empty,
}

/// Undo の結果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoOutcome {
    Restored,
    NoHistory,
    /// 今の難易度では Undo できない。
    Disabled,
}

// --- ゲーム全体のアプリケーション状態を管理する構造体 ---
/// 1回のゲームセッションだよ！🃏
///
/// 盤面・持っているカード・Undo 履歴・難易度をまとめて持つ。
/// 入力レイヤーはこの構造体のメソッド（インテント）だけを呼ぶ想定。
/// 盤面を直接いじる手段は外には出していないよ。
pub struct GameApp {
    state: GameState,
    selection: Option<Selection>,
    history: MoveHistory,
    difficulty: Difficulty,
    capabilities: Capabilities,
    move_count: u32,
    deal_system: DealInitialCardsSystem,
    move_system: MoveCardSystem,
    stock_system: StockSystem,
    win_system: WinConditionSystem,
}

impl GameApp {
    /// 指定した難易度で、ランダムにシャッフルしたゲームを始める。
    pub fn new(difficulty: Difficulty) -> Result<Self, GameError> {
        Self::with_config(SessionConfig { difficulty, seed: None })
    }

    pub fn with_config(config: SessionConfig) -> Result<Self, GameError> {
        let mut app = Self {
            state: GameState::new(),
            selection: None,
            history: MoveHistory::new(),
            difficulty: config.difficulty,
            capabilities: config.difficulty.capabilities(),
            move_count: 0,
            deal_system: DealInitialCardsSystem::default(),
            move_system: MoveCardSystem::default(),
            stock_system: StockSystem::default(),
            win_system: WinConditionSystem::default(),
        };
        app.new_game(config.seed)?;
        Ok(app)
    }

    /// 同じ難易度で新しいゲームを配り直す。持っているカードと履歴は捨てるよ。
    pub fn new_game(&mut self, seed: Option<u64>) -> Result<(), GameError> {
        let mut deck = Deck::build();
        deck.shuffle_with_seed(seed);

        let mut state = GameState::new();
        self.deal_system.execute(&mut state, &mut deck)?;
        self.win_system.execute(&mut state);

        self.state = state;
        self.selection = None;
        self.history.clear();
        self.move_count = 0;
        info!("[GameApp] new {} game (seed: {:?})", self.difficulty, seed);
        self.verify_integrity();
        Ok(())
    }

    /// 難易度を切り替えて、新しいゲームを始める（メニューに戻るのと同じ）。
    pub fn set_difficulty(&mut self, difficulty: Difficulty, seed: Option<u64>) -> Result<(), GameError> {
        self.difficulty = difficulty;
        self.capabilities = difficulty.capabilities();
        self.new_game(seed)
    }

    // --- インテント ---

    /// カードを持ち上げる。履歴にはまだ何も積まないよ（ドロップ成功時にまとめて積む）。
    pub fn pick_up(&mut self, origin: StackType, depth: Option<usize>) -> Result<PickUp, GameError> {
        if self.selection.is_some() {
            return Err(GameError::SelectionPending);
        }
        let picked = self.move_system.pick_up(&mut self.state, origin, depth, self.capabilities)?;
        let result = match picked {
            Some(selection) => {
                let result = PickUp::Picked { cards: selection.cards().to_vec(), origin: selection.origin() };
                self.selection = Some(selection);
                result
            }
            None => PickUp::Empty,
        };
        self.verify_integrity();
        Ok(result)
    }

    /// 持っているカードを `destination` に置く。置けなければ元の場所に戻る。
    pub fn attempt_drop(&mut self, destination: StackType) -> Result<DropOutcome, GameError> {
        let selection = self.selection.take().ok_or(GameError::NoSelection)?;
        let before = self.move_system.state_before_pickup(&self.state, &selection);

        let outcome = self.move_system.drop(&mut self.state, selection, destination);
        if outcome == DropOutcome::Moved {
            self.record(before);
            self.win_system.execute(&mut self.state);
        }
        self.verify_integrity();
        Ok(outcome)
    }

    /// 持っているカードを元に戻す（どこでもない場所で離したとき）。戻したら true。
    pub fn cancel_selection(&mut self) -> bool {
        match self.selection.take() {
            Some(selection) => {
                debug!("[GameApp] returning {} held cards", selection.len());
                self.move_system.return_to_origin(&mut self.state, selection);
                self.verify_integrity();
                true
            }
            None => false,
        }
    }

    /// 山札をクリック。めくるか、空ならリサイクル。
    pub fn draw_or_recycle(&mut self) -> Result<DrawOutcome, GameError> {
        if self.selection.is_some() {
            return Err(GameError::SelectionPending);
        }
        let before = self.state.clone();
        let outcome = self.stock_system.draw_or_recycle(&mut self.state);
        if outcome != DrawOutcome::Nothing {
            self.record(before);
        }
        self.verify_integrity();
        Ok(outcome)
    }

    /// ひとつ前の盤面に戻す。持っているカードは先に元へ戻すよ。
    pub fn undo(&mut self) -> UndoOutcome {
        if !self.capabilities.allow_undo {
            debug!("[GameApp] undo is disabled on {}", self.difficulty);
            return UndoOutcome::Disabled;
        }
        self.cancel_selection();

        match self.history.pop() {
            Some(snapshot) => {
                self.state = snapshot;
                self.win_system.execute(&mut self.state);
                info!("[GameApp] undo ({} snapshots left)", self.history.len());
                self.verify_integrity();
                UndoOutcome::Restored
            }
            None => {
                debug!("[GameApp] {}", GameError::EmptyHistory);
                UndoOutcome::NoHistory
            }
        }
    }

    /// 全部表向きなら、組札へ行けるカードをまとめて送る。動かした枚数を返す。
    ///
    /// 履歴は1回分だけ積むので、Undo するとまとめて元に戻るよ。
    pub fn auto_finish(&mut self) -> Result<usize, GameError> {
        if self.selection.is_some() {
            return Err(GameError::SelectionPending);
        }
        let before = self.state.clone();
        let moves = auto_move::run_auto_finish(&mut self.state);
        if moves > 0 {
            self.record(before);
            self.win_system.execute(&mut self.state);
        }
        self.verify_integrity();
        Ok(moves)
    }

    // --- 状態の問い合わせ ---

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    pub fn is_won(&self) -> bool {
        self.state.is_won()
    }

    pub fn all_tableau_face_up(&self) -> bool {
        self.state.all_tableau_face_up()
    }

    /// オートフィニッシュのボタンを出していいか。
    pub fn can_auto_finish(&self) -> bool {
        rules::can_auto_finish(&self.state)
    }

    /// 今持っている1枚を受け付ける組札の一覧（ハイライト用）。
    pub fn accepting_foundations(&self) -> Vec<StackType> {
        let Some([card]) = self.selection.as_ref().map(Selection::cards) else {
            return Vec::new();
        };
        self.state
            .foundation_piles()
            .iter()
            .filter(|pile| rules::can_move_to_foundation(card, pile))
            .map(|pile| pile.stack_type())
            .collect()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    // --- 保存と読み込み ---

    /// 今の盤面を保存用の形にする。カードを持っている最中なら、持つ前の盤面になるよ。
    pub fn snapshot(&self) -> GameStateData {
        match &self.selection {
            Some(selection) => GameStateData::from(&self.move_system.state_before_pickup(&self.state, selection)),
            None => GameStateData::from(&self.state),
        }
    }

    pub fn save_json(&self) -> Result<String, GameError> {
        self.snapshot().to_json()
    }

    /// 保存した盤面を読み込む。検証に通らなければ今のゲームはそのまま。
    ///
    /// 読み込みは新しいゲーム扱いなので、履歴と手数はリセットされる。
    pub fn load_state(&mut self, data: GameStateData) -> Result<(), GameError> {
        let mut state = GameState::try_from(data)?;
        self.win_system.execute(&mut state);

        self.state = state;
        self.selection = None;
        self.history.clear();
        self.move_count = 0;
        info!("[GameApp] loaded saved game ({} cards in stock)", self.state.stock().len());
        self.verify_integrity();
        Ok(())
    }

    pub fn load_json(&mut self, json: &str) -> Result<(), GameError> {
        self.load_state(GameStateData::from_json(json)?)
    }

    // --- 内部ヘルパー ---

    /// 成功した操作1回分を記録する。
    fn record(&mut self, before: GameState) {
        if self.capabilities.allow_undo {
            self.history.push(before);
        }
        self.move_count += 1;
    }

    /// カードの増減・重複がないか確認する。開発ビルドでは即パニック。
    fn verify_integrity(&self) {
        let checked = match &self.selection {
            Some(selection) => self.state.check_integrity(selection.cards()),
            None => self.state.check_resting(),
        };
        if let Err(err) = checked {
            warn!("[GameApp] {}", err);
            debug_assert!(false, "{}", err);
        }
    }
}
