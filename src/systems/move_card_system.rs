// src/systems/move_card_system.rs

use log::{debug, warn};

use crate::components::game_state::GameState;
use crate::components::selection::{PickedFrom, Selection};
use crate::components::stack::StackType;
use crate::config::Capabilities;
use crate::error::GameError;
use crate::logic::rules;

/// ドロップの結果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// 置き先に移動できた！
    Moved,
    /// 置けなかったので元の場所に戻した。
    Returned,
}

/// カードの持ち上げ・ドロップ・元に戻す処理を担当するシステムだよ！🖐️➡️🃏
#[derive(Default)]
pub struct MoveCardSystem;

impl MoveCardSystem {
    pub fn new() -> Self {
        Self
    }

    /// カードを持ち上げる。
    ///
    /// 成功すると、カードは元の山から取り出されて `Selection` の持ち物になる。
    /// 山が空なら `Ok(None)`。検証に失敗したら盤面は一切変わらないよ。
    pub fn pick_up(
        &self,
        state: &mut GameState,
        origin: StackType,
        depth: Option<usize>,
        capabilities: Capabilities,
    ) -> Result<Option<Selection>, GameError> {
        let Some(picked_from) = rules::validate_pickup(state, origin, depth, capabilities)? else {
            debug!("[Move] {} is empty, nothing to pick up", origin);
            return Ok(None);
        };
        let invalid = || GameError::InvalidOrigin { origin, depth };
        let pile = state.pile_mut(origin).ok_or_else(invalid)?;

        let cards = match picked_from {
            PickedFrom::Tableau { depth_index, .. } => pile.split_off(depth_index),
            PickedFrom::Waste | PickedFrom::Foundation { .. } => pile.pop().into_iter().collect(),
        };
        debug!("[Move] picked up {} from {:?}", rules::describe_cards(&cards), picked_from);
        Ok(Some(Selection::new(cards, picked_from)))
    }

    /// 持っているカードを `destination` に置こうとする。
    ///
    /// 置ければ移動して、場札から持ってきた場合は元の列の新しい一番上を表にする。
    /// 置けなければ（存在しない山や元の山も含む）元の位置へそのまま戻すよ。
    pub fn drop(&self, state: &mut GameState, selection: Selection, destination: StackType) -> DropOutcome {
        let origin = selection.origin();
        let accepted = destination != origin.stack_type()
            && state
                .pile(destination)
                .is_some_and(|target| rules::is_move_valid(selection.cards(), target));

        if !accepted {
            debug!("[Move] {}: {} onto {}", GameError::IllegalMove, rules::describe_cards(selection.cards()), destination);
            self.return_to_origin(state, selection);
            return DropOutcome::Returned;
        }

        let (mut cards, origin) = selection.into_parts();
        let description = rules::describe_cards(&cards);
        if let Some(target) = state.pile_mut(destination) {
            target.append(&mut cards);
        }
        if let PickedFrom::Tableau { pile_index, .. } = origin {
            if let Some(source) = state.tableau_mut(usize::from(pile_index)) {
                if source.reveal_top() {
                    debug!("[Move] revealed {:?} on {}", source.top(), source.stack_type());
                }
            }
        }
        debug!("[Move] moved {} from {:?} to {}", description, origin, destination);
        DropOutcome::Moved
    }

    /// 持っているカードを、持ち上げた場所・位置へそのまま戻す。
    ///
    /// 場札ならもともとの深さに差し戻し、捨て札から来たカードは表向きを保証する。
    pub fn return_to_origin(&self, state: &mut GameState, selection: Selection) {
        let (mut cards, origin) = selection.into_parts();
        if let PickedFrom::Waste = origin {
            cards.iter_mut().for_each(|card| card.flip(true));
        }
        let target = origin.stack_type();
        match state.pile_mut(target) {
            Some(pile) => {
                if let PickedFrom::Tableau { depth_index, .. } = origin {
                    debug_assert_eq!(pile.len(), depth_index, "origin pile changed while cards were held");
                }
                pile.append(&mut cards);
            }
            None => warn!("[Move] origin {} vanished; {} cards lost", target, cards.len()),
        }
    }

    /// 持ち上げる前の盤面を組み立て直す（Undo 用スナップショットに使う）。
    pub fn state_before_pickup(&self, state: &GameState, selection: &Selection) -> GameState {
        let mut before = state.clone();
        self.return_to_origin(&mut before, selection.clone());
        before
    }
}
