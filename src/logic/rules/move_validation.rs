// src/logic/rules/move_validation.rs
//! 持ち上げ・移動の全体的な妥当性チェックを行う。

use log::debug;

use crate::components::card::Card;
use crate::components::game_state::GameState;
use crate::components::selection::PickedFrom;
use crate::components::stack::{Pile, StackType};
use crate::config::Capabilities;
use crate::error::GameError;

use super::{foundation, tableau};

/// カード列 `run` を山 `target` に置けるか検証する。
///
/// 組札には1枚ずつしか置けないよ。山札と捨て札には直接置けない。
pub fn is_move_valid(run: &[Card], target: &Pile) -> bool {
    match target.stack_type() {
        StackType::Tableau(_) => tableau::can_move_to_tableau(run, target),
        StackType::Foundation(_) => match run {
            [card] => foundation::can_move_to_foundation(card, target),
            _ => {
                debug!("[Rules Validation] only single cards go to {}", target.stack_type());
                false
            }
        },
        StackType::Stock | StackType::Waste => {
            debug!("[Rules Validation] Moving to {} is not allowed.", target.stack_type());
            false
        }
    }
}

/// 持ち上げ要求が正しいか検証して、持ち上げ元の情報を返す。
///
/// - 場札: `depth` が表向きの部分の中にあること（省略時は一番上の1枚）
/// - 捨て札・組札: 一番上の1枚だけ（`depth` は省略か一番上の位置）
/// - 組札からは `allow_foundation_pickup` のときだけ
/// - 山札からは持ち上げられない（ドローで使う）
///
/// 山が空なら `Ok(None)`。
pub fn validate_pickup(
    state: &GameState,
    origin: StackType,
    depth: Option<usize>,
    capabilities: Capabilities,
) -> Result<Option<PickedFrom>, GameError> {
    let invalid = GameError::InvalidOrigin { origin, depth };
    let pile = state.pile(origin).ok_or_else(|| invalid.clone())?;

    if matches!(origin, StackType::Foundation(_)) && !capabilities.allow_foundation_pickup {
        return Err(GameError::PickupNotAllowed(origin));
    }
    if pile.is_empty() {
        return match (origin, depth) {
            (StackType::Stock, _) => Err(invalid),
            (_, None) => Ok(None),
            (_, Some(_)) => Err(invalid),
        };
    }

    let top_index = pile.len() - 1;
    match origin {
        StackType::Tableau(pile_index) => {
            let depth_index = depth.unwrap_or(top_index);
            if depth_index > top_index || depth_index < pile.face_up_start() {
                return Err(invalid);
            }
            Ok(Some(PickedFrom::Tableau { pile_index, depth_index }))
        }
        StackType::Waste | StackType::Foundation(_) => {
            if depth.is_some_and(|d| d != top_index) {
                return Err(invalid);
            }
            Ok(Some(match origin {
                StackType::Foundation(pile_index) => PickedFrom::Foundation { pile_index },
                _ => PickedFrom::Waste,
            }))
        }
        StackType::Stock => Err(invalid),
    }
}
