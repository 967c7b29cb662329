// src/logic/rules/tests.rs
//! rules モジュール内の関数のユニットテスト。

use super::*;
use crate::components::card::{Card, Rank, Suit};
use crate::components::game_state::GameState;
use crate::components::selection::PickedFrom;
use crate::components::stack::{Pile, StackType};
use crate::config::Difficulty;
use crate::error::GameError;

// --- テスト用ヘルパー関数 ---
fn up(suit: Suit, rank: Rank) -> Card {
    Card::face_up(suit, rank)
}

fn down(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn pile(stack_type: StackType, cards: Vec<Card>) -> Pile {
    Pile::with_cards(stack_type, cards)
}

/// テスト用の盤面。場札0 = [裏2♠, 表9♥, 表8♣], 捨て札 = [表A♦], 組札0 = [表A♥]。
fn sample_state() -> GameState {
    let mut tableau: [Vec<Card>; 7] = Default::default();
    tableau[0] = vec![down(Suit::Spade, Rank::Two), up(Suit::Heart, Rank::Nine), up(Suit::Club, Rank::Eight)];
    let mut foundations: [Vec<Card>; 4] = Default::default();
    foundations[0] = vec![up(Suit::Heart, Rank::Ace)];
    GameState::from_piles(tableau, foundations, Vec::new(), vec![up(Suit::Diamond, Rank::Ace)])
}

// --- 各ルール関数のテスト ---

#[test]
fn test_card_color() {
    assert_eq!(up(Suit::Heart, Rank::Two).color(), CardColor::Red);
    assert_eq!(up(Suit::Spade, Rank::Two).color(), CardColor::Black);
    assert!(up(Suit::Club, Rank::Seven).is_opposite_color(&up(Suit::Heart, Rank::Eight)));
    assert!(!up(Suit::Diamond, Rank::Seven).is_opposite_color(&up(Suit::Heart, Rank::Eight)));
}

#[test]
fn test_can_place_on_foundation() {
    let ace_heart = up(Suit::Heart, Rank::Ace);
    let two_heart = up(Suit::Heart, Rank::Two);
    let three_heart = up(Suit::Heart, Rank::Three);
    let ace_spade = up(Suit::Spade, Rank::Ace);
    let two_spade = up(Suit::Spade, Rank::Two);

    assert!(can_place_on_foundation(&ace_heart, None), "空の組札には A が置けるはず");
    assert!(can_place_on_foundation(&ace_spade, None), "空の組札ならどのスートの A でも OK");
    assert!(!can_place_on_foundation(&two_heart, None));
    assert!(can_place_on_foundation(&two_heart, Some(&ace_heart)));
    assert!(!can_place_on_foundation(&three_heart, Some(&ace_heart)), "ランク飛ばしはダメ");
    assert!(!can_place_on_foundation(&two_spade, Some(&ace_heart)), "スート違いはダメ");
    assert!(!can_place_on_foundation(&ace_spade, Some(&ace_heart)));
    println!("組札ルールチェックテスト、成功！🎉");
}

#[test]
fn test_can_place_on_tableau() {
    let queen_red = up(Suit::Heart, Rank::Queen);
    let jack_black = up(Suit::Spade, Rank::Jack);
    let jack_red = up(Suit::Diamond, Rank::Jack);
    let ten_black = up(Suit::Spade, Rank::Ten);
    let king = up(Suit::Club, Rank::King);

    assert!(can_place_on_tableau(&jack_black, Some(&queen_red)));
    assert!(!can_place_on_tableau(&queen_red, Some(&jack_black)), "ランクが上がるのはダメ");
    assert!(!can_place_on_tableau(&jack_red, Some(&queen_red)), "同色はダメ");
    assert!(!can_place_on_tableau(&ten_black, Some(&queen_red)), "ランク飛ばしはダメ");
    assert!(can_place_on_tableau(&king, None), "空の列には K");
    assert!(!can_place_on_tableau(&queen_red, None), "空の列に Q は置けない");

    let queen_red_facedown = down(Suit::Heart, Rank::Queen);
    assert!(!can_place_on_tableau(&jack_black, Some(&queen_red_facedown)), "裏向きの上には置けない");
    println!("場札ルールチェックテスト、成功！🎉");
}

#[test]
fn test_run_onto_tableau_uses_leading_card() {
    let run = vec![up(Suit::Club, Rank::Seven), up(Suit::Diamond, Rank::Six), up(Suit::Club, Rank::Five)];
    let target = pile(StackType::Tableau(3), vec![down(Suit::Spade, Rank::Four), up(Suit::Heart, Rank::Eight)]);
    assert!(can_move_to_tableau(&run, &target), "7♣ は 8♥ に乗るはず");
    assert!(is_move_valid(&run, &target));

    let wrong = pile(StackType::Tableau(4), vec![up(Suit::Spade, Rank::Eight)]);
    assert!(!can_move_to_tableau(&run, &wrong));
    assert!(!can_move_to_tableau(&[], &target), "空の列は置けない");
}

#[test]
fn test_foundation_accepts_single_cards_only() {
    let foundation = pile(StackType::Foundation(0), vec![up(Suit::Heart, Rank::Ace)]);
    let single = vec![up(Suit::Heart, Rank::Two)];
    let pair = vec![up(Suit::Heart, Rank::Two), up(Suit::Spade, Rank::Ace)];
    assert!(is_move_valid(&single, &foundation));
    assert!(!is_move_valid(&pair, &foundation), "組札には列ごと置けない");
}

#[test]
fn test_stock_and_waste_never_accept_drops() {
    let card = vec![up(Suit::Heart, Rank::King)];
    assert!(!is_move_valid(&card, &Pile::new(StackType::Stock)));
    assert!(!is_move_valid(&card, &Pile::new(StackType::Waste)));
}

#[test]
fn test_foundation_sequence() {
    assert!(is_valid_foundation_sequence(&[]));
    assert!(is_valid_foundation_sequence(&[up(Suit::Club, Rank::Ace), up(Suit::Club, Rank::Two)]));
    assert!(!is_valid_foundation_sequence(&[up(Suit::Club, Rank::Two)]), "A から始まらないとダメ");
    assert!(!is_valid_foundation_sequence(&[up(Suit::Club, Rank::Ace), up(Suit::Spade, Rank::Two)]));
    assert!(!is_valid_foundation_sequence(&[up(Suit::Club, Rank::Ace), up(Suit::Club, Rank::Three)]));
}

#[test]
fn test_stock_waste_rules() {
    let stock = pile(StackType::Stock, vec![down(Suit::Club, Rank::Four)]);
    let waste = pile(StackType::Waste, vec![up(Suit::Heart, Rank::Jack)]);
    let empty_stock = Pile::new(StackType::Stock);
    let empty_waste = Pile::new(StackType::Waste);

    assert!(can_draw(&stock), "ストックがあればめくれるはず");
    assert!(!can_draw(&empty_stock), "ストックが空ならめくれないはず");
    assert!(!can_draw(&waste), "捨て札からはめくれない");

    assert!(can_recycle_waste(&empty_stock, &waste), "ストックが空でウェストがあればリサイクルできるはず");
    assert!(!can_recycle_waste(&stock, &waste), "ストックがある場合はリサイクルできないはず");
    assert!(!can_recycle_waste(&empty_stock, &empty_waste), "両方空なら何もできない");
    assert!(!can_recycle_waste(&empty_waste, &waste), "山の取り違えは受け付けない");
}

#[test]
fn test_win_and_auto_finish_predicates() {
    let state = sample_state();
    assert!(!is_won(&state));
    assert!(!all_tableau_face_up(&state), "2♠ が裏向き");
    assert!(!can_auto_finish(&state));

    let mut tableau: [Vec<Card>; 7] = Default::default();
    tableau[2] = vec![up(Suit::Spade, Rank::King)];
    let open = GameState::from_piles(tableau, Default::default(), Vec::new(), Vec::new());
    assert!(all_tableau_face_up(&open));
    assert!(can_auto_finish(&open));
}

#[test]
fn test_validate_pickup_tableau() {
    let state = sample_state();
    let caps = Difficulty::Medium.capabilities();

    assert_eq!(
        validate_pickup(&state, StackType::Tableau(0), Some(1), caps),
        Ok(Some(PickedFrom::Tableau { pile_index: 0, depth_index: 1 }))
    );
    assert_eq!(
        validate_pickup(&state, StackType::Tableau(0), None, caps),
        Ok(Some(PickedFrom::Tableau { pile_index: 0, depth_index: 2 })),
        "深さ省略なら一番上"
    );
    assert_eq!(
        validate_pickup(&state, StackType::Tableau(0), Some(0), caps),
        Err(GameError::InvalidOrigin { origin: StackType::Tableau(0), depth: Some(0) }),
        "裏向きのカードは持ち上げられない"
    );
    assert!(validate_pickup(&state, StackType::Tableau(0), Some(3), caps).is_err());
    assert!(validate_pickup(&state, StackType::Tableau(7), None, caps).is_err());
    assert_eq!(validate_pickup(&state, StackType::Tableau(1), None, caps), Ok(None), "空の列は Empty");
}

#[test]
fn test_validate_pickup_other_piles() {
    let state = sample_state();
    let medium = Difficulty::Medium.capabilities();
    let beginner = Difficulty::Beginner.capabilities();

    assert_eq!(validate_pickup(&state, StackType::Waste, None, medium), Ok(Some(PickedFrom::Waste)));
    assert_eq!(validate_pickup(&state, StackType::Waste, Some(0), medium), Ok(Some(PickedFrom::Waste)));
    assert!(validate_pickup(&state, StackType::Waste, Some(1), medium).is_err());
    assert!(validate_pickup(&state, StackType::Stock, None, medium).is_err(), "山札からは持ち上げない");

    assert_eq!(
        validate_pickup(&state, StackType::Foundation(0), None, medium),
        Err(GameError::PickupNotAllowed(StackType::Foundation(0)))
    );
    assert_eq!(
        validate_pickup(&state, StackType::Foundation(0), None, beginner),
        Ok(Some(PickedFrom::Foundation { pile_index: 0 }))
    );
    assert_eq!(validate_pickup(&state, StackType::Foundation(1), None, beginner), Ok(None));
    assert!(validate_pickup(&state, StackType::Foundation(4), None, beginner).is_err());
}
