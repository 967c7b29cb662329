// src/logic/auto_move.rs
//! カードの自動移動に関するロジックをまとめるモジュールだよ！🪄✨
//! どのカードがどの組札に行けるか探したり、オートフィニッシュを回したりする。

use log::{debug, info};

use crate::components::card::Card;
use crate::components::game_state::GameState;
use crate::components::stack::StackType;
use crate::config::rules::{CARDS_PER_SUIT, FOUNDATION_COUNT};
use crate::logic::rules;

/// カードを受け付けてくれる組札（Foundation）を探すよ。
///
/// 4つの組札を番号順に見て、最初に置けるところを返す。
/// スートで行き先は実質1つに決まるから、順番で結果が変わることはないよ。
pub fn find_automatic_foundation_move(state: &GameState, card: &Card) -> Option<StackType> {
    let found = state
        .foundation_piles()
        .iter()
        .find(|pile| rules::can_move_to_foundation(card, pile))
        .map(|pile| pile.stack_type());
    debug!("[AutoMove] {} -> {:?}", card, found);
    found
}

/// 場札の一番上のカードを、行ける組札へ1枚動かす。動かしたら true。
fn move_tableau_top_to_foundation(state: &mut GameState, tableau_index: usize) -> bool {
    let Some(card) = state.tableau(tableau_index).and_then(|pile| pile.top()).copied() else {
        return false;
    };
    let Some(StackType::Foundation(target)) = find_automatic_foundation_move(state, &card) else {
        return false;
    };
    let moved = state.tableau_mut(tableau_index).and_then(|pile| pile.pop());
    match (moved, state.foundation_mut(usize::from(target))) {
        (Some(card), Some(foundation)) => {
            foundation.push(card);
            true
        }
        _ => false,
    }
}

/// 捨て札の一番上のカードを、行ける組札へ1枚動かす。動かしたら true。
fn move_waste_top_to_foundation(state: &mut GameState) -> bool {
    let Some(card) = state.waste().top().copied() else {
        return false;
    };
    let Some(StackType::Foundation(target)) = find_automatic_foundation_move(state, &card) else {
        return false;
    };
    let moved = state.waste_mut().pop();
    match (moved, state.foundation_mut(usize::from(target))) {
        (Some(card), Some(foundation)) => {
            foundation.push(card);
            true
        }
        _ => false,
    }
}

/// オートフィニッシュ本体！
///
/// 1周ごとに、場札の各列の一番上 → 捨て札の一番上、の順で組札へ送れるだけ送る。
/// 1周まるごと何も動かなくなったら終わり。動かした枚数を返すよ。
/// 場札が全部表向きで、まだ勝っていないときだけ動く（それ以外は 0）。
pub fn run_auto_finish(state: &mut GameState) -> usize {
    if !rules::can_auto_finish(state) {
        debug!("[AutoMove] auto-finish is not available");
        return 0;
    }

    let mut moves = 0;
    loop {
        let mut moved_this_pass = false;
        for tableau_index in 0..state.tableau_piles().len() {
            if move_tableau_top_to_foundation(state, tableau_index) {
                moves += 1;
                moved_this_pass = true;
            }
        }
        if move_waste_top_to_foundation(state) {
            moves += 1;
            moved_this_pass = true;
        }
        if !moved_this_pass {
            break;
        }
    }

    info!(
        "[AutoMove] auto-finish moved {} cards ({} of {} foundations complete)",
        moves,
        state.foundation_piles().iter().filter(|pile| pile.len() == CARDS_PER_SUIT).count(),
        FOUNDATION_COUNT
    );
    moves
}

// --- テストコード ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit, ALL_RANKS, ALL_SUITS};

    fn up(suit: Suit, rank: Rank) -> Card {
        Card::face_up(suit, rank)
    }

    /// 組札に A..=`through` まで積まれた状態を作るヘルパー。
    fn foundation_through(suit: Suit, through: Rank) -> Vec<Card> {
        ALL_RANKS.iter().take_while(|&&rank| rank <= through).map(|&rank| up(suit, rank)).collect()
    }

    #[test]
    fn test_find_automatic_foundation_move() {
        let mut foundations: [Vec<Card>; 4] = Default::default();
        foundations[2] = foundation_through(Suit::Heart, Rank::Two);
        let state = GameState::from_piles(Default::default(), foundations, Vec::new(), Vec::new());

        // 空の組札は番号が一番小さいところが選ばれる
        assert_eq!(
            find_automatic_foundation_move(&state, &up(Suit::Spade, Rank::Ace)),
            Some(StackType::Foundation(0))
        );
        assert_eq!(
            find_automatic_foundation_move(&state, &up(Suit::Heart, Rank::Three)),
            Some(StackType::Foundation(2)),
            "3♥ は 2♥ の上に行くはず"
        );
        assert_eq!(find_automatic_foundation_move(&state, &up(Suit::Heart, Rank::Four)), None);
        assert_eq!(find_automatic_foundation_move(&state, &up(Suit::Club, Rank::Two)), None);
        println!("Automatic Foundation Move テスト、成功！🎉");
    }

    #[test]
    fn auto_finish_drains_everything_and_wins() {
        // 組札は各スート Q まで。K は場札に3枚、捨て札に1枚。
        let foundations: [Vec<Card>; 4] = ALL_SUITS.map(|suit| foundation_through(suit, Rank::Queen));
        let mut tableau: [Vec<Card>; 7] = Default::default();
        tableau[0] = vec![up(Suit::Heart, Rank::King)];
        tableau[3] = vec![up(Suit::Diamond, Rank::King)];
        tableau[6] = vec![up(Suit::Club, Rank::King)];
        let waste = vec![up(Suit::Spade, Rank::King)];
        let mut state = GameState::from_piles(tableau, foundations, Vec::new(), waste);
        assert!(rules::can_auto_finish(&state));

        let moved = run_auto_finish(&mut state);
        assert_eq!(moved, 4);
        assert!(state.is_won(), "全部組札に行ったら勝ちのはず");
        assert!(state.tableau_piles().iter().all(|pile| pile.is_empty()));
        assert!(state.waste().is_empty());
        assert_eq!(state.check_integrity(&[]), Ok(()));
    }

    #[test]
    fn auto_finish_runs_multiple_passes() {
        // 場札0 = [5♠ 4♠ 3♠] のように、下のカードは上が消えてから動けるケース
        let mut foundations: [Vec<Card>; 4] = Default::default();
        foundations[0] = foundation_through(Suit::Spade, Rank::Two);
        let mut tableau: [Vec<Card>; 7] = Default::default();
        tableau[0] = vec![up(Suit::Spade, Rank::Five), up(Suit::Spade, Rank::Four), up(Suit::Spade, Rank::Three)];
        let waste = vec![up(Suit::Spade, Rank::Six)];
        let mut state = GameState::from_piles(tableau, foundations, Vec::new(), waste);

        let moved = run_auto_finish(&mut state);
        assert_eq!(moved, 4, "3♠,4♠,5♠ と捨て札の 6♠");
        assert_eq!(state.foundation(0).map(|p| p.len()), Some(6));
        assert!(!state.is_won());
    }

    #[test]
    fn auto_finish_refuses_with_hidden_cards() {
        let mut tableau: [Vec<Card>; 7] = Default::default();
        tableau[0] = vec![Card::new(Suit::Club, Rank::Two), up(Suit::Heart, Rank::Ace)];
        let mut state = GameState::from_piles(tableau, Default::default(), Vec::new(), Vec::new());
        let before = state.clone();

        assert_eq!(run_auto_finish(&mut state), 0, "裏向きが残っていたら動かない");
        assert_eq!(state, before);
    }
}
